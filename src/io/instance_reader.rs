use std::io::{BufRead, Lines};

use crate::{
    errors::InstanceError,
    graph::{Edge, Graph, NumNodes},
};

/// Reader for the line-oriented instance stream.
///
/// `V <count>` announces the vertex count of the next graph; `E {<u,v>,...}`
/// (possibly `E {}`) supplies its edges and completes it. Blank lines are
/// skipped. Every completed graph consumes its `V` line, so each instance
/// needs a fresh one.
pub struct InstanceReader<R> {
    lines: Lines<R>,
    pending_nodes: Option<NumNodes>,
}

impl<R: BufRead> InstanceReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            pending_nodes: None,
        }
    }
}

impl<R: BufRead> Iterator for InstanceReader<R> {
    type Item = Result<Graph, InstanceError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };

            match parse_line(&line) {
                Ok(None) => continue,
                Ok(Some(InstanceLine::VertexCount(n))) => self.pending_nodes = Some(n),
                Ok(Some(InstanceLine::EdgeList(edges))) => {
                    let Some(n) = self.pending_nodes.take() else {
                        return Some(Err(InstanceError::MissingVertexCount));
                    };
                    return Some(Graph::try_from_edges(n, edges).map_err(Into::into));
                }
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum InstanceLine {
    VertexCount(NumNodes),
    EdgeList(Vec<Edge>),
}

fn parse_line(line: &str) -> Result<Option<InstanceLine>, InstanceError> {
    let mut chars = line.trim().chars();
    let Some(directive) = chars.next() else {
        return Ok(None);
    };
    let payload = chars.as_str().trim();

    match directive {
        'V' => payload
            .parse()
            .map(|n| Some(InstanceLine::VertexCount(n)))
            .map_err(|_| InstanceError::MalformedVertexCount(payload.to_string())),
        'E' => parse_edge_list(payload).map(|edges| Some(InstanceLine::EdgeList(edges))),
        other => Err(InstanceError::UnknownDirective(other)),
    }
}

/// Parses `{<u1,v1>,<u2,v2>,...}`. Splitting on every comma yields two tokens
/// per edge: `<u` and `v>`.
fn parse_edge_list(payload: &str) -> Result<Vec<Edge>, InstanceError> {
    let malformed = || InstanceError::MalformedEdgeList(payload.to_string());

    let inner = payload
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
        .ok_or_else(malformed)?
        .trim();

    if inner.is_empty() {
        return Ok(Vec::new());
    }

    let tokens: Vec<&str> = inner.split(',').map(str::trim).collect();
    if tokens.len() % 2 != 0 {
        return Err(malformed());
    }

    let mut edges = Vec::with_capacity(tokens.len() / 2);
    for pair in tokens.chunks_exact(2) {
        let u = pair[0]
            .strip_prefix('<')
            .and_then(|t| t.trim().parse().ok())
            .ok_or_else(malformed)?;
        let v = pair[1]
            .strip_suffix('>')
            .and_then(|t| t.trim().parse().ok())
            .ok_or_else(malformed)?;
        edges.push(Edge(u, v));
    }

    Ok(edges)
}
