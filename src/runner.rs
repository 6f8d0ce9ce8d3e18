use std::{
    io::Write,
    thread,
    time::{Duration, Instant},
};

use itertools::Itertools;
use log::info;

use crate::{
    errors::OracleError,
    exact::{ExactOutcome, find_minimum_cover},
    graph::Graph,
    heuristic::{approx_by_edge_matching, approx_by_max_degree},
    io::RunRecord,
    utils::VertexCover,
};

/// A value together with the wall-clock time its producer took. Timing is
/// taken by the worker itself, from its own start to its own completion.
#[derive(Clone, Debug)]
pub struct Timed<T> {
    pub value: T,
    pub elapsed: Duration,
}

fn timed<T>(run: impl FnOnce() -> T) -> Timed<T> {
    let start = Instant::now();
    let value = run();
    Timed {
        value,
        elapsed: start.elapsed(),
    }
}

/// All three results for one graph.
#[derive(Clone, Debug)]
pub struct RoundOutcome {
    pub exact: Timed<ExactOutcome>,
    pub by_degree: Timed<VertexCover>,
    pub by_edge: Timed<VertexCover>,
}

/// Runs the exact search and both approximations on one graph snapshot, each
/// on its own thread, and joins all of them before returning. The join is
/// what lets the caller install the next graph without any worker of this
/// round still reading the current one.
pub fn run_round(graph: &Graph, budget: Duration) -> Result<RoundOutcome, OracleError> {
    thread::scope(|scope| {
        let exact = scope.spawn(|| timed(|| find_minimum_cover(graph, budget)));
        let by_degree = scope.spawn(|| timed(|| approx_by_max_degree(graph)));
        let by_edge = scope.spawn(|| timed(|| approx_by_edge_matching(graph)));

        let exact = exact.join().expect("exact worker panicked");
        let by_degree = by_degree.join().expect("degree worker panicked");
        let by_edge = by_edge.join().expect("edge worker panicked");

        info!(
            "round done: sat {:.1?}, degree {:.1?}, edge {:.1?}",
            exact.elapsed, by_degree.elapsed, by_edge.elapsed
        );

        Ok(RoundOutcome {
            exact: Timed {
                value: exact.value?,
                elapsed: exact.elapsed,
            },
            by_degree,
            by_edge,
        })
    })
}

impl RoundOutcome {
    /// Prints one line per non-empty cover: the method label followed by the
    /// comma-separated sorted vertex ids.
    pub fn write_report<W: Write>(&self, mut writer: W) -> std::io::Result<()> {
        let labeled = [
            ("CNF-SAT-VC", self.exact.value.cover()),
            ("APPROX-DEG-VC", Some(&self.by_degree.value)),
            ("APPROX-EDGE-VC", Some(&self.by_edge.value)),
        ];

        for (label, cover) in labeled {
            if let Some(cover) = cover
                && !cover.is_empty()
            {
                writeln!(writer, "{label}: {}", cover.iter().join(","))?;
            }
        }

        Ok(())
    }

    pub fn to_record(&self, graph: &Graph) -> RunRecord {
        let exact_size = self.exact.value.size();

        RunRecord {
            vertices: graph.number_of_nodes(),
            approx_deg_ratio: ratio(self.by_degree.value.len(), exact_size),
            approx_edge_ratio: ratio(self.by_edge.value.len(), exact_size),
            sat_time_ms: millis(self.exact.elapsed),
            approx_deg_time_ms: millis(self.by_degree.elapsed),
            approx_edge_time_ms: millis(self.by_edge.elapsed),
        }
    }
}

/// 0/0 (edgeless graph) and a missing exact size both yield NaN; the record
/// sink passes that through.
fn ratio(approx_size: usize, exact_size: Option<usize>) -> f64 {
    match exact_size {
        Some(exact) => approx_size as f64 / exact as f64,
        None => f64::NAN,
    }
}

fn millis(elapsed: Duration) -> f64 {
    elapsed.as_secs_f64() * 1e3
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::graph::Edge;
    use crate::testing::random_instance_stream;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    const GENEROUS: Duration = Duration::from_secs(60);

    #[test]
    fn path_round() {
        let graph = Graph::try_from_edges(4, [Edge(1, 2), Edge(2, 3), Edge(3, 4)]).unwrap();
        let outcome = run_round(&graph, GENEROUS).unwrap();

        assert_eq!(outcome.exact.value.size(), Some(2));
        assert!(outcome.by_degree.value.is_valid_cover(graph.edges()));
        assert!(outcome.by_edge.value.is_valid_cover(graph.edges()));

        let record = outcome.to_record(&graph);
        assert_eq!(record.vertices, 4);
        assert!(record.approx_deg_ratio >= 1.0);
        assert!(record.approx_edge_ratio >= 1.0);
        assert!(record.sat_time_ms >= 0.0);

        let mut report = Vec::new();
        outcome.write_report(&mut report).unwrap();
        let report = String::from_utf8(report).unwrap();
        assert_eq!(report.lines().count(), 3);
        assert!(report.contains("CNF-SAT-VC: "));
        assert!(report.contains("APPROX-DEG-VC: "));
        assert!(report.contains("APPROX-EDGE-VC: "));
    }

    #[test]
    fn edgeless_round_has_nan_ratios_and_empty_report() {
        let graph = Graph::try_from_edges(6, []).unwrap();
        let outcome = run_round(&graph, GENEROUS).unwrap();

        assert_eq!(outcome.exact.value.size(), Some(0));
        assert!(outcome.by_degree.value.is_empty());
        assert!(outcome.by_edge.value.is_empty());

        let record = outcome.to_record(&graph);
        assert!(record.approx_deg_ratio.is_nan());
        assert!(record.approx_edge_ratio.is_nan());

        let mut report = Vec::new();
        outcome.write_report(&mut report).unwrap();
        assert!(report.is_empty());
    }

    #[test]
    fn zero_budget_round_survives() {
        let mut rng = Pcg64Mcg::seed_from_u64(0xfade);
        let graph = crate::graph::random_gnp(&mut rng, 25, 0.4);
        let outcome = run_round(&graph, Duration::ZERO).unwrap();

        assert!(outcome.exact.value.cover().is_none());
        assert!(outcome.to_record(&graph).approx_deg_ratio.is_nan());

        // the approximations are untouched by the sat budget
        assert!(outcome.by_degree.value.is_valid_cover(graph.edges()));
        assert!(outcome.by_edge.value.is_valid_cover(graph.edges()));
    }

    #[test]
    fn exact_never_beats_the_heuristics() {
        let mut rng = Pcg64Mcg::seed_from_u64(0x121612873);
        for graph in random_instance_stream(&mut rng, 9).take(15) {
            let outcome = run_round(&graph, GENEROUS).unwrap();
            let exact_size = outcome.exact.value.size().unwrap();

            for approx in [&outcome.by_degree.value, &outcome.by_edge.value] {
                assert!(approx.is_valid_cover(graph.edges()));
                assert!(exact_size <= approx.len());

                let sorted: Vec<_> = approx.iter().collect();
                assert!(sorted.windows(2).all(|w| w[0] < w[1]));
            }
        }
    }

    #[test]
    fn repeated_rounds_on_the_same_graph_agree() {
        let graph = Graph::try_from_edges(
            6,
            [Edge(1, 2), Edge(2, 3), Edge(3, 4), Edge(4, 5), Edge(5, 6), Edge(2, 5)],
        )
        .unwrap();

        let first = run_round(&graph, GENEROUS).unwrap();
        for _ in 0..3 {
            let again = run_round(&graph, GENEROUS).unwrap();
            assert_eq!(again.exact.value.size(), first.exact.value.size());
            assert_eq!(again.by_degree.value, first.by_degree.value);
            assert_eq!(again.by_edge.value, first.by_edge.value);
        }
    }
}
