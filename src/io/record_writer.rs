use std::io::Write;

use serde::Serialize;

use crate::graph::NumNodes;

/// One aggregated row per processed graph: how much larger the two greedy
/// covers were than the exact one, and how long each method ran.
///
/// Ratios are `NaN` when the exact search came back empty-handed or when the
/// graph had no edges (0/0); the sink renders that verbatim instead of
/// substituting a default.
#[derive(Clone, Debug, Serialize)]
pub struct RunRecord {
    pub vertices: NumNodes,
    pub approx_deg_ratio: f64,
    pub approx_edge_ratio: f64,
    pub sat_time_ms: f64,
    pub approx_deg_time_ms: f64,
    pub approx_edge_time_ms: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordFormat {
    Csv,
    Json,
}

const CSV_HEADER: &str =
    "vertices,approx-deg-ratio,approx-edge-ratio,sat-time-ms,approx-deg-time-ms,approx-edge-time-ms";

/// Append-only record sink. CSV output starts with the header row even if no
/// record ever follows; JSON output is one object per line.
pub struct RecordWriter<W> {
    writer: W,
    format: RecordFormat,
}

impl<W: Write> RecordWriter<W> {
    pub fn try_new(mut writer: W, format: RecordFormat) -> std::io::Result<Self> {
        if format == RecordFormat::Csv {
            writeln!(writer, "{CSV_HEADER}")?;
        }
        Ok(Self { writer, format })
    }

    /// Writes one record and flushes it through, so the sink stays complete
    /// while the process keeps running.
    pub fn append(&mut self, record: &RunRecord) -> std::io::Result<()> {
        match self.format {
            RecordFormat::Csv => writeln!(
                self.writer,
                "{},{},{},{},{},{}",
                record.vertices,
                record.approx_deg_ratio,
                record.approx_edge_ratio,
                record.sat_time_ms,
                record.approx_deg_time_ms,
                record.approx_edge_time_ms,
            )?,
            // non-finite ratios become null here
            RecordFormat::Json => {
                serde_json::to_writer(&mut self.writer, record)?;
                writeln!(self.writer)?;
            }
        }

        self.writer.flush()
    }
}
