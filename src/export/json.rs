//! JSON export implementation.
//!
//! Exports graph analysis results in JSON format for machine-readable output.

use super::{ExportData, Exporter};
use crate::analysis::{GraphKind, VertexSummary};
use serde::Serialize;
use std::io::{self, Write};

/// JSON exporter implementation.
pub struct JsonExporter;

/// Summary statistics for JSON output.
#[derive(Serialize)]
struct JsonSummary<'a> {
    kind: GraphKind,
    vertices: usize,
    edges: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    density: Option<f64>,
    degree_sequence: &'a [usize],
    graphical: bool,
    consistent: bool,
}

/// Root JSON export structure.
#[derive(Serialize)]
struct JsonExport<'a> {
    source: &'a str,
    summary: JsonSummary<'a>,
    vertices: &'a [VertexSummary],
}

impl Exporter for JsonExporter {
    fn export<W: Write>(&self, data: &ExportData, writer: &mut W) -> io::Result<()> {
        let report = &data.report;

        let export = JsonExport {
            source: &data.source,
            summary: JsonSummary {
                kind: report.kind,
                vertices: report.vertex_count,
                edges: report.edge_count,
                density: report.density,
                degree_sequence: &report.degree_sequence,
                graphical: report.graphical,
                consistent: report.consistent,
            },
            vertices: &report.vertices,
        };

        let json = serde_json::to_string_pretty(&export)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        writeln!(writer, "{}", json)
    }
}
