//! Plain-text export implementation.
//!
//! The default console report of the CLI.

use super::{ExportData, Exporter};
use std::io::{self, Write};

const RULE: &str = "==================================================";

/// Plain-text exporter implementation.
pub struct TextExporter;

impl Exporter for TextExporter {
    fn export<W: Write>(&self, data: &ExportData, writer: &mut W) -> io::Result<()> {
        let report = &data.report;

        writeln!(writer, "{}", RULE)?;
        writeln!(writer, "Graph analysis: {} ({})", data.source, report.kind)?;
        writeln!(writer, "{}", RULE)?;

        if report.is_empty() {
            writeln!(writer, "The graph is empty")?;
            return Ok(());
        }

        writeln!(writer, "Statistics:")?;
        writeln!(writer, "  - Vertices: {}", report.vertex_count)?;
        writeln!(writer, "  - Edges: {}", report.edge_count)?;
        writeln!(writer, "  - Density: {}", data.density_label())?;
        writeln!(writer)?;

        writeln!(writer, "Vertices:")?;
        for vertex in &report.vertices {
            let neighbors: Vec<String> = vertex
                .neighbors
                .iter()
                .map(|n| format!("{}({:.1})", n.vertex, n.weight))
                .collect();
            writeln!(
                writer,
                "{}: out-degree={}, in-degree={}",
                vertex.vertex, vertex.out_degree, vertex.in_degree
            )?;
            writeln!(writer, "   └─ neighbors: [{}]", neighbors.join(", "))?;
        }
        writeln!(writer)?;

        let degrees: Vec<String> = report
            .degree_sequence
            .iter()
            .map(|d| d.to_string())
            .collect();
        writeln!(writer, "Degree sequence: [{}]", degrees.join(", "))?;
        writeln!(writer, "Graphical: {}", report.graphical)?;
        writeln!(writer, "Consistent: {}", report.consistent)?;

        Ok(())
    }
}
