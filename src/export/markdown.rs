//! Markdown export implementation.
//!
//! Exports graph analysis results in Markdown format for documentation and reporting.

use super::{ExportData, Exporter};
use std::io::{self, Write};

/// Markdown exporter implementation.
pub struct MarkdownExporter;

impl Exporter for MarkdownExporter {
    fn export<W: Write>(&self, data: &ExportData, writer: &mut W) -> io::Result<()> {
        let report = &data.report;

        // Title
        writeln!(writer, "# Graph Analysis Report")?;
        writeln!(writer)?;
        writeln!(writer, "**Source:** {} ({})", data.source, report.kind)?;
        writeln!(writer)?;

        // Summary section
        writeln!(writer, "## Summary")?;
        writeln!(writer)?;
        writeln!(writer, "| Metric | Value |")?;
        writeln!(writer, "|--------|-------|")?;
        writeln!(writer, "| Vertices | {} |", report.vertex_count)?;
        writeln!(writer, "| Edges | {} |", report.edge_count)?;
        writeln!(writer, "| Density | {} |", data.density_label())?;
        writeln!(writer, "| Graphical | {} |", yes_no(report.graphical))?;
        writeln!(writer, "| Consistent | {} |", yes_no(report.consistent))?;
        writeln!(writer)?;

        if report.is_empty() {
            writeln!(writer, "_The graph is empty._")?;
            return Ok(());
        }

        writeln!(writer, "## Degree Sequence")?;
        writeln!(writer)?;
        let degrees: Vec<String> = report
            .degree_sequence
            .iter()
            .map(|d| d.to_string())
            .collect();
        writeln!(writer, "`[{}]`", degrees.join(", "))?;
        writeln!(writer)?;

        // Per-vertex table
        writeln!(writer, "## Vertices")?;
        writeln!(writer)?;
        writeln!(writer, "| Vertex | Out | In | Neighbors |")?;
        writeln!(writer, "|--------|-----|----|-----------|")?;
        for vertex in &report.vertices {
            let neighbors: Vec<String> = vertex
                .neighbors
                .iter()
                .map(|n| format!("{} ({:.1})", n.vertex, n.weight))
                .collect();
            writeln!(
                writer,
                "| {} | {} | {} | {} |",
                vertex.vertex,
                vertex.out_degree,
                vertex.in_degree,
                neighbors.join(", ")
            )?;
        }
        writeln!(writer)?;

        // Footer
        writeln!(writer, "---")?;
        writeln!(writer, "*Generated by graphwalk*")?;

        Ok(())
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
