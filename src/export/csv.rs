//! CSV export implementation.
//!
//! Exports one row per vertex for spreadsheet use.

use super::{ExportData, Exporter};
use std::io::{self, Write};

/// CSV exporter implementation.
pub struct CsvExporter;

impl CsvExporter {
    /// Escape a field value for CSV format.
    ///
    /// Wraps the value in quotes if it contains commas, quotes, or newlines.
    fn escape_field(value: &str) -> String {
        if value.contains(',') || value.contains('"') || value.contains('\n') {
            format!("\"{}\"", value.replace('"', "\"\""))
        } else {
            value.to_string()
        }
    }
}

impl Exporter for CsvExporter {
    fn export<W: Write>(&self, data: &ExportData, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "vertex,out_degree,in_degree,neighbors")?;

        for vertex in &data.report.vertices {
            // Neighbors are space-separated "label:weight" pairs in insertion order
            let neighbors: Vec<String> = vertex
                .neighbors
                .iter()
                .map(|n| format!("{}:{}", n.vertex, n.weight))
                .collect();

            writeln!(
                writer,
                "{},{},{},{}",
                Self::escape_field(&vertex.vertex),
                vertex.out_degree,
                vertex.in_degree,
                Self::escape_field(&neighbors.join(" "))
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::GraphReport;
    use crate::export::fixtures::sample_data;
    use crate::graph::Graph;

    #[test]
    fn test_csv_export_basic() {
        let data = sample_data();
        let mut output = Vec::new();

        CsvExporter.export(&data, &mut output).unwrap();

        let csv_str = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = csv_str.lines().collect();

        // Header + 4 vertices
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "vertex,out_degree,in_degree,neighbors");
        assert_eq!(lines[1], "a,2,2,b:2.5 c:1");
        assert_eq!(lines[4], "d,1,1,c:1");
    }

    #[test]
    fn test_csv_escape_field() {
        assert_eq!(CsvExporter::escape_field("simple"), "simple");
        assert_eq!(CsvExporter::escape_field("has,comma"), "\"has,comma\"");
        assert_eq!(CsvExporter::escape_field("has\"quote"), "\"has\"\"quote\"");
    }

    #[test]
    fn test_csv_export_special_labels() {
        let mut graph = Graph::new();
        graph.add_directed_edge("Av. Norte, 12", "Sur");

        let data = ExportData::new("t", GraphReport::from_graph(&graph));
        let mut output = Vec::new();
        CsvExporter.export(&data, &mut output).unwrap();

        let csv_str = String::from_utf8(output).unwrap();
        assert!(csv_str.contains("\"Av. Norte, 12\",1,0,Sur:1"));
    }
}
