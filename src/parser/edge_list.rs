//! Parser for whitespace-separated edge-list files.
//!
//! Each meaningful line holds `from to [weight]`. Blank lines and lines
//! starting with `#` are ignored, as are lines with fewer than two fields.

use std::fs;
use std::path::Path;
use tracing::debug;

use super::types::{EdgeMode, EdgeRecord};
use crate::graph::{Graph, DEFAULT_WEIGHT};

/// Errors that can occur while loading an edge list.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Failed to read the file from disk.
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    /// The third field of a line is not a number.
    #[error("Invalid weight '{value}' on line {line}")]
    InvalidWeight { line: usize, value: String },
}

/// Result type alias for parser operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Parses edge records from a string.
///
/// # Example
///
/// ```
/// use graphwalk::parser::edge_list::parse_records;
///
/// let records = parse_records("# roads\nA B 2.5\nB C\n\nC\n").unwrap();
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[0].weight, 2.5);
/// assert_eq!(records[1].weight, 1.0);
/// ```
pub fn parse_records(content: &str) -> ParseResult<Vec<EdgeRecord>> {
    let mut records = Vec::new();

    for (number, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut fields = line.split_whitespace();
        let (Some(from), Some(to)) = (fields.next(), fields.next()) else {
            debug!(line = number + 1, "skipping line with fewer than two fields");
            continue;
        };

        let weight = match fields.next() {
            Some(value) => value.parse::<f64>().map_err(|_| ParseError::InvalidWeight {
                line: number + 1,
                value: value.to_string(),
            })?,
            None => DEFAULT_WEIGHT,
        };

        records.push(EdgeRecord::weighted(from, to, weight));
    }

    Ok(records)
}

/// Inserts every record into a new graph, in file order.
pub fn build_graph(records: &[EdgeRecord], mode: EdgeMode) -> Graph<String> {
    let loops = records.iter().filter(|record| record.is_self_loop()).count();
    let arcs = match mode {
        EdgeMode::Undirected => records.len() * 2 - loops,
        EdgeMode::Directed => records.len(),
    };
    let mut graph = Graph::with_capacity(records.len(), arcs);

    for record in records {
        match mode {
            EdgeMode::Undirected => {
                graph.add_weighted_edge(record.from.clone(), record.to.clone(), record.weight)
            }
            EdgeMode::Directed => graph.add_weighted_directed_edge(
                record.from.clone(),
                record.to.clone(),
                record.weight,
            ),
        }
    }

    graph
}

/// Parses an edge list from a string into a graph.
///
/// # Example
///
/// ```
/// use graphwalk::parser::{edge_list::parse_str, EdgeMode};
///
/// let graph = parse_str("1 2\n1 3\n2 4\n", EdgeMode::Undirected).unwrap();
/// assert_eq!(graph.vertex_count(), 4);
/// assert_eq!(graph.bfs(&"1".to_string()).unwrap(), vec!["1", "2", "3", "4"]);
/// ```
pub fn parse_str(content: &str, mode: EdgeMode) -> ParseResult<Graph<String>> {
    let records = parse_records(content)?;
    let graph = build_graph(&records, mode);
    debug!(
        edges = records.len(),
        self_loops = records.iter().filter(|record| record.is_self_loop()).count(),
        vertices = graph.vertex_count(),
        ?mode,
        "edge list loaded"
    );
    Ok(graph)
}

/// Parses an edge-list file into a graph.
pub fn parse_file(path: &Path, mode: EdgeMode) -> ParseResult<Graph<String>> {
    let content = fs::read_to_string(path)?;
    debug!(path = %path.display(), "reading edge list");
    parse_str(&content, mode)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_EDGES: &str = "\
# city road map
Centro Norte 4.5
Centro\tSur 2

Norte Este
   # indented comment
Sur
";

    #[test]
    fn test_parse_records_skips_noise() {
        let records = parse_records(SAMPLE_EDGES).unwrap();

        assert_eq!(
            records,
            vec![
                EdgeRecord::weighted("Centro", "Norte", 4.5),
                EdgeRecord::weighted("Centro", "Sur", 2.0),
                EdgeRecord::new("Norte", "Este"),
            ]
        );
    }

    #[test]
    fn test_parse_records_invalid_weight() {
        let result = parse_records("a b 1.0\na c heavy\n");

        match result {
            Err(ParseError::InvalidWeight { line, value }) => {
                assert_eq!(line, 2);
                assert_eq!(value, "heavy");
            }
            other => panic!("expected InvalidWeight, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_records_ignores_extra_fields() {
        let records = parse_records("a b 3 trailing words\n").unwrap();
        assert_eq!(records, vec![EdgeRecord::weighted("a", "b", 3.0)]);
    }

    #[test]
    fn test_parse_str_undirected() {
        let graph = parse_str(SAMPLE_EDGES, EdgeMode::Undirected).unwrap();

        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.edge_count(), 6);
        assert!(!graph.has_directed_edges());
        assert_eq!(graph.out_degree(&"Norte".to_string()), Some(2));
    }

    #[test]
    fn test_parse_str_directed() {
        let graph = parse_str(SAMPLE_EDGES, EdgeMode::Directed).unwrap();

        assert_eq!(graph.edge_count(), 3);
        assert!(graph.has_directed_edges());
        assert_eq!(graph.out_degree(&"Norte".to_string()), Some(1));
        assert_eq!(graph.in_degree(&"Norte".to_string()), Some(1));
    }

    #[test]
    fn test_build_graph_self_loop_stored_once() {
        let records = parse_records("A A\nA B\n").unwrap();
        assert!(records[0].is_self_loop());
        assert!(!records[1].is_self_loop());

        let graph = build_graph(&records, EdgeMode::Undirected);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.self_loop_count(), 1);
        assert_eq!(graph.out_degree(&"A".to_string()), Some(2));
    }

    #[test]
    fn test_parse_str_empty() {
        let graph = parse_str("# nothing here\n\n", EdgeMode::Undirected).unwrap();
        assert!(graph.is_empty());
    }

    #[test]
    fn test_parse_file_missing() {
        let result = parse_file(Path::new("/nonexistent/edges.txt"), EdgeMode::Undirected);
        assert!(matches!(result, Err(ParseError::IoError(_))));
    }
}
