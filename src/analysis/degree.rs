//! Degree-sequence validation.
//!
//! These functions work on plain integer sequences or on an adjacency
//! mapping and never need a [`Graph`](crate::graph::Graph) instance.

use crate::graph::AdjacencyList;

/// Tests whether `degrees` is the degree sequence of some simple undirected
/// graph, using the Havel–Hakimi reduction.
///
/// The empty sequence is graphical. A sequence with an odd sum never is.
/// The input slice is left untouched.
///
/// # Example
///
/// ```
/// use graphwalk::analysis::degree::is_graphical_sequence;
///
/// assert!(is_graphical_sequence(&[4, 3, 3, 2, 2, 2, 1, 1]));
/// assert!(!is_graphical_sequence(&[3, 3, 3, 1]));
/// assert!(is_graphical_sequence(&[]));
/// ```
pub fn is_graphical_sequence(degrees: &[usize]) -> bool {
    if degrees.is_empty() {
        return true;
    }

    // Parity from the odd entries; summing could overflow
    let odd = degrees.iter().filter(|&&d| d % 2 == 1).count();
    if odd % 2 != 0 {
        return false;
    }

    let mut remaining = degrees.to_vec();
    loop {
        remaining.sort_unstable_by(|a, b| b.cmp(a));

        let head = match remaining.first() {
            Some(&0) | None => return true,
            Some(&head) => head,
        };
        remaining.remove(0);

        if head > remaining.len() {
            return false;
        }

        for degree in remaining.iter_mut().take(head) {
            match degree.checked_sub(1) {
                Some(reduced) => *degree = reduced,
                None => return false,
            }
        }
    }
}

/// Checks that the adjacency-list lengths sum to an even number.
///
/// Necessary but not sufficient for a valid undirected degree sequence.
pub fn validate_consistency<V>(adjacency: &AdjacencyList<V>) -> bool {
    let total: usize = adjacency.values().map(Vec::len).sum();
    total % 2 == 0
}

/// Returns the adjacency-list length of every vertex, largest first.
///
/// For directed input these are out-degrees only.
pub fn extract_degree_sequence<V>(adjacency: &AdjacencyList<V>) -> Vec<usize> {
    let mut degrees: Vec<usize> = adjacency.values().map(Vec::len).collect();
    degrees.sort_unstable_by(|a, b| b.cmp(a));
    degrees
}
