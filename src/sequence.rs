/*!
# Degree Sequences

A degree sequence lists one intended degree per vertex; index `i` becomes node `i`.
A sequence is *graphical* if some simple graph (no loops, no parallel edges) has exactly
these degrees. [`is_graphical`] decides this with the Havel–Hakimi reduction;
[`HavelHakimi`](crate::gens::HavelHakimi) runs the same reduction to build such a graph.

Entries are `i64` so that malformed input (negative degrees) can be represented and rejected
instead of failing at conversion time.
*/

use itertools::Itertools;
use tracing::debug;

/// Decision procedure for realizability of a degree sequence.
///
/// Works on a sorted copy and never touches `sequence` itself. The empty sequence
/// (and any all-zero sequence) is graphical.
pub fn is_graphical(sequence: &[i64]) -> bool {
    if let Some(&d) = sequence.iter().find(|&&d| d < 0) {
        debug!(degree = d, "sequence rejected: negative degree");
        return false;
    }

    // bounds every entry by `len - 1`, so the sum below cannot overflow
    let max_degree = sequence.len().saturating_sub(1) as u64;
    if let Some(&d) = sequence.iter().find(|&&d| d as u64 > max_degree) {
        debug!(degree = d, max_degree, "sequence rejected: degree exceeds vertex count");
        return false;
    }

    if sequence.degree_sum() % 2 != 0 {
        debug!(sum = sequence.degree_sum(), "sequence rejected: odd degree sum");
        return false;
    }

    let mut work = sequence
        .iter()
        .copied()
        .filter(|&d| d > 0)
        .sorted_unstable_by(|a, b| b.cmp(a))
        .collect_vec();

    while !work.is_empty() {
        let d = work.remove(0);
        if d as usize > work.len() {
            debug!(
                degree = d,
                remaining = work.len(),
                "sequence rejected: degree exceeds remaining vertices"
            );
            return false;
        }

        for x in &mut work[..d as usize] {
            *x -= 1;
            if *x < 0 {
                debug!("sequence rejected: degree dropped below zero");
                return false;
            }
        }

        work.retain(|&x| x > 0);
        work.sort_unstable_by(|a, b| b.cmp(a));
    }

    true
}

/// Extension methods on degree sequences
pub trait GraphicalSequence {
    /// See [`is_graphical`]
    fn is_graphical(&self) -> bool;

    /// Sum of all entries; twice the number of edges of any realizing graph.
    /// Saturates at the bounds of `i64`.
    fn degree_sum(&self) -> i64;
}

impl GraphicalSequence for [i64] {
    fn is_graphical(&self) -> bool {
        is_graphical(self)
    }

    fn degree_sum(&self) -> i64 {
        self.iter().fold(0i64, |sum, &d| sum.saturating_add(d))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn examples() {
        assert!(is_graphical(&[3, 3, 2, 2, 1, 1]));
        assert!(!is_graphical(&[3, 3, 3]));
        assert!(is_graphical(&[2, 2, 2]));
        assert!(is_graphical(&[]));
        assert!(is_graphical(&[0, 0, 0]));
        assert!(is_graphical(&[1, 1]));
    }

    #[test]
    fn even_sum_but_not_graphical() {
        // a vertex cannot have more neighbors than there are other vertices
        assert!(!is_graphical(&[4, 1, 1, 0]));
        assert!(!is_graphical(&[3, 3, 1, 1]));
        assert!(!is_graphical(&[2, 0]));
        assert!(!is_graphical(&[2]));
    }

    #[test]
    fn negative_degrees_are_rejected() {
        assert!(!is_graphical(&[-1, 1]));
        assert!(!is_graphical(&[2, 2, -2, 2]));
    }

    #[test]
    fn huge_degrees_are_rejected() {
        assert!(!is_graphical(&[i64::MAX, i64::MAX]));
        assert!(!is_graphical(&[i64::MAX - 1, 0]));
        assert!(!is_graphical(&[3_000_000_000]));
        assert!(!is_graphical(&[i64::MAX, 1, 1]));

        assert_eq!([i64::MAX, i64::MAX].degree_sum(), i64::MAX);
        assert_eq!([i64::MIN, -1].degree_sum(), i64::MIN);
    }

    #[test]
    fn odd_sum_is_never_graphical() {
        for seq in [vec![1i64], vec![1, 1, 1], vec![3, 2, 2, 2, 2], vec![5, 5, 5, 5, 5, 4, 0]] {
            assert_eq!(seq.degree_sum() % 2, 1);
            assert!(!seq.is_graphical());
        }
    }

    #[test]
    fn input_is_not_modified() {
        let seq: Vec<i64> = vec![1, 3, 2, 3, 1, 2];
        let copy = seq.clone();
        assert!(seq.is_graphical());
        assert_eq!(seq, copy);
    }

    #[test]
    fn complete_and_regular_sequences() {
        for n in 1..10i64 {
            assert!(is_graphical(&vec![n - 1; n as usize]));
            assert!(!is_graphical(&vec![n; n as usize]));
        }
        // the Petersen graph is 3-regular on 10 vertices
        assert!(is_graphical(&[3; 10]));
    }
}
