//! Measurement histograms.

use rand::Rng;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::statevector::Statevector;

/// Outcome bitstring → number of shots that produced it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counts {
    counts: FxHashMap<String, u64>,
}

impl Counts {
    /// Create an empty histogram.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` shots for `bitstring`.
    pub fn insert(&mut self, bitstring: impl Into<String>, count: u64) {
        *self.counts.entry(bitstring.into()).or_insert(0) += count;
    }

    /// Shots recorded for `bitstring`.
    pub fn get(&self, bitstring: &str) -> u64 {
        self.counts.get(bitstring).copied().unwrap_or(0)
    }

    /// Total number of recorded shots.
    pub fn total_shots(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Number of distinct outcomes.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no shots were recorded.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Outcomes by descending count, ties ordered by bitstring.
    pub fn sorted(&self) -> Vec<(&String, &u64)> {
        let mut entries: Vec<_> = self.counts.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for Counts {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        let mut counts = Counts::new();
        for (bitstring, count) in iter {
            counts.insert(bitstring, count);
        }
        counts
    }
}

/// Sample `shots` measurement outcomes from `state`.
pub fn sample_counts<R: Rng + ?Sized>(state: &Statevector, shots: u32, rng: &mut R) -> Counts {
    let mut counts = Counts::new();
    for _ in 0..shots {
        let outcome = state.sample(rng);
        counts.insert(state.outcome_to_bitstring(outcome), 1);
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_insert_accumulates() {
        let mut counts = Counts::new();
        counts.insert("01", 3);
        counts.insert("01", 2);
        counts.insert("10", 1);
        assert_eq!(counts.get("01"), 5);
        assert_eq!(counts.get("11"), 0);
        assert_eq!(counts.total_shots(), 6);
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn test_sorted_by_count_then_bitstring() {
        let counts: Counts = [("1010", 512), ("0101", 512), ("1111", 3)]
            .into_iter()
            .collect();
        let sorted = counts.sorted();
        assert_eq!(sorted[0].0, "0101");
        assert_eq!(sorted[1].0, "1010");
        assert_eq!(sorted[2].0, "1111");
    }

    #[test]
    fn test_sample_counts_basis_state() {
        let mut sv = Statevector::new(2);
        sv.apply_gate(qhash_ir::Gate::X, &[qhash_ir::QubitId(1)]).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let counts = sample_counts(&sv, 50, &mut rng);
        assert_eq!(counts.get("10"), 50);
        assert_eq!(counts.len(), 1);
    }

    #[test]
    fn test_counts_json() {
        let counts: Counts = [("00", 4u64)].into_iter().collect();
        let json = serde_json::to_string(&counts).unwrap();
        assert_eq!(json, r#"{"counts":{"00":4}}"#);
    }
}
