//! Result aggregation
//!
//! Turns a raw frequency table into a validated, normalized view. The
//! raw counts are never mutated; normalization produces a derived
//! probability mapping whose entries sum to 1 within floating-point
//! tolerance.

use crate::error::{QftError, QftResult};
use crate::types::{Bitstring, Counts, Probability};
use std::collections::HashMap;
use std::fmt;

/// Sum of all counts in a frequency table
pub fn total_counts(counts: &Counts) -> u64 {
    counts.values().sum()
}

/// Validate a frequency table against a register width and shot count
///
/// Checks that every key is a bitstring of exactly `num_qubits`
/// characters and that the counts sum to `shots`. This is the identity
/// pass over raw engine output: a table that passes is returned to the
/// caller untouched.
pub fn validate_counts(counts: &Counts, num_qubits: usize, shots: u64) -> QftResult<()> {
    for key in counts.keys() {
        let bits = Bitstring::parse(key)?;
        if bits.len() != num_qubits {
            return Err(QftError::BitstringWidthMismatch {
                bitstring: key.clone(),
                width: num_qubits,
            });
        }
    }

    let actual = total_counts(counts);
    if actual != shots {
        return Err(QftError::ShotCountMismatch {
            expected: shots,
            actual,
        });
    }

    Ok(())
}

// ============================================================================
// Distribution
// ============================================================================

/// Normalized outcome distribution: bitstring -> probability
///
/// Read-only derived view of a frequency table. Normalizing a
/// distribution again is an identity within floating-point tolerance,
/// since its weights already sum to ~1.
#[derive(Debug, Clone, PartialEq)]
pub struct Distribution {
    probs: HashMap<String, f64>,
}

impl Distribution {
    /// Normalize a frequency table by dividing each count by the total
    ///
    /// An all-zero table cannot be normalized; that only arises from a
    /// zero shot count, which is rejected as such.
    pub fn from_counts(counts: &Counts) -> QftResult<Self> {
        let total = total_counts(counts);
        if total == 0 {
            return Err(QftError::InvalidShots(0));
        }

        let probs = counts
            .iter()
            .map(|(k, &v)| (k.clone(), v as f64 / total as f64))
            .collect();

        Ok(Self { probs })
    }

    /// Re-normalize by the current weight total (idempotent)
    pub fn normalize(&self) -> Self {
        let total: f64 = self.probs.values().sum();
        let probs = self
            .probs
            .iter()
            .map(|(k, &v)| (k.clone(), v / total))
            .collect();
        Self { probs }
    }

    /// Probability of a specific bitstring (0 if never observed)
    pub fn probability(&self, bitstring: &str) -> f64 {
        self.probs.get(bitstring).copied().unwrap_or(0.0)
    }

    /// Number of distinct outcomes
    pub fn len(&self) -> usize {
        self.probs.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.probs.is_empty()
    }

    /// Iterate over (bitstring, probability) entries
    pub fn iter(&self) -> impl Iterator<Item = (&String, &f64)> {
        self.probs.iter()
    }

    /// Sum of all probabilities (1.0 within tolerance for a valid view)
    pub fn total(&self) -> f64 {
        self.probs.values().sum()
    }

    /// Check every entry is a valid probability and the total is ~1
    pub fn validate(&self) -> QftResult<()> {
        for &p in self.probs.values() {
            Probability::new(p)?;
        }
        let total = self.total();
        if (total - 1.0).abs() > 1e-9 {
            return Err(QftError::InvalidProbability(total));
        }
        Ok(())
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<_> = self.probs.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        for (bitstring, prob) in entries {
            writeln!(f, "{}: {:.6}", bitstring, prob)?;
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample_counts() -> Counts {
        let mut counts = Counts::new();
        counts.insert("00".to_string(), 600);
        counts.insert("01".to_string(), 250);
        counts.insert("11".to_string(), 150);
        counts
    }

    #[test]
    fn test_total_counts() {
        assert_eq!(total_counts(&sample_counts()), 1000);
        assert_eq!(total_counts(&Counts::new()), 0);
    }

    #[test]
    fn test_validate_counts_ok() {
        assert!(validate_counts(&sample_counts(), 2, 1000).is_ok());
    }

    #[test]
    fn test_validate_counts_shot_mismatch() {
        assert_eq!(
            validate_counts(&sample_counts(), 2, 999),
            Err(QftError::ShotCountMismatch {
                expected: 999,
                actual: 1000
            })
        );
    }

    #[test]
    fn test_validate_counts_bad_width() {
        let mut counts = sample_counts();
        counts.insert("000".to_string(), 0);
        assert!(matches!(
            validate_counts(&counts, 2, 1000),
            Err(QftError::BitstringWidthMismatch { .. })
        ));
    }

    #[test]
    fn test_validate_counts_bad_key() {
        let mut counts = Counts::new();
        counts.insert("0x".to_string(), 10);
        assert!(matches!(
            validate_counts(&counts, 2, 10),
            Err(QftError::InvalidBitstring(_))
        ));
    }

    #[test]
    fn test_distribution_normalizes() {
        let dist = Distribution::from_counts(&sample_counts()).unwrap();
        assert_relative_eq!(dist.probability("00"), 0.6);
        assert_relative_eq!(dist.probability("01"), 0.25);
        assert_relative_eq!(dist.probability("11"), 0.15);
        assert_relative_eq!(dist.probability("10"), 0.0);
        assert!(dist.validate().is_ok());
    }

    #[test]
    fn test_distribution_empty_rejected() {
        assert_eq!(
            Distribution::from_counts(&Counts::new()),
            Err(QftError::InvalidShots(0))
        );
    }

    #[test]
    fn test_normalization_idempotent() {
        let dist = Distribution::from_counts(&sample_counts()).unwrap();
        let renormalized = dist.normalize();
        for (bitstring, &p) in dist.iter() {
            assert_relative_eq!(renormalized.probability(bitstring), p, epsilon = 1e-12);
        }
        assert_relative_eq!(renormalized.total(), 1.0, epsilon = 1e-12);
    }
}
