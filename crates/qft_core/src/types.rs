//! Core types for the QFT sampling toolkit
//!
//! Provides fundamental type aliases and validated wrapper types
//! used throughout the workspace.

use crate::error::{QftError, QftResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// ============================================================================
// Type Aliases
// ============================================================================

/// Qubit identifier (0-indexed)
pub type QubitId = usize;

/// Classical bit identifier (0-indexed), paired with a qubit at measurement
pub type ClbitId = usize;

/// Rotation angle in radians
pub type Angle = f64;

/// Measurement counts: bitstring -> number of shots that produced it
///
/// Keys are fixed-width bitstrings. Classical bit 0 is the rightmost
/// character; the most significant classical bit is leftmost.
pub type Counts = HashMap<String, u64>;

// ============================================================================
// Probability (Validated Wrapper)
// ============================================================================

/// Probability value in range [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Probability(f64);

impl Probability {
    /// Create a new Probability with validation
    pub fn new(value: f64) -> QftResult<Self> {
        if !(0.0..=1.0).contains(&value) {
            return Err(QftError::InvalidProbability(value));
        }
        Ok(Self(value))
    }

    /// Get the probability value
    #[inline]
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Get the complement (1 - p)
    #[inline]
    pub fn complement(&self) -> f64 {
        1.0 - self.0
    }

    /// Zero probability
    pub const ZERO: Self = Self(0.0);

    /// Certainty (p = 1)
    pub const ONE: Self = Self(1.0);

    /// Half probability
    pub const HALF: Self = Self(0.5);
}

impl Default for Probability {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Probability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.0)
    }
}

impl TryFrom<f64> for Probability {
    type Error = QftError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

// ============================================================================
// Bitstring
// ============================================================================

/// Bitstring for measurement outcomes
///
/// Index 0 is the rightmost character of the rendered string, matching
/// the ordering convention of [`Counts`] keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bitstring {
    bits: Vec<bool>,
}

impl Bitstring {
    /// Create from a vector of bools (index 0 = classical bit 0)
    pub fn new(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// Create from string (e.g. "0110"), leftmost character most significant
    pub fn parse(s: &str) -> QftResult<Self> {
        let bits: Result<Vec<bool>, _> = s
            .chars()
            .rev()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                _ => Err(QftError::InvalidBitstring(s.to_string())),
            })
            .collect();
        Ok(Self { bits: bits? })
    }

    /// Create zero bitstring of given length
    pub fn zeros(n: usize) -> Self {
        Self {
            bits: vec![false; n],
        }
    }

    /// Get the number of bits
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Get bit at index (classical bit 0 = index 0)
    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.get(index).copied()
    }

    /// Convert to usize (classical bit i contributes 2^i)
    pub fn to_usize(&self) -> usize {
        self.bits
            .iter()
            .enumerate()
            .filter(|(_, &b)| b)
            .map(|(i, _)| 1 << i)
            .sum()
    }
}

impl fmt::Display for Bitstring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in self.bits.iter().rev() {
            write!(f, "{}", if b { '1' } else { '0' })?;
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
