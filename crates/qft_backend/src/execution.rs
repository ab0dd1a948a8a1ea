//! Engine boundary types and trait
//!
//! Defines the interface a simulation engine must satisfy and the
//! result value it hands back. The core treats the engine as a black
//! box: given a circuit descriptor and a shot count, it returns a
//! frequency table. Any engine satisfying [`SimulationEngine`] is
//! interchangeable.

use qft_core::{Circuit, Counts, Distribution, QftResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Result of circuit execution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Measurement counts (bitstring -> count)
    pub counts: Counts,

    /// Number of shots executed
    pub shots: u64,

    /// Execution metadata
    pub metadata: ExecutionMetadata,
}

/// Execution metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecutionMetadata {
    /// Engine name
    pub engine: String,

    /// Execution time in milliseconds
    pub execution_time_ms: Option<u64>,

    /// Whether simulation was used
    pub simulated: bool,

    /// Seed used (if any)
    pub seed: Option<u64>,

    /// Additional info
    pub extra: HashMap<String, String>,
}

impl ExecutionResult {
    /// Create new execution result
    pub fn new(counts: Counts, shots: u64, engine: &str) -> Self {
        Self {
            counts,
            shots,
            metadata: ExecutionMetadata {
                engine: engine.to_string(),
                simulated: true,
                ..Default::default()
            },
        }
    }

    /// Get total count (equals shots for a verified result)
    pub fn total_counts(&self) -> u64 {
        qft_core::total_counts(&self.counts)
    }

    /// Get empirical probability of a specific bitstring
    pub fn probability(&self, bitstring: &str) -> f64 {
        let count = self.counts.get(bitstring).copied().unwrap_or(0);
        count as f64 / self.shots as f64
    }

    /// Get most frequent bitstring
    pub fn most_frequent(&self) -> Option<(&String, u64)> {
        self.counts
            .iter()
            .max_by_key(|(_, &count)| count)
            .map(|(bs, &count)| (bs, count))
    }

    /// Normalized outcome distribution over the counts
    pub fn distribution(&self) -> QftResult<Distribution> {
        Distribution::from_counts(&self.counts)
    }
}

impl fmt::Display for ExecutionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ExecutionResult(shots={}, unique={}, engine={})",
            self.shots,
            self.counts.len(),
            self.metadata.engine
        )
    }
}

/// Simulation engine trait: the consumed capability behind sampling
///
/// One `execute` call performs `shots` independent trials of the full
/// state evolution the circuit describes, each trial yielding one
/// outcome bitstring under Born-rule probabilities. How the engine
/// realizes that (and whether it parallelizes internally) is its own
/// concern and invisible to callers.
pub trait SimulationEngine: Send + Sync {
    /// Get engine name
    fn name(&self) -> &str;

    /// Get number of qubits the engine supports
    fn num_qubits(&self) -> usize;

    /// Execute a circuit for the given number of shots
    fn execute(&self, circuit: &Circuit, shots: u64) -> QftResult<ExecutionResult>;

    /// Check if engine is a simulator
    fn is_simulator(&self) -> bool {
        true
    }

    /// Get maximum shots per execution
    fn max_shots(&self) -> u64 {
        1_000_000
    }
}

// ============================================================================
// Tests
// ============================================================================
