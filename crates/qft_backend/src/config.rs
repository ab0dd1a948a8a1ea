//! Sampling configuration
//!
//! The three inputs an end-to-end QFT sampling run needs, validated up
//! front so configuration errors never reach circuit construction or
//! the engine.

use crate::execution::ExecutionResult;
use crate::executor::SamplingExecutor;
use crate::simulator::StatevectorSimulator;
use qft_core::{qft_circuit, QftError, QftResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Configuration for one QFT sampling run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SamplingConfig {
    /// Number of qubits
    pub num_qubits: usize,

    /// Number of shots
    pub shots: u64,

    /// Random seed (None for entropy)
    pub seed: Option<u64>,
}

impl SamplingConfig {
    /// Create a new configuration
    pub fn new(num_qubits: usize, shots: u64) -> Self {
        Self {
            num_qubits,
            shots,
            seed: None,
        }
    }

    /// Set seed for reproducibility
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> QftResult<()> {
        if self.num_qubits == 0 {
            return Err(QftError::InvalidQubitCount(0));
        }
        if self.shots == 0 {
            return Err(QftError::InvalidShots(0));
        }
        Ok(())
    }

    /// Build the QFT circuit and sample it on the state-vector engine
    pub fn run(&self) -> QftResult<ExecutionResult> {
        self.validate()?;

        let circuit = qft_circuit(self.num_qubits)?;
        let mut engine = StatevectorSimulator::new(self.num_qubits);
        if let Some(seed) = self.seed {
            engine = engine.with_seed(seed);
        }

        SamplingExecutor::run(&circuit, &engine, self.shots)
    }
}

impl Default for SamplingConfig {
    /// The reference configuration: 5 qubits, 4096 shots
    fn default() -> Self {
        Self::new(5, 4096)
    }
}

impl fmt::Display for SamplingConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SamplingConfig(qubits={}, shots={}, seed={:?})",
            self.num_qubits, self.shots, self.seed
        )
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SamplingConfig::default();
        assert_eq!(config.num_qubits, 5);
        assert_eq!(config.shots, 4096);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_configs() {
        assert_eq!(
            SamplingConfig::new(0, 100).validate(),
            Err(QftError::InvalidQubitCount(0))
        );
        assert_eq!(
            SamplingConfig::new(3, 0).validate(),
            Err(QftError::InvalidShots(0))
        );
    }

    #[test]
    fn test_invalid_config_blocks_run() {
        let err = SamplingConfig::new(0, 4096).run().unwrap_err();
        assert!(err.is_configuration_error());
    }

    #[test]
    fn test_end_to_end_run() {
        let result = SamplingConfig::default().with_seed(42).run().unwrap();

        // 5-qubit register: at most 32 distinct outcomes, all width 5,
        // counts summing exactly to the shot total
        assert_eq!(result.total_counts(), 4096);
        assert!(result.counts.len() <= 32);
        for key in result.counts.keys() {
            assert_eq!(key.len(), 5);
        }
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = SamplingConfig::new(4, 1024).with_seed(7);
        let json = serde_json::to_string(&config).unwrap();
        let parsed: SamplingConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, parsed);
    }
}
