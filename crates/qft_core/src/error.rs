//! Error types for the QFT sampling toolkit
//!
//! Three families of failures, each surfaced synchronously to the
//! caller of the failing operation: configuration errors at build/run
//! entry, circuit errors at circuit construction, and execution errors
//! at the engine boundary.

// Error variant fields are self-documenting via error messages
#![allow(missing_docs)]

use thiserror::Error;

/// Main error type for QFT construction and sampling
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QftError {
    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Qubit count must be positive
    #[error("Invalid qubit count {0}: must be at least 1")]
    InvalidQubitCount(usize),

    /// Shot count must be positive
    #[error("Invalid shot count {0}: must be at least 1")]
    InvalidShots(u64),

    // ========================================================================
    // Circuit Errors
    // ========================================================================
    /// Gate on non-existent qubit
    #[error("Gate references qubit {qubit} but circuit has only {num_qubits} qubits")]
    QubitOutOfRange { qubit: usize, num_qubits: usize },

    /// Measurement into non-existent classical bit
    #[error("Measurement targets classical bit {clbit} but register has only {num_qubits} bits")]
    ClbitOutOfRange { clbit: usize, num_qubits: usize },

    /// Controlled gate with identical control and target
    #[error("Controlled gate control and target are both qubit {qubit}")]
    ControlTargetOverlap { qubit: usize },

    /// Non-finite rotation angle
    #[error("Invalid angle {0}: must be finite")]
    InvalidAngle(f64),

    /// Empty circuit
    #[error("Circuit is empty")]
    EmptyCircuit,

    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// Invalid bitstring format
    #[error("Invalid bitstring '{0}': must contain only '0' and '1'")]
    InvalidBitstring(String),

    /// Probability value out of range [0, 1]
    #[error("Invalid probability {0}: must be in range [0, 1]")]
    InvalidProbability(f64),

    /// Frequency-table key of the wrong width
    #[error("Bitstring '{bitstring}' does not match register width {width}")]
    BitstringWidthMismatch { bitstring: String, width: usize },

    // ========================================================================
    // Execution Errors
    // ========================================================================
    /// Simulation engine failed or rejected the circuit
    #[error("Engine error: {0}")]
    EngineError(String),

    /// Engine returned a frequency table whose counts do not sum to shots
    #[error("Engine returned {actual} total counts, expected {expected}")]
    ShotCountMismatch { expected: u64, actual: u64 },

    // ========================================================================
    // I/O Errors
    // ========================================================================
    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(String),
}

/// Result type alias for QFT operations
pub type QftResult<T> = Result<T, QftError>;

// ============================================================================
// Error Conversion Helpers
// ============================================================================

impl From<serde_json::Error> for QftError {
    fn from(err: serde_json::Error) -> Self {
        QftError::JsonError(err.to_string())
    }
}

// ============================================================================
// Error Helpers
// ============================================================================

impl QftError {
    /// Check if error is a configuration error (invalid caller input)
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            QftError::InvalidQubitCount(_) | QftError::InvalidShots(_)
        )
    }

    /// Check if error is a circuit construction error
    pub fn is_circuit_error(&self) -> bool {
        matches!(
            self,
            QftError::QubitOutOfRange { .. }
                | QftError::ClbitOutOfRange { .. }
                | QftError::ControlTargetOverlap { .. }
                | QftError::InvalidAngle(_)
                | QftError::EmptyCircuit
        )
    }

    /// Check if error came from the engine boundary
    pub fn is_execution_error(&self) -> bool {
        matches!(
            self,
            QftError::EngineError(_) | QftError::ShotCountMismatch { .. }
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
    fn test_error_display() {
        let err = QftError::InvalidQubitCount(0);
        assert!(err.to_string().contains('0'));

        let err = QftError::QubitOutOfRange {
            qubit: 7,
            num_qubits: 5,
        };
        assert!(err.to_string().contains('7'));
        assert!(err.to_string().contains('5'));
    }

    #[test]
    fn test_is_configuration_error() {
        assert!(QftError::InvalidQubitCount(0).is_configuration_error());
        assert!(QftError::InvalidShots(0).is_configuration_error());
        assert!(!QftError::EmptyCircuit.is_configuration_error());
    }

    #[test]
    fn test_is_circuit_error() {
        assert!(QftError::ControlTargetOverlap { qubit: 2 }.is_circuit_error());
        assert!(!QftError::EngineError("down".into()).is_circuit_error());
    }

    #[test]
    fn test_is_execution_error() {
        assert!(QftError::ShotCountMismatch {
            expected: 1024,
            actual: 1000
        }
        .is_execution_error());
        assert!(!QftError::InvalidShots(0).is_execution_error());
    }
}
