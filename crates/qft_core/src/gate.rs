//! Gate operations for QFT circuits
//!
//! The QFT decomposition needs only three kinds of operation: the
//! Hadamard, a controlled single-qubit rotation, and measurement.
//! The uncontrolled rotation `U` is kept alongside them since
//! `ControlledU` is its two-qubit extension.

use crate::types::{Angle, ClbitId, QubitId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Gate operation enumeration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Gate {
    /// Hadamard gate
    H(QubitId),

    /// General single-qubit rotation U(θ, φ, λ)
    U(QubitId, Angle, Angle, Angle),

    /// Controlled single-qubit rotation with global phase,
    /// applied to `target` when `control` is in |1⟩
    ///
    /// `theta`, `phi` and `lambda` are the Euler-like angles of the
    /// underlying rotation; `gamma` is a global phase on the
    /// controlled block. The QFT construction uses only `theta`; the
    /// other three stay explicit parameters rather than being
    /// hardcoded to zero.
    ControlledU {
        /// Control qubit
        control: QubitId,
        /// Target qubit
        target: QubitId,
        /// Rotation angle θ
        theta: Angle,
        /// Rotation angle φ
        phi: Angle,
        /// Rotation angle λ
        lambda: Angle,
        /// Global phase γ on the controlled block
        gamma: Angle,
    },

    /// Qubit readout into a classical bit
    Measure {
        /// Measured qubit
        qubit: QubitId,
        /// Classical bit receiving the outcome
        clbit: ClbitId,
    },
}

impl Gate {
    // ========================================================================
    // Gate Properties
    // ========================================================================

    /// Get qubits involved in this gate
    pub fn qubits(&self) -> Vec<QubitId> {
        match self {
            Gate::H(q) | Gate::U(q, _, _, _) | Gate::Measure { qubit: q, .. } => vec![*q],
            Gate::ControlledU {
                control, target, ..
            } => vec![*control, *target],
        }
    }

    /// Get rotation angles carried by this gate
    pub fn angles(&self) -> Vec<Angle> {
        match self {
            Gate::H(_) | Gate::Measure { .. } => vec![],
            Gate::U(_, theta, phi, lambda) => vec![*theta, *phi, *lambda],
            Gate::ControlledU {
                theta,
                phi,
                lambda,
                gamma,
                ..
            } => vec![*theta, *phi, *lambda, *gamma],
        }
    }

    /// Check if gate is single-qubit
    pub fn is_single_qubit(&self) -> bool {
        matches!(self, Gate::H(_) | Gate::U(_, _, _, _))
    }

    /// Check if gate is two-qubit
    pub fn is_two_qubit(&self) -> bool {
        matches!(self, Gate::ControlledU { .. })
    }

    /// Check if gate is parameterized
    pub fn is_parameterized(&self) -> bool {
        matches!(self, Gate::U(_, _, _, _) | Gate::ControlledU { .. })
    }

    /// Check if gate is measurement
    pub fn is_measurement(&self) -> bool {
        matches!(self, Gate::Measure { .. })
    }

    /// Get gate name
    pub fn name(&self) -> &'static str {
        match self {
            Gate::H(_) => "h",
            Gate::U(_, _, _, _) => "u",
            Gate::ControlledU { .. } => "cu",
            Gate::Measure { .. } => "measure",
        }
    }

    /// Convert to an OpenQASM-style line
    pub fn to_qasm(&self) -> String {
        match self {
            Gate::H(q) => format!("h q[{}];", q),
            Gate::U(q, theta, phi, lambda) => {
                format!("u({},{},{}) q[{}];", theta, phi, lambda, q)
            }
            Gate::ControlledU {
                control,
                target,
                theta,
                phi,
                lambda,
                gamma,
            } => format!(
                "cu({},{},{},{}) q[{}],q[{}];",
                theta, phi, lambda, gamma, control, target
            ),
            Gate::Measure { qubit, clbit } => format!("measure q[{}] -> c[{}];", qubit, clbit),
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_qasm())
    }
}

// ============================================================================
// Tests
// ============================================================================
