//! Fluent circuit builder
//!
//! Consuming-self builder over [`Circuit`]. Validation errors raised
//! while chaining are deferred and surfaced from [`CircuitBuilder::build`],
//! so a malformed operation fails the build call rather than slipping
//! into an executor.

use crate::circuit::Circuit;
use crate::error::QftResult;
use crate::gate::Gate;
use crate::types::{Angle, ClbitId, QubitId};

/// Fluent circuit builder (consuming self pattern)
pub struct CircuitBuilder {
    circuit: Circuit,
    deferred: Option<crate::error::QftError>,
}

impl CircuitBuilder {
    // ========================================================================
    // Constructor
    // ========================================================================

    /// Create a new circuit builder
    pub fn new(num_qubits: usize) -> Self {
        Self {
            circuit: Circuit::new(num_qubits),
            deferred: None,
        }
    }

    /// Create with circuit name
    pub fn with_name(num_qubits: usize, name: impl Into<String>) -> Self {
        Self {
            circuit: Circuit::with_name(num_qubits, name),
            deferred: None,
        }
    }

    fn push(mut self, gate: Gate) -> Self {
        if self.deferred.is_none() {
            if let Err(err) = self.circuit.add_gate(gate) {
                self.deferred = Some(err);
            }
        }
        self
    }

    // ========================================================================
    // Single-Qubit Gates
    // ========================================================================

    /// Add Hadamard gate
    pub fn h(self, qubit: QubitId) -> Self {
        self.push(Gate::H(qubit))
    }

    /// Add general single-qubit rotation U(θ, φ, λ)
    pub fn u(self, qubit: QubitId, theta: Angle, phi: Angle, lambda: Angle) -> Self {
        self.push(Gate::U(qubit, theta, phi, lambda))
    }

    /// Add Hadamard layer on all qubits in increasing index order
    pub fn h_layer(mut self) -> Self {
        for i in 0..self.circuit.num_qubits() {
            self = self.h(i);
        }
        self
    }

    // ========================================================================
    // Two-Qubit Gates
    // ========================================================================

    /// Add controlled rotation CU(θ, φ, λ, γ)
    pub fn cu(
        self,
        control: QubitId,
        target: QubitId,
        theta: Angle,
        phi: Angle,
        lambda: Angle,
        gamma: Angle,
    ) -> Self {
        self.push(Gate::ControlledU {
            control,
            target,
            theta,
            phi,
            lambda,
            gamma,
        })
    }

    // ========================================================================
    // Measurement
    // ========================================================================

    /// Add measurement of one qubit into one classical bit
    pub fn measure(self, qubit: QubitId, clbit: ClbitId) -> Self {
        self.push(Gate::Measure { qubit, clbit })
    }

    /// Measure every qubit into its same-index classical bit
    pub fn measure_all(mut self) -> Self {
        for i in 0..self.circuit.num_qubits() {
            self = self.measure(i, i);
        }
        self
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build and return the circuit, surfacing the first deferred error
    pub fn build(self) -> QftResult<Circuit> {
        match self.deferred {
            Some(err) => Err(err),
            None => Ok(self.circuit),
        }
    }

    /// Get reference to current circuit state
    pub fn circuit(&self) -> &Circuit {
        &self.circuit
    }

    /// Get number of qubits
    pub fn num_qubits(&self) -> usize {
        self.circuit.num_qubits()
    }
}

// ============================================================================
// Tests
// ============================================================================
