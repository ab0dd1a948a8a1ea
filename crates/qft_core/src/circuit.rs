//! Circuit descriptor
//!
//! An ordered, immutable sequence of gate operations over a quantum
//! register with a paired classical register of the same width.
//! Validation happens at construction: a `Circuit` handed to an
//! executor is always well-formed.

use crate::error::{QftError, QftResult};
use crate::gate::Gate;
use crate::types::{ClbitId, QubitId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Quantum circuit: register width plus an ordered gate sequence
///
/// Operations apply in sequence order, each acting on the evolving
/// joint state. Once built, a circuit is never mutated; executors take
/// it by shared reference and it is safe to share across concurrent
/// executions.
///
/// Bit-ordering convention: classical bit `i` records qubit `i`, and
/// in a rendered outcome bitstring classical bit 0 is the rightmost
/// character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    /// Number of qubits (and classical bits)
    num_qubits: usize,

    /// Gate sequence
    ops: Vec<Gate>,

    /// Optional circuit name
    name: Option<String>,
}

impl Circuit {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create a new empty circuit
    pub fn new(num_qubits: usize) -> Self {
        Self {
            num_qubits,
            ops: Vec::new(),
            name: None,
        }
    }

    /// Create a circuit with a name
    pub fn with_name(num_qubits: usize, name: impl Into<String>) -> Self {
        Self {
            num_qubits,
            ops: Vec::new(),
            name: Some(name.into()),
        }
    }

    /// Create from a vector of gates, validating every operation
    pub fn from_ops(num_qubits: usize, ops: Vec<Gate>) -> QftResult<Self> {
        let mut circuit = Self::new(num_qubits);
        circuit.add_gates(ops)?;
        Ok(circuit)
    }

    // ========================================================================
    // Basic Operations
    // ========================================================================

    /// Append a gate, rejecting malformed operations before execution
    /// can ever see them
    pub fn add_gate(&mut self, gate: Gate) -> QftResult<()> {
        self.validate_gate(&gate)?;
        self.ops.push(gate);
        Ok(())
    }

    /// Append multiple gates
    pub fn add_gates(&mut self, gates: impl IntoIterator<Item = Gate>) -> QftResult<()> {
        for gate in gates {
            self.add_gate(gate)?;
        }
        Ok(())
    }

    /// Get number of qubits
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Get the operation sequence
    pub fn ops(&self) -> &[Gate] {
        &self.ops
    }

    /// Get circuit name
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Check if circuit is empty
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    // ========================================================================
    // Circuit Analysis
    // ========================================================================

    /// Get total gate count
    pub fn gate_count(&self) -> usize {
        self.ops.len()
    }

    /// Count single-qubit gates
    pub fn count_1q(&self) -> usize {
        self.ops.iter().filter(|g| g.is_single_qubit()).count()
    }

    /// Count two-qubit gates
    pub fn count_2q(&self) -> usize {
        self.ops.iter().filter(|g| g.is_two_qubit()).count()
    }

    /// Count measurement operations
    pub fn count_measurements(&self) -> usize {
        self.ops.iter().filter(|g| g.is_measurement()).count()
    }

    /// Count parameterized gates
    pub fn count_parameterized(&self) -> usize {
        self.ops.iter().filter(|g| g.is_parameterized()).count()
    }

    /// Calculate circuit depth (longest path)
    pub fn depth(&self) -> usize {
        if self.ops.is_empty() {
            return 0;
        }

        // Track the depth at each qubit
        let mut qubit_depths = vec![0usize; self.num_qubits];

        for gate in &self.ops {
            let qubits = gate.qubits();
            let max_depth = qubits
                .iter()
                .filter_map(|&q| qubit_depths.get(q))
                .max()
                .copied()
                .unwrap_or(0);

            for &q in &qubits {
                if q < self.num_qubits {
                    qubit_depths[q] = max_depth + 1;
                }
            }
        }

        qubit_depths.into_iter().max().unwrap_or(0)
    }

    /// Get the measurement mapping in sequence order
    ///
    /// Each entry pairs a measured qubit with the classical bit that
    /// records it.
    pub fn measurement_map(&self) -> Vec<(QubitId, ClbitId)> {
        self.ops
            .iter()
            .filter_map(|g| match g {
                Gate::Measure { qubit, clbit } => Some((*qubit, *clbit)),
                _ => None,
            })
            .collect()
    }

    // ========================================================================
    // Validation
    // ========================================================================

    fn validate_gate(&self, gate: &Gate) -> QftResult<()> {
        for &qubit in &gate.qubits() {
            if qubit >= self.num_qubits {
                return Err(QftError::QubitOutOfRange {
                    qubit,
                    num_qubits: self.num_qubits,
                });
            }
        }

        for &angle in &gate.angles() {
            if !angle.is_finite() {
                return Err(QftError::InvalidAngle(angle));
            }
        }

        match gate {
            Gate::ControlledU {
                control, target, ..
            } if control == target => Err(QftError::ControlTargetOverlap { qubit: *control }),
            Gate::Measure { clbit, .. } if *clbit >= self.num_qubits => {
                Err(QftError::ClbitOutOfRange {
                    clbit: *clbit,
                    num_qubits: self.num_qubits,
                })
            }
            _ => Ok(()),
        }
    }

    // ========================================================================
    // QASM Conversion
    // ========================================================================

    /// Convert to an OpenQASM-style string
    pub fn to_qasm(&self) -> String {
        let mut lines = Vec::new();

        lines.push("OPENQASM 2.0;".to_string());
        lines.push("include \"qelib1.inc\";".to_string());
        lines.push(String::new());

        lines.push(format!("qreg q[{}];", self.num_qubits));
        lines.push(format!("creg c[{}];", self.num_qubits));
        lines.push(String::new());

        for gate in &self.ops {
            lines.push(gate.to_qasm());
        }

        lines.join("\n")
    }
}

// ============================================================================
// Display
// ============================================================================

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Circuit({} qubits, {} ops)",
            self.num_qubits,
            self.ops.len()
        )?;
        writeln!(f, "  Depth: {}", self.depth())?;
        writeln!(f, "  1Q gates: {}", self.count_1q())?;
        writeln!(f, "  2Q gates: {}", self.count_2q())?;
        writeln!(f, "  Measurements: {}", self.count_measurements())?;
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn cu(control: usize, target: usize, theta: f64) -> Gate {
        Gate::ControlledU {
            control,
            target,
            theta,
            phi: 0.0,
            lambda: 0.0,
            gamma: 0.0,
        }
    }

    #[test]
    fn test_circuit_new() {
        let circuit = Circuit::new(5);
        assert_eq!(circuit.num_qubits(), 5);
        assert!(circuit.is_empty());
    }

    #[test]
    fn test_add_gate() {
        let mut circuit = Circuit::new(3);
        assert!(circuit.add_gate(Gate::H(0)).is_ok());
        assert!(circuit.add_gate(cu(2, 0, PI / 2.0)).is_ok());
        assert_eq!(circuit.gate_count(), 2);
    }

    #[test]
    fn test_add_gates_batch() {
        let mut circuit = Circuit::new(3);
        circuit
            .add_gates([Gate::H(0), Gate::H(1), cu(2, 0, PI)])
            .unwrap();
        assert_eq!(circuit.gate_count(), 3);

        // A bad gate in the batch rejects it at that point
        let err = circuit.add_gates([Gate::H(2), Gate::H(7)]).unwrap_err();
        assert_eq!(
            err,
            QftError::QubitOutOfRange {
                qubit: 7,
                num_qubits: 3
            }
        );
        assert_eq!(circuit.gate_count(), 4);
    }

    #[test]
    fn test_add_gate_out_of_range() {
        let mut circuit = Circuit::new(3);
        assert_eq!(
            circuit.add_gate(Gate::H(5)),
            Err(QftError::QubitOutOfRange {
                qubit: 5,
                num_qubits: 3
            })
        );
    }

    #[test]
    fn test_add_gate_control_target_overlap() {
        let mut circuit = Circuit::new(3);
        assert_eq!(
            circuit.add_gate(cu(1, 1, PI)),
            Err(QftError::ControlTargetOverlap { qubit: 1 })
        );
    }

    #[test]
    fn test_add_gate_clbit_out_of_range() {
        let mut circuit = Circuit::new(2);
        assert_eq!(
            circuit.add_gate(Gate::Measure { qubit: 0, clbit: 4 }),
            Err(QftError::ClbitOutOfRange {
                clbit: 4,
                num_qubits: 2
            })
        );
    }

    #[test]
    fn test_add_gate_non_finite_angle() {
        let mut circuit = Circuit::new(2);
        assert!(matches!(
            circuit.add_gate(cu(1, 0, f64::NAN)),
            Err(QftError::InvalidAngle(_))
        ));
    }

    #[test]
    fn test_from_ops_validates() {
        let ops = vec![Gate::H(0), Gate::H(7)];
        assert!(Circuit::from_ops(3, ops).is_err());
    }

    #[test]
    fn test_circuit_depth() {
        let mut circuit = Circuit::new(3);
        circuit.add_gate(Gate::H(0)).unwrap();
        circuit.add_gate(Gate::H(1)).unwrap();
        circuit.add_gate(cu(1, 0, PI / 2.0)).unwrap();
        circuit.add_gate(Gate::H(2)).unwrap();

        // H(0), H(1) parallel -> depth 1; CU(1,0) -> depth 2;
        // H(2) parallel with everything
        assert_eq!(circuit.depth(), 2);
    }

    #[test]
    fn test_measurement_map() {
        let mut circuit = Circuit::new(3);
        circuit.add_gate(Gate::H(0)).unwrap();
        for i in 0..3 {
            circuit
                .add_gate(Gate::Measure { qubit: i, clbit: i })
                .unwrap();
        }
        assert_eq!(circuit.measurement_map(), vec![(0, 0), (1, 1), (2, 2)]);
    }

    #[test]
    fn test_to_qasm() {
        let mut circuit = Circuit::new(2);
        circuit.add_gate(Gate::H(0)).unwrap();
        circuit.add_gate(cu(1, 0, PI / 2.0)).unwrap();
        circuit
            .add_gate(Gate::Measure { qubit: 0, clbit: 0 })
            .unwrap();

        let qasm = circuit.to_qasm();
        assert!(qasm.contains("OPENQASM 2.0"));
        assert!(qasm.contains("qreg q[2]"));
        assert!(qasm.contains("creg c[2]"));
        assert!(qasm.contains("h q[0]"));
        assert!(qasm.contains("q[1],q[0]"));
        assert!(qasm.contains("measure q[0] -> c[0]"));
    }
}
