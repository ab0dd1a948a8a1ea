//! Sampling executor
//!
//! The executor is the one place randomness crosses into the core: it
//! hands the immutable circuit to an engine in a single batched call
//! and verifies the frequency table that comes back. It owns no
//! per-shot physics and no retry policy; a failing engine surfaces its
//! error to the caller, and a wrong-total table is rejected rather
//! than silently returned.

use crate::execution::{ExecutionResult, SimulationEngine};
use qft_core::{validate_counts, Circuit, QftError, QftResult};

/// Executes circuits against an engine and verifies the results
pub struct SamplingExecutor;

impl SamplingExecutor {
    /// Run `circuit` for `shots` trials on `engine`
    ///
    /// Guarantees of a returned result: counts sum exactly to `shots`,
    /// and every key is a bitstring of the circuit's register width.
    /// Larger shot counts trade execution time for statistical
    /// precision; the empirical distribution converges to the true one
    /// by the law of large numbers.
    pub fn run(
        circuit: &Circuit,
        engine: &dyn SimulationEngine,
        shots: u64,
    ) -> QftResult<ExecutionResult> {
        if shots == 0 {
            return Err(QftError::InvalidShots(0));
        }
        if shots > engine.max_shots() {
            return Err(QftError::EngineError(format!(
                "{} shots exceed engine limit {}",
                shots,
                engine.max_shots()
            )));
        }
        if circuit.is_empty() {
            return Err(QftError::EmptyCircuit);
        }

        let result = engine.execute(circuit, shots)?;
        validate_counts(&result.counts, circuit.num_qubits(), shots)?;

        Ok(result)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::execution::ExecutionResult;
    use crate::simulator::StatevectorSimulator;
    use qft_core::{qft_circuit, CircuitBuilder, Counts};

    /// Engine that returns a fixed, possibly wrong, frequency table
    struct CannedEngine {
        counts: Counts,
    }

    impl SimulationEngine for CannedEngine {
        fn name(&self) -> &str {
            "canned"
        }

        fn num_qubits(&self) -> usize {
            8
        }

        fn execute(&self, _circuit: &Circuit, shots: u64) -> QftResult<ExecutionResult> {
            Ok(ExecutionResult::new(self.counts.clone(), shots, "canned"))
        }
    }

    /// Engine that always fails
    struct DownEngine;

    impl SimulationEngine for DownEngine {
        fn name(&self) -> &str {
            "down"
        }

        fn num_qubits(&self) -> usize {
            8
        }

        fn execute(&self, _circuit: &Circuit, _shots: u64) -> QftResult<ExecutionResult> {
            Err(QftError::EngineError("unreachable".into()))
        }
    }

    #[test]
    fn test_zero_shots_rejected() {
        let circuit = qft_circuit(2).unwrap();
        let engine = StatevectorSimulator::new(2);

        assert_eq!(
            SamplingExecutor::run(&circuit, &engine, 0),
            Err(QftError::InvalidShots(0))
        );
    }

    #[test]
    fn test_empty_circuit_rejected() {
        let circuit = CircuitBuilder::new(2).build().unwrap();
        let engine = StatevectorSimulator::new(2);

        assert_eq!(
            SamplingExecutor::run(&circuit, &engine, 100),
            Err(QftError::EmptyCircuit)
        );
    }

    #[test]
    fn test_engine_failure_propagates() {
        let circuit = qft_circuit(2).unwrap();
        let err = SamplingExecutor::run(&circuit, &DownEngine, 100).unwrap_err();
        assert!(err.is_execution_error());
    }

    #[test]
    fn test_short_total_rejected() {
        let mut counts = Counts::new();
        counts.insert("00".to_string(), 90);
        let engine = CannedEngine { counts };

        let circuit = qft_circuit(2).unwrap();
        assert_eq!(
            SamplingExecutor::run(&circuit, &engine, 100),
            Err(QftError::ShotCountMismatch {
                expected: 100,
                actual: 90
            })
        );
    }

    #[test]
    fn test_wrong_width_rejected() {
        let mut counts = Counts::new();
        counts.insert("000".to_string(), 100);
        let engine = CannedEngine { counts };

        let circuit = qft_circuit(2).unwrap();
        assert!(matches!(
            SamplingExecutor::run(&circuit, &engine, 100),
            Err(QftError::BitstringWidthMismatch { .. })
        ));
    }

    #[test]
    fn test_shot_limit_enforced() {
        let circuit = qft_circuit(2).unwrap();
        let engine = StatevectorSimulator::new(2);

        let err = SamplingExecutor::run(&circuit, &engine, engine.max_shots() + 1).unwrap_err();
        assert!(err.is_execution_error());
    }

    #[test]
    fn test_counts_sum_to_shots() {
        let circuit = qft_circuit(3).unwrap();
        let engine = StatevectorSimulator::new(3).with_seed(42);

        let result = SamplingExecutor::run(&circuit, &engine, 2048).unwrap();
        assert_eq!(result.total_counts(), 2048);
    }

    #[test]
    fn test_independent_executions() {
        // One circuit, two runs: fresh tallies, no carried state
        let circuit = qft_circuit(2).unwrap();
        let engine = StatevectorSimulator::new(2).with_seed(1);

        let a = SamplingExecutor::run(&circuit, &engine, 100).unwrap();
        let b = SamplingExecutor::run(&circuit, &engine, 300).unwrap();

        assert_eq!(a.total_counts(), 100);
        assert_eq!(b.total_counts(), 300);
    }
}
