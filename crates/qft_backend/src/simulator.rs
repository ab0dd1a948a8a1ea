//! State-vector simulation engine
//!
//! Noiseless reference engine behind the [`SimulationEngine`]
//! boundary. The circuit's unitary part is applied once to a dense
//! state vector; the requested shots are then drawn from the resulting
//! Born-rule distribution and routed through the circuit's
//! qubit-to-classical-bit measurement map.

use crate::execution::{ExecutionMetadata, ExecutionResult, SimulationEngine};
use num_complex::Complex64;
use qft_core::{Circuit, Counts, Gate, QftError, QftResult};
use rand::prelude::*;
use rand::rngs::StdRng;
use std::collections::HashMap;
use std::time::Instant;

/// 2x2 unitary as a row-major array
type Matrix2 = [Complex64; 4];

/// Noiseless state-vector simulator
///
/// Memory grows as 2^n amplitudes; intended for the small registers
/// QFT sampling works with. Seed it for reproducible runs.
pub struct StatevectorSimulator {
    /// Engine name
    name: String,

    /// Number of qubits the engine accepts
    num_qubits: usize,

    /// Random seed
    seed: Option<u64>,
}

impl StatevectorSimulator {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create a new simulator for up to `num_qubits` qubits
    pub fn new(num_qubits: usize) -> Self {
        Self {
            name: "statevector_simulator".to_string(),
            num_qubits,
            seed: None,
        }
    }

    /// Set seed for reproducibility
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set engine name
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    // ========================================================================
    // State Evolution
    // ========================================================================

    /// Evolve |0..0⟩ through the circuit's unitary operations
    fn evolve(&self, circuit: &Circuit) -> Vec<Complex64> {
        let n = circuit.num_qubits();
        let mut state = vec![Complex64::new(0.0, 0.0); 1 << n];
        state[0] = Complex64::new(1.0, 0.0);

        for gate in circuit.ops() {
            match gate {
                Gate::H(q) => apply_single_qubit(&mut state, *q, n, hadamard_matrix()),
                Gate::U(q, theta, phi, lambda) => {
                    apply_single_qubit(&mut state, *q, n, u_matrix(*theta, *phi, *lambda))
                }
                Gate::ControlledU {
                    control,
                    target,
                    theta,
                    phi,
                    lambda,
                    gamma,
                } => {
                    let mut m = u_matrix(*theta, *phi, *lambda);
                    let phase = Complex64::from_polar(1.0, *gamma);
                    for entry in &mut m {
                        *entry *= phase;
                    }
                    apply_controlled(&mut state, *control, *target, n, m);
                }
                // Measurement is terminal readout, not state evolution
                Gate::Measure { .. } => {}
            }
        }

        state
    }

    /// Draw `shots` outcomes from the state's Born-rule distribution
    fn sample(&self, circuit: &Circuit, state: &[Complex64], shots: u64, rng: &mut StdRng) -> Counts {
        let n = circuit.num_qubits();
        let probs: Vec<f64> = state.iter().map(|c| c.norm_sqr()).collect();
        let measurement_map = circuit.measurement_map();

        let mut counts: Counts = HashMap::new();

        for _ in 0..shots {
            let r: f64 = rng.gen();
            let mut cumsum = 0.0;
            let mut outcome = probs.len() - 1;

            for (i, &p) in probs.iter().enumerate() {
                cumsum += p;
                if r < cumsum {
                    outcome = i;
                    break;
                }
            }

            // Route measured qubits through the classical register;
            // unmeasured classical bits read 0
            let mut classical = 0usize;
            for &(qubit, clbit) in &measurement_map {
                if (outcome >> qubit) & 1 == 1 {
                    classical |= 1 << clbit;
                }
            }

            let bitstring = format!("{:0width$b}", classical, width = n);
            *counts.entry(bitstring).or_insert(0) += 1;
        }

        counts
    }
}

impl SimulationEngine for StatevectorSimulator {
    fn name(&self) -> &str {
        &self.name
    }

    fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    fn execute(&self, circuit: &Circuit, shots: u64) -> QftResult<ExecutionResult> {
        if circuit.num_qubits() > self.num_qubits {
            return Err(QftError::QubitOutOfRange {
                qubit: circuit.num_qubits(),
                num_qubits: self.num_qubits,
            });
        }

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let start = Instant::now();
        let state = self.evolve(circuit);
        let counts = self.sample(circuit, &state, shots, &mut rng);

        Ok(ExecutionResult {
            counts,
            shots,
            metadata: ExecutionMetadata {
                engine: self.name.clone(),
                simulated: true,
                seed: self.seed,
                execution_time_ms: Some(start.elapsed().as_millis() as u64),
                ..Default::default()
            },
        })
    }
}

// ============================================================================
// Gate Matrices
// ============================================================================

fn hadamard_matrix() -> Matrix2 {
    let s = Complex64::new(std::f64::consts::FRAC_1_SQRT_2, 0.0);
    [s, s, s, -s]
}

/// U(θ, φ, λ) in the standard parametrization:
/// [[cos(θ/2), -e^{iλ} sin(θ/2)], [e^{iφ} sin(θ/2), e^{i(φ+λ)} cos(θ/2)]]
fn u_matrix(theta: f64, phi: f64, lambda: f64) -> Matrix2 {
    let (half_sin, half_cos) = ((theta / 2.0).sin(), (theta / 2.0).cos());
    [
        Complex64::new(half_cos, 0.0),
        -Complex64::from_polar(half_sin, lambda),
        Complex64::from_polar(half_sin, phi),
        Complex64::from_polar(half_cos, phi + lambda),
    ]
}

fn apply_single_qubit(state: &mut [Complex64], q: usize, n: usize, m: Matrix2) {
    let mask = 1 << q;
    for i in 0..(1 << n) {
        if i & mask == 0 {
            let j = i | mask;
            let (a, b) = (state[i], state[j]);
            state[i] = m[0] * a + m[1] * b;
            state[j] = m[2] * a + m[3] * b;
        }
    }
}

fn apply_controlled(state: &mut [Complex64], control: usize, target: usize, n: usize, m: Matrix2) {
    let control_mask = 1 << control;
    let target_mask = 1 << target;
    for i in 0..(1 << n) {
        if (i & control_mask) != 0 && (i & target_mask) == 0 {
            let j = i | target_mask;
            let (a, b) = (state[i], state[j]);
            state[i] = m[0] * a + m[1] * b;
            state[j] = m[2] * a + m[3] * b;
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use qft_core::CircuitBuilder;
    use std::f64::consts::PI;

    #[test]
    fn test_single_hadamard_is_fair_coin() {
        let engine = StatevectorSimulator::new(1).with_seed(42);

        let circuit = CircuitBuilder::new(1).h(0).measure_all().build().unwrap();
        let result = engine.execute(&circuit, 10_000).unwrap();

        let p0 = result.probability("0");
        let p1 = result.probability("1");

        assert!((p0 - 0.5).abs() < 0.05, "P(0) = {}", p0);
        assert!((p1 - 0.5).abs() < 0.05, "P(1) = {}", p1);
        assert_eq!(result.total_counts(), 10_000);
    }

    #[test]
    fn test_u_gate_as_not() {
        // U(π, 0, π) is the Pauli-X rotation
        let engine = StatevectorSimulator::new(1).with_seed(42);

        let circuit = CircuitBuilder::new(1)
            .u(0, PI, 0.0, PI)
            .measure_all()
            .build()
            .unwrap();
        let result = engine.execute(&circuit, 1000).unwrap();

        assert_relative_eq!(result.probability("1"), 1.0);
    }

    #[test]
    fn test_controlled_u_fires_only_on_active_control() {
        let engine = StatevectorSimulator::new(2).with_seed(42);

        // Control stays |0⟩: target untouched
        let idle = CircuitBuilder::new(2)
            .cu(0, 1, PI, 0.0, PI, 0.0)
            .measure_all()
            .build()
            .unwrap();
        let result = engine.execute(&idle, 1000).unwrap();
        assert_relative_eq!(result.probability("00"), 1.0);

        // Control flipped to |1⟩: controlled X fires
        let active = CircuitBuilder::new(2)
            .u(0, PI, 0.0, PI)
            .cu(0, 1, PI, 0.0, PI, 0.0)
            .measure_all()
            .build()
            .unwrap();
        let result = engine.execute(&active, 1000).unwrap();
        assert_relative_eq!(result.probability("11"), 1.0);
    }

    #[test]
    fn test_global_phase_invisible_in_statistics() {
        let circuit = |gamma: f64| {
            CircuitBuilder::new(2)
                .h(0)
                .cu(0, 1, PI / 2.0, 0.0, 0.0, gamma)
                .measure_all()
                .build()
                .unwrap()
        };

        let engine = StatevectorSimulator::new(2).with_seed(7);
        let plain = engine.execute(&circuit(0.0), 4096).unwrap();
        let engine = StatevectorSimulator::new(2).with_seed(7);
        let phased = engine.execute(&circuit(1.3), 4096).unwrap();

        assert_eq!(plain.counts, phased.counts);
    }

    #[test]
    fn test_measurement_map_routing() {
        // Flip qubit 0, read it into classical bit 1
        let engine = StatevectorSimulator::new(2).with_seed(42);
        let circuit = CircuitBuilder::new(2)
            .u(0, PI, 0.0, PI)
            .measure(0, 1)
            .build()
            .unwrap();

        let result = engine.execute(&circuit, 100).unwrap();
        assert_relative_eq!(result.probability("10"), 1.0);
    }

    #[test]
    fn test_qubit_limit() {
        let engine = StatevectorSimulator::new(3);
        let circuit = CircuitBuilder::new(5).h(0).measure_all().build().unwrap();

        assert!(engine.execute(&circuit, 100).is_err());
    }

    #[test]
    fn test_seed_reproducibility() {
        let circuit = CircuitBuilder::new(3)
            .h_layer()
            .measure_all()
            .build()
            .unwrap();

        let result1 = StatevectorSimulator::new(3)
            .with_seed(42)
            .execute(&circuit, 500)
            .unwrap();
        let result2 = StatevectorSimulator::new(3)
            .with_seed(42)
            .execute(&circuit, 500)
            .unwrap();

        assert_eq!(result1.counts, result2.counts);
    }

    #[test]
    fn test_bitstring_width_fixed() {
        let circuit = CircuitBuilder::new(4)
            .h_layer()
            .measure_all()
            .build()
            .unwrap();
        let result = StatevectorSimulator::new(4)
            .with_seed(1)
            .execute(&circuit, 2000)
            .unwrap();

        for key in result.counts.keys() {
            assert_eq!(key.len(), 4, "key '{}' has wrong width", key);
        }
    }
}
