//! End-to-end QFT sampling demo
//!
//! Builds the 5-qubit QFT circuit, runs 4096 shots on the
//! state-vector engine, and prints the circuit, the counts table, and
//! a histogram.
//!
//! Run with: cargo run --example qft_sampling

use qft_backend::prelude::*;
use qft_core::qft_circuit;
use qft_report::{ReportFormat, Reporter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let num_qubits = 5;
    let shots = 4096;

    let circuit = qft_circuit(num_qubits)?;
    println!("{}", circuit);
    println!("{}\n", circuit.to_qasm());

    let engine = StatevectorSimulator::new(num_qubits).with_seed(42);
    let result = SamplingExecutor::run(&circuit, &engine, shots)?;

    println!("{}", Reporter::report(&result, ReportFormat::Text));
    println!("{}", Reporter::report(&result, ReportFormat::Histogram));

    if let Some((bitstring, count)) = result.most_frequent() {
        println!("Most frequent outcome: {} ({} shots)", bitstring, count);
    }

    Ok(())
}
