//! # QFT Backend
//!
//! Simulation engine boundary and sampling execution.
//!
//! The [`SimulationEngine`] trait is the narrow interface between the
//! deterministic circuit model in `qft_core` and probabilistic
//! execution: one batched call takes an immutable circuit plus a shot
//! count and returns a frequency table. [`SamplingExecutor`] enforces
//! the contract around that call, and [`StatevectorSimulator`] is the
//! bundled noiseless engine.
//!
//! ## Quick Start
//!
//! ```rust
//! use qft_backend::prelude::*;
//! use qft_core::qft_circuit;
//!
//! let circuit = qft_circuit(5).unwrap();
//! let engine = StatevectorSimulator::new(5).with_seed(42);
//!
//! let result = SamplingExecutor::run(&circuit, &engine, 4096).unwrap();
//! assert_eq!(result.total_counts(), 4096);
//!
//! let dist = result.distribution().unwrap();
//! println!("P(00000) = {:.4}", dist.probability("00000"));
//! ```
//!
//! ## One-call configuration
//!
//! ```rust
//! use qft_backend::prelude::*;
//!
//! let result = SamplingConfig::new(3, 1024).with_seed(7).run().unwrap();
//! assert_eq!(result.total_counts(), 1024);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Engine trait and execution result types
pub mod execution;

/// Sampling executor
pub mod executor;

/// State-vector simulation engine
pub mod simulator;

/// Run configuration
pub mod config;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::SamplingConfig;
pub use execution::{ExecutionMetadata, ExecutionResult, SimulationEngine};
pub use executor::SamplingExecutor;
pub use simulator::StatevectorSimulator;

// ============================================================================
// Prelude
// ============================================================================

pub mod prelude {
    //! Prelude module for convenient imports
    //!
    //! ```rust
    //! use qft_backend::prelude::*;
    //! ```

    pub use crate::config::SamplingConfig;
    pub use crate::execution::{ExecutionMetadata, ExecutionResult, SimulationEngine};
    pub use crate::executor::SamplingExecutor;
    pub use crate::simulator::StatevectorSimulator;
}

// ============================================================================
// Integration Tests
// ============================================================================
