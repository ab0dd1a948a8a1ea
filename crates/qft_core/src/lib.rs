//! # QFT Core
//!
//! Circuit model and Quantum Fourier Transform construction.
//!
//! The crate covers everything that is deterministic about QFT
//! sampling: the qubit/classical-bit register model, the gate and
//! circuit descriptors, the QFT gate-sequence builder, and the
//! aggregation of raw shot counts into a normalized distribution.
//! Probabilistic execution lives behind the engine boundary in
//! `qft_backend`.
//!
//! ## Quick Start
//!
//! ```rust
//! use qft_core::prelude::*;
//!
//! // Build the 5-qubit QFT circuit
//! let circuit = qft_circuit(5).unwrap();
//!
//! assert_eq!(circuit.num_qubits(), 5);
//! assert_eq!(circuit.count_1q(), 5);      // Hadamard layer
//! assert_eq!(circuit.count_2q(), 10);     // n(n-1)/2 controlled rotations
//! assert_eq!(circuit.count_measurements(), 5);
//!
//! println!("{}", circuit.to_qasm());
//! ```
//!
//! ## Custom circuits
//!
//! ```rust
//! use qft_core::prelude::*;
//! use std::f64::consts::PI;
//!
//! let circuit = CircuitBuilder::new(2)
//!     .h(0)
//!     .cu(1, 0, PI / 2.0, 0.0, 0.0, 0.0)
//!     .measure_all()
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(circuit.gate_count(), 4);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Core types and validated wrappers
pub mod types;

/// Error types
pub mod error;

/// Gate operations
pub mod gate;

/// Circuit descriptor
pub mod circuit;

/// Fluent circuit builder
pub mod builder;

/// QFT gate-sequence construction
pub mod qft;

/// Frequency-table aggregation and normalization
pub mod distribution;

// ============================================================================
// Re-exports
// ============================================================================

pub use builder::CircuitBuilder;
pub use circuit::Circuit;
pub use distribution::{total_counts, validate_counts, Distribution};
pub use error::{QftError, QftResult};
pub use gate::Gate;
pub use qft::{qft_circuit, qft_rotation_angle};
pub use types::{Angle, Bitstring, ClbitId, Counts, Probability, QubitId};

// ============================================================================
// Prelude
// ============================================================================

pub mod prelude {
    //! Convenient imports for common use cases
    //!
    //! ```rust
    //! use qft_core::prelude::*;
    //! ```

    pub use crate::builder::CircuitBuilder;
    pub use crate::circuit::Circuit;
    pub use crate::distribution::{total_counts, validate_counts, Distribution};
    pub use crate::error::{QftError, QftResult};
    pub use crate::gate::Gate;
    pub use crate::qft::{qft_circuit, qft_rotation_angle};
    pub use crate::types::{Angle, Bitstring, ClbitId, Counts, Probability, QubitId};
}

// ============================================================================
// Version Information
// ============================================================================

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

// ============================================================================
// Integration Tests
// ============================================================================
