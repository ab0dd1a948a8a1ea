//! # QFT Report
//!
//! Presentation of sampling results: a sorted counts table, an ASCII
//! histogram, and JSON/CSV exports. Sits downstream of `qft_backend`
//! and never influences execution.
//!
//! ## Quick Start
//!
//! ```rust
//! use qft_backend::prelude::*;
//! use qft_report::{Reporter, ReportFormat};
//!
//! let result = SamplingConfig::new(3, 1024).with_seed(42).run().unwrap();
//!
//! println!("{}", Reporter::report(&result, ReportFormat::Text));
//! println!("{}", Reporter::report(&result, ReportFormat::Histogram));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Result reporting
pub mod reporter;

pub use reporter::{ReportFormat, Reporter};
