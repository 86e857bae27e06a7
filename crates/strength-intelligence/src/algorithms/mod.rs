// ABOUTME: Algorithm abstraction layer enabling pluggable strength estimation methods
// ABOUTME: Provides enum-based dispatch for one-rep max estimation formulas

//! Algorithm Selection Module
//!
//! Algorithms are enums, not strings or booleans. Enum dispatch keeps the
//! built-in formulas free of vtable overhead and makes the supported set explicit.
//!
//! # Example
//!
//! ```rust
//! use strength_intelligence::algorithms::E1rmFormula;
//!
//! let estimate = E1rmFormula::Epley.estimate(100.0, 5);
//! assert!((estimate - 116.666_666).abs() < 1e-3);
//! ```

pub mod e1rm;

pub use e1rm::E1rmFormula;
