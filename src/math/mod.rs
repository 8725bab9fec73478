//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical helpers used by the series
//! evaluators:
//! - Generalized combination numbers C(a, i) for real `a`
//!
//! These are reusable building blocks with no series-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Evaluation
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Generalized binomial coefficients.
pub mod combination;
