//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer provides the series evaluators: the truncated expansions of
//! exp, cos, (1+x)^a and ln, together with the reference values they are
//! compared against.
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
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Truncated series evaluators and function dispatch.
pub mod series;
