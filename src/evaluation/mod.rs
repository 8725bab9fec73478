//! Layer 5: Evaluation
//!
//! # Purpose
//!
//! This layer post-processes the series over a whole domain:
//! - Fixed-order sweeps producing approximation vs. reference curves
//! - Legend, bounds and error summaries for plotting
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Evaluation ← You are here
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Domain sweeps for visualization.
pub mod sweep;
