//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the basic types shared by every other layer:
//! - The crate error type
//! - The series function selector
//! - Default configuration constants
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Default configuration values.
pub mod constants;

/// Error type for configuration and evaluation.
pub mod errors;

/// Series function selector.
pub mod function;
