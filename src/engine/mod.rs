//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates evaluation:
//! - Validation of configuration and inputs
//! - The convergence search over the term count
//! - Result assembly
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Evaluation
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Convergence search and driver.
pub mod executor;

/// Convergence result type.
pub mod output;

/// Configuration and input validation.
pub mod validator;
