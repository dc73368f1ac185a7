//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer orchestrates the filter:
//! - Parameter and input validation
//! - Convolution execution (interior and boundary passes, sequential and
//!   optionally parallel)
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Parameter and input validation.
pub mod validator;

/// Convolution execution.
pub mod executor;
