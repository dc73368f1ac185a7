//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the foundational types used throughout the crate:
//! - Error types for parameter and input validation failures
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error types for Gaussian smoothing operations.
pub mod errors;
