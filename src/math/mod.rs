//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure mathematical core of the filter:
//! - Gaussian kernel construction (weights and tap offsets)
//!
//! These are reusable mathematical building blocks with no execution or
//! validation logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Gaussian kernel construction.
pub mod kernel;
