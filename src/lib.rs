//! # gaussmooth — Gaussian smoothing for 1-D signals
//!
//! A discrete Gaussian-weighted moving average (low-pass filter) for
//! one-dimensional numeric sequences: sensor streams, time series, image
//! scanlines. Build a normalized, symmetric Gaussian kernel once, then apply
//! it to as many input sequences as you like.
//!
//! ## How it works
//!
//! The filter is a two-stage pipeline:
//!
//! 1. **Kernel construction**: from a window size and a sigma (standard
//!    deviation), compute a normalized weight vector that is symmetric about
//!    its center and sums to 1, together with a matching table of signed tap
//!    offsets.
//! 2. **Convolution**: slide the kernel over the input. Interior samples use
//!    direct indexing; the two boundary regions clamp out-of-range indices to
//!    the nearest edge (clamp-to-edge padding). The output always has the
//!    same length as the input.
//!
//! Because the weights are non-negative and sum to 1, every output value is a
//! convex combination of nearby input values and therefore stays within the
//! input's min/max range.
//!
//! ## Quick Start
//!
//! ```rust
//! use gaussmooth::prelude::*;
//!
//! let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
//!
//! // Build the filter once...
//! let smoother = Gaussian::new()
//!     .window_size(5)     // 5 kernel taps
//!     .sigma(1.0)         // Standard deviation of the Gaussian
//!     .build()?;
//!
//! // ...then apply it to any number of inputs.
//! let smoothed = smoother.apply(&data)?;
//! assert_eq!(smoothed.len(), data.len());
//! # Result::<(), GaussianError>::Ok(())
//! ```
//!
//! One-shot callers that do not need to reuse the kernel can use the
//! convenience function instead:
//!
//! ```rust
//! use gaussmooth::prelude::*;
//!
//! let data = vec![1.0, 5.0, 1.0, 1.0, 1.0];
//! let smoothed = smooth_gaussian(&data, 3, 0.8)?;
//! # Result::<(), GaussianError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Construction fails with [`prelude::GaussianError`] for a zero window size
//! or a non-positive/non-finite sigma; `apply` fails for an empty input or a
//! window longer than the input. No partial output is ever produced, and the
//! filter never auto-corrects parameters (for example by silently shrinking
//! the window), since that would silently change output semantics.
//!
//! ## Parallel execution
//!
//! With the `parallel` feature enabled, large inputs have their interior
//! convolved across CPU cores in contiguous chunks. Each chunk writes a
//! disjoint slice of the output, so results are mathematically identical to
//! the sequential path. Boundary samples are cheap and remain sequential.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! gaussmooth = { version = "0.1", default-features = false }
//! ```
//!
//! Use `f32` to halve the memory footprint on constrained targets; the whole
//! API is generic over the floating-point type.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - error types.
mod primitives;

// Layer 2: Math - kernel construction.
mod math;

// Layer 3: Engine - validation and convolution execution.
mod engine;

// High-level fluent API for Gaussian smoothing.
mod api;

// Standard gaussmooth prelude.
pub mod prelude {
    pub use crate::api::{
        smooth_gaussian, GaussianError, GaussianSmoother, SmootherBuilder as Gaussian,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
