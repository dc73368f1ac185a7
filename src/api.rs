//! High-level API for Gaussian smoothing.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry points: a fluent
//! builder for configuring the filter, the filter handle that owns the
//! computed kernel, and a one-shot convenience function.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `.build()` is called; input
//!   data is validated on every `apply` call.
//! * **Amortized**: The kernel is computed once at build time and reused
//!   across apply calls; the handle is immutable and freely shareable.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ## Key concepts
//!
//! * **Configuration Flow**: `Gaussian::new().window_size(..).sigma(..)
//!   .build()` yields a [`GaussianSmoother`]; `apply` runs the engine.
//! * **Parallel hint**: `.parallel(true)` requests the chunked interior pass
//!   (effective only with the `parallel` cargo feature).
//!
//! ## Invariants
//!
//! * A successfully built handle always holds a normalized, symmetric kernel.
//! * `apply` never mutates caller-owned storage and returns a newly allocated
//!   output of the same length as the input.
//!
//! ## Non-goals
//!
//! * This module does not implement the kernel math or the convolution loops
//!   (handled by the math and engine layers).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::smooth_into;
#[cfg(feature = "parallel")]
use crate::engine::executor::smooth_into_parallel;
use crate::engine::validator::Validator;
use crate::math::kernel::GaussianKernel;

// Publicly re-exported types
pub use crate::primitives::errors::GaussianError;

// ============================================================================
// Smoother Builder
// ============================================================================

/// Default number of kernel taps.
const DEFAULT_WINDOW_SIZE: usize = 5;

/// Fluent builder for configuring a Gaussian smoothing filter.
#[derive(Debug, Clone)]
pub struct SmootherBuilder<T> {
    /// Number of kernel taps.
    window_size: Option<usize>,

    /// Gaussian standard deviation.
    sigma: Option<T>,

    /// Parallel interior pass hint.
    parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for SmootherBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> SmootherBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            window_size: None,
            sigma: None,
            parallel: None,
            duplicate_param: None,
        }
    }

    /// Set the number of kernel taps (default: 5).
    pub fn window_size(mut self, window_size: usize) -> Self {
        if self.window_size.is_some() {
            self.duplicate_param = Some("window_size");
        }
        self.window_size = Some(window_size);
        self
    }

    /// Set the Gaussian standard deviation (default: 1.0).
    pub fn sigma(mut self, sigma: T) -> Self {
        if self.sigma.is_some() {
            self.duplicate_param = Some("sigma");
        }
        self.sigma = Some(sigma);
        self
    }

    /// Request the parallel interior pass for large inputs.
    ///
    /// Takes effect only when the `parallel` cargo feature is enabled;
    /// otherwise the hint is ignored and smoothing runs sequentially.
    pub fn parallel(mut self, parallel: bool) -> Self {
        if self.parallel.is_some() {
            self.duplicate_param = Some("parallel");
        }
        self.parallel = Some(parallel);
        self
    }

    /// Validate the configuration and build the filter handle.
    ///
    /// Computes the normalized kernel and offset table once; the returned
    /// handle amortizes that cost across apply calls.
    pub fn build(self) -> Result<GaussianSmoother<T>, GaussianError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let window_size = self.window_size.unwrap_or(DEFAULT_WINDOW_SIZE);
        let sigma = self.sigma.unwrap_or_else(T::one);

        Validator::validate_window_size(window_size)?;
        Validator::validate_sigma(sigma)?;

        Ok(GaussianSmoother {
            kernel: GaussianKernel::compute(window_size, sigma),
            parallel: self.parallel.unwrap_or(false),
        })
    }
}

// ============================================================================
// Gaussian Smoother
// ============================================================================

/// A configured Gaussian smoothing filter.
///
/// Owns the immutable kernel and offset tables. Apply it to any number of
/// input sequences; each call allocates and returns a fresh output of the
/// same length as its input.
#[derive(Debug, Clone)]
pub struct GaussianSmoother<T> {
    /// Precomputed normalized kernel and tap offsets.
    kernel: GaussianKernel<T>,

    /// Whether the parallel interior pass was requested.
    #[cfg_attr(not(feature = "parallel"), allow(dead_code))]
    parallel: bool,
}

impl<T: Float> GaussianSmoother<T> {
    /// Construct a filter directly from a window size and sigma.
    ///
    /// Equivalent to `Gaussian::new().window_size(..).sigma(..).build()`.
    pub fn new(window_size: usize, sigma: T) -> Result<Self, GaussianError> {
        Validator::validate_window_size(window_size)?;
        Validator::validate_sigma(sigma)?;

        Ok(Self {
            kernel: GaussianKernel::compute(window_size, sigma),
            parallel: false,
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of kernel taps.
    #[inline]
    pub fn window_size(&self) -> usize {
        self.kernel.window_size()
    }

    /// Gaussian standard deviation the kernel was built from.
    #[inline]
    pub fn sigma(&self) -> T {
        self.kernel.sigma()
    }

    /// Normalized kernel weights.
    #[inline]
    pub fn kernel(&self) -> &[T] {
        self.kernel.weights()
    }

    // ========================================================================
    // Execution
    // ========================================================================

    /// Validate the input and run the sequential engine.
    fn run(&self, input: &[T]) -> Result<Vec<T>, GaussianError> {
        Validator::validate_input(input, self.kernel.window_size())?;

        let mut output = vec![T::zero(); input.len()];
        smooth_into(&self.kernel, input, &mut output);
        Ok(output)
    }

    /// Smooth an input sequence.
    ///
    /// Fails with [`GaussianError::EmptyInput`] for an empty sequence or
    /// [`GaussianError::WindowExceedsData`] when the window is longer than
    /// the input. The input is read-only; the output is newly allocated.
    #[cfg(not(feature = "parallel"))]
    pub fn apply(&self, input: &[T]) -> Result<Vec<T>, GaussianError> {
        self.run(input)
    }
}

#[cfg(feature = "parallel")]
impl<T: Float + Send + Sync> GaussianSmoother<T> {
    /// Smooth an input sequence.
    ///
    /// Fails with [`GaussianError::EmptyInput`] for an empty sequence or
    /// [`GaussianError::WindowExceedsData`] when the window is longer than
    /// the input. The input is read-only; the output is newly allocated.
    /// When the parallel hint is set, the interior is convolved across CPU
    /// cores; the result is mathematically identical to the sequential pass.
    pub fn apply(&self, input: &[T]) -> Result<Vec<T>, GaussianError> {
        if !self.parallel {
            return self.run(input);
        }

        Validator::validate_input(input, self.kernel.window_size())?;

        let mut output = vec![T::zero(); input.len()];
        smooth_into_parallel(&self.kernel, input, &mut output);
        Ok(output)
    }
}

// ============================================================================
// Convenience Function
// ============================================================================

/// Smooth `input` once with a transient filter.
///
/// Constructs a [`GaussianSmoother`] and applies it immediately; equivalent
/// to `GaussianSmoother::new(window_size, sigma)?.apply(input)`. Intended for
/// one-shot callers that do not need to reuse the kernel across inputs.
pub fn smooth_gaussian<T: Float>(
    input: &[T],
    window_size: usize,
    sigma: T,
) -> Result<Vec<T>, GaussianError> {
    GaussianSmoother::new(window_size, sigma)?.run(input)
}
