//! Parameter and input validation for Gaussian smoothing.
//!
//! ## Purpose
//!
//! This module provides validation for the filter configuration (window size
//! and sigma) and for the input sequence supplied at apply time. It enforces
//! the preconditions the kernel builder and convolution engine rely on.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Two phases**: Parameters are checked at construction time, input data
//!   at apply time. A construction failure never produces a filter handle; an
//!   apply failure never produces partial output.
//! * **Generics**: Sigma and input validation are generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Parameter bounds**: `window_size >= 1`; sigma positive and finite.
//! * **Input constraints**: Non-empty input at least as long as the window.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not auto-correct invalid parameters (e.g., it never
//!   shrinks the window to fit the data, since that would silently change
//!   output semantics).
//! * This module does not perform the smoothing itself.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::GaussianError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for filter parameters and input data.
///
/// Provides static methods returning `Result<(), GaussianError>` that fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Parameter Validation (construction time)
    // ========================================================================

    /// Validate the kernel window size.
    ///
    /// The window size is a tap count and must be at least 1. Negative or
    /// fractional sizes are unrepresentable in the `usize` parameter type.
    pub fn validate_window_size(window_size: usize) -> Result<(), GaussianError> {
        if window_size < 1 {
            return Err(GaussianError::InvalidWindowSize(window_size));
        }
        Ok(())
    }

    /// Validate the Gaussian standard deviation.
    pub fn validate_sigma<T: Float>(sigma: T) -> Result<(), GaussianError> {
        if !sigma.is_finite() || sigma <= T::zero() {
            return Err(GaussianError::InvalidSigma(
                sigma.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    // ========================================================================
    // Input Validation (apply time)
    // ========================================================================

    /// Validate the input sequence against the configured window size.
    pub fn validate_input<T: Float>(input: &[T], window_size: usize) -> Result<(), GaussianError> {
        // Check 1: Non-empty input
        if input.is_empty() {
            return Err(GaussianError::EmptyInput);
        }

        // Check 2: Window fits within the data
        if window_size > input.len() {
            return Err(GaussianError::WindowExceedsData {
                window_size,
                data_len: input.len(),
            });
        }

        Ok(())
    }

    // ========================================================================
    // Builder Validation
    // ========================================================================

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), GaussianError> {
        if let Some(parameter) = duplicate_param {
            return Err(GaussianError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
