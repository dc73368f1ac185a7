//! Error types for Gaussian smoothing operations.
//!
//! ## Purpose
//!
//! This module defines error conditions that can occur during Gaussian
//! smoothing, covering filter parameter validation and input data
//! constraints.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include the offending values (e.g., the window
//!   size that exceeded the data length).
//! * **Synchronous**: All errors surface directly to the caller; there is no
//!   retry, recovery, or logging side channel.
//! * **No-std**: Implements `Display` via `core::fmt` and `std::error::Error`
//!   only when the `std` feature is enabled.
//!
//! ## Key concepts
//!
//! 1. **Parameter validation**: Zero window size, non-positive or non-finite
//!    sigma. These are construction-time failures; no filter handle is
//!    produced.
//! 2. **Input validation**: Empty input or a window longer than the input.
//!    These are apply-time failures; no partial output is produced.
//! 3. **Builder misuse**: A parameter set more than once on the builder.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Numeric values in errors use the same types as the public API, with
//!   sigma widened to `f64` for display.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or parameter correction.

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for Gaussian smoothing operations.
#[derive(Debug, Clone, PartialEq)]
pub enum GaussianError {
    /// Window size must be a positive integer (at least 1 tap).
    InvalidWindowSize(usize),

    /// Sigma must be a positive finite number.
    InvalidSigma(f64),

    /// Input sequence is empty; smoothing requires at least one sample.
    EmptyInput,

    /// Window size cannot exceed the input length.
    WindowExceedsData {
        /// Number of taps in the kernel.
        window_size: usize,
        /// Number of samples in the input.
        data_len: usize,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for GaussianError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidWindowSize(size) => {
                write!(f, "Invalid window size: {size} (must be at least 1)")
            }
            Self::InvalidSigma(sigma) => {
                write!(f, "Invalid sigma: {sigma} (must be positive and finite)")
            }
            Self::EmptyInput => write!(f, "Input sequence is empty"),
            Self::WindowExceedsData {
                window_size,
                data_len,
            } => {
                write!(
                    f,
                    "Window size {window_size} exceeds data length {data_len}"
                )
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl std::error::Error for GaussianError {}
