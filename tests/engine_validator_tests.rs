#![cfg(feature = "dev")]
//! Tests for parameter and input validation.
//!
//! These tests verify the fail-fast validation rules for:
//! - Window size bounds
//! - Sigma finiteness and positivity
//! - Input length constraints and check ordering
//! - Builder duplicate-parameter tracking
//!
//! ## Test Organization
//!
//! 1. **Parameter Validation** - Window size and sigma
//! 2. **Input Validation** - Empty input, window-too-large, ordering
//! 3. **Builder Validation** - Duplicate parameters

use gaussmooth::internals::engine::validator::Validator;
use gaussmooth::internals::primitives::errors::GaussianError;

// ============================================================================
// Parameter Validation Tests
// ============================================================================

/// Test that a zero window size is rejected.
#[test]
fn test_zero_window_size_rejected() {
    assert_eq!(
        Validator::validate_window_size(0),
        Err(GaussianError::InvalidWindowSize(0))
    );
}

/// Test that positive window sizes are accepted.
#[test]
fn test_positive_window_sizes_accepted() {
    for size in [1usize, 2, 5, 101] {
        assert!(Validator::validate_window_size(size).is_ok());
    }
}

/// Test that non-positive sigmas are rejected.
#[test]
fn test_nonpositive_sigma_rejected() {
    assert_eq!(
        Validator::validate_sigma(-1.0f64),
        Err(GaussianError::InvalidSigma(-1.0))
    );
    assert_eq!(
        Validator::validate_sigma(0.0f64),
        Err(GaussianError::InvalidSigma(0.0))
    );
}

/// Test that non-finite sigmas are rejected.
#[test]
fn test_nonfinite_sigma_rejected() {
    assert!(Validator::validate_sigma(f64::NAN).is_err());
    assert!(Validator::validate_sigma(f64::INFINITY).is_err());
    assert!(Validator::validate_sigma(f64::NEG_INFINITY).is_err());
}

/// Test that ordinary sigmas are accepted.
#[test]
fn test_valid_sigma_accepted() {
    for sigma in [1e-6f64, 0.5, 1.0, 100.0] {
        assert!(Validator::validate_sigma(sigma).is_ok());
    }
}

// ============================================================================
// Input Validation Tests
// ============================================================================

/// Test that an empty input is rejected.
#[test]
fn test_empty_input_rejected() {
    let empty: [f64; 0] = [];
    assert_eq!(
        Validator::validate_input(&empty, 3),
        Err(GaussianError::EmptyInput)
    );
}

/// Test that a window longer than the input is rejected.
#[test]
fn test_window_exceeds_data_rejected() {
    let input = [1.0f64, 2.0, 3.0, 4.0, 5.0];
    assert_eq!(
        Validator::validate_input(&input, 7),
        Err(GaussianError::WindowExceedsData {
            window_size: 7,
            data_len: 5,
        })
    );
}

/// Test that the empty check runs before the window check.
///
/// An empty input with an oversized window must report `EmptyInput`, matching
/// the apply-time check order.
#[test]
fn test_empty_check_precedes_window_check() {
    let empty: [f64; 0] = [];
    assert_eq!(
        Validator::validate_input(&empty, 7),
        Err(GaussianError::EmptyInput)
    );
}

/// Test that a window exactly matching the input length is accepted.
#[test]
fn test_window_equal_to_data_len_accepted() {
    let input = [1.0f64, 2.0, 3.0];
    assert!(Validator::validate_input(&input, 3).is_ok());
}

// ============================================================================
// Builder Validation Tests
// ============================================================================

/// Test duplicate-parameter detection.
#[test]
fn test_duplicate_parameter_detected() {
    assert_eq!(
        Validator::validate_no_duplicates(Some("sigma")),
        Err(GaussianError::DuplicateParameter { parameter: "sigma" })
    );
    assert!(Validator::validate_no_duplicates(None).is_ok());
}

/// Test error display formatting carries context.
#[test]
fn test_error_display_contains_values() {
    let err = GaussianError::WindowExceedsData {
        window_size: 7,
        data_len: 5,
    };
    let message = format!("{err}");
    assert!(message.contains('7') && message.contains('5'));

    let err = GaussianError::InvalidSigma(-2.0);
    assert!(format!("{err}").contains("-2"));
}
