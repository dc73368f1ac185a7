#![cfg(feature = "dev")]
//! Tests for Gaussian kernel construction.
//!
//! These tests verify the kernel builder used by the smoothing engine for:
//! - Normalization (weights sum to 1)
//! - Symmetry about the center tap
//! - The offset table pairing
//! - Exact values for known configurations
//!
//! ## Test Organization
//!
//! 1. **Normalization** - Weight sums across sizes and sigmas
//! 2. **Symmetry** - Mirror equality, peak placement
//! 3. **Offset Table** - Signed tap positions
//! 4. **Known Values** - Degenerate and reference kernels

use approx::assert_relative_eq;

use gaussmooth::internals::math::kernel::GaussianKernel;

// ============================================================================
// Normalization Tests
// ============================================================================

/// Test that kernel weights sum to 1 for a range of configurations.
///
/// Covers odd and even window sizes and a spread of sigmas, including even
/// sizes where the center falls between two taps.
#[test]
fn test_kernel_sums_to_one() {
    for window_size in [1usize, 2, 3, 4, 5, 7, 8, 15, 16, 31] {
        for sigma in [0.25f64, 0.5, 1.0, 2.0, 10.0] {
            let kernel = GaussianKernel::compute(window_size, sigma);
            let sum: f64 = kernel.weights().iter().sum();
            assert!(
                (sum - 1.0).abs() < 1e-9,
                "kernel sum {sum} for window {window_size}, sigma {sigma}"
            );
        }
    }
}

/// Test that all weights are strictly positive.
#[test]
fn test_kernel_weights_positive() {
    let kernel = GaussianKernel::compute(9, 1.5f64);
    for &w in kernel.weights() {
        assert!(w > 0.0, "weight {w} should be positive");
    }
}

// ============================================================================
// Symmetry Tests
// ============================================================================

/// Test mirror symmetry of the weights.
///
/// Verifies `weights[i] == weights[w-1-i]` for odd and even window sizes.
#[test]
fn test_kernel_symmetry() {
    for window_size in [3usize, 4, 5, 8, 11] {
        let kernel = GaussianKernel::compute(window_size, 1.0f64);
        let weights = kernel.weights();
        for i in 0..window_size {
            assert_relative_eq!(weights[i], weights[window_size - 1 - i], epsilon = 1e-15);
        }
    }
}

/// Test that the center tap carries the largest weight for odd sizes.
#[test]
fn test_kernel_peak_at_center() {
    let kernel = GaussianKernel::compute(7, 1.0f64);
    let weights = kernel.weights();
    let center = weights[3];
    for (i, &w) in weights.iter().enumerate() {
        if i != 3 {
            assert!(w < center, "tap {i} should weigh less than the center");
        }
    }
}

/// Test that weights decay monotonically away from the center.
#[test]
fn test_kernel_monotone_decay() {
    let kernel = GaussianKernel::compute(9, 2.0f64);
    let weights = kernel.weights();
    for i in 0..4 {
        assert!(
            weights[i] < weights[i + 1],
            "weights should increase toward the center"
        );
    }
}

// ============================================================================
// Offset Table Tests
// ============================================================================

/// Test the offset table for an odd window.
///
/// Verifies `offsets[j] = j - floor(w/2)` and the 1:1 pairing with weights.
#[test]
fn test_offsets_odd_window() {
    let kernel = GaussianKernel::compute(5, 1.0f64);
    assert_eq!(kernel.offsets(), &[-2, -1, 0, 1, 2]);
    assert_eq!(kernel.offsets().len(), kernel.weights().len());
}

/// Test the offset table for an even window.
///
/// Even windows are not perfectly centered; the offsets keep the same
/// asymmetric split as the partitioning.
#[test]
fn test_offsets_even_window() {
    let kernel = GaussianKernel::compute(4, 1.0f64);
    assert_eq!(kernel.offsets(), &[-2, -1, 0, 1]);
    assert_eq!(kernel.half_width(), 2);
}

// ============================================================================
// Known Value Tests
// ============================================================================

/// Test the degenerate single-tap kernel.
///
/// A window of 1 must produce the identity kernel `[1.0]` with offset 0.
#[test]
fn test_single_tap_kernel() {
    let kernel = GaussianKernel::compute(1, 1.0f64);
    assert_eq!(kernel.window_size(), 1);
    assert_eq!(kernel.half_width(), 0);
    assert_relative_eq!(kernel.weights()[0], 1.0, epsilon = 1e-15);
    assert_eq!(kernel.offsets(), &[0]);
}

/// Test reference values for window 5, sigma 1.
///
/// Expected weights computed independently from
/// `exp(-x^2/2) / sum` for x in [-2, -1, 0, 1, 2].
#[test]
fn test_reference_kernel_w5_s1() {
    let kernel = GaussianKernel::compute(5, 1.0f64);
    let expected = [0.054488685, 0.244201342, 0.402619947, 0.244201342, 0.054488685];
    for (&got, &want) in kernel.weights().iter().zip(expected.iter()) {
        assert_relative_eq!(got, want, epsilon = 1e-8);
    }
}

/// Test that sigma is stored alongside the tables.
#[test]
fn test_kernel_metadata() {
    let kernel = GaussianKernel::compute(5, 2.5f64);
    assert_eq!(kernel.window_size(), 5);
    assert_relative_eq!(kernel.sigma(), 2.5, epsilon = 1e-15);
}

/// Test that a wide sigma flattens the kernel toward uniform.
#[test]
fn test_wide_sigma_flattens() {
    let kernel = GaussianKernel::compute(5, 1000.0f64);
    for &w in kernel.weights() {
        assert_relative_eq!(w, 0.2, epsilon = 1e-5);
    }
}

/// Test f32 kernels normalize within single-precision tolerance.
#[test]
fn test_kernel_f32() {
    let kernel = GaussianKernel::compute(7, 1.2f32);
    let sum: f32 = kernel.weights().iter().sum();
    assert_relative_eq!(sum, 1.0f32, epsilon = 1e-6);
}
