//! Gaussian kernel construction.
//!
//! ## Purpose
//!
//! This module builds the normalized Gaussian weight kernel and its matching
//! tap-offset table. The kernel defines how strongly each neighboring sample
//! influences a smoothed output value; the offsets give each tap's position
//! relative to the center sample.
//!
//! ## Design notes
//!
//! * **Symmetry**: Gaussian weights are mirror-symmetric about the center, so
//!   only the lower half of the taps is evaluated and each weight is assigned
//!   to its mirror as well.
//! * **Normalization**: Taps are scaled by a single precomputed reciprocal of
//!   the weight sum. Multiplying every tap by one reciprocal keeps rounding
//!   error uniform across taps.
//! * **Immutability**: A computed kernel is a read-only value object; the
//!   weight and offset tables are never mutated after construction.
//!
//! ## Key concepts
//!
//! * **Center**: `(window_size - 1) / 2` as a real number. For even window
//!   sizes this lands between two taps and every tap has a distinct mirror.
//! * **Offset table**: `offsets[j] = j - floor(window_size / 2)`, pairing 1:1
//!   with the weight table.
//!
//! ## Invariants
//!
//! * Weights are non-negative, symmetric (`weights[i] == weights[w-1-i]`),
//!   and sum to 1 within floating-point tolerance for every valid
//!   `(window_size, sigma)`, even window sizes included.
//! * `weights.len() == offsets.len() == window_size`.
//!
//! ## Non-goals
//!
//! * This module does not validate parameters (handled by the engine's
//!   `Validator`).
//! * This module does not perform the convolution itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// Gaussian Kernel
// ============================================================================

/// A normalized, symmetric Gaussian convolution kernel.
///
/// Owns the weight vector and the signed tap-offset table. Both are computed
/// once at construction and never mutated; the filter handle that owns the
/// kernel amortizes this cost across many smoothing calls.
#[derive(Debug, Clone)]
pub struct GaussianKernel<T> {
    /// Normalized tap weights, symmetric about the center index.
    weights: Vec<T>,

    /// Signed tap positions relative to the center sample.
    offsets: Vec<isize>,

    /// Standard deviation the weights were derived from.
    sigma: T,
}

impl<T: Float> GaussianKernel<T> {
    /// Compute the kernel for the given window size and sigma.
    ///
    /// Parameters are assumed to be validated already (`window_size >= 1`,
    /// `sigma` positive and finite); see `engine::validator`.
    ///
    /// Evaluates `exp(-x^2 / (2 sigma^2))` for the lower half of the taps
    /// only, mirrors each weight to the upper half, then normalizes every tap
    /// by the reciprocal of the accumulated sum so the kernel sums to 1.
    pub fn compute(window_size: usize, sigma: T) -> Self {
        let mut weights = vec![T::zero(); window_size];

        let center = T::from(window_size - 1).unwrap() / T::from(2).unwrap();
        let two_sigma_squared = T::from(2).unwrap() * sigma * sigma;
        let mut sum = T::zero();

        // Lower half inclusive of the center tap for odd sizes. Iterating to
        // (window_size - 1) / 2 visits each mirrored pair exactly once, so
        // the sum counts every tap once regardless of window parity.
        let lower_half = (window_size - 1) / 2;
        for i in 0..=lower_half {
            let x = T::from(i).unwrap() - center;
            let weight = (-(x * x) / two_sigma_squared).exp();

            weights[i] = weight;
            let mirror = window_size - 1 - i;
            if mirror != i {
                weights[mirror] = weight;
                sum = sum + weight + weight;
            } else {
                sum = sum + weight;
            }
        }

        // Normalize with a single precomputed reciprocal.
        let normalization = T::one() / sum;
        for weight in weights.iter_mut() {
            *weight = *weight * normalization;
        }

        let half = (window_size / 2) as isize;
        let offsets: Vec<isize> = (0..window_size as isize).map(|j| j - half).collect();

        Self {
            weights,
            offsets,
            sigma,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of taps in the kernel.
    #[inline]
    pub fn window_size(&self) -> usize {
        self.weights.len()
    }

    /// Half-window `floor(window_size / 2)`, the width of each boundary
    /// region.
    #[inline]
    pub fn half_width(&self) -> usize {
        self.weights.len() / 2
    }

    /// Normalized tap weights.
    #[inline]
    pub fn weights(&self) -> &[T] {
        &self.weights
    }

    /// Signed tap offsets relative to the center sample.
    #[inline]
    pub fn offsets(&self) -> &[isize] {
        &self.offsets
    }

    /// Standard deviation the kernel was built from.
    #[inline]
    pub fn sigma(&self) -> T {
        self.sigma
    }
}
