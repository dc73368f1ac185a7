//! Convolution execution engine for Gaussian smoothing.
//!
//! ## Purpose
//!
//! This module applies a precomputed Gaussian kernel to an input sequence,
//! producing an output sequence of identical length. It partitions the output
//! into an interior range, convolved with direct indexing, and two boundary
//! ranges, convolved with edge-clamped indexing.
//!
//! ## Design notes
//!
//! * **Partitioning**: With `half = floor(window_size / 2)`, the interior is
//!   `[half, n - half)` and the boundaries are `[0, half)` and
//!   `[n - half, n)`. Even window sizes yield an asymmetric window; the split
//!   is kept as-is rather than rebalanced.
//! * **Unrolling**: The interior inner loop processes four taps per step with
//!   a scalar tail. This changes only the accumulation grouping, not the
//!   mathematical sum.
//! * **Parallelism**: With the `parallel` feature, the interior is split into
//!   contiguous chunks convolved across CPU cores via `rayon`. Each chunk
//!   writes a disjoint output slice and only reads the shared immutable input
//!   and kernel, so no synchronization is needed beyond the final join.
//! * **Generics**: Generic over `Float` types to support f32 and f64.
//!
//! ## Key concepts
//!
//! * **Clamp-to-edge**: Boundary taps that fall outside the input saturate to
//!   the nearest valid index. This is the sole boundary policy; there is no
//!   zero padding, reflection, or wraparound.
//! * **Convexity**: Weights are non-negative and sum to 1, so every output
//!   value lies within the min/max of the samples its window reads.
//!
//! ## Invariants
//!
//! * `window_size <= n` and `input` is non-empty (enforced by `validator`).
//! * All interior tap indices are in bounds by construction of the interior
//!   range; no clamping is performed there.
//! * Every output index is written exactly once before a pass returns.
//! * The input sequence is never mutated.
//!
//! ## Non-goals
//!
//! * This module does not validate input data (handled by `validator`).
//! * This module does not construct kernels (handled by `math::kernel`).

// Feature-gated imports
#[cfg(feature = "parallel")]
use rayon::prelude::*;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::kernel::GaussianKernel;

// ============================================================================
// Tuning Constants
// ============================================================================

/// Minimum interior length before the parallel pass engages.
///
/// Below this, thread coordination costs more than the convolution itself.
#[cfg(feature = "parallel")]
pub const PARALLEL_THRESHOLD: usize = 16_384;

/// Output samples per parallel chunk.
#[cfg(feature = "parallel")]
pub const PARALLEL_CHUNK: usize = 4_096;

// ============================================================================
// Sequential Smoothing Pass
// ============================================================================

/// Perform a full sequential smoothing pass.
///
/// Writes the interior with direct indexing and both boundaries with
/// edge-clamped indexing. `output` must have the same length as `input`.
pub fn smooth_into<T: Float>(kernel: &GaussianKernel<T>, input: &[T], output: &mut [T]) {
    let n = input.len();
    let half = kernel.half_width();

    convolve_range(kernel, input, half, &mut output[half..n - half]);
    convolve_boundaries(kernel, input, output);
}

/// Convolve a contiguous interior range.
///
/// `out[k]` receives the convolution centered at input index `start + k`.
/// Every tap index is in bounds for interior centers, so no clamping occurs.
pub fn convolve_range<T: Float>(kernel: &GaussianKernel<T>, input: &[T], start: usize, out: &mut [T]) {
    let weights = kernel.weights();
    let offsets = kernel.offsets();

    for (k, slot) in out.iter_mut().enumerate() {
        *slot = convolve_interior(weights, offsets, input, start + k);
    }
}

/// Convolve both boundary ranges with edge-clamped indexing.
///
/// The left boundary is `[0, half)` and the right boundary is
/// `[n - half, n)`; both use the identical clamp formula.
pub fn convolve_boundaries<T: Float>(kernel: &GaussianKernel<T>, input: &[T], output: &mut [T]) {
    let n = input.len();
    let half = kernel.half_width();
    let weights = kernel.weights();
    let offsets = kernel.offsets();

    for i in 0..half {
        output[i] = convolve_clamped(weights, offsets, input, i);
    }
    for i in (n - half)..n {
        output[i] = convolve_clamped(weights, offsets, input, i);
    }
}

// ============================================================================
// Parallel Smoothing Pass
// ============================================================================

/// Perform a full smoothing pass with a parallelized interior.
///
/// Splits the interior into contiguous chunks convolved across CPU cores.
/// Each chunk writes a disjoint output slice, so results are mathematically
/// identical to [`smooth_into`]. Small interiors fall back to the sequential
/// pass; boundary samples are cheap and always remain sequential.
#[cfg(feature = "parallel")]
pub fn smooth_into_parallel<T>(kernel: &GaussianKernel<T>, input: &[T], output: &mut [T])
where
    T: Float + Send + Sync,
{
    let n = input.len();
    let half = kernel.half_width();
    let interior = &mut output[half..n - half];

    if interior.len() < PARALLEL_THRESHOLD {
        convolve_range(kernel, input, half, interior);
    } else {
        interior
            .par_chunks_mut(PARALLEL_CHUNK)
            .enumerate()
            .for_each(|(chunk_idx, chunk)| {
                let start = half + chunk_idx * PARALLEL_CHUNK;
                convolve_range(kernel, input, start, chunk);
            });
    }

    convolve_boundaries(kernel, input, output);
}

// ============================================================================
// Inner Convolution Loops
// ============================================================================

/// Weighted sum at an interior center with direct indexing.
#[inline]
fn convolve_interior<T: Float>(weights: &[T], offsets: &[isize], input: &[T], i: usize) -> T {
    let base = i as isize;
    let taps = weights.len();
    let mut sum = T::zero();

    // Four taps per step; the scalar tail handles the remainder.
    let mut j = 0;
    while j + 4 <= taps {
        let s0 = input[(base + offsets[j]) as usize] * weights[j];
        let s1 = input[(base + offsets[j + 1]) as usize] * weights[j + 1];
        let s2 = input[(base + offsets[j + 2]) as usize] * weights[j + 2];
        let s3 = input[(base + offsets[j + 3]) as usize] * weights[j + 3];
        sum = sum + s0 + s1 + s2 + s3;
        j += 4;
    }
    while j < taps {
        sum = sum + input[(base + offsets[j]) as usize] * weights[j];
        j += 1;
    }

    sum
}

/// Weighted sum at a boundary center with edge-clamped indexing.
#[inline]
fn convolve_clamped<T: Float>(weights: &[T], offsets: &[isize], input: &[T], i: usize) -> T {
    let last = input.len() as isize - 1;
    let base = i as isize;
    let mut sum = T::zero();

    for (weight, offset) in weights.iter().zip(offsets.iter()) {
        let idx = (base + offset).clamp(0, last) as usize;
        sum = sum + input[idx] * *weight;
    }

    sum
}
