/*
 * Copyright (c) Radzivon Bartoshyk, 3/2025. All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without modification,
 * are permitted provided that the following conditions are met:
 *
 * 1.  Redistributions of source code must retain the above copyright notice, this
 * list of conditions and the following disclaimer.
 *
 * 2.  Redistributions in binary form must reproduce the above copyright notice,
 * this list of conditions and the following disclaimer in the documentation
 * and/or other materials provided with the distribution.
 *
 * 3.  Neither the name of the copyright holder nor the names of its
 * contributors may be used to endorse or promote products derived from
 * this software without specific prior written permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::numerics::{avg2, qrshr};
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::ParallelSliceMut;

/// Rows/columns this close to a plane edge lack the neighborhood the
/// gradient analysis needs and take the averaging fallback instead.
const MARGIN: usize = 3;

/// The five directional kernels, steepest diagonal first. Each entry holds
/// the four distinct weights of a symmetric 8-tap whose halves mirror around
/// the sample pair being reconstructed; every set sums to 16 per half.
const CGAK_KERNELS: [[i32; 4]; 5] = [
    [0, 0, 0, 16],
    [0, 0, 8, 8],
    [0, 4, 8, 4],
    [1, 7, 7, 1],
    [4, 8, 4, 0],
];

/// Local gradient estimates over a 2x3 neighborhood: the sample pair being
/// bridged (`m0`, `m1`) and its predecessors/successors along the filter
/// axis (`a*` above or left, `b*` below or right).
#[inline(always)]
fn local_gradients(a0: u8, m0: u8, b0: u8, a1: u8, m1: u8, b1: u8) -> (i32, i32, i32) {
    let (a0, m0, b0) = (a0 as i32, m0 as i32, b0 as i32);
    let (a1, m1, b1) = (a1 as i32, m1 as i32, b1 as i32);
    let dx = 2 * (-a0 - a1 + b0 + b1);
    let dy = -a0 - 2 * m0 - b0 + a1 + 2 * m1 + b1;
    let dx2 = -a0 + 2 * m0 - b0 - a1 + 2 * m1 - b1;
    (dx, dy, dx2)
}

/// Kernel bucket by slope magnitude; caller guarantees `dy >= 0` and a
/// non-flat gradient.
#[inline(always)]
fn kernel_for_slope(dx_mag: i32, dy: i32) -> [i32; 4] {
    if dx_mag > 2 * dy {
        CGAK_KERNELS[0]
    } else if dx_mag > dy {
        CGAK_KERNELS[1]
    } else if 2 * dx_mag > dy {
        CGAK_KERNELS[2]
    } else if 3 * dx_mag > dy {
        CGAK_KERNELS[3]
    } else {
        CGAK_KERNELS[4]
    }
}

/// Directional 8-tap over source rows: weights walk `row_step` away from the
/// base sample and mirror toward the next column. `row_step` is negated to
/// extend the taps along the opposite diagonal.
#[inline(always)]
fn reconstruct_v(src: &[u8], idx: usize, row_step: isize, w: [i32; 4]) -> u8 {
    let tap = |rows: isize, col: usize| -> i32 {
        src[(idx as isize + rows * row_step) as usize + col] as i32
    };
    let x = tap(-3, 0) * w[0]
        + tap(-2, 0) * w[1]
        + tap(-1, 0) * w[2]
        + tap(0, 0) * w[3]
        + tap(0, 1) * w[3]
        + tap(1, 1) * w[2]
        + tap(2, 1) * w[1]
        + tap(3, 1) * w[0];
    qrshr::<5>(x)
}

/// The pass-2 mirror of [`reconstruct_v`]: taps walk left along `r1` and
/// right along `r2`. Swapping the row arguments flips the diagonal.
#[inline(always)]
fn reconstruct_h(r1: &[u8], r2: &[u8], i: usize, w: [i32; 4]) -> u8 {
    let x = r1[i - 3] as i32 * w[0]
        + r1[i - 2] as i32 * w[1]
        + r1[i - 1] as i32 * w[2]
        + r1[i] as i32 * w[3]
        + r2[i] as i32 * w[3]
        + r2[i + 1] as i32 * w[2]
        + r2[i + 2] as i32 * w[1]
        + r2[i + 3] as i32 * w[0];
    qrshr::<5>(x)
}

/// Doubles one plane with the Categorized Gradient Adaptive Kernel.
///
/// Pass 1 fills even destination rows, reconstructing odd columns along the
/// dominant local edge direction; pass 2 repeats the analysis rotated 90
/// degrees over the finished even rows to fill the odd rows. Rows and
/// columns inside the 3-sample margin take plain averages, and the final
/// destination row pair replicates its anchors.
pub(crate) fn upscale_plane_cgak2x(
    src: &[u8],
    src_stride: usize,
    dst: &mut [u8],
    dst_stride: usize,
    width: usize,
    height: usize,
) {
    let pass1 = &mut dst[..dst_stride * height * 2];

    let iter;
    #[cfg(feature = "rayon")]
    {
        iter = pass1.par_chunks_exact_mut(dst_stride * 2);
    }
    #[cfg(not(feature = "rayon"))]
    {
        iter = pass1.chunks_exact_mut(dst_stride * 2);
    }

    iter.enumerate().for_each(|(j, dst_rows)| {
        let row = &src[src_stride * j..src_stride * j + width];

        if j >= MARGIN && j + MARGIN + 1 < height {
            let d = &mut dst_rows[..dst_stride];
            let above = &src[src_stride * (j - 1)..src_stride * (j - 1) + width];
            let below = &src[src_stride * (j + 1)..src_stride * (j + 1) + width];

            for i in 0..width - 1 {
                let (mut dx, mut dy, dx2) = local_gradients(
                    above[i],
                    row[i],
                    below[i],
                    above[i + 1],
                    row[i + 1],
                    below[i + 1],
                );

                // edge direction is defined up to a sign flip
                if dy < 0 {
                    dy = -dy;
                    dx = -dx;
                }

                let v = if dx.abs() <= 4 * dx2.abs() {
                    // no clear diagonal, plain average
                    avg2(row[i], row[i + 1])
                } else {
                    let w = kernel_for_slope(dx.abs(), dy);
                    let idx = src_stride * j + i;
                    if dx < 0 {
                        reconstruct_v(src, idx, src_stride as isize, w)
                    } else {
                        reconstruct_v(src, idx, -(src_stride as isize), w)
                    }
                };
                d[i * 2] = row[i];
                d[i * 2 + 1] = v;
            }
            let i = width - 1;
            d[i * 2] = row[i];
            d[i * 2 + 1] = row[i];
        } else {
            // margin rows: both parity rows take the averaging fallback
            let (d1, d2) = dst_rows.split_at_mut(dst_stride);
            for i in 0..width - 1 {
                let v = avg2(row[i], row[i + 1]);
                d1[i * 2] = row[i];
                d1[i * 2 + 1] = v;
                d2[i * 2] = row[i];
                d2[i * 2 + 1] = v;
            }
            let i = width - 1;
            d1[i * 2] = row[i];
            d1[i * 2 + 1] = row[i];
            d2[i * 2] = row[i];
            d2[i * 2 + 1] = row[i];
        }
    });

    // Pass 2 needs every even row from pass 1, rotated analysis per column.
    for j in 0..height - 1 {
        let rows = &mut dst[2 * j * dst_stride..(2 * j + 3) * dst_stride];
        let (d1, rest) = rows.split_at_mut(dst_stride);
        let (d2, d3) = rest.split_at_mut(dst_stride);

        for i in 0..width * 2 {
            d2[i] = if i >= MARGIN && i + MARGIN + 1 < width * 2 {
                let (mut dx, mut dy, dx2) = local_gradients(
                    d1[i - 1],
                    d1[i],
                    d1[i + 1],
                    d3[i - 1],
                    d3[i],
                    d3[i + 1],
                );

                if dy < 0 {
                    dy = -dy;
                    dx = -dx;
                }

                if dx.abs() <= 4 * dx2.abs() {
                    avg2(d1[i], d3[i])
                } else {
                    let w = kernel_for_slope(dx.abs(), dy);
                    if dx < 0 {
                        reconstruct_h(d1, d3, i, w)
                    } else {
                        reconstruct_h(d3, d1, i, w)
                    }
                }
            } else {
                avg2(d1[i], d3[i])
            };
        }
    }

    // The last source row has nothing below it; replicate its anchors into
    // both remaining destination rows.
    let rows = &mut dst[2 * (height - 1) * dst_stride..];
    let (d1, d2) = rows.split_at_mut(dst_stride);
    for i in 0..width {
        let v = d1[i * 2];
        d1[i * 2 + 1] = v;
        d2[i * 2] = v;
        d2[i * 2 + 1] = v;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upscale_bilinear::upscale_plane_bilinear2x;
    use rand::Rng;

    #[test]
    fn flat_8x8_upscales_to_flat_16x16() {
        let src = vec![100u8; 8 * 8];
        let mut dst = vec![0u8; 16 * 16];
        upscale_plane_cgak2x(&src, 8, &mut dst, 16, 8, 8);
        assert!(dst.iter().all(|&v| v == 100));
    }

    #[test]
    fn even_positions_keep_source_samples() {
        let width = 21usize;
        let height = 19usize;
        let mut rng = rand::rng();
        let src: Vec<u8> = (0..width * height).map(|_| rng.random()).collect();
        let mut dst = vec![0u8; width * height * 4];
        upscale_plane_cgak2x(&src, width, &mut dst, width * 2, width, height);
        for j in 0..height {
            for i in 0..width {
                assert_eq!(
                    dst[j * 2 * width * 2 + i * 2],
                    src[j * width + i],
                    "anchor mismatch at {}x{}",
                    i,
                    j
                );
            }
        }
    }

    #[test]
    fn output_is_a_convex_combination_of_the_source() {
        // every kernel weight is non-negative and each sums to 32, so no
        // sample can leave the source value range
        let width = 24usize;
        let height = 18usize;
        let mut rng = rand::rng();
        let src: Vec<u8> = (0..width * height)
            .map(|_| rng.random_range(40..200))
            .collect();
        let lo = *src.iter().min().unwrap();
        let hi = *src.iter().max().unwrap();
        let mut dst = vec![0u8; width * height * 4];
        upscale_plane_cgak2x(&src, width, &mut dst, width * 2, width, height);
        assert!(dst.iter().all(|&v| v >= lo && v <= hi));
    }

    #[test]
    fn gradient_free_plane_matches_bilinear() {
        // with all rows identical the flatness test short-circuits every
        // column, which must reduce to the bilinear averages
        let width = 16usize;
        let height = 12usize;
        let row: Vec<u8> = (0..width).map(|v| (v * v * 7 % 256) as u8).collect();
        let src: Vec<u8> = (0..height).flat_map(|_| row.iter().copied()).collect();

        let mut cgak = vec![0u8; width * height * 4];
        upscale_plane_cgak2x(&src, width, &mut cgak, width * 2, width, height);
        let mut bilinear = vec![0u8; width * height * 4];
        upscale_plane_bilinear2x(&src, width, &mut bilinear, width * 2, width, height);

        // the sentinel row pair intentionally diverges from bilinear
        for j in 0..height * 2 - 2 {
            for i in 0..width * 2 {
                assert_eq!(
                    cgak[j * width * 2 + i],
                    bilinear[j * width * 2 + i],
                    "row {} col {}",
                    j,
                    i
                );
            }
        }
    }

    #[test]
    fn diagonal_edge_selects_a_directional_kernel() {
        // hand-built neighborhood around row 4, columns 2..=3: gradients
        // come out as dx = -640, dy = 320, dx2 = 100, which passes the
        // flatness test and lands in the second kernel bucket walking
        // downward, so the taps read rows 3..=5 with weights (8,8,8,8)
        let width = 5usize;
        let height = 12usize;
        let mut src = vec![100u8; width * height];
        src[3 * width + 2] = 230;
        src[3 * width + 3] = 230;
        src[4 * width + 3] = 250;
        src[5 * width + 2] = 60;
        src[5 * width + 3] = 80;

        let mut dst = vec![0u8; width * height * 4];
        upscale_plane_cgak2x(&src, width, &mut dst, width * 2, width, height);

        // (8 * (230 + 100 + 250 + 80) + 16) >> 5
        assert_eq!(dst[8 * width * 2 + 5], 165);
        // the anchor next to it is untouched
        assert_eq!(dst[8 * width * 2 + 4], 100);
        // bilinear on the same pair would give (100 + 250 + 1) >> 1
        assert_ne!(dst[8 * width * 2 + 5], 175);
    }

    #[test]
    fn last_row_pair_replicates_anchors() {
        let width = 9usize;
        let height = 10usize;
        let mut rng = rand::rng();
        let src: Vec<u8> = (0..width * height).map(|_| rng.random()).collect();
        let mut dst = vec![0u8; width * height * 4];
        upscale_plane_cgak2x(&src, width, &mut dst, width * 2, width, height);
        let d1 = (height * 2 - 2) * width * 2;
        let d2 = (height * 2 - 1) * width * 2;
        for i in 0..width {
            let anchor = src[(height - 1) * width + i];
            assert_eq!(dst[d1 + i * 2], anchor);
            assert_eq!(dst[d1 + i * 2 + 1], anchor);
            assert_eq!(dst[d2 + i * 2], anchor);
            assert_eq!(dst[d2 + i * 2 + 1], anchor);
        }
    }
}
