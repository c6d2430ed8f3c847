/*
 * Copyright (c) Radzivon Bartoshyk, 2/2025. All rights reserved.
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
use crate::numerics::{avg2, avg4};
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::ParallelSliceMut;

/// Produces one destination row pair from a source row and the row below it.
///
/// `below` is `None` on the last source row; the odd destination row then
/// replicates the even one since no vertical neighbor exists.
#[inline(always)]
fn box_upscale_row_pair(
    row: &[u8],
    below: Option<&[u8]>,
    d1: &mut [u8],
    d2: &mut [u8],
    width: usize,
) {
    match below {
        Some(next) => {
            for i in 0..width - 1 {
                d1[i * 2] = row[i];
                d1[i * 2 + 1] = avg2(row[i], row[i + 1]);
                d2[i * 2] = avg2(row[i], next[i]);
                d2[i * 2 + 1] = avg4(row[i], row[i + 1], next[i], next[i + 1]);
            }
            // last column has no right neighbor
            let i = width - 1;
            d1[i * 2] = row[i];
            d1[i * 2 + 1] = row[i];
            d2[i * 2] = avg2(row[i], next[i]);
            d2[i * 2 + 1] = avg2(row[i], next[i]);
        }
        None => {
            for i in 0..width - 1 {
                let even = row[i];
                let odd = avg2(row[i], row[i + 1]);
                d1[i * 2] = even;
                d1[i * 2 + 1] = odd;
                d2[i * 2] = even;
                d2[i * 2 + 1] = odd;
            }
            let i = width - 1;
            d1[i * 2] = row[i];
            d1[i * 2 + 1] = row[i];
            d2[i * 2] = row[i];
            d2[i * 2 + 1] = row[i];
        }
    }
}

/// Doubles one chroma plane with bilinear box interpolation.
///
/// Every even/even destination sample is the source sample itself; odd
/// positions hold the rounded average of the 1x2, 2x1 or 2x2 neighborhood.
/// This path does not depend on the selected luma kernel.
pub(crate) fn upscale_chroma_plane2x(
    src: &[u8],
    src_stride: usize,
    dst: &mut [u8],
    dst_stride: usize,
    width: usize,
    height: usize,
) {
    let dst = &mut dst[..dst_stride * height * 2];

    let iter;
    #[cfg(feature = "rayon")]
    {
        iter = dst.par_chunks_exact_mut(dst_stride * 2);
    }
    #[cfg(not(feature = "rayon"))]
    {
        iter = dst.chunks_exact_mut(dst_stride * 2);
    }

    iter.enumerate().for_each(|(j, dst_rows)| {
        let (d1, d2) = dst_rows.split_at_mut(dst_stride);
        let row = &src[src_stride * j..src_stride * j + width];
        let below = if j + 1 < height {
            Some(&src[src_stride * (j + 1)..src_stride * (j + 1) + width])
        } else {
            None
        };
        box_upscale_row_pair(row, below, d1, d2, width);
    });
}
