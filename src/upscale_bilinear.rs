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
use crate::numerics::avg2;
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::ParallelSliceMut;

/// Pass 1: fills even destination rows from the source rows.
///
/// Even columns copy the source sample, odd columns hold the rounded
/// average with the right neighbor, the last column duplicates.
pub(crate) fn bilinear_fill_even_rows(
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
        let d = &mut dst_rows[..dst_stride];
        let s = &src[src_stride * j..src_stride * j + width];
        for i in 0..width - 1 {
            d[i * 2] = s[i];
            d[i * 2 + 1] = avg2(s[i], s[i + 1]);
        }
        let i = width - 1;
        d[i * 2] = s[i];
        d[i * 2 + 1] = s[i];
    });
}

/// Doubles one plane with separable bilinear averaging.
pub(crate) fn upscale_plane_bilinear2x(
    src: &[u8],
    src_stride: usize,
    dst: &mut [u8],
    dst_stride: usize,
    width: usize,
    height: usize,
) {
    bilinear_fill_even_rows(src, src_stride, dst, dst_stride, width, height);

    // Pass 2: odd destination rows average the even rows around them. Runs
    // strictly after pass 1 has produced every even row.
    for j in 0..height - 1 {
        let rows = &mut dst[2 * j * dst_stride..(2 * j + 3) * dst_stride];
        let (above, rest) = rows.split_at_mut(dst_stride);
        let (mid, below) = rest.split_at_mut(dst_stride);
        for i in 0..width * 2 {
            mid[i] = avg2(above[i], below[i]);
        }
    }
    // last destination row copies the row above it
    let last = (2 * height - 1) * dst_stride;
    let (head, tail) = dst.split_at_mut(last);
    let above = &head[(2 * height - 2) * dst_stride..];
    tail[..width * 2].copy_from_slice(&above[..width * 2]);
}
