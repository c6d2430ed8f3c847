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
use crate::numerics::{clamp_tap, qrshr};
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::ParallelSliceMut;

/// Half-pel interpolation coefficients from the Dirac wavelet codec,
/// normalized by 32.
const DIRAC_TAPS: [i32; 8] = [-1, 3, -7, 21, 21, -7, 3, -1];

#[inline(always)]
fn dirac_tap_h(row: &[u8], width: usize, i: usize) -> u8 {
    let mut x = 0i32;
    for (k, tap) in DIRAC_TAPS.iter().enumerate() {
        let pos = clamp_tap(i as isize + k as isize - 3, width - 1);
        x += row[pos] as i32 * tap;
    }
    qrshr::<5>(x)
}

/// Doubles one plane with the separable Dirac 8-tap filter.
///
/// Taps reaching past a plane edge are clamped onto the edge sample; the
/// vertical pass walks even destination row slots only.
pub(crate) fn upscale_plane_dirac2x(
    src: &[u8],
    src_stride: usize,
    dst: &mut [u8],
    dst_stride: usize,
    width: usize,
    height: usize,
) {
    // Pass 1: even destination rows, odd columns filtered horizontally.
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
        let d = &mut dst_rows[..dst_stride];
        let s = &src[src_stride * j..src_stride * j + width];
        for i in 0..width {
            d[i * 2] = s[i];
            d[i * 2 + 1] = dirac_tap_h(s, width, i);
        }
    });

    // Pass 2: odd destination rows filtered vertically over the even rows
    // produced above. Row slots are clamped into [0, 2*height - 2].
    let last_slot = 2 * height - 2;
    for j in 0..height {
        for i in 0..width * 2 {
            let mut x = 0i32;
            for (k, tap) in DIRAC_TAPS.iter().enumerate() {
                let slot = clamp_tap(2 * j as isize + 2 * (k as isize - 3), last_slot);
                x += dst[slot * dst_stride + i] as i32 * tap;
            }
            dst[(2 * j + 1) * dst_stride + i] = qrshr::<5>(x);
        }
    }
}
