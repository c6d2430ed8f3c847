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
use crate::yuv_support::YuvChromaSubsampling;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq)]
pub struct MismatchedSize {
    pub expected: usize,
    pub received: usize,
}

/// Configuration contract violations.
///
/// Every variant is fatal for the call that produced it: validation runs
/// before any destination sample is written, so a returned error means the
/// destination is untouched.
#[derive(Debug)]
pub enum YuvError {
    ZeroBaseSize,
    PointerOverflow,
    LumaPlaneSizeMismatch(MismatchedSize),
    LumaPlaneMinimumSizeMismatch(MismatchedSize),
    ChromaPlaneSizeMismatch(MismatchedSize),
    ChromaPlaneMinimumSizeMismatch(MismatchedSize),
    /// Destination frame dimensions are not exactly double the source.
    DestinationNotDoubled {
        expected: (u32, u32),
        received: (u32, u32),
    },
}

impl Display for YuvError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            YuvError::ZeroBaseSize => f.write_str("Zero sized images is not supported"),
            YuvError::PointerOverflow => f.write_str("Image size overflow pointer capabilities"),
            YuvError::LumaPlaneSizeMismatch(size) => f.write_fmt(format_args!(
                "Luma plane have invalid size, it must be {}, but it was {}",
                size.expected, size.received
            )),
            YuvError::LumaPlaneMinimumSizeMismatch(size) => f.write_fmt(format_args!(
                "Luma plane have invalid size, it must be at least {}, but it was {}",
                size.expected, size.received
            )),
            YuvError::ChromaPlaneSizeMismatch(size) => f.write_fmt(format_args!(
                "Chroma plane have invalid size, it must be {}, but it was {}",
                size.expected, size.received
            )),
            YuvError::ChromaPlaneMinimumSizeMismatch(size) => f.write_fmt(format_args!(
                "Chroma plane have invalid size, it must be at least {}, but it was {}",
                size.expected, size.received
            )),
            YuvError::DestinationNotDoubled { expected, received } => f.write_fmt(format_args!(
                "Destination must be exactly {}x{} but it is {}x{}",
                expected.0, expected.1, received.0, received.1
            )),
        }
    }
}

impl Error for YuvError {}

#[inline]
pub(crate) fn check_overflow_v2(v0: usize, v1: usize) -> Result<(), YuvError> {
    let (_, overflow) = v0.overflowing_mul(v1);
    if overflow {
        return Err(YuvError::PointerOverflow);
    }
    Ok(())
}

#[inline]
pub(crate) fn check_y8_channel<V>(
    data: &[V],
    stride: u32,
    width: u32,
    height: u32,
) -> Result<(), YuvError> {
    if width == 0 || height == 0 {
        return Err(YuvError::ZeroBaseSize);
    }
    check_overflow_v2(stride as usize, height as usize)?;
    check_overflow_v2(width as usize, height as usize)?;
    if stride < width {
        return Err(YuvError::LumaPlaneMinimumSizeMismatch(MismatchedSize {
            expected: width as usize * height as usize,
            received: stride as usize * height as usize,
        }));
    }
    if stride as usize * height as usize != data.len() {
        return Err(YuvError::LumaPlaneSizeMismatch(MismatchedSize {
            expected: stride as usize * height as usize,
            received: data.len(),
        }));
    }
    Ok(())
}

#[inline]
pub(crate) fn check_chroma_plane<V>(
    data: &[V],
    stride: u32,
    chroma_width: u32,
    chroma_height: u32,
) -> Result<(), YuvError> {
    if chroma_width == 0 || chroma_height == 0 {
        return Err(YuvError::ZeroBaseSize);
    }
    check_overflow_v2(stride as usize, chroma_height as usize)?;
    check_overflow_v2(chroma_width as usize, chroma_height as usize)?;
    if stride < chroma_width {
        return Err(YuvError::ChromaPlaneMinimumSizeMismatch(MismatchedSize {
            expected: chroma_width as usize * chroma_height as usize,
            received: stride as usize * chroma_height as usize,
        }));
    }
    if stride as usize * chroma_height as usize != data.len() {
        return Err(YuvError::ChromaPlaneSizeMismatch(MismatchedSize {
            expected: stride as usize * chroma_height as usize,
            received: data.len(),
        }));
    }
    Ok(())
}

#[inline]
pub(crate) fn check_chroma_channel<V>(
    data: &[V],
    stride: u32,
    image_width: u32,
    image_height: u32,
    sampling: YuvChromaSubsampling,
) -> Result<(), YuvError> {
    let (chroma_width, chroma_height) = sampling.chroma_dimensions(image_width, image_height);
    check_chroma_plane(data, stride, chroma_width, chroma_height)
}

#[inline]
/// Enforces the 2x output contract before any work begins.
pub(crate) fn check_doubled_dimensions(
    src_width: u32,
    src_height: u32,
    dst_width: u32,
    dst_height: u32,
) -> Result<(), YuvError> {
    let expected_width = src_width as u64 * 2;
    let expected_height = src_height as u64 * 2;
    if expected_width > u32::MAX as u64 || expected_height > u32::MAX as u64 {
        return Err(YuvError::PointerOverflow);
    }
    if dst_width as u64 != expected_width || dst_height as u64 != expected_height {
        return Err(YuvError::DestinationNotDoubled {
            expected: (expected_width as u32, expected_height as u32),
            received: (dst_width, dst_height),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_sized_planes() {
        let data = [0u8; 0];
        assert!(check_y8_channel(&data, 0, 0, 0).is_err());
    }

    #[test]
    fn rejects_stride_shorter_than_row() {
        let data = [0u8; 8];
        assert!(check_y8_channel(&data, 2, 4, 4).is_err());
    }

    #[test]
    fn accepts_padded_stride() {
        let data = [0u8; 24];
        assert!(check_y8_channel(&data, 6, 4, 4).is_ok());
    }

    #[test]
    fn doubled_contract_is_exact() {
        assert!(check_doubled_dimensions(64, 48, 128, 96).is_ok());
        assert!(check_doubled_dimensions(64, 48, 127, 96).is_err());
        assert!(check_doubled_dimensions(64, 48, 128, 97).is_err());
    }
}
