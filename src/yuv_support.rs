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

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
/// Declares YUV chroma subsampling
pub enum YuvChromaSubsampling {
    /// Chroma planes are halved in both dimensions
    Yuv420 = 0,
    /// Chroma planes are halved horizontally only
    Yuv422 = 1,
    /// Chroma planes match the luma plane
    Yuv444 = 2,
}

impl From<u8> for YuvChromaSubsampling {
    #[inline(always)]
    fn from(value: u8) -> Self {
        match value {
            0 => YuvChromaSubsampling::Yuv420,
            1 => YuvChromaSubsampling::Yuv422,
            2 => YuvChromaSubsampling::Yuv444,
            _ => {
                panic!("Unknown value")
            }
        }
    }
}

impl YuvChromaSubsampling {
    /// Chroma plane dimensions matching a luma plane of `width` x `height`.
    pub fn chroma_dimensions(self, width: u32, height: u32) -> (u32, u32) {
        match self {
            YuvChromaSubsampling::Yuv420 => ((width + 1) / 2, (height + 1) / 2),
            YuvChromaSubsampling::Yuv422 => ((width + 1) / 2, height),
            YuvChromaSubsampling::Yuv444 => (width, height),
        }
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
/// Declares the kernel used to reconstruct the luma plane at 2x resolution.
///
/// Chroma planes always go through the fixed bilinear box path, whichever
/// kernel is selected here.
pub enum UpscaleMethod {
    /// Categorized Gradient Adaptive Kernel. Classifies the local gradient
    /// and interpolates along the edge direction with one of five fixed
    /// directional kernels.
    #[default]
    Cgak,
    /// Separable bilinear averaging.
    Bilinear,
    /// Separable symmetric 8-tap filter with the Dirac half-pel coefficients.
    Dirac,
}
