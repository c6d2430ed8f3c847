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
//! # yuv2x
//!
//! Doubles planar 8-bit YUV frames in both dimensions. The luma plane is
//! reconstructed with a selectable kernel ([`UpscaleMethod`]): the
//! edge-direction-adaptive CGAK kernel, plain bilinear averaging, or the
//! separable Dirac 8-tap filter. Chroma planes always take a fixed bilinear
//! box path, whichever kernel is selected.
//!
//! ```no_run
//! use yuv2x::{yuv420_upscale2x, UpscaleMethod, YuvPlanarImage, YuvPlanarImageMut, YuvChromaSubsampling};
//!
//! # let (width, height) = (320u32, 240u32);
//! # let y = vec![0u8; 320 * 240];
//! # let u = vec![0u8; 160 * 120];
//! # let v = vec![0u8; 160 * 120];
//! let image = YuvPlanarImage {
//!     y_plane: &y,
//!     y_stride: width,
//!     u_plane: &u,
//!     u_stride: width / 2,
//!     v_plane: &v,
//!     v_stride: width / 2,
//!     width,
//!     height,
//! };
//! let mut target = YuvPlanarImageMut::<u8>::alloc_2x(&image, YuvChromaSubsampling::Yuv420);
//! yuv420_upscale2x(&image, &mut target, UpscaleMethod::default()).unwrap();
//! ```
mod dimensions;
mod images;
mod numerics;
mod upscale_bilinear;
mod upscale_cgak;
mod upscale_chroma;
mod upscale_dirac;
mod yuv_error;
mod yuv_support;
mod yuv_upscale;

pub use dimensions::{doubled_extent, halved_extent, ExtentRange};
pub use images::{
    BufferStoreMut, YuvGrayImage, YuvGrayImageMut, YuvPlanarImage, YuvPlanarImageMut,
};
pub use yuv_error::{MismatchedSize, YuvError};
pub use yuv_support::{UpscaleMethod, YuvChromaSubsampling};
pub use yuv_upscale::{gray_upscale2x, yuv420_upscale2x, yuv422_upscale2x, yuv444_upscale2x};
