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

#![no_main]

use libfuzzer_sys::fuzz_target;
use yuv2x::{
    gray_upscale2x, yuv420_upscale2x, yuv422_upscale2x, yuv444_upscale2x, UpscaleMethod,
    YuvChromaSubsampling, YuvGrayImage, YuvGrayImageMut, YuvPlanarImage, YuvPlanarImageMut,
};

fuzz_target!(|data: (u8, u8, u8, u8, u8)| {
    let method = match data.4 % 3 {
        0 => UpscaleMethod::Cgak,
        1 => UpscaleMethod::Bilinear,
        _ => UpscaleMethod::Dirac,
    };
    fuzz_planar(
        YuvChromaSubsampling::Yuv420,
        data.0,
        data.1,
        data.2,
        data.3,
        method,
    );
    fuzz_planar(
        YuvChromaSubsampling::Yuv422,
        data.0,
        data.1,
        data.2,
        data.3,
        method,
    );
    fuzz_planar(
        YuvChromaSubsampling::Yuv444,
        data.0,
        data.1,
        data.2,
        data.3,
        method,
    );
    fuzz_gray(data.0, data.1, data.2, method);
});

fn fuzz_planar(
    subsampling: YuvChromaSubsampling,
    i_width: u8,
    i_height: u8,
    y_value: u8,
    uv_value: u8,
    method: UpscaleMethod,
) {
    if i_height == 0 || i_width == 0 {
        return;
    }
    let (chroma_width, chroma_height) =
        subsampling.chroma_dimensions(i_width as u32, i_height as u32);
    let y_plane = vec![y_value; i_height as usize * i_width as usize];
    let u_plane = vec![uv_value; chroma_width as usize * chroma_height as usize];
    let v_plane = vec![uv_value; chroma_width as usize * chroma_height as usize];

    let planar_image = YuvPlanarImage {
        y_plane: &y_plane,
        y_stride: i_width as u32,
        u_plane: &u_plane,
        u_stride: chroma_width,
        v_plane: &v_plane,
        v_stride: chroma_width,
        width: i_width as u32,
        height: i_height as u32,
    };

    let mut target = YuvPlanarImageMut::<u8>::alloc_2x(&planar_image, subsampling);

    let upscale: fn(
        &YuvPlanarImage<u8>,
        &mut YuvPlanarImageMut<u8>,
        UpscaleMethod,
    ) -> Result<(), yuv2x::YuvError> = match subsampling {
        YuvChromaSubsampling::Yuv420 => yuv420_upscale2x,
        YuvChromaSubsampling::Yuv422 => yuv422_upscale2x,
        YuvChromaSubsampling::Yuv444 => yuv444_upscale2x,
    };
    upscale(&planar_image, &mut target, method).unwrap();
}

fn fuzz_gray(i_width: u8, i_height: u8, y_value: u8, method: UpscaleMethod) {
    if i_height == 0 || i_width == 0 {
        return;
    }
    let y_plane = vec![y_value; i_height as usize * i_width as usize];
    let gray_image = YuvGrayImage {
        y_plane: &y_plane,
        y_stride: i_width as u32,
        width: i_width as u32,
        height: i_height as u32,
    };
    let mut target = YuvGrayImageMut::<u8>::alloc_2x(&gray_image);
    gray_upscale2x(&gray_image, &mut target, method).unwrap();
}
