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
use image::{GrayImage, ImageBuffer, Luma};
use std::time::Instant;
use yuv2x::{
    gray_upscale2x, yuv420_upscale2x, UpscaleMethod, YuvChromaSubsampling, YuvGrayImage,
    YuvGrayImageMut, YuvPlanarImage, YuvPlanarImageMut,
};

/// Test pattern with diagonal edges at several slopes, a radial gradient
/// and a hard step, so the kernels have something to disagree about.
fn synthesize_luma(width: usize, height: usize) -> Vec<u8> {
    let mut plane = vec![0u8; width * height];
    for (j, row) in plane.chunks_exact_mut(width).enumerate() {
        for (i, px) in row.iter_mut().enumerate() {
            let diagonal = if (i + j) % 64 < 32 { 200 } else { 40 };
            let cx = i as f32 - width as f32 / 2.0;
            let cy = j as f32 - height as f32 / 2.0;
            let radial = ((cx * cx + cy * cy).sqrt() * 0.7) as i32 % 128;
            let step = if i > width * 3 / 4 { 55 } else { 0 };
            *px = ((diagonal + radial + step) as u32).min(255) as u8;
        }
    }
    plane
}

fn main() {
    let width = 640usize;
    let height = 360usize;
    let y_plane = synthesize_luma(width, height);
    let u_plane = vec![128u8; (width / 2) * (height / 2)];
    let v_plane = vec![128u8; (width / 2) * (height / 2)];

    let planar_image = YuvPlanarImage {
        y_plane: &y_plane,
        y_stride: width as u32,
        u_plane: &u_plane,
        u_stride: width as u32 / 2,
        v_plane: &v_plane,
        v_stride: width as u32 / 2,
        width: width as u32,
        height: height as u32,
    };

    for method in [
        UpscaleMethod::Cgak,
        UpscaleMethod::Bilinear,
        UpscaleMethod::Dirac,
    ] {
        let mut target =
            YuvPlanarImageMut::<u8>::alloc_2x(&planar_image, YuvChromaSubsampling::Yuv420);
        let start_time = Instant::now();
        yuv420_upscale2x(&planar_image, &mut target, method).unwrap();
        println!(
            "{:?} planar {}x{} -> {}x{}: {:?}",
            method,
            width,
            height,
            target.width,
            target.height,
            start_time.elapsed()
        );

        let out: GrayImage = ImageBuffer::<Luma<u8>, Vec<u8>>::from_raw(
            target.width,
            target.height,
            target.y_plane.borrow().to_vec(),
        )
        .unwrap();
        out.save(format!("upscaled_{:?}.png", method).to_lowercase())
            .unwrap();
    }

    let gray_image = YuvGrayImage {
        y_plane: &y_plane,
        y_stride: width as u32,
        width: width as u32,
        height: height as u32,
    };
    let mut gray_target = YuvGrayImageMut::<u8>::alloc_2x(&gray_image);
    let start_time = Instant::now();
    gray_upscale2x(&gray_image, &mut gray_target, UpscaleMethod::default()).unwrap();
    println!(
        "default gray {}x{} -> {}x{}: {:?}",
        width,
        height,
        gray_target.width,
        gray_target.height,
        start_time.elapsed()
    );
}
