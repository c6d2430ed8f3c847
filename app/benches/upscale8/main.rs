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
use criterion::{criterion_group, criterion_main, Criterion};
use yuv2x::{
    gray_upscale2x, yuv420_upscale2x, UpscaleMethod, YuvChromaSubsampling, YuvGrayImage,
    YuvGrayImageMut, YuvPlanarImage, YuvPlanarImageMut,
};

fn synthesize_plane(width: usize, height: usize, seed: u8) -> Vec<u8> {
    (0..width * height)
        .map(|v| ((v * 31 + seed as usize * 17) % 256) as u8)
        .collect()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let width = 1280u32;
    let height = 720u32;
    let y_plane = synthesize_plane(width as usize, height as usize, 3);
    let u_plane = synthesize_plane(width as usize / 2, height as usize / 2, 5);
    let v_plane = synthesize_plane(width as usize / 2, height as usize / 2, 7);

    let planar_image = YuvPlanarImage {
        y_plane: &y_plane,
        y_stride: width,
        u_plane: &u_plane,
        u_stride: width / 2,
        v_plane: &v_plane,
        v_stride: width / 2,
        width,
        height,
    };

    c.bench_function("yuv2x YUV 4:2:0 cgak", |b| {
        let mut target =
            YuvPlanarImageMut::<u8>::alloc_2x(&planar_image, YuvChromaSubsampling::Yuv420);
        b.iter(|| {
            yuv420_upscale2x(&planar_image, &mut target, UpscaleMethod::Cgak).unwrap();
        })
    });

    c.bench_function("yuv2x YUV 4:2:0 bilinear", |b| {
        let mut target =
            YuvPlanarImageMut::<u8>::alloc_2x(&planar_image, YuvChromaSubsampling::Yuv420);
        b.iter(|| {
            yuv420_upscale2x(&planar_image, &mut target, UpscaleMethod::Bilinear).unwrap();
        })
    });

    c.bench_function("yuv2x YUV 4:2:0 dirac", |b| {
        let mut target =
            YuvPlanarImageMut::<u8>::alloc_2x(&planar_image, YuvChromaSubsampling::Yuv420);
        b.iter(|| {
            yuv420_upscale2x(&planar_image, &mut target, UpscaleMethod::Dirac).unwrap();
        })
    });

    let gray_image = YuvGrayImage {
        y_plane: &y_plane,
        y_stride: width,
        width,
        height,
    };

    c.bench_function("yuv2x gray cgak", |b| {
        let mut target = YuvGrayImageMut::<u8>::alloc_2x(&gray_image);
        b.iter(|| {
            gray_upscale2x(&gray_image, &mut target, UpscaleMethod::Cgak).unwrap();
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
