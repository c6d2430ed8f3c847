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
use crate::upscale_bilinear::upscale_plane_bilinear2x;
use crate::upscale_cgak::upscale_plane_cgak2x;
use crate::upscale_chroma::upscale_chroma_plane2x;
use crate::upscale_dirac::upscale_plane_dirac2x;
use crate::yuv_error::{check_chroma_plane, check_doubled_dimensions, check_y8_channel};
use crate::yuv_support::{UpscaleMethod, YuvChromaSubsampling};
use crate::{YuvError, YuvGrayImage, YuvGrayImageMut, YuvPlanarImage, YuvPlanarImageMut};
use log::debug;

type PlaneUpscaler = fn(&[u8], usize, &mut [u8], usize, usize, usize);

fn make_luma_upscaler(method: UpscaleMethod) -> PlaneUpscaler {
    match method {
        UpscaleMethod::Cgak => upscale_plane_cgak2x,
        UpscaleMethod::Bilinear => upscale_plane_bilinear2x,
        UpscaleMethod::Dirac => upscale_plane_dirac2x,
    }
}

fn upscale_planar_impl<const SAMPLING: u8>(
    image: &YuvPlanarImage<u8>,
    destination: &mut YuvPlanarImageMut<u8>,
    method: UpscaleMethod,
) -> Result<(), YuvError> {
    let subsampling: YuvChromaSubsampling = SAMPLING.into();
    image.check_constraints(subsampling)?;
    check_doubled_dimensions(
        image.width,
        image.height,
        destination.width,
        destination.height,
    )?;
    check_y8_channel(
        destination.y_plane.borrow(),
        destination.y_stride,
        destination.width,
        destination.height,
    )?;
    let (chroma_width, chroma_height) = subsampling.chroma_dimensions(image.width, image.height);
    check_chroma_plane(
        destination.u_plane.borrow(),
        destination.u_stride,
        chroma_width * 2,
        chroma_height * 2,
    )?;
    check_chroma_plane(
        destination.v_plane.borrow(),
        destination.v_stride,
        chroma_width * 2,
        chroma_height * 2,
    )?;

    debug!(
        "Upscaling {}x{} -> {}x{}, method {:?}",
        image.width, image.height, destination.width, destination.height, method
    );

    let luma_upscaler = make_luma_upscaler(method);
    luma_upscaler(
        image.y_plane,
        image.y_stride as usize,
        destination.y_plane.as_mut(),
        destination.y_stride as usize,
        image.width as usize,
        image.height as usize,
    );

    // chroma never depends on the selected luma kernel
    upscale_chroma_plane2x(
        image.u_plane,
        image.u_stride as usize,
        destination.u_plane.as_mut(),
        destination.u_stride as usize,
        chroma_width as usize,
        chroma_height as usize,
    );
    upscale_chroma_plane2x(
        image.v_plane,
        image.v_stride as usize,
        destination.v_plane.as_mut(),
        destination.v_stride as usize,
        chroma_width as usize,
        chroma_height as usize,
    );

    Ok(())
}

/// Upscale YUV 420 planar format image to exactly doubled size.
///
/// The destination must be pre-allocated with every plane exactly double
/// the matching source plane in both dimensions; nothing is written when a
/// constraint is violated.
///
/// # Arguments
///
/// * `image` - Source planar image.
/// * `destination` - Target planar image, pre-sized at 2x.
/// * `method` - Luma reconstruction kernel; chroma planes always use the
///   fixed bilinear box path.
pub fn yuv420_upscale2x(
    image: &YuvPlanarImage<u8>,
    destination: &mut YuvPlanarImageMut<u8>,
    method: UpscaleMethod,
) -> Result<(), YuvError> {
    upscale_planar_impl::<{ YuvChromaSubsampling::Yuv420 as u8 }>(image, destination, method)
}

/// Upscale YUV 422 planar format image to exactly doubled size.
///
/// The destination must be pre-allocated with every plane exactly double
/// the matching source plane in both dimensions; nothing is written when a
/// constraint is violated.
///
/// # Arguments
///
/// * `image` - Source planar image.
/// * `destination` - Target planar image, pre-sized at 2x.
/// * `method` - Luma reconstruction kernel; chroma planes always use the
///   fixed bilinear box path.
pub fn yuv422_upscale2x(
    image: &YuvPlanarImage<u8>,
    destination: &mut YuvPlanarImageMut<u8>,
    method: UpscaleMethod,
) -> Result<(), YuvError> {
    upscale_planar_impl::<{ YuvChromaSubsampling::Yuv422 as u8 }>(image, destination, method)
}

/// Upscale YUV 444 planar format image to exactly doubled size.
///
/// The destination must be pre-allocated with every plane exactly double
/// the matching source plane in both dimensions; nothing is written when a
/// constraint is violated.
///
/// # Arguments
///
/// * `image` - Source planar image.
/// * `destination` - Target planar image, pre-sized at 2x.
/// * `method` - Luma reconstruction kernel; chroma planes always use the
///   fixed bilinear box path.
pub fn yuv444_upscale2x(
    image: &YuvPlanarImage<u8>,
    destination: &mut YuvPlanarImageMut<u8>,
    method: UpscaleMethod,
) -> Result<(), YuvError> {
    upscale_planar_impl::<{ YuvChromaSubsampling::Yuv444 as u8 }>(image, destination, method)
}

/// Upscale a single-plane (grayscale) image to exactly doubled size.
///
/// # Arguments
///
/// * `image` - Source gray image.
/// * `destination` - Target gray image, pre-sized at 2x.
/// * `method` - Reconstruction kernel.
pub fn gray_upscale2x(
    image: &YuvGrayImage<u8>,
    destination: &mut YuvGrayImageMut<u8>,
    method: UpscaleMethod,
) -> Result<(), YuvError> {
    image.check_constraints()?;
    check_doubled_dimensions(
        image.width,
        image.height,
        destination.width,
        destination.height,
    )?;
    check_y8_channel(
        destination.y_plane.borrow(),
        destination.y_stride,
        destination.width,
        destination.height,
    )?;

    debug!(
        "Upscaling gray {}x{} -> {}x{}, method {:?}",
        image.width, image.height, destination.width, destination.height, method
    );

    let upscaler = make_luma_upscaler(method);
    upscaler(
        image.y_plane,
        image.y_stride as usize,
        destination.y_plane.as_mut(),
        destination.y_stride as usize,
        image.width as usize,
        image.height as usize,
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::images::BufferStoreMut;
    use rand::Rng;

    const METHODS: [UpscaleMethod; 3] = [
        UpscaleMethod::Cgak,
        UpscaleMethod::Bilinear,
        UpscaleMethod::Dirac,
    ];

    fn make_planar(
        width: u32,
        height: u32,
        subsampling: YuvChromaSubsampling,
        mut fill: impl FnMut() -> u8,
    ) -> (Vec<u8>, Vec<u8>, Vec<u8>) {
        let (cw, ch) = subsampling.chroma_dimensions(width, height);
        let y = (0..width as usize * height as usize)
            .map(|_| fill())
            .collect();
        let u = (0..cw as usize * ch as usize).map(|_| fill()).collect();
        let v = (0..cw as usize * ch as usize).map(|_| fill()).collect();
        (y, u, v)
    }

    #[test]
    fn constant_frame_stays_constant_for_every_method() {
        let mut rng = rand::rng();
        let k: u8 = rng.random_range(1..255);
        for subsampling in [
            YuvChromaSubsampling::Yuv420,
            YuvChromaSubsampling::Yuv422,
            YuvChromaSubsampling::Yuv444,
        ] {
            let (y, u, v) = make_planar(16, 12, subsampling, || k);
            let (cw, _) = subsampling.chroma_dimensions(16, 12);
            let image = YuvPlanarImage {
                y_plane: &y,
                y_stride: 16,
                u_plane: &u,
                u_stride: cw,
                v_plane: &v,
                v_stride: cw,
                width: 16,
                height: 12,
            };
            for method in METHODS {
                let mut destination = YuvPlanarImageMut::<u8>::alloc_2x(&image, subsampling);
                let upscale: fn(
                    &YuvPlanarImage<u8>,
                    &mut YuvPlanarImageMut<u8>,
                    UpscaleMethod,
                ) -> Result<(), YuvError> = match subsampling {
                    YuvChromaSubsampling::Yuv420 => yuv420_upscale2x,
                    YuvChromaSubsampling::Yuv422 => yuv422_upscale2x,
                    YuvChromaSubsampling::Yuv444 => yuv444_upscale2x,
                };
                upscale(&image, &mut destination, method).unwrap();
                assert!(destination.y_plane.borrow().iter().all(|&s| s == k));
                assert!(destination.u_plane.borrow().iter().all(|&s| s == k));
                assert!(destination.v_plane.borrow().iter().all(|&s| s == k));
            }
        }
    }

    #[test]
    fn rejects_not_doubled_destination_before_any_write() {
        let mut rng = rand::rng();
        let (y, u, v) = make_planar(64, 48, YuvChromaSubsampling::Yuv420, || rng.random());
        let image = YuvPlanarImage {
            y_plane: &y,
            y_stride: 64,
            u_plane: &u,
            u_stride: 32,
            v_plane: &v,
            v_stride: 32,
            width: 64,
            height: 48,
        };

        let mut dst_y = vec![0xABu8; 127 * 96];
        let mut dst_u = vec![0xABu8; 64 * 48];
        let mut dst_v = vec![0xABu8; 64 * 48];
        let mut destination = YuvPlanarImageMut {
            y_plane: BufferStoreMut::Borrowed(&mut dst_y),
            y_stride: 127,
            u_plane: BufferStoreMut::Borrowed(&mut dst_u),
            u_stride: 64,
            v_plane: BufferStoreMut::Borrowed(&mut dst_v),
            v_stride: 64,
            width: 127,
            height: 96,
        };

        let result = yuv420_upscale2x(&image, &mut destination, UpscaleMethod::Cgak);
        assert!(matches!(
            result,
            Err(YuvError::DestinationNotDoubled { .. })
        ));
        assert!(dst_y.iter().all(|&s| s == 0xAB));
        assert!(dst_u.iter().all(|&s| s == 0xAB));
        assert!(dst_v.iter().all(|&s| s == 0xAB));
    }

    #[test]
    fn chroma_output_does_not_depend_on_the_method() {
        let mut rng = rand::rng();
        let (y, u, v) = make_planar(20, 14, YuvChromaSubsampling::Yuv420, || rng.random());
        let image = YuvPlanarImage {
            y_plane: &y,
            y_stride: 20,
            u_plane: &u,
            u_stride: 10,
            v_plane: &v,
            v_stride: 10,
            width: 20,
            height: 14,
        };

        let mut results = Vec::new();
        for method in METHODS {
            let mut destination =
                YuvPlanarImageMut::<u8>::alloc_2x(&image, YuvChromaSubsampling::Yuv420);
            yuv420_upscale2x(&image, &mut destination, method).unwrap();
            results.push((
                destination.u_plane.borrow().to_vec(),
                destination.v_plane.borrow().to_vec(),
            ));
        }
        assert_eq!(results[0], results[1]);
        assert_eq!(results[1], results[2]);
    }

    #[test]
    fn luma_anchors_survive_every_method() {
        let mut rng = rand::rng();
        let (y, u, v) = make_planar(18, 16, YuvChromaSubsampling::Yuv444, || rng.random());
        let image = YuvPlanarImage {
            y_plane: &y,
            y_stride: 18,
            u_plane: &u,
            u_stride: 18,
            v_plane: &v,
            v_stride: 18,
            width: 18,
            height: 16,
        };
        for method in METHODS {
            let mut destination =
                YuvPlanarImageMut::<u8>::alloc_2x(&image, YuvChromaSubsampling::Yuv444);
            yuv444_upscale2x(&image, &mut destination, method).unwrap();
            let out = destination.y_plane.borrow();
            for j in 0..16usize {
                for i in 0..18usize {
                    assert_eq!(out[j * 2 * 36 + i * 2], y[j * 18 + i], "{:?}", method);
                }
            }
        }
    }

    #[test]
    fn gray_constant_frame_stays_constant() {
        let k = 77u8;
        let y = vec![k; 8 * 8];
        let image = YuvGrayImage {
            y_plane: &y,
            y_stride: 8,
            width: 8,
            height: 8,
        };
        for method in METHODS {
            let mut destination = YuvGrayImageMut::<u8>::alloc_2x(&image);
            gray_upscale2x(&image, &mut destination, method).unwrap();
            assert!(destination.y_plane.borrow().iter().all(|&s| s == k));
        }
    }

    #[test]
    fn default_method_is_cgak() {
        assert_eq!(UpscaleMethod::default(), UpscaleMethod::Cgak);
    }
}
