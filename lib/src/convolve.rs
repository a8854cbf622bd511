use crate::kernel::Kernel;
use crate::pad::zero_pad;
use image::{DynamicImage, GrayAlphaImage, GrayImage, RgbImage, RgbaImage};
use rayon::prelude::*;

/// Apply a convolution kernel to an image
///
/// Dispatches on the pixel format: a grayscale image takes the
/// single-plane path, a multi-channel image takes the interleaved path
/// with every channel filtered independently. The returned image has the
/// same format and dimensions as the input; the input is never mutated.
///
/// # Arguments
/// * `image` - Input image with 8-bit samples
/// * `kernel` - Square convolution kernel
///
/// # Returns
/// The filtered image, same variant as the input
///
/// # Panics
/// Panics if the image does not use 8-bit samples. A malformed kernel
/// panics at construction, before any pixel is touched.
pub fn apply(image: &DynamicImage, kernel: &Kernel) -> DynamicImage {
    match image {
        DynamicImage::ImageLuma8(img) => DynamicImage::ImageLuma8(filter_gray(img, kernel)),
        DynamicImage::ImageLumaA8(img) => {
            DynamicImage::ImageLumaA8(filter_gray_alpha(img, kernel))
        }
        DynamicImage::ImageRgb8(img) => DynamicImage::ImageRgb8(filter_rgb(img, kernel)),
        DynamicImage::ImageRgba8(img) => DynamicImage::ImageRgba8(filter_rgba(img, kernel)),
        _ => panic!("Image must use 8-bit samples"),
    }
}

/// Convolve a grayscale image
///
/// # Arguments
/// * `img` - Input grayscale image
/// * `kernel` - Square convolution kernel
///
/// # Returns
/// The filtered image, same dimensions as the input
pub fn filter_gray(img: &GrayImage, kernel: &Kernel) -> GrayImage {
    let (width, height) = img.dimensions();
    let out = filter_planes(img.as_raw(), width as usize, height as usize, 1, kernel);
    GrayImage::from_raw(width, height, out).expect("output buffer matches input dimensions")
}

/// Convolve a grayscale image with an alpha channel
///
/// The alpha plane is filtered like any other channel.
pub fn filter_gray_alpha(img: &GrayAlphaImage, kernel: &Kernel) -> GrayAlphaImage {
    let (width, height) = img.dimensions();
    let out = filter_planes(img.as_raw(), width as usize, height as usize, 2, kernel);
    GrayAlphaImage::from_raw(width, height, out).expect("output buffer matches input dimensions")
}

/// Convolve an RGB image, each channel independently
///
/// # Arguments
/// * `img` - Input RGB image
/// * `kernel` - Square convolution kernel
///
/// # Returns
/// The filtered image, same dimensions as the input
pub fn filter_rgb(img: &RgbImage, kernel: &Kernel) -> RgbImage {
    let (width, height) = img.dimensions();
    let out = filter_planes(img.as_raw(), width as usize, height as usize, 3, kernel);
    RgbImage::from_raw(width, height, out).expect("output buffer matches input dimensions")
}

/// Convolve an RGBA image, each channel independently
///
/// The alpha plane is filtered like any other channel.
pub fn filter_rgba(img: &RgbaImage, kernel: &Kernel) -> RgbaImage {
    let (width, height) = img.dimensions();
    let out = filter_planes(img.as_raw(), width as usize, height as usize, 4, kernel);
    RgbaImage::from_raw(width, height, out).expect("output buffer matches input dimensions")
}

/// Convolve an interleaved sample buffer with a square kernel
///
/// This is the engine behind every typed entry point; the grayscale path
/// is the `channels == 1` case of the same loop.
///
/// The kernel is first padded to an odd side length (see
/// [`Kernel::padded_to_odd`]), then the image is copied into a zero-padded
/// working buffer one border of `kernel.padding()` pixels wide, and
/// finally every output sample is accumulated from the read-only padded
/// buffer:
///
/// `out[i][j][d] = sum over (k, n) of padded[i + k][j + n][d] * kernel[k][n]`
///
/// Output rows are independent, so they are filled in parallel; each
/// worker writes one disjoint row slice. Accumulation runs in `f32`,
/// which holds the worst-case sum (255 times the kernel weights over the
/// whole kernel area) without wrapping. The sum is clamped to `[0, 255]`
/// and its fractional part dropped before the store, so oversized values
/// saturate at the range boundaries.
///
/// # Arguments
/// * `src` - Interleaved row-major samples, `width * height * channels` long
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `channels` - Samples per pixel, at least 1
/// * `kernel` - Square convolution kernel
///
/// # Returns
/// The filtered buffer, same length and layout as `src`
///
/// # Panics
/// Panics if `channels` is zero or `src` does not hold exactly
/// `width * height * channels` samples.
pub fn filter_planes(
    src: &[u8],
    width: usize,
    height: usize,
    channels: usize,
    kernel: &Kernel,
) -> Vec<u8> {
    assert!(channels >= 1, "Image must have at least one channel");
    assert_eq!(
        src.len(),
        width * height * channels,
        "Image buffer of {} samples does not match {}x{}x{}",
        src.len(),
        width,
        height,
        channels
    );

    let mut out = vec![0u8; width * height * channels];
    if width == 0 || height == 0 {
        return out;
    }

    let kernel = kernel.padded_to_odd();
    let side = kernel.side();
    let padding = kernel.padding();
    let padded = zero_pad(src, width, height, channels, padding);
    let padded_width = width + 2 * padding;

    let row_len = width * channels;
    out.par_chunks_mut(row_len)
        .enumerate()
        .for_each(|(i, out_row)| {
            for j in 0..width {
                for d in 0..channels {
                    let mut sum = 0.0f32;
                    for k in 0..side {
                        for n in 0..side {
                            let sample = padded[((i + k) * padded_width + (j + n)) * channels + d];
                            sum += sample as f32 * kernel.at(k, n);
                        }
                    }
                    out_row[j * channels + d] = sum.clamp(0.0, 255.0) as u8;
                }
            }
        });

    out
}
