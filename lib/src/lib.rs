//! Convolvr - CPU-based 2D image convolution
//!
//! This library applies square convolution kernels to 8-bit images,
//! grayscale or color, using zero padding so the output keeps the input's
//! dimensions. Accumulated values saturate into the valid sample range
//! instead of wrapping.
//!
//! # Example
//! ```no_run
//! use convolvr::{apply, Kernel};
//! use image;
//!
//! let input = image::open("photo.jpg").unwrap();
//! let sharpen = Kernel::from_rows(&[
//!     [ 0.0, -1.0,  0.0],
//!     [-1.0,  5.0, -1.0],
//!     [ 0.0, -1.0,  0.0],
//! ]);
//! let output = apply(&input, &sharpen);
//! output.save("sharpened.png").unwrap();
//! ```

pub mod convolve;
pub mod kernel;
pub mod pad;

// Re-export main types for convenience
pub use convolve::{apply, filter_gray, filter_gray_alpha, filter_planes, filter_rgb, filter_rgba};
pub use kernel::Kernel;
