//! pixscale - Scaled-rectangle image resampling
//!
//! Resizes a rectangle of a source pixel buffer into a clipped rectangle of
//! a destination, with:
//!
//! - Nearest neighbor, box sampling, bilinear and bicubic kernels
//! - Iterative and box-prefiltered variants for large shrinks
//! - Premultiplied, non-premultiplied, RGBA and custom-mask color packings
//! - Row-range splitting over a thread pool
//!
//! # Example
//!
//! ```
//! use pixscale::parallel::RayonParallelizer;
//! use pixscale::scale::{ScalingType, draw_scaled_rect};
//! use pixscale::{ColorTypeHelper, PixelBuffer, Rect};
//!
//! let src = PixelBuffer::from_rows(0, 0, &[&[0xFF0000FF, 0xFFFF0000]]).unwrap();
//! let dst_rect = Rect::from_size(4, 2);
//! let mut dst = PixelBuffer::new(dst_rect).unwrap();
//! let parallelizer = RayonParallelizer::new(2).unwrap();
//!
//! draw_scaled_rect(
//!     ScalingType::Nearest,
//!     &parallelizer,
//!     ColorTypeHelper::PremulArgb32,
//!     &src,
//!     src.rect(),
//!     dst_rect,
//!     dst_rect,
//!     &dst.row_drawer(),
//! )
//! .unwrap();
//! assert_eq!(dst.row(1), Some(&[0xFF0000FF, 0xFF0000FF, 0xFFFF0000, 0xFFFF0000][..]));
//! ```

// Re-export core types (used by every call)
pub use pixscale_core::*;

// Re-export the other crates as modules
pub use pixscale_parallel as parallel;
pub use pixscale_scale as scale;
