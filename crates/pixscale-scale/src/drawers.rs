//! Single-pass scaled-rect drawers
//!
//! Each drawer resamples with one kernel, directly from the source to the
//! destination.

use crate::ScaleResult;
use crate::splitter::{Kernel, draw_pass, prepare};
use pixscale_core::{ColorTypeHelper, Rect, RowDrawer, SrcPixels};
use pixscale_parallel::Parallelizer;

/// Default split threshold for nearest (splitting never pays off)
pub const DEFAULT_NEAREST_THRESHOLD: u64 = 1 << 40;
/// Default split threshold for box sampling
pub const DEFAULT_BOXSAMPLED_THRESHOLD: u64 = 4096;
/// Default split threshold for bilinear
pub const DEFAULT_BILINEAR_THRESHOLD: u64 = 4096;
/// Default split threshold for bicubic
pub const DEFAULT_BICUBIC_THRESHOLD: u64 = 1024;

/// Draws a scaled rectangle of a source into a destination
pub trait ScaledRectDrawer: Sync {
    /// Resample `src_rect` of `src_pixels` onto `dst_rect`, writing only the
    /// part inside `dst_clip` to `dst_row_drawer`
    ///
    /// Source and destination colors are both packed as described by
    /// `color_type`. Rows of the clipped destination are written exactly
    /// once each, possibly from several threads and in any order across
    /// row ranges.
    ///
    /// An empty source or destination rect, or a clip that misses the
    /// destination rect, draws nothing.
    ///
    /// # Errors
    ///
    /// - [`crate::ScaleError::InvalidParameters`] if `src_rect` is not
    ///   contained in `src_pixels.rect()`, or has a negative origin while
    ///   `src_pixels` has no pixel array
    /// - [`crate::ScaleError::Core`] if reading the source or writing a row
    ///   fails
    #[allow(clippy::too_many_arguments)]
    fn draw_scaled_rect<P: Parallelizer>(
        &self,
        parallelizer: &P,
        color_type: ColorTypeHelper,
        src_pixels: &dyn SrcPixels,
        src_rect: Rect,
        dst_rect: Rect,
        dst_clip: Rect,
        dst_row_drawer: &dyn RowDrawer,
    ) -> ScaleResult<()>;
}

macro_rules! single_pass_drawer {
    ($(#[$doc:meta])* $name:ident, $kernel:expr, $default:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name {
            /// Estimated pass cost above which rows are split across threads
            pub split_threshold: u64,
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    split_threshold: $default,
                }
            }
        }

        impl $name {
            /// Create a drawer with the default split threshold
            pub fn new() -> Self {
                Self::default()
            }

            /// Set the split threshold
            pub fn with_split_threshold(mut self, split_threshold: u64) -> Self {
                self.split_threshold = split_threshold;
                self
            }
        }

        impl ScaledRectDrawer for $name {
            #[allow(clippy::too_many_arguments)]
            fn draw_scaled_rect<P: Parallelizer>(
                &self,
                parallelizer: &P,
                color_type: ColorTypeHelper,
                src_pixels: &dyn SrcPixels,
                src_rect: Rect,
                dst_rect: Rect,
                dst_clip: Rect,
                dst_row_drawer: &dyn RowDrawer,
            ) -> ScaleResult<()> {
                let Some(clipped) = prepare(src_pixels, src_rect, dst_rect, dst_clip)? else {
                    return Ok(());
                };
                draw_pass(
                    parallelizer,
                    $kernel,
                    self.split_threshold,
                    color_type,
                    color_type,
                    src_pixels,
                    src_rect,
                    dst_rect,
                    clipped,
                    dst_row_drawer,
                )
            }
        }
    };
}

single_pass_drawer!(
    /// Nearest-neighbor drawer
    ///
    /// Colors are copied without conversion, so any color type round-trips
    /// exactly.
    NearestDrawer,
    Kernel::Nearest,
    DEFAULT_NEAREST_THRESHOLD
);

single_pass_drawer!(
    /// Box-sampling drawer
    ///
    /// Every destination pixel is the area-weighted average of the source
    /// area it covers. Best for shrinking.
    BoxsampledDrawer,
    Kernel::Boxsampled,
    DEFAULT_BOXSAMPLED_THRESHOLD
);

single_pass_drawer!(
    /// Bilinear drawer
    BilinearDrawer,
    Kernel::Bilinear,
    DEFAULT_BILINEAR_THRESHOLD
);

single_pass_drawer!(
    /// Bicubic (Catmull-Rom) drawer
    BicubicDrawer,
    Kernel::Bicubic,
    DEFAULT_BICUBIC_THRESHOLD
);

#[cfg(test)]
mod tests {
    use super::*;
    use pixscale_core::PixelBuffer;
    use pixscale_parallel::SequentialParallelizer;

    fn draw<D: ScaledRectDrawer>(drawer: &D, src: &PixelBuffer, dst_rect: Rect) -> PixelBuffer {
        let mut dst = PixelBuffer::new(dst_rect).unwrap();
        let sink = dst.row_drawer();
        drawer
            .draw_scaled_rect(
                &SequentialParallelizer::new(),
                ColorTypeHelper::PremulArgb32,
                src,
                src.rect(),
                dst_rect,
                dst_rect,
                &sink,
            )
            .unwrap();
        drop(sink);
        dst
    }

    #[test]
    fn test_nearest_doubles_pixels() {
        let src = PixelBuffer::from_rows(0, 0, &[&[0xFF000001, 0xFF000002]]).unwrap();
        let dst = draw(&NearestDrawer::new(), &src, Rect::from_size(4, 2));
        assert_eq!(
            dst.data(),
            &[
                0xFF000001, 0xFF000001, 0xFF000002, 0xFF000002, 0xFF000001, 0xFF000001,
                0xFF000002, 0xFF000002
            ]
        );
    }

    #[test]
    fn test_box_halves() {
        let src = PixelBuffer::from_rows(
            0,
            0,
            &[
                &[0xFF000000, 0xFF202020, 0xFF404040, 0xFF606060],
                &[0xFF202020, 0xFF404040, 0xFF606060, 0xFF808080],
            ],
        )
        .unwrap();
        let dst = draw(&BoxsampledDrawer::new(), &src, Rect::from_size(2, 1));
        assert_eq!(dst.data(), &[0xFF202020, 0xFF606060]);
    }

    #[test]
    fn test_destination_offset() {
        let src = PixelBuffer::from_rows(0, 0, &[&[0xFF102030]]).unwrap();
        let dst = draw(&BilinearDrawer::new(), &src, Rect::new_unchecked(-3, 5, 2, 2));
        assert!(dst.data().iter().all(|&c| c == 0xFF102030));
    }

    #[test]
    fn test_defaults_and_builders() {
        assert_eq!(NearestDrawer::default().split_threshold, DEFAULT_NEAREST_THRESHOLD);
        assert_eq!(BicubicDrawer::new().split_threshold, DEFAULT_BICUBIC_THRESHOLD);
        let d = BilinearDrawer::new().with_split_threshold(7);
        assert_eq!(d.split_threshold, 7);
    }
}
