//! Algorithm selection
//!
//! [`ScalingType`] names an algorithm and maps it to a concrete
//! [`ScalingDrawer`]. [`draw_scaled_rect`] does both in one call.

use crate::ScaleResult;
use crate::drawers::{
    BicubicDrawer, BilinearDrawer, BoxsampledDrawer, DEFAULT_BICUBIC_THRESHOLD,
    DEFAULT_BILINEAR_THRESHOLD, DEFAULT_BOXSAMPLED_THRESHOLD, DEFAULT_NEAREST_THRESHOLD,
    NearestDrawer, ScaledRectDrawer,
};
use crate::hybrid::{BoxSmoothDrawer, Smoothing};
use crate::iterative::IterativeDrawer;
use pixscale_core::{ColorTypeHelper, Rect, RowDrawer, SrcPixels};
use pixscale_parallel::Parallelizer;

// ============================================================================
// Algorithm enumeration
// ============================================================================

/// Resampling algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalingType {
    /// Nearest neighbor - fastest, blocky
    Nearest,
    /// Area-weighted box sampling - best for shrinking
    Boxsampled,
    /// Bilinear interpolation
    Bilinear,
    /// Bicubic (Catmull-Rom) interpolation - sharpest
    Bicubic,
    /// Bilinear, halving large shrinks step by step
    IterBilinear,
    /// Bicubic, halving large shrinks step by step
    IterBicubic,
    /// Box pre-pass for large shrinks, then bilinear
    BoxBilinear,
    /// Box pre-pass for large shrinks, then bicubic
    BoxBicubic,
}

impl ScalingType {
    /// Every algorithm
    pub const ALL: [ScalingType; 8] = [
        ScalingType::Nearest,
        ScalingType::Boxsampled,
        ScalingType::Bilinear,
        ScalingType::Bicubic,
        ScalingType::IterBilinear,
        ScalingType::IterBicubic,
        ScalingType::BoxBilinear,
        ScalingType::BoxBicubic,
    ];

    /// The drawer for this algorithm, with default split thresholds
    pub fn drawer(self) -> ScalingDrawer {
        self.drawer_with(&SplitThresholds::default())
    }

    /// The drawer for this algorithm, with the given split thresholds
    pub fn drawer_with(self, thresholds: &SplitThresholds) -> ScalingDrawer {
        match self {
            ScalingType::Nearest => ScalingDrawer::Nearest(NearestDrawer {
                split_threshold: thresholds.nearest,
            }),
            ScalingType::Boxsampled => ScalingDrawer::Boxsampled(BoxsampledDrawer {
                split_threshold: thresholds.boxsampled,
            }),
            ScalingType::Bilinear => ScalingDrawer::Bilinear(BilinearDrawer {
                split_threshold: thresholds.bilinear,
            }),
            ScalingType::Bicubic => ScalingDrawer::Bicubic(BicubicDrawer {
                split_threshold: thresholds.bicubic,
            }),
            ScalingType::IterBilinear => ScalingDrawer::Iterative(
                IterativeDrawer::new(Smoothing::Bilinear)
                    .with_split_threshold(thresholds.bilinear),
            ),
            ScalingType::IterBicubic => ScalingDrawer::Iterative(
                IterativeDrawer::new(Smoothing::Bicubic).with_split_threshold(thresholds.bicubic),
            ),
            ScalingType::BoxBilinear => ScalingDrawer::BoxSmooth(
                BoxSmoothDrawer::new(Smoothing::Bilinear)
                    .with_box_threshold(thresholds.boxsampled)
                    .with_smooth_threshold(thresholds.bilinear),
            ),
            ScalingType::BoxBicubic => ScalingDrawer::BoxSmooth(
                BoxSmoothDrawer::new(Smoothing::Bicubic)
                    .with_box_threshold(thresholds.boxsampled)
                    .with_smooth_threshold(thresholds.bicubic),
            ),
        }
    }
}

// ============================================================================
// Split thresholds
// ============================================================================

/// Estimated pass cost above which rows are split across threads, per kernel
///
/// The cost of a row range is its row count times the clipped destination
/// width, times the source/destination area ratio when shrinking. Output
/// never depends on these values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitThresholds {
    /// Nearest neighbor
    pub nearest: u64,
    /// Box sampling (also the box pre-pass of hybrid drawers)
    pub boxsampled: u64,
    /// Bilinear passes
    pub bilinear: u64,
    /// Bicubic passes
    pub bicubic: u64,
}

impl Default for SplitThresholds {
    fn default() -> Self {
        Self {
            nearest: DEFAULT_NEAREST_THRESHOLD,
            boxsampled: DEFAULT_BOXSAMPLED_THRESHOLD,
            bilinear: DEFAULT_BILINEAR_THRESHOLD,
            bicubic: DEFAULT_BICUBIC_THRESHOLD,
        }
    }
}

impl SplitThresholds {
    /// The same threshold for every kernel
    pub fn uniform(threshold: u64) -> Self {
        Self {
            nearest: threshold,
            boxsampled: threshold,
            bilinear: threshold,
            bicubic: threshold,
        }
    }

    /// Set the nearest-neighbor threshold
    pub fn with_nearest(mut self, threshold: u64) -> Self {
        self.nearest = threshold;
        self
    }

    /// Set the box-sampling threshold
    pub fn with_boxsampled(mut self, threshold: u64) -> Self {
        self.boxsampled = threshold;
        self
    }

    /// Set the bilinear threshold
    pub fn with_bilinear(mut self, threshold: u64) -> Self {
        self.bilinear = threshold;
        self
    }

    /// Set the bicubic threshold
    pub fn with_bicubic(mut self, threshold: u64) -> Self {
        self.bicubic = threshold;
        self
    }
}

// ============================================================================
// Drawer dispatch
// ============================================================================

/// A drawer for any [`ScalingType`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalingDrawer {
    /// Nearest neighbor
    Nearest(NearestDrawer),
    /// Area-weighted box sampling
    Boxsampled(BoxsampledDrawer),
    /// Single-pass bilinear
    Bilinear(BilinearDrawer),
    /// Single-pass bicubic
    Bicubic(BicubicDrawer),
    /// Iterative halving, then bilinear or bicubic
    Iterative(IterativeDrawer),
    /// Box pre-pass, then bilinear or bicubic
    BoxSmooth(BoxSmoothDrawer),
}

impl ScaledRectDrawer for ScalingDrawer {
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
        macro_rules! forward {
            ($drawer:expr) => {
                $drawer.draw_scaled_rect(
                    parallelizer,
                    color_type,
                    src_pixels,
                    src_rect,
                    dst_rect,
                    dst_clip,
                    dst_row_drawer,
                )
            };
        }
        match self {
            ScalingDrawer::Nearest(d) => forward!(d),
            ScalingDrawer::Boxsampled(d) => forward!(d),
            ScalingDrawer::Bilinear(d) => forward!(d),
            ScalingDrawer::Bicubic(d) => forward!(d),
            ScalingDrawer::Iterative(d) => forward!(d),
            ScalingDrawer::BoxSmooth(d) => forward!(d),
        }
    }
}

/// Resample `src_rect` of `src_pixels` onto `dst_rect` with `scaling_type`,
/// writing the part inside `dst_clip` to `dst_row_drawer`
///
/// Uses the default split thresholds. See
/// [`ScaledRectDrawer::draw_scaled_rect`] for the details.
///
/// # Example
///
/// ```
/// use pixscale_core::{ColorTypeHelper, PixelBuffer, Rect};
/// use pixscale_parallel::SequentialParallelizer;
/// use pixscale_scale::{ScalingType, draw_scaled_rect};
///
/// let src = PixelBuffer::from_rows(0, 0, &[&[0xFF000000, 0xFFFFFFFF]]).unwrap();
/// let dst_rect = Rect::from_size(1, 1);
/// let mut dst = PixelBuffer::new(dst_rect).unwrap();
/// draw_scaled_rect(
///     ScalingType::Boxsampled,
///     &SequentialParallelizer::new(),
///     ColorTypeHelper::PremulArgb32,
///     &src,
///     src.rect(),
///     dst_rect,
///     dst_rect,
///     &dst.row_drawer(),
/// )
/// .unwrap();
/// assert_eq!(dst.get(0, 0), Some(0xFF808080));
/// ```
#[allow(clippy::too_many_arguments)]
pub fn draw_scaled_rect<P: Parallelizer>(
    scaling_type: ScalingType,
    parallelizer: &P,
    color_type: ColorTypeHelper,
    src_pixels: &dyn SrcPixels,
    src_rect: Rect,
    dst_rect: Rect,
    dst_clip: Rect,
    dst_row_drawer: &dyn RowDrawer,
) -> ScaleResult<()> {
    scaling_type.drawer().draw_scaled_rect(
        parallelizer,
        color_type,
        src_pixels,
        src_rect,
        dst_rect,
        dst_clip,
        dst_row_drawer,
    )
}
