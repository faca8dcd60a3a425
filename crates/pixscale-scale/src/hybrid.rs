//! Box pre-pass followed by a smooth kernel
//!
//! Bilinear and bicubic only look at a small neighborhood, so a large
//! shrink skips most source pixels and aliases. Here every axis that
//! shrinks by more than 2x is first box-sampled down to twice its
//! destination span, then the smooth kernel produces the final size.

use crate::ScaleResult;
use crate::drawers::{DEFAULT_BOXSAMPLED_THRESHOLD, ScaledRectDrawer};
use crate::splitter::{Kernel, draw_pass, prepare};
use pixscale_core::{ColorTypeHelper, PixelBuffer, Rect, RowDrawer, SrcPixels};
use pixscale_parallel::Parallelizer;

/// Smooth kernel of a multi-pass drawer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Smoothing {
    /// Bilinear interpolation
    Bilinear,
    /// Bicubic (Catmull-Rom) interpolation
    Bicubic,
}

impl Smoothing {
    pub(crate) fn kernel(self) -> Kernel {
        match self {
            Smoothing::Bilinear => Kernel::Bilinear,
            Smoothing::Bicubic => Kernel::Bicubic,
        }
    }

    /// Default split threshold of the smooth pass
    pub fn default_threshold(self) -> u64 {
        match self {
            Smoothing::Bilinear => crate::drawers::DEFAULT_BILINEAR_THRESHOLD,
            Smoothing::Bicubic => crate::drawers::DEFAULT_BICUBIC_THRESHOLD,
        }
    }
}

/// Span of the box pre-pass output along one axis.
#[inline]
pub(crate) fn box_stage_span(src: i32, dst: i32) -> i32 {
    if src as i64 > 2 * dst as i64 { 2 * dst } else { src }
}

/// Box pre-pass + bilinear or bicubic drawer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxSmoothDrawer {
    /// Kernel of the final pass
    pub smoothing: Smoothing,
    /// Split threshold of the box pre-pass
    pub box_threshold: u64,
    /// Split threshold of the smooth pass
    pub smooth_threshold: u64,
}

impl BoxSmoothDrawer {
    /// Create a drawer with default split thresholds
    pub fn new(smoothing: Smoothing) -> Self {
        Self {
            smoothing,
            box_threshold: DEFAULT_BOXSAMPLED_THRESHOLD,
            smooth_threshold: smoothing.default_threshold(),
        }
    }

    /// Set the split threshold of the box pre-pass
    pub fn with_box_threshold(mut self, threshold: u64) -> Self {
        self.box_threshold = threshold;
        self
    }

    /// Set the split threshold of the smooth pass
    pub fn with_smooth_threshold(mut self, threshold: u64) -> Self {
        self.smooth_threshold = threshold;
        self
    }
}

impl ScaledRectDrawer for BoxSmoothDrawer {
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
        let kernel = self.smoothing.kernel();

        let inter_w = box_stage_span(src_rect.w, dst_rect.w);
        let inter_h = box_stage_span(src_rect.h, dst_rect.h);
        if inter_w == src_rect.w && inter_h == src_rect.h {
            return draw_pass(
                parallelizer,
                kernel,
                self.smooth_threshold,
                color_type,
                color_type,
                src_pixels,
                src_rect,
                dst_rect,
                clipped,
                dst_row_drawer,
            );
        }

        // The smooth pass reads neighbors of the clipped area, so the whole
        // intermediate image is needed even when clipping.
        let inter_rect = Rect::from_size(inter_w, inter_h);
        log::debug!(
            "box pre-pass {:?} -> {:?}, then {:?} -> {:?}",
            src_rect,
            inter_rect,
            self.smoothing,
            dst_rect
        );
        let mut inter = PixelBuffer::new(inter_rect)?;
        {
            let sink = inter.row_drawer();
            draw_pass(
                parallelizer,
                Kernel::Boxsampled,
                self.box_threshold,
                color_type,
                ColorTypeHelper::PremulArgb32,
                src_pixels,
                src_rect,
                inter_rect,
                inter_rect,
                &sink,
            )?;
        }
        draw_pass(
            parallelizer,
            kernel,
            self.smooth_threshold,
            ColorTypeHelper::PremulArgb32,
            color_type,
            &inter,
            inter_rect,
            dst_rect,
            clipped,
            dst_row_drawer,
        )
    }
}
