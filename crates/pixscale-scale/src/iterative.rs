//! Iterative halving with a smooth kernel
//!
//! While an axis shrinks by more than 2x, that axis is halved (never below
//! its destination span) with the same kernel into a premultiplied
//! intermediate image. One last pass then produces the destination.

use crate::ScaleResult;
use crate::drawers::ScaledRectDrawer;
use crate::hybrid::Smoothing;
use crate::splitter::{draw_pass, prepare};
use pixscale_core::{ColorTypeHelper, PixelBuffer, Rect, RowDrawer, SrcPixels};
use pixscale_parallel::Parallelizer;

/// Next span along one axis, or `cur` when no halving step is needed.
#[inline]
pub(crate) fn halving_step(cur: i32, dst: i32) -> i32 {
    if cur as i64 > 2 * dst as i64 {
        (cur / 2 + cur % 2).max(dst)
    } else {
        cur
    }
}

/// Spans of every intermediate image when going from `src` to `dst`
/// (`(width, height)` pairs), in order
pub fn halving_plan(src: (i32, i32), dst: (i32, i32)) -> Vec<(i32, i32)> {
    let mut plan = Vec::new();
    let mut cur = src;
    loop {
        let next = (halving_step(cur.0, dst.0), halving_step(cur.1, dst.1));
        if next == cur {
            return plan;
        }
        plan.push(next);
        cur = next;
    }
}

/// Iterative bilinear or bicubic drawer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IterativeDrawer {
    /// Kernel of every pass
    pub smoothing: Smoothing,
    /// Split threshold of every pass
    pub split_threshold: u64,
}

impl IterativeDrawer {
    /// Create a drawer with the default split threshold of its kernel
    pub fn new(smoothing: Smoothing) -> Self {
        Self {
            smoothing,
            split_threshold: smoothing.default_threshold(),
        }
    }

    /// Set the split threshold
    pub fn with_split_threshold(mut self, split_threshold: u64) -> Self {
        self.split_threshold = split_threshold;
        self
    }
}

impl ScaledRectDrawer for IterativeDrawer {
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
        let plan = halving_plan((src_rect.w, src_rect.h), (dst_rect.w, dst_rect.h));
        if !plan.is_empty() {
            log::debug!(
                "iterative {:?} {:?} -> {:?} through {:?}",
                self.smoothing,
                src_rect,
                dst_rect,
                plan
            );
        }

        let mut stage: Option<PixelBuffer> = None;
        for (w, h) in plan {
            let next_rect = Rect::from_size(w, h);
            let mut next = PixelBuffer::new(next_rect)?;
            {
                let sink = next.row_drawer();
                let (pixels, rect, src_type): (&dyn SrcPixels, Rect, ColorTypeHelper) =
                    match &stage {
                        Some(buf) => (buf as &dyn SrcPixels, buf.rect(), ColorTypeHelper::PremulArgb32),
                        None => (src_pixels, src_rect, color_type),
                    };
                draw_pass(
                    parallelizer,
                    kernel,
                    self.split_threshold,
                    src_type,
                    ColorTypeHelper::PremulArgb32,
                    pixels,
                    rect,
                    next_rect,
                    next_rect,
                    &sink,
                )?;
            }
            stage = Some(next);
        }

        let (pixels, rect, src_type): (&dyn SrcPixels, Rect, ColorTypeHelper) = match &stage {
            Some(buf) => (buf as &dyn SrcPixels, buf.rect(), ColorTypeHelper::PremulArgb32),
            None => (src_pixels, src_rect, color_type),
        };
        draw_pass(
            parallelizer,
            kernel,
            self.split_threshold,
            src_type,
            color_type,
            pixels,
            rect,
            dst_rect,
            clipped,
            dst_row_drawer,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixscale_parallel::SequentialParallelizer;

    #[test]
    fn test_halving_step() {
        assert_eq!(halving_step(100, 10), 50);
        assert_eq!(halving_step(21, 10), 11);
        assert_eq!(halving_step(20, 10), 20);
        assert_eq!(halving_step(5, 10), 5);
        assert_eq!(halving_step(3, 1), 2);
        assert_eq!(halving_step(4, 1), 2);
        assert_eq!(halving_step(i32::MAX, 1), 1 << 30);
        assert_eq!(halving_step(i32::MAX, i32::MAX / 2), 1 << 30);
        assert_eq!(halving_step(i32::MAX, i32::MAX - 5), i32::MAX);
    }

    #[test]
    fn test_halving_plan() {
        assert_eq!(halving_plan((100, 8), (10, 8)), vec![(50, 8), (25, 8), (13, 8)]);
        assert_eq!(halving_plan((9, 40), (4, 5)), vec![(5, 20), (5, 10)]);
        assert!(halving_plan((8, 8), (4, 4)).is_empty());
        assert!(halving_plan((3, 3), (30, 30)).is_empty());
    }

    #[test]
    fn test_flat_image_stays_flat() {
        let src =
            PixelBuffer::from_vec(Rect::from_size(64, 64), 64, vec![0xFF336699; 64 * 64]).unwrap();
        for smoothing in [Smoothing::Bilinear, Smoothing::Bicubic] {
            let dst_rect = Rect::new_unchecked(2, 3, 5, 3);
            let mut dst = PixelBuffer::new(dst_rect).unwrap();
            {
                let sink = dst.row_drawer();
                IterativeDrawer::new(smoothing)
                    .draw_scaled_rect(
                        &SequentialParallelizer::new(),
                        ColorTypeHelper::NonPremulArgb32,
                        &src,
                        src.rect(),
                        dst_rect,
                        dst_rect,
                        &sink,
                    )
                    .unwrap();
            }
            assert!(dst.data().iter().all(|&c| c == 0xFF336699));
        }
    }
}
