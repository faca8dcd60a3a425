//! Row-range splitting and per-row kernel evaluation
//!
//! One resampling pass maps a source rect onto a destination rect and writes
//! the clipped destination rows to a [`RowDrawer`]. The rows are covered by a
//! [`RowRangeTask`], which a [`Parallelizer`] may bisect any number of times;
//! every piece reads the same immutable [`ScaleContext`].

use crate::error::{ScaleError, ScaleResult};
use crate::kernels::{
    SrcReader, bicubic_color, bilinear_color, box_sample_color, nearest_index,
};
use pixscale_core::{ColorTypeHelper, Rect, RowDrawer, SrcPixels};
use pixscale_parallel::{Parallelizer, Scratch, Splittable};

/// The per-pixel kernel of one pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Kernel {
    Nearest,
    Boxsampled,
    Bilinear,
    Bicubic,
}

/// Validate the arguments of a scaled-rect draw and compute the clipped
/// destination rect
///
/// Returns `Ok(None)` when there is nothing to draw.
pub(crate) fn prepare(
    src_pixels: &dyn SrcPixels,
    src_rect: Rect,
    dst_rect: Rect,
    dst_clip: Rect,
) -> ScaleResult<Option<Rect>> {
    for (name, rect) in [("source", src_rect), ("destination", dst_rect), ("clip", dst_clip)] {
        if !rect.edges_fit() {
            return Err(ScaleError::InvalidParameters(format!(
                "{} rect {:?} reaches past i32 coordinates",
                name, rect
            )));
        }
    }
    if src_rect.is_empty() {
        return Ok(None);
    }
    let pixels_rect = src_pixels.rect();
    if !pixels_rect.contains_rect(&src_rect) {
        return Err(ScaleError::InvalidParameters(format!(
            "source rect {:?} not contained in source pixels {:?}",
            src_rect, pixels_rect
        )));
    }
    if (src_rect.x < 0 || src_rect.y < 0) && src_pixels.color32_arr().is_none() {
        return Err(ScaleError::InvalidParameters(format!(
            "source rect {:?} has a negative origin but the source has no pixel array",
            src_rect
        )));
    }
    if dst_rect.is_empty() {
        return Ok(None);
    }
    Ok(dst_rect.intersect(&dst_clip))
}

/// Everything a pass needs that doesn't change between row ranges
pub(crate) struct ScaleContext<'a> {
    kernel: Kernel,
    reader: SrcReader<'a>,
    dst_type: ColorTypeHelper,
    dst_rect: Rect,
    clipped: Rect,
    sink: &'a dyn RowDrawer,
    cost_per_row: f64,
    split_threshold: u64,
    /// Source index per clipped column, for nearest
    nearest_xs: Vec<i32>,
}

impl<'a> ScaleContext<'a> {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        kernel: Kernel,
        split_threshold: u64,
        src_type: ColorTypeHelper,
        dst_type: ColorTypeHelper,
        src_pixels: &'a dyn SrcPixels,
        src_rect: Rect,
        dst_rect: Rect,
        clipped: Rect,
        sink: &'a dyn RowDrawer,
    ) -> ScaleResult<Self> {
        // equal spans are a plain copy whatever the algorithm
        let kernel = if src_rect.w == dst_rect.w && src_rect.h == dst_rect.h {
            Kernel::Nearest
        } else {
            kernel
        };
        let reader = SrcReader::new(src_pixels, src_rect, src_type)?;

        let area_ratio = src_rect.area() as f64 / dst_rect.area() as f64;
        let cost_per_row = clipped.w as f64 * area_ratio.max(1.0);

        let nearest_xs = if kernel == Kernel::Nearest {
            (clipped.x..clipped.right())
                .map(|x| nearest_src(x - dst_rect.x, src_rect.w, dst_rect.w))
                .collect()
        } else {
            Vec::new()
        };

        Ok(Self {
            kernel,
            reader,
            dst_type,
            dst_rect,
            clipped,
            sink,
            cost_per_row,
            split_threshold,
            nearest_xs,
        })
    }

    /// Compute destination row `dst_y` (absolute) into `row`.
    fn fill_row(&self, dst_y: i32, row: &mut [u32]) -> ScaleResult<()> {
        let ly = dst_y - self.dst_rect.y;
        match self.kernel {
            Kernel::Nearest => self.fill_nearest_row(ly, row),
            Kernel::Boxsampled => {
                let box_w = self.reader.width() as f64 / self.dst_rect.w as f64;
                let box_h = self.reader.height() as f64 / self.dst_rect.h as f64;
                self.fill_smooth_row(ly, row, |r, cx, cy| {
                    box_sample_color(r, cx, cy, box_w, box_h)
                })
            }
            Kernel::Bilinear => self.fill_smooth_row(ly, row, bilinear_color),
            Kernel::Bicubic => self.fill_smooth_row(ly, row, bicubic_color),
        }
    }

    fn fill_nearest_row(&self, ly: i32, row: &mut [u32]) -> ScaleResult<()> {
        let sy = nearest_src(ly, self.reader.height(), self.dst_rect.h);
        let same_type = self.reader.color_type() == self.dst_type;
        for (out, &sx) in row.iter_mut().zip(&self.nearest_xs) {
            *out = if same_type {
                self.reader.native_at(sx, sy)?
            } else {
                self.dst_type
                    .as_type_from_premul32(self.reader.premul_at(sx, sy)?)
            };
        }
        Ok(())
    }

    /// Sample every pixel of the row at its back-projected center.
    fn fill_smooth_row(
        &self,
        ly: i32,
        row: &mut [u32],
        sample: impl Fn(&SrcReader<'a>, f64, f64) -> pixscale_core::Result<u32>,
    ) -> ScaleResult<()> {
        let scale_x = self.reader.width() as f64 / self.dst_rect.w as f64;
        let scale_y = self.reader.height() as f64 / self.dst_rect.h as f64;
        let cy = (ly as f64 + 0.5) * scale_y;
        let lx0 = self.clipped.x - self.dst_rect.x;
        for (i, out) in row.iter_mut().enumerate() {
            let cx = ((lx0 + i as i32) as f64 + 0.5) * scale_x;
            let premul = sample(&self.reader, cx, cy)?;
            *out = self.dst_type.as_type_from_premul32(premul);
        }
        Ok(())
    }
}

/// Nearest source index, using the plain division when the ratio is whole.
#[inline]
fn nearest_src(i: i32, src_span: i32, dst_span: i32) -> i32 {
    if src_span != 0 && dst_span % src_span == 0 {
        i / (dst_span / src_span)
    } else {
        nearest_index(i, src_span, dst_span)
    }
}

/// Destination rows `y_start..=y_end` of a pass
pub(crate) struct RowRangeTask<'a> {
    ctx: &'a ScaleContext<'a>,
    y_start: i32,
    y_end: i32,
}

impl<'a> RowRangeTask<'a> {
    /// Create a task covering rows `y_start..=y_end`
    ///
    /// # Errors
    ///
    /// Returns [`ScaleError::InvalidRowRange`] if `y_start > y_end`.
    pub(crate) fn new(ctx: &'a ScaleContext<'a>, y_start: i32, y_end: i32) -> ScaleResult<Self> {
        if y_start > y_end {
            return Err(ScaleError::InvalidRowRange {
                start: y_start,
                end: y_end,
            });
        }
        Ok(Self {
            ctx,
            y_start,
            y_end,
        })
    }

    fn rows(&self) -> i64 {
        (self.y_end - self.y_start) as i64 + 1
    }

    #[cfg(test)]
    fn bounds(&self) -> (i32, i32) {
        (self.y_start, self.y_end)
    }
}

impl Splittable for RowRangeTask<'_> {
    type Error = ScaleError;

    fn worth_to_split(&self) -> bool {
        let rows = self.rows();
        rows >= 2 && rows as f64 * self.ctx.cost_per_row >= self.ctx.split_threshold as f64
    }

    fn split(&mut self) -> Self {
        let mid = self.y_start + (self.y_end - self.y_start) / 2;
        let upper = RowRangeTask {
            ctx: self.ctx,
            y_start: mid + 1,
            y_end: self.y_end,
        };
        self.y_end = mid;
        upper
    }

    fn run(&mut self, scratch: Scratch<'_>) -> ScaleResult<()> {
        log::trace!("rows {}..={}", self.y_start, self.y_end);
        let width = self.ctx.clipped.w as usize;
        let mut row = scratch.take_u32(width);
        for y in self.y_start..=self.y_end {
            self.ctx.fill_row(y, &mut row)?;
            self.ctx
                .sink
                .draw_row(&row, 0, self.ctx.clipped.x, y, width)?;
        }
        scratch.give_back(row);
        Ok(())
    }
}

/// Run one pass of `kernel` from `src_rect` of `src_pixels` to the
/// `clipped` part of `dst_rect`
///
/// `clipped` must be a non-empty part of `dst_rect`. Work is split over the
/// parallelizer when it has more than one thread and the pass is expensive
/// enough for `split_threshold`.
#[allow(clippy::too_many_arguments)]
pub(crate) fn draw_pass<P: Parallelizer>(
    parallelizer: &P,
    kernel: Kernel,
    split_threshold: u64,
    src_type: ColorTypeHelper,
    dst_type: ColorTypeHelper,
    src_pixels: &dyn SrcPixels,
    src_rect: Rect,
    dst_rect: Rect,
    clipped: Rect,
    sink: &dyn RowDrawer,
) -> ScaleResult<()> {
    let ctx = ScaleContext::new(
        kernel,
        split_threshold,
        src_type,
        dst_type,
        src_pixels,
        src_rect,
        dst_rect,
        clipped,
        sink,
    )?;
    let task = RowRangeTask::new(&ctx, clipped.y, clipped.y_max())?;

    if parallelizer.parallelism() >= 2 && task.worth_to_split() {
        log::debug!(
            "{:?} {:?} -> {:?} clipped to {:?}: parallel over {} threads",
            ctx.kernel,
            src_rect,
            dst_rect,
            clipped,
            parallelizer.parallelism()
        );
        parallelizer.execute(task)
    } else {
        log::debug!(
            "{:?} {:?} -> {:?} clipped to {:?}: sequential",
            ctx.kernel,
            src_rect,
            dst_rect,
            clipped
        );
        parallelizer.run_unsplit(task)
    }
}
