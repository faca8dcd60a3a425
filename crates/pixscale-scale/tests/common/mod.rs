//! Helpers shared by the scaling regression tests
#![allow(dead_code)]

use pixscale_core::{ColorTypeHelper, PixelBuffer, Rect};
use pixscale_parallel::Parallelizer;
use pixscale_scale::{ScaleResult, ScaledRectDrawer, ScalingType};

/// Fill value for destination pixels that should never be written
pub const UNTOUCHED: u32 = 0x12345678;

/// Draw `src_rect` of `src` onto `dst_rect` clipped to `dst_clip`, into `dst`
#[allow(clippy::too_many_arguments)]
pub fn draw_into<D: ScaledRectDrawer, P: Parallelizer>(
    drawer: &D,
    parallelizer: &P,
    color_type: ColorTypeHelper,
    src: &PixelBuffer,
    src_rect: Rect,
    dst_rect: Rect,
    dst_clip: Rect,
    dst: &mut PixelBuffer,
) -> ScaleResult<()> {
    let sink = dst.row_drawer();
    drawer.draw_scaled_rect(
        parallelizer,
        color_type,
        src,
        src_rect,
        dst_rect,
        dst_clip,
        &sink,
    )
}

/// Resize all of `src` to a new buffer covering `dst_rect`
pub fn resize_with<D: ScaledRectDrawer, P: Parallelizer>(
    drawer: &D,
    parallelizer: &P,
    color_type: ColorTypeHelper,
    src: &PixelBuffer,
    dst_rect: Rect,
) -> ScaleResult<PixelBuffer> {
    let mut dst = PixelBuffer::new(dst_rect)?;
    dst.fill(UNTOUCHED);
    draw_into(
        drawer,
        parallelizer,
        color_type,
        src,
        src.rect(),
        dst_rect,
        dst_rect,
        &mut dst,
    )?;
    Ok(dst)
}

/// Resize all of `src` with the default drawer of `scaling_type`
pub fn resize<P: Parallelizer>(
    scaling_type: ScalingType,
    parallelizer: &P,
    color_type: ColorTypeHelper,
    src: &PixelBuffer,
    dst_rect: Rect,
) -> ScaleResult<PixelBuffer> {
    resize_with(&scaling_type.drawer(), parallelizer, color_type, src, dst_rect)
}
