//! Bilinear interpolation

use super::{SrcReader, area_weighted_color};
use pixscale_core::Result;

/// Bilinear color at (`cx`, `cy`), local to the source rect
///
/// The four neighbors around `floor(c - 0.5)` are weighted by the overlap of
/// a unit square centered on the sample point, which is the usual `1 - t` /
/// `t` bilinear weighting. Near the edges the square is clamped to the
/// source rect, so this is exactly a 1x1 box sample.
///
/// # Errors
///
/// Returns an error if the source can't be read.
pub fn bilinear_color(reader: &SrcReader<'_>, cx: f64, cy: f64) -> Result<u32> {
    area_weighted_color(reader, cx - 0.5, cx + 0.5, cy - 0.5, cy + 0.5)
}
