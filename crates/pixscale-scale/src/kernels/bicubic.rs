//! Bicubic (Catmull-Rom) interpolation

use super::{ColorSum, SrcReader};
use pixscale_core::Result;

/// Sharpness of the cubic convolution kernel
const A: f64 = -0.5;

/// Catmull-Rom cubic convolution weight at distance `x`
#[inline]
pub fn catmull_rom(x: f64) -> f64 {
    let x = x.abs();
    if x <= 1.0 {
        ((A + 2.0) * x - (A + 3.0)) * x * x + 1.0
    } else if x < 2.0 {
        ((A * x - 5.0 * A) * x + 8.0 * A) * x - 4.0 * A
    } else {
        0.0
    }
}

/// Tap positions and weights for one axis.
#[inline]
fn taps(c: f64) -> (i32, [f64; 4]) {
    let f = c - 0.5;
    let x0 = f.floor();
    let t = f - x0;
    (
        x0 as i32 - 1,
        [
            catmull_rom(1.0 + t),
            catmull_rom(t),
            catmull_rom(1.0 - t),
            catmull_rom(2.0 - t),
        ],
    )
}

/// Bicubic color at (`cx`, `cy`), local to the source rect
///
/// A 4x4 neighborhood around `floor(c - 0.5)` is convolved with the
/// Catmull-Rom kernel. Taps outside the source rect repeat the edge pixels.
/// The result is normalized by the total weight, rounded, and clamped to a
/// valid premultiplied color (the kernel has negative lobes, so channels can
/// over- or undershoot).
///
/// # Errors
///
/// Returns an error if the source can't be read.
pub fn bicubic_color(reader: &SrcReader<'_>, cx: f64, cy: f64) -> Result<u32> {
    let (x_first, wx) = taps(cx);
    let (y_first, wy) = taps(cy);
    let mut sum = ColorSum::default();
    for (j, &wj) in wy.iter().enumerate() {
        if wj == 0.0 {
            continue;
        }
        for (i, &wi) in wx.iter().enumerate() {
            if wi == 0.0 {
                continue;
            }
            let c = reader.premul_at(x_first + i as i32, y_first + j as i32)?;
            sum.add(c, wi * wj);
        }
    }
    Ok(sum.to_premul32())
}
