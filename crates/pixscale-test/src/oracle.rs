//! Reference results and image statistics
//!
//! Nothing here shares code with the resampling engine: the reference
//! resamplers are written from the textbook formulas so that comparing
//! against them means something.

use crate::error::{TestError, TestResult};
use pixscale_core::{ColorTypeHelper, PixelBuffer, Rect, SrcPixels, argb};
use std::fmt::Display;

/// Mean premultiplied `[a, r, g, b]` over `rect` of `pixels`
///
/// Colors are converted from `color_type` first. Every pixel has the same
/// weight, so for equal-area regions this is the area-weighted mean.
///
/// # Errors
///
/// Returns an error if `rect` is not readable.
pub fn mean_premul_color(
    pixels: &dyn SrcPixels,
    rect: Rect,
    color_type: ColorTypeHelper,
) -> TestResult<[f64; 4]> {
    let mut sum = [0f64; 4];
    for y in rect.y..rect.bottom() {
        for x in rect.x..rect.right() {
            let c = color_type.as_premul32_from_type(pixels.color32_at(x, y)?);
            for (s, ch) in sum.iter_mut().zip(argb::to_channels(c)) {
                *s += ch as f64;
            }
        }
    }
    let n = rect.area().max(1) as f64;
    Ok(sum.map(|s| s / n))
}

/// Largest per-channel difference between two mean colors
pub fn max_mean_delta(m1: [f64; 4], m2: [f64; 4]) -> f64 {
    m1.iter()
        .zip(m2.iter())
        .map(|(a, b)| (a - b).abs())
        .fold(0.0, f64::max)
}

/// Largest per-channel difference between two same-sized images
///
/// Pixels are matched by position relative to each image's origin.
///
/// # Errors
///
/// Returns [`TestError::SizeMismatch`] if the sizes differ.
pub fn max_channel_delta(expected: &PixelBuffer, actual: &PixelBuffer) -> TestResult<u32> {
    let (e, a) = (expected.rect(), actual.rect());
    if e.w != a.w || e.h != a.h {
        return Err(TestError::SizeMismatch {
            expected: e,
            actual: a,
        });
    }
    let mut max = 0;
    for dy in 0..e.h {
        for dx in 0..e.w {
            let (Some(ce), Some(ca)) = (expected.get(e.x + dx, e.y + dy), actual.get(a.x + dx, a.y + dy))
            else {
                continue;
            };
            max = max.max(argb::max_channel_delta(ce, ca));
        }
    }
    Ok(max)
}

/// Copy `rect` of `buf` into its own tightly packed buffer
///
/// # Errors
///
/// Returns an error if `rect` is not contained in `buf`.
pub fn sub_rect(buf: &PixelBuffer, rect: Rect) -> TestResult<PixelBuffer> {
    Ok(buf.sub_buffer(rect)?)
}

/// Premultiplied channels of `buf` at (x, y) relative to its origin,
/// clamped to the image.
fn premul_channels(buf: &PixelBuffer, x: i32, y: i32) -> [f64; 4] {
    let r = buf.rect();
    let x = r.x + x.clamp(0, r.w - 1);
    let y = r.y + y.clamp(0, r.h - 1);
    argb::to_channels(buf.get(x, y).unwrap_or(0)).map(|c| c as f64)
}

fn round_premul(ch: [f64; 4]) -> u32 {
    let [a, r, g, b] = ch.map(|v| (v + 0.5).floor() as i32);
    argb::to_valid_premul32(a, r, g, b)
}

/// Source coordinate of the center of destination pixel `i`, in source
/// pixel-index space (pixel `k` has its center at `k`).
fn src_pos(i: i32, src: i32, dst: i32) -> f64 {
    (i as f64 + 0.5) * src as f64 / dst as f64 - 0.5
}

/// Reference bilinear resize of premultiplied `src` to `w x h`
///
/// The result has its origin at (0, 0).
///
/// # Errors
///
/// Returns an error if `w` or `h` is negative.
pub fn reference_bilinear(src: &PixelBuffer, w: i32, h: i32) -> TestResult<PixelBuffer> {
    let sr = src.rect();
    let mut out = PixelBuffer::new(Rect::new(0, 0, w, h)?)?;
    for y in 0..h {
        let fy = src_pos(y, sr.h, h);
        let y0 = fy.floor();
        let ty = fy - y0;
        let y0 = y0 as i32;
        for x in 0..w {
            let fx = src_pos(x, sr.w, w);
            let x0 = fx.floor();
            let tx = fx - x0;
            let x0 = x0 as i32;

            let p00 = premul_channels(src, x0, y0);
            let p10 = premul_channels(src, x0 + 1, y0);
            let p01 = premul_channels(src, x0, y0 + 1);
            let p11 = premul_channels(src, x0 + 1, y0 + 1);
            let mut ch = [0f64; 4];
            for k in 0..4 {
                let top = p00[k] + (p10[k] - p00[k]) * tx;
                let bottom = p01[k] + (p11[k] - p01[k]) * tx;
                ch[k] = top + (bottom - top) * ty;
            }
            out.set(x, y, round_premul(ch))?;
        }
    }
    Ok(out)
}

/// Catmull-Rom weights of the four taps around a sample at fraction `t`.
fn catmull_rom_weights(t: f64) -> [f64; 4] {
    let t2 = t * t;
    let t3 = t2 * t;
    [
        (-t3 + 2.0 * t2 - t) / 2.0,
        (3.0 * t3 - 5.0 * t2 + 2.0) / 2.0,
        (-3.0 * t3 + 4.0 * t2 + t) / 2.0,
        (t3 - t2) / 2.0,
    ]
}

/// Reference bicubic (Catmull-Rom) resize of premultiplied `src` to `w x h`
///
/// Taps outside the image repeat the edge pixels; results are clamped to
/// valid premultiplied colors. The result has its origin at (0, 0).
///
/// # Errors
///
/// Returns an error if `w` or `h` is negative.
pub fn reference_bicubic(src: &PixelBuffer, w: i32, h: i32) -> TestResult<PixelBuffer> {
    let sr = src.rect();
    let mut out = PixelBuffer::new(Rect::new(0, 0, w, h)?)?;
    for y in 0..h {
        let fy = src_pos(y, sr.h, h);
        let y0 = fy.floor();
        let wy = catmull_rom_weights(fy - y0);
        let y0 = y0 as i32;
        for x in 0..w {
            let fx = src_pos(x, sr.w, w);
            let x0 = fx.floor();
            let wx = catmull_rom_weights(fx - x0);
            let x0 = x0 as i32;

            let mut ch = [0f64; 4];
            for (j, wj) in wy.iter().enumerate() {
                for (i, wi) in wx.iter().enumerate() {
                    let p = premul_channels(src, x0 - 1 + i as i32, y0 - 1 + j as i32);
                    for k in 0..4 {
                        ch[k] += p[k] * wi * wj;
                    }
                }
            }
            out.set(x, y, round_premul(ch))?;
        }
    }
    Ok(out)
}

/// Resize `src` to `via` and back to its own size with `resize`
///
/// `resize` gets the image to resize and the destination rect, and returns
/// the resized image.
///
/// # Errors
///
/// Returns [`TestError::Resize`] if a resize step fails.
pub fn round_trip<F, E>(src: &PixelBuffer, via: (i32, i32), mut resize: F) -> TestResult<PixelBuffer>
where
    F: FnMut(&PixelBuffer, Rect) -> Result<PixelBuffer, E>,
    E: Display,
{
    let there = resize(src, Rect::new(0, 0, via.0, via.1)?)
        .map_err(|e| TestError::Resize(e.to_string()))?;
    resize(&there, src.rect()).map_err(|e| TestError::Resize(e.to_string()))
}
