//! Interpolation kernels
//!
//! Each kernel computes the premultiplied ARGB color of one destination
//! pixel from the source. Kernels work in *local* source coordinates:
//! `(0, 0)` is the top-left corner of the source rect and pixel `(i, j)`
//! covers `[i, i + 1) x [j, j + 1)`, so its center is `(i + 0.5, j + 0.5)`.
//!
//! Reads are clamped to the source rect through [`SrcReader`]; a kernel
//! never touches pixels outside of it.

mod bicubic;
mod bilinear;
mod boxsample;
mod nearest;

pub use bicubic::{bicubic_color, catmull_rom};
pub use bilinear::bilinear_color;
pub use boxsample::box_sample_color;
pub use nearest::{is_nearest_exact, nearest_index};

use pixscale_core::{ColorTypeHelper, Error, Rect, Result, SrcPixels, argb};

/// Clamped, local-coordinate reads from a source rect
#[derive(Clone, Copy)]
pub struct SrcReader<'a> {
    pixels: &'a dyn SrcPixels,
    arr: Option<&'a [u32]>,
    stride: usize,
    pixels_rect: Rect,
    src_rect: Rect,
    color_type: ColorTypeHelper,
}

impl<'a> SrcReader<'a> {
    /// Read `src_rect` (absolute coordinates) of `pixels`, whose colors are
    /// packed as described by `color_type`
    ///
    /// # Errors
    ///
    /// Returns an error if `src_rect` is empty or not contained in the
    /// addressable rect of `pixels`.
    pub fn new(
        pixels: &'a dyn SrcPixels,
        src_rect: Rect,
        color_type: ColorTypeHelper,
    ) -> Result<Self> {
        let pixels_rect = pixels.rect();
        if src_rect.is_empty() || !pixels_rect.contains_rect(&src_rect) {
            return Err(Error::InvalidParameter(format!(
                "source rect {:?} not readable in {:?}",
                src_rect, pixels_rect
            )));
        }
        Ok(Self {
            pixels,
            arr: pixels.color32_arr(),
            stride: pixels.scanline_stride(),
            pixels_rect,
            src_rect,
            color_type,
        })
    }

    /// Width of the source rect
    #[inline]
    pub fn width(&self) -> i32 {
        self.src_rect.w
    }

    /// Height of the source rect
    #[inline]
    pub fn height(&self) -> i32 {
        self.src_rect.h
    }

    /// How source colors are packed
    #[inline]
    pub fn color_type(&self) -> ColorTypeHelper {
        self.color_type
    }

    /// Native color at local (x, y), clamped into the source rect.
    pub fn native_at(&self, x: i32, y: i32) -> Result<u32> {
        let ax = self.src_rect.x + x.clamp(0, self.src_rect.w - 1);
        let ay = self.src_rect.y + y.clamp(0, self.src_rect.h - 1);
        match self.arr {
            Some(arr) => {
                let i = (ay - self.pixels_rect.y) as usize * self.stride
                    + (ax - self.pixels_rect.x) as usize;
                arr.get(i).copied().ok_or(Error::OutOfRange {
                    x: ax,
                    y: ay,
                    rect: self.pixels_rect,
                })
            }
            None => self.pixels.color32_at(ax, ay),
        }
    }

    /// Premultiplied ARGB color at local (x, y), clamped into the source rect.
    #[inline]
    pub fn premul_at(&self, x: i32, y: i32) -> Result<u32> {
        Ok(self.color_type.as_premul32_from_type(self.native_at(x, y)?))
    }
}

/// Weighted sums of premultiplied channels
///
/// Reset per destination pixel.
#[derive(Debug, Default, Clone, Copy)]
pub struct ColorSum {
    a: f64,
    r: f64,
    g: f64,
    b: f64,
    weight: f64,
}

impl ColorSum {
    /// Add `premul` with weight `w`
    #[inline]
    pub fn add(&mut self, premul: u32, w: f64) {
        let [a, r, g, b] = argb::to_channels(premul);
        self.a += a as f64 * w;
        self.r += r as f64 * w;
        self.g += g as f64 * w;
        self.b += b as f64 * w;
        self.weight += w;
    }

    /// Total weight added so far
    #[inline]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// The normalized, rounded and canonicalized premultiplied color
    ///
    /// Zero total weight gives transparent black.
    pub fn to_premul32(&self) -> u32 {
        if self.weight == 0.0 {
            return 0;
        }
        let round = |v: f64| (v / self.weight + 0.5).floor() as i32;
        argb::to_valid_premul32(round(self.a), round(self.r), round(self.g), round(self.b))
    }
}

/// Pixels overlapped by `[lo, hi)` along one axis of `span` pixels, with
/// their overlap lengths
///
/// The interval is first clipped to `[0, span)`. An interval that ends up
/// empty yields the single pixel closest to it, with weight 1.
pub(crate) struct Overlaps {
    lo: f64,
    hi: f64,
    next: i32,
    last: i32,
}

impl Overlaps {
    pub(crate) fn new(lo: f64, hi: f64, span: i32) -> Self {
        let lo = lo.max(0.0);
        let hi = hi.min(span as f64);
        if hi <= lo {
            let i = (lo.floor() as i32).clamp(0, span - 1);
            return Self {
                lo: i as f64,
                hi: i as f64 + 1.0,
                next: i,
                last: i,
            };
        }
        Self {
            lo,
            hi,
            next: lo.floor() as i32,
            last: (hi.ceil() as i32 - 1).min(span - 1),
        }
    }
}

impl Iterator for Overlaps {
    type Item = (i32, f64);

    fn next(&mut self) -> Option<(i32, f64)> {
        while self.next <= self.last {
            let i = self.next;
            self.next += 1;
            let w = self.hi.min((i + 1) as f64) - self.lo.max(i as f64);
            if w > 0.0 {
                return Some((i, w));
            }
        }
        None
    }
}

/// Area-weighted average over `[x_lo, x_hi) x [y_lo, y_hi)`.
pub(crate) fn area_weighted_color(
    reader: &SrcReader<'_>,
    x_lo: f64,
    x_hi: f64,
    y_lo: f64,
    y_hi: f64,
) -> Result<u32> {
    let mut sum = ColorSum::default();
    for (y, wy) in Overlaps::new(y_lo, y_hi, reader.height()) {
        for (x, wx) in Overlaps::new(x_lo, x_hi, reader.width()) {
            sum.add(reader.premul_at(x, y)?, wx * wy);
        }
    }
    Ok(sum.to_premul32())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixscale_core::PixelBuffer;

    #[test]
    fn test_overlaps_interior() {
        let v: Vec<_> = Overlaps::new(0.5, 2.25, 4).collect();
        assert_eq!(v, vec![(0, 0.5), (1, 1.0), (2, 0.25)]);
    }

    #[test]
    fn test_overlaps_clipped_to_span() {
        let v: Vec<_> = Overlaps::new(-0.75, 0.25, 3).collect();
        assert_eq!(v, vec![(0, 0.25)]);
        let v: Vec<_> = Overlaps::new(2.5, 3.5, 3).collect();
        assert_eq!(v, vec![(2, 0.5)]);
    }

    #[test]
    fn test_overlaps_degenerate() {
        let v: Vec<_> = Overlaps::new(1.5, 1.5, 3).collect();
        assert_eq!(v, vec![(1, 1.0)]);
        let v: Vec<_> = Overlaps::new(7.0, 9.0, 3).collect();
        assert_eq!(v, vec![(2, 1.0)]);
    }

    #[test]
    fn test_color_sum_normalizes() {
        let mut sum = ColorSum::default();
        sum.add(0xFF000000, 0.5);
        sum.add(0xFFFFFFFF, 0.5);
        assert_eq!(sum.to_premul32(), 0xFF808080);
        assert_eq!(ColorSum::default().to_premul32(), 0);
    }

    #[test]
    fn test_reader_clamps_and_converts() {
        let buf = PixelBuffer::from_rows(-1, -1, &[&[0x80FF0000, 0xFF00FF00], &[0, 0xFF0000FF]])
            .unwrap();
        let reader =
            SrcReader::new(&buf, Rect::new_unchecked(0, -1, 1, 2), ColorTypeHelper::NonPremulArgb32)
                .unwrap();
        assert_eq!(reader.native_at(0, 0).unwrap(), 0xFF00FF00);
        assert_eq!(reader.native_at(-5, 9).unwrap(), 0xFF0000FF);
        let reader =
            SrcReader::new(&buf, Rect::new_unchecked(-1, -1, 1, 1), ColorTypeHelper::NonPremulArgb32)
                .unwrap();
        assert_eq!(reader.premul_at(3, 3).unwrap(), 0x80800000);
    }

    #[test]
    fn test_reader_rejects_uncontained_rect() {
        let buf = PixelBuffer::new(Rect::from_size(2, 2)).unwrap();
        assert!(SrcReader::new(&buf, Rect::new_unchecked(1, 1, 2, 1), ColorTypeHelper::default()).is_err());
        assert!(SrcReader::new(&buf, Rect::new_unchecked(0, 0, 0, 1), ColorTypeHelper::default()).is_err());
    }
}
