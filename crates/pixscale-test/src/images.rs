//! Deterministic random test images

use crate::error::TestResult;
use pixscale_core::{PixelBuffer, Rect, argb};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;

/// Value written to scanline padding, never a valid resampling result
pub const PADDING_COLOR: u32 = 0x00DEAD00;

/// Recipe for a random image
///
/// Channels are drawn uniformly from the given ranges (color ranges apply
/// to the non-premultiplied color). The same recipe, rect and seed always
/// give the same image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomImage {
    /// Alpha range
    pub alpha: RangeInclusive<u8>,
    /// Range of the non-premultiplied color channels
    pub color: RangeInclusive<u8>,
    /// Store premultiplied (`true`) or non-premultiplied ARGB
    pub premul: bool,
    /// Extra elements at the end of every scanline
    pub padding: usize,
}

impl Default for RandomImage {
    fn default() -> Self {
        Self::opaque()
    }
}

impl RandomImage {
    /// Fully opaque, any color
    pub fn opaque() -> Self {
        Self {
            alpha: 0xFF..=0xFF,
            color: 0..=0xFF,
            premul: true,
            padding: 0,
        }
    }

    /// Any alpha, any color
    pub fn translucent() -> Self {
        Self {
            alpha: 0..=0xFF,
            ..Self::opaque()
        }
    }

    /// Set the alpha range
    pub fn with_alpha(mut self, alpha: RangeInclusive<u8>) -> Self {
        self.alpha = alpha;
        self
    }

    /// Set the color channel range
    pub fn with_color(mut self, color: RangeInclusive<u8>) -> Self {
        self.color = color;
        self
    }

    /// Store non-premultiplied colors
    pub fn non_premul(mut self) -> Self {
        self.premul = false;
        self
    }

    /// Pad every scanline with `padding` extra elements
    pub fn with_padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    /// Generate an image covering `rect`
    ///
    /// # Errors
    ///
    /// Returns an error if `rect` has negative dimensions.
    pub fn generate(&self, rect: Rect, seed: u64) -> TestResult<PixelBuffer> {
        let mut rng = StdRng::seed_from_u64(seed);
        let stride = rect.w.max(0) as usize + self.padding;
        let mut buf = PixelBuffer::with_stride(rect, stride)?;
        buf.data_mut().fill(PADDING_COLOR);
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                let a = rng.random_range(self.alpha.clone());
                let r = rng.random_range(self.color.clone());
                let g = rng.random_range(self.color.clone());
                let b = rng.random_range(self.color.clone());
                let c = argb::argb32(a, r, g, b);
                let c = if self.premul {
                    argb::to_premul_argb32(c)
                } else {
                    c
                };
                buf.set(x, y, c)?;
            }
        }
        Ok(buf)
    }
}

/// A copy of `buf` with `padding` extra elements per scanline
///
/// # Errors
///
/// Returns an error if `buf` can't be copied.
pub fn with_padding(buf: &PixelBuffer, padding: usize) -> TestResult<PixelBuffer> {
    let rect = buf.rect();
    let mut out = PixelBuffer::with_stride(rect, rect.w as usize + padding)?;
    out.data_mut().fill(PADDING_COLOR);
    for y in rect.y..rect.bottom() {
        for x in rect.x..rect.right() {
            if let Some(c) = buf.get(x, y) {
                out.set(x, y, c)?;
            }
        }
    }
    Ok(out)
}
