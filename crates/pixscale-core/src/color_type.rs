//! Color type helpers
//!
//! A [`ColorTypeHelper`] describes how the caller packs colors in its pixel
//! buffers ("native" or "type" form) and converts them to and from the
//! canonical premultiplied ARGB form that resampling works in.

use crate::argb;
use crate::error::{Error, Result};

/// Bit masks locating the four channels of a packed native color
///
/// Each mask must be a single contiguous run of 1 to 8 bits, and masks must
/// not overlap. Channels narrower than 8 bits are rescaled to and from the
/// full 8-bit range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChannelMasks {
    /// Masks in `[alpha, red, green, blue]` order
    masks: [u32; 4],
    shifts: [u32; 4],
    maxes: [u32; 4],
    premul: bool,
}

impl ChannelMasks {
    /// Create channel masks
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColorMask`] if a mask is zero, not contiguous,
    /// wider than 8 bits, or overlaps another mask.
    pub fn new(
        alpha_mask: u32,
        red_mask: u32,
        green_mask: u32,
        blue_mask: u32,
        premul: bool,
    ) -> Result<Self> {
        let masks = [alpha_mask, red_mask, green_mask, blue_mask];
        let names = ["alpha", "red", "green", "blue"];
        let mut shifts = [0u32; 4];
        let mut maxes = [0u32; 4];

        for (i, &mask) in masks.iter().enumerate() {
            if mask == 0 {
                return Err(Error::InvalidColorMask(format!(
                    "{} mask has zero width",
                    names[i]
                )));
            }
            let shift = mask.trailing_zeros();
            let max = mask >> shift;
            if max & (max + 1) != 0 {
                return Err(Error::InvalidColorMask(format!(
                    "{} mask {:#010x} is not contiguous",
                    names[i], mask
                )));
            }
            if max > 0xFF {
                return Err(Error::InvalidColorMask(format!(
                    "{} mask {:#010x} is wider than 8 bits",
                    names[i], mask
                )));
            }
            for (j, &other) in masks.iter().enumerate().take(i) {
                if mask & other != 0 {
                    return Err(Error::InvalidColorMask(format!(
                        "{} mask {:#010x} overlaps {} mask {:#010x}",
                        names[i], mask, names[j], other
                    )));
                }
            }
            shifts[i] = shift;
            maxes[i] = max;
        }

        Ok(Self {
            masks,
            shifts,
            maxes,
            premul,
        })
    }

    /// Whether native colors using these masks are premultiplied
    pub fn is_premul(&self) -> bool {
        self.premul
    }

    /// Unpack a native color into 8-bit-per-channel ARGB (same premul state).
    fn to_argb32(self, native: u32) -> u32 {
        let mut ch = [0u8; 4];
        for i in 0..4 {
            let v = (native & self.masks[i]) >> self.shifts[i];
            let max = self.maxes[i];
            ch[i] = if max == 0xFF {
                v as u8
            } else {
                ((v * 255 + max / 2) / max) as u8
            };
        }
        argb::argb32(ch[0], ch[1], ch[2], ch[3])
    }

    /// Pack 8-bit-per-channel ARGB into a native color.
    fn from_argb32(self, argb: u32) -> u32 {
        argb::to_channels(argb)
            .iter()
            .enumerate()
            .fold(0u32, |acc, (i, &c8)| {
                let max = self.maxes[i];
                let v = if max == 0xFF {
                    c8 as u32
                } else {
                    (c8 as u32 * max + 127) / 255
                };
                acc | (v << self.shifts[i])
            })
    }
}

/// How colors are packed in caller buffers
///
/// This is a closed set: resampling code matches on it, there is no
/// extension point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorTypeHelper {
    /// Premultiplied `0xAARRGGBB` (the canonical working form)
    #[default]
    PremulArgb32,
    /// Non-premultiplied `0xAARRGGBB`
    NonPremulArgb32,
    /// Premultiplied `0xRRGGBBAA`
    PremulRgba32,
    /// Arbitrary channel masks
    Masked(ChannelMasks),
}

impl ColorTypeHelper {
    /// Whether the native form is premultiplied.
    pub fn is_premul(&self) -> bool {
        match self {
            Self::PremulArgb32 | Self::PremulRgba32 => true,
            Self::NonPremulArgb32 => false,
            Self::Masked(m) => m.is_premul(),
        }
    }

    /// Convert a native color to canonical premultiplied ARGB.
    pub fn as_premul32_from_type(&self, color32: u32) -> u32 {
        match self {
            Self::PremulArgb32 => color32,
            Self::NonPremulArgb32 => argb::to_premul_argb32(color32),
            Self::PremulRgba32 => argb::rgba_to_argb32(color32),
            Self::Masked(m) => {
                let c = m.to_argb32(color32);
                if m.is_premul() {
                    let [a, r, g, b] = argb::to_channels(c);
                    argb::to_valid_premul32(a as i32, r as i32, g as i32, b as i32)
                } else {
                    argb::to_premul_argb32(c)
                }
            }
        }
    }

    /// Convert canonical premultiplied ARGB to the native form.
    pub fn as_type_from_premul32(&self, premul_color32: u32) -> u32 {
        match self {
            Self::PremulArgb32 => premul_color32,
            Self::NonPremulArgb32 => argb::to_non_premul_argb32(premul_color32),
            Self::PremulRgba32 => argb::argb_to_rgba32(premul_color32),
            Self::Masked(m) => {
                if m.is_premul() {
                    m.from_argb32(premul_color32)
                } else {
                    m.from_argb32(argb::to_non_premul_argb32(premul_color32))
                }
            }
        }
    }

    /// Convert non-premultiplied ARGB to the native form.
    pub fn as_type_from_non_premul32(&self, non_premul_color32: u32) -> u32 {
        match self {
            Self::PremulArgb32 => argb::to_premul_argb32(non_premul_color32),
            Self::NonPremulArgb32 => non_premul_color32,
            Self::PremulRgba32 => {
                argb::argb_to_rgba32(argb::to_premul_argb32(non_premul_color32))
            }
            Self::Masked(m) => {
                if m.is_premul() {
                    m.from_argb32(argb::to_premul_argb32(non_premul_color32))
                } else {
                    m.from_argb32(non_premul_color32)
                }
            }
        }
    }

    /// Clamp raw channel values into a valid canonical premultiplied color.
    #[inline]
    pub fn to_valid_premul32(&self, a: i32, r: i32, g: i32, b: i32) -> u32 {
        argb::to_valid_premul32(a, r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_premul_argb_is_identity() {
        let h = ColorTypeHelper::PremulArgb32;
        assert!(h.is_premul());
        assert_eq!(h.as_premul32_from_type(0x80402010), 0x80402010);
        assert_eq!(h.as_type_from_premul32(0x80402010), 0x80402010);
    }

    #[test]
    fn test_non_premul_argb() {
        let h = ColorTypeHelper::NonPremulArgb32;
        assert!(!h.is_premul());
        assert_eq!(h.as_premul32_from_type(0x80FF0080), 0x80800040);
        assert_eq!(h.as_type_from_premul32(0x80800040), 0x80FF0080);
        assert_eq!(h.as_type_from_non_premul32(0x80FF0080), 0x80FF0080);
    }

    #[test]
    fn test_premul_rgba() {
        let h = ColorTypeHelper::PremulRgba32;
        assert_eq!(h.as_premul32_from_type(0x402010_80), 0x80402010);
        assert_eq!(h.as_type_from_premul32(0x80402010), 0x40201080);
        assert_eq!(h.as_type_from_non_premul32(0x80FF0080), 0x80004080);
    }

    #[test]
    fn test_masked_abgr_matches_reordering() {
        let m = ChannelMasks::new(0xFF000000, 0x000000FF, 0x0000FF00, 0x00FF0000, true).unwrap();
        let h = ColorTypeHelper::Masked(m);
        // ABGR 0x80102040 is ARGB 0x80402010
        assert_eq!(h.as_premul32_from_type(0x80102040), 0x80402010);
        assert_eq!(h.as_type_from_premul32(0x80402010), 0x80102040);
    }

    #[test]
    fn test_masked_narrow_channels() {
        // 4-4-4-4
        let m = ChannelMasks::new(0xF000, 0x0F00, 0x00F0, 0x000F, false).unwrap();
        let h = ColorTypeHelper::Masked(m);
        assert_eq!(h.as_premul32_from_type(0xFFFF), 0xFFFFFFFF);
        assert_eq!(h.as_premul32_from_type(0xF0F0), 0xFF00FF00);
        assert_eq!(h.as_type_from_premul32(0xFF00FF00), 0xF0F0);
    }

    #[test]
    fn test_invalid_masks() {
        assert!(matches!(
            ChannelMasks::new(0, 0xFF0000, 0xFF00, 0xFF, true),
            Err(Error::InvalidColorMask(_))
        ));
        assert!(matches!(
            ChannelMasks::new(0xFF000000, 0xFF8000, 0xFF00, 0xFF, true),
            Err(Error::InvalidColorMask(_))
        ));
        assert!(matches!(
            ChannelMasks::new(0xFF000000, 0xFF0101, 0xFF00, 0xFF, true),
            Err(Error::InvalidColorMask(_))
        ));
        assert!(matches!(
            ChannelMasks::new(0xFF000000, 0x1FF0000, 0xFF00, 0xFF, true),
            Err(Error::InvalidColorMask(_))
        ));
        // green overlaps red
        assert!(matches!(
            ChannelMasks::new(0xFF000000, 0xFF0000, 0xFF0000, 0xFF, true),
            Err(Error::InvalidColorMask(_))
        ));
    }

    #[test]
    fn test_to_valid_premul32() {
        let h = ColorTypeHelper::NonPremulArgb32;
        assert_eq!(h.to_valid_premul32(0x40, 0x50, 0x20, -1), 0x40402000);
    }
}
