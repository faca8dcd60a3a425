//! Packed 32-bit color helpers
//!
//! # Pixel format
//!
//! Canonical colors are stored as `0xAARRGGBB` (alpha in MSB, blue in LSB).
//! A premultiplied color has each color channel pre-scaled by `alpha / 255`,
//! so a valid premultiplied color never has a color channel above alpha.

/// Shift amounts for extracting channels
pub const ALPHA_SHIFT: u32 = 24;
pub const RED_SHIFT: u32 = 16;
pub const GREEN_SHIFT: u32 = 8;
pub const BLUE_SHIFT: u32 = 0;

/// Extract alpha component from an ARGB pixel.
#[inline]
pub fn alpha8(argb: u32) -> u8 {
    (argb >> ALPHA_SHIFT) as u8
}

/// Extract red component from an ARGB pixel.
#[inline]
pub fn red8(argb: u32) -> u8 {
    (argb >> RED_SHIFT) as u8
}

/// Extract green component from an ARGB pixel.
#[inline]
pub fn green8(argb: u32) -> u8 {
    (argb >> GREEN_SHIFT) as u8
}

/// Extract blue component from an ARGB pixel.
#[inline]
pub fn blue8(argb: u32) -> u8 {
    (argb >> BLUE_SHIFT) as u8
}

/// Extract `[a, r, g, b]` from an ARGB pixel.
#[inline]
pub fn to_channels(argb: u32) -> [u8; 4] {
    [alpha8(argb), red8(argb), green8(argb), blue8(argb)]
}

/// Compose an ARGB pixel.
#[inline]
pub fn argb32(a: u8, r: u8, g: u8, b: u8) -> u32 {
    ((a as u32) << ALPHA_SHIFT)
        | ((r as u32) << RED_SHIFT)
        | ((g as u32) << GREEN_SHIFT)
        | ((b as u32) << BLUE_SHIFT)
}

/// Compose an opaque ARGB pixel.
#[inline]
pub fn opaque_argb32(r: u8, g: u8, b: u8) -> u32 {
    argb32(0xFF, r, g, b)
}

#[inline]
fn premul_channel(c: u32, a: u32) -> u32 {
    (c * a + 127) / 255
}

#[inline]
fn non_premul_channel(c: u32, a: u32) -> u32 {
    ((c * 255 + a / 2) / a).min(255)
}

/// Convert a non-premultiplied ARGB color to premultiplied ARGB.
pub fn to_premul_argb32(argb: u32) -> u32 {
    let a = alpha8(argb) as u32;
    match a {
        0xFF => argb,
        0 => 0,
        _ => {
            (a << ALPHA_SHIFT)
                | (premul_channel(red8(argb) as u32, a) << RED_SHIFT)
                | (premul_channel(green8(argb) as u32, a) << GREEN_SHIFT)
                | (premul_channel(blue8(argb) as u32, a) << BLUE_SHIFT)
        }
    }
}

/// Convert a premultiplied ARGB color to non-premultiplied ARGB.
///
/// Fully transparent colors map to `0`.
pub fn to_non_premul_argb32(premul: u32) -> u32 {
    let a = alpha8(premul) as u32;
    match a {
        0xFF => premul,
        0 => 0,
        _ => {
            (a << ALPHA_SHIFT)
                | (non_premul_channel(red8(premul) as u32, a) << RED_SHIFT)
                | (non_premul_channel(green8(premul) as u32, a) << GREEN_SHIFT)
                | (non_premul_channel(blue8(premul) as u32, a) << BLUE_SHIFT)
        }
    }
}

/// Build the nearest valid premultiplied color from raw channel values.
///
/// Alpha is clamped to `0..=255`, then each color channel to `0..=alpha`.
pub fn to_valid_premul32(a: i32, r: i32, g: i32, b: i32) -> u32 {
    let a = a.clamp(0, 0xFF);
    let r = r.clamp(0, a);
    let g = g.clamp(0, a);
    let b = b.clamp(0, a);
    argb32(a as u8, r as u8, g as u8, b as u8)
}

/// Check that no color channel exceeds alpha.
pub fn is_valid_premul32(premul: u32) -> bool {
    let a = alpha8(premul);
    red8(premul) <= a && green8(premul) <= a && blue8(premul) <= a
}

/// Convert `0xAARRGGBB` to `0xRRGGBBAA`.
#[inline]
pub fn argb_to_rgba32(argb: u32) -> u32 {
    argb.rotate_left(8)
}

/// Convert `0xRRGGBBAA` to `0xAARRGGBB`.
#[inline]
pub fn rgba_to_argb32(rgba: u32) -> u32 {
    rgba.rotate_right(8)
}

/// Largest absolute per-channel difference between two packed colors.
///
/// Works for any 8-bit-per-channel packing as long as both colors use it.
pub fn max_channel_delta(c1: u32, c2: u32) -> u32 {
    (0..4)
        .map(|i| {
            let shift = i * 8;
            let v1 = (c1 >> shift) & 0xFF;
            let v2 = (c2 >> shift) & 0xFF;
            v1.abs_diff(v2)
        })
        .max()
        .unwrap_or(0)
}
