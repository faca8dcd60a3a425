//! Box sampling

use super::{SrcReader, area_weighted_color};
use pixscale_core::Result;

/// Area-weighted average of the `box_w x box_h` footprint centered on
/// (`cx`, `cy`)
///
/// Coordinates are local to the source rect. The footprint is clamped to
/// the source rect and partially covered pixels count with their exact
/// covered area.
///
/// # Errors
///
/// Returns an error if the source can't be read.
pub fn box_sample_color(
    reader: &SrcReader<'_>,
    cx: f64,
    cy: f64,
    box_w: f64,
    box_h: f64,
) -> Result<u32> {
    let hw = box_w / 2.0;
    let hh = box_h / 2.0;
    area_weighted_color(reader, cx - hw, cx + hw, cy - hh, cy + hh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixscale_core::{ColorTypeHelper, PixelBuffer, Rect};

    fn gradient() -> PixelBuffer {
        PixelBuffer::from_rows(
            0,
            0,
            &[
                &[0xFF000000, 0xFF101010, 0xFF202020, 0xFF303030],
                &[0xFF404040, 0xFF505050, 0xFF606060, 0xFF707070],
                &[0xFF808080, 0xFF909090, 0xFFA0A0A0, 0xFFB0B0B0],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_unit_box_at_center_is_exact() {
        let buf = gradient();
        let reader = SrcReader::new(&buf, buf.rect(), ColorTypeHelper::PremulArgb32).unwrap();
        for y in 0..3 {
            for x in 0..4 {
                let c = box_sample_color(&reader, x as f64 + 0.5, y as f64 + 0.5, 1.0, 1.0)
                    .unwrap();
                assert_eq!(c, buf.get(x, y).unwrap());
            }
        }
    }

    #[test]
    fn test_two_by_two_box_averages() {
        let buf = gradient();
        let reader = SrcReader::new(&buf, buf.rect(), ColorTypeHelper::PremulArgb32).unwrap();
        // (0x00 + 0x10 + 0x40 + 0x50) / 4 = 0x28
        let c = box_sample_color(&reader, 1.0, 1.0, 2.0, 2.0).unwrap();
        assert_eq!(c, 0xFF282828);
    }

    #[test]
    fn test_footprint_is_clamped_to_source_rect() {
        let buf = gradient();
        let src = Rect::new_unchecked(1, 1, 2, 1);
        let reader = SrcReader::new(&buf, src, ColorTypeHelper::PremulArgb32).unwrap();
        // the whole source rect: (0x50 + 0x60) / 2
        let c = box_sample_color(&reader, 1.0, 0.5, 10.0, 10.0).unwrap();
        assert_eq!(c, 0xFF585858);
    }

    #[test]
    fn test_translucent_average_stays_premultiplied() {
        let buf = PixelBuffer::from_rows(0, 0, &[&[0x00000000, 0xFFFF0000]]).unwrap();
        let reader = SrcReader::new(&buf, buf.rect(), ColorTypeHelper::PremulArgb32).unwrap();
        let c = box_sample_color(&reader, 1.0, 0.5, 2.0, 1.0).unwrap();
        assert_eq!(c, 0x80800000);
    }
}
