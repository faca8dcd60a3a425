//! Identity regression test
//!
//! Scaling a rect to the same size must reproduce it exactly, for every
//! algorithm and color type, whatever the scanline strides and origins.

mod common;

use common::{UNTOUCHED, draw_into};
use pixscale_core::{ChannelMasks, ColorTypeHelper, PixelBuffer, Rect};
use pixscale_parallel::{FakeParallelizer, SequentialParallelizer};
use pixscale_scale::ScalingType;
use pixscale_test::{RandomImage, RegParams};

fn color_types() -> Vec<ColorTypeHelper> {
    let abgr = ChannelMasks::new(0xFF000000, 0x000000FF, 0x0000FF00, 0x00FF0000, true)
        .expect("abgr masks");
    vec![
        ColorTypeHelper::PremulArgb32,
        ColorTypeHelper::NonPremulArgb32,
        ColorTypeHelper::PremulRgba32,
        ColorTypeHelper::Masked(abgr),
    ]
}

/// Convert every element of a premultiplied ARGB buffer to `color_type`.
fn to_native(mut buf: PixelBuffer, color_type: ColorTypeHelper) -> PixelBuffer {
    for c in buf.data_mut() {
        *c = color_type.as_type_from_premul32(*c);
    }
    buf
}

#[test]
fn identity_reg_whole_image() {
    let mut rp = RegParams::new("identity_whole");

    let premul = RandomImage::translucent()
        .with_padding(3)
        .generate(Rect::from_size(13, 9), 17)
        .expect("random image");

    for color_type in color_types() {
        let src = to_native(premul.clone(), color_type);
        for scaling_type in ScalingType::ALL {
            // --- destination without padding, at another origin ---
            let dst_rect = Rect::new_unchecked(-4, 7, 13, 9);
            let mut dst = PixelBuffer::new(dst_rect).expect("dst");
            dst.fill(UNTOUCHED);
            draw_into(
                &scaling_type.drawer(),
                &SequentialParallelizer::new(),
                color_type,
                &src,
                src.rect(),
                dst_rect,
                dst_rect,
                &mut dst,
            )
            .expect("draw");
            if !rp.compare_pixels(&src, &dst) {
                eprintln!("  {:?} / {:?} differs", scaling_type, color_type);
            }
        }
    }

    assert!(rp.cleanup(), "identity_whole regression test failed");
}

#[test]
fn identity_reg_sub_rect() {
    let mut rp = RegParams::new("identity_sub_rect");

    let src = RandomImage::translucent()
        .non_premul()
        .generate(Rect::new_unchecked(-5, -3, 20, 16), 5)
        .expect("random image");
    let src_rect = Rect::new_unchecked(-2, -1, 9, 11);
    let expected = src.sub_buffer(src_rect).expect("sub buffer");
    let parallelizer = FakeParallelizer::new(4).expect("fake parallelizer");

    for scaling_type in ScalingType::ALL {
        let dst_rect = Rect::new_unchecked(3, 3, 9, 11);
        let mut dst = PixelBuffer::with_stride(dst_rect, 12).expect("dst");
        draw_into(
            &scaling_type.drawer(),
            &parallelizer,
            ColorTypeHelper::NonPremulArgb32,
            &src,
            src_rect,
            dst_rect,
            dst_rect,
            &mut dst,
        )
        .expect("draw");
        rp.compare_pixels(&expected, &dst);
    }

    assert!(rp.cleanup(), "identity_sub_rect regression test failed");
}
