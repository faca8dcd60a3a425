//! Kernel regression test
//!
//! Sampling at pixel centers reproduces the pixels, and box sampling with a
//! 1x1 box is the same as bilinear.

use pixscale_core::{ColorTypeHelper, Rect};
use pixscale_scale::kernels::{SrcReader, bicubic_color, bilinear_color, box_sample_color};
use pixscale_test::{RandomImage, RegParams};

#[test]
fn kernel_reg_exact_pixels() {
    let mut rp = RegParams::new("kernel_exact");

    let buf = RandomImage::translucent()
        .generate(Rect::new_unchecked(-2, 3, 9, 7), 12)
        .expect("random image");
    let src_rect = Rect::new_unchecked(-1, 4, 6, 5);
    let reader =
        SrcReader::new(&buf, src_rect, ColorTypeHelper::PremulArgb32).expect("reader");

    for y in 0..src_rect.h {
        for x in 0..src_rect.w {
            let expected = buf.get(src_rect.x + x, src_rect.y + y).expect("pixel");
            let cx = x as f64 + 0.5;
            let cy = y as f64 + 0.5;
            let boxed = box_sample_color(&reader, cx, cy, 1.0, 1.0).expect("box");
            let bilinear = bilinear_color(&reader, cx, cy).expect("bilinear");
            let bicubic = bicubic_color(&reader, cx, cy).expect("bicubic");
            rp.compare_colors(expected, boxed, 0);
            rp.compare_colors(expected, bilinear, 0);
            rp.compare_colors(expected, bicubic, 0);
        }
    }

    assert!(rp.cleanup(), "kernel_exact regression test failed");
}

#[test]
fn kernel_reg_box_equals_bilinear() {
    let mut rp = RegParams::new("kernel_box_bilinear");

    let buf = RandomImage::translucent()
        .generate(Rect::from_size(11, 8), 13)
        .expect("random image");
    let reader =
        SrcReader::new(&buf, buf.rect(), ColorTypeHelper::PremulArgb32).expect("reader");

    // sample positions on a 1/7 pixel grid, edges included
    for j in 0..=56 {
        for i in 0..=77 {
            let cx = i as f64 / 7.0;
            let cy = j as f64 / 7.0;
            let boxed = box_sample_color(&reader, cx, cy, 1.0, 1.0).expect("box");
            let bilinear = bilinear_color(&reader, cx, cy).expect("bilinear");
            rp.compare_colors(boxed, bilinear, 0);
        }
    }

    assert!(rp.cleanup(), "kernel_box_bilinear regression test failed");
}
