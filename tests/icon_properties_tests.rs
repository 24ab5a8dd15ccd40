// Properties every generated icon must satisfy, across variants and sizes

use checkmate_icons::canvas::Canvas;
use checkmate_icons::constants::colors::{BLACK, GOLD};
use checkmate_icons::constants::layout::SAFE_ZONE_MARGIN;
use checkmate_icons::geometry::{Point, dilation_offsets, sample_cubic};
use checkmate_icons::knight::curved_path;
use checkmate_icons::rasterizer::{IconLayout, background};
use checkmate_icons::{StyleVariant, generate};
use image::Rgb;

const SIZES: [u32; 6] = [1, 7, 32, 180, 192, 512];

fn rgb(color: image::Rgba<u8>) -> Rgb<u8> {
    Rgb([color.0[0], color.0[1], color.0[2]])
}

#[test]
fn test_every_icon_is_square_and_opaque() {
    for variant in StyleVariant::ALL {
        for size in SIZES {
            for maskable in [false, true] {
                let canvas = generate(size, variant, maskable).unwrap();
                assert_eq!(canvas.size(), size);
                assert_eq!(canvas.image().dimensions(), (size, size));
                assert!(
                    canvas.is_opaque(),
                    "{} {} maskable={} has transparent pixels",
                    variant, size, maskable
                );
                assert_eq!(canvas.to_rgb().dimensions(), (size, size));
            }
        }
    }
}

#[test]
fn test_zero_size_is_an_error() {
    for variant in StyleVariant::ALL {
        assert!(generate(0, variant, false).is_err());
        assert!(generate(0, variant, true).is_err());
    }
}

/// True when any part of pixel `(x, y)` lies in the outer `margin` band
fn touches_outer_band(x: u32, y: u32, size: u32, margin: f64) -> bool {
    let far = size as f64 - margin;
    let near_edge = |v: u32| (v as f64) < margin || (v + 1) as f64 > far;
    near_edge(x) || near_edge(y)
}

#[test]
fn test_maskable_outer_band_is_untouched_background() {
    for variant in StyleVariant::ALL {
        for size in [32, 48, 64, 180, 192, 512] {
            let canvas = generate(size, variant, true).unwrap();
            let bg = background(size, variant, true).unwrap();
            let margin = size as f64 * SAFE_ZONE_MARGIN;
            for y in 0..size {
                for x in 0..size {
                    if touches_outer_band(x, y, size, margin) {
                        assert_eq!(
                            canvas.pixel(x, y),
                            bg.pixel(x, y),
                            "{} at {}: pixel ({}, {}) drawn inside the outer band",
                            variant, size, x, y
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn test_outer_band_covers_straddling_pixels() {
    // At 32px the band edge is 3.2, so pixel 3 and pixel 28 straddle it
    assert!(touches_outer_band(3, 16, 32, 3.2));
    assert!(touches_outer_band(28, 16, 32, 3.2));
    assert!(touches_outer_band(16, 28, 32, 3.2));
    assert!(!touches_outer_band(4, 16, 32, 3.2));
    assert!(!touches_outer_band(27, 27, 32, 3.2));
}

#[test]
fn test_bezier_sampling_is_deterministic() {
    let p = [
        Point::new(12.5, 300.25),
        Point::new(99.0, 10.0),
        Point::new(250.75, 480.0),
        Point::new(400.0, 120.5),
    ];
    let first = sample_cubic(p[0], p[1], p[2], p[3], 12);
    let second = sample_cubic(p[0], p[1], p[2], p[3], 12);
    assert_eq!(first, second);

    let a = curved_path(Point::new(256.0, 266.24), 138.24, 12);
    let b = curved_path(Point::new(256.0, 266.24), 138.24, 12);
    assert_eq!(a, b);
}

#[test]
fn test_checker_grid_alternates() {
    let mut canvas = Canvas::new(64, BLACK);
    let a = GOLD;
    let b = image::Rgba([1, 2, 3, 255]);
    canvas.fill_checker(8, 8, a, b);
    for r in 0..8u32 {
        for c in 0..8u32 {
            let expected = if (r + c) % 2 == 0 { a } else { b };
            for y in r * 8..(r + 1) * 8 {
                for x in c * 8..(c + 1) * 8 {
                    assert_eq!(canvas.pixel(x, y), expected, "cell ({}, {})", r, c);
                }
            }
        }
    }
}

#[test]
fn test_checkered_icon_corners_follow_grid() {
    let canvas = generate(512, StyleVariant::Checkered, false).unwrap();
    // Top row of cells lies outside the disc
    for c in 0..8u32 {
        let expected = if c % 2 == 0 { GOLD } else { BLACK };
        assert_eq!(canvas.pixel(c * 64 + 4, 4), expected, "cell (0, {})", c);
    }
    assert_eq!(canvas.pixel(4, 7 * 64 + 4), BLACK);
}

#[test]
fn test_dilation_is_symmetric() {
    for r in 0..=8 {
        let offsets = dilation_offsets(r);
        for &(dx, dy) in &offsets {
            assert!(dx * dx + dy * dy <= r * r);
            assert!(offsets.contains(&(-dx, -dy)), "r={} missing ({}, {})", r, -dx, -dy);
        }
    }
}

#[test]
fn test_favicon_draws_the_knight() {
    for variant in StyleVariant::ALL {
        let layout = IconLayout::new(32, false).unwrap();
        let image = generate(32, variant, false).unwrap().to_rgb();
        assert_eq!(image.dimensions(), (32, 32));

        let accent = rgb(variant.style().fill);
        let top = (layout.knight_center.y - 0.2 * layout.knight_scale) as u32;
        let bottom = (layout.knight_center.y + 0.6 * layout.knight_scale) as u32;
        let found = (top..=bottom).any(|y| *image.get_pixel(16, y) == accent);
        assert!(found, "{}: knight missing from the center column", variant);
    }
}

#[test]
fn test_variants_look_different() {
    let renders: Vec<_> = StyleVariant::ALL
        .iter()
        .map(|&v| generate(64, v, false).unwrap().to_rgb())
        .collect();
    for i in 0..renders.len() {
        for j in i + 1..renders.len() {
            assert_ne!(renders[i], renders[j], "variants {} and {} render the same", i, j);
        }
    }
}
