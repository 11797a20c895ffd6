//! Swatch rendering tests.

mod common;

use common::*;
use cvd_palette::{presets, BlindnessType, Color, Palette};
use hueforge::error::RenderError;
use hueforge::rendering::{render_swatch_png, render_swatch_rows_png, SwatchLayout};
use pretty_assertions::assert_eq;

#[test]
fn test_default_layout_for_sixteen_colors() {
    let palette = presets::visible_spectrum(16);
    let png = render_swatch_png(palette.colors(), &SwatchLayout::default()).unwrap();
    let image = assert_rgb_png(&png);

    assert_eq!(image.width, 2 * 32 + 16 * 32 + 15 * 2);
    assert_eq!(image.height, 2 * 32 + 32);
    assert_eq!(image.pixel(0, 0), Color::WHITE.to_bytes());
    for (i, color) in palette.colors().iter().enumerate() {
        let x = 32 + i as u32 * 34 + 16;
        assert_eq!(image.pixel(x, 48), color.to_bytes(), "cell {i}");
    }
}

#[test]
fn test_palette_and_view_rows() {
    let palette = Palette::from_hex("duo", &["#ff0000", "#00ff00"]).unwrap();
    let seen = palette.simulate(BlindnessType::Deuteranopia);
    let layout = SwatchLayout {
        columns: 2,
        cell: 5,
        gap: 1,
        margin: 0,
    };
    let png = render_swatch_rows_png(&[palette.colors(), seen.colors()], &layout).unwrap();
    let image = assert_rgb_png(&png);

    assert_eq!((image.width, image.height), (11, 11));
    assert_eq!(image.pixel(0, 0), [255, 0, 0]);
    assert_eq!(image.pixel(6, 0), [0, 255, 0]);
    assert_eq!(image.pixel(0, 6), seen.colors()[0].to_bytes());
    assert_eq!(image.pixel(6, 6), seen.colors()[1].to_bytes());
}

#[test]
fn test_empty_input_is_rejected() {
    assert!(matches!(
        render_swatch_png(&[], &SwatchLayout::default()),
        Err(RenderError::EmptyPalette)
    ));
}
