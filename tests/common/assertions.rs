//! Assertion helpers for tests.

use pretty_assertions::assert_eq;
use std::io::Cursor;

/// Decoded RGB8 image
pub struct DecodedPng {
    pub width: u32,
    pub height: u32,
    pub rgb: Vec<u8>,
}

impl DecodedPng {
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let i = (y as usize * self.width as usize + x as usize) * 3;
        [self.rgb[i], self.rgb[i + 1], self.rgb[i + 2]]
    }
}

/// Assert bytes are a valid RGB8 PNG and decode them
pub fn assert_rgb_png(bytes: &[u8]) -> DecodedPng {
    assert!(
        bytes.starts_with(&[0x89, b'P', b'N', b'G']),
        "Expected PNG image, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );

    let decoder = png::Decoder::new(Cursor::new(bytes));
    let mut reader = decoder.read_info().expect("PNG header");
    let mut rgb = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut rgb).expect("PNG frame");
    rgb.truncate(info.buffer_size());

    assert_eq!(info.color_type, png::ColorType::Rgb, "Expected RGB color type");
    assert_eq!(info.bit_depth, png::BitDepth::Eight, "Expected 8-bit depth");

    DecodedPng {
        width: info.width,
        height: info.height,
        rgb,
    }
}

/// Assert a hex string is lowercase `#rrggbb`
pub fn assert_hex_color(s: &str) {
    assert_eq!(s.len(), 7, "Expected #rrggbb, got {s:?}");
    assert!(s.starts_with('#'), "Expected leading '#', got {s:?}");
    assert!(
        s[1..].chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()),
        "Expected lowercase hex digits, got {s:?}"
    );
}
