use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Display gamma applied to normalized channels before linearization.
const DISPLAY_GAMMA: f64 = 2.2;

/// IEC 61966-2-1 decode: sRGB to linear
fn srgb_decode(v: f64) -> f64 {
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("standard_lut.rs");
    let mut file = File::create(&dest_path).unwrap();

    // One entry per 8-bit channel value: gamma 2.2, then sRGB linearization
    writeln!(file, "/// Lookup table for 8-bit standard channel to linear conversion").unwrap();
    writeln!(file, "/// Index: channel value 0..=255, Value: linear intensity").unwrap();
    writeln!(file, "pub static STANDARD_TO_LINEAR: [f64; 256] = [").unwrap();
    for i in 0..256 {
        let normalized = i as f64 / 255.0;
        let linear = srgb_decode(normalized.powf(DISPLAY_GAMMA));
        if i > 0 && i % 4 == 0 {
            writeln!(file).unwrap();
        }
        write!(file, "    {:?},", linear).unwrap();
    }
    writeln!(file, "\n];").unwrap();

    println!("cargo::rerun-if-changed=build.rs");
}
