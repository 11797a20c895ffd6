use crate::error::RenderError;
use crate::models::RenderConfig;
use cvd_palette::Color;
use std::io::Cursor;

/// Largest width or height a swatch image may have
pub const MAX_IMAGE_SIDE: u32 = 16384;

const BACKGROUND: Color = Color::WHITE;

/// Grid geometry for palette swatches, in pixels.
///
/// Cells are laid out row-major, `columns` per row, separated by `gap` and
/// surrounded by `margin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwatchLayout {
    pub columns: u32,
    pub cell: u32,
    pub gap: u32,
    pub margin: u32,
}

impl Default for SwatchLayout {
    fn default() -> Self {
        RenderConfig::default().into()
    }
}

impl From<RenderConfig> for SwatchLayout {
    fn from(config: RenderConfig) -> Self {
        Self {
            columns: config.columns,
            cell: config.cell,
            gap: config.gap,
            margin: config.margin,
        }
    }
}

impl SwatchLayout {
    /// Image size for a grid of `columns` x `rows` cells
    fn size(&self, columns: u32, rows: u32) -> (u64, u64) {
        let span = |n: u32| {
            2 * self.margin as u64 + n as u64 * self.cell as u64
                + n.saturating_sub(1) as u64 * self.gap as u64
        };
        (span(columns), span(rows))
    }

    /// Top-left pixel of the cell at grid position (`column`, `row`)
    fn origin(&self, column: u32, row: u32) -> (u64, u64) {
        let step = self.cell as u64 + self.gap as u64;
        let at = |n: u32| self.margin as u64 + n as u64 * step;
        (at(column), at(row))
    }

    /// Grid rows needed for `count` cells
    fn rows_for(&self, count: usize) -> u32 {
        (count as u32).div_ceil(self.columns)
    }
}

/// Render one palette as an RGB8 PNG swatch on a white background.
pub fn render_swatch_png(colors: &[Color], layout: &SwatchLayout) -> Result<Vec<u8>, RenderError> {
    render_swatch_rows_png(&[colors], layout)
}

/// Render several palettes into one PNG, each starting on a new grid row.
///
/// Used to show a palette above its simulated view.
pub fn render_swatch_rows_png(
    palettes: &[&[Color]],
    layout: &SwatchLayout,
) -> Result<Vec<u8>, RenderError> {
    if layout.columns == 0 || layout.cell == 0 {
        return Err(RenderError::InvalidLayout(format!(
            "columns and cell must be at least 1, got {} and {}",
            layout.columns, layout.cell
        )));
    }
    let widest = palettes.iter().map(|p| p.len()).max().unwrap_or(0);
    if widest == 0 {
        return Err(RenderError::EmptyPalette);
    }

    let grid_columns = layout.columns.min(widest as u32);
    let grid_rows: u32 = palettes.iter().map(|p| layout.rows_for(p.len()).max(1)).sum();
    let (width, height) = layout.size(grid_columns, grid_rows);
    if width > MAX_IMAGE_SIDE as u64 || height > MAX_IMAGE_SIDE as u64 {
        return Err(RenderError::ImageTooLarge {
            width: width.min(u32::MAX as u64) as u32,
            height: height.min(u32::MAX as u64) as u32,
            max: MAX_IMAGE_SIDE,
        });
    }
    let (width, height) = (width as u32, height as u32);

    let mut pixels = BACKGROUND
        .to_bytes()
        .repeat(width as usize * height as usize);

    let mut first_row = 0;
    for palette in palettes {
        for (i, color) in palette.iter().enumerate() {
            let column = i as u32 % layout.columns;
            let row = first_row + i as u32 / layout.columns;
            // Every placed cell lies inside the size checked above
            let (x0, y0) = layout.origin(column, row);
            fill_cell(&mut pixels, width, x0 as u32, y0 as u32, layout.cell, *color);
        }
        first_row += layout.rows_for(palette.len()).max(1);
    }

    tracing::debug!(
        width,
        height,
        palettes = palettes.len(),
        "Rendered swatch"
    );
    encode_png(width, height, &pixels)
}

fn fill_cell(pixels: &mut [u8], width: u32, x0: u32, y0: u32, cell: u32, color: Color) {
    let rgb = color.to_bytes();
    for y in y0..y0 + cell {
        let row_start = (y as usize * width as usize + x0 as usize) * 3;
        for px in pixels[row_start..row_start + cell as usize * 3].chunks_exact_mut(3) {
            px.copy_from_slice(&rgb);
        }
    }
}

fn encode_png(width: u32, height: u32, rgb: &[u8]) -> Result<Vec<u8>, RenderError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);
        let mut writer = encoder
            .write_header()
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(rgb)
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}
