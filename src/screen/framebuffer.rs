use super::glyphs::{glyph, GLYPH_HEIGHT, GLYPH_WIDTH};

pub const SCREEN_WIDTH: usize = 128;
pub const SCREEN_HEIGHT: usize = 64;
/// Number of 8-pixel-tall rows a screen is stored as.
pub const SCREEN_ROWS: usize = SCREEN_HEIGHT / 8;

/// Byte value of a row strip with every pixel off.
pub const BLANK: u8 = 0xFF;

pub type Row = [u8; SCREEN_WIDTH];

/// Bitmap for one 128×64 screen.
///
/// Pixels are stored in 8 rows of 128 bytes. Each byte is a vertical strip of
/// 8 pixels, least significant bit at the top, and a cleared bit means the
/// pixel is lit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    rows: [Row; SCREEN_ROWS],
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Framebuffer {
    pub fn new() -> Self {
        Self {
            rows: [[BLANK; SCREEN_WIDTH]; SCREEN_ROWS],
        }
    }

    pub fn rows(&self) -> &[Row; SCREEN_ROWS] {
        &self.rows
    }

    pub fn clear(&mut self) {
        for row in self.rows.iter_mut() {
            row.fill(BLANK);
        }
    }

    /// Light or clear one pixel. Coordinates off the screen are ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, on: bool) {
        self.fill_rect(i64::from(x), i64::from(y), 1, 1, on);
    }

    /// Whether a pixel is lit. Off-screen pixels read as unlit.
    #[allow(dead_code)]
    pub fn pixel(&self, x: i32, y: i32) -> bool {
        let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) else {
            return false;
        };
        if x >= SCREEN_WIDTH || y >= SCREEN_HEIGHT {
            return false;
        }
        self.rows[y / 8][x] & (1 << (y % 8)) == 0
    }

    /// Write text starting at pixel (`x`, `y`).
    ///
    /// Each glyph pixel becomes a `scale`×`scale` block. Text wraps to the next
    /// character row after `max_width_chars` characters, anywhere in a word,
    /// and anything beyond `max_height_chars` rows is dropped. Both the lit and
    /// unlit pixels of each cell are written; `invert` swaps them.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_text(
        &mut self,
        text: &str,
        scale: u32,
        x: i32,
        y: i32,
        max_width_chars: usize,
        max_height_chars: usize,
        invert: bool,
    ) {
        if scale == 0 || max_width_chars == 0 || max_height_chars == 0 {
            return;
        }
        let scale = i64::from(scale);
        let cell_width = GLYPH_WIDTH as i64 * scale;
        let cell_height = GLYPH_HEIGHT as i64 * scale;

        let mut column = 0;
        let mut line = 0;
        for ch in text.chars() {
            if column >= max_width_chars {
                column = 0;
                line += 1;
            }
            if line >= max_height_chars {
                break;
            }

            let left = i64::from(x).saturating_add((column as i64).saturating_mul(cell_width));
            let top = i64::from(y).saturating_add((line as i64).saturating_mul(cell_height));
            column += 1;
            if !Self::overlaps(left, top, cell_width, cell_height) {
                continue;
            }

            let glyph = glyph(ch);
            for gx in 0..GLYPH_WIDTH {
                for gy in 0..GLYPH_HEIGHT {
                    let on = glyph.is_lit(gx, gy) != invert;
                    let px = left + gx as i64 * scale;
                    let py = top + gy as i64 * scale;
                    self.fill_rect(px, py, scale, scale, on);
                }
            }
        }
    }

    /// Draw a rectangle, either solid or as its four edges.
    pub fn draw_box(&mut self, x: i32, y: i32, width: i32, height: i32, filled: bool) {
        let (x, y) = (i64::from(x), i64::from(y));
        let (width, height) = (i64::from(width), i64::from(height));
        if width <= 0 || height <= 0 {
            return;
        }
        if filled {
            self.fill_rect(x, y, width, height, true);
            return;
        }
        self.fill_rect(x, y, width, 1, true);
        self.fill_rect(x, y + height - 1, width, 1, true);
        self.fill_rect(x, y, 1, height, true);
        self.fill_rect(x + width - 1, y, 1, height, true);
    }

    /// Outlined gauge filling upwards from the bottom edge.
    pub fn draw_vertical_gauge(&mut self, x: i32, y: i32, width: i32, height: i32, value: f64) {
        self.draw_box(x, y, width, height, false);
        let (x, y) = (i64::from(x), i64::from(y));
        let inner_width = i64::from(width) - 2;
        let inner_height = i64::from(height) - 2;
        let fill = fill_size(inner_height, value);
        self.fill_rect(x + 1, y + 1 + inner_height - fill, inner_width, fill, true);
    }

    /// Outlined gauge filling rightwards from the left edge.
    pub fn draw_horizontal_gauge(&mut self, x: i32, y: i32, width: i32, height: i32, value: f64) {
        self.draw_box(x, y, width, height, false);
        let (x, y) = (i64::from(x), i64::from(y));
        let inner_width = i64::from(width) - 2;
        let inner_height = i64::from(height) - 2;
        let fill = fill_size(inner_width, value);
        self.fill_rect(x + 1, y + 1, fill, inner_height, true);
    }

    /// Bipolar gauge around a centre line, for EQ style knobs.
    ///
    /// Values above 0.5 grow a bar upwards from the centre line, values below
    /// grow it downwards, and 0.5 draws no bar.
    pub fn draw_eq_gauge(&mut self, x: i32, y: i32, width: i32, height: i32, value: f64) {
        let (x, y) = (i64::from(x), i64::from(y));
        let (width, height) = (i64::from(width), i64::from(height));
        if width <= 0 || height <= 0 {
            return;
        }
        let value = clamp_unit(value);
        let centre = y + height / 2;

        self.fill_rect(x, centre, width, 1, true);

        // dotted edges on every other row, starting at `y`
        let mut first = y.max(0);
        if (first - y) % 2 != 0 {
            first += 1;
        }
        let end = (y + height).min(SCREEN_HEIGHT as i64);
        for py in (first..end).step_by(2) {
            self.fill_rect(x, py, 1, 1, true);
            self.fill_rect(x + width - 1, py, 1, 1, true);
        }

        let above = centre - y;
        let below = y + height - 1 - centre;
        let amount = (value - 0.5).abs() * 2.0;
        let bar_x = x + 2;
        let bar_width = width - 4;
        if value > 0.5 {
            let bar = (amount * above as f64).floor() as i64;
            self.fill_rect(bar_x, centre - bar, bar_width, bar, true);
        } else if value < 0.5 {
            let bar = (amount * below as f64).floor() as i64;
            self.fill_rect(bar_x, centre + 1, bar_width, bar, true);
        }
    }

    /// Whether a rectangle touches the screen at all.
    fn overlaps(x: i64, y: i64, width: i64, height: i64) -> bool {
        width > 0
            && height > 0
            && x < SCREEN_WIDTH as i64
            && y < SCREEN_HEIGHT as i64
            && x.saturating_add(width) > 0
            && y.saturating_add(height) > 0
    }

    /// Set or clear every on-screen pixel of a rectangle.
    fn fill_rect(&mut self, x: i64, y: i64, width: i64, height: i64, on: bool) {
        if !Self::overlaps(x, y, width, height) {
            return;
        }
        let left = x.max(0) as usize;
        let top = y.max(0) as usize;
        let right = x.saturating_add(width).min(SCREEN_WIDTH as i64) as usize;
        let bottom = y.saturating_add(height).min(SCREEN_HEIGHT as i64) as usize;

        for py in top..bottom {
            let mask = 1u8 << (py % 8);
            for strip in &mut self.rows[py / 8][left..right] {
                if on {
                    *strip &= !mask;
                } else {
                    *strip |= mask;
                }
            }
        }
    }
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Filled length of a gauge with `inner` pixels of travel.
fn fill_size(inner: i64, value: f64) -> i64 {
    if inner <= 0 {
        return 0;
    }
    (inner as f64 * clamp_unit(value)).floor() as i64
}
