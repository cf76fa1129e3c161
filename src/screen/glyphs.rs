//! Bitmap font for the screens.
//!
//! Each glyph is a 10×16 cell stored as two arrays of column bytes: `top`
//! covers pixel rows 0-7 and `bottom` rows 8-15. Bit `n` of a column byte is
//! pixel row `n` of that half, and a cleared bit means the pixel is lit, the
//! same polarity the screens use.

pub const GLYPH_WIDTH: usize = 10;
pub const GLYPH_HEIGHT: usize = 16;

/// Character drawn in place of anything missing from the table.
pub const FALLBACK_CHAR: char = '~';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub top: [u8; GLYPH_WIDTH],
    pub bottom: [u8; GLYPH_WIDTH],
}

impl Glyph {
    /// Whether the pixel at (`col`, `row`) of the cell is lit.
    pub fn is_lit(&self, col: usize, row: usize) -> bool {
        if col >= GLYPH_WIDTH || row >= GLYPH_HEIGHT {
            return false;
        }
        let strip = if row < 8 { self.top[col] } else { self.bottom[col] };
        strip & (1 << (row % 8)) == 0
    }
}

/// Look up the glyph for `ch`, substituting [`FALLBACK_CHAR`] for characters
/// outside printable ASCII.
pub fn glyph(ch: char) -> &'static Glyph {
    let code = ch as u32;
    let index = if (0x20..=0x7E).contains(&code) {
        (code - 0x20) as usize
    } else {
        FALLBACK_CHAR as usize - 0x20
    };
    &GLYPHS[index]
}

/// Printable ASCII, space through `~`, in code point order.
static GLYPHS: [Glyph; 95] = [
    Glyph {
        ch: ' ',
        top: [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF],
        bottom: [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF],
    },
    Glyph {
        ch: '!',
        top: [0xFF, 0xFF, 0xFF, 0xC7, 0x03, 0x03, 0xC7, 0xFF, 0xFF, 0xFF],
        bottom: [0xFF, 0xFF, 0xFF, 0xFF, 0xF2, 0xF2, 0xFF, 0xFF, 0xFF, 0xFF],
    },
    Glyph {
        ch: '"',
        top: [0xFF, 0xFF, 0xF1, 0xE1, 0xFF, 0xFF, 0xE1, 0xF1, 0xFF, 0xFF],
        bottom: [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF],
    },
    Glyph {
        ch: '#',
        top: [0xFF, 0xDF, 0x07, 0x07, 0xDF, 0x07, 0x07, 0xDF, 0xFF, 0xFF],
        bottom: [0xFF, 0xFD, 0xF0, 0xF0, 0xFD, 0xF0, 0xF0, 0xFD, 0xFF, 0xFF],
    },
    Glyph {
        ch: '$',
        top: [0xFF, 0xC7, 0x83, 0xBB, 0xB8, 0xB8, 0x33, 0x67, 0xFF, 0xFF],
        bottom: [0xFF, 0xF9, 0xF3, 0xF7, 0xC7, 0xC7, 0xF0, 0xF8, 0xFF, 0xFF],
    },
    Glyph {
        ch: '%',
        top: [0xFF, 0xCF, 0xCF, 0xFF, 0x7F, 0x3F, 0x9F, 0xCF, 0xFF, 0xFF],
        bottom: [0xFF, 0xF3, 0xF9, 0xFC, 0xFE, 0xFF, 0xF3, 0xF3, 0xFF, 0xFF],
    },
    Glyph {
        ch: '&',
        top: [0xFF, 0x7F, 0x27, 0x83, 0x1B, 0x43, 0x27, 0xBF, 0xFF, 0xFF],
        bottom: [0xFF, 0xF8, 0xF0, 0xF7, 0xF7, 0xF8, 0xF0, 0xF7, 0xFF, 0xFF],
    },
    Glyph {
        ch: '\'',
        top: [0xFF, 0xFF, 0xEF, 0xE1, 0xF1, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF],
        bottom: [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF],
    },
    Glyph {
        ch: '(',
        top: [0xFF, 0xFF, 0xFF, 0x0F, 0x07, 0xF3, 0xFB, 0xFF, 0xFF, 0xFF],
        bottom: [0xFF, 0xFF, 0xFF, 0xFC, 0xF8, 0xF3, 0xF7, 0xFF, 0xFF, 0xFF],
    },
    Glyph {
        ch: ')',
        top: [0xFF, 0xFF, 0xFF, 0xFB, 0xF3, 0x07, 0x0F, 0xFF, 0xFF, 0xFF],
        bottom: [0xFF, 0xFF, 0xFF, 0xF7, 0xF3, 0xF8, 0xFC, 0xFF, 0xFF, 0xFF],
    },
    Glyph {
        ch: '*',
        top: [0xFF, 0x7F, 0x5F, 0x1F, 0x3F, 0x3F, 0x1F, 0x5F, 0x7F, 0xFF],
        bottom: [0xFF, 0xFF, 0xFD, 0xFC, 0xFE, 0xFE, 0xFC, 0xFD, 0xFF, 0xFF],
    },
    Glyph {
        ch: '+',
        top: [0xFF, 0xFF, 0x7F, 0x7F, 0x1F, 0x1F, 0x7F, 0x7F, 0xFF, 0xFF],
        bottom: [0xFF, 0xFF, 0xFF, 0xFF, 0xFC, 0xFC, 0xFF, 0xFF, 0xFF, 0xFF],
    },
    Glyph {
        ch: ',',
        top: [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF],
        bottom: [0xFF, 0xFF, 0xFF, 0xEF, 0xE1, 0xF1, 0xFF, 0xFF, 0xFF, 0xFF],
    },
    Glyph {
        ch: '-',
        top: [0xFF, 0x7F, 0x7F, 0x7F, 0x7F, 0x7F, 0x7F, 0x7F, 0xFF, 0xFF],
        bottom: [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF],
    },
    Glyph {
        ch: '.',
        top: [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF],
        bottom: [0xFF, 0xFF, 0xFF, 0xFF, 0xF3, 0xF3, 0xFF, 0xFF, 0xFF, 0xFF],
    },
    Glyph {
        ch: '/',
        top: [0xFF, 0xFF, 0xFF, 0xFF, 0x7F, 0x3F, 0x9F, 0xCF, 0xFF, 0xFF],
        bottom: [0xFF, 0xF3, 0xF9, 0xFC, 0xFE, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF],
    },
    Glyph {
        ch: '0',
        top: [0xFF, 0x0F, 0x07, 0xF3, 0x3B, 0xF3, 0x07, 0x0F, 0xFF, 0xFF],
        bottom: [0xFF, 0xFC, 0xF8, 0xF3, 0xF7, 0xF3, 0xF8, 0xFC, 0xFF, 0xFF],
    },
    Glyph {
        ch: '1',
        top: [0xFF, 0xFF, 0xEF, 0xE7, 0x03, 0x03, 0xFF, 0xFF, 0xFF, 0xFF],
        bottom: [0xFF, 0xFF, 0xF7, 0xF7, 0xF0, 0xF0, 0xF7, 0xF7, 0xFF, 0xFF],
    },
    Glyph {
        ch: '2',
        top: [0xFF, 0xF7, 0xF3, 0x7B, 0x3B, 0x9B, 0xC3, 0xE7, 0xFF, 0xFF],
        bottom: [0xFF, 0xF1, 0xF0, 0xF6, 0xF7, 0xF7, 0xF3, 0xF3, 0xFF, 0xFF],
    },
    Glyph {
        ch: '3',
        top: [0xFF, 0xF7, 0xF3, 0xBB, 0xBB, 0xBB, 0x03, 0x47, 0xFF, 0xFF],
        bottom: [0xFF, 0xFB, 0xF3, 0xF7, 0xF7, 0xF7, 0xF0, 0xF8, 0xFF, 0xFF],
    },
    Glyph {
        ch: '4',
        top: [0xFF, 0x3F, 0x1F, 0x4F, 0x67, 0x03, 0x03, 0x7F, 0xFF, 0xFF],
        bottom: [0xFF, 0xFF, 0xFF, 0xFF, 0xF7, 0xF0, 0xF0, 0xF7, 0xFF, 0xFF],
    },
    Glyph {
        ch: '5',
        top: [0xFF, 0x83, 0x83, 0xBB, 0xBB, 0xBB, 0x3B, 0x7B, 0xFF, 0xFF],
        bottom: [0xFF, 0xFB, 0xF3, 0xF7, 0xF7, 0xF7, 0xF0, 0xF8, 0xFF, 0xFF],
    },
    Glyph {
        ch: '6',
        top: [0xFF, 0x0F, 0x07, 0xB3, 0xBB, 0xBB, 0x3F, 0x7F, 0xFF, 0xFF],
        bottom: [0xFF, 0xF8, 0xF0, 0xF7, 0xF7, 0xF7, 0xF0, 0xF8, 0xFF, 0xFF],
    },
    Glyph {
        ch: '7',
        top: [0xFF, 0xF3, 0xF3, 0xFB, 0x7B, 0x3B, 0x83, 0xC3, 0xFF, 0xFF],
        bottom: [0xFF, 0xFF, 0xFF, 0xF0, 0xF0, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF],
    },
    Glyph {
        ch: '8',
        top: [0xFF, 0x47, 0x03, 0xBB, 0xBB, 0xBB, 0x03, 0x47, 0xFF, 0xFF],
        bottom: [0xFF, 0xF8, 0xF0, 0xF7, 0xF7, 0xF7, 0xF0, 0xF8, 0xFF, 0xFF],
    },
    Glyph {
        ch: '9',
        top: [0xFF, 0xC7, 0x83, 0xBB, 0xBB, 0xBB, 0x03, 0x07, 0xFF, 0xFF],
        bottom: [0xFF, 0xFF, 0xF7, 0xF7, 0xF7, 0xF3, 0xF8, 0xFC, 0xFF, 0xFF],
    },
    Glyph {
        ch: ':',
        top: [0xFF, 0xFF, 0xFF, 0xFF, 0xCF, 0xCF, 0xFF, 0xFF, 0xFF, 0xFF],
        bottom: [0xFF, 0xFF, 0xFF, 0xFF, 0xF9, 0xF9, 0xFF, 0xFF, 0xFF, 0xFF],
    },
    Glyph {
        ch: ';',
        top: [0xFF, 0xFF, 0xFF, 0xFF, 0xCF, 0xCF, 0xFF, 0xFF, 0xFF, 0xFF],
        bottom: [0xFF, 0xFF, 0xFF, 0xF7, 0xF1, 0xF9, 0xFF, 0xFF, 0xFF, 0xFF],
    },
    Glyph {
        ch: '<',
        top: [0xFF, 0xFF, 0x7F, 0x3F, 0x9F, 0xCF, 0xE7, 0xF7, 0xFF, 0xFF],
        bottom: [0xFF, 0xFF, 0xFF, 0xFE, 0xFC, 0xF9, 0xF3, 0xF7, 0xFF, 0xFF],
    },
    Glyph {
        ch: '=',
        top: [0xFF, 0xFF, 0xDF, 0xDF, 0xDF, 0xDF, 0xDF, 0xDF, 0xFF, 0xFF],
        bottom: [0xFF, 0xFF, 0xFE, 0xFE, 0xFE, 0xFE, 0xFE, 0xFE, 0xFF, 0xFF],
    },
    Glyph {
        ch: '>',
        top: [0xFF, 0xFF, 0xF7, 0xE7, 0xCF, 0x9F, 0x3F, 0x7F, 0xFF, 0xFF],
        bottom: [0xFF, 0xFF, 0xF7, 0xF3, 0xF9, 0xFC, 0xFE, 0xFF, 0xFF, 0xFF],
    },
    Glyph {
        ch: '?',
        top: [0xFF, 0xE7, 0xE3, 0xFB, 0x3B, 0x1B, 0xC3, 0xE7, 0xFF, 0xFF],
        bottom: [0xFF, 0xFF, 0xFF, 0xFF, 0xF2, 0xF2, 0xFF, 0xFF, 0xFF, 0xFF],
    },
    Glyph {
        ch: '@',
        top: [0xFF, 0x0F, 0x07, 0xF7, 0x37, 0x37, 0x07, 0x0F, 0xFF, 0xFF],
        bottom: [0xFF, 0xF8, 0xF0, 0xF7, 0xF4, 0xF4, 0xF4, 0xFE, 0xFF, 0xFF],
    },
    Glyph {
        ch: 'A',
        top: [0xFF, 0x1F, 0x0F, 0x67, 0x73, 0x67, 0x0F, 0x1F, 0xFF, 0xFF],
        bottom: [0xFF, 0xF0, 0xF0, 0xFF, 0xFF, 0xFF, 0xF0, 0xF0, 0xFF, 0xFF],
    },
    Glyph {
        ch: 'B',
        top: [0xFF, 0xFB, 0x03, 0x03, 0xBB, 0xBB, 0x03, 0x47, 0xFF, 0xFF],
        bottom: [0xFF, 0xF7, 0xF0, 0xF0, 0xF7, 0xF7, 0xF0, 0xF8, 0xFF, 0xFF],
    },
    Glyph {
        ch: 'C',
        top: [0xFF, 0x0F, 0x07, 0xF3, 0xFB, 0xFB, 0xF3, 0xE7, 0xFF, 0xFF],
        bottom: [0xFF, 0xFC, 0xF8, 0xF3, 0xF7, 0xF7, 0xF3, 0xF9, 0xFF, 0xFF],
    },
    Glyph {
        ch: 'D',
        top: [0xFF, 0xFB, 0x03, 0x03, 0xFB, 0xF3, 0x07, 0x0F, 0xFF, 0xFF],
        bottom: [0xFF, 0xF7, 0xF0, 0xF0, 0xF7, 0xF3, 0xF8, 0xFC, 0xFF, 0xFF],
    },
    Glyph {
        ch: 'E',
        top: [0xFF, 0xFB, 0x03, 0x03, 0xBB, 0x1B, 0xF3, 0xE3, 0xFF, 0xFF],
        bottom: [0xFF, 0xF7, 0xF0, 0xF0, 0xF7, 0xF7, 0xF3, 0xF1, 0xFF, 0xFF],
    },
    Glyph {
        ch: 'F',
        top: [0xFF, 0xFB, 0x03, 0x03, 0xBB, 0x1B, 0xF3, 0xE3, 0xFF, 0xFF],
        bottom: [0xFF, 0xF7, 0xF0, 0xF0, 0xF7, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF],
    },
    Glyph {
        ch: 'G',
        top: [0xFF, 0x0F, 0x07, 0xF3, 0x7B, 0x7B, 0x73, 0x67, 0xFF, 0xFF],
        bottom: [0xFF, 0xFC, 0xF8, 0xF3, 0xF7, 0xF7, 0xF8, 0xF0, 0xFF, 0xFF],
    },
    Glyph {
        ch: 'H',
        top: [0xFF, 0x03, 0x03, 0xBF, 0xBF, 0xBF, 0x03, 0x03, 0xFF, 0xFF],
        bottom: [0xFF, 0xF0, 0xF0, 0xFF, 0xFF, 0xFF, 0xF0, 0xF0, 0xFF, 0xFF],
    },
    Glyph {
        ch: 'I',
        top: [0xFF, 0xFF, 0xFF, 0xFB, 0x03, 0x03, 0xFB, 0xFF, 0xFF, 0xFF],
        bottom: [0xFF, 0xFF, 0xFF, 0xF7, 0xF0, 0xF0, 0xF7, 0xFF, 0xFF, 0xFF],
    },
    Glyph {
        ch: 'J',
        top: [0xFF, 0xFF, 0xFF, 0xFF, 0xFB, 0x03, 0x03, 0xFB, 0xFF, 0xFF],
        bottom: [0xFF, 0xF8, 0xF0, 0xF7, 0xF7, 0xF0, 0xF8, 0xFF, 0xFF, 0xFF],
    },
    Glyph {
        ch: 'K',
        top: [0xFF, 0xFB, 0x03, 0x03, 0x3F, 0x1F, 0xC3, 0xE3, 0xFF, 0xFF],
        bottom: [0xFF, 0xF7, 0xF0, 0xF0, 0xFF, 0xFE, 0xF0, 0xF1, 0xFF, 0xFF],
    },
    Glyph {
        ch: 'L',
        top: [0xFF, 0xFB, 0x03, 0x03, 0xFB, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF],
        bottom: [0xFF, 0xF7, 0xF0, 0xF0, 0xF7, 0xF7, 0xF3, 0xF1, 0xFF, 0xFF],
    },
    Glyph {
        ch: 'M',
        top: [0xFF, 0x03, 0x03, 0xC7, 0x8F, 0xC7, 0x03, 0x03, 0xFF, 0xFF],
        bottom: [0xFF, 0xF0, 0xF0, 0xFF, 0xFF, 0xFF, 0xF0, 0xF0, 0xFF, 0xFF],
    },
    Glyph {
        ch: 'N',
        top: [0xFF, 0x03, 0x03, 0xC7, 0x8F, 0x1F, 0x03, 0x03, 0xFF, 0xFF],
        bottom: [0xFF, 0xF0, 0xF0, 0xFF, 0xFF, 0xFF, 0xF0, 0xF0, 0xFF, 0xFF],
    },
    Glyph {
        ch: 'O',
        top: [0xFF, 0x07, 0x03, 0xFB, 0xFB, 0xFB, 0x03, 0x07, 0xFF, 0xFF],
        bottom: [0xFF, 0xF8, 0xF0, 0xF7, 0xF7, 0xF7, 0xF0, 0xF8, 0xFF, 0xFF],
    },
    Glyph {
        ch: 'P',
        top: [0xFF, 0xFB, 0x03, 0x03, 0xBB, 0xBB, 0x83, 0xC7, 0xFF, 0xFF],
        bottom: [0xFF, 0xF7, 0xF0, 0xF0, 0xF7, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF],
    },
    Glyph {
        ch: 'Q',
        top: [0xFF, 0x07, 0x03, 0xFB, 0xFB, 0xFB, 0x03, 0x07, 0xFF, 0xFF],
        bottom: [0xFF, 0xF8, 0xF0, 0xF7, 0xF1, 0xC3, 0xC0, 0xD8, 0xFF, 0xFF],
    },
    Glyph {
        ch: 'R',
        top: [0xFF, 0xFB, 0x03, 0x03, 0xBB, 0x3B, 0x03, 0xC7, 0xFF, 0xFF],
        bottom: [0xFF, 0xF7, 0xF0, 0xF0, 0xFF, 0xFF, 0xF0, 0xF0, 0xFF, 0xFF],
    },
    Glyph {
        ch: 'S',
        top: [0xFF, 0xE7, 0xC3, 0x9B, 0xBB, 0x3B, 0x63, 0xE7, 0xFF, 0xFF],
        bottom: [0xFF, 0xF9, 0xF1, 0xF7, 0xF7, 0xF7, 0xF0, 0xF8, 0xFF, 0xFF],
    },
    Glyph {
        ch: 'T',
        top: [0xFF, 0xFF, 0xE3, 0xF3, 0x03, 0x03, 0xF3, 0xE3, 0xFF, 0xFF],
        bottom: [0xFF, 0xFF, 0xFF, 0xF7, 0xF0, 0xF0, 0xF7, 0xFF, 0xFF, 0xFF],
    },
    Glyph {
        ch: 'U',
        top: [0xFF, 0x03, 0x03, 0xFF, 0xFF, 0xFF, 0x03, 0x03, 0xFF, 0xFF],
        bottom: [0xFF, 0xF8, 0xF0, 0xF7, 0xF7, 0xF7, 0xF0, 0xF8, 0xFF, 0xFF],
    },
    Glyph {
        ch: 'V',
        top: [0xFF, 0x03, 0x03, 0xFF, 0xFF, 0xFF, 0x03, 0x03, 0xFF, 0xFF],
        bottom: [0xFF, 0xFE, 0xFC, 0xF9, 0xF3, 0xF9, 0xFC, 0xFE, 0xFF, 0xFF],
    },
    Glyph {
        ch: 'W',
        top: [0xFF, 0x03, 0x03, 0xFF, 0x3F, 0xFF, 0x03, 0x03, 0xFF, 0xFF],
        bottom: [0xFF, 0xF8, 0xF0, 0xF1, 0xFC, 0xF1, 0xF0, 0xF8, 0xFF, 0xFF],
    },
    Glyph {
        ch: 'X',
        top: [0xFF, 0xF3, 0xC3, 0x0F, 0x1F, 0x0F, 0xC3, 0xF3, 0xFF, 0xFF],
        bottom: [0xFF, 0xF3, 0xF0, 0xFC, 0xFE, 0xFC, 0xF0, 0xF3, 0xFF, 0xFF],
    },
    Glyph {
        ch: 'Y',
        top: [0xFF, 0xFF, 0xC3, 0x83, 0x3F, 0x3F, 0x83, 0xC3, 0xFF, 0xFF],
        bottom: [0xFF, 0xFF, 0xFF, 0xF7, 0xF0, 0xF0, 0xF7, 0xFF, 0xFF, 0xFF],
    },
    Glyph {
        ch: 'Z',
        top: [0xFF, 0xE3, 0xF3, 0x7B, 0x3B, 0x9B, 0xC3, 0xE3, 0xFF, 0xFF],
        bottom: [0xFF, 0xF1, 0xF0, 0xF6, 0xF7, 0xF7, 0xF3, 0xF1, 0xFF, 0xFF],
    },
    Glyph {
        ch: '[',
        top: [0xFF, 0xFF, 0xFF, 0x03, 0x03, 0xFB, 0xFB, 0xFF, 0xFF, 0xFF],
        bottom: [0xFF, 0xFF, 0xFF, 0xF0, 0xF0, 0xF7, 0xF7, 0xFF, 0xFF, 0xFF],
    },
    Glyph {
        ch: '\\',
        top: [0xFF, 0xE7, 0xCF, 0x9F, 0x3F, 0x7F, 0xFF, 0xFF, 0xFF, 0xFF],
        bottom: [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE, 0xFC, 0xF9, 0xFF, 0xFF],
    },
    Glyph {
        ch: ']',
        top: [0xFF, 0xFF, 0xFF, 0xFB, 0xFB, 0x03, 0x03, 0xFF, 0xFF, 0xFF],
        bottom: [0xFF, 0xFF, 0xFF, 0xF7, 0xF7, 0xF0, 0xF0, 0xFF, 0xFF, 0xFF],
    },
    Glyph {
        ch: '^',
        top: [0xFF, 0xF7, 0xF3, 0xF9, 0xFC, 0xF9, 0xF3, 0xF7, 0xFF, 0xFF],
        bottom: [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF],
    },
    Glyph {
        ch: '_',
        top: [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF],
        bottom: [0xFF, 0xDF, 0xDF, 0xDF, 0xDF, 0xDF, 0xDF, 0xDF, 0xDF, 0xFF],
    },
    Glyph {
        ch: '`',
        top: [0xFF, 0xFF, 0xFF, 0xFD, 0xF9, 0xF3, 0xF7, 0xFF, 0xFF, 0xFF],
        bottom: [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF],
    },
    Glyph {
        ch: 'a',
        top: [0xFF, 0xFF, 0x5F, 0x5F, 0x5F, 0x1F, 0x3F, 0xFF, 0xFF, 0xFF],
        bottom: [0xFF, 0xF8, 0xF0, 0xF7, 0xF7, 0xF8, 0xF0, 0xF7, 0xFF, 0xFF],
    },
    Glyph {
        ch: 'b',
        top: [0xFF, 0xFB, 0x03, 0x03, 0xDF, 0x9F, 0x3F, 0x7F, 0xFF, 0xFF],
        bottom: [0xFF, 0xFF, 0xF0, 0xF0, 0xF7, 0xF7, 0xF0, 0xF8, 0xFF, 0xFF],
    },
    Glyph {
        ch: 'c',
        top: [0xFF, 0x3F, 0x1F, 0xDF, 0xDF, 0xDF, 0x9F, 0xBF, 0xFF, 0xFF],
        bottom: [0xFF, 0xF8, 0xF0, 0xF7, 0xF7, 0xF7, 0xF3, 0xFB, 0xFF, 0xFF],
    },
    Glyph {
        ch: 'd',
        top: [0xFF, 0x7F, 0x3F, 0x9F, 0xDB, 0x03, 0x03, 0xFF, 0xFF, 0xFF],
        bottom: [0xFF, 0xF8, 0xF0, 0xF7, 0xF7, 0xF8, 0xF0, 0xF7, 0xFF, 0xFF],
    },
    Glyph {
        ch: 'e',
        top: [0xFF, 0x3F, 0x1F, 0x5F, 0x5F, 0x5F, 0x1F, 0x3F, 0xFF, 0xFF],
        bottom: [0xFF, 0xF8, 0xF0, 0xF7, 0xF7, 0xF7, 0xF3, 0xFB, 0xFF, 0xFF],
    },
    Glyph {
        ch: 'f',
        top: [0xFF, 0xFF, 0xBF, 0x07, 0x03, 0xBB, 0xF3, 0xE7, 0xFF, 0xFF],
        bottom: [0xFF, 0xFF, 0xF7, 0xF0, 0xF0, 0xF7, 0xFF, 0xFF, 0xFF, 0xFF],
    },
    Glyph {
        ch: 'g',
        top: [0xFF, 0x3F, 0x1F, 0xDF, 0xDF, 0x3F, 0x1F, 0xDF, 0xFF, 0xFF],
        bottom: [0xFF, 0xD8, 0x90, 0xB7, 0xB7, 0x80, 0xC0, 0xFF, 0xFF, 0xFF],
    },
    Glyph {
        ch: 'h',
        top: [0xFF, 0xFB, 0x03, 0x03, 0xBF, 0xDF, 0x1F, 0x3F, 0xFF, 0xFF],
        bottom: [0xFF, 0xF7, 0xF0, 0xF0, 0xFF, 0xFF, 0xF0, 0xF0, 0xFF, 0xFF],
    },
    Glyph {
        ch: 'i',
        top: [0xFF, 0xFF, 0xFF, 0xDF, 0x13, 0x13, 0xFF, 0xFF, 0xFF, 0xFF],
        bottom: [0xFF, 0xFF, 0xFF, 0xF7, 0xF0, 0xF0, 0xF7, 0xFF, 0xFF, 0xFF],
    },
    Glyph {
        ch: 'j',
        top: [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xDF, 0x13, 0x13, 0xFF, 0xFF],
        bottom: [0xFF, 0xFF, 0xCF, 0x8F, 0xBF, 0xBF, 0x80, 0xC0, 0xFF, 0xFF],
    },
    Glyph {
        ch: 'k',
        top: [0xFF, 0xFB, 0x03, 0x03, 0x7F, 0x3F, 0x9F, 0xDF, 0xFF, 0xFF],
        bottom: [0xFF, 0xF7, 0xF0, 0xF0, 0xFE, 0xFC, 0xF1, 0xF3, 0xFF, 0xFF],
    },
    Glyph {
        ch: 'l',
        top: [0xFF, 0xFF, 0xFF, 0xFB, 0x03, 0x03, 0xFF, 0xFF, 0xFF, 0xFF],
        bottom: [0xFF, 0xFF, 0xFF, 0xF7, 0xF0, 0xF0, 0xF7, 0xFF, 0xFF, 0xFF],
    },
    Glyph {
        ch: 'm',
        top: [0xFF, 0x1F, 0x1F, 0x9F, 0x3F, 0x9F, 0x1F, 0x3F, 0xFF, 0xFF],
        bottom: [0xFF, 0xF0, 0xF0, 0xFF, 0xF8, 0xFF, 0xF0, 0xF0, 0xFF, 0xFF],
    },
    Glyph {
        ch: 'n',
        top: [0xFF, 0xDF, 0x1F, 0x3F, 0xDF, 0xDF, 0x1F, 0x3F, 0xFF, 0xFF],
        bottom: [0xFF, 0xFF, 0xF0, 0xF0, 0xFF, 0xFF, 0xF0, 0xF0, 0xFF, 0xFF],
    },
    Glyph {
        ch: 'o',
        top: [0xFF, 0x3F, 0x1F, 0xDF, 0xDF, 0xDF, 0x1F, 0x3F, 0xFF, 0xFF],
        bottom: [0xFF, 0xF8, 0xF0, 0xF7, 0xF7, 0xF7, 0xF0, 0xF8, 0xFF, 0xFF],
    },
    Glyph {
        ch: 'p',
        top: [0xFF, 0xDF, 0x1F, 0x3F, 0xDF, 0xDF, 0x1F, 0x3F, 0xFF, 0xFF],
        bottom: [0xFF, 0xBF, 0x80, 0x80, 0xB7, 0xF7, 0xF0, 0xF8, 0xFF, 0xFF],
    },
    Glyph {
        ch: 'q',
        top: [0xFF, 0x3F, 0x1F, 0xDF, 0xDF, 0x3F, 0x1F, 0xDF, 0xFF, 0xFF],
        bottom: [0xFF, 0xF8, 0xF0, 0xF7, 0xB7, 0x80, 0x80, 0xBF, 0xFF, 0xFF],
    },
    Glyph {
        ch: 'r',
        top: [0xFF, 0xDF, 0x1F, 0x3F, 0x9F, 0xDF, 0x1F, 0x3F, 0xFF, 0xFF],
        bottom: [0xFF, 0xF7, 0xF0, 0xF0, 0xF7, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF],
    },
    Glyph {
        ch: 's',
        top: [0xFF, 0xBF, 0x1F, 0x5F, 0xDF, 0xDF, 0x9F, 0xBF, 0xFF, 0xFF],
        bottom: [0xFF, 0xFB, 0xF3, 0xF6, 0xF6, 0xF4, 0xF1, 0xFB, 0xFF, 0xFF],
    },
    Glyph {
        ch: 't',
        top: [0xFF, 0xDF, 0xDF, 0x07, 0x03, 0xDF, 0xDF, 0xFF, 0xFF, 0xFF],
        bottom: [0xFF, 0xFF, 0xFF, 0xF8, 0xF0, 0xF7, 0xF3, 0xFB, 0xFF, 0xFF],
    },
    Glyph {
        ch: 'u',
        top: [0xFF, 0x1F, 0x1F, 0xFF, 0xFF, 0x1F, 0x1F, 0xFF, 0xFF, 0xFF],
        bottom: [0xFF, 0xF8, 0xF0, 0xF7, 0xF7, 0xF8, 0xF0, 0xF7, 0xFF, 0xFF],
    },
    Glyph {
        ch: 'v',
        top: [0xFF, 0xFF, 0x1F, 0x1F, 0xFF, 0xFF, 0x1F, 0x1F, 0xFF, 0xFF],
        bottom: [0xFF, 0xFF, 0xFC, 0xF8, 0xF3, 0xF3, 0xF8, 0xFC, 0xFF, 0xFF],
    },
    Glyph {
        ch: 'w',
        top: [0xFF, 0x1F, 0x1F, 0xFF, 0x7F, 0xFF, 0x1F, 0x1F, 0xFF, 0xFF],
        bottom: [0xFF, 0xF8, 0xF0, 0xF3, 0xF8, 0xF3, 0xF0, 0xF8, 0xFF, 0xFF],
    },
    Glyph {
        ch: 'x',
        top: [0xFF, 0xDF, 0x9F, 0x3F, 0x7F, 0x3F, 0x9F, 0xDF, 0xFF, 0xFF],
        bottom: [0xFF, 0xF7, 0xF3, 0xF8, 0xFC, 0xF8, 0xF3, 0xF7, 0xFF, 0xFF],
    },
    Glyph {
        ch: 'y',
        top: [0xFF, 0x1F, 0x1F, 0xFF, 0xFF, 0xFF, 0x1F, 0x1F, 0xFF, 0xFF],
        bottom: [0xFF, 0xB8, 0xB0, 0xB7, 0xB7, 0x97, 0xC0, 0xE0, 0xFF, 0xFF],
    },
    Glyph {
        ch: 'z',
        top: [0xFF, 0x9F, 0x9F, 0xDF, 0x5F, 0x1F, 0x9F, 0xDF, 0xFF, 0xFF],
        bottom: [0xFF, 0xF3, 0xF1, 0xF4, 0xF6, 0xF7, 0xF3, 0xF3, 0xFF, 0xFF],
    },
    Glyph {
        ch: '{',
        top: [0xFF, 0xFF, 0xBF, 0xBF, 0x07, 0x43, 0xFB, 0xFB, 0xFF, 0xFF],
        bottom: [0xFF, 0xFF, 0xFF, 0xFF, 0xF8, 0xF0, 0xF7, 0xF7, 0xFF, 0xFF],
    },
    Glyph {
        ch: '|',
        top: [0xFF, 0xFF, 0xFF, 0xFF, 0x43, 0x43, 0xFF, 0xFF, 0xFF, 0xFF],
        bottom: [0xFF, 0xFF, 0xFF, 0xFF, 0xF0, 0xF0, 0xFF, 0xFF, 0xFF, 0xFF],
    },
    Glyph {
        ch: '}',
        top: [0xFF, 0xFF, 0xFB, 0xFB, 0x43, 0x07, 0xBF, 0xBF, 0xFF, 0xFF],
        bottom: [0xFF, 0xFF, 0xF7, 0xF7, 0xF0, 0xF8, 0xFF, 0xFF, 0xFF, 0xFF],
    },
    Glyph {
        ch: '~',
        top: [0xFF, 0xF7, 0xF3, 0xFB, 0xF3, 0xF7, 0xF3, 0xFB, 0xFF, 0xFF],
        bottom: [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF],
    },
];
