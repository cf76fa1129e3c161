mod framebuffer;
mod glyphs;
mod transport;

#[allow(unused_imports)]
pub use framebuffer::{Framebuffer, SCREEN_HEIGHT, SCREEN_ROWS, SCREEN_WIDTH};
#[allow(unused_imports)]
pub use glyphs::{glyph, Glyph, GLYPH_HEIGHT, GLYPH_WIDTH};
#[allow(unused_imports)]
pub use transport::{ScreenTransport, Screens, SCREEN_UPDATE_COOLDOWN};
