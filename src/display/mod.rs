// Display module - frame buffer, master palette, and the host window

mod framebuffer;
mod palette;
mod window;

pub use framebuffer::{FrameBuffer, BYTES_PER_PIXEL, SCREEN_HEIGHT, SCREEN_WIDTH};
pub use palette::{master_palette_rgb, MASTER_PALETTE};
pub use window::{run_display, SharedFrame, WindowConfig};
