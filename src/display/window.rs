// Window module - presents the emulator's frame buffer on screen
//
// The window runs on the main thread and polls a shared copy of the latest
// finished frame; the emulation thread publishes into it whenever the PPU
// wraps a frame. Closing the window (or pressing Escape) powers the console
// off.
//
// Keys: P toggles pause, R requests a reset, Escape quits.

use super::framebuffer::{FRAME_BYTES, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::console::ConsoleControls;
use pixels::{Pixels, SurfaceTexture};
use std::sync::{Arc, Mutex};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

/// Latest-wins frame exchange between the emulation and window threads
///
/// The emulation thread publishes each finished frame; the window thread
/// snapshots whatever is newest at display refresh. There is no further
/// synchronization contract between the two.
pub struct SharedFrame {
    pixels: Mutex<Vec<u8>>,
}

impl SharedFrame {
    /// Create a shared frame initialized to black
    pub fn new() -> Self {
        Self {
            pixels: Mutex::new(vec![0; FRAME_BYTES]),
        }
    }

    /// Publish a finished frame (RGB bytes, 256x240x3)
    pub fn publish(&self, frame: &[u8]) {
        if let Ok(mut pixels) = self.pixels.lock() {
            pixels.copy_from_slice(frame);
        }
    }

    /// Copy the latest frame into `out`
    pub fn snapshot_into(&self, out: &mut [u8]) {
        if let Ok(pixels) = self.pixels.lock() {
            out.copy_from_slice(&pixels);
        }
    }
}

impl Default for SharedFrame {
    fn default() -> Self {
        Self::new()
    }
}

/// Window configuration
#[derive(Debug, Clone, Copy)]
pub struct WindowConfig {
    /// Integer scale factor (1x-8x)
    pub scale: u32,
    /// Whether to enable VSync
    pub vsync: bool,
}

impl WindowConfig {
    /// Default: 3x scale with VSync
    pub fn new() -> Self {
        Self {
            scale: 3,
            vsync: true,
        }
    }

    /// Set the scale factor
    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale.clamp(1, 8);
        self
    }

    /// Set VSync enabled or disabled
    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.vsync = vsync;
        self
    }

    /// Window width in physical pixels
    pub fn window_width(&self) -> u32 {
        SCREEN_WIDTH as u32 * self.scale
    }

    /// Window height in physical pixels
    pub fn window_height(&self) -> u32 {
        SCREEN_HEIGHT as u32 * self.scale
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self::new()
    }
}

struct DisplayWindow {
    window: Option<Arc<Window>>,
    pixels: Option<Pixels<'static>>,
    config: WindowConfig,
    frame: Arc<SharedFrame>,
    controls: Arc<ConsoleControls>,
    rgb: Vec<u8>,
}

impl DisplayWindow {
    fn new(config: WindowConfig, frame: Arc<SharedFrame>, controls: Arc<ConsoleControls>) -> Self {
        Self {
            window: None,
            pixels: None,
            config,
            frame,
            controls,
            rgb: vec![0; FRAME_BYTES],
        }
    }

    fn render(&mut self) -> Result<(), pixels::Error> {
        let Some(pixels) = &mut self.pixels else {
            return Ok(());
        };

        self.frame.snapshot_into(&mut self.rgb);

        // Expand RGB triples into the surface's RGBA layout
        let surface = pixels.frame_mut();
        for (src, dst) in self.rgb.chunks_exact(3).zip(surface.chunks_exact_mut(4)) {
            dst[0] = src[0];
            dst[1] = src[1];
            dst[2] = src[2];
            dst[3] = 0xFF;
        }

        pixels.render()
    }

    fn handle_key(&mut self, event_loop: &ActiveEventLoop, key: KeyCode) {
        match key {
            KeyCode::Escape => {
                self.controls.power_off();
                event_loop.exit();
            }
            KeyCode::KeyP => self.controls.toggle_pause(),
            KeyCode::KeyR => self.controls.request_reset(),
            _ => {}
        }
    }
}

impl ApplicationHandler for DisplayWindow {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attributes = Window::default_attributes()
            .with_title("famicore")
            .with_inner_size(LogicalSize::new(
                self.config.window_width(),
                self.config.window_height(),
            ))
            .with_resizable(false);

        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(err) => {
                log::error!("failed to create window: {}", err);
                self.controls.power_off();
                event_loop.exit();
                return;
            }
        };

        let window_size = window.inner_size();
        let surface_texture =
            SurfaceTexture::new(window_size.width, window_size.height, window.clone());

        match Pixels::new(SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32, surface_texture) {
            Ok(pixels) => {
                self.window = Some(window);
                self.pixels = Some(pixels);
            }
            Err(err) => {
                log::error!("failed to create pixel surface: {}", err);
                self.controls.power_off();
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                self.controls.power_off();
                event_loop.exit();
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => {
                self.handle_key(event_loop, key);
            }
            WindowEvent::RedrawRequested => {
                if let Err(err) = self.render() {
                    log::error!("render error: {}", err);
                    self.controls.power_off();
                    event_loop.exit();
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Run the display window until the user closes it
///
/// Blocks the calling thread (this must be the main thread on most
/// platforms). The console keeps emulating on its own thread; it is powered
/// off when the window goes away.
pub fn run_display(
    config: WindowConfig,
    frame: Arc<SharedFrame>,
    controls: Arc<ConsoleControls>,
) -> Result<(), Box<dyn std::error::Error>> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(if config.vsync {
        ControlFlow::Wait
    } else {
        ControlFlow::Poll
    });

    let mut display = DisplayWindow::new(config, frame, controls);
    event_loop.run_app(&mut display)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_config_defaults() {
        let config = WindowConfig::new();
        assert_eq!(config.scale, 3);
        assert!(config.vsync);
    }

    #[test]
    fn test_window_dimensions() {
        let config = WindowConfig::new().with_scale(2);
        assert_eq!(config.window_width(), 512);
        assert_eq!(config.window_height(), 480);
    }

    #[test]
    fn test_scale_clamping() {
        assert_eq!(WindowConfig::new().with_scale(100).scale, 8);
        assert_eq!(WindowConfig::new().with_scale(0).scale, 1);
    }

    #[test]
    fn test_shared_frame_roundtrip() {
        let shared = SharedFrame::new();
        let frame = vec![0x42; FRAME_BYTES];
        shared.publish(&frame);

        let mut out = vec![0; FRAME_BYTES];
        shared.snapshot_into(&mut out);
        assert_eq!(out, frame);
    }
}
