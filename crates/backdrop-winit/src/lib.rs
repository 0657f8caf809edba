//! Winit graphical backend for backdrop.
//!
//! Draws a scrolling [`ScenarioType`] background into a native window using:
//! - [`winit`] for window creation and keyboard input
//! - [`softbuffer`] for CPU-based pixel presentation
//!
//! # Usage
//!
//! ```rust,no_run
//! use backdrop_winit::{TileImage, WinitConfig, WinitDriver, BLACK};
//!
//! let tile = TileImage::checker(32, 32, 8, 0xFF808080, BLACK);
//! let driver = WinitDriver::new(WinitConfig::default());
//! driver.run(tile).unwrap();
//! ```

mod input;
mod renderer;

use std::error::Error;
use std::num::NonZeroU32;
use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    dpi::{LogicalSize, PhysicalSize},
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowId},
};

use backdrop_core::{
    SceneContext, Scenario, ScenarioConfig, ScenarioType, ViewportSize, render_background,
};

use input::Command;
pub use renderer::{BLACK, FrameBuffer, TileImage, rgb};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Configuration for the winit driver.
#[derive(Clone, Debug)]
pub struct WinitConfig {
    /// Window title.
    pub title: String,
    /// Background layout, tile size and initial scroll.
    pub scenario: ScenarioConfig,
    /// Initial inner window size in logical pixels.
    pub width: u32,
    pub height: u32,
    /// Pixels scrolled per key press.
    pub scroll_step: i32,
    /// Colour behind the tiles, visible only where a tile image is
    /// transparent or the background draw was skipped.
    pub clear_color: u32,
}

impl Default for WinitConfig {
    fn default() -> Self {
        Self {
            title: "backdrop".into(),
            scenario: ScenarioConfig::default(),
            width: 640,
            height: 480,
            scroll_step: 8,
            clear_color: BLACK,
        }
    }
}

// ---------------------------------------------------------------------------
// WinitDriver
// ---------------------------------------------------------------------------

/// Winit-based graphical driver. Owns the main-thread event loop and
/// redraws the background whenever the window resizes or scrolls.
pub struct WinitDriver {
    config: WinitConfig,
}

impl WinitDriver {
    pub fn new(config: WinitConfig) -> Self {
        Self { config }
    }

    /// Open the window and run until it is closed.
    ///
    /// The scenario is validated before the window opens, so a bad tile
    /// size is reported without creating any platform resources.
    pub fn run(self, image: TileImage) -> Result<(), Box<dyn Error>> {
        let viewport = ViewportSize::new(self.config.width, self.config.height);
        let scenario = self.config.scenario.scenario(image, viewport)?;
        let event_loop = EventLoop::new()?;
        let mut app = WinitApp::new(self.config, scenario);
        event_loop.run_app(&mut app)?;
        match app.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

// ---------------------------------------------------------------------------
// WinitApp — ApplicationHandler
// ---------------------------------------------------------------------------

struct WinitApp {
    config: WinitConfig,
    scenario: Scenario<TileImage>,
    state: Option<WinitState>,
    error: Option<Box<dyn Error>>,
}

struct WinitState {
    window: Arc<Window>,
    surface: softbuffer::Surface<Arc<Window>, Arc<Window>>,
    frame: FrameBuffer,
}

impl WinitApp {
    fn new(config: WinitConfig, scenario: Scenario<TileImage>) -> Self {
        Self {
            config,
            scenario,
            state: None,
            error: None,
        }
    }

    fn kind(&self) -> ScenarioType {
        self.config.scenario.kind
    }

    fn create_state(&self, event_loop: &ActiveEventLoop) -> Result<WinitState, Box<dyn Error>> {
        let window_attrs = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height))
            .with_resizable(true);

        let window = Arc::new(event_loop.create_window(window_attrs)?);
        let context = softbuffer::Context::new(window.clone())?;
        let surface = softbuffer::Surface::new(&context, window.clone())?;

        Ok(WinitState {
            window,
            surface,
            frame: FrameBuffer::new(0, 0),
        })
    }

    /// Match the frame buffer, surface and scenario viewport to the window.
    fn resize(&mut self, width: u32, height: u32) {
        let Some(state) = self.state.as_mut() else {
            return;
        };
        state.frame.resize(width, height);
        let resized = state.surface.resize(
            NonZeroU32::new(width).unwrap_or(NonZeroU32::MIN),
            NonZeroU32::new(height).unwrap_or(NonZeroU32::MIN),
        );
        if let Err(e) = resized {
            log::warn!("failed to resize surface to {width}x{height}: {e}");
        }
        self.scenario.set_viewport(ViewportSize::new(width, height));
        log::debug!("viewport resized to {width}x{height}");
    }

    fn render(&mut self) {
        let kind = self.kind();
        let Some(state) = self.state.as_mut() else {
            return;
        };

        let width = state.frame.width();
        let height = state.frame.height();
        if width == 0 || height == 0 {
            return;
        }

        state.frame.clear(self.config.clear_color);
        render_background(kind, &self.scenario, &mut state.frame);

        let mut buf = match state.surface.buffer_mut() {
            Ok(b) => b,
            Err(e) => {
                log::warn!("surface buffer unavailable: {e}");
                return;
            }
        };
        state
            .frame
            .blit_to_buffer(&mut buf, width as usize, height as usize);
        if let Err(e) = buf.present() {
            log::warn!("failed to present frame: {e}");
        }
    }

    fn apply(&mut self, cmd: Command, event_loop: &ActiveEventLoop) {
        match cmd {
            Command::Scroll(dx, dy) => self.scenario.scroll_by(dx, dy),
            Command::Reset => self.scenario.set_scroll(self.config.scenario.scroll),
            Command::Quit => {
                event_loop.exit();
                return;
            }
        }
        log::debug!("scroll offset now {:?}", self.scenario.scroll());
        if let Some(state) = self.state.as_ref() {
            state.window.request_redraw();
        }
    }
}

impl ApplicationHandler for WinitApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return; // already initialized
        }

        match self.create_state(event_loop) {
            Ok(state) => {
                let PhysicalSize { width, height } = state.window.inner_size();
                self.state = Some(state);
                self.resize(width, height);
                self.render();
            }
            Err(e) => {
                log::warn!("failed to open window: {e}");
                self.error = Some(e);
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
                event_loop.exit();
            }

            WindowEvent::Resized(PhysicalSize { width, height }) => {
                self.resize(width, height);
                self.render();
            }

            WindowEvent::RedrawRequested => {
                self.render();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let Some(cmd) = input::translate_keyboard(&event, self.config.scroll_step) {
                    self.apply(cmd, event_loop);
                }
            }

            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = WinitConfig::default();
        assert_eq!(c.title, "backdrop");
        assert_eq!((c.width, c.height), (640, 480));
        assert_eq!(c.scenario.kind, ScenarioType::RepeatXY);
        assert!(c.scroll_step > 0);
    }

    #[test]
    fn run_rejects_bad_tile_before_opening_window() {
        let mut config = WinitConfig::default();
        config.scenario.tile_width = 0;
        let err = WinitDriver::new(config)
            .run(TileImage::checker(8, 8, 4, BLACK, BLACK))
            .unwrap_err();
        assert!(err.to_string().contains("invalid tile size 0x32"));
    }
}
