use std::num::NonZeroU32;
use std::time::{Duration, Instant};

use glam::Vec2;
use glow::HasContext;
use glutin::config::ConfigTemplateBuilder;
use glutin::context::{
    ContextApi, ContextAttributesBuilder, NotCurrentGlContext, PossiblyCurrentContext, Version,
};
use glutin::display::{GetGlDisplay, GlDisplay};
use glutin::surface::{GlSurface, Surface, SwapInterval, WindowSurface};
use glutin_winit::{DisplayBuilder, GlWindow};
use log::{debug, error, info, warn};
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::raw_window_handle::HasWindowHandle;
use winit::window::{Window, WindowId};

use crate::core::renderer::api::Renderer;
use crate::core::renderer::primitive::{GridSpec, LineGrid, Quad};
use crate::core::renderer::transform::pixel_projection;
use crate::core::scene::input;
use crate::core::scene::player::{Bounds, Player};
use crate::error::{AppError, Result};

pub const SCR_WIDTH: f32 = 512.0;
pub const SCR_HEIGHT: f32 = 512.0;

const PADDING: f32 = 64.0;
const CELL: f32 = 48.0;

// Key autorepeat arrives much faster than the sprite should walk.
const MOVE_INTERVAL: Duration = Duration::from_millis(20);
const SPIN_DEG_PER_SEC: f32 = 64.0;

/// OpenGL renderer and scene driver.
/// Owns the GL context, the primitives and the player state.
pub struct GlRenderer {
    context: Option<PossiblyCurrentContext>,
    surface: Option<Surface<WindowSurface>>,
    gl: Option<glow::Context>,

    grid: Option<LineGrid>,
    quad: Option<Quad>,

    player: Player,
    started: Instant,
    last_move: Instant,
    fps_timer: Instant,
    frames: u32,
}

impl Default for GlRenderer {
    fn default() -> Self {
        let bounds = Bounds {
            min: Vec2::new(PADDING + CELL / 2.0, PADDING + CELL / 2.0),
            max: Vec2::new(
                SCR_WIDTH - PADDING - CELL / 2.0,
                SCR_HEIGHT - PADDING - CELL / 2.0,
            ),
        };
        Self {
            context: None,
            surface: None,
            gl: None,
            grid: None,
            quad: None,
            player: Player::new(bounds.min, CELL, bounds),
            started: Instant::now(),
            last_move: Instant::now(),
            fps_timer: Instant::now(),
            frames: 0,
        }
    }
}

impl GlRenderer {
    /// Tears down GL-side resources. Safe to call multiple times, called
    /// automatically in Drop.
    fn cleanup(&mut self) {
        if let Some(gl) = &self.gl {
            if let Some(quad) = self.quad.take() {
                quad.destroy(gl);
            }
            if let Some(grid) = self.grid.take() {
                grid.destroy(gl);
            }
        }
        self.gl = None;
        self.surface = None;
        self.context = None;
    }

    fn resize(&mut self, size: PhysicalSize<u32>) {
        let (Some(width), Some(height)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
        else {
            return; // minimized
        };
        if let (Some(surface), Some(context), Some(gl)) = (&self.surface, &self.context, &self.gl) {
            surface.resize(context, width, height);
            unsafe { gl.viewport(0, 0, size.width as i32, size.height as i32) };
        }
    }

    fn handle_key(&mut self, event_loop: &ActiveEventLoop, code: KeyCode) {
        if input::is_quit(code) {
            event_loop.exit();
            return;
        }
        let Some(dir) = input::map_key(code) else {
            return;
        };
        if self.last_move.elapsed() < MOVE_INTERVAL {
            return;
        }
        self.player.advance(dir);
        self.last_move = Instant::now();
    }
}

impl Renderer for GlRenderer {
    /// Initialize OpenGL: pick a config, create a 3.3-core context and the
    /// window surface, load function pointers, build the primitives.
    fn initialize(&mut self, window: &Window, event_loop: &ActiveEventLoop) -> Result<()> {
        // The window already exists, so only a config is picked here.
        let (_, gl_config) = DisplayBuilder::new()
            .build(event_loop, ConfigTemplateBuilder::new(), |mut configs| {
                configs.next().expect("no matching GL configs")
            })
            .map_err(|e| AppError::Loader(e.to_string()))?;
        let display = gl_config.display();

        let raw_window_handle = window
            .window_handle()
            .map_err(|e| AppError::Loader(e.to_string()))?
            .as_raw();
        let context_attributes = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(Version::new(3, 3))))
            .build(Some(raw_window_handle));
        let not_current = unsafe { display.create_context(&gl_config, &context_attributes) }?;

        let surface_attributes = window
            .build_surface_attributes(Default::default())
            .map_err(|e| AppError::Loader(e.to_string()))?;
        let surface = unsafe { display.create_window_surface(&gl_config, &surface_attributes) }?;
        let context = not_current.make_current(&surface)?;

        if let Err(e) = surface.set_swap_interval(&context, SwapInterval::Wait(NonZeroU32::MIN)) {
            warn!("vsync unavailable: {e}");
        }

        let gl =
            unsafe { glow::Context::from_loader_function_cstr(|s| display.get_proc_address(s)) };
        info!("🎉 OpenGL context ready: {}", unsafe {
            gl.get_parameter_string(glow::VERSION)
        });

        let projection = pixel_projection(SCR_WIDTH, SCR_HEIGHT);
        let grid_spec = GridSpec {
            width: SCR_WIDTH,
            height: SCR_HEIGHT,
            padding: PADDING,
            step: CELL,
        };
        let grid = LineGrid::new(&gl, grid_spec, &projection)?;
        let quad = Quad::new(&gl, &projection)?;
        info!("✅ Grid and quad primitives ready");

        self.context = Some(context);
        self.surface = Some(surface);
        self.gl = Some(gl);
        self.grid = Some(grid);
        self.quad = Some(quad);
        self.started = Instant::now();
        self.fps_timer = Instant::now();
        Ok(())
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: &WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => self.resize(*size),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => self.handle_key(event_loop, *code),
            WindowEvent::RedrawRequested => {
                if let Err(e) = self.render() {
                    error!("render failed: {e}");
                    event_loop.exit();
                }
            }
            _ => {}
        }
    }

    /// Draw one frame: grid, spinning checkerboard, player sprite on top.
    fn render(&mut self) -> Result<()> {
        let (Some(gl), Some(surface), Some(context)) = (&self.gl, &self.surface, &self.context)
        else {
            return Ok(());
        };

        unsafe {
            gl.clear_color(0.0, 0.0, 0.0, 1.0);
            gl.clear(glow::COLOR_BUFFER_BIT);
        }

        let angle = self.started.elapsed().as_secs_f32() * SPIN_DEG_PER_SEC;

        if let Some(grid) = &self.grid {
            grid.draw(gl);
        }
        if let Some(quad) = &mut self.quad {
            let Bounds { min, max } = self.player.bounds;
            let mut y = min.y;
            while y < max.y {
                let mut x = min.x;
                while x < max.x {
                    quad.draw(gl, Vec2::new(x, y), angle, CELL);
                    quad.draw(gl, Vec2::new(x + CELL, y + CELL), -angle, CELL);
                    x += 2.0 * CELL;
                }
                y += 2.0 * CELL;
            }
            quad.draw(gl, self.player.pos, 0.0, CELL);
        }

        surface.swap_buffers(context)?;

        self.frames += 1;
        if self.fps_timer.elapsed() >= Duration::from_secs(1) {
            debug!("{} fps", self.frames);
            self.frames = 0;
            self.fps_timer = Instant::now();
        }
        Ok(())
    }

    fn shutdown(&mut self) {
        self.cleanup();
    }
}

impl Drop for GlRenderer {
    fn drop(&mut self) {
        // Must not panic.
        self.cleanup();
    }
}
