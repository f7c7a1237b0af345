//! demos/spin_quad.rs – one quad spinning at the window center.

use std::time::Instant;

use glam::Vec2;
use glow::HasContext;
use glutin::config::ConfigTemplateBuilder;
use glutin::context::{
    ContextApi, ContextAttributesBuilder, NotCurrentGlContext, PossiblyCurrentContext, Version,
};
use glutin::display::{GetGlDisplay, GlDisplay};
use glutin::surface::{GlSurface, Surface, WindowSurface};
use glutin_winit::{DisplayBuilder, GlWindow};
use log::error;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::raw_window_handle::HasWindowHandle;
use winit::window::{Window, WindowAttributes, WindowId};

use gridwalk::core::renderer::primitive::Quad;
use gridwalk::core::renderer::transform::pixel_projection;
use gridwalk::error::{AppError, Result};

const SIZE: f32 = 512.0;
const SPIN_DEG_PER_SEC: f32 = 64.0;

#[derive(Default)]
struct Demo {
    window: Option<Window>,
    context: Option<PossiblyCurrentContext>,
    surface: Option<Surface<WindowSurface>>,
    gl: Option<glow::Context>,
    quad: Option<Quad>,
    started: Option<Instant>,
}

impl Demo {
    fn setup(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attributes = WindowAttributes::default()
            .with_title("spin quad")
            .with_inner_size(LogicalSize::new(SIZE as f64, SIZE as f64));
        let window = event_loop.create_window(attributes)?;

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
        let gl =
            unsafe { glow::Context::from_loader_function_cstr(|s| display.get_proc_address(s)) };

        let quad = Quad::new(&gl, &pixel_projection(SIZE, SIZE))?;

        self.window = Some(window);
        self.context = Some(context);
        self.surface = Some(surface);
        self.gl = Some(gl);
        self.quad = Some(quad);
        self.started = Some(Instant::now());
        Ok(())
    }

    fn render(&mut self) -> Result<()> {
        let (Some(gl), Some(surface), Some(context), Some(started)) =
            (&self.gl, &self.surface, &self.context, &self.started)
        else {
            return Ok(());
        };
        unsafe {
            gl.clear_color(0.0, 0.0, 0.0, 1.0);
            gl.clear(glow::COLOR_BUFFER_BIT);
        }
        let angle = started.elapsed().as_secs_f32() * SPIN_DEG_PER_SEC;
        if let Some(quad) = &mut self.quad {
            quad.draw(gl, Vec2::new(SIZE / 2.0, SIZE / 2.0), angle, 128.0);
        }
        surface.swap_buffers(context)?;
        Ok(())
    }
}

impl ApplicationHandler for Demo {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if let Err(e) = self.setup(event_loop) {
            error!("setup failed: {e}");
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::RedrawRequested => {
                if let Err(e) = self.render() {
                    error!("render failed: {e}");
                    event_loop.exit();
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

impl Drop for Demo {
    fn drop(&mut self) {
        if let Some(quad) = self.quad.take() {
            if let Some(gl) = &self.gl {
                quad.destroy(gl);
            }
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let mut demo = Demo::default();
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);
    event_loop.run_app(&mut demo)?;
    Ok(())
}
