// src/app.rs

use crate::core::renderer::api::Renderer;
use crate::error::{AppError, Result};
use log::error;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{WindowAttributes, WindowId},
};

pub const WINDOW_TITLE: &str = "gridwalk";
pub const WINDOW_WIDTH: f64 = 512.0;
pub const WINDOW_HEIGHT: f64 = 512.0;

pub struct App<R: Renderer + Default> {
    renderer: R,
    window: Option<winit::window::Window>,
}

impl<R: Renderer + Default> ApplicationHandler for App<R> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let attributes = WindowAttributes::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
            .with_resizable(false);
        let window = match event_loop.create_window(attributes) {
            Ok(window) => window,
            Err(e) => {
                error!("{}", AppError::Window(e));
                event_loop.exit();
                return;
            }
        };

        // keep window alive in App
        self.window = Some(window);

        // Safe to unwrap because we just set it
        let window_ref = self.window.as_ref().unwrap();

        if let Err(e) = self.renderer.initialize(window_ref, event_loop) {
            error!("renderer initialization failed: {e}");
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, id: WindowId, event: WindowEvent) {
        self.renderer.window_event(event_loop, id, &event);
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        // drive continuous animation
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl<R: Renderer + Default> App<R> {
    pub fn run() -> Result<()> {
        let mut app = App {
            renderer: R::default(),
            window: None,
        };

        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);
        event_loop.run_app(&mut app)?;
        app.renderer.shutdown();
        Ok(())
    }
}
