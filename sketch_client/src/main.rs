//! Native window for the sketches
//!
//! winit drives the event loop, wgpu draws the lyon-stroked frame the core
//! composes each redraw.

mod args;
mod error;
mod input;
mod mesh;
mod projection;
mod renderer;

use args::Args;
use clap::Parser;
use error::ClientError;
use futures::executor::block_on;
use glam::Vec2;
use input::{handle_key, DragState, KeyAction};
use renderer::Renderer;
use sketch_core::Sketch;
use std::sync::Arc;
use std::time::Instant;
use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

struct App {
    args: Args,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    sketch: Option<Sketch>,
    drag: DragState,
    last_frame: Option<Instant>,
    error: Option<ClientError>,
}

impl App {
    fn new(args: Args) -> Self {
        Self {
            args,
            window: None,
            renderer: None,
            sketch: None,
            drag: DragState::new(),
            last_frame: None,
            error: None,
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), ClientError> {
        let window_attrs = Window::default_attributes()
            .with_title(format!("murmur - {}", self.args.sketch))
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.args.width,
                self.args.height,
            ));

        let window = Arc::new(event_loop.create_window(window_attrs)?);
        let renderer = block_on(Renderer::new(window.clone(), !self.args.no_vsync))?;
        let sketch = Sketch::new(self.args.sketch, self.args.config(), renderer.logical_size())?;

        log::info!(
            "Running {} sketch with {} birds",
            sketch.kind(),
            sketch.birds().len()
        );

        window.request_redraw();
        self.window = Some(window);
        self.renderer = Some(renderer);
        self.sketch = Some(sketch);
        Ok(())
    }

    /// Stash a fatal error for `run` to report, then leave the event loop
    fn fail(&mut self, event_loop: &ActiveEventLoop, err: ClientError) {
        self.error = Some(err);
        event_loop.exit();
    }

    fn resize_sketch(&mut self) -> Result<(), ClientError> {
        if let (Some(renderer), Some(sketch)) = (&self.renderer, &mut self.sketch) {
            let size = renderer.logical_size();
            if size.x > 0.0 && size.y > 0.0 {
                sketch.resize(size)?;
            }
        }
        Ok(())
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(renderer), Some(sketch)) = (&mut self.renderer, &mut self.sketch) else {
            return;
        };

        let now = Instant::now();
        let dt = self
            .last_frame
            .map(|last| now.duration_since(last).as_secs_f32())
            .unwrap_or(0.0);
        self.last_frame = Some(now);

        sketch.update(dt);
        let frame = sketch.frame();

        match renderer.draw(&frame) {
            Ok(()) => {}
            Err(ClientError::Surface(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated)) => {
                log::warn!("Surface lost, reconfiguring");
                renderer.resize(renderer.size());
            }
            Err(ClientError::Surface(wgpu::SurfaceError::OutOfMemory)) => {
                self.fail(event_loop, ClientError::Surface(wgpu::SurfaceError::OutOfMemory));
            }
            Err(ClientError::Surface(err)) => log::warn!("Skipping frame: {err}"),
            Err(err) => self.fail(event_loop, err),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(err) = self.init(event_loop) {
            self.fail(event_loop, err);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key,
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => match handle_key(&logical_key) {
                Some(KeyAction::Quit) => event_loop.exit(),
                Some(KeyAction::Respawn) => {
                    if let Some(sketch) = &mut self.sketch {
                        sketch.respawn();
                        log::info!("Respawned flock");
                    }
                }
                None => {}
            },
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => self.drag.press(),
                ElementState::Released => self.drag.release(),
            },
            WindowEvent::CursorMoved { position, .. } => {
                let scale = self
                    .renderer
                    .as_ref()
                    .map(|renderer| renderer.scale_factor)
                    .unwrap_or(1.0);
                let logical = position.to_logical::<f32>(scale);
                if let Some(delta) = self.drag.cursor_moved(Vec2::new(logical.x, logical.y)) {
                    if let Some(sketch) = &mut self.sketch {
                        sketch.pan(delta);
                    }
                }
            }
            WindowEvent::CursorLeft { .. } => self.drag.cursor_left(),
            WindowEvent::Resized(physical_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize((physical_size.width, physical_size.height));
                }
                if let Err(err) = self.resize_sketch() {
                    self.fail(event_loop, err);
                }
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                log::debug!("Scale factor changed to {scale_factor}");
                if let Some(renderer) = &mut self.renderer {
                    renderer.change_scale_factor(scale_factor);
                }
                if let Err(err) = self.resize_sketch() {
                    self.fail(event_loop, err);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn run(args: Args) -> Result<(), ClientError> {
    args.config().validate()?;

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(args);
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(err) = run(args) {
        log::error!("{err}");
        std::process::exit(1);
    }
}
