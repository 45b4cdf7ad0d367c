use std::sync::Arc;

use anyhow::{Context, Result};
use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::camera::PerspectiveCamera;
use crate::clock::{Clock, FpsCounter};
use crate::controls::OrbitControls;
use crate::demos::DemoKind;
use crate::renderer::{surface_extent, Renderer};
use crate::scene::Scene;

pub const INITIAL_WINDOW_WIDTH: u32 = 800;
pub const INITIAL_WINDOW_HEIGHT: u32 = 600;
const FPS_WINDOW: f32 = 1.0;

/// Application shell: owns the window, renderer, scene, camera, and clock,
/// and drives the continuous redraw loop. Construction order is fixed:
/// window, renderer, scene upload, camera sizing, then controls, which need
/// the camera to exist.
pub struct App {
    demo: DemoKind,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    scene: Scene,
    camera: PerspectiveCamera,
    controls: Option<OrbitControls>,
    clock: Clock,
    fps: FpsCounter,
    startup_error: Option<anyhow::Error>,
}

impl App {
    pub fn new(demo: DemoKind) -> Self {
        let scene = demo.build_scene();
        let camera =
            demo.build_camera(INITIAL_WINDOW_WIDTH as f32 / INITIAL_WINDOW_HEIGHT as f32);

        Self {
            demo,
            window: None,
            renderer: None,
            scene,
            camera,
            controls: None,
            clock: Clock::new(),
            fps: FpsCounter::new(FPS_WINDOW),
            startup_error: None,
        }
    }

    /// Build the event loop and drive the demo until the window closes.
    /// Startup failures inside the loop are reported back to the caller
    /// instead of dying silently.
    pub fn run(demo: DemoKind) -> Result<()> {
        let event_loop = EventLoop::new().context("create event loop")?;
        let mut app = App::new(demo);
        event_loop.run_app(&mut app).context("run event loop")?;

        match app.startup_error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn initialize(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window = Arc::new(
            event_loop
                .create_window(
                    Window::default_attributes()
                        .with_title(self.demo.title())
                        .with_inner_size(winit::dpi::LogicalSize::new(
                            INITIAL_WINDOW_WIDTH,
                            INITIAL_WINDOW_HEIGHT,
                        )),
                )
                .context("create window")?,
        );

        let mut renderer = pollster::block_on(Renderer::new(window.clone()))?;
        renderer.prepare(&self.scene);

        // Establish initial sizing before the first frame
        let size = window.inner_size();
        let (width, height) = surface_extent(size.width, size.height);
        self.camera.set_aspect(width as f32 / height as f32);

        if self.demo.uses_orbit_controls() {
            self.controls = Some(OrbitControls::new(&self.camera));
        }

        self.window = Some(window);
        self.renderer = Some(renderer);
        self.clock = Clock::new();
        Ok(())
    }

    fn handle_resize(&mut self, width: u32, height: u32) {
        let (width, height) = surface_extent(width, height);
        self.camera.set_aspect(width as f32 / height as f32);
        if let Some(renderer) = &mut self.renderer {
            renderer.resize(width, height);
        }
    }

    fn redraw(&mut self) {
        let delta = self.clock.tick();
        if let Some(fps) = self.fps.tick(delta) {
            log::debug!("{fps:.1} fps");
        }

        if let Some(controls) = &self.controls {
            controls.apply_to(&mut self.camera);
        }

        if let Some(renderer) = &mut self.renderer {
            match renderer.render(&self.scene, &self.camera) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    let (width, height) = renderer.size();
                    renderer.resize(width, height);
                }
                Err(error) => log::error!("render failed: {error}"),
            }
        }

        self.demo.update(&mut self.scene, self.clock.elapsed());
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(error) = self.initialize(event_loop) {
            log::error!("startup failed: {error:#}");
            self.startup_error = Some(error);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(size) => self.handle_resize(size.width, size.height),
            WindowEvent::RedrawRequested => self.redraw(),
            other => {
                if let Some(controls) = &mut self.controls {
                    controls.process_event(&other);
                }
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        // Explicit rescheduling keeps the render loop continuous
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
