use glam::Vec3;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};

use crate::camera::PerspectiveCamera;

pub const ROTATE_SPEED: f32 = 0.005;
pub const ZOOM_SPEED: f32 = 0.1;
pub const PAN_SPEED: f32 = 0.002;

const MIN_RADIUS: f32 = 0.2;
const MAX_RADIUS: f32 = 50.0;
// Stop short of the poles so the look-at up vector stays valid
const MAX_PITCH: f32 = std::f32::consts::FRAC_PI_2 - 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DragMode {
    Rotate,
    Pan,
}

/// Orbit-style camera controller: left-drag orbits around the target,
/// scroll wheel dollies, right-drag pans the target in the view plane.
/// Input mutates only the spherical state here; the camera itself moves
/// when `apply_to` runs, so rendering alone never changes the view.
#[derive(Debug)]
pub struct OrbitControls {
    target: Vec3,
    radius: f32,
    yaw: f32,
    pitch: f32,
    drag: Option<DragMode>,
    cursor: Option<(f32, f32)>,
}

impl OrbitControls {
    /// Derive the initial spherical state from the camera's current pose so
    /// attaching the controls does not jump the view.
    pub fn new(camera: &PerspectiveCamera) -> Self {
        let offset = camera.position - camera.target;
        let radius = offset.length().clamp(MIN_RADIUS, MAX_RADIUS);

        Self {
            target: camera.target,
            radius,
            yaw: offset.x.atan2(offset.z),
            pitch: (offset.y / radius).clamp(-1.0, 1.0).asin(),
            drag: None,
            cursor: None,
        }
    }

    pub fn process_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::MouseInput { state, button, .. } => {
                let mode = match button {
                    MouseButton::Left => Some(DragMode::Rotate),
                    MouseButton::Right => Some(DragMode::Pan),
                    _ => None,
                };
                if let Some(mode) = mode {
                    match state {
                        ElementState::Pressed => self.drag = Some(mode),
                        ElementState::Released => {
                            if self.drag == Some(mode) {
                                self.drag = None;
                            }
                        }
                    }
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                let current = (position.x as f32, position.y as f32);
                if let Some(last) = self.cursor {
                    let dx = current.0 - last.0;
                    let dy = current.1 - last.1;
                    match self.drag {
                        Some(DragMode::Rotate) => self.rotate(dx, dy),
                        Some(DragMode::Pan) => self.pan(dx, dy),
                        None => {}
                    }
                }
                self.cursor = Some(current);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let scroll = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(position) => position.y as f32 / 50.0,
                };
                self.zoom(scroll);
            }
            WindowEvent::CursorLeft { .. } => {
                self.cursor = None;
                self.drag = None;
            }
            _ => {}
        }
    }

    /// Orbit by a cursor delta; yaw is unbounded, pitch is clamped
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.yaw -= dx * ROTATE_SPEED;
        self.pitch = (self.pitch + dy * ROTATE_SPEED).clamp(-MAX_PITCH, MAX_PITCH);
    }

    /// Dolly toward (positive) or away from (negative) the target
    pub fn zoom(&mut self, amount: f32) {
        self.radius = (self.radius * (1.0 - amount * ZOOM_SPEED)).clamp(MIN_RADIUS, MAX_RADIUS);
    }

    /// Slide the target in the current view plane
    pub fn pan(&mut self, dx: f32, dy: f32) {
        let toward_camera = self.offset_direction();
        let forward = -toward_camera;
        let right = forward.cross(Vec3::Y).normalize_or_zero();
        let up = right.cross(forward);

        let scale = PAN_SPEED * self.radius;
        self.target += (right * -dx + up * dy) * scale;
    }

    /// Write the spherical state into the camera. Idempotent: with no input
    /// between calls the camera pose is unchanged.
    pub fn apply_to(&self, camera: &mut PerspectiveCamera) {
        camera.target = self.target;
        camera.position = self.target + self.offset_direction() * self.radius;
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Unit vector from the target toward the camera
    fn offset_direction(&self) -> Vec3 {
        Vec3::new(
            self.yaw.sin() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.cos() * self.pitch.cos(),
        )
    }
}
