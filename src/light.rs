use glam::Vec3;

/// Directional light: parallel rays aimed from `position` toward the origin.
/// Set up once at scene construction and never mutated afterwards.
#[derive(Debug, Clone, Copy)]
pub struct DirectionalLight {
    pub color: Vec3,
    pub intensity: f32,
    pub position: Vec3,
}

impl DirectionalLight {
    pub fn new(color: Vec3, intensity: f32, position: Vec3) -> Self {
        Self {
            color,
            intensity,
            position,
        }
    }

    /// Unit vector pointing from the lit surface toward the light
    pub fn direction(&self) -> Vec3 {
        self.position.normalize()
    }

    /// Color pre-multiplied by intensity, as consumed by the shader
    pub fn radiance(&self) -> Vec3 {
        self.color * self.intensity
    }
}
