use glam::{EulerRot, Mat4, Vec3};

use crate::geometry::Geometry;
use crate::light::DirectionalLight;
use crate::material::Material;

/// Geometry plus the material it is drawn with
#[derive(Debug, Clone)]
pub struct Primitive {
    pub geometry: Geometry,
    pub material: Material,
}

impl Primitive {
    pub fn new(geometry: Geometry, material: Material) -> Self {
        Self { geometry, material }
    }
}

/// A renderable node. One primitive models a plain mesh; several primitives
/// sharing the node model a group (e.g. a solid cube plus its wireframe
/// overlay); they all rotate together.
#[derive(Debug, Clone)]
pub struct Node {
    pub primitives: Vec<Primitive>,
    pub rotation: Vec3,
}

impl Node {
    pub fn new(primitives: Vec<Primitive>) -> Self {
        Self {
            primitives,
            rotation: Vec3::ZERO,
        }
    }

    pub fn with_primitive(geometry: Geometry, material: Material) -> Self {
        Self::new(vec![Primitive::new(geometry, material)])
    }

    pub fn set_rotation(&mut self, rotation: Vec3) {
        self.rotation = rotation;
    }

    /// XYZ-order Euler rotation about the origin
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        )
    }
}

/// Flat container of nodes and lights. Populated at setup time only; the
/// per-frame update mutates node rotations in place.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub nodes: Vec<Node>,
    pub lights: Vec<DirectionalLight>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, node: Node) -> usize {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    pub fn add_light(&mut self, light: DirectionalLight) {
        self.lights.push(light);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_rotation_is_identity() {
        let node = Node::new(Vec::new());
        assert_eq!(node.model_matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn rotation_about_x_maps_y_to_z() {
        let mut node = Node::new(Vec::new());
        node.set_rotation(Vec3::new(std::f32::consts::FRAC_PI_2, 0.0, 0.0));

        let rotated = node.model_matrix().transform_vector3(Vec3::Y);
        assert!((rotated - Vec3::Z).length() < 1e-6);
    }

    #[test]
    fn add_node_returns_stable_index() {
        let mut scene = Scene::new();
        let first = scene.add_node(Node::new(Vec::new()));
        let second = scene.add_node(Node::new(Vec::new()));
        assert_eq!(first, 0);
        assert_eq!(second, 1);
    }
}
