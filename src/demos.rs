use clap::ValueEnum;
use glam::Vec3;

use crate::camera::PerspectiveCamera;
use crate::geometry::Geometry;
use crate::light::DirectionalLight;
use crate::material::Material;
use crate::scene::{Node, Primitive, Scene};

pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;
pub const CAMERA_DISTANCE: f32 = 2.0;

const LIGHT_POSITION: Vec3 = Vec3::new(-1.0, 2.0, 4.0);

/// The two demo variants selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DemoKind {
    /// Solid cube rotating continuously on the X and Y axes
    Spin,
    /// Static cube with a wireframe overlay, orbited with the mouse
    Wireframe,
}

impl DemoKind {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Spin => "Spinning Cube",
            Self::Wireframe => "Wireframe Cube",
        }
    }

    /// Whether the orbit controller should be attached after the camera exists
    pub fn uses_orbit_controls(&self) -> bool {
        matches!(self, Self::Wireframe)
    }

    pub fn build_camera(&self, aspect: f32) -> PerspectiveCamera {
        let mut camera = PerspectiveCamera::new(
            CAMERA_FOV_DEGREES.to_radians(),
            aspect,
            CAMERA_NEAR,
            CAMERA_FAR,
        );
        camera.position = Vec3::new(0.0, 0.0, CAMERA_DISTANCE);
        camera
    }

    pub fn build_scene(&self) -> Scene {
        let mut scene = Scene::new();
        scene.add_light(DirectionalLight::new(Vec3::ONE, 1.0, LIGHT_POSITION));

        let node = match self {
            Self::Spin => {
                let geometry = Geometry::box_geometry(1.0, 1.0, 1.0, (1, 1, 1));
                Node::with_primitive(geometry, Material::shaded(0x44a88))
            }
            Self::Wireframe => {
                let geometry = Geometry::box_geometry(1.0, 1.0, 1.0, (2, 2, 2));
                Node::new(vec![
                    Primitive::new(geometry.clone(), Material::shaded(0x515151)),
                    Primitive::new(geometry, Material::line(0xffff00)),
                ])
            }
        };
        scene.add_node(node);

        scene
    }

    /// Per-frame model update. `time` is absolute elapsed seconds; the
    /// rotation is a pure function of it, never an accumulation.
    pub fn update(&self, scene: &mut Scene, time: f32) {
        match self {
            Self::Spin => {
                for node in &mut scene.nodes {
                    node.rotation.x = time;
                    node.rotation.y = time;
                }
            }
            // Model stays put; only the orbit controller moves the camera
            Self::Wireframe => {}
        }
    }
}
