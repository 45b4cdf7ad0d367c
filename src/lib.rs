pub mod app;
pub mod camera;
pub mod clock;
pub mod controls;
pub mod demos;
pub mod geometry;
pub mod light;
pub mod material;
pub mod renderer;
pub mod scene;

pub use camera::PerspectiveCamera;
pub use demos::DemoKind;
pub use scene::{Node, Primitive, Scene};
