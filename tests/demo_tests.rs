use cube_demo::demos::DemoKind;
use cube_demo::material::color_from_hex;
use glam::Vec3;

#[cfg(test)]
mod demo_tests {
    use super::*;

    #[test]
    fn test_spin_scene_shape() {
        let scene = DemoKind::Spin.build_scene();

        assert_eq!(scene.nodes.len(), 1);
        assert_eq!(scene.nodes[0].primitives.len(), 1);
        assert!(!scene.nodes[0].primitives[0].material.is_line());
        assert_eq!(scene.lights.len(), 1);
    }

    #[test]
    fn test_wireframe_scene_groups_solid_and_lines() {
        let scene = DemoKind::Wireframe.build_scene();

        assert_eq!(scene.nodes.len(), 1);
        let primitives = &scene.nodes[0].primitives;
        assert_eq!(primitives.len(), 2);
        assert!(!primitives[0].material.is_line());
        assert!(primitives[1].material.is_line());

        // Both overlay parts share the same geometry
        assert_eq!(
            primitives[0].geometry.vertex_count(),
            primitives[1].geometry.vertex_count()
        );
    }

    #[test]
    fn test_demo_materials_carry_demo_colors() {
        let spin = DemoKind::Spin.build_scene();
        assert_eq!(
            spin.nodes[0].primitives[0].material.color(),
            color_from_hex(0x44a88)
        );

        let wireframe = DemoKind::Wireframe.build_scene();
        assert_eq!(
            wireframe.nodes[0].primitives[1].material.color(),
            color_from_hex(0xffff00)
        );
    }

    #[test]
    fn test_spin_rotation_equals_elapsed_seconds() {
        let mut scene = DemoKind::Spin.build_scene();

        // 1000 ms of elapsed time is one radian on each spinning axis
        DemoKind::Spin.update(&mut scene, 1000.0 / 1000.0);
        assert_eq!(scene.nodes[0].rotation, Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_spin_update_is_pure_in_time() {
        let mut scene = DemoKind::Spin.build_scene();

        DemoKind::Spin.update(&mut scene, 2.5);
        let first = scene.nodes[0].rotation;
        DemoKind::Spin.update(&mut scene, 2.5);

        assert_eq!(scene.nodes[0].rotation, first);
    }

    #[test]
    fn test_spin_rotation_is_monotonic() {
        let mut scene = DemoKind::Spin.build_scene();

        DemoKind::Spin.update(&mut scene, 1.0);
        let earlier = scene.nodes[0].rotation.x;
        DemoKind::Spin.update(&mut scene, 3.0);

        assert!(scene.nodes[0].rotation.x > earlier);
    }

    #[test]
    fn test_wireframe_update_is_noop() {
        let mut scene = DemoKind::Wireframe.build_scene();

        for time in [0.5f32, 1.0, 10.0, 100.0] {
            DemoKind::Wireframe.update(&mut scene, time);
            assert_eq!(scene.nodes[0].rotation, Vec3::ZERO);
        }
    }

    #[test]
    fn test_camera_defaults_match_demo() {
        let camera = DemoKind::Spin.build_camera(800.0 / 600.0);

        assert_eq!(camera.aspect, 800.0 / 600.0);
        assert_eq!(camera.position, Vec3::new(0.0, 0.0, 2.0));
        assert_eq!(camera.near, 0.1);
        assert_eq!(camera.far, 100.0);
    }

    #[test]
    fn test_only_wireframe_uses_orbit_controls() {
        assert!(!DemoKind::Spin.uses_orbit_controls());
        assert!(DemoKind::Wireframe.uses_orbit_controls());
    }
}
