use cube_demo::geometry::Geometry;

#[cfg(test)]
mod geometry_tests {
    use super::*;

    #[test]
    fn test_unit_box_counts() {
        let geometry = Geometry::box_geometry(1.0, 1.0, 1.0, (1, 1, 1));

        // 6 faces x 4 corners, 6 faces x 2 triangles
        assert_eq!(geometry.vertex_count(), 24);
        assert_eq!(geometry.indices.len(), 36);
        assert_eq!(geometry.triangle_count(), 12);
    }

    #[test]
    fn test_segmented_box_counts() {
        let geometry = Geometry::box_geometry(1.0, 1.0, 1.0, (2, 2, 2));

        // 6 faces x 3x3 grid points, 6 faces x 2x2 quads x 2 triangles
        assert_eq!(geometry.vertex_count(), 54);
        assert_eq!(geometry.indices.len(), 144);
    }

    #[test]
    fn test_zero_segments_clamp_to_one() {
        let clamped = Geometry::box_geometry(1.0, 1.0, 1.0, (0, 0, 0));
        let unit = Geometry::box_geometry(1.0, 1.0, 1.0, (1, 1, 1));

        assert_eq!(clamped.vertex_count(), unit.vertex_count());
        assert_eq!(clamped.indices.len(), unit.indices.len());
    }

    #[test]
    fn test_indices_in_range() {
        let geometry = Geometry::box_geometry(2.0, 1.0, 3.0, (3, 2, 1));
        let count = geometry.vertex_count() as u32;

        assert!(geometry.indices.iter().all(|&i| i < count));
    }

    #[test]
    fn test_positions_within_half_extents() {
        let geometry = Geometry::box_geometry(1.0, 2.0, 3.0, (2, 2, 2));

        for vertex in &geometry.vertices {
            assert!(vertex.position[0].abs() <= 0.5 + 1e-6);
            assert!(vertex.position[1].abs() <= 1.0 + 1e-6);
            assert!(vertex.position[2].abs() <= 1.5 + 1e-6);
        }
    }

    #[test]
    fn test_normals_are_axis_aligned_units() {
        let geometry = Geometry::box_geometry(1.0, 1.0, 1.0, (2, 2, 2));

        for vertex in &geometry.vertices {
            let nonzero: Vec<f32> = vertex
                .normal
                .iter()
                .copied()
                .filter(|c| *c != 0.0)
                .collect();
            assert_eq!(nonzero.len(), 1);
            assert_eq!(nonzero[0].abs(), 1.0);
        }
    }

    #[test]
    fn test_every_face_direction_present() {
        let geometry = Geometry::box_geometry(1.0, 1.0, 1.0, (1, 1, 1));

        for axis in 0..3 {
            for sign in [1.0f32, -1.0] {
                assert!(
                    geometry
                        .vertices
                        .iter()
                        .any(|v| v.normal[axis] == sign),
                    "missing face normal: axis {axis} sign {sign}"
                );
            }
        }
    }

    #[test]
    fn test_wireframe_unit_box_edge_count() {
        let geometry = Geometry::box_geometry(1.0, 1.0, 1.0, (1, 1, 1));
        let lines = geometry.wireframe_indices();

        // Per face: 4 border edges + 1 diagonal, shared edges deduplicated
        assert_eq!(lines.len(), 6 * 5 * 2);
    }

    #[test]
    fn test_wireframe_segmented_box_edge_count() {
        let geometry = Geometry::box_geometry(1.0, 1.0, 1.0, (2, 2, 2));
        let lines = geometry.wireframe_indices();

        // Per 2x2 face grid: 6 horizontal + 6 vertical + 4 diagonal edges
        assert_eq!(lines.len(), 6 * 16 * 2);
    }

    #[test]
    fn test_wireframe_has_no_duplicate_edges() {
        let geometry = Geometry::box_geometry(1.0, 1.0, 1.0, (2, 2, 2));
        let lines = geometry.wireframe_indices();

        let mut seen = std::collections::HashSet::new();
        for pair in lines.chunks_exact(2) {
            let key = (pair[0].min(pair[1]), pair[0].max(pair[1]));
            assert!(seen.insert(key), "edge {key:?} emitted twice");
        }
    }
}
