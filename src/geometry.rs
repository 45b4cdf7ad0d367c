use std::collections::HashSet;

use bytemuck::{Pod, Zeroable};

/// Vertex layout shared by the solid and line pipelines
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// CPU-side indexed triangle mesh. Built once at scene setup and uploaded
/// by the renderer; never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Geometry {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Geometry {
    /// Axis-aligned box centered on the origin. Each face is a grid of
    /// `segments` quads so the wireframe overlay has interior lines to show.
    pub fn box_geometry(width: f32, height: f32, depth: f32, segments: (u32, u32, u32)) -> Self {
        let (sw, sh, sd) = (segments.0.max(1), segments.1.max(1), segments.2.max(1));

        let mut geometry = Self {
            vertices: Vec::new(),
            indices: Vec::new(),
        };

        // One call per face: (u, v, w) pick which world axes the face's local
        // x/y/normal map onto; the sign of `w_half` is the face normal.
        geometry.build_face(2, 1, 0, -1.0, -1.0, depth, height, width / 2.0, sd, sh);
        geometry.build_face(2, 1, 0, 1.0, -1.0, depth, height, -width / 2.0, sd, sh);
        geometry.build_face(0, 2, 1, 1.0, 1.0, width, depth, height / 2.0, sw, sd);
        geometry.build_face(0, 2, 1, 1.0, -1.0, width, depth, -height / 2.0, sw, sd);
        geometry.build_face(0, 1, 2, 1.0, -1.0, width, height, depth / 2.0, sw, sh);
        geometry.build_face(0, 1, 2, -1.0, -1.0, width, height, -depth / 2.0, sw, sh);

        geometry
    }

    #[allow(clippy::too_many_arguments)]
    fn build_face(
        &mut self,
        u: usize,
        v: usize,
        w: usize,
        udir: f32,
        vdir: f32,
        size_u: f32,
        size_v: f32,
        w_half: f32,
        grid_u: u32,
        grid_v: u32,
    ) {
        let seg_u = size_u / grid_u as f32;
        let seg_v = size_v / grid_v as f32;
        let half_u = size_u / 2.0;
        let half_v = size_v / 2.0;

        let base = self.vertices.len() as u32;
        let normal_sign = if w_half >= 0.0 { 1.0 } else { -1.0 };

        for iy in 0..=grid_v {
            let y = iy as f32 * seg_v - half_v;
            for ix in 0..=grid_u {
                let x = ix as f32 * seg_u - half_u;

                let mut position = [0.0f32; 3];
                position[u] = x * udir;
                position[v] = y * vdir;
                position[w] = w_half;

                let mut normal = [0.0f32; 3];
                normal[w] = normal_sign;

                self.vertices.push(Vertex { position, normal });
            }
        }

        let stride = grid_u + 1;
        for iy in 0..grid_v {
            for ix in 0..grid_u {
                let a = base + ix + stride * iy;
                let b = base + ix + stride * (iy + 1);
                let c = base + ix + 1 + stride * (iy + 1);
                let d = base + ix + 1 + stride * iy;

                self.indices.extend_from_slice(&[a, b, d]);
                self.indices.extend_from_slice(&[b, c, d]);
            }
        }
    }

    /// Line-list indices covering every triangle edge exactly once. Edges
    /// shared by two triangles are emitted a single time.
    pub fn wireframe_indices(&self) -> Vec<u32> {
        let mut seen = HashSet::new();
        let mut lines = Vec::new();

        for triangle in self.indices.chunks_exact(3) {
            for (i, j) in [
                (triangle[0], triangle[1]),
                (triangle[1], triangle[2]),
                (triangle[2], triangle[0]),
            ] {
                let key = (i.min(j), i.max(j));
                if seen.insert(key) {
                    lines.push(i);
                    lines.push(j);
                }
            }
        }

        lines
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}
