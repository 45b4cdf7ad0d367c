use glam::Vec3;

/// Convert a 0xRRGGBB color to linear-ish float RGB
pub fn color_from_hex(hex: u32) -> Vec3 {
    Vec3::new(
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    )
}

/// Surface appearance of a primitive. `Shaded` draws lit triangles,
/// `Line` draws the unlit wireframe overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    Shaded { color: Vec3 },
    Line { color: Vec3 },
}

impl Material {
    pub fn shaded(hex: u32) -> Self {
        Self::Shaded {
            color: color_from_hex(hex),
        }
    }

    pub fn line(hex: u32) -> Self {
        Self::Line {
            color: color_from_hex(hex),
        }
    }

    pub fn color(&self) -> Vec3 {
        match self {
            Self::Shaded { color } | Self::Line { color } => *color,
        }
    }

    pub fn is_line(&self) -> bool {
        matches!(self, Self::Line { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_channels_decode() {
        let color = color_from_hex(0xff8000);
        assert_eq!(color.x, 1.0);
        assert!((color.y - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(color.z, 0.0);
    }

    #[test]
    fn material_kind_predicates() {
        assert!(!Material::shaded(0x515151).is_line());
        assert!(Material::line(0xffff00).is_line());
        assert_eq!(Material::line(0xffff00).color(), Vec3::new(1.0, 1.0, 0.0));
    }
}
