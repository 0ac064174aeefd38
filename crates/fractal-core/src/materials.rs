/// Render hint attached to every display item.
///
/// The core never renders; the scene adapter maps these onto whatever its
/// renderer offers (three.js `LineBasicMaterial` / `MeshPhysicalMaterial`
/// on the browser side).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Material {
    Line { color: u32 },
    Glass(GlassMaterial),
}

/// Translucent physical material used by the hex-stick snowflake.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlassMaterial {
    pub color: u32,
    pub opacity: f32,
    pub roughness: f32,
    pub metalness: f32,
    pub clearcoat: f32,
    pub clearcoat_roughness: f32,
}

impl Material {
    pub const SKY_BLUE: Self = Self::Line { color: 0x87ceeb };
    pub const WHITE: Self = Self::Line { color: 0xffffff };
    pub const RED: Self = Self::Line { color: 0xff0000 };
    pub const GREEN: Self = Self::Line { color: 0x00ff00 };

    /// Light blue glass: transparent, glossy, half metallic.
    pub const GLASS: Self = Self::Glass(GlassMaterial {
        color: 0x87ceeb,
        opacity: 0.6,
        roughness: 0.1,
        metalness: 0.5,
        clearcoat: 1.0,
        clearcoat_roughness: 0.1,
    });

    pub fn color(&self) -> u32 {
        match self {
            Self::Line { color } => *color,
            Self::Glass(glass) => glass.color,
        }
    }
}
