//! Scene adapter boundary and the headless display list.

use glam::Vec3;

use crate::curve::Segment;
use crate::materials::Material;
use crate::shapes::primitives::Solid;

/// The four display operations the generator needs from a renderer.
///
/// `clear_display` removes previously added fractal geometry only; lights,
/// background and camera belong to the renderer and must survive it.
pub trait SceneAdapter {
    fn clear_display(&mut self);
    fn add_polyline(&mut self, points: &[Vec3], material: Material);
    fn add_segments(&mut self, segments: &[Segment], material: Material);
    fn add_solid(&mut self, solid: &Solid, material: Material);
}

/// One renderable object.
#[derive(Clone, Debug, PartialEq)]
pub enum DisplayItem {
    Polyline { points: Vec<Vec3>, material: Material },
    Segments { segments: Vec<Segment>, material: Material },
    Solid { solid: Solid, material: Material },
}

impl DisplayItem {
    /// Number of vertices the renderer will receive for this item.
    pub fn vertex_count(&self) -> usize {
        match self {
            Self::Polyline { points, .. } => points.len(),
            Self::Segments { segments, .. } => segments.len() * 2,
            Self::Solid { .. } => 0,
        }
    }

    pub fn material(&self) -> Material {
        match self {
            Self::Polyline { material, .. }
            | Self::Segments { material, .. }
            | Self::Solid { material, .. } => *material,
        }
    }

    /// Flatten to line vertices in draw order: strip order for polylines,
    /// start/end pairs for segments.
    pub fn line_vertices(&self) -> Vec<Vec3> {
        match self {
            Self::Polyline { points, .. } => points.clone(),
            Self::Segments { segments, .. } => {
                segments.iter().flat_map(|s| [s.start, s.end]).collect()
            }
            Self::Solid { .. } => Vec::new(),
        }
    }

    /// Re-issue this item against another adapter.
    pub fn replay(&self, scene: &mut impl SceneAdapter) {
        match self {
            Self::Polyline { points, material } => scene.add_polyline(points, *material),
            Self::Segments { segments, material } => scene.add_segments(segments, *material),
            Self::Solid { solid, material } => scene.add_solid(solid, *material),
        }
    }
}

/// Ordered collection of display items.
///
/// Used as the staging list during regeneration, as the wasm crate's scene
/// and as the test double.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DisplayList {
    items: Vec<DisplayItem>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[DisplayItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn vertex_count(&self) -> usize {
        self.items.iter().map(DisplayItem::vertex_count).sum()
    }

    /// Push every item into `scene` in order.
    pub fn replay_into(&self, scene: &mut impl SceneAdapter) {
        for item in &self.items {
            item.replay(scene);
        }
    }
}

impl SceneAdapter for DisplayList {
    fn clear_display(&mut self) {
        self.items.clear();
    }

    fn add_polyline(&mut self, points: &[Vec3], material: Material) {
        self.items.push(DisplayItem::Polyline { points: points.to_vec(), material });
    }

    fn add_segments(&mut self, segments: &[Segment], material: Material) {
        self.items.push(DisplayItem::Segments { segments: segments.to_vec(), material });
    }

    fn add_solid(&mut self, solid: &Solid, material: Material) {
        self.items.push(DisplayItem::Solid { solid: *solid, material });
    }
}
