use fractal_core::materials::Material;
use fractal_core::shapes::primitives::Solid;
use fractal_core::{DisplayItem, DisplayList, FractalConfig, FractalGenerator, FractalKind};
use rand::rngs::StdRng;
use wasm_bindgen::prelude::*;

/// Line vertex: 16 bytes, read by the JS side as a Float32Array.
#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
struct GpuVertex {
    position: [f32; 3], // 12 bytes
    item: f32,          //  4 bytes, index of the owning display item
}

/// Draw range for one display item: 16 bytes, read as a Uint32Array.
#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
struct GpuItem {
    first: u32, // first vertex, or solid index for solids
    count: u32, // vertex count (0 for solids)
    kind: u32,  // ITEM_POLYLINE / ITEM_SEGMENTS / ITEM_SOLID
    color: u32, // 0xRRGGBB
}

/// Solid record: 64 bytes, read as a Float32Array.
#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
struct GpuSolid {
    center: [f32; 3],
    kind: f32,        // 0 = rod, 1 = disc
    size: [f32; 3],   // rod: length, height, width; disc: radius, 0, 0
    segments: f32,    // disc tessellation, 0 for rods
    rotation: [f32; 4],
    opacity: f32,
    roughness: f32,
    metalness: f32,
    clearcoat: f32,
}

const ITEM_POLYLINE: u32 = 0;
const ITEM_SEGMENTS: u32 = 1;
const ITEM_SOLID: u32 = 2;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
}

/// Fractal geometry for the page's three.js scene.
///
/// The page calls `regenerate` on every control change, then rebuilds its
/// line and mesh objects from the three flat buffers.
#[wasm_bindgen]
pub struct FractalScene {
    generator: FractalGenerator<StdRng>,
    display: DisplayList,
    vertex_buffer: Vec<GpuVertex>,
    item_buffer: Vec<GpuItem>,
    solid_buffer: Vec<GpuSolid>,
}

#[wasm_bindgen]
impl FractalScene {
    #[wasm_bindgen(constructor)]
    pub fn new() -> FractalScene {
        Self::with_generator(FractalGenerator::from_entropy(FractalConfig::default()))
    }

    /// Scene with a fixed random seed, for reproducible screenshots.
    #[wasm_bindgen]
    pub fn seeded(seed: u32) -> FractalScene {
        Self::with_generator(FractalGenerator::seeded(FractalConfig::default(), seed as u64))
    }

    /// Scene with config overrides, e.g. `{ "hex_radius": 8.0 }`.
    #[wasm_bindgen]
    pub fn with_config(config: JsValue) -> Result<FractalScene, JsValue> {
        let config: FractalConfig = serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))?;
        config.validate().map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self::with_generator(FractalGenerator::from_entropy(config)))
    }

    /// Rebuild the figure. Returns the build time in milliseconds. On error
    /// the previous buffers stay valid.
    #[wasm_bindgen]
    pub fn regenerate(&mut self, kind: &str, iterations: u32, layers: u32) -> Result<f32, JsValue> {
        let start = js_sys::Date::now();
        self.generator
            .regenerate_named(kind, iterations, layers, &mut self.display)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.write_gpu_output();
        let elapsed = js_sys::Date::now() - start;
        Ok(elapsed as f32)
    }

    /// Selector strings accepted by `regenerate`.
    #[wasm_bindgen]
    pub fn kinds() -> js_sys::Array {
        FractalKind::ALL
            .iter()
            .map(|kind| JsValue::from_str(kind.selector()))
            .collect()
    }

    #[wasm_bindgen]
    pub fn max_depth(&self) -> u32 {
        self.generator.config.max_depth
    }

    #[wasm_bindgen]
    pub fn max_layers(&self) -> u32 {
        self.generator.config.max_layers
    }

    #[wasm_bindgen]
    pub fn item_count(&self) -> usize {
        self.item_buffer.len()
    }

    #[wasm_bindgen]
    pub fn get_vertex_buffer_ptr(&self) -> *const f32 {
        self.vertex_buffer.as_ptr() as *const f32
    }

    #[wasm_bindgen]
    pub fn get_vertex_buffer_byte_length(&self) -> usize {
        self.vertex_buffer.len() * std::mem::size_of::<GpuVertex>()
    }

    #[wasm_bindgen]
    pub fn get_item_buffer_ptr(&self) -> *const u32 {
        self.item_buffer.as_ptr() as *const u32
    }

    #[wasm_bindgen]
    pub fn get_item_buffer_byte_length(&self) -> usize {
        self.item_buffer.len() * std::mem::size_of::<GpuItem>()
    }

    #[wasm_bindgen]
    pub fn get_solid_buffer_ptr(&self) -> *const f32 {
        self.solid_buffer.as_ptr() as *const f32
    }

    #[wasm_bindgen]
    pub fn get_solid_buffer_byte_length(&self) -> usize {
        self.solid_buffer.len() * std::mem::size_of::<GpuSolid>()
    }
}

impl Default for FractalScene {
    fn default() -> Self {
        Self::new()
    }
}

impl FractalScene {
    fn with_generator(generator: FractalGenerator<StdRng>) -> FractalScene {
        web_sys::console::log_1(
            &format!(
                "WASM FractalScene created: max depth {}, max layers {}",
                generator.config.max_depth, generator.config.max_layers
            )
            .into(),
        );
        FractalScene {
            generator,
            display: DisplayList::new(),
            vertex_buffer: Vec::new(),
            item_buffer: Vec::new(),
            solid_buffer: Vec::new(),
        }
    }

    fn write_gpu_output(&mut self) {
        self.vertex_buffer.clear();
        self.item_buffer.clear();
        self.solid_buffer.clear();

        for (index, item) in self.display.items().iter().enumerate() {
            let color = item.material().color();
            match item {
                DisplayItem::Polyline { .. } | DisplayItem::Segments { .. } => {
                    let kind = if matches!(item, DisplayItem::Polyline { .. }) {
                        ITEM_POLYLINE
                    } else {
                        ITEM_SEGMENTS
                    };
                    let first = self.vertex_buffer.len() as u32;
                    self.vertex_buffer.extend(item.line_vertices().into_iter().map(|p| GpuVertex {
                        position: p.to_array(),
                        item: index as f32,
                    }));
                    let count = self.vertex_buffer.len() as u32 - first;
                    self.item_buffer.push(GpuItem { first, count, kind, color });
                }
                DisplayItem::Solid { solid, material } => {
                    let first = self.solid_buffer.len() as u32;
                    self.solid_buffer.push(gpu_solid(solid, material));
                    self.item_buffer.push(GpuItem { first, count: 0, kind: ITEM_SOLID, color });
                }
            }
        }
    }
}

fn gpu_solid(solid: &Solid, material: &Material) -> GpuSolid {
    let (opacity, roughness, metalness, clearcoat) = match material {
        Material::Glass(glass) => {
            (glass.opacity, glass.roughness, glass.metalness, glass.clearcoat)
        }
        Material::Line { .. } => (1.0, 1.0, 0.0, 0.0),
    };
    match *solid {
        Solid::Rod { center, length, height, width, rotation } => GpuSolid {
            center: center.to_array(),
            kind: 0.0,
            size: [length, height, width],
            segments: 0.0,
            rotation: rotation.to_array(),
            opacity,
            roughness,
            metalness,
            clearcoat,
        },
        Solid::Disc { center, radius, segments } => GpuSolid {
            center: center.to_array(),
            kind: 1.0,
            size: [radius, 0.0, 0.0],
            segments: segments as f32,
            rotation: [0.0, 0.0, 0.0, 1.0],
            opacity,
            roughness,
            metalness,
            clearcoat,
        },
    }
}
