use bytemuck::{Pod, Zeroable};
use crate::core::scene::Scene;

/// Per-element transform read by the host renderer.
/// Must match the JS side: 4 floats = 16 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct ElementInstance {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// 1.0 once the element has settled at rest, 0.0 while rising.
    pub settled: f32,
}

impl ElementInstance {
    pub const FLOATS: usize = 4;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Element transforms for the current frame, in scene order.
#[derive(Debug, Default)]
pub struct ElementBuffer {
    pub instances: Vec<ElementInstance>,
}

impl ElementBuffer {
    pub fn new() -> Self {
        Self {
            instances: Vec::with_capacity(64),
        }
    }

    /// Rebuild from the scene's current positions.
    pub fn rebuild(&mut self, scene: &Scene) {
        self.instances.clear();
        self.instances.extend(scene.iter().map(|e| ElementInstance {
            x: e.pos.x,
            y: e.pos.y,
            z: e.pos.z,
            settled: if e.is_settled() { 1.0 } else { 0.0 },
        }));
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Raw pointer to instance data for reads from wasm memory.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }

    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }
}
