use rand::Rng;
use crate::api::types::ElementId;
use crate::components::element::AnimatedElement;
use crate::core::scene::Scene;
use super::decode::ElementDesc;

/// Turn decoded nodes into scene elements, each dropped by a random amount
/// in `[offset_min, offset_max)` below its rest position. An empty or
/// non-finite range drops every element by `offset_min` (or 0).
/// Returns the number of elements spawned.
pub fn spawn_elements<R: Rng + ?Sized>(
    scene: &mut Scene,
    descs: Vec<ElementDesc>,
    offset_min: f32,
    offset_max: f32,
    rng: &mut R,
) -> usize {
    let first = scene.len() as u32;
    let count = descs.len();
    for (i, desc) in descs.into_iter().enumerate() {
        let offset = sample_offset(offset_min, offset_max, rng);
        let element = AnimatedElement::new(ElementId(first + i as u32 + 1), desc.rest, offset)
            .with_name(desc.name);
        scene.spawn(element);
    }
    count
}

fn sample_offset<R: Rng + ?Sized>(min: f32, max: f32, rng: &mut R) -> f32 {
    if min.is_finite() && max.is_finite() && min < max {
        rng.gen_range(min..max)
    } else if min.is_finite() {
        min.max(0.0)
    } else {
        0.0
    }
}
