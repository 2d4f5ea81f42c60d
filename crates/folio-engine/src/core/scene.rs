use crate::api::types::ElementId;
use crate::components::element::AnimatedElement;

/// Element storage using a flat Vec.
/// A loaded model has tens to hundreds of parts, so linear lookup is fine.
#[derive(Debug, Default)]
pub struct Scene {
    elements: Vec<AnimatedElement>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            elements: Vec::with_capacity(64),
        }
    }

    /// Add an element to the scene.
    pub fn spawn(&mut self, element: AnimatedElement) {
        self.elements.push(element);
    }

    /// Get a reference to an element by ID.
    pub fn get(&self, id: ElementId) -> Option<&AnimatedElement> {
        self.elements.iter().find(|e| e.id == id)
    }

    /// Find the first element with the given node name.
    pub fn find_by_name(&self, name: &str) -> Option<&AnimatedElement> {
        self.elements.iter().find(|e| e.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AnimatedElement> {
        self.elements.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut AnimatedElement> {
        self.elements.iter_mut()
    }

    /// Number of elements still rising.
    pub fn animating_count(&self) -> usize {
        self.elements.iter().filter(|e| !e.is_settled()).count()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Drop all elements (geometry released on teardown).
    pub fn clear(&mut self) {
        self.elements.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn spawn_and_get() {
        let mut scene = Scene::new();
        let id = ElementId(1);
        scene.spawn(AnimatedElement::new(id, Vec3::new(1.0, 2.0, 3.0), 0.5));
        let e = scene.get(id).unwrap();
        assert_eq!(e.rest(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(scene.animating_count(), 1);
    }

    #[test]
    fn find_by_name() {
        let mut scene = Scene::new();
        scene.spawn(AnimatedElement::new(ElementId(1), Vec3::ZERO, 0.2).with_name("roof"));
        scene.spawn(AnimatedElement::new(ElementId(2), Vec3::ZERO, 0.2).with_name("door"));
        assert_eq!(scene.find_by_name("door").unwrap().id, ElementId(2));
        assert!(scene.find_by_name("chimney").is_none());
    }

    #[test]
    fn clear_empties_scene() {
        let mut scene = Scene::new();
        scene.spawn(AnimatedElement::new(ElementId(1), Vec3::ZERO, 0.2));
        scene.clear();
        assert!(scene.is_empty());
    }
}
