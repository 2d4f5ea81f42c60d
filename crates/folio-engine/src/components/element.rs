use glam::Vec3;
use crate::api::types::ElementId;

/// Assembly state of a single element. The transition is one way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AssemblyPhase {
    /// Still rising toward its rest position.
    #[default]
    Animating,
    /// At rest. The assembly system no longer writes this element.
    Settled,
}

/// One renderable part of the loaded model.
///
/// The rest position is captured when the asset loads and cannot be changed
/// afterwards; only `pos` moves during assembly.
#[derive(Debug, Clone)]
pub struct AnimatedElement {
    /// Unique identifier.
    pub id: ElementId,
    /// Node name from the asset (may be empty).
    pub name: String,
    /// Current position in model space.
    pub pos: Vec3,
    rest: Vec3,
    offset: f32,
    phase: AssemblyPhase,
}

impl AnimatedElement {
    /// Create an element resting at `rest`, displaced `offset` units below it.
    pub fn new(id: ElementId, rest: Vec3, offset: f32) -> Self {
        let offset = offset.max(0.0);
        Self {
            id,
            name: String::new(),
            pos: rest - Vec3::Y * offset,
            rest,
            offset,
            phase: AssemblyPhase::Animating,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Designed resting position.
    pub fn rest(&self) -> Vec3 {
        self.rest
    }

    /// Vertical displacement at the start of assembly.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Y coordinate where assembly begins.
    pub fn start_y(&self) -> f32 {
        self.rest.y - self.offset
    }

    pub fn phase(&self) -> AssemblyPhase {
        self.phase
    }

    pub fn is_settled(&self) -> bool {
        self.phase == AssemblyPhase::Settled
    }

    /// Snap to rest and stop animating.
    pub(crate) fn settle(&mut self) {
        self.pos = self.rest;
        self.phase = AssemblyPhase::Settled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_below_rest() {
        let e = AnimatedElement::new(ElementId(1), Vec3::new(1.0, 2.0, 3.0), 0.5);
        assert_eq!(e.pos, Vec3::new(1.0, 1.5, 3.0));
        assert_eq!(e.start_y(), 1.5);
        assert_eq!(e.phase(), AssemblyPhase::Animating);
    }

    #[test]
    fn negative_offset_is_treated_as_zero() {
        let e = AnimatedElement::new(ElementId(1), Vec3::ONE, -0.3);
        assert_eq!(e.offset(), 0.0);
        assert_eq!(e.pos, Vec3::ONE);
    }

    #[test]
    fn settle_snaps_to_rest() {
        let mut e = AnimatedElement::new(ElementId(7), Vec3::new(0.0, 1.0, 0.0), 0.4).with_name("door");
        e.settle();
        assert!(e.is_settled());
        assert_eq!(e.pos, e.rest());
        assert_eq!(e.name, "door");
    }
}
