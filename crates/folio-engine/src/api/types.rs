/// Unique identifier for an animated element in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(pub u32);

/// Notifications from the animator to the host page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneEvent {
    /// The asset load attempt finished. Fired once per session, on success
    /// and on failure alike, so the page can move on either way.
    Ready { element_count: u32, failed: bool },
}
