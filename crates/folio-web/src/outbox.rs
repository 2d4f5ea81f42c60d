//! Deferred delivery of scene events to the page.
//!
//! Page callbacks may call straight back into the bridge (register buffers,
//! read pointers, unmount). They therefore run only after the session borrow
//! is released.

use std::cell::RefCell;

use folio_engine::{SceneEvent, SceneSession, SessionHost};

/// A host that queues events instead of delivering them in place.
pub trait QueuedEvents {
    fn take_events(&mut self) -> Vec<SceneEvent>;
}

/// Run `step` on the session, then hand the queued events to `dispatch`
/// with the session free to borrow again.
pub fn step_and_dispatch<H, F>(session: &RefCell<SceneSession<H>>, step: F, mut dispatch: impl FnMut(SceneEvent))
where
    H: SessionHost + QueuedEvents,
    F: FnOnce(&mut SceneSession<H>),
{
    let events = {
        let mut s = session.borrow_mut();
        step(&mut s);
        s.host_mut().take_events()
    };
    for event in events {
        dispatch(event);
    }
}
