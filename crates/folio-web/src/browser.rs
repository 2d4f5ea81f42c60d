use std::cell::RefCell;
use std::rc::{Rc, Weak};

use folio_engine::{
    BufferHandle, FrameHandle, FrameScheduler, ListenerHandle, ResourceSink, SceneEvent,
    SceneSession, SessionHost, ViewportEvents,
};

use crate::outbox::{step_and_dispatch, QueuedEvents};
use js_sys::Function;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Window};

pub type SharedSession = Rc<RefCell<SceneSession<BrowserHost>>>;

/// Browser side of a hero session: `requestAnimationFrame`, the window
/// resize listener, and the page's ready/dispose callbacks.
///
/// The callbacks live here rather than being forgotten, so dropping the
/// session unhooks them from the page. Scene events are queued and delivered
/// to `on_ready` by [`step_and_dispatch`] once the session is released.
pub struct BrowserHost {
    window: Window,
    container: Element,
    on_ready: Function,
    on_dispose: Function,
    frame_cb: Option<Closure<dyn FnMut(f64)>>,
    resize_cb: Option<Closure<dyn FnMut(web_sys::Event)>>,
    queued: Vec<SceneEvent>,
}

impl BrowserHost {
    pub fn new(window: Window, container: Element, on_ready: Function, on_dispose: Function) -> Self {
        Self {
            window,
            container,
            on_ready,
            on_dispose,
            frame_cb: None,
            resize_cb: None,
            queued: Vec::new(),
        }
    }

    pub fn on_ready(&self) -> Function {
        self.on_ready.clone()
    }

    /// Deliver one scene event to the page's ready callback.
    pub fn notify(on_ready: &Function, event: SceneEvent) {
        match event {
            SceneEvent::Ready { element_count, failed } => {
                let result = on_ready.call2(
                    &JsValue::NULL,
                    &JsValue::from(element_count),
                    &JsValue::from_bool(failed),
                );
                if let Err(e) = result {
                    log::warn!("ready callback threw: {:?}", e);
                }
            }
        }
    }

    /// Container size in CSS pixels plus the device pixel ratio.
    pub fn viewport(&self) -> (f32, f32, f32) {
        (
            self.container.client_width() as f32,
            self.container.client_height() as f32,
            self.window.device_pixel_ratio() as f32,
        )
    }

    /// Install the frame and resize callbacks. They hold only a weak
    /// reference, so a callback firing after unmount is a no-op.
    pub fn bind(session: &SharedSession) {
        let weak: Weak<RefCell<SceneSession<BrowserHost>>> = Rc::downgrade(session);
        let on_ready = session.borrow().host().on_ready();

        let frame_weak = weak.clone();
        let frame_cb = Closure::<dyn FnMut(f64)>::new(move |now_ms: f64| {
            if let Some(session) = frame_weak.upgrade() {
                step_and_dispatch(
                    &*session,
                    |s| {
                        s.on_frame(now_ms);
                    },
                    |event| BrowserHost::notify(&on_ready, event),
                );
            }
        });

        let resize_cb = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
            if let Some(session) = weak.upgrade() {
                let mut session = session.borrow_mut();
                let (w, h, dpr) = session.host().viewport();
                session.resize(w, h, dpr);
            }
        });

        let mut session = session.borrow_mut();
        let host = session.host_mut();
        host.frame_cb = Some(frame_cb);
        host.resize_cb = Some(resize_cb);
    }

    fn callback<T: ?Sized>(closure: &Closure<T>) -> &Function {
        closure.as_ref().unchecked_ref()
    }
}

impl FrameScheduler for BrowserHost {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        let cb = self.frame_cb.as_ref()?;
        match self.window.request_animation_frame(Self::callback(cb)) {
            Ok(id) => Some(FrameHandle(id)),
            Err(e) => {
                log::error!("requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if let Err(e) = self.window.cancel_animation_frame(handle.0) {
            log::warn!("cancelAnimationFrame failed: {:?}", e);
        }
    }
}

impl ViewportEvents for BrowserHost {
    fn attach_resize(&mut self) -> Option<ListenerHandle> {
        let cb = self.resize_cb.as_ref()?;
        match self.window.add_event_listener_with_callback("resize", Self::callback(cb)) {
            Ok(()) => Some(ListenerHandle(0)),
            Err(e) => {
                log::warn!("could not attach resize listener: {:?}", e);
                None
            }
        }
    }

    fn detach_resize(&mut self, _handle: ListenerHandle) {
        if let Some(cb) = self.resize_cb.as_ref() {
            if let Err(e) = self
                .window
                .remove_event_listener_with_callback("resize", Self::callback(cb))
            {
                log::warn!("could not detach resize listener: {:?}", e);
            }
        }
    }
}

impl ResourceSink for BrowserHost {
    fn release(&mut self, buffer: BufferHandle) {
        if let Err(e) = self.on_dispose.call1(&JsValue::NULL, &JsValue::from(buffer.0)) {
            log::warn!("dispose callback threw for buffer {}: {:?}", buffer.0, e);
        }
    }
}

impl SessionHost for BrowserHost {
    fn scene_event(&mut self, event: SceneEvent) {
        self.queued.push(event);
    }
}

impl QueuedEvents for BrowserHost {
    fn take_events(&mut self) -> Vec<SceneEvent> {
        std::mem::take(&mut self.queued)
    }
}
