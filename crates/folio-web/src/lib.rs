//! wasm-bindgen bridge for the hero scene.
//!
//! One session at a time lives in a `thread_local!`. The page mounts it into
//! a container, reads the element and camera buffers straight out of wasm
//! memory each frame, and unmounts it when the view goes away.

pub mod browser;
pub mod loader;
pub mod outbox;

use std::cell::RefCell;
use std::rc::Rc;

use folio_engine::{AssetSource, BufferHandle, CameraUniform, SceneConfig, SceneSession};
use wasm_bindgen::prelude::*;

use crate::browser::{BrowserHost, SharedSession};
use crate::outbox::step_and_dispatch;

thread_local! {
    static HERO: RefCell<Option<SharedSession>> = const { RefCell::new(None) };
}

/// Run `f` against the mounted session, or return `default` if none is
/// (or if it is mid-update further up the stack).
fn with_session<R>(default: R, f: impl FnOnce(&mut SceneSession<BrowserHost>) -> R) -> R {
    let session = HERO.with(|cell| cell.borrow().clone());
    let Some(session) = session else {
        return default;
    };
    let result = match session.try_borrow_mut() {
        Ok(mut s) => f(&mut s),
        Err(_) => {
            log::debug!("hero session busy; skipping call");
            default
        }
    };
    result
}

/// Mount the hero scene into the element with id `container_id`.
///
/// `config_json` may be empty for defaults. `on_ready(element_count, failed)`
/// fires exactly once; `on_dispose(buffer_id)` fires for every buffer
/// registered through [`hero_register_buffer`] when the scene unmounts.
#[wasm_bindgen]
pub fn mount_hero(
    container_id: &str,
    config_json: &str,
    on_ready: js_sys::Function,
    on_dispose: js_sys::Function,
) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let config = if config_json.trim().is_empty() {
        SceneConfig::default()
    } else {
        SceneConfig::from_json(config_json).map_err(|e| JsValue::from_str(&e.to_string()))?
    };

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let container = window
        .document()
        .and_then(|doc| doc.get_element_by_id(container_id))
        .ok_or_else(|| JsValue::from_str(&format!("no element #{}", container_id)))?;

    // A remount replaces the previous view.
    unmount_hero();

    let source = AssetSource::new(config.asset_path.clone());
    let notify_target = on_ready.clone();
    let host = BrowserHost::new(window, container, on_ready, on_dispose);
    let session: SharedSession = Rc::new(RefCell::new(SceneSession::new(config, host)));
    BrowserHost::bind(&session);

    {
        let mut s = session.borrow_mut();
        let (w, h, dpr) = s.host().viewport();
        s.resize(w, h, dpr);
        s.start();
    }

    let weak = Rc::downgrade(&session);
    wasm_bindgen_futures::spawn_local(async move {
        let result = loader::load_model(&source).await;
        match weak.upgrade() {
            Some(session) => step_and_dispatch(
                &*session,
                |s| s.asset_loaded(result),
                |event| BrowserHost::notify(&notify_target, event),
            ),
            None => log::debug!("hero unmounted before {} arrived", source.file_name()),
        }
    });

    HERO.with(|cell| *cell.borrow_mut() = Some(session));
    log::info!("folio-web: hero mounted into #{}", container_id);
    Ok(())
}

/// Stop the frame loop, detach listeners and release every registered buffer.
/// Safe to call when nothing is mounted.
#[wasm_bindgen]
pub fn unmount_hero() {
    let session = HERO.with(|cell| cell.borrow_mut().take());
    if let Some(session) = session {
        // Busy only while a frame or load step further up the stack holds
        // it; that holder's reference is the last one and tears down on drop.
        if let Ok(mut s) = session.try_borrow_mut() {
            s.teardown();
        }
    }
}

/// Hand a renderer buffer id to the session so unmount disposes it.
#[wasm_bindgen]
pub fn hero_register_buffer(id: u32) {
    with_session((), |s| s.adopt_buffer(BufferHandle(id)));
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_elements_ptr() -> *const f32 {
    with_session(std::ptr::null(), |s| s.animator().element_buffer().instances_ptr())
}

#[wasm_bindgen]
pub fn get_element_count() -> u32 {
    with_session(0, |s| s.animator().element_buffer().instance_count())
}

/// Pointer to the camera uniform ([`CameraUniform::FLOATS`] floats).
#[wasm_bindgen]
pub fn get_camera_ptr() -> *const f32 {
    with_session(std::ptr::null(), |s| {
        s.animator().camera_uniform() as *const CameraUniform as *const f32
    })
}

/// 0 = loading, 1 = assembling, 2 = call-to-action may show.
#[wasm_bindgen]
pub fn get_reveal_state() -> u32 {
    with_session(0, |s| s.gate().state().code())
}

#[wasm_bindgen]
pub fn get_surface_width() -> u32 {
    with_session(0, |s| s.animator().camera().surface_size().0)
}

#[wasm_bindgen]
pub fn get_surface_height() -> u32 {
    with_session(0, |s| s.animator().camera().surface_size().1)
}
