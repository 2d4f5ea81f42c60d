use folio_engine::{decode_scene, AssetError, AssetSource, ElementDesc};
use js_sys::Uint8Array;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// Fetch the model bytes and decode them into element descriptions.
pub async fn load_model(source: &AssetSource) -> Result<Vec<ElementDesc>, AssetError> {
    let bytes = fetch_bytes(source.uri()).await?;
    log::debug!("fetched {} ({} bytes)", source.file_name(), bytes.len());
    decode_scene(&bytes)
}

async fn fetch_bytes(url: &str) -> Result<Vec<u8>, AssetError> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| AssetError::Fetch(format!("request error: {:?}", e)))?;

    let window = web_sys::window().ok_or_else(|| AssetError::Fetch("no window".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| AssetError::Fetch(format!("fetch error: {:?}", e)))?;

    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| AssetError::Fetch("response is not a Response".into()))?;

    if !resp.ok() {
        return Err(AssetError::Fetch(format!("HTTP {} for {}", resp.status(), url)));
    }

    let buffer = JsFuture::from(
        resp.array_buffer()
            .map_err(|e| AssetError::Fetch(format!("body promise error: {:?}", e)))?,
    )
    .await
    .map_err(|e| AssetError::Fetch(format!("body error: {:?}", e)))?;

    Ok(Uint8Array::new(&buffer).to_vec())
}
