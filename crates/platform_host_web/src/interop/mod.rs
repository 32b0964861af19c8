//! Shared wasm/non-wasm JavaScript interop glue.

#[cfg(target_arch = "wasm32")]
mod wasm {
    use js_sys::Promise;
    use wasm_bindgen::JsValue;
    use wasm_bindgen_futures::JsFuture;

    pub(crate) async fn await_promise(promise: Promise) -> Result<JsValue, String> {
        JsFuture::from(promise).await.map_err(js_error_to_string)
    }

    pub(crate) fn js_error_to_string(err: JsValue) -> String {
        if let Some(text) = err.as_string() {
            return text;
        }
        if let Ok(message) = js_sys::Reflect::get(&err, &JsValue::from_str("message")) {
            if let Some(text) = message.as_string() {
                return text;
            }
        }
        format!("{err:?}")
    }
}

#[cfg(target_arch = "wasm32")]
pub(crate) use wasm::{await_promise, js_error_to_string};
