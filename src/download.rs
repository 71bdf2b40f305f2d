use wasm_bindgen::{JsCast, JsValue};

/// Name of the host page's global report-download function.
pub const DOWNLOAD_HOOK: &str = "downloadBatchReport";

/// Call the host page's `downloadBatchReport(batchId)`.
pub fn download_batch_report(batch_id: String) {
    if let Err(e) = call_global(DOWNLOAD_HOOK, &batch_id) {
        tracing::error!("Cannot download report for {}: {}", batch_id, e);
    }
}

fn call_global(name: &str, arg: &str) -> Result<(), String> {
    let window: JsValue = web_sys::window().ok_or("no window")?.into();
    let func = js_sys::Reflect::get(&window, &JsValue::from_str(name))
        .map_err(|_| format!("cannot read window.{}", name))?
        .dyn_into::<js_sys::Function>()
        .map_err(|_| format!("window.{} is not a function", name))?;
    func.call1(&JsValue::NULL, &JsValue::from_str(arg))
        .map(|_| ())
        .map_err(|e| e.as_string().unwrap_or_else(|| format!("{} threw", name)))
}
