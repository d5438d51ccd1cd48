use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

/// Helper function to use JavaScript's Math.random
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    u64::from_be_bytes([
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
    ])
}

/// Sets `fillStyle` by property assignment, avoiding the deprecated `JsValue` setter.
pub(crate) fn set_fill_style(ctx: &CanvasRenderingContext2d, color: &str) {
    if let Err(err) = js_sys::Reflect::set(
        ctx.as_ref(),
        &JsValue::from_str("fillStyle"),
        &JsValue::from_str(color),
    ) {
        log::error!("failed to set fill style {}: {:?}", color, err);
    }
}

/// Window inner size in CSS pixels.
pub(crate) fn viewport_size() -> Result<(f64, f64), JsValue> {
    let window = gloo::utils::window();
    let width = window.inner_width()?.as_f64().ok_or("inner width is not a number")?;
    let height = window.inner_height()?.as_f64().ok_or("inner height is not a number")?;
    Ok((width, height))
}
