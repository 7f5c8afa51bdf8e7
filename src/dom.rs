use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Current viewport size in CSS pixels, falling back to 1x1 so position
/// normalization never divides by zero.
#[inline]
pub fn viewport_size() -> (f32, f32) {
    match web::window() {
        Some(w) => {
            let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
            let height = w
                .inner_height()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(1.0);
            (width.max(1.0) as f32, height.max(1.0) as f32)
        }
        None => (1.0, 1.0),
    }
}
