use crate::core::{ElementRect, SketchError, Viewport};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn query_container(document: &web::Document, selector: &str) -> Result<web::HtmlElement, SketchError> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
        .ok_or_else(|| SketchError::MissingContainerElement(selector.to_string()))
}

/// Container size in CSS pixels (`offsetWidth` / `offsetHeight`).
#[inline]
pub fn container_viewport(container: &web::HtmlElement) -> Viewport {
    Viewport::new(container.offset_width() as f32, container.offset_height() as f32)
}

#[inline]
pub fn device_pixel_ratio() -> f64 {
    web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0)
}

#[inline]
pub fn scroll_y() -> f32 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0) as f32
}

/// Bounding rect with `top` made document relative.
pub fn measure(element: &web::Element) -> ElementRect {
    let rect = element.get_bounding_client_rect();
    ElementRect::new(
        rect.top() as f32 + scroll_y(),
        rect.left() as f32,
        rect.width() as f32,
        rect.height() as f32,
    )
}

/// Append a fresh canvas to the container, stretched over it.
pub fn append_canvas(document: &web::Document, container: &web::HtmlElement) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let style = canvas.style();
    _ = style.set_property("display", "block");
    _ = style.set_property("width", "100%");
    _ = style.set_property("height", "100%");
    container
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(canvas)
}

/// Match the canvas backing store to the draw-buffer size.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, width: u32, height: u32) {
    if canvas.width() != width {
        canvas.set_width(width.max(1));
    }
    if canvas.height() != height {
        canvas.set_height(height.max(1));
    }
}

/// Image elements under `root` matching `selector`.
pub fn query_images(root: &web::Element, selector: &str) -> Vec<web::HtmlImageElement> {
    let Ok(list) = root.query_selector_all(selector) else {
        log::warn!("[dom] bad selector {:?}", selector);
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::HtmlImageElement>().ok())
        .collect()
}

/// Look up a `data-*` attribute (key without the prefix).
pub fn data_attribute(element: &web::HtmlElement, key: &str) -> Option<String> {
    element.get_attribute(&format!("data-{}", key))
}
