#![cfg(target_arch = "wasm32")]
use crate::constants::CONTAINER_SELECTOR;
use crate::core::{DrawBufferSize, ScrollTracker, Sketch, SketchOptions, Variant};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod preload;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Trace).ok();
    log::set_max_level(log::LevelFilter::Info);
    log::info!("dom-sketch starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Images whose planes the variant tracks.
fn tracked_images(document: &web::Document, options: &SketchOptions) -> Vec<web::HtmlImageElement> {
    let Some(root) = document.document_element() else {
        return Vec::new();
    };
    match options.variant {
        Variant::Ocean => dom::query_images(&root, &options.ocean_selector),
        Variant::Images | Variant::Post => dom::query_images(&root, &options.image_selector),
        Variant::Cube | Variant::Plane => Vec::new(),
    }
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let container = dom::query_container(&document, CONTAINER_SELECTOR)?;
    let options = SketchOptions::from_lookup(|key| dom::data_attribute(&container, key));
    log::set_max_level(options.log_level);
    let canvas = dom::append_canvas(&document, &container)?;

    // Nothing renders until fonts and images are decoded, so DOM rects are final
    let images = tracked_images(&document, &options);
    let report = preload::fonts_and_images(&document, &images).await;

    let viewport = dom::container_viewport(&container);
    let dpr = dom::device_pixel_ratio();
    let size = DrawBufferSize::from_viewport(viewport, dpr);
    dom::sync_canvas_backing_size(&canvas, size.physical_width, size.physical_height);

    let mut gpu = render::GpuState::new(&canvas, options.variant == Variant::Post).await?;
    let mut sketch = Sketch::new(&options, viewport);

    let mut elements: Vec<(usize, web::Element)> = Vec::with_capacity(images.len());
    for (index, image) in images.iter().enumerate() {
        if !report.is_ready(index + 1) {
            log::warn!("[init] skipping image {} that failed to load", image.src());
            continue;
        }
        let slot = match gpu.upload_image(image) {
            Ok(slot) => slot,
            Err(e) => {
                log::warn!("[init] {}", e);
                continue;
            }
        };
        let element: web::Element = image.clone().into();
        if sketch.track_element(index, dom::measure(&element), slot) {
            elements.push((index, element));
        }
    }
    log::info!("[init] tracking {} element(s)", elements.len());
    sketch.resize(viewport, dpr, &mut gpu);

    let input = Rc::new(RefCell::new(input::InputState::default()));
    events::wire_resize(input.clone());
    events::wire_pointer_handlers(&canvas, input.clone());
    events::wire_hover_handlers(&elements, &input);

    let mut scroll = ScrollTracker::default();
    scroll.jump_to(dom::scroll_y());

    frame::start_loop(frame::FrameContext {
        sketch,
        gpu,
        input,
        scroll,
        started: Instant::now(),
        container,
        elements,
    });
    Ok(())
}
