use crate::core::{
    ElementRect, FrameInput, FrameLoop, FrameScheduler, ResizeRequest, ScrollTracker, Sketch,
    TickHandle,
};
use crate::dom;
use crate::input::InputState;
use crate::render::GpuState;
use glam::Vec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the per-frame tick touches.
pub struct FrameContext {
    pub sketch: Sketch,
    pub gpu: GpuState,
    pub input: Rc<RefCell<InputState>>,
    pub scroll: ScrollTracker,
    pub started: Instant,
    pub container: web::HtmlElement,
    /// Tracked DOM elements by index, re-measured on resize.
    pub elements: Vec<(usize, web::Element)>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        self.scroll.update(dom::scroll_y());

        let mut input = FrameInput::at(self.started.elapsed().as_secs_f32());
        input.scroll = self.scroll.offset();
        input.scroll_speed = self.scroll.uniform_speed();
        let resize = if self.input.borrow_mut().take_resize() {
            Some(self.resize_request())
        } else {
            None
        };
        let viewport = resize
            .as_ref()
            .map_or_else(|| self.sketch.viewport(), |r| r.viewport);
        self.input
            .borrow_mut()
            .drain_into(&mut input, Vec2::new(viewport.width, viewport.height));
        input.resize = resize;

        if let Err(e) = self.sketch.frame(&input, &mut self.gpu) {
            log::warn!("[frame] {}", e);
        }
    }

    fn resize_request(&self) -> ResizeRequest {
        let rects: Vec<(usize, ElementRect)> = self
            .elements
            .iter()
            .map(|(index, element)| (*index, dom::measure(element)))
            .collect();
        ResizeRequest {
            viewport: dom::container_viewport(&self.container),
            device_pixel_ratio: dom::device_pixel_ratio(),
            rects,
        }
    }
}

/// `requestAnimationFrame` behind [`FrameScheduler`]. The callback slot is
/// filled once the loop closure exists.
pub struct RafScheduler {
    callback: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl FrameScheduler for RafScheduler {
    fn request_tick(&mut self) -> Option<TickHandle> {
        let window = web::window()?;
        let slot = self.callback.borrow();
        let callback = slot.as_ref()?;
        window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .ok()
            .map(TickHandle)
    }

    fn cancel(&mut self, handle: TickHandle) {
        if let Some(window) = web::window() {
            _ = window.cancel_animation_frame(handle.0);
        }
    }
}

/// Drive `ctx` from `requestAnimationFrame` until the page goes away. The
/// loop keeps itself alive through its own callback.
pub fn start_loop(mut ctx: FrameContext) {
    let callback: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let frame_loop = Rc::new(RefCell::new(FrameLoop::new(RafScheduler {
        callback: callback.clone(),
    })));
    let loop_tick = frame_loop.clone();
    *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        loop_tick.borrow_mut().on_tick(|| ctx.frame());
    }) as Box<dyn FnMut()>));
    frame_loop.borrow_mut().start();
}
