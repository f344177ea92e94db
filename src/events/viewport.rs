use crate::input::InputState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Flag a resize; the next frame re-reads the container and applies it.
pub fn wire_resize(input: Rc<RefCell<InputState>>) {
    let closure = Closure::wrap(Box::new(move || {
        input.borrow_mut().resized = true;
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
