use crate::input::InputState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Queue enter/leave events for each tracked element, keyed by its index.
pub fn wire_hover_handlers(elements: &[(usize, web::Element)], input: &Rc<RefCell<InputState>>) {
    for (index, element) in elements {
        for (event, entered) in [("mouseenter", true), ("mouseleave", false)] {
            let input = input.clone();
            let index = *index;
            let closure = Closure::wrap(Box::new(move || {
                input.borrow_mut().hover(index, entered);
            }) as Box<dyn FnMut()>);
            _ = element.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}
