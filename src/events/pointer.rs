use crate::input::InputState;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_pointer_handlers(canvas: &web::HtmlCanvasElement, input: Rc<RefCell<InputState>>) {
    wire_pointermove(&input);
    wire_pointerdown(canvas, &input);
    wire_pointerup(&input);
    wire_pointerleave(&input);
}

fn wire_pointermove(input: &Rc<RefCell<InputState>>) {
    let input = input.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let client = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        input.borrow_mut().pointer_moved(client);
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerdown(canvas: &web::HtmlCanvasElement, input: &Rc<RefCell<InputState>>) {
    let input = input.clone();
    let canvas_capture = canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let mut state = input.borrow_mut();
        state.dragging = true;
        state.pointer = Some(Vec2::new(ev.client_x() as f32, ev.client_y() as f32));
        _ = canvas_capture.set_pointer_capture(ev.pointer_id());
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(input: &Rc<RefCell<InputState>>) {
    let input = input.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        input.borrow_mut().dragging = false;
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerleave(input: &Rc<RefCell<InputState>>) {
    let input = input.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        let mut state = input.borrow_mut();
        state.pointer = None;
        state.dragging = false;
    }) as Box<dyn FnMut(_)>);
    if let Some(root) = crate::dom::window_document().and_then(|d| d.document_element()) {
        _ = root.add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
