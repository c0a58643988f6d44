//! DOM helpers: guarded listener/timeout registrations and canvas sizing.
//!
//! Every registration here is reversible by dropping the guard, so a
//! component's teardown is just dropping its fields.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// An event listener that deregisters itself on drop.
pub struct EventGuard {
    target: web::EventTarget,
    name: &'static str,
    capture: bool,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl EventGuard {
    pub fn new(
        target: &web::EventTarget,
        name: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Self {
        Self::with_capture(target, name, false, handler)
    }

    pub fn with_capture(
        target: &web::EventTarget,
        name: &'static str,
        capture: bool,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Self {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let _ = target.add_event_listener_with_callback_and_bool(
            name,
            closure.as_ref().unchecked_ref(),
            capture,
        );
        Self { target: target.clone(), name, capture, closure }
    }
}

impl Drop for EventGuard {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback_and_bool(
            self.name,
            self.closure.as_ref().unchecked_ref(),
            self.capture,
        );
    }
}

/// Pointer-event listener with the event pre-cast.
pub fn on_pointer(
    target: &web::EventTarget,
    name: &'static str,
    mut handler: impl FnMut(web::PointerEvent) + 'static,
) -> EventGuard {
    EventGuard::new(target, name, move |ev| {
        handler(ev.unchecked_into::<web::PointerEvent>());
    })
}

/// A one-shot window timeout, cleared on drop so it can never fire after the
/// owning component unmounts.
pub struct TimeoutGuard {
    id: i32,
    _closure: Closure<dyn FnMut()>,
}

impl TimeoutGuard {
    pub fn new(delay_ms: i32, handler: impl FnOnce() + 'static) -> Option<Self> {
        let window = web::window()?;
        let mut handler = Some(handler);
        let closure = Closure::wrap(Box::new(move || {
            if let Some(h) = handler.take() {
                h();
            }
        }) as Box<dyn FnMut()>);
        let id = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                delay_ms,
            )
            .ok()?;
        Some(Self { id, _closure: closure })
    }
}

impl Drop for TimeoutGuard {
    fn drop(&mut self) {
        if let Some(w) = web::window() {
            w.clear_timeout_with_handle(self.id);
        }
    }
}

/// Maintain canvas internal pixel size to match CSS size * devicePixelRatio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Fetch an element by id and cast it; `None` if missing or the wrong type.
pub fn element<T: JsCast>(document: &web::Document, id: &str) -> Option<T> {
    document.get_element_by_id(id).and_then(|el| el.dyn_into::<T>().ok())
}

/// Normalized pointer position over an element's bounding box, unclamped;
/// the parallax mapping clamps into the unit square.
pub fn pointer_uv(ev: &web::PointerEvent, el: &web::Element) -> [f32; 2] {
    let rect = el.get_bounding_client_rect();
    let w = rect.width() as f32;
    let h = rect.height() as f32;
    if w > 0.0 && h > 0.0 {
        [
            (ev.client_x() as f32 - rect.left() as f32) / w,
            (ev.client_y() as f32 - rect.top() as f32) / h,
        ]
    } else {
        [0.5, 0.5]
    }
}
