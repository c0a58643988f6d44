//! Custom cursor reticle: a DOM node trailing the pointer with easing.
//! Touch pointers are ignored; this is a desktop-only affordance.

use crate::dom::{self, EventGuard};
use crate::frame::FrameLoop;
use anyhow::anyhow;
use glam::Vec2;
use landing_core::{press_pulse_scale, CursorFollow, CURSOR_PRESS_HALF_SEC, CURSOR_VIEWPORT_MARGIN};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

const INTERACTIVE_SELECTOR: &str = "a, button, [role=\"button\"], .btn-neon";

pub struct CursorEffect {
    _loop: FrameLoop,
    _move: EventGuard,
    _down: EventGuard,
    _up: EventGuard,
    _over: EventGuard,
    _out: EventGuard,
    _resize: EventGuard,
}

impl CursorEffect {
    pub fn mount(document: &web::Document) -> anyhow::Result<Self> {
        let el: web::HtmlElement =
            dom::element(document, "cursor").ok_or_else(|| anyhow!("missing #cursor"))?;
        let window = web::window().ok_or_else(|| anyhow!("no window"))?;

        let center = Vec2::new(
            window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32 * 0.5,
            window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32 * 0.5,
        );
        let follow = Rc::new(RefCell::new(CursorFollow::new(center)));
        // Seconds since pointer-down; negative means no pulse in flight.
        let press_elapsed = Rc::new(Cell::new(-1.0_f32));

        let on_move = {
            let follow = follow.clone();
            dom::on_pointer(&window, "pointermove", move |ev| {
                if ev.pointer_type() == "touch" {
                    return;
                }
                follow
                    .borrow_mut()
                    .set_target(Vec2::new(ev.client_x() as f32, ev.client_y() as f32));
            })
        };
        let on_down = {
            let el = el.clone();
            let press = press_elapsed.clone();
            dom::on_pointer(&window, "pointerdown", move |_| {
                let _ = el.class_list().add_1("cursor-active");
                press.set(0.0);
            })
        };
        let on_up = {
            let el = el.clone();
            dom::on_pointer(&window, "pointerup", move |_| {
                let _ = el.class_list().remove_1("cursor-active");
            })
        };

        let hover_class = |el: &web::HtmlElement, ev: &web::Event, add: bool| {
            let interactive = ev
                .target()
                .and_then(|t| t.dyn_into::<web::Element>().ok())
                .and_then(|t| t.closest(INTERACTIVE_SELECTOR).ok().flatten())
                .is_some();
            if interactive {
                let _ = if add {
                    el.class_list().add_1("cursor-hover")
                } else {
                    el.class_list().remove_1("cursor-hover")
                };
            }
        };
        let on_over = {
            let el = el.clone();
            EventGuard::with_capture(&window, "mouseover", true, move |ev| {
                hover_class(&el, &ev, true);
            })
        };
        let on_out = {
            let el = el.clone();
            EventGuard::with_capture(&window, "mouseout", true, move |ev| {
                hover_class(&el, &ev, false);
            })
        };
        let on_resize = {
            let follow = follow.clone();
            EventGuard::new(&window, "resize", move |_| {
                if let Some(w) = web::window() {
                    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32;
                    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32;
                    follow
                        .borrow_mut()
                        .clamp_into(width, height, CURSOR_VIEWPORT_MARGIN);
                }
            })
        };

        let frame_loop = {
            let follow = follow.clone();
            let press = press_elapsed.clone();
            FrameLoop::start(move |dt| {
                follow.borrow_mut().step(dt);
                let mut scale = 1.0;
                let since = press.get();
                if since >= 0.0 {
                    scale = press_pulse_scale(since);
                    let next = since + dt;
                    press.set(if next > CURSOR_PRESS_HALF_SEC * 2.0 { -1.0 } else { next });
                }
                let p = follow.borrow().position();
                let transform = format!(
                    "translate3d({:.1}px, {:.1}px, 0) translate(-50%, -50%) scale({:.3})",
                    p.x, p.y, scale
                );
                let _ = el.style().set_property("transform", &transform);
                true
            })
        };

        Ok(Self {
            _loop: frame_loop,
            _move: on_move,
            _down: on_down,
            _up: on_up,
            _over: on_over,
            _out: on_out,
            _resize: on_resize,
        })
    }
}
