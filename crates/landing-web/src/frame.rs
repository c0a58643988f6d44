//! Cancellable requestAnimationFrame loop.
//!
//! `stop()` cancels the pending frame handle rather than just flipping a
//! flag, so no further callback runs after it returns; the liveness flag
//! covers a callback that was already delivered to the task queue.

use instant::Instant;
use landing_core::MAX_FRAME_DT;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct LoopInner {
    alive: Cell<bool>,
    handle: Cell<Option<i32>>,
    tick: RefCell<Option<Closure<dyn FnMut()>>>,
}

/// A self-rescheduling per-frame callback. Dropping the loop stops it and
/// frees the callback together with everything it captured.
pub struct FrameLoop {
    inner: Rc<LoopInner>,
}

impl FrameLoop {
    /// Start ticking. The callback receives the elapsed seconds since the
    /// previous tick (clamped to [`MAX_FRAME_DT`]) and returns whether to
    /// keep running; returning `false` ends the loop after this frame.
    pub fn start(mut callback: impl FnMut(f32) -> bool + 'static) -> Self {
        let inner = Rc::new(LoopInner {
            alive: Cell::new(true),
            handle: Cell::new(None),
            tick: RefCell::new(None),
        });
        let inner_tick = inner.clone();
        let mut last = Instant::now();
        *inner.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if !inner_tick.alive.get() {
                return;
            }
            inner_tick.handle.set(None);
            let now = Instant::now();
            let dt = (now - last).as_secs_f32().min(MAX_FRAME_DT);
            last = now;
            if callback(dt) {
                schedule(&inner_tick);
            } else {
                inner_tick.alive.set(false);
            }
        }) as Box<dyn FnMut()>));

        let lp = Self { inner };
        schedule(&lp.inner);
        lp
    }

    /// Guarantee no further callback fires after this returns. Must not be
    /// called from inside the loop's own callback; end a loop from within by
    /// returning `false` instead.
    pub fn stop(&self) {
        self.inner.alive.set(false);
        if let Some(id) = self.inner.handle.take() {
            if let Some(w) = web::window() {
                let _ = w.cancel_animation_frame(id);
            }
        }
        // Free the closure; it holds the captured component state.
        self.inner.tick.borrow_mut().take();
    }

    pub fn is_running(&self) -> bool {
        self.inner.alive.get()
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn schedule(inner: &Rc<LoopInner>) {
    if !inner.alive.get() {
        return;
    }
    let tick = inner.tick.borrow();
    let (Some(w), Some(cl)) = (web::window(), tick.as_ref()) else {
        return;
    };
    if let Ok(id) = w.request_animation_frame(cl.as_ref().unchecked_ref()) {
        inner.handle.set(Some(id));
    }
}
