#![cfg(target_arch = "wasm32")]
//! WASM entry point: boot overlay -> glitch transition -> home mount.
//!
//! Every component is an owned value whose drop cancels its frame loop,
//! removes its listeners, and releases its GPU resources; `unmount()` tears
//! the whole page down by dropping the app state.

mod audio;
mod background;
mod boot;
mod comet;
mod console;
mod cursor;
mod dom;
mod frame;
mod nav;
mod overlay;
mod render;
mod sprites;

use landing_core::{PaletteMode, TRANSITION_MS};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

// How much scroll maps to a full dolly toward the black hole.
const ZOOM_SCROLL_RANGE_PX: f64 = 600.0;

struct App {
    audio: Option<Rc<audio::AudioService>>,
    palette: Rc<Cell<PaletteMode>>,
    zoom: Rc<Cell<f32>>,
    // Held for teardown only: dropping a component reverses its setup.
    _boot: Option<boot::BootScreen>,
    _transition: Option<dom::TimeoutGuard>,
    _background: Option<background::Background>,
    _comet: Option<comet::CometOverlay>,
    _sprites: Option<sprites::SpriteOverlay>,
    _cursor: Option<cursor::CursorEffect>,
    _console: Option<console::ConsoleEffect>,
    _nav: Option<nav::NavBar>,
    _sound_toggle: Option<dom::EventGuard>,
    _scroll: Option<dom::EventGuard>,
}

impl App {
    fn new() -> Self {
        Self {
            audio: None,
            palette: Rc::new(Cell::new(PaletteMode::Cyan)),
            zoom: Rc::new(Cell::new(0.0)),
            _boot: None,
            _transition: None,
            _background: None,
            _comet: None,
            _sprites: None,
            _cursor: None,
            _console: None,
            _nav: None,
            _sound_toggle: None,
            _scroll: None,
        }
    }
}

thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("landing-web starting");

    APP.with(|app| *app.borrow_mut() = Some(App::new()));
    spawn_local(async {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Tear the whole page down: cancels every frame loop and timeout, removes
/// every listener, and releases every GPU resource.
#[wasm_bindgen]
pub fn unmount() {
    APP.with(|app| app.borrow_mut().take());
    log::info!("landing-web unmounted");
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    // The audio service is owned by the app root and handed to whoever needs
    // it; losing audio should not take the page down.
    match audio::AudioService::new() {
        Ok(service) => {
            let service = Rc::new(service);
            let toggle = audio::wire_sound_toggle(&document, &service);
            APP.with(|app| {
                if let Some(app) = app.borrow_mut().as_mut() {
                    app.audio = Some(service);
                    app._sound_toggle = toggle;
                }
            });
        }
        Err(e) => log::error!("audio init error: {:?}", e),
    }

    let boot_screen = boot::BootScreen::mount(&document, begin_transition)?;
    APP.with(|app| {
        if let Some(app) = app.borrow_mut().as_mut() {
            app._boot = Some(boot_screen);
        }
    });
    Ok(())
}

/// Boot finished: flash the glitch overlay, then reveal the home screen.
fn begin_transition() {
    let Some(document) = dom::window_document() else {
        return;
    };
    overlay::show(&document, "transition-overlay");
    let guard = dom::TimeoutGuard::new(TRANSITION_MS, || {
        if let Some(document) = dom::window_document() {
            overlay::hide(&document, "transition-overlay");
            overlay::hide(&document, "boot-overlay");
        }
        spawn_local(async {
            mount_home().await;
        });
    });
    // The boot screen is dropped later, from mount_home: this runs inside the
    // boot loop's own callback, which must not be freed mid-invocation.
    APP.with(|app| {
        if let Some(app) = app.borrow_mut().as_mut() {
            app._transition = guard;
        }
    });
}

/// Bring up every home-screen component. A component that fails to
/// initialize is logged and skipped; its siblings still run.
async fn mount_home() {
    let Some(document) = dom::window_document() else {
        return;
    };
    let Some((palette, zoom, audio)) = APP.with(|app| {
        app.borrow()
            .as_ref()
            .map(|a| (a.palette.clone(), a.zoom.clone(), a.audio.clone()))
    }) else {
        return;
    };

    let background = match background::Background::mount(&document, palette.clone(), zoom.clone()).await
    {
        Ok(b) => Some(b),
        Err(e) => {
            log::error!("background init error: {:?}", e);
            None
        }
    };
    let comet_overlay = match comet::CometOverlay::mount(&document).await {
        Ok(c) => Some(c),
        Err(e) => {
            log::error!("comet init error: {:?}", e);
            None
        }
    };
    let sprite_overlay = match sprites::SpriteOverlay::mount(&document).await {
        Ok(s) => Some(s),
        Err(e) => {
            log::error!("sprites init error: {:?}", e);
            None
        }
    };
    let cursor_effect = match cursor::CursorEffect::mount(&document) {
        Ok(c) => Some(c),
        Err(e) => {
            log::error!("cursor init error: {:?}", e);
            None
        }
    };
    let console_effect = match console::ConsoleEffect::mount(&document) {
        Ok(c) => Some(c),
        Err(e) => {
            log::error!("console init error: {:?}", e);
            None
        }
    };
    let nav_bar = match audio {
        Some(ref service) => {
            match nav::NavBar::mount(&document, service.clone(), palette.clone()) {
                Ok(n) => Some(n),
                Err(e) => {
                    log::error!("nav init error: {:?}", e);
                    None
                }
            }
        }
        None => None,
    };

    // Scroll drives the dolly toward the black hole.
    let scroll_guard = web::window().map(|window| {
        let zoom = zoom.clone();
        dom::EventGuard::new(&window, "scroll", move |_| {
            if let Some(w) = web::window() {
                let y = w.scroll_y().unwrap_or(0.0);
                zoom.set((y / ZOOM_SCROLL_RANGE_PX).clamp(0.0, 1.0) as f32);
            }
        })
    });

    APP.with(|app| {
        if let Some(app) = app.borrow_mut().as_mut() {
            app._boot = None;
            app._transition = None;
            app._background = background;
            app._comet = comet_overlay;
            app._sprites = sprite_overlay;
            app._cursor = cursor_effect;
            app._console = console_effect;
            app._nav = nav_bar;
            app._scroll = scroll_guard;
        }
    });
    log::info!("home mounted");
}
