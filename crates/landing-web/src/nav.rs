//! Nav buttons with the scramble-label effect, plus the palette toggle.

use crate::audio::AudioService;
use crate::dom::{self, EventGuard};
use crate::frame::FrameLoop;
use anyhow::anyhow;
use landing_core::{scramble, PaletteMode, SCRAMBLE_CLICK_MS, SCRAMBLE_HOVER_MS};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

const MAGENTA_BODY_CLASS: &str = "magenta-mode";

struct NavButton {
    _enter: EventGuard,
    _click: EventGuard,
    // The in-flight scramble animation, replaced on retrigger.
    _anim: Rc<RefCell<Option<FrameLoop>>>,
}

pub struct NavBar {
    _buttons: Vec<NavButton>,
    _palette_click: Option<EventGuard>,
}

impl NavBar {
    pub fn mount(
        document: &web::Document,
        audio: Rc<AudioService>,
        palette: Rc<Cell<PaletteMode>>,
    ) -> anyhow::Result<Self> {
        let mut buttons = Vec::new();
        for id in ["nav-projects", "nav-dossier", "nav-contact"] {
            let el: web::Element =
                dom::element(document, id).ok_or_else(|| anyhow!("missing #{id}"))?;
            buttons.push(wire_scramble_button(el, audio.clone()));
        }

        let palette_click = document.get_element_by_id("palette-toggle").map(|el| {
            let label_el = el.clone();
            let audio = audio.clone();
            let palette = palette.clone();
            EventGuard::new(&el, "click", move |_| {
                audio.play_sfx("click");
                let mode = palette.get().toggled();
                palette.set(mode);
                if let Some(body) = dom::window_document().and_then(|d| d.body()) {
                    let _ = match mode {
                        PaletteMode::Magenta => body.class_list().add_1(MAGENTA_BODY_CLASS),
                        PaletteMode::Cyan => body.class_list().remove_1(MAGENTA_BODY_CLASS),
                    };
                }
                label_el.set_text_content(Some(match mode {
                    PaletteMode::Magenta => "Cyan Mode",
                    PaletteMode::Cyan => "AKIRA Mode",
                }));
            })
        });

        Ok(Self { _buttons: buttons, _palette_click: palette_click })
    }
}

fn wire_scramble_button(el: web::Element, audio: Rc<AudioService>) -> NavButton {
    let label = el.text_content().unwrap_or_default();
    let anim: Rc<RefCell<Option<FrameLoop>>> = Rc::new(RefCell::new(None));

    let enter = {
        let el = el.clone();
        let label = label.clone();
        let anim = anim.clone();
        let audio = audio.clone();
        EventGuard::new(&el.clone(), "mouseenter", move |_| {
            audio.play_sfx("hover");
            start_scramble(&el, &label, SCRAMBLE_HOVER_MS, &anim);
        })
    };
    let click = {
        let el = el.clone();
        let label = label.clone();
        let anim = anim.clone();
        let audio = audio.clone();
        EventGuard::new(&el.clone(), "click", move |_| {
            audio.play_sfx("click");
            start_scramble(&el, &label, SCRAMBLE_CLICK_MS, &anim);
            if let (Some(target), Some(window)) = (el.get_attribute("data-target"), web::window())
            {
                let _ = window.location().set_hash(&target);
            }
        })
    };

    NavButton { _enter: enter, _click: click, _anim: anim }
}

/// Restart the button's scramble animation; it settles left to right over
/// `duration_ms` and stops itself.
fn start_scramble(
    el: &web::Element,
    label: &str,
    duration_ms: f32,
    anim: &Rc<RefCell<Option<FrameLoop>>>,
) {
    let el = el.clone();
    let label = label.to_owned();
    let mut rng = SmallRng::from_entropy();
    let mut elapsed_ms = 0.0_f32;
    let new_loop = FrameLoop::start(move |dt| {
        elapsed_ms += dt * 1000.0;
        let p = elapsed_ms / duration_ms;
        if p >= 1.0 {
            el.set_text_content(Some(&label));
            return false;
        }
        el.set_text_content(Some(&scramble(&label, p, &mut rng)));
        true
    });
    // Replacing the previous loop drops (and stops) it.
    *anim.borrow_mut() = Some(new_loop);
}
