//! Owned audio service: looping background music via an `<audio>` element
//! plus short synthesized UI blips. Constructed once at app start and passed
//! to whatever needs it; there is no module-level singleton.

use crate::dom::EventGuard;
use anyhow::anyhow;
use fnv::FnvHashMap;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

const BGM_SRC: &str = "/sounds/bgm.mp3";
const BGM_VOLUME: f64 = 0.45;

/// A short oscillator blip envelope.
#[derive(Clone, Copy)]
struct Blip {
    frequency_hz: f32,
    peak: f32,
    duration_sec: f64,
}

struct AudioInner {
    bgm: web::HtmlAudioElement,
    ctx: RefCell<Option<web::AudioContext>>,
    playing: Cell<bool>,
    subscribers: RefCell<Vec<Box<dyn Fn(bool)>>>,
    sfx: FnvHashMap<&'static str, Blip>,
}

pub struct AudioService {
    inner: Rc<AudioInner>,
    _play_guard: EventGuard,
    _pause_guard: EventGuard,
}

impl AudioService {
    pub fn new() -> anyhow::Result<Self> {
        let bgm = web::HtmlAudioElement::new_with_src(BGM_SRC)
            .map_err(|e| anyhow!(format!("audio element error: {:?}", e)))?;
        bgm.set_loop(true);
        bgm.set_volume(BGM_VOLUME);
        bgm.set_preload("auto");

        let mut sfx = FnvHashMap::default();
        sfx.insert("hover", Blip { frequency_hz: 880.0, peak: 0.12, duration_sec: 0.06 });
        sfx.insert("click", Blip { frequency_hz: 523.25, peak: 0.2, duration_sec: 0.09 });

        let inner = Rc::new(AudioInner {
            bgm: bgm.clone(),
            ctx: RefCell::new(None),
            playing: Cell::new(false),
            subscribers: RefCell::new(Vec::new()),
            sfx,
        });

        // Track the element's own play/pause events so the observable state
        // stays right even when playback is triggered elsewhere.
        let play_guard = {
            let inner = inner.clone();
            EventGuard::new(&bgm, "play", move |_| notify(&inner, true))
        };
        let pause_guard = {
            let inner = inner.clone();
            EventGuard::new(&bgm, "pause", move |_| notify(&inner, false))
        };

        Ok(Self { inner, _play_guard: play_guard, _pause_guard: pause_guard })
    }

    pub fn play_bgm(&self) {
        let _ = self.inner.bgm.play();
    }

    pub fn pause_bgm(&self) {
        let _ = self.inner.bgm.pause();
    }

    pub fn toggle_bgm(&self) {
        if self.is_bgm_playing() {
            self.pause_bgm();
        } else {
            self.play_bgm();
        }
    }

    pub fn set_bgm_volume(&self, volume: f64) {
        self.inner.bgm.set_volume(volume.clamp(0.0, 1.0));
    }

    pub fn is_bgm_playing(&self) -> bool {
        self.inner.playing.get()
    }

    /// Register a callback invoked on every play/pause transition.
    pub fn subscribe(&self, callback: impl Fn(bool) + 'static) {
        self.inner.subscribers.borrow_mut().push(Box::new(callback));
    }

    /// Fire a named UI blip; unknown names are ignored.
    pub fn play_sfx(&self, name: &str) {
        let Some(blip) = self.inner.sfx.get(name).copied() else {
            log::warn!("unknown sfx {name:?}");
            return;
        };
        let mut ctx_slot = self.inner.ctx.borrow_mut();
        if ctx_slot.is_none() {
            match web::AudioContext::new() {
                Ok(ctx) => *ctx_slot = Some(ctx),
                Err(e) => {
                    log::error!("AudioContext error: {:?}", e);
                    return;
                }
            }
        }
        let Some(ctx) = ctx_slot.as_ref() else {
            return;
        };
        trigger_blip(ctx, blip);
    }
}

fn notify(inner: &Rc<AudioInner>, playing: bool) {
    inner.playing.set(playing);
    for sub in inner.subscribers.borrow().iter() {
        sub(playing);
    }
}

// One-shot oscillator with a linear attack/release envelope.
fn trigger_blip(ctx: &web::AudioContext, blip: Blip) {
    let Ok(src) = web::OscillatorNode::new(ctx) else {
        return;
    };
    src.set_type(web::OscillatorType::Sine);
    src.frequency().set_value(blip.frequency_hz);
    let Ok(gain) = web::GainNode::new(ctx) else {
        return;
    };
    gain.gain().set_value(0.0);
    let t0 = ctx.current_time() + 0.005;
    let _ = gain.gain().linear_ramp_to_value_at_time(blip.peak, t0 + 0.01);
    let _ = gain
        .gain()
        .linear_ramp_to_value_at_time(0.0, t0 + blip.duration_sec);
    let _ = src.connect_with_audio_node(&gain);
    let _ = gain.connect_with_audio_node(&ctx.destination());
    let _ = src.start_with_when(t0);
    let _ = src.stop_with_when(t0 + blip.duration_sec + 0.02);
}

/// Wire the HUD sound button: click toggles playback, and the icon follows
/// the observable state no matter who started the music.
pub fn wire_sound_toggle(
    document: &web::Document,
    audio: &Rc<AudioService>,
) -> Option<EventGuard> {
    let button = document.get_element_by_id("sound-toggle")?;
    let icon = button.clone();
    audio.subscribe(move |playing| {
        icon.set_text_content(Some(if playing { "\u{1F50A}" } else { "\u{1F507}" }));
    });
    let audio = audio.clone();
    Some(EventGuard::new(&button, "click", move |_| {
        audio.toggle_bgm();
    }))
}
