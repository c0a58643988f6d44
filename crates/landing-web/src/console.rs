//! Typewriter console on the home screen: two typed lines, then a bare
//! blinking prompt. The loop stops itself once the script completes; the
//! caret blink is CSS.

use crate::dom;
use crate::frame::FrameLoop;
use anyhow::anyhow;
use landing_core::ConsoleScript;
use web_sys as web;

pub struct ConsoleEffect {
    _loop: FrameLoop,
}

impl ConsoleEffect {
    pub fn mount(document: &web::Document) -> anyhow::Result<Self> {
        let script = ConsoleScript::home();
        let texts: Vec<web::Element> = (1..=script.lines().len())
            .map(|i| {
                dom::element(document, &format!("console-text-{i}"))
                    .ok_or_else(|| anyhow!("missing #console-text-{i}"))
            })
            .collect::<Result<_, _>>()?;
        let carets: Vec<web::Element> = (1..=script.lines().len())
            .map(|i| {
                dom::element(document, &format!("console-caret-{i}"))
                    .ok_or_else(|| anyhow!("missing #console-caret-{i}"))
            })
            .collect::<Result<_, _>>()?;
        let rows: Vec<web::Element> = (1..=script.lines().len())
            .map(|i| {
                dom::element(document, &format!("console-line-{i}"))
                    .ok_or_else(|| anyhow!("missing #console-line-{i}"))
            })
            .collect::<Result<_, _>>()?;
        let prompt: web::Element = dom::element(document, "console-prompt")
            .ok_or_else(|| anyhow!("missing #console-prompt"))?;

        let mut elapsed_ms = 0.0_f32;
        let mut shown = vec![usize::MAX; script.lines().len()];
        let frame_loop = FrameLoop::start(move |dt| {
            elapsed_ms += dt * 1000.0;
            let caret_line = script.caret_line(elapsed_ms);
            for (i, line) in script.lines().iter().enumerate() {
                let visible = line.visible_chars(elapsed_ms);
                if visible != shown[i] {
                    shown[i] = visible;
                    texts[i].set_text_content(Some(line.visible_prefix(elapsed_ms)));
                }
                // A row only appears once its line starts typing.
                set_hidden(&rows[i], elapsed_ms < line.start_ms());
                set_hidden(&carets[i], caret_line != Some(i));
            }
            set_hidden(&prompt, !script.prompt_visible(elapsed_ms));
            // Nothing changes after the prompt appears; stop ticking.
            !script.is_complete(elapsed_ms)
        });

        Ok(Self { _loop: frame_loop })
    }
}

pub(crate) fn set_hidden(el: &web::Element, hidden: bool) {
    let _ = if hidden {
        el.class_list().add_1("hidden")
    } else {
        el.class_list().remove_1("hidden")
    };
}
