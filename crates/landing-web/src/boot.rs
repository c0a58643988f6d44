//! The boot overlay: typed boot logs, the glowing logotype (CSS), a blocky
//! progress bar, and a typed loading label that flips to a completion
//! message. Fires its callback exactly once when the sequence ends.

use crate::console::set_hidden;
use crate::dom;
use crate::frame::FrameLoop;
use anyhow::anyhow;
use landing_core::{
    BootTimeline, ConsoleScript, TypeLine, BOOT_BLOCKS, BOOT_LABEL, BOOT_LABEL_CHAR_MS,
    BOOT_LABEL_DONE, BOOT_LABEL_START_MS,
};
use web_sys as web;

pub struct BootScreen {
    _loop: FrameLoop,
}

impl BootScreen {
    pub fn mount(
        document: &web::Document,
        on_finish: impl FnOnce() + 'static,
    ) -> anyhow::Result<Self> {
        let timeline = BootTimeline::default();
        let logs = ConsoleScript::boot_logs();
        let label = TypeLine::new(BOOT_LABEL, BOOT_LABEL_START_MS, BOOT_LABEL_CHAR_MS);

        let log_texts: Vec<web::Element> = (1..=logs.lines().len())
            .map(|i| {
                dom::element(document, &format!("boot-log-{i}"))
                    .ok_or_else(|| anyhow!("missing #boot-log-{i}"))
            })
            .collect::<Result<_, _>>()?;
        let prompt: web::Element = dom::element(document, "boot-prompt")
            .ok_or_else(|| anyhow!("missing #boot-prompt"))?;
        let label_el: web::Element = dom::element(document, "boot-label")
            .ok_or_else(|| anyhow!("missing #boot-label"))?;
        let blocks: Vec<web::Element> = (1..=BOOT_BLOCKS)
            .map(|i| {
                dom::element(document, &format!("boot-block-{i}"))
                    .ok_or_else(|| anyhow!("missing #boot-block-{i}"))
            })
            .collect::<Result<_, _>>()?;

        let mut elapsed_ms = 0.0_f32;
        let mut on_finish = Some(on_finish);
        let frame_loop = FrameLoop::start(move |dt| {
            elapsed_ms += dt * 1000.0;

            for (i, line) in logs.lines().iter().enumerate() {
                log_texts[i].set_text_content(Some(line.visible_prefix(elapsed_ms)));
            }
            set_hidden(&prompt, !timeline.prompt_visible(elapsed_ms));

            let lit = timeline.blocks_lit(elapsed_ms);
            for (i, block) in blocks.iter().enumerate() {
                let _ = if i < lit {
                    block.class_list().add_1("on")
                } else {
                    block.class_list().remove_1("on")
                };
            }

            if timeline.is_complete(elapsed_ms) {
                label_el.set_text_content(Some(BOOT_LABEL_DONE));
                if let Some(f) = on_finish.take() {
                    log::info!("boot sequence complete");
                    f();
                }
                return false;
            }
            label_el.set_text_content(Some(label.visible_prefix(elapsed_ms)));
            true
        });

        Ok(Self { _loop: frame_loop })
    }
}
