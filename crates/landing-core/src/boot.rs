//! Boot screen and console timelines.
//!
//! Everything here is a pure function of elapsed milliseconds so the drivers
//! can re-query at any frame rate and get identical answers.

use crate::constants::*;

/// A typewriter line: characters appear one at a time from `start_ms`.
#[derive(Clone, Debug)]
pub struct TypeLine {
    text: String,
    char_count: usize,
    start_ms: f32,
    char_ms: f32,
}

impl TypeLine {
    pub fn new(text: impl Into<String>, start_ms: f32, char_ms: f32) -> Self {
        let text = text.into();
        let char_count = text.chars().count();
        Self { text, char_count, start_ms, char_ms }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn start_ms(&self) -> f32 {
        self.start_ms
    }

    /// Time at which the final character has appeared.
    pub fn end_ms(&self) -> f32 {
        self.start_ms + self.char_ms * self.char_count as f32
    }

    /// How many characters are visible at `elapsed_ms`.
    pub fn visible_chars(&self, elapsed_ms: f32) -> usize {
        if elapsed_ms < self.start_ms {
            return 0;
        }
        let typed = ((elapsed_ms - self.start_ms) / self.char_ms) as usize + 1;
        typed.min(self.char_count)
    }

    /// The visible prefix at `elapsed_ms`, respecting char boundaries.
    pub fn visible_prefix(&self, elapsed_ms: f32) -> &str {
        let n = self.visible_chars(elapsed_ms);
        match self.text.char_indices().nth(n) {
            Some((byte, _)) => &self.text[..byte],
            None => &self.text,
        }
    }

    pub fn is_done(&self, elapsed_ms: f32) -> bool {
        self.visible_chars(elapsed_ms) == self.char_count
    }
}

/// The boot overlay timeline: progress bar, block count, prompt reveal.
#[derive(Clone, Copy, Debug)]
pub struct BootTimeline {
    pub duration_ms: f32,
}

impl Default for BootTimeline {
    fn default() -> Self {
        Self { duration_ms: BOOT_DURATION_MS }
    }
}

impl BootTimeline {
    pub fn progress(&self, elapsed_ms: f32) -> f32 {
        (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    /// How many of the progress blocks are lit.
    pub fn blocks_lit(&self, elapsed_ms: f32) -> usize {
        (self.progress(elapsed_ms) * BOOT_BLOCKS as f32).round() as usize
    }

    /// The bare terminal prompt appears shortly before completion.
    pub fn prompt_visible(&self, elapsed_ms: f32) -> bool {
        elapsed_ms >= (self.duration_ms - BOOT_PROMPT_LEAD_MS).max(0.0)
    }

    pub fn is_complete(&self, elapsed_ms: f32) -> bool {
        elapsed_ms >= self.duration_ms
    }
}

/// A short script of typed lines followed by a bare blinking prompt.
#[derive(Clone, Debug)]
pub struct ConsoleScript {
    lines: Vec<TypeLine>,
    prompt_at_ms: f32,
}

impl ConsoleScript {
    /// The home console: greeting, status line, then the prompt.
    pub fn home() -> Self {
        let line1 = TypeLine::new(CONSOLE_LINE_1, CONSOLE_LINE_1_START_MS, CONSOLE_CHAR_MS);
        let line2 = TypeLine::new(
            CONSOLE_LINE_2,
            line1.end_ms() + CONSOLE_LINE_GAP_MS,
            CONSOLE_CHAR_MS,
        );
        let prompt_at_ms = line2.end_ms() + CONSOLE_PROMPT_GAP_MS;
        Self { lines: vec![line1, line2], prompt_at_ms }
    }

    /// The boot overlay's log lines; the prompt reveal is owned by
    /// [`BootTimeline::prompt_visible`].
    pub fn boot_logs() -> Self {
        let line1 = TypeLine::new(BOOT_LOG_1, BOOT_LOG_1_START_MS, BOOT_LOG_CHAR_MS);
        let line2 = TypeLine::new(BOOT_LOG_2, BOOT_LOG_2_START_MS, BOOT_LOG_CHAR_MS);
        let prompt_at_ms = BOOT_DURATION_MS - BOOT_PROMPT_LEAD_MS;
        Self { lines: vec![line1, line2], prompt_at_ms }
    }

    pub fn lines(&self) -> &[TypeLine] {
        &self.lines
    }

    pub fn prompt_visible(&self, elapsed_ms: f32) -> bool {
        elapsed_ms >= self.prompt_at_ms
    }

    /// Which line currently shows the typing caret: the first line that has
    /// started but not finished.
    pub fn caret_line(&self, elapsed_ms: f32) -> Option<usize> {
        self.lines
            .iter()
            .position(|l| elapsed_ms >= l.start_ms() && !l.is_done(elapsed_ms))
    }

    /// Whole script finished (all lines typed and the prompt shown).
    pub fn is_complete(&self, elapsed_ms: f32) -> bool {
        self.prompt_visible(elapsed_ms) && self.lines.iter().all(|l| l.is_done(elapsed_ms))
    }
}
