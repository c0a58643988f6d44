// Boot timeline, typewriter scripts, and the nav label scramble.

use landing_core::boot::{BootTimeline, ConsoleScript, TypeLine};
use landing_core::constants::*;
use landing_core::scramble::{scramble, SCRAMBLE_GLYPHS};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn boot_progress_is_clamped_and_monotonic() {
    let boot = BootTimeline::default();
    assert_eq!(boot.progress(-100.0), 0.0);
    assert_eq!(boot.progress(0.0), 0.0);
    assert_eq!(boot.progress(BOOT_DURATION_MS * 2.0), 1.0);
    let mut last = 0.0;
    for ms in (0..3000).step_by(16) {
        let p = boot.progress(ms as f32);
        assert!(p >= last);
        last = p;
    }
}

#[test]
fn boot_blocks_light_up_in_order() {
    let boot = BootTimeline::default();
    assert_eq!(boot.blocks_lit(0.0), 0);
    assert_eq!(boot.blocks_lit(BOOT_DURATION_MS * 0.5), BOOT_BLOCKS / 2);
    assert_eq!(boot.blocks_lit(BOOT_DURATION_MS), BOOT_BLOCKS);
    let mut last = 0;
    for ms in (0..2700).step_by(10) {
        let lit = boot.blocks_lit(ms as f32);
        assert!(lit >= last && lit <= BOOT_BLOCKS);
        last = lit;
    }
}

#[test]
fn boot_prompt_appears_before_completion() {
    let boot = BootTimeline::default();
    let reveal = BOOT_DURATION_MS - BOOT_PROMPT_LEAD_MS;
    assert!(!boot.prompt_visible(reveal - 1.0));
    assert!(boot.prompt_visible(reveal));
    assert!(!boot.is_complete(BOOT_DURATION_MS - 1.0));
    assert!(boot.is_complete(BOOT_DURATION_MS));
}

#[test]
fn type_line_reveals_one_char_per_interval() {
    let line = TypeLine::new("Hi,", 300.0, 35.0);
    assert_eq!(line.visible_chars(0.0), 0);
    assert_eq!(line.visible_chars(299.9), 0);
    assert_eq!(line.visible_chars(300.0), 1);
    assert_eq!(line.visible_chars(335.0), 2);
    assert_eq!(line.visible_chars(370.0), 3);
    assert_eq!(line.visible_chars(10_000.0), 3);
    assert!(line.is_done(405.0));
    assert_eq!(line.visible_prefix(336.0), "Hi");
}

#[test]
fn type_line_counts_chars_not_bytes() {
    // The boot log lines end in a real ellipsis character.
    let line = TypeLine::new(BOOT_LOG_1, 0.0, 10.0);
    let n = BOOT_LOG_1.chars().count();
    assert_eq!(line.visible_chars(1e6), n);
    assert_eq!(line.visible_prefix(1e6), BOOT_LOG_1);
}

#[test]
fn home_console_lines_run_in_sequence() {
    let script = ConsoleScript::home();
    let lines = script.lines();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].text(), CONSOLE_LINE_1);
    assert_eq!(lines[1].text(), CONSOLE_LINE_2);
    // The second line starts a fixed gap after the first completes.
    assert_eq!(lines[1].start_ms(), lines[0].end_ms() + CONSOLE_LINE_GAP_MS);
    // While line 1 types, nothing of line 2 is visible.
    let mid_line1 = lines[0].start_ms() + CONSOLE_CHAR_MS;
    assert!(lines[0].visible_chars(mid_line1) > 0);
    assert_eq!(lines[1].visible_chars(mid_line1), 0);
}

#[test]
fn home_console_prompt_comes_last() {
    let script = ConsoleScript::home();
    let end_of_lines = script.lines()[1].end_ms();
    assert!(!script.prompt_visible(end_of_lines));
    assert!(script.prompt_visible(end_of_lines + CONSOLE_PROMPT_GAP_MS));
    assert!(script.is_complete(end_of_lines + CONSOLE_PROMPT_GAP_MS));
}

#[test]
fn caret_tracks_the_active_line() {
    let script = ConsoleScript::home();
    let l1 = &script.lines()[0];
    let l2 = &script.lines()[1];
    assert_eq!(script.caret_line(l1.start_ms() + 1.0), Some(0));
    // Between the lines neither is typing.
    assert_eq!(script.caret_line(l1.end_ms() + 1.0), None);
    assert_eq!(script.caret_line(l2.start_ms() + 1.0), Some(1));
    assert_eq!(script.caret_line(l2.end_ms() + 1.0), None);
}

#[test]
fn boot_logs_type_in_order() {
    let script = ConsoleScript::boot_logs();
    let lines = script.lines();
    assert_eq!(lines[0].start_ms(), BOOT_LOG_1_START_MS);
    assert_eq!(lines[1].start_ms(), BOOT_LOG_2_START_MS);
    assert!(lines[0].end_ms() < lines[1].start_ms());
}

#[test]
fn scramble_settles_left_to_right() {
    let mut rng = SmallRng::seed_from_u64(1);
    let label = "Launch Projects";
    let n = label.chars().count();
    let out = scramble(label, 0.5, &mut rng);
    assert_eq!(out.chars().count(), n);
    let resolved: Vec<bool> = out
        .chars()
        .zip(label.chars())
        .enumerate()
        .map(|(i, (got, want))| {
            let threshold = (i + 1) as f32 / n as f32;
            if 0.5 >= threshold {
                assert_eq!(got, want, "char {i} should have settled");
                true
            } else {
                assert!(SCRAMBLE_GLYPHS.contains(&got), "char {i} should be a glyph");
                false
            }
        })
        .collect();
    // Once a character is unsettled, everything after it is too.
    let first_unsettled = resolved.iter().position(|r| !*r).unwrap();
    assert!(resolved[first_unsettled..].iter().all(|r| !*r));
}

#[test]
fn scramble_completes_to_the_original() {
    let mut rng = SmallRng::seed_from_u64(2);
    assert_eq!(scramble("Read Dossier", 1.0, &mut rng), "Read Dossier");
    assert_eq!(scramble("Read Dossier", 1.5, &mut rng), "Read Dossier");
}

#[test]
fn scramble_at_zero_resolves_nothing() {
    let mut rng = SmallRng::seed_from_u64(3);
    let out = scramble("Initiate Contact", 0.0, &mut rng);
    for ch in out.chars() {
        assert!(SCRAMBLE_GLYPHS.contains(&ch));
    }
}
