//! Label scramble effect: characters jumble through a glyph alphabet and
//! settle left to right as progress approaches 1.

use rand::Rng;
use smallvec::SmallVec;

pub const SCRAMBLE_GLYPHS: &[char] = &[
    '░', '▒', '▓', '▲', '∆', '▮', '/', '\\', '|', '_', '-', '=', '+', '*', '#', '@', '$', '%',
    '&', '1', '2', '3', '4', '5', '6', '7', '8', '9', '0',
];

/// Render `label` at scramble progress `p` in [0, 1].
///
/// Character `i` of `n` is resolved once `p >= (i + 1) / n`, so the label
/// settles strictly left to right and `p >= 1` returns it unchanged.
pub fn scramble(label: &str, p: f32, rng: &mut impl Rng) -> String {
    let chars: SmallVec<[char; 32]> = label.chars().collect();
    let n = chars.len().max(1);
    chars
        .iter()
        .enumerate()
        .map(|(i, &ch)| {
            let threshold = (i + 1) as f32 / n as f32;
            if p >= threshold {
                ch
            } else {
                SCRAMBLE_GLYPHS[rng.gen_range(0..SCRAMBLE_GLYPHS.len())]
            }
        })
        .collect()
}
