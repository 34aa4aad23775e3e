//! Monospace display width.
//!
//! Width is a per-cluster notion: the first codepoint decides, later
//! codepoints in the same cluster contribute nothing, and only the emoji
//! variation selectors adjust the result afterwards (handled by the
//! stepping loop). Actual rendering depends on the terminal and font;
//! these values follow the common conventions for monospace output.

use core::sync::atomic::{AtomicU32, Ordering};

use crate::properties::{self, EastAsianWidth, GraphemeClass};
use crate::step::first_grapheme_cluster_in_string;

/// Cell count for East Asian Ambiguous characters. Legacy CJK terminals
/// render them two cells wide; everything else renders them narrow.
static AMBIGUOUS_WIDTH: AtomicU32 = AtomicU32::new(1);

/// Sets the display width of East Asian Ambiguous characters to 1
/// (default) or 2, process-wide. Intended to be called once at startup;
/// reads are relaxed and unsynchronized.
pub fn set_east_asian_ambiguous_width(width: u32) {
    AMBIGUOUS_WIDTH.store(width.clamp(1, 2), Ordering::Relaxed);
}

/// The width of a single codepoint, given its grapheme class.
pub(crate) fn rune_width(ch: char, class: GraphemeClass) -> u32 {
    match class {
        GraphemeClass::Control
        | GraphemeClass::CR
        | GraphemeClass::LF
        | GraphemeClass::Extend
        | GraphemeClass::ZWJ => 0,
        // A regional indicator pair renders as one two-cell flag; the
        // second indicator contributes nothing (see the stepping loop).
        GraphemeClass::RegionalIndicator => 2,
        GraphemeClass::ExtendedPictographic => {
            if properties::has_emoji_presentation(ch) {
                2
            } else {
                1
            }
        }
        _ => match ch {
            '\u{2e3a}' => 3,
            '\u{2e3b}' => 4,
            _ => match properties::east_asian_width(ch) {
                EastAsianWidth::Wide | EastAsianWidth::Fullwidth => 2,
                EastAsianWidth::Ambiguous => AMBIGUOUS_WIDTH.load(Ordering::Relaxed),
                _ => 1,
            },
        },
    }
}

/// The monospace display width of a string: the sum of the widths of its
/// grapheme clusters.
pub fn string_width(s: &str) -> usize {
    let mut width = 0usize;
    let mut rest = s;
    let mut state = -1i64;
    while !rest.is_empty() {
        let (_, remainder, cluster_width, new_state) =
            first_grapheme_cluster_in_string(rest, state);
        width += cluster_width as usize;
        rest = remainder;
        state = new_state;
    }
    width
}

#[cfg(test)]
mod tests;
