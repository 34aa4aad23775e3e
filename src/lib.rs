//! Streaming Unicode text segmentation, line breaking, and monospace
//! string width.
//!
//! This library implements, at Unicode 17.0:
//!
//! - grapheme cluster, word, and sentence boundaries per
//!   [UAX #29: Unicode Text Segmentation](https://www.unicode.org/reports/tr29/),
//! - line break opportunities per
//!   [UAX #14: Unicode Line Breaking Algorithm](https://www.unicode.org/reports/tr14/),
//! - display width for monospace fonts per the East Asian Width
//!   conventions of [UAX #11](https://www.unicode.org/reports/tr11/).
//!
//! [`step`] and [`step_string`] are the primary entry points: one call
//! consumes one grapheme cluster (one user-perceived character) and
//! reports, in a single bit-packed word, whether the position after it is
//! a word boundary and a sentence boundary, whether a line break there is
//! forbidden, allowed, or mandatory, and how many monospace cells the
//! cluster occupies. All four boundary machines advance in lockstep over
//! one pass of the input; nothing is allocated and nothing is re-scanned.
//!
//! ```
//! let mut text = "First line.\nSecond line.".as_bytes();
//! let mut state = -1;
//! let mut lines = 0;
//! while !text.is_empty() {
//!     let (cluster, rest, boundaries, new_state) = textseg::step(text, state);
//!     if boundaries & textseg::MASK_LINE == textseg::LINE_MUST_BREAK {
//!         lines += 1;
//!     }
//!     let _ = cluster;
//!     text = rest;
//!     state = new_state;
//! }
//! assert_eq!(lines, 2);
//! ```
//!
//! The state argument is an opaque token: pass `-1` on the first call and
//! each returned token, unchanged, on the next call. Because the token
//! fully captures parser position, independent inputs can be processed
//! concurrently with no shared mutable state, and processing can stop and
//! resume at any cluster boundary.
//!
//! For a single kind of boundary there are cheaper single-machine
//! passes — [`first_grapheme_cluster`], [`first_word`],
//! [`first_sentence`], [`first_line_segment`], and their `_in_string`
//! variants — plus the [`Graphemes`] iterator and the
//! [`grapheme_cluster_count`], [`string_width`], and [`reverse_string`]
//! conveniences.
//!
//! Byte-slice inputs need not be valid UTF-8: malformed bytes decode as
//! U+FFFD one byte at a time and segmentation proceeds deterministically.
//! There is no error channel and no panic in the public contract.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod grapheme;
mod iter;
mod line;
mod properties;
mod sentence;
mod step;
mod utf8;
mod width;
mod word;

pub use iter::Graphemes;
pub use step::{
    first_grapheme_cluster, first_grapheme_cluster_in_string, first_line_segment,
    first_line_segment_in_string, first_sentence, first_sentence_in_string, first_word,
    first_word_in_string, step, step_string, LINE_CAN_BREAK, LINE_DONT_BREAK, LINE_MUST_BREAK,
    MASK_LINE, MASK_SENTENCE, MASK_WORD, SHIFT_WIDTH,
};
pub use width::{set_east_asian_ambiguous_width, string_width};

use alloc::string::String;

use properties::LineClass;

/// The number of grapheme clusters (user-perceived characters) in a
/// string.
///
/// ```
/// assert_eq!(textseg::grapheme_cluster_count("🇩🇪🏳️‍🌈"), 2);
/// ```
pub fn grapheme_cluster_count(s: &str) -> usize {
    let mut count = 0usize;
    let mut rest = s;
    let mut state = -1i64;
    while !rest.is_empty() {
        let (_, remainder, _, new_state) = first_grapheme_cluster_in_string(rest, state);
        count += 1;
        rest = remainder;
        state = new_state;
    }
    count
}

/// Reverses a string grapheme cluster by cluster, so that multi-codepoint
/// characters survive the round trip intact.
///
/// ```
/// assert_eq!(textseg::reverse_string("héllo🇩🇪"), "🇩🇪olléh");
/// ```
pub fn reverse_string(s: &str) -> String {
    let mut reversed = String::with_capacity(s.len());
    let mut rest = s;
    let mut state = -1i64;
    while !rest.is_empty() {
        let (cluster, remainder, _, new_state) = first_grapheme_cluster_in_string(rest, state);
        reversed.insert_str(0, cluster);
        rest = remainder;
        state = new_state;
    }
    reversed
}

/// Whether a character mandates a line break after itself (line break
/// class BK, CR, LF, or NL). Apply to the last scalar of the final
/// cluster to distinguish a real trailing line break from the implicit
/// LB3 break [`step`] always reports at end of text.
pub fn has_trailing_line_break(ch: char) -> bool {
    matches!(
        properties::line_class(ch).0,
        LineClass::BK | LineClass::CR | LineClass::LF | LineClass::NL
    )
}

#[cfg(test)]
mod tests;
