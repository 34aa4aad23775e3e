//! Lockstep advancement of the four boundary machines over one UTF-8
//! cursor, and the packed state token that carries all of them between
//! calls.
//!
//! [`step`] and [`step_string`] return, per grapheme cluster, a
//! bit-packed `boundaries` word:
//!
//! - bits 0–1 ([`MASK_LINE`]): the line verdict, one of
//!   [`LINE_DONT_BREAK`], [`LINE_CAN_BREAK`], [`LINE_MUST_BREAK`];
//! - bit 2 ([`MASK_WORD`]): set iff the cluster ends at a word boundary;
//! - bit 3 ([`MASK_SENTENCE`]): set iff it ends at a sentence boundary;
//! - bits 4 and up ([`SHIFT_WIDTH`]): the cluster's monospace width.
//!
//! The state token is an opaque `i64`. Pass `-1` (any negative value) for
//! the first call and the returned token, unchanged, afterwards. Unused
//! bits of a foreign token are masked off rather than rejected.

use crate::grapheme::{self, GraphemeState};
use crate::line::{self, LineBreak, LineState};
use crate::properties::{self, GraphemeClass};
use crate::sentence::{self, SentenceState};
use crate::utf8::Text;
use crate::width::rune_width;
use crate::word::{self, WordState};

/// Extracts the line verdict from a `boundaries` word.
pub const MASK_LINE: u32 = 3;
/// The word-boundary bit of a `boundaries` word.
pub const MASK_WORD: u32 = 4;
/// The sentence-boundary bit of a `boundaries` word.
pub const MASK_SENTENCE: u32 = 8;
/// Right-shift for the cluster width in a `boundaries` word.
pub const SHIFT_WIDTH: u32 = 4;

/// The line must not be broken at this boundary.
pub const LINE_DONT_BREAK: u32 = 0;
/// The line may be broken at this boundary.
pub const LINE_CAN_BREAK: u32 = 1;
/// The line must be broken at this boundary.
pub const LINE_MUST_BREAK: u32 = 2;

const SHIFT_WORD: u32 = 2;
const SHIFT_SENTENCE: u32 = 3;

// Packed token layout. The grapheme machine (with its conjunct sub-state)
// occupies the low 12 bits; the cached grapheme class of the upcoming
// character sits above the line state so the next call skips one lookup.
const SHIFT_WORD_STATE: u32 = 12;
const SHIFT_SENTENCE_STATE: u32 = 17;
const SHIFT_LINE_STATE: u32 = 21;
const SHIFT_PROP_STATE: u32 = 37;
const MASK_GRAPHEME_STATE: i64 = 0xfff;
const MASK_WORD_STATE: i64 = 0x1f;
const MASK_SENTENCE_STATE: i64 = 0xf;
const MASK_LINE_STATE: i64 = 0xffff;
const MASK_PROP_STATE: i64 = 0xf;

#[derive(Clone, Copy)]
struct Machines {
    grapheme: GraphemeState,
    word: WordState,
    sentence: SentenceState,
    line: LineState,
}

fn pack(machines: Machines, prop: GraphemeClass) -> i64 {
    machines.grapheme.to_bits() as i64
        | (machines.word.to_bits() as i64) << SHIFT_WORD_STATE
        | (machines.sentence.to_bits() as i64) << SHIFT_SENTENCE_STATE
        | (machines.line.to_bits() as i64) << SHIFT_LINE_STATE
        | (prop as i64) << SHIFT_PROP_STATE
}

fn unpack(state: i64) -> (Machines, GraphemeClass) {
    (
        Machines {
            grapheme: GraphemeState::from_bits((state & MASK_GRAPHEME_STATE) as u16),
            word: WordState::from_bits((state >> SHIFT_WORD_STATE & MASK_WORD_STATE) as u8),
            sentence: SentenceState::from_bits(
                (state >> SHIFT_SENTENCE_STATE & MASK_SENTENCE_STATE) as u8,
            ),
            line: LineState::from_bits((state >> SHIFT_LINE_STATE & MASK_LINE_STATE) as u16),
        },
        GraphemeClass::from_bits((state >> SHIFT_PROP_STATE & MASK_PROP_STATE) as u8),
    )
}

/// The token every machine is reset to once the input is exhausted.
fn exhausted(prop: GraphemeClass) -> i64 {
    pack(
        Machines {
            grapheme: GraphemeState::INITIAL,
            word: WordState::INITIAL,
            sentence: SentenceState::INITIAL,
            line: LineState {
                flags: 0,
                ..LineState::INITIAL
            },
        },
        prop,
    )
}

/// The `boundaries` word for the final cluster of the input: LB3, WB2,
/// and SB2 all mandate a boundary at end of text.
fn final_boundaries(width: u32) -> u32 {
    LINE_MUST_BREAK | 1 << SHIFT_WORD | 1 << SHIFT_SENTENCE | width << SHIFT_WIDTH
}

fn step_impl<'a, T: Text<'a>>(input: T, state: i64) -> (T, T, u32, i64) {
    if input.is_empty() {
        return (T::empty(), T::empty(), 0, -1);
    }

    // The first character. If it is the only one, the end-of-text rules
    // decide everything.
    let (first, first_len) = match input.decode_at(0) {
        Some(decoded) => decoded,
        None => return (T::empty(), T::empty(), 0, -1),
    };
    if input.len() <= first_len {
        let prop = if state < 0 {
            properties::grapheme_class(first)
        } else {
            unpack(state).1
        };
        let width = rune_width(first, prop);
        return (input, T::empty(), final_boundaries(width), exhausted(prop));
    }

    // Bootstrap from the sentinel, or unpack the previous call's token.
    // The verdicts of the bootstrap transitions describe the start of
    // text and are discarded.
    let (mut machines, first_prop) = if state < 0 {
        let rest = input.remainder_from(first_len);
        let (grapheme_state, prop, _) = grapheme::step(GraphemeState::INITIAL, first);
        let (word_state, _) = word::step(WordState::INITIAL, first, rest);
        let (sentence_state, _) = sentence::step(SentenceState::INITIAL, first, rest);
        let (line_state, _) = line::step(LineState::INITIAL, first, rest);
        (
            Machines {
                grapheme: grapheme_state,
                word: word_state,
                sentence: sentence_state,
                line: line_state,
            },
            prop,
        )
    } else {
        unpack(state)
    };

    let mut width = rune_width(first, first_prop);
    let mut length = first_len;

    loop {
        let (ch, ch_len) = match input.decode_at(length) {
            Some(decoded) => decoded,
            None => return (input, T::empty(), final_boundaries(width), exhausted(first_prop)),
        };
        let rest = input.remainder_from(length + ch_len);

        let (grapheme_state, prop, grapheme_boundary) = grapheme::step(machines.grapheme, ch);
        let (word_state, word_boundary) = word::step(machines.word, ch, rest);
        let (sentence_state, sentence_boundary) = sentence::step(machines.sentence, ch, rest);
        let (line_state, line_break) = line::step(machines.line, ch, rest);
        machines = Machines {
            grapheme: grapheme_state,
            word: word_state,
            sentence: sentence_state,
            line: line_state,
        };

        if grapheme_boundary {
            let mut boundaries = line_break as u32 | width << SHIFT_WIDTH;
            if word_boundary {
                boundaries |= 1 << SHIFT_WORD;
            }
            if sentence_boundary {
                boundaries |= 1 << SHIFT_SENTENCE;
            }
            let (cluster, rest) = input.split_at(length);
            return (cluster, rest, boundaries, pack(machines, prop));
        }

        // Inside the cluster only the emoji variation selectors change
        // the width: VS-15 forces text presentation, VS-16 emoji
        // presentation.
        if first_prop == GraphemeClass::ExtendedPictographic {
            match ch {
                '\u{fe0e}' => width = 1,
                '\u{fe0f}' => width = 2,
                _ => {}
            }
        }

        length += ch_len;
        if input.len() <= length {
            return (input, T::empty(), final_boundaries(width), exhausted(prop));
        }
    }
}

/// Returns the first grapheme cluster of `b`, the rest of the input, the
/// packed boundary word for the position after the cluster, and the new
/// segmentation state.
///
/// Pass `-1` as the state on the first call, and the returned state
/// unchanged on every following call. An empty input returns empty
/// slices, no verdict, and the initial state. In accordance with UAX #14
/// rule LB3, the final cluster always reports [`LINE_MUST_BREAK`]; use
/// [`crate::has_trailing_line_break`] on its last scalar to tell whether
/// the text itself ends in a line break.
///
/// Malformed UTF-8 decodes as U+FFFD one byte at a time; segmentation
/// never fails.
pub fn step(b: &[u8], state: i64) -> (&[u8], &[u8], u32, i64) {
    step_impl(b, state)
}

/// Like [`step`], but operating on and returning string slices.
pub fn step_string(s: &str, state: i64) -> (&str, &str, u32, i64) {
    step_impl(s, state)
}

fn first_grapheme_impl<'a, T: Text<'a>>(input: T, state: i64) -> (T, T, u32, i64) {
    if input.is_empty() {
        return (T::empty(), T::empty(), 0, -1);
    }
    let (first, first_len) = match input.decode_at(0) {
        Some(decoded) => decoded,
        None => return (T::empty(), T::empty(), 0, -1),
    };

    const SHIFT_PROP: u32 = 12;
    if input.len() <= first_len {
        let prop = if state < 0 {
            properties::grapheme_class(first)
        } else {
            GraphemeClass::from_bits((state >> SHIFT_PROP & MASK_PROP_STATE) as u8)
        };
        return (
            input,
            T::empty(),
            rune_width(first, prop),
            GraphemeState::INITIAL.to_bits() as i64,
        );
    }

    let (mut machine, first_prop) = if state < 0 {
        let (machine, prop, _) = grapheme::step(GraphemeState::INITIAL, first);
        (machine, prop)
    } else {
        (
            GraphemeState::from_bits((state & MASK_GRAPHEME_STATE) as u16),
            GraphemeClass::from_bits((state >> SHIFT_PROP & MASK_PROP_STATE) as u8),
        )
    };

    let mut width = rune_width(first, first_prop);
    let mut length = first_len;
    loop {
        let (ch, ch_len) = match input.decode_at(length) {
            Some(decoded) => decoded,
            None => return (input, T::empty(), width, GraphemeState::INITIAL.to_bits() as i64),
        };
        let (new_machine, prop, boundary) = grapheme::step(machine, ch);
        machine = new_machine;
        if boundary {
            let (cluster, rest) = input.split_at(length);
            let new_state = machine.to_bits() as i64 | (prop as i64) << SHIFT_PROP;
            return (cluster, rest, width, new_state);
        }
        if first_prop == GraphemeClass::ExtendedPictographic {
            match ch {
                '\u{fe0e}' => width = 1,
                '\u{fe0f}' => width = 2,
                _ => {}
            }
        }
        length += ch_len;
        if input.len() <= length {
            return (input, T::empty(), width, GraphemeState::INITIAL.to_bits() as i64);
        }
    }
}

/// Returns the first grapheme cluster of `b`, the rest, the cluster's
/// monospace width, and the new state. A grapheme-only fast path with the
/// same state protocol as [`step`].
pub fn first_grapheme_cluster(b: &[u8], state: i64) -> (&[u8], &[u8], u32, i64) {
    first_grapheme_impl(b, state)
}

/// Like [`first_grapheme_cluster`], but for strings.
pub fn first_grapheme_cluster_in_string(s: &str, state: i64) -> (&str, &str, u32, i64) {
    first_grapheme_impl(s, state)
}

fn first_word_impl<'a, T: Text<'a>>(input: T, state: i64) -> (T, T, i64) {
    if input.is_empty() {
        return (T::empty(), T::empty(), -1);
    }
    let (first, first_len) = match input.decode_at(0) {
        Some(decoded) => decoded,
        None => return (T::empty(), T::empty(), -1),
    };
    if input.len() <= first_len {
        return (input, T::empty(), WordState::INITIAL.to_bits() as i64);
    }

    let mut machine = if state < 0 {
        let (machine, _) = word::step(WordState::INITIAL, first, input.remainder_from(first_len));
        machine
    } else {
        WordState::from_bits((state & MASK_WORD_STATE) as u8)
    };

    let mut length = first_len;
    loop {
        let (ch, ch_len) = match input.decode_at(length) {
            Some(decoded) => decoded,
            None => return (input, T::empty(), WordState::INITIAL.to_bits() as i64),
        };
        let (new_machine, boundary) = word::step(machine, ch, input.remainder_from(length + ch_len));
        machine = new_machine;
        if boundary {
            let (word, rest) = input.split_at(length);
            return (word, rest, machine.to_bits() as i64);
        }
        length += ch_len;
        if input.len() <= length {
            return (input, T::empty(), WordState::INITIAL.to_bits() as i64);
        }
    }
}

/// Returns the first word of `b`, the rest, and the new state. Single
/// boundary fast path; the same state protocol as [`step`].
pub fn first_word(b: &[u8], state: i64) -> (&[u8], &[u8], i64) {
    first_word_impl(b, state)
}

/// Like [`first_word`], but for strings.
pub fn first_word_in_string(s: &str, state: i64) -> (&str, &str, i64) {
    first_word_impl(s, state)
}

fn first_sentence_impl<'a, T: Text<'a>>(input: T, state: i64) -> (T, T, i64) {
    if input.is_empty() {
        return (T::empty(), T::empty(), -1);
    }
    let (first, first_len) = match input.decode_at(0) {
        Some(decoded) => decoded,
        None => return (T::empty(), T::empty(), -1),
    };
    if input.len() <= first_len {
        return (input, T::empty(), SentenceState::INITIAL.to_bits() as i64);
    }

    let mut machine = if state < 0 {
        let (machine, _) =
            sentence::step(SentenceState::INITIAL, first, input.remainder_from(first_len));
        machine
    } else {
        SentenceState::from_bits((state & MASK_SENTENCE_STATE) as u8)
    };

    let mut length = first_len;
    loop {
        let (ch, ch_len) = match input.decode_at(length) {
            Some(decoded) => decoded,
            None => return (input, T::empty(), SentenceState::INITIAL.to_bits() as i64),
        };
        let (new_machine, boundary) =
            sentence::step(machine, ch, input.remainder_from(length + ch_len));
        machine = new_machine;
        if boundary {
            let (sentence, rest) = input.split_at(length);
            return (sentence, rest, machine.to_bits() as i64);
        }
        length += ch_len;
        if input.len() <= length {
            return (input, T::empty(), SentenceState::INITIAL.to_bits() as i64);
        }
    }
}

/// Returns the first sentence of `b`, the rest, and the new state.
pub fn first_sentence(b: &[u8], state: i64) -> (&[u8], &[u8], i64) {
    first_sentence_impl(b, state)
}

/// Like [`first_sentence`], but for strings.
pub fn first_sentence_in_string(s: &str, state: i64) -> (&str, &str, i64) {
    first_sentence_impl(s, state)
}

fn first_line_segment_impl<'a, T: Text<'a>>(input: T, state: i64) -> (T, T, bool, i64) {
    if input.is_empty() {
        return (T::empty(), T::empty(), false, -1);
    }
    let (first, first_len) = match input.decode_at(0) {
        Some(decoded) => decoded,
        None => return (T::empty(), T::empty(), false, -1),
    };
    if input.len() <= first_len {
        // LB3: the last segment ends with a mandatory break.
        return (
            input,
            T::empty(),
            true,
            LineState {
                flags: 0,
                ..LineState::INITIAL
            }
            .to_bits() as i64,
        );
    }

    let mut machine = if state < 0 {
        let (machine, _) = line::step(LineState::INITIAL, first, input.remainder_from(first_len));
        machine
    } else {
        LineState::from_bits((state & MASK_LINE_STATE) as u16)
    };

    let mut length = first_len;
    loop {
        let (ch, ch_len) = match input.decode_at(length) {
            Some(decoded) => decoded,
            None => {
                return (
                    input,
                    T::empty(),
                    true,
                    LineState {
                        flags: 0,
                        ..LineState::INITIAL
                    }
                    .to_bits() as i64,
                )
            }
        };
        let (new_machine, verdict) =
            line::step(machine, ch, input.remainder_from(length + ch_len));
        machine = new_machine;
        if verdict != LineBreak::DontBreak {
            let (segment, rest) = input.split_at(length);
            return (
                segment,
                rest,
                verdict == LineBreak::MustBreak,
                machine.to_bits() as i64,
            );
        }
        length += ch_len;
        if input.len() <= length {
            return (
                input,
                T::empty(),
                true,
                LineState {
                    flags: 0,
                    ..LineState::INITIAL
                }
                .to_bits() as i64,
            );
        }
    }
}

/// Returns the first line segment of `b` (the prefix up to the next break
/// opportunity), the rest, whether that break is mandatory, and the new
/// state.
pub fn first_line_segment(b: &[u8], state: i64) -> (&[u8], &[u8], bool, i64) {
    first_line_segment_impl(b, state)
}

/// Like [`first_line_segment`], but for strings.
pub fn first_line_segment_in_string(s: &str, state: i64) -> (&str, &str, bool, i64) {
    first_line_segment_impl(s, state)
}

#[cfg(test)]
mod tests;
