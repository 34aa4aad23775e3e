//! Sentence boundary machine, implementing rules SB1–SB998 of
//! [UAX #29](https://www.unicode.org/reports/tr29/#Sentence_Boundary_Rules).
//!
//! The interesting rule is SB8: after `ATerm Close* Sp*`, the boundary is
//! suppressed when a lowercase letter follows before the next letter or
//! terminator — "etc. and so on" stays one sentence while "etc. And so
//! on" splits. The scan runs over the caller's remainder, is bounded by
//! its length, and never advances the cursor.

use crate::properties::{self, SentenceClass};
use crate::utf8::Remainder;

/// States of the sentence machine. The `ATerm*` and `STerm*` families
/// collapse the `SATerm Close* Sp*` runs of SB8–SB11 into single states.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SentenceState {
    Any = 0,
    AfterCr,
    AfterParaSep,
    AfterUpper,
    AfterLower,
    AfterATerm,
    /// ATerm directly preceded by an upper- or lowercase letter (SB7).
    ATermUpperLower,
    ATermClose,
    ATermSpace,
    AfterSTerm,
    STermClose,
    STermSpace,
}

impl SentenceState {
    pub(crate) const INITIAL: Self = Self::Any;

    pub(crate) const fn to_bits(self) -> u8 {
        self as u8
    }

    pub(crate) const fn from_bits(bits: u8) -> Self {
        match bits {
            1 => Self::AfterCr,
            2 => Self::AfterParaSep,
            3 => Self::AfterUpper,
            4 => Self::AfterLower,
            5 => Self::AfterATerm,
            6 => Self::ATermUpperLower,
            7 => Self::ATermClose,
            8 => Self::ATermSpace,
            9 => Self::AfterSTerm,
            10 => Self::STermClose,
            11 => Self::STermSpace,
            _ => Self::Any,
        }
    }

    const fn after_aterm(self) -> bool {
        matches!(
            self,
            Self::AfterATerm | Self::ATermUpperLower | Self::ATermClose | Self::ATermSpace
        )
    }
}

/// One transition of the machine; see `grapheme::transition` for the
/// wildcard and rule-number conventions. Unlike words, the sentence
/// default (SB998) is to *not* break, so only SB4 and SB11 entries carry
/// a boundary.
fn transition(state: SentenceState, class: SentenceClass) -> Option<(SentenceState, bool, u16)> {
    use SentenceClass as P;
    use SentenceState::*;

    Some(match (state, class) {
        // SB3: CR LF stay together.
        (Any, P::CR) => (AfterCr, false, 9990),
        (AfterCr, P::LF) => (AfterParaSep, false, 30),

        // SB4: break after paragraph separators.
        (Any, P::LF) => (AfterParaSep, false, 9990),
        (Any, P::Sep) => (AfterParaSep, false, 9990),
        (AfterCr, P::Any) => (Any, true, 40),
        (AfterParaSep, P::Any) => (Any, true, 40),

        // SB6: ATerm before a digit is an abbreviation point.
        (Any, P::ATerm) => (AfterATerm, false, 9990),
        (AfterATerm, P::Numeric) => (Any, false, 60),
        (ATermUpperLower, P::Numeric) => (Any, false, 60),

        // SB7: upper ATerm upper, as in "U.S. Government".
        (Any, P::Upper) => (AfterUpper, false, 9990),
        (Any, P::Lower) => (AfterLower, false, 9990),
        (AfterUpper, P::ATerm) => (ATermUpperLower, false, 70),
        (AfterLower, P::ATerm) => (ATermUpperLower, false, 70),
        (ATermUpperLower, P::Upper) => (AfterUpper, false, 70),

        // SB8: a lowercase letter right after the terminator run.
        (AfterATerm, P::Lower) => (AfterLower, false, 80),
        (ATermUpperLower, P::Lower) => (AfterLower, false, 80),
        (ATermClose, P::Lower) => (AfterLower, false, 80),
        (ATermSpace, P::Lower) => (AfterLower, false, 80),

        // SB8a: the sentence continues through SContinue and further
        // terminators.
        (Any, P::STerm) => (AfterSTerm, false, 9990),
        (AfterATerm, P::SContinue) => (Any, false, 81),
        (AfterATerm, P::ATerm) => (AfterATerm, false, 81),
        (AfterATerm, P::STerm) => (AfterSTerm, false, 81),
        (ATermUpperLower, P::SContinue) => (Any, false, 81),
        (ATermUpperLower, P::ATerm) => (AfterATerm, false, 81),
        (ATermUpperLower, P::STerm) => (AfterSTerm, false, 81),
        (ATermClose, P::SContinue) => (Any, false, 81),
        (ATermClose, P::ATerm) => (AfterATerm, false, 81),
        (ATermClose, P::STerm) => (AfterSTerm, false, 81),
        (ATermSpace, P::SContinue) => (Any, false, 81),
        (ATermSpace, P::ATerm) => (AfterATerm, false, 81),
        (ATermSpace, P::STerm) => (AfterSTerm, false, 81),
        (AfterSTerm, P::SContinue) => (Any, false, 81),
        (AfterSTerm, P::ATerm) => (AfterATerm, false, 81),
        (AfterSTerm, P::STerm) => (AfterSTerm, false, 81),
        (STermClose, P::SContinue) => (Any, false, 81),
        (STermClose, P::ATerm) => (AfterATerm, false, 81),
        (STermClose, P::STerm) => (AfterSTerm, false, 81),
        (STermSpace, P::SContinue) => (Any, false, 81),
        (STermSpace, P::ATerm) => (AfterATerm, false, 81),
        (STermSpace, P::STerm) => (AfterSTerm, false, 81),

        // SB9: closing punctuation attaches to the terminator.
        (AfterATerm, P::Close) => (ATermClose, false, 90),
        (ATermUpperLower, P::Close) => (ATermClose, false, 90),
        (ATermClose, P::Close) => (ATermClose, false, 90),
        (AfterSTerm, P::Close) => (STermClose, false, 90),
        (STermClose, P::Close) => (STermClose, false, 90),

        // SB9/SB10: a paragraph separator ends the same sentence.
        (AfterATerm, P::CR) => (AfterCr, false, 90),
        (AfterATerm, P::LF) => (AfterParaSep, false, 90),
        (AfterATerm, P::Sep) => (AfterParaSep, false, 90),
        (ATermUpperLower, P::CR) => (AfterCr, false, 90),
        (ATermUpperLower, P::LF) => (AfterParaSep, false, 90),
        (ATermUpperLower, P::Sep) => (AfterParaSep, false, 90),
        (ATermClose, P::CR) => (AfterCr, false, 90),
        (ATermClose, P::LF) => (AfterParaSep, false, 90),
        (ATermClose, P::Sep) => (AfterParaSep, false, 90),
        (ATermSpace, P::CR) => (AfterCr, false, 100),
        (ATermSpace, P::LF) => (AfterParaSep, false, 100),
        (ATermSpace, P::Sep) => (AfterParaSep, false, 100),
        (AfterSTerm, P::CR) => (AfterCr, false, 90),
        (AfterSTerm, P::LF) => (AfterParaSep, false, 90),
        (AfterSTerm, P::Sep) => (AfterParaSep, false, 90),
        (STermClose, P::CR) => (AfterCr, false, 90),
        (STermClose, P::LF) => (AfterParaSep, false, 90),
        (STermClose, P::Sep) => (AfterParaSep, false, 90),
        (STermSpace, P::CR) => (AfterCr, false, 100),
        (STermSpace, P::LF) => (AfterParaSep, false, 100),
        (STermSpace, P::Sep) => (AfterParaSep, false, 100),

        // SB10: spaces attach to the terminator run.
        (AfterATerm, P::Sp) => (ATermSpace, false, 100),
        (ATermUpperLower, P::Sp) => (ATermSpace, false, 100),
        (ATermClose, P::Sp) => (ATermSpace, false, 100),
        (ATermSpace, P::Sp) => (ATermSpace, false, 100),
        (AfterSTerm, P::Sp) => (STermSpace, false, 100),
        (STermClose, P::Sp) => (STermSpace, false, 100),
        (STermSpace, P::Sp) => (STermSpace, false, 100),

        // SB11: anything else after a terminator run starts a sentence.
        (AfterATerm, P::Any) => (Any, true, 110),
        (ATermUpperLower, P::Any) => (Any, true, 110),
        (ATermClose, P::Any) => (Any, true, 110),
        (ATermSpace, P::Any) => (Any, true, 110),
        (AfterSTerm, P::Any) => (Any, true, 110),
        (STermClose, P::Any) => (Any, true, 110),
        (STermSpace, P::Any) => (Any, true, 110),

        _ => return None,
    })
}

/// The SB8 scan: does a lowercase letter follow before any letter,
/// terminator, or separator does?
fn lower_follows(rest: Remainder) -> bool {
    let mut rest = rest;
    loop {
        let Some((ch, len)) = rest.decode_first() else {
            return false;
        };
        rest = rest.advance(len);
        match properties::sentence_class(ch) {
            SentenceClass::Lower => return true,
            SentenceClass::OLetter
            | SentenceClass::Upper
            | SentenceClass::Sep
            | SentenceClass::CR
            | SentenceClass::LF
            | SentenceClass::ATerm
            | SentenceClass::STerm => return false,
            _ => {}
        }
    }
}

/// Advances the machine by one character. Returns the new state and
/// whether a sentence boundary precedes the character.
pub(crate) fn step(state: SentenceState, ch: char, rest: Remainder) -> (SentenceState, bool) {
    let class = properties::sentence_class(ch);

    // SB5: Extend and Format are invisible, except right after a
    // paragraph separator where SB4 has to fire.
    if matches!(class, SentenceClass::Extend | SentenceClass::Format) {
        return match state {
            SentenceState::AfterCr | SentenceState::AfterParaSep => (SentenceState::Any, true),
            state => (state, false),
        };
    }

    let (new_state, boundary) = match transition(state, class) {
        Some((next, boundary, _)) => (next, boundary),
        None => {
            let by_state = transition(state, SentenceClass::Any);
            let by_class = transition(SentenceState::Any, class);
            match (by_state, by_class) {
                (Some((_, state_boundary, state_rule)), Some((next, class_boundary, class_rule))) => {
                    let boundary = if state_rule < class_rule {
                        state_boundary
                    } else {
                        class_boundary
                    };
                    (next, boundary)
                }
                (Some((next, boundary, _)), None) => (next, boundary),
                (None, Some((next, boundary, _))) => (next, boundary),
                // SB998: do not break.
                (None, None) => (SentenceState::Any, false),
            }
        }
    };

    // SB8: the character itself is neither a letter nor part of the
    // terminator run; look ahead for a lowercase continuation.
    if new_state == SentenceState::Any && state.after_aterm() && lower_follows(rest) {
        return (SentenceState::AfterLower, false);
    }

    (new_state, boundary)
}
