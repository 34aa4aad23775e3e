//! Word boundary machine, implementing rules WB1–WB999 of
//! [UAX #29](https://www.unicode.org/reports/tr29/#Word_Boundary_Rules).
//!
//! Three groups of rules need more than the previous character:
//!
//! - WB4 makes Extend, Format, and ZWJ transparent after anything but a
//!   newline, which the machine handles by simply keeping its state.
//! - WB3c (`ZWJ × ExtendedPictographic`) applies to adjacent characters
//!   only, so an after-ZWJ flag rides alongside the base state and is
//!   cleared as soon as anything else (including an absorbed Extend)
//!   comes through.
//! - WB6/WB7, WB7b/WB7c, and WB11/WB12 bridge a single MidLetter/MidNum
//!   style character between two runs, which requires peeking at the next
//!   base character. The peek decodes from the caller's remainder and
//!   never advances the cursor.

use crate::properties::{self, WordClass};
use crate::utf8::Remainder;

/// Base states of the word machine.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WordBase {
    Any = 0,
    AfterCr,
    AfterLf,
    AfterNewline,
    AfterWSegSpace,
    AfterALetter,
    AfterHebrewLetter,
    /// Inside `letter (MidLetter|MidNumLet|') letter` (WB6/WB7).
    MidLetter,
    /// Inside `hebrew " hebrew` (WB7b/WB7c).
    HebrewDoubleQuote,
    AfterNumeric,
    /// Inside `numeric (MidNum|MidNumLet|') numeric` (WB11/WB12).
    MidNumeric,
    AfterKatakana,
    AfterExtendNumLet,
    RiOdd,
    RiEven,
}

impl WordBase {
    const fn from_bits(bits: u8) -> Self {
        match bits {
            1 => Self::AfterCr,
            2 => Self::AfterLf,
            3 => Self::AfterNewline,
            4 => Self::AfterWSegSpace,
            5 => Self::AfterALetter,
            6 => Self::AfterHebrewLetter,
            7 => Self::MidLetter,
            8 => Self::HebrewDoubleQuote,
            9 => Self::AfterNumeric,
            10 => Self::MidNumeric,
            11 => Self::AfterKatakana,
            12 => Self::AfterExtendNumLet,
            13 => Self::RiOdd,
            14 => Self::RiEven,
            _ => Self::Any,
        }
    }
}

/// Complete word machine state: base state plus the WB3c flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct WordState {
    pub(crate) base: WordBase,
    pub(crate) after_zwj: bool,
}

impl WordState {
    pub(crate) const INITIAL: Self = Self {
        base: WordBase::Any,
        after_zwj: false,
    };

    /// Packs the state into five bits: base in bits 0–3, WB3c flag in
    /// bit 4.
    pub(crate) const fn to_bits(self) -> u8 {
        self.base as u8 | (self.after_zwj as u8) << 4
    }

    pub(crate) const fn from_bits(bits: u8) -> Self {
        Self {
            base: WordBase::from_bits(bits & 0xf),
            after_zwj: bits & 0x10 != 0,
        }
    }
}

/// One transition of the base machine; see `grapheme::transition` for the
/// wildcard and rule-number conventions.
fn transition(state: WordBase, class: WordClass) -> Option<(WordBase, bool, u16)> {
    use WordBase::*;
    use WordClass as P;

    Some(match (state, class) {
        // WB3b: break before newlines...
        (Any, P::CR) => (AfterCr, true, 32),
        (Any, P::LF) => (AfterLf, true, 32),
        (Any, P::Newline) => (AfterNewline, true, 32),

        // WB3a: ...and after them.
        (AfterCr, P::Any) => (Any, true, 31),
        (AfterLf, P::Any) => (Any, true, 31),
        (AfterNewline, P::Any) => (Any, true, 31),

        // WB3: except between CR and LF.
        (AfterCr, P::LF) => (AfterLf, false, 30),

        // WB3d: keep horizontal whitespace together.
        (Any, P::WSegSpace) => (AfterWSegSpace, true, 9990),
        (AfterWSegSpace, P::WSegSpace) => (AfterWSegSpace, false, 34),

        // WB5: letters chain.
        (Any, P::ALetter) => (AfterALetter, true, 9990),
        (Any, P::HebrewLetter) => (AfterHebrewLetter, true, 9990),
        (AfterALetter, P::ALetter) => (AfterALetter, false, 50),
        (AfterALetter, P::HebrewLetter) => (AfterHebrewLetter, false, 50),
        (AfterHebrewLetter, P::ALetter) => (AfterALetter, false, 50),
        (AfterHebrewLetter, P::HebrewLetter) => (AfterHebrewLetter, false, 50),

        // WB7: the letter completing a mid-letter bridge.
        (MidLetter, P::ALetter) => (AfterALetter, false, 70),
        (MidLetter, P::HebrewLetter) => (AfterHebrewLetter, false, 70),

        // WB7a: hebrew letter before a lone apostrophe.
        (AfterHebrewLetter, P::SingleQuote) => (Any, false, 71),

        // WB7c: the hebrew letter completing a double-quote bridge.
        (HebrewDoubleQuote, P::HebrewLetter) => (AfterHebrewLetter, false, 73),

        // WB8, WB9, WB10: numbers chain with themselves and letters.
        (Any, P::Numeric) => (AfterNumeric, true, 9990),
        (AfterNumeric, P::Numeric) => (AfterNumeric, false, 80),
        (AfterALetter, P::Numeric) => (AfterNumeric, false, 90),
        (AfterHebrewLetter, P::Numeric) => (AfterNumeric, false, 90),
        (AfterNumeric, P::ALetter) => (AfterALetter, false, 100),
        (AfterNumeric, P::HebrewLetter) => (AfterHebrewLetter, false, 100),

        // WB11: the number completing a mid-number bridge.
        (MidNumeric, P::Numeric) => (AfterNumeric, false, 110),

        // WB13: katakana chains.
        (Any, P::Katakana) => (AfterKatakana, true, 9990),
        (AfterKatakana, P::Katakana) => (AfterKatakana, false, 130),

        // WB13a: ExtendNumLet glues onto any word run.
        (Any, P::ExtendNumLet) => (AfterExtendNumLet, true, 9990),
        (AfterALetter, P::ExtendNumLet) => (AfterExtendNumLet, false, 131),
        (AfterHebrewLetter, P::ExtendNumLet) => (AfterExtendNumLet, false, 131),
        (AfterNumeric, P::ExtendNumLet) => (AfterExtendNumLet, false, 131),
        (AfterKatakana, P::ExtendNumLet) => (AfterExtendNumLet, false, 131),
        (AfterExtendNumLet, P::ExtendNumLet) => (AfterExtendNumLet, false, 131),

        // WB13b: and word runs glue onto ExtendNumLet.
        (AfterExtendNumLet, P::ALetter) => (AfterALetter, false, 132),
        (AfterExtendNumLet, P::HebrewLetter) => (AfterHebrewLetter, false, 132),
        (AfterExtendNumLet, P::Numeric) => (AfterNumeric, false, 132),
        (AfterExtendNumLet, P::Katakana) => (AfterKatakana, false, 132),

        // WB15/WB16: pairs of regional indicators.
        (Any, P::RegionalIndicator) => (RiOdd, true, 9990),
        (RiOdd, P::RegionalIndicator) => (RiEven, false, 150),
        (RiEven, P::RegionalIndicator) => (RiOdd, true, 160),

        _ => return None,
    })
}

/// The class of the next base character in the remainder, skipping the
/// Extend/Format/ZWJ characters WB4 makes transparent.
fn next_base_class(rest: Remainder) -> WordClass {
    let mut rest = rest;
    loop {
        let Some((ch, len)) = rest.decode_first() else {
            return WordClass::Any;
        };
        let class = properties::word_class(ch);
        match class {
            WordClass::Extend | WordClass::Format | WordClass::ZWJ => rest = rest.advance(len),
            _ => return class,
        }
    }
}

/// Advances the machine by one character. Returns the new state and
/// whether a word boundary precedes the character.
pub(crate) fn step(state: WordState, ch: char, rest: Remainder) -> (WordState, bool) {
    use WordBase::*;

    let class = properties::word_class(ch);

    // WB4: Extend, Format, and ZWJ are invisible to every later rule.
    // They only fail to attach right after a newline (WB3a applies) or at
    // the start of text.
    if matches!(class, WordClass::Extend | WordClass::Format | WordClass::ZWJ) {
        let after_zwj = class == WordClass::ZWJ;
        return match state.base {
            AfterCr | AfterLf | AfterNewline => (
                WordState {
                    base: Any,
                    after_zwj,
                },
                true,
            ),
            base => (WordState { base, after_zwj }, false),
        };
    }

    // WB3c: ZWJ × ExtendedPictographic, adjacent characters only.
    if state.after_zwj && class == WordClass::ExtendedPictographic {
        return (WordState::INITIAL, false);
    }

    let (mut base, mut boundary) = match transition(state.base, class) {
        Some((next, boundary, _)) => (next, boundary),
        None => {
            let by_state = transition(state.base, WordClass::Any);
            let by_class = transition(WordBase::Any, class);
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
                // WB999: any ÷ any.
                (None, None) => (WordBase::Any, true),
            }
        }
    };

    // The bridging rules fire only when nothing above claimed the
    // character (the resulting state fell back to Any).
    if base == Any {
        match class {
            // WB6: letter × mid-letter, if a letter follows.
            WordClass::MidLetter | WordClass::MidNumLet | WordClass::SingleQuote
                if matches!(state.base, AfterALetter | AfterHebrewLetter) =>
            {
                if matches!(
                    next_base_class(rest),
                    WordClass::ALetter | WordClass::HebrewLetter
                ) {
                    base = MidLetter;
                    boundary = false;
                }
            }
            // WB7b: hebrew × double quote, if a hebrew letter follows.
            WordClass::DoubleQuote if state.base == AfterHebrewLetter => {
                if next_base_class(rest) == WordClass::HebrewLetter {
                    base = HebrewDoubleQuote;
                    boundary = false;
                }
            }
            // WB12: number × mid-number, if a number follows.
            WordClass::MidNum | WordClass::MidNumLet | WordClass::SingleQuote
                if state.base == AfterNumeric =>
            {
                if next_base_class(rest) == WordClass::Numeric {
                    base = MidNumeric;
                    boundary = false;
                }
            }
            _ => {}
        }
    }

    (
        WordState {
            base,
            after_zwj: false,
        },
        boundary,
    )
}

#[cfg(test)]
mod tests;
