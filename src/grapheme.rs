//! Grapheme cluster boundary machine, implementing rules GB1–GB999 of
//! [UAX #29](https://www.unicode.org/reports/tr29/#Grapheme_Cluster_Boundary_Rules)
//! at Unicode 17.0.
//!
//! A [`GraphemeState`] summarizes everything the rules need to know about
//! the characters seen so far, so arbitrarily long clusters are detected
//! with finite storage. The base state covers GB3–GB13; rule GB9c operates
//! on the Indic_Conjunct_Break property, which a character carries
//! independently of its grapheme class, so the conjunct progress lives in
//! an orthogonal [`InCbState`] and GB9c is applied as a post-pass over the
//! base transition's verdict.

use crate::properties::{self, GraphemeClass, InCbClass};

/// Base states of the grapheme cluster machine.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GraphemeBase {
    Any = 0,
    AfterCr,
    AfterControlLf,
    AfterHangulL,
    AfterHangulLvV,
    AfterHangulLvtT,
    AfterPrepend,
    AfterPictographic,
    AfterPictographicZwj,
    RiOdd,
    RiEven,
}

impl GraphemeBase {
    const fn from_bits(bits: u8) -> Self {
        match bits {
            1 => Self::AfterCr,
            2 => Self::AfterControlLf,
            3 => Self::AfterHangulL,
            4 => Self::AfterHangulLvV,
            5 => Self::AfterHangulLvtT,
            6 => Self::AfterPrepend,
            7 => Self::AfterPictographic,
            8 => Self::AfterPictographicZwj,
            9 => Self::RiOdd,
            10 => Self::RiEven,
            _ => Self::Any,
        }
    }
}

/// Progress through a GB9c conjunct:
/// `Consonant [Extend Linker]* Linker [Extend Linker]* × Consonant`.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InCbState {
    None = 0,
    /// Seen a consonant, possibly followed by extends, but no linker yet.
    Consonant,
    /// Seen a consonant and at least one extend, still no linker.
    Extend,
    /// Seen a consonant and at least one linker; the next consonant joins.
    Linker,
}

impl InCbState {
    const fn from_bits(bits: u8) -> Self {
        match bits {
            1 => Self::Consonant,
            2 => Self::Extend,
            3 => Self::Linker,
            _ => Self::None,
        }
    }
}

/// Complete grapheme machine state: base state plus conjunct sub-state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct GraphemeState {
    pub(crate) base: GraphemeBase,
    pub(crate) incb: InCbState,
}

impl GraphemeState {
    pub(crate) const INITIAL: Self = Self {
        base: GraphemeBase::Any,
        incb: InCbState::None,
    };

    /// Packs the state into the low 12 bits of a segmentation token:
    /// base in bits 0–7, conjunct sub-state in bits 8–9.
    pub(crate) const fn to_bits(self) -> u16 {
        self.base as u16 | (self.incb as u16) << 8
    }

    pub(crate) const fn from_bits(bits: u16) -> Self {
        Self {
            base: GraphemeBase::from_bits((bits & 0xff) as u8),
            incb: InCbState::from_bits((bits >> 8 & 0x3) as u8),
        }
    }
}

/// One transition of the base machine, keyed by `(state, class)`.
///
/// Returns the new state, whether there is a boundary before the new
/// character, and the number of the rule that decided, used to resolve
/// conflicts between the two wildcard tiers (lower number wins). Entries
/// with rule 9990 merely enter a state and break by default (GB999).
///
/// `GraphemeClass::Any` doubles as the property wildcard and
/// `GraphemeBase::Any` as the state wildcard, exactly as in the tiered
/// resolution of [`step`].
fn transition(
    state: GraphemeBase,
    class: GraphemeClass,
) -> Option<(GraphemeBase, bool, u16)> {
    use GraphemeBase::*;
    use GraphemeClass as P;

    Some(match (state, class) {
        // GB5: break before controls...
        (Any, P::CR) => (AfterCr, true, 50),
        (Any, P::LF) => (AfterControlLf, true, 50),
        (Any, P::Control) => (AfterControlLf, true, 50),

        // GB4: ...and after them.
        (AfterCr, P::Any) => (Any, true, 40),
        (AfterControlLf, P::Any) => (Any, true, 40),

        // GB3: except between CR and LF.
        (AfterCr, P::LF) => (AfterControlLf, false, 30),

        // GB6: Hangul L chains onto L, V, LV, LVT.
        (Any, P::L) => (AfterHangulL, true, 9990),
        (AfterHangulL, P::L) => (AfterHangulL, false, 60),
        (AfterHangulL, P::V) => (AfterHangulLvV, false, 60),
        (AfterHangulL, P::LV) => (AfterHangulLvV, false, 60),
        (AfterHangulL, P::LVT) => (AfterHangulLvtT, false, 60),

        // GB7: LV or V chains onto V and T.
        (Any, P::LV) => (AfterHangulLvV, true, 9990),
        (Any, P::V) => (AfterHangulLvV, true, 9990),
        (AfterHangulLvV, P::V) => (AfterHangulLvV, false, 70),
        (AfterHangulLvV, P::T) => (AfterHangulLvtT, false, 70),

        // GB8: LVT or T chains onto T.
        (Any, P::LVT) => (AfterHangulLvtT, true, 9990),
        (Any, P::T) => (AfterHangulLvtT, true, 9990),
        (AfterHangulLvtT, P::T) => (AfterHangulLvtT, false, 80),

        // GB9: no break before extending characters or ZWJ.
        (Any, P::Extend) => (Any, false, 90),
        (Any, P::ZWJ) => (Any, false, 90),

        // GB9a: no break before spacing marks.
        (Any, P::SpacingMark) => (Any, false, 91),

        // GB9b: no break after prepend characters.
        (Any, P::Prepend) => (AfterPrepend, true, 9990),
        (AfterPrepend, P::Any) => (Any, false, 92),

        // GB11: emoji ZWJ sequences.
        (Any, P::ExtendedPictographic) => (AfterPictographic, true, 9990),
        (AfterPictographic, P::Extend) => (AfterPictographic, false, 110),
        (AfterPictographic, P::ZWJ) => (AfterPictographicZwj, false, 110),
        (AfterPictographicZwj, P::ExtendedPictographic) => (AfterPictographic, false, 110),

        // GB12/GB13: pairs of regional indicators stay together.
        (Any, P::RegionalIndicator) => (RiOdd, true, 9990),
        (RiOdd, P::RegionalIndicator) => (RiEven, false, 120),
        (RiEven, P::RegionalIndicator) => (RiOdd, true, 120),

        _ => return None,
    })
}

/// Advances the machine by one character. Returns the new state, the
/// character's grapheme class (so callers can cache it), and whether a
/// cluster boundary precedes the character.
///
/// Transitions resolve in four tiers, stopping at the first hit:
/// an exact `(state, class)` entry; the `(state, Any)` wildcard; the
/// `(Any, class)` wildcard; and finally GB999 (boundary, state to `Any`).
/// When both wildcards match, the class wildcard supplies the new state
/// and the lower-numbered rule supplies the verdict, which is UAX #29's
/// specificity ordering.
pub(crate) fn step(state: GraphemeState, ch: char) -> (GraphemeState, GraphemeClass, bool) {
    let class = properties::grapheme_class(ch);
    let incb = properties::incb_class(ch);

    let (base, mut boundary) = match transition(state.base, class) {
        Some((next, boundary, _)) => (next, boundary),
        None => {
            let by_state = transition(state.base, GraphemeClass::Any);
            let by_class = transition(GraphemeBase::Any, class);
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
                // GB999: any ÷ any.
                (None, None) => (GraphemeBase::Any, true),
            }
        }
    };

    // GB9c, applied over the base verdict. The sub-state only ever
    // suppresses a boundary, never introduces one.
    let incb_state = match incb {
        InCbClass::Consonant => {
            if state.incb == InCbState::Linker {
                boundary = false;
            }
            InCbState::Consonant
        }
        InCbClass::Linker => match state.incb {
            InCbState::None => InCbState::None,
            _ => InCbState::Linker,
        },
        InCbClass::Extend => match state.incb {
            InCbState::Consonant | InCbState::Extend => InCbState::Extend,
            InCbState::Linker => InCbState::Linker,
            InCbState::None => InCbState::None,
        },
        InCbClass::None => InCbState::None,
    };

    (
        GraphemeState {
            base,
            incb: incb_state,
        },
        class,
        boundary,
    )
}

#[cfg(test)]
mod tests;
