//! Line breaking context machine, implementing rules LB1–LB31 of
//! [UAX #14](https://www.unicode.org/reports/tr14/) at Unicode 17.0.
//!
//! The machine keeps two pieces of state: a *base* (the line break class
//! of the previous character, with a handful of pseudo-states that
//! collapse runs such as `OP SP*` or `NU (NU|SY|IS)*` into one value) and
//! a set of *context flags* for the rules that depend on more than the
//! previous character:
//!
//! - `SOT` for LB15.1 and LB20.1, set by the initial state and cleared by
//!   the first emitted break;
//! - `AFTER_QU_PI` / `QU_PI_SP` tracking `(QU_Pi SP*)+` for LB15.1;
//! - `AFTER_ZWJ` for LB8a;
//! - `CP_EA_FWH` recording whether the close parenthesis that entered the
//!   current `CP` state was East Asian fullwidth/wide/halfwidth (LB30);
//! - `AKSARA_VIRAMA` noting a virama inside an aksara cluster (LB28a).
//!
//! Rules are applied in TR14 order with an early return per group, which
//! trades a little dispatch cost for being auditable against the standard
//! rule by rule.

use crate::properties::{
    self, EastAsianWidth, GeneralCategory, GraphemeClass, LineClass,
};
use crate::utf8::Remainder;

/// A line break verdict for the position before the current character.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LineBreak {
    DontBreak = 0,
    CanBreak = 1,
    MustBreak = 2,
}

/// Base states: the resolved class of the previous character, plus
/// pseudo-states for multi-character runs.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LineBase {
    Any = 0,
    Bk,
    Cr,
    Lf,
    Nl,
    Sp,
    Zw,
    /// `ZW SP*` (LB8).
    ZwSp,
    Wj,
    Gl,
    Ba,
    Hy,
    Hh,
    Cl,
    Cp,
    /// `(CL|CP) SP*` (LB16).
    ClCpSp,
    Ex,
    Is,
    Sy,
    Op,
    /// `OP SP*` (LB14).
    OpSp,
    Qu,
    /// A quotation mark with general category Pi (LB15.1).
    QuPi,
    /// `QU_Pi SP*` (LB15.1).
    QuPiSp,
    Ns,
    B2,
    /// `B2 SP*` (LB17).
    B2Sp,
    Cb,
    Bb,
    Hl,
    /// `HL (HY|BA)` (LB21a).
    HlHy,
    Al,
    Nu,
    Pr,
    Po,
    Id,
    Eb,
    Em,
    In,
    Jl,
    Jv,
    Jt,
    H2,
    H3,
    Ri,
    RiOdd,
    RiEven,
    Ak,
    Ap,
    /// `(AK|AS|◌) VI`, enabling LB28a's conjunct continuation.
    AkVi,
    Vi,
    Vf,
    /// U+25CC DOTTED CIRCLE, which behaves as AL and as AK (LB28a).
    DottedCircle,
    /// An unassigned Extended_Pictographic codepoint (LB30b).
    PictoCn,
}

impl LineBase {
    const fn from_bits(bits: u8) -> Self {
        use LineBase::*;
        match bits {
            1 => Bk,
            2 => Cr,
            3 => Lf,
            4 => Nl,
            5 => Sp,
            6 => Zw,
            7 => ZwSp,
            8 => Wj,
            9 => Gl,
            10 => Ba,
            11 => Hy,
            12 => Hh,
            13 => Cl,
            14 => Cp,
            15 => ClCpSp,
            16 => Ex,
            17 => Is,
            18 => Sy,
            19 => Op,
            20 => OpSp,
            21 => Qu,
            22 => QuPi,
            23 => QuPiSp,
            24 => Ns,
            25 => B2,
            26 => B2Sp,
            27 => Cb,
            28 => Bb,
            29 => Hl,
            30 => HlHy,
            31 => Al,
            32 => Nu,
            33 => Pr,
            34 => Po,
            35 => Id,
            36 => Eb,
            37 => Em,
            38 => In,
            39 => Jl,
            40 => Jv,
            41 => Jt,
            42 => H2,
            43 => H3,
            44 => Ri,
            45 => RiOdd,
            46 => RiEven,
            47 => Ak,
            48 => Ap,
            49 => AkVi,
            50 => Vi,
            51 => Vf,
            52 => DottedCircle,
            53 => PictoCn,
            _ => Any,
        }
    }
}

/// Context flag bits; see the module docs.
pub(crate) const SOT: u8 = 1 << 0;
pub(crate) const AFTER_QU_PI: u8 = 1 << 1;
pub(crate) const QU_PI_SP: u8 = 1 << 2;
pub(crate) const AFTER_ZWJ: u8 = 1 << 3;
pub(crate) const CP_EA_FWH: u8 = 1 << 4;
pub(crate) const AKSARA_VIRAMA: u8 = 1 << 5;

/// Complete line machine state: base plus context flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LineState {
    pub(crate) base: LineBase,
    pub(crate) flags: u8,
}

impl LineState {
    pub(crate) const INITIAL: Self = Self {
        base: LineBase::Any,
        flags: SOT,
    };

    /// Packs the state into 16 bits: base in the low byte, flags in the
    /// high byte.
    pub(crate) const fn to_bits(self) -> u16 {
        self.base as u16 | (self.flags as u16) << 8
    }

    pub(crate) const fn from_bits(bits: u16) -> Self {
        Self {
            base: LineBase::from_bits((bits & 0xff) as u8),
            flags: (bits >> 8) as u8,
        }
    }
}

/// The base state a character of the given resolved class enters by
/// itself, outside of any run tracking.
fn class_state(class: LineClass) -> LineBase {
    use LineBase::*;
    use LineClass as P;
    match class {
        P::BK => Bk,
        P::CR => Cr,
        P::LF => Lf,
        P::NL => Nl,
        P::SP => Sp,
        P::ZW => Zw,
        P::WJ => Wj,
        P::GL => Gl,
        P::BA => Ba,
        P::HY => Hy,
        P::HH => Hh,
        P::CL => Cl,
        P::CP => Cp,
        P::EX => Ex,
        P::IS => Is,
        P::SY => Sy,
        P::OP => Op,
        P::QU => Qu,
        P::NS => Ns,
        P::AL => Al,
        P::HL => Hl,
        P::NU => Nu,
        P::PR => Pr,
        P::PO => Po,
        P::ID => Id,
        P::EB => Eb,
        P::EM => Em,
        P::IN => In,
        P::CB => Cb,
        P::B2 => B2,
        P::RI => Ri,
        P::JL => Jl,
        P::JV => Jv,
        P::JT => Jt,
        P::H2 => H2,
        P::H3 => H3,
        P::BB => Bb,
        P::AK | P::AS => Ak,
        P::AP => Ap,
        P::VF => Vf,
        P::VI => Vi,
        // CM, ZWJ, and the LB1-resolved classes never reach here.
        _ => Al,
    }
}

/// Carries the context flags forward over the character just consumed.
fn advance(
    state: LineState,
    base: LineBase,
    class: LineClass,
    category: GeneralCategory,
    ch: char,
) -> LineState {
    let mut flags = state.flags;
    if class == LineClass::QU && category == GeneralCategory::Pi {
        flags |= AFTER_QU_PI;
    }
    if class == LineClass::SP && flags & AFTER_QU_PI != 0 {
        flags |= QU_PI_SP;
    }
    if class == LineClass::CP {
        if matches!(
            properties::east_asian_width(ch),
            EastAsianWidth::Fullwidth | EastAsianWidth::Wide | EastAsianWidth::Halfwidth
        ) {
            flags |= CP_EA_FWH;
        } else {
            flags &= !CP_EA_FWH;
        }
    }
    LineState { base, flags }
}

/// Records a break: the start-of-text context ends with the first one.
fn apply_break(
    state: LineState,
    class: LineClass,
    category: GeneralCategory,
    ch: char,
    verdict: LineBreak,
) -> (LineState, LineBreak) {
    let mut next = advance(state, class_state(class), class, category, ch);
    next.flags &= !(SOT | QU_PI_SP | AFTER_QU_PI);
    (next, verdict)
}

/// Advances the machine by one character. Returns the new state and the
/// verdict for the position before the character. `rest` is consulted by
/// LB15.2, which needs to know whether the text ends here.
pub(crate) fn step(state: LineState, ch: char, rest: Remainder) -> (LineState, LineBreak) {
    use LineBase::*;
    use LineBreak::*;
    use LineClass as P;

    let (raw, category) = properties::line_class(ch);

    // LB1: resolve the classes the rest of the algorithm never sees.
    let class = match raw {
        P::AI | P::SG | P::XX => P::AL,
        P::SA => {
            if matches!(category, GeneralCategory::Mn | GeneralCategory::Mc) {
                P::CM
            } else {
                P::AL
            }
        }
        P::CJ => P::NS,
        other => other,
    };

    let base = state.base;

    // LB9/LB10: combining marks and ZWJ attach to the previous base and
    // leave it unchanged, unless there is nothing to attach to.
    if class == P::CM || class == P::ZWJ {
        let space_like = matches!(base, Sp | B2Sp | ClCpSp | QuPiSp);
        let zw_like = matches!(base, Zw | ZwSp);
        let mandatory = matches!(base, Bk | Cr | Lf | Nl);
        let initial = base == Any;
        if !space_like && !zw_like && !mandatory && !initial {
            // LB9: absorbed. A ZWJ arms LB8a; a mark absorbs any armed
            // ZWJ, since LB8a only joins adjacent characters.
            let mut flags = state.flags;
            if class == P::ZWJ {
                flags |= AFTER_ZWJ;
            } else {
                flags &= !AFTER_ZWJ;
            }
            return (LineState { base, flags }, DontBreak);
        }
        // LB10: no base to attach to, treat as AL.
        let mut next = advance(state, Al, P::AL, category, ch);
        if class == P::ZWJ {
            next.flags |= AFTER_ZWJ;
        }
        if mandatory {
            return (next, MustBreak);
        }
        if space_like || zw_like {
            return (next, CanBreak);
        }
        return (next, DontBreak);
    }

    // LB4: always break after BK.
    if base == Bk {
        return apply_break(state, class, category, ch, MustBreak);
    }

    // LB5: CR LF stay together; otherwise break after CR, LF, NL.
    if base == Cr {
        if class == P::LF {
            return (advance(state, Lf, class, category, ch), DontBreak);
        }
        return apply_break(state, class, category, ch, MustBreak);
    }
    if base == Lf || base == Nl {
        return apply_break(state, class, category, ch, MustBreak);
    }

    // LB6: never break before a mandatory break character.
    if matches!(class, P::BK | P::CR | P::LF | P::NL) {
        return (
            advance(state, class_state(class), class, category, ch),
            DontBreak,
        );
    }

    // LB7: never break before SP or ZW; spaces extend the pending runs.
    if class == P::SP || class == P::ZW {
        let new_base = if class == P::ZW {
            Zw
        } else {
            match base {
                Zw | ZwSp => ZwSp,
                B2 | B2Sp => B2Sp,
                Cl | Cp | ClCpSp => ClCpSp,
                Op | OpSp => OpSp,
                QuPi | QuPiSp => QuPiSp,
                _ => Sp,
            }
        };
        let mut next = advance(state, new_base, class, category, ch);
        // A space breaks the adjacency LB8a needs.
        next.flags &= !AFTER_ZWJ;
        return (next, DontBreak);
    }

    // LB8: break after a zero-width space, spaces included.
    if base == Zw || base == ZwSp {
        return apply_break(state, class, category, ch, CanBreak);
    }

    // LB8a: no break after a zero-width joiner.
    if state.flags & AFTER_ZWJ != 0 {
        let mut next = advance(state, class_state(class), class, category, ch);
        next.flags &= !AFTER_ZWJ;
        return (next, DontBreak);
    }

    // LB11: no break around a word joiner.
    if class == P::WJ || base == Wj {
        return (
            advance(state, class_state(class), class, category, ch),
            DontBreak,
        );
    }

    // LB12: no break after glue.
    if base == Gl {
        return (
            advance(state, class_state(class), class, category, ch),
            DontBreak,
        );
    }

    // LB12a: no break before glue, except after spaces and hyphens.
    if class == P::GL {
        let space_like = matches!(base, Sp | B2Sp | ClCpSp | QuPiSp | ZwSp);
        if !space_like && !matches!(base, Ba | Hy | Hh | HlHy) {
            return (advance(state, Gl, class, category, ch), DontBreak);
        }
    }

    // LB13: no break before closing punctuation.
    if matches!(class, P::CL | P::CP | P::EX | P::IS | P::SY) {
        return (
            advance(state, class_state(class), class, category, ch),
            DontBreak,
        );
    }

    // LB14: no break after opening punctuation, spaces included.
    if base == Op || base == OpSp {
        return (
            advance(state, class_state(class), class, category, ch),
            DontBreak,
        );
    }

    // LB15.1: at start of text, (QU_Pi SP*)+ binds to a following OP.
    if state.flags & SOT != 0 && state.flags & QU_PI_SP != 0 && class == P::OP {
        return (advance(state, Op, class, category, ch), DontBreak);
    }

    // LB15.2: at end of text, a space binds to a final quotation mark.
    if matches!(base, Sp | B2Sp | ClCpSp)
        && class == P::QU
        && category == GeneralCategory::Pf
        && rest.is_empty()
    {
        return (advance(state, Qu, class, category, ch), DontBreak);
    }

    // LB16: closing punctuation binds to a nonstarter, spaces included.
    if matches!(base, Cl | Cp | ClCpSp) && class == P::NS {
        return (advance(state, Ns, class, category, ch), DontBreak);
    }

    // LB17: B2 binds to B2, spaces included.
    if matches!(base, B2 | B2Sp) && class == P::B2 {
        return (advance(state, B2, class, category, ch), DontBreak);
    }

    // LB18: otherwise, break after spaces.
    if matches!(base, Sp | B2Sp | ClCpSp) {
        return apply_break(state, class, category, ch, CanBreak);
    }

    // LB19: no break before or after quotation marks.
    if class == P::QU {
        let new_base = if category == GeneralCategory::Pi {
            QuPi
        } else {
            Qu
        };
        return (advance(state, new_base, class, category, ch), DontBreak);
    }
    if matches!(base, Qu | QuPi | QuPiSp) {
        return (
            advance(state, class_state(class), class, category, ch),
            DontBreak,
        );
    }

    // LB20.1: no break after a word-initial hyphen. HH binds always; HY
    // only at start of text.
    if base == Hh && matches!(class, P::AL | P::HL) {
        return (
            advance(state, class_state(class), class, category, ch),
            DontBreak,
        );
    }
    if state.flags & SOT != 0 && base == Hy && matches!(class, P::AL | P::HL) {
        return (
            advance(state, class_state(class), class, category, ch),
            DontBreak,
        );
    }

    // LB20: break around contingent breaks.
    if class == P::CB {
        return (advance(state, Cb, class, category, ch), CanBreak);
    }
    if base == Cb {
        return apply_break(state, class, category, ch, CanBreak);
    }

    // LB21: no break before BA, HY, NS, HH; remember HL (HY|BA) for
    // LB21a.
    if matches!(class, P::BA | P::HY | P::NS | P::HH) {
        let new_base = if base == Hl && matches!(class, P::BA | P::HY) {
            HlHy
        } else {
            class_state(class)
        };
        return (advance(state, new_base, class, category, ch), DontBreak);
    }

    // LB21: no break after BB.
    if base == Bb {
        return (
            advance(state, class_state(class), class, category, ch),
            DontBreak,
        );
    }

    // LB21a: HL (HY|BA) × [^HL AL]. Letters fall through to the later
    // rules, which end up allowing the break.
    if base == HlHy && !matches!(class, P::AL | P::HL) {
        return (
            advance(state, class_state(class), class, category, ch),
            DontBreak,
        );
    }

    // LB21b: no break between SY and a Hebrew letter.
    if base == Sy && class == P::HL {
        return (advance(state, Hl, class, category, ch), DontBreak);
    }

    // LB22: no break before inseparables.
    if class == P::IN {
        return (advance(state, In, class, category, ch), DontBreak);
    }

    // LB23: no break between letters and numbers.
    if matches!(base, Al | Hl | DottedCircle) && class == P::NU {
        return (advance(state, Nu, class, category, ch), DontBreak);
    }
    if base == Nu && matches!(class, P::AL | P::HL) {
        return (
            advance(state, class_state(class), class, category, ch),
            DontBreak,
        );
    }

    // LB23a: no break between numeric affixes and ideographs or emoji.
    if base == Pr && matches!(class, P::ID | P::EB | P::EM) {
        return (
            advance(state, class_state(class), class, category, ch),
            DontBreak,
        );
    }
    if matches!(base, Id | Eb | Em | PictoCn) && class == P::PO {
        return (advance(state, Po, class, category, ch), DontBreak);
    }

    // LB24: no break between numeric affixes and letters.
    if matches!(base, Pr | Po) && matches!(class, P::AL | P::HL) {
        return (
            advance(state, class_state(class), class, category, ch),
            DontBreak,
        );
    }
    if matches!(base, Al | Hl | DottedCircle) && matches!(class, P::PR | P::PO) {
        return (
            advance(state, class_state(class), class, category, ch),
            DontBreak,
        );
    }

    // LB25 (restricted form): no break inside numeric sequences.
    if base == Nu && matches!(class, P::PO | P::PR)
        || matches!(base, Po | Pr | Hy | Is | Nu) && class == P::NU
    {
        return (
            advance(state, class_state(class), class, category, ch),
            DontBreak,
        );
    }

    // LB26: Korean syllable blocks.
    if base == Jl && matches!(class, P::JL | P::JV | P::H2 | P::H3) {
        return (
            advance(state, class_state(class), class, category, ch),
            DontBreak,
        );
    }
    if matches!(base, Jv | H2) && matches!(class, P::JV | P::JT) {
        return (
            advance(state, class_state(class), class, category, ch),
            DontBreak,
        );
    }
    if matches!(base, Jt | H3) && class == P::JT {
        return (advance(state, Jt, class, category, ch), DontBreak);
    }

    // LB27: Korean attaches to postfixes and prefixes.
    if matches!(base, Jl | Jv | Jt | H2 | H3) && matches!(class, P::IN | P::PO) {
        return (
            advance(state, class_state(class), class, category, ch),
            DontBreak,
        );
    }
    if base == Pr && matches!(class, P::JL | P::JV | P::JT | P::H2 | P::H3) {
        return (
            advance(state, class_state(class), class, category, ch),
            DontBreak,
        );
    }

    // LB28a: aksara clusters. The dotted circle acts as an aksara here.
    let dotted = ch == '\u{25cc}';
    let aksara = if base == Ap && (matches!(class, P::AK | P::AS) || dotted) {
        true
    } else {
        (matches!(base, Ak | DottedCircle) && matches!(class, P::VF | P::VI))
            || (base == AkVi && (matches!(class, P::AK | P::AS) || dotted))
    };
    if aksara {
        let new_base = if matches!(class, P::AK | P::AS) {
            Ak
        } else if dotted {
            DottedCircle
        } else if class == P::VI {
            if matches!(base, Ak | DottedCircle) {
                AkVi
            } else {
                Vi
            }
        } else {
            class_state(class)
        };
        let mut next = advance(state, new_base, class, category, ch);
        if matches!(class, P::VI | P::VF) {
            next.flags |= AKSARA_VIRAMA;
        } else {
            next.flags &= !AKSARA_VIRAMA;
        }
        return (next, DontBreak);
    }

    // The dotted circle otherwise behaves like AL but keeps its own
    // state, so a following virama still sees it.
    if dotted {
        let next = advance(state, DottedCircle, class, category, ch);
        let verdict = match base {
            Al | Hl | DottedCircle | Pr | Po | Nu | Is => DontBreak,
            Cp if state.flags & CP_EA_FWH == 0 => DontBreak,
            _ => CanBreak,
        };
        return (next, verdict);
    }

    // Aksara characters outside a cluster enter their states breakably.
    if matches!(class, P::AK | P::AS | P::AP | P::VF | P::VI) {
        let mut next = advance(state, class_state(class), class, category, ch);
        if matches!(class, P::VI | P::VF) {
            next.flags |= AKSARA_VIRAMA;
        } else {
            next.flags &= !AKSARA_VIRAMA;
        }
        return (next, CanBreak);
    }

    // LB28: no break between alphabetics.
    if matches!(base, Al | Hl | DottedCircle) && matches!(class, P::AL | P::HL) {
        return (
            advance(state, class_state(class), class, category, ch),
            DontBreak,
        );
    }

    // LB29: no break between an infix separator and alphabetics.
    if base == Is && matches!(class, P::AL | P::HL) {
        return (
            advance(state, class_state(class), class, category, ch),
            DontBreak,
        );
    }

    // LB30: letters and numbers bind to non-East-Asian parentheses.
    if matches!(base, Al | Hl | Nu | DottedCircle) && class == P::OP {
        if !matches!(
            properties::east_asian_width(ch),
            EastAsianWidth::Fullwidth | EastAsianWidth::Wide | EastAsianWidth::Halfwidth
        ) {
            return (advance(state, Op, class, category, ch), DontBreak);
        }
    }
    if base == Cp && state.flags & CP_EA_FWH == 0 && matches!(class, P::AL | P::HL | P::NU) {
        return (
            advance(state, class_state(class), class, category, ch),
            DontBreak,
        );
    }

    // LB30a: pairs of regional indicators stay together.
    if class == P::RI {
        return match base {
            Ri | RiOdd => (advance(state, RiEven, class, category, ch), DontBreak),
            RiEven => (advance(state, RiOdd, class, category, ch), CanBreak),
            _ => (advance(state, RiOdd, class, category, ch), CanBreak),
        };
    }

    // LB30b: an emoji modifier attaches to its base, including bases
    // encoded on unassigned pictographic codepoints.
    if matches!(base, Eb | PictoCn) && class == P::EM {
        return (advance(state, Em, class, category, ch), DontBreak);
    }
    if properties::grapheme_class(ch) == GraphemeClass::ExtendedPictographic
        && category == GeneralCategory::Cn
    {
        return (advance(state, PictoCn, class, category, ch), CanBreak);
    }

    // LB31: break everywhere else.
    apply_break(state, class, category, ch, CanBreak)
}

#[cfg(test)]
mod tests;
