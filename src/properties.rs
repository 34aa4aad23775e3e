//! Unicode character properties consumed by the segmentation machines.
//!
//! Every machine in this crate is defined in terms of small per-annex
//! property enumerations rather than raw characters:
//!
//! - [`GraphemeClass`] and [`InCbClass`] for grapheme cluster boundaries
//!   ([UAX #29 Section 3.1](https://www.unicode.org/reports/tr29/#Grapheme_Cluster_Break_Property_Values)),
//! - [`WordClass`] and [`SentenceClass`] for word and sentence boundaries
//!   ([UAX #29 Sections 4.1 and 5.1](https://www.unicode.org/reports/tr29/)),
//! - [`LineClass`] together with [`GeneralCategory`] for line breaking
//!   ([UAX #14](https://www.unicode.org/reports/tr14/)),
//! - [`EastAsianWidth`] for monospace width
//!   ([UAX #11](https://www.unicode.org/reports/tr11/)).
//!
//! The lookup tables in [`tables`] are generated from the Unicode 17.0.0
//! character database as sorted, non-overlapping codepoint ranges and are
//! searched with a binary search. ASCII and the Hangul syllable block have
//! computed fast paths and do not hit the tables at all.

pub(crate) mod tables;

/// **Grapheme_Cluster_Break** property values, plus `ExtendedPictographic`,
/// which UAX #29 treats as mutually exclusive with them.
///
/// `Any` doubles as "no property assigned" and must stay at discriminant
/// zero: it is the value cached in a packed segmentation state for the
/// position before the first character.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GraphemeClass {
    Any = 0,
    Prepend,
    CR,
    LF,
    Control,
    Extend,
    RegionalIndicator,
    SpacingMark,
    L,
    V,
    T,
    LV,
    LVT,
    ZWJ,
    ExtendedPictographic,
}

impl GraphemeClass {
    /// Recovers a class from the bits cached in a packed segmentation
    /// state. Out-of-range bits fall back to `Any` rather than being
    /// rejected.
    pub(crate) const fn from_bits(bits: u8) -> Self {
        match bits {
            1 => Self::Prepend,
            2 => Self::CR,
            3 => Self::LF,
            4 => Self::Control,
            5 => Self::Extend,
            6 => Self::RegionalIndicator,
            7 => Self::SpacingMark,
            8 => Self::L,
            9 => Self::V,
            10 => Self::T,
            11 => Self::LV,
            12 => Self::LVT,
            13 => Self::ZWJ,
            14 => Self::ExtendedPictographic,
            _ => Self::Any,
        }
    }
}

/// **Indic_Conjunct_Break** property values from DerivedCoreProperties.txt,
/// used by grapheme rule GB9c.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InCbClass {
    None = 0,
    Consonant,
    Extend,
    Linker,
}

/// **Word_Break** property values. Emoji carry `ExtendedPictographic` here
/// as well (for WB3c), even though WordBreakProperty.txt leaves them
/// unassigned.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WordClass {
    Any = 0,
    CR,
    LF,
    Newline,
    WSegSpace,
    DoubleQuote,
    SingleQuote,
    MidNumLet,
    MidLetter,
    MidNum,
    Numeric,
    ExtendNumLet,
    ALetter,
    HebrewLetter,
    Katakana,
    Extend,
    Format,
    ZWJ,
    RegionalIndicator,
    ExtendedPictographic,
}

/// **Sentence_Break** property values.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SentenceClass {
    Any = 0,
    CR,
    LF,
    Sep,
    Sp,
    Lower,
    Upper,
    OLetter,
    Numeric,
    ATerm,
    STerm,
    Close,
    SContinue,
    Extend,
    Format,
}

/// **Line_Break** classes from UAX #14, at Unicode 17.0 (including the
/// aksara classes AK/AP/AS/VF/VI and the unambiguous hyphen HH).
///
/// `AI`, `SA`, `SG`, `CJ`, and `XX` only ever appear as raw table values;
/// the line analyzer resolves them per rule LB1 before applying any other
/// rule.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LineClass {
    BK,
    CR,
    LF,
    NL,
    SP,
    ZW,
    WJ,
    GL,
    ZWJ,
    CM,
    BA,
    HY,
    HH,
    CL,
    CP,
    EX,
    IS,
    SY,
    OP,
    QU,
    NS,
    AL,
    HL,
    NU,
    PR,
    PO,
    ID,
    EB,
    EM,
    IN,
    CB,
    B2,
    RI,
    JL,
    JV,
    JT,
    H2,
    H3,
    BB,
    AK,
    AP,
    AS,
    VF,
    VI,
    AI,
    SA,
    SG,
    CJ,
    XX,
}

/// Unicode general categories, as far as the line breaking rules need
/// them: the Pi/Pf distinction for quotation marks (LB15.1/LB15.2), Mn/Mc
/// for LB1's SA resolution, and Cn for LB30b's unassigned pictographs.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GeneralCategory {
    None = 0,
    Cc,
    Cf,
    Cn,
    Ll,
    Lm,
    Lo,
    Lu,
    Mc,
    Mn,
    Nd,
    No,
    Pc,
    Pd,
    Pe,
    Pf,
    Pi,
    Po,
    Ps,
    Sc,
    Sk,
    Sm,
    So,
    Zl,
    Zp,
    Zs,
}

/// **East_Asian_Width** property values from UAX #11.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EastAsianWidth {
    Neutral = 0,
    Narrow,
    Ambiguous,
    Halfwidth,
    Wide,
    Fullwidth,
}

/// Binary search over a sorted, non-overlapping range table.
fn search<T: Copy>(table: &[(u32, u32, T)], cp: u32) -> Option<T> {
    let mut from = 0usize;
    let mut to = table.len();
    while from < to {
        let middle = (from + to) / 2;
        let (start, end, value) = table[middle];
        if cp < start {
            to = middle;
        } else if cp > end {
            from = middle + 1;
        } else {
            return Some(value);
        }
    }
    None
}

/// Binary search over the line-break table, which carries a general
/// category sidecar in each row.
fn search_line(cp: u32) -> Option<(LineClass, GeneralCategory)> {
    let table = tables::LINE_BREAK;
    let mut from = 0usize;
    let mut to = table.len();
    while from < to {
        let middle = (from + to) / 2;
        let (start, end, class, category) = table[middle];
        if cp < start {
            to = middle;
        } else if cp > end {
            from = middle + 1;
        } else {
            return Some((class, category));
        }
    }
    None
}

/// Offset of a codepoint into the Hangul syllable block, if it is one.
/// Syllables at offsets divisible by 28 are bare LV syllables; the rest
/// carry a trailing consonant (LVT).
const fn hangul_syllable(cp: u32) -> Option<u32> {
    if cp >= 0xac00 && cp <= 0xd7a3 {
        Some(cp - 0xac00)
    } else {
        None
    }
}

/// The Grapheme_Cluster_Break class of a character, fast-tracking ASCII.
pub(crate) fn grapheme_class(ch: char) -> GraphemeClass {
    let cp = ch as u32;
    if (0x20..=0x7e).contains(&cp) {
        return GraphemeClass::Any;
    }
    if cp == 0x0a {
        return GraphemeClass::LF;
    }
    if cp == 0x0d {
        return GraphemeClass::CR;
    }
    if cp < 0x20 || cp == 0x7f {
        return GraphemeClass::Control;
    }
    if let Some(offset) = hangul_syllable(cp) {
        return if offset % 28 == 0 {
            GraphemeClass::LV
        } else {
            GraphemeClass::LVT
        };
    }
    search(tables::GRAPHEME_BREAK, cp).unwrap_or(GraphemeClass::Any)
}

/// The Indic_Conjunct_Break class of a character. Nothing below U+0300
/// carries one.
pub(crate) fn incb_class(ch: char) -> InCbClass {
    let cp = ch as u32;
    if cp < 0x0300 {
        return InCbClass::None;
    }
    search(tables::INCB, cp).unwrap_or(InCbClass::None)
}

/// The Word_Break class of a character.
pub(crate) fn word_class(ch: char) -> WordClass {
    let cp = ch as u32;
    if hangul_syllable(cp).is_some() {
        // Hangul syllables are ALetter for word breaking.
        return WordClass::ALetter;
    }
    search(tables::WORD_BREAK, cp).unwrap_or(WordClass::Any)
}

/// The Sentence_Break class of a character.
pub(crate) fn sentence_class(ch: char) -> SentenceClass {
    let cp = ch as u32;
    if hangul_syllable(cp).is_some() {
        return SentenceClass::OLetter;
    }
    search(tables::SENTENCE_BREAK, cp).unwrap_or(SentenceClass::Any)
}

/// The raw Line_Break class and general category of a character in a
/// single lookup, fast-tracking ASCII letters and digits. LB1 resolution
/// of AI/SA/SG/CJ/XX is left to the line analyzer, which needs the
/// general category to do it.
pub(crate) fn line_class(ch: char) -> (LineClass, GeneralCategory) {
    let cp = ch as u32;
    if ch.is_ascii_lowercase() {
        return (LineClass::AL, GeneralCategory::Ll);
    }
    if ch.is_ascii_uppercase() {
        return (LineClass::AL, GeneralCategory::Lu);
    }
    if ch.is_ascii_digit() {
        return (LineClass::NU, GeneralCategory::Nd);
    }
    if let Some(offset) = hangul_syllable(cp) {
        let class = if offset % 28 == 0 {
            LineClass::H2
        } else {
            LineClass::H3
        };
        return (class, GeneralCategory::Lo);
    }
    search_line(cp).unwrap_or((LineClass::XX, GeneralCategory::None))
}

/// The East_Asian_Width class of a character, fast-tracking ASCII.
pub(crate) fn east_asian_width(ch: char) -> EastAsianWidth {
    let cp = ch as u32;
    if (0x20..=0x7e).contains(&cp) {
        return EastAsianWidth::Narrow;
    }
    if cp < 0x20 || cp == 0x7f {
        return EastAsianWidth::Neutral;
    }
    if hangul_syllable(cp).is_some() {
        return EastAsianWidth::Wide;
    }
    search(tables::EAST_ASIAN_WIDTH, cp).unwrap_or(EastAsianWidth::Neutral)
}

/// Whether a character has emoji presentation by default, which makes a
/// pictographic cluster two cells wide without a VS-16.
pub(crate) fn has_emoji_presentation(ch: char) -> bool {
    search(tables::EMOJI_PRESENTATION, ch as u32).is_some()
}
