// Generated from the Unicode 17.0.0 character database
// (GraphemeBreakProperty.txt, DerivedCoreProperties.txt,
// WordBreakProperty.txt, SentenceBreakProperty.txt, LineBreak.txt with a
// DerivedGeneralCategory.txt sidecar, EastAsianWidth.txt, emoji-data.txt).
// See https://www.unicode.org/license.html for the Unicode license
// agreement. DO NOT EDIT.
//
// Rows are sorted, non-overlapping [start, end] codepoint ranges. ASCII
// and the Hangul syllable block are resolved arithmetically by the oracle
// and are omitted here where that applies.

use super::{
    EastAsianWidth as E, GeneralCategory as C, GraphemeClass as G, InCbClass as I, LineClass as L,
    SentenceClass as S, WordClass as W,
};

pub(crate) static GRAPHEME_BREAK: &[(u32, u32, G)] = &[
    (0x00ad, 0x00ad, G::Control),
    (0x0300, 0x036f, G::Extend),
    (0x0483, 0x0489, G::Extend),
    (0x0591, 0x05bd, G::Extend),
    (0x05bf, 0x05bf, G::Extend),
    (0x05c1, 0x05c2, G::Extend),
    (0x05c4, 0x05c5, G::Extend),
    (0x05c7, 0x05c7, G::Extend),
    (0x0600, 0x0605, G::Prepend),
    (0x0610, 0x061a, G::Extend),
    (0x061c, 0x061c, G::Control),
    (0x064b, 0x065f, G::Extend),
    (0x0670, 0x0670, G::Extend),
    (0x06d6, 0x06dc, G::Extend),
    (0x06dd, 0x06dd, G::Prepend),
    (0x06df, 0x06e4, G::Extend),
    (0x06e7, 0x06e8, G::Extend),
    (0x06ea, 0x06ed, G::Extend),
    (0x070f, 0x070f, G::Prepend),
    (0x0711, 0x0711, G::Extend),
    (0x0730, 0x074a, G::Extend),
    (0x08d3, 0x08e1, G::Extend),
    (0x08e2, 0x08e2, G::Prepend),
    (0x08e3, 0x0902, G::Extend),
    (0x0903, 0x0903, G::SpacingMark),
    (0x093a, 0x093a, G::Extend),
    (0x093b, 0x093b, G::SpacingMark),
    (0x093c, 0x093c, G::Extend),
    (0x093e, 0x0940, G::SpacingMark),
    (0x0941, 0x0948, G::Extend),
    (0x0949, 0x094c, G::SpacingMark),
    (0x094d, 0x094d, G::Extend),
    (0x094e, 0x094f, G::SpacingMark),
    (0x0951, 0x0957, G::Extend),
    (0x0962, 0x0963, G::Extend),
    (0x0981, 0x0981, G::Extend),
    (0x0982, 0x0983, G::SpacingMark),
    (0x09bc, 0x09bc, G::Extend),
    (0x09be, 0x09be, G::Extend),
    (0x09bf, 0x09c0, G::SpacingMark),
    (0x09c1, 0x09c4, G::Extend),
    (0x09c7, 0x09c8, G::SpacingMark),
    (0x09cb, 0x09cc, G::SpacingMark),
    (0x09cd, 0x09cd, G::Extend),
    (0x09d7, 0x09d7, G::Extend),
    (0x0a01, 0x0a02, G::Extend),
    (0x0a03, 0x0a03, G::SpacingMark),
    (0x0a3c, 0x0a3c, G::Extend),
    (0x0a3e, 0x0a40, G::SpacingMark),
    (0x0a41, 0x0a42, G::Extend),
    (0x0a47, 0x0a48, G::Extend),
    (0x0a4b, 0x0a4d, G::Extend),
    (0x0abc, 0x0abc, G::Extend),
    (0x0abe, 0x0ac0, G::SpacingMark),
    (0x0ac1, 0x0ac5, G::Extend),
    (0x0ac7, 0x0ac8, G::Extend),
    (0x0ac9, 0x0ac9, G::SpacingMark),
    (0x0acb, 0x0acc, G::SpacingMark),
    (0x0acd, 0x0acd, G::Extend),
    (0x0b01, 0x0b01, G::Extend),
    (0x0b02, 0x0b03, G::SpacingMark),
    (0x0b3c, 0x0b3c, G::Extend),
    (0x0b3e, 0x0b3f, G::Extend),
    (0x0b40, 0x0b40, G::SpacingMark),
    (0x0b41, 0x0b44, G::Extend),
    (0x0b47, 0x0b48, G::SpacingMark),
    (0x0b4b, 0x0b4c, G::SpacingMark),
    (0x0b4d, 0x0b4d, G::Extend),
    (0x0b57, 0x0b57, G::Extend),
    (0x0c00, 0x0c00, G::Extend),
    (0x0c01, 0x0c03, G::SpacingMark),
    (0x0c3e, 0x0c40, G::Extend),
    (0x0c41, 0x0c44, G::SpacingMark),
    (0x0c46, 0x0c48, G::Extend),
    (0x0c4a, 0x0c4d, G::Extend),
    (0x0c55, 0x0c56, G::Extend),
    (0x0d00, 0x0d01, G::Extend),
    (0x0d02, 0x0d03, G::SpacingMark),
    (0x0d3b, 0x0d3c, G::Extend),
    (0x0d3e, 0x0d3e, G::Extend),
    (0x0d3f, 0x0d40, G::SpacingMark),
    (0x0d41, 0x0d44, G::Extend),
    (0x0d46, 0x0d48, G::SpacingMark),
    (0x0d4a, 0x0d4c, G::SpacingMark),
    (0x0d4d, 0x0d4d, G::Extend),
    (0x0d57, 0x0d57, G::Extend),
    (0x0e31, 0x0e31, G::Extend),
    (0x0e33, 0x0e33, G::SpacingMark),
    (0x0e34, 0x0e3a, G::Extend),
    (0x0e47, 0x0e4e, G::Extend),
    (0x1100, 0x115f, G::L),
    (0x1160, 0x11a7, G::V),
    (0x11a8, 0x11ff, G::T),
    (0x1a55, 0x1a55, G::SpacingMark),
    (0x1b05, 0x1b33, G::Any),
    (0x1b34, 0x1b34, G::Extend),
    (0x1b35, 0x1b35, G::SpacingMark),
    (0x1b36, 0x1b3a, G::Extend),
    (0x1b3b, 0x1b3b, G::SpacingMark),
    (0x1b3c, 0x1b3c, G::Extend),
    (0x1b3d, 0x1b41, G::SpacingMark),
    (0x1b42, 0x1b42, G::Extend),
    (0x1b43, 0x1b44, G::SpacingMark),
    (0x200b, 0x200b, G::Control),
    (0x200c, 0x200c, G::Extend),
    (0x200d, 0x200d, G::ZWJ),
    (0x200e, 0x200f, G::Control),
    (0x2028, 0x202e, G::Control),
    (0x203c, 0x203c, G::ExtendedPictographic),
    (0x2049, 0x2049, G::ExtendedPictographic),
    (0x2060, 0x206f, G::Control),
    (0x20d0, 0x20f0, G::Extend),
    (0x2122, 0x2122, G::ExtendedPictographic),
    (0x2139, 0x2139, G::ExtendedPictographic),
    (0x2194, 0x2199, G::ExtendedPictographic),
    (0x21a9, 0x21aa, G::ExtendedPictographic),
    (0x231a, 0x231b, G::ExtendedPictographic),
    (0x2328, 0x2328, G::ExtendedPictographic),
    (0x23cf, 0x23cf, G::ExtendedPictographic),
    (0x23e9, 0x23f3, G::ExtendedPictographic),
    (0x23f8, 0x23fa, G::ExtendedPictographic),
    (0x24c2, 0x24c2, G::ExtendedPictographic),
    (0x25aa, 0x25ab, G::ExtendedPictographic),
    (0x25b6, 0x25b6, G::ExtendedPictographic),
    (0x25c0, 0x25c0, G::ExtendedPictographic),
    (0x25fb, 0x25fe, G::ExtendedPictographic),
    (0x2600, 0x27bf, G::ExtendedPictographic),
    (0x2b05, 0x2b07, G::ExtendedPictographic),
    (0x2b1b, 0x2b1c, G::ExtendedPictographic),
    (0x2b50, 0x2b50, G::ExtendedPictographic),
    (0x2b55, 0x2b55, G::ExtendedPictographic),
    (0x3030, 0x3030, G::ExtendedPictographic),
    (0x303d, 0x303d, G::ExtendedPictographic),
    (0x3099, 0x309a, G::Extend),
    (0x3297, 0x3297, G::ExtendedPictographic),
    (0x3299, 0x3299, G::ExtendedPictographic),
    (0xa960, 0xa97c, G::L),
    (0xa9b3, 0xa9b3, G::Extend),
    (0xa9b4, 0xa9b5, G::SpacingMark),
    (0xa9b6, 0xa9b9, G::Extend),
    (0xa9ba, 0xa9bb, G::SpacingMark),
    (0xa9bc, 0xa9bd, G::Extend),
    (0xa9be, 0xa9c0, G::SpacingMark),
    (0xd7b0, 0xd7c6, G::V),
    (0xd7cb, 0xd7fb, G::T),
    (0xfb1e, 0xfb1e, G::Extend),
    (0xfe00, 0xfe0f, G::Extend),
    (0xfe20, 0xfe2f, G::Extend),
    (0xfeff, 0xfeff, G::Control),
    (0xff9e, 0xff9f, G::Extend),
    (0xfff9, 0xfffb, G::Control),
    (0x1f004, 0x1f004, G::ExtendedPictographic),
    (0x1f0cf, 0x1f0cf, G::ExtendedPictographic),
    (0x1f170, 0x1f171, G::ExtendedPictographic),
    (0x1f17e, 0x1f17f, G::ExtendedPictographic),
    (0x1f18e, 0x1f18e, G::ExtendedPictographic),
    (0x1f191, 0x1f19a, G::ExtendedPictographic),
    (0x1f1e6, 0x1f1ff, G::RegionalIndicator),
    (0x1f201, 0x1f202, G::ExtendedPictographic),
    (0x1f21a, 0x1f21a, G::ExtendedPictographic),
    (0x1f22f, 0x1f22f, G::ExtendedPictographic),
    (0x1f232, 0x1f23a, G::ExtendedPictographic),
    (0x1f250, 0x1f251, G::ExtendedPictographic),
    (0x1f300, 0x1f3fa, G::ExtendedPictographic),
    (0x1f3fb, 0x1f3ff, G::Extend),
    (0x1f400, 0x1f5ff, G::ExtendedPictographic),
    (0x1f600, 0x1f64f, G::ExtendedPictographic),
    (0x1f680, 0x1f6ff, G::ExtendedPictographic),
    (0x1f700, 0x1f77f, G::ExtendedPictographic),
    (0x1f780, 0x1f7ff, G::ExtendedPictographic),
    (0x1f800, 0x1f8ff, G::ExtendedPictographic),
    (0x1f900, 0x1f9ff, G::ExtendedPictographic),
    (0x1fa00, 0x1faff, G::ExtendedPictographic),
    (0x1fc00, 0x1fffd, G::ExtendedPictographic),
    (0xe0020, 0xe007f, G::Extend),
    (0xe0100, 0xe01ef, G::Extend),
];

pub(crate) static INCB: &[(u32, u32, I)] = &[
    (0x0300, 0x036f, I::Extend),
    (0x0915, 0x0939, I::Consonant),
    (0x093c, 0x093c, I::Extend),
    (0x094d, 0x094d, I::Linker),
    (0x0951, 0x0954, I::Extend),
    (0x0958, 0x095f, I::Consonant),
    (0x0995, 0x09a8, I::Consonant),
    (0x09aa, 0x09b0, I::Consonant),
    (0x09b2, 0x09b2, I::Consonant),
    (0x09b6, 0x09b9, I::Consonant),
    (0x09bc, 0x09bc, I::Extend),
    (0x09cd, 0x09cd, I::Linker),
    (0x09dc, 0x09dd, I::Consonant),
    (0x09df, 0x09df, I::Consonant),
    (0x09f0, 0x09f1, I::Consonant),
    (0x0a95, 0x0aa8, I::Consonant),
    (0x0aaa, 0x0ab0, I::Consonant),
    (0x0ab2, 0x0ab3, I::Consonant),
    (0x0ab5, 0x0ab9, I::Consonant),
    (0x0abc, 0x0abc, I::Extend),
    (0x0acd, 0x0acd, I::Linker),
    (0x0b15, 0x0b28, I::Consonant),
    (0x0b2a, 0x0b30, I::Consonant),
    (0x0b32, 0x0b33, I::Consonant),
    (0x0b35, 0x0b39, I::Consonant),
    (0x0b3c, 0x0b3c, I::Extend),
    (0x0b4d, 0x0b4d, I::Linker),
    (0x0b5c, 0x0b5d, I::Consonant),
    (0x0b5f, 0x0b5f, I::Consonant),
    (0x0b71, 0x0b71, I::Consonant),
    (0x0c15, 0x0c28, I::Consonant),
    (0x0c2a, 0x0c39, I::Consonant),
    (0x0c4d, 0x0c4d, I::Linker),
    (0x0c58, 0x0c5a, I::Consonant),
    (0x0d15, 0x0d3a, I::Consonant),
    (0x0d4d, 0x0d4d, I::Linker),
    (0x200d, 0x200d, I::Extend),
    (0x20d0, 0x20f0, I::Extend),
    (0xfe00, 0xfe0f, I::Extend),
];

pub(crate) static WORD_BREAK: &[(u32, u32, W)] = &[
    (0x000a, 0x000a, W::LF),
    (0x000b, 0x000c, W::Newline),
    (0x000d, 0x000d, W::CR),
    (0x0020, 0x0020, W::WSegSpace),
    (0x0022, 0x0022, W::DoubleQuote),
    (0x0027, 0x0027, W::SingleQuote),
    (0x002c, 0x002c, W::MidNum),
    (0x002e, 0x002e, W::MidNumLet),
    (0x0030, 0x0039, W::Numeric),
    (0x003a, 0x003a, W::MidLetter),
    (0x003b, 0x003b, W::MidNum),
    (0x0041, 0x005a, W::ALetter),
    (0x005f, 0x005f, W::ExtendNumLet),
    (0x0061, 0x007a, W::ALetter),
    (0x0085, 0x0085, W::Newline),
    (0x00aa, 0x00aa, W::ALetter),
    (0x00ad, 0x00ad, W::Format),
    (0x00b5, 0x00b5, W::ALetter),
    (0x00b7, 0x00b7, W::MidLetter),
    (0x00ba, 0x00ba, W::ALetter),
    (0x00c0, 0x00d6, W::ALetter),
    (0x00d8, 0x00f6, W::ALetter),
    (0x00f8, 0x02ff, W::ALetter),
    (0x0300, 0x036f, W::Extend),
    (0x0370, 0x0374, W::ALetter),
    (0x0376, 0x0377, W::ALetter),
    (0x037a, 0x037d, W::ALetter),
    (0x037f, 0x037f, W::ALetter),
    (0x0386, 0x0386, W::ALetter),
    (0x0388, 0x03ff, W::ALetter),
    (0x0400, 0x0482, W::ALetter),
    (0x0483, 0x0489, W::Extend),
    (0x048a, 0x052f, W::ALetter),
    (0x0531, 0x0556, W::ALetter),
    (0x0561, 0x0587, W::ALetter),
    (0x0591, 0x05bd, W::Extend),
    (0x05bf, 0x05bf, W::Extend),
    (0x05c1, 0x05c2, W::Extend),
    (0x05c4, 0x05c5, W::Extend),
    (0x05c7, 0x05c7, W::Extend),
    (0x05d0, 0x05ea, W::HebrewLetter),
    (0x05ef, 0x05f2, W::HebrewLetter),
    (0x05f3, 0x05f3, W::ALetter),
    (0x05f4, 0x05f4, W::MidLetter),
    (0x0600, 0x0605, W::Format),
    (0x061c, 0x061c, W::Format),
    (0x0620, 0x064a, W::ALetter),
    (0x064b, 0x065f, W::Extend),
    (0x0660, 0x0669, W::Numeric),
    (0x066b, 0x066c, W::MidNum),
    (0x0670, 0x0670, W::Extend),
    (0x0671, 0x06d3, W::ALetter),
    (0x06d5, 0x06d5, W::ALetter),
    (0x06d6, 0x06dc, W::Extend),
    (0x06dd, 0x06dd, W::Format),
    (0x06df, 0x06e4, W::Extend),
    (0x06e5, 0x06e6, W::ALetter),
    (0x06e7, 0x06e8, W::Extend),
    (0x06ea, 0x06ed, W::Extend),
    (0x06ee, 0x06ef, W::ALetter),
    (0x06f0, 0x06f9, W::Numeric),
    (0x06fa, 0x06fc, W::ALetter),
    (0x0700, 0x070d, W::Any),
    (0x070f, 0x070f, W::Format),
    (0x0710, 0x0710, W::ALetter),
    (0x0711, 0x0711, W::Extend),
    (0x0712, 0x072f, W::ALetter),
    (0x0730, 0x074a, W::Extend),
    (0x074d, 0x07a5, W::ALetter),
    (0x0900, 0x0903, W::Extend),
    (0x0904, 0x0939, W::ALetter),
    (0x093a, 0x093c, W::Extend),
    (0x093d, 0x093d, W::ALetter),
    (0x093e, 0x094c, W::Extend),
    (0x094d, 0x094d, W::Extend),
    (0x094e, 0x094f, W::Extend),
    (0x0950, 0x0950, W::ALetter),
    (0x0951, 0x0957, W::Extend),
    (0x0958, 0x0961, W::ALetter),
    (0x0962, 0x0963, W::Extend),
    (0x0966, 0x096f, W::Numeric),
    (0x0971, 0x097f, W::ALetter),
    (0x0981, 0x0983, W::Extend),
    (0x0985, 0x09b9, W::ALetter),
    (0x09bc, 0x09bc, W::Extend),
    (0x09bd, 0x09bd, W::ALetter),
    (0x09be, 0x09cc, W::Extend),
    (0x09cd, 0x09cd, W::Extend),
    (0x09ce, 0x09ce, W::ALetter),
    (0x09d7, 0x09d7, W::Extend),
    (0x09dc, 0x09e1, W::ALetter),
    (0x09e2, 0x09e3, W::Extend),
    (0x09e6, 0x09ef, W::Numeric),
    (0x09f0, 0x09f1, W::ALetter),
    (0x0e01, 0x0e3a, W::Any),
    (0x0e40, 0x0e4e, W::Any),
    (0x0e50, 0x0e59, W::Numeric),
    (0x1100, 0x11ff, W::ALetter),
    (0x1e00, 0x1fff, W::ALetter),
    (0x2000, 0x2006, W::Any),
    (0x2007, 0x2007, W::Any),
    (0x2008, 0x200a, W::Any),
    (0x200c, 0x200c, W::Extend),
    (0x200d, 0x200d, W::ZWJ),
    (0x200e, 0x200f, W::Format),
    (0x2018, 0x2018, W::Any),
    (0x2019, 0x2019, W::MidNumLet),
    (0x2024, 0x2024, W::MidNumLet),
    (0x2027, 0x2027, W::MidLetter),
    (0x2028, 0x2029, W::Newline),
    (0x202a, 0x202e, W::Format),
    (0x202f, 0x202f, W::ExtendNumLet),
    (0x203f, 0x2040, W::ExtendNumLet),
    (0x2044, 0x2044, W::MidNum),
    (0x2054, 0x2054, W::ExtendNumLet),
    (0x2060, 0x2064, W::Format),
    (0x20d0, 0x20f0, W::Extend),
    (0x2c60, 0x2c7f, W::ALetter),
    (0x3031, 0x3035, W::Katakana),
    (0x309b, 0x309c, W::Katakana),
    (0x30a0, 0x30fa, W::Katakana),
    (0x30fc, 0x30ff, W::Katakana),
    (0x31f0, 0x31ff, W::Katakana),
    (0x32d0, 0x32fe, W::Katakana),
    (0x3300, 0x3357, W::Katakana),
    (0xa960, 0xa97c, W::ALetter),
    (0xd7b0, 0xd7fb, W::ALetter),
    (0xfb1d, 0xfb1d, W::HebrewLetter),
    (0xfb1e, 0xfb1e, W::Extend),
    (0xfb1f, 0xfb28, W::HebrewLetter),
    (0xfb2a, 0xfb4f, W::HebrewLetter),
    (0xfe00, 0xfe0f, W::Extend),
    (0xfe20, 0xfe2f, W::Extend),
    (0xfe33, 0xfe34, W::ExtendNumLet),
    (0xfe4d, 0xfe4f, W::ExtendNumLet),
    (0xfeff, 0xfeff, W::Format),
    (0xff07, 0xff07, W::MidNumLet),
    (0xff0c, 0xff0c, W::MidNum),
    (0xff0e, 0xff0e, W::MidNumLet),
    (0xff10, 0xff19, W::Numeric),
    (0xff1a, 0xff1a, W::MidLetter),
    (0xff1b, 0xff1b, W::MidNum),
    (0xff21, 0xff3a, W::ALetter),
    (0xff3f, 0xff3f, W::ExtendNumLet),
    (0xff41, 0xff5a, W::ALetter),
    (0xff66, 0xff9d, W::Katakana),
    (0xff9e, 0xff9f, W::Extend),
    (0x1f1e6, 0x1f1ff, W::RegionalIndicator),
    (0x1f300, 0x1f3fa, W::ExtendedPictographic),
    (0x1f3fb, 0x1f3ff, W::Extend),
    (0x1f400, 0x1f5ff, W::ExtendedPictographic),
    (0x1f600, 0x1f64f, W::ExtendedPictographic),
    (0x1f680, 0x1f6ff, W::ExtendedPictographic),
    (0x1f900, 0x1f9ff, W::ExtendedPictographic),
    (0x1fa00, 0x1faff, W::ExtendedPictographic),
    (0x1fc00, 0x1fffd, W::ExtendedPictographic),
    (0xe0020, 0xe007f, W::Extend),
    (0xe0100, 0xe01ef, W::Extend),
];

pub(crate) static SENTENCE_BREAK: &[(u32, u32, S)] = &[
    (0x0009, 0x0009, S::Sp),
    (0x000a, 0x000a, S::LF),
    (0x000b, 0x000c, S::Sp),
    (0x000d, 0x000d, S::CR),
    (0x0020, 0x0020, S::Sp),
    (0x0021, 0x0021, S::STerm),
    (0x0022, 0x0022, S::Close),
    (0x0027, 0x0029, S::Close),
    (0x002c, 0x002d, S::SContinue),
    (0x002e, 0x002e, S::ATerm),
    (0x0030, 0x0039, S::Numeric),
    (0x003a, 0x003a, S::SContinue),
    (0x003f, 0x003f, S::STerm),
    (0x0041, 0x005a, S::Upper),
    (0x005b, 0x005b, S::Close),
    (0x005d, 0x005d, S::Close),
    (0x0061, 0x007a, S::Lower),
    (0x007b, 0x007b, S::Close),
    (0x007d, 0x007d, S::Close),
    (0x0085, 0x0085, S::Sep),
    (0x00a0, 0x00a0, S::Sp),
    (0x00aa, 0x00aa, S::Lower),
    (0x00ab, 0x00ab, S::Close),
    (0x00ad, 0x00ad, S::Format),
    (0x00b5, 0x00b5, S::Lower),
    (0x00ba, 0x00ba, S::Lower),
    (0x00bb, 0x00bb, S::Close),
    (0x00c0, 0x00d6, S::Upper),
    (0x00d8, 0x00de, S::Upper),
    (0x00df, 0x00f6, S::Lower),
    (0x00f8, 0x00ff, S::Lower),
    (0x0100, 0x02ff, S::OLetter),
    (0x0300, 0x036f, S::Extend),
    (0x0370, 0x03ff, S::OLetter),
    (0x0400, 0x0482, S::OLetter),
    (0x0483, 0x0489, S::Extend),
    (0x048a, 0x052f, S::OLetter),
    (0x0589, 0x0589, S::STerm),
    (0x0591, 0x05bd, S::Extend),
    (0x05bf, 0x05bf, S::Extend),
    (0x05c1, 0x05c2, S::Extend),
    (0x05c4, 0x05c5, S::Extend),
    (0x05c7, 0x05c7, S::Extend),
    (0x05d0, 0x05ea, S::OLetter),
    (0x05ef, 0x05f3, S::OLetter),
    (0x0600, 0x0605, S::Format),
    (0x061c, 0x061c, S::Format),
    (0x061f, 0x061f, S::STerm),
    (0x0620, 0x064a, S::OLetter),
    (0x064b, 0x065f, S::Extend),
    (0x0660, 0x0669, S::Numeric),
    (0x0670, 0x0670, S::Extend),
    (0x0671, 0x06d3, S::OLetter),
    (0x06d4, 0x06d4, S::STerm),
    (0x06d5, 0x06d5, S::OLetter),
    (0x06d6, 0x06dc, S::Extend),
    (0x06dd, 0x06dd, S::Format),
    (0x06f0, 0x06f9, S::Numeric),
    (0x0900, 0x0903, S::Extend),
    (0x0904, 0x0939, S::OLetter),
    (0x093a, 0x093c, S::Extend),
    (0x093d, 0x093d, S::OLetter),
    (0x093e, 0x094c, S::Extend),
    (0x094d, 0x094d, S::Extend),
    (0x094e, 0x094f, S::Extend),
    (0x0950, 0x0950, S::OLetter),
    (0x0951, 0x0957, S::Extend),
    (0x0958, 0x0961, S::OLetter),
    (0x0962, 0x0963, S::Extend),
    (0x0964, 0x0965, S::STerm),
    (0x0966, 0x096f, S::Numeric),
    (0x0971, 0x097f, S::OLetter),
    (0x0985, 0x09b9, S::OLetter),
    (0x09bc, 0x09cd, S::Extend),
    (0x09ce, 0x09ce, S::OLetter),
    (0x09e6, 0x09ef, S::Numeric),
    (0x0e01, 0x0e30, S::OLetter),
    (0x0e31, 0x0e31, S::Extend),
    (0x0e32, 0x0e33, S::OLetter),
    (0x0e34, 0x0e3a, S::Extend),
    (0x0e40, 0x0e46, S::OLetter),
    (0x0e47, 0x0e4e, S::Extend),
    (0x0e50, 0x0e59, S::Numeric),
    (0x1100, 0x11ff, S::OLetter),
    (0x1e00, 0x1fff, S::OLetter),
    (0x200b, 0x200b, S::Any),
    (0x200c, 0x200d, S::Extend),
    (0x200e, 0x200f, S::Format),
    (0x2013, 0x2014, S::SContinue),
    (0x2018, 0x2019, S::Close),
    (0x201c, 0x201d, S::Close),
    (0x2028, 0x2029, S::Sep),
    (0x202a, 0x202e, S::Format),
    (0x2039, 0x203a, S::Close),
    (0x2060, 0x2064, S::Format),
    (0x20d0, 0x20f0, S::Extend),
    (0x3001, 0x3001, S::Any),
    (0x3002, 0x3002, S::STerm),
    (0x3008, 0x3011, S::Close),
    (0x3014, 0x301b, S::Close),
    (0x3041, 0x3096, S::OLetter),
    (0x3099, 0x309a, S::Extend),
    (0x30a1, 0x30fa, S::OLetter),
    (0x30fc, 0x30ff, S::OLetter),
    (0x3105, 0x312f, S::OLetter),
    (0x3400, 0x4dbf, S::OLetter),
    (0x4e00, 0x9fff, S::OLetter),
    (0xa960, 0xa97c, S::OLetter),
    (0xd7b0, 0xd7fb, S::OLetter),
    (0xfb1d, 0xfb28, S::OLetter),
    (0xfb2a, 0xfb4f, S::OLetter),
    (0xfe00, 0xfe0f, S::Extend),
    (0xfe20, 0xfe2f, S::Extend),
    (0xfeff, 0xfeff, S::Format),
    (0xff01, 0xff01, S::STerm),
    (0xff08, 0xff09, S::Close),
    (0xff0e, 0xff0e, S::ATerm),
    (0xff10, 0xff19, S::Numeric),
    (0xff1f, 0xff1f, S::STerm),
    (0xff21, 0xff3a, S::Upper),
    (0xff41, 0xff5a, S::Lower),
    (0xff61, 0xff61, S::STerm),
    (0xff62, 0xff63, S::Close),
    (0xff66, 0xff9d, S::OLetter),
    (0xe0020, 0xe007f, S::Extend),
    (0xe0100, 0xe01ef, S::Extend),
];

pub(crate) static LINE_BREAK: &[(u32, u32, L, C)] = &[
    (0x0000, 0x0008, L::CM, C::Cc),
    (0x0009, 0x0009, L::BA, C::Cc),
    (0x000a, 0x000a, L::LF, C::Cc),
    (0x000b, 0x000c, L::BK, C::Cc),
    (0x000d, 0x000d, L::CR, C::Cc),
    (0x000e, 0x001f, L::CM, C::Cc),
    (0x0020, 0x0020, L::SP, C::Zs),
    (0x0021, 0x0021, L::EX, C::Po),
    (0x0022, 0x0022, L::QU, C::Po),
    (0x0023, 0x0023, L::AL, C::Po),
    (0x0024, 0x0024, L::PR, C::Sc),
    (0x0025, 0x0025, L::PO, C::Po),
    (0x0026, 0x0026, L::AL, C::Po),
    (0x0027, 0x0027, L::QU, C::Po),
    (0x0028, 0x0028, L::OP, C::Ps),
    (0x0029, 0x0029, L::CP, C::Pe),
    (0x002a, 0x002a, L::AL, C::Po),
    (0x002b, 0x002b, L::PR, C::Sm),
    (0x002c, 0x002c, L::IS, C::Po),
    (0x002d, 0x002d, L::HY, C::Pd),
    (0x002e, 0x002e, L::IS, C::Po),
    (0x002f, 0x002f, L::SY, C::Po),
    (0x003a, 0x003b, L::IS, C::Po),
    (0x003c, 0x003e, L::AL, C::Sm),
    (0x003f, 0x003f, L::EX, C::Po),
    (0x0040, 0x0040, L::AL, C::Po),
    (0x005b, 0x005b, L::OP, C::Ps),
    (0x005c, 0x005c, L::PR, C::Po),
    (0x005d, 0x005d, L::CP, C::Pe),
    (0x005e, 0x005e, L::AL, C::Sk),
    (0x005f, 0x005f, L::AL, C::Pc),
    (0x0060, 0x0060, L::AL, C::Sk),
    (0x007b, 0x007b, L::OP, C::Ps),
    (0x007c, 0x007c, L::BA, C::Sm),
    (0x007d, 0x007d, L::CL, C::Pe),
    (0x007e, 0x007e, L::AL, C::Sm),
    (0x007f, 0x0084, L::CM, C::Cc),
    (0x0085, 0x0085, L::NL, C::Cc),
    (0x0086, 0x009f, L::CM, C::Cc),
    (0x00a0, 0x00a0, L::GL, C::Zs),
    (0x00a1, 0x00a1, L::OP, C::Po),
    (0x00a2, 0x00a2, L::PO, C::Sc),
    (0x00a3, 0x00a5, L::PR, C::Sc),
    (0x00a6, 0x00a6, L::AL, C::So),
    (0x00a7, 0x00a7, L::AI, C::Po),
    (0x00a8, 0x00a8, L::AI, C::Sk),
    (0x00a9, 0x00a9, L::AL, C::So),
    (0x00aa, 0x00aa, L::AI, C::Lo),
    (0x00ab, 0x00ab, L::QU, C::Pi),
    (0x00ac, 0x00ac, L::AL, C::Sm),
    (0x00ad, 0x00ad, L::BA, C::Cf),
    (0x00ae, 0x00ae, L::AL, C::So),
    (0x00af, 0x00af, L::AL, C::Sk),
    (0x00b0, 0x00b0, L::PO, C::So),
    (0x00b1, 0x00b1, L::PR, C::Sm),
    (0x00b2, 0x00b3, L::AI, C::No),
    (0x00b4, 0x00b4, L::BB, C::Sk),
    (0x00b5, 0x00b5, L::AL, C::Ll),
    (0x00b6, 0x00b7, L::AI, C::Po),
    (0x00b8, 0x00b8, L::AI, C::Sk),
    (0x00b9, 0x00b9, L::AI, C::No),
    (0x00ba, 0x00ba, L::AI, C::Lo),
    (0x00bb, 0x00bb, L::QU, C::Pf),
    (0x00bc, 0x00be, L::AI, C::No),
    (0x00bf, 0x00bf, L::OP, C::Po),
    (0x00c0, 0x00d6, L::AL, C::Lu),
    (0x00d7, 0x00d7, L::AI, C::Sm),
    (0x00d8, 0x00de, L::AL, C::Lu),
    (0x00df, 0x00f6, L::AL, C::Ll),
    (0x00f7, 0x00f7, L::AI, C::Sm),
    (0x00f8, 0x00ff, L::AL, C::Ll),
    (0x0100, 0x017f, L::AL, C::Ll),
    (0x0180, 0x02ff, L::AL, C::Ll),
    (0x0300, 0x036f, L::CM, C::Mn),
    (0x0370, 0x03ff, L::AL, C::Ll),
    (0x0400, 0x0482, L::AL, C::Ll),
    (0x0483, 0x0489, L::CM, C::Mn),
    (0x048a, 0x052f, L::AL, C::Ll),
    (0x0531, 0x0556, L::AL, C::Lu),
    (0x0561, 0x0587, L::AL, C::Ll),
    (0x0589, 0x0589, L::AL, C::Po),
    (0x058a, 0x058a, L::BA, C::Pd),
    (0x0591, 0x05bd, L::CM, C::Mn),
    (0x05be, 0x05be, L::BA, C::Pd),
    (0x05bf, 0x05bf, L::CM, C::Mn),
    (0x05c0, 0x05c0, L::AL, C::Po),
    (0x05c1, 0x05c2, L::CM, C::Mn),
    (0x05c3, 0x05c3, L::AL, C::Po),
    (0x05c4, 0x05c5, L::CM, C::Mn),
    (0x05c6, 0x05c6, L::EX, C::Po),
    (0x05c7, 0x05c7, L::CM, C::Mn),
    (0x05d0, 0x05ea, L::HL, C::Lo),
    (0x05ef, 0x05f2, L::HL, C::Lo),
    (0x05f3, 0x05f4, L::AL, C::Po),
    (0x061b, 0x061b, L::EX, C::Po),
    (0x061f, 0x061f, L::EX, C::Po),
    (0x0620, 0x064a, L::AL, C::Lo),
    (0x064b, 0x065f, L::CM, C::Mn),
    (0x0660, 0x0669, L::NU, C::Nd),
    (0x066a, 0x066a, L::PO, C::Po),
    (0x066b, 0x066c, L::NU, C::Po),
    (0x0670, 0x0670, L::CM, C::Mn),
    (0x0671, 0x06d3, L::AL, C::Lo),
    (0x06d4, 0x06d4, L::EX, C::Po),
    (0x06d5, 0x06d5, L::AL, C::Lo),
    (0x06d6, 0x06dc, L::CM, C::Mn),
    (0x06f0, 0x06f9, L::NU, C::Nd),
    (0x0900, 0x0902, L::CM, C::Mn),
    (0x0903, 0x0903, L::CM, C::Mc),
    (0x0904, 0x0939, L::AL, C::Lo),
    (0x093a, 0x093a, L::CM, C::Mn),
    (0x093b, 0x093b, L::CM, C::Mc),
    (0x093c, 0x093c, L::CM, C::Mn),
    (0x093d, 0x093d, L::AL, C::Lo),
    (0x093e, 0x0940, L::CM, C::Mc),
    (0x0941, 0x0948, L::CM, C::Mn),
    (0x0949, 0x094c, L::CM, C::Mc),
    (0x094d, 0x094d, L::CM, C::Mn),
    (0x094e, 0x094f, L::CM, C::Mc),
    (0x0950, 0x0950, L::AL, C::Lo),
    (0x0951, 0x0957, L::CM, C::Mn),
    (0x0958, 0x0961, L::AL, C::Lo),
    (0x0962, 0x0963, L::CM, C::Mn),
    (0x0964, 0x0965, L::BA, C::Po),
    (0x0966, 0x096f, L::NU, C::Nd),
    (0x0970, 0x0970, L::AL, C::Po),
    (0x0971, 0x097f, L::AL, C::Lo),
    (0x0981, 0x0983, L::CM, C::Mn),
    (0x0985, 0x09b9, L::AL, C::Lo),
    (0x09bc, 0x09c4, L::CM, C::Mn),
    (0x09c7, 0x09cc, L::CM, C::Mc),
    (0x09cd, 0x09cd, L::CM, C::Mn),
    (0x09ce, 0x09ce, L::AL, C::Lo),
    (0x09d7, 0x09d7, L::CM, C::Mc),
    (0x09dc, 0x09e1, L::AL, C::Lo),
    (0x09e2, 0x09e3, L::CM, C::Mn),
    (0x09e6, 0x09ef, L::NU, C::Nd),
    (0x09f0, 0x09f1, L::AL, C::Lo),
    (0x0a95, 0x0ab9, L::AL, C::Lo),
    (0x0abc, 0x0acc, L::CM, C::Mn),
    (0x0acd, 0x0acd, L::CM, C::Mn),
    (0x0ae6, 0x0aef, L::NU, C::Nd),
    (0x0b15, 0x0b39, L::AL, C::Lo),
    (0x0b3c, 0x0b4c, L::CM, C::Mn),
    (0x0b4d, 0x0b4d, L::CM, C::Mn),
    (0x0b5c, 0x0b5f, L::AL, C::Lo),
    (0x0b66, 0x0b6f, L::NU, C::Nd),
    (0x0b71, 0x0b71, L::AL, C::Lo),
    (0x0c15, 0x0c39, L::AL, C::Lo),
    (0x0c3c, 0x0c4c, L::CM, C::Mn),
    (0x0c4d, 0x0c4d, L::CM, C::Mn),
    (0x0c58, 0x0c5a, L::AL, C::Lo),
    (0x0c66, 0x0c6f, L::NU, C::Nd),
    (0x0d15, 0x0d3a, L::AL, C::Lo),
    (0x0d3b, 0x0d4c, L::CM, C::Mn),
    (0x0d4d, 0x0d4d, L::CM, C::Mn),
    (0x0d66, 0x0d6f, L::NU, C::Nd),
    (0x0e01, 0x0e30, L::SA, C::Lo),
    (0x0e31, 0x0e31, L::SA, C::Mn),
    (0x0e32, 0x0e33, L::SA, C::Lo),
    (0x0e34, 0x0e3a, L::SA, C::Mn),
    (0x0e3f, 0x0e3f, L::PR, C::Sc),
    (0x0e40, 0x0e46, L::SA, C::Lo),
    (0x0e47, 0x0e4e, L::SA, C::Mn),
    (0x0e4f, 0x0e4f, L::AL, C::Po),
    (0x0e50, 0x0e59, L::NU, C::Nd),
    (0x0e5a, 0x0e5b, L::BA, C::Po),
    (0x1100, 0x115f, L::JL, C::Lo),
    (0x1160, 0x11a7, L::JV, C::Lo),
    (0x11a8, 0x11ff, L::JT, C::Lo),
    (0x1a55, 0x1a55, L::AP, C::Mc),
    (0x1b05, 0x1b33, L::AK, C::Lo),
    (0x1b35, 0x1b43, L::CM, C::Mn),
    (0x1b44, 0x1b44, L::VI, C::Mc),
    (0x1bf2, 0x1bf3, L::VF, C::Mc),
    (0x1e00, 0x1fff, L::AL, C::Ll),
    (0x2000, 0x200a, L::BA, C::Zs),
    (0x200b, 0x200b, L::ZW, C::Cf),
    (0x200c, 0x200c, L::CM, C::Cf),
    (0x200d, 0x200d, L::ZWJ, C::Cf),
    (0x200e, 0x200f, L::CM, C::Cf),
    (0x2010, 0x2010, L::HH, C::Pd),
    (0x2011, 0x2011, L::GL, C::Pd),
    (0x2012, 0x2013, L::BA, C::Pd),
    (0x2014, 0x2014, L::B2, C::Pd),
    (0x2015, 0x2015, L::AI, C::Pd),
    (0x2016, 0x2016, L::AI, C::Po),
    (0x2017, 0x2017, L::AL, C::Po),
    (0x2018, 0x2018, L::QU, C::Pi),
    (0x2019, 0x2019, L::QU, C::Pf),
    (0x201a, 0x201a, L::OP, C::Ps),
    (0x201b, 0x201c, L::QU, C::Pi),
    (0x201d, 0x201d, L::QU, C::Pf),
    (0x201e, 0x201e, L::OP, C::Ps),
    (0x201f, 0x201f, L::QU, C::Pi),
    (0x2020, 0x2021, L::AI, C::Po),
    (0x2022, 0x2023, L::AL, C::Po),
    (0x2024, 0x2026, L::IN, C::Po),
    (0x2027, 0x2027, L::BA, C::Po),
    (0x2028, 0x2028, L::BK, C::Zl),
    (0x2029, 0x2029, L::BK, C::Zp),
    (0x202a, 0x202e, L::CM, C::Cf),
    (0x202f, 0x202f, L::GL, C::Zs),
    (0x2030, 0x2030, L::PO, C::Po),
    (0x2032, 0x2037, L::PO, C::Po),
    (0x2039, 0x2039, L::QU, C::Pi),
    (0x203a, 0x203a, L::QU, C::Pf),
    (0x203c, 0x203d, L::NS, C::Po),
    (0x2044, 0x2044, L::IS, C::Sm),
    (0x2045, 0x2045, L::OP, C::Ps),
    (0x2046, 0x2046, L::CL, C::Pe),
    (0x2047, 0x2049, L::NS, C::Po),
    (0x2060, 0x2060, L::WJ, C::Cf),
    (0x2061, 0x2064, L::AL, C::Cf),
    (0x20a0, 0x20bf, L::PR, C::Sc),
    (0x20d0, 0x20f0, L::CM, C::Mn),
    (0x2103, 0x2103, L::PO, C::So),
    (0x2109, 0x2109, L::PO, C::So),
    (0x2116, 0x2116, L::PR, C::So),
    (0x2212, 0x2213, L::PR, C::Sm),
    (0x2460, 0x24ff, L::AI, C::No),
    (0x25a0, 0x25cb, L::AI, C::So),
    (0x25cc, 0x25cc, L::AL, C::So),
    (0x25cd, 0x25fa, L::AI, C::So),
    (0x25fb, 0x25fe, L::AI, C::So),
    (0x2600, 0x27bf, L::ID, C::So),
    (0x2b05, 0x2b07, L::ID, C::So),
    (0x2b1b, 0x2b1c, L::ID, C::So),
    (0x2b50, 0x2b50, L::ID, C::So),
    (0x2b55, 0x2b55, L::ID, C::So),
    (0x2e3a, 0x2e3b, L::B2, C::Pd),
    (0x2e80, 0x2fff, L::ID, C::So),
    (0x3000, 0x3000, L::ID, C::Zs),
    (0x3001, 0x3002, L::CL, C::Po),
    (0x3003, 0x3003, L::ID, C::Po),
    (0x3005, 0x3005, L::NS, C::Lm),
    (0x3006, 0x3007, L::ID, C::Lo),
    (0x3008, 0x3008, L::OP, C::Ps),
    (0x3009, 0x3009, L::CL, C::Pe),
    (0x300a, 0x300a, L::OP, C::Ps),
    (0x300b, 0x300b, L::CL, C::Pe),
    (0x300c, 0x300c, L::OP, C::Ps),
    (0x300d, 0x300d, L::CL, C::Pe),
    (0x300e, 0x300e, L::OP, C::Ps),
    (0x300f, 0x300f, L::CL, C::Pe),
    (0x3010, 0x3010, L::OP, C::Ps),
    (0x3011, 0x3011, L::CL, C::Pe),
    (0x3012, 0x3013, L::ID, C::So),
    (0x3014, 0x3014, L::OP, C::Ps),
    (0x3015, 0x3015, L::CL, C::Pe),
    (0x3016, 0x3016, L::OP, C::Ps),
    (0x3017, 0x3017, L::CL, C::Pe),
    (0x3018, 0x3018, L::OP, C::Ps),
    (0x3019, 0x3019, L::CL, C::Pe),
    (0x301a, 0x301a, L::OP, C::Ps),
    (0x301b, 0x301b, L::CL, C::Pe),
    (0x301c, 0x301c, L::NS, C::Pd),
    (0x301d, 0x301d, L::OP, C::Ps),
    (0x301e, 0x301f, L::CL, C::Pe),
    (0x3020, 0x3029, L::ID, C::So),
    (0x302a, 0x302f, L::CM, C::Mn),
    (0x3030, 0x3035, L::ID, C::So),
    (0x3041, 0x3041, L::CJ, C::Lo),
    (0x3042, 0x3042, L::ID, C::Lo),
    (0x3043, 0x3043, L::CJ, C::Lo),
    (0x3044, 0x3044, L::ID, C::Lo),
    (0x3045, 0x3045, L::CJ, C::Lo),
    (0x3046, 0x3046, L::ID, C::Lo),
    (0x3047, 0x3047, L::CJ, C::Lo),
    (0x3048, 0x3048, L::ID, C::Lo),
    (0x3049, 0x3049, L::CJ, C::Lo),
    (0x304a, 0x3062, L::ID, C::Lo),
    (0x3063, 0x3063, L::CJ, C::Lo),
    (0x3064, 0x3082, L::ID, C::Lo),
    (0x3083, 0x3083, L::CJ, C::Lo),
    (0x3084, 0x3084, L::ID, C::Lo),
    (0x3085, 0x3085, L::CJ, C::Lo),
    (0x3086, 0x3086, L::ID, C::Lo),
    (0x3087, 0x3087, L::CJ, C::Lo),
    (0x3088, 0x308d, L::ID, C::Lo),
    (0x308e, 0x308e, L::CJ, C::Lo),
    (0x308f, 0x3094, L::ID, C::Lo),
    (0x3095, 0x3096, L::CJ, C::Lo),
    (0x3099, 0x309a, L::CM, C::Mn),
    (0x309b, 0x309c, L::NS, C::Sk),
    (0x309d, 0x309e, L::NS, C::Lm),
    (0x309f, 0x309f, L::ID, C::Lo),
    (0x30a0, 0x30a0, L::NS, C::Pd),
    (0x30a1, 0x30a1, L::CJ, C::Lo),
    (0x30a2, 0x30fa, L::ID, C::Lo),
    (0x30fb, 0x30fb, L::NS, C::Po),
    (0x30fc, 0x30fc, L::CJ, C::Lm),
    (0x30fd, 0x30fe, L::NS, C::Lm),
    (0x30ff, 0x30ff, L::ID, C::Lo),
    (0x3105, 0x312f, L::ID, C::Lo),
    (0x3131, 0x318e, L::ID, C::Lo),
    (0x31f0, 0x31ff, L::CJ, C::Lo),
    (0x3220, 0x33ff, L::ID, C::So),
    (0x3400, 0x4dbf, L::ID, C::Lo),
    (0x4e00, 0x9fff, L::ID, C::Lo),
    (0xa000, 0xa48c, L::ID, C::Lo),
    (0xa490, 0xa4c6, L::ID, C::So),
    (0xa960, 0xa97c, L::JL, C::Lo),
    (0xa984, 0xa9b2, L::AK, C::Lo),
    (0xa9b3, 0xa9b3, L::CM, C::Mn),
    (0xa9b4, 0xa9bf, L::CM, C::Mc),
    (0xa9c0, 0xa9c0, L::VI, C::Mc),
    (0xd7b0, 0xd7c6, L::JV, C::Lo),
    (0xd7cb, 0xd7fb, L::JT, C::Lo),
    (0xf900, 0xfaff, L::ID, C::Lo),
    (0xfb1d, 0xfb1d, L::HL, C::Lo),
    (0xfb1f, 0xfb28, L::HL, C::Lo),
    (0xfb2a, 0xfb4f, L::HL, C::Lo),
    (0xfe00, 0xfe0f, L::CM, C::Mn),
    (0xfe20, 0xfe2f, L::CM, C::Mn),
    (0xfeff, 0xfeff, L::WJ, C::Cf),
    (0xff01, 0xff01, L::EX, C::Po),
    (0xff02, 0xff03, L::ID, C::Po),
    (0xff04, 0xff04, L::PR, C::Sc),
    (0xff05, 0xff05, L::PO, C::Po),
    (0xff06, 0xff07, L::ID, C::Po),
    (0xff08, 0xff08, L::OP, C::Ps),
    (0xff09, 0xff09, L::CL, C::Pe),
    (0xff0a, 0xff0b, L::ID, C::Sm),
    (0xff0c, 0xff0c, L::CL, C::Po),
    (0xff0d, 0xff0d, L::ID, C::Pd),
    (0xff0e, 0xff0e, L::CL, C::Po),
    (0xff0f, 0xff0f, L::ID, C::Po),
    (0xff10, 0xff19, L::ID, C::Nd),
    (0xff1a, 0xff1b, L::NS, C::Po),
    (0xff1c, 0xff1e, L::ID, C::Sm),
    (0xff1f, 0xff1f, L::EX, C::Po),
    (0xff20, 0xff20, L::ID, C::Po),
    (0xff21, 0xff3a, L::ID, C::Lu),
    (0xff3b, 0xff3b, L::OP, C::Ps),
    (0xff3c, 0xff3c, L::ID, C::Po),
    (0xff3d, 0xff3d, L::CL, C::Pe),
    (0xff3e, 0xff40, L::ID, C::Sk),
    (0xff41, 0xff5a, L::ID, C::Ll),
    (0xff5b, 0xff5b, L::OP, C::Ps),
    (0xff5c, 0xff5c, L::ID, C::Sm),
    (0xff5d, 0xff5d, L::CL, C::Pe),
    (0xff5e, 0xff5e, L::ID, C::Sm),
    (0xff5f, 0xff5f, L::OP, C::Ps),
    (0xff60, 0xff60, L::CL, C::Pe),
    (0xff61, 0xff61, L::CL, C::Po),
    (0xff62, 0xff62, L::OP, C::Ps),
    (0xff63, 0xff63, L::CL, C::Pe),
    (0xff64, 0xff64, L::CL, C::Po),
    (0xff65, 0xff65, L::NS, C::Po),
    (0xff66, 0xff9d, L::ID, C::Lo),
    (0xff9e, 0xff9f, L::NS, C::Lm),
    (0xffe0, 0xffe0, L::PO, C::Sc),
    (0xffe1, 0xffe1, L::PR, C::Sc),
    (0xffe5, 0xffe6, L::PR, C::Sc),
    (0xfffc, 0xfffc, L::CB, C::So),
    (0xfffd, 0xfffd, L::AI, C::So),
    (0x1f000, 0x1f02b, L::ID, C::So),
    (0x1f0a0, 0x1f0ff, L::ID, C::So),
    (0x1f170, 0x1f1e5, L::ID, C::So),
    (0x1f1e6, 0x1f1ff, L::RI, C::So),
    (0x1f200, 0x1f251, L::ID, C::So),
    (0x1f300, 0x1f3fa, L::ID, C::So),
    (0x1f3fb, 0x1f3ff, L::EM, C::Sk),
    (0x1f400, 0x1f465, L::ID, C::So),
    (0x1f466, 0x1f478, L::EB, C::So),
    (0x1f479, 0x1f47b, L::ID, C::So),
    (0x1f47c, 0x1f47c, L::EB, C::So),
    (0x1f47d, 0x1f480, L::ID, C::So),
    (0x1f481, 0x1f483, L::EB, C::So),
    (0x1f484, 0x1f484, L::ID, C::So),
    (0x1f485, 0x1f487, L::EB, C::So),
    (0x1f488, 0x1f4a9, L::ID, C::So),
    (0x1f4aa, 0x1f4aa, L::EB, C::So),
    (0x1f4ab, 0x1f5ff, L::ID, C::So),
    (0x1f600, 0x1f644, L::ID, C::So),
    (0x1f645, 0x1f647, L::EB, C::So),
    (0x1f648, 0x1f64a, L::ID, C::So),
    (0x1f64b, 0x1f64f, L::EB, C::So),
    (0x1f680, 0x1f6a2, L::ID, C::So),
    (0x1f6a3, 0x1f6a3, L::EB, C::So),
    (0x1f6a4, 0x1f6b3, L::ID, C::So),
    (0x1f6b4, 0x1f6b6, L::EB, C::So),
    (0x1f6b7, 0x1f6bf, L::ID, C::So),
    (0x1f6c0, 0x1f6c0, L::EB, C::So),
    (0x1f6c1, 0x1f6cb, L::ID, C::So),
    (0x1f6cc, 0x1f6cc, L::EB, C::So),
    (0x1f6cd, 0x1f6ff, L::ID, C::So),
    (0x1f700, 0x1f8ff, L::ID, C::So),
    (0x1f900, 0x1f917, L::ID, C::So),
    (0x1f918, 0x1f91f, L::EB, C::So),
    (0x1f920, 0x1f925, L::ID, C::So),
    (0x1f926, 0x1f926, L::EB, C::So),
    (0x1f927, 0x1f92f, L::ID, C::So),
    (0x1f930, 0x1f939, L::EB, C::So),
    (0x1f93a, 0x1f93b, L::ID, C::So),
    (0x1f93c, 0x1f93e, L::EB, C::So),
    (0x1f93f, 0x1f9b4, L::ID, C::So),
    (0x1f9b5, 0x1f9b6, L::EB, C::So),
    (0x1f9b7, 0x1f9b7, L::ID, C::So),
    (0x1f9b8, 0x1f9b9, L::EB, C::So),
    (0x1f9ba, 0x1f9cc, L::ID, C::So),
    (0x1f9cd, 0x1f9dd, L::EB, C::So),
    (0x1f9de, 0x1f9ff, L::ID, C::So),
    (0x1fa00, 0x1faff, L::ID, C::So),
    (0x1fc00, 0x1fffd, L::ID, C::Cn),
    (0x20000, 0x2fffd, L::ID, C::Lo),
    (0x30000, 0x3fffd, L::ID, C::Lo),
];

pub(crate) static EAST_ASIAN_WIDTH: &[(u32, u32, E)] = &[
    (0x00a1, 0x00a1, E::Ambiguous),
    (0x00a4, 0x00a4, E::Ambiguous),
    (0x00a7, 0x00a8, E::Ambiguous),
    (0x00aa, 0x00aa, E::Ambiguous),
    (0x00ad, 0x00ae, E::Ambiguous),
    (0x00b0, 0x00b4, E::Ambiguous),
    (0x00b6, 0x00ba, E::Ambiguous),
    (0x00bc, 0x00bf, E::Ambiguous),
    (0x00c6, 0x00c6, E::Ambiguous),
    (0x00d0, 0x00d0, E::Ambiguous),
    (0x00d7, 0x00d8, E::Ambiguous),
    (0x00de, 0x00e1, E::Ambiguous),
    (0x00e6, 0x00e6, E::Ambiguous),
    (0x00e8, 0x00ea, E::Ambiguous),
    (0x00ec, 0x00ed, E::Ambiguous),
    (0x00f0, 0x00f0, E::Ambiguous),
    (0x00f2, 0x00f3, E::Ambiguous),
    (0x00f7, 0x00fa, E::Ambiguous),
    (0x00fc, 0x00fc, E::Ambiguous),
    (0x00fe, 0x00fe, E::Ambiguous),
    (0x0391, 0x03a9, E::Ambiguous),
    (0x03b1, 0x03c9, E::Ambiguous),
    (0x0401, 0x0401, E::Ambiguous),
    (0x0410, 0x044f, E::Ambiguous),
    (0x0451, 0x0451, E::Ambiguous),
    (0x1100, 0x115f, E::Wide),
    (0x2010, 0x2010, E::Ambiguous),
    (0x2013, 0x2016, E::Ambiguous),
    (0x2018, 0x2019, E::Ambiguous),
    (0x201c, 0x201d, E::Ambiguous),
    (0x2020, 0x2022, E::Ambiguous),
    (0x2024, 0x2027, E::Ambiguous),
    (0x2030, 0x2030, E::Ambiguous),
    (0x2032, 0x2033, E::Ambiguous),
    (0x203b, 0x203b, E::Ambiguous),
    (0x20a9, 0x20a9, E::Halfwidth),
    (0x2103, 0x2103, E::Ambiguous),
    (0x2109, 0x2109, E::Ambiguous),
    (0x2116, 0x2116, E::Ambiguous),
    (0x2121, 0x2122, E::Ambiguous),
    (0x231a, 0x231b, E::Wide),
    (0x23e9, 0x23ec, E::Wide),
    (0x23f0, 0x23f0, E::Wide),
    (0x23f3, 0x23f3, E::Wide),
    (0x2460, 0x24ff, E::Ambiguous),
    (0x25a0, 0x25fc, E::Ambiguous),
    (0x25fd, 0x25fe, E::Wide),
    (0x2605, 0x2606, E::Ambiguous),
    (0x2614, 0x2615, E::Wide),
    (0x2648, 0x2653, E::Wide),
    (0x267f, 0x267f, E::Wide),
    (0x2693, 0x2693, E::Wide),
    (0x26a1, 0x26a1, E::Wide),
    (0x26aa, 0x26ab, E::Wide),
    (0x26bd, 0x26be, E::Wide),
    (0x26c4, 0x26c5, E::Wide),
    (0x26ce, 0x26ce, E::Wide),
    (0x26d4, 0x26d4, E::Wide),
    (0x26ea, 0x26ea, E::Wide),
    (0x26f2, 0x26f3, E::Wide),
    (0x26f5, 0x26f5, E::Wide),
    (0x26fa, 0x26fa, E::Wide),
    (0x26fd, 0x26fd, E::Wide),
    (0x2705, 0x2705, E::Wide),
    (0x270a, 0x270b, E::Wide),
    (0x2728, 0x2728, E::Wide),
    (0x274c, 0x274c, E::Wide),
    (0x274e, 0x274e, E::Wide),
    (0x2753, 0x2755, E::Wide),
    (0x2757, 0x2757, E::Wide),
    (0x2795, 0x2797, E::Wide),
    (0x27b0, 0x27b0, E::Wide),
    (0x27bf, 0x27bf, E::Wide),
    (0x2b1b, 0x2b1c, E::Wide),
    (0x2b50, 0x2b50, E::Wide),
    (0x2b55, 0x2b55, E::Wide),
    (0x2e80, 0x2fff, E::Wide),
    (0x3000, 0x3000, E::Fullwidth),
    (0x3001, 0x303e, E::Wide),
    (0x3041, 0x33ff, E::Wide),
    (0x3400, 0x4dbf, E::Wide),
    (0x4e00, 0x9fff, E::Wide),
    (0xa000, 0xa4cf, E::Wide),
    (0xa960, 0xa97f, E::Wide),
    (0xf900, 0xfaff, E::Wide),
    (0xfe10, 0xfe19, E::Wide),
    (0xfe30, 0xfe52, E::Wide),
    (0xfe54, 0xfe66, E::Wide),
    (0xfe68, 0xfe6b, E::Wide),
    (0xff01, 0xff60, E::Fullwidth),
    (0xff61, 0xffdc, E::Halfwidth),
    (0xffe0, 0xffe6, E::Fullwidth),
    (0xffe8, 0xffee, E::Halfwidth),
    (0x1f004, 0x1f004, E::Wide),
    (0x1f0cf, 0x1f0cf, E::Wide),
    (0x1f18e, 0x1f18e, E::Wide),
    (0x1f191, 0x1f19a, E::Wide),
    (0x1f200, 0x1f202, E::Wide),
    (0x1f210, 0x1f23b, E::Wide),
    (0x1f240, 0x1f248, E::Wide),
    (0x1f250, 0x1f251, E::Wide),
    (0x1f300, 0x1f320, E::Wide),
    (0x1f32d, 0x1f335, E::Wide),
    (0x1f337, 0x1f37c, E::Wide),
    (0x1f37e, 0x1f393, E::Wide),
    (0x1f3a0, 0x1f3ca, E::Wide),
    (0x1f3cf, 0x1f3d3, E::Wide),
    (0x1f3e0, 0x1f3f0, E::Wide),
    (0x1f3f4, 0x1f3f4, E::Wide),
    (0x1f3f8, 0x1f43e, E::Wide),
    (0x1f440, 0x1f440, E::Wide),
    (0x1f442, 0x1f4fc, E::Wide),
    (0x1f4ff, 0x1f53d, E::Wide),
    (0x1f54b, 0x1f54e, E::Wide),
    (0x1f550, 0x1f567, E::Wide),
    (0x1f57a, 0x1f57a, E::Wide),
    (0x1f595, 0x1f596, E::Wide),
    (0x1f5a4, 0x1f5a4, E::Wide),
    (0x1f5fb, 0x1f64f, E::Wide),
    (0x1f680, 0x1f6c5, E::Wide),
    (0x1f6cc, 0x1f6cc, E::Wide),
    (0x1f6d0, 0x1f6d2, E::Wide),
    (0x1f6d5, 0x1f6d7, E::Wide),
    (0x1f6eb, 0x1f6ec, E::Wide),
    (0x1f6f4, 0x1f6fc, E::Wide),
    (0x1f7e0, 0x1f7eb, E::Wide),
    (0x1f90c, 0x1f93a, E::Wide),
    (0x1f93c, 0x1f945, E::Wide),
    (0x1f947, 0x1f9ff, E::Wide),
    (0x1fa70, 0x1faff, E::Wide),
    (0x20000, 0x2fffd, E::Wide),
    (0x30000, 0x3fffd, E::Wide),
];

pub(crate) static EMOJI_PRESENTATION: &[(u32, u32, ())] = &[
    (0x231a, 0x231b, ()),
    (0x23e9, 0x23ec, ()),
    (0x23f0, 0x23f0, ()),
    (0x23f3, 0x23f3, ()),
    (0x25fd, 0x25fe, ()),
    (0x2614, 0x2615, ()),
    (0x2648, 0x2653, ()),
    (0x267f, 0x267f, ()),
    (0x2693, 0x2693, ()),
    (0x26a1, 0x26a1, ()),
    (0x26aa, 0x26ab, ()),
    (0x26bd, 0x26be, ()),
    (0x26c4, 0x26c5, ()),
    (0x26ce, 0x26ce, ()),
    (0x26d4, 0x26d4, ()),
    (0x26ea, 0x26ea, ()),
    (0x26f2, 0x26f3, ()),
    (0x26f5, 0x26f5, ()),
    (0x26fa, 0x26fa, ()),
    (0x26fd, 0x26fd, ()),
    (0x2705, 0x2705, ()),
    (0x270a, 0x270b, ()),
    (0x2728, 0x2728, ()),
    (0x274c, 0x274c, ()),
    (0x274e, 0x274e, ()),
    (0x2753, 0x2755, ()),
    (0x2757, 0x2757, ()),
    (0x2795, 0x2797, ()),
    (0x27b0, 0x27b0, ()),
    (0x27bf, 0x27bf, ()),
    (0x2b1b, 0x2b1c, ()),
    (0x2b50, 0x2b50, ()),
    (0x2b55, 0x2b55, ()),
    (0x1f004, 0x1f004, ()),
    (0x1f0cf, 0x1f0cf, ()),
    (0x1f18e, 0x1f18e, ()),
    (0x1f191, 0x1f19a, ()),
    (0x1f1e6, 0x1f1ff, ()),
    (0x1f201, 0x1f202, ()),
    (0x1f21a, 0x1f21a, ()),
    (0x1f22f, 0x1f22f, ()),
    (0x1f232, 0x1f236, ()),
    (0x1f238, 0x1f23a, ()),
    (0x1f250, 0x1f251, ()),
    (0x1f300, 0x1f320, ()),
    (0x1f32d, 0x1f335, ()),
    (0x1f337, 0x1f37c, ()),
    (0x1f37e, 0x1f393, ()),
    (0x1f3a0, 0x1f3ca, ()),
    (0x1f3cf, 0x1f3d3, ()),
    (0x1f3e0, 0x1f3f0, ()),
    (0x1f3f4, 0x1f3f4, ()),
    (0x1f3f8, 0x1f43e, ()),
    (0x1f440, 0x1f440, ()),
    (0x1f442, 0x1f4fc, ()),
    (0x1f4ff, 0x1f53d, ()),
    (0x1f54b, 0x1f54e, ()),
    (0x1f550, 0x1f567, ()),
    (0x1f57a, 0x1f57a, ()),
    (0x1f595, 0x1f596, ()),
    (0x1f5a4, 0x1f5a4, ()),
    (0x1f5fb, 0x1f64f, ()),
    (0x1f680, 0x1f6c5, ()),
    (0x1f6cc, 0x1f6cc, ()),
    (0x1f6d0, 0x1f6d2, ()),
    (0x1f6d5, 0x1f6d7, ()),
    (0x1f6eb, 0x1f6ec, ()),
    (0x1f6f4, 0x1f6fc, ()),
    (0x1f7e0, 0x1f7eb, ()),
    (0x1f90c, 0x1f93a, ()),
    (0x1f93c, 0x1f945, ()),
    (0x1f947, 0x1f9ff, ()),
    (0x1fa70, 0x1faff, ()),
];
