use super::*;

use pretty_assertions::assert_eq;

/// Splits a string into words by running the machine over it; the first
/// character's verdict describes the start of text and is ignored.
fn words(input: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut state = WordState::INITIAL;
    let mut start = 0;
    for (offset, ch) in input.char_indices() {
        let rest = Remainder::Str(&input[offset + ch.len_utf8()..]);
        let (next, boundary) = step(state, ch, rest);
        if boundary && offset > 0 {
            out.push(&input[start..offset]);
            start = offset;
        }
        state = next;
    }
    if !input.is_empty() {
        out.push(&input[start..]);
    }
    out
}

#[test]
fn basics() {
    assert_eq!(words("Hello, world!"), &["Hello", ",", " ", "world", "!"]);
    assert_eq!(words("The  quick"), &["The", "  ", "quick"]);
}

#[test]
fn newlines_split_words() {
    assert_eq!(words("a\r\nb"), &["a", "\r\n", "b"]);
    assert_eq!(words("a\nb"), &["a", "\n", "b"]);
    assert_eq!(words("a\n\nb"), &["a", "\n", "\n", "b"]);
}

#[test]
fn mid_letter_bridges() {
    // WB6/WB7: a single MidLetter or apostrophe joins two letter runs.
    assert_eq!(words("can't stop"), &["can't", " ", "stop"]);
    assert_eq!(words("a:b"), &["a:b"]);
    assert_eq!(words("example.com"), &["example.com"]);
    // But only with a letter on both sides.
    assert_eq!(words("can' stop"), &["can", "'", " ", "stop"]);
    assert_eq!(words("a: b"), &["a", ":", " ", "b"]);
}

#[test]
fn numeric_bridges() {
    // WB8, WB11/WB12.
    assert_eq!(words("3.14"), &["3.14"]);
    assert_eq!(words("1,000,000"), &["1,000,000"]);
    assert_eq!(words("1. 2"), &["1", ".", " ", "2"]);
    // WB9/WB10: letters and digits form one word.
    assert_eq!(words("A3 4b"), &["A3", " ", "4b"]);
    // WB13a/WB13b: underscore glues runs.
    assert_eq!(words("foo_bar_12"), &["foo_bar_12"]);
}

#[test]
fn hebrew_quotes() {
    // WB7a: a trailing apostrophe sticks to a Hebrew letter.
    assert_eq!(words("\u{5d0}' x"), &["\u{5d0}'", " ", "x"]);
    // WB7b/WB7c: a double quote joins two Hebrew letters.
    assert_eq!(words("\u{5d0}\"\u{5d1}"), &["\u{5d0}\"\u{5d1}"]);
    assert_eq!(words("a\"b"), &["a", "\"", "b"]);
}

#[test]
fn ignorables_are_transparent() {
    // WB4: combining marks and format characters extend the run.
    assert_eq!(words("ca\u{301}fe latte"), &["ca\u{301}fe", " ", "latte"]);
    // Including across a bridge lookahead.
    assert_eq!(words("a:\u{301}b"), &["a:\u{301}b"]);
}

#[test]
fn emoji() {
    // WB3c keeps ZWJ sequences together; separate emoji split.
    assert_eq!(words("🧑\u{200d}🌾x"), &["🧑\u{200d}🌾", "x"]);
    assert_eq!(words("😀😀"), &["😀", "😀"]);
    // WB15/WB16: regional indicators pair up.
    assert_eq!(words("🇩🇪🇫🇷"), &["🇩🇪", "🇫🇷"]);
}

#[test]
fn katakana_and_ideographs() {
    // Katakana chains; Han ideographs split individually.
    assert_eq!(words("アニメ"), &["アニメ"]);
    assert_eq!(words("世界"), &["世", "界"]);
}

#[test]
fn state_bits_round_trip() {
    for bits in 0..=0x1fu8 {
        let state = WordState::from_bits(bits);
        if (bits & 0xf) <= 14 {
            assert_eq!(state.to_bits(), bits);
        } else {
            assert_eq!(state.base, WordBase::Any);
        }
    }
}
