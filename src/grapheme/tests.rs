use super::*;

use pretty_assertions::assert_eq;

/// Splits a string into grapheme clusters by running the machine over
/// it, the way the stepping loop does: the verdict for the first
/// character describes the start of text and is ignored.
fn clusters(input: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut state = GraphemeState::INITIAL;
    let mut start = 0;
    for (offset, ch) in input.char_indices() {
        let (next, _, boundary) = step(state, ch);
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

/// The per-character transition log over a string: the boundary verdict
/// and the state entered after each character.
fn transitions(input: &str) -> Vec<(bool, GraphemeState)> {
    let mut out = Vec::new();
    let mut state = GraphemeState::INITIAL;
    for ch in input.chars() {
        let (next, _, boundary) = step(state, ch);
        out.push((boundary, next));
        state = next;
    }
    out
}

fn state(base: GraphemeBase, incb: InCbState) -> GraphemeState {
    GraphemeState { base, incb }
}

#[test]
fn basics() {
    assert_eq!(
        clusters("Hello!\r\nBeep 🧑‍🌾"),
        &["H", "e", "l", "l", "o", "!", "\r\n", "B", "e", "e", "p", " ", "🧑‍🌾"],
    );
}

#[test]
fn crlf() {
    use GraphemeBase::*;
    use InCbState::None as N;

    assert_eq!(
        transitions("a\r\nb"),
        &[
            (true, state(Any, N)),
            (true, state(AfterCr, N)),
            (false, state(AfterControlLf, N)),
            (true, state(Any, N)),
        ],
    );
}

#[test]
fn emoji_flags() {
    use GraphemeBase::*;
    use InCbState::None as N;

    // Pairs join; a third regional indicator starts the next flag.
    assert_eq!(
        transitions("🇩🇪🇫🇷🇪"),
        &[
            (true, state(RiOdd, N)),
            (false, state(RiEven, N)),
            (true, state(RiOdd, N)),
            (false, state(RiEven, N)),
            (true, state(RiOdd, N)),
        ],
    );
    assert_eq!(clusters("🇩🇪🇫🇷"), &["🇩🇪", "🇫🇷"]);
}

#[test]
fn emoji_zwj_sequences() {
    use GraphemeBase::*;
    use InCbState::None as N;

    // Pictographic, extend, ZWJ, pictographic: one cluster (GB11).
    assert_eq!(
        transitions("🏳\u{fe0f}\u{200d}🌈"),
        &[
            (true, state(AfterPictographic, N)),
            (false, state(AfterPictographic, N)),
            (false, state(AfterPictographicZwj, N)),
            (false, state(AfterPictographic, N)),
        ],
    );
    // Without a preceding pictographic, ZWJ does not join emoji.
    assert_eq!(clusters("a\u{200d}🌈"), &["a\u{200d}", "🌈"]);
    // Emoji modifiers extend their base (GB9).
    assert_eq!(clusters("👦🏿"), &["👦🏿"]);
}

#[test]
fn hangul() {
    assert_eq!(clusters("한국"), &["한", "국"]);
    // Conjoining jamo chain into one syllable cluster.
    assert_eq!(clusters("\u{1100}\u{1161}\u{11a8}x"), &["\u{1100}\u{1161}\u{11a8}", "x"]);
    assert_eq!(clusters("\u{1100}\u{1100}\u{1161}"), &["\u{1100}\u{1100}\u{1161}"]);
}

#[test]
fn combining_marks() {
    assert_eq!(clusters("e\u{301}f"), &["e\u{301}", "f"]);
    assert_eq!(clusters("x\u{300}\u{301}\u{302}"), &["x\u{300}\u{301}\u{302}"]);
}

#[test]
fn prepend() {
    // U+0600 ARABIC NUMBER SIGN attaches to what follows (GB9b).
    assert_eq!(clusters("\u{600}1x"), &["\u{600}1", "x"]);
    // But not across a control character (GB5 wins over GB9b).
    assert_eq!(clusters("\u{600}\nx"), &["\u{600}", "\n", "x"]);
}

#[test]
fn indic_conjuncts() {
    use GraphemeBase::Any;
    use InCbState::*;

    // क्षि: consonant, virama, consonant, vowel sign in one cluster
    // (GB9c).
    assert_eq!(
        transitions("क्षि"),
        &[
            (true, state(Any, Consonant)),
            (false, state(Any, Linker)),
            (false, state(Any, Consonant)),
            (false, state(Any, None)),
        ],
    );
    assert_eq!(clusters("क्षि"), &["क्षि"]);

    // Without a linker, consonants stay separate clusters.
    assert_eq!(clusters("कत"), &["क", "त"]);
    // The conjunct continues through a ZWJ carrying InCB=Extend.
    assert_eq!(clusters("क्\u{200d}ष"), &["क्\u{200d}ष"]);
    // A character without InCB resets the conjunct.
    assert_eq!(clusters("क्x"), &["क्", "x"]);
}

#[test]
fn control_characters_always_split() {
    assert_eq!(clusters("a\u{7}b"), &["a", "\u{7}", "b"]);
    assert_eq!(clusters("e\u{200b}\u{301}"), &["e", "\u{200b}", "\u{301}"]);
}

#[test]
fn state_bits_round_trip() {
    for base_bits in 0..=10u16 {
        for incb_bits in 0..=3u16 {
            let packed = base_bits | incb_bits << 8;
            let state = GraphemeState::from_bits(packed);
            assert_eq!(state.to_bits(), packed);
        }
    }
    // Out-of-range bits are masked to the initial state.
    assert_eq!(
        GraphemeState::from_bits(0xfff).base,
        GraphemeBase::Any
    );
}
