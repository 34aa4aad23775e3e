use super::*;

use pretty_assertions::assert_eq;

/// Splits a string at every break opportunity, returning the segments
/// and whether the break ending each one was mandatory. The final
/// segment is always mandatory (LB3).
fn segments(input: &str) -> (Vec<&str>, Vec<bool>) {
    let mut parts = Vec::new();
    let mut mandatory = Vec::new();
    let mut state = LineState::INITIAL;
    let mut start = 0;
    for (offset, ch) in input.char_indices() {
        let rest = Remainder::Str(&input[offset + ch.len_utf8()..]);
        let (next, verdict) = step(state, ch, rest);
        if verdict != LineBreak::DontBreak && offset > 0 {
            parts.push(&input[start..offset]);
            mandatory.push(verdict == LineBreak::MustBreak);
            start = offset;
        }
        state = next;
    }
    if !input.is_empty() {
        parts.push(&input[start..]);
        mandatory.push(true);
    }
    (parts, mandatory)
}

fn parts(input: &str) -> Vec<&str> {
    segments(input).0
}

#[test]
fn basics() {
    assert_eq!(parts("hello world"), &["hello ", "world"]);
    assert_eq!(parts("well-known"), &["well-", "known"]);
    assert_eq!(parts("100.50"), &["100.50"]);
}

#[test]
fn mandatory_breaks() {
    assert_eq!(
        segments("a\r\nb"),
        (vec!["a\r\n", "b"], vec![true, true]),
    );
    assert_eq!(
        segments("First line.\nSecond line."),
        (
            vec!["First ", "line.\n", "Second ", "line."],
            vec![false, true, false, true],
        ),
    );
    // NEL and the Unicode line/paragraph separators break too.
    assert_eq!(parts("a\u{85}b"), &["a\u{85}", "b"]);
    assert_eq!(parts("a\u{2028}b"), &["a\u{2028}", "b"]);
}

#[test]
fn spaces_and_zero_width() {
    // LB7/LB18: the break comes after the run of spaces.
    assert_eq!(parts("a  b"), &["a  ", "b"]);
    // LB8: a zero-width space is a break opportunity.
    assert_eq!(parts("a\u{200b}b"), &["a\u{200b}", "b"]);
    // LB8a: no break after a zero-width joiner.
    assert_eq!(parts("a\u{200d}b"), &["a\u{200d}b"]);
}

#[test]
fn glue_and_word_joiner() {
    // LB12: no-break space glues both sides.
    assert_eq!(parts("a\u{a0}b"), &["a\u{a0}b"]);
    // LB11: word joiner too.
    assert_eq!(parts("a\u{2060}b"), &["a\u{2060}b"]);
    // LB12a: glue after a space is an ordinary break.
    assert_eq!(parts("a \u{a0}b"), &["a ", "\u{a0}b"]);
    // LB12a: glue after a hyphen does not bind.
    assert_eq!(parts("a-\u{a0}b"), &["a-", "\u{a0}b"]);
}

#[test]
fn closing_and_opening_punctuation() {
    // LB13/LB14/LB30: no breaks inside a simple parenthesized call.
    assert_eq!(parts("foo(bar)baz"), &["foo(bar)baz"]);
    // LB14 holds across spaces after OP.
    assert_eq!(parts("( a"), &["( a"]);
    // LB16: close then nonstarter.
    assert_eq!(parts(")\u{301c}"), &[")\u{301c}"]);
    // LB15.2 fails mid-text, so the space breaks before a Pf quote.
    assert_eq!(parts("a \u{201d}x"), &["a ", "\u{201d}x"]);
}

#[test]
fn end_of_text_quotation() {
    // LB15.2: at end of text the space binds to the final quote.
    assert_eq!(parts("a \u{201d}"), &["a \u{201d}"]);
}

#[test]
fn start_of_text_quotation() {
    // LB15.1: sot (QU_Pi SP*)+ × OP.
    assert_eq!(parts("\u{201c} (a)"), &["\u{201c} (a)"]);
}

#[test]
fn b2_binds_across_spaces() {
    // LB17: no break between the dashes, while breaks before and after
    // the pair stay available.
    assert_eq!(
        parts("a\u{2014} \u{2014}b"),
        &["a", "\u{2014} \u{2014}", "b"],
    );
}

#[test]
fn hyphenation() {
    // LB21 forbids the break before the hyphen, LB31 allows it after.
    assert_eq!(parts("well-known"), &["well-", "known"]);
    // LB20.1: a word-initial hyphen binds to the following letter at
    // start of text.
    assert_eq!(parts("-abc"), &["-abc"]);
    // The unambiguous hyphen binds anywhere.
    assert_eq!(parts("x \u{2010}abc"), &["x ", "\u{2010}abc"]);
    // LB21a: after HL plus hyphen, breaks are withheld from non-letters.
    assert_eq!(parts("\u{5d0}-1"), &["\u{5d0}-1"]);
    // But not from letters.
    assert_eq!(parts("\u{5d0}-x"), &["\u{5d0}-", "x"]);
    // LB21b: no break between SY and a Hebrew letter.
    assert_eq!(parts("a/\u{5d0}"), &["a/\u{5d0}"]);
}

#[test]
fn contingent_breaks() {
    // LB20: breaks on both sides of an object replacement character.
    assert_eq!(parts("a\u{fffc}b"), &["a", "\u{fffc}", "b"]);
}

#[test]
fn numeric_sequences() {
    assert_eq!(parts("100.50"), &["100.50"]);
    assert_eq!(parts("$35.99"), &["$35.99"]);
    assert_eq!(parts("12%"), &["12%"]);
    assert_eq!(parts("3:45"), &["3:45"]);
    // LB22: ellipsis binds to what precedes it.
    assert_eq!(parts("wait\u{2026}"), &["wait\u{2026}"]);
}

#[test]
fn korean() {
    // LB26: jamo chain into syllable blocks.
    assert_eq!(
        parts("\u{1100}\u{1161}\u{11a8} \u{1100}\u{1161}"),
        &["\u{1100}\u{1161}\u{11a8} ", "\u{1100}\u{1161}"],
    );
    // Precomposed syllables allow breaks between each other (H3 H3).
    assert_eq!(parts("한국"), &["한", "국"]);
    // LB27: postfix binds to Hangul.
    assert_eq!(parts("한%"), &["한%"]);
}

#[test]
fn ideographs_break_between_each_other() {
    assert_eq!(parts("世界"), &["世", "界"]);
    // But not before a closing ideographic full stop (LB13).
    assert_eq!(parts("世。"), &["世。"]);
}

#[test]
fn regional_indicator_pairs() {
    // LB30a: breaks only between pairs.
    assert_eq!(parts("🇩🇪🇫🇷x"), &["🇩🇪", "🇫🇷", "x"]);
}

#[test]
fn emoji_modifiers() {
    // LB30b: an emoji modifier binds to its base.
    assert_eq!(parts("👦\u{1f3fb}x"), &["👦\u{1f3fb}", "x"]);
    // ZWJ sequences stay together through LB8a.
    assert_eq!(parts("🧑\u{200d}🌾 x"), &["🧑\u{200d}🌾 ", "x"]);
}

#[test]
fn combining_marks_follow_their_base() {
    // LB9: the mark is invisible to the rules.
    assert_eq!(parts("e\u{301}f g"), &["e\u{301}f ", "g"]);
    // LB10: a mark after a space stands alone as AL.
    assert_eq!(parts("a \u{301}b"), &["a ", "\u{301}b"]);
}

#[test]
fn aksara_clusters() {
    // LB28a: aksara, virama, aksara form one cluster (Javanese pangkon).
    assert_eq!(
        parts("\u{a98f}\u{a9c0}\u{a98f} x"),
        &["\u{a98f}\u{a9c0}\u{a98f} ", "x"],
    );
    // Two aksaras without a virama may break.
    assert_eq!(parts("\u{a98f}\u{a98f}"), &["\u{a98f}", "\u{a98f}"]);
    // The dotted circle takes part in conjuncts.
    assert_eq!(parts("\u{25cc}\u{a9c0}\u{a98f}"), &["\u{25cc}\u{a9c0}\u{a98f}"]);
}

#[test]
fn thai_resolves_through_lb1() {
    // SA letters resolve to AL, SA marks to CM; no breaks inside the
    // word, break allowed after the space.
    assert_eq!(parts("\u{e2a}\u{e27}\u{e31}\u{e2a} x"), &["\u{e2a}\u{e27}\u{e31}\u{e2a} ", "x"]);
}

#[test]
fn state_bits_round_trip() {
    for base_bits in 0..=53u8 {
        for flags in [0u8, SOT, AFTER_QU_PI | QU_PI_SP, CP_EA_FWH] {
            let packed = base_bits as u16 | (flags as u16) << 8;
            assert_eq!(LineState::from_bits(packed).to_bits(), packed);
        }
    }
}
