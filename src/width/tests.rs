use super::*;

use pretty_assertions::assert_eq;

#[test]
fn rune_widths() {
    use crate::properties::grapheme_class;
    fn width(ch: char) -> u32 {
        rune_width(ch, grapheme_class(ch))
    }

    assert_eq!(width('a'), 1);
    assert_eq!(width('\t'), 0);
    assert_eq!(width('\r'), 0);
    assert_eq!(width('\u{301}'), 0);
    assert_eq!(width('\u{200d}'), 0);
    assert_eq!(width('世'), 2);
    assert_eq!(width('한'), 2);
    // Leading jamo render as a full syllable cell pair.
    assert_eq!(width('\u{1100}'), 2);
    // Watches have emoji presentation by default, flags count as one
    // wide flag per indicator pair.
    assert_eq!(width('\u{231a}'), 2);
    assert_eq!(width('\u{1f1e9}'), 2);
    // Text-presentation pictographs are narrow without a VS-16.
    assert_eq!(width('\u{1f3f3}'), 1);
    // The two- and three-em dashes.
    assert_eq!(width('\u{2e3a}'), 3);
    assert_eq!(width('\u{2e3b}'), 4);
}

#[test]
fn string_widths() {
    assert_eq!(string_width(""), 0);
    assert_eq!(string_width("Hello, 世界"), 11);
    assert_eq!(string_width("한국"), 4);
    assert_eq!(string_width("e\u{301}"), 1);
    // One flag, not two regional indicator cells.
    assert_eq!(string_width("🇩🇪"), 2);
    // The jamo after the leading consonant contribute nothing.
    assert_eq!(string_width("\u{1100}\u{1161}\u{11a8}"), 2);
    // An Indic conjunct cluster is one cell.
    assert_eq!(string_width("क्षि"), 1);
}

#[test]
fn variation_selectors_clamp_pictographic_clusters() {
    // VS-16 forces emoji presentation (two cells) on a narrow base.
    assert_eq!(string_width("🏳\u{fe0f}\u{200d}🌈"), 2);
    assert_eq!(string_width("\u{2764}\u{fe0f}"), 2);
    // VS-15 forces text presentation (one cell) on a wide base.
    assert_eq!(string_width("\u{231a}\u{fe0e}"), 1);
}

#[test]
fn ambiguous_width_is_configurable() {
    assert_eq!(string_width("\u{a7}"), 1);
    set_east_asian_ambiguous_width(2);
    assert_eq!(string_width("\u{a7}"), 2);
    set_east_asian_ambiguous_width(1);
    assert_eq!(string_width("\u{a7}"), 1);
}
