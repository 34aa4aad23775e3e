use super::*;

use pretty_assertions::assert_eq;

#[test]
fn grapheme_cluster_counts() {
    assert_eq!(grapheme_cluster_count(""), 0);
    assert_eq!(grapheme_cluster_count("Hello"), 5);
    assert_eq!(grapheme_cluster_count("🇩🇪🏳\u{fe0f}\u{200d}🌈"), 2);
    assert_eq!(grapheme_cluster_count("क्षि"), 1);
    assert_eq!(grapheme_cluster_count("a\r\nb"), 3);
}

#[test]
fn reversing_preserves_clusters() {
    assert_eq!(reverse_string(""), "");
    assert_eq!(reverse_string("abc"), "cba");
    assert_eq!(reverse_string("héllo🇩🇪"), "🇩🇪olléh");
    // The conjunct and the ZWJ sequence survive intact.
    assert_eq!(reverse_string("aक्षिb"), "bक्षिa");
    assert_eq!(reverse_string("x🧑\u{200d}🌾"), "🧑\u{200d}🌾x");
}

#[test]
fn trailing_line_breaks() {
    assert!(has_trailing_line_break('\n'));
    assert!(has_trailing_line_break('\r'));
    assert!(has_trailing_line_break('\u{85}'));
    assert!(has_trailing_line_break('\u{2028}'));
    assert!(has_trailing_line_break('\u{2029}'));
    assert!(!has_trailing_line_break('a'));
    assert!(!has_trailing_line_break(' '));
    assert!(!has_trailing_line_break('.'));
}
