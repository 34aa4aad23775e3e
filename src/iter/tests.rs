use super::*;

use pretty_assertions::assert_eq;

#[test]
fn yields_clusters() {
    let clusters: Vec<_> = Graphemes::new("héllo 🇩🇪").collect();
    assert_eq!(clusters, ["h", "é", "l", "l", "o", " ", "🇩🇪"]);
    assert_eq!(Graphemes::new("").count(), 0);
}

#[test]
fn exposes_boundaries_of_the_latest_cluster() {
    let mut clusters = Graphemes::new("Hi 世");
    assert!(!clusters.is_word_boundary());

    assert_eq!(clusters.next(), Some("H"));
    assert!(!clusters.is_word_boundary());
    assert_eq!(clusters.width(), 1);

    assert_eq!(clusters.next(), Some("i"));
    assert!(clusters.is_word_boundary());
    assert_eq!(clusters.line_break(), crate::LINE_DONT_BREAK);

    assert_eq!(clusters.next(), Some(" "));
    assert!(clusters.is_word_boundary());
    assert_eq!(clusters.line_break(), crate::LINE_CAN_BREAK);

    assert_eq!(clusters.next(), Some("世"));
    assert_eq!(clusters.width(), 2);
    assert!(clusters.is_sentence_boundary());
    assert_eq!(clusters.line_break(), crate::LINE_MUST_BREAK);
    assert_eq!(clusters.rest(), "");

    assert_eq!(clusters.next(), None);
    assert_eq!(clusters.line_break(), crate::LINE_DONT_BREAK);
}
