use super::*;

use pretty_assertions::assert_eq;
use proptest::prelude::*;

/// Runs [`step_string`] to exhaustion, collecting each cluster with its
/// boundaries word and the state returned alongside it.
fn trace(input: &str) -> Vec<(&str, u32, i64)> {
    let mut out = Vec::new();
    let mut rest = input;
    let mut state = -1i64;
    while !rest.is_empty() {
        let (cluster, remainder, boundaries, new_state) = step_string(rest, state);
        assert!(!cluster.is_empty(), "empty cluster from {input:?}");
        assert!(remainder.len() < rest.len(), "no progress on {input:?}");
        out.push((cluster, boundaries, new_state));
        rest = remainder;
        state = new_state;
    }
    out
}

fn clusters(input: &str) -> Vec<&str> {
    trace(input).into_iter().map(|(cluster, _, _)| cluster).collect()
}

/// Joins clusters into segments that end wherever `mask` is set in the
/// boundaries word.
fn segments(input: &str, mask: u32) -> Vec<String> {
    let mut out = Vec::new();
    let mut current = String::new();
    for (cluster, boundaries, _) in trace(input) {
        current.push_str(cluster);
        if boundaries & mask != 0 {
            out.push(core::mem::take(&mut current));
        }
    }
    assert!(current.is_empty(), "input did not end on a boundary");
    out
}

#[test]
fn empty_input() {
    assert_eq!(step(b"", -1), (&b""[..], &b""[..], 0, -1));
    assert_eq!(step_string("", -1), ("", "", 0, -1));
}

#[test]
fn single_letters() {
    let steps = trace("Hello");
    let clusters: Vec<_> = steps.iter().map(|&(cluster, _, _)| cluster).collect();
    assert_eq!(clusters, ["H", "e", "l", "l", "o"]);

    // Between letters: no line break (LB28), no word or sentence
    // boundary, width one.
    let interior = LINE_DONT_BREAK | 1 << SHIFT_WIDTH;
    for &(_, boundaries, _) in &steps[..4] {
        assert_eq!(boundaries, interior);
    }
    // The final cluster carries LB3, WB2, and SB2.
    let last = LINE_MUST_BREAK | MASK_WORD | MASK_SENTENCE | 1 << SHIFT_WIDTH;
    assert_eq!(steps[4].1, last);
}

#[test]
fn carriage_return_line_feed() {
    let steps = trace("a\r\nb");
    let clusters: Vec<_> = steps.iter().map(|&(cluster, _, _)| cluster).collect();
    assert_eq!(clusters, ["a", "\r\n", "b"]);

    // "a": no break before the CR (LB6), but a word boundary.
    assert_eq!(steps[0].1, LINE_DONT_BREAK | MASK_WORD | 1 << SHIFT_WIDTH);
    // "\r\n": mandatory break, word and sentence boundary, zero width.
    assert_eq!(steps[1].1, LINE_MUST_BREAK | MASK_WORD | MASK_SENTENCE);
    // "b": end of text.
    assert_eq!(
        steps[2].1,
        LINE_MUST_BREAK | MASK_WORD | MASK_SENTENCE | 1 << SHIFT_WIDTH
    );
}

#[test]
fn multi_codepoint_clusters() {
    // A flag is one cluster of two codepoints, two cells wide.
    let steps = trace("🇩🇪");
    assert_eq!(steps.len(), 1);
    assert_eq!(
        steps[0].1,
        LINE_MUST_BREAK | MASK_WORD | MASK_SENTENCE | 2 << SHIFT_WIDTH
    );

    // A pictographic ZWJ sequence with VS-16 is one cluster, two cells.
    let steps = trace("🏳\u{fe0f}\u{200d}🌈");
    assert_eq!(steps.len(), 1);
    assert_eq!(
        steps[0].1,
        LINE_MUST_BREAK | MASK_WORD | MASK_SENTENCE | 2 << SHIFT_WIDTH
    );

    // An Indic conjunct is one cluster, one cell.
    let steps = trace("क्षि");
    assert_eq!(steps.len(), 1);
    assert_eq!(
        steps[0].1,
        LINE_MUST_BREAK | MASK_WORD | MASK_SENTENCE | 1 << SHIFT_WIDTH
    );
}

#[test]
fn word_stepping() {
    assert_eq!(
        segments("Hello, 世界!", MASK_WORD),
        ["Hello", ",", " ", "世", "界", "!"],
    );
}

#[test]
fn sentence_stepping() {
    assert_eq!(
        segments("This is sentence 1.0. And this is sentence two.", MASK_SENTENCE),
        ["This is sentence 1.0. ", "And this is sentence two."],
    );
}

#[test]
fn line_stepping() {
    let must_or_can = |input: &str| -> Vec<String> {
        let mut out = Vec::new();
        let mut current = String::new();
        for (cluster, boundaries, _) in trace(input) {
            current.push_str(cluster);
            if boundaries & MASK_LINE != LINE_DONT_BREAK {
                out.push(core::mem::take(&mut current));
            }
        }
        out
    };
    assert_eq!(must_or_can("100.50"), ["100.50"]);
    assert_eq!(must_or_can("well-known"), ["well-", "known"]);
    assert_eq!(
        must_or_can("First line.\nSecond line."),
        ["First ", "line.\n", "Second ", "line."],
    );
}

#[test]
fn byte_and_string_variants_agree() {
    let inputs = [
        "Hello, 世界! 🇩🇪🏳\u{fe0f}\u{200d}🌈",
        "a\r\nb\u{200b}c",
        "क्षि 한국 3.14",
    ];
    for input in inputs {
        let mut bytes_rest = input.as_bytes();
        let mut str_rest = input;
        let mut bytes_state = -1i64;
        let mut str_state = -1i64;
        while !str_rest.is_empty() {
            let (bytes_cluster, bytes_remainder, bytes_boundaries, new_bytes_state) =
                step(bytes_rest, bytes_state);
            let (str_cluster, str_remainder, str_boundaries, new_str_state) =
                step_string(str_rest, str_state);
            assert_eq!(bytes_cluster, str_cluster.as_bytes());
            assert_eq!(bytes_boundaries, str_boundaries);
            assert_eq!(new_bytes_state, new_str_state);
            bytes_rest = bytes_remainder;
            str_rest = str_remainder;
            bytes_state = new_bytes_state;
            str_state = new_str_state;
        }
        assert!(bytes_rest.is_empty());
    }
}

#[test]
fn malformed_bytes_degrade_to_replacement() {
    let input: &[u8] = &[b'a', 0xff, 0xfe, b'b'];
    let mut rest = input;
    let mut state = -1i64;
    let mut collected = Vec::new();
    while !rest.is_empty() {
        let (cluster, remainder, _, new_state) = step(rest, state);
        assert!(!cluster.is_empty());
        collected.extend_from_slice(cluster);
        rest = remainder;
        state = new_state;
    }
    assert_eq!(collected, input);
}

#[test]
fn foreign_state_bits_are_masked() {
    // Nonsense high bits must not panic or stall the cursor.
    for state in [i64::MAX, 0x7fff_ffff_ffff, 12345] {
        let mut rest = "ab 世".as_bytes();
        let mut state = state;
        let mut total = 0;
        while !rest.is_empty() {
            let (cluster, remainder, _, new_state) = step(rest, state);
            total += cluster.len();
            rest = remainder;
            state = new_state;
        }
        assert_eq!(total, "ab 世".len());
    }
}

#[test]
fn fast_paths_match_their_machines() {
    let input = "Hello, world! This works. 世界";

    let mut rest = input;
    let mut state = -1i64;
    let mut words = Vec::new();
    while !rest.is_empty() {
        let (word, remainder, new_state) = first_word_in_string(rest, state);
        assert!(!word.is_empty());
        words.push(word);
        rest = remainder;
        state = new_state;
    }
    assert_eq!(words.concat(), input);
    assert_eq!(words[0], "Hello");

    let mut rest = input;
    let mut state = -1i64;
    let mut sentences = Vec::new();
    while !rest.is_empty() {
        let (sentence, remainder, new_state) = first_sentence_in_string(rest, state);
        sentences.push(sentence);
        rest = remainder;
        state = new_state;
    }
    assert_eq!(sentences, ["Hello, world! ", "This works. ", "世界"]);

    let (segment, rest, must_break, _) = first_line_segment_in_string("well-known", -1);
    assert_eq!((segment, rest, must_break), ("well-", "known", false));

    let (cluster, rest, width, _) = first_grapheme_cluster_in_string("🇩🇪!", -1);
    assert_eq!((cluster, rest, width), ("🇩🇪", "!", 2));
    let (cluster, rest, width, _) = first_grapheme_cluster("🇩🇪!".as_bytes(), -1);
    assert_eq!(cluster, "🇩🇪".as_bytes());
    assert_eq!((rest, width), (&b"!"[..], 2));
}

/// Characters the generated tables are known to cover, mixing every
/// machine's interesting classes.
fn arb_char() -> impl Strategy<Value = char> {
    prop_oneof![
        Just('a'),
        Just('B'),
        Just('5'),
        Just(' '),
        Just('\r'),
        Just('\n'),
        Just('.'),
        Just(','),
        Just('!'),
        Just('-'),
        Just('('),
        Just(')'),
        Just('"'),
        Just('\u{a0}'),
        Just('\u{ab}'),
        Just('\u{301}'),
        Just('\u{200b}'),
        Just('\u{200d}'),
        Just('\u{2014}'),
        Just('\u{5d0}'),
        Just('\u{915}'),
        Just('\u{94d}'),
        Just('\u{e2a}'),
        Just('\u{1100}'),
        Just('\u{1161}'),
        Just('한'),
        Just('世'),
        Just('ア'),
        Just('\u{3002}'),
        Just('\u{fe0f}'),
        Just('\u{1f1e9}'),
        Just('\u{1f1ea}'),
        Just('😀'),
        Just('🧑'),
    ]
}

fn arb_text() -> impl Strategy<Value = String> {
    proptest::collection::vec(arb_char(), 0..32).prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    /// Repeated stepping consumes the input exactly, cluster by
    /// non-empty cluster.
    #[test]
    fn stepping_is_exhaustive(input in arb_text()) {
        let clusters = clusters(&input);
        prop_assert_eq!(clusters.concat(), input);
    }

    /// The final call reports a mandatory line break and word and
    /// sentence boundaries (LB3, WB2, SB2).
    #[test]
    fn end_of_text_boundaries(input in arb_text()) {
        if let Some(&(_, boundaries, _)) = trace(&input).last() {
            prop_assert_eq!(boundaries & MASK_LINE, LINE_MUST_BREAK);
            prop_assert_ne!(boundaries & MASK_WORD, 0);
            prop_assert_ne!(boundaries & MASK_SENTENCE, 0);
        }
    }

    /// The widths reported cluster by cluster add up to the string
    /// width.
    #[test]
    fn widths_are_additive(input in arb_text()) {
        let sum: usize = trace(&input)
            .iter()
            .map(|&(_, boundaries, _)| (boundaries >> SHIFT_WIDTH) as usize)
            .sum();
        prop_assert_eq!(sum, crate::string_width(&input));
    }

    /// Stopping after any cluster and resuming from the returned state
    /// and rest yields the same tail of clusters and verdicts.
    #[test]
    fn stepping_resumes_transparently(input in arb_text()) {
        let full = trace(&input);
        let mut offset = 0usize;
        for (resume_at, &(cluster, _, state)) in full.iter().enumerate() {
            offset += cluster.len();
            if offset >= input.len() {
                break;
            }
            let resumed = trace_from(&input[offset..], state);
            prop_assert_eq!(&resumed[..], &full[resume_at + 1..]);
        }
    }

    /// Grapheme counting agrees with the fused stepper.
    #[test]
    fn cluster_counts_agree(input in arb_text()) {
        prop_assert_eq!(clusters(&input).len(), crate::grapheme_cluster_count(&input));
    }
}

/// Like [`trace`], but resuming from a saved state.
fn trace_from(input: &str, state: i64) -> Vec<(&str, u32, i64)> {
    let mut out = Vec::new();
    let mut rest = input;
    let mut state = state;
    while !rest.is_empty() {
        let (cluster, remainder, boundaries, new_state) = step_string(rest, state);
        out.push((cluster, boundaries, new_state));
        rest = remainder;
        state = new_state;
    }
    out
}
