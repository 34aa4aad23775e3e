use super::*;

use pretty_assertions::assert_eq;

#[test]
fn decodes_well_formed_sequences() {
    assert_eq!(decode(b"a"), Some(('a', 1)));
    assert_eq!(decode("é!".as_bytes()), Some(('é', 2)));
    assert_eq!(decode("世".as_bytes()), Some(('世', 3)));
    assert_eq!(decode("🇩x".as_bytes()), Some(('\u{1f1e9}', 4)));
    assert_eq!(decode(b""), None);
}

#[test]
fn malformed_input_becomes_replacement_one_byte_at_a_time() {
    // Stray continuation byte.
    assert_eq!(decode(&[0x80, b'a']), Some((REPLACEMENT, 1)));
    // Invalid leading byte.
    assert_eq!(decode(&[0xff]), Some((REPLACEMENT, 1)));
    // Truncated three-byte sequence.
    assert_eq!(decode(&[0xe4, 0xb8]), Some((REPLACEMENT, 1)));
    // Overlong encoding of '/'.
    assert_eq!(decode(&[0xc0, 0xaf]), Some((REPLACEMENT, 1)));
    // An encoded surrogate half.
    assert_eq!(decode(&[0xed, 0xa0, 0x80]), Some((REPLACEMENT, 1)));
}

#[test]
fn remainder_walks_both_input_kinds() {
    let bytes = Remainder::Bytes("a世".as_bytes());
    let (ch, len) = bytes.decode_first().unwrap();
    assert_eq!((ch, len), ('a', 1));
    let rest = bytes.advance(len);
    assert_eq!(rest.decode_first(), Some(('世', 3)));
    assert!(rest.advance(3).is_empty());

    let s = Remainder::Str("a世");
    assert_eq!(s.decode_first(), Some(('a', 1)));
    assert_eq!(s.advance(1).decode_first(), Some(('世', 3)));
}
