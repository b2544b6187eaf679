use freq_engine::decode_text;
use pretty_assertions::assert_eq;

#[test]
fn ascii_text_round_trips() {
    // Pure ASCII decodes identically under any detected superset encoding.
    let decoded = decode_text("hello world".as_bytes()).unwrap();

    assert_eq!(decoded.text, "hello world");
}

#[test]
fn non_ascii_utf8_is_detected_as_utf8() {
    let decoded = decode_text("héllo wörld naïve café".as_bytes()).unwrap();

    assert_eq!(decoded.text, "héllo wörld naïve café");
    assert_eq!(decoded.encoding_label, "UTF-8");
}

#[test]
fn utf8_bom_is_stripped() {
    let mut bytes = vec![0xEF, 0xBB, 0xBF];
    bytes.extend_from_slice("salut".as_bytes());

    let decoded = decode_text(&bytes).unwrap();
    assert_eq!(decoded.text, "salut");
    assert_eq!(decoded.encoding_label, "UTF-8");
}

#[test]
fn utf16le_bom_is_recognized() {
    // "ab" encoded as UTF-16LE with BOM.
    let bytes = vec![0xFF, 0xFE, b'a', 0x00, b'b', 0x00];

    let decoded = decode_text(&bytes).unwrap();
    assert_eq!(decoded.text, "ab");
    assert_eq!(decoded.encoding_label, "UTF-16LE");
}

#[test]
fn legacy_single_byte_text_is_detected() {
    // "café est déjà très agréable" in latin-1: not valid UTF-8.
    let bytes = b"caf\xe9 est d\xe9j\xe0 tr\xe8s agr\xe9able".to_vec();

    let decoded = decode_text(&bytes).unwrap();
    assert!(decoded.text.contains("café"));
    assert!(decoded.text.contains("déjà"));
}
