//! Tests for quoted-field masking and restoration.

use rowfix_core::quote::{mask, unmask};

#[test]
fn masks_single_quoted_field() {
    let (masked, store) = mask("a,\"b,c\",d");
    assert_eq!(masked, "a,quotedString(0),d");
    assert_eq!(store.get(0), Some("\"b,c\""));
    assert_eq!(store.len(), 1);
}

#[test]
fn masks_multiple_quoted_fields_left_to_right() {
    let (masked, store) = mask("\"x\",mid,\"y,z\"");
    assert_eq!(masked, "quotedString(0),mid,quotedString(1)");
    assert_eq!(store.get(0), Some("\"x\""));
    assert_eq!(store.get(1), Some("\"y,z\""));
}

#[test]
fn masks_empty_quoted_field() {
    let (masked, store) = mask("a,\"\",b");
    assert_eq!(masked, "a,quotedString(0),b");
    assert_eq!(store.get(0), Some("\"\""));
}

#[test]
fn unterminated_quote_is_left_as_literal_text() {
    let (masked, store) = mask("a,\"b,c");
    assert_eq!(masked, "a,\"b,c");
    assert!(store.is_empty());
}

#[test]
fn odd_quote_count_masks_completed_pairs_only() {
    let (masked, store) = mask("\"a\",\"b");
    assert_eq!(masked, "quotedString(0),\"b");
    assert_eq!(store.len(), 1);
}

#[test]
fn unmask_restores_exact_placeholder_fields_only() {
    let (masked, store) = mask("\"q,r\"");
    assert_eq!(masked, "quotedString(0)");
    assert_eq!(unmask("quotedString(0)", &store), "\"q,r\"");

    // Partial matches, non-numeric indices, and indices the store never
    // issued all pass through unchanged.
    assert_eq!(unmask("xquotedString(0)", &store), "xquotedString(0)");
    assert_eq!(unmask("quotedString(x)", &store), "quotedString(x)");
    assert_eq!(unmask("quotedString(7)", &store), "quotedString(7)");
    assert_eq!(unmask("plain", &store), "plain");
}
