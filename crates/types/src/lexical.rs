//! Byte classes shared by keyword matching and configuration validation.

/// True for bytes that may continue an identifier.
///
/// Non-ASCII bytes count as identifier bytes so that keywords are never
/// matched inside a longer word written in another script.
pub fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$' || b >= 0x80
}

/// True for bytes that may start an identifier.
pub fn is_ident_start(b: u8) -> bool {
    is_ident_byte(b) && !b.is_ascii_digit()
}
