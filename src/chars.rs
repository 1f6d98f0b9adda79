//! Character classes used by the parser and by the checked constructors.

#[inline]
pub(crate) const fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

#[inline]
pub(crate) const fn is_lower(b: u8) -> bool {
    b.is_ascii_lowercase()
}

#[inline]
pub(crate) const fn is_alpha(b: u8) -> bool {
    b.is_ascii_alphabetic()
}

/// Visible ASCII plus space (`0x20..=0x7e`).
#[inline]
pub(crate) const fn is_print(b: u8) -> bool {
    matches!(b, b' '..=b'~')
}

#[inline]
pub(crate) const fn is_key_start(b: u8) -> bool {
    b == b'*' || is_lower(b)
}

#[inline]
pub(crate) const fn is_key_char(b: u8) -> bool {
    matches!(b, b'_' | b'-' | b'.' | b'*') || is_lower(b) || is_digit(b)
}

#[inline]
pub(crate) const fn is_token_start(b: u8) -> bool {
    b == b'*' || is_alpha(b)
}

#[inline]
pub(crate) const fn is_token_char(b: u8) -> bool {
    match b {
        b'!' | b'#' | b'$' | b'%' | b'&' | b'\'' | b'*' | b'+' | b'-' | b'.' | b'^' | b'_'
        | b'`' | b'|' | b'~' | b':' | b'/' => true,
        _ => is_alpha(b) || is_digit(b),
    }
}

#[inline]
pub(crate) const fn is_base64_char(b: u8) -> bool {
    matches!(b, b'+' | b'/' | b'=') || is_alpha(b) || is_digit(b)
}

/// Returns `true` if `s` is a well-formed key.
pub(crate) fn is_key(s: &str) -> bool {
    let bytes = s.as_bytes();
    match bytes.split_first() {
        Some((&first, rest)) => is_key_start(first) && rest.iter().all(|&b| is_key_char(b)),
        None => false,
    }
}

/// Returns `true` if `s` is a well-formed token.
pub(crate) fn is_token(s: &str) -> bool {
    let bytes = s.as_bytes();
    match bytes.split_first() {
        Some((&first, rest)) => is_token_start(first) && rest.iter().all(|&b| is_token_char(b)),
        None => false,
    }
}
