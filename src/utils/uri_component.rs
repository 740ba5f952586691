//! Strict percent-decoding of URI components.
//!
//! Query strings are already form-decoded by the time a handler sees them;
//! clients additionally percent-encode the link they pass in `url`, so the
//! value is decoded a second time here. Unlike a lenient decoder, a stray `%`
//! or a sequence that does not form valid UTF-8 is rejected.

use std::borrow::Cow;

/// Errors that can occur while decoding a URI component.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("Malformed percent escape at byte {0}")]
    MalformedEscape(usize),

    #[error("Decoded bytes are not valid UTF-8")]
    InvalidUtf8,
}

/// Decodes `%XX` escapes in `input`.
///
/// `+` is left untouched. Every `%` must be followed by two hex digits.
///
/// # Errors
///
/// Returns [`DecodeError::MalformedEscape`] for an incomplete or non-hex escape.
/// Returns [`DecodeError::InvalidUtf8`] if the decoded bytes are not UTF-8.
///
/// # Examples
///
/// ```
/// use link_cleaner::utils::uri_component::decode_uri_component;
///
/// assert_eq!(
///     decode_uri_component("https%3A%2F%2Fs.shopee.vn%2Fabc").unwrap(),
///     "https://s.shopee.vn/abc"
/// );
/// assert!(decode_uri_component("100%").is_err());
/// ```
pub fn decode_uri_component(input: &str) -> Result<String, DecodeError> {
    let bytes = input.as_bytes();

    for (idx, byte) in bytes.iter().enumerate() {
        if *byte != b'%' {
            continue;
        }

        let escape_is_hex = bytes
            .get(idx + 1..idx + 3)
            .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));

        if !escape_is_hex {
            return Err(DecodeError::MalformedEscape(idx));
        }
    }

    urlencoding::decode(input)
        .map(Cow::into_owned)
        .map_err(|_| DecodeError::InvalidUtf8)
}
