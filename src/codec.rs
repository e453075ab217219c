use std::collections::HashSet;

use super::{context::Context, error::Error};

/// Percent-encode every byte of `element` whose character is not in
/// `allowed_characters`, using two uppercase hex digits per byte.
pub fn encode_element<T>(element: T, allowed_characters: &HashSet<char>) -> String
where
    T: AsRef<str>,
{
    let element = element.as_ref();
    let mut encoded_element = String::with_capacity(element.len());
    for b in element.bytes() {
        let c = char::from(b);
        if b.is_ascii() && allowed_characters.contains(&c) {
            encoded_element.push(c);
        } else {
            encoded_element.push('%');
            encoded_element.push(hex_digit(b >> 4));
            encoded_element.push(hex_digit(b & 0x0F));
        }
    }
    encoded_element
}

/// Replace every `%XX` sequence in `element` by the byte it stands for.
///
/// # Errors
///
/// [`Error::InvalidEncoding`] if a `%` is not followed by two hex digits, or
/// if the decoded bytes are not valid UTF-8.
pub fn decode_element<T>(element: T, context: Context) -> Result<String, Error>
where
    T: AsRef<str>,
{
    let element = element.as_ref();
    if !element.contains('%') {
        return Ok(element.to_string());
    }
    let invalid = || Error::InvalidEncoding {
        context,
        text: element.to_string(),
    };
    let bytes = element.as_bytes();
    let mut output = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let high = bytes.get(i + 1).copied().and_then(hex_value);
            let low = bytes.get(i + 2).copied().and_then(hex_value);
            match (high, low) {
                (Some(high), Some(low)) => output.push((high << 4) | low),
                _ => return Err(invalid()),
            }
            i += 3;
        } else {
            output.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(output).map_err(|_| invalid())
}

fn hex_digit(nibble: u8) -> char {
    char::from(b"0123456789ABCDEF"[usize::from(nibble)])
}

fn hex_value(b: u8) -> Option<u8> {
    char::from(b).to_digit(16).and_then(|d| u8::try_from(d).ok())
}
