use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    static ref UNICODE_ESCAPE: Regex = Regex::new(r"\\u([0-9a-fA-F]{4})").unwrap();
}

/// Replace literal `\uXXXX` sequences with the character they name.
///
/// Each escape is decoded on its own as a single UTF-16 code unit, so
/// surrogate halves cannot form a character and are left as written.
pub fn decode_unicode_escapes(encoded: &str) -> String {
    UNICODE_ESCAPE
        .replace_all(encoded, |caps: &Captures| {
            u32::from_str_radix(&caps[1], 16)
                .ok()
                .and_then(char::from_u32)
                .map(String::from)
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}
