//! Named character classes usable as sampling domains.
//!
//! The registry is fixed at compile time and never mutated. Classes are ASCII
//! only.

use std::collections::HashSet;

use crate::domain::effective_chars;
use crate::errors::GenerateError;

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const HEX_DIGITS: &str = "0123456789abcdef";
pub const SYMBOLS: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;
pub const ALPHA: &str = concat!(
    "abcdefghijklmnopqrstuvwxyz",
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ"
);
pub const ALPHANUMERIC: &str = concat!(
    "abcdefghijklmnopqrstuvwxyz",
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
    "0123456789"
);
pub const ALPHANUMERIC_SYMBOLS: &str = concat!(
    "abcdefghijklmnopqrstuvwxyz",
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
    "0123456789",
    r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##
);

/// Registered class names, in the order shown to users.
pub const NAMES: &[&str] = &[
    "alphanumeric",
    "alpha",
    "numeric",
    "lowercase",
    "uppercase",
    "hex",
    "symbols",
    "alphanumeric_symbols",
];

/// Looks up a class by name or single-letter template code.
pub fn lookup(name: &str) -> Result<&'static str, GenerateError> {
    match name {
        "alphanumeric" => Ok(ALPHANUMERIC),
        "alpha" => Ok(ALPHA),
        "numeric" => Ok(DIGITS),
        "lowercase" => Ok(LOWERCASE),
        "uppercase" => Ok(UPPERCASE),
        "hex" => Ok(HEX_DIGITS),
        "symbols" => Ok(SYMBOLS),
        "alphanumeric_symbols" => Ok(ALPHANUMERIC_SYMBOLS),
        _ => {
            let mut codes = name.chars();
            match (codes.next(), codes.next()) {
                (Some(code), None) => {
                    short_code(code).ok_or_else(|| GenerateError::UnknownPattern(name.to_string()))
                }
                _ => Err(GenerateError::UnknownPattern(name.to_string())),
            }
        }
    }
}

/// Template short codes: `d` digit, `l` lowercase, `u` uppercase, `a` letter,
/// `x` hex digit, `s` symbol, `w` word character.
pub fn short_code(code: char) -> Option<&'static str> {
    match code {
        'd' => Some(DIGITS),
        'l' => Some(LOWERCASE),
        'u' => Some(UPPERCASE),
        'a' => Some(ALPHA),
        'x' => Some(HEX_DIGITS),
        's' => Some(SYMBOLS),
        'w' => Some(ALPHANUMERIC),
        _ => None,
    }
}

/// Resolves a class and strips excluded characters, preserving class order.
pub fn effective_class(name: &str, exclude: &HashSet<char>) -> Result<Vec<char>, GenerateError> {
    let class = lookup(name)?;
    let chars = effective_chars(class.chars(), exclude);
    if chars.is_empty() {
        return Err(GenerateError::InsufficientDomain {
            needed: 1,
            available: 0,
        });
    }
    Ok(chars)
}
