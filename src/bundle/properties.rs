//! `.properties` file parsing
//!
//! Follows the `java.util.Properties` text format: `#`/`!` comments, `=`,
//! `:` or whitespace between key and value, backslash line continuations and
//! `\t \n \r \f \uXXXX` escapes. A key repeated later in the file replaces
//! the earlier value.

use std::str::Chars;

use thiserror::Error;

use super::Properties;

const WHITESPACE: [char; 3] = [' ', '\t', '\x0c'];

/// Malformed content that prevents reading a file
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PropertiesError {
    #[error("Malformed \\uXXXX encoding on logical line {line}")]
    MalformedUnicodeEscape { line: usize },
}

/// Decode raw file bytes: UTF-8 when valid, ISO-8859-1 otherwise
pub fn decode(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => e.into_bytes().into_iter().map(char::from).collect(),
    }
}

/// Parse properties text.
///
/// With `keep_values == false` every value is `None`; only keys are kept.
pub fn parse(content: &str, keep_values: bool) -> Result<Properties, PropertiesError> {
    let mut properties = Properties::new();
    for (index, line) in logical_lines(content).iter().enumerate() {
        let (raw_key, raw_value) = split_key_value(line);
        let malformed = PropertiesError::MalformedUnicodeEscape { line: index + 1 };
        let key = unescape(raw_key).ok_or_else(|| malformed.clone())?;
        let value = if keep_values {
            Some(unescape(raw_value).ok_or(malformed)?)
        } else {
            None
        };
        properties.insert(key, value);
    }
    Ok(properties)
}

/// Join continued natural lines, dropping blank and comment lines
fn logical_lines(content: &str) -> Vec<String> {
    let normalized = content.replace("\r\n", "\n");
    let mut lines = Vec::new();
    let mut current: Option<String> = None;

    for natural in normalized.split(['\n', '\r']) {
        let trimmed = natural.trim_start_matches(WHITESPACE);
        if current.is_none() && (trimmed.is_empty() || trimmed.starts_with(['#', '!'])) {
            continue;
        }

        let (body, continues) = strip_continuation(trimmed);
        current.get_or_insert_with(String::new).push_str(body);
        if !continues {
            lines.extend(current.take());
        }
    }

    if let Some(line) = current {
        lines.push(line);
    }
    lines
}

/// An odd number of trailing backslashes continues the line
fn strip_continuation(line: &str) -> (&str, bool) {
    let trailing = line.chars().rev().take_while(|c| *c == '\\').count();
    if trailing % 2 == 1 {
        (&line[..line.len() - 1], true)
    } else {
        (line, false)
    }
}

/// Split at the first unescaped `=`, `:` or whitespace
fn split_key_value(line: &str) -> (&str, &str) {
    let mut escaped = false;
    let mut end = line.len();
    for (index, c) in line.char_indices() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == '=' || c == ':' || WHITESPACE.contains(&c) {
            end = index;
            break;
        }
    }

    let key = &line[..end];
    let mut rest = line[end..].trim_start_matches(WHITESPACE);
    if let Some(stripped) = rest.strip_prefix(['=', ':']) {
        rest = stripped.trim_start_matches(WHITESPACE);
    }
    (key, rest)
}

/// Resolve escapes; `None` on a malformed `\u` sequence
fn unescape(raw: &str) -> Option<String> {
    if !raw.contains('\\') {
        return Some(raw.to_string());
    }

    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\x0c'),
            Some('u') => {
                let unit = read_hex4(&mut chars)?;
                out.push(decode_unit(unit, &mut chars));
            }
            Some(other) => out.push(other),
            None => {}
        }
    }
    Some(out)
}

/// Character for one UTF-16 unit, pairing a high surrogate with a `\uXXXX`
/// low surrogate that follows. Unpaired surrogates become U+FFFD.
fn decode_unit(unit: u32, chars: &mut Chars<'_>) -> char {
    if (0xD800..0xDC00).contains(&unit) {
        let mut ahead = chars.clone();
        if ahead.next() == Some('\\') && ahead.next() == Some('u') {
            if let Some(low @ 0xDC00..=0xDFFF) = read_hex4(&mut ahead) {
                *chars = ahead;
                let code = 0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00);
                return char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER);
            }
        }
    }
    char::from_u32(unit).unwrap_or(char::REPLACEMENT_CHARACTER)
}

fn read_hex4(chars: &mut impl Iterator<Item = char>) -> Option<u32> {
    let mut value = 0;
    for _ in 0..4 {
        value = value * 16 + chars.next()?.to_digit(16)?;
    }
    Some(value)
}
