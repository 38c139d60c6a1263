// file: src/describer/inline_json.rs
// description: single-line json rendering with spaced separators and ascii escaping
// reference: https://docs.rs/serde_json/latest/serde_json/ser/trait.Formatter.html

use crate::error::Result;
use serde::Serialize;
use serde_json::ser::Formatter;
use std::fmt::Write as _;
use std::io;

/// Single-line output using `", "` between items and `": "` after keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineFormatter;

impl Formatter for InlineFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

pub fn to_inline_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, InlineFormatter);
    value.serialize(&mut serializer)?;

    // serde_json only ever emits valid UTF-8
    let text = String::from_utf8_lossy(&buf).into_owned();
    Ok(escape_non_ascii(&text))
}

/// Rewrites every non-ASCII char of serialized JSON as `\uXXXX` escapes.
///
/// Non-ASCII characters can only appear inside JSON strings, so the result is
/// still valid JSON describing the same value.
pub fn escape_non_ascii(json: &str) -> String {
    if json.is_ascii() {
        return json.to_string();
    }

    let mut out = String::with_capacity(json.len() + 16);
    let mut units = [0u16; 2];
    for c in json.chars() {
        if c.is_ascii() {
            out.push(c);
            continue;
        }
        for unit in c.encode_utf16(&mut units).iter() {
            let _ = write!(out, "\\u{:04x}", unit);
        }
    }
    out
}
