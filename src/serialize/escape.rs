// Copyright 2014-2017 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Escaping of text, attribute values and comment data.
//!
//! Each routine writes the unescaped runs of its input in one piece and
//! only breaks the input up where a replacement has to be written, so the
//! number of writes grows with the number of escaped bytes, not with the
//! length of the input.

use std::io;

use super::ByteSink;
use crate::util::smallcharset::SmallCharSet;

/// Bytes that text and attribute escaping look for.
const ESCAPED: SmallCharSet = small_char_set!('&' '\'' '<' '>' '"' '\r');

/// Numeric references are used for quotes: they are shorter than the named
/// ones, and `&apos;` only exists since HTML5.
fn text_entity(b: u8) -> &'static str {
    match b {
        b'&' => "&amp;",
        b'\'' => "&#39;",
        b'<' => "&lt;",
        b'>' => "&gt;",
        b'"' => "&#34;",
        b'\r' => "&#13;",
        _ => unreachable!("unrecognized escape character {:?}", b as char),
    }
}

/// Inside a double-quoted value only `"` ends the value, and a bare CR
/// would be normalized away by the parser.
fn attr_entity(b: u8) -> &'static str {
    match b {
        b'&' => "&",
        b'\'' => "'",
        b'<' => "<",
        b'>' => ">",
        b'"' => "&#34;",
        b'\r' => "&#13;",
        _ => unreachable!("unrecognized escape character {:?}", b as char),
    }
}

fn escape_with<S>(sink: &mut S, mut s: &str, entity: fn(u8) -> &'static str) -> io::Result<()>
where
    S: ByteSink + ?Sized,
{
    while let Some(i) = ESCAPED.find_in(s) {
        if i > 0 {
            sink.write_str(&s[..i])?;
        }
        sink.write_str(entity(s.as_bytes()[i]))?;
        s = &s[i + 1..];
    }
    if s.is_empty() {
        return Ok(());
    }
    sink.write_str(s)
}

/// Escape the contents of a text node, or a doctype name.
pub fn escape_text<S: ByteSink + ?Sized>(sink: &mut S, s: &str) -> io::Result<()> {
    escape_with(sink, s, text_entity)
}

/// Escape an attribute value that will be written between double quotes.
///
/// `&`, `'`, `<` and `>` are left alone. This is only correct because
/// values are always double-quoted.
pub fn escape_attr_value<S: ByteSink + ?Sized>(sink: &mut S, s: &str) -> io::Result<()> {
    escape_with(sink, s, attr_entity)
}

/// Escape comment data, touching as little of it as possible.
///
/// Comments sometimes carry meaning (conditional comments and the like)
/// and their angle brackets should survive a round trip. `&` is always
/// escaped since it starts other references. `>` is only escaped where it
/// would close the comment: at the very start of the data, or right after
/// a `!` or `-` of the unescaped input.
pub fn escape_comment<S: ByteSink + ?Sized>(sink: &mut S, s: &str) -> io::Result<()> {
    let bytes = s.as_bytes();

    // bytes[i..j] never needs escaping.
    let mut i = 0;
    for j in 0..bytes.len() {
        let escaped = match bytes[j] {
            b'&' => "&amp;",
            b'>' if j == 0 || matches!(bytes[j - 1], b'!' | b'-') => "&gt;",
            _ => continue,
        };
        if i < j {
            sink.write_str(&s[i..j])?;
        }
        sink.write_str(escaped)?;
        i = j + 1;
    }

    if i < bytes.len() {
        sink.write_str(&s[i..])?;
    }
    Ok(())
}

/// Write a doctype identifier in quotes: double quotes, unless the
/// identifier itself holds a double quote.
pub fn write_quoted<S: ByteSink + ?Sized>(sink: &mut S, s: &str) -> io::Result<()> {
    let q = if s.contains('"') { b'\'' } else { b'"' };
    sink.write_byte(q)?;
    sink.write_str(s)?;
    sink.write_byte(q)
}
