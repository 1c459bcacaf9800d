//! String helpers for reading Go declaration files.

use std::str::Chars;

/// Why a Go string literal could not be unquoted.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum UnquoteError {
    #[error("string literal must start with '\"' or '`'")]
    NotQuoted,
    #[error("unterminated string literal")]
    Unterminated,
    #[error("unexpected {0:?} inside string literal")]
    UnexpectedChar(char),
    #[error("invalid escape sequence '\\{0}'")]
    InvalidEscape(char),
    #[error("string literal does not decode to valid UTF-8")]
    InvalidUtf8,
}

/// Cut a line at the first `//`, dropping the comment.
///
/// This is purely lexical: a `//` inside a quoted string also starts a
/// comment, which is how `go.mod` lines are scanned for the module directive.
///
/// ```
/// use modtree::string_utils::strip_line_comment;
///
/// assert_eq!(strip_line_comment("module foo // the module"), "module foo ");
/// assert_eq!(strip_line_comment("no comment"), "no comment");
/// ```
pub fn strip_line_comment(line: &str) -> &str {
    match line.find("//") {
        Some(idx) => &line[..idx],
        None => line,
    }
}

/// Unquote a Go string literal.
///
/// Raw literals (`` `...` ``) are taken verbatim with carriage returns
/// removed. Interpreted literals (`"..."`) decode the Go escape sequences:
/// the single-character escapes, `\xHH` and three-digit octal bytes, and
/// `\uHHHH` / `\UHHHHHHHH` code points.
///
/// Byte escapes that leave the result invalid UTF-8 (`"\xff"`) are rejected
/// with [`UnquoteError::InvalidUtf8`], where Go would return the raw bytes.
///
/// ```
/// use modtree::string_utils::unquote;
///
/// assert_eq!(unquote("\"foo/bar\"").unwrap(), "foo/bar");
/// assert_eq!(unquote("`foo/bar`").unwrap(), "foo/bar");
/// assert!(unquote("\"foo").is_err());
/// ```
pub fn unquote(s: &str) -> Result<String, UnquoteError> {
    let quote = s.chars().next().ok_or(UnquoteError::NotQuoted)?;
    if quote != '"' && quote != '`' {
        return Err(UnquoteError::NotQuoted);
    }
    if s.len() < 2 || !s.ends_with(quote) {
        return Err(UnquoteError::Unterminated);
    }

    // Both quote characters are single-byte.
    let body = &s[1..s.len() - 1];
    if quote == '`' {
        if body.contains('`') {
            return Err(UnquoteError::UnexpectedChar('`'));
        }
        return Ok(body.replace('\r', ""));
    }

    unquote_interpreted(body)
}

fn unquote_interpreted(body: &str) -> Result<String, UnquoteError> {
    if !body.contains(['\\', '"', '\n']) {
        return Ok(body.to_string());
    }

    let mut out: Vec<u8> = Vec::with_capacity(body.len());
    let mut chars = body.chars();

    while let Some(c) = chars.next() {
        match c {
            '"' | '\n' => return Err(UnquoteError::UnexpectedChar(c)),
            '\\' => {
                let esc = chars.next().ok_or(UnquoteError::Unterminated)?;
                match esc {
                    'a' => out.push(0x07),
                    'b' => out.push(0x08),
                    'f' => out.push(0x0c),
                    'n' => out.push(b'\n'),
                    'r' => out.push(b'\r'),
                    't' => out.push(b'\t'),
                    'v' => out.push(0x0b),
                    '\\' => out.push(b'\\'),
                    '"' => out.push(b'"'),
                    'x' => {
                        let value = read_digits(&mut chars, 2, 16, esc)?;
                        out.push(value as u8);
                    }
                    'u' | 'U' => {
                        let len = if esc == 'u' { 4 } else { 8 };
                        let value = read_digits(&mut chars, len, 16, esc)?;
                        let ch = char::from_u32(value).ok_or(UnquoteError::InvalidEscape(esc))?;
                        push_char(&mut out, ch);
                    }
                    '0'..='7' => {
                        let rest = read_digits(&mut chars, 2, 8, esc)?;
                        let value = (esc as u32 - '0' as u32) * 64 + rest;
                        if value > 0xff {
                            return Err(UnquoteError::InvalidEscape(esc));
                        }
                        out.push(value as u8);
                    }
                    other => return Err(UnquoteError::InvalidEscape(other)),
                }
            }
            c => push_char(&mut out, c),
        }
    }

    String::from_utf8(out).map_err(|_| UnquoteError::InvalidUtf8)
}

fn read_digits(
    chars: &mut Chars<'_>,
    count: usize,
    radix: u32,
    esc: char,
) -> Result<u32, UnquoteError> {
    let mut value = 0u32;
    for _ in 0..count {
        let digit = chars
            .next()
            .and_then(|c| c.to_digit(radix))
            .ok_or(UnquoteError::InvalidEscape(esc))?;
        value = value * radix + digit;
    }
    Ok(value)
}

fn push_char(out: &mut Vec<u8>, c: char) {
    let mut buf = [0u8; 4];
    out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
}
