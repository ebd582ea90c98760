//! Parsing of `git status --porcelain` output
//!
//! Each line is `XY PATH`: two status characters, one space, then the path.
//! Paths with special characters arrive C-quoted, and rename/copy lines carry
//! `OLD -> NEW` in the path field.

use crate::error::CoreError;
use crate::models::{ChangeEntry, StatusCode};

const RENAME_ARROW: &str = " -> ";

/// Parses porcelain status output into change entries, in output order.
///
/// Blank lines are skipped; any other line that does not fit the format is
/// reported as an error rather than guessed at.
pub fn parse_porcelain(output: &str) -> Result<Vec<ChangeEntry>, CoreError> {
    let mut entries = Vec::new();
    for (idx, raw) in output.lines().enumerate() {
        let line = raw.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        entries.push(parse_line(line, idx + 1)?);
    }
    Ok(entries)
}

fn parse_line(line: &str, line_no: usize) -> Result<ChangeEntry, CoreError> {
    let malformed = || CoreError::MalformedStatusLine {
        line_no,
        line: line.to_string(),
    };

    let mut chars = line.chars();
    let status = match (chars.next(), chars.next(), chars.next()) {
        (Some(x), Some(y), Some(' ')) => StatusCode::new(x, y),
        _ => return Err(malformed()),
    };
    let field = chars.as_str();
    if field.is_empty() {
        return Err(malformed());
    }

    let (first, rest) = take_path(field, status.has_source_path(), line_no, line)?;
    if rest.is_empty() {
        return Ok(ChangeEntry::new(status, first));
    }

    // Only a rename/copy may have anything after the first path
    let target = rest.strip_prefix(RENAME_ARROW).ok_or_else(malformed)?;
    let (path, tail) = take_path(target, false, line_no, line)?;
    if !tail.is_empty() || path.is_empty() {
        return Err(malformed());
    }

    Ok(ChangeEntry {
        status,
        path,
        original_path: Some(first),
    })
}

/// Splits one path off the front of `field`, returning it with the remainder.
fn take_path<'a>(
    field: &'a str,
    stop_at_arrow: bool,
    line_no: usize,
    line: &str,
) -> Result<(String, &'a str), CoreError> {
    if let Some(quoted) = field.strip_prefix('"') {
        let end = closing_quote(quoted).ok_or_else(|| CoreError::UnterminatedQuote {
            line_no,
            line: line.to_string(),
        })?;
        return Ok((unquote(&quoted[..end]), &quoted[end + 1..]));
    }

    if stop_at_arrow {
        if let Some(i) = field.find(RENAME_ARROW) {
            return Ok((field[..i].to_string(), &field[i..]));
        }
    }
    Ok((field.to_string(), ""))
}

/// Byte offset of the first unescaped `"` in `s`
fn closing_quote(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'"' => return Some(i),
            _ => i += 1,
        }
    }
    None
}

/// Reverses git's C-style path quoting.
///
/// Octal escapes are raw bytes, so multi-byte UTF-8 names are reassembled
/// before decoding.
pub fn unquote(inner: &str) -> String {
    let bytes = inner.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'\\' || i + 1 >= bytes.len() {
            out.push(bytes[i]);
            i += 1;
            continue;
        }

        let simple = match bytes[i + 1] {
            b'a' => Some(0x07),
            b'b' => Some(0x08),
            b't' => Some(b'\t'),
            b'n' => Some(b'\n'),
            b'v' => Some(0x0b),
            b'f' => Some(0x0c),
            b'r' => Some(b'\r'),
            b'"' => Some(b'"'),
            b'\\' => Some(b'\\'),
            _ => None,
        };
        if let Some(b) = simple {
            out.push(b);
            i += 2;
            continue;
        }

        if let Some(b) = octal_byte(&bytes[i + 1..]) {
            out.push(b);
            i += 4;
            continue;
        }

        // Unknown escape, keep it as written
        out.push(bytes[i]);
        i += 1;
    }

    String::from_utf8_lossy(&out).into_owned()
}

fn octal_byte(digits: &[u8]) -> Option<u8> {
    match digits {
        [a @ b'0'..=b'3', b @ b'0'..=b'7', c @ b'0'..=b'7', ..] => {
            Some((a - b'0') * 64 + (b - b'0') * 8 + (c - b'0'))
        }
        _ => None,
    }
}
