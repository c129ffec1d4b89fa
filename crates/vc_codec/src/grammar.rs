//! Sentinels and line shapes shared by the encoder and the decoder.
//!
//! A document is a list of lines separated by `\n` whose fields are separated
//! by `\t`. Line shapes:
//!
//! - scalar row: encoded scalars, or [`EMPTY`] for a type without scalars,
//!   or [`ABSENT`] for a missing object.
//! - member line: first column is `name:`, values follow on the same line.
//! - continuation line: starts with `\t`, one level deeper than its owner.
//! - type header: [`MARKER`] + type name, then the type's scalar column names.

use alloc::string::String;

use crate::ops::ScalarError;

// -----------------------------------------------------------------------------
// Sentinels

/// The reserved marker character. Never starts an encoded scalar.
pub const MARKER: char = '§';

/// A whole scalar row meaning "this object is absent".
pub const ABSENT: &str = "§";

/// A scalar row or header meaning "present, without scalar members".
pub const EMPTY: &str = "§§";

/// Field separator.
pub const TAB: char = '\t';

/// Line separator.
pub const NEWLINE: char = '\n';

/// Suffix of a member name at the start of a member line.
pub const NAME_SUFFIX: char = ':';

/// Default number of scalar collection items per line.
pub const ITEMS_PER_LINE: usize = 5;

// -----------------------------------------------------------------------------
// Line shapes

/// Returns the text before the first tab.
#[inline]
pub fn first_column(line: &str) -> &str {
    line.split(TAB).next().unwrap_or_default()
}

/// Returns `true` if the line announces a nested type.
///
/// ```
/// use vc_codec::grammar::is_type_header;
///
/// assert!(is_type_header("§Vec3\tx\ty\tz"));
/// assert!(is_type_header("§Tag\t§§"));
/// assert!(!is_type_header("§§"));
/// assert!(!is_type_header("§\t§"));
/// ```
pub fn is_type_header(line: &str) -> bool {
    let first = first_column(line);
    first.starts_with(MARKER) && first != ABSENT && first != EMPTY
}

/// Returns the member name if the line is a member line.
///
/// ```
/// use vc_codec::grammar::member_name;
///
/// assert_eq!(member_name("scores:\t1\t2"), Some("scores"));
/// assert_eq!(member_name("scores:"), Some("scores"));
/// assert_eq!(member_name("\t1\t2"), None);
/// assert_eq!(member_name("\"a:\"\t2"), None);
/// ```
pub fn member_name(line: &str) -> Option<&str> {
    first_column(line).strip_suffix(NAME_SUFFIX)
}

/// Returns `true` if the line is the scalar row that starts an object.
///
/// Inside an unshifted collection block, every other line of an element is
/// either a member line, a type header or a deeper continuation line.
pub fn is_object_start(line: &str) -> bool {
    let first = first_column(line);
    !first.is_empty() && !first.ends_with(NAME_SUFFIX) && !is_type_header(line)
}

/// Builds a type header line for `type_name` with its scalar column header.
pub fn type_header(type_name: &str, header: &str) -> String {
    let mut line = String::with_capacity(MARKER.len_utf8() + type_name.len() + 1 + header.len());
    line.push(MARKER);
    line.push_str(type_name);
    line.push(TAB);
    line.push_str(header);
    line
}

/// Returns the scalar column header that follows the type name in a type header.
#[inline]
pub fn type_header_columns(line: &str) -> &str {
    line.split_once(TAB).map(|(_, rest)| rest).unwrap_or_default()
}

// -----------------------------------------------------------------------------
// Strings

/// Appends `text` wrapped in quotes, escaping backslash, newline, carriage
/// return and tab.
///
/// ```
/// let mut out = String::new();
/// vc_codec::grammar::write_quoted(&mut out, "a\tb\nc\\d");
/// assert_eq!(out, r#""a\tb\nc\\d""#);
/// ```
pub fn write_quoted(out: &mut String, text: &str) {
    out.reserve(text.len() + 2);
    out.push('"');
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out.push('"');
}

/// Reverses [`write_quoted`].
///
/// ```
/// use vc_codec::grammar::read_quoted;
///
/// assert_eq!(read_quoted(r#""a\tb\nc\\d""#).unwrap(), "a\tb\nc\\d");
/// assert_eq!(read_quoted(r#""""#).unwrap(), "");
/// assert!(read_quoted("plain").is_err());
/// ```
pub fn read_quoted(text: &str) -> Result<String, ScalarError> {
    let inner = text
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .ok_or_else(|| ScalarError::Unquoted { text: text.into() })?;

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('\\') => out.push('\\'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some(other) => return Err(ScalarError::UnknownEscape(other)),
            None => return Err(ScalarError::UnknownEscape('"')),
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::{is_object_start, read_quoted, write_quoted};

    #[test]
    fn quoted_special_characters() {
        let samples = ["", "plain", "a\tb\nc\\d", "\\n literal", "tab\t\t", "ü§"];
        for sample in samples {
            let mut out = String::new();
            write_quoted(&mut out, sample);
            assert!(!out.contains('\t') && !out.contains('\n'));
            assert_eq!(read_quoted(&out).unwrap(), sample);
        }
    }

    #[test]
    fn object_start_lines() {
        assert!(is_object_start("1\t\"a\""));
        assert!(is_object_start("§§"));
        assert!(is_object_start("§"));
        assert!(!is_object_start("tags:\t1"));
        assert!(!is_object_start("\t1\t2"));
        assert!(!is_object_start("§Item\tid"));
        assert!(!is_object_start(""));
    }
}
