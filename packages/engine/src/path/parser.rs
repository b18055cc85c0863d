//! Structural path string parsing
//!
//! Reads back the form produced by the flattener. Quoted keys end at the
//! first double quote followed by `/` or the end of input, which is the
//! only reading available since embedded quotes are not escaped.

use super::escape::needs_quoting;
use super::types::{PathSegment, StructuralPath};
use super::ROOT_PATH;
use crate::error::{PathResult, invalid_path_error};

/// Finds the closing quote of a quoted step opened at byte offset `open`
///
/// The closing quote is the first `"` followed by end of input or by one of
/// `terminators`.
pub(crate) fn scan_quoted(input: &str, open: usize, terminators: &[char]) -> Option<usize> {
    let body_start = open + 1;
    input[body_start..]
        .char_indices()
        .filter(|&(_, ch)| ch == '"')
        .map(|(offset, _)| body_start + offset)
        .find(|&close| {
            input[close + 1..]
                .chars()
                .next()
                .is_none_or(|next| terminators.contains(&next))
        })
}

/// Parses a sequence index, rejecting signs and leading zeros
pub(crate) fn parse_index(digits: &str) -> Option<usize> {
    if digits.is_empty()
        || !digits.bytes().all(|b| b.is_ascii_digit())
        || (digits.len() > 1 && digits.starts_with('0'))
    {
        return None;
    }
    digits.parse().ok()
}

impl StructuralPath {
    /// Parses a rendered structural path
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::PathError`] if the path does not start with
    /// `/`, has a malformed `*[index]` step, or has an unquoted key
    /// containing a significant token.
    pub fn parse(path: &str) -> PathResult<Self> {
        if path == ROOT_PATH {
            return Ok(Self::root());
        }
        if !path.starts_with('/') {
            return Err(invalid_path_error(path, "paths must start with '/'", 0));
        }

        let mut segments = Vec::new();
        let mut pos = 0;

        while pos < path.len() {
            // `pos` is at a separator
            pos += 1;
            let rest = &path[pos..];

            if let Some(after) = rest.strip_prefix("*[") {
                let close = after
                    .find(']')
                    .ok_or_else(|| invalid_path_error(path, "unterminated index step", pos))?;
                let index = parse_index(&after[..close])
                    .ok_or_else(|| invalid_path_error(path, "invalid sequence index", pos + 2))?;
                segments.push(PathSegment::Index(index));
                pos += 2 + close + 1;
            } else if rest.starts_with('"')
                && let Some(close) = scan_quoted(path, pos, &['/'])
            {
                segments.push(PathSegment::Key(path[pos + 1..close].to_owned()));
                pos = close + 1;
            } else {
                let end = rest.find('/').unwrap_or(rest.len());
                let key = &rest[..end];
                if needs_quoting(key) {
                    return Err(invalid_path_error(
                        path,
                        format!("unquoted key '{key}' contains a significant token"),
                        pos,
                    ));
                }
                segments.push(PathSegment::Key(key.to_owned()));
                pos += end;
            }

            if pos < path.len() && !path[pos..].starts_with('/') {
                return Err(invalid_path_error(path, "expected '/' after step", pos));
            }
        }

        Ok(Self {
            segments,
            rendered: path.to_owned(),
        })
    }
}

impl std::str::FromStr for StructuralPath {
    type Err = crate::error::PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
