//! Normalized path string parsing
//!
//! Parses the bracket notation produced by `Display for Path` back into a
//! [`Path`], so paths reported by one traversal can be stored and compared
//! later.

use std::iter::Peekable;
use std::str::Chars;

use super::types::{Path, PathSegment};
use crate::error::{SelectorError, SelectorResult};

fn path_error(path: &str, reason: impl Into<String>, position: usize) -> SelectorError {
    SelectorError::invalid_path(format!(
        "'{path}': {} at position {position}",
        reason.into()
    ))
}

impl Path {
    /// Parse a normalized path string such as `$['a'][0]`
    ///
    /// # Errors
    /// Returns an `InvalidPath` error when the string does not start with `$`,
    /// uses anything other than bracket notation, has an unterminated field
    /// name, an invalid escape, or an index with leading zeros.
    pub fn parse(path: &str) -> SelectorResult<Path> {
        let Some(remaining) = path.strip_prefix('$') else {
            return Err(path_error(path, "paths must start with $", 0));
        };

        let mut segments = Vec::new();
        let mut chars = remaining.chars().peekable();
        let mut position = 1;

        while chars.peek().is_some() {
            if chars.next() != Some('[') {
                return Err(path_error(path, "paths must use bracket notation", position));
            }
            position += 1;

            segments.push(parse_bracket_content(&mut chars, &mut position, path)?);

            if chars.next() != Some(']') {
                return Err(path_error(path, "expected closing bracket", position));
            }
            position += 1;
        }

        Ok(segments.into_iter().collect())
    }
}

fn parse_bracket_content(
    chars: &mut Peekable<Chars<'_>>,
    position: &mut usize,
    full_path: &str,
) -> SelectorResult<PathSegment> {
    let start_pos = *position;

    match chars.peek() {
        Some('\'') => {
            chars.next();
            *position += 1;

            let mut name = String::new();
            while let Some(ch) = chars.next() {
                *position += 1;
                match ch {
                    '\'' => return Ok(PathSegment::Field(name)),
                    '\\' => match chars.next() {
                        Some(escaped @ ('\'' | '\\')) => {
                            name.push(escaped);
                            *position += 1;
                        }
                        Some(escaped) => {
                            return Err(path_error(
                                full_path,
                                format!("invalid escape sequence \\{escaped}"),
                                *position,
                            ));
                        }
                        None => {
                            return Err(path_error(
                                full_path,
                                "unterminated escape sequence",
                                *position,
                            ));
                        }
                    },
                    _ => name.push(ch),
                }
            }

            Err(path_error(full_path, "unterminated field name", start_pos))
        }

        Some(ch) if ch.is_ascii_digit() => {
            let mut digits = String::new();
            while let Some(&ch) = chars.peek() {
                if !ch.is_ascii_digit() {
                    break;
                }
                digits.push(ch);
                chars.next();
                *position += 1;
            }

            if digits.len() > 1 && digits.starts_with('0') {
                return Err(path_error(
                    full_path,
                    "list indices cannot have leading zeros",
                    start_pos,
                ));
            }

            digits
                .parse::<usize>()
                .map(PathSegment::Index)
                .map_err(|_| path_error(full_path, "invalid list index", start_pos))
        }

        _ => Err(path_error(
            full_path,
            "expected quoted field name or list index",
            start_pos,
        )),
    }
}
