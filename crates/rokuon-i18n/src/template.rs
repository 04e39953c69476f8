//! Message templates with Fluent-style `{ $name }` placeholders.
//!
//! # Invariants
//!
//! 1. **Parsed once**: a template is split into segments when it is loaded;
//!    rendering never fails on syntax, only on a missing argument.
//!
//! 2. **Single pass**: substituted values are written verbatim and never
//!    re-scanned, so an argument containing `{ $x }` stays literal.
//!
//! 3. **Source preserved**: [`Template::source`] returns the text exactly as
//!    written, which is what resource serialization emits.
//!
//! # Accepted syntax
//!
//! | Form | Meaning |
//! |------|---------|
//! | `{ $name }` | variable reference, whitespace inside braces optional |
//! | `{ "text" }` | string literal, the only way to write `{` or `}` |
//! | anything else in braces | [`ParseErrorKind::InvalidPlaceholder`] |
//! | a bare `}` | [`ParseErrorKind::UnmatchedBrace`] |

use std::collections::BTreeSet;
use std::fmt;

use crate::args::Args;
use crate::error::{MissingArgument, ParseErrorKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    Var(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

enum Expression {
    Var(String),
    Literal(String),
}

impl Template {
    pub fn parse(source: &str) -> Result<Self, ParseErrorKind> {
        let mut segments = Vec::new();
        let mut text = String::new();
        let mut rest = source;

        while let Some(pos) = rest.find(['{', '}']) {
            let (before, after) = rest.split_at(pos);
            text.push_str(before);
            if after.starts_with('}') {
                return Err(ParseErrorKind::UnmatchedBrace);
            }

            let body_and_rest = &after[1..];
            let end = placeholder_end(body_and_rest)?;
            match parse_expression(&body_and_rest[..end])? {
                Expression::Var(name) => {
                    if !text.is_empty() {
                        segments.push(Segment::Text(std::mem::take(&mut text)));
                    }
                    segments.push(Segment::Var(name));
                }
                Expression::Literal(literal) => text.push_str(&literal),
            }
            rest = &body_and_rest[end + 1..];
        }

        text.push_str(rest);
        if !text.is_empty() {
            segments.push(Segment::Text(text));
        }

        Ok(Self {
            source: source.to_string(),
            segments,
        })
    }

    /// The template text as written in the resource file.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Placeholder names in order of appearance, repeats included.
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Var(name) => Some(name.as_str()),
            Segment::Text(_) => None,
        })
    }

    /// Distinct placeholder names, sorted.
    #[must_use]
    pub fn placeholder_set(&self) -> BTreeSet<&str> {
        self.placeholders().collect()
    }

    #[must_use]
    pub fn has_placeholders(&self) -> bool {
        self.placeholders().next().is_some()
    }

    /// Substitute every placeholder from `args`.
    ///
    /// Fails on the first placeholder without an argument; no partial
    /// output is returned. Unused arguments are ignored.
    pub fn render(&self, args: &Args) -> Result<String, MissingArgument> {
        let mut out = String::with_capacity(self.source.len());
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Var(name) => {
                    let value = args.get(name).ok_or_else(|| MissingArgument {
                        name: name.clone(),
                    })?;
                    out.push_str(&value.to_string());
                }
            }
        }
        Ok(out)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Whether `name` is a valid message key or variable name: an ASCII letter
/// followed by ASCII letters, digits, `_`, or `-`.
pub(crate) fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        }
        _ => false,
    }
}

/// Byte offset of the `}` closing a placeholder body, skipping braces inside
/// string literals.
fn placeholder_end(body: &str) -> Result<usize, ParseErrorKind> {
    let mut in_string = false;
    let mut escaped = false;
    for (idx, ch) in body.char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            '}' => return Ok(idx),
            '{' => return Err(ParseErrorKind::UnterminatedPlaceholder),
            _ => {}
        }
    }
    Err(ParseErrorKind::UnterminatedPlaceholder)
}

fn parse_expression(body: &str) -> Result<Expression, ParseErrorKind> {
    let trimmed = body.trim();
    let invalid = || ParseErrorKind::InvalidPlaceholder(body.to_string());

    if let Some(name) = trimmed.strip_prefix('$') {
        return if is_identifier(name) {
            Ok(Expression::Var(name.to_string()))
        } else {
            Err(invalid())
        };
    }

    let quoted = trimmed
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'));
    match quoted {
        Some(inner) => unescape(inner).map(Expression::Literal).ok_or_else(invalid),
        None => Err(invalid()),
    }
}

/// Decode a Fluent string literal body: `\\`, `\"`, `\uXXXX`, `\UXXXXXX`.
fn unescape(inner: &str) -> Option<String> {
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(ch) = chars.next() {
        match ch {
            '"' => return None,
            '\\' => match chars.next()? {
                '\\' => out.push('\\'),
                '"' => out.push('"'),
                marker @ ('u' | 'U') => {
                    let width = if marker == 'u' { 4 } else { 6 };
                    let hex: String = chars.by_ref().take(width).collect();
                    if hex.len() != width {
                        return None;
                    }
                    let code = u32::from_str_radix(&hex, 16).ok()?;
                    out.push(char::from_u32(code)?);
                }
                _ => return None,
            },
            other => out.push(other),
        }
    }
    Some(out)
}
