//! Parsing and serialization of per-locale resource files.
//!
//! A resource file holds one `key = value` message per line. Lines starting
//! with `#` are comments, blank lines are kept, and indented lines continue
//! the previous message's value (joined with `\n`, common indentation
//! removed). Serialization writes entries back in source order, so parsing a
//! serialized resource yields the same entries.

use std::collections::HashSet;
use std::fmt;

use crate::error::{ParseError, ParseErrorKind};
use crate::template::{Template, is_identifier};

const CONTINUATION_INDENT: &str = "    ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    key: String,
    value: Template,
}

impl Message {
    /// Build a message, validating the key and normalizing the value the
    /// same way the parser does.
    pub fn new(key: impl Into<String>, value: &str) -> Result<Self, ParseErrorKind> {
        let key = key.into();
        if key.is_empty() {
            return Err(ParseErrorKind::EmptyKey);
        }
        if !is_identifier(&key) {
            return Err(ParseErrorKind::InvalidKey(key));
        }
        let lines: Vec<&str> = value.lines().collect();
        let normalized = normalize_value(&lines);
        if normalized.is_empty() {
            return Err(ParseErrorKind::EmptyValue(key));
        }
        let value = Template::parse(&normalized)?;
        Ok(Self { key, value })
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn value(&self) -> &Template {
        &self.value
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Message(Message),
    /// A comment line, stored without trailing whitespace.
    Comment(String),
    Blank,
}

/// One parsed resource file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resource {
    entries: Vec<Entry>,
}

struct PendingMessage<'a> {
    key: String,
    line: usize,
    lines: Vec<&'a str>,
}

impl Resource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse resource text. Errors carry the line of the offending message.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let mut entries = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();
        let mut pending: Option<PendingMessage<'_>> = None;

        for (idx, raw) in text.lines().enumerate() {
            let line = idx + 1;
            let trimmed = raw.trim();
            let indented = raw.starts_with([' ', '\t']);

            if indented && !trimmed.is_empty() {
                match pending.as_mut() {
                    Some(message) => message.lines.push(raw),
                    None => {
                        return Err(ParseError {
                            line,
                            kind: ParseErrorKind::OrphanContinuation,
                        });
                    }
                }
                continue;
            }

            if let Some(message) = pending.take() {
                entries.push(Entry::Message(finish_message(message)?));
            }

            if trimmed.is_empty() {
                entries.push(Entry::Blank);
            } else if trimmed.starts_with('#') {
                entries.push(Entry::Comment(raw.trim_end().to_string()));
            } else {
                let (key, value) = raw.split_once('=').ok_or(ParseError {
                    line,
                    kind: ParseErrorKind::MissingEquals,
                })?;
                let key = key.trim();
                let kind = if key.is_empty() {
                    Some(ParseErrorKind::EmptyKey)
                } else if !is_identifier(key) {
                    Some(ParseErrorKind::InvalidKey(key.to_string()))
                } else if !seen.insert(key.to_string()) {
                    Some(ParseErrorKind::DuplicateKey(key.to_string()))
                } else {
                    None
                };
                if let Some(kind) = kind {
                    return Err(ParseError { line, kind });
                }
                pending = Some(PendingMessage {
                    key: key.to_string(),
                    line,
                    lines: vec![value],
                });
            }
        }

        if let Some(message) = pending.take() {
            entries.push(Entry::Message(finish_message(message)?));
        }

        Ok(Self { entries })
    }

    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn messages(&self) -> impl Iterator<Item = &Message> {
        self.entries.iter().filter_map(|entry| match entry {
            Entry::Message(message) => Some(message),
            _ => None,
        })
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Message> {
        self.messages().find(|message| message.key == key)
    }

    /// Append a message, rejecting a key that is already present.
    pub fn push_message(&mut self, message: Message) -> Result<(), ParseErrorKind> {
        if self.get(&message.key).is_some() {
            return Err(ParseErrorKind::DuplicateKey(message.key));
        }
        self.entries.push(Entry::Message(message));
        Ok(())
    }

    pub fn push_comment(&mut self, comment: &str) {
        let text = if comment.starts_with('#') {
            comment.trim_end().to_string()
        } else {
            format!("# {}", comment.trim_end())
        };
        self.entries.push(Entry::Comment(text));
    }

    pub fn push_blank(&mut self) {
        self.entries.push(Entry::Blank);
    }

    /// Number of messages (comments and blank lines excluded).
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages().next().is_none()
    }

    /// Canonical text form: `key = value` per message, multiline values
    /// as an indented block under `key =`.
    #[must_use]
    pub fn serialize(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            match entry {
                Entry::Blank => writeln!(f)?,
                Entry::Comment(text) => writeln!(f, "{text}")?,
                Entry::Message(message) => {
                    let source = message.value.source();
                    if source.contains('\n') {
                        writeln!(f, "{} =", message.key)?;
                        for line in source.lines() {
                            writeln!(f, "{CONTINUATION_INDENT}{line}")?;
                        }
                    } else {
                        writeln!(f, "{} = {}", message.key, source)?;
                    }
                }
            }
        }
        Ok(())
    }
}

/// Whether `text` is already in canonical serialized form.
pub fn is_canonical(text: &str) -> Result<bool, ParseError> {
    Ok(Resource::parse(text)?.serialize() == text)
}

fn finish_message(message: PendingMessage<'_>) -> Result<Message, ParseError> {
    let value = normalize_value(&message.lines);
    let line = message.line;
    if value.is_empty() {
        return Err(ParseError {
            line,
            kind: ParseErrorKind::EmptyValue(message.key),
        });
    }
    let value = Template::parse(&value).map_err(|kind| ParseError { line, kind })?;
    Ok(Message {
        key: message.key,
        value,
    })
}

/// Join a value's first line with its continuation lines: the first line is
/// trimmed, continuation lines lose their common indentation and trailing
/// whitespace, and whitespace-only lines are dropped.
fn normalize_value(lines: &[&str]) -> String {
    let Some((first, rest)) = lines.split_first() else {
        return String::new();
    };
    let rest: Vec<&str> = rest
        .iter()
        .map(|line| line.trim_end())
        .filter(|line| !line.is_empty())
        .collect();
    let indent = rest
        .iter()
        .map(|line| indent_width(line))
        .min()
        .unwrap_or(0);

    let mut parts: Vec<&str> = Vec::with_capacity(rest.len() + 1);
    let first = first.trim();
    if !first.is_empty() {
        parts.push(first);
    }
    parts.extend(rest.iter().map(|line| &line[indent..]));
    parts.join("\n")
}

fn indent_width(line: &str) -> usize {
    line.bytes().take_while(|b| matches!(b, b' ' | b'\t')).count()
}
