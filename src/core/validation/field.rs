//! Field paths and the common message formatter.
//!
//! A [`FieldPath`] names the field a value came from (`spec.ports[0].name`).
//! It never affects whether a value is accepted; it only prefixes messages so
//! a caller can attach them to the right field.

use std::fmt;

use super::MessageList;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Name(String),
    Index(usize),
    Key(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath {
    segments: Vec<Segment>,
}

impl FieldPath {
    /// The empty path. Messages produced against it carry no prefix.
    pub fn root() -> Self {
        Self::default()
    }

    /// Start a path at `name`. An empty name yields the root path.
    pub fn new(name: impl Into<String>) -> Self {
        Self::root().child(name)
    }

    pub fn child(&self, name: impl Into<String>) -> Self {
        let name = name.into();
        if name.is_empty() {
            return self.clone();
        }
        self.push(Segment::Name(name))
    }

    pub fn index(&self, index: usize) -> Self {
        self.push(Segment::Index(index))
    }

    pub fn key(&self, key: impl Into<String>) -> Self {
        self.push(Segment::Key(key.into()))
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Prefix every message with this path.
    pub fn attach(&self, messages: MessageList) -> MessageList {
        if self.is_root() {
            return messages;
        }
        messages
            .into_iter()
            .map(|message| format!("{}: {}", self, message))
            .collect()
    }

    fn push(&self, segment: Segment) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment);
        Self { segments }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Name(name) if i == 0 => write!(f, "{}", name)?,
                Segment::Name(name) => write!(f, ".{}", name)?,
                Segment::Index(index) => write!(f, "[{}]", index)?,
                Segment::Key(key) => write!(f, "[{}]", key)?,
            }
        }
        Ok(())
    }
}

/// Format one violation for a string value.
pub fn invalid(path: &FieldPath, value: &str, detail: &str) -> String {
    with_prefix(path, format!("Invalid value: {:?}: {}", value, detail))
}

/// Format one violation for an integer value.
pub fn invalid_int(path: &FieldPath, value: i64, detail: &str) -> String {
    with_prefix(path, format!("Invalid value: {}: {}", value, detail))
}

pub(crate) fn invalid_each(path: &FieldPath, value: &str, details: Vec<String>) -> MessageList {
    details
        .iter()
        .map(|detail| invalid(path, value, detail))
        .collect()
}

fn with_prefix(path: &FieldPath, message: String) -> String {
    if path.is_root() {
        message
    } else {
        format!("{}: {}", path, message)
    }
}
