//! Snippet record and lookup outcomes.

/// A named piece of text.
///
/// `name` maps to the `keyword` column and `text` to `message`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    pub name: String,
    pub text: String,
}

impl Snippet {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// Result of looking a snippet up by name.
///
/// Absence is a value, not an error, and cannot collide with any stored text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Found(String),
    NotFound,
}

impl FetchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Returns the stored text, or `None` when the name is unknown.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Found(text) => Some(text.as_str()),
            Self::NotFound => None,
        }
    }
}

impl From<Option<String>> for FetchOutcome {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::NotFound, Self::Found)
    }
}

/// Which branch an upsert took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// No row existed for the name; a new one was inserted.
    Inserted,
    /// The insert hit the unique key and the existing row was updated.
    Updated,
}

impl UpsertOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Inserted => "inserted",
            Self::Updated => "updated",
        }
    }
}
