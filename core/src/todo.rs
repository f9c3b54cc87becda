//! Todo identification and record types.
//!
//! This module defines strong types for the `todos` row (`Todo`), its primary
//! key (`TodoId`) and its title (`Title`), along with the validation error
//! raised when parsing them from form input.

use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Maximum title length accepted by the `todos.title` column.
pub const MAX_TITLE_LEN: usize = 500;

/// Errors raised when user input cannot be turned into domain values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The `id` form field is missing or is not a base-10 integer.
    #[error("invalid id")]
    InvalidId,

    /// The `title` form field is empty.
    #[error("title cannot be empty")]
    EmptyTitle,
}

/// Primary key of a todo row.
///
/// Ids are assigned by the store on insert, strictly increase and are never
/// reused after a delete.
///
/// # Examples
///
/// ```
/// use todo_list_core::TodoId;
///
/// let id = TodoId::parse("42").unwrap();
/// assert_eq!(id.get(), 42);
/// assert!(TodoId::parse("abc").is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TodoId(i64);

impl TodoId {
    /// Create a `TodoId` from a raw key.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Parse an id from a form value.
    ///
    /// Accepts a base-10 signed 64-bit integer with an optional leading sign.
    /// Surrounding whitespace is not trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidId`] if the value is empty, not
    /// numeric, or out of range.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        value
            .parse::<i64>()
            .map(Self)
            .map_err(|_| ValidationError::InvalidId)
    }

    /// Get the raw key.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TodoId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<i64> for TodoId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// A non-empty todo title.
///
/// Only emptiness is checked here. The 500-character limit belongs to the
/// storage column, so an overlong title fails at insert time.
///
/// # Examples
///
/// ```
/// use todo_list_core::{Title, ValidationError};
///
/// let title = Title::new("Write docs").unwrap();
/// assert_eq!(title.as_str(), "Write docs");
/// assert_eq!(Title::new(""), Err(ValidationError::EmptyTitle));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Title(String);

impl Title {
    /// Create a title from user input.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyTitle`] if `title` is empty.
    pub fn new(title: impl Into<String>) -> Result<Self, ValidationError> {
        let title = title.into();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        Ok(Self(title))
    }

    /// Get the title as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Title {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// One row of the `todos` table.
///
/// A `Todo` is a read-only snapshot: the only mutation the system supports is
/// flipping `completed`, which happens in the store and shows up in the next
/// `list()`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Todo {
    id: TodoId,
    title: String,
    completed: bool,
    created_at: DateTime<Utc>,
}

impl Todo {
    /// Build a snapshot from stored column values.
    #[must_use]
    pub const fn new(id: TodoId, title: String, completed: bool, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title,
            completed,
            created_at,
        }
    }

    /// Primary key.
    #[must_use]
    pub const fn id(&self) -> TodoId {
        self.id
    }

    /// Title as entered.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Whether the todo has been checked off.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }

    /// When the row was inserted.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
