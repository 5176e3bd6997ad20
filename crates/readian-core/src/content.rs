//! Content classification attributes for a book or chapter
//!
//! A [`ContentItem`] carries the three fields the access policy cares
//! about; everything else on a book-detail response (title, cover, author)
//! is irrelevant to the policy and stays in the client layer.

use crate::errors::ReadianError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Audience rating for a book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentRating {
    /// Suitable for all readers
    Kids,
    /// Restricted to signed-in readers aged 18 or over
    Adult,
}

impl ContentRating {
    /// Canonical lowercase wire form
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentRating::Kids => "kids",
            ContentRating::Adult => "adult",
        }
    }
}

impl fmt::Display for ContentRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentRating {
    type Err = ReadianError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "kids" => Ok(ContentRating::Kids),
            "adult" => Ok(ContentRating::Adult),
            other => Err(ReadianError::invalid(format!(
                "unknown content rating '{other}'"
            ))),
        }
    }
}

/// Publication status of a book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookStatus {
    /// Chapters are still being released
    Ongoing,
    /// Complete; no further chapters expected
    Finished,
    /// Paused by the author
    Hiatus,
}

impl BookStatus {
    /// Canonical lowercase wire form
    pub fn as_str(&self) -> &'static str {
        match self {
            BookStatus::Ongoing => "ongoing",
            BookStatus::Finished => "finished",
            BookStatus::Hiatus => "hiatus",
        }
    }
}

impl fmt::Display for BookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookStatus {
    type Err = ReadianError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ongoing" => Ok(BookStatus::Ongoing),
            "finished" => Ok(BookStatus::Finished),
            "hiatus" => Ok(BookStatus::Hiatus),
            other => Err(ReadianError::invalid(format!(
                "unknown book status '{other}'"
            ))),
        }
    }
}

/// Classification attributes of the book being accessed
///
/// Immutable for the duration of one access check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    /// Audience rating
    pub rating: ContentRating,
    /// Whether the book sits behind the premium paywall
    pub is_premium: bool,
    /// Publication status
    pub book_status: BookStatus,
}

impl ContentItem {
    /// Build a content item from its three classification fields
    pub fn new(rating: ContentRating, is_premium: bool, book_status: BookStatus) -> Self {
        Self {
            rating,
            is_premium,
            book_status,
        }
    }

    /// A finished, non-premium, all-ages book: the one shape anonymous
    /// visitors may read
    pub fn open_access() -> Self {
        Self::new(ContentRating::Kids, false, BookStatus::Finished)
    }
}
