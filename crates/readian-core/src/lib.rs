//! Readian Core - Foundation Types
//!
//! This crate provides the shared vocabulary of the Readian access-control
//! stack: who is reading ([`Viewer`]), what they are reading
//! ([`ContentItem`]), when ([`Timestamp`]), and the unified error type.
//! It contains no policy decisions; those live in `readian-policy`.
//!
//! All enums here are closed sum types. Backend wire values are strings,
//! so each enum carries a `FromStr` impl that rejects anything outside the
//! defined set rather than coercing to a default, since silently guessing
//! a plan or rating could silently grant or deny access.

#![forbid(unsafe_code)]

/// Unified error handling
pub mod errors;

/// Book and user identifiers
pub mod identifiers;

/// Timestamps for expiry checks
pub mod time;

/// Viewer attributes: authentication, age, plan, subscription
pub mod viewer;

/// Content classification attributes
pub mod content;

pub use content::{BookStatus, ContentItem, ContentRating};
pub use errors::{ReadianError, Result};
pub use identifiers::{BookId, UserId};
pub use time::Timestamp;
pub use viewer::{Plan, SubscriptionStatus, Viewer};
