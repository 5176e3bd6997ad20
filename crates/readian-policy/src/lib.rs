//! Readian Policy - Content Access Control
//!
//! The single place where "may this viewer read this book" is decided.
//! One pure function, [`evaluate`], takes a [`Viewer`], a [`ContentItem`],
//! and the current time, and returns exactly one [`AccessVerdict`].
//!
//! Scattering these checks across view components lets them drift, so
//! every call site delegates here; presentation layers consume the
//! verdict and map it to a prompt (see `readian-guards`) without
//! re-deriving any policy.
//!
//! [`Viewer`]: readian_core::Viewer
//! [`ContentItem`]: readian_core::ContentItem

#![forbid(unsafe_code)]

/// Ordered age and subscription gates
pub mod evaluation;

/// Verdict and denial reason types
pub mod verdict;

pub use evaluation::{evaluate, ADULT_AGE};
pub use verdict::{AccessVerdict, DenialReason};
