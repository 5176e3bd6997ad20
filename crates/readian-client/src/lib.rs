//! Readian Client - Backend Collaborator Seams
//!
//! The access-control stack treats the REST backend as an opaque
//! collaborator. This crate holds the two seams it is consumed through,
//! [`ViewerSource`] for the auth/session provider and [`ContentCatalog`]
//! for the content repository, plus the wire DTOs that validate the
//! backend's loosely-typed string fields into closed enums before anything
//! reaches the policy evaluator.
//!
//! In-memory implementations back the tests; production implementations
//! wrap the HTTP client and live with the application, not here.

#![forbid(unsafe_code)]

/// Content catalog seam
pub mod catalog;

/// Auth/session seam
pub mod session;

/// Wire DTO validation boundary
pub mod wire;

pub use catalog::{ContentCatalog, InMemoryCatalog};
pub use session::{StaticViewerSource, ViewerSource};
pub use wire::{BookDetailDto, SessionDto};
