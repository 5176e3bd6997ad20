//! Readian Guards - Presentation Layer for Access Denials
//!
//! Maps policy verdicts to what the user actually sees. Two pieces:
//!
//! - [`prompt_for`]: the fixed, exhaustive `DenialReason` → [`GuardPrompt`]
//!   table (headline, body, call-to-action, severity).
//! - [`ContentGuard`]: the wrapper presentation call sites use to evaluate
//!   the policy, then either render or show the matching prompt.
//!
//! No business logic lives here; changing who may read what happens in
//! `readian-policy` only.

#![forbid(unsafe_code)]

/// Content guard for presentation call sites
pub mod guard;

/// Denial reason to prompt mapping
pub mod prompt;

pub use guard::{ContentGuard, GuardDecision};
pub use prompt::{prompt_for, GuardPrompt, PromptSeverity};
