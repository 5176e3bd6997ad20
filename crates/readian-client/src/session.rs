//! Auth/session collaborator seam
//!
//! The policy stack never reads ambient session state; it receives a
//! [`Viewer`] built by whatever implements [`ViewerSource`]. Production
//! wires this to the auth backend; tests use [`StaticViewerSource`].

use async_trait::async_trait;
use readian_core::{ReadianError, Result, Viewer};

/// Supplies the current viewer's attributes
#[async_trait]
pub trait ViewerSource: Send + Sync {
    /// The viewer behind the current session
    ///
    /// Fails with [`ReadianError::Unauthenticated`] when no session
    /// exists. Callers rendering public pages fall back to
    /// [`Viewer::anonymous`]; callers rendering member pages surface a
    /// sign-in state instead of evaluating policy.
    async fn current_viewer(&self) -> Result<Viewer>;
}

/// A fixed viewer, for tests and local tooling
#[derive(Debug, Clone, Default)]
pub struct StaticViewerSource {
    viewer: Option<Viewer>,
}

impl StaticViewerSource {
    /// A source that always yields `viewer`
    pub fn signed_in(viewer: Viewer) -> Self {
        Self {
            viewer: Some(viewer),
        }
    }

    /// A source with no session at all
    pub fn signed_out() -> Self {
        Self { viewer: None }
    }
}

#[async_trait]
impl ViewerSource for StaticViewerSource {
    async fn current_viewer(&self) -> Result<Viewer> {
        self.viewer
            .clone()
            .ok_or_else(|| ReadianError::unauthenticated("no active session"))
    }
}
