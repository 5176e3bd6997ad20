//! Content guard for presentation call sites
//!
//! [`ContentGuard`] is the one entry point view code uses before rendering
//! protected content: it runs the policy evaluation and, on denial, hands
//! back the prompt to display. Call sites never branch on viewer or
//! content attributes themselves.

use crate::prompt::{prompt_for, GuardPrompt};
use readian_core::{ContentItem, Timestamp, Viewer};
use readian_policy::{evaluate, AccessVerdict};

/// What a presentation caller should do with the protected content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the protected content unmodified
    Render,
    /// Render this prompt instead of the content
    Block(GuardPrompt),
}

impl GuardDecision {
    /// True when the content may be rendered
    pub fn is_render(&self) -> bool {
        matches!(self, GuardDecision::Render)
    }

    /// The prompt to display, if blocked
    pub fn prompt(&self) -> Option<&GuardPrompt> {
        match self {
            GuardDecision::Render => None,
            GuardDecision::Block(prompt) => Some(prompt),
        }
    }
}

/// Guard protecting one book's content behind the access policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentGuard {
    content: ContentItem,
}

impl ContentGuard {
    /// Create a guard for the given content item
    pub fn new(content: ContentItem) -> Self {
        Self { content }
    }

    /// Decide whether `viewer` may see the guarded content as of `now`
    pub fn check(&self, viewer: &Viewer, now: Timestamp) -> GuardDecision {
        match evaluate(viewer, &self.content, now) {
            AccessVerdict::Allowed => GuardDecision::Render,
            AccessVerdict::Denied(reason) => {
                tracing::debug!(reason = reason.as_str(), "blocking content render");
                GuardDecision::Block(prompt_for(reason))
            }
        }
    }

    /// True when `viewer` may read the guarded content
    pub fn allows(&self, viewer: &Viewer, now: Timestamp) -> bool {
        self.check(viewer, now).is_render()
    }

    /// The prompt that would block `viewer`, if any
    pub fn blocking_prompt(&self, viewer: &Viewer, now: Timestamp) -> Option<GuardPrompt> {
        match self.check(viewer, now) {
            GuardDecision::Render => None,
            GuardDecision::Block(prompt) => Some(prompt),
        }
    }

    /// The guarded content's classification
    pub fn content(&self) -> &ContentItem {
        &self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use readian_core::{BookStatus, ContentRating, Plan, SubscriptionStatus};

    const NOW: Timestamp = Timestamp::from_unix(1_750_000_000);

    #[test]
    fn open_access_renders_for_anonymous_viewers() {
        let guard = ContentGuard::new(ContentItem::open_access());
        assert_matches!(guard.check(&Viewer::anonymous(), NOW), GuardDecision::Render);
        assert!(guard.allows(&Viewer::anonymous(), NOW));
        assert!(guard.blocking_prompt(&Viewer::anonymous(), NOW).is_none());
    }

    #[test]
    fn blocked_render_carries_the_matching_prompt() {
        let guard = ContentGuard::new(ContentItem::new(
            ContentRating::Kids,
            true,
            BookStatus::Finished,
        ));
        let viewer = Viewer::member(Plan::Free);
        let decision = guard.check(&viewer, NOW);
        assert_matches!(decision, GuardDecision::Block(prompt) => {
            assert_eq!(prompt.headline, "Subscription Required");
            assert_eq!(prompt.cta_route, "/subscription");
        });
    }

    #[test]
    fn expired_subscription_gets_the_renewal_prompt() {
        let guard = ContentGuard::new(ContentItem::new(
            ContentRating::Kids,
            true,
            BookStatus::Finished,
        ));
        let viewer = Viewer::member(Plan::Basic).with_subscription(
            SubscriptionStatus::Active,
            Some(Timestamp::from_unix(NOW.unix_seconds() - 3600)),
        );
        let prompt = guard.blocking_prompt(&viewer, NOW);
        assert_eq!(
            prompt.map(|p| p.headline),
            Some("Subscription Expired")
        );
    }

    #[test]
    fn adult_content_prompts_for_sign_in_before_any_upsell() {
        let guard = ContentGuard::new(ContentItem::new(
            ContentRating::Adult,
            true,
            BookStatus::Ongoing,
        ));
        let prompt = guard.blocking_prompt(&Viewer::anonymous(), NOW);
        assert_eq!(
            prompt.map(|p| p.headline),
            Some("Age Restricted Content (18+)")
        );
    }
}
