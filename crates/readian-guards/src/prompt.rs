//! Denial reason to guard prompt mapping
//!
//! A fixed, exhaustive table: one prompt per [`DenialReason`]. No policy
//! logic lives here; the mapping only decides what the blocked user reads
//! and where the call-to-action sends them.

use readian_policy::DenialReason;
use serde::Serialize;

/// Visual weight of a guard prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptSeverity {
    /// Hard restriction the viewer cannot satisfy by paying
    Restricted,
    /// Something on the viewer's account needs attention
    Warning,
    /// A plan upgrade would grant access
    Upsell,
}

/// Everything the presentation layer needs to render one denial
///
/// Serializable for presentation transports, but only ever constructed
/// from the fixed table below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuardPrompt {
    /// Short title for the modal
    pub headline: &'static str,
    /// One actionable sentence naming the next step
    pub body: &'static str,
    /// Label on the primary call-to-action button
    pub cta_label: &'static str,
    /// Route the call-to-action navigates to
    pub cta_route: &'static str,
    /// Visual weight
    pub severity: PromptSeverity,
}

/// Select the prompt for a denial reason
///
/// Exhaustive over [`DenialReason`]: adding a reason without a prompt is a
/// compile error, so a denial can never fall back to a generic
/// "access denied".
pub fn prompt_for(reason: DenialReason) -> GuardPrompt {
    match reason {
        DenialReason::AgeNotLoggedIn => GuardPrompt {
            headline: "Age Restricted Content (18+)",
            body: "You must be signed in and 18 years or older to access this content.",
            cta_label: "Sign In",
            cta_route: "/signin",
            severity: PromptSeverity::Restricted,
        },
        DenialReason::AgeNotSet => GuardPrompt {
            headline: "Age Verification Required",
            body: "Please add your age to your profile to access adult content.",
            cta_label: "Go to Profile",
            cta_route: "/profile",
            severity: PromptSeverity::Warning,
        },
        DenialReason::AgeUnder18 => GuardPrompt {
            headline: "Access Denied",
            body: "You must be 18 years or older to access this content.",
            cta_label: "Browse Other Books",
            cta_route: "/browse",
            severity: PromptSeverity::Restricted,
        },
        DenialReason::SubscriptionNotLoggedIn => GuardPrompt {
            headline: "Premium Content",
            body: "Sign in to access this premium content with a subscription.",
            cta_label: "Sign In",
            cta_route: "/signin",
            severity: PromptSeverity::Upsell,
        },
        DenialReason::SubscriptionRequired => GuardPrompt {
            headline: "Subscription Required",
            body: "This book requires an active subscription. Upgrade now to start reading!",
            cta_label: "View Plans",
            cta_route: "/subscription",
            severity: PromptSeverity::Upsell,
        },
        DenialReason::SubscriptionExpired => GuardPrompt {
            headline: "Subscription Expired",
            body: "Your subscription has expired. Please renew to continue accessing premium content.",
            cta_label: "Renew Subscription",
            cta_route: "/subscription",
            severity: PromptSeverity::Warning,
        },
    }
}
