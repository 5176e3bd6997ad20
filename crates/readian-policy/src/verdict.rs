//! Access verdict produced by policy evaluation
//!
//! Denial is a normal outcome, not an error: callers branch on the verdict
//! value. The invariant "a denied verdict always carries a reason" holds by
//! construction: [`AccessVerdict::Denied`] cannot be built without one.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Why access was denied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenialReason {
    /// Adult content requires a signed-in session
    AgeNotLoggedIn,
    /// Adult content requires an age on the viewer's profile
    AgeNotSet,
    /// Adult content requires the viewer to be 18 or over
    AgeUnder18,
    /// Gated content requires a signed-in session
    SubscriptionNotLoggedIn,
    /// The viewer's tier does not cover this book
    SubscriptionRequired,
    /// The viewer's paid subscription has lapsed
    SubscriptionExpired,
}

impl DenialReason {
    /// Stable machine-readable code for this reason
    pub fn as_str(&self) -> &'static str {
        match self {
            DenialReason::AgeNotLoggedIn => "age_not_logged_in",
            DenialReason::AgeNotSet => "age_not_set",
            DenialReason::AgeUnder18 => "age_under_18",
            DenialReason::SubscriptionNotLoggedIn => "subscription_not_logged_in",
            DenialReason::SubscriptionRequired => "subscription_required",
            DenialReason::SubscriptionExpired => "subscription_expired",
        }
    }

    /// True for reasons produced by the age gate
    pub fn is_age_gate(&self) -> bool {
        matches!(
            self,
            DenialReason::AgeNotLoggedIn | DenialReason::AgeNotSet | DenialReason::AgeUnder18
        )
    }

    /// True for reasons produced by the subscription gate
    pub fn is_subscription_gate(&self) -> bool {
        !self.is_age_gate()
    }
}

impl fmt::Display for DenialReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of evaluating the access policy for one viewer/content pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "reason", rename_all = "snake_case")]
pub enum AccessVerdict {
    /// The viewer may read the content
    Allowed,
    /// The viewer may not read the content, for exactly this reason
    Denied(DenialReason),
}

impl AccessVerdict {
    /// True when the verdict permits access
    pub fn is_allowed(&self) -> bool {
        matches!(self, AccessVerdict::Allowed)
    }

    /// True when the verdict blocks access
    pub fn is_denied(&self) -> bool {
        !self.is_allowed()
    }

    /// The denial reason, if any
    pub fn reason(&self) -> Option<DenialReason> {
        match self {
            AccessVerdict::Allowed => None,
            AccessVerdict::Denied(reason) => Some(*reason),
        }
    }
}

impl fmt::Display for AccessVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessVerdict::Allowed => f.write_str("allowed"),
            AccessVerdict::Denied(reason) => write!(f, "denied ({reason})"),
        }
    }
}
