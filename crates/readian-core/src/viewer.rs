//! Viewer attributes supplied by the auth/session collaborator
//!
//! A [`Viewer`] is an ephemeral snapshot of whoever is attempting to read
//! content: authentication state, age, plan, and subscription standing. It
//! is assembled per request by the session layer and discarded once a
//! verdict has been produced; the policy crate never mutates it.

use crate::errors::ReadianError;
use crate::time::Timestamp;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Subscription plan tier
///
/// Three tiers, matching the backend's plan field. An authenticated user
/// with no explicit plan is on `Free`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    /// No paid subscription; finished non-premium content only
    #[default]
    Free,
    /// Paid tier covering finished books, premium included
    Basic,
    /// Paid tier with no content restrictions
    Premium,
}

impl Plan {
    /// Canonical lowercase wire form
    pub fn as_str(&self) -> &'static str {
        match self {
            Plan::Free => "free",
            Plan::Basic => "basic",
            Plan::Premium => "premium",
        }
    }

    /// True for any tier that carries a paid subscription
    pub fn is_paid(&self) -> bool {
        !matches!(self, Plan::Free)
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Plan {
    type Err = ReadianError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // The backend is not consistent about casing; normalize like the
        // frontend did before an unknown value becomes a hard error.
        match s.to_ascii_lowercase().as_str() {
            "free" => Ok(Plan::Free),
            "basic" => Ok(Plan::Basic),
            "premium" => Ok(Plan::Premium),
            other => Err(ReadianError::invalid(format!("unknown plan '{other}'"))),
        }
    }
}

/// Subscription standing as reported by the billing backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    /// Paid up and current
    Active,
    /// Lapsed or never started
    Inactive,
    /// Cancelled by the user; access runs out at the expiry date
    Cancelled,
    /// Marked expired by the backend
    Expired,
}

impl SubscriptionStatus {
    /// Canonical lowercase wire form
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionStatus::Active => "active",
            SubscriptionStatus::Inactive => "inactive",
            SubscriptionStatus::Cancelled => "cancelled",
            SubscriptionStatus::Expired => "expired",
        }
    }
}

impl fmt::Display for SubscriptionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubscriptionStatus {
    type Err = ReadianError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "active" => Ok(SubscriptionStatus::Active),
            "inactive" => Ok(SubscriptionStatus::Inactive),
            "cancelled" => Ok(SubscriptionStatus::Cancelled),
            "expired" => Ok(SubscriptionStatus::Expired),
            other => Err(ReadianError::invalid(format!(
                "unknown subscription status '{other}'"
            ))),
        }
    }
}

/// Snapshot of the person attempting to access content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewer {
    /// Whether a signed-in session backs this viewer
    pub is_authenticated: bool,
    /// Age in years; `None` when the user never provided one
    pub age: Option<u8>,
    /// Subscription plan tier
    pub plan: Plan,
    /// Subscription standing; `None` when the backend reported none
    pub subscription_status: Option<SubscriptionStatus>,
    /// When the subscription runs out; `None` for free viewers
    pub subscription_expires_at: Option<Timestamp>,
}

impl Viewer {
    /// A signed-out visitor: no age, free plan, no subscription fields
    pub fn anonymous() -> Self {
        Self {
            is_authenticated: false,
            age: None,
            plan: Plan::Free,
            subscription_status: None,
            subscription_expires_at: None,
        }
    }

    /// A signed-in member on the given plan, with no age or subscription
    /// details yet
    pub fn member(plan: Plan) -> Self {
        Self {
            is_authenticated: true,
            age: None,
            plan,
            subscription_status: None,
            subscription_expires_at: None,
        }
    }

    /// Set the viewer's age
    pub fn with_age(mut self, age: u8) -> Self {
        self.age = Some(age);
        self
    }

    /// Set the subscription standing and expiry
    pub fn with_subscription(
        mut self,
        status: SubscriptionStatus,
        expires_at: Option<Timestamp>,
    ) -> Self {
        self.subscription_status = Some(status);
        self.subscription_expires_at = expires_at;
        self
    }

    /// True when the viewer holds a currently-active paid subscription
    pub fn has_active_subscription(&self) -> bool {
        self.plan.is_paid() && self.subscription_status == Some(SubscriptionStatus::Active)
    }

    /// True when the subscription expiry has passed as of `now`
    ///
    /// Free plans have no expiry concept and always return `false`.
    pub fn subscription_expired(&self, now: Timestamp) -> bool {
        if !self.plan.is_paid() {
            return false;
        }
        match self.subscription_expires_at {
            Some(expires_at) => expires_at.is_before(now),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_parses_case_insensitively() {
        assert_eq!("Premium".parse::<Plan>().ok(), Some(Plan::Premium));
        assert_eq!("FREE".parse::<Plan>().ok(), Some(Plan::Free));
    }

    #[test]
    fn plan_rejects_unknown_values() {
        let err = "gold".parse::<Plan>().unwrap_err();
        assert!(err.to_string().contains("unknown plan"));
    }

    #[test]
    fn anonymous_viewer_has_no_subscription() {
        let viewer = Viewer::anonymous();
        assert!(!viewer.is_authenticated);
        assert!(!viewer.has_active_subscription());
        assert!(!viewer.subscription_expired(Timestamp::from_unix(i64::MAX)));
    }

    #[test]
    fn active_paid_subscription_is_detected() {
        let viewer = Viewer::member(Plan::Basic).with_subscription(SubscriptionStatus::Active, None);
        assert!(viewer.has_active_subscription());
    }

    #[test]
    fn free_plan_never_expires() {
        let viewer = Viewer::member(Plan::Free).with_subscription(
            SubscriptionStatus::Expired,
            Some(Timestamp::from_unix(0)),
        );
        assert!(!viewer.subscription_expired(Timestamp::from_unix(100)));
    }

    #[test]
    fn paid_plan_expiry_compares_against_now() {
        let viewer = Viewer::member(Plan::Premium).with_subscription(
            SubscriptionStatus::Active,
            Some(Timestamp::from_unix(1_000)),
        );
        assert!(viewer.subscription_expired(Timestamp::from_unix(2_000)));
        assert!(!viewer.subscription_expired(Timestamp::from_unix(500)));
    }

    #[test]
    fn serde_uses_lowercase_wire_names() {
        let json = serde_json::to_string(&Plan::Premium).unwrap();
        assert_eq!(json, "\"premium\"");
        let status: SubscriptionStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(status, SubscriptionStatus::Cancelled);
    }
}
