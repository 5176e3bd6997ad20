//! Policy evaluation logic
//!
//! Two ordered gates decide access: the age gate (adult-rated content)
//! and the subscription gate (premium or ongoing books). The first gate
//! to object wins, which fixes the single explanatory message the user
//! sees; the age gate runs first because it is the more fundamental one.
//!
//! Evaluation is a pure function of `(viewer, content, now)`: no ambient
//! session lookups, no I/O, no shared state. Call sites must never
//! re-derive these checks themselves.

use crate::verdict::{AccessVerdict, DenialReason};
use readian_core::{BookStatus, ContentItem, ContentRating, Plan, Timestamp, Viewer};

/// Minimum age for adult-rated content
pub const ADULT_AGE: u8 = 18;

/// Evaluate the access policy for one viewer/content pair
///
/// Returns exactly one verdict. Denial is a normal outcome; this function
/// never fails and never panics for well-formed inputs (which the type
/// system guarantees, since loose wire strings are rejected at the client
/// boundary before a `Viewer` or `ContentItem` exists).
pub fn evaluate(viewer: &Viewer, content: &ContentItem, now: Timestamp) -> AccessVerdict {
    if let Some(reason) = age_gate(viewer, content) {
        tracing::debug!(reason = reason.as_str(), "age gate denied access");
        return AccessVerdict::Denied(reason);
    }

    if let Some(reason) = subscription_gate(viewer, content, now) {
        tracing::debug!(reason = reason.as_str(), "subscription gate denied access");
        return AccessVerdict::Denied(reason);
    }

    AccessVerdict::Allowed
}

/// Age gate: applies only to adult-rated content
///
/// Requires a signed-in session, a profile age, and that age to be at
/// least [`ADULT_AGE`], checked in that order.
fn age_gate(viewer: &Viewer, content: &ContentItem) -> Option<DenialReason> {
    if content.rating != ContentRating::Adult {
        return None;
    }

    if !viewer.is_authenticated {
        return Some(DenialReason::AgeNotLoggedIn);
    }

    match viewer.age {
        None => Some(DenialReason::AgeNotSet),
        Some(age) if age < ADULT_AGE => Some(DenialReason::AgeUnder18),
        Some(_) => None,
    }
}

/// Subscription gate: applies to premium books and to ongoing books
///
/// Order inside the gate: sign-in, then expiry (paid plans only), then
/// the tier policy. Tier restrictions are unconditional; an active basic
/// subscription still does not unlock ongoing books.
fn subscription_gate(
    viewer: &Viewer,
    content: &ContentItem,
    now: Timestamp,
) -> Option<DenialReason> {
    let gated = content.is_premium || content.book_status == BookStatus::Ongoing;
    if !gated {
        return None;
    }

    if !viewer.is_authenticated {
        return Some(DenialReason::SubscriptionNotLoggedIn);
    }

    // Renewal comes before any upsell. Free plans have no expiry concept.
    if viewer.subscription_expired(now) {
        return Some(DenialReason::SubscriptionExpired);
    }

    match viewer.plan {
        // Free reads only finished, non-premium books; any book that
        // triggered this gate is out of reach.
        Plan::Free => Some(DenialReason::SubscriptionRequired),
        // Basic covers finished books, premium included, but never
        // ongoing ones.
        Plan::Basic => {
            if content.book_status == BookStatus::Ongoing {
                Some(DenialReason::SubscriptionRequired)
            } else {
                None
            }
        }
        Plan::Premium => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use readian_core::SubscriptionStatus;

    const NOW: Timestamp = Timestamp::from_unix(1_750_000_000);

    const fn ts(seconds: i64) -> Timestamp {
        Timestamp::from_unix(seconds)
    }

    fn adult_book() -> ContentItem {
        ContentItem::new(ContentRating::Adult, false, BookStatus::Finished)
    }

    fn premium_book() -> ContentItem {
        ContentItem::new(ContentRating::Kids, true, BookStatus::Finished)
    }

    fn ongoing_book() -> ContentItem {
        ContentItem::new(ContentRating::Kids, false, BookStatus::Ongoing)
    }

    #[test]
    fn adult_content_requires_sign_in() {
        let verdict = evaluate(&Viewer::anonymous(), &adult_book(), NOW);
        assert_eq!(verdict, AccessVerdict::Denied(DenialReason::AgeNotLoggedIn));
    }

    #[test]
    fn adult_content_requires_profile_age() {
        let viewer = Viewer::member(Plan::Premium)
            .with_subscription(SubscriptionStatus::Active, None);
        let verdict = evaluate(&viewer, &adult_book(), NOW);
        assert_eq!(verdict, AccessVerdict::Denied(DenialReason::AgeNotSet));
    }

    #[test]
    fn adult_content_requires_18() {
        let viewer = Viewer::member(Plan::Free).with_age(16);
        let verdict = evaluate(&viewer, &adult_book(), NOW);
        assert_eq!(verdict, AccessVerdict::Denied(DenialReason::AgeUnder18));
    }

    #[test]
    fn adult_finished_free_book_opens_at_18() {
        let viewer = Viewer::member(Plan::Free).with_age(18);
        assert!(evaluate(&viewer, &adult_book(), NOW).is_allowed());
    }

    #[test]
    fn premium_book_denied_for_free_tier() {
        let viewer = Viewer::member(Plan::Free)
            .with_subscription(SubscriptionStatus::Inactive, None);
        let verdict = evaluate(&viewer, &premium_book(), NOW);
        assert_eq!(
            verdict,
            AccessVerdict::Denied(DenialReason::SubscriptionRequired)
        );
    }

    #[test]
    fn anonymous_reader_gets_finished_free_books() {
        let verdict = evaluate(&Viewer::anonymous(), &ContentItem::open_access(), NOW);
        assert_eq!(verdict, AccessVerdict::Allowed);
    }

    #[test]
    fn anonymous_reader_blocked_from_gated_books() {
        let verdict = evaluate(&Viewer::anonymous(), &premium_book(), NOW);
        assert_eq!(
            verdict,
            AccessVerdict::Denied(DenialReason::SubscriptionNotLoggedIn)
        );
        let verdict = evaluate(&Viewer::anonymous(), &ongoing_book(), NOW);
        assert_eq!(
            verdict,
            AccessVerdict::Denied(DenialReason::SubscriptionNotLoggedIn)
        );
    }

    #[test]
    fn basic_tier_excludes_ongoing_even_when_active() {
        let viewer = Viewer::member(Plan::Basic)
            .with_subscription(SubscriptionStatus::Active, None);
        let verdict = evaluate(&viewer, &ongoing_book(), NOW);
        assert_eq!(
            verdict,
            AccessVerdict::Denied(DenialReason::SubscriptionRequired)
        );
    }

    #[test]
    fn basic_tier_reads_finished_premium_books() {
        let viewer = Viewer::member(Plan::Basic)
            .with_subscription(SubscriptionStatus::Active, None);
        assert!(evaluate(&viewer, &premium_book(), NOW).is_allowed());
    }

    #[test]
    fn lapsed_subscription_asks_for_renewal_first() {
        let viewer = Viewer::member(Plan::Premium)
            .with_subscription(SubscriptionStatus::Active, Some(ts(NOW.unix_seconds() - 1)));
        let verdict = evaluate(&viewer, &premium_book(), NOW);
        assert_eq!(
            verdict,
            AccessVerdict::Denied(DenialReason::SubscriptionExpired)
        );
    }

    #[test]
    fn free_plan_has_no_expiry() {
        // A stale expiry date on a free account must surface the upsell,
        // not a renewal prompt.
        let viewer = Viewer::member(Plan::Free)
            .with_subscription(SubscriptionStatus::Expired, Some(ts(0)));
        let verdict = evaluate(&viewer, &premium_book(), NOW);
        assert_eq!(
            verdict,
            AccessVerdict::Denied(DenialReason::SubscriptionRequired)
        );
    }

    #[test]
    fn premium_tier_reads_everything_non_adult() {
        let viewer = Viewer::member(Plan::Premium)
            .with_subscription(SubscriptionStatus::Active, Some(ts(NOW.unix_seconds() + 1)));
        assert!(evaluate(&viewer, &premium_book(), NOW).is_allowed());
        assert!(evaluate(&viewer, &ongoing_book(), NOW).is_allowed());
        let premium_ongoing = ContentItem::new(ContentRating::Kids, true, BookStatus::Ongoing);
        assert!(evaluate(&viewer, &premium_ongoing, NOW).is_allowed());
    }

    #[test]
    fn age_gate_takes_precedence_over_subscription_gate() {
        // Adult + premium + ongoing for an anonymous viewer fails both
        // gates; the age reason must win.
        let book = ContentItem::new(ContentRating::Adult, true, BookStatus::Ongoing);
        let verdict = evaluate(&Viewer::anonymous(), &book, NOW);
        assert_eq!(verdict, AccessVerdict::Denied(DenialReason::AgeNotLoggedIn));
    }

    #[test]
    fn hiatus_behaves_like_finished_for_the_gate_trigger() {
        let hiatus_free = ContentItem::new(ContentRating::Kids, false, BookStatus::Hiatus);
        assert!(evaluate(&Viewer::anonymous(), &hiatus_free, NOW).is_allowed());

        // Premium hiatus still triggers the gate via the premium flag.
        let hiatus_premium = ContentItem::new(ContentRating::Kids, true, BookStatus::Hiatus);
        let viewer = Viewer::member(Plan::Basic)
            .with_subscription(SubscriptionStatus::Active, None);
        assert!(evaluate(&viewer, &hiatus_premium, NOW).is_allowed());
        let verdict = evaluate(&Viewer::member(Plan::Free), &hiatus_premium, NOW);
        assert_eq!(
            verdict,
            AccessVerdict::Denied(DenialReason::SubscriptionRequired)
        );
    }

    #[test]
    fn evaluation_is_idempotent() {
        let viewer = Viewer::member(Plan::Basic)
            .with_age(21)
            .with_subscription(SubscriptionStatus::Active, Some(ts(NOW.unix_seconds() + 60)));
        let book = ContentItem::new(ContentRating::Adult, true, BookStatus::Finished);
        assert_eq!(evaluate(&viewer, &book, NOW), evaluate(&viewer, &book, NOW));
    }
}
