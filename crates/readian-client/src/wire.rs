//! Wire DTOs for backend responses
//!
//! The REST backend sends classification and session fields as loose
//! strings. These DTOs are the validation boundary: `TryFrom` converts
//! them into the closed enum types of `readian-core`, and any value
//! outside the defined sets is a hard error. Nothing past this boundary
//! ever sees an unvalidated string, so the policy evaluator can assume
//! well-formed input.

use readian_core::{
    BookStatus, ContentItem, ContentRating, Plan, ReadianError, SubscriptionStatus, Timestamp,
    Viewer,
};
use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// Classification slice of a book-detail response
///
/// Field names match the backend's camelCase JSON. The full response
/// carries title, cover, author and more; only these three fields reach
/// the policy layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDetailDto {
    /// `"kids"` or `"adult"`
    pub content_type: String,
    /// Whether the book sits behind the premium paywall
    pub is_premium: bool,
    /// `"ongoing"`, `"finished"`, or `"hiatus"`
    pub book_status: String,
}

impl TryFrom<BookDetailDto> for ContentItem {
    type Error = ReadianError;

    fn try_from(dto: BookDetailDto) -> Result<Self, Self::Error> {
        let rating: ContentRating = dto.content_type.parse().map_err(log_rejection)?;
        let book_status: BookStatus = dto.book_status.parse().map_err(log_rejection)?;
        Ok(ContentItem::new(rating, dto.is_premium, book_status))
    }
}

/// Session slice of the auth provider's response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionDto {
    /// Whether a signed-in session backs this response
    pub authenticated: bool,
    /// Age in years, when the user has provided one
    #[serde(default)]
    pub age: Option<u8>,
    /// Plan name; an authenticated user with no explicit plan is `free`
    #[serde(default)]
    pub plan: Option<String>,
    /// Subscription standing, when the backend reported one
    #[serde(default)]
    pub subscription_status: Option<String>,
    /// RFC 3339 expiry timestamp, when the backend reported one
    #[serde(default)]
    pub subscription_expires_at: Option<String>,
}

impl TryFrom<SessionDto> for Viewer {
    type Error = ReadianError;

    fn try_from(dto: SessionDto) -> Result<Self, Self::Error> {
        // Absent plan means free; that is the only defaulting performed
        // here. Present-but-unknown values are still rejected.
        let plan = match dto.plan {
            Some(raw) => raw.parse::<Plan>().map_err(log_rejection)?,
            None => Plan::Free,
        };

        let subscription_status = dto
            .subscription_status
            .map(|raw| raw.parse::<SubscriptionStatus>().map_err(log_rejection))
            .transpose()?;

        let subscription_expires_at = dto
            .subscription_expires_at
            .map(|raw| parse_expiry(&raw))
            .transpose()?;

        Ok(Viewer {
            is_authenticated: dto.authenticated,
            age: dto.age,
            plan,
            subscription_status,
            subscription_expires_at,
        })
    }
}

fn parse_expiry(raw: &str) -> Result<Timestamp, ReadianError> {
    let parsed = OffsetDateTime::parse(raw, &Rfc3339).map_err(|err| {
        log_rejection(ReadianError::invalid(format!(
            "bad expiry timestamp '{raw}': {err}"
        )))
    })?;
    Ok(Timestamp::from_unix(parsed.unix_timestamp()))
}

fn log_rejection(err: ReadianError) -> ReadianError {
    tracing::warn!(%err, "rejecting malformed backend field");
    err
}
