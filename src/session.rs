//! Session
//!
//! Access token refresh scheduling. Tokens are decoded, never verified: the
//! storefront only needs the expiry to decide when to ask for a new one.

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use jiff::{SignedDuration, Timestamp};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Refresh this long before the access token expires.
pub const REFRESH_BUFFER: SignedDuration = SignedDuration::from_secs(5);

/// How often to look for a token while signed out.
pub const POLL_INTERVAL: SignedDuration = SignedDuration::from_secs(10);

/// Errors decoding an access token.
#[derive(Debug, Error)]
pub enum TokenError {
    /// The token is not three dot-separated segments.
    #[error("token is not a JWT")]
    Malformed,

    /// The payload segment is not base64url.
    #[error("token payload is not base64url: {0}")]
    Base64(#[from] base64::DecodeError),

    /// The payload is not a JSON claims object.
    #[error("token claims are not valid JSON: {0}")]
    Claims(#[from] serde_json::Error),

    /// The `exp` claim is outside the representable range.
    #[error("token expiry {0} is out of range: {1}")]
    InvalidExpiry(i64, #[source] jiff::Error),
}

#[derive(Debug, Deserialize)]
struct Claims {
    #[serde(default)]
    sub: Option<String>,

    #[serde(default)]
    exp: Option<i64>,
}

/// A decoded access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken {
    raw: String,
    subject: Option<String>,
    expires_at: Option<Timestamp>,
}

impl AccessToken {
    /// Decode a JWT's claims without checking its signature.
    ///
    /// # Errors
    ///
    /// Returns a [`TokenError`] if the token is not a JWT or its claims cannot
    /// be read.
    pub fn parse(raw: &str) -> Result<Self, TokenError> {
        let mut segments = raw.split('.');

        let (Some(_header), Some(payload), Some(_signature), None) = (
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
        ) else {
            return Err(TokenError::Malformed);
        };

        let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('='))?;
        let claims: Claims = serde_json::from_slice(&bytes)?;

        let expires_at = claims
            .exp
            .map(|exp| {
                Timestamp::from_second(exp).map_err(|error| TokenError::InvalidExpiry(exp, error))
            })
            .transpose()?;

        Ok(AccessToken {
            raw: raw.to_string(),
            subject: claims.sub,
            expires_at,
        })
    }

    /// Returns the encoded token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns the `sub` claim.
    #[must_use]
    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    /// Returns when the token expires, if it says.
    #[must_use]
    pub fn expires_at(&self) -> Option<Timestamp> {
        self.expires_at
    }

    /// How long to wait before refreshing: the time left minus
    /// [`REFRESH_BUFFER`], never negative. `None` when the token has no expiry.
    #[must_use]
    pub fn refresh_delay(&self, now: Timestamp) -> Option<SignedDuration> {
        self.expires_at.map(|expires_at| {
            expires_at
                .duration_since(now)
                .saturating_sub(REFRESH_BUFFER)
                .max(SignedDuration::ZERO)
        })
    }
}

/// What the session refresher should do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshAction {
    /// Refresh the access token after this delay.
    RefreshAfter(SignedDuration),

    /// Refresh straight away.
    RefreshNow,

    /// Look for a token again after this interval.
    Poll(SignedDuration),

    /// The token never expires; nothing to schedule.
    Idle,
}

/// Decide the next refresher step from the tokens currently held.
///
/// An access token with an expiry is refreshed ahead of it; a refresh token on
/// its own is used immediately; with neither, poll for a sign-in.
#[must_use]
pub fn next_action(
    access: Option<&AccessToken>,
    has_refresh_token: bool,
    now: Timestamp,
) -> RefreshAction {
    match access {
        Some(token) => match token.refresh_delay(now) {
            Some(delay) => {
                debug!(seconds = delay.as_secs(), "scheduling token refresh");

                RefreshAction::RefreshAfter(delay)
            }
            None => {
                debug!("access token has no expiry, not scheduling refresh");

                RefreshAction::Idle
            }
        },
        None if has_refresh_token => RefreshAction::RefreshNow,
        None => RefreshAction::Poll(POLL_INTERVAL),
    }
}
