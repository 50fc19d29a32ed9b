//! Request extraction.
//!
//! # Responsibilities
//! - Read the inbound `Referer` header for display
//! - Resolve the `referrerPolicy` query parameter against the allow-list
//!
//! # Design Decisions
//! - Both extractors are infallible: a bad query string means "no policy",
//!   never a 400
//! - Header bytes that are not valid UTF-8 are shown lossily rather than dropped

use std::convert::Infallible;

use axum::extract::{FromRequestParts, Query};
use axum::http::{header, request::Parts};

use crate::policy::{ReferrerPolicy, QUERY_PARAM};

/// The inbound `Referer` header, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Referer(pub Option<String>);

impl<S> FromRequestParts<S> for Referer
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(header::REFERER)
            .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned());
        Ok(Referer(value))
    }
}

/// The allow-listed policy named by the query string, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestedPolicy(pub Option<ReferrerPolicy>);

impl<S> FromRequestParts<S> for RequestedPolicy
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // A repeated parameter resolves to its first occurrence.
        let raw = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri)
            .ok()
            .and_then(|Query(pairs)| {
                pairs
                    .into_iter()
                    .find(|(key, _)| key == QUERY_PARAM)
                    .map(|(_, value)| value)
            });
        let policy = ReferrerPolicy::from_param(raw.as_deref());

        match (&raw, policy) {
            (Some(raw), None) => {
                tracing::debug!(param = QUERY_PARAM, value = %raw, "Ignoring unknown referrer policy")
            }
            (_, Some(policy)) => tracing::debug!(policy = %policy, "Referrer policy requested"),
            (None, None) => {}
        }

        Ok(RequestedPolicy(policy))
    }
}
