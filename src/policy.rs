//! Referrer policy allow-list.
//!
//! # Responsibilities
//! - Enumerate the eight policy tokens browsers understand
//! - Parse a request parameter into a policy (or nothing)
//! - Name the default policy used to preselect the form
//!
//! # Design Decisions
//! - The allow-list is the enum itself: membership is `FromStr` succeeding
//! - Unknown tokens are never an error at the HTTP layer, only "absent"

use std::fmt;
use std::str::FromStr;

/// Query parameter carrying the policy chosen on Origin A's form.
pub const QUERY_PARAM: &str = "referrerPolicy";

/// A `Referrer-Policy` token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferrerPolicy {
    NoReferrer,
    NoReferrerWhenDowngrade,
    Origin,
    OriginWhenCrossOrigin,
    SameOrigin,
    StrictOrigin,
    StrictOriginWhenCrossOrigin,
    UnsafeUrl,
}

impl ReferrerPolicy {
    /// Every allow-listed policy, in the order the form lists them.
    pub const ALL: [ReferrerPolicy; 8] = [
        ReferrerPolicy::NoReferrer,
        ReferrerPolicy::NoReferrerWhenDowngrade,
        ReferrerPolicy::Origin,
        ReferrerPolicy::OriginWhenCrossOrigin,
        ReferrerPolicy::SameOrigin,
        ReferrerPolicy::StrictOrigin,
        ReferrerPolicy::StrictOriginWhenCrossOrigin,
        ReferrerPolicy::UnsafeUrl,
    ];

    /// The browser default, preselected when the request names no policy.
    pub const DEFAULT: ReferrerPolicy = ReferrerPolicy::StrictOriginWhenCrossOrigin;

    /// The token as it appears on the wire.
    pub const fn as_str(self) -> &'static str {
        match self {
            ReferrerPolicy::NoReferrer => "no-referrer",
            ReferrerPolicy::NoReferrerWhenDowngrade => "no-referrer-when-downgrade",
            ReferrerPolicy::Origin => "origin",
            ReferrerPolicy::OriginWhenCrossOrigin => "origin-when-cross-origin",
            ReferrerPolicy::SameOrigin => "same-origin",
            ReferrerPolicy::StrictOrigin => "strict-origin",
            ReferrerPolicy::StrictOriginWhenCrossOrigin => "strict-origin-when-cross-origin",
            ReferrerPolicy::UnsafeUrl => "unsafe-url",
        }
    }

    /// Resolve an optional request parameter against the allow-list.
    ///
    /// Missing, empty and unknown values all yield `None`.
    pub fn from_param(param: Option<&str>) -> Option<Self> {
        param.and_then(|p| p.parse().ok())
    }
}

impl Default for ReferrerPolicy {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for ReferrerPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a token is not in the allow-list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown referrer policy: {0:?}")]
pub struct UnknownPolicy(pub String);

impl FromStr for ReferrerPolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Tokens are matched exactly, the way the meta tag would carry them.
        Self::ALL
            .into_iter()
            .find(|policy| policy.as_str() == s)
            .ok_or_else(|| UnknownPolicy(s.to_string()))
    }
}
