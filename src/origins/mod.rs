//! The three demo origins and the transitions between them.
//!
//! # Data Flow
//! ```text
//! Origin A  /            → form (policy + transition)
//!           /same-origin → meta policy, navigate → Origin A
//!           /cross-origin→ meta policy, navigate → Origin B
//!           /downgrade   → meta policy, navigate → Origin C
//! Origin B  /            → echo Referer, link back to A
//! Origin C  /            → echo Referer, link back to A   (plain HTTP)
//! ```

pub mod landing;
pub mod origin_a;

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::config::ServerConfig;

/// One of the three demo origins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    A,
    B,
    C,
}

impl Origin {
    pub const ALL: [Origin; 3] = [Origin::A, Origin::B, Origin::C];

    /// Origins A and B are served over TLS; C is the downgraded target.
    pub fn is_tls(self) -> bool {
        !matches!(self, Origin::C)
    }

    pub fn scheme(self) -> &'static str {
        if self.is_tls() {
            "https"
        } else {
            "http"
        }
    }

    /// The configured port of this origin.
    pub fn port(self, config: &ServerConfig) -> u16 {
        match self {
            Origin::A => config.origins.a_port,
            Origin::B => config.origins.b_port,
            Origin::C => config.origins.c_port,
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Origin::A => "A",
            Origin::B => "B",
            Origin::C => "C",
        };
        write!(f, "Origin {}", name)
    }
}

/// A navigation offered by Origin A's form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    SameOrigin,
    CrossOrigin,
    Downgrade,
}

impl Transition {
    /// Order of the submit buttons on the form.
    pub const FORM_ORDER: [Transition; 3] = [
        Transition::Downgrade,
        Transition::SameOrigin,
        Transition::CrossOrigin,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Transition::SameOrigin => "/same-origin",
            Transition::CrossOrigin => "/cross-origin",
            Transition::Downgrade => "/downgrade",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Transition::SameOrigin => "Same Origin",
            Transition::CrossOrigin => "Cross Origin",
            Transition::Downgrade => "Downgrade",
        }
    }

    /// Where the interstitial page navigates to.
    pub fn destination(self) -> Origin {
        match self {
            Transition::SameOrigin => Origin::A,
            Transition::CrossOrigin => Origin::B,
            Transition::Downgrade => Origin::C,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Transition::SameOrigin => "You should redirect to the same origin in one second…",
            Transition::CrossOrigin => "You should redirect to a different origin in one second…",
            Transition::Downgrade => "You should redirect to a downgraded origin in one second…",
        }
    }
}

/// Public URLs of the three origins, without trailing slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OriginUrls {
    a: String,
    b: String,
    c: String,
}

impl OriginUrls {
    pub fn from_config(config: &ServerConfig) -> Self {
        let url = |origin: Origin| {
            format!(
                "{}://{}:{}",
                origin.scheme(),
                config.origins.public_host,
                origin.port(config)
            )
        };
        Self {
            a: url(Origin::A),
            b: url(Origin::B),
            c: url(Origin::C),
        }
    }

    pub fn get(&self, origin: Origin) -> &str {
        match origin {
            Origin::A => &self.a,
            Origin::B => &self.b,
            Origin::C => &self.c,
        }
    }
}

/// Read-only settings every page handler needs.
#[derive(Debug, Clone)]
pub struct PageState {
    pub urls: Arc<OriginUrls>,
    pub redirect_delay: Duration,
    pub escape_referer: bool,
}

impl PageState {
    pub fn from_config(config: &ServerConfig) -> Self {
        Self {
            urls: Arc::new(OriginUrls::from_config(config)),
            redirect_delay: Duration::from_millis(config.pages.redirect_delay_ms),
            escape_referer: config.pages.escape_referer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_urls() {
        let urls = OriginUrls::from_config(&ServerConfig::default());
        assert_eq!(urls.get(Origin::A), "https://0.0.0.0:4020");
        assert_eq!(urls.get(Origin::B), "https://0.0.0.0:4021");
        assert_eq!(urls.get(Origin::C), "http://0.0.0.0:4022");
    }

    #[test]
    fn test_transition_destinations() {
        assert_eq!(Transition::SameOrigin.destination(), Origin::A);
        assert_eq!(Transition::CrossOrigin.destination(), Origin::B);
        assert_eq!(Transition::Downgrade.destination(), Origin::C);
        assert!(!Transition::Downgrade.destination().is_tls());
    }
}
