//! Origin A: the form and the three interstitial transition pages.
//!
//! The index preselects the policy named in its own query string; the
//! interstitials navigate to bare origin URLs and never forward it.

use axum::{extract::State, response::Html, routing::get, Router};

use crate::http::request::{Referer, RequestedPolicy};
use crate::origins::{Origin, PageState, Transition};
use crate::pages::{document, fragments};
use crate::policy::ReferrerPolicy;

/// Route table for Origin A.
pub fn router(state: PageState) -> Router {
    Router::new()
        .route("/", get(index))
        .route(Transition::SameOrigin.path(), get(same_origin))
        .route(Transition::CrossOrigin.path(), get(cross_origin))
        .route(Transition::Downgrade.path(), get(downgrade))
        .with_state(state)
}

async fn index(
    State(state): State<PageState>,
    Referer(referer): Referer,
    RequestedPolicy(policy): RequestedPolicy,
) -> Html<String> {
    Html(render_index(&state, referer.as_deref(), policy))
}

async fn same_origin(
    State(state): State<PageState>,
    RequestedPolicy(policy): RequestedPolicy,
) -> Html<String> {
    Html(render_transition(&state, Transition::SameOrigin, policy))
}

async fn cross_origin(
    State(state): State<PageState>,
    RequestedPolicy(policy): RequestedPolicy,
) -> Html<String> {
    Html(render_transition(&state, Transition::CrossOrigin, policy))
}

async fn downgrade(
    State(state): State<PageState>,
    RequestedPolicy(policy): RequestedPolicy,
) -> Html<String> {
    Html(render_transition(&state, Transition::Downgrade, policy))
}

fn render_index(
    state: &PageState,
    referer: Option<&str>,
    policy: Option<ReferrerPolicy>,
) -> String {
    let buttons: Vec<String> = Transition::FORM_ORDER
        .iter()
        .map(|t| format!("<button formaction=\"{}\">{}</button>", t.path(), t.label()))
        .collect();

    let body = format!(
        "{}\n<form>\n<label>Referrer Policy\n{}\n</label>\n{}\n</form>",
        fragments::referer(referer, state.escape_referer),
        fragments::policy_select(policy),
        buttons.join("\n"),
    );

    document(&format!("{}: Index", Origin::A), "", &body)
}

fn render_transition(
    state: &PageState,
    transition: Transition,
    policy: Option<ReferrerPolicy>,
) -> String {
    let destination = state.urls.get(transition.destination());
    let body = format!(
        "<p>{}</p>\n{}",
        transition.description(),
        fragments::delayed_navigation(destination, state.redirect_delay),
    );

    document(
        &format!("{}: {}", Origin::A, transition.label()),
        &fragments::policy_meta(policy),
        &body,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;

    fn state() -> PageState {
        PageState::from_config(&ServerConfig::default())
    }

    #[test]
    fn test_index_form() {
        let html = render_index(&state(), None, None);
        assert!(html.contains("<title>Origin A: Index</title>"));
        assert!(html.contains("<dd>not set</dd>"));
        assert!(html.contains("<option selected>strict-origin-when-cross-origin</option>"));
        assert!(html.contains("<button formaction=\"/downgrade\">Downgrade</button>"));
        assert!(html.contains("<button formaction=\"/same-origin\">Same Origin</button>"));
        assert!(html.contains("<button formaction=\"/cross-origin\">Cross Origin</button>"));
    }

    #[test]
    fn test_index_preselects_requested_policy() {
        let html = render_index(&state(), None, Some(ReferrerPolicy::UnsafeUrl));
        assert!(html.contains("<option selected>unsafe-url</option>"));
        assert_eq!(html.matches(" selected").count(), 1);
    }

    #[test]
    fn test_transition_titles() {
        let html = render_transition(&state(), Transition::Downgrade, None);
        assert!(html.contains("<title>Origin A: Downgrade</title>"));
        assert!(html.contains("<h1>Origin A: Downgrade</h1>"));
        assert!(!html.contains("name=\"referrer\""));
    }

    #[test]
    fn test_configured_delay() {
        let mut config = ServerConfig::default();
        config.pages.redirect_delay_ms = 250;
        let html = render_transition(&PageState::from_config(&config), Transition::SameOrigin, None);
        assert!(html.contains("}, 250);"));
    }
}
