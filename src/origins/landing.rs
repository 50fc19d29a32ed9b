//! Landing page served by Origins B and C.
//!
//! Both origins show the `Referer` they received and link back to Origin A;
//! only the transport differs.

use axum::{extract::State, response::Html, routing::get, Router};

use crate::http::request::Referer;
use crate::origins::{Origin, PageState};
use crate::pages::{document, fragments};

#[derive(Clone)]
struct LandingState {
    origin: Origin,
    pages: PageState,
}

/// Route table for a landing origin.
pub fn router(origin: Origin, pages: PageState) -> Router {
    Router::new()
        .route("/", get(index))
        .with_state(LandingState { origin, pages })
}

async fn index(State(state): State<LandingState>, Referer(referer): Referer) -> Html<String> {
    Html(render_index(state.origin, &state.pages, referer.as_deref()))
}

fn render_index(origin: Origin, pages: &PageState, referer: Option<&str>) -> String {
    let body = format!(
        "{}\n{}",
        fragments::referer(referer, pages.escape_referer),
        fragments::link(pages.urls.get(Origin::A), "Back to origin A"),
    );
    document(&format!("{}: Index", origin), "", &body)
}
