//! Blog pages.
//!
//! Post ids are `u64`; larger digit strings get 404.

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;

use crate::flash::FlashCookie;
use crate::state::AppState;
use crate::templates::{render_page, CreatePage, IndexPage, PageContext, UpdatePage};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/create", get(create))
        .route("/:id/update", get(update))
}

async fn index(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let flash = FlashCookie::from_headers(&headers);
    render_page(&IndexPage { ctx: PageContext::new(&state, &flash) }, &flash)
}

async fn create(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let flash = FlashCookie::from_headers(&headers);
    render_page(&CreatePage { ctx: PageContext::new(&state, &flash) }, &flash)
}

async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    let Some(post_id) = parse_post_id(&id) else {
        return StatusCode::NOT_FOUND.into_response();
    };
    let flash = FlashCookie::from_headers(&headers);
    render_page(
        &UpdatePage {
            ctx: PageContext::new(&state, &flash),
            post_id,
        },
        &flash,
    )
}

/// Digits only: no sign, no whitespace.
fn parse_post_id(raw: &str) -> Option<u64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}
