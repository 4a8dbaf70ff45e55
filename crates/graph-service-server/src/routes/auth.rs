//! `/auth` pages. Submissions are placeholders: nothing is stored.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use tracing::debug;

use crate::flash::{Flash, FlashCookie};
use crate::state::AppState;
use crate::templates::{render_page, LoginPage, PageContext, RegisterPage};

/// Routes relative to the `/auth` prefix.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", get(register_form).post(register))
        .route("/login", get(login_form).post(login))
        .route("/logout", get(logout))
}

async fn register_form(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let flash = FlashCookie::from_headers(&headers);
    render_page(&RegisterPage { ctx: PageContext::new(&state, &flash) }, &flash)
}

async fn register() -> Response {
    debug!("Registration submitted");
    Flash::Registered.redirect("/auth/login")
}

async fn login_form(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let flash = FlashCookie::from_headers(&headers);
    render_page(&LoginPage { ctx: PageContext::new(&state, &flash) }, &flash)
}

async fn login() -> Response {
    debug!("Login submitted");
    Flash::LoggedIn.redirect("/")
}

async fn logout() -> Response {
    Flash::LoggedOut.redirect("/")
}
