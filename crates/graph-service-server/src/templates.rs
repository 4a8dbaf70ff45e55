//! Askama page templates.
//!
//! Sources live in `templates/`; every page extends `base.html`.

use askama::Template;
use axum::response::{Html, IntoResponse, Response};

use crate::error::ApiError;
use crate::flash::FlashCookie;
use crate::state::AppState;

/// Values `base.html` needs on every page.
#[derive(Debug, Clone)]
pub struct PageContext {
    pub site_title: String,
    pub flash: Option<&'static str>,
}

impl PageContext {
    pub fn new(state: &AppState, flash: &FlashCookie) -> Self {
        Self {
            site_title: state.site_title().to_string(),
            flash: flash.message(),
        }
    }
}

#[derive(Template)]
#[template(path = "auth/register.html")]
pub struct RegisterPage {
    pub ctx: PageContext,
}

#[derive(Template)]
#[template(path = "auth/login.html")]
pub struct LoginPage {
    pub ctx: PageContext,
}

#[derive(Template)]
#[template(path = "blog/index.html")]
pub struct IndexPage {
    pub ctx: PageContext,
}

#[derive(Template)]
#[template(path = "blog/create.html")]
pub struct CreatePage {
    pub ctx: PageContext,
}

#[derive(Template)]
#[template(path = "blog/update.html")]
pub struct UpdatePage {
    pub ctx: PageContext,
    pub post_id: u64,
}

/// Render `page` as HTML, expiring any flash cookie that was shown.
pub fn render_page<T: Template>(page: &T, flash: &FlashCookie) -> Response {
    match page.render() {
        Ok(html) => {
            let mut response = Html(html).into_response();
            flash.clear(&mut response);
            response
        }
        Err(e) => ApiError::from(e).into_response(),
    }
}
