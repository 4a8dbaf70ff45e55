//! One-shot messages carried across a redirect in a cookie.
//!
//! The cookie holds a fixed code, never message text.

use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, HeaderValue};
use axum::response::{IntoResponse, Redirect, Response};

/// Cookie name.
pub const FLASH_COOKIE: &str = "flash";

const CLEAR_COOKIE: &str = "flash=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0";

/// A known flash message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flash {
    Registered,
    LoggedIn,
    LoggedOut,
}

impl Flash {
    pub fn code(self) -> &'static str {
        match self {
            Self::Registered => "registered",
            Self::LoggedIn => "logged_in",
            Self::LoggedOut => "logged_out",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Registered => "Registered (placeholder)",
            Self::LoggedIn => "Logged in (placeholder)",
            Self::LoggedOut => "Logged out (placeholder)",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "registered" => Some(Self::Registered),
            "logged_in" => Some(Self::LoggedIn),
            "logged_out" => Some(Self::LoggedOut),
            _ => None,
        }
    }

    fn set_cookie(self) -> &'static str {
        match self {
            Self::Registered => "flash=registered; Path=/; HttpOnly; SameSite=Lax",
            Self::LoggedIn => "flash=logged_in; Path=/; HttpOnly; SameSite=Lax",
            Self::LoggedOut => "flash=logged_out; Path=/; HttpOnly; SameSite=Lax",
        }
    }

    /// `303 See Other` to `to`, setting this flash.
    pub fn redirect(self, to: &str) -> Response {
        let mut response = Redirect::to(to).into_response();
        response
            .headers_mut()
            .append(SET_COOKIE, HeaderValue::from_static(self.set_cookie()));
        response
    }
}

/// The flash cookie as found on an incoming request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlashCookie {
    /// Whether a `flash` cookie was sent at all.
    pub present: bool,
    /// The decoded flash; `None` for a missing or unknown code.
    pub flash: Option<Flash>,
}

impl FlashCookie {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let value = headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .flat_map(|v| v.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == FLASH_COOKIE)
            .map(|(_, value)| value.trim());

        match value {
            Some(code) => Self {
                present: true,
                flash: Flash::from_code(code),
            },
            None => Self::default(),
        }
    }

    pub fn message(&self) -> Option<&'static str> {
        self.flash.map(Flash::message)
    }

    /// Expire the cookie on `response` if the request carried one.
    pub fn clear(&self, response: &mut Response) {
        if self.present {
            response
                .headers_mut()
                .append(SET_COOKIE, HeaderValue::from_static(CLEAR_COOKIE));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::LOCATION;
    use axum::http::StatusCode;

    fn headers(cookie: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_str(cookie).unwrap());
        headers
    }

    #[test]
    fn test_codes_round_trip() {
        for flash in [Flash::Registered, Flash::LoggedIn, Flash::LoggedOut] {
            assert_eq!(Flash::from_code(flash.code()), Some(flash));
            assert!(flash.set_cookie().starts_with(&format!("flash={};", flash.code())));
        }
        assert_eq!(Flash::from_code("Registered (placeholder)"), None);
    }

    #[test]
    fn test_redirect_sets_cookie() {
        let response = Flash::LoggedIn.redirect("/");
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[LOCATION], "/");
        assert_eq!(
            response.headers()[SET_COOKIE],
            "flash=logged_in; Path=/; HttpOnly; SameSite=Lax"
        );
    }

    #[test]
    fn test_cookie_found_among_others() {
        let cookie = FlashCookie::from_headers(&headers("theme=dark; flash=registered; lang=en"));
        assert!(cookie.present);
        assert_eq!(cookie.message(), Some("Registered (placeholder)"));
    }

    #[test]
    fn test_unknown_code_is_present_but_silent() {
        let cookie = FlashCookie::from_headers(&headers("flash=<script>"));
        assert!(cookie.present);
        assert_eq!(cookie.flash, None);
        assert_eq!(cookie.message(), None);
    }

    #[test]
    fn test_absent_cookie_leaves_response_alone() {
        let cookie = FlashCookie::from_headers(&HeaderMap::new());
        assert!(!cookie.present);

        let mut response = StatusCode::OK.into_response();
        cookie.clear(&mut response);
        assert!(response.headers().get(SET_COOKIE).is_none());
    }

    #[test]
    fn test_clear_expires_cookie() {
        let cookie = FlashCookie::from_headers(&headers("flash=logged_out"));
        let mut response = StatusCode::OK.into_response();
        cookie.clear(&mut response);
        let value = response.headers()[SET_COOKIE].to_str().unwrap();
        assert!(value.starts_with("flash=;"));
        assert!(value.contains("Max-Age=0"));
    }
}
