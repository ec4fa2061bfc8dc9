//! Flash notices for the browser form flow: one short-lived cookie carrying
//! a level-tagged message, attached to a see-other redirect. The page that
//! renders next reads and clears the cookie client-side.

use axum::http::{header, HeaderValue};
use axum::response::{IntoResponse, Redirect, Response};

pub(crate) const FLASH_COOKIE: &str = "flash";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FlashLevel {
    Success,
    Error,
}

impl FlashLevel {
    fn as_str(self) -> &'static str {
        match self {
            FlashLevel::Success => "success",
            FlashLevel::Error => "error",
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Flash {
    level: FlashLevel,
    message: String,
}

impl Flash {
    pub(crate) fn success(message: impl Into<String>) -> Self {
        Self { level: FlashLevel::Success, message: message.into() }
    }

    pub(crate) fn error(message: impl Into<String>) -> Self {
        Self { level: FlashLevel::Error, message: message.into() }
    }

    /// A 303 redirect carrying the flash cookie.
    pub(crate) fn redirect(self, to: &str) -> Response {
        let mut response = Redirect::to(to).into_response();
        match HeaderValue::from_str(&self.cookie()) {
            Ok(value) => {
                response.headers_mut().insert(header::SET_COOKIE, value);
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to encode flash cookie");
            }
        }
        response
    }

    fn cookie(&self) -> String {
        format!(
            "{FLASH_COOKIE}={}:{}; Path=/; Max-Age=60; SameSite=Lax",
            self.level.as_str(),
            percent_encode(&self.message)
        )
    }
}

/// Minimal percent-encoding keeping the message cookie-safe. Unreserved
/// ASCII passes through; everything else becomes %XX byte escapes.
fn percent_encode(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char);
            }
            _ => {
                encoded.push('%');
                encoded.push_str(&format!("{byte:02X}"));
            }
        }
    }
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header, StatusCode};

    #[test]
    fn percent_encode_escapes_separators() {
        assert_eq!(percent_encode("plain-text_1.0~"), "plain-text_1.0~");
        assert_eq!(percent_encode("a b;c"), "a%20b%3Bc");
        assert_eq!(percent_encode("100%"), "100%25");
    }

    #[test]
    fn redirect_sets_location_and_cookie() {
        let response = Flash::success("Assessment created").redirect("/teacher/dashboard");

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(header::LOCATION).and_then(|v| v.to_str().ok()),
            Some("/teacher/dashboard")
        );
        let cookie =
            response.headers().get(header::SET_COOKIE).and_then(|v| v.to_str().ok()).unwrap();
        assert!(cookie.starts_with("flash=success:Assessment%20created"));
        assert!(cookie.contains("Max-Age=60"));
    }

    #[test]
    fn error_flash_is_tagged_error() {
        let response = Flash::error("Unknown assessment type").redirect("/teacher/create-assessment");
        let cookie =
            response.headers().get(header::SET_COOKIE).and_then(|v| v.to_str().ok()).unwrap();
        assert!(cookie.starts_with("flash=error:"));
    }
}
