use chrono::{DateTime, Utc};
use http::header::{COOKIE, HeaderMap};

use crate::session::config::{COOKIE_SECURITY, SESSION_COOKIE_NAME};
use crate::session::errors::SessionError;
use crate::utils::header_append_cookie;

/// Append a `Set-Cookie` header carrying the plaintext session token.
///
/// Always `HttpOnly` and `SameSite=Lax`; `Secure` only when configured for a
/// production-like environment. Appends rather than overwrites so a response
/// can set several cookies.
pub fn append_session_cookie(
    headers: &mut HeaderMap,
    token: &str,
    expires_at: &DateTime<Utc>,
) -> Result<(), SessionError> {
    let mut cookie = format!(
        "{}={}; HttpOnly; SameSite=Lax; Expires={}; Path=/",
        SESSION_COOKIE_NAME.as_str(),
        token,
        expires_at.format("%a, %d %b %Y %H:%M:%S GMT"),
    );
    if COOKIE_SECURITY.secure {
        cookie.push_str("; Secure");
    }

    header_append_cookie(headers, cookie)?;
    Ok(())
}

/// Append a `Set-Cookie` header that forces immediate client-side deletion
/// of the session cookie (`Max-Age=0`).
pub fn append_clear_session_cookie(headers: &mut HeaderMap) -> Result<(), SessionError> {
    let mut cookie = format!(
        "{}=; HttpOnly; SameSite=Lax; Max-Age=0; Path=/",
        SESSION_COOKIE_NAME.as_str(),
    );
    if COOKIE_SECURITY.secure {
        cookie.push_str("; Secure");
    }

    header_append_cookie(headers, cookie)?;
    Ok(())
}

/// Extract the session token from the request's `Cookie` header, if present.
pub fn session_token_from_headers(headers: &HeaderMap) -> Result<Option<&str>, SessionError> {
    let Some(cookie_header) = headers.get(COOKIE) else {
        return Ok(None);
    };

    let cookie_str = cookie_header.to_str().map_err(|e| {
        tracing::debug!("Invalid cookie header: {}", e);
        SessionError::Header("Invalid cookie header".to_string())
    })?;

    let cookie_name = SESSION_COOKIE_NAME.as_str();

    let token = cookie_str.split(';').map(|s| s.trim()).find_map(|s| {
        let mut parts = s.splitn(2, '=');
        match (parts.next(), parts.next()) {
            (Some(k), Some(v)) if k == cookie_name => Some(v),
            _ => None,
        }
    });

    Ok(token)
}
