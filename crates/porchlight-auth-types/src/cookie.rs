//! Cookie builders for the admin session token.
//!
//! The cookie is the only place the session token lives on the client, so
//! every attribute matters: HTTP-only (no script access), SameSite=Lax,
//! root path, 24-hour Max-Age matching the server-side session TTL.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

/// Cookie name for the admin session token.
pub const ADMIN_SESSION: &str = "admin_session";

/// Cookie Max-Age in seconds (24 hours). Matches the session store TTL.
pub const SESSION_COOKIE_MAX_AGE: u64 = 86_400;

/// Set the admin session cookie on the jar.
///
/// `secure` should be true everywhere except plain-HTTP local development.
///
/// ```
/// use axum_extra::extract::cookie::CookieJar;
/// use porchlight_auth_types::cookie::{set_session_cookie, ADMIN_SESSION};
///
/// let jar = CookieJar::new();
/// let jar = set_session_cookie(jar, "token_value".to_string(), true);
/// let cookie = jar.get(ADMIN_SESSION).unwrap();
/// assert_eq!(cookie.path(), Some("/"));
/// assert_eq!(cookie.max_age(), Some(time::Duration::seconds(86_400)));
/// assert!(cookie.http_only().unwrap_or(false));
/// assert!(cookie.secure().unwrap_or(false));
/// ```
pub fn set_session_cookie(jar: CookieJar, value: String, secure: bool) -> CookieJar {
    let cookie = Cookie::build((ADMIN_SESSION, value))
        .path("/")
        .max_age(Duration::seconds(SESSION_COOKIE_MAX_AGE as i64))
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .build();
    jar.add(cookie)
}

/// Clear the admin session cookie by setting Max-Age to 0.
///
/// ```
/// use axum_extra::extract::cookie::CookieJar;
/// use porchlight_auth_types::cookie::{
///     clear_session_cookie, set_session_cookie, ADMIN_SESSION,
/// };
///
/// let jar = CookieJar::new();
/// let jar = set_session_cookie(jar, "token_value".to_string(), true);
/// let jar = clear_session_cookie(jar, true);
/// let cookie = jar.get(ADMIN_SESSION).unwrap();
/// assert_eq!(cookie.max_age(), Some(time::Duration::ZERO));
/// assert_eq!(cookie.value(), "");
/// ```
pub fn clear_session_cookie(jar: CookieJar, secure: bool) -> CookieJar {
    let cookie = Cookie::build((ADMIN_SESSION, ""))
        .path("/")
        .max_age(Duration::ZERO)
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .build();
    jar.add(cookie)
}
