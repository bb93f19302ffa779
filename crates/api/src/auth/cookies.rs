//! Session cookie helpers.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

/// Cookie carrying the session token.
pub const SESSION_COOKIE: &str = "session_id";

/// Client-side login flag; only ever cleared by the server.
pub const LOGGED_IN_COOKIE: &str = "isLoggedIn";

/// Attach the session token cookie.
pub fn set_session(jar: CookieJar, token: String) -> CookieJar {
    jar.add(
        Cookie::build((SESSION_COOKIE, token))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .build(),
    )
}

/// Read the session token, if the request carries one.
pub fn session_token(jar: &CookieJar) -> Option<String> {
    jar.get(SESSION_COOKIE)
        .map(|c| c.value().to_owned())
        .filter(|v| !v.is_empty())
}

/// Expire both the session and the login-flag cookies.
///
/// The expiry is always sent, even when the request carried neither cookie.
pub fn clear_session(jar: CookieJar) -> CookieJar {
    jar.add(expired(SESSION_COOKIE)).add(expired(LOGGED_IN_COOKIE))
}

fn expired(name: &'static str) -> Cookie<'static> {
    let mut cookie = Cookie::build((name, "")).path("/").build();
    cookie.make_removal();
    cookie
}
