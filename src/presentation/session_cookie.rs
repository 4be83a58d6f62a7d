// Session state carried in a browser-session cookie
use crate::domain::page::Page;
use crate::domain::session::SessionState;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

pub const LAST_PAGE_COOKIE: &str = "hub_last_page";

/// Read the session state; a missing or stale cookie is the initial state
pub fn read_state(jar: &CookieJar) -> SessionState {
    let last_page = jar.get(LAST_PAGE_COOKIE).and_then(|cookie| {
        cookie
            .value()
            .parse::<Page>()
            .inspect_err(|e| tracing::debug!("Ignoring session cookie: {}", e))
            .ok()
    });

    SessionState::new(last_page)
}

/// Store the session state. No expiry, so the cookie ends with the browser session.
pub fn store_state(jar: CookieJar, state: &SessionState) -> CookieJar {
    match state.last_page {
        Some(page) => jar.add(
            Cookie::build((LAST_PAGE_COOKIE, page.slug()))
                .path("/")
                .http_only(true)
                .same_site(SameSite::Lax)
                .build(),
        ),
        None => jar.remove(Cookie::build(LAST_PAGE_COOKIE).path("/").build()),
    }
}
