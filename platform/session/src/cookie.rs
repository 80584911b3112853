use axum_extra::extract::cookie::{Cookie, SameSite};

use crate::Actor;

/// Browser cookie carrying `token` for `actor`.
pub fn session_cookie(actor: Actor, token: impl Into<String>, secure: bool) -> Cookie<'static> {
    Cookie::build((actor.cookie_name(), token.into()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .build()
}

/// Cookie that makes the browser drop `actor`'s session.
pub fn removal_cookie(actor: Actor) -> Cookie<'static> {
    Cookie::build((actor.cookie_name(), "")).path("/").build()
}
