use axum_extra::extract::cookie::Cookie;

/// Name of the cookie the upstream login sets to establish a session.
pub const SESSION_COOKIE_NAME: &str = "unitoken";

/// Find the upstream session cookie among `Set-Cookie` header values and
/// return it as a `name=value` pair with its attributes stripped.
///
/// Returns `None` when no value carries a non-empty session cookie. That is
/// not a failure on its own: the login body may still report success.
pub fn extract_session_token<'a, I>(set_cookies: I) -> Option<String>
where
    I: IntoIterator<Item = &'a str>,
{
    set_cookies
        .into_iter()
        .filter_map(|raw| Cookie::parse(raw.trim()).ok())
        .find(|cookie| cookie.name() == SESSION_COOKIE_NAME && !cookie.value().is_empty())
        .map(|cookie| format!("{}={}", SESSION_COOKIE_NAME, cookie.value()))
}
