//! Session handling for the two upstream actors.
//!
//! The gateway never stores sessions itself: upstream tokens travel in
//! browser cookies, get lifted into an immutable [`RequestContext`] once per
//! inbound request, and are written back only after a successful login.

mod actor;
mod context;
mod cookie;
mod extract;

pub use actor::Actor;
pub use context::{ActorSession, CookieSource, RequestContext};
pub use cookie::{removal_cookie, session_cookie};
pub use extract::{SESSION_COOKIE_NAME, extract_session_token};
