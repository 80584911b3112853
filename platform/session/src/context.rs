use axum_extra::extract::cookie::CookieJar;
use platform_api::DomainError;

use crate::Actor;

/// A live upstream session for one actor. The token is opaque
/// (`unitoken=<value>`) and is forwarded verbatim.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ActorSession {
    actor: Actor,
    token: String,
}

impl ActorSession {
    pub fn new(actor: Actor, token: impl Into<String>) -> Self {
        Self {
            actor,
            token: token.into(),
        }
    }

    pub fn actor(&self) -> Actor {
        self.actor
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

/// Anything an inbound request's cookies can be read from.
pub trait CookieSource {
    fn cookie_value(&self, name: &str) -> Option<String>;
}

impl CookieSource for CookieJar {
    fn cookie_value(&self, name: &str) -> Option<String> {
        self.get(name).map(|cookie| cookie.value().to_string())
    }
}

/// Sessions available to a single inbound request. Built once before the
/// operation runs and never mutated afterwards.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RequestContext {
    fo: Option<ActorSession>,
    bo: Option<ActorSession>,
}

impl RequestContext {
    /// Lift the actor cookies out of `source`. Values are not validated;
    /// a malformed token surfaces later as an upstream rejection.
    pub fn from_cookies(source: &impl CookieSource) -> Self {
        let read = |actor: Actor| {
            source
                .cookie_value(actor.cookie_name())
                .filter(|value| !value.is_empty())
                .map(|value| ActorSession::new(actor, value))
        };
        Self {
            fo: read(Actor::Fo),
            bo: read(Actor::Bo),
        }
    }

    pub fn session(&self, actor: Actor) -> Option<&ActorSession> {
        match actor {
            Actor::Fo => self.fo.as_ref(),
            Actor::Bo => self.bo.as_ref(),
        }
    }

    /// The actor's session, or `PreconditionFailed` when the caller never
    /// logged in against that actor.
    pub fn require(&self, actor: Actor) -> Result<&ActorSession, DomainError> {
        self.session(actor).ok_or_else(|| {
            DomainError::PreconditionFailed(format!(
                "Accès refusé : veuillez d'abord vous connecter via {}.",
                actor.label()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use axum_extra::extract::cookie::Cookie;
    use platform_api::ErrorKind;

    impl CookieSource for HashMap<String, String> {
        fn cookie_value(&self, name: &str) -> Option<String> {
            self.get(name).cloned()
        }
    }

    fn cookies(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn no_cookies_means_no_sessions() {
        let ctx = RequestContext::from_cookies(&HashMap::new());
        assert_eq!(ctx, RequestContext::default());
        for actor in Actor::ALL {
            assert!(ctx.session(actor).is_none());
        }
    }

    #[test]
    fn each_actor_reads_its_own_cookie() {
        let ctx = RequestContext::from_cookies(&cookies(&[("cookie-bo", "unitoken=bo-1")]));
        assert!(ctx.session(Actor::Fo).is_none());
        let bo = ctx.session(Actor::Bo).expect("bo session");
        assert_eq!(bo.actor(), Actor::Bo);
        assert_eq!(bo.token(), "unitoken=bo-1");
    }

    #[test]
    fn raw_values_are_kept_unmodified() {
        let ctx = RequestContext::from_cookies(&cookies(&[
            ("cookie-fo", "not even a token"),
            ("cookie-bo", "unitoken=b"),
        ]));
        assert_eq!(
            ctx.session(Actor::Fo).map(ActorSession::token),
            Some("not even a token")
        );
    }

    #[test]
    fn empty_cookie_is_absent() {
        let ctx = RequestContext::from_cookies(&cookies(&[("cookie-fo", "")]));
        assert!(ctx.session(Actor::Fo).is_none());
    }

    #[test]
    fn reads_from_cookie_jar() {
        let jar = CookieJar::new().add(Cookie::new("cookie-fo", "unitoken=jar"));
        let ctx = RequestContext::from_cookies(&jar);
        assert_eq!(
            ctx.session(Actor::Fo).map(ActorSession::token),
            Some("unitoken=jar")
        );
    }

    #[test]
    fn require_missing_session_is_precondition_failure() {
        let ctx = RequestContext::from_cookies(&cookies(&[("cookie-fo", "unitoken=x")]));
        assert!(ctx.require(Actor::Fo).is_ok());
        let err = ctx.require(Actor::Bo).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PreconditionFailed);
        assert!(err.message().contains("via BO"));
    }
}
