use async_graphql::{Error, ErrorExtensions};
use thiserror::Error;

/// Shared result type for gateway operations.
pub type GatewayResult<T> = Result<T, DomainError>;

/// Closed set of failure kinds a GraphQL caller can observe.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    PreconditionFailed,
    Unauthorized,
    UpstreamUnavailable,
    Unknown,
    ShapeError,
}

impl ErrorKind {
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::PreconditionFailed => "PRECONDITION_FAILED",
            ErrorKind::Unauthorized => "UNAUTHORIZED",
            ErrorKind::UpstreamUnavailable => "UPSTREAM_UNAVAILABLE",
            ErrorKind::Unknown => "UNKNOWN",
            ErrorKind::ShapeError => "SHAPE_ERROR",
        }
    }
}

/// The only error shape that crosses the GraphQL boundary. Each variant
/// carries the already-localized message shown to the caller.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum DomainError {
    /// No session for the actor the operation needs.
    #[error("{0}")]
    PreconditionFailed(String),
    /// Upstream rejected or expired the session.
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    UpstreamUnavailable(String),
    #[error("{0}")]
    Unknown(String),
    /// Upstream payload lacks a structurally required field.
    #[error("{0}")]
    Shape(String),
}

impl DomainError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::PreconditionFailed(_) => ErrorKind::PreconditionFailed,
            DomainError::Unauthorized(_) => ErrorKind::Unauthorized,
            DomainError::UpstreamUnavailable(_) => ErrorKind::UpstreamUnavailable,
            DomainError::Unknown(_) => ErrorKind::Unknown,
            DomainError::Shape(_) => ErrorKind::ShapeError,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            DomainError::PreconditionFailed(msg)
            | DomainError::Unauthorized(msg)
            | DomainError::UpstreamUnavailable(msg)
            | DomainError::Unknown(msg)
            | DomainError::Shape(msg) => msg,
        }
    }
}

impl ErrorExtensions for DomainError {
    fn extend(&self) -> Error {
        let code = self.kind().code();
        Error::new(self.message()).extend_with(|_err, e| {
            e.set("code", code);
        })
    }
}

/// Convert a domain error into a GraphQL error carrying `extensions.code`.
pub fn graphql_error(err: DomainError) -> Error {
    err.extend()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_graphql::Value;

    #[test]
    fn extensions_carry_kind_code() {
        let err = graphql_error(DomainError::UpstreamUnavailable(
            "Erreur serveur, réessayez".into(),
        ));
        assert_eq!(err.message, "Erreur serveur, réessayez");
        let code = err
            .extensions
            .as_ref()
            .and_then(|map| map.get("code"))
            .cloned();
        assert_eq!(code, Some(Value::from("UPSTREAM_UNAVAILABLE")));
    }

    #[test]
    fn precondition_is_not_unauthorized() {
        let err = DomainError::PreconditionFailed("connectez-vous".into());
        assert_eq!(err.kind(), ErrorKind::PreconditionFailed);
        assert_ne!(err.kind().code(), ErrorKind::Unauthorized.code());
    }
}
