use platform_api::DomainError;
use tracing::error;

use crate::{Endpoint, TransportFailure};

/// Map a failed upstream call to the caller-facing taxonomy.
///
/// 401/403 means the session was rejected, 5xx a transient upstream fault;
/// anything else, including failures without a status, is `Unknown`. The
/// full upstream detail is logged here and never returned.
pub fn classify(endpoint: &Endpoint, failure: &TransportFailure) -> DomainError {
    let classified = match failure.status {
        Some(401 | 403) => DomainError::Unauthorized(format!(
            "Non autorisé : votre session {} a peut-être expiré, veuillez vous reconnecter.",
            endpoint.actor.label()
        )),
        Some(status) if status >= 500 => DomainError::UpstreamUnavailable(format!(
            "Erreur serveur lors de la récupération {}. Veuillez réessayer plus tard.",
            endpoint.subject
        )),
        _ => DomainError::Unknown(format!(
            "Erreur inconnue lors de la récupération {}.",
            endpoint.subject
        )),
    };
    error!(
        operation = endpoint.operation,
        actor = %endpoint.actor,
        status = ?failure.status,
        body = ?failure.body,
        message = %failure.message,
        code = classified.kind().code(),
        "upstream call failed"
    );
    classified
}
