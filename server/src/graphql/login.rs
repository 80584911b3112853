use platform_session::{Actor, extract_session_token};
use platform_upstream::{Credentials, UpstreamClient};
use tracing::{info, warn};

use super::types::LoginResponse;

/// Run an actor login and fold every outcome into a [`LoginResponse`].
///
/// A token is returned only when the upstream set its session cookie; the
/// caller is responsible for writing it back to the browser.
pub async fn login(
    upstream: &UpstreamClient,
    actor: Actor,
    credentials: &Credentials,
) -> LoginResponse {
    let reply = match upstream.login(actor, credentials).await {
        Ok(reply) => reply,
        Err(failure) => {
            warn!(
                %actor,
                status = ?failure.status,
                body = ?failure.body,
                message = %failure.message,
                "upstream login failed"
            );
            return LoginResponse {
                success: false,
                message: Some(format!("Échec de connexion {actor}")),
                token: None,
            };
        }
    };

    if let Some(token) = extract_session_token(reply.set_cookies.iter().map(String::as_str)) {
        info!(%actor, "login succeeded with session token");
        return LoginResponse {
            success: true,
            message: Some(format!("Connexion {actor} réussie")),
            token: Some(token),
        };
    }

    if reply.reports_success() {
        info!(%actor, "login succeeded without session token");
        LoginResponse {
            success: true,
            message: Some(format!("Connexion {actor} réussie (sans token)")),
            token: None,
        }
    } else {
        warn!(%actor, "login response carried no session token");
        LoginResponse {
            success: false,
            message: Some(format!("Token {actor} non trouvé")),
            token: None,
        }
    }
}
