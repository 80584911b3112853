use std::{fmt, sync::Arc};

use platform_session::{Actor, ActorSession};
use reqwest::{
    Client, Method, Response, Url,
    header::{ACCEPT, CONTENT_TYPE, COOKIE, HOST, HeaderMap, HeaderValue, SET_COOKIE, USER_AGENT},
};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::TransportFailure;

const LOGIN_PATH: &str = "login";
const LOGIN_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=UTF-8";
const LOGIN_ACCEPT: &str = "application/json, text/plain, */*";
const LOGIN_USER_AGENT: &str = "Mozilla/5.0";
const LOGIN_SUCCESS_STATUS: &str = "Login success";

#[derive(Debug, Error)]
pub enum UpstreamConfigError {
    #[error("invalid upstream base url {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("invalid upstream host header {0:?}")]
    InvalidHost(String),
    #[error("failed to build upstream http client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Where the two actor backends live.
#[derive(Clone, Debug)]
pub struct UpstreamConfig {
    base_url: Url,
    host: Option<HeaderValue>,
}

impl UpstreamConfig {
    pub fn new(base_url: &str) -> Result<Self, UpstreamConfigError> {
        let invalid = |reason: String| UpstreamConfigError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason,
        };
        let parsed = Url::parse(base_url).map_err(|err| invalid(err.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme {}", parsed.scheme())));
        }
        Ok(Self {
            base_url: parsed,
            host: None,
        })
    }

    /// Override the `Host` header sent on login calls.
    pub fn with_host(mut self, host: &str) -> Result<Self, UpstreamConfigError> {
        let value = HeaderValue::from_str(host)
            .map_err(|_| UpstreamConfigError::InvalidHost(host.to_string()))?;
        self.host = Some(value);
        Ok(self)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url(&self, actor: Actor, path: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            actor.path_segment(),
            path.trim_start_matches('/')
        )
    }
}

/// Login form credentials.
#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// A 2xx login response: the body (or `null` when it is not JSON) and the
/// raw `Set-Cookie` values for session extraction.
#[derive(Clone, Debug)]
pub struct LoginReply {
    pub body: Value,
    pub set_cookies: Vec<String>,
}

impl LoginReply {
    /// Whether the body carries the upstream's explicit success status.
    pub fn reports_success(&self) -> bool {
        self.body.get("status").and_then(Value::as_str) == Some(LOGIN_SUCCESS_STATUS)
    }
}

/// Cloneable handle issuing calls against the actor backends. Connection
/// pooling is left to reqwest.
#[derive(Clone, Debug)]
pub struct UpstreamClient {
    http: Client,
    config: Arc<UpstreamConfig>,
}

impl UpstreamClient {
    pub fn new(config: UpstreamConfig) -> Result<Self, UpstreamConfigError> {
        let http = Client::builder().build()?;
        Ok(Self {
            http,
            config: Arc::new(config),
        })
    }

    pub async fn get(&self, session: &ActorSession, path: &str) -> Result<Value, TransportFailure> {
        self.call(session, Method::GET, path, None).await
    }

    /// Issue `method` against `path` in the session's actor namespace with
    /// the session token attached as the `Cookie` header.
    pub async fn call(
        &self,
        session: &ActorSession,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value, TransportFailure> {
        let url = self.config.url(session.actor(), path);
        debug!(actor = %session.actor(), %method, %url, "upstream call");
        let mut request = self
            .http
            .request(method, &url)
            .header(COOKIE, session.token())
            .header(ACCEPT, "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request
            .send()
            .await
            .map_err(TransportFailure::from_transport)?;
        read_json(response).await
    }

    /// Submit credentials to `{base}/{actor}/login`.
    pub async fn login(
        &self,
        actor: Actor,
        credentials: &Credentials,
    ) -> Result<LoginReply, TransportFailure> {
        let url = self.config.url(actor, LOGIN_PATH);
        debug!(%actor, %url, username = %credentials.username, "upstream login");
        let form = [
            ("ksiopuser", credentials.username.as_str()),
            ("ksiopvalue", credentials.password.as_str()),
            ("ksiopremember", "true"),
        ];
        let response = self
            .http
            .post(&url)
            .form(&form)
            .headers(self.login_headers())
            .send()
            .await
            .map_err(TransportFailure::from_transport)?;

        let set_cookies = response
            .headers()
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .map(str::to_owned)
            .collect::<Vec<_>>();
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(TransportFailure::from_transport)?;
        if !status.is_success() {
            return Err(TransportFailure::from_status(status, text));
        }
        let body = serde_json::from_str(&text).unwrap_or_else(|err| {
            warn!(%actor, error = %err, "login body is not JSON");
            Value::Null
        });
        Ok(LoginReply { body, set_cookies })
    }

    fn login_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(LOGIN_CONTENT_TYPE));
        headers.insert(ACCEPT, HeaderValue::from_static(LOGIN_ACCEPT));
        headers.insert(USER_AGENT, HeaderValue::from_static(LOGIN_USER_AGENT));
        if let Some(host) = &self.config.host {
            headers.insert(HOST, host.clone());
        }
        headers
    }
}

async fn read_json(response: Response) -> Result<Value, TransportFailure> {
    let status = response.status();
    let text = response.text().await.map_err(|err| TransportFailure {
        status: Some(status.as_u16()),
        ..TransportFailure::from_transport(err)
    })?;
    if !status.is_success() {
        return Err(TransportFailure::from_status(status, text));
    }
    serde_json::from_str(&text).map_err(|err| TransportFailure::invalid_body(status, text, err))
}
