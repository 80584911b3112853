use std::sync::Arc;

use anyhow::Result;
use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use axum_extra::extract::cookie::Cookie;
use http_body_util::BodyExt;
use platform_upstream::UpstreamClient;
use rest_gateway::{
    config::AppConfig,
    graphql::{GatewayData, build_schema},
    http::{AppState, build_router},
};
use serde_json::{Value, json};
use tower::ServiceExt;
use wiremock::MockServer;

/// Gateway router wired to a mock upstream.
pub fn gateway_for(upstream: &MockServer) -> Result<Router> {
    let base_url = upstream.uri();
    let config = AppConfig::from_lookup(|key| match key {
        "BASE_URL" => Some(base_url.clone()),
        _ => None,
    })?;
    let client = UpstreamClient::new(config.upstream.clone())?;
    let schema = build_schema(GatewayData {
        upstream: client,
        secure_cookies: config.secure_cookies,
    });
    Ok(build_router(AppState {
        schema,
        config: Arc::new(config),
    }))
}

/// POST a GraphQL document, optionally with a `Cookie` header.
pub async fn post_graphql(
    router: &Router,
    query: &str,
    cookie: Option<&str>,
) -> Result<Response<Body>> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/graphql")
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    let request = builder.body(Body::from(json!({ "query": query }).to_string()))?;
    Ok(router.clone().oneshot(request).await?)
}

pub async fn json_body(response: Response<Body>) -> Result<Value> {
    let bytes = response.into_body().collect().await?.to_bytes();
    Ok(serde_json::from_slice(&bytes)?)
}

/// Every `Set-Cookie` header as the browser would see it.
pub fn set_cookies(response: &Response<Body>) -> Vec<Cookie<'static>> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .filter_map(|value| Cookie::parse_encoded(value.to_string()).ok())
        .collect()
}

/// `name=value` pairs of every `Set-Cookie` header, attributes dropped and
/// still percent-encoded so they can be replayed as a `Cookie` header.
pub fn set_cookie_pairs(response: &Response<Body>) -> Vec<String> {
    set_cookies(response)
        .iter()
        .map(|cookie| cookie.stripped().encoded().to_string())
        .collect()
}
