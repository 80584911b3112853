mod common;

use anyhow::Result;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::json;
use tower::ServiceExt;
use wiremock::matchers::{any, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{gateway_for, json_body, post_graphql, set_cookie_pairs, set_cookies};

#[tokio::test]
async fn login_cookie_authorizes_following_queries() -> Result<()> {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/fo/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .append_header("set-cookie", "unitoken=ABC123; Path=/; HttpOnly")
                .set_body_json(json!({"status": "Login success"})),
        )
        .expect(1)
        .mount(&upstream)
        .await;
    Mock::given(method("GET"))
        .and(path("/fo/deals"))
        .and(header("cookie", "unitoken=ABC123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"dosid": 7, "clientname": "ACME", "monthly": 420.0}
        ])))
        .expect(1)
        .mount(&upstream)
        .await;

    let gateway = gateway_for(&upstream)?;
    let login = post_graphql(
        &gateway,
        r#"mutation { loginFO(username: "alice", password: "pw") { success token } }"#,
        None,
    )
    .await?;
    assert_eq!(login.status(), StatusCode::OK);
    let issued = set_cookies(&login);
    assert_eq!(issued.len(), 1);
    assert_eq!(issued[0].name(), "cookie-fo");
    assert_eq!(issued[0].value(), "unitoken=ABC123");
    assert_eq!(issued[0].http_only(), Some(true));
    assert_eq!(issued[0].path(), Some("/"));
    let cookies = set_cookie_pairs(&login);
    assert_eq!(
        json_body(login).await?,
        json!({"data": {"loginFO": {"success": true, "token": "unitoken=ABC123"}}})
    );

    let deals = post_graphql(
        &gateway,
        "{ foDeals { dosid clientname monthly } }",
        Some(&cookies[0]),
    )
    .await?;
    assert_eq!(
        json_body(deals).await?,
        json!({"data": {"foDeals": [{"dosid": 7, "clientname": "ACME", "monthly": 420.0}]}})
    );
    Ok(())
}

#[tokio::test]
async fn anonymous_reads_never_reach_upstream() -> Result<()> {
    let upstream = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&upstream)
        .await;

    let gateway = gateway_for(&upstream)?;
    let response = post_graphql(&gateway, "{ kpiProchainsPaiements { title } }", None).await?;
    let body = json_body(response).await?;
    assert_eq!(body["errors"][0]["extensions"]["code"], "PRECONDITION_FAILED");
    assert_eq!(body["data"], serde_json::Value::Null);

    let response = post_graphql(
        &gateway,
        "{ kpiProchainsPaiements { title } }",
        Some("cookie-fo=unitoken%3Dfo-only"),
    )
    .await?;
    let body = json_body(response).await?;
    assert_eq!(body["errors"][0]["extensions"]["code"], "PRECONDITION_FAILED");
    Ok(())
}

#[tokio::test]
async fn expired_bo_session_is_unauthorized() -> Result<()> {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/bo/dashboards/wsmycreditlines"))
        .and(header("cookie", "unitoken=stale"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({"error": "expired"})))
        .expect(1)
        .mount(&upstream)
        .await;

    let gateway = gateway_for(&upstream)?;
    let response = post_graphql(
        &gateway,
        "{ wsMyCreditLinesDashboard { editable } }",
        Some("cookie-bo=unitoken%3Dstale"),
    )
    .await?;
    let body = json_body(response).await?;
    assert_eq!(body["errors"][0]["extensions"]["code"], "UNAUTHORIZED");
    assert_eq!(
        body["errors"][0]["message"],
        "Non autorisé : votre session BO a peut-être expiré, veuillez vous reconnecter."
    );
    Ok(())
}

#[tokio::test]
async fn failed_login_sets_no_cookie() -> Result<()> {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/bo/login"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&upstream)
        .await;

    let gateway = gateway_for(&upstream)?;
    let response = post_graphql(
        &gateway,
        r#"mutation { loginBO(username: "bob", password: "pw") { success token } }"#,
        None,
    )
    .await?;
    assert!(set_cookie_pairs(&response).is_empty());
    assert_eq!(
        json_body(response).await?,
        json!({"data": {"loginBO": {"success": false, "token": null}}})
    );
    Ok(())
}

#[tokio::test]
async fn logout_clears_both_session_cookies() -> Result<()> {
    let upstream = MockServer::start().await;
    let gateway = gateway_for(&upstream)?;
    let request = Request::builder()
        .method("POST")
        .uri("/logout")
        .header("cookie", "cookie-fo=unitoken%3Da; cookie-bo=unitoken%3Db")
        .body(Body::empty())?;
    let response = gateway.oneshot(request).await?;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let cleared = set_cookie_pairs(&response);
    assert!(cleared.contains(&"cookie-fo=".to_string()));
    assert!(cleared.contains(&"cookie-bo=".to_string()));
    Ok(())
}

#[tokio::test]
async fn health_reports_ok() -> Result<()> {
    let upstream = MockServer::start().await;
    let gateway = gateway_for(&upstream)?;
    let request = Request::builder().uri("/health").body(Body::empty())?;
    let response = gateway.oneshot(request).await?;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await?;
    assert_eq!(body["ok"], true);
    Ok(())
}
