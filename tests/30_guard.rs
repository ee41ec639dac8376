mod common;

use admin_console::config::DynamicLoadWay;
use admin_console::session::{GuardDecision, SessionPhase, TokenStore};
use anyhow::Result;
use common::{admin_user, dash_menus, fail, ok, TestBackend};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::Mock;

#[tokio::test]
async fn anonymous_visit_redirects_to_login() -> Result<()> {
    let backend = TestBackend::start(DynamicLoadWay::Backend, None).await?;
    let guard = backend.guard();

    let decision = guard.before_each("/access/roles").await?;
    assert_eq!(decision, GuardDecision::Redirect("/login?redirect=%2Faccess%2Froles".into()));

    assert_eq!(guard.before_each("/login").await?, GuardDecision::Proceed);
    assert!(backend.server.received_requests().await.unwrap_or_default().is_empty());
    Ok(())
}

#[tokio::test]
async fn first_visit_loads_user_and_routes_once() -> Result<()> {
    let backend = TestBackend::start(DynamicLoadWay::Backend, Some("t")).await?;

    Mock::given(method("GET"))
        .and(path("/v1/admin/user"))
        .respond_with(ok(admin_user(json!("Root"))))
        .expect(1)
        .mount(&backend.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/menus"))
        .respond_with(ok(dash_menus()))
        .expect(1)
        .mount(&backend.server)
        .await;

    let guard = backend.guard();
    assert_eq!(guard.before_each("/dash/users").await?, GuardDecision::Proceed);
    assert_eq!(backend.session.snapshot().phase(), SessionPhase::Active);

    // Second navigation finds everything in place
    assert_eq!(guard.before_each("/dash/roles").await?, GuardDecision::Proceed);
    Ok(())
}

#[tokio::test]
async fn rejected_credential_tears_session_down() -> Result<()> {
    let backend = TestBackend::start(DynamicLoadWay::Backend, Some("expired")).await?;

    Mock::given(method("GET"))
        .and(path("/v1/admin/user"))
        .respond_with(fail(401, "登录失效，请重新登录~"))
        .mount(&backend.server)
        .await;

    let decision = backend.guard().before_each("/dash").await?;
    assert_eq!(decision, GuardDecision::Redirect("/login?redirect=%2Fdash".into()));

    let state = backend.session.snapshot();
    assert_eq!(state.phase(), SessionPhase::TornDown);
    assert!(backend.tokens.get().is_none());
    assert_eq!(backend.navigator.visited(), vec!["/login".to_string()]);
    Ok(())
}

#[tokio::test]
async fn other_failures_propagate() -> Result<()> {
    let backend = TestBackend::start(DynamicLoadWay::Backend, Some("t")).await?;

    Mock::given(method("GET"))
        .and(path("/v1/admin/user"))
        .respond_with(ok(admin_user(json!("Root"))))
        .mount(&backend.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/menus"))
        .respond_with(fail(500, "服务器错误~"))
        .mount(&backend.server)
        .await;

    let err = backend.guard().before_each("/dash").await.unwrap_err();
    assert!(!err.is_unauthorized());

    // Session keeps its token and user; only routes are missing
    let state = backend.session.snapshot();
    assert!(state.token.is_some());
    assert!(state.user_info.is_some());
    assert!(state.router_data().is_none());
    Ok(())
}
