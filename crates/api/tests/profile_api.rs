//! HTTP tests for onboarding, payments and the marketplace license check.

mod support;

use axum::http::{Method, StatusCode};
use serde_json::json;
use support::TestApp;

#[tokio::test(flavor = "multi_thread")]
async fn requests_without_identity_are_unauthenticated() {
    let app = TestApp::new().await;

    for (method, path) in [
        (Method::GET, "/api/profile"),
        (Method::POST, "/api/payments/onetime"),
        (Method::GET, "/api/marketplace/validate"),
        (Method::GET, "/api/admin/users"),
    ] {
        let (status, body) = app.send(method, path, None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{path}");
        assert_eq!(body["message"], "Authentication required");
    }

    let (status, _) = app.send(Method::GET, "/api/profile", Some("   "), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test(flavor = "multi_thread")]
async fn missing_profile_is_not_found() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/api/profile", "ghost").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Profile not found");

    let (status, _) = app.get("/api/marketplace/validate", "ghost").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.send(Method::POST, "/api/payments/onetime", Some("ghost"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test(flavor = "multi_thread")]
async fn onboarding_creates_default_profile_once() {
    let app = TestApp::new().await;

    let created = app.onboard("pro-1", "pro").await;
    assert_eq!(created["userId"], "pro-1");
    assert_eq!(created["role"], "pro");
    assert_eq!(created["hasPaidOneTimeFee"], false);
    assert_eq!(created["subscriptionTier"], "none");
    assert_eq!(created["subscriptionStatus"], "inactive");
    assert_eq!(created["marketplaceAccess"], false);

    let (status, fetched) = app.get("/api/profile", "pro-1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["id"], created["id"]);

    let (status, body) = app.post("/api/profile", "pro-1", json!({"role": "family"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Profile already exists");
}

#[tokio::test(flavor = "multi_thread")]
async fn onboarding_rejects_staff_roles_and_bad_payloads() {
    let app = TestApp::new().await;

    let (status, body) = app.post("/api/profile", "u1", json!({"role": "admin"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["field"], "role");

    let (status, body) =
        app.post("/api/profile", "u1", json!({"role": "pro", "hasPaidOneTimeFee": true})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["field"], "hasPaidOneTimeFee");

    let (status, body) = app.post("/api/profile", "u1", json!({"role": "pro", "bogus": 1})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["field"], "body");

    let (status, _) = app.get("/api/profile", "u1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test(flavor = "multi_thread")]
async fn professional_journey_unlocks_marketplace() {
    let app = TestApp::new().await;
    app.onboard("pro-1", "pro").await;

    // Unpaid
    let (status, license) = app.get("/api/marketplace/validate", "pro-1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(license["valid"], false);
    assert!(license["message"].as_str().unwrap().contains("onboarding fee"));

    // Paid, no subscription
    let (status, paid) = app.send(Method::POST, "/api/payments/onetime", Some("pro-1"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(paid["hasPaidOneTimeFee"], true);
    assert_eq!(paid["subscriptionStatus"], "inactive");

    let (_, license) = app.get("/api/marketplace/validate", "pro-1").await;
    assert_eq!(license["valid"], false);
    assert!(license["message"].as_str().unwrap().contains("subscription"));

    // Subscribed
    let (status, subscribed) =
        app.post("/api/payments/subscribe", "pro-1", json!({"tier": "gold"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(subscribed["subscriptionTier"], "gold");
    assert_eq!(subscribed["subscriptionStatus"], "active");
    assert_eq!(subscribed["marketplaceAccess"], true);

    let (_, license) = app.get("/api/marketplace/validate", "pro-1").await;
    assert_eq!(license["valid"], true);

    let (_, summary) = app.get("/api/profile/entitlements", "pro-1").await;
    assert_eq!(summary["canDownload"], true);
    assert_eq!(summary["nextStep"], "none");
}

#[tokio::test(flavor = "multi_thread")]
async fn family_payment_activates_account() {
    let app = TestApp::new().await;
    app.onboard("fam-1", "family").await;

    let (_, summary) = app.get("/api/profile/entitlements", "fam-1").await;
    assert_eq!(summary["canDownload"], false);
    assert_eq!(summary["nextStep"], "pay_one_time_fee");

    let (status, paid) =
        app.post("/api/profile/mock-payment", "fam-1", json!({"type": "one-time"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(paid["hasPaidOneTimeFee"], true);
    assert_eq!(paid["subscriptionStatus"], "active");
    assert_eq!(paid["subscriptionTier"], "none");

    let (_, summary) = app.get("/api/profile/entitlements", "fam-1").await;
    assert_eq!(summary["canDownload"], true);
    assert_eq!(summary["nextStep"], "none");
}

#[tokio::test(flavor = "multi_thread")]
async fn unsupported_tier_is_rejected_without_changes() {
    let app = TestApp::new().await;
    app.onboard("pro-1", "pro").await;
    app.send(Method::POST, "/api/payments/onetime", Some("pro-1"), None).await;

    let (status, body) =
        app.post("/api/payments/subscribe", "pro-1", json!({"tier": "bronze"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["field"], "tier");

    let (status, body) = app.post("/api/payments/subscribe", "pro-1", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["field"], "tier");

    let (_, profile) = app.get("/api/profile", "pro-1").await;
    assert_eq!(profile["subscriptionTier"], "none");
    assert_eq!(profile["subscriptionStatus"], "inactive");
}

#[tokio::test(flavor = "multi_thread")]
async fn mock_subscription_reuses_tier_on_file() {
    let app = TestApp::new().await;
    app.onboard("pro-1", "pro").await;

    let (status, body) =
        app.post("/api/profile/mock-payment", "pro-1", json!({"type": "subscription"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["field"], "tier");

    let payment = json!({"type": "subscription", "tier": "platinum"});
    let (status, body) = app.post("/api/profile/mock-payment", "pro-1", payment).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["subscriptionTier"], "platinum");

    let (status, body) =
        app.post("/api/profile/mock-payment", "pro-1", json!({"type": "subscription"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["subscriptionTier"], "platinum");

    let (status, body) =
        app.post("/api/profile/mock-payment", "pro-1", json!({"type": "refund"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["field"], "type");
}

#[tokio::test(flavor = "multi_thread")]
async fn patch_updates_fields_and_recomputes_marketplace() {
    let app = TestApp::new().await;
    app.onboard("pro-1", "pro").await;

    let edit = json!({
        "hasPaidOneTimeFee": true,
        "subscriptionTier": "uranium",
        "subscriptionStatus": "active"
    });
    let (status, body) = app.patch("/api/profile", "pro-1", edit).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["marketplaceAccess"], true);

    let (status, body) =
        app.patch("/api/profile", "pro-1", json!({"subscriptionTier": "gold"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["subscriptionTier"], "gold");
    assert_eq!(body["marketplaceAccess"], true);
}

#[tokio::test(flavor = "multi_thread")]
async fn patch_fee_on_family_matches_recorded_payment() {
    let app = TestApp::new().await;
    app.onboard("fam-1", "family").await;

    let (status, body) =
        app.patch("/api/profile", "fam-1", json!({"hasPaidOneTimeFee": true})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["hasPaidOneTimeFee"], true);
    assert_eq!(body["subscriptionStatus"], "active");
    assert_eq!(body["marketplaceAccess"], true);

    let (status, body) = app.get("/api/profile/entitlements", "fam-1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["nextStep"], "none");
    assert_eq!(body["marketplace"]["valid"], true);
}

#[tokio::test(flavor = "multi_thread")]
async fn patch_cannot_cancel_an_active_account() {
    let app = TestApp::new().await;
    app.onboard("fam-1", "family").await;
    let (status, _) = app.send(Method::POST, "/api/payments/onetime", Some("fam-1"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) =
        app.patch("/api/profile", "fam-1", json!({"subscriptionStatus": "inactive"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["field"], "subscriptionStatus");

    let (_, body) = app.get("/api/profile", "fam-1").await;
    assert_eq!(body["subscriptionStatus"], "active");
    assert_eq!(body["marketplaceAccess"], true);
}

#[tokio::test(flavor = "multi_thread")]
async fn patch_rejects_protected_edits() {
    let app = TestApp::new().await;
    app.onboard("pro-1", "pro").await;

    let cases = [
        (json!({"marketplaceAccess": true}), "marketplaceAccess"),
        (json!({"userId": "someone-else"}), "userId"),
        (json!({"role": "family"}), "role"),
        (json!({"role": "admin"}), "role"),
        (json!({"subscriptionStatus": "active"}), "subscriptionStatus"),
        (json!({"subscriptionTier": "bronze"}), "subscriptionTier"),
    ];
    for (payload, field) in cases {
        let (status, body) = app.patch("/api/profile", "pro-1", payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{field}");
        assert_eq!(body["field"], field);
    }

    let (status, _) = app.patch("/api/profile", "ghost", json!({})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test(flavor = "multi_thread")]
async fn health_reports_storage_without_auth() {
    let app = TestApp::new().await;
    let (status, body) = app.send(Method::GET, "/api/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["storage"], "sqlite");
    assert!(body["pool"]["connectionsAcquired"].as_u64().unwrap() > 0);
    assert_eq!(body["pool"]["connectionsTimeout"], 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn unknown_route_returns_json_not_found() {
    let app = TestApp::new().await;
    let (status, body) = app.get("/api/nope", "u1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Route not found");
}
