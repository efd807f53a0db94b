//! HTTP round trips through the full router.

mod common;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use common::{ALICE_TOKEN, BOB_TOKEN};
use pagesmith::api::{self, CONTENT_SHA256};

fn app() -> Router {
    api::router(common::app_state())
}

fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

fn post(uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

async fn body_json(resp: axum::response::Response) -> Value {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_text(resp: axum::response::Response) -> String {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn acme_body() -> Value {
    json!({
        "templateId": "t1",
        "brandName": "Acme",
        "industry": "Technology",
        "description": "We build developer tools for small teams.",
        "ctaUrl": "",
        "preferredColors": { "accent": "#112233" }
    })
}

/// Generate "Acme" as alice; returns `(id, slug)`.
async fn generate_acme(app: &Router) -> (String, String) {
    let resp = app
        .clone()
        .oneshot(post("/api/generate", Some(ALICE_TOKEN), acme_body()))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    let id = json["data"]["site"]["id"].as_str().unwrap().to_string();
    let slug = json["data"]["slug"].as_str().unwrap().to_string();
    (id, slug)
}

#[tokio::test]
async fn health_is_public() {
    let resp = app().oneshot(get("/health", None)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["status"], "ok");
}

#[tokio::test]
async fn catalogue_endpoints_are_public() {
    let app = app();
    let resp = app.clone().oneshot(get("/api/templates", None)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"].as_array().unwrap().len(), 7);
    assert_eq!(json["data"][6]["id"], "t7");

    let resp = app.oneshot(get("/api/industries", None)).await.unwrap();
    let json = body_json(resp).await;
    assert_eq!(json["data"][0], "Technology");
    assert_eq!(json["data"].as_array().unwrap().len(), 14);
}

#[tokio::test]
async fn generate_requires_a_known_token() {
    let app = app();
    let resp = app
        .clone()
        .oneshot(post("/api/generate", None, acme_body()))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(resp).await["error"], "Unauthorized");

    let resp = app
        .oneshot(post("/api/generate", Some("forged"), acme_body()))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn generate_returns_site_and_slug() {
    let resp = app()
        .oneshot(post("/api/generate", Some(ALICE_TOKEN), acme_body()))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(json["success"], true);
    let site = &json["data"]["site"];
    assert_eq!(json["data"]["slug"], "acme");
    assert_eq!(site["status"], "draft");
    assert_eq!(site["templateId"], "t1");
    assert_eq!(site["accentColor"], "#112233");
    assert_eq!(site["primaryColor"], "#3B82F6");
    assert!(site["ctaUrl"].is_null());
    assert!(site["generatedHtml"].as_str().unwrap().contains("Acme"));
}

#[tokio::test]
async fn generate_rejects_bad_input_with_400() {
    let app = app();
    let mut body = acme_body();
    body["templateId"] = json!("t9");
    let resp = app
        .clone()
        .oneshot(post("/api/generate", Some(ALICE_TOKEN), body))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(resp).await["error"].as_str().unwrap().contains("t9"));

    let mut body = acme_body();
    body["description"] = json!("tiny");
    let resp = app
        .clone()
        .oneshot(post("/api/generate", Some(ALICE_TOKEN), body))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = app
        .oneshot(post("/api/generate", Some(ALICE_TOKEN), json!({"brandName": "Acme"})))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(resp).await.get("error").is_some());
}

#[tokio::test]
async fn sites_are_owner_scoped() {
    let app = app();
    let (id, _) = generate_acme(&app).await;

    let resp = app
        .clone()
        .oneshot(get(&format!("/api/sites/{id}"), Some(ALICE_TOKEN)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["data"]["id"], id.as_str());

    let resp = app
        .clone()
        .oneshot(get(&format!("/api/sites/{id}"), Some(BOB_TOKEN)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await["error"], "Site not found");

    let resp = app
        .clone()
        .oneshot(get("/api/sites", Some(BOB_TOKEN)))
        .await
        .unwrap();
    assert_eq!(body_json(resp).await["data"], json!([]));

    let resp = app
        .oneshot(get("/api/sites", Some(ALICE_TOKEN)))
        .await
        .unwrap();
    assert_eq!(body_json(resp).await["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn public_route_serves_only_published_sites() {
    let app = app();
    let (id, slug) = generate_acme(&app).await;

    let draft = app
        .clone()
        .oneshot(get(&format!("/sites/{slug}"), None))
        .await
        .unwrap();
    assert_eq!(draft.status(), StatusCode::NOT_FOUND);
    let draft_body = body_text(draft).await;

    let missing = app
        .clone()
        .oneshot(get("/sites/nobody-home", None))
        .await
        .unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_text(missing).await, draft_body);

    let resp = app
        .clone()
        .oneshot(post("/api/publish", Some(BOB_TOKEN), json!({"siteId": id})))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = app
        .clone()
        .oneshot(post("/api/publish", Some(ALICE_TOKEN), json!({"siteId": id})))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["data"]["status"], "published");

    let page = app
        .clone()
        .oneshot(get(&format!("/sites/{slug}"), None))
        .await
        .unwrap();
    assert_eq!(page.status(), StatusCode::OK);
    let etag = page.headers()[header::ETAG].clone();
    assert!(body_text(page).await.contains("<title>Acme - H</title>"));

    let cached = app
        .oneshot(
            Request::builder()
                .uri(format!("/sites/{slug}"))
                .header(header::IF_NONE_MATCH, etag)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(cached.status(), StatusCode::NOT_MODIFIED);
}

#[tokio::test]
async fn export_downloads_the_page() {
    let app = app();
    let (id, _) = generate_acme(&app).await;

    let resp = app
        .clone()
        .oneshot(get(&format!("/api/export?siteId={id}"), Some(ALICE_TOKEN)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"acme-landing-page.html\""
    );
    let digest = resp.headers()[CONTENT_SHA256].to_str().unwrap().to_string();
    let html = body_text(resp).await;
    assert_eq!(digest, pagesmith::publish::sha256_hex(html.as_bytes()));
    assert!(html.starts_with("<!DOCTYPE html>"));

    let resp = app
        .oneshot(get(&format!("/api/export?siteId={id}"), Some(BOB_TOKEN)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
