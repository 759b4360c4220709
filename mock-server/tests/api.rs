use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, Echo, Item};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(String::new())
        .unwrap()
}

// --- login ---

#[tokio::test]
async fn login_returns_access_token() {
    let resp = app()
        .oneshot(json_request(
            "POST",
            "/api/login",
            r#"{"username":"ada","password":"secret"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["accessToken"], "token-ada");
}

#[tokio::test]
async fn login_with_wrong_password_returns_401() {
    let resp = app()
        .oneshot(json_request(
            "POST",
            "/api/login",
            r#"{"username":"ada","password":"nope"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["error"], "invalid credentials");
}

#[tokio::test]
async fn me_requires_bearer_token() {
    let resp = app().oneshot(empty_request("GET", "/api/me")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = app()
        .oneshot(
            Request::builder()
                .uri("/api/me")
                .header(http::header::AUTHORIZATION, "Bearer token-ada")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["username"], "ada");
}

// --- items ---

#[tokio::test]
async fn list_items_empty() {
    let resp = app().oneshot(empty_request("GET", "/api/items")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let items: Vec<Item> = body_json(resp).await;
    assert!(items.is_empty());
}

#[tokio::test]
async fn create_item_returns_201() {
    let resp = app()
        .oneshot(json_request("POST", "/api/items", r#"{"name":"Buy milk"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let item: Item = body_json(resp).await;
    assert_eq!(item.name, "Buy milk");
    assert!(!item.done);
}

#[tokio::test]
async fn create_item_malformed_json_returns_422() {
    let resp = app()
        .oneshot(json_request("POST", "/api/items", r#"{"not_name":1}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn get_item_not_found_has_json_body() {
    let resp = app()
        .oneshot(empty_request(
            "GET",
            "/api/items/00000000-0000-0000-0000-000000000000",
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["error"], "no such item");
}

#[tokio::test]
async fn patch_item_not_found() {
    let resp = app()
        .oneshot(json_request(
            "PATCH",
            "/api/items/00000000-0000-0000-0000-000000000000",
            r#"{"done":true}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- echo / broken ---

#[tokio::test]
async fn echo_reflects_the_request() {
    let resp = app()
        .oneshot(json_request("PUT", "/api/echo/a/b", r#"{"x":1}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let echo: Echo = body_json(resp).await;
    assert_eq!(echo.method, "PUT");
    assert_eq!(echo.path, "/api/echo/a/b");
    assert_eq!(echo.headers["content-type"], "application/json");
    assert_eq!(echo.body, r#"{"x":1}"#);
}

#[tokio::test]
async fn broken_returns_non_json_with_200() {
    let resp = app().oneshot(empty_request("GET", "/api/broken")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_bytes(resp).await;
    assert!(serde_json::from_slice::<serde_json::Value>(&body).is_err());
}

#[tokio::test]
async fn slow_answers_after_the_delay() {
    let started = std::time::Instant::now();
    let resp = app().oneshot(empty_request("GET", "/api/slow")).await.unwrap();

    assert!(started.elapsed() >= mock_server::SLOW_DELAY);
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["slow"], true);
}

// --- full CRUD lifecycle ---

#[tokio::test]
async fn crud_lifecycle() {
    use tower::Service;

    let mut app = app().into_service();

    // create
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("POST", "/api/items", r#"{"name":"Walk dog"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Item = body_json(resp).await;
    let id = created.id;

    // replace
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "PUT",
            &format!("/api/items/{id}"),
            r#"{"name":"Walk cat","done":false}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let replaced: Item = body_json(resp).await;
    assert_eq!(replaced.name, "Walk cat");

    // patch — only done
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "PATCH",
            &format!("/api/items/{id}"),
            r#"{"done":true}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let patched: Item = body_json(resp).await;
    assert_eq!(patched.name, "Walk cat"); // unchanged
    assert!(patched.done);

    // delete
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("DELETE", &format!("/api/items/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(resp).await.is_empty());

    // get after delete — 404
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", &format!("/api/items/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
