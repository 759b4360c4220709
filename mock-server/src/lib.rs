use std::{collections::BTreeMap, collections::HashMap, sync::Arc, time::Duration};

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, Method, StatusCode, Uri},
    routing::{any, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

/// Password accepted by `POST /api/login` for any username.
pub const PASSWORD: &str = "secret";

/// How long `GET /api/slow` waits before answering.
pub const SLOW_DELAY: Duration = Duration::from_millis(300);

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub id: Uuid,
    pub name: String,
    pub done: bool,
}

#[derive(Deserialize)]
pub struct CreateItem {
    pub name: String,
    #[serde(default)]
    pub done: bool,
}

#[derive(Deserialize)]
pub struct PatchItem {
    pub name: Option<String>,
    pub done: Option<bool>,
}

#[derive(Deserialize)]
pub struct Login {
    pub username: String,
    pub password: String,
}

/// What `ANY /api/echo/...` saw. Header names are lowercase.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Echo {
    pub method: String,
    pub path: String,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

pub type Db = Arc<RwLock<HashMap<Uuid, Item>>>;

type ApiResult<T> = Result<T, (StatusCode, Json<Value>)>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route("/api/login", post(login))
        .route("/api/me", get(me))
        .route("/api/items", get(list_items).post(create_item))
        .route(
            "/api/items/{id}",
            get(get_item)
                .put(replace_item)
                .patch(patch_item)
                .delete(delete_item),
        )
        .route("/api/echo", any(echo))
        .route("/api/echo/{*rest}", any(echo))
        .route("/api/broken", get(broken))
        .route("/api/slow", get(slow))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn failure(status: StatusCode, message: &str) -> (StatusCode, Json<Value>) {
    (status, Json(json!({ "error": message })))
}

fn token_for(username: &str) -> String {
    format!("token-{username}")
}

async fn login(Json(input): Json<Login>) -> ApiResult<Json<Value>> {
    if input.password != PASSWORD {
        tracing::info!(username = %input.username, "rejected login");
        return Err(failure(StatusCode::UNAUTHORIZED, "invalid credentials"));
    }
    Ok(Json(json!({ "accessToken": token_for(&input.username) })))
}

async fn me(headers: HeaderMap) -> ApiResult<Json<Value>> {
    let username = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer token-"))
        .ok_or_else(|| failure(StatusCode::UNAUTHORIZED, "missing bearer token"))?;
    Ok(Json(json!({ "username": username })))
}

async fn list_items(State(db): State<Db>) -> Json<Vec<Item>> {
    let items = db.read().await;
    Json(items.values().cloned().collect())
}

async fn create_item(
    State(db): State<Db>,
    Json(input): Json<CreateItem>,
) -> (StatusCode, Json<Item>) {
    let item = Item {
        id: Uuid::new_v4(),
        name: input.name,
        done: input.done,
    };
    db.write().await.insert(item.id, item.clone());
    tracing::debug!(id = %item.id, "created item");
    (StatusCode::CREATED, Json(item))
}

async fn get_item(State(db): State<Db>, Path(id): Path<Uuid>) -> ApiResult<Json<Item>> {
    let items = db.read().await;
    items
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| failure(StatusCode::NOT_FOUND, "no such item"))
}

async fn replace_item(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
    Json(input): Json<CreateItem>,
) -> ApiResult<Json<Item>> {
    let mut items = db.write().await;
    let item = items
        .get_mut(&id)
        .ok_or_else(|| failure(StatusCode::NOT_FOUND, "no such item"))?;
    item.name = input.name;
    item.done = input.done;
    Ok(Json(item.clone()))
}

async fn patch_item(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
    Json(input): Json<PatchItem>,
) -> ApiResult<Json<Item>> {
    let mut items = db.write().await;
    let item = items
        .get_mut(&id)
        .ok_or_else(|| failure(StatusCode::NOT_FOUND, "no such item"))?;
    if let Some(name) = input.name {
        item.name = name;
    }
    if let Some(done) = input.done {
        item.done = done;
    }
    Ok(Json(item.clone()))
}

async fn delete_item(State(db): State<Db>, Path(id): Path<Uuid>) -> ApiResult<StatusCode> {
    let mut items = db.write().await;
    items
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or_else(|| failure(StatusCode::NOT_FOUND, "no such item"))
}

async fn echo(method: Method, uri: Uri, headers: HeaderMap, body: String) -> Json<Echo> {
    let headers: BTreeMap<String, String> = headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();
    Json(Echo {
        method: method.to_string(),
        path: uri.path().to_string(),
        headers,
        body,
    })
}

async fn broken() -> (StatusCode, &'static str) {
    (StatusCode::OK, "this is not json")
}

async fn slow() -> Json<Value> {
    tokio::time::sleep(SLOW_DELAY).await;
    Json(json!({ "slow": true }))
}
