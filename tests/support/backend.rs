use super::{post_json, user_json};

use axum::extract::{Multipart, Path, Query};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::net::TcpListener;

pub const PASSWORD: &str = "correct horse";
pub const ACCESS_TOKEN: &str = "token-123";

#[derive(Deserialize)]
struct Pagination {
    page: u32,
    limit: u32,
}

fn ok(data: Value) -> Json<Value> {
    Json(json!({"success": true, "message": "Fetched successfully", "data": data}))
}

fn rejected(status: StatusCode, message: &str) -> (StatusCode, Json<Value>) {
    (status, Json(json!({"success": false, "message": message, "data": null})))
}

async fn list_posts(Query(p): Query<Pagination>) -> Json<Value> {
    let first = (p.page.saturating_sub(1)) * p.limit;
    let posts: Vec<Value> = (first..first + p.limit)
        .map(|i| post_json(&format!("post-{i}"), u64::from(i), false, false))
        .collect();
    ok(Value::Array(posts))
}

async fn get_post(Path(id): Path<String>) -> impl IntoResponse {
    if id == "missing-id" {
        return rejected(StatusCode::NOT_FOUND, "not found").into_response();
    }
    if id == "sparse-id" {
        return ok(json!({
            "_id": id,
            "content": null,
            "tags": null,
            "likes": null,
            "comments": null,
            "author": {"name": null, "account": null}
        })).into_response();
    }
    ok(post_json(&id, 3, false, false)).into_response()
}

async fn posts_by_user(Path(username): Path<String>) -> Json<Value> {
    let mut post = post_json("by-user", 0, false, false);
    post["author"]["account"]["username"] = Value::String(username);
    ok(json!([post]))
}

async fn create_post(mut multipart: Multipart) -> impl IntoResponse {
    let mut content = String::new();
    let mut tags = Vec::new();
    let mut images = Vec::new();

    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_owned();
        let file_name = field.file_name().map(str::to_owned);
        let content_type = field.content_type().map(str::to_owned);
        let bytes = field.bytes().await.unwrap_or_default();

        if name == "content" {
            content = String::from_utf8_lossy(&bytes).into_owned();
        }
        else if name.starts_with("tags[") {
            tags.push(String::from_utf8_lossy(&bytes).into_owned());
        }
        else if name == "images" {
            images.push(json!({
                "_id": format!("img-{}", images.len()),
                "url": format!("/uploads/{}", file_name.unwrap_or_default()),
                "contentType": content_type,
                "size": bytes.len(),
            }));
        }
    }

    if content.is_empty() {
        return rejected(StatusCode::UNPROCESSABLE_ENTITY, "Content is required").into_response();
    }

    let mut post = post_json("created", 0, false, false);
    post["content"] = Value::String(content);
    post["tags"] = json!(tags);
    post["images"] = Value::Array(images);
    (StatusCode::CREATED, ok(post)).into_response()
}

async fn list_initiatives(Query(p): Query<Pagination>) -> Json<Value> {
    let initiatives: Vec<Value> = (0..p.limit)
        .map(|i| json!({"_id": format!("init-{}-{i}", p.page), "title": format!("Initiative {i}"), "goal": 100}))
        .collect();
    ok(Value::Array(initiatives))
}

#[derive(Deserialize)]
struct LoginBody {
    username: String,
    password: String,
}

async fn login(Json(body): Json<LoginBody>) -> impl IntoResponse {
    if body.password != PASSWORD {
        return rejected(StatusCode::UNAUTHORIZED, "Invalid user credentials").into_response();
    }
    ok(json!({"user": user_json("user-1", &body.username), "accessToken": ACCESS_TOKEN})).into_response()
}

async fn current_user(headers: HeaderMap) -> impl IntoResponse {
    let expected = format!("Bearer {ACCESS_TOKEN}");
    match headers.get(header::AUTHORIZATION).and_then(|v| v.to_str().ok()) {
        Some(auth) if auth == expected => ok(user_json("user-1", "jane")).into_response(),
        _ => rejected(StatusCode::UNAUTHORIZED, "Unauthorized request").into_response(),
    }
}

async fn get_initiative(Path(id): Path<String>, headers: HeaderMap) -> Json<Value> {
    let request_id = headers.get("x-request-id").and_then(|v| v.to_str().ok()).unwrap_or_default();
    ok(json!({"_id": id, "title": "River clean-up", "requestId": request_id}))
}

fn router() -> Router {
    Router::new()
        .route("/api/v1/post", get(list_posts))
        .route("/api/v1/post/", post(create_post))
        .route("/api/v1/post/:id", get(get_post))
        .route("/api/v1/post/get/u/:username", get(posts_by_user))
        .route("/api/v1/initiative", get(list_initiatives))
        .route("/api/v1/user/login", post(login))
        .route("/api/v1/user/current-user", get(current_user))
        .route("/api/v1/initiative/:id", get(get_initiative))
}

async fn serve(app: Router) -> anyhow::Result<String> {
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            log::error!("mock backend error: {e}");
        }
    });
    Ok(format!("http://{}:{}", addr.ip(), addr.port()))
}

/// Starts the mock backend and returns its base URL.
pub async fn spawn() -> anyhow::Result<String> {
    serve(router()).await
}

/// Starts a server that answers every request with the same status and body.
pub async fn spawn_fixed(status: StatusCode, body: &'static str) -> anyhow::Result<String> {
    serve(Router::new().fallback(move || async move { (status, body) })).await
}

/// A base URL nothing is listening on.
pub async fn closed_port() -> anyhow::Result<String> {
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(format!("http://{}:{}", addr.ip(), addr.port()))
}
