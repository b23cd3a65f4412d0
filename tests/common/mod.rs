#![allow(dead_code)]

use std::net::SocketAddr;
use std::path::Path;
use std::process::Command as ProcCommand;
use std::sync::{Arc, Mutex};

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde_json::{json, Value};
use tokio::task::JoinHandle;
use url::Url;

/// In-process stand-in for the remote quote source.
#[derive(Clone, Default)]
pub struct FakeRemote {
    pub posts: Arc<Mutex<Vec<Value>>>,
    pub received: Arc<Mutex<Vec<Value>>>,
    pub fail_with: Arc<Mutex<Option<StatusCode>>>,
}

impl FakeRemote {
    pub fn with_posts(posts: &[(u64, &str)]) -> Self {
        let remote = Self::default();
        *remote.posts.lock().unwrap() = posts
            .iter()
            .map(|(id, title)| json!({"userId": 1, "id": id, "title": title, "body": "..."}))
            .collect();
        remote
    }

    pub fn set_title(&self, id: u64, title: &str) {
        let mut posts = self.posts.lock().unwrap();
        for post in posts.iter_mut() {
            if post["id"] == json!(id) {
                post["title"] = json!(title);
            }
        }
    }

    pub fn fail(&self, status: StatusCode) {
        *self.fail_with.lock().unwrap() = Some(status);
    }

    /// Bind on an ephemeral port and return the `/posts` endpoint.
    pub async fn start(self) -> (Url, JoinHandle<()>) {
        let app = Router::new()
            .route("/posts", get(list_posts).post(create_post))
            .with_state(self);
        let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
            .await
            .expect("bind fake remote");
        let addr = listener.local_addr().expect("local addr");
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve fake remote");
        });
        let url = Url::parse(&format!("http://{addr}/posts")).expect("endpoint url");
        (url, handle)
    }
}

async fn list_posts(State(remote): State<FakeRemote>) -> Result<Json<Value>, StatusCode> {
    if let Some(status) = *remote.fail_with.lock().unwrap() {
        return Err(status);
    }
    Ok(Json(Value::Array(remote.posts.lock().unwrap().clone())))
}

async fn create_post(
    State(remote): State<FakeRemote>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), StatusCode> {
    if let Some(status) = *remote.fail_with.lock().unwrap() {
        return Err(status);
    }
    remote.received.lock().unwrap().push(body.clone());
    let mut ack = body;
    ack["id"] = json!(101);
    Ok((StatusCode::CREATED, Json(ack)))
}

/// The quotesync binary pointed at a scratch data dir and an unreachable remote.
pub fn base_cmd(data_dir: &Path) -> ProcCommand {
    let mut command = ProcCommand::new(env!("CARGO_BIN_EXE_quotesync"));
    command
        .env("DOTENV_PATH", data_dir.join("missing.env"))
        .arg("--data-dir")
        .arg(data_dir)
        .arg("--storage")
        .arg("file")
        .arg("--remote-url")
        .arg("http://127.0.0.1:9/posts");
    command
}
