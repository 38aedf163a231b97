use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use macetero_server::app::create_router;
use macetero_server::configs::Storage;
use macetero_server::tests::setup_test_db;
use tower::ServiceExt;

pub struct MockApp {
    pub router: Router,
    pub storage: Arc<Storage>,
}

impl MockApp {
    pub async fn new() -> Self {
        let storage = setup_test_db().await;

        Self {
            router: create_router(storage.clone()),
            storage,
        }
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        let request = Request::builder()
            .uri(uri)
            .method(Method::GET)
            .body(Body::empty())
            .unwrap();

        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn get_json(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = self.get(uri).await;
        let status = response.status();

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        (status, serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null))
    }
}
