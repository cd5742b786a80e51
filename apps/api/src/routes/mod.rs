pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::persistence::handlers;
use crate::public::handlers as public_handlers;
use crate::render::handlers as render_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.config.max_body_bytes);

    Router::new()
        .route("/health", get(health::health_handler))
        // Owner API, keyed by caller identity
        .route(
            "/api/v1/resume",
            get(handlers::handle_load).put(handlers::handle_save),
        )
        .route(
            "/api/v1/resume/backup",
            get(handlers::handle_download_backup),
        )
        .route(
            "/api/v1/resume/backup/import",
            post(handlers::handle_import_backup),
        )
        .route("/api/v1/resume/share", get(handlers::handle_share))
        .route("/api/v1/resume/photo", post(handlers::handle_upload_photo))
        // Preview rendering
        .route("/api/v1/render", post(render_handlers::handle_render))
        // Public read path
        .route(
            "/api/v1/public/:slug",
            get(public_handlers::handle_public_resume),
        )
        .route(
            "/api/v1/public/:slug/document",
            get(public_handlers::handle_public_document),
        )
        .route(
            "/api/v1/public/:slug/meta",
            get(public_handlers::handle_public_metadata),
        )
        .layer(body_limit)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::persistence::MemoryResumeStore;

    fn app() -> Router {
        build_router(AppState {
            store: Arc::new(MemoryResumeStore::new()),
            config: Config {
                public_base_url: "https://cv.example.com".to_string(),
                ..Config::default()
            },
        })
    }

    fn request(method: Method, uri: &str, user: Option<&str>, body: Option<Value>) -> Request<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(user) = user {
            builder = builder.header("x-user-id", user);
        }
        match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    async fn send(app: &Router, req: Request<Body>) -> Response {
        app.clone().oneshot(req).await.unwrap()
    }

    async fn json_body(resp: Response) -> Value {
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn resume(slug: &str) -> Value {
        json!({
            "name": "Erik",
            "slug": slug,
            "themeColor": "#7c3aed",
            "skills": "Rust, SQL",
            "experienceEntries": [{ "id": "1", "company": "Acme" }],
            "educationEntries": []
        })
    }

    #[tokio::test]
    async fn test_health() {
        let resp = send(&app(), request(Method::GET, "/health", None, None)).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(json_body(resp).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_load_before_save_is_null_not_error() {
        let resp = send(&app(), request(Method::GET, "/api/v1/resume", Some("u1"), None)).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(json_body(resp).await, json!({ "resume": null }));
    }

    #[tokio::test]
    async fn test_save_then_load_per_identity() {
        let app = app();
        let resp = send(&app, request(Method::PUT, "/api/v1/resume", Some("u1"), Some(resume("erik")))).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(json_body(resp).await["outcome"], "created");

        let resp = send(&app, request(Method::PUT, "/api/v1/resume", Some("u1"), Some(resume("")))).await;
        assert_eq!(json_body(resp).await["outcome"], "updated");

        let resp = send(&app, request(Method::GET, "/api/v1/resume", Some("u1"), None)).await;
        let body = json_body(resp).await;
        assert_eq!(body["resume"]["name"], "Erik");
        assert_eq!(body["resume"]["slug"], "");

        let resp = send(&app, request(Method::GET, "/api/v1/resume", Some("u2"), None)).await;
        assert_eq!(json_body(resp).await["resume"], Value::Null);
    }

    #[tokio::test]
    async fn test_missing_identity_uses_fallback_user() {
        let app = app();
        send(&app, request(Method::PUT, "/api/v1/resume", None, Some(resume("")))).await;
        let resp = send(&app, request(Method::GET, "/api/v1/resume", Some("local-user"), None)).await;
        assert_eq!(json_body(resp).await["resume"]["name"], "Erik");
    }

    #[tokio::test]
    async fn test_public_lookup() {
        let app = app();
        let resp = send(&app, request(Method::GET, "/api/v1/public/erik", None, None)).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(resp).await["error"]["code"], "NOT_FOUND");

        send(&app, request(Method::PUT, "/api/v1/resume", Some("u1"), Some(resume("erik")))).await;
        // A later save without a slug keeps the published link
        send(&app, request(Method::PUT, "/api/v1/resume", Some("u1"), Some(resume("")))).await;

        let resp = send(&app, request(Method::GET, "/api/v1/public/erik", None, None)).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = json_body(resp).await;
        assert_eq!(body["resume"]["name"], "Erik");
        assert_eq!(body["themeColor"], "#7c3aed");
        assert_eq!(body["photoUrl"], Value::Null);

        let resp = send(&app, request(Method::GET, "/api/v1/public/erik/meta", None, None)).await;
        assert_eq!(json_body(resp).await["title"], "Resume of Erik");

        let resp = send(&app, request(Method::GET, "/api/v1/public/erik/document", None, None)).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(json_body(resp).await["pages"][0]["size"], "A4");
    }

    #[tokio::test]
    async fn test_slug_conflict_between_users() {
        let app = app();
        send(&app, request(Method::PUT, "/api/v1/resume", Some("u1"), Some(resume("erik")))).await;
        let resp = send(&app, request(Method::PUT, "/api/v1/resume", Some("u2"), Some(resume("erik")))).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_free_text_slug_saves_and_resolves() {
        let app = app();
        let resp = send(
            &app,
            request(Method::PUT, "/api/v1/resume", Some("u1"), Some(resume("erik.dev"))),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = send(&app, request(Method::GET, "/api/v1/public/erik.dev", None, None)).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(json_body(resp).await["resume"]["slug"], "erik.dev");

        let resp = send(&app, request(Method::GET, "/api/v1/resume/share", Some("u1"), None)).await;
        assert_eq!(json_body(resp).await["url"], "https://cv.example.com/u/erik.dev");
    }

    #[tokio::test]
    async fn test_share_requires_slug() {
        let app = app();
        let resp = send(&app, request(Method::GET, "/api/v1/resume/share", Some("u1"), None)).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        send(&app, request(Method::PUT, "/api/v1/resume", Some("u1"), Some(resume("erik")))).await;
        let resp = send(&app, request(Method::GET, "/api/v1/resume/share", Some("u1"), None)).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(json_body(resp).await["url"], "https://cv.example.com/u/erik");
    }

    #[tokio::test]
    async fn test_backup_download_and_import() {
        let app = app();
        let resp = send(&app, request(Method::GET, "/api/v1/resume/backup", Some("u1"), None)).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        send(&app, request(Method::PUT, "/api/v1/resume", Some("u1"), Some(resume("")))).await;
        let resp = send(&app, request(Method::GET, "/api/v1/resume/backup", Some("u1"), None)).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"resume-backup-Erik.json\""
        );
        let backup = json_body(resp).await;

        let resp = send(&app, request(Method::POST, "/api/v1/resume/backup/import", None, Some(backup))).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(json_body(resp).await["name"], "Erik");

        let resp = send(
            &app,
            request(Method::POST, "/api/v1/resume/backup/import", None, Some(json!({ "name": "x" }))),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_render_preview() {
        let body = json!({ "skills": "A, B ,, C", "experienceEntries": [] });
        let resp = send(&app(), request(Method::POST, "/api/v1/render", None, Some(body))).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let text = json_body(resp).await.to_string();
        assert!(text.contains("No experience added."));
        assert!(text.contains("• A") && text.contains("• B") && text.contains("• C"));
    }

    #[tokio::test]
    async fn test_photo_upload() {
        let boundary = "XBOUNDARYX";
        let body = format!(
            "--{boundary}\r\n\
             Content-Disposition: form-data; name=\"photo\"; filename=\"me.png\"\r\n\
             Content-Type: image/png\r\n\r\n\
             PNG\r\n\
             --{boundary}--\r\n"
        );
        let req = Request::builder()
            .method(Method::POST)
            .uri("/api/v1/resume/photo")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap();

        let resp = send(&app(), req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            json_body(resp).await["photoUrl"],
            "data:image/png;base64,UE5H"
        );
    }
}
