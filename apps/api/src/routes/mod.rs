pub mod health;
pub mod render;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Pagination
        .route("/api/v1/layout", post(render::handle_layout))
        // Rendering & export
        .route("/api/v1/render/html", post(render::handle_render_html))
        .route("/api/v1/render/pdf", post(render::handle_render_pdf))
        .route("/api/v1/pdf", post(render::handle_export_html))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use bytes::Bytes;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::layout::default_page_geometry;
    use crate::pdf::{PdfConverter, PdfError};

    const FAKE_PDF: &[u8] = b"%PDF-1.7\n%stub\n";

    /// Records the HTML it was given and answers with a fixed PDF.
    #[derive(Default)]
    struct RecordingConverter {
        received: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl PdfConverter for RecordingConverter {
        async fn convert(&self, html: &str) -> Result<Bytes, PdfError> {
            self.received.lock().unwrap().push(html.to_string());
            Ok(Bytes::from_static(FAKE_PDF))
        }
    }

    struct FailingConverter;

    #[async_trait]
    impl PdfConverter for FailingConverter {
        async fn convert(&self, _html: &str) -> Result<Bytes, PdfError> {
            Err(PdfError::Worker {
                status: 500,
                message: "browser crashed".to_string(),
            })
        }
    }

    fn app_with(pdf: Arc<dyn PdfConverter>) -> Router {
        build_router(AppState {
            config: Config::default(),
            pdf,
            page_geometry: default_page_geometry(),
        })
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn sample_resume(experiences: usize) -> Value {
        let experience: Vec<Value> = (0..experiences)
            .map(|i| {
                json!({
                    "id": format!("exp-{i}"),
                    "company": format!("Company {i}"),
                    "position": "Engineer",
                    "startDate": "2020",
                    "endDate": "2022",
                    "description": "d".repeat(400),
                })
            })
            .collect();
        json!({
            "personalDetails": { "fullName": "Ada Lovelace", "jobTitle": "Analyst" },
            "experience": experience,
            "skills": [
                { "id": "s1", "name": "Rust", "level": 5, "category": "Languages" },
                { "id": "s2", "name": "Git", "level": 4 }
            ]
        })
    }

    async fn body_bytes(response: axum::response::Response) -> Bytes {
        to_bytes(response.into_body(), usize::MAX).await.unwrap()
    }

    // ── health ──────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_health() {
        let app = app_with(Arc::new(RecordingConverter::default()));
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(body["status"], "ok");
    }

    // ── layout ──────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_layout_returns_page_plan_and_fill_report() {
        let app = app_with(Arc::new(RecordingConverter::default()));
        let response = app
            .oneshot(post_json(
                "/api/v1/layout",
                json!({ "resume": sample_resume(8) }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(body["pageCount"], 2);
        assert_eq!(body["budget"]["usableHeight"], 1043);
        assert_eq!(body["pages"][0]["isFirst"], true);
        assert_eq!(body["pages"][0]["left"][0]["type"], "section_title");
        assert_eq!(body["pages"][0]["left"][1]["type"], "experience_item");
        assert_eq!(body["pages"][0]["left"][1]["height"], 170);
        assert_eq!(body["fill"][0]["left"]["verdict"], "fits");
        assert_eq!(body["fill"][0]["pageIndex"], 0);
        assert_eq!(body["fill"][0]["left"]["usedPx"], 250 + 40 + 4 * 170);
        assert_eq!(body["fill"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_empty_resume_layout_has_one_page() {
        let app = app_with(Arc::new(RecordingConverter::default()));
        let response = app
            .oneshot(post_json("/api/v1/layout", json!({ "resume": {} })))
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(body["pageCount"], 1);
    }

    #[tokio::test]
    async fn test_negative_column_width_is_rejected() {
        let app = app_with(Arc::new(RecordingConverter::default()));
        let response = app
            .oneshot(post_json(
                "/api/v1/layout",
                json!({
                    "resume": {},
                    "theme": { "columnConfig": { "leftColumnWidth": -10, "rightColumnWidth": 40 } }
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    // ── rendering ───────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_render_html_returns_document() {
        let app = app_with(Arc::new(RecordingConverter::default()));
        let response = app
            .oneshot(post_json(
                "/api/v1/render/html",
                json!({ "resume": sample_resume(8) }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/html"));

        let html = String::from_utf8(body_bytes(response).await.to_vec()).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert_eq!(html.matches(r#"<div class="page" "#).count(), 2);
        assert!(html.contains(">Other</h4>"));
        assert!(html.contains(">Languages</h4>"));
    }

    #[tokio::test]
    async fn test_render_pdf_document_carries_asset_base_url() {
        let converter = Arc::new(RecordingConverter::default());
        let app = build_router(AppState {
            config: Config {
                asset_base_url: Some("https://cv.example.com/".to_string()),
                ..Config::default()
            },
            pdf: converter.clone(),
            page_geometry: default_page_geometry(),
        });
        let response = app
            .oneshot(post_json(
                "/api/v1/render/pdf",
                json!({ "resume": sample_resume(1) }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let received = converter.received.lock().unwrap();
        assert!(received[0].contains(r#"<base href="https://cv.example.com/">"#));
        assert!(received[0].contains("url('/backgrounds/ondas.png')"));
    }

    #[tokio::test]
    async fn test_render_pdf_forwards_document_and_returns_bytes_unchanged() {
        let converter = Arc::new(RecordingConverter::default());
        let app = app_with(converter.clone());
        let response = app
            .oneshot(post_json(
                "/api/v1/render/pdf",
                json!({ "resume": sample_resume(2), "theme": {} }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/pdf");
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"resume.pdf\""
        );
        assert_eq!(&body_bytes(response).await[..], FAKE_PDF);

        let received = converter.received.lock().unwrap();
        assert_eq!(received.len(), 1);
        assert!(received[0].contains("Ada Lovelace"));
    }

    // ── raw html export ─────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_export_html_passes_markup_through() {
        let converter = Arc::new(RecordingConverter::default());
        let app = app_with(converter.clone());
        let response = app
            .oneshot(post_json(
                "/api/v1/pdf",
                json!({ "html": "<html><body>hi</body></html>" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            converter.received.lock().unwrap()[0],
            "<html><body>hi</body></html>"
        );
    }

    #[tokio::test]
    async fn test_export_blank_html_is_rejected() {
        let converter = Arc::new(RecordingConverter::default());
        let app = app_with(converter.clone());
        let response = app
            .oneshot(post_json("/api/v1/pdf", json!({ "html": "  \n" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(converter.received.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_worker_failure_maps_to_bad_gateway() {
        let app = app_with(Arc::new(FailingConverter));
        let response = app
            .oneshot(post_json(
                "/api/v1/render/pdf",
                json!({ "resume": sample_resume(1) }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(body["error"]["code"], "PDF_WORKER_ERROR");
    }
}
