use anyhow::Context;
use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::layout::{self, page_fill, FlowBudget, HeuristicEstimator, Page};
use crate::models::{ResumeContent, ThemeConfig};
use crate::render;
use crate::state::AppState;

const PDF_FILENAME: &str = "resume.pdf";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderRequest {
    pub resume: ResumeContent,
    #[serde(default)]
    pub theme: ThemeConfig,
}

#[derive(Debug, Deserialize)]
pub struct HtmlExportRequest {
    pub html: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LayoutResponse<'a> {
    page_count: usize,
    budget: FlowBudget,
    pages: Vec<Page<'a>>,
    fill: Vec<page_fill::PageFillReport>,
}

/// POST /api/v1/layout
pub async fn handle_layout(
    State(state): State<AppState>,
    Json(req): Json<RenderRequest>,
) -> Result<Json<Value>, AppError> {
    req.theme.validate().map_err(AppError::Validation)?;

    let geometry = state.page_geometry.clone();
    let plan = tokio::task::spawn_blocking(move || {
        let pages = layout::layout_with(&req.resume, &req.theme, &geometry, &HeuristicEstimator);
        let budget = FlowBudget::new(&geometry, &HeuristicEstimator);
        let fill = page_fill::analyze_page_fill(&pages, &budget);
        serde_json::to_value(LayoutResponse {
            page_count: pages.len(),
            budget,
            pages,
            fill,
        })
    })
    .await
    .context("layout task panicked")?
    .context("failed to serialize page plan")?;

    Ok(Json(plan))
}

/// POST /api/v1/render/html
pub async fn handle_render_html(
    State(state): State<AppState>,
    Json(req): Json<RenderRequest>,
) -> Result<Html<String>, AppError> {
    Ok(Html(render_document(&state, req).await?))
}

/// POST /api/v1/render/pdf
pub async fn handle_render_pdf(
    State(state): State<AppState>,
    Json(req): Json<RenderRequest>,
) -> Result<impl IntoResponse, AppError> {
    let html = render_document(&state, req).await?;
    let pdf = state.pdf.convert(&html).await?;
    Ok(pdf_response(pdf))
}

/// POST /api/v1/pdf
/// Converts a document the client already rendered.
pub async fn handle_export_html(
    State(state): State<AppState>,
    Json(req): Json<HtmlExportRequest>,
) -> Result<impl IntoResponse, AppError> {
    if req.html.trim().is_empty() {
        return Err(AppError::Validation("html must not be empty".to_string()));
    }
    let pdf = state.pdf.convert(&req.html).await?;
    Ok(pdf_response(pdf))
}

async fn render_document(state: &AppState, req: RenderRequest) -> Result<String, AppError> {
    req.theme.validate().map_err(AppError::Validation)?;

    let geometry = state.page_geometry.clone();
    let background = state.config.default_background_url.clone();
    let base_href = state.config.asset_base_url.clone();
    let document = tokio::task::spawn_blocking(move || {
        let rendered = render::render_resume(&req.resume, &req.theme, &geometry, &background);
        tracing::debug!(
            page_count = rendered.page_count,
            html_bytes = rendered.html.len(),
            "Rendered resume"
        );
        render::render_document(
            &rendered.html,
            &req.resume.personal_details.full_name,
            base_href.as_deref(),
        )
    })
    .await
    .context("render task panicked")?;

    Ok(document)
}

fn pdf_response(pdf: bytes::Bytes) -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{PDF_FILENAME}\""),
            ),
        ],
        pdf,
    )
}
