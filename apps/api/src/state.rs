use std::sync::Arc;

use crate::config::Config;
use crate::layout::PageGeometry;
use crate::pdf::PdfConverter;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable HTML → PDF converter. Default: PdfWorkerClient.
    pub pdf: Arc<dyn PdfConverter>,
    /// Fixed A4 geometry shared by every layout pass.
    pub page_geometry: PageGeometry,
}
