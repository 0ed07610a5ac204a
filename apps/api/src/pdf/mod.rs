/// PDF export: hands a rendered HTML document to the headless-browser worker
/// and returns the PDF bytes untouched.
///
/// The converter is a trait so route handlers and tests never depend on a running
/// worker. `PdfWorkerClient` is the production implementation.
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

const GENERATE_PDF_PATH: &str = "/generate-pdf";
const MAX_RETRIES: u32 = 3;
const INITIAL_BACKOFF: Duration = Duration::from_secs(1);

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("PDF worker error (status {status}): {message}")]
    Worker { status: u16, message: String },

    #[error("PDF worker returned an empty body")]
    EmptyBody,

    #[error("PDF worker unavailable after {retries} attempts: {last}")]
    RetriesExhausted {
        retries: u32,
        #[source]
        last: Box<PdfError>,
    },
}

/// Converts a self-contained HTML document into PDF bytes.
#[async_trait]
pub trait PdfConverter: Send + Sync {
    async fn convert(&self, html: &str) -> Result<Bytes, PdfError>;
}

#[derive(Debug, Serialize)]
struct GeneratePdfRequest<'a> {
    html: &'a str,
}

/// Outcome of a single failed call to the worker.
enum Failure {
    /// Transport error or 5xx: worth another attempt.
    Transient(PdfError),
    Permanent(PdfError),
}

/// Client for the PDF worker's `POST /generate-pdf` endpoint.
#[derive(Clone)]
pub struct PdfWorkerClient {
    client: Client,
    endpoint: String,
    initial_backoff: Duration,
}

impl PdfWorkerClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, PdfError> {
        Ok(Self {
            // Internal service: bypass any system proxy.
            client: Client::builder().timeout(timeout).no_proxy().build()?,
            endpoint: endpoint_url(base_url),
            initial_backoff: INITIAL_BACKOFF,
        })
    }

    /// Overrides the delay before the first retry. Later retries double it.
    #[cfg(test)]
    pub fn with_initial_backoff(mut self, delay: Duration) -> Self {
        self.initial_backoff = delay;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn attempt(&self, request_body: &GeneratePdfRequest<'_>) -> Result<Bytes, Failure> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request_body)
            .send()
            .await
            .map_err(|e| Failure::Transient(PdfError::Http(e)))?;

        let status = response.status();

        if status.is_server_error() {
            let body = response.text().await.unwrap_or_default();
            warn!("PDF worker returned {}: {}", status, body);
            return Err(Failure::Transient(PdfError::Worker {
                status: status.as_u16(),
                message: body,
            }));
        }

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(Failure::Permanent(PdfError::Worker {
                status: status.as_u16(),
                message,
            }));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Failure::Permanent(PdfError::Http(e)))?;
        if bytes.is_empty() {
            return Err(Failure::Permanent(PdfError::EmptyBody));
        }
        Ok(bytes)
    }
}

#[async_trait]
impl PdfConverter for PdfWorkerClient {
    /// Retries transport failures and 5xx responses with exponential backoff.
    async fn convert(&self, html: &str) -> Result<Bytes, PdfError> {
        let request_body = GeneratePdfRequest { html };
        let mut attempt = 1;

        loop {
            match self.attempt(&request_body).await {
                Ok(bytes) => {
                    debug!(
                        attempt,
                        html_bytes = html.len(),
                        pdf_bytes = bytes.len(),
                        "PDF worker call succeeded"
                    );
                    return Ok(bytes);
                }
                Err(Failure::Permanent(e)) => return Err(e),
                Err(Failure::Transient(e)) if attempt >= MAX_RETRIES => {
                    return Err(PdfError::RetriesExhausted {
                        retries: MAX_RETRIES,
                        last: Box::new(e),
                    });
                }
                Err(Failure::Transient(e)) => {
                    // Exponential backoff: 1x, 2x the initial delay
                    let delay = self.initial_backoff * (1 << (attempt - 1));
                    warn!(
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        error = %e,
                        "PDF worker call failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }
}

fn endpoint_url(base_url: &str) -> String {
    format!("{}{GENERATE_PDF_PATH}", base_url.trim_end_matches('/'))
}
