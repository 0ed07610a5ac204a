// Content-flow pagination engine.
// Pure and synchronous: (ResumeContent, ThemeConfig) -> Vec<Page>, recomputed from
// scratch on every call. Callers on the async runtime wrap it in spawn_blocking.

pub mod assembler;
pub mod blocks;
pub mod estimator;
pub mod flow;
pub mod geometry;
pub mod page_fill;

use tracing::{debug, warn};

use crate::models::{ResumeContent, ThemeConfig};

// Re-export the public API consumed by the renderer and the route handlers.
pub use assembler::Page;
pub use blocks::{BlockKind, ContentBlock, Section};
pub use estimator::{HeightEstimator, HeuristicEstimator, CALIBRATED_FONT_SIZE_PX};
pub use flow::FlowBudget;
pub use geometry::{default_page_geometry, PageGeometry};

/// Paginates a résumé. Always returns at least one page.
///
/// Left and right columns are flowed independently and merged afterwards; the page
/// count is whichever column needs more pages.
pub fn layout_with<'a>(
    content: &'a ResumeContent,
    theme: &'a ThemeConfig,
    geometry: &PageGeometry,
    estimator: &dyn HeightEstimator,
) -> Vec<Page<'a>> {
    if let Some(size) = theme.typography.base_size_px() {
        if (size - CALIBRATED_FONT_SIZE_PX).abs() > f32::EPSILON {
            warn!(
                base_font_px = size,
                calibrated_px = CALIBRATED_FONT_SIZE_PX,
                "Height estimates are calibrated for the default font size; pagination may drift"
            );
        }
    }

    let budget = FlowBudget::new(geometry, estimator);
    let columns = blocks::build_columns(content, theme, estimator);
    let left_blocks = columns.left.len();
    let right_blocks = columns.right.len();

    let left = flow::plan_column(columns.left, &budget);
    let right = flow::plan_column(columns.right, &budget);

    debug!(
        left_blocks,
        right_blocks,
        left_pages = left.page_count(),
        right_pages = right.page_count(),
        "Planned column flow"
    );

    assembler::assemble_pages(left, right)
}
