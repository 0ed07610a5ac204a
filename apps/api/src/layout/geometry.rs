//! Fixed A4 page geometry shared by the flow planner and the page renderer.
//!
//! All values are CSS pixels at 96 DPI. A4 is 210mm × 297mm → 794px × 1123px.
//! Only this single geometry is supported; it is not user-configurable.

use serde::{Deserialize, Serialize};

/// Layout parameters for every page of a résumé.
///
/// `usable_height_px` is the flow budget `H`, identical on every page. Later pages
/// charge `continuation_offset_px` against it; page 1 charges the estimated header
/// height instead (see `HeightEstimator::header`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageGeometry {
    pub page_width_px: u32,
    pub page_height_px: u32,
    /// Space reserved for top + bottom margins.
    pub vertical_margin_px: u32,
    /// Flow budget `H` = page height − vertical margins.
    pub usable_height_px: u32,
    /// Column height already consumed on later pages (top padding + spacer).
    pub continuation_offset_px: u32,
    /// Rendered height of the spacer replacing the header on later pages.
    pub spacer_height_px: u32,
}

/// Returns the A4 geometry used for preview and export alike.
///
/// Assumes: 1123px page height, 80px combined vertical margin, 80px starting offset on
/// later pages (of which 60px is the rendered spacer).
pub fn default_page_geometry() -> PageGeometry {
    let page_height_px = 1123;
    let vertical_margin_px = 80;
    PageGeometry {
        page_width_px: 794,
        page_height_px,
        vertical_margin_px,
        usable_height_px: page_height_px - vertical_margin_px,
        continuation_offset_px: 80,
        spacer_height_px: 60,
    }
}
