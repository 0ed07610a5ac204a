//! Page fill analysis: reports how much of each page column the flow consumed.
//!
//! Diagnostic only: the report never changes placement. A column can only overflow
//! when a single block is taller than the space a fresh page offers, since the
//! planner moves every other overflowing block to the next page.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::layout::assembler::Page;
use crate::layout::blocks::ContentBlock;
use crate::layout::flow::FlowBudget;

// ────────────────────────────────────────────────────────────────────────────
// Types
// ────────────────────────────────────────────────────────────────────────────

/// Fill verdict for one column of one page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum PageFillVerdict {
    /// Everything placed on this page fits inside `H`.
    Fits,
    /// An oversized block pushes the column past `H` by `overflow_px`.
    Overflow {
        #[serde(rename = "overflowPx")]
        overflow_px: u32,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnFill {
    pub block_count: usize,
    /// Starting offset (header or spacer) plus every block height.
    pub used_px: u32,
    pub available_px: u32,
    /// `used_px / available_px`; above 1.0 when overflowing.
    pub fill_fraction: f32,
    #[serde(flatten)]
    pub verdict: PageFillVerdict,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageFillReport {
    pub page_index: usize,
    pub left: ColumnFill,
    pub right: ColumnFill,
}

impl PageFillReport {
    pub fn overflows(&self) -> bool {
        self.left.verdict != PageFillVerdict::Fits || self.right.verdict != PageFillVerdict::Fits
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core functions
// ────────────────────────────────────────────────────────────────────────────

/// Analyzes every page column against the flow budget.
pub fn analyze_page_fill(pages: &[Page<'_>], budget: &FlowBudget) -> Vec<PageFillReport> {
    pages
        .iter()
        .map(|page| {
            let offset = budget.offset_for_page(page.index);
            let report = PageFillReport {
                page_index: page.index,
                left: analyze_column(&page.left, offset, budget.usable_height),
                right: analyze_column(&page.right, offset, budget.usable_height),
            };
            if report.overflows() {
                warn!(
                    page = page.index,
                    left_used_px = report.left.used_px,
                    right_used_px = report.right.used_px,
                    available_px = budget.usable_height,
                    "Page column overflows its usable height (oversized block)"
                );
            }
            report
        })
        .collect()
}

fn analyze_column(blocks: &[ContentBlock<'_>], offset: u32, available_px: u32) -> ColumnFill {
    let used_px = blocks
        .iter()
        .fold(offset, |used, block| used.saturating_add(block.height));

    let verdict = if used_px > available_px {
        PageFillVerdict::Overflow {
            overflow_px: used_px - available_px,
        }
    } else {
        PageFillVerdict::Fits
    };

    ColumnFill {
        block_count: blocks.len(),
        used_px,
        available_px,
        fill_fraction: used_px as f32 / available_px.max(1) as f32,
        verdict,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::assembler::assemble_pages;
    use crate::layout::blocks::{BlockKind, Section};
    use crate::layout::flow::plan_column;

    const BUDGET: FlowBudget = FlowBudget {
        usable_height: 1043,
        first_page_offset: 250,
        continuation_offset: 80,
    };

    fn blocks(heights: &[u32]) -> Vec<ContentBlock<'static>> {
        heights
            .iter()
            .map(|h| {
                ContentBlock::new(
                    BlockKind::SectionTitle {
                        section: Section::Education,
                        text: "t",
                    },
                    *h,
                )
            })
            .collect()
    }

    #[test]
    fn test_empty_page_counts_only_header() {
        let pages = assemble_pages(plan_column(vec![], &BUDGET), plan_column(vec![], &BUDGET));
        let report = analyze_page_fill(&pages, &BUDGET);
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].left.used_px, 250);
        assert_eq!(report[0].left.block_count, 0);
        assert_eq!(report[0].left.verdict, PageFillVerdict::Fits);
        assert!(!report[0].overflows());
    }

    #[test]
    fn test_continuation_page_uses_spacer_offset() {
        let pages = assemble_pages(
            plan_column(blocks(&[700, 500]), &BUDGET),
            plan_column(vec![], &BUDGET),
        );
        let report = analyze_page_fill(&pages, &BUDGET);
        assert_eq!(report[1].left.used_px, 580);
        assert_eq!(report[1].right.used_px, 80);
        assert!((report[0].left.fill_fraction - 950.0 / 1043.0).abs() < 1e-4);
    }

    #[test]
    fn test_oversized_block_reports_overflow() {
        let pages = assemble_pages(
            plan_column(vec![], &BUDGET),
            plan_column(blocks(&[1200]), &BUDGET),
        );
        let report = analyze_page_fill(&pages, &BUDGET);
        assert_eq!(report.len(), 2);
        assert_eq!(
            report[1].right.verdict,
            PageFillVerdict::Overflow { overflow_px: 80 + 1200 - 1043 }
        );
        assert!(report[1].overflows());
        assert!(!report[0].overflows());
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let pages = assemble_pages(
            plan_column(blocks(&[100]), &BUDGET),
            plan_column(blocks(&[1200]), &BUDGET),
        );
        let report = analyze_page_fill(&pages, &BUDGET);
        let json = serde_json::to_value(&report[1]).unwrap();
        assert_eq!(json["pageIndex"], 1);
        assert_eq!(json["right"]["blockCount"], 1);
        assert_eq!(json["right"]["usedPx"], 1280);
        assert_eq!(json["right"]["availablePx"], 1043);
        assert_eq!(json["right"]["verdict"], "overflow");
        assert_eq!(json["right"]["overflowPx"], 237);
        assert!(json["right"].get("used_px").is_none());

        let budget = serde_json::to_value(BUDGET).unwrap();
        assert_eq!(budget["usableHeight"], 1043);
        assert_eq!(budget["firstPageOffset"], 250);
        assert_eq!(budget["continuationOffset"], 80);
    }
}
