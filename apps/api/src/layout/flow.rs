//! Column flow: greedy packing of one column's blocks into fixed-height pages.
//!
//! # Rules
//! - Page 1 starts with the header height already used; later pages start with the
//!   continuation offset.
//! - A block that would push the column past `H` moves, whole, to the next page.
//!   Blocks are never split.
//! - Section titles obey the same rule, so a title can end up last on a page
//!   (orphaned heading). No lookahead corrects this.
//! - A block taller than a whole page is still placed and overflows visually.
//!
//! Each column is planned on its own; see `assembler` for how they are merged.

use serde::Serialize;

use crate::layout::blocks::ContentBlock;
use crate::layout::estimator::HeightEstimator;
use crate::layout::geometry::PageGeometry;

/// Vertical budget shared by every column on every page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowBudget {
    /// `H`, identical on all pages.
    pub usable_height: u32,
    pub first_page_offset: u32,
    pub continuation_offset: u32,
}

impl FlowBudget {
    pub fn new(geometry: &PageGeometry, estimator: &dyn HeightEstimator) -> Self {
        Self {
            usable_height: geometry.usable_height_px,
            first_page_offset: estimator.header(),
            continuation_offset: geometry.continuation_offset_px,
        }
    }

    /// Height already consumed before the first block on page `index`.
    pub fn offset_for_page(&self, index: usize) -> u32 {
        if index == 0 {
            self.first_page_offset
        } else {
            self.continuation_offset
        }
    }
}

/// One column split into pages. Always holds at least page 0, possibly empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnPlan<'a> {
    pages: Vec<Vec<ContentBlock<'a>>>,
}

impl<'a> ColumnPlan<'a> {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Blocks placed on page `index`, or `None` past this column's last page.
    #[cfg(test)]
    pub fn page(&self, index: usize) -> Option<&[ContentBlock<'a>]> {
        self.pages.get(index).map(Vec::as_slice)
    }

    #[cfg(test)]
    pub fn pages(&self) -> &[Vec<ContentBlock<'a>>] {
        &self.pages
    }

    pub fn into_pages(self) -> Vec<Vec<ContentBlock<'a>>> {
        self.pages
    }
}

/// Packs `blocks` in order into pages under `budget`.
pub fn plan_column<'a>(blocks: Vec<ContentBlock<'a>>, budget: &FlowBudget) -> ColumnPlan<'a> {
    let mut pages: Vec<Vec<ContentBlock<'a>>> = vec![Vec::new()];
    let mut current_page = 0usize;
    let mut used_height = budget.offset_for_page(0);

    for block in blocks {
        if used_height.saturating_add(block.height) > budget.usable_height {
            current_page += 1;
            pages.push(Vec::new());
            used_height = budget.offset_for_page(current_page);
        }

        used_height = used_height.saturating_add(block.height);
        pages[current_page].push(block);
    }

    ColumnPlan { pages }
}
