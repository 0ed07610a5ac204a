//! Merges two independently planned columns into one page sequence.

use serde::Serialize;

use crate::layout::blocks::ContentBlock;
use crate::layout::flow::ColumnPlan;

/// A single output page. Header and background are the renderer's concern.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<'a> {
    pub index: usize,
    pub is_first: bool,
    pub left: Vec<ContentBlock<'a>>,
    pub right: Vec<ContentBlock<'a>>,
}

/// `max(left, right)` pages; a column that ran out contributes empty lists.
///
/// Never returns fewer than one page.
pub fn assemble_pages<'a>(left: ColumnPlan<'a>, right: ColumnPlan<'a>) -> Vec<Page<'a>> {
    let page_count = left.page_count().max(right.page_count()).max(1);

    let mut left_pages = left.into_pages().into_iter();
    let mut right_pages = right.into_pages().into_iter();

    (0..page_count)
        .map(|index| Page {
            index,
            is_first: index == 0,
            left: left_pages.next().unwrap_or_default(),
            right: right_pages.next().unwrap_or_default(),
        })
        .collect()
}
