//! Height estimation for content blocks.
//!
//! Heights are whole page-pixels calibrated against the default 14px body font on an
//! A4 page at 96 DPI. Variable-length bodies use a linear word-wrap approximation:
//! `ceil(chars / chars_per_line) * line_height`. This intentionally ignores real glyph
//! widths, long unbreakable words, non-Latin scripts, and embedded markup.
//!
//! The constants are NOT rescaled when the theme changes the base font size, so
//! pagination can drift from the rendered output at non-default sizes.

/// Body font size (px) the heuristic constants were calibrated against.
pub const CALIBRATED_FONT_SIZE_PX: f32 = 14.0;

const HEADER: u32 = 250;
const SECTION_TITLE: u32 = 40;

const EXPERIENCE_BASE: u32 = 80;
const PROJECT_BASE: u32 = 70;
const DESCRIPTION_CHARS_PER_LINE: usize = 90;

const PROFILE_BASE: u32 = 50;
const PROFILE_CHARS_PER_LINE: usize = 100;

const TEXT_LINE_HEIGHT: u32 = 18;

const EDUCATION_ITEM: u32 = 60;
const CERTIFICATION_ITEM: u32 = 50;

const SKILLS_PER_ROW: usize = 2;
const SKILL_ROW_HEIGHT: u32 = 30;
const SKILL_GROUP_HEADER: u32 = 50;

/// Maps a block's kind and data to an estimated vertical footprint.
///
/// Implementations must be pure and deterministic and must never return zero. The
/// flow planner only ever sees the resulting heights, so a real measurement pass can
/// replace the heuristic without touching the planner.
pub trait HeightEstimator {
    /// Full header on page 1.
    fn header(&self) -> u32;
    fn section_title(&self) -> u32;
    /// `description_chars` is the character count of the raw description payload.
    fn experience_item(&self, description_chars: usize) -> u32;
    fn project_item(&self, description_chars: usize) -> u32;
    fn education_item(&self) -> u32;
    fn certification_item(&self) -> u32;
    fn profile_text(&self, text_chars: usize) -> u32;
    fn skills_group(&self, skill_count: usize) -> u32;
}

/// Character-count heuristic used by both preview and export.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicEstimator;

impl HeightEstimator for HeuristicEstimator {
    fn header(&self) -> u32 {
        HEADER
    }

    fn section_title(&self) -> u32 {
        SECTION_TITLE
    }

    fn experience_item(&self, description_chars: usize) -> u32 {
        wrapped_height(
            EXPERIENCE_BASE,
            description_chars,
            DESCRIPTION_CHARS_PER_LINE,
            TEXT_LINE_HEIGHT,
        )
    }

    fn project_item(&self, description_chars: usize) -> u32 {
        wrapped_height(
            PROJECT_BASE,
            description_chars,
            DESCRIPTION_CHARS_PER_LINE,
            TEXT_LINE_HEIGHT,
        )
    }

    fn education_item(&self) -> u32 {
        EDUCATION_ITEM
    }

    fn certification_item(&self) -> u32 {
        CERTIFICATION_ITEM
    }

    fn profile_text(&self, text_chars: usize) -> u32 {
        wrapped_height(PROFILE_BASE, text_chars, PROFILE_CHARS_PER_LINE, TEXT_LINE_HEIGHT)
    }

    fn skills_group(&self, skill_count: usize) -> u32 {
        wrapped_height(SKILL_GROUP_HEADER, skill_count, SKILLS_PER_ROW, SKILL_ROW_HEIGHT)
    }
}

/// `base + ceil(units / per_line) * line_height`, saturating on absurd inputs.
fn wrapped_height(base: u32, units: usize, per_line: usize, line_height: u32) -> u32 {
    let lines = u32::try_from(units.div_ceil(per_line)).unwrap_or(u32::MAX);
    base.saturating_add(lines.saturating_mul(line_height))
}
