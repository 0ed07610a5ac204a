//! Content blocks and the builder that turns a résumé into two column sequences.
//!
//! Blocks borrow from the `ResumeContent` / `ThemeConfig` snapshot they were built from
//! and live only for one layout pass.

use serde::Serialize;

use crate::layout::estimator::HeightEstimator;
use crate::models::{
    Certification, Education, Experience, FormattedText, Project, ResumeContent, Skill,
    ThemeConfig,
};

/// Which résumé section a heading introduces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Experience,
    Education,
    Projects,
    Profile,
    Skills,
    Certifications,
}

/// One unsplittable unit of content.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockKind<'a> {
    SectionTitle { section: Section, text: &'a str },
    ExperienceItem { item: &'a Experience },
    EducationItem { item: &'a Education },
    ProjectItem { item: &'a Project },
    ProfileText { text: &'a FormattedText },
    SkillsGroup { category: &'a str, skills: Vec<&'a Skill> },
    CertificationItem { item: &'a Certification },
}

/// A block tagged with its estimated height in page-pixels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentBlock<'a> {
    #[serde(flatten)]
    pub kind: BlockKind<'a>,
    pub height: u32,
}

impl<'a> ContentBlock<'a> {
    pub fn new(kind: BlockKind<'a>, height: u32) -> Self {
        Self { kind, height }
    }
}

/// The two ordered block sequences feeding the flow planner.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnBlocks<'a> {
    pub left: Vec<ContentBlock<'a>>,
    pub right: Vec<ContentBlock<'a>>,
}

/// Builds both columns.
///
/// Left: Experience, Education, Projects. Right: Profile, Skills, Certifications.
/// Sections with no records emit nothing at all, not even their title.
pub fn build_columns<'a>(
    content: &'a ResumeContent,
    theme: &'a ThemeConfig,
    estimator: &dyn HeightEstimator,
) -> ColumnBlocks<'a> {
    ColumnBlocks {
        left: build_left_column(content, theme, estimator),
        right: build_right_column(content, theme, estimator),
    }
}

pub fn build_left_column<'a>(
    content: &'a ResumeContent,
    theme: &'a ThemeConfig,
    estimator: &dyn HeightEstimator,
) -> Vec<ContentBlock<'a>> {
    let labels = &theme.section_labels;
    let mut blocks = Vec::new();

    if !content.experience.is_empty() {
        blocks.push(title(Section::Experience, labels.experience(), estimator));
        blocks.extend(content.experience.iter().map(|item| {
            ContentBlock::new(
                BlockKind::ExperienceItem { item },
                estimator.experience_item(item.description.char_len()),
            )
        }));
    }

    if !content.education.is_empty() {
        blocks.push(title(Section::Education, labels.education(), estimator));
        blocks.extend(content.education.iter().map(|item| {
            ContentBlock::new(BlockKind::EducationItem { item }, estimator.education_item())
        }));
    }

    if !content.projects.is_empty() {
        blocks.push(title(Section::Projects, labels.projects(), estimator));
        blocks.extend(content.projects.iter().map(|item| {
            ContentBlock::new(
                BlockKind::ProjectItem { item },
                estimator.project_item(item.description.char_len()),
            )
        }));
    }

    blocks
}

pub fn build_right_column<'a>(
    content: &'a ResumeContent,
    theme: &'a ThemeConfig,
    estimator: &dyn HeightEstimator,
) -> Vec<ContentBlock<'a>> {
    let labels = &theme.section_labels;
    let mut blocks = Vec::new();

    let summary = &content.personal_details.summary;
    if !summary.is_blank() {
        blocks.push(title(Section::Profile, labels.profile(), estimator));
        blocks.push(ContentBlock::new(
            BlockKind::ProfileText { text: summary },
            estimator.profile_text(summary.char_len()),
        ));
    }

    if !content.skills.is_empty() {
        blocks.push(title(Section::Skills, labels.skills(), estimator));
        for (category, skills) in group_skills(&content.skills, labels.other_skills()) {
            let height = estimator.skills_group(skills.len());
            blocks.push(ContentBlock::new(
                BlockKind::SkillsGroup { category, skills },
                height,
            ));
        }
    }

    if !content.certifications.is_empty() {
        blocks.push(title(
            Section::Certifications,
            labels.certifications(),
            estimator,
        ));
        blocks.extend(content.certifications.iter().map(|item| {
            ContentBlock::new(
                BlockKind::CertificationItem { item },
                estimator.certification_item(),
            )
        }));
    }

    blocks
}

/// Groups skills by category, categories in first-seen order, skills in input order.
/// Skills with no (or a blank) category land in `fallback`.
pub fn group_skills<'a>(skills: &'a [Skill], fallback: &'a str) -> Vec<(&'a str, Vec<&'a Skill>)> {
    let mut groups: Vec<(&'a str, Vec<&'a Skill>)> = Vec::new();
    for skill in skills {
        let category = skill
            .category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(fallback);
        match groups.iter_mut().find(|(name, _)| *name == category) {
            Some((_, members)) => members.push(skill),
            None => groups.push((category, vec![skill])),
        }
    }
    groups
}

fn title<'a>(section: Section, text: &'a str, estimator: &dyn HeightEstimator) -> ContentBlock<'a> {
    ContentBlock::new(
        BlockKind::SectionTitle { section, text },
        estimator.section_title(),
    )
}
