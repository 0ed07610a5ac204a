//! Block → markup. Stateless and shared by both columns.
//!
//! Plain fields are HTML-escaped. `FormattedText` fields are emitted as received,
//! minus trailing empty paragraphs.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::layout::{BlockKind, ContentBlock, Section};
use crate::models::{Certification, Education, Experience, Project, Skill};

pub fn render_block(block: &ContentBlock<'_>) -> String {
    match &block.kind {
        BlockKind::SectionTitle { section, text } => format!(
            r#"<h3 class="section-title" data-section="{}">{}</h3>"#,
            section_key(*section),
            encode_text(text)
        ),
        BlockKind::ExperienceItem { item } => render_experience(item),
        BlockKind::EducationItem { item } => render_education(item),
        BlockKind::ProjectItem { item } => render_project(item),
        BlockKind::ProfileText { text } => format!(
            r#"<div class="profile-text rich-text" data-block="profile">{}</div>"#,
            text.trimmed()
        ),
        BlockKind::SkillsGroup { category, skills } => render_skills_group(category, skills),
        BlockKind::CertificationItem { item } => render_certification(item),
    }
}

/// Renders a column's blocks in order.
pub fn render_column(blocks: &[ContentBlock<'_>]) -> String {
    blocks.iter().map(render_block).collect()
}

fn render_experience(item: &Experience) -> String {
    let location = item
        .location
        .as_deref()
        .filter(|l| !l.trim().is_empty())
        .map(|l| format!("<span>• {}</span>", encode_text(l)))
        .unwrap_or_default();

    format!(
        concat!(
            r#"<div class="item" data-block="experience" data-id="{id}">"#,
            r#"<div class="item-title">{position}</div>"#,
            r#"<div class="item-subtitle">{company}</div>"#,
            r#"<div class="item-meta"><span>{dates}</span>{location}</div>"#,
            r#"<div class="item-description rich-text">{description}</div>"#,
            "</div>"
        ),
        id = encode_double_quoted_attribute(&item.id),
        position = encode_text(&item.position),
        company = encode_text(&item.company),
        dates = encode_text(&date_range(&item.start_date, &item.end_date)),
        location = location,
        description = item.description.trimmed(),
    )
}

fn render_education(item: &Education) -> String {
    format!(
        concat!(
            r#"<div class="item" data-block="education" data-id="{id}">"#,
            r#"<div class="item-title">{degree}</div>"#,
            r#"<div class="item-subtitle">{institution}</div>"#,
            r#"<div class="item-meta"><span>{dates}</span></div>"#,
            "</div>"
        ),
        id = encode_double_quoted_attribute(&item.id),
        degree = encode_text(&item.degree),
        institution = encode_text(&item.institution),
        dates = encode_text(&date_range(&item.start_date, &item.end_date)),
    )
}

fn render_project(item: &Project) -> String {
    let link = item
        .link
        .as_deref()
        .filter(|l| !l.trim().is_empty())
        .map(|l| {
            format!(
                r#"<a class="item-link" href="{}" target="_blank" rel="noreferrer">Link</a>"#,
                encode_double_quoted_attribute(l)
            )
        })
        .unwrap_or_default();

    format!(
        concat!(
            r#"<div class="item" data-block="project" data-id="{id}">"#,
            r#"<div class="item-header"><div class="item-title">{name}</div>{link}</div>"#,
            r#"<div class="item-description rich-text">{description}</div>"#,
            "</div>"
        ),
        id = encode_double_quoted_attribute(&item.id),
        name = encode_text(&item.name),
        link = link,
        description = item.description.trimmed(),
    )
}

fn render_skills_group(category: &str, skills: &[&Skill]) -> String {
    let tags: String = skills
        .iter()
        .map(|s| {
            format!(
                r#"<span class="skill-tag" data-id="{}">{}</span>"#,
                encode_double_quoted_attribute(&s.id),
                encode_text(&s.name)
            )
        })
        .collect();

    format!(
        concat!(
            r#"<div class="skills-group" data-block="skills">"#,
            r#"<h4 class="skill-category-title">{category}</h4>"#,
            r#"<div class="skills-list">{tags}</div>"#,
            "</div>"
        ),
        category = encode_text(category),
        tags = tags,
    )
}

fn render_certification(item: &Certification) -> String {
    format!(
        concat!(
            r#"<div class="item" data-block="certification" data-id="{id}">"#,
            r#"<div class="item-title">{name}</div>"#,
            r#"<div class="item-subtitle">{issuer}</div>"#,
            r#"<div class="item-meta">{date}</div>"#,
            "</div>"
        ),
        id = encode_double_quoted_attribute(&item.id),
        name = encode_text(&item.name),
        issuer = encode_text(&item.issuer),
        date = encode_text(&item.date),
    )
}

fn date_range(start: &str, end: &str) -> String {
    match (start.trim(), end.trim()) {
        ("", "") => String::new(),
        (start, "") => start.to_string(),
        ("", end) => end.to_string(),
        (start, end) => format!("{start} - {end}"),
    }
}

fn section_key(section: Section) -> &'static str {
    match section {
        Section::Experience => "experience",
        Section::Education => "education",
        Section::Projects => "projects",
        Section::Profile => "profile",
        Section::Skills => "skills",
        Section::Certifications => "certifications",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FormattedText;

    #[test]
    fn test_section_title() {
        let block = ContentBlock::new(
            BlockKind::SectionTitle {
                section: Section::Skills,
                text: "Skills & Tools",
            },
            40,
        );
        assert_eq!(
            render_block(&block),
            r#"<h3 class="section-title" data-section="skills">Skills &amp; Tools</h3>"#
        );
    }

    #[test]
    fn test_experience_passes_rich_text_through() {
        let item = Experience {
            id: "e1".to_string(),
            company: "Acme <Labs>".to_string(),
            position: "Engineer".to_string(),
            location: Some("Remote".to_string()),
            start_date: "01/2024".to_string(),
            end_date: "Present".to_string(),
            description: "<p><strong>Shipped</strong> it</p><p><br></p>".into(),
        };
        let html = render_block(&ContentBlock::new(BlockKind::ExperienceItem { item: &item }, 98));
        assert!(html.contains(r#"data-id="e1""#));
        assert!(html.contains("Acme &lt;Labs&gt;"));
        assert!(html.contains("<span>01/2024 - Present</span><span>• Remote</span>"));
        assert!(html.contains(
            r#"<div class="item-description rich-text"><p><strong>Shipped</strong> it</p></div>"#
        ));
    }

    #[test]
    fn test_experience_without_location_has_no_bullet() {
        let item = Experience {
            id: "e2".to_string(),
            start_date: "2019".to_string(),
            ..Default::default()
        };
        let html = render_block(&ContentBlock::new(BlockKind::ExperienceItem { item: &item }, 80));
        assert!(!html.contains('•'));
        assert!(html.contains("<span>2019</span>"));
    }

    #[test]
    fn test_project_link_is_optional() {
        let mut item = Project {
            id: "p1".to_string(),
            name: "Compiler".to_string(),
            description: FormattedText::from("Self-hosting."),
            ..Default::default()
        };
        let without = render_block(&ContentBlock::new(BlockKind::ProjectItem { item: &item }, 88));
        assert!(!without.contains("<a "));

        item.link = Some("https://example.com/c?a=1&b=2".to_string());
        let with = render_block(&ContentBlock::new(BlockKind::ProjectItem { item: &item }, 88));
        assert!(with.contains(r#"href="https://example.com/c?a=1&amp;b=2""#));
    }

    #[test]
    fn test_skills_group_lists_tags_in_order() {
        let skills = [
            Skill {
                id: "1".to_string(),
                name: "Rust".to_string(),
                level: 5,
                category: Some("Lang".to_string()),
            },
            Skill {
                id: "2".to_string(),
                name: "C++".to_string(),
                level: 4,
                category: Some("Lang".to_string()),
            },
        ];
        let refs: Vec<&Skill> = skills.iter().collect();
        let html = render_block(&ContentBlock::new(
            BlockKind::SkillsGroup {
                category: "Lang",
                skills: refs,
            },
            80,
        ));
        assert!(html.contains(r#"<h4 class="skill-category-title">Lang</h4>"#));
        let rust = html.find(">Rust<").unwrap();
        let cpp = html.find(">C++<").unwrap();
        assert!(rust < cpp);
    }

    #[test]
    fn test_profile_text_strips_trailing_paragraphs_only() {
        let text = FormattedText::from("<p class=\"ql-align-center\"><em>Hi</em></p><p></p>");
        let html = render_block(&ContentBlock::new(BlockKind::ProfileText { text: &text }, 68));
        assert_eq!(
            html,
            r#"<div class="profile-text rich-text" data-block="profile"><p class="ql-align-center"><em>Hi</em></p></div>"#
        );
    }

    #[test]
    fn test_render_column_concatenates_in_order() {
        let a = Certification {
            id: "a".to_string(),
            ..Default::default()
        };
        let b = Certification {
            id: "b".to_string(),
            ..Default::default()
        };
        let html = render_column(&[
            ContentBlock::new(BlockKind::CertificationItem { item: &a }, 50),
            ContentBlock::new(BlockKind::CertificationItem { item: &b }, 50),
        ]);
        assert!(html.find(r#"data-id="a""#).unwrap() < html.find(r#"data-id="b""#).unwrap());
    }

    #[test]
    fn test_date_range_variants() {
        assert_eq!(date_range("2018", "2023"), "2018 - 2023");
        assert_eq!(date_range("2018", ""), "2018");
        assert_eq!(date_range("", "2023"), "2023");
        assert_eq!(date_range(" ", ""), "");
    }
}
