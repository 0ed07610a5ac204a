//! Stylesheet embedded in every rendered document, plus per-theme CSS variables.
//!
//! The same rules serve the on-screen preview (scaled by the client with a CSS
//! transform) and the PDF export (unscaled, one `.page` per printed sheet).

use crate::layout::PageGeometry;
use crate::models::ThemeConfig;

pub const STYLESHEET: &str = r#"
@page { size: A4; margin: 0; }
* { box-sizing: border-box; }
html, body { margin: 0; padding: 0; }
body { -webkit-print-color-adjust: exact; print-color-adjust: exact; }

.resume-container {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 24px;
  font-family: var(--font-body), sans-serif;
  font-size: var(--font-size-base);
  line-height: var(--line-height-body);
  color: var(--text-color);
}

.page {
  position: relative;
  width: var(--page-width);
  height: var(--page-height);
  padding: 40px 40px;
  background: var(--bg-color);
  overflow: visible;
  box-shadow: 0 4px 16px rgba(15, 23, 42, 0.12);
}

.page-indicator { color: var(--secondary-color); font-size: 12px; }

.wave-background, .wave-background-small {
  position: absolute;
  top: 0;
  left: 0;
  width: 100%;
  background-repeat: no-repeat;
  background-position: top center;
  z-index: 0;
  pointer-events: none;
}
.wave-background { height: 320px; }
.wave-background-small { height: 120px; }

.header {
  position: relative;
  z-index: 1;
  display: flex;
  justify-content: space-between;
  align-items: flex-start;
  height: 210px;
}
.header-content { max-width: 70%; }
.name { margin: 0; font-size: 36px; line-height: 1.1; color: var(--primary-color); }
.name.uppercase { text-transform: uppercase; letter-spacing: 0.04em; }
.role { margin-top: 6px; font-size: 18px; color: var(--secondary-color); }
.contact-info { display: flex; flex-wrap: wrap; gap: 6px 16px; margin-top: 14px; font-size: 13px; }
.contact-item { display: flex; align-items: center; gap: 6px; }
.contact-item a { color: inherit; text-decoration: none; }
.contact-icon { width: 14px; height: 14px; color: var(--primary-color); }
.photo-container { width: 130px; height: 130px; overflow: hidden; border: 3px solid var(--bg-color); }
.photo-container.circle { border-radius: 50%; }
.photo-container.square { border-radius: 8px; }
.photo { width: 100%; height: 100%; object-fit: cover; }

.page-spacer { position: relative; z-index: 1; }

.body {
  position: relative;
  z-index: 1;
  display: grid;
  grid-template-columns: var(--left-col-width) var(--right-col-width);
  gap: 32px;
  align-items: start;
}
.column-left, .column-right { min-width: 0; }

.section-title {
  margin: 0 0 12px;
  padding-bottom: 4px;
  font-size: 16px;
  text-transform: uppercase;
  letter-spacing: 0.06em;
  color: var(--primary-color);
  border-bottom: 2px solid var(--accent-color);
}

.item { margin-bottom: 16px; break-inside: avoid; }
.item-header { display: flex; justify-content: space-between; align-items: baseline; }
.item-title { font-weight: 700; }
.item-subtitle { color: var(--secondary-color); }
.item-meta { display: flex; gap: 6px; font-size: 12px; color: var(--secondary-color); }
.item-link { font-size: 0.8rem; text-decoration: underline; color: var(--primary-color); }
.item-description { margin-top: 6px; }
.rich-text p { margin: 0 0 4px; }
.rich-text ul { margin: 0; padding-left: 18px; }
.ql-align-center { text-align: center; }
.ql-align-right { text-align: right; }
.ql-align-justify { text-align: justify; }

.profile-text { margin-bottom: 16px; text-align: justify; }

.skills-group { margin-bottom: 12px; break-inside: avoid; }
.skill-category-title { margin: 0 0 6px; font-size: 13px; color: var(--secondary-color); }
.skills-list { display: flex; flex-wrap: wrap; gap: 6px; }
.skill-tag { padding: 3px 8px; border-radius: 4px; font-size: 12px; background: var(--accent-color); color: var(--bg-color); }

@media print {
  .resume-container { gap: 0; }
  .page { box-shadow: none; page-break-after: always; break-after: page; }
  .page:last-child { page-break-after: auto; break-after: auto; }
  .page-indicator { display: none; }
}
"#;

/// Inline custom properties applied to the page container.
pub fn css_variables(theme: &ThemeConfig, geometry: &PageGeometry) -> String {
    let colors = &theme.colors;
    let typography = &theme.typography;
    let (left, right) = theme.column_ratios();

    let declarations = [
        ("--primary-color", colors.primary().to_string()),
        ("--secondary-color", colors.secondary().to_string()),
        ("--text-color", colors.text().to_string()),
        ("--bg-color", colors.background().to_string()),
        ("--accent-color", colors.accent().to_string()),
        ("--font-heading", typography.font_family().to_string()),
        ("--font-body", typography.font_family().to_string()),
        ("--font-size-base", typography.base_size().to_string()),
        ("--line-height-body", typography.line_height().to_string()),
        ("--left-col-width", format!("{}fr", left / 10.0)),
        ("--right-col-width", format!("{}fr", right / 10.0)),
        ("--page-width", format!("{}px", geometry.page_width_px)),
        ("--page-height", format!("{}px", geometry.page_height_px)),
    ];

    declarations
        .iter()
        .map(|(name, value)| format!("{name}: {};", sanitize_css_value(value)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Drops characters that would end a declaration or the surrounding attribute.
fn sanitize_css_value(value: &str) -> String {
    value
        .chars()
        .filter(|c| !matches!(c, ';' | '{' | '}' | '<' | '>' | '"' | '\n' | '\r'))
        .collect()
}
