// HTML renderer for paginated résumés.
// The same markup backs the live preview and the PDF export; the document wrapper
// only adds a doctype and the embedded stylesheet around the page container.

pub mod blocks;
pub mod header;
pub mod styles;

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::layout::{self, Page, PageGeometry};
use crate::models::{ResumeContent, ThemeConfig};

/// Everything the renderer needs besides the pages themselves.
pub struct RenderContext<'a> {
    pub content: &'a ResumeContent,
    pub theme: &'a ThemeConfig,
    pub geometry: &'a PageGeometry,
    /// Used when the theme leaves `backgroundImage` unset.
    pub default_background_url: &'a str,
}

/// Renders the page container: one `.page` per planned page, in order.
pub fn render_pages(pages: &[Page<'_>], ctx: &RenderContext<'_>) -> String {
    let mut html = format!(
        r#"<div class="resume-container" style="{}">"#,
        encode_double_quoted_attribute(&styles::css_variables(ctx.theme, ctx.geometry))
    );

    let background = ctx.theme.colors.background_url(ctx.default_background_url);
    let header_config = ctx.theme.header();

    for page in pages {
        if !page.is_first {
            html.push_str(&format!(
                r#"<div class="page-indicator">— Page {} —</div>"#,
                page.index + 1
            ));
        }
        html.push_str(&format!(
            r#"<div class="page" id="page-{}" data-page-index="{}">"#,
            page.index + 1,
            page.index
        ));

        if let Some(url) = background {
            html.push_str(&header::render_background(url, page.is_first));
        }

        if page.is_first {
            html.push_str(&header::render_header(
                &ctx.content.personal_details,
                &header_config,
            ));
        } else {
            html.push_str(&header::render_spacer(ctx.geometry.spacer_height_px));
        }

        html.push_str(r#"<div class="body"><div class="column-left">"#);
        html.push_str(&blocks::render_column(&page.left));
        html.push_str(r#"</div><div class="column-right">"#);
        html.push_str(&blocks::render_column(&page.right));
        html.push_str("</div></div></div>");
    }

    html.push_str("</div>");
    html
}

/// Wraps the page container in a standalone HTML document for the PDF worker.
///
/// `pages_html` is embedded verbatim, so the export shows exactly what the
/// preview showed. `base_href` resolves relative asset URLs (the bundled
/// background, photos) for a worker that loads the document without an origin.
pub fn render_document(pages_html: &str, title: &str, base_href: Option<&str>) -> String {
    let title = match title.trim() {
        "" => "Resume",
        title => title,
    };
    let base = base_href
        .map(str::trim)
        .filter(|href| !href.is_empty())
        .map(|href| format!(r#"<base href="{}">"#, encode_double_quoted_attribute(href)))
        .unwrap_or_default();
    format!(
        concat!(
            "<!DOCTYPE html>",
            r#"<html lang="en"><head><meta charset="utf-8">"#,
            "{base}",
            r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#,
            "<title>{title}</title>",
            "<style>{styles}</style>",
            "</head><body>{pages}</body></html>"
        ),
        base = base,
        title = encode_text(title),
        styles = styles::STYLESHEET,
        pages = pages_html,
    )
}

/// Output of a full layout + render pass.
#[derive(Debug, Clone)]
pub struct RenderedResume {
    pub html: String,
    pub page_count: usize,
}

/// Lays out and renders a résumé into the page container markup.
pub fn render_resume(
    content: &ResumeContent,
    theme: &ThemeConfig,
    geometry: &PageGeometry,
    default_background_url: &str,
) -> RenderedResume {
    let pages = layout::layout_with(content, theme, geometry, &layout::HeuristicEstimator);
    let ctx = RenderContext {
        content,
        theme,
        geometry,
        default_background_url,
    };
    RenderedResume {
        html: render_pages(&pages, &ctx),
        page_count: pages.len(),
    }
}
