//! Page-1 header, the continuation spacer, and the background layer.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::models::{HeaderConfig, PersonalDetails};

const ROLE_PLACEHOLDER: &str = "Role";

// Lucide-style stroke icons.
const ICON_MAIL: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="contact-icon"><rect width="20" height="16" x="2" y="4" rx="2"></rect><path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"></path></svg>"#;
const ICON_PHONE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="contact-icon"><path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z"></path></svg>"#;
const ICON_MAP_PIN: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="contact-icon"><path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z"></path><circle cx="12" cy="10" r="3"></circle></svg>"#;
const ICON_LINK: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="contact-icon"><path d="M10 13a5 5 0 0 0 7.54.54l3-3a5 5 0 0 0-7.07-7.07l-1.72 1.71"></path><path d="M14 11a5 5 0 0 0-7.54-.54l-3 3a5 5 0 0 0 7.07 7.07l1.71-1.71"></path></svg>"#;
const ICON_CALENDAR: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="contact-icon"><rect width="18" height="18" x="3" y="4" rx="2" ry="2"></rect><line x1="16" x2="16" y1="2" y2="6"></line><line x1="8" x2="8" y1="2" y2="6"></line><line x1="3" x2="21" y1="10" y2="10"></line></svg>"#;
const ICON_FLAG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="contact-icon"><path d="M4 15s1-1 4-1 5 2 8 2 4-1 4-1V3s-1 1-4 1-5-2-8-2-4 1-4 1z"></path><line x1="4" x2="4" y1="22" y2="15"></line></svg>"#;

/// Full header shown on page 1 only.
pub fn render_header(details: &PersonalDetails, config: &HeaderConfig) -> String {
    let mut html = String::from(r#"<header class="header"><div class="header-content">"#);

    let name_class = if config.uppercase_name {
        "name uppercase"
    } else {
        "name"
    };
    html.push_str(&format!(
        r#"<h1 class="{name_class}">{}</h1>"#,
        encode_text(&details.full_name)
    ));

    if config.show_title {
        let title = match details.job_title.trim() {
            "" => ROLE_PLACEHOLDER,
            title => title,
        };
        html.push_str(&format!(r#"<div class="role">{}</div>"#, encode_text(title)));
    }

    html.push_str(r#"<div class="contact-info">"#);
    for row in contact_rows(details, config) {
        html.push_str(&row);
    }
    html.push_str("</div></div>");

    if config.show_photo {
        if let Some(src) = details
            .profile_picture
            .as_deref()
            .filter(|src| !src.trim().is_empty())
        {
            html.push_str(&format!(
                r#"<div class="photo-container {}"><img src="{}" alt="{}" class="photo"></div>"#,
                config.photo_style.class_name(),
                encode_double_quoted_attribute(src),
                encode_double_quoted_attribute(&details.full_name),
            ));
        }
    }

    html.push_str("</header>");
    html
}

/// Fixed-height block standing in for the header on pages after the first.
pub fn render_spacer(height_px: u32) -> String {
    format!(r#"<div class="page-spacer" style="height: {height_px}px"></div>"#)
}

/// Decorative background layer. Page 1 gets the tall variant.
pub fn render_background(url: &str, is_first: bool) -> String {
    let class = if is_first {
        "wave-background"
    } else {
        "wave-background-small"
    };
    let style = format!("background-image: url('{}'); background-size: cover", css_url(url));
    format!(
        r#"<div class="{class}" style="{}"></div>"#,
        encode_double_quoted_attribute(&style)
    )
}

fn contact_rows(details: &PersonalDetails, config: &HeaderConfig) -> Vec<String> {
    let mut rows = Vec::new();

    if config.show_email && !details.email.trim().is_empty() {
        rows.push(text_row(ICON_MAIL, &details.email));
    }
    if config.show_phone && !details.phone.trim().is_empty() {
        rows.push(text_row(ICON_PHONE, &details.phone));
    }
    if config.show_location && !details.address.trim().is_empty() {
        rows.push(text_row(ICON_MAP_PIN, &details.address));
    }
    if config.show_link {
        if let Some(link) = details.links.first().filter(|l| !l.url.trim().is_empty()) {
            rows.push(link_row(&link.url));
        }
    }
    if config.show_additional_link {
        if let Some(link) = details.links.get(1).filter(|l| !l.url.trim().is_empty()) {
            rows.push(link_row(&link.url));
        }
    }
    if config.show_dob {
        if let Some(dob) = non_blank(&details.date_of_birth) {
            rows.push(text_row(ICON_CALENDAR, dob));
        }
    }
    if config.show_nationality {
        if let Some(nationality) = non_blank(&details.nationality) {
            rows.push(text_row(ICON_FLAG, nationality));
        }
    }

    rows
}

fn text_row(icon: &str, text: &str) -> String {
    format!(
        r#"<div class="contact-item">{icon}<span>{}</span></div>"#,
        encode_text(text)
    )
}

fn link_row(url: &str) -> String {
    format!(
        r#"<div class="contact-item">{ICON_LINK}<a href="{}">{}</a></div>"#,
        encode_double_quoted_attribute(url),
        encode_text(display_url(url))
    )
}

/// `https://github.com/me` → `github.com/me`.
fn display_url(url: &str) -> &str {
    url.strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url)
}

fn css_url(url: &str) -> String {
    url.replace('\\', "%5C")
        .replace('\'', "%27")
        .replace(['\n', '\r'], "")
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}
