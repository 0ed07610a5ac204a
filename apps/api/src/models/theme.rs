//! Visual theme snapshot. Every field is optional; accessors resolve defaults.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PRIMARY: &str = "#2563EB";
pub const DEFAULT_SECONDARY: &str = "#64748B";
pub const DEFAULT_TEXT: &str = "#1E293B";
pub const DEFAULT_BACKGROUND: &str = "#FFFFFF";
pub const DEFAULT_ACCENT: &str = "#3B82F6";
pub const DEFAULT_FONT_FAMILY: &str = "Inter";
pub const DEFAULT_FONT_SIZE_BASE: &str = "14px";
pub const DEFAULT_LINE_HEIGHT: &str = "1.5";
pub const DEFAULT_LEFT_COLUMN_WIDTH: f32 = 60.0;
pub const DEFAULT_RIGHT_COLUMN_WIDTH: f32 = 40.0;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeConfig {
    pub colors: ColorScheme,
    pub typography: Typography,
    pub header_config: Option<HeaderConfig>,
    pub column_config: Option<ColumnConfig>,
    pub section_labels: SectionLabels,
}

impl ThemeConfig {
    /// Header flags, or the stock flags when the theme carries none.
    pub fn header(&self) -> HeaderConfig {
        self.header_config.clone().unwrap_or_default()
    }

    /// `(left, right)` column ratios, falling back to 60/40 when unusable.
    pub fn column_ratios(&self) -> (f32, f32) {
        self.column_config
            .as_ref()
            .and_then(ColumnConfig::usable_ratios)
            .unwrap_or((DEFAULT_LEFT_COLUMN_WIDTH, DEFAULT_RIGHT_COLUMN_WIDTH))
    }

    /// Rejects column widths that could never produce a sensible grid.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(columns) = &self.column_config {
            let widths = [columns.left_column_width, columns.right_column_width];
            if widths.iter().any(|w| !w.is_finite() || *w < 0.0) {
                return Err(format!(
                    "column widths must be non-negative numbers, got {}/{}",
                    columns.left_column_width, columns.right_column_width
                ));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColorScheme {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub text: Option<String>,
    pub background: Option<String>,
    pub accent: Option<String>,
    /// `None` selects the bundled background, `Some("")` selects no background.
    pub background_image: Option<String>,
}

impl ColorScheme {
    pub fn primary(&self) -> &str {
        non_empty(&self.primary).unwrap_or(DEFAULT_PRIMARY)
    }

    pub fn secondary(&self) -> &str {
        non_empty(&self.secondary).unwrap_or(DEFAULT_SECONDARY)
    }

    pub fn text(&self) -> &str {
        non_empty(&self.text).unwrap_or(DEFAULT_TEXT)
    }

    pub fn background(&self) -> &str {
        non_empty(&self.background).unwrap_or(DEFAULT_BACKGROUND)
    }

    pub fn accent(&self) -> &str {
        non_empty(&self.accent).unwrap_or(DEFAULT_ACCENT)
    }

    /// Resolves the page background layer URL, if any.
    pub fn background_url<'a>(&'a self, bundled_default: &'a str) -> Option<&'a str> {
        match self.background_image.as_deref() {
            None => Some(bundled_default),
            Some(url) if url.trim().is_empty() => None,
            Some(url) => Some(url),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Typography {
    pub font_family: Option<String>,
    pub font_size: FontSizes,
    pub line_height: Option<String>,
}

impl Typography {
    pub fn font_family(&self) -> &str {
        non_empty(&self.font_family).unwrap_or(DEFAULT_FONT_FAMILY)
    }

    pub fn base_size(&self) -> &str {
        non_empty(&self.font_size.base).unwrap_or(DEFAULT_FONT_SIZE_BASE)
    }

    pub fn line_height(&self) -> &str {
        non_empty(&self.line_height).unwrap_or(DEFAULT_LINE_HEIGHT)
    }

    /// Base font size in px when expressed as `<n>px` (or a bare number).
    pub fn base_size_px(&self) -> Option<f32> {
        let raw = self.base_size().trim();
        raw.strip_suffix("px").unwrap_or(raw).trim().parse().ok()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSizes {
    pub base: Option<String>,
    pub h1: Option<String>,
    pub h2: Option<String>,
    pub small: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhotoStyle {
    #[default]
    Circle,
    Square,
}

impl PhotoStyle {
    pub fn class_name(self) -> &'static str {
        match self {
            PhotoStyle::Circle => "circle",
            PhotoStyle::Square => "square",
        }
    }
}

/// Which header fields are visible on page 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeaderConfig {
    pub show_title: bool,
    pub show_phone: bool,
    pub show_email: bool,
    pub show_location: bool,
    pub show_link: bool,
    pub show_additional_link: bool,
    pub show_photo: bool,
    pub uppercase_name: bool,
    pub show_dob: bool,
    pub show_nationality: bool,
    pub photo_style: PhotoStyle,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            show_title: true,
            show_phone: true,
            show_email: true,
            show_location: true,
            show_link: true,
            show_additional_link: true,
            show_photo: true,
            uppercase_name: true,
            show_dob: false,
            show_nationality: false,
            photo_style: PhotoStyle::Circle,
        }
    }
}

/// Column width percentages. Used as `fr` ratios, so they need not sum to exactly 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColumnConfig {
    pub left_column_width: f32,
    pub right_column_width: f32,
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self {
            left_column_width: DEFAULT_LEFT_COLUMN_WIDTH,
            right_column_width: DEFAULT_RIGHT_COLUMN_WIDTH,
        }
    }
}

impl ColumnConfig {
    fn usable_ratios(&self) -> Option<(f32, f32)> {
        let (left, right) = (self.left_column_width, self.right_column_width);
        let valid = |w: f32| w.is_finite() && w >= 0.0;
        if !valid(left) || !valid(right) || left + right <= 0.0 {
            return None;
        }
        Some((left, right))
    }
}

/// Optional overrides for the section headings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SectionLabels {
    pub experience: Option<String>,
    pub education: Option<String>,
    pub projects: Option<String>,
    pub profile: Option<String>,
    pub skills: Option<String>,
    pub certifications: Option<String>,
    /// Group name for skills without a category.
    pub other_skills: Option<String>,
}

impl SectionLabels {
    pub fn experience(&self) -> &str {
        non_empty(&self.experience).unwrap_or("Experience")
    }

    pub fn education(&self) -> &str {
        non_empty(&self.education).unwrap_or("Education")
    }

    pub fn projects(&self) -> &str {
        non_empty(&self.projects).unwrap_or("Projects")
    }

    pub fn profile(&self) -> &str {
        non_empty(&self.profile).unwrap_or("Profile")
    }

    pub fn skills(&self) -> &str {
        non_empty(&self.skills).unwrap_or("Skills")
    }

    pub fn certifications(&self) -> &str {
        non_empty(&self.certifications).unwrap_or("Certifications")
    }

    pub fn other_skills(&self) -> &str {
        non_empty(&self.other_skills).unwrap_or("Other")
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}
