pub mod formatted_text;
pub mod resume;
pub mod theme;

pub use formatted_text::FormattedText;
pub use resume::{Certification, Education, Experience, PersonalDetails, Project, ResumeContent, Skill};
pub use theme::{HeaderConfig, ThemeConfig};
