use serde::Serialize;

use crate::error::{AppError, Result};
use super::SITE_NAME;

/// Twitter card layout requested by a social preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CardKind {
    Summary,
    SummaryLargeImage,
}

impl CardKind {
    pub fn as_str(self) -> &'static str {
        match self {
            CardKind::Summary => "summary",
            CardKind::SummaryLargeImage => "summary_large_image",
        }
    }
}

/// Title/description pair used by link unfurlers, set independently of the
/// page's own title and description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SocialPreview {
    pub kind: CardKind,
    pub title: &'static str,
    pub description: &'static str,
}

/// Metadata attached to a route and emitted into the document head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageDescriptor {
    pub title: &'static str,
    pub description: &'static str,
    pub social: Option<SocialPreview>,
    pub canonical_url: Option<&'static str>,
}

impl PageDescriptor {
    pub fn site_name(&self) -> &'static str {
        SITE_NAME
    }

    pub fn og_title(&self) -> &'static str {
        self.social.map_or(self.title, |s| s.title)
    }

    pub fn og_description(&self) -> &'static str {
        self.social.map_or(self.description, |s| s.description)
    }

    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(AppError::Config("page title is empty".to_string()));
        }
        if self.description.trim().is_empty() {
            return Err(AppError::Config(format!("description of '{}' is empty", self.title)));
        }
        if let Some(social) = &self.social {
            if social.title.trim().is_empty() || social.description.trim().is_empty() {
                return Err(AppError::Config(format!(
                    "social preview of '{}' has an empty field",
                    self.title
                )));
            }
        }
        if let Some(url) = self.canonical_url {
            let host = url.strip_prefix("https://").unwrap_or_default();
            if host.is_empty() || host.starts_with('/') || url.chars().any(char::is_whitespace) {
                return Err(AppError::Config(format!(
                    "canonical url '{}' of '{}' is not an absolute https url",
                    url, self.title
                )));
            }
        }
        Ok(())
    }
}
