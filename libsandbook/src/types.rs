//! Core types for Sandbook

use serde::{Deserialize, Serialize};

/// One displayed article.
///
/// `content` is `None` until a fetch completes or after one fails;
/// `Some("")` means the fetch succeeded but the source had no summary
/// text. The whole value is replaced on every navigation, never
/// partially mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub content: Option<String>,
}

impl Article {
    /// A just-navigated article whose content has not arrived yet.
    pub fn pending(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: None,
        }
    }

    pub fn loaded(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: Some(content.into()),
        }
    }
}

/// Which rendition of an article the client asks for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentMode {
    /// Intro-only extract as plain text (`prop=extracts`).
    #[default]
    Summary,
    /// Full rendered article HTML (`action=parse`).
    Full,
}

impl std::str::FromStr for ContentMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "summary" => Ok(ContentMode::Summary),
            "full" => Ok(ContentMode::Full),
            _ => Err(format!(
                "Invalid content mode: '{}'. Valid options: summary, full",
                s
            )),
        }
    }
}

impl std::fmt::Display for ContentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentMode::Summary => write!(f, "summary"),
            ContentMode::Full => write!(f, "full"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_article_has_no_content() {
        let article = Article::pending("Aldabra");
        assert_eq!(article.title, "Aldabra");
        assert!(article.content.is_none());
    }

    #[test]
    fn test_empty_content_is_distinct_from_pending() {
        let empty = Article::loaded("Aldabra", "");
        assert_eq!(empty.content.as_deref(), Some(""));
        assert_ne!(empty, Article::pending("Aldabra"));
    }

    #[test]
    fn test_content_mode_from_str() {
        assert_eq!("summary".parse::<ContentMode>().unwrap(), ContentMode::Summary);
        assert_eq!("FULL".parse::<ContentMode>().unwrap(), ContentMode::Full);
        assert!("html".parse::<ContentMode>().is_err());
    }
}
