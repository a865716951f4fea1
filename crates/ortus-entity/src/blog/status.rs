//! Blog post status enumeration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lifecycle status of a blog post.
///
/// Posts move `Draft` → `Published` → `Archived`; archived posts are never
/// re-published.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "post_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    /// Not published yet.
    Draft,
    /// Publicly available.
    Published,
    /// No longer actively displayed.
    Archived,
}

impl PostStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Archived => "archived",
        }
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PostStatus {
    type Err = ortus_core::ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "draft" => Ok(Self::Draft),
            "published" => Ok(Self::Published),
            "archived" => Ok(Self::Archived),
            _ => Err(ortus_core::ApiError::validation(
                format!("Invalid post status: '{s}'. Expected one of: draft, published, archived"),
                Vec::new(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("draft".parse::<PostStatus>().unwrap(), PostStatus::Draft);
        assert_eq!(
            "PUBLISHED".parse::<PostStatus>().unwrap(),
            PostStatus::Published
        );
        assert!("retired".parse::<PostStatus>().is_err());
    }
}
