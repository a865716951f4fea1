//! File kind enumeration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// What a stored file is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "file_kind", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    /// Profile picture.
    Profile,
    /// Cover picture.
    Cover,
    /// Logo picture.
    Logo,
    /// Blog attachment.
    Attachment,
}

impl FileKind {
    /// Return the kind as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Profile => "profile",
            Self::Cover => "cover",
            Self::Logo => "logo",
            Self::Attachment => "attachment",
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
