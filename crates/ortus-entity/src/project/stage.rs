//! Project stage enumeration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Maturity stage of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "project_stage", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ProjectStage {
    /// On the roadmap, not yet started.
    Roadmap,
    /// Work in progress.
    Wip,
    /// Open beta.
    Openbeta,
    /// In production.
    Production,
}

impl ProjectStage {
    /// Return the stage as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Roadmap => "roadmap",
            Self::Wip => "wip",
            Self::Openbeta => "openbeta",
            Self::Production => "production",
        }
    }
}

impl fmt::Display for ProjectStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ProjectStage {
    type Err = ortus_core::ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "roadmap" => Ok(Self::Roadmap),
            "wip" => Ok(Self::Wip),
            "openbeta" => Ok(Self::Openbeta),
            "production" => Ok(Self::Production),
            _ => Err(ortus_core::ApiError::validation(
                format!(
                    "Invalid project stage: '{s}'. Expected one of: roadmap, wip, openbeta, production"
                ),
                Vec::new(),
            )),
        }
    }
}
