//! Team role enumeration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Roles held by team members.
///
/// Roles are ordered by privilege: Founder > Cofounder > Admin > Moderator >
/// Contributor > Member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "member_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    /// Founder.
    Founder,
    /// Co-founder.
    Cofounder,
    /// Administrator.
    Admin,
    /// Moderator.
    Moderator,
    /// Contributor.
    Contributor,
    /// Regular member.
    Member,
}

impl MemberRole {
    /// Return the privilege level (higher = more privileged).
    pub fn privilege_level(&self) -> u8 {
        match self {
            Self::Founder => 6,
            Self::Cofounder => 5,
            Self::Admin => 4,
            Self::Moderator => 3,
            Self::Contributor => 2,
            Self::Member => 1,
        }
    }

    /// Check if this role has at least the given role's privileges.
    pub fn has_at_least(&self, other: &MemberRole) -> bool {
        self.privilege_level() >= other.privilege_level()
    }

    /// Check if this role may moderate content.
    pub fn can_moderate(&self) -> bool {
        self.has_at_least(&Self::Moderator)
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Founder => "founder",
            Self::Cofounder => "cofounder",
            Self::Admin => "admin",
            Self::Moderator => "moderator",
            Self::Contributor => "contributor",
            Self::Member => "member",
        }
    }
}

impl fmt::Display for MemberRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MemberRole {
    type Err = ortus_core::ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "founder" => Ok(Self::Founder),
            "cofounder" => Ok(Self::Cofounder),
            "admin" => Ok(Self::Admin),
            "moderator" => Ok(Self::Moderator),
            "contributor" => Ok(Self::Contributor),
            "member" => Ok(Self::Member),
            _ => Err(ortus_core::ApiError::validation(
                format!(
                    "Invalid member role: '{s}'. Expected one of: founder, cofounder, admin, moderator, contributor, member"
                ),
                Vec::new(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_privilege_ordering() {
        assert!(MemberRole::Founder.has_at_least(&MemberRole::Member));
        assert!(MemberRole::Moderator.can_moderate());
        assert!(!MemberRole::Contributor.can_moderate());
    }

    #[test]
    fn test_from_str() {
        assert_eq!("admin".parse::<MemberRole>().unwrap(), MemberRole::Admin);
        assert_eq!(
            "Cofounder".parse::<MemberRole>().unwrap(),
            MemberRole::Cofounder
        );
        assert!("guest".parse::<MemberRole>().is_err());
    }
}
