//! Viewer context for service calls.

/// Who is asking. Built by the HTTP layer from the admin gate and the
/// forwarded auth subject; identity verification itself lives with the
/// external auth provider.
#[derive(Debug, Clone, Default)]
pub struct Viewer {
    /// External auth subject, when the caller is signed in.
    pub user_id: Option<String>,
    /// Whether the caller passed the admin gate.
    pub admin: bool,
}

impl Viewer {
    /// An unauthenticated caller.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A signed-in caller.
    pub fn user(user_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
            admin: false,
        }
    }

    /// A caller that passed the admin gate.
    pub fn admin(user_id: Option<String>) -> Self {
        Self {
            user_id,
            admin: true,
        }
    }

    /// Whether the caller may moderate content.
    pub fn can_moderate(&self) -> bool {
        self.admin
    }

    /// Whether the caller is the given auth subject.
    pub fn owns(&self, user_id: &str) -> bool {
        self.user_id.as_deref() == Some(user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ownership() {
        assert!(Viewer::user("user_1").owns("user_1"));
        assert!(!Viewer::user("user_1").owns("user_2"));
        assert!(!Viewer::anonymous().owns("user_1"));
    }

    #[test]
    fn test_moderation() {
        assert!(Viewer::admin(None).can_moderate());
        assert!(!Viewer::user("user_1").can_moderate());
    }
}
