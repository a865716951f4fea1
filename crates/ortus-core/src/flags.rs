//! Feature flags.
//!
//! Flags are evaluated once at startup from configuration and carried in
//! application state. `dev_mode` falls back to the build profile when no
//! override is configured.

use serde::{Deserialize, Serialize};

/// Raw flag overrides from configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlagsConfig {
    /// Expose early-access content.
    pub early_access: Option<bool>,
    /// Relax publication gates for local development.
    pub dev_mode: Option<bool>,
}

/// The evaluated flag set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureFlags {
    /// Expose early-access content.
    pub early_access: bool,
    /// Relax publication gates for local development.
    pub dev_mode: bool,
}

impl FeatureFlags {
    /// Evaluate the flag set from configuration overrides.
    pub fn evaluate(config: &FlagsConfig) -> Self {
        Self {
            early_access: config.early_access.unwrap_or(false),
            dev_mode: config.dev_mode.unwrap_or(cfg!(debug_assertions)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_early_access_defaults_off() {
        let flags = FeatureFlags::evaluate(&FlagsConfig::default());
        assert!(!flags.early_access);
    }

    #[test]
    fn test_overrides_win_over_defaults() {
        let flags = FeatureFlags::evaluate(&FlagsConfig {
            early_access: Some(true),
            dev_mode: Some(false),
        });
        assert!(flags.early_access);
        assert!(!flags.dev_mode);
    }
}
