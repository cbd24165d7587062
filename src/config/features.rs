//! Feature flags configuration

use serde::Deserialize;

/// Feature flags for enabling/disabling functionality
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    /// Include error details in HTTP error bodies (disable in production!)
    #[serde(default)]
    pub verbose_errors: bool,

    /// Install the HTTP request trace layer
    #[serde(default = "default_enable_tracing")]
    pub enable_tracing: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            verbose_errors: false,
            enable_tracing: default_enable_tracing(),
        }
    }
}

fn default_enable_tracing() -> bool {
    true
}
