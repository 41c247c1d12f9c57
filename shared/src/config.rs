use serde::{Deserialize, Serialize};

/// Tunables for the login form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginFormConfig {
    /// Delay between a successful submit and the page reload
    pub success_delay_ms: u32,
}

impl Default for LoginFormConfig {
    fn default() -> Self {
        Self {
            success_delay_ms: 1500,
        }
    }
}
