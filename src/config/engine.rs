//! Engine configuration sections.

use serde::Deserialize;

use crate::domain::layout::{LayoutDistributor, MOBILE_MAX_ELEMENTS};

use super::error::{ConfigError, ValidationError};

/// Mobile list tuning.
#[derive(Debug, Clone, Deserialize)]
pub struct MobileConfig {
    /// Length cap on the mobile list before forced critical inserts.
    #[serde(default = "default_mobile_max")]
    pub max_elements: usize,
}

fn default_mobile_max() -> usize {
    MOBILE_MAX_ELEMENTS
}

impl Default for MobileConfig {
    fn default() -> Self {
        Self {
            max_elements: default_mobile_max(),
        }
    }
}

/// Root engine configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub mobile: MobileConfig,
}

impl EngineConfig {
    /// Loads configuration from the environment.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("HAVEN")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.mobile.max_elements == 0 {
            return Err(ValidationError::MobileCapTooSmall);
        }
        if self.mobile.max_elements > 50 {
            return Err(ValidationError::MobileCapTooLarge);
        }
        Ok(())
    }

    /// Builds a distributor honoring this configuration, with the default
    /// policy table and safety-tag vocabulary.
    pub fn distributor(&self) -> LayoutDistributor {
        LayoutDistributor::default().with_mobile_cap(self.mobile.max_elements)
    }
}
