//! Configuration validation

use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Validate configuration integrity.
///
/// Runs at preset construction time; per-commit processing never validates.
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    section_order(config)?;
    validate_url_formats(config)?;
    debug!("configuration validation passed");
    Ok(())
}

/// Map the configured type-token ordering to section titles.
///
/// Each token in `type_order` must have an entry in the type table; a
/// missing token is a configuration error, raised immediately rather than
/// during commit processing.
pub fn section_order(config: &Config) -> Result<Vec<String>> {
    config
        .type_order
        .iter()
        .map(|token| {
            config
                .find_type_entry(token, None)
                .map(|entry| entry.section.clone())
                .ok_or_else(|| ConfigError::UnknownOrderType(token.clone()).into())
        })
        .collect()
}

fn validate_url_formats(config: &Config) -> Result<()> {
    let formats = [
        ("commit_url_format", &config.commit_url_format),
        ("compare_url_format", &config.compare_url_format),
        ("issue_url_format", &config.issue_url_format),
        ("user_url_format", &config.user_url_format),
    ];

    for (field, format) in formats {
        if format.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: field.to_string(),
                message: "URL format cannot be empty".to_string(),
            }
            .into());
        }
    }

    Ok(())
}
