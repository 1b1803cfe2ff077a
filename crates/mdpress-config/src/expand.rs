//! Environment variable expansion for string configuration values.

use crate::ConfigError;
use crate::raw::RawConfig;

/// Expand `${VAR}` references in a single string value.
///
/// # Errors
///
/// Returns [`ConfigError::EnvVar`] with the config field path when a
/// referenced variable is unset.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    shellexpand::env(value)
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: e.to_string(),
        })
}

/// Expand environment variable references in the expandable raw fields.
///
/// Expanded fields: `title`, `description`, `base`.
pub(crate) fn expand_raw(raw: &mut RawConfig) -> Result<(), ConfigError> {
    if let Some(ref title) = raw.title {
        raw.title = Some(expand_env(title, "title")?);
    }
    if let Some(ref description) = raw.description {
        raw.description = Some(expand_env(description, "description")?);
    }
    if let Some(ref base) = raw.base {
        raw.base = Some(expand_env(base, "base")?);
    }
    Ok(())
}
