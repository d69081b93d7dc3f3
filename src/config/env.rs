//! Environment overrides applied on top of file configuration.

use std::path::PathBuf;

use crate::error::ConfigError;

use super::Config;

/// Overrides the todo file path.
pub const ENV_FILE: &str = "TODOLIST_FILE";
/// Overrides colored output (`true` / `false`).
pub const ENV_COLOR: &str = "TODOLIST_COLOR";

pub(super) fn apply_env_overrides<FEnv>(
    config: &mut Config,
    env_lookup: &FEnv,
) -> Result<(), ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(path) = env_lookup(ENV_FILE) {
        config.storage.path = PathBuf::from(path);
    }
    if let Some(color) = env_lookup(ENV_COLOR) {
        config.display.color = match color.trim() {
            "true" => true,
            "false" => false,
            other => {
                return Err(ConfigError::Invalid(format!(
                    "invalid {ENV_COLOR} value `{other}`: expected `true` or `false`"
                )))
            }
        };
    }
    Ok(())
}
