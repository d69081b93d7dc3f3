//! Configuration loading from TOML files and environment variables.
//!
//! Config is loaded in this order of precedence (highest wins):
//! 1. Command-line flags (applied by the binary after loading)
//! 2. Environment variables (`TODOLIST_FILE`, `TODOLIST_COLOR`)
//! 3. TOML file specified via --config CLI flag
//! 4. ./todolist.toml in the current directory
//! 5. $XDG_CONFIG_HOME/todolist/todolist.toml (or ~/.config/todolist/todolist.toml)
//! 6. Built-in defaults

mod defaults;
mod env;
mod loader;
mod sources;
mod types;

pub use env::{ENV_COLOR, ENV_FILE};
pub use loader::load_config_with_source;
pub use sources::{config_root_dir, ConfigSource};
pub use types::{Config, DisplayConfig, LoadedConfig, StorageConfig};

#[cfg(test)]
mod tests {
    use super::loader::load_config_from_sources;
    use super::*;
    use crate::error::ConfigError;
    use std::collections::HashMap;
    use std::io::{Error, ErrorKind};
    use std::path::{Path, PathBuf};

    fn files(entries: &[(&str, &str)]) -> impl Fn(&Path) -> Result<String, Error> {
        let map: HashMap<PathBuf, String> = entries
            .iter()
            .map(|(path, text)| (PathBuf::from(path), text.to_string()))
            .collect();
        move |path| {
            map.get(path)
                .cloned()
                .ok_or_else(|| Error::new(ErrorKind::NotFound, "missing"))
        }
    }

    fn env(entries: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    fn root() -> Option<PathBuf> {
        Some(PathBuf::from("/cfg"))
    }

    #[test]
    fn defaults_are_sensible() {
        let c = Config::default();
        assert_eq!(c.storage.path, PathBuf::from("todos.txt"));
        assert!(c.display.color);
    }

    #[test]
    fn no_files_uses_builtin_defaults() {
        let loaded = load_config_from_sources(None, files(&[]), env(&[]), root).unwrap();
        assert_eq!(loaded.config, Config::default());
        assert_eq!(loaded.source, ConfigSource::BuiltInDefaults);
    }

    #[test]
    fn local_file_wins_over_global() {
        let loaded = load_config_from_sources(
            None,
            files(&[
                ("todolist.toml", "[storage]\npath = \"local.txt\"\n"),
                ("/cfg/todolist/todolist.toml", "[storage]\npath = \"global.txt\"\n"),
            ]),
            env(&[]),
            root,
        )
        .unwrap();
        assert_eq!(loaded.config.storage.path, PathBuf::from("local.txt"));
        assert_eq!(loaded.source, ConfigSource::Local);
    }

    #[test]
    fn global_file_is_used_when_no_local_file() {
        let loaded = load_config_from_sources(
            None,
            files(&[("/cfg/todolist/todolist.toml", "[display]\ncolor = false\n")]),
            env(&[]),
            root,
        )
        .unwrap();
        assert!(!loaded.config.display.color);
        assert_eq!(loaded.config.storage.path, PathBuf::from("todos.txt"));
        assert_eq!(
            loaded.source,
            ConfigSource::Global(PathBuf::from("/cfg/todolist/todolist.toml"))
        );
    }

    #[test]
    fn explicit_path_must_exist() {
        let err = load_config_from_sources(
            Some(Path::new("/nope.toml")),
            files(&[("todolist.toml", "")]),
            env(&[]),
            root,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)), "got: {err}");
    }

    #[test]
    fn env_overrides_file_values() {
        let loaded = load_config_from_sources(
            Some(Path::new("custom.toml")),
            files(&[("custom.toml", "[storage]\npath = \"file.txt\"\n")]),
            env(&[(ENV_FILE, "env.txt"), (ENV_COLOR, "false")]),
            root,
        )
        .unwrap();
        assert_eq!(loaded.config.storage.path, PathBuf::from("env.txt"));
        assert!(!loaded.config.display.color);
        assert_eq!(
            loaded.source,
            ConfigSource::Explicit(PathBuf::from("custom.toml"))
        );
    }

    #[test]
    fn invalid_color_env_is_rejected() {
        let err =
            load_config_from_sources(None, files(&[]), env(&[(ENV_COLOR, "maybe")]), root)
                .unwrap_err();
        assert!(err.to_string().contains("TODOLIST_COLOR"), "got: {err}");
    }

    #[test]
    fn unknown_keys_and_bad_toml_are_rejected() {
        let err = load_config_from_sources(
            None,
            files(&[("todolist.toml", "[storage]\nfile = \"x\"\n")]),
            env(&[]),
            root,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)), "got: {err}");

        let err = load_config_from_sources(
            None,
            files(&[("todolist.toml", "[storage\n")]),
            env(&[]),
            root,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)), "got: {err}");
    }

    #[test]
    fn empty_storage_path_is_invalid() {
        let err = load_config_from_sources(
            None,
            files(&[("todolist.toml", "[storage]\npath = \"\"\n")]),
            env(&[]),
            root,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)), "got: {err}");
    }

    #[test]
    fn source_display_is_human_readable() {
        assert_eq!(ConfigSource::Local.to_string(), "./todolist.toml");
        assert_eq!(ConfigSource::BuiltInDefaults.to_string(), "built-in defaults");
    }
}
