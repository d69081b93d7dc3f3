//! Default configuration constants.

/// Config file name looked up in the working directory and the global config dir.
pub(super) const CONFIG_FILE_NAME: &str = "todolist.toml";
/// Subdirectory under the global config root (`~/.config/todolist/`).
pub(super) const CONFIG_DIR_NAME: &str = "todolist";
/// Todo file used when neither config nor env nor CLI name one.
pub(super) const DEFAULT_TODO_PATH: &str = crate::store::DEFAULT_TODO_FILE;
/// Colored output is on unless disabled.
pub(super) const DEFAULT_COLOR: bool = true;
