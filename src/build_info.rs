//! Compile-time build metadata exposed to CLI surfaces.

/// Semver package version from `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// VCS commit hash captured at build time.
pub const GIT_COMMIT: &str = env!("TODOLIST_BUILD_GIT_HASH");

/// Build timestamp captured at compile time.
pub const BUILD_TIMESTAMP: &str = env!("TODOLIST_BUILD_TIMESTAMP");

/// Version block used by `todolist --version`.
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\ncommit: ",
    env!("TODOLIST_BUILD_GIT_HASH"),
    "\nbuilt: ",
    env!("TODOLIST_BUILD_TIMESTAMP")
);

/// Help trailer block that surfaces build metadata in `todolist --help`.
pub const HELP_BUILD_METADATA: &str = concat!(
    "Build metadata:\n  commit: ",
    env!("TODOLIST_BUILD_GIT_HASH"),
    "\n  built: ",
    env!("TODOLIST_BUILD_TIMESTAMP")
);
