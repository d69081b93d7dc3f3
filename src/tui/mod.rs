//! Terminal user-interface building blocks.
//!
//! Action parsing, line input, and output styling are kept apart so the
//! session loop only wires them together.

pub mod commands;
pub mod input;
pub mod renderer;
pub mod settings;

pub use commands::{parse_action, Action, ActionSpec, ACTIONS};
pub use input::{read_line, ReadOutcome};
pub use renderer::Renderer;
