//! Action-token metadata and parsing.

/// Static action metadata used by both parsing and prompt rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionSpec {
    pub name: &'static str,
    /// Whether a second line of todo text is read after the token.
    pub takes_text: bool,
}

/// Built-in actions, in prompt order.
pub const ACTIONS: [ActionSpec; 4] = [
    ActionSpec {
        name: "add",
        takes_text: true,
    },
    ActionSpec {
        name: "done",
        takes_text: true,
    },
    ActionSpec {
        name: "delete",
        takes_text: true,
    },
    ActionSpec {
        name: "quit",
        takes_text: false,
    },
];

/// Parsed action token consumed by the session loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Add,
    Done,
    Delete,
    Quit,
    Unknown(String),
}

impl Action {
    /// Table entry for a recognized action.
    pub fn spec(&self) -> Option<&'static ActionSpec> {
        let name = match self {
            Self::Add => "add",
            Self::Done => "done",
            Self::Delete => "delete",
            Self::Quit => "quit",
            Self::Unknown(_) => return None,
        };
        ACTIONS.iter().find(|spec| spec.name == name)
    }

    /// True when the action reads a follow-up text line.
    pub fn takes_text(&self) -> bool {
        self.spec().is_some_and(|spec| spec.takes_text)
    }
}

/// Parse one action line. Matching is exact after trimming surrounding whitespace.
pub fn parse_action(input: &str) -> Action {
    match input.trim() {
        "add" => Action::Add,
        "done" => Action::Done,
        "delete" => Action::Delete,
        "quit" => Action::Quit,
        other => Action::Unknown(other.to_string()),
    }
}

/// Comma-separated action names, e.g. `add, done, delete, quit`.
fn action_names() -> String {
    ACTIONS
        .iter()
        .map(|spec| spec.name)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Prompt shown before reading the action token.
pub fn action_prompt() -> String {
    format!("Enter action ({}): ", action_names())
}

/// Message printed for an unrecognized action token.
pub fn invalid_command_message() -> String {
    let quoted: Vec<String> = ACTIONS
        .iter()
        .map(|spec| format!("'{}'", spec.name))
        .collect();
    match quoted.split_last() {
        Some((last, rest)) if !rest.is_empty() => format!(
            "Invalid command. Please use {}, or {last}.",
            rest.join(", ")
        ),
        _ => format!("Invalid command. Please use {}.", quoted.join(", ")),
    }
}
