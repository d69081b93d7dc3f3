//! Terminal output renderer for the todo list, prompts, and status messages.
//!
//! Everything goes to the writer handed in by the caller (stdout in the
//! binary, a buffer in tests). With color disabled the output is plain text.

use crate::tui::settings;
use crate::types::{TodoItem, TodoList};
use crossterm::style::Stylize;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    /// Whether ANSI color/style output is enabled.
    color: bool,
}

impl Renderer {
    /// Create a renderer with optional color output.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Render the banner followed by one row per item, in list order.
    pub fn todo_list<W: Write + ?Sized>(&self, out: &mut W, list: &TodoList) -> io::Result<()> {
        if self.color {
            writeln!(out, "{}", settings::BANNER.with(settings::color_banner()).bold())?;
        } else {
            writeln!(out, "{}", settings::BANNER)?;
        }
        for item in list.items() {
            writeln!(out, "{}", self.item_row(item))?;
        }
        Ok(())
    }

    /// One list row: `<id>. [x] <text>` or `<id>. [ ] <text>`.
    pub fn item_row(&self, item: &TodoItem) -> String {
        if !self.color {
            return format_item_plain(item);
        }
        let mark = if item.done {
            settings::MARK_DONE.with(settings::color_mark_done())
        } else {
            settings::MARK_OPEN.with(settings::color_mark_open())
        };
        format!("{}. {mark} {}", item.id, item.text)
    }

    /// Print a prompt line and flush so it shows before blocking on input.
    pub fn prompt<W: Write + ?Sized>(&self, out: &mut W, text: &str) -> io::Result<()> {
        if self.color {
            writeln!(out, "{}", text.with(settings::color_prompt()).bold())?;
        } else {
            writeln!(out, "{text}")?;
        }
        out.flush()
    }

    /// Render a non-fatal problem the user should know about.
    pub fn warn<W: Write + ?Sized>(&self, out: &mut W, msg: &str) -> io::Result<()> {
        if self.color {
            writeln!(out, "{}", msg.with(settings::color_warning()))
        } else {
            writeln!(out, "{msg}")
        }
    }

    /// Render a rejected command or failed lookup.
    pub fn error<W: Write + ?Sized>(&self, out: &mut W, msg: &str) -> io::Result<()> {
        if self.color {
            writeln!(out, "{}", msg.with(settings::color_error()))
        } else {
            writeln!(out, "{msg}")
        }
    }
}

/// Uncolored list row.
pub fn format_item_plain(item: &TodoItem) -> String {
    let mark = if item.done {
        settings::MARK_DONE
    } else {
        settings::MARK_OPEN
    };
    format!("{}. {mark} {}", item.id, item.text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(renderer: Renderer, list: &TodoList) -> String {
        let mut out = Vec::new();
        renderer.todo_list(&mut out, list).expect("render");
        String::from_utf8(out).expect("utf8")
    }

    #[test]
    fn plain_list_matches_terminal_format() {
        let list = TodoList::from_items(vec![
            TodoItem {
                id: 1,
                text: "buy milk".into(),
                done: true,
            },
            TodoItem {
                id: 4,
                text: "walk dog".into(),
                done: false,
            },
        ]);
        assert_eq!(
            render(Renderer::new(false), &list),
            "********** TODO LIST **********\n1. [x] buy milk\n4. [ ] walk dog\n"
        );
    }

    #[test]
    fn empty_list_renders_banner_only() {
        assert_eq!(
            render(Renderer::new(false), &TodoList::new()),
            "********** TODO LIST **********\n"
        );
    }

    #[test]
    fn colored_rows_keep_visible_text() {
        let item = TodoItem {
            id: 2,
            text: "call mom".into(),
            done: true,
        };
        let row = Renderer::new(true).item_row(&item);
        assert!(row.starts_with("2. "), "got: {row:?}");
        assert!(row.contains("[x]"));
        assert!(row.ends_with(" call mom"));
    }

    #[test]
    fn plain_messages_are_unstyled() {
        let renderer = Renderer::new(false);
        let mut out = Vec::new();
        renderer.prompt(&mut out, "Enter todo text: ").expect("prompt");
        renderer.error(&mut out, "Todo item 'x' not found").expect("error");
        renderer.warn(&mut out, "Error writing to file: denied").expect("warn");
        assert_eq!(
            String::from_utf8(out).expect("utf8"),
            "Enter todo text: \nTodo item 'x' not found\nError writing to file: denied\n"
        );
    }
}
