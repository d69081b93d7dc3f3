//! Line-oriented `id|done|text` record codec.
//!
//! Parsing is lenient: lines with the wrong field count are skipped, and a
//! malformed `id` or `done` field falls back to `0` / `false` instead of
//! rejecting the whole line.

use crate::types::{TodoItem, TodoList};

/// Separator between the three fields of a record.
pub const FIELD_DELIMITER: char = '|';
/// Number of fields in a well-formed record.
const FIELDS_PER_RECORD: usize = 3;

/// Result of parsing a whole file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedList {
    pub items: Vec<TodoItem>,
    /// Non-blank lines dropped for having the wrong field count.
    pub skipped: usize,
}

/// Parse every record in `text`, keeping file order.
pub fn parse(text: &str) -> ParsedList {
    let mut parsed = ParsedList::default();
    for line in text.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.is_empty() {
            continue;
        }
        match parse_record(line) {
            Some(item) => parsed.items.push(item),
            None => parsed.skipped += 1,
        }
    }
    parsed
}

/// Parse one record, or `None` if it does not have exactly three fields.
pub fn parse_record(line: &str) -> Option<TodoItem> {
    let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
    if fields.len() != FIELDS_PER_RECORD {
        return None;
    }
    Some(TodoItem {
        id: parse_id(fields[0]),
        done: parse_done(fields[1]),
        text: fields[2].to_string(),
    })
}

/// Base-10 signed id; anything unparseable becomes `0`.
fn parse_id(raw: &str) -> i64 {
    raw.parse().unwrap_or(0)
}

/// Boolean flag accepting the usual short and cased spellings; unknown is `false`.
fn parse_done(raw: &str) -> bool {
    matches!(raw, "1" | "t" | "T" | "TRUE" | "true" | "True")
}

/// Render one record without its line terminator.
pub fn encode_record(item: &TodoItem) -> String {
    format!(
        "{}{FIELD_DELIMITER}{}{FIELD_DELIMITER}{}",
        item.id, item.done, item.text
    )
}

/// Render the full file body, one `\n`-terminated record per item.
pub fn encode(list: &TodoList) -> String {
    let mut out = String::new();
    for item in list.items() {
        out.push_str(&encode_record(item));
        out.push('\n');
    }
    out
}
