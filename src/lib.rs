//! todolist: a single-user terminal todo list backed by a flat text file.
//!
//! Items live in a `|`-delimited file (`id|done|text` per line) that is
//! loaded once at startup and rewritten after every change.
//!
//! # Quick start
//!
//! ```no_run
//! use todolist::session::Session;
//! use todolist::store::TodoStore;
//! use todolist::tui::Renderer;
//!
//! let store = TodoStore::new("todos.txt");
//! let stdin = std::io::stdin().lock();
//! let stdout = std::io::stdout().lock();
//! let mut session = Session::open(store, Renderer::new(false), stdin, stdout).unwrap();
//! session.run().unwrap();
//! ```

pub mod build_info;
pub mod config;
pub mod error;
pub mod session;
pub mod store;
#[cfg(test)]
pub mod testsupport;
pub mod tui;
pub mod types;
