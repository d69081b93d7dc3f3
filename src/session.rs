//! Interactive todo session: the display → read → mutate → persist loop.
//!
//! A `Session` owns the in-memory list and the store handle, so every
//! mutation goes through one place and nothing is shared ambiently. Input
//! and output are generic so tests can drive the loop with buffers.

use crate::error::TodoError;
use crate::store::TodoStore;
use crate::tui::commands::{action_prompt, invalid_command_message, parse_action, Action};
use crate::tui::input::{read_line, ReadOutcome};
use crate::tui::renderer::Renderer;
use crate::tui::settings;
use crate::types::TodoList;
use std::io::{self, BufRead, Write};
use tracing::{debug, info, warn};

/// Loop state after one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminated,
}

/// One interactive run over a todo file, reading from `R` and writing to `W`.
pub struct Session<R, W> {
    store: TodoStore,
    list: TodoList,
    renderer: Renderer,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Load the list from `store` and build a session around it.
    ///
    /// A read failure is reported and the session starts from an empty list.
    pub fn open(store: TodoStore, renderer: Renderer, input: R, mut output: W) -> io::Result<Self> {
        let list = match store.load() {
            Ok(list) => list,
            Err(err) => {
                warn!(error = %err, "failed to read todo file, starting empty");
                renderer.warn(
                    &mut output,
                    &format!("{} {err}", settings::LABEL_READ_ERROR),
                )?;
                TodoList::new()
            }
        };
        Ok(Self::with_list(store, list, renderer, input, output))
    }

    /// Build a session around an already-loaded list.
    pub fn with_list(
        store: TodoStore,
        list: TodoList,
        renderer: Renderer,
        input: R,
        output: W,
    ) -> Self {
        Self {
            store,
            list,
            renderer,
            input,
            output,
        }
    }

    pub fn list(&self) -> &TodoList {
        &self.list
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Run until `quit` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        info!(
            path = %self.store.path().display(),
            items = self.list.len(),
            "todo session started"
        );
        while self.step()? == LoopState::Running {}
        info!(items = self.list.len(), "todo session ended");
        Ok(())
    }

    /// One pass: display, read the action (and text), dispatch, persist.
    pub fn step(&mut self) -> io::Result<LoopState> {
        self.renderer.todo_list(&mut self.output, &self.list)?;
        self.renderer.prompt(&mut self.output, &action_prompt())?;
        let line = match read_line(&mut self.input)? {
            ReadOutcome::Line(line) => line,
            ReadOutcome::Eof => return self.finish(),
        };

        let action = parse_action(&line);
        if let Action::Unknown(token) = &action {
            debug!(token = %token, "unrecognized action");
            self.renderer
                .error(&mut self.output, &invalid_command_message())?;
            return Ok(LoopState::Running);
        }
        if !action.takes_text() {
            return self.finish();
        }

        self.renderer.prompt(&mut self.output, settings::PROMPT_TEXT)?;
        let text = match read_line(&mut self.input)? {
            ReadOutcome::Line(text) => text,
            ReadOutcome::Eof => return self.finish(),
        };

        match self.apply(&action, &text) {
            Ok(()) => self.persist()?,
            Err(err) => {
                debug!(error = %err, "todo mutation rejected");
                self.renderer.error(&mut self.output, &err.to_string())?;
            }
        }
        Ok(LoopState::Running)
    }

    /// Apply one text-taking action to the in-memory list.
    pub fn apply(&mut self, action: &Action, text: &str) -> Result<(), TodoError> {
        match action {
            Action::Add => {
                let item = self.list.add(text)?;
                debug!(id = item.id, "added todo");
            }
            Action::Done => {
                let item = self.list.complete(text)?;
                debug!(id = item.id, "completed todo");
            }
            Action::Delete => {
                let item = self.list.delete(text)?;
                debug!(id = item.id, "deleted todo");
            }
            Action::Quit | Action::Unknown(_) => {}
        }
        Ok(())
    }

    /// Save the list; a write failure is reported and the loop keeps going.
    fn persist(&mut self) -> io::Result<()> {
        if let Err(err) = self.store.save(&self.list) {
            warn!(error = %err, "failed to save todo file");
            self.renderer.warn(
                &mut self.output,
                &format!("{} {err}", settings::LABEL_WRITE_ERROR),
            )?;
        }
        Ok(())
    }

    fn finish(&mut self) -> io::Result<LoopState> {
        self.persist()?;
        self.output.flush()?;
        Ok(LoopState::Terminated)
    }
}
