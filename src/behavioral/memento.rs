//! Memento Pattern
//!
//! Captures an object's state in an opaque token so it can be restored later,
//! without exposing the object's internals to whoever keeps the tokens.
//!
//! Run with: cargo run --bin memento

use crate::error::Result;
use crate::transcript::Transcript;

/// Saved state. Only the originator can read it back.
#[derive(Debug, Clone)]
pub struct Memento {
    state: String,
}

#[derive(Debug, Default)]
pub struct Originator {
    state: String,
}

impl Originator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_state(&mut self, state: impl Into<String>) {
        self.state = state.into();
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn save(&self) -> Memento {
        Memento {
            state: self.state.clone(),
        }
    }

    pub fn restore(&mut self, memento: Memento) {
        self.state = memento.state;
    }
}

/// Keeps mementos in a LIFO stack.
#[derive(Debug, Default)]
pub struct Caretaker {
    mementos: Vec<Memento>,
}

impl Caretaker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn backup(&mut self, originator: &Originator) {
        tracing::debug!(state = originator.state(), "backing up");
        self.mementos.push(originator.save());
    }

    /// Returns `false` when there is nothing left to undo.
    pub fn undo(&mut self, originator: &mut Originator) -> bool {
        match self.mementos.pop() {
            Some(memento) => {
                originator.restore(memento);
                tracing::debug!(state = originator.state(), "restored");
                true
            }
            None => false,
        }
    }

    pub fn history_len(&self) -> usize {
        self.mementos.len()
    }
}

pub fn demo() -> Result<Transcript> {
    let mut out = Transcript::new();

    let mut editor = Originator::new();
    let mut caretaker = Caretaker::new();

    editor.set_state("State 1");
    caretaker.backup(&editor);
    editor.set_state("State 2");
    caretaker.backup(&editor);
    editor.set_state("State 3");
    out.line(format!("Current state: {}", editor.state()));

    caretaker.undo(&mut editor);
    out.line(format!("After undo: {}", editor.state()));

    caretaker.undo(&mut editor);
    out.line(format!("After another undo: {}", editor.state()));
    Ok(out)
}
