//! State Pattern
//!
//! An object changes its behavior when its internal state changes. Each state
//! is its own type and decides which state comes next, so the document itself
//! never branches on what it currently is.
//!
//! Run with: cargo run --bin state

use crate::error::Result;
use crate::transcript::Transcript;

pub trait State {
    fn name(&self) -> &'static str;

    /// Consumes the current state and yields the next one with its message.
    fn publish(self: Box<Self>) -> (Box<dyn State>, &'static str);

    fn review(&self) -> &'static str;
}

pub struct Draft;

impl State for Draft {
    fn name(&self) -> &'static str {
        "draft"
    }

    fn publish(self: Box<Self>) -> (Box<dyn State>, &'static str) {
        (
            Box::new(Published),
            "Moderation approved. Document is now published",
        )
    }

    fn review(&self) -> &'static str {
        "Moderation is under review."
    }
}

pub struct Published;

impl State for Published {
    fn name(&self) -> &'static str {
        "published"
    }

    fn publish(self: Box<Self>) -> (Box<dyn State>, &'static str) {
        (self, "Document is already published")
    }

    fn review(&self) -> &'static str {
        "Published document cannot be reviewed"
    }
}

pub struct Document {
    // Only empty for the duration of a transition.
    state: Option<Box<dyn State>>,
}

impl Document {
    pub fn new() -> Self {
        Self {
            state: Some(Box::new(Draft)),
        }
    }

    pub fn set_state(&mut self, state: Box<dyn State>) {
        self.state = Some(state);
    }

    pub fn state_name(&self) -> &'static str {
        self.state.as_ref().map_or("", |state| state.name())
    }

    pub fn publish(&mut self) -> &'static str {
        let Some(state) = self.state.take() else {
            return "";
        };
        let from = state.name();
        let (next, message) = state.publish();
        tracing::debug!(from, to = next.name(), "publish");
        self.state = Some(next);
        message
    }

    pub fn review(&self) -> &'static str {
        self.state.as_ref().map_or("", |state| state.review())
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

pub fn demo() -> Result<Transcript> {
    let mut out = Transcript::new();

    let mut document = Document::new();
    out.line(document.review());
    out.line(document.publish());
    out.line(document.review());
    out.line(document.publish());
    Ok(out)
}
