//! Mediator Pattern
//!
//! Colleagues never talk to each other directly. All communication goes through
//! a mediator, which keeps the colleagues decoupled and the routing logic in one
//! place. Here the mediator owns its colleagues and hands out ids, so no
//! colleague needs a back-reference to the room.
//!
//! Run with: cargo run --bin mediator

use crate::error::Result;
use crate::transcript::Transcript;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColleagueId(usize);

pub trait Colleague {
    fn name(&self) -> &str;

    /// Delivers a message and returns the line describing the receipt.
    fn receive_message(&mut self, sender_name: &str, message: &str) -> String;
}

pub trait Mediator {
    type Colleague: Colleague;

    fn register_colleague(&mut self, colleague: Self::Colleague) -> ColleagueId;

    /// Delivers `message` to every colleague except `sender`.
    fn broadcast_message(&mut self, sender: ColleagueId, message: &str) -> Vec<String>;
}

// ============================================================================
// Colleague
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceivedMessage {
    pub from: String,
    pub text: String,
}

#[derive(Debug)]
pub struct User {
    name: String,
    inbox: Vec<ReceivedMessage>,
}

impl User {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            inbox: Vec::new(),
        }
    }

    pub fn inbox(&self) -> &[ReceivedMessage] {
        &self.inbox
    }
}

impl Colleague for User {
    fn name(&self) -> &str {
        &self.name
    }

    fn receive_message(&mut self, sender_name: &str, message: &str) -> String {
        self.inbox.push(ReceivedMessage {
            from: sender_name.to_string(),
            text: message.to_string(),
        });
        format!(
            "{} received a message from {}: '{}'",
            self.name, sender_name, message
        )
    }
}

// ============================================================================
// Mediator
// ============================================================================

pub struct ChatRoom<C = User> {
    colleagues: Vec<C>,
}

impl<C: Colleague> ChatRoom<C> {
    pub fn new() -> Self {
        Self {
            colleagues: Vec::new(),
        }
    }

    pub fn colleague(&self, id: ColleagueId) -> Option<&C> {
        self.colleagues.get(id.0)
    }

    /// The sender's announcement followed by every receipt, in registration order.
    pub fn send_message(&mut self, sender: ColleagueId, message: &str) -> Vec<String> {
        let Some(colleague) = self.colleague(sender) else {
            tracing::debug!(?sender, "message from unregistered colleague dropped");
            return Vec::new();
        };

        let mut lines = vec![format!(
            "{} sends message: '{}'",
            colleague.name(),
            message
        )];
        lines.extend(self.broadcast_message(sender, message));
        lines
    }
}

impl<C: Colleague> Default for ChatRoom<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Colleague> Mediator for ChatRoom<C> {
    type Colleague = C;

    fn register_colleague(&mut self, colleague: C) -> ColleagueId {
        self.colleagues.push(colleague);
        ColleagueId(self.colleagues.len() - 1)
    }

    fn broadcast_message(&mut self, sender: ColleagueId, message: &str) -> Vec<String> {
        let Some(sender_name) = self.colleague(sender).map(|c| c.name().to_string()) else {
            return Vec::new();
        };

        self.colleagues
            .iter_mut()
            .enumerate()
            .filter(|(index, _)| *index != sender.0)
            .map(|(_, colleague)| colleague.receive_message(&sender_name, message))
            .collect()
    }
}

pub fn demo() -> Result<Transcript> {
    let mut out = Transcript::new();

    let mut chat_room: ChatRoom = ChatRoom::new();
    let alice = chat_room.register_colleague(User::new("Alice"));
    let bob = chat_room.register_colleague(User::new("Bob"));
    let charlie = chat_room.register_colleague(User::new("Charlie"));

    out.extend(chat_room.send_message(alice, "Hi there!"));
    out.extend(chat_room.send_message(bob, "Hey!"));
    out.extend(chat_room.send_message(charlie, "Hello everyone!"));
    Ok(out)
}
