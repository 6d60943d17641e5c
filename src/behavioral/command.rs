//! Command Pattern
//!
//! Turns a request into a standalone object that carries everything needed to
//! perform it. Requests can then be queued, passed around and replayed by an
//! invoker that knows nothing about what they do.
//!
//! Run with: cargo run --bin command

use crate::error::Result;
use crate::transcript::Transcript;

// ============================================================================
// Receiver
// ============================================================================

#[derive(Debug, Default)]
pub struct TextEditor {
    text: String,
}

impl TextEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write(&mut self, text: &str) {
        self.text.push_str(text);
    }

    pub fn copy(&self) -> String {
        self.text.clone()
    }

    pub fn paste(&mut self, clipboard: &str) {
        self.write(clipboard);
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

// ============================================================================
// Commands
// ============================================================================

/// The receiver is handed in at execution time so commands can sit in a queue
/// without holding a borrow of the editor.
pub trait Command {
    fn execute(&mut self, editor: &mut TextEditor);
}

#[derive(Debug, Default)]
pub struct CopyCommand {
    clipboard: String,
}

impl CopyCommand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clipboard(&self) -> &str {
        &self.clipboard
    }
}

impl Command for CopyCommand {
    fn execute(&mut self, editor: &mut TextEditor) {
        self.clipboard = editor.copy();
    }
}

#[derive(Debug)]
pub struct PasteCommand {
    clipboard: String,
}

impl PasteCommand {
    pub fn new(clipboard: impl Into<String>) -> Self {
        Self {
            clipboard: clipboard.into(),
        }
    }
}

impl Command for PasteCommand {
    fn execute(&mut self, editor: &mut TextEditor) {
        editor.paste(&self.clipboard);
    }
}

// ============================================================================
// Invoker
// ============================================================================

#[derive(Default)]
pub struct ShortcutKeys {
    commands: Vec<Box<dyn Command>>,
}

impl ShortcutKeys {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_command(&mut self, command: Box<dyn Command>) {
        self.commands.push(command);
    }

    pub fn execute_commands(&mut self, editor: &mut TextEditor) {
        tracing::debug!(count = self.commands.len(), "executing queued commands");
        for command in &mut self.commands {
            command.execute(editor);
        }
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

pub fn demo() -> Result<Transcript> {
    let mut out = Transcript::new();

    let mut editor = TextEditor::new();
    editor.write("Hello, ");

    let mut shortcuts = ShortcutKeys::new();
    shortcuts.add_command(Box::new(CopyCommand::new()));
    shortcuts.add_command(Box::new(PasteCommand::new("World!")));
    shortcuts.execute_commands(&mut editor);

    out.line(editor.text());
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_captures_current_text() {
        let mut editor = TextEditor::new();
        editor.write("Hello, ");
        let mut copy = CopyCommand::new();
        copy.execute(&mut editor);
        assert_eq!(copy.clipboard(), "Hello, ");
        assert_eq!(editor.text(), "Hello, ");
    }

    #[test]
    fn test_paste_appends_clipboard() {
        let mut editor = TextEditor::new();
        editor.write("Hello, ");
        PasteCommand::new("World!").execute(&mut editor);
        assert_eq!(editor.text(), "Hello, World!");
    }

    #[test]
    fn test_commands_run_in_insertion_order() {
        let mut editor = TextEditor::new();
        let mut keys = ShortcutKeys::new();
        keys.add_command(Box::new(PasteCommand::new("a")));
        keys.add_command(Box::new(PasteCommand::new("b")));
        keys.add_command(Box::new(PasteCommand::new("c")));
        keys.execute_commands(&mut editor);
        assert_eq!(editor.text(), "abc");
        assert_eq!(keys.len(), 3);
    }

    #[test]
    fn test_demo_transcript() {
        assert_eq!(demo().unwrap().lines(), ["Hello, World!"]);
    }
}
