//! Strategy Pattern
//!
//! Run with: cargo run --bin strategy

use crate::error::Result;
use crate::transcript::Transcript;

pub trait TextFormatter {
    fn format(&self, text: &str) -> String;
}

pub struct UpperCaseFormatter;

impl TextFormatter for UpperCaseFormatter {
    fn format(&self, text: &str) -> String {
        text.to_uppercase()
    }
}

pub struct LowerCaseFormatter;

impl TextFormatter for LowerCaseFormatter {
    fn format(&self, text: &str) -> String {
        text.to_lowercase()
    }
}

// Any closure works as a strategy
impl<F> TextFormatter for F
where
    F: Fn(&str) -> String,
{
    fn format(&self, text: &str) -> String {
        self(text)
    }
}

pub struct TextEditor {
    formatter: Box<dyn TextFormatter>,
}

impl TextEditor {
    pub fn new(formatter: Box<dyn TextFormatter>) -> Self {
        Self { formatter }
    }

    pub fn set_formatter(&mut self, formatter: Box<dyn TextFormatter>) {
        self.formatter = formatter;
    }

    pub fn format_text(&self, text: &str) -> String {
        self.formatter.format(text)
    }
}

pub fn demo() -> Result<Transcript> {
    let mut out = Transcript::new();

    let mut editor = TextEditor::new(Box::new(UpperCaseFormatter));
    out.line(editor.format_text("Hello, World!"));

    editor.set_formatter(Box::new(LowerCaseFormatter));
    out.line(editor.format_text("Hello, World!"));
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap_strategy_at_runtime() {
        let mut editor = TextEditor::new(Box::new(LowerCaseFormatter));
        assert_eq!(editor.format_text("MiXeD"), "mixed");
        editor.set_formatter(Box::new(UpperCaseFormatter));
        assert_eq!(editor.format_text("MiXeD"), "MIXED");
    }

    #[test]
    fn test_closure_strategy() {
        let reverse = |text: &str| text.chars().rev().collect::<String>();
        let editor = TextEditor::new(Box::new(reverse));
        assert_eq!(editor.format_text("abc"), "cba");
    }

    #[test]
    fn test_demo_transcript() {
        assert_eq!(demo().unwrap().lines(), ["HELLO, WORLD!", "hello, world!"]);
    }
}
