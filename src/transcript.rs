use std::fmt;
use std::io::{self, Write};

/// The ordered console lines a demo produces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    pub fn line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for line in &self.lines {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }
}

impl<S: Into<String>> Extend<S> for Transcript {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.lines.extend(iter.into_iter().map(Into::into));
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Renders booleans the way the demo transcripts print them.
pub fn py_bool(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_keep_order() {
        let mut t = Transcript::new();
        t.line("first");
        t.extend(["second", "third"]);
        assert_eq!(t.lines(), ["first", "second", "third"]);
        assert_eq!(t.len(), 3);
    }

    #[test]
    fn test_write_to_ends_every_line() {
        let mut t = Transcript::new();
        t.line("a");
        t.line("b");
        let mut buf = Vec::new();
        t.write_to(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "a\nb\n");
        assert_eq!(t.to_string(), "a\nb\n");
    }

    #[test]
    fn test_py_bool() {
        assert_eq!(py_bool(true), "True");
        assert_eq!(py_bool(false), "False");
    }
}
