//! Composite Pattern
//!
//! Part-whole hierarchies as trees, where clients treat a single leaf and a
//! whole subtree through the same interface.
//!
//! Run with: cargo run --bin composite

use crate::error::Result;
use crate::transcript::Transcript;

pub trait FileSystemComponent {
    fn name(&self) -> &str;

    /// Pre-order listing of this component and everything below it.
    fn show_details(&self) -> Vec<String>;
}

#[derive(Debug)]
pub struct File {
    name: String,
}

impl File {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl FileSystemComponent for File {
    fn name(&self) -> &str {
        &self.name
    }

    fn show_details(&self) -> Vec<String> {
        vec![format!("File: {}", self.name)]
    }
}

pub struct Directory {
    name: String,
    children: Vec<Box<dyn FileSystemComponent>>,
}

impl Directory {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn add(&mut self, component: Box<dyn FileSystemComponent>) {
        self.children.push(component);
    }

    /// Removes the first direct child called `name`.
    pub fn remove(&mut self, name: &str) -> Option<Box<dyn FileSystemComponent>> {
        let index = self.children.iter().position(|child| child.name() == name)?;
        Some(self.children.remove(index))
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl FileSystemComponent for Directory {
    fn name(&self) -> &str {
        &self.name
    }

    fn show_details(&self) -> Vec<String> {
        let mut lines = vec![format!("Directory: {}", self.name)];
        for child in &self.children {
            lines.extend(child.show_details());
        }
        lines
    }
}

pub fn demo() -> Result<Transcript> {
    let mut out = Transcript::new();

    let mut dir1 = Directory::new("dir1");
    dir1.add(Box::new(File::new("file1")));

    let mut dir2 = Directory::new("dir2");
    dir2.add(Box::new(File::new("file2")));
    dir2.add(Box::new(File::new("file3")));

    let mut root = Directory::new("root");
    root.add(Box::new(dir1));
    root.add(Box::new(dir2));

    out.extend(root.show_details());
    Ok(out)
}
