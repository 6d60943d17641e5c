//! Flyweight Pattern
//!
//! Many small objects share their heavy, immutable part (the intrinsic state)
//! through a registry, and only keep their own cheap extrinsic state. A forest
//! of thousands of trees needs only one `TreeType` per species.
//!
//! Run with: cargo run --bin flyweight

use std::collections::HashMap;
use std::rc::Rc;

use crate::error::Result;
use crate::transcript::Transcript;

/// Intrinsic state, shared between all trees of one kind.
#[derive(Debug, PartialEq, Eq)]
pub struct TreeType {
    name: String,
    color: String,
    texture: String,
}

impl TreeType {
    pub fn new(name: impl Into<String>, color: impl Into<String>, texture: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            texture: texture.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn display(&self, x: i32, y: i32, age: u32) -> String {
        format!(
            "Tree type: {}, Color: {}, Texture: {}, Position: ({}, {}), Age: {} years",
            self.name, self.color, self.texture, x, y, age
        )
    }
}

// ============================================================================
// Flyweight registry
// ============================================================================

type TreeKey = (String, String, String);

/// Whether a lookup created a new flyweight or reused a cached one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    Created,
    Reused,
}

impl Lookup {
    pub fn message(self) -> &'static str {
        match self {
            Lookup::Created => "Creating new TreeType",
            Lookup::Reused => "Reusing existing TreeType",
        }
    }
}

#[derive(Debug, Default)]
pub struct TreeFactory {
    tree_types: HashMap<TreeKey, Rc<TreeType>>,
}

impl TreeFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the shared type for this exact (name, color, texture) triple.
    pub fn get_tree_type(&mut self, name: &str, color: &str, texture: &str) -> (Rc<TreeType>, Lookup) {
        let key = (name.to_string(), color.to_string(), texture.to_string());
        if let Some(existing) = self.tree_types.get(&key) {
            tracing::debug!(name, "flyweight cache hit");
            return (Rc::clone(existing), Lookup::Reused);
        }

        tracing::debug!(name, "flyweight cache miss");
        let tree_type = Rc::new(TreeType::new(name, color, texture));
        self.tree_types.insert(key, Rc::clone(&tree_type));
        (tree_type, Lookup::Created)
    }

    pub fn len(&self) -> usize {
        self.tree_types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree_types.is_empty()
    }
}

// ============================================================================
// Context objects
// ============================================================================

#[derive(Debug)]
pub struct Tree {
    x: i32,
    y: i32,
    age: u32,
    tree_type: Rc<TreeType>,
}

impl Tree {
    pub fn display(&self) -> String {
        self.tree_type.display(self.x, self.y, self.age)
    }

    pub fn tree_type(&self) -> &Rc<TreeType> {
        &self.tree_type
    }
}

#[derive(Debug, Default)]
pub struct Forest {
    factory: TreeFactory,
    trees: Vec<Tree>,
}

impl Forest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plant_tree(&mut self, x: i32, y: i32, age: u32, name: &str, color: &str, texture: &str) -> Lookup {
        let (tree_type, lookup) = self.factory.get_tree_type(name, color, texture);
        self.trees.push(Tree {
            x,
            y,
            age,
            tree_type,
        });
        lookup
    }

    pub fn display_forest(&self) -> Vec<String> {
        self.trees.iter().map(Tree::display).collect()
    }

    pub fn trees(&self) -> &[Tree] {
        &self.trees
    }

    pub fn tree_type_count(&self) -> usize {
        self.factory.len()
    }
}

pub fn demo() -> Result<Transcript> {
    let mut out = Transcript::new();

    let mut forest = Forest::new();
    out.line(forest.plant_tree(1, 2, 5, "Oak", "Green", "Rough").message());
    out.line(forest.plant_tree(3, 4, 10, "Oak", "Green", "Rough").message());
    out.line(forest.plant_tree(5, 6, 15, "Birch", "White", "Smooth").message());
    out.extend(forest.display_forest());
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_key_shares_instance() {
        let mut factory = TreeFactory::new();
        let (first, lookup1) = factory.get_tree_type("Oak", "Green", "Rough");
        let (second, lookup2) = factory.get_tree_type("Oak", "Green", "Rough");

        assert_eq!(lookup1, Lookup::Created);
        assert_eq!(lookup2, Lookup::Reused);
        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(factory.len(), 1);
    }

    #[test]
    fn test_different_intrinsic_state_is_a_new_type() {
        let mut factory = TreeFactory::new();
        let (green, _) = factory.get_tree_type("Oak", "Green", "Rough");
        let (red, lookup) = factory.get_tree_type("Oak", "Red", "Rough");

        assert_eq!(lookup, Lookup::Created);
        assert!(!Rc::ptr_eq(&green, &red));
        assert_eq!(factory.len(), 2);
    }

    #[test]
    fn test_forest_shares_oak_type() {
        let mut forest = Forest::new();
        forest.plant_tree(1, 2, 5, "Oak", "Green", "Rough");
        forest.plant_tree(3, 4, 10, "Oak", "Green", "Rough");
        forest.plant_tree(5, 6, 15, "Birch", "White", "Smooth");

        let trees = forest.trees();
        assert_eq!(forest.tree_type_count(), 2);
        assert!(Rc::ptr_eq(trees[0].tree_type(), trees[1].tree_type()));
        assert!(!Rc::ptr_eq(trees[0].tree_type(), trees[2].tree_type()));
        // Two trees plus the registry hold the oak type.
        assert_eq!(Rc::strong_count(trees[0].tree_type()), 3);
    }

    #[test]
    fn test_demo_transcript() {
        assert_eq!(
            demo().unwrap().lines(),
            [
                "Creating new TreeType",
                "Reusing existing TreeType",
                "Creating new TreeType",
                "Tree type: Oak, Color: Green, Texture: Rough, Position: (1, 2), Age: 5 years",
                "Tree type: Oak, Color: Green, Texture: Rough, Position: (3, 4), Age: 10 years",
                "Tree type: Birch, Color: White, Texture: Smooth, Position: (5, 6), Age: 15 years",
            ]
        );
    }
}
