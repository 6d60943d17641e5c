//! Registry of every pattern demo, looked up by name.

use std::fmt;
use std::io::Write;

use clap::ValueEnum;
use colored::Colorize;

use crate::behavioral::{
    chain_of_responsibility, command, iterator, mediator, memento, observer, state, strategy,
    template_method, visitor,
};
use crate::config::CatalogConfig;
use crate::creational::{abstract_factory, builder, factory, prototype, singleton};
use crate::error::{CatalogError, Result};
use crate::structural::{adapter, bridge, composite, decorator, facade, flyweight, proxy};
use crate::transcript::Transcript;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Category {
    Behavioral,
    Creational,
    Structural,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Behavioral => "behavioral",
            Category::Creational => "creational",
            Category::Structural => "structural",
        };
        f.pad(name)
    }
}

pub struct PatternEntry {
    pub name: &'static str,
    pub title: &'static str,
    pub category: Category,
    pub summary: &'static str,
    pub demo: fn() -> Result<Transcript>,
}

impl PatternEntry {
    pub fn run(&self) -> Result<Transcript> {
        tracing::info!(pattern = self.name, "running demo");
        (self.demo)()
    }
}

impl fmt::Debug for PatternEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatternEntry")
            .field("name", &self.name)
            .field("category", &self.category)
            .finish()
    }
}

pub static PATTERNS: &[PatternEntry] = &[
    // ------------------------------------------------------------------ behavioral
    PatternEntry {
        name: "command",
        title: "Command",
        category: Category::Behavioral,
        summary: "Wraps a request in an object so it can be queued, passed around and \
                  executed later by an invoker that knows nothing about it.",
        demo: command::demo,
    },
    PatternEntry {
        name: "chain_of_responsibility",
        title: "Chain of Responsibility",
        category: Category::Behavioral,
        summary: "Passes a request along a chain of handlers until one of them takes it.",
        demo: chain_of_responsibility::demo,
    },
    PatternEntry {
        name: "iterator",
        title: "Iterator",
        category: Category::Behavioral,
        summary: "Walks a collection element by element without exposing its storage.",
        demo: iterator::demo,
    },
    PatternEntry {
        name: "mediator",
        title: "Mediator",
        category: Category::Behavioral,
        summary: "Routes all communication between colleagues through one mediator, so \
                  colleagues never reference each other.",
        demo: mediator::demo,
    },
    PatternEntry {
        name: "memento",
        title: "Memento",
        category: Category::Behavioral,
        summary: "Saves and restores an object's previous state through opaque snapshots, \
                  e.g. for undo.",
        demo: memento::demo,
    },
    PatternEntry {
        name: "observer",
        title: "Observer",
        category: Category::Behavioral,
        summary: "A subject notifies all attached dependents whenever its state changes.",
        demo: observer::demo,
    },
    PatternEntry {
        name: "state",
        title: "State",
        category: Category::Behavioral,
        summary: "An object changes behavior with its internal state; each state is its own \
                  type and picks its successor.",
        demo: state::demo,
    },
    PatternEntry {
        name: "strategy",
        title: "Strategy",
        category: Category::Behavioral,
        summary: "Interchangeable algorithms behind one interface, swappable at runtime.",
        demo: strategy::demo,
    },
    PatternEntry {
        name: "template_method",
        title: "Template Method",
        category: Category::Behavioral,
        summary: "Fixes the skeleton of an algorithm and lets implementors fill in the steps.",
        demo: template_method::demo,
    },
    PatternEntry {
        name: "visitor",
        title: "Visitor",
        category: Category::Behavioral,
        summary: "Adds operations over a family of types without changing them, via double \
                  dispatch.",
        demo: visitor::demo,
    },
    // ------------------------------------------------------------------ creational
    PatternEntry {
        name: "abstract_factory",
        title: "Abstract Factory",
        category: Category::Creational,
        summary: "One interface creates a whole family of related products.",
        demo: abstract_factory::demo,
    },
    PatternEntry {
        name: "builder",
        title: "Builder",
        category: Category::Creational,
        summary: "Builds a complex object step by step; a director fixes the order, \
                  builders decide the parts.",
        demo: builder::demo,
    },
    PatternEntry {
        name: "factory",
        title: "Factory Method",
        category: Category::Creational,
        summary: "Callers request a product by kind; one place decides the concrete type.",
        demo: factory::demo,
    },
    PatternEntry {
        name: "prototype",
        title: "Prototype",
        category: Category::Creational,
        summary: "New objects are copies of an existing prototype, adjusted afterwards.",
        demo: prototype::demo,
    },
    PatternEntry {
        name: "singleton",
        title: "Singleton",
        category: Category::Creational,
        summary: "Exactly one shared instance with a global access point, initialized \
                  explicitly once.",
        demo: singleton::demo,
    },
    // ------------------------------------------------------------------ structural
    PatternEntry {
        name: "adapter",
        title: "Adapter",
        category: Category::Structural,
        summary: "Wraps an incompatible type so it fits the interface a client expects.",
        demo: adapter::demo,
    },
    PatternEntry {
        name: "bridge",
        title: "Bridge",
        category: Category::Structural,
        summary: "Separates an abstraction from its implementation so both vary \
                  independently.",
        demo: bridge::demo,
    },
    PatternEntry {
        name: "composite",
        title: "Composite",
        category: Category::Structural,
        summary: "Tree structures where leaves and subtrees share one interface.",
        demo: composite::demo,
    },
    PatternEntry {
        name: "decorator",
        title: "Decorator",
        category: Category::Structural,
        summary: "Adds behavior by wrapping an object in layers with the same interface.",
        demo: decorator::demo,
    },
    PatternEntry {
        name: "facade",
        title: "Facade",
        category: Category::Structural,
        summary: "A single simple entry point in front of several subsystems.",
        demo: facade::demo,
    },
    PatternEntry {
        name: "flyweight",
        title: "Flyweight",
        category: Category::Structural,
        summary: "Shares immutable intrinsic state between many small objects through a \
                  keyed registry.",
        demo: flyweight::demo,
    },
    PatternEntry {
        name: "proxy",
        title: "Proxy",
        category: Category::Structural,
        summary: "A stand-in with the same interface that controls access to the real \
                  object.",
        demo: proxy::demo,
    },
];

const ALIASES: &[(&str, &str)] = &[
    ("cor", "chain_of_responsibility"),
    ("chain", "chain_of_responsibility"),
    ("factory_method", "factory"),
];

/// Lowercases and maps `-` and spaces to `_`, then resolves aliases.
pub fn normalize(name: &str) -> String {
    let normalized: String = name
        .trim()
        .chars()
        .map(|c| match c {
            '-' | ' ' => '_',
            c => c.to_ascii_lowercase(),
        })
        .collect();

    ALIASES
        .iter()
        .find(|(alias, _)| *alias == normalized)
        .map(|(_, target)| target.to_string())
        .unwrap_or(normalized)
}

pub fn find(name: &str) -> Result<&'static PatternEntry> {
    let key = normalize(name);
    PATTERNS
        .iter()
        .find(|entry| entry.name == key)
        .ok_or_else(|| CatalogError::unknown_pattern(name))
}

pub fn by_category(category: Category) -> impl Iterator<Item = &'static PatternEntry> {
    PATTERNS.iter().filter(move |entry| entry.category == category)
}

/// Resolves names in order. An empty list selects the whole catalog.
pub fn select<S: AsRef<str>>(names: &[S]) -> Result<Vec<&'static PatternEntry>> {
    if names.is_empty() {
        return Ok(PATTERNS.iter().collect());
    }
    names.iter().map(|name| find(name.as_ref())).collect()
}

/// Runs each entry and writes its transcript. With more than one entry every
/// transcript gets a header and a trailing blank line when headers are enabled.
pub fn run_entries<W: Write>(
    entries: &[&PatternEntry],
    config: &CatalogConfig,
    out: &mut W,
) -> Result<()> {
    let with_headers = config.headers && entries.len() > 1;

    for entry in entries {
        let transcript = entry.run()?;
        if with_headers {
            let header = format!("=== {} ===", entry.title);
            if config.color {
                writeln!(out, "{}", header.bold().cyan())?;
            } else {
                writeln!(out, "{}", header)?;
            }
        }
        transcript.write_to(out)?;
        if with_headers {
            writeln!(out)?;
        }
    }
    Ok(())
}
