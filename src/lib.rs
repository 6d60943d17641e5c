//! Design Patterns Catalog - Runnable Examples
//!
//! Classic object-oriented patterns expressed with traits, enums and composition.
//! Every pattern lives in its own module and exposes a `demo()` that returns the
//! console transcript of a short scripted scenario.
//!
//! ## Behavioral
//! - Command, Chain of Responsibility, Iterator, Mediator, Memento
//! - Observer, State, Strategy, Template Method, Visitor
//!
//! ## Creational
//! - Abstract Factory, Builder, Factory Method, Prototype, Singleton
//!
//! ## Structural
//! - Adapter, Bridge, Composite, Decorator, Facade, Flyweight, Proxy
//!
//! Run a single pattern with:
//! ```bash
//! cargo run --bin flyweight
//! ```
//!
//! Or browse the whole catalog:
//! ```bash
//! cargo run -- list
//! cargo run -- run --all
//! ```

pub mod behavioral;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod creational;
pub mod error;
pub mod logging;
pub mod structural;
pub mod transcript;

pub use catalog::{Category, PatternEntry, PATTERNS};
pub use config::CatalogConfig;
pub use error::{CatalogError, Result};
pub use transcript::Transcript;
