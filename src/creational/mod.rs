//! Creational patterns: how objects get built.

pub mod abstract_factory;
pub mod builder;
pub mod factory;
pub mod prototype;
pub mod singleton;
