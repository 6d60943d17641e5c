//! Singleton Pattern
//!
//! One instance, one global access point. Instead of creating the instance on
//! first access, `Singleton<T>` is initialized explicitly and every later access
//! observes that same value. Initialization order is therefore visible in the
//! code that calls `init`.
//!
//! Run with: cargo run --bin singleton

use std::sync::OnceLock;

use thiserror::Error;

use crate::error::Result;
use crate::transcript::{py_bool, Transcript};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SingletonError {
    #[error("{0} is already initialized")]
    AlreadyInitialized(&'static str),

    #[error("{0} has not been initialized")]
    NotInitialized(&'static str),
}

/// A once-initialized, process-wide slot. Meant to live in a `static`.
pub struct Singleton<T> {
    name: &'static str,
    cell: OnceLock<T>,
}

impl<T> Singleton<T> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            cell: OnceLock::new(),
        }
    }

    /// Stores the instance. Only the first call succeeds.
    pub fn init(&self, value: T) -> std::result::Result<&T, SingletonError> {
        self.cell
            .set(value)
            .map_err(|_| SingletonError::AlreadyInitialized(self.name))?;
        tracing::debug!(name = self.name, "singleton initialized");
        self.get()
    }

    /// Initializes with `f` unless a value is already present.
    pub fn get_or_init(&self, f: impl FnOnce() -> T) -> &T {
        self.cell.get_or_init(|| {
            tracing::debug!(name = self.name, "singleton initialized");
            f()
        })
    }

    pub fn get(&self) -> std::result::Result<&T, SingletonError> {
        self.cell
            .get()
            .ok_or(SingletonError::NotInitialized(self.name))
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct AppSettings {
    pub app_name: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            app_name: "pattern-catalog".to_string(),
        }
    }
}

static APP_SETTINGS: Singleton<AppSettings> = Singleton::new("app settings");

pub fn app_settings() -> &'static Singleton<AppSettings> {
    &APP_SETTINGS
}

pub fn demo() -> Result<Transcript> {
    let mut out = Transcript::new();

    app_settings().get_or_init(AppSettings::default);

    let s1 = app_settings().get()?;
    let s2 = app_settings().get()?;
    out.line(format!("s1 is s2: {}", py_bool(std::ptr::eq(s1, s2))));
    Ok(out)
}
