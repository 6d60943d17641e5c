use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::catalog::{self, Category, PATTERNS};
use crate::config::CatalogConfig;
use crate::error::Result;
use crate::logging;

#[derive(Debug, Parser)]
#[command(name = "pattern-catalog")]
#[command(about = "Runnable catalog of classic design patterns")]
pub struct Cli {
    /// TOML file with runner settings
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable debug logging on stderr")]
    pub verbose: bool,

    #[command(subcommand)]
    pub action: Action,
}

#[derive(Debug, Subcommand)]
pub enum Action {
    /// List available patterns
    List {
        #[arg(long, value_enum)]
        category: Option<Category>,
    },
    /// Describe one pattern
    Show { name: String },
    /// Run pattern demos and print their transcripts
    Run {
        names: Vec<String>,

        #[arg(long, conflicts_with = "names")]
        all: bool,
    },
}

impl Cli {
    pub fn load_config(&self) -> Result<CatalogConfig> {
        CatalogConfig::load(self.config.as_deref())
    }
}

pub fn execute<W: Write>(action: &Action, config: &CatalogConfig, out: &mut W) -> Result<()> {
    match action {
        Action::List { category } => {
            let entries = PATTERNS
                .iter()
                .filter(|entry| category.map_or(true, |c| entry.category == c));
            for entry in entries {
                writeln!(out, "{:<24} {:<11} {}", entry.name, entry.category, entry.title)?;
            }
        }
        Action::Show { name } => {
            let entry = catalog::find(name)?;
            writeln!(out, "{} ({})", entry.title, entry.category)?;
            writeln!(out)?;
            writeln!(out, "{}", entry.summary)?;
        }
        Action::Run { names, all } => {
            let entries = if *all {
                catalog::select::<String>(&[])?
            } else if !names.is_empty() {
                catalog::select(names.as_slice())?
            } else {
                catalog::select(config.patterns.as_slice())?
            };
            tracing::debug!(count = entries.len(), "running selection");
            catalog::run_entries(&entries, config, out)?;
        }
    }
    Ok(())
}

/// Entry point shared by the one-pattern binaries.
pub fn run_standalone(name: &str) -> Result<()> {
    logging::init("warn", false);
    let entry = catalog::find(name)?;
    let transcript = entry.run()?;
    let stdout = io::stdout();
    transcript.write_to(&mut stdout.lock())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> CatalogConfig {
        CatalogConfig {
            color: false,
            ..CatalogConfig::default()
        }
    }

    fn render(action: Action, config: &CatalogConfig) -> String {
        let mut buf = Vec::new();
        execute(&action, config, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_parse_run_with_names() {
        let cli = Cli::try_parse_from(["pattern-catalog", "run", "command", "proxy"]).unwrap();
        match cli.action {
            Action::Run { names, all } => {
                assert_eq!(names, vec!["command", "proxy"]);
                assert!(!all);
            }
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[test]
    fn test_all_conflicts_with_names() {
        assert!(Cli::try_parse_from(["pattern-catalog", "run", "--all", "command"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["pattern-catalog", "list", "-v", "--config", "c.toml"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("c.toml")));
    }

    #[test]
    fn test_list_filters_by_category() {
        let output = render(
            Action::List {
                category: Some(Category::Creational),
            },
            &plain(),
        );
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("abstract_factory"));
        assert!(lines.iter().all(|line| line.contains("creational")));
    }

    #[test]
    fn test_show_uses_aliases() {
        let output = render(Action::Show { name: "cor".to_string() }, &plain());
        assert!(output.starts_with("Chain of Responsibility (behavioral)\n\n"));
    }

    #[test]
    fn test_run_falls_back_to_configured_patterns() {
        let config = CatalogConfig {
            patterns: vec!["iterator".to_string()],
            ..plain()
        };
        let output = render(
            Action::Run {
                names: Vec::new(),
                all: false,
            },
            &config,
        );
        assert_eq!(output, "1984\nTo Kill a Mockingbird\nThe Great Gatsby\n");
    }

    #[test]
    fn test_run_unknown_pattern_fails() {
        let action = Action::Run {
            names: vec!["bogus".to_string()],
            all: false,
        };
        let mut buf = Vec::new();
        assert!(execute(&action, &plain(), &mut buf).is_err());
        assert!(buf.is_empty());
    }
}
