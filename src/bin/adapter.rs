use anyhow::Context;

fn main() -> anyhow::Result<()> {
    pattern_catalog::cli::run_standalone("adapter").context("adapter demo failed")
}
