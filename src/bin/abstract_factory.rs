use anyhow::Context;

fn main() -> anyhow::Result<()> {
    pattern_catalog::cli::run_standalone("abstract_factory").context("abstract_factory demo failed")
}
