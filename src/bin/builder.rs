use anyhow::Context;

fn main() -> anyhow::Result<()> {
    pattern_catalog::cli::run_standalone("builder").context("builder demo failed")
}
