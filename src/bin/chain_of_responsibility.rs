use anyhow::Context;

fn main() -> anyhow::Result<()> {
    pattern_catalog::cli::run_standalone("chain_of_responsibility").context("chain_of_responsibility demo failed")
}
