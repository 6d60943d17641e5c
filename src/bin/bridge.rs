use anyhow::Context;

fn main() -> anyhow::Result<()> {
    pattern_catalog::cli::run_standalone("bridge").context("bridge demo failed")
}
