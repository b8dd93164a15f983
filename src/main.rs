//! Binary entrypoint.
//!
//! The crate is split into layers:
//! - domain: graph model, DFS engine, Kosaraju condensation (pure, synchronous)
//! - usecase: orchestration + progress events
//! - infrastructure: input parsing, serde, schema validation, event printing
//! - interface: CLI wiring

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    kosaraju_supergraph::interface::cli::run().await
}

#[cfg(test)]
mod tests {
    #[test]
    fn main_returns_usage_error_under_test_harness_args() {
        // Under `cargo test`, env::args() does not match the CLI contract.
        let res = super::main();
        assert!(res.is_err());
    }
}
