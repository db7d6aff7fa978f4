//! Lithium-Validation tool server.
//!
//! Speaks line-delimited JSON-RPC on stdin/stdout so a tool-calling host can
//! spawn it as a subprocess. Logs go to stderr; set RUST_LOG=debug for
//! per-request output.

use std::io;

use tracing_subscriber::EnvFilter;

use lithium_contracts::config::ValidatorConfig;
use lithium_interface::ValidationInterface;
use lithium_mcp::ToolServer;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();

    let server = match ValidationInterface::new(ValidatorConfig::default()).and_then(ToolServer::new)
    {
        Ok(server) => server,
        Err(e) => {
            eprintln!("Failed to start tool server: {e}");
            std::process::exit(1);
        }
    };

    let stdin = io::stdin();
    if let Err(e) = server.run(stdin.lock(), io::stdout().lock()) {
        eprintln!("Tool server error: {e}");
        std::process::exit(1);
    }
}
