//! University site server binary.
//!
//! Initializes logging, then runs the HTTP server until shutdown.

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    ucol_core::log();
    ucol_server::run().await
}
