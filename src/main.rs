use anyhow::Result;
use snuggles::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
