use clap::Parser;
use evalhub_server::{Cli, start_server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    start_server(Cli::parse()).await
}
