use anyhow::Result;
use clap::Parser;
use hk_weather::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    hk_weather::logging::init(cli.verbose);
    hk_weather::run(cli).await
}
