//! treesum: Print a content digest for every file under a directory

use clap::Parser;
use treesum_cli::Cli;
use treesum_cli::commands;
use treesum_cli::logging::setup_logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let table = commands::hash::run(&cli).await?;
    print!("{table}");

    Ok(())
}
