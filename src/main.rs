use clap::Parser;
use foundry_chat::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Ask(args) => cli::ask::run(args).await,
        Command::Render(args) => cli::render::run(args).await,
        Command::Split(args) => cli::split::run(args).await,
    }
}
