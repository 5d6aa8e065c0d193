pub mod build;
pub mod completions;

use anyhow::Result;
use clap::Subcommand;

use crate::state::State;

#[derive(Debug, Subcommand)]
pub enum Commands {
    Build(build::Options),
    Completions(completions::Options),
}

pub async fn handle_command(command: Commands, state: State) -> Result<()> {
    match command {
        Commands::Build(options) => build::handle(options, state).await,
        Commands::Completions(options) => {
            completions::handle(options, state);

            Ok(())
        }
    }
}
