mod list;
mod start;
mod terminate;
pub mod types;
pub mod utils;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};

use crate::state::State;

#[derive(Debug, Subcommand)]
pub enum Commands {
    Start(start::Options),
    #[clap(alias = "stop")]
    Terminate(terminate::Options),
    #[clap(alias = "ls")]
    List(list::Options),
}

#[derive(Debug, Parser)]
#[clap(about = "Commands to list, start, and terminate builds")]
#[group(skip)]
pub struct Options {
    #[clap(subcommand)]
    pub commands: Option<Commands>,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let Some(commands) = options.commands else {
        bail!("Need to specify a subcommand");
    };

    match commands {
        Commands::Start(options) => start::handle(options, state).await,
        Commands::Terminate(options) => terminate::handle(options, state).await,
        Commands::List(options) => list::handle(options, state).await,
    }
}
