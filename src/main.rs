#![warn(clippy::pedantic)]

use clap::Parser;
use stack_cli::commands::handle_command;
use stack_cli::state::{State, StateOptions};
use stack_cli::{utils, CLI};

#[tokio::main]
async fn main() {
    // setup panic hook
    utils::set_hook();

    let cli = CLI::parse();

    utils::logs(cli.verbose);

    let state = State::new(StateOptions {
        override_region: cli.region,
        override_instance_regions: cli.instance_regions,
        config_path: cli.config,
    });

    if let Err(error) = handle_command(cli.commands, state).await {
        log::error!("{error:#}");
        std::process::exit(1);
    }
}
