mod commands;
mod terminal;

use commands::{CommandLine, Commands, hosts, sweep};
use terminal::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let mode = commands.output_mode();

    logging::init_logging(commands.log_level());

    match &commands.command {
        Commands::Sweep { target } => {
            let cfg = commands.sweep_config()?;
            sweep::sweep(target, commands.gateway(), &cfg, mode).await
        }
        Commands::Hosts { target } => hosts::hosts(target, mode),
    }
}
