use super::args::{Cli, Commands, ScanArgs};
use super::handlers;
use crate::context::ExecutionContext;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    let ctx = ExecutionContext::from_cli(&cli)?;

    match cli.command.unwrap_or_else(|| Commands::Scan(ScanArgs::default())) {
        Commands::Scan(args) => handlers::scan::handle(&ctx, args),
        Commands::Files => handlers::files::handle(&ctx),
        Commands::Checks => handlers::checks::handle(&ctx),
    }
}
