use billsplit_cli::{Cli, config::BillsplitConfig, logging};
use clap::Parser;
use std::io;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = BillsplitConfig::load()?.apply_profile()?;
    logging::init_tracing(&config.logging, cli.verbose)?;
    config.log_loaded();

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    billsplit_cli::run(&cli, &config, stdin.lock(), &mut stdout)
}
