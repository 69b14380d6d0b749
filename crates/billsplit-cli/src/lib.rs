//! Command-line front end for the billsplit allocation engine.
//!
//! This is a presentation layer: it collects raw input, hands it to
//! [`billsplit_core`], and renders results, notices and errors.

pub mod commands;
pub mod config;
pub mod logging;
pub mod render;

use anyhow::{Result, bail};
use billsplit_core::{SplitError, SplitMode, SplitSession};
use clap::{Args, Parser, Subcommand};
use commands::SessionCommand;
use config::{BillsplitConfig, OutputFormat};
use std::io::{BufRead, Write};
use tracing::{debug, warn};

#[derive(Parser, Debug)]
#[command(name = "billsplit")]
#[command(about = "Split a bill and tip between people, evenly or by custom percentages")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format, overriding the configuration file
    #[arg(short, long, global = true, value_enum)]
    pub format: Option<OutputFormat>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Calculate one split and exit
    Split(SplitArgs),
    /// Read commands from stdin and keep a session running
    Session,
}

#[derive(Args, Debug)]
pub struct SplitArgs {
    /// Bill amount before tip
    #[arg(short, long)]
    pub bill: String,

    /// Custom tip percent; the configured service rating applies otherwise
    #[arg(short, long)]
    pub tip: Option<String>,

    /// Number of people sharing evenly
    #[arg(short, long, default_value = "1")]
    pub people: String,

    /// Custom contribution as NAME=PERCENT; repeat for each person
    #[arg(short, long = "share", value_parser = parse_share)]
    pub shares: Vec<Share>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Share {
    pub name: String,
    pub percentage: String,
}

fn parse_share(raw: &str) -> Result<Share, String> {
    let (name, percentage) =
        raw.rsplit_once('=').ok_or_else(|| format!("expected NAME=PERCENT, got '{raw}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing name in '{raw}'"));
    }
    Ok(Share { name: name.to_string(), percentage: percentage.trim().to_string() })
}

pub fn run(
    cli: &Cli,
    config: &BillsplitConfig,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    let format = cli.format.unwrap_or(config.output.format);
    match &cli.command {
        Command::Split(args) => run_split(args, config, format, out),
        Command::Session => run_session(config, format, input, out),
    }
}

pub fn run_split(
    args: &SplitArgs,
    config: &BillsplitConfig,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let mut session = SplitSession::new(config.engine.default_tip_percent);
    session.set_bill_amount(args.bill.as_str());
    if let Some(tip) = &args.tip {
        session.set_custom_tip_enabled(true);
        session.set_tip_percent(tip.as_str());
    }

    if args.shares.is_empty() {
        session.set_number_of_people(args.people.as_str());
    } else {
        if args.shares.len() < 2 {
            bail!("custom contribution needs at least two --share entries");
        }
        session.set_number_of_people(args.shares.len().to_string());
        session.set_mode(SplitMode::CustomContribution)?;
        let ids: Vec<_> = session.roster().iter().map(|c| c.id).collect();
        for (id, share) in ids.into_iter().zip(&args.shares) {
            session.rename_contributor(id, share.name.as_str());
            session.set_percentage(id, &share.percentage);
        }
    }

    session.submit()?;
    write!(out, "{}", render::render_result(session.result(), format)?)?;
    Ok(())
}

/// Applies line commands from `input` until it ends or `quit` is read.
/// Engine errors are reported and the session carries on.
pub fn run_session(
    config: &BillsplitConfig,
    format: OutputFormat,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    let mut session = SplitSession::new(config.engine.default_tip_percent);

    for line in input.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let command = match trimmed.parse::<SessionCommand>() {
            Ok(command) => command,
            Err(e) => {
                writeln!(out, "error: {e}")?;
                continue;
            }
        };
        debug!(?command, "session command");

        if command == SessionCommand::Quit {
            break;
        }
        if let Err(e) = apply(&mut session, command, format, out) {
            let category = e.downcast_ref::<SplitError>().map(SplitError::category);
            match category {
                Some(category) => warn!(category, "{e}"),
                None => return Err(e),
            }
            writeln!(out, "error: {e}")?;
        }
    }
    Ok(())
}

fn apply(
    session: &mut SplitSession,
    command: SessionCommand,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    match command {
        SessionCommand::Bill(raw) => session.set_bill_amount(raw),
        SessionCommand::Tip(raw) => {
            session.set_tip_percent(raw);
            if !session.custom_tip_enabled() {
                writeln!(out, "note: custom tip is off; the service rating applies")?;
            }
        }
        SessionCommand::CustomTip(enabled) => session.set_custom_tip_enabled(enabled),
        SessionCommand::People(raw) => session.set_number_of_people(raw),
        SessionCommand::Mode(mode) => session.set_mode(mode)?,
        SessionCommand::Toggle => {
            let mode = session.toggle_custom_contribution()?;
            writeln!(out, "mode: {mode}")?;
        }
        SessionCommand::Add => {
            let notice = session.add_contributor();
            writeln!(out, "{notice}")?;
        }
        SessionCommand::Remove(id) => {
            let notice = session.remove_contributor(id)?;
            writeln!(out, "{notice}")?;
        }
        SessionCommand::Rename(id, name) => session.rename_contributor(id, name),
        SessionCommand::Percentage(id, raw) => {
            session.set_percentage(id, &raw);
            writeln!(out, "{}", session.contribution_summary())?;
        }
        SessionCommand::Calculate => {
            let notice = session.submit()?;
            writeln!(out, "{notice}")?;
            write!(out, "{}", render::render_result(session.result(), format)?)?;
        }
        SessionCommand::Show => write!(out, "{}", render::render_session(session, format)?)?,
        SessionCommand::Help => writeln!(out, "{}", commands::HELP)?,
        SessionCommand::Quit => {}
    }
    Ok(())
}
