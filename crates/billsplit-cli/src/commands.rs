//! Line commands understood by the interactive session.

use anyhow::{Context, Result, anyhow, bail};
use billsplit_core::{ContributorId, SplitMode};
use std::str::FromStr;

pub const HELP: &str = "\
commands:
  bill <amount>            set the bill amount
  tip <percent>            set the custom tip percent
  custom-tip on|off        use the custom tip instead of the service rating
  people <count>           set the number of people
  mode even|custom         choose even split or custom contribution
  toggle                   switch between even split and custom contribution
  add                      add a contributor
  remove <id>              remove a contributor
  rename <id> <name>       rename a contributor
  pct <id> <percent>       set a contributor's percentage
  calc                     calculate the split
  show                     show the current roster
  help                     show this help
  quit                     leave the session";

#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    Bill(String),
    Tip(String),
    CustomTip(bool),
    People(String),
    Mode(SplitMode),
    Toggle,
    Add,
    Remove(ContributorId),
    Rename(ContributorId, String),
    Percentage(ContributorId, String),
    Calculate,
    Show,
    Help,
    Quit,
}

impl FromStr for SessionCommand {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        let command = match verb.to_lowercase().as_str() {
            "bill" => SessionCommand::Bill(rest.to_string()),
            "tip" => SessionCommand::Tip(rest.to_string()),
            "custom-tip" => SessionCommand::CustomTip(parse_switch(rest)?),
            "people" => SessionCommand::People(rest.to_string()),
            "mode" => SessionCommand::Mode(parse_mode(rest)?),
            "toggle" => SessionCommand::Toggle,
            "add" => SessionCommand::Add,
            "remove" | "rm" => SessionCommand::Remove(parse_id(rest)?),
            "rename" => {
                let (id, name) = split_id(rest)?;
                if name.is_empty() {
                    bail!("usage: rename <id> <name>");
                }
                SessionCommand::Rename(id, name.to_string())
            }
            "pct" | "percent" => {
                let (id, value) = split_id(rest)?;
                SessionCommand::Percentage(id, value.to_string())
            }
            "calc" | "calculate" => SessionCommand::Calculate,
            "show" => SessionCommand::Show,
            "help" | "?" => SessionCommand::Help,
            "quit" | "exit" => SessionCommand::Quit,
            other => bail!("unknown command '{other}' (try 'help')"),
        };
        Ok(command)
    }
}

fn parse_switch(raw: &str) -> Result<bool> {
    match raw.to_lowercase().as_str() {
        "on" | "true" | "yes" => Ok(true),
        "off" | "false" | "no" => Ok(false),
        other => Err(anyhow!("expected 'on' or 'off', got '{other}'")),
    }
}

fn parse_mode(raw: &str) -> Result<SplitMode> {
    match raw.to_lowercase().as_str() {
        "even" => Ok(SplitMode::EvenSplit),
        "custom" => Ok(SplitMode::CustomContribution),
        other => Err(anyhow!("expected 'even' or 'custom', got '{other}'")),
    }
}

fn parse_id(raw: &str) -> Result<ContributorId> {
    raw.parse().with_context(|| format!("'{raw}' is not a contributor id"))
}

fn split_id(rest: &str) -> Result<(ContributorId, &str)> {
    let (id, tail) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
    Ok((parse_id(id)?, tail.trim()))
}
