use crate::config::OutputFormat;
use anyhow::Result;
use billsplit_core::{CalculationResult, SplitSession};
use std::fmt::Write;

pub fn render_result(result: &CalculationResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
        OutputFormat::Text => {
            let mut out = String::new();
            writeln!(out, "Tip amount:     {}", result.tip_amount)?;
            writeln!(out, "Total amount:   {}", result.total_amount)?;
            writeln!(out, "Per person:     {}", result.per_person)?;
            writeln!(out, "Tip per person: {}", result.tip_per_person)?;
            writeln!(out)?;
            out.push_str(&roster_table(result));
            Ok(out)
        }
    }
}

fn roster_table(result: &CalculationResult) -> String {
    let width = result.roster.iter().map(|c| c.name.len()).max().unwrap_or(0).max(4);
    let mut out = format!(
        "{:>4}  {:<width$}  {:>7}  {:>12}  {:>10}\n",
        "id", "name", "share", "amount", "tip"
    );
    for c in &result.roster {
        out.push_str(&format!(
            "{:>4}  {:<width$}  {:>6.1}%  {:>12}  {:>10}\n",
            c.id, c.name, c.percentage, c.amount, c.tip_amount
        ));
    }
    out
}

/// Current session state, shown by the `show` command.
pub fn render_session(session: &SplitSession, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        let state = serde_json::json!({
            "inputs": session.inputs(),
            "customTipEnabled": session.custom_tip_enabled(),
            "mode": session.mode(),
            "roster": session.roster(),
            "contribution": session.contribution_summary(),
        });
        return Ok(serde_json::to_string_pretty(&state)?);
    }

    let inputs = session.inputs();
    let mut out = String::new();
    writeln!(out, "Bill amount:      {}", display_or_blank(&inputs.bill_amount))?;
    writeln!(out, "Tip percent:      {}", session.effective_tip_input())?;
    writeln!(out, "Number of people: {}", display_or_blank(&inputs.number_of_people))?;
    writeln!(out, "Mode:             {}", session.mode())?;
    if session.mode().is_custom() {
        writeln!(out, "{}", session.contribution_summary())?;
    }
    for c in session.roster() {
        writeln!(out, "  [{}] {} {:.1}%", c.id, c.name, c.percentage)?;
    }
    Ok(out)
}

fn display_or_blank(raw: &str) -> &str {
    if raw.trim().is_empty() { "(not set)" } else { raw }
}
