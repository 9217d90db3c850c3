//! Rules command implementation

use std::io::Write;
use std::path::PathBuf;

use console::Style;

use crate::cli::RulesArgs;
use crate::config::{Overrides, Settings};
use crate::error::{AuditError, Result};
use crate::rules::{Rule, RuleSet};

/// Run rules command
pub fn run(project: Option<PathBuf>, config: Option<PathBuf>, args: RulesArgs) -> Result<()> {
    let settings = Settings::load(project, config, &Overrides::default())?;
    let mut out = std::io::stdout().lock();
    render(&mut out, &settings.rules, args.active).map_err(|e| AuditError::ReportWriteFailed {
        reason: e.to_string(),
    })
}

fn render(out: &mut impl Write, active: &RuleSet, only_active: bool) -> std::io::Result<()> {
    for rule in Rule::ALL {
        let enabled = active.is_active(rule);
        if only_active && !enabled {
            continue;
        }
        let capabilities: Vec<String> = rule.capabilities().iter().map(ToString::to_string).collect();

        writeln!(
            out,
            "{} {}",
            Style::new().bold().yellow().apply_to(rule.key()),
            if enabled {
                Style::new().green().apply_to("(active)")
            } else {
                Style::new().dim().apply_to("(inactive)")
            }
        )?;
        writeln!(out, "    {} {}", Style::new().bold().apply_to("Name:"), rule.name())?;
        writeln!(
            out,
            "    {} {}",
            Style::new().bold().apply_to("Severity:"),
            rule.severity()
        )?;
        writeln!(
            out,
            "    {} {}",
            Style::new().bold().apply_to("Description:"),
            rule.description()
        )?;
        writeln!(
            out,
            "    {} {}",
            Style::new().bold().apply_to("Reads:"),
            if capabilities.is_empty() {
                "file names only".to_string()
            } else {
                capabilities.join(", ")
            }
        )?;
    }
    Ok(())
}
