//! `logsynth rules` command handler

use std::io::Write;

use serde::Serialize;

use logsynth_pipeline::{AttackRule, BUILTIN_RULES};

use crate::cli::{RulesAction, RulesArgs};
use crate::error::CliError;
use crate::output::{Reporter, TextRender};

/// Execute the `rules` command.
pub fn execute(args: RulesArgs, reporter: &Reporter) -> Result<(), CliError> {
    match args.action {
        RulesAction::List => execute_list(reporter),
    }
}

fn execute_list(reporter: &Reporter) -> Result<(), CliError> {
    let report = RuleListReport {
        total: BUILTIN_RULES.len(),
        rules: BUILTIN_RULES.iter().map(RuleEntry::from).collect(),
    };
    reporter.render(&report)?;
    Ok(())
}

#[derive(Serialize)]
pub struct RuleListReport {
    pub total: usize,
    pub rules: Vec<RuleEntry>,
}

#[derive(Serialize)]
pub struct RuleEntry {
    pub indicator: String,
    pub name: String,
    pub technique: String,
    pub tactic: String,
    pub confidence: String,
    pub service: String,
}

impl From<&AttackRule> for RuleEntry {
    fn from(rule: &AttackRule) -> Self {
        Self {
            indicator: rule.indicator.to_owned(),
            name: rule.name.to_owned(),
            technique: rule.technique.to_owned(),
            tactic: rule.tactic.to_owned(),
            confidence: rule.confidence.to_string(),
            service: rule.service.to_owned(),
        }
    }
}

impl TextRender for RuleListReport {
    fn write_text(&self, w: &mut dyn Write) -> std::io::Result<()> {
        use colored::Colorize;

        writeln!(
            w,
            "Built-in Detection Rules ({} total, evaluated top to bottom)",
            self.total.to_string().bold()
        )?;
        writeln!(w)?;
        writeln!(
            w,
            "{:<25} {:<30} {:<10} {:<16} {:<10} Service",
            "Indicator", "Name", "Technique", "Tactic", "Confidence"
        )?;
        writeln!(w, "{}", "-".repeat(110))?;

        for r in &self.rules {
            let confidence_colored = match r.confidence.as_str() {
                "high" => r.confidence.red(),
                "medium" => r.confidence.yellow(),
                _ => r.confidence.normal(),
            };

            writeln!(
                w,
                "{:<25} {:<30} {:<10} {:<16} {:<10} {}",
                r.indicator, r.name, r.technique, r.tactic, confidence_colored, r.service
            )?;
        }

        Ok(())
    }
}
