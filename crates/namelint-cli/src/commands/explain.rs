//! Explain command - provides detailed explanation of a rule

use clap::Args;
use colored::Colorize;
use namelint_core::analysis::AnalysisEngine;
use namelint_core::config::load_config_or_default_with_warnings;
use namelint_core::rules::{RuleMetadata, RuleRegistry, Severity};
use std::env;

#[derive(Args, Debug)]
pub struct ExplainArgs {
    #[arg(
        value_name = "RULE",
        help = "Rule id or name to explain (e.g., \"H001\", \"svg-file-name\")"
    )]
    pub rule: String,
}

impl ExplainArgs {
    pub fn run(&self) -> anyhow::Result<()> {
        let cwd = env::current_dir()?;
        let config = load_config_or_default_with_warnings(&cwd).config;
        let engine = AnalysisEngine::with_config(&config);

        print!("{}", render_explanation(engine.registry(), &self.rule)?);
        Ok(())
    }
}

fn render_explanation(registry: &RuleRegistry, rule_ref: &str) -> anyhow::Result<String> {
    let Some(rule) = registry.find_rule(rule_ref) else {
        let available: Vec<String> = registry
            .rules()
            .map(|r| format!("{} ({})", r.metadata().id, r.metadata().name))
            .collect();
        anyhow::bail!(
            "Unknown rule '{}'. Available rules: {}",
            rule_ref,
            available.join(", ")
        );
    };

    let metadata = rule.metadata();
    let mut out = String::new();

    out.push('\n');
    out.push_str(&format!("{}\n\n", format!("Rule {}", metadata.id).bold()));
    push_field(&mut out, "Name", metadata.name);
    push_field(&mut out, "Description", metadata.description);
    push_field(&mut out, "Category", metadata.category.as_str());
    push_field(&mut out, "Severity", &format_severity(metadata.severity));

    push_examples(&mut out, metadata);

    let status = if registry.is_rule_enabled(metadata.id) {
        "enabled".green()
    } else {
        "disabled".red()
    };
    out.push('\n');
    out.push_str(&format!("  {}: {}\n\n", "Status".cyan(), status));

    Ok(out)
}

fn push_field(out: &mut String, label: &str, value: &str) {
    out.push_str(&format!("  {}: {}\n", label.cyan(), value));
}

fn push_examples(out: &mut String, metadata: &RuleMetadata) {
    let Some(examples) = metadata.examples else {
        return;
    };

    out.push('\n');
    out.push_str(&format!("  {}:\n", "Examples".cyan()));
    for line in examples.lines() {
        out.push_str(&format!("    {}\n", line));
    }
}

fn format_severity(severity: Severity) -> String {
    let label = severity.as_str();
    match severity {
        Severity::Error => label.red().to_string(),
        Severity::Warning => label.yellow().to_string(),
        Severity::Info => label.blue().to_string(),
        Severity::Hint => label.cyan().to_string(),
    }
}
