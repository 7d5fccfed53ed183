use std::path::Path;

use anyhow::Context;
use colored::Colorize;
use redline_diff::{DiffReporter, RedactionConfig, RedactionRegistry};
use tracing::info;

use crate::cli::*;
use crate::sample;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Demo(args) => cmd_demo(args),
        Command::Rules(args) => cmd_rules(args),
    }
}

fn load_registry(rules: Option<&Path>) -> anyhow::Result<RedactionRegistry> {
    match rules {
        Some(path) => {
            let config = RedactionConfig::load(path)
                .with_context(|| format!("loading redaction rules from {}", path.display()))?;
            info!(path = %path.display(), rules = config.rules.len(), "loaded redaction rules");
            Ok(config.into_registry())
        }
        None => Ok(sample::builtin_rules()),
    }
}

/// Diff the sample records under `registry`.
fn demo_report(registry: RedactionRegistry) -> DiffReporter {
    let mut reporter = DiffReporter::new(registry);
    redline_compare::compare(&sample::driver1(), &sample::driver2(), &mut reporter);
    reporter
}

fn cmd_demo(args: DemoArgs) -> anyhow::Result<()> {
    let registry = if args.no_redact {
        RedactionRegistry::new()
    } else {
        load_registry(args.rules.as_deref())?
    };
    let reporter = demo_report(registry);
    for collision in reporter.tree().collisions() {
        eprintln!("{} {} ({:?})", "warning:".yellow().bold(), collision.path, collision.kind);
    }
    println!("{reporter}");
    Ok(())
}

fn cmd_rules(args: RulesArgs) -> anyhow::Result<()> {
    let registry = load_registry(args.rules.as_deref())?;
    if registry.is_empty() {
        println!("No redaction rules.");
        return Ok(());
    }
    for rule in registry.rules() {
        let fields: Vec<&str> = rule.fields().collect();
        println!("{} {}", rule.owner().as_str().cyan().bold(), fields.join(", "));
    }
    Ok(())
}
