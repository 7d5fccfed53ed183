use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "redline",
    about = "redline — structural diff reports with type-scoped redaction",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Diff the two sample driver records and print the report
    Demo(DemoArgs),
    /// List the redaction rules that would apply
    Rules(RulesArgs),
}

#[derive(Args)]
pub struct DemoArgs {
    /// TOML file of `[[redact]]` rules (replaces the built-in rules)
    #[arg(long)]
    pub rules: Option<PathBuf>,
    /// Report every difference in the clear
    #[arg(long, conflicts_with = "rules")]
    pub no_redact: bool,
}

#[derive(Args)]
pub struct RulesArgs {
    /// TOML file of `[[redact]]` rules (replaces the built-in rules)
    #[arg(long)]
    pub rules: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_demo() {
        let cli = Cli::try_parse_from(["redline", "demo"]).unwrap();
        if let Command::Demo(args) = cli.command {
            assert!(args.rules.is_none());
            assert!(!args.no_redact);
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_demo_with_rules() {
        let cli = Cli::try_parse_from(["redline", "demo", "--rules", "redact.toml"]).unwrap();
        if let Command::Demo(args) = cli.command {
            assert_eq!(args.rules, Some(PathBuf::from("redact.toml")));
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_demo_no_redact() {
        let cli = Cli::try_parse_from(["redline", "demo", "--no-redact"]).unwrap();
        if let Command::Demo(args) = cli.command {
            assert!(args.no_redact);
        } else { panic!("wrong command"); }
    }

    #[test]
    fn no_redact_conflicts_with_rules() {
        assert!(Cli::try_parse_from(["redline", "demo", "--no-redact", "--rules", "r.toml"]).is_err());
    }

    #[test]
    fn parse_rules() {
        let cli = Cli::try_parse_from(["redline", "rules"]).unwrap();
        assert!(matches!(cli.command, Command::Rules(_)));
    }

    #[test]
    fn parse_verbose() {
        let cli = Cli::try_parse_from(["redline", "--verbose", "demo"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn missing_subcommand_is_an_error() {
        assert!(Cli::try_parse_from(["redline"]).is_err());
    }
}
