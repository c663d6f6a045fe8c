//! CLI argument parsing using clap.
//!
//! Contains the Cli struct and the Commands enum.

use clap::{
    Parser, Subcommand,
    builder::styling::{AnsiColor, Effects, Styles},
};
use std::path::PathBuf;

fn clap_cargo_style() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default())
}

/// Four-operation arithmetic calculator
#[derive(Parser)]
#[command(
    name = "calc",
    version = env!("CARGO_PKG_VERSION"),
    about = "Four-operation arithmetic calculator",
    long_about = "Add, subtract, multiply and divide two numbers. Failures such as division by zero are reported, not raised.",
    next_line_help = true,
    styles = clap_cargo_style()
)]
pub struct Cli {
    /// Path to custom settings.toml file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Run one calculation
    #[command(
        about = "Apply an operation to two numbers",
        after_help = "Examples:\n  calc calculate addition 5 3\n  calc calculate / 6 0\n  calc calculate '*' -2.5 4 --json\n\nOperations:\n  addition (+), subtraction (-), multiplication (*), division (/)"
    )]
    Calculate {
        /// Operation label or symbol
        #[arg(value_name = "OPERATION")]
        operation: String,

        /// First operand
        #[arg(allow_negative_numbers = true)]
        a: f64,

        /// Second operand
        #[arg(allow_negative_numbers = true)]
        b: f64,

        /// Output in JSON format (overrides settings.toml output.format)
        #[arg(long)]
        json: bool,
    },

    /// Print a fixed set of sample calculations
    #[command(about = "Run the sample calculations")]
    Demo {
        /// Output in JSON format (overrides settings.toml output.format)
        #[arg(long)]
        json: bool,
    },

    /// Initialize project
    #[command(about = "Set up .calculator directory with default configuration")]
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Show current configuration settings
    #[command(about = "Display active settings from .calculator/settings.toml")]
    Config,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_calculate_with_negative_operands() {
        let cli = Cli::try_parse_from(["calc", "calculate", "-", "-5", "-3.5"]).unwrap();
        match cli.command {
            Commands::Calculate {
                operation, a, b, json,
            } => {
                assert_eq!(operation, "-");
                assert_eq!(a, -5.0);
                assert_eq!(b, -3.5);
                assert!(!json);
            }
            _ => panic!("expected calculate"),
        }
    }

    #[test]
    fn test_parse_global_config() {
        let cli = Cli::try_parse_from(["calc", "demo", "--json", "-c", "custom.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        assert!(matches!(cli.command, Commands::Demo { json: true }));
    }

    #[test]
    fn test_rejects_non_numeric_operand() {
        assert!(Cli::try_parse_from(["calc", "calculate", "+", "five", "3"]).is_err());
    }
}
