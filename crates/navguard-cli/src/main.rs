// CLI for inspecting and dry-running navigation guard configurations

use clap::{Parser, Subcommand};

mod commands;

use commands::{ConfigSource, OutputFormat};

#[derive(Parser, Debug)]
#[command(name = "navguard")]
#[command(about = "Navguard - inspect and dry-run click navigation guards", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the effective guard configuration
    Show {
        #[command(flatten)]
        source: ConfigSource,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Toml)]
        format: OutputFormat,
    },

    /// Classify hrefs as the guard would for a page on ORIGIN
    Check {
        #[command(flatten)]
        source: ConfigSource,

        /// Origin of the page hosting the guard
        #[arg(short, long, default_value = "http://localhost")]
        origin: String,

        /// Raw href attribute values
        #[arg(required = true)]
        hrefs: Vec<String>,
    },

    /// Load and validate a configuration file
    Validate {
        /// TOML or JSON configuration file
        file: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .init();

    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Commands::Show { source, format } => {
            commands::show::run(&source, format, &mut stdout)?;
        }
        Commands::Check {
            source,
            origin,
            hrefs,
        } => {
            commands::check::run(&source, &origin, &hrefs, &mut stdout)?;
        }
        Commands::Validate { file } => {
            commands::validate::run(&file, &mut stdout)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use navguard_core::GuardVariant;

    #[test]
    fn test_parse_check() {
        let cli = Cli::try_parse_from([
            "navguard",
            "check",
            "--variant",
            "user",
            "--origin",
            "https://app.example.com",
            "/reports",
            "#top",
        ])
        .unwrap();

        match cli.command {
            Commands::Check {
                source,
                origin,
                hrefs,
            } => {
                assert_eq!(source.variant, Some(GuardVariant::User));
                assert_eq!(origin, "https://app.example.com");
                assert_eq!(hrefs, vec!["/reports", "#top"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_show_defaults() {
        let cli = Cli::try_parse_from(["navguard", "-v", "show"]).unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Show { source, format } => {
                assert!(source.variant.is_none());
                assert!(source.config.is_none());
                assert_eq!(format, OutputFormat::Toml);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_variant_and_config_conflict() {
        let result = Cli::try_parse_from([
            "navguard",
            "show",
            "--variant",
            "admin",
            "--config",
            "guard.toml",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_check_requires_hrefs() {
        assert!(Cli::try_parse_from(["navguard", "check"]).is_err());
    }

    #[test]
    fn test_unknown_variant_rejected() {
        assert!(Cli::try_parse_from(["navguard", "show", "--variant", "guest"]).is_err());
    }
}
