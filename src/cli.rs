use crate::version::Scheme;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cmddiff")]
#[command(
    author,
    version,
    about = "Compares command-line tools between two macOS versions",
    after_help = "Example: cmddiff sequoia tahoe"
)]
pub struct Cli {
    /// The name of the 'old' OS (e.g., 'sequoia')
    pub os1_name: String,

    /// The name of the 'new' OS (e.g., 'tahoe')
    pub os2_name: String,

    /// The name of the final output CSV file (default: command_comparison.csv)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Directory containing the command_data_<os>.tsv files (default: current directory)
    #[arg(short = 'd', long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Version ordering used to tell upgrades from downgrades
    #[arg(long, value_enum)]
    pub scheme: Option<Scheme>,

    /// Path to config file (default: auto-discover .cmddiffrc.toml, cmddiff.toml, or .cmddiffrc)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_parses_sources() {
        let cli = Cli::try_parse_from(["cmddiff", "sequoia", "tahoe"]).unwrap();
        assert_eq!(cli.os1_name, "sequoia");
        assert_eq!(cli.os2_name, "tahoe");
        assert!(cli.output.is_none());
        assert!(cli.data_dir.is_none());
        assert!(cli.scheme.is_none());
        assert!(cli.config.is_none());
        assert!(!cli.no_color);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_requires_both_sources() {
        assert!(Cli::try_parse_from(["cmddiff"]).is_err());
        assert!(Cli::try_parse_from(["cmddiff", "sequoia"]).is_err());
    }

    #[test]
    fn test_cli_rejects_extra_positional() {
        assert!(Cli::try_parse_from(["cmddiff", "a", "b", "c"]).is_err());
    }

    #[test]
    fn test_cli_parses_output() {
        let cli = Cli::try_parse_from(["cmddiff", "a", "b", "-o", "out.csv"]).unwrap();
        assert_eq!(cli.output, Some(PathBuf::from("out.csv")));

        let cli = Cli::try_parse_from(["cmddiff", "--output", "report.csv", "a", "b"]).unwrap();
        assert_eq!(cli.output, Some(PathBuf::from("report.csv")));
    }

    #[test]
    fn test_cli_parses_data_dir() {
        let cli = Cli::try_parse_from(["cmddiff", "a", "b", "-d", "inventories"]).unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("inventories")));
    }

    #[test]
    fn test_cli_parses_scheme() {
        let cli = Cli::try_parse_from(["cmddiff", "a", "b", "--scheme", "semver"]).unwrap();
        assert_eq!(cli.scheme, Some(Scheme::Semver));

        let cli = Cli::try_parse_from(["cmddiff", "a", "b", "--scheme", "segments"]).unwrap();
        assert_eq!(cli.scheme, Some(Scheme::Segments));

        assert!(Cli::try_parse_from(["cmddiff", "a", "b", "--scheme", "calver"]).is_err());
    }

    #[test]
    fn test_cli_parses_config_flag() {
        let cli = Cli::try_parse_from(["cmddiff", "a", "b", "--config", "custom.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
    }

    #[test]
    fn test_cli_combined_options() {
        let cli =
            Cli::try_parse_from(["cmddiff", "-v", "--no-color", "sequoia", "tahoe"]).unwrap();
        assert!(cli.verbose);
        assert!(cli.no_color);
    }
}
