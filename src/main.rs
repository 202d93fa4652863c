use anyhow::{Result, anyhow};
use clap::Parser;
use colored::Colorize;

use cmddiff::compare::Status;
use cmddiff::config::CmddiffConfig;
use cmddiff::pipeline::{self, Settings, Summary};
use cmddiff::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle no-color flag
    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = load_config(&cli)?;
    let settings = Settings::resolve(&cli, &config);

    let summary = pipeline::run(&settings)?;
    print_summary(&summary);

    Ok(())
}

/// Explicit --config must load; otherwise fall back to auto-discovery
fn load_config(cli: &Cli) -> Result<CmddiffConfig> {
    if let Some(path) = &cli.config {
        let config = CmddiffConfig::load_from_path_with_error(path).map_err(|e| anyhow!(e))?;
        if cli.verbose {
            println!("{}", format!("Using config: {}", path.display()).cyan());
        }
        return Ok(config);
    }

    let cwd = std::env::current_dir()?;
    match CmddiffConfig::discover(&cwd) {
        Some((config, path)) => {
            if cli.verbose && config.has_config() {
                println!("{}", format!("Using config: {}", path.display()).cyan());
            }
            Ok(config)
        }
        None => Ok(CmddiffConfig::default()),
    }
}

fn print_summary(summary: &Summary) {
    println!(
        "{} Report complete! Output saved to: {}",
        "✓".green(),
        summary.output.display()
    );

    let parts: Vec<String> = Status::ALL
        .iter()
        .filter_map(|&status| match summary.count(status) {
            0 => None,
            n => Some(format!("{} {}", n, status.as_str().to_lowercase())),
        })
        .collect();

    println!(
        "{} command(s) compared ({})",
        summary.commands.to_string().bold(),
        parts.join(", ")
    );

    for source in &summary.missing_sources {
        println!(
            "{} no data for '{}'; its commands are reported as missing",
            "Note:".yellow(),
            source
        );
    }
}
