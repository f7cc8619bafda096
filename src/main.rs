// Company matcher CLI - detect which known company a mail text refers to
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;

use company_matcher_lib::candidates::load_names;
use company_matcher_lib::{CompanyMatch, CompanyMatcher, MatcherConfig};

#[derive(Debug, Parser)]
#[command(name = "company-matcher", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Find the company a text refers to
    Match {
        /// Company list, one name per line
        #[arg(long)]
        names: PathBuf,
        /// Text to match (read from stdin when omitted)
        #[arg(long)]
        text: Option<String>,
        /// Matcher config file (defaults to the user config location if present)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Override the confidence threshold
        #[arg(long)]
        threshold: Option<f64>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write the default matcher config
    InitConfig {
        /// Target file (defaults to the user config location)
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout only carries results
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Match {
            names,
            text,
            config,
            threshold,
            json,
        } => run_match(names, text, config, threshold, json),
        Command::InitConfig { path } => {
            let path = match path {
                Some(p) => p,
                None => MatcherConfig::default_path()?,
            };
            MatcherConfig::default().save_to(&path)?;
            println!("{}", path.display());
            Ok(())
        }
    }
}

fn run_match(
    names_path: PathBuf,
    text: Option<String>,
    config_path: Option<PathBuf>,
    threshold: Option<f64>,
    json: bool,
) -> Result<()> {
    let mut config = load_config(config_path)?;
    if let Some(threshold) = threshold {
        config.confidence_threshold = threshold;
    }

    let names = load_names(&names_path)?;
    let matcher = CompanyMatcher::with_config(names, config)?;

    let text = match text {
        Some(t) => t,
        None => {
            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input)?;
            input
        }
    };

    let result = matcher.find_best_match(&text);
    print_result(result.as_ref(), json)
}

/// Explicit path must exist; the default location is optional
fn load_config(path: Option<PathBuf>) -> Result<MatcherConfig> {
    if let Some(path) = path {
        return MatcherConfig::load_from(&path);
    }

    match MatcherConfig::default_path() {
        Ok(path) if path.exists() => MatcherConfig::load_from(&path),
        Ok(_) => Ok(MatcherConfig::default()),
        Err(e) => {
            tracing::warn!("no default config location, using defaults: {}", e);
            Ok(MatcherConfig::default())
        }
    }
}

fn print_result(result: Option<&CompanyMatch>, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    match result {
        Some(m) => println!(
            "{}\t{:.4}\t{}",
            m.company,
            m.confidence,
            m.strategy.as_str()
        ),
        None => println!("no match"),
    }
    Ok(())
}
