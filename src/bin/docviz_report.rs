//! docviz-report: run the extraction pipeline without the GUI.
//!
//! Prints the rendering intent as JSON, e.g.
//!   docviz-report report.pdf --kind pie
//!   echo "A: 1\nB: 2" | docviz-report - --kind line

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;

use docviz::chart::ChartKind;
use docviz::data::classify::NumeralRule;
use docviz::data::loader::load_document;
use docviz::pipeline::{Pipeline, SummarizedRun};
use docviz::{Config, summarize};

#[derive(Parser)]
#[command(name = "docviz-report")]
#[command(about = "Extract key: value figures from a document and print the chart intent as JSON")]
#[command(version)]
struct Cli {
    /// PDF or text file to read, or `-` for stdin
    input: PathBuf,

    /// Chart kind: bar, pie, line or histogram
    #[arg(short, long)]
    kind: Option<String>,

    /// Summarize with the configured backend before extracting
    #[arg(short, long)]
    summarize: bool,

    /// Override the numeral rule (grouped or strict)
    #[arg(long)]
    numeral_rule: Option<String>,

    /// Config file (defaults to ~/.docviz/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Pretty-print the JSON
    #[arg(short, long)]
    pretty: bool,
}

fn parse_numeral_rule(s: &str) -> Result<NumeralRule> {
    match s.to_ascii_lowercase().as_str() {
        "grouped" => Ok(NumeralRule::Grouped),
        "strict" => Ok(NumeralRule::Strict),
        other => bail!("unknown numeral rule '{other}' (expected grouped or strict)"),
    }
}

fn read_input(cli: &Cli, config: &Config) -> Result<String> {
    if cli.input.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("reading stdin")?;
        return Ok(text);
    }
    Ok(load_document(&cli.input, config.input.max_upload_bytes)?.text)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?
            .with_context(|| format!("config file {} not found", path.display()))?,
        None => Config::load_or_default()?,
    };
    if let Some(rule) = &cli.numeral_rule {
        config.extraction.numeral_rule = parse_numeral_rule(rule)?;
    }

    let kind: ChartKind = match &cli.kind {
        Some(kind) => kind.parse()?,
        None => config.chart.default_kind,
    };

    let text = read_input(&cli, &config)?;
    let pipeline = Pipeline::from_config(&config);

    let run = if cli.summarize {
        let summarizer = summarize::from_config(&config.summarizer)?
            .with_context(|| {
                format!(
                    "--summarize given but [summarizer] backend is \"{}\"",
                    config.summarizer.backend.name()
                )
            })?;
        pipeline.run_summarized(summarizer.as_ref(), &text, kind)
    } else {
        SummarizedRun {
            summary: None,
            outcome: pipeline.run(&text, kind),
        }
    };
    log::info!("{}", run.outcome.describe());

    let json = if cli.pretty {
        serde_json::to_string_pretty(&run)?
    } else {
        serde_json::to_string(&run)?
    };
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numeral_rule() {
        assert_eq!(parse_numeral_rule("Strict").unwrap(), NumeralRule::Strict);
        assert_eq!(parse_numeral_rule("grouped").unwrap(), NumeralRule::Grouped);
        assert!(parse_numeral_rule("loose").is_err());
    }

    #[test]
    fn test_cli_parses() {
        let cli = Cli::try_parse_from(["docviz-report", "report.pdf", "--kind", "pie", "-s"]).unwrap();
        assert_eq!(cli.kind.as_deref(), Some("pie"));
        assert!(cli.summarize);
        assert!(!cli.pretty);
    }
}
