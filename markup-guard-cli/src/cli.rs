use std::io::{IsTerminal, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use markup_guard::{Validator, WhitelistConfig, presets};
use tracing::info;

use markup_guard_cli::report::{CheckReport, Input};
use markup_guard_cli::{demo, logging, output};

#[derive(Parser)]
#[command(name = "markup-guard")]
#[command(about = "Validate markup against a tag and attribute whitelist", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate markup given as arguments, files, or stdin
    Check(CheckArgs),

    /// Run the built-in sample inputs against the basic preset
    Demo {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
        format: OutputFormat,
    },
}

#[derive(clap::Args)]
struct CheckArgs {
    /// Markup to validate; reads stdin when neither TEXT nor --file is given
    #[arg(value_name = "TEXT")]
    texts: Vec<String>,

    /// File containing markup to validate (repeatable)
    #[arg(short, long = "file", value_name = "PATH")]
    files: Vec<PathBuf>,

    /// Whitelist config (.json, .yaml, .yml); defaults to the basic preset
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Accept `<name ... />` as a self-closing tag
    #[arg(long)]
    self_closing: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Human,
    Json,
}

/// Parse arguments and run the selected command.
///
/// Returns `Ok(false)` when any input was rejected.
pub fn run() -> Result<bool> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::Check(args) => check(&args),
        Commands::Demo { format } => {
            let validator = Validator::from_config(&presets::basic_html())?;
            let report = CheckReport::run(&validator, &demo::inputs());
            emit(&report, format)?;
            Ok(true)
        }
    }
}

fn check(args: &CheckArgs) -> Result<bool> {
    let mut config = match &args.config {
        Some(path) => WhitelistConfig::load(path)?,
        None => presets::basic_html(),
    };
    if args.self_closing {
        config.allow_self_closing = true;
    }
    let validator = Validator::from_config(&config).context("Invalid whitelist config")?;
    info!(
        tags = validator.config().tag_patterns.len(),
        attributes = validator.config().attribute_patterns.len(),
        "whitelist loaded"
    );

    let inputs = collect_inputs(args)?;
    let report = CheckReport::run(&validator, &inputs);
    emit(&report, args.format)?;
    Ok(report.ok)
}

fn collect_inputs(args: &CheckArgs) -> Result<Vec<Input>> {
    let mut inputs: Vec<Input> = args
        .texts
        .iter()
        .enumerate()
        .map(|(i, text)| Input {
            source: format!("arg #{}", i + 1),
            text: text.clone(),
        })
        .collect();

    for path in &args.files {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        inputs.push(Input {
            source: path.display().to_string(),
            text,
        });
    }

    if inputs.is_empty() {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        inputs.push(Input {
            source: "<stdin>".to_owned(),
            text,
        });
    }

    Ok(inputs)
}

fn emit(report: &CheckReport, format: OutputFormat) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    match format {
        OutputFormat::Json => output::write_json(report, &mut stdout),
        OutputFormat::Human => {
            if !std::io::stdout().is_terminal() {
                colored::control::set_override(false);
            }
            output::write_human(report, &mut stdout)
        }
    }
}
