use std::io::Read;
use std::process::ExitCode;

use anyhow::{bail, Context};
use colored::Colorize;
use jcmp_diff::compare_texts_with;

use crate::cli::*;
use crate::render::{render_json, render_summary, render_text};
use crate::settings::Settings;

pub fn run_command(cli: Cli) -> anyhow::Result<ExitCode> {
    let mut settings = Settings::load(cli.config.as_deref())?;
    match cli.command {
        Command::Compare(args) => {
            settings.apply_overrides(&args);
            settings.validate()?;
            cmd_compare(&args, &settings)
        }
        Command::Config(_) => {
            print!("{}", settings.to_toml()?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn cmd_compare(args: &CompareArgs, settings: &Settings) -> anyhow::Result<ExitCode> {
    let (left, right) = read_inputs(args)?;
    let outcome = compare(&left, &right, args.format, settings)?;
    println!("{}", outcome.output);
    Ok(ExitCode::from(exit_status(args.exit_code, &outcome)))
}

/// Process status for a finished comparison: 1 when `--exit-code` is set and
/// the documents differ, 0 otherwise.
fn exit_status(exit_code: bool, outcome: &CompareOutcome) -> u8 {
    u8::from(exit_code && outcome.differs)
}

/// Rendered comparison output.
#[derive(Debug)]
pub struct CompareOutcome {
    pub output: String,
    pub differs: bool,
}

pub fn compare(
    left: &str,
    right: &str,
    format: OutputFormat,
    settings: &Settings,
) -> anyhow::Result<CompareOutcome> {
    let diff = compare_texts_with(left, right, &settings.compare)?;
    let differs = diff.has_changes();
    let output = match format {
        OutputFormat::Json => render_json(&diff)?,
        OutputFormat::Summary => render_summary(&diff.summary()),
        OutputFormat::Text => {
            let text = render_text(&diff, &settings.render);
            if text.is_empty() {
                no_differences(settings.render.color)
            } else {
                text
            }
        }
    };
    Ok(CompareOutcome { output, differs })
}

fn no_differences(color: bool) -> String {
    if color {
        format!("{} No differences.", "✓".green().bold())
    } else {
        "No differences.".to_string()
    }
}

fn read_inputs(args: &CompareArgs) -> anyhow::Result<(String, String)> {
    if args.left == "-" && args.right == "-" {
        bail!("only one document may be read from stdin");
    }
    Ok((read_input(&args.left)?, read_input(&args.right)?))
}

fn read_input(path: &str) -> anyhow::Result<String> {
    if path == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("reading document from stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path))
}
