//! invhue command-line front end.
//!
//! Argument parsing and output formatting live here so they can be tested
//! without spawning the binary.

use std::io::Write;

use anyhow::{bail, Context, Result};
use invhue_core::{invert_hue_rotate, FilterChain};
use serde::Serialize;
use tracing::{debug, error};

pub const USAGE: &str = "\
Usage: invhue [OPTIONS] <COLOR>...

Applies `filter: invert(1) hue-rotate(180deg)` to each #RRGGBB color.

Options:
      --json     Print one JSON object per color
      --css      Also print the equivalent CSS filter
  -v, --verbose  Enable debug logging (RUST_LOG overrides)
  -h, --help     Print this help
";

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `<input> -> <output>`
    #[default]
    Plain,
    /// One JSON object per line.
    Json,
}

/// Settings collected from the command line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CliConfig {
    pub colors: Vec<String>,
    pub format: OutputFormat,
    pub show_css: bool,
    pub verbose: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Transform(CliConfig),
}

/// Parse arguments, excluding the program name.
pub fn parse_args<I, S>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut config = CliConfig::default();
    let mut only_colors = false;

    for arg in args {
        let arg = arg.into();
        if only_colors {
            config.colors.push(arg);
            continue;
        }
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--json" => config.format = OutputFormat::Json,
            "--css" => config.show_css = true,
            "-v" | "--verbose" => config.verbose = true,
            "--" => only_colors = true,
            // "#..." colors never start with '-', so anything else dashed is a typo
            flag if flag.starts_with('-') => bail!("unknown option: {flag}"),
            _ => config.colors.push(arg),
        }
    }

    if config.colors.is_empty() {
        bail!("no colors given\n\n{USAGE}");
    }
    Ok(Command::Transform(config))
}

#[derive(Serialize)]
struct Record<'a> {
    input: &'a str,
    output: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    filter: Option<&'a str>,
}

/// Transform every configured color and write the results to `out`.
///
/// Invalid colors are logged and skipped; if any were skipped the call
/// fails after the remaining colors have been written.
pub fn run<W: Write>(config: &CliConfig, out: &mut W) -> Result<()> {
    let css = FilterChain::invert_hue_rotate().to_css();
    let filter = config.show_css.then_some(css.as_str());

    if filter.is_some() && config.format == OutputFormat::Plain {
        writeln!(out, "filter: {css};")?;
    }

    let mut failed = 0usize;
    for color in &config.colors {
        let output = match invert_hue_rotate(color) {
            Ok(output) => output,
            Err(e) => {
                error!("{e}");
                failed += 1;
                continue;
            }
        };

        match config.format {
            OutputFormat::Plain => writeln!(out, "{color} -> {output}")?,
            OutputFormat::Json => {
                let record = Record {
                    input: color,
                    output,
                    filter,
                };
                let line = serde_json::to_string(&record)
                    .with_context(|| format!("failed to serialize result for {color}"))?;
                writeln!(out, "{line}")?;
            }
        }
    }

    debug!(total = config.colors.len(), failed, "done");
    if failed > 0 {
        bail!(
            "{failed} of {} colors could not be transformed",
            config.colors.len()
        );
    }
    Ok(())
}
