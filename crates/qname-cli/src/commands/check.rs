//! Implementation of the `qname check` command.

use std::fs::read_to_string;

use clap::Args;
use miette::{miette, IntoDiagnostic, Result};
use owo_colors::OwoColorize;
use qname::parse_ident;
use serde::Serialize;

/// Arguments for the check command.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Names to check. With --file, paths of newline-separated name lists.
    #[arg(required = true)]
    pub names: Vec<String>,

    /// Treat arguments as files containing one name per line
    /// (blank lines and lines starting with `#` are skipped)
    #[arg(long)]
    pub file: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for a single checked name.
#[derive(Debug, Serialize)]
struct CheckJson {
    name: String,
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<&'static str>,
}

/// Run the check command.
pub fn run_check(args: CheckArgs, verbose: bool) -> Result<i32> {
    let names = collect_names(&args)?;

    let mut results: Vec<CheckJson> = Vec::with_capacity(names.len());
    for name in names {
        let entry = match parse_ident(&name) {
            Ok(_) => CheckJson {
                name,
                ok: true,
                error: None,
                code: None,
            },
            Err(e) => CheckJson {
                name,
                ok: false,
                error: Some(e.to_string()),
                code: Some(e.code()),
            },
        };
        results.push(entry);
    }

    let invalid = results.iter().filter(|r| !r.ok).count();

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&results).expect("JSON serialization should not fail")
        );
    } else {
        for result in &results {
            match &result.error {
                Some(error) => {
                    println!("{} {}: {}", "✗".red(), result.name, error);
                }
                None => {
                    if verbose {
                        println!("{} {}", "✓".green(), result.name);
                    }
                }
            }
        }
        println!(
            "{} name(s) checked, {} invalid",
            results.len(),
            if invalid == 0 {
                invalid.to_string()
            } else {
                invalid.red().to_string()
            }
        );
    }

    if invalid > 0 {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}

/// Resolve the command arguments to the list of names to check.
fn collect_names(args: &CheckArgs) -> Result<Vec<String>> {
    if !args.file {
        return Ok(args.names.clone());
    }

    let mut names = Vec::new();
    for path in &args.names {
        let content = read_to_string(path)
            .into_diagnostic()
            .map_err(|e| miette!("Failed to read name list {}: {}", path, e))?;
        for line in content.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            names.push(trimmed.to_string());
        }
    }
    Ok(names)
}
