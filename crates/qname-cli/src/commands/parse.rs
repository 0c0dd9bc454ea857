//! Implementation of the `qname parse` command.

use clap::Args;
use miette::Result;
use qname::parse_ident;
use serde::Serialize;

use crate::output::table::format_parts_table;
use crate::output::IdentDiagnostic;

/// Arguments for the parse command.
#[derive(Debug, Args)]
pub struct ParseArgs {
    /// The qualified name to parse, e.g. 'pg_catalog."My Type"[]'
    pub name: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for parse results.
#[derive(Serialize)]
struct ParseJson<'a> {
    namespace: Option<&'a str>,
    name: &'a str,
    array: bool,
    simple: bool,
    canonical: String,
}

/// Run the parse command.
pub fn run_parse(args: ParseArgs) -> Result<i32> {
    match parse_ident(&args.name) {
        Ok(parsed) => {
            if args.json {
                let output = ParseJson {
                    namespace: parsed.namespace.as_deref(),
                    name: &parsed.name,
                    array: parsed.array,
                    simple: parsed.simple,
                    canonical: parsed.to_string(),
                };
                println!(
                    "{}",
                    serde_json::to_string_pretty(&output)
                        .expect("JSON serialization should not fail")
                );
            } else {
                println!("{}", format_parts_table(&parsed));
            }
            Ok(exitcode::OK)
        }
        Err(e) => {
            if args.json {
                let output = serde_json::json!({
                    "error": e.to_string(),
                    "code": e.code(),
                    "input": e.input(),
                });
                eprintln!(
                    "{}",
                    serde_json::to_string_pretty(&output)
                        .expect("JSON serialization should not fail")
                );
                Ok(exitcode::DATAERR)
            } else {
                let diagnostic = IdentDiagnostic::from_parse_error("<input>", &e);
                Err(diagnostic.into())
            }
        }
    }
}
