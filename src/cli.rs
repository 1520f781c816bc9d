//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `response-mocker`.
#[derive(Debug, Parser)]
#[command(name = "response-mocker", version, about = "Check and query mocked HTTP fixtures")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Load a fixture and list the responses it registers.
    Check {
        /// Path to the fixture YAML file.
        fixture: PathBuf,
    },
    /// Resolve one request against a fixture and print the response.
    Resolve {
        /// Path to the fixture YAML file.
        fixture: PathBuf,
        /// Request verb, e.g. `get`.
        verb: String,
        /// Request URL, optionally with a query string.
        url: String,
        /// Explicit parameter as `key=value`; repeat a key to send a list.
        #[arg(long = "param", value_name = "KEY=VALUE", value_parser = parse_key_value)]
        params: Vec<(String, String)>,
        /// Request header as `name=value`.
        #[arg(long = "header", value_name = "NAME=VALUE", value_parser = parse_key_value)]
        headers: Vec<(String, String)>,
        /// Request body as JSON text.
        #[arg(long)]
        payload: Option<String>,
        /// Exit with an error when the response has an error status.
        #[arg(long)]
        raise_for_status: bool,
    },
}

/// Splits `key=value`; the value may itself contain `=`.
fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got {raw:?}"))
}
