//! Command-line front end: one subcommand per URL transform.

use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use urlutils::commands::{apply_to_regions, Command, Region};
use urlutils::logging;

/// Top-level CLI for urlutils.
#[derive(Debug, Parser)]
#[command(name = "urlutils")]
#[command(about = "Encode, decode, break down and reassemble URLs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,

    /// Log transform details to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Text to transform and the parts of it to touch.
#[derive(Debug, Args)]
pub struct Input {
    /// Text to transform; read from stdin when omitted.
    pub text: Option<String>,

    /// Byte range of the text to transform, repeatable. Defaults to all of it.
    #[arg(long = "region", value_name = "START..END")]
    pub regions: Vec<Region>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Percent-encode text (line breaks are kept).
    #[command(alias = "urlencode")]
    Encode(Input),

    /// Percent-decode text (`+` becomes a space).
    #[command(alias = "urldecode")]
    Decode(Input),

    /// Break a URL down into a labelled block.
    #[command(alias = "urlparse")]
    Parse(Input),

    /// Reassemble a labelled block into a URL.
    #[command(alias = "urlunparse")]
    Unparse(Input),

    /// Fetch a URL and print the response body.
    #[command(aliases = ["urlresponse", "response"])]
    Fetch(Input),
}

impl CliCommand {
    fn split(self) -> (Command, Input) {
        match self {
            CliCommand::Encode(input) => (Command::Encode, input),
            CliCommand::Decode(input) => (Command::Decode, input),
            CliCommand::Parse(input) => (Command::Parse, input),
            CliCommand::Unparse(input) => (Command::Unparse, input),
            CliCommand::Fetch(input) => (Command::Response, input),
        }
    }

    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        logging::init_logging(cli.verbose)?;

        let (command, input) = cli.command.split();
        let text = match input.text {
            Some(text) => text,
            None => read_stdin()?,
        };
        tracing::debug!(
            "running {} on {} bytes, {} region(s)",
            command,
            text.len(),
            input.regions.len()
        );

        let output = apply_to_regions(&text, &input.regions, command.transform())
            .with_context(|| format!("{} failed", command))?;
        println!("{}", output);

        Ok(())
    }
}

/// Read all of stdin, dropping the single line break a shell pipe usually adds.
fn read_stdin() -> Result<String> {
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("failed to read stdin")?;

    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    Ok(text)
}
