//! blame-status - git blame for an editor status bar
//!
//! # Usage
//! ```bash
//! blame-status line src/app.py 10          # Print "Alice, 2 days ago"
//! blame-status line src/app.py 10 --json   # Print the full annotation
//! blame-status -w serve                    # JSON-lines host on stdin/stdout
//! ```

use std::io::{self, Write};
use std::path::PathBuf;

use blame_status::config::DEFAULT_STATUS_KEY;
use blame_status::events::stdio;
use blame_status::{annotate_line, BlameOptions, BlameStatusListener};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Show who last changed a line, and when
#[derive(Parser)]
#[command(name = "blame-status")]
#[command(about = "Git blame for an editor status bar", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Ignore whitespace-only changes (git blame -w)
    #[arg(short = 'w', long, global = true)]
    ignore_whitespace: bool,

    /// Git executable to run
    #[arg(long, value_name = "PROGRAM", default_value = "git", global = true)]
    git: PathBuf,

    /// Status-bar slot the annotation is written to
    #[arg(long, default_value = DEFAULT_STATUS_KEY, global = true)]
    status_key: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Annotate a single line and print it
    Line {
        /// File to blame
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// 1-based line number
        #[arg(value_name = "LINE", value_parser = clap::value_parser!(u64).range(1..))]
        line: u64,

        /// Print the annotation as JSON (`null` when there is none)
        #[arg(long)]
        json: bool,
    },
    /// Read editor events from stdin and write status updates to stdout
    Serve,
}

fn handle_line(file: PathBuf, line: u64, json: bool, options: &BlameOptions) -> anyhow::Result<()> {
    let line = usize::try_from(line)?;
    let annotation = annotate_line(&file, line, options)
        .inspect_err(|e| debug!(error = %e, file = %file.display(), line, "no annotation"))
        .ok();

    let mut stdout = io::stdout().lock();
    if json {
        serde_json::to_writer(&mut stdout, &annotation)?;
        writeln!(stdout)?;
    } else {
        let text = annotation.map(|a| a.text).unwrap_or_default();
        writeln!(stdout, "{}", text)?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Stdout carries status output, logs go to stderr
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let options = BlameOptions {
        git_program: cli.git.into_os_string(),
        ignore_whitespace: cli.ignore_whitespace,
        status_key: cli.status_key,
    };

    match cli.command {
        Commands::Line { file, line, json } => handle_line(file, line, json, &options),
        Commands::Serve => {
            let listener = BlameStatusListener::new(options);
            stdio::serve(&listener, io::stdin().lock(), io::stdout().lock())?;
            Ok(())
        }
    }
}
