//! Docmatter - documentation frontmatter maintenance
//!
//! A command line tool that keeps Markdown frontmatter titles present and
//! YAML-safe across a documentation tree, and reports on readability.

use clap::Parser;
use miette::Diagnostic;

mod analyzer;
mod cli;
mod commands;
mod config;
mod discovery;
mod error;
mod frontmatter;
mod logger;
mod operations;
mod ui;
mod workspace;

use cli::{Cli, Commands};
use commands::GlobalOptions;
use error::Result;

fn run(cli: Cli) -> Result<()> {
    let global = GlobalOptions {
        workspace: cli.workspace,
        config: cli.config,
        quiet: cli.quiet,
    };

    match cli.command {
        Commands::AddTitles(args) => commands::add_titles::run(&global, args),
        Commands::QuoteTitles(args) => commands::quote_titles::run(&global, args),
        Commands::Analyze(args) => commands::analyze::run(&global, args),
        Commands::Config => commands::config::run(&global),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    }
}

fn main() {
    let cli = Cli::parse();
    logger::init_logger(cli.verbose, cli.quiet);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        if let Some(help) = e.help() {
            eprintln!("  {help}");
        }
        std::process::exit(1);
    }
}
