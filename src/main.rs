use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod build;
mod commands;
mod config;

#[derive(Parser)]
struct Args {
    /// The command to execute
    #[command(subcommand)]
    command: NotesCommand,
}

#[derive(Parser)]
struct BuildArgs {
    /// The directory containing Markdown sources, templates, and static assets
    #[arg(short, long, default_value = ".")]
    root: PathBuf,

    /// The directory to write the generated site into (relative to the root)
    #[arg(short, long, default_value = "site")]
    output: PathBuf,

    /// Build the question-bank site: parse README.MD into units and marks
    /// tiers and emit a questions.json manifest
    #[arg(short, long, default_value = "false")]
    questions: bool,
}

#[derive(Parser)]
struct CleanArgs {
    /// The directory containing Markdown sources
    #[arg(short, long, default_value = ".")]
    root: PathBuf,

    /// The generated site directory to delete (relative to the root)
    #[arg(short, long, default_value = "site")]
    output: PathBuf,

    /// Print what would be deleted without deleting anything
    #[arg(long, default_value = "false")]
    dry_run: bool,
}

#[derive(Subcommand)]
enum NotesCommand {
    /// Build the site
    Build(BuildArgs),

    /// Delete the generated site
    Clean(CleanArgs),
}

fn main() -> Result<(), anyhow::Error> {
    let args = Args::parse();

    match args.command {
        NotesCommand::Build(args) => {
            commands::build::run(&args)?;
        }
        NotesCommand::Clean(args) => {
            commands::clean::run(&args)?;
        }
    }

    Ok(())
}
