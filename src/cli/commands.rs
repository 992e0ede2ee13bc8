use std::path::Path;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::archiver::{DEFAULT_ARCHIVE_NAME, archive_project};
use crate::sanitizer::{ENV_FILE_NAME, SanitizeOutcome, sanitize_env_file};

#[derive(Parser)]
#[command(name = "project-tidy")]
#[command(version = "0.1.0")]
#[command(about = "Housekeeping utilities for a web project checkout", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sanitize .env.local in the current directory
    CleanEnv,
    /// Archive the current directory into project_backup.zip
    Backup,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::CleanEnv) => {
            clean_env()?;
        }
        Some(Commands::Backup) => {
            backup()?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn clean_env() -> Result<()> {
    match sanitize_env_file(Path::new(ENV_FILE_NAME))? {
        SanitizeOutcome::Missing => {
            println!("{ENV_FILE_NAME} not found, nothing to do");
        }
        SanitizeOutcome::Rewritten { lines } => {
            println!("Rewrote {ENV_FILE_NAME} ({lines} lines)");
        }
    }

    Ok(())
}

fn backup() -> Result<()> {
    println!("Starting backup to {DEFAULT_ARCHIVE_NAME}...");

    let stats = archive_project(Path::new("."), DEFAULT_ARCHIVE_NAME)?;

    println!("Backup complete. Total files: {}", stats.files_archived);
    if stats.files_failed > 0 {
        println!("Skipped {} files that could not be read", stats.files_failed);
    }

    Ok(())
}
