//! CLI argument definitions

use crate::error::Result;
use crate::infrastructure::{ConfigFile, Settings};
use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "omnitree")]
#[command(
    about = "Convert an Omni Notes database into a folder of markdown notes and a zip archive",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Omni Notes SQLite database (default: omni-notes)
    #[arg(long, value_name = "FILE")]
    pub db: Option<PathBuf>,

    /// Output directory, deleted and rebuilt on every run (default: output)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// TOML file with database/output/archive settings
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Skip writing <output>.zip
    #[arg(long)]
    pub no_archive: bool,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Print nothing on success
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// Resolve settings: defaults, then config file, then environment, then flags
    pub fn settings(&self) -> Result<Settings> {
        let mut settings = Settings::default();

        if let Some(path) = &self.config {
            settings = settings.with_file(ConfigFile::load(path)?);
        }

        settings = settings.with_process_env();

        if let Some(db) = &self.db {
            settings.database = db.clone();
        }
        if let Some(output) = &self.output {
            settings.output = output.clone();
        }
        if self.no_archive {
            settings.archive = false;
        }

        Ok(settings)
    }

    /// Default log level for the verbosity flags
    pub fn log_level(&self) -> &'static str {
        match (self.quiet, self.verbose) {
            (true, _) => "error",
            (false, 0) => "warn",
            (false, 1) => "info",
            (false, _) => "debug",
        }
    }
}
