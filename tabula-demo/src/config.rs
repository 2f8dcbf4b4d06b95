//! Command line options.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use simplelog::LevelFilter;

/// Interactive demo of the tabula table and input widgets
#[derive(Debug, Parser)]
#[command(name = "tabula-demo")]
#[command(about = "Sortable, selectable table demo", long_about = None)]
pub struct Args {
    /// JSON file with an array of `{id, name, email}` users
    #[arg(short, long)]
    pub data: Option<PathBuf>,

    /// Simulated load time before the table shows its rows
    #[arg(long, default_value_t = 600)]
    pub delay_ms: u64,

    /// Log verbosity written to the cache directory
    #[arg(long, value_enum, default_value_t = LogLevel::Debug)]
    pub log_level: LogLevel,
}

impl Args {
    pub fn load_delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}
