//! コマンドライン引数

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::{default_output_name, ExtractConfig, PipelineConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "gmaps-etl")]
#[command(about = "Scrape coffee-shop listings from Google Maps into CSV and JSON")]
pub struct Cli {
    /// What to search for
    #[arg(long, default_value = "coffee shop")]
    pub search_query: String,

    /// Location to search in
    #[arg(long, default_value = "Semarang, Indonesia")]
    pub location: String,

    /// Maximum number of listings to extract
    #[arg(long)]
    pub max_results: Option<usize>,

    /// Directory for the CSV and JSON files
    #[arg(long, default_value = "output")]
    pub output_dir: PathBuf,

    /// Output file name without extension (default: derived from query and location)
    #[arg(long)]
    pub output_name: Option<String>,

    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,

    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Run Chrome in headless mode
    #[arg(long)]
    pub headless: bool,

    /// Number of times to scroll the results list
    #[arg(long, default_value_t = 20)]
    pub scroll_iterations: u32,

    /// Delay between scrolls in seconds
    #[arg(long, default_value_t = 2)]
    pub scroll_delay: u64,

    /// Keep listings with the same name and address
    #[arg(long)]
    pub keep_duplicates: bool,

    /// Save a screenshot when a listing fails to extract
    #[arg(long)]
    pub debug_screenshots: bool,

    #[arg(long, default_value = "debug_screenshots")]
    pub debug_dir: PathBuf,

    /// Chrome/Chromium executable (default: CHROME_PATH, CHROMIUM_PATH or auto-detect)
    #[arg(long)]
    pub chrome_path: Option<PathBuf>,

    /// Give up on the browser session after this many seconds
    #[arg(long, default_value_t = 600)]
    pub timeout_secs: u64,
}

impl From<&Cli> for PipelineConfig {
    fn from(cli: &Cli) -> Self {
        let extract = ExtractConfig::new(&cli.search_query, &cli.location)
            .with_max_results(cli.max_results)
            .with_headless(cli.headless)
            .with_chrome_path(cli.chrome_path.clone())
            .with_scrolling(cli.scroll_iterations, Duration::from_secs(cli.scroll_delay))
            .with_debug_screenshots(cli.debug_screenshots, &cli.debug_dir)
            .with_timeout(Duration::from_secs(cli.timeout_secs));

        let output_name = cli
            .output_name
            .clone()
            .unwrap_or_else(|| default_output_name(&cli.search_query, &cli.location));

        PipelineConfig::new(extract)
            .with_output_dir(&cli.output_dir)
            .with_output_name(output_name)
            .with_dedupe(!cli.keep_duplicates)
    }
}
