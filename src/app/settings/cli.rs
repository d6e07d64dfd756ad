use std::path::PathBuf;

use clap::Parser;

use super::ResampleFilter;

/// Command line flags. Every flag is optional so that values from the
/// config file survive when the flag is omitted.
#[derive(Parser, Debug, Default)]
#[command(name = "beerZoom", version, about = "Browse a beer catalogue in the terminal")]
pub struct Cli {
    /// The URL to fetch the beer list from.
    #[arg(short, long)]
    pub url: Option<String>,

    /// Background colour (black, red, green, yellow, blue, magenta, cyan, white).
    #[arg(short, long)]
    pub background: Option<String>,

    /// UI language (en, hu).
    #[arg(short, long)]
    pub language: Option<String>,

    /// Directory with `en.json` / `hu.json` message overrides.
    #[arg(long)]
    pub messages_dir: Option<PathBuf>,

    /// Number of images kept in memory between renders (0 disables).
    #[arg(long)]
    pub image_cache: Option<usize>,

    /// Image resampling filter.
    #[arg(long, value_enum)]
    pub filter: Option<ResampleFilter>,

    /// HTTP timeout in seconds.
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Config file to read instead of the per-user default.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
