pub mod cli;
pub mod config_dirs;
pub mod keybinds;
pub mod read_settings;

// Re-export commonly used types/functions for convenience
pub use cli::Cli;
pub use config_dirs::{ensure_dirs_exist, project_config_dir, user_cache_dir};
pub use keybinds::*;
pub use read_settings::{load_settings, FileSettings};

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use clap::ValueEnum;
use ratatui::style::Color;
use serde::Deserialize;

/// Default beer list endpoint.
pub const DEFAULT_URL: &str = "https://api.punkapi.com/v2/beers";
/// Default HTTP timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// UI language. Anything other than Hungarian falls back to English.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Hungarian,
}

impl Language {
    /// Parse a language tag such as `en`, `hu` or `hu-HU`. Unknown tags
    /// resolve to English with a warning.
    pub fn from_tag(tag: &str) -> Self {
        let primary = tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "en" => Language::English,
            "hu" => Language::Hungarian,
            _ => {
                tracing::warn!(tag, "unsupported language, defaulting to English");
                Language::English
            }
        }
    }

    /// Tag used to name message files (`en.json`, `hu.json`).
    pub fn tag(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hungarian => "hu",
        }
    }
}

/// Background colour by name; unknown names keep the terminal default.
pub fn parse_background(name: &str) -> Color {
    match name.to_ascii_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        _ => Color::Reset,
    }
}

/// Resampling filter applied when scaling the beer image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ResampleFilter {
    Nearest,
    #[default]
    Triangle,
    CatmullRom,
    Gaussian,
    Lanczos3,
    /// Pick one of the above on every render.
    Random,
}

impl FromStr for ResampleFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <ResampleFilter as ValueEnum>::from_str(s, true)
    }
}

/// Effective runtime settings after merging defaults, the config file and
/// command line flags (later wins).
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub url: String,
    pub background: Color,
    pub language: Language,
    pub messages_dir: Option<PathBuf>,
    /// Bounded image cache capacity; 0 re-fetches on every render.
    pub image_cache: usize,
    pub filter: ResampleFilter,
    pub timeout: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            url: DEFAULT_URL.to_string(),
            background: Color::Reset,
            language: Language::English,
            messages_dir: None,
            image_cache: 0,
            filter: ResampleFilter::default(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Settings {
    /// Overlay values present in the config file.
    pub fn apply_file(&mut self, file: &FileSettings) {
        if let Some(url) = &file.url {
            self.url = url.clone();
        }
        if let Some(bg) = &file.background {
            self.background = parse_background(bg);
        }
        if let Some(lang) = &file.language {
            self.language = Language::from_tag(lang);
        }
        if let Some(dir) = &file.messages_dir {
            self.messages_dir = Some(dir.clone());
        }
        if let Some(n) = file.image_cache {
            self.image_cache = n;
        }
        if let Some(filter) = file.filter {
            self.filter = filter;
        }
        if let Some(secs) = file.timeout_secs {
            self.timeout = Duration::from_secs(secs);
        }
    }

    /// Overlay values given on the command line.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(url) = &cli.url {
            self.url = url.clone();
        }
        if let Some(bg) = &cli.background {
            self.background = parse_background(bg);
        }
        if let Some(lang) = &cli.language {
            self.language = Language::from_tag(lang);
        }
        if let Some(dir) = &cli.messages_dir {
            self.messages_dir = Some(dir.clone());
        }
        if let Some(n) = cli.image_cache {
            self.image_cache = n;
        }
        if let Some(filter) = cli.filter {
            self.filter = filter;
        }
        if let Some(secs) = cli.timeout_secs {
            self.timeout = Duration::from_secs(secs);
        }
    }

    /// Defaults, then the config file (if any), then the CLI.
    pub fn resolve(cli: &Cli) -> anyhow::Result<Self> {
        let mut settings = Settings::default();
        if let Some(file) = load_settings(cli.config.as_deref())? {
            settings.apply_file(&file);
        }
        settings.apply_cli(cli);
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn language_tags() {
        assert_eq!(Language::from_tag("hu-HU"), Language::Hungarian);
        assert_eq!(Language::from_tag("EN"), Language::English);
        assert_eq!(Language::from_tag("xx"), Language::English);
        assert_eq!(Language::Hungarian.tag(), "hu");
    }

    #[test]
    fn background_names() {
        assert_eq!(parse_background("Blue"), Color::Blue);
        assert_eq!(parse_background(""), Color::Reset);
        assert_eq!(parse_background("teal"), Color::Reset);
    }

    #[test]
    fn filter_from_str() {
        assert_eq!("catmull-rom".parse::<ResampleFilter>(), Ok(ResampleFilter::CatmullRom));
        assert_eq!("LANCZOS3".parse::<ResampleFilter>(), Ok(ResampleFilter::Lanczos3));
        assert!("bicubic".parse::<ResampleFilter>().is_err());
    }

    #[test]
    fn cli_overrides_file() {
        let file: FileSettings =
            toml::from_str("url = \"http://file\"\nbackground = \"red\"\nimage_cache = 4\n").unwrap();
        let cli = Cli::try_parse_from(["beerZoom", "--url", "http://cli", "-l", "hu"]).unwrap();
        let mut s = Settings::default();
        s.apply_file(&file);
        s.apply_cli(&cli);
        assert_eq!(s.url, "http://cli");
        assert_eq!(s.background, Color::Red);
        assert_eq!(s.language, Language::Hungarian);
        assert_eq!(s.image_cache, 4);
        assert_eq!(s.filter, ResampleFilter::Triangle);
    }
}
