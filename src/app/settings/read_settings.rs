use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use super::config_dirs::project_config_dir;
use super::ResampleFilter;

/// Name of the config file inside the config directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Contents of `config.toml`. Absent keys keep their defaults.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct FileSettings {
    pub url: Option<String>,
    pub background: Option<String>,
    pub language: Option<String>,
    pub messages_dir: Option<PathBuf>,
    pub image_cache: Option<usize>,
    pub filter: Option<ResampleFilter>,
    pub timeout_secs: Option<u64>,
}

/// Parse settings from TOML text.
pub fn parse_settings(text: &str) -> Result<FileSettings, toml::de::Error> {
    toml::from_str(text)
}

/// Load settings from `explicit` or, when `None`, from the per-user config
/// file. A missing default file is not an error; a missing explicit file is.
pub fn load_settings(explicit: Option<&Path>) -> anyhow::Result<Option<FileSettings>> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => match project_config_dir() {
            Some(dir) => {
                let p = dir.join(CONFIG_FILE);
                if !p.exists() {
                    return Ok(None);
                }
                p
            }
            None => return Ok(None),
        },
    };
    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let settings = parse_settings(&text)
        .with_context(|| format!("invalid config file {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded config file");
    Ok(Some(settings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn explicit_file_is_read() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "language = \"hu\"\nfilter = \"lanczos3\"\ntimeout_secs = 3").unwrap();
        let s = load_settings(Some(file.path())).unwrap().unwrap();
        assert_eq!(s.language.as_deref(), Some("hu"));
        assert_eq!(s.filter, Some(ResampleFilter::Lanczos3));
        assert_eq!(s.timeout_secs, Some(3));
        assert!(s.url.is_none());
    }

    #[test]
    fn missing_explicit_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_settings(Some(&dir.path().join("nope.toml"))).is_err());
    }

    #[test]
    fn invalid_toml_errors() {
        assert!(parse_settings("image_cache = \"lots\"").is_err());
        assert_eq!(parse_settings("").unwrap(), FileSettings::default());
    }
}
