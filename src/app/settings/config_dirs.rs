use directories_next::ProjectDirs;
use std::io;
use std::path::PathBuf;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "beerZoom")
}

/// Per-user configuration directory, e.g. `~/.config/beerZoom`.
pub fn project_config_dir() -> Option<PathBuf> {
    project_dirs().map(|d| d.config_dir().to_path_buf())
}

/// Per-user cache directory; the log file lives here.
pub fn user_cache_dir() -> Option<PathBuf> {
    project_dirs().map(|d| d.cache_dir().to_path_buf())
}

/// Create the config and cache directories if they are missing.
pub fn ensure_dirs_exist() -> io::Result<()> {
    for dir in [project_config_dir(), user_cache_dir()].into_iter().flatten() {
        std::fs::create_dir_all(dir)?;
    }
    Ok(())
}
