use std::process::ExitCode;

use clap::Parser;

use beerZoom::app::settings::{self, Cli, Settings};
use beerZoom::logging;
use beerZoom::runner::run_app;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let _log_guard = match settings::ensure_dirs_exist() {
        Ok(()) => settings::user_cache_dir().and_then(|dir| logging::init(&dir)),
        Err(e) => {
            eprintln!("beerZoom: cannot create config/cache directories: {}", e);
            None
        }
    };

    let result = Settings::resolve(&cli).and_then(|s| {
        tracing::info!(url = %s.url, language = ?s.language, "starting");
        run_app(&s)
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            eprintln!("beerZoom: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
