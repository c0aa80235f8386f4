use std::fs::File;
use std::path::PathBuf;

use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};

const LOG_FILE: &str = "steam_library_cleanup.log";

pub fn get_log_path() -> PathBuf {
    // Next to the executable when possible
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(parent) = exe_path.parent() {
            return parent.join(LOG_FILE);
        }
    }
    PathBuf::from(LOG_FILE)
}

pub fn level_for(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Installs the file logger. Best effort: without a writable log file the
/// tool runs unlogged. The logger itself accepts debug records and the global
/// max level does the filtering, so [`set_verbose`] can change it later.
pub fn init(verbose: bool) {
    let Ok(file) = File::create(get_log_path()) else {
        return;
    };
    let config = ConfigBuilder::new()
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    if WriteLogger::init(LevelFilter::Debug, config, file).is_ok() {
        set_verbose(verbose);
    }
}

/// Follows the verbose toggle once the logger is installed.
pub fn set_verbose(verbose: bool) {
    log::set_max_level(level_for(verbose));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_lowers_the_level() {
        assert_eq!(level_for(true), LevelFilter::Debug);
        assert_eq!(level_for(false), LevelFilter::Info);
    }

    #[test]
    fn log_file_name() {
        assert!(get_log_path().ends_with(LOG_FILE));
    }
}
