use steam_library_cleanup::config::LibraryConfig;
use steam_library_cleanup::logging;
use steam_library_cleanup::ui::CleanupApp;

fn main() -> Result<(), dialoguer::Error> {
    let config = LibraryConfig::default();
    logging::init(config.verbose);
    log::info!("Starting with library guess {}", config.library_root.display());

    CleanupApp::new(config).run()
}
