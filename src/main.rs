use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use hanzi_hero::config::AppConfig;
use hanzi_hero::core::catalog::Catalog;
use hanzi_hero::core::logging;
use hanzi_hero::core::progress::FileProgressStore;
use hanzi_hero::core::study::StudySession;
use hanzi_hero::tui::app::AppState;
use hanzi_hero::tui::services::Services;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load();
    let data_dir = config.data_dir();

    // Initialize logging (file only, stdout belongs to the terminal)
    let _log_guard = logging::init_tui(&data_dir);
    log::info!("HanziHero v{} starting", hanzi_hero::VERSION);
    config.log_source();

    let catalog = match &config.catalog.path {
        Some(path) => match Catalog::from_json_file(path) {
            Ok(catalog) => catalog,
            Err(e) => {
                log::error!("Failed to load catalog {}: {e}", path.display());
                eprintln!("Error: failed to load catalog {}: {e}", path.display());
                std::process::exit(1);
            }
        },
        None => Catalog::builtin(),
    };
    log::info!(
        "Catalog ready: {} words, {} grammar topics",
        catalog.words().len(),
        catalog.topics().len()
    );

    let store = FileProgressStore::new(&data_dir);
    let session = StudySession::new(catalog, Box::new(store));

    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let services = Services::init(&config, event_tx);
    let mut app = AppState::new(session, services, event_rx);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let result = app.run(&mut terminal, config.tick_rate()).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        log::error!("Terminal error: {e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    log::info!("HanziHero exiting");
    Ok(())
}
