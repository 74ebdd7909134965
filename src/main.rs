mod app;
mod cli;
mod color;
mod db;
mod error;
mod event;
mod generator;
mod i18n;
mod logging;
mod palette;
mod settings;
mod tui;
mod types;
mod ui;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli_opts = cli::Cli::parse();
    let db_path = cli_opts.db.clone().unwrap_or_else(db::default_db_path);
    let log_path = db_path.with_extension("log");
    if let Err(err) = logging::init(&log_path, cli_opts.verbose) {
        eprintln!("Logging disabled: {err}");
    }

    // Preferences are optional; a broken database only costs persistence.
    if let Err(err) = db::init(&db_path) {
        tracing::warn!(%err, "preference database unavailable; running with defaults");
    }
    let store = db::SqliteStore::new(db_path);
    tracing::info!(db = %store.path().display(), "starting revio");
    let mut settings = settings::Settings::load(&store, palette::system_color_scheme());

    if let Some(command) = cli_opts.command {
        return cli::run(command, &store, &mut settings);
    }

    let mut app = app::App::new(store, settings);
    let mut terminal = tui::init()?;
    let result = event::run(&mut app, &mut terminal);

    tui::restore()?;
    tracing::info!("revio stopped");

    result
}
