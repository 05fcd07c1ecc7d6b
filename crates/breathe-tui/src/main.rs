use anyhow::Result;
use breathe_core::music::LogSink;
use breathe_core::settings::AppConfig;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{stdout, Stdout};
use tracing_subscriber::EnvFilter;
mod ui;
use ui::app::App;

fn main() -> Result<()> {
    init_logging();

    let config = AppConfig::load();
    let mut terminal = init_terminal()?;
    let mut app = App::new(config, Box::new(LogSink));

    let result = app.run(&mut terminal);

    restore_terminal(&mut terminal)?;

    result
}

/// Log to a file in the data directory; stderr would tear up the
/// alternate screen. Logging is best effort -- the app runs fine without.
fn init_logging() {
    let Some(dirs) = directories::ProjectDirs::from("", "", "breathe") else {
        return;
    };
    if std::fs::create_dir_all(dirs.data_dir()).is_err() {
        return;
    }
    let Ok(file) = std::fs::File::create(dirs.data_dir().join("breathe.log")) else {
        return;
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
}

fn init_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
