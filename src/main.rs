// main.rs for corn-yield-mapper with ratatui TUI
use clap::Parser;
use crossterm::{
    event::{KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::error::Error;
use std::io::{self, Stdout};
use std::path::{Path, PathBuf};
use std::time::Duration;

use corn_yield_mapper::{
    MapError,
    app::App,
    config::{DATA_FILE, OUTPUT_DIR, TICK_MS},
    data::load_dataset,
    event::{Event, EventHandler},
    loader, logging, plot, ui,
};

#[derive(Parser)]
#[command(
    name = "corn-yield-mapper",
    about = "Proportional symbol map of corn yields over time"
)]
struct Cli {
    /// GeoJSON feature collection with `StateName` and `yrNN` properties
    #[arg(long, default_value = DATA_FILE)]
    data: PathBuf,
    /// Directory for PNG exports
    #[arg(long, default_value = OUTPUT_DIR)]
    output: PathBuf,
    /// Write a PNG (optionally to FILE) and exit instead of opening the map
    #[arg(long, value_name = "FILE")]
    export: Option<Option<PathBuf>>,
    /// Year label to start on, e.g. "12" for `yr12`
    #[arg(long)]
    year: Option<String>,
    /// UI tick interval in milliseconds
    #[arg(long, default_value_t = TICK_MS)]
    tick_ms: u64,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    logging::init(&logging::sink_for(cli.export.is_none(), &cli.output))?;

    match &cli.export {
        Some(target) => export_headless(&cli, target.as_deref())?,
        None => run_tui(&cli)?,
    }
    Ok(())
}

fn export_headless(cli: &Cli, target: Option<&Path>) -> Result<(), MapError> {
    let mut app = App::new();
    app.load(load_dataset(&cli.data)?);
    if let Some(year) = &cli.year {
        app.jump_to_label(year)?;
    }

    let path = target.map_or_else(
        || plot::default_export_path(&cli.output, app.current_label()),
        Path::to_path_buf,
    );
    plot::export_png(&app, &path)?;
    println!("Map generated to {}", path.display());
    Ok(())
}

fn run_tui(cli: &Cli) -> Result<(), MapError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = run_loop(&mut terminal, cli);

    // Restore the terminal even when the loop failed.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, cli: &Cli) -> Result<(), MapError> {
    let events = EventHandler::new(Duration::from_millis(cli.tick_ms));
    loader::spawn_load(cli.data.clone(), events.sender());

    let mut app = App::new();
    let mut start_year = cli.year.clone();

    while !app.quit {
        terminal.draw(|frame| ui::render(frame, &app))?;

        let event = events
            .next()
            .map_err(|e| MapError::Terminal(e.to_string()))?;
        match event {
            Event::Tick | Event::TerminalEvent(_) => {}
            Event::Input(key) => handle_key(&mut app, key, &cli.output),
            Event::DataLoaded(Ok(data)) => {
                app.load(data);
                if let Some(year) = start_year.take() {
                    if let Err(e) = app.jump_to_label(&year) {
                        app.notification = e.to_string();
                    }
                }
            }
            Event::DataLoaded(Err(e)) => app.load_failed(&e),
        }
    }
    Ok(())
}

fn handle_key(app: &mut App, key: KeyEvent, output_dir: &Path) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit = true;
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.quit = true,
        KeyCode::Char('?') => app.toggle_help(),
        KeyCode::Right | KeyCode::Char('.') => app.step_forward(),
        KeyCode::Left | KeyCode::Char(',') => app.step_back(),
        KeyCode::Char(c) if c.is_ascii_digit() => {
            let index = c.to_digit(10).unwrap_or_default() as usize;
            if let Err(e) = app.jump_to(index) {
                app.notification = e.to_string();
            }
        }
        KeyCode::Tab => app.select_next(),
        KeyCode::BackTab => app.select_previous(),
        KeyCode::Char('f') | KeyCode::Char('F') => app.cycle_filter(),
        KeyCode::Char('e') | KeyCode::Char('E') => {
            let path = plot::default_export_path(output_dir, app.current_label());
            app.notification = match plot::export_png(app, &path) {
                Ok(()) => format!("Map exported to {}", path.display()),
                Err(e) => {
                    log::error!("Export failed: {}", e);
                    format!("Export failed: {}", e)
                }
            };
        }
        _ => {}
    }
}
