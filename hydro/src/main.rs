//! Hydro Freaks terminal application.
//!
//! Log what you drink and watch your freak evolve.
//!
//! # Headless Mode
//!
//! Run with `--headless` for a plain numbered menu on stdin/stdout:
//!
//! ```bash
//! cargo run -p hydro -- --headless --save my_freaks.json
//! ```

mod app;
mod events;
mod headless;
mod ui;
mod view;

use crossterm::{
    event, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use hydro_core::{EvolutionStore, GameConfig};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::OpenOptions;
use std::io::{self, stdout};
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use app::App;
use events::{handle_event, EventResult};
use ui::render::render;

/// What the command line asked for
#[derive(Debug, PartialEq)]
enum Command {
    Play { headless: bool },
    Help,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args: Vec<String> = std::env::args().collect();
    let (command, config) = match parse_args(&args, GameConfig::from_env()?) {
        Ok(parsed) => parsed,
        Err(message) => {
            eprintln!("Error: {message}");
            eprintln!("Run with --help for usage.");
            std::process::exit(2);
        }
    };

    let headless = match command {
        Command::Help => {
            print_help();
            return Ok(());
        }
        Command::Play { headless } => headless,
    };

    init_logging(&config, headless);
    tracing::info!(save = %config.save_path.display(), headless, "hydro starting");

    let (mut store, status) = EvolutionStore::from_config(&config);

    if headless {
        if let hydro_core::LoadStatus::Recovered(e) = &status {
            println!("Error loading game: {e}");
        }
        headless::run_headless(&mut store, config.history_limit)?;
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, App::new(store, config, &status));

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
    }
    println!("Thanks for playing, stay hydrated!");

    Ok(())
}

/// Parse command line arguments on top of the environment config
fn parse_args(args: &[String], mut config: GameConfig) -> Result<(Command, GameConfig), String> {
    let mut headless = false;
    let mut iter = args.iter().skip(1);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok((Command::Help, config)),
            "--headless" => headless = true,
            "--save" => {
                let path = iter.next().ok_or("--save needs a file path")?;
                config = config.with_save_path(path);
            }
            other => return Err(format!("unknown argument '{other}'")),
        }
    }

    Ok((Command::Play { headless }, config))
}

/// Install the tracing subscriber.
///
/// Headless mode logs warnings to stderr. The TUI owns the terminal, so it
/// logs to a file instead, and logs nothing if that file cannot be opened.
fn init_logging(config: &GameConfig, headless: bool) {
    if headless {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .with_target(true)
            .with_writer(io::stderr)
            .init();
        return;
    }

    let file = match OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_path)
    {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Could not open log file {}: {e}", config.log_path.display());
            return;
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render(f, &app))?;

        // Poll for events with timeout for animations
        if event::poll(Duration::from_millis(100))? {
            let ev = event::read()?;
            match handle_event(&mut app, ev) {
                EventResult::Quit => return Ok(()),
                EventResult::NeedsRedraw | EventResult::Continue => {}
            }
        } else {
            app.tick();
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn print_help() {
    println!("Hydro Freaks - drink water, evolve monsters");
    println!();
    println!("USAGE:");
    println!("  hydro [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("  -h, --help        Show this help message");
    println!("  --headless        Run with a plain text menu (no TUI)");
    println!("  --save <PATH>     Save file (default: hydro_freaks.json)");
    println!();
    println!("ENVIRONMENT:");
    println!("  HYDRO_FREAKS_SAVE      Save file path");
    println!("  HYDRO_FREAKS_LOG       Log file used by the TUI (default: hydro_freaks.log)");
    println!("  HYDRO_FREAKS_HISTORY   Drinks shown in the history view (default: 10)");
    println!("  RUST_LOG               Log filter, e.g. debug");
}
