mod app;
mod domain;
mod input;
mod persistence;
mod ui;

use anyhow::{Context, Result};
use app::AppState;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use persistence::{ensure_inbox_dir, init_local_inbox, log_file, JsonFileStorage};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "inbox")]
#[command(about = "A tiny terminal inbox: add tasks, tick them off, clear them away", long_about = None)]
struct Cli {
    /// Use this directory for inbox storage instead of .inbox / ~/.inbox
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .inbox directory in the current directory
    Init,
    /// Print the tasks and exit
    List,
    /// Add a task without opening the UI
    Add {
        /// Task title
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::Init) = cli.command {
        let current_dir = std::env::current_dir().context("Could not determine current directory")?;
        let inbox_dir = init_local_inbox(&current_dir)?;
        println!("Initialized inbox directory: {}", inbox_dir.display());
        println!("Run 'inbox' here to use it.");
        return Ok(());
    }

    let inbox_dir = ensure_inbox_dir(cli.dir.as_deref())?;
    init_logging(&inbox_dir)?;
    tracing::info!(dir = %inbox_dir.display(), "starting inbox");

    let storage = JsonFileStorage::in_dir(&inbox_dir);
    tracing::debug!(snapshot = %storage.path().display(), "using snapshot file");
    let mut app = AppState::new(Box::new(storage));

    match cli.command {
        Some(Commands::List) => {
            print_tasks(&app);
            Ok(())
        }
        Some(Commands::Add { title }) => {
            let title = title.join(" ");
            if !app.add_task(&title) {
                anyhow::bail!("Task title must not be empty");
            }
            if let Some(error) = &app.last_error {
                anyhow::bail!("{}", error);
            }
            println!("Added: {}", title.trim());
            Ok(())
        }
        Some(Commands::Init) | None => run_tui(&mut app),
    }
}

/// Log to a file in the inbox directory so output never lands on the TUI
fn init_logging(inbox_dir: &Path) -> Result<()> {
    let path = log_file(inbox_dir);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("INBOX_LOG").unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

fn print_tasks(app: &AppState) {
    let tasks = &app.state().tasks;
    if tasks.is_empty() {
        println!("All clear");
        return;
    }
    for task in tasks.iter() {
        let mark = if task.done { "x" } else { " " };
        println!("[{}] {}", mark, task.title);
    }
}

fn run_tui(app: &mut AppState) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        tracing::error!(error = %err, "event loop failed");
    }
    tracing::info!("exiting inbox");
    result
}

/// One key press: at most one action, one transition, one save, one redraw
fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (ignore key release)
            if key.kind == KeyEventKind::Press && input::handle_key(app, key) {
                return Ok(());
            }
        }
    }
}
