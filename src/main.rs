// hanoi: recursive Tower of Hanoi animator with a live call stack

use std::fs::OpenOptions;
use std::io::{self, IsTerminal};
use std::panic;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use hanoi_viz::config::{default_config_path, load_settings, Overrides, Settings};
use hanoi_viz::puzzle::PuzzleState;
use hanoi_viz::solver::{Animator, NarratingPacer, SolveOutcome, SolverControl};
use hanoi_viz::ui::App;

/// Animate the recursive Tower of Hanoi solution
#[derive(Debug, Parser)]
#[command(name = "hanoi", version, about)]
struct Cli {
    /// Number of disks (1-7)
    #[arg(short, long, env = "HANOI_DISKS")]
    disks: Option<i64>,

    /// Pacing delay per move in milliseconds (100-2000)
    #[arg(short, long, env = "HANOI_SPEED_MS")]
    speed: Option<i64>,

    /// Config file (default: $XDG_CONFIG_HOME/hanoi-viz/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the moves to stdout instead of opening the terminal UI
    #[arg(long)]
    headless: bool,

    /// Write logs to this file
    #[arg(long, env = "HANOI_LOG_FILE")]
    log_file: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().or_else(default_config_path);
    let mut settings = load_settings(config_path.as_deref())?;
    settings.apply_overrides(&Overrides {
        disks: cli.disks,
        speed_ms: cli.speed,
        log_file: cli.log_file.clone(),
    });

    init_logging(&settings, cli.headless)?;

    if cli.headless {
        return run_headless(&settings).await;
    }

    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        eprintln!("Error: hanoi requires a terminal (TTY)");
        eprintln!();
        eprintln!("Use --headless to print the moves without the terminal UI:");
        eprintln!("  hanoi --headless --disks {}", settings.disks);
        std::process::exit(1);
    }

    // Restore the terminal before the panic message is printed
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Create and run app
    let res = match App::new(&settings) {
        Ok(mut app) => app.run(&mut terminal).await,
        Err(e) => Err(e),
    };

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.context("terminal UI failed")
}

/// Install the tracing subscriber
///
/// The terminal UI owns stdout and stderr, so without a log file nothing is
/// installed there. Headless runs log to stderr.
fn init_logging(settings: &Settings, headless: bool) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_filter))
        .context("invalid log filter")?;

    if let Some(path) = &settings.log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("cannot open log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();
    } else if headless {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .with_target(false)
            .init();
    }
    Ok(())
}

async fn run_headless(settings: &Settings) -> anyhow::Result<()> {
    let mut state = PuzzleState::new(settings.disks)?;
    let control = SolverControl::new(settings.speed_ms);

    // Ctrl-C stops the run at its next step
    let ctrl_c = control.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            ctrl_c.cancel();
        }
    });

    let mut pacer = NarratingPacer::new(io::stdout());
    let outcome = Animator::new(&mut state, &mut pacer, &control).run().await?;

    println!("{}", state.narration);
    if outcome == SolveOutcome::Cancelled {
        std::process::exit(130);
    }
    Ok(())
}
