//! Main TUI application state and logic

use crate::config::Settings;
use crate::errors::HanoiError;
use crate::puzzle::{PuzzleState, MAX_DISKS, MIN_DISKS, SPEED_STEP_MS};
use crate::solver::{Animator, Pacer, PauseKind, SolveOutcome, SolverControl};
use async_trait::async_trait;
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

/// A user action, decoded from a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Stop,
    Reset,
    MoreDisks,
    FewerDisks,
    /// Longer pacing delay
    SlowDown,
    /// Shorter pacing delay
    SpeedUp,
    Quit,
}

impl Command {
    /// Map a key press to a command
    pub fn from_key(key: KeyEvent) -> Option<Self> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') | KeyCode::Char('C') => Some(Command::Quit),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Some(Command::Start),
            KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Esc => Some(Command::Stop),
            KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Reset),
            KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up => Some(Command::MoreDisks),
            KeyCode::Char('-') | KeyCode::Char('_') | KeyCode::Down => {
                Some(Command::FewerDisks)
            }
            KeyCode::Char(']') | KeyCode::Right => Some(Command::SlowDown),
            KeyCode::Char('[') | KeyCode::Left => Some(Command::SpeedUp),
            KeyCode::Char('q') | KeyCode::Char('Q') => Some(Command::Quit),
            _ => None,
        }
    }
}

/// UI-only state that lives beside the puzzle
#[derive(Debug)]
pub struct UiState {
    /// Status message to display
    pub status_message: String,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Reset requested while a run was in flight
    pub reset_pending: bool,

    /// Terminal failure seen while pacing; surfaced once the run unwinds
    pub terminal_error: Option<io::Error>,
}

impl UiState {
    fn new() -> Self {
        UiState {
            status_message: String::from("Ready!"),
            should_quit: false,
            reset_pending: false,
            terminal_error: None,
        }
    }
}

/// The main application state
pub struct App {
    /// The puzzle session driven by the solver
    pub state: PuzzleState,

    /// Cancellation flag and pacing delay shared with the solver
    pub control: SolverControl,

    pub ui: UiState,

    /// Start requested from the idle loop
    start_pending: bool,
}

impl App {
    /// Create a new app from resolved settings
    pub fn new(settings: &Settings) -> Result<Self, HanoiError> {
        Ok(App {
            state: PuzzleState::new(settings.disks)?,
            control: SolverControl::new(settings.speed_ms),
            ui: UiState::new(),
            start_pending: false,
        })
    }

    /// Run the TUI application
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), HanoiError> {
        let mut events = EventStream::new();

        while !self.ui.should_quit {
            terminal.draw(|f| draw(f, &self.state, &self.ui, self.control.speed_ms()))?;

            if self.start_pending {
                self.start_pending = false;
                self.run_solver(terminal, &mut events).await?;
                continue;
            }

            match events.next().await {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    if let Some(command) = Command::from_key(key) {
                        self.handle_idle_command(command)?;
                    }
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e.into()),
                None => self.ui.should_quit = true,
            }
        }

        Ok(())
    }

    /// Handle a command while no run is in flight
    pub fn handle_idle_command(&mut self, command: Command) -> Result<(), HanoiError> {
        match command {
            Command::Start => {
                self.start_pending = true;
            }
            Command::Stop => {
                self.ui.status_message = "Nothing to stop".to_string();
            }
            Command::Reset => {
                self.state.initialize(self.state.disk_count())?;
                self.ui.status_message = "Reset".to_string();
            }
            Command::MoreDisks | Command::FewerDisks => {
                let current = self.state.disk_count();
                let requested = if command == Command::MoreDisks {
                    current.saturating_add(1).min(MAX_DISKS)
                } else {
                    current.saturating_sub(1).max(MIN_DISKS)
                };
                if requested != current {
                    self.state.initialize(requested)?;
                }
                self.ui.status_message = format!("{} disks", requested);
            }
            Command::SlowDown | Command::SpeedUp => {
                adjust_speed(&self.control, &mut self.ui, command);
            }
            Command::Quit => {
                self.ui.should_quit = true;
            }
        }
        Ok(())
    }

    /// Animate one full solve, handling keys during every pacing delay
    async fn run_solver<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        events: &mut EventStream,
    ) -> Result<(), HanoiError> {
        self.ui.status_message = "Running...".to_string();

        let outcome = {
            let mut pacer = TuiPacer {
                terminal,
                events,
                ui: &mut self.ui,
                control: self.control.clone(),
            };
            Animator::new(&mut self.state, &mut pacer, &self.control)
                .run()
                .await?
        };

        self.finish_run(outcome)
    }

    /// Settle the session once a run has unwound
    fn finish_run(&mut self, outcome: SolveOutcome) -> Result<(), HanoiError> {
        if let Some(e) = self.ui.terminal_error.take() {
            return Err(e.into());
        }

        if self.ui.reset_pending {
            self.ui.reset_pending = false;
            self.state.initialize(self.state.disk_count())?;
            self.ui.status_message = "Reset".to_string();
        } else {
            self.ui.status_message = match outcome {
                SolveOutcome::Completed => "Playback complete".to_string(),
                SolveOutcome::Cancelled => "Stopped".to_string(),
            };
        }
        Ok(())
    }
}

/// Change the pacing delay by one step
fn adjust_speed(control: &SolverControl, ui: &mut UiState, command: Command) {
    let current = control.speed_ms();
    let requested = match command {
        Command::SlowDown => current.saturating_add(SPEED_STEP_MS),
        _ => current.saturating_sub(SPEED_STEP_MS),
    };
    let applied = control.set_speed_ms(requested);
    ui.status_message = format!("Delay {} ms", applied);
}

/// Pacer that keeps the terminal live during each delay
///
/// The delay always runs to its deadline; keys pressed meanwhile only set
/// flags that the solver observes once the pause returns.
struct TuiPacer<'a, B: Backend> {
    terminal: &'a mut Terminal<B>,
    events: &'a mut EventStream,
    ui: &'a mut UiState,
    control: SolverControl,
}

/// Handle a command while a run is in flight
///
/// Nothing here touches the puzzle: stop, reset and quit only raise the
/// cancel flag, and a pending reset is applied once the run has unwound.
pub fn handle_running_command(control: &SolverControl, ui: &mut UiState, command: Command) {
    match command {
        Command::Start => {
            ui.status_message = "Already running".to_string();
        }
        Command::Stop => {
            control.cancel();
            ui.status_message = "Stopping...".to_string();
        }
        Command::Reset => {
            control.cancel();
            ui.reset_pending = true;
            ui.status_message = "Resetting...".to_string();
        }
        Command::MoreDisks | Command::FewerDisks => {
            ui.status_message = "Cannot change disks while running".to_string();
        }
        Command::SlowDown | Command::SpeedUp => {
            adjust_speed(control, ui, command);
        }
        Command::Quit => {
            control.cancel();
            ui.should_quit = true;
        }
    }
}

impl<B: Backend> TuiPacer<'_, B> {
    fn fail(&mut self, error: io::Error) {
        tracing::error!(%error, "terminal failure during animation");
        self.control.cancel();
        self.ui.should_quit = true;
        self.ui.terminal_error.get_or_insert(error);
    }
}

#[async_trait(?Send)]
impl<'a, B: Backend> Pacer for TuiPacer<'a, B> {
    async fn pause(&mut self, state: &PuzzleState, _kind: PauseKind, delay: Duration) {
        let deadline = tokio::time::Instant::now() + delay;

        loop {
            let speed_ms = self.control.speed_ms();
            let ui = &*self.ui;
            let drawn = self
                .terminal
                .draw(|f| draw(f, state, ui, speed_ms))
                .map(|_| ());
            if let Err(e) = drawn {
                self.fail(e);
            }

            tokio::select! {
                _ = tokio::time::sleep_until(deadline) => break,
                maybe_event = self.events.next() => match maybe_event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        if let Some(command) = Command::from_key(key) {
                            handle_running_command(&self.control, self.ui, command);
                        }
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => self.fail(e),
                    None => {
                        self.control.cancel();
                        self.ui.should_quit = true;
                        tokio::time::sleep_until(deadline).await;
                        break;
                    }
                },
            }
        }
    }
}

/// Render the whole screen from the current state
pub fn draw(frame: &mut Frame, state: &PuzzleState, ui: &UiState, speed_ms: u64) {
    let size = frame.area();

    // Title | stats | narration | towers + stack | explanation | status bar
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(8),
            Constraint::Length(7),
            Constraint::Length(1),
        ])
        .split(size);

    super::panes::render_title(frame, rows[0]);
    super::panes::render_stats_row(frame, rows[1], state, speed_ms);
    super::panes::render_narration(frame, rows[2], &state.narration, state.phase);

    // Towers (left) | Call stack (right)
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[3]);

    super::panes::render_towers_pane(frame, columns[0], &state.pegs);
    super::panes::render_stack_pane(frame, columns[1], &state.call_stack);
    super::panes::render_explanation(frame, rows[4]);

    super::panes::render_status_bar(
        frame,
        rows[5],
        &ui.status_message,
        state.pegs.move_count(),
        state.pegs.total_moves(),
        state.phase,
    );
}
