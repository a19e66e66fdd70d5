//! Title, counters, narration banner and the explanation panel

use crate::puzzle::{Phase, PuzzleState};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the one-line title
pub fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            "Tower of Hanoi",
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "  recursive solution with a live call stack",
            Style::default().fg(DEFAULT_THEME.comment),
        ),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(title, area);
}

/// Render the row of counters: total, current move, depth, disks, delay
pub fn render_stats_row(frame: &mut Frame, area: Rect, state: &PuzzleState, speed_ms: u64) {
    let cards = [
        ("Total Moves", state.pegs.total_moves().to_string()),
        ("Current Move", state.pegs.move_count().to_string()),
        ("Recursion Depth", state.call_stack.depth().to_string()),
        ("Disks", state.disk_count().to_string()),
        ("Delay", format!("{} ms", speed_ms)),
    ];

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, cards.len() as u32); 5])
        .split(area);

    for ((title, value), column) in cards.into_iter().zip(columns.iter()) {
        let block = Block::default()
            .title(format!(" {} ", title))
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(DEFAULT_THEME.accent));
        let paragraph = Paragraph::new(Line::from(Span::styled(
            value,
            Style::default()
                .fg(DEFAULT_THEME.fg)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(paragraph, *column);
    }
}

/// Render the narration banner
pub fn render_narration(frame: &mut Frame, area: Rect, narration: &str, phase: Phase) {
    let bg = match phase {
        Phase::Completed => DEFAULT_THEME.success,
        Phase::Stopped => DEFAULT_THEME.error,
        Phase::Ready | Phase::Running => DEFAULT_THEME.banner,
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(
        format!(" {} ", narration),
        Style::default()
            .bg(bg)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// Render the "How It Works" panel
pub fn render_explanation(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" How It Works ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.primary));

    let step = Style::default().fg(DEFAULT_THEME.secondary);
    let text = Style::default().fg(DEFAULT_THEME.fg);

    let lines = vec![
        Line::from(Span::styled(
            "The tower is solved recursively in three steps:",
            text,
        )),
        Line::from(vec![
            Span::styled("1. ", step),
            Span::styled(
                "Move n-1 disks from source to auxiliary (destination is the spare)",
                text,
            ),
        ]),
        Line::from(vec![
            Span::styled("2. ", step),
            Span::styled("Move the largest disk from source to destination", text),
        ]),
        Line::from(vec![
            Span::styled("3. ", step),
            Span::styled(
                "Move n-1 disks from auxiliary to destination (source is the spare)",
                text,
            ),
        ]),
        Line::from(Span::styled(
            "The minimum number of moves is 2^n - 1 for n disks.",
            Style::default().fg(DEFAULT_THEME.comment),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
