//! Towers pane rendering
//!
//! Draws the three pegs side by side with their disks stacked from the
//! base upward. Disk width grows linearly with size:
//!
//! ```text
//! width = min + (max - min) * size / n
//! ```
//!
//! where `max` is derived from the column width so the largest disk always
//! fits its peg's column.

use crate::puzzle::{Disk, PegId, Pegs};
use crate::ui::theme::{darken, disk_color, DEFAULT_THEME};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Narrowest disk, in cells
pub const MIN_DISK_WIDTH: usize = 3;

/// Width of disk `size` out of `n`, for a peg column `column_width` cells wide
///
/// Always odd so the disk centres on the pole.
pub fn disk_width(size: Disk, n: u8, column_width: usize) -> usize {
    let max_width = column_width.saturating_sub(2).max(MIN_DISK_WIDTH);
    let n = usize::from(n.max(1));
    let size = usize::from(size).min(n);
    let width = MIN_DISK_WIDTH + (max_width - MIN_DISK_WIDTH) * size / n;
    if width % 2 == 0 {
        width - 1
    } else {
        width
    }
}

/// Render the towers pane
pub fn render_towers_pane(frame: &mut Frame, area: Rect, pegs: &Pegs) {
    let block = Block::default()
        .title(" Towers ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let inner_width = usize::from(area.width.saturating_sub(2));
    let column_width = (inner_width / 3).max(MIN_DISK_WIDTH + 2);
    let n = pegs.disk_count();

    let mut lines = Vec::new();

    // One spare row of pole above the tallest possible stack
    let height = usize::from(n) + 1;
    for row in (0..height).rev() {
        let mut spans = Vec::new();
        for peg in PegId::ALL {
            let disk = pegs.peg(peg).get(row).copied();
            spans.extend(peg_cell(disk, n, column_width));
        }
        lines.push(Line::from(spans));
    }

    // Bases
    let base_style = Style::default().fg(DEFAULT_THEME.peg);
    let base_width = column_width.saturating_sub(2);
    let base_spans: Vec<Span> = PegId::ALL
        .iter()
        .map(|_| Span::styled(centered("▀".repeat(base_width), column_width), base_style))
        .collect();
    lines.push(Line::from(base_spans));

    // Labels
    let label_spans: Vec<Span> = PegId::ALL
        .iter()
        .map(|peg| {
            Span::styled(
                centered(peg.name().to_string(), column_width),
                Style::default()
                    .fg(DEFAULT_THEME.fg)
                    .add_modifier(Modifier::BOLD),
            )
        })
        .collect();
    lines.push(Line::from(label_spans));

    // Bottom-align the drawing inside the pane
    let inner_height = usize::from(area.height.saturating_sub(2));
    if inner_height > lines.len() {
        let padding = inner_height - lines.len();
        let mut padded = vec![Line::from(""); padding];
        padded.append(&mut lines);
        lines = padded;
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Left);
    frame.render_widget(paragraph, area);
}

/// One row of one peg column: either a disk or the bare pole
fn peg_cell(disk: Option<Disk>, n: u8, column_width: usize) -> Vec<Span<'static>> {
    match disk {
        Some(size) => {
            let width = disk_width(size, n, column_width);
            let left = (column_width - width) / 2;
            let right = column_width - width - left;
            let color = disk_color(size);

            let edge = Style::default().bg(darken(color, 50));
            let body = centered(size.to_string(), width - 2);

            vec![
                Span::raw(" ".repeat(left)),
                Span::styled(" ", edge),
                Span::styled(
                    body,
                    Style::default()
                        .bg(color)
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" ", edge),
                Span::raw(" ".repeat(right)),
            ]
        }
        None => vec![Span::styled(
            centered("│".to_string(), column_width),
            Style::default().fg(DEFAULT_THEME.peg),
        )],
    }
}

/// Pad `text` with spaces to `width` cells, centred
fn centered(text: String, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text;
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}
