//! Call stack pane rendering
//!
//! Lists the active `hanoi(n, from, to, aux)` calls with the most recent
//! call on top, the way a debugger shows a backtrace. The active frame is
//! highlighted; the frames below it are the callers waiting on it.

use crate::puzzle::CallStack;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the call stack pane
pub fn render_stack_pane(frame: &mut Frame, area: Rect, stack: &CallStack) {
    let block = Block::default()
        .title(format!(" Recursion Call Stack (depth {}) ", stack.depth()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let mut all_items = Vec::new();

    if stack.is_empty() {
        all_items.push(
            ListItem::new("Stack is empty").style(Style::default().fg(DEFAULT_THEME.comment)),
        );
    } else {
        let top = stack.depth() - 1;
        let active = stack.current();
        for (offset, call) in stack.most_recent_first().enumerate() {
            let depth = top - offset;
            let is_active = active == Some(call);

            let (marker, call_style) = if is_active {
                (
                    "▸ ",
                    Style::default()
                        .fg(DEFAULT_THEME.function)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ("  ", Style::default().fg(DEFAULT_THEME.muted_function))
            };

            let line = Line::from(vec![
                Span::styled(marker, Style::default().fg(DEFAULT_THEME.secondary)),
                Span::styled(
                    format!("[{}] ", depth),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(call.to_string(), call_style),
            ]);
            all_items.push(ListItem::new(line));
        }
    }

    // Keep the most recent frames when the pane is too short
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    let visible_items: Vec<ListItem> = all_items.into_iter().take(visible_height).collect();

    let list = List::new(visible_items).block(block);
    frame.render_widget(list, area);
}
