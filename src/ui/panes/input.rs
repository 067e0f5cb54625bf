//! Input line: the raw text the current trace was built from, or the edit buffer

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the input box. `editing` holds the buffer while the learner types.
pub fn render_input_pane(frame: &mut Frame, area: Rect, current: &str, editing: Option<&str>) {
    let (title, border_style) = if editing.is_some() {
        (
            " Input (Enter apply, Esc cancel) ",
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (" Input ", Style::default().fg(DEFAULT_THEME.border_normal))
    };

    let line = match editing {
        Some(buffer) => Line::from(vec![
            Span::styled(buffer.to_string(), Style::default().fg(DEFAULT_THEME.fg)),
            Span::styled("█", Style::default().fg(DEFAULT_THEME.pointer)),
        ]),
        None if current.trim().is_empty() => {
            Line::styled("(empty)", Style::default().fg(DEFAULT_THEME.comment))
        }
        None => Line::styled(current.to_string(), Style::default().fg(DEFAULT_THEME.fg)),
    };

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(paragraph, area);
}
