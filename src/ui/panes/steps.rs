//! Step log pane: every description in the trace, current step highlighted

use crate::trace::{StepKind, Trace};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding},
    Frame,
};

/// Render the step log, scrolling so that `cursor` stays visible
pub fn render_steps_pane<K: StepKind, P>(
    frame: &mut Frame,
    area: Rect,
    trace: &Trace<K, P>,
    cursor: usize,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(" Steps ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::new(1, 0, 0, 0));

    // Account for borders, min 1
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    if cursor < *scroll_offset {
        *scroll_offset = cursor;
    } else if cursor >= *scroll_offset + visible_height {
        *scroll_offset = cursor + 1 - visible_height;
    }

    let items: Vec<ListItem> = trace
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(index, step)| {
            let is_current = index == cursor;
            let (number_style, text_style) = if is_current {
                (
                    Style::default()
                        .fg(DEFAULT_THEME.pointer)
                        .add_modifier(Modifier::BOLD),
                    Style::default()
                        .bg(DEFAULT_THEME.current_line_bg)
                        .fg(DEFAULT_THEME.fg),
                )
            } else if index < cursor {
                (
                    Style::default().fg(DEFAULT_THEME.comment),
                    Style::default().fg(DEFAULT_THEME.comment),
                )
            } else {
                (
                    Style::default().fg(DEFAULT_THEME.comment),
                    Style::default().fg(DEFAULT_THEME.fg),
                )
            };

            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{}{:>3} ", if is_current { "▶" } else { " " }, index + 1),
                    number_style,
                ),
                Span::styled(
                    format!("{:<10} ", step.kind.label()),
                    Style::default().fg(DEFAULT_THEME.secondary),
                ),
                Span::styled(step.description.clone(), text_style),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
