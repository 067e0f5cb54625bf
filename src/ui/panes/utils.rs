//! Small line helpers shared by the panes

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    style::{Modifier, Style},
    text::Line,
};

/// Bold section heading
pub(crate) fn label(text: &str) -> Line<'static> {
    Line::styled(
        text.to_string(),
        Style::default()
            .fg(DEFAULT_THEME.primary)
            .add_modifier(Modifier::BOLD),
    )
}

pub(crate) fn none_or(value: Option<String>) -> String {
    value.unwrap_or_else(|| "none".to_string())
}
