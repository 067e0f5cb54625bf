//! Algorithm state pane
//!
//! Each payload type knows how to draw itself through [`StatePane`]. The pane
//! only ever looks at the current step: payloads are self-contained, so no
//! history is needed to draw one.

use super::utils::{label, none_or};
use crate::generators::brackets::BracketPayload;
use crate::generators::reversal::ReversalPayload;
use crate::generators::window::{SumWindowPayload, UniqueRunPayload};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

/// Payloads that can be drawn into the state pane
pub trait StatePane {
    fn state_lines(&self) -> Vec<Line<'static>>;
}

/// Render the state pane: current step description on top, payload below
pub fn render_state_pane<P: StatePane>(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    kind_label: &str,
    description: &str,
    payload: &P,
) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD),
        )
        .padding(Padding::new(1, 1, 0, 0));

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!(" {} ", kind_label),
                Style::default()
                    .bg(DEFAULT_THEME.primary)
                    .fg(ratatui::style::Color::Black)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(description.to_string(), Style::default().fg(DEFAULT_THEME.fg)),
        ]),
        Line::default(),
    ];
    lines.extend(payload.state_lines());

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn node_name(values: &[i64], cursor: Option<usize>) -> String {
    none_or(cursor.map(|i| values[i].to_string()))
}

impl StatePane for ReversalPayload {
    fn state_lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![label("Nodes (memory order)")];

        if self.values.is_empty() {
            lines.push(Line::styled(
                "  (empty list)",
                Style::default().fg(DEFAULT_THEME.comment),
            ));
        }

        for (index, value) in self.values.iter().enumerate() {
            let here = Some(index);
            let tags: Vec<&str> = [
                ("head", self.head),
                ("prev", self.prev),
                ("current", self.current),
                ("next", self.next),
            ]
            .iter()
            .filter(|(_, cursor)| *cursor == here)
            .map(|(name, _)| *name)
            .collect();

            let node_style = if tags.is_empty() {
                Style::default().fg(DEFAULT_THEME.fg)
            } else {
                Style::default()
                    .fg(DEFAULT_THEME.pointer)
                    .add_modifier(Modifier::BOLD)
            };

            let mut spans = vec![
                Span::styled(format!("  ({:>3})", value), node_style),
                Span::styled(" → ", Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled(
                    format!("{:<5}", node_name(&self.values, self.links[index])),
                    Style::default().fg(DEFAULT_THEME.primary),
                ),
            ];
            if !tags.is_empty() {
                spans.push(Span::styled(
                    format!("  ◀ {}", tags.join(", ")),
                    Style::default().fg(DEFAULT_THEME.pointer),
                ));
            }
            lines.push(Line::from(spans));
        }

        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled("prev ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::raw(node_name(&self.values, self.prev)),
            Span::styled("   current ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::raw(node_name(&self.values, self.current)),
            Span::styled("   next ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::raw(node_name(&self.values, self.next)),
        ]));

        if self.result.is_some() {
            lines.push(Line::default());
            lines.push(Line::from(vec![
                Span::styled("Reversed: ", Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled(
                    self.describe_order(),
                    Style::default()
                        .fg(DEFAULT_THEME.success)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
        }
        lines
    }
}

impl StatePane for BracketPayload {
    fn state_lines(&self) -> Vec<Line<'static>> {
        let mut symbols = vec![Span::styled("Input  ", Style::default().fg(DEFAULT_THEME.comment))];
        for (index, symbol) in self.input.iter().enumerate() {
            let style = match self.position {
                Some(p) if p == index && self.mismatch => Style::default()
                    .bg(DEFAULT_THEME.error)
                    .fg(ratatui::style::Color::Black),
                Some(p) if p == index => Style::default()
                    .bg(DEFAULT_THEME.pointer)
                    .fg(ratatui::style::Color::Black),
                Some(p) if index < p => Style::default().fg(DEFAULT_THEME.comment),
                _ => Style::default().fg(DEFAULT_THEME.fg),
            };
            symbols.push(Span::styled(format!(" {} ", symbol), style));
        }

        let stack_text = if self.stack.is_empty() {
            "(empty)".to_string()
        } else {
            self.stack
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        };

        let mut lines = vec![
            Line::from(symbols),
            Line::default(),
            Line::from(vec![
                Span::styled(
                    "Stack (bottom → top)  ",
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(
                    stack_text,
                    Style::default()
                        .fg(DEFAULT_THEME.secondary)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled("Mismatch  ", Style::default().fg(DEFAULT_THEME.comment)),
                Span::raw(if self.mismatch { "yes" } else { "no" }),
                Span::styled("   Stack empty  ", Style::default().fg(DEFAULT_THEME.comment)),
                Span::raw(if self.stack.is_empty() { "yes" } else { "no" }),
            ]),
        ];

        if let Some(balanced) = self.result {
            lines.push(Line::default());
            let (text, color) = if balanced {
                ("Balanced", DEFAULT_THEME.success)
            } else {
                ("Not balanced", DEFAULT_THEME.error)
            };
            lines.push(Line::styled(
                text,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ));
        }
        lines
    }
}

fn window_style(index: usize, left: usize, right: Option<usize>) -> Style {
    match right {
        Some(r) if index >= left && index <= r => Style::default()
            .bg(DEFAULT_THEME.window_bg)
            .fg(DEFAULT_THEME.fg)
            .add_modifier(Modifier::BOLD),
        _ => Style::default().fg(DEFAULT_THEME.comment),
    }
}

fn pointer_row(len: usize, left: usize, right: Option<usize>, cell_width: usize) -> Line<'static> {
    let mut row = String::from("       ");
    for index in 0..len {
        let marker = match (index == left, Some(index) == right) {
            (true, true) => "LR",
            (true, false) => "L",
            (false, true) => "R",
            _ => "",
        };
        row.push_str(&format!("{:^width$}", marker, width = cell_width));
    }
    Line::styled(row, Style::default().fg(DEFAULT_THEME.pointer))
}

impl StatePane for UniqueRunPayload {
    fn state_lines(&self) -> Vec<Line<'static>> {
        let mut symbols = vec![Span::styled("Input  ", Style::default().fg(DEFAULT_THEME.comment))];
        for (index, symbol) in self.symbols.iter().enumerate() {
            symbols.push(Span::styled(
                format!(" {} ", symbol),
                window_style(index, self.left, self.right),
            ));
        }

        let window: String = self.window.iter().collect();
        let best = match self.best_range {
            Some((from, to)) => format!(
                "{} (\"{}\")",
                self.best_len,
                self.symbols[from..=to].iter().collect::<String>()
            ),
            None => "0".to_string(),
        };

        let mut lines = vec![
            Line::from(symbols),
            pointer_row(self.symbols.len(), self.left, self.right, 3),
            Line::default(),
            Line::from(vec![
                Span::styled("Window  ", Style::default().fg(DEFAULT_THEME.comment)),
                Span::raw(format!("\"{}\"", window)),
            ]),
            Line::from(vec![
                Span::styled("Best    ", Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled(best, Style::default().fg(DEFAULT_THEME.record)),
            ]),
        ];

        if let Some(result) = self.result {
            lines.push(Line::default());
            lines.push(Line::styled(
                format!("Answer: {}", result),
                Style::default()
                    .fg(DEFAULT_THEME.success)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        lines
    }
}

impl StatePane for SumWindowPayload {
    fn state_lines(&self) -> Vec<Line<'static>> {
        let mut values = vec![Span::styled("Input  ", Style::default().fg(DEFAULT_THEME.comment))];
        for (index, value) in self.values.iter().enumerate() {
            values.push(Span::styled(
                format!("{:^4}", value),
                window_style(index, self.left, self.right),
            ));
        }

        let reached = self.sum >= self.target;
        let best = match (self.best_len, self.best_range) {
            (Some(len), Some((from, to))) => format!("length {} (indices {}..={})", len, from, to),
            _ => "none yet".to_string(),
        };

        let mut lines = vec![
            Line::from(values),
            pointer_row(self.values.len(), self.left, self.right, 4),
            Line::default(),
            Line::from(vec![
                Span::styled("Sum  ", Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled(
                    self.sum.to_string(),
                    Style::default().fg(if reached {
                        DEFAULT_THEME.success
                    } else {
                        DEFAULT_THEME.fg
                    }),
                ),
                Span::styled(
                    format!("  target {}", self.target),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
            ]),
            Line::from(vec![
                Span::styled("Best ", Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled(best, Style::default().fg(DEFAULT_THEME.record)),
            ]),
        ];

        if let Some(result) = self.result {
            lines.push(Line::default());
            lines.push(Line::styled(
                format!("Answer: {}", result),
                Style::default()
                    .fg(DEFAULT_THEME.success)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{BracketMatching, ListReversal};
    use crate::trace::TraceGenerator;

    fn plain(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_reversal_lines_tag_cursors() {
        let trace = ListReversal.generate(&vec![1, 2]);
        let init = trace.get(1).unwrap();
        let text: Vec<String> = init.payload.state_lines().iter().map(plain).collect();
        assert!(text.iter().any(|l| l.contains("head, current")));
    }

    #[test]
    fn test_bracket_lines_show_verdict() {
        let trace = BracketMatching.generate(&"(]".chars().collect::<Vec<char>>());
        let text: Vec<String> = trace.last().payload.state_lines().iter().map(plain).collect();
        assert!(text.iter().any(|l| l == "Not balanced"));
    }
}
