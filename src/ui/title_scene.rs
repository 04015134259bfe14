//! Title screen: mode selection and control help.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Selectable entries on the title screen, in display order.
pub const MODES: [(&str, &str); 2] = [
    ("Endless", "uniform obstacles, run until you drop"),
    ("Level", "varied course with a finish line"),
];

pub struct TitleScreen {
    pub selected: usize,
}

impl TitleScreen {
    pub fn new() -> Self {
        Self { selected: 0 }
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % MODES.len();
    }

    pub fn select_prev(&mut self) {
        self.selected = (self.selected + MODES.len() - 1) % MODES.len();
    }

    pub fn draw(&self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Clear, area);

        let block = Block::default()
            .title(" Dasher ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::LightCyan));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "D A S H E R",
                Style::default()
                    .fg(Color::LightMagenta)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "a terminal runner",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
            Line::from(""),
        ];

        for (idx, (name, blurb)) in MODES.iter().enumerate() {
            let (marker, style) = if idx == self.selected {
                (
                    "> ",
                    Style::default()
                        .fg(Color::LightCyan)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ("  ", Style::default().fg(Color::Gray))
            };
            lines.push(Line::from(vec![
                Span::styled(format!("{}{:<8}", marker, name), style),
                Span::styled(format!("  {}", blurb), Style::default().fg(Color::DarkGray)),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("[Up/Down]", Style::default().fg(Color::Yellow)),
            Span::styled(" select   ", Style::default().fg(Color::DarkGray)),
            Span::styled("[Enter]", Style::default().fg(Color::Yellow)),
            Span::styled(" start   ", Style::default().fg(Color::DarkGray)),
            Span::styled("[Q]", Style::default().fg(Color::Yellow)),
            Span::styled(" quit", Style::default().fg(Color::DarkGray)),
        ]));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "In game: Space/Up jumps. A press just before landing",
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(Span::styled(
            "or just after leaving the ground still counts.",
            Style::default().fg(Color::DarkGray),
        )));

        let text = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(text, inner);
    }
}

impl Default for TitleScreen {
    fn default() -> Self {
        Self::new()
    }
}
