//! Game scene rendering.
//!
//! Uses a cell buffer for per-character color control: ground, obstacles,
//! the runner and any live particles are drawn into a 2D grid scaled from
//! world space, then stamped row-by-row as Paragraph widgets.

use super::effects::ParticleSystem;
use crate::core::constants::{GROUND_Y, WORLD_HEIGHT, WORLD_WIDTH};
use crate::core::game_state::{GameState, RunOutcome};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::collections::VecDeque;

const GROUND_CHAR: char = '▓';
const GROUND_SUB: char = '░';

/// Cell in the render buffer with foreground and background colors.
#[derive(Clone, Copy)]
struct Cell {
    ch: char,
    fg: Color,
    bg: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::Reset,
            bg: Color::Reset,
        }
    }
}

/// Render the full game screen: play field, status bar, info panel.
pub fn render_game_scene(
    frame: &mut Frame,
    area: Rect,
    state: &GameState,
    particles: &ParticleSystem,
    log: &VecDeque<String>,
) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Dasher ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::LightCyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(24)])
        .split(inner);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(2)])
        .split(columns[0]);

    render_play_field(frame, left[0], state, particles);
    render_status_bar(frame, left[1], state);
    render_info_panel(frame, columns[1], state, log);

    if state.outcome.is_some() {
        render_outcome_overlay(frame, left[0], state);
    }
}

/// Draw the world into a cell buffer and stamp it.
fn render_play_field(frame: &mut Frame, area: Rect, state: &GameState, particles: &ParticleSystem) {
    if area.height < 4 || area.width < 10 {
        return;
    }

    let rows = area.height as usize;
    let cols = area.width as usize;
    let mut buffer: Vec<Vec<Cell>> = vec![vec![Cell::default(); cols]; rows];

    let x_scale = cols as f64 / WORLD_WIDTH;
    let y_scale = rows as f64 / WORLD_HEIGHT;
    let ground_row = ((GROUND_Y * y_scale).round() as usize).min(rows - 1);

    // ── Ground ────────────────────────────────────────────────────────
    for row in buffer.iter_mut().take(rows).skip(ground_row) {
        for cell in row.iter_mut() {
            *cell = Cell {
                ch: GROUND_CHAR,
                fg: Color::Rgb(60, 120, 110),
                bg: Color::Reset,
            };
        }
    }
    if ground_row > 0 {
        // Sparse texture on the row above the surface, drifting with travel
        let drift = (state.progress.distance() * x_scale) as usize;
        for col in 0..cols {
            if (col + drift) % 7 == 0 {
                let cell = &mut buffer[ground_row - 1][col];
                if cell.ch == ' ' {
                    *cell = Cell {
                        ch: GROUND_SUB,
                        fg: Color::Rgb(45, 80, 75),
                        bg: Color::Reset,
                    };
                }
            }
        }
    }

    // ── Obstacles ─────────────────────────────────────────────────────
    for obstacle in &state.obstacles {
        let hitbox = obstacle.hitbox();
        let col_start = (hitbox.x * x_scale).round() as i32;
        let col_end = ((hitbox.x + hitbox.width) * x_scale).round() as i32;
        let row_top = ((hitbox.y * y_scale).round() as i32).max(0);

        let fg = if hitbox.height > 70.0 {
            Color::LightRed
        } else {
            Color::Rgb(200, 90, 90)
        };

        for col in col_start..col_end.max(col_start + 1) {
            if col < 0 || col >= cols as i32 {
                continue;
            }
            for row in row_top..ground_row as i32 {
                if row >= 0 {
                    buffer[row as usize][col as usize] = Cell {
                        ch: '▮',
                        fg,
                        bg: Color::Reset,
                    };
                }
            }
        }
    }

    // ── Particles (behind the runner) ─────────────────────────────────
    for particle in particles.iter() {
        let col = (particle.x * x_scale).round() as i32;
        let row = (particle.y * y_scale).round() as i32;
        if col < 0 || col >= cols as i32 || row < 0 || row >= ground_row as i32 {
            continue;
        }
        let ch = if particle.age_fraction() < 0.5 { '•' } else { '·' };
        buffer[row as usize][col as usize] = Cell {
            ch,
            fg: Color::Rgb(170, 170, 200),
            bg: Color::Reset,
        };
    }

    // ── Runner ────────────────────────────────────────────────────────
    let body = state.player.hitbox();
    let col_start = (body.x * x_scale).round() as i32;
    let col_end = ((body.x + body.width) * x_scale).round() as i32;
    let row_top = ((body.y * y_scale).round() as i32).max(0);
    let row_bottom = (((body.y + body.height) * y_scale).round() as i32).min(ground_row as i32);

    for col in col_start..col_end.max(col_start + 1) {
        if col < 0 || col >= cols as i32 {
            continue;
        }
        for row in row_top..row_bottom.max(row_top + 1) {
            if row < 0 || row >= rows as i32 {
                continue;
            }
            // Feet row alternates while grounded for a simple run cycle
            let is_feet = row == row_bottom.max(row_top + 1) - 1;
            let ch = if is_feet && state.player.grounded {
                if (state.step_count / 8) % 2 == 0 {
                    '/'
                } else {
                    '\\'
                }
            } else {
                '█'
            };
            buffer[row as usize][col as usize] = Cell {
                ch,
                fg: Color::LightMagenta,
                bg: Color::Reset,
            };
        }
    }

    // ── Progress readout (top-right) ──────────────────────────────────
    let readout = match state.progress.percent() {
        Some(percent) => format!("{}%", percent),
        None => format!("{:.0}m", state.progress.distance() / 10.0),
    };
    let start = cols.saturating_sub(readout.len() + 1);
    for (i, ch) in readout.chars().enumerate() {
        if start + i < cols {
            buffer[0][start + i] = Cell {
                ch,
                fg: Color::White,
                bg: Color::Reset,
            };
        }
    }

    stamp_buffer(frame, area, &buffer);
}

/// Stamp the cell buffer row-by-row, merging runs of identical style.
fn stamp_buffer(frame: &mut Frame, area: Rect, buffer: &[Vec<Cell>]) {
    for (row_idx, row_data) in buffer.iter().enumerate() {
        let mut spans: Vec<Span> = Vec::new();
        let mut current_fg = Color::Reset;
        let mut current_bg = Color::Reset;
        let mut current_text = String::new();

        for &cell in row_data.iter() {
            if (cell.fg != current_fg || cell.bg != current_bg) && !current_text.is_empty() {
                spans.push(Span::styled(
                    std::mem::take(&mut current_text),
                    Style::default().fg(current_fg).bg(current_bg),
                ));
            }
            current_fg = cell.fg;
            current_bg = cell.bg;
            current_text.push(cell.ch);
        }
        if !current_text.is_empty() {
            spans.push(Span::styled(
                current_text,
                Style::default().fg(current_fg).bg(current_bg),
            ));
        }

        let row_area = Rect::new(
            area.x,
            area.y + row_idx as u16,
            row_data.len() as u16,
            1,
        );
        if row_area.y < area.y + area.height {
            frame.render_widget(Paragraph::new(Line::from(spans)), row_area);
        }
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &GameState) {
    let hints: &[(&str, &str)] = match state.outcome {
        Some(RunOutcome::Crashed) => &[("[R]", "Restart"), ("[Esc]", "Title")],
        Some(RunOutcome::Cleared) => &[("[R]", "Run Again"), ("[Esc]", "Title")],
        None => &[("[Space/Up]", "Jump"), ("[R]", "Restart"), ("[Esc]", "Title")],
    };

    let mut spans = vec![Span::styled(
        "Run! ",
        Style::default().fg(Color::LightCyan),
    )];
    for (key, action) in hints {
        spans.push(Span::styled(
            *key,
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}  ", action),
            Style::default().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_info_panel(frame: &mut Frame, area: Rect, state: &GameState, log: &VecDeque<String>) {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mode = if state.is_level_mode() { "Level" } else { "Endless" };
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Mode: ", Style::default().fg(Color::DarkGray)),
            Span::styled(mode, Style::default().fg(Color::LightCyan)),
        ]),
        Line::from(vec![
            Span::styled("Distance: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{:.0}", state.progress.distance()),
                Style::default().fg(Color::White),
            ),
        ]),
    ];

    if let Some(percent) = state.progress.percent() {
        lines.push(progress_bar_line(percent, inner.width));
    }

    lines.push(Line::from(vec![
        Span::styled("Crashes: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{}", state.crashes),
            Style::default().fg(Color::White),
        ),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Best: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{:.0}", state.best_distance),
            Style::default().fg(Color::White),
        ),
    ]));
    lines.push(Line::from(""));

    for entry in log.iter().take(inner.height.saturating_sub(6) as usize) {
        lines.push(Line::from(Span::styled(
            entry.clone(),
            Style::default().fg(Color::Gray),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// One-line proportional progress bar, `[████░░░░] 42%` style.
fn progress_bar_line(percent: u8, panel_width: u16) -> Line<'static> {
    let bar_width = panel_width.saturating_sub(8).clamp(4, 14) as usize;
    let filled = (percent as usize * bar_width) / 100;
    let mut bar = String::new();
    for i in 0..bar_width {
        bar.push(if i < filled { '█' } else { '░' });
    }
    Line::from(vec![
        Span::styled("[", Style::default().fg(Color::DarkGray)),
        Span::styled(bar, Style::default().fg(Color::LightCyan)),
        Span::styled("]", Style::default().fg(Color::DarkGray)),
    ])
}

fn render_outcome_overlay(frame: &mut Frame, area: Rect, state: &GameState) {
    let (title, message, color) = match state.outcome {
        Some(RunOutcome::Cleared) => (
            ":: LEVEL COMPLETE ::",
            "You cleared the course. Press R to run it again.",
            Color::LightGreen,
        ),
        Some(RunOutcome::Crashed) => (
            "GAME OVER",
            "You hit an obstacle. Press R to restart.",
            Color::LightRed,
        ),
        None => return,
    };

    let width = (message.len() as u16 + 6).min(area.width);
    let height = 5u16.min(area.height);
    let overlay = Rect::new(
        area.x + (area.width.saturating_sub(width)) / 2,
        area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    );

    frame.render_widget(Clear, overlay);
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color).add_modifier(Modifier::BOLD));
    let inner = block.inner(overlay);
    frame.render_widget(block, overlay);

    let text = Paragraph::new(vec![Line::from(""), Line::from(message)])
        .alignment(Alignment::Center);
    frame.render_widget(text, inner);
}
