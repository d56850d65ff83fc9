pub mod panels;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::{
    app::App,
    timer::{format_time, SessionKind},
};

const HORIZONTAL_MARGIN: u16 = 2;
const TIMER_HEIGHT: u16 = 5;
const PLAYER_HEIGHT: u16 = 5;

pub fn session_color(kind: SessionKind) -> Color {
    match kind {
        SessionKind::Work => Color::Green,
        SessionKind::Break => Color::Cyan,
        SessionKind::CoffeeBreak => Color::Yellow,
    }
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(HORIZONTAL_MARGIN)
            .constraints([
                Constraint::Length(TIMER_HEIGHT),
                Constraint::Length(1), // buttons
                Constraint::Length(1), // padding
                Constraint::Min(3),    // history
                Constraint::Length(PLAYER_HEIGHT),
            ])
            .split(area);

        render_timer(self, chunks[0], buf);
        render_buttons(self, chunks[1], buf);
        panels::render_history(&self.history, chunks[3], buf);
        panels::render_player(&self.music, chunks[4], buf);

        if self.settings.visible {
            panels::render_settings(&self.settings, area, buf);
        }
    }
}

fn render_timer(app: &App, area: Rect, buf: &mut Buffer) {
    let kind = app.timer.session_kind();
    let color = session_color(kind);
    let status = if app.timer.running { "running" } else { "paused" };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(Span::styled(
            format!(" {} ", kind),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .title_bottom(Line::from(format!(" {} ", status)).right_aligned());

    let time = Paragraph::new(vec![
        Line::default(),
        Line::from(Span::styled(
            format_time(app.timer.remaining_secs),
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center)
    .block(block);

    time.render(area, buf);
}

fn render_buttons(app: &App, area: Rect, buf: &mut Buffer) {
    let key_style = Style::default().add_modifier(Modifier::BOLD | Modifier::DIM);

    let start_label = if app.timer.running { "Pause" } else { "Start" };
    let coffee_label = if app.timer.coffee_break {
        "Back to work"
    } else {
        "Coffee break (5 min)"
    };

    let spans = vec![
        Span::styled("[space] ", key_style),
        Span::styled(start_label, Style::default().fg(Color::Green)),
        Span::raw("   "),
        Span::styled("[c] ", key_style),
        Span::styled(
            coffee_label,
            Style::default().fg(if app.timer.coffee_break {
                Color::Blue
            } else {
                Color::Yellow
            }),
        ),
        Span::raw("   "),
        Span::styled("[s] ", key_style),
        Span::raw("Settings"),
        Span::raw("   "),
        Span::styled("[q] ", key_style),
        Span::raw("Quit"),
    ];

    Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .render(area, buf);
}
