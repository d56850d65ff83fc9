use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Widget, Wrap},
};

use crate::{
    history::History,
    music::{MusicPlayer, PlayerControl},
    settings::{SettingsField, SettingsPanel},
};

use super::session_color;

const EMPTY_HISTORY: &str = "No sessions recorded yet.";
const SETTINGS_WIDTH: u16 = 28;
const SETTINGS_HEIGHT: u16 = 5;

/// Finished sessions, newest at the bottom. When the list is taller than
/// the panel the oldest entries scroll off the top.
pub fn render_history(history: &History, area: Rect, buf: &mut Buffer) {
    let block = Block::default().borders(Borders::ALL).title(" History ");

    if history.is_empty() {
        Paragraph::new(Span::styled(
            EMPTY_HISTORY,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ))
        .block(block)
        .render(area, buf);
        return;
    }

    let visible = area.height.saturating_sub(2) as usize;
    let skip = history.len().saturating_sub(visible);
    let items: Vec<ListItem> = history
        .entries()
        .iter()
        .skip(skip)
        .map(|entry| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    entry.completed_at().format("%H:%M:%S").to_string(),
                    Style::default().add_modifier(Modifier::DIM),
                ),
                Span::raw("  "),
                Span::styled(
                    entry.label().to_string(),
                    Style::default().fg(session_color(entry.label())),
                ),
            ]))
        })
        .collect();

    List::new(items).block(block).render(area, buf);
}

fn control_glyph(control: PlayerControl, playing: bool) -> &'static str {
    match control {
        PlayerControl::Shuffle => "⤮",
        PlayerControl::SkipBack => "⏮",
        PlayerControl::PlayPause if playing => "⏸",
        PlayerControl::PlayPause => "▶",
        PlayerControl::SkipForward => "⏭",
        PlayerControl::Repeat => "↻",
    }
}

pub fn render_player(music: &MusicPlayer, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Music ")
        .title_bottom(Line::from(" [p] play/pause  [n] next  [o] open ").centered());

    let mut controls = Vec::new();
    for control in PlayerControl::ALL {
        let style = if control.is_bound() {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        };
        controls.push(Span::styled(control_glyph(control, music.is_playing()), style));
        controls.push(Span::raw("   "));
    }
    controls.pop();

    Paragraph::new(vec![
        Line::from(Span::styled(
            music.embed_url(),
            Style::default().fg(Color::Magenta),
        )),
        Line::from(controls),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(block)
    .render(area, buf);
}

/// Floating editor in the bottom-right corner
pub fn render_settings(settings: &SettingsPanel, area: Rect, buf: &mut Buffer) {
    let width = SETTINGS_WIDTH.min(area.width);
    let height = SETTINGS_HEIGHT.min(area.height);
    let popup = Rect {
        x: area.x + area.width - width,
        y: area.y + area.height - height,
        width,
        height,
    };

    let lines: Vec<Line> = [SettingsField::WorkMinutes, SettingsField::BreakMinutes]
        .into_iter()
        .map(|field| {
            let focused = settings.focus == field;
            let value_style = if focused {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::raw(format!("{:<12}", field.label())),
                Span::styled(format!(" {:>6} ", settings.input(field)), value_style),
            ])
        })
        .chain(std::iter::once(Line::from(Span::styled(
            "tab: next field",
            Style::default().add_modifier(Modifier::DIM),
        ))))
        .collect();

    Clear.render(popup, buf);
    Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Settings "))
        .render(popup, buf);
}
