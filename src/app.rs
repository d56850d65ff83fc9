use std::time::Instant;

use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::{debug, info};
use rand::rngs::StdRng;

use crate::config::Config;
use crate::history::History;
use crate::music::MusicPlayer;
use crate::notify::Notifier;
use crate::scheduler::TickScheduler;
use crate::settings::{SettingsEdit, SettingsField, SettingsPanel};
use crate::timer::{TimerState, Transition};

/// What the event loop should do after handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// The whole timer widget: countdown, history, player and settings
pub struct App {
    pub timer: TimerState,
    pub history: History,
    pub music: MusicPlayer,
    pub settings: SettingsPanel,
    scheduler: TickScheduler,
    notifier: Box<dyn Notifier>,
    rng: StdRng,
}

impl App {
    pub fn new(config: &Config, notifier: Box<dyn Notifier>, mut rng: StdRng) -> Self {
        Self {
            timer: TimerState::new(config.work_minutes, config.break_minutes),
            history: History::new(),
            music: MusicPlayer::new(&mut rng),
            settings: SettingsPanel::new(config.work_minutes, config.break_minutes),
            scheduler: TickScheduler::default(),
            notifier,
            rng,
        }
    }

    pub fn scheduler(&self) -> &TickScheduler {
        &self.scheduler
    }

    /// Installs the next timer state, records a finished session and keeps
    /// the countdown timer in step with the new state.
    fn apply(&mut self, transition: Transition, now: Instant) {
        self.timer = transition.state;
        if let Some(kind) = transition.completed {
            info!("{} session complete", kind);
            self.notifier.notify();
            self.history.record(kind, Local::now());
        }
        self.scheduler.sync(&self.timer, now);
    }

    pub fn on_tick(&mut self, now: Instant) {
        if self.scheduler.poll(now) {
            let transition = self.timer.tick();
            self.apply(transition, now);
        }
    }

    pub fn toggle_running(&mut self, now: Instant) {
        let transition = self.timer.toggle_running();
        self.apply(transition, now);
    }

    pub fn toggle_coffee_break(&mut self, now: Instant) {
        let transition = self.timer.toggle_coffee_break();
        self.apply(transition, now);
    }

    pub fn set_work_minutes(&mut self, minutes: i64, now: Instant) {
        let transition = self.timer.with_work_minutes(minutes);
        self.apply(transition, now);
    }

    pub fn set_break_minutes(&mut self, minutes: i64, now: Instant) {
        let transition = self.timer.with_break_minutes(minutes);
        self.apply(transition, now);
    }

    fn apply_settings_edit(&mut self, edit: SettingsEdit, now: Instant) {
        match edit.field {
            SettingsField::WorkMinutes => self.set_work_minutes(edit.minutes, now),
            SettingsField::BreakMinutes => self.set_break_minutes(edit.minutes, now),
        }
    }

    pub fn toggle_settings(&mut self) {
        self.settings.toggle();
    }

    pub fn toggle_playback(&mut self) {
        self.music.toggle_playback();
    }

    pub fn skip_forward(&mut self) {
        let track = self.music.change_track(&mut self.rng);
        debug!("switched track to {}", track);
    }

    pub fn open_player(&self) {
        self.music.open_in_browser();
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Control {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Control::Quit;
        }

        if self.settings.visible {
            let edit = match key.code {
                KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                    self.settings.switch_focus();
                    return Control::Continue;
                }
                KeyCode::Backspace => self.settings.backspace(),
                KeyCode::Char(c) if c.is_ascii_digit() || c == '-' => self.settings.type_char(c),
                _ => None,
            };
            if let Some(edit) = edit {
                self.apply_settings_edit(edit, now);
                return Control::Continue;
            }
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => return Control::Quit,
            KeyCode::Char(' ') => self.toggle_running(now),
            KeyCode::Char('c') => self.toggle_coffee_break(now),
            KeyCode::Char('s') => self.toggle_settings(),
            KeyCode::Char('p') => self.toggle_playback(),
            KeyCode::Char('n') | KeyCode::Right => self.skip_forward(),
            KeyCode::Char('o') => self.open_player(),
            _ => {}
        }
        Control::Continue
    }

    /// Releases the countdown timer. Called once the loop is done.
    pub fn shutdown(&mut self) {
        self.scheduler.cancel();
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.shutdown();
    }
}
