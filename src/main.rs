use std::{io, path::PathBuf, time::Instant};

use anyhow::{Context, Result};
use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::tty::IsTty;
use log::info;
use pomo::{
    app::{App, Control},
    config::{Config, ConfigStore, FileConfigStore},
    logging, notify,
    runtime::{AppEvent, CrosstermEventSource, EventSource, FixedTicker, Runner, Ticker},
    terminal::TerminalGuard,
};
use rand::{rngs::StdRng, SeedableRng};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

/// pomodoro timer tui with session history and background music
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A pomodoro timer for the terminal: alternating work and break countdowns, a coffee break overlay, a log of finished sessions and a background music picker."
)]
pub struct Cli {
    /// work session length in minutes
    #[clap(short = 'w', long = "work", allow_negative_numbers = true)]
    work_minutes: Option<i64>,

    /// break length in minutes
    #[clap(short = 'b', long = "break", allow_negative_numbers = true)]
    break_minutes: Option<i64>,

    /// sound file to play when a session ends (needs the `sound` feature)
    #[clap(long)]
    bell: Option<PathBuf>,

    /// store the effective work/break lengths and bell as the new defaults
    #[clap(long)]
    save_config: bool,

    /// write log records to this file (filtered by RUST_LOG)
    #[clap(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    /// Command line values win over the stored defaults
    fn merge_into(&self, stored: Config) -> Config {
        Config {
            work_minutes: self.work_minutes.unwrap_or(stored.work_minutes),
            break_minutes: self.break_minutes.unwrap_or(stored.break_minutes),
            bell_sound: self.bell.clone().or(stored.bell_sound),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if !io::stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    logging::init(cli.log_file.as_deref())?;

    let store = FileConfigStore::new();
    let config = cli.merge_into(store.load());
    if cli.save_config {
        store
            .save(&config)
            .with_context(|| format!("failed to write {}", store.path().display()))?;
        info!("saved defaults to {}", store.path().display());
    }

    let mut app = App::new(
        &config,
        notify::from_sound_file(config.bell_sound.clone()),
        StdRng::from_entropy(),
    );

    let mut guard = TerminalGuard::enter().context("failed to prepare the terminal")?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let runner = Runner::new(CrosstermEventSource::new(), FixedTicker::default());
    let result = start_tui(&mut terminal, &mut app, &runner);
    app.shutdown();

    guard.restore().context("failed to restore the terminal")?;
    result
}

fn draw<B: Backend>(terminal: &mut Terminal<B>, app: &App) -> Result<()> {
    terminal.draw(|f| f.render_widget(app, f.area()))?;
    Ok(())
}

fn start_tui<B: Backend, E: EventSource, T: Ticker>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    runner: &Runner<E, T>,
) -> Result<()> {
    draw(terminal, app)?;

    loop {
        // wake up no later than the countdown is due, even under steady input
        let event = runner.step_until(app.scheduler().next_due());
        let before = app.timer;
        let mut redraw = false;

        match event {
            AppEvent::Tick => {}
            AppEvent::Resize => redraw = true,
            AppEvent::Key(key) => {
                if app.handle_key(key, Instant::now()) == Control::Quit {
                    break;
                }
                redraw = true;
            }
        }

        // the countdown is checked after every event, not only on idle ticks
        app.on_tick(Instant::now());

        if redraw || app.timer != before {
            draw(terminal, app)?;
        }
    }

    info!("quitting with {} finished sessions", app.history.len());
    Ok(())
}
