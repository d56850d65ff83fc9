use std::io::{self, Write};
use std::path::PathBuf;

use log::{debug, warn};

/// Signals that a session finished. Fire-and-forget: implementations must
/// not block the event loop and never report failure to the caller.
pub trait Notifier {
    fn notify(&self);
}

/// Rings the terminal bell
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalBell;

impl Notifier for TerminalBell {
    fn notify(&self) {
        let mut stdout = io::stdout();
        if let Err(e) = stdout.write_all(b"\x07").and_then(|_| stdout.flush()) {
            debug!("terminal bell failed: {}", e);
        }
    }
}

/// Plays a sound file on a detached thread
#[cfg(feature = "sound")]
#[derive(Debug, Clone)]
pub struct SoundFile {
    path: PathBuf,
}

#[cfg(feature = "sound")]
impl SoundFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn play(path: &std::path::Path) -> anyhow::Result<()> {
        use anyhow::Context;
        use rodio::{Decoder, OutputStream, Sink};
        use std::{fs::File, io::BufReader};

        // the stream must outlive playback
        let (_stream, handle) =
            OutputStream::try_default().context("failed to open audio output device")?;
        let sink = Sink::try_new(&handle).context("failed to create audio sink")?;
        let file =
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
        let source = Decoder::new(BufReader::new(file))
            .with_context(|| format!("failed to decode {}", path.display()))?;
        sink.append(source);
        sink.sleep_until_end();
        Ok(())
    }
}

#[cfg(feature = "sound")]
impl Notifier for SoundFile {
    fn notify(&self) {
        let path = self.path.clone();
        let spawned = std::thread::Builder::new()
            .name("bell".into())
            .spawn(move || {
                if let Err(e) = SoundFile::play(&path) {
                    warn!("notification sound failed: {:#}", e);
                }
            });
        if let Err(e) = spawned {
            warn!("could not start notification thread: {}", e);
        }
    }
}

/// Picks the notifier for an optional sound file. Without the `sound`
/// feature the file is ignored and the terminal bell is used.
pub fn from_sound_file(path: Option<PathBuf>) -> Box<dyn Notifier> {
    match path {
        #[cfg(feature = "sound")]
        Some(path) => Box::new(SoundFile::new(path)),
        #[cfg(not(feature = "sound"))]
        Some(path) => {
            warn!(
                "built without the `sound` feature, ignoring {}",
                path.display()
            );
            Box::new(TerminalBell)
        }
        None => Box::new(TerminalBell),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_bell_never_panics() {
        TerminalBell.notify();
        TerminalBell.notify();
    }

    #[test]
    fn test_from_sound_file_without_path() {
        // only checks construction; the bell itself is fire-and-forget
        let notifier = from_sound_file(None);
        notifier.notify();
    }

    #[cfg(feature = "sound")]
    #[test]
    fn test_missing_sound_file_is_swallowed() {
        let notifier = SoundFile::new(PathBuf::from("/nonexistent/bell.mp3"));
        notifier.notify();
    }
}
