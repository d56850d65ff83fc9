use log::warn;
use rand::Rng;
use webbrowser::Browser;

/// Background tracks offered by the player
pub const CATALOG: [&str; 5] = [
    "https://www.youtube.com/embed/5qap5aO4i9A",
    "https://www.youtube.com/embed/jfKfPfyJRdk",
    "https://www.youtube.com/embed/DWcJFNfaw9c",
    "https://www.youtube.com/embed/7NOSDKb0HlU",
    "https://www.youtube.com/embed/hHW1oY26kxQ",
];

/// Buttons in the player's control row, left to right
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerControl {
    Shuffle,
    SkipBack,
    PlayPause,
    SkipForward,
    Repeat,
}

impl PlayerControl {
    pub const ALL: [PlayerControl; 5] = [
        PlayerControl::Shuffle,
        PlayerControl::SkipBack,
        PlayerControl::PlayPause,
        PlayerControl::SkipForward,
        PlayerControl::Repeat,
    ];

    /// Shuffle, skip back and repeat are drawn but do nothing
    pub fn is_bound(self) -> bool {
        matches!(self, PlayerControl::PlayPause | PlayerControl::SkipForward)
    }
}

#[derive(Debug)]
pub struct MusicPlayer {
    catalog: &'static [&'static str],
    current: usize,
    playing: bool,
}

impl MusicPlayer {
    /// Player over the built-in catalog, starting on a random track
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        Self::with_catalog(&CATALOG, rng)
    }

    /// # Panics
    /// If `catalog` is empty.
    pub fn with_catalog<R: Rng>(catalog: &'static [&'static str], rng: &mut R) -> Self {
        assert!(!catalog.is_empty(), "music catalog must not be empty");
        Self {
            catalog,
            current: select_random_track(catalog, rng),
            playing: true,
        }
    }

    pub fn current_track(&self) -> &'static str {
        self.catalog[self.current]
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn toggle_playback(&mut self) {
        self.playing = !self.playing;
    }

    /// Jumps to a different random track. A single-track catalog stays put.
    pub fn change_track<R: Rng>(&mut self, rng: &mut R) -> &'static str {
        if self.catalog.len() > 1 {
            let mut next = self.current;
            while next == self.current {
                next = select_random_track(self.catalog, rng);
            }
            self.current = next;
        }
        self.current_track()
    }

    /// URL for the embedded player. Pausing is expressed by muting.
    pub fn embed_url(&self) -> String {
        format!(
            "{}?autoplay=1&mute={}",
            self.current_track(),
            if self.playing { 0 } else { 1 }
        )
    }

    /// Hands the embed URL to the system browser, if there is one
    pub fn open_in_browser(&self) {
        if !Browser::is_available() {
            warn!("no web browser available to open the player");
            return;
        }
        let url = self.embed_url();
        if let Err(e) = webbrowser::open(&url) {
            warn!("failed to open {}: {}", url, e);
        }
    }
}

/// Uniform pick of a catalog index
pub fn select_random_track<R: Rng>(catalog: &[&str], rng: &mut R) -> usize {
    rng.gen_range(0..catalog.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashSet;

    static SINGLE: [&str; 1] = ["https://example.com/only"];

    #[test]
    fn test_new_player_is_playing_from_catalog() {
        let mut rng = StdRng::seed_from_u64(7);
        let player = MusicPlayer::new(&mut rng);
        assert!(player.is_playing());
        assert!(CATALOG.contains(&player.current_track()));
    }

    #[test]
    fn test_initial_selection_reaches_every_track() {
        let mut rng = StdRng::seed_from_u64(1);
        let seen: HashSet<_> = (0..500)
            .map(|_| MusicPlayer::new(&mut rng).current_track())
            .collect();
        assert_eq!(seen.len(), CATALOG.len());
    }

    #[test]
    fn test_change_track_never_repeats_current() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut player = MusicPlayer::new(&mut rng);
        for _ in 0..1000 {
            let before = player.current_track();
            let after = player.change_track(&mut rng);
            assert_ne!(before, after);
            assert_eq!(after, player.current_track());
        }
    }

    #[test]
    fn test_change_track_visits_every_entry() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut player = MusicPlayer::new(&mut rng);
        let mut seen = HashSet::new();
        seen.insert(player.current_track());
        for _ in 0..200 {
            seen.insert(player.change_track(&mut rng));
        }
        assert_eq!(seen.len(), CATALOG.len());
    }

    #[test]
    fn test_single_track_catalog_keeps_track() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut player = MusicPlayer::with_catalog(&SINGLE, &mut rng);
        assert_eq!(player.change_track(&mut rng), SINGLE[0]);
    }

    #[test]
    fn test_toggle_playback_twice_is_identity() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut player = MusicPlayer::new(&mut rng);
        let initial = player.is_playing();
        player.toggle_playback();
        assert_ne!(player.is_playing(), initial);
        player.toggle_playback();
        assert_eq!(player.is_playing(), initial);
    }

    #[test]
    fn test_embed_url_reflects_mute() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut player = MusicPlayer::with_catalog(&SINGLE, &mut rng);
        assert_eq!(
            player.embed_url(),
            "https://example.com/only?autoplay=1&mute=0"
        );
        player.toggle_playback();
        assert_eq!(
            player.embed_url(),
            "https://example.com/only?autoplay=1&mute=1"
        );
    }

    #[test]
    fn test_only_play_and_skip_forward_are_bound() {
        let bound: Vec<_> = PlayerControl::ALL
            .iter()
            .copied()
            .filter(|c| c.is_bound())
            .collect();
        assert_eq!(
            bound,
            vec![PlayerControl::PlayPause, PlayerControl::SkipForward]
        );
    }
}
