//! Facade Pattern
//!
//! One simple entry point in front of several subsystems that would otherwise
//! have to be driven individually and in the right order.
//!
//! Run with: cargo run --bin facade

use crate::error::Result;
use crate::transcript::Transcript;

// ============================================================================
// Subsystems
// ============================================================================

#[derive(Debug, Default)]
pub struct Projector {
    on: bool,
}

impl Projector {
    pub fn on(&mut self) -> String {
        self.on = true;
        "Projector turned on".to_string()
    }

    pub fn off(&mut self) -> String {
        self.on = false;
        "Projector turned off".to_string()
    }

    pub fn is_on(&self) -> bool {
        self.on
    }
}

#[derive(Debug, Default)]
pub struct SoundSystem {
    surround: bool,
}

impl SoundSystem {
    pub fn activate_surround_sound(&mut self) -> String {
        self.surround = true;
        "Surround sound activated".to_string()
    }

    pub fn deactivate_surround_sound(&mut self) -> String {
        self.surround = false;
        "Surround sound deactivated".to_string()
    }

    pub fn is_surround(&self) -> bool {
        self.surround
    }
}

#[derive(Debug, Default)]
pub struct DvdPlayer {
    playing: Option<String>,
}

impl DvdPlayer {
    pub fn play_movie(&mut self, movie_title: &str) -> String {
        self.playing = Some(movie_title.to_string());
        format!("Playing movie '{}'", movie_title)
    }

    pub fn stop_movie(&mut self) -> String {
        self.playing = None;
        "Stopped movie".to_string()
    }

    pub fn now_playing(&self) -> Option<&str> {
        self.playing.as_deref()
    }
}

// ============================================================================
// Facade
// ============================================================================

#[derive(Debug, Default)]
pub struct HomeTheaterFacade {
    projector: Projector,
    sound_system: SoundSystem,
    dvd_player: DvdPlayer,
}

impl HomeTheaterFacade {
    pub fn new(projector: Projector, sound_system: SoundSystem, dvd_player: DvdPlayer) -> Self {
        Self {
            projector,
            sound_system,
            dvd_player,
        }
    }

    pub fn watch_movie(&mut self, movie_title: &str) -> Vec<String> {
        vec![
            "Get ready to watch a movie...".to_string(),
            self.projector.on(),
            self.sound_system.activate_surround_sound(),
            self.dvd_player.play_movie(movie_title),
        ]
    }

    /// Shuts down in reverse order of start-up.
    pub fn end_movie(&mut self) -> Vec<String> {
        vec![
            "Shutting movie theater down...".to_string(),
            self.dvd_player.stop_movie(),
            self.sound_system.deactivate_surround_sound(),
            self.projector.off(),
        ]
    }

    pub fn now_playing(&self) -> Option<&str> {
        self.dvd_player.now_playing()
    }

    pub fn is_running(&self) -> bool {
        self.projector.is_on() || self.sound_system.is_surround()
    }
}

pub fn demo() -> Result<Transcript> {
    let mut out = Transcript::new();

    let mut home_theater =
        HomeTheaterFacade::new(Projector::default(), SoundSystem::default(), DvdPlayer::default());
    out.extend(home_theater.watch_movie("The Matrix"));
    out.extend(home_theater.end_movie());
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facade_drives_all_subsystems() {
        let mut theater = HomeTheaterFacade::default();
        theater.watch_movie("Alien");
        assert!(theater.is_running());
        assert_eq!(theater.now_playing(), Some("Alien"));

        theater.end_movie();
        assert!(!theater.is_running());
        assert_eq!(theater.now_playing(), None);
    }

    #[test]
    fn test_demo_transcript() {
        assert_eq!(
            demo().unwrap().lines(),
            [
                "Get ready to watch a movie...",
                "Projector turned on",
                "Surround sound activated",
                "Playing movie 'The Matrix'",
                "Shutting movie theater down...",
                "Stopped movie",
                "Surround sound deactivated",
                "Projector turned off",
            ]
        );
    }
}
