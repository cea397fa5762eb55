//! Audio playback subsystem

use mediadeck_common::Console;

/// Operations the facade needs from an audio backend.
/// `set_volume` takes any integer; range checks belong to the caller.
pub trait AudioBackend {
    fn load(&mut self, source: &str);
    fn play(&mut self);
    fn stop(&mut self);
    fn set_volume(&mut self, level: i32);
}

/// Audio player that reports each action on the console
#[derive(Debug, Clone)]
pub struct AudioPlayer {
    console: Console,
}

impl AudioPlayer {
    pub fn new(console: Console) -> Self {
        Self { console }
    }
}

impl AudioBackend for AudioPlayer {
    fn load(&mut self, source: &str) {
        tracing::debug!(source, "audio load");
        self.console.line(format!("Loading audio file: {}", source));
    }

    fn play(&mut self) {
        tracing::debug!("audio play");
        self.console.line("Playing audio...");
    }

    fn stop(&mut self) {
        tracing::debug!("audio stop");
        self.console.line("Stopping audio playback");
    }

    fn set_volume(&mut self, level: i32) {
        tracing::debug!(level, "audio volume");
        self.console.line(format!("Setting audio volume to {}%", level));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_each_action() {
        let console = Console::buffered();
        let mut audio = AudioPlayer::new(console.clone());
        audio.load("song.mp3");
        audio.set_volume(80);
        audio.play();
        audio.stop();
        assert_eq!(
            console.lines(),
            vec![
                "Loading audio file: song.mp3",
                "Setting audio volume to 80%",
                "Playing audio...",
                "Stopping audio playback",
            ]
        );
    }

    #[test]
    fn volume_is_not_validated_here() {
        let console = Console::buffered();
        let mut audio = AudioPlayer::new(console.clone());
        audio.set_volume(250);
        assert_eq!(console.lines(), vec!["Setting audio volume to 250%"]);
    }
}
