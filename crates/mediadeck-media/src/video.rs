//! Video playback subsystem

use mediadeck_common::Console;

pub trait VideoBackend {
    fn load(&mut self, source: &str);
    fn play(&mut self);
    fn stop(&mut self);
    fn set_resolution(&mut self, resolution: &str);
}

/// Video player that reports each action on the console
#[derive(Debug, Clone)]
pub struct VideoPlayer {
    console: Console,
}

impl VideoPlayer {
    pub fn new(console: Console) -> Self {
        Self { console }
    }
}

impl VideoBackend for VideoPlayer {
    fn load(&mut self, source: &str) {
        tracing::debug!(source, "video load");
        self.console.line(format!("Loading video file: {}", source));
    }

    fn play(&mut self) {
        tracing::debug!("video play");
        self.console.line("Playing video...");
    }

    fn stop(&mut self) {
        tracing::debug!("video stop");
        self.console.line("Stopping video playback");
    }

    fn set_resolution(&mut self, resolution: &str) {
        tracing::debug!(resolution, "video resolution");
        self.console.line(format!("Setting resolution to {}", resolution));
    }
}
