//! Common utilities and types shared across MediaDeck crates

mod config;
mod console;

pub use config::{ConfigError, PlayerConfig, SubtitleToggle};
pub use console::Console;

use std::fmt;

/// Category of a media reference, inferred from its filename suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Audio,
    Video,
    Unknown,
}

impl MediaKind {
    pub const AUDIO_SUFFIXES: [&'static str; 3] = [".mp3", ".wav", ".ogg"];
    pub const VIDEO_SUFFIXES: [&'static str; 3] = [".mp4", ".avi", ".mkv"];

    /// Classify a media reference by exact, case-sensitive suffix match.
    /// The file is never opened.
    pub fn classify(source: &str) -> Self {
        if Self::AUDIO_SUFFIXES.iter().any(|s| source.ends_with(s)) {
            MediaKind::Audio
        } else if Self::VIDEO_SUFFIXES.iter().any(|s| source.ends_with(s)) {
            MediaKind::Video
        } else {
            MediaKind::Unknown
        }
    }

    /// Get the display name for this kind
    pub fn display_name(&self) -> &'static str {
        match self {
            MediaKind::Audio => "audio",
            MediaKind::Video => "video",
            MediaKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
