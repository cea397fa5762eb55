//! Media subsystems driven by the player facade
//!
//! This module handles:
//! - Audio playback (load, play, stop, volume)
//! - Video playback (load, play, stop, resolution)
//! - Subtitle display (load, show, hide, language)
//!
//! Each subsystem is a narrow trait so a real backend can replace the
//! console-reporting players without touching the facade.

mod audio;
mod subtitle;
mod video;

pub use audio::{AudioBackend, AudioPlayer};
pub use subtitle::{SubtitleBackend, SubtitleManager};
pub use video::{VideoBackend, VideoPlayer};

use mediadeck_common::MediaKind;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MediaError {
    #[error("Volume must be between 0 and 100")]
    VolumeOutOfRange(i32),

    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),
}

pub type Result<T> = std::result::Result<T, MediaError>;

/// A volume level known to lie within 0-100
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Volume(u8);

impl Volume {
    pub const MIN: i32 = 0;
    pub const MAX: i32 = 100;

    pub fn new(level: i32) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&level) {
            Ok(Self(level as u8))
        } else {
            Err(MediaError::VolumeOutOfRange(level))
        }
    }

    pub fn level(self) -> i32 {
        i32::from(self.0)
    }
}

/// Validation helpers on `MediaKind` that report through `MediaError`
pub trait MediaKindExt: Sized {
    /// Pass a playable kind through; `Unknown` becomes `UnsupportedFormat`
    /// naming `source`
    fn require_known(self, source: &str) -> Result<Self>;
}

impl MediaKindExt for MediaKind {
    fn require_known(self, source: &str) -> Result<Self> {
        match self {
            MediaKind::Unknown => Err(MediaError::UnsupportedFormat(source.to_string())),
            kind => Ok(kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_known_rejects_only_unknown() {
        assert_eq!(MediaKind::Audio.require_known("a.mp3"), Ok(MediaKind::Audio));
        assert_eq!(MediaKind::Video.require_known("b.mkv"), Ok(MediaKind::Video));
        assert_eq!(
            MediaKind::classify("song.xyz").require_known("song.xyz"),
            Err(MediaError::UnsupportedFormat("song.xyz".to_string()))
        );
    }

    #[test]
    fn volume_bounds_are_inclusive() {
        assert_eq!(Volume::new(0).map(Volume::level), Ok(0));
        assert_eq!(Volume::new(100).map(Volume::level), Ok(100));
        assert_eq!(Volume::new(-1), Err(MediaError::VolumeOutOfRange(-1)));
        assert_eq!(Volume::new(101), Err(MediaError::VolumeOutOfRange(101)));
    }

    #[test]
    fn error_messages_are_user_facing() {
        assert_eq!(
            MediaError::VolumeOutOfRange(150).to_string(),
            "Volume must be between 0 and 100"
        );
        assert_eq!(
            MediaError::UnsupportedFormat("song.xyz".into()).to_string(),
            "Unsupported file format: song.xyz"
        );
    }
}
