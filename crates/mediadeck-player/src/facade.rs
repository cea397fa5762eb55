//! Media player facade
//!
//! One object that hides the audio, video, subtitle and playlist subsystems
//! behind task-level operations. Callers say "play this file" and the facade
//! works out which subsystems to drive, and in which order.
//!
//! Every outcome, including rejected requests, is reported as a console
//! notice. No operation returns an error.

use mediadeck_common::{Console, MediaKind, PlayerConfig, SubtitleToggle};
use mediadeck_media::{
    AudioBackend, AudioPlayer, MediaKindExt, SubtitleBackend, SubtitleManager, VideoBackend,
    VideoPlayer, Volume,
};
use mediadeck_playlist::PlaylistManager;

pub const PLAY_BANNER: &str = "=== STARTING MEDIA PLAYBACK ===";
pub const STOP_BANNER: &str = "=== STOPPING PLAYBACK ===";
pub const NOTHING_PLAYING: &str = "No active playback";
pub const PLAYLIST_EMPTY: &str = "The playlist is empty";
pub const TOGGLING_SUBTITLES: &str = "Toggling subtitle visibility";
pub const SUBTITLES_VIDEO_ONLY: &str = "Subtitles are only available during video playback";

/// Which subsystem the facade currently considers active.
///
/// `Unknown` is a real state: playing an unsupported file records it, and a
/// later stop clears it without stopping any subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Idle,
    Audio,
    Video,
    Unknown,
}

impl From<MediaKind> for PlaybackState {
    fn from(kind: MediaKind) -> Self {
        match kind {
            MediaKind::Audio => PlaybackState::Audio,
            MediaKind::Video => PlaybackState::Video,
            MediaKind::Unknown => PlaybackState::Unknown,
        }
    }
}

/// Subtitle file that accompanies a video: the extension is swapped for
/// `extension`. References without a dot get the extension appended.
pub fn subtitle_source(video: &str, extension: &str) -> String {
    let stem = video.rsplit_once('.').map_or(video, |(stem, _)| stem);
    format!("{}.{}", stem, extension)
}

pub struct MediaPlayerFacade {
    audio: Box<dyn AudioBackend>,
    video: Box<dyn VideoBackend>,
    subtitles: Box<dyn SubtitleBackend>,
    playlist: PlaylistManager,
    console: Console,
    config: PlayerConfig,
    state: PlaybackState,
    /// Last visibility the facade asked the subtitle backend for
    subtitles_visible: bool,
}

impl MediaPlayerFacade {
    /// Facade with console-reporting subsystems and default presets
    pub fn new(console: Console) -> Self {
        Self::with_config(console, PlayerConfig::default())
    }

    pub fn with_config(console: Console, config: PlayerConfig) -> Self {
        Self::with_backends(
            console.clone(),
            config,
            Box::new(AudioPlayer::new(console.clone())),
            Box::new(VideoPlayer::new(console.clone())),
            Box::new(SubtitleManager::new(console)),
        )
    }

    /// Facade over caller-supplied subsystem backends
    pub fn with_backends(
        console: Console,
        config: PlayerConfig,
        audio: Box<dyn AudioBackend>,
        video: Box<dyn VideoBackend>,
        subtitles: Box<dyn SubtitleBackend>,
    ) -> Self {
        Self {
            audio,
            video,
            subtitles,
            playlist: PlaylistManager::new(console.clone()),
            console,
            config,
            state: PlaybackState::Idle,
            subtitles_visible: false,
        }
    }

    pub fn classify(source: &str) -> MediaKind {
        MediaKind::classify(source)
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn subtitles_visible(&self) -> bool {
        self.subtitles_visible
    }

    pub fn playlist(&self) -> &PlaylistManager {
        &self.playlist
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    /// Start playback of `source`, dispatching on its suffix
    pub fn play_media(&mut self, source: &str) {
        self.console.blank();
        self.console.line(PLAY_BANNER);

        let kind = Self::classify(source);
        self.state = PlaybackState::from(kind);
        tracing::info!(source, %kind, "play media");

        match kind {
            MediaKind::Audio => {
                self.audio.load(source);
                self.audio.set_volume(self.config.default_volume);
                self.audio.play();
            }
            MediaKind::Video => {
                self.video.load(source);
                self.video.set_resolution(&self.config.default_resolution);

                let subtitle = subtitle_source(source, self.config.subtitle_extension());
                self.subtitles.load(&subtitle);
                self.subtitles.set_language(&self.config.subtitle_language);
                self.subtitles.show();
                self.subtitles_visible = true;

                self.video.play();
            }
            MediaKind::Unknown => {
                if let Err(err) = kind.require_known(source) {
                    tracing::warn!("{}", err);
                    self.console.line(err.to_string());
                }
            }
        }
    }

    /// Stop whatever is active and return to idle
    pub fn stop_media(&mut self) {
        self.console.blank();
        self.console.line(STOP_BANNER);

        match self.state {
            PlaybackState::Idle => {
                self.console.line(NOTHING_PLAYING);
                return;
            }
            PlaybackState::Audio => self.audio.stop(),
            PlaybackState::Video => {
                self.video.stop();
                self.subtitles.hide();
                self.subtitles_visible = false;
            }
            // No subsystem was engaged for an unsupported file
            PlaybackState::Unknown => {}
        }

        tracing::info!(previous = ?self.state, "playback stopped");
        self.state = PlaybackState::Idle;
    }

    pub fn create_playlist(&mut self) {
        self.playlist.create_playlist();
    }

    pub fn add_to_playlist(&mut self, source: &str) {
        self.playlist.add_to_playlist(source);
    }

    pub fn show_playlist(&self) {
        self.playlist.display();
    }

    /// Play the next playlist item, wrapping after the last one
    pub fn play_next(&mut self) {
        match self.playlist.get_next_item() {
            Some(item) => self.play_media(&item),
            None => {
                tracing::debug!("play_next on empty playlist");
                self.console.line(PLAYLIST_EMPTY);
            }
        }
    }

    /// Toggle subtitles during video playback.
    ///
    /// With the default `SubtitleToggle::AlwaysShow` this re-shows subtitles
    /// on every call and never hides them, even when they are already
    /// visible. `SubtitleToggle::Flip` uses the tracked visibility instead.
    pub fn toggle_subtitles(&mut self) {
        if self.state != PlaybackState::Video {
            self.console.line(SUBTITLES_VIDEO_ONLY);
            return;
        }

        self.console.line(TOGGLING_SUBTITLES);
        match self.config.subtitle_toggle {
            SubtitleToggle::Flip if self.subtitles_visible => {
                self.subtitles.hide();
                self.subtitles_visible = false;
            }
            SubtitleToggle::Flip | SubtitleToggle::AlwaysShow => {
                self.subtitles.show();
                self.subtitles_visible = true;
            }
        }
    }

    /// Forward a volume change to the audio subsystem, whatever is playing
    pub fn set_volume(&mut self, level: i32) {
        match Volume::new(level) {
            Ok(volume) => {
                self.console
                    .line(format!("Setting volume to {}%", volume.level()));
                self.audio.set_volume(volume.level());
            }
            Err(err) => {
                tracing::warn!(level, "rejected volume change");
                self.console.line(err.to_string());
            }
        }
    }
}
