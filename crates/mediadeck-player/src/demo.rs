//! Scripted sessions that exercise the facade end to end.
//! A client only ever talks to `MediaPlayerFacade`.

use mediadeck_common::Console;

use crate::facade::MediaPlayerFacade;

/// Items queued by the demonstration session
pub const DEMO_PLAYLIST: [&str; 3] = ["song1.mp3", "movie.mp4", "song2.mp3"];

/// File played directly, outside the playlist
pub const DEMO_FEATURE: &str = "documentary.mp4";

pub const DEMO_VOLUME: i32 = 70;

/// Build a playlist, play a video, adjust it, stop, then move to the next
/// playlist item
pub fn run_demo(player: &mut MediaPlayerFacade) {
    tracing::info!("Running demonstration session");

    player.create_playlist();
    for item in DEMO_PLAYLIST {
        player.add_to_playlist(item);
    }
    player.show_playlist();

    player.play_media(DEMO_FEATURE);
    player.set_volume(DEMO_VOLUME);
    player.toggle_subtitles();
    player.stop_media();

    player.play_next();
}

/// Queue `files` and play each one once, stopping between items
pub fn play_through(player: &mut MediaPlayerFacade, files: &[String]) {
    tracing::info!(count = files.len(), "Playing through files");

    player.create_playlist();
    for file in files {
        player.add_to_playlist(file);
    }
    player.show_playlist();

    if files.is_empty() {
        player.play_next();
        return;
    }

    for _ in files {
        player.play_next();
        player.stop_media();
    }
}

/// Report the inferred kind of each file as `<file>: <kind>`
pub fn classify_files(console: &Console, files: &[String]) {
    for file in files {
        console.line(format!("{}: {}", file, MediaPlayerFacade::classify(file)));
    }
}
