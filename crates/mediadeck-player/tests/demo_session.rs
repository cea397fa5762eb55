use mediadeck_common::Console;
use mediadeck_player::{demo, MediaPlayerFacade, PlaybackState};

#[test]
fn demonstration_session_output() {
    let console = Console::buffered();
    let mut player = MediaPlayerFacade::new(console.clone());
    demo::run_demo(&mut player);

    let expected = vec![
        "Playlist created",
        "Added to playlist: song1.mp3",
        "Added to playlist: movie.mp4",
        "Added to playlist: song2.mp3",
        "=== Current playlist ===",
        "  1. song1.mp3",
        "  2. movie.mp4",
        "→ 3. song2.mp3",
        "===================================",
        "",
        "=== STARTING MEDIA PLAYBACK ===",
        "Loading video file: documentary.mp4",
        "Setting resolution to 1080p",
        "Loading subtitle file: documentary.srt",
        "Setting subtitle language to: Spanish",
        "Showing subtitles",
        "Playing video...",
        "Setting volume to 70%",
        "Setting audio volume to 70%",
        "Toggling subtitle visibility",
        "Showing subtitles",
        "",
        "=== STOPPING PLAYBACK ===",
        "Stopping video playback",
        "Hiding subtitles",
        "Next playlist item: song1.mp3",
        "",
        "=== STARTING MEDIA PLAYBACK ===",
        "Loading audio file: song1.mp3",
        "Setting audio volume to 80%",
        "Playing audio...",
    ];
    assert_eq!(console.lines(), expected);
    assert_eq!(player.state(), PlaybackState::Audio);
}

#[test]
fn mixed_session_keeps_single_active_subsystem() {
    let console = Console::buffered();
    let mut player = MediaPlayerFacade::new(console.clone());

    player.play_media("movie.mp4");
    assert_eq!(player.state(), PlaybackState::Video);

    // Switching kind does not stop the previous subsystem, only replaces the state
    player.play_media("song.mp3");
    assert_eq!(player.state(), PlaybackState::Audio);

    console.take_lines();
    player.stop_media();
    assert_eq!(
        console.lines(),
        vec!["", "=== STOPPING PLAYBACK ===", "Stopping audio playback"]
    );
}
