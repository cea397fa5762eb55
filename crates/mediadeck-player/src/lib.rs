//! MediaDeck Player — one facade over the media subsystems
//!
//! Architecture:
//!   facade — `MediaPlayerFacade`, playback state and dispatch
//!   demo   — scripted sessions driven by the `mediadeck` binary

pub mod demo;
pub mod facade;

pub use facade::{MediaPlayerFacade, PlaybackState};
