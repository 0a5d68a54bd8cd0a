//! Video Player - in-memory video catalog simulator
//!
//! Plays, pauses and stops one video at a time, keeps named playlists
//! and lets videos be flagged as restricted content.

pub mod command;
pub mod config;
pub mod library;
pub mod model;
pub mod player;

pub use command::{Command, CommandError};
pub use config::PlayerConfig;
pub use player::VideoPlayer;
