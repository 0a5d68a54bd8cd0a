//! The video player
//!
//! A single `VideoPlayer` owns the catalog, the playlist table and the
//! current slot. Commands run one at a time to completion; each returns
//! the lines to print.

mod controller;
mod playlists;
mod search;

pub use controller::VideoPlayer;
