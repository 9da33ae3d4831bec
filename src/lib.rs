//! vidplayer - a command-driven video player
//!
//! The library holds a read-only video catalog, one playback cursor and a
//! registry of named playlists. `player::PlayerController` applies commands
//! to them and returns structured outcomes; `console` turns those outcomes
//! into text.

pub mod catalog;
pub mod console;
pub mod player;
pub mod playlist;
pub mod search;
pub mod utils;

pub use catalog::{Video, VideoCatalog, VideoId};
pub use player::{
    Command, CommandOutcome, MediaPlayer, MediaPlayerBuilder, PlaybackEvent, PlaybackState,
    PlayerController,
};
pub use utils::{CommandError, Result, VidPlayerError};
