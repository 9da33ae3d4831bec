//! Player module for vidplayer
//!
//! This module holds the playback cursor state machine, the controller that
//! turns commands into cursor and playlist mutations, and a thread-safe
//! handle that serialises whole commands for front-ends that need one.

mod controller;
mod media_player;
mod state;

pub use controller::PlayerController;
pub use media_player::{EventSubscription, MediaPlayer, MediaPlayerBuilder};
pub use state::PlaybackCursor;

use crate::catalog::{Video, VideoId};
use crate::search::SearchResults;

/// Playback state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// Nothing is playing
    #[default]
    Stopped,

    /// The video is playing
    Playing(VideoId),

    /// The video is paused
    Paused(VideoId),
}

impl PlaybackState {
    /// Video under the cursor, if any
    pub fn video_id(&self) -> Option<&VideoId> {
        match self {
            PlaybackState::Stopped => None,
            PlaybackState::Playing(id) | PlaybackState::Paused(id) => Some(id),
        }
    }

    pub fn is_paused(&self) -> bool {
        matches!(self, PlaybackState::Paused(_))
    }
}

/// Effect of a playback command
///
/// A single command may produce several events; switching videos yields
/// `Stopped` for the old one followed by `Started` for the new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackEvent {
    /// Playback of a video began
    Started(VideoId),

    /// Playback of a video ended
    Stopped(VideoId),

    /// The playing video was paused
    Paused(VideoId),

    /// Pause was requested on a video that was already paused
    AlreadyPaused(VideoId),

    /// A paused video continued playing
    Resumed(VideoId),
}

impl PlaybackEvent {
    pub fn video_id(&self) -> &VideoId {
        match self {
            PlaybackEvent::Started(id)
            | PlaybackEvent::Stopped(id)
            | PlaybackEvent::Paused(id)
            | PlaybackEvent::AlreadyPaused(id)
            | PlaybackEvent::Resumed(id) => id,
        }
    }
}

/// Playback event handler trait
pub trait PlaybackEventHandler: Send {
    /// Handle playback event
    ///
    /// # Arguments
    ///
    /// * `event` - Event produced by a completed command
    fn handle_event(&mut self, event: &PlaybackEvent);
}

/// Answer to `show_current`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NowPlaying {
    /// Video under the cursor
    pub video: Video,

    /// Whether playback is paused
    pub paused: bool,
}

/// One operation of the player's command surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    CountVideos,
    ListVideos,
    Play(String),
    PlayRandom,
    Stop,
    Pause,
    Resume,
    ShowCurrent,
    CreatePlaylist(String),
    DeletePlaylist(String),
    ListPlaylists,
    ShowPlaylist(String),
    AddToPlaylist { playlist: String, video_id: String },
    RemoveFromPlaylist { playlist: String, video_id: String },
    ClearPlaylist(String),
    SearchByTitle(String),
    SearchByTag(String),
}

/// Successful result of a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Number of videos in the library
    VideoCount(usize),

    /// Every video, sorted by title
    Videos(Vec<Video>),

    /// Cursor transitions, in the order they happened
    Playback(Vec<PlaybackEvent>),

    /// Current video, `None` when stopped
    NowPlaying(Option<NowPlaying>),

    /// A playlist was created under the given name
    PlaylistCreated(String),

    /// The named playlist was deleted
    PlaylistDeleted(String),

    /// Playlist names, sorted
    Playlists(Vec<String>),

    /// Videos of a playlist in insertion order
    PlaylistContents { name: String, videos: Vec<Video> },

    /// A video was appended to a playlist
    VideoAdded { playlist: String, video: Video },

    /// A video was removed from a playlist
    VideoRemoved { playlist: String, video: Video },

    /// Every video was removed from the named playlist
    PlaylistCleared(String),

    /// Search matches, awaiting an optional selection
    Search(SearchResults),
}

impl CommandOutcome {
    /// Playback events carried by this outcome
    pub fn events(&self) -> &[PlaybackEvent] {
        match self {
            CommandOutcome::Playback(events) => events,
            _ => &[],
        }
    }
}
