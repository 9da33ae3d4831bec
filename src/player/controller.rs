//! Player controller implementation for vidplayer
//!
//! The controller owns the catalog handle, the playback cursor and the
//! playlist registry, and maps each command of the command surface onto
//! them. It keeps no other state apart from its random source.

use crate::catalog::{Video, VideoCatalog};
use crate::player::{
    Command, CommandOutcome, NowPlaying, PlaybackCursor, PlaybackEvent, PlaybackEventHandler,
    PlaybackState,
};
use crate::playlist::{Playlist, PlaylistRegistry};
use crate::search::{self, SearchResults};
use crate::utils::CommandError;

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use std::sync::Arc;
use log::{debug, info};

/// Main player controller implementation
pub struct PlayerController {
    /// Read-only video library
    catalog: Arc<VideoCatalog>,

    /// What is playing
    cursor: PlaybackCursor,

    /// All playlists
    playlists: PlaylistRegistry,

    /// Source for random play
    rng: StdRng,

    /// Notified of every playback event
    event_handlers: Vec<Box<dyn PlaybackEventHandler>>,
}

impl PlayerController {
    /// Create a controller with an OS-seeded random source
    pub fn new(catalog: Arc<VideoCatalog>) -> Self {
        Self::with_rng(catalog, StdRng::from_os_rng())
    }

    /// Create a controller whose random picks are reproducible
    pub fn with_seed(catalog: Arc<VideoCatalog>, seed: u64) -> Self {
        Self::with_rng(catalog, StdRng::seed_from_u64(seed))
    }

    fn with_rng(catalog: Arc<VideoCatalog>, rng: StdRng) -> Self {
        info!("Player controller ready with {} videos", catalog.len());

        Self {
            catalog,
            cursor: PlaybackCursor::new(),
            playlists: PlaylistRegistry::new(),
            rng,
            event_handlers: Vec::new(),
        }
    }

    /// Register a handler for playback events
    pub fn add_event_handler(&mut self, handler: Box<dyn PlaybackEventHandler>) {
        self.event_handlers.push(handler);
    }

    pub fn catalog(&self) -> &Arc<VideoCatalog> {
        &self.catalog
    }

    pub fn state(&self) -> &PlaybackState {
        self.cursor.state()
    }

    pub fn playlists(&self) -> &PlaylistRegistry {
        &self.playlists
    }

    /// Number of videos in the library
    pub fn count_videos(&self) -> usize {
        self.catalog.len()
    }

    /// Every video, sorted by title
    pub fn list_videos(&self) -> Vec<&Video> {
        self.catalog.sorted_by_title()
    }

    /// Play a video, stopping the current one first
    pub fn play(&mut self, video_id: &str) -> Result<Vec<PlaybackEvent>, CommandError> {
        let events = self.cursor.play(video_id, &self.catalog)?;
        self.send_events(&events);
        Ok(events)
    }

    /// Play a video chosen uniformly from the library
    pub fn play_random(&mut self) -> Result<Vec<PlaybackEvent>, CommandError> {
        let video_id = self
            .catalog
            .videos()
            .choose(&mut self.rng)
            .map(|video| video.id().clone())
            .ok_or(CommandError::EmptyCatalog)?;

        debug!("Random pick: {}", video_id);
        self.play(video_id.as_str())
    }

    pub fn stop(&mut self) -> Result<PlaybackEvent, CommandError> {
        let event = self.cursor.stop()?;
        self.send_events(std::slice::from_ref(&event));
        Ok(event)
    }

    pub fn pause(&mut self) -> Result<PlaybackEvent, CommandError> {
        let event = self.cursor.pause()?;
        self.send_events(std::slice::from_ref(&event));
        Ok(event)
    }

    pub fn resume(&mut self) -> Result<PlaybackEvent, CommandError> {
        let event = self.cursor.resume()?;
        self.send_events(std::slice::from_ref(&event));
        Ok(event)
    }

    /// Video under the cursor, `None` when stopped
    pub fn show_current(&self) -> Option<NowPlaying> {
        let state = self.cursor.state();
        let video = state.video_id().and_then(|id| self.catalog.get(id.as_str()))?;

        Some(NowPlaying {
            video: video.clone(),
            paused: state.is_paused(),
        })
    }

    pub fn create_playlist(&mut self, name: &str) -> Result<&Playlist, CommandError> {
        self.playlists.create(name)
    }

    pub fn delete_playlist(&mut self, name: &str) -> Result<Playlist, CommandError> {
        self.playlists.delete(name)
    }

    /// Playlist names in display order
    pub fn list_playlists(&self) -> Vec<&str> {
        self.playlists.list_all().map(Playlist::name).collect()
    }

    /// Videos of a playlist in insertion order
    pub fn show_playlist(&self, name: &str) -> Result<Vec<&Video>, CommandError> {
        self.playlists.show(name, &self.catalog)
    }

    pub fn add_to_playlist(&mut self, name: &str, video_id: &str) -> Result<&Video, CommandError> {
        self.playlists.add_video(name, video_id, &self.catalog)
    }

    pub fn remove_from_playlist(
        &mut self,
        name: &str,
        video_id: &str,
    ) -> Result<&Video, CommandError> {
        self.playlists.remove_video(name, video_id, &self.catalog)
    }

    pub fn clear_playlist(&mut self, name: &str) -> Result<&Playlist, CommandError> {
        self.playlists.clear(name)
    }

    pub fn search_by_title(&self, term: &str) -> SearchResults {
        search::search_by_title(&self.catalog, term)
    }

    pub fn search_by_tag(&self, tag: &str) -> SearchResults {
        search::search_by_tag(&self.catalog, tag)
    }

    /// Second phase of a search
    ///
    /// Plays the selected match and returns its events. Tokens that do not
    /// select anything are ignored and yield `Ok(None)`.
    pub fn select(
        &mut self,
        results: &SearchResults,
        token: &str,
    ) -> Result<Option<Vec<PlaybackEvent>>, CommandError> {
        match results.selection(token) {
            Some(video_id) => self.play(video_id.as_str()).map(Some),
            None => {
                debug!("Ignoring selection '{}' for '{}'", token, results.query());
                Ok(None)
            }
        }
    }

    /// Run one command of the command surface
    pub fn execute(&mut self, command: &Command) -> Result<CommandOutcome, CommandError> {
        debug!("Executing {:?}", command);

        let outcome = match command {
            Command::CountVideos => CommandOutcome::VideoCount(self.count_videos()),
            Command::ListVideos => {
                CommandOutcome::Videos(self.list_videos().into_iter().cloned().collect())
            }
            Command::Play(video_id) => CommandOutcome::Playback(self.play(video_id)?),
            Command::PlayRandom => CommandOutcome::Playback(self.play_random()?),
            Command::Stop => CommandOutcome::Playback(vec![self.stop()?]),
            Command::Pause => CommandOutcome::Playback(vec![self.pause()?]),
            Command::Resume => CommandOutcome::Playback(vec![self.resume()?]),
            Command::ShowCurrent => CommandOutcome::NowPlaying(self.show_current()),
            Command::CreatePlaylist(name) => {
                CommandOutcome::PlaylistCreated(self.create_playlist(name)?.name().to_string())
            }
            Command::DeletePlaylist(name) => {
                CommandOutcome::PlaylistDeleted(self.delete_playlist(name)?.name().to_string())
            }
            Command::ListPlaylists => CommandOutcome::Playlists(
                self.list_playlists().into_iter().map(str::to_string).collect(),
            ),
            Command::ShowPlaylist(name) => {
                let videos = self.show_playlist(name)?.into_iter().cloned().collect();
                let name = self.playlists.find(name)?.name().to_string();
                CommandOutcome::PlaylistContents { name, videos }
            }
            Command::AddToPlaylist { playlist, video_id } => {
                let video = self.add_to_playlist(playlist, video_id)?.clone();
                let playlist = self.playlists.find(playlist)?.name().to_string();
                CommandOutcome::VideoAdded { playlist, video }
            }
            Command::RemoveFromPlaylist { playlist, video_id } => {
                let video = self.remove_from_playlist(playlist, video_id)?.clone();
                let playlist = self.playlists.find(playlist)?.name().to_string();
                CommandOutcome::VideoRemoved { playlist, video }
            }
            Command::ClearPlaylist(name) => {
                CommandOutcome::PlaylistCleared(self.clear_playlist(name)?.name().to_string())
            }
            Command::SearchByTitle(term) => CommandOutcome::Search(self.search_by_title(term)),
            Command::SearchByTag(tag) => CommandOutcome::Search(self.search_by_tag(tag)),
        };

        Ok(outcome)
    }

    fn send_events(&mut self, events: &[PlaybackEvent]) {
        for event in events {
            debug!("{:?}", event);
            for handler in self.event_handlers.iter_mut() {
                handler.handle_event(event);
            }
        }
    }
}
