//! Playlist registry
//!
//! Every operation resolves its playlist through `position`, the single
//! case-insensitive lookup. Preconditions are checked before anything is
//! mutated, so a failed operation leaves the registry untouched.

use crate::catalog::{Video, VideoCatalog};
use crate::playlist::Playlist;
use crate::utils::CommandError;
use log::debug;

/// Owner of all playlists
#[derive(Debug, Clone, Default)]
pub struct PlaylistRegistry {
    /// Playlists in creation order
    playlists: Vec<Playlist>,
}

impl PlaylistRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.playlists.iter().position(|p| p.is_named(name))
    }

    fn find_mut(&mut self, name: &str) -> Result<&mut Playlist, CommandError> {
        let position = self.position(name).ok_or(CommandError::PlaylistNotFound)?;
        Ok(&mut self.playlists[position])
    }

    /// Case-insensitive lookup
    pub fn find(&self, name: &str) -> Result<&Playlist, CommandError> {
        self.position(name)
            .map(|position| &self.playlists[position])
            .ok_or(CommandError::PlaylistNotFound)
    }

    /// Create an empty playlist
    ///
    /// # Errors
    ///
    /// `DuplicateName` if a playlist with the same name ignoring case exists.
    pub fn create(&mut self, name: &str) -> Result<&Playlist, CommandError> {
        if self.position(name).is_some() {
            return Err(CommandError::DuplicateName);
        }

        debug!("Creating playlist '{}'", name);
        self.playlists.push(Playlist::new(name));
        Ok(&self.playlists[self.playlists.len() - 1])
    }

    /// Remove a playlist, returning it
    pub fn delete(&mut self, name: &str) -> Result<Playlist, CommandError> {
        let position = self.position(name).ok_or(CommandError::PlaylistNotFound)?;

        debug!("Deleting playlist '{}'", self.playlists[position].name());
        Ok(self.playlists.remove(position))
    }

    /// Playlists sorted by name with plain (case-sensitive) string ordering
    ///
    /// Playlists whose names compare equal keep their creation order. The
    /// order is recomputed on every call.
    pub fn list_all(&self) -> impl Iterator<Item = &Playlist> + '_ {
        let mut sorted: Vec<&Playlist> = self.playlists.iter().collect();
        sorted.sort_by(|a, b| a.name().cmp(b.name()));
        sorted.into_iter()
    }

    /// Append a catalog video to a playlist
    ///
    /// Checked in order: playlist exists, video exists, video not yet present.
    pub fn add_video<'c>(
        &mut self,
        name: &str,
        video_id: &str,
        catalog: &'c VideoCatalog,
    ) -> Result<&'c Video, CommandError> {
        let playlist = self.find_mut(name)?;
        let video = catalog.get(video_id).ok_or(CommandError::VideoNotFound)?;

        playlist.push(video.id().clone())?;
        debug!("Added '{}' to playlist '{}'", video.id(), playlist.name());
        Ok(video)
    }

    /// Remove a video from a playlist
    ///
    /// The catalog is consulted before the playlist lookup, so an unknown
    /// video reports `VideoNotFound` even when the playlist is missing too.
    pub fn remove_video<'c>(
        &mut self,
        name: &str,
        video_id: &str,
        catalog: &'c VideoCatalog,
    ) -> Result<&'c Video, CommandError> {
        let video = catalog.get(video_id).ok_or(CommandError::VideoNotFound)?;
        let playlist = self.find_mut(name)?;

        playlist.remove(video_id)?;
        debug!("Removed '{}' from playlist '{}'", video_id, playlist.name());
        Ok(video)
    }

    /// Remove every video from a playlist, keeping the playlist
    pub fn clear(&mut self, name: &str) -> Result<&Playlist, CommandError> {
        let playlist = self.find_mut(name)?;
        playlist.clear();

        debug!("Cleared playlist '{}'", playlist.name());
        Ok(&*playlist)
    }

    /// Videos of a playlist in insertion order
    ///
    /// An empty playlist yields `Ok` with no videos; a missing one is an error.
    pub fn show<'c>(
        &self,
        name: &str,
        catalog: &'c VideoCatalog,
    ) -> Result<Vec<&'c Video>, CommandError> {
        let playlist = self.find(name)?;

        Ok(playlist
            .videos()
            .iter()
            .filter_map(|id| catalog.get(id.as_str()))
            .collect())
    }
}
