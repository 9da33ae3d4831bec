//! Playlist management for vidplayer
//!
//! A playlist is a named, ordered list of video ids. The registry owns every
//! playlist and enforces that names are unique ignoring case.

mod registry;

pub use registry::PlaylistRegistry;

use crate::catalog::VideoId;
use crate::utils::{eq_ignore_case, CommandError};

/// Named ordered collection of video references
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    /// Name as the user first typed it
    name: String,

    /// Video ids in insertion order, without duplicates
    videos: Vec<VideoId>,
}

impl Playlist {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            videos: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Video ids in insertion order
    pub fn videos(&self) -> &[VideoId] {
        &self.videos
    }

    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.videos.iter().any(|v| v.as_str() == id)
    }

    /// Whether `name` refers to this playlist, ignoring case
    pub fn is_named(&self, name: &str) -> bool {
        eq_ignore_case(&self.name, name)
    }

    /// Append a video, refusing duplicates
    pub(crate) fn push(&mut self, id: VideoId) -> Result<(), CommandError> {
        if self.contains(id.as_str()) {
            return Err(CommandError::DuplicateVideo);
        }
        self.videos.push(id);
        Ok(())
    }

    /// Remove the (only) occurrence of a video
    pub(crate) fn remove(&mut self, id: &str) -> Result<VideoId, CommandError> {
        let position = self
            .videos
            .iter()
            .position(|v| v.as_str() == id)
            .ok_or(CommandError::VideoNotInPlaylist)?;
        Ok(self.videos.remove(position))
    }

    pub(crate) fn clear(&mut self) {
        self.videos.clear();
    }
}
