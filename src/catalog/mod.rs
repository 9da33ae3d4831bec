//! Video library for vidplayer
//!
//! The catalog is loaded once at startup and never mutated afterwards. Every
//! other component refers to videos by `VideoId` and resolves them here.

mod loader;

pub use loader::{parse_json, parse_text, CatalogFormat};

use crate::utils::error::{Result, VidPlayerError};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use log::info;

/// Library shipped with the binary, used when no catalog file is configured
const BUILTIN_CATALOG: &str = include_str!("../../data/videos.txt");

/// Unique identifier of a video in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    /// Wrap a raw identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for VideoId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for VideoId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for VideoId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A single video and its metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    id: VideoId,
    title: String,
    #[serde(default)]
    tags: Vec<String>,
}

impl Video {
    /// Create a video record
    pub fn new<I, T>(id: impl Into<VideoId>, title: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            id: id.into(),
            title: title.into(),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    pub fn id(&self) -> &VideoId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}

/// Renders as `Title (id) [#tag1 #tag2]`
impl fmt::Display for Video {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) [{}]", self.title, self.id, self.tags.join(" "))
    }
}

/// Read-only mapping from video id to video
///
/// Load order is preserved so enumeration and seeded random picks are
/// reproducible.
#[derive(Debug, Clone, Default)]
pub struct VideoCatalog {
    /// Videos in load order
    videos: Vec<Video>,

    /// Position of each id in `videos`
    index: HashMap<VideoId, usize>,
}

impl VideoCatalog {
    /// Build a catalog, rejecting duplicate ids
    pub fn new(videos: Vec<Video>) -> Result<Self> {
        let mut index = HashMap::with_capacity(videos.len());

        for (position, video) in videos.iter().enumerate() {
            if index.insert(video.id.clone(), position).is_some() {
                return Err(VidPlayerError::catalog_error(format!(
                    "duplicate video id '{}'",
                    video.id
                )));
            }
        }

        Ok(Self { videos, index })
    }

    /// The library bundled with the binary
    pub fn builtin() -> Result<Self> {
        Self::new(parse_text(BUILTIN_CATALOG)?)
    }

    /// Load a catalog file, choosing the format from its extension
    pub fn load(path: &Path) -> Result<Self> {
        let format = CatalogFormat::from_path(path);
        let videos = loader::load_file(path, format)?;
        let catalog = Self::new(videos)?;

        info!("Loaded {} videos from {:?} ({:?})", catalog.len(), path, format);
        Ok(catalog)
    }

    /// Look up a video by id
    pub fn get(&self, id: &str) -> Option<&Video> {
        self.index.get(id).map(|&position| &self.videos[position])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }

    /// All videos in load order
    pub fn videos(&self) -> &[Video] {
        &self.videos
    }

    /// All videos sorted by title; equal titles keep load order
    pub fn sorted_by_title(&self) -> Vec<&Video> {
        let mut videos: Vec<&Video> = self.videos.iter().collect();
        videos.sort_by(|a, b| a.title.cmp(&b.title));
        videos
    }
}
