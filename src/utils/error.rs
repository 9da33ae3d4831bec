//! Error types for vidplayer
//!
//! Two layers live here. `CommandError` carries the recoverable outcomes of a
//! player command (unknown video, missing playlist, bad state transition...).
//! `VidPlayerError` is the application-level error used for loading the
//! catalog, reading configuration and driving the console. We use thiserror
//! for both and anyhow only at the binary boundary.

use thiserror::Error;

/// Recoverable failure of a single player command
///
/// The `Display` text is the user-facing reason; the console prefixes it with
/// the action that failed (e.g. `Cannot play video: Video does not exist`).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    /// The video id is not in the catalog
    #[error("Video does not exist")]
    VideoNotFound,

    /// No playlist matches the given name
    #[error("Playlist does not exist")]
    PlaylistNotFound,

    /// A playlist with the same name (ignoring case) already exists
    #[error("A playlist with the same name already exists")]
    DuplicateName,

    /// The video is already part of the playlist
    #[error("Video already added")]
    DuplicateVideo,

    /// The video exists but is not part of the playlist
    #[error("Video is not in playlist")]
    VideoNotInPlaylist,

    /// The cursor is stopped
    #[error("No video is currently playing")]
    NothingPlaying,

    /// Resume was requested while already playing
    #[error("Video is not paused")]
    NotPaused,

    /// Random play was requested on an empty library
    #[error("No videos available")]
    EmptyCatalog,
}

/// Main error type for vidplayer
#[derive(Error, Debug)]
pub enum VidPlayerError {
    /// Catalog loading errors
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("File error: {0}")]
    FileIO(#[from] std::io::Error),

    /// JSON catalog errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid console input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl VidPlayerError {
    /// Create a catalog error from string
    pub fn catalog_error<S: Into<String>>(msg: S) -> Self {
        VidPlayerError::Catalog(msg.into())
    }
}

/// Convenience type alias for Results in vidplayer
pub type Result<T> = std::result::Result<T, VidPlayerError>;

/// Extension trait for converting other errors to VidPlayerError
pub trait IntoPlayerError<T> {
    /// Convert this error into a VidPlayerError with the given context
    fn catalog_err(self, context: &str) -> Result<T>;
    fn config_err(self, context: &str) -> Result<T>;
}

impl<T, E: std::fmt::Display> IntoPlayerError<T> for std::result::Result<T, E> {
    fn catalog_err(self, context: &str) -> Result<T> {
        self.map_err(|e| VidPlayerError::Catalog(format!("{}: {}", context, e)))
    }

    fn config_err(self, context: &str) -> Result<T> {
        self.map_err(|e| VidPlayerError::Config(format!("{}: {}", context, e)))
    }
}
