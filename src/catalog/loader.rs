//! Catalog file parsing
//!
//! Two formats are understood. The text format has one video per line:
//!
//! ```text
//! Amazing Cats | amazing_cats_video_id | #cat , #animal
//! ```
//!
//! The JSON format is an array of `{ "id", "title", "tags" }` objects.

use crate::catalog::Video;
use crate::utils::error::{IntoPlayerError, Result, VidPlayerError};
use std::path::Path;
use log::debug;

/// On-disk catalog format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    /// `title | id | tags` lines
    Text,

    /// Array of video objects
    Json,
}

impl CatalogFormat {
    /// `.json` files are JSON, everything else is the line format
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => CatalogFormat::Json,
            _ => CatalogFormat::Text,
        }
    }
}

pub(crate) fn load_file(path: &Path, format: CatalogFormat) -> Result<Vec<Video>> {
    let contents = std::fs::read_to_string(path)
        .catalog_err(&format!("Failed to read {}", path.display()))?;

    match format {
        CatalogFormat::Text => parse_text(&contents),
        CatalogFormat::Json => parse_json(&contents),
    }
}

/// Parse the `title | id | tags` line format
pub fn parse_text(contents: &str) -> Result<Vec<Video>> {
    let mut videos = Vec::new();

    for (number, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with("//") {
            continue;
        }

        let line_error = |reason: &str| {
            VidPlayerError::catalog_error(format!("line {}: {}", number + 1, reason))
        };

        let fields: Vec<&str> = line.split('|').map(str::trim).collect();
        let (title, id, tags) = match fields.as_slice() {
            [title, id] => (*title, *id, ""),
            [title, id, tags] => (*title, *id, *tags),
            _ => return Err(line_error("expected 'title | id | tags'")),
        };

        if id.is_empty() {
            return Err(line_error("expected 'title | id | tags'"));
        }
        if title.is_empty() {
            return Err(line_error("empty title"));
        }

        let tags: Vec<String> = tags
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect();

        debug!("Catalog line {}: {} ({}) {:?}", number + 1, title, id, tags);
        videos.push(Video::new(id, title, tags));
    }

    Ok(videos)
}

/// Parse a JSON array of videos
pub fn parse_json(contents: &str) -> Result<Vec<Video>> {
    Ok(serde_json::from_str(contents)?)
}
