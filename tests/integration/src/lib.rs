//! Integration test utilities for vidplayer
//!
//! This module provides common utilities for integration testing including:
//! - Catalog file generation in a temporary directory
//! - Running console scripts against a player and capturing the output

use anyhow::Result;
use std::io::Cursor;
use std::path::PathBuf;
use tempfile::TempDir;
use vidplayer::console::Repl;
use vidplayer::{MediaPlayer, MediaPlayerBuilder, VideoCatalog};

/// Test fixture for integration tests
pub struct TestFixture {
    pub temp_dir: TempDir,
    pub catalog_files: CatalogFiles,
}

/// Collection of generated catalog files
pub struct CatalogFiles {
    /// Line format, five videos
    pub text: PathBuf,

    /// JSON format, the same five videos
    pub json: PathBuf,

    /// Line format with only comments
    pub empty: PathBuf,

    /// Line format with a malformed second line
    pub broken: PathBuf,
}

/// Videos written to every generated catalog: (title, id, tags)
pub const VIDEOS: &[(&str, &str, &[&str])] = &[
    ("Funny Dogs", "funny_dogs_video_id", &["#dog", "#animal"]),
    ("Amazing Cats", "amazing_cats_video_id", &["#cat", "#animal"]),
    ("Another Cat Video", "another_cat_video_id", &["#cat", "#animal"]),
    ("Life at Google", "life_at_google_video_id", &["#google", "#career"]),
    ("Video about nothing", "nothing_video_id", &[]),
];

impl TestFixture {
    /// Create a new test fixture with generated catalog files
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let catalog_files = CatalogFiles::generate(&temp_dir)?;

        Ok(Self {
            temp_dir,
            catalog_files,
        })
    }

    /// Player over the text catalog with a fixed seed
    pub fn player(&self) -> Result<MediaPlayer> {
        let catalog = VideoCatalog::load(&self.catalog_files.text)?;
        Ok(MediaPlayerBuilder::new()
            .with_catalog(catalog)
            .with_seed(Some(42))
            .build()?)
    }
}

impl CatalogFiles {
    fn generate(dir: &TempDir) -> Result<Self> {
        let text = dir.path().join("videos.txt");
        let lines: Vec<String> = VIDEOS
            .iter()
            .map(|(title, id, tags)| format!("{} | {} | {}", title, id, tags.join(" , ")))
            .collect();
        std::fs::write(&text, lines.join("\n"))?;

        let json = dir.path().join("videos.json");
        let entries: Vec<serde_json::Value> = VIDEOS
            .iter()
            .map(|(title, id, tags)| serde_json::json!({ "id": id, "title": title, "tags": tags }))
            .collect();
        std::fs::write(&json, serde_json::to_string_pretty(&entries)?)?;

        let empty = dir.path().join("empty.txt");
        std::fs::write(&empty, "// no videos yet\n")?;

        let broken = dir.path().join("broken.txt");
        std::fs::write(&broken, "Funny Dogs | funny_dogs_video_id | #dog\nno separator here\n")?;

        Ok(Self {
            text,
            json,
            empty,
            broken,
        })
    }
}

/// Feed `script` to a console over `player` and return everything it printed
pub fn run_script(player: MediaPlayer, script: &str) -> Result<String> {
    let mut repl = Repl::new(player, Cursor::new(script.to_string()), Vec::new());
    repl.run()?;
    Ok(String::from_utf8(repl.into_output())?)
}

/// Output lines without the closing goodbye message
pub fn output_lines(output: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = output.lines().collect();
    lines.pop();
    lines
}
