//! Text rendering of command results
//!
//! Playlist names in messages are echoed the way the user typed them, while
//! listings show the stored spelling.

use crate::catalog::VideoCatalog;
use crate::console::command::COMMANDS;
use crate::player::{Command, CommandOutcome, NowPlaying, PlaybackEvent};
use crate::search::SearchResults;
use crate::utils::CommandError;

/// Renders results against one catalog
pub struct Renderer<'a> {
    catalog: &'a VideoCatalog,
}

impl<'a> Renderer<'a> {
    pub fn new(catalog: &'a VideoCatalog) -> Self {
        Self { catalog }
    }

    /// Lines printed for a command and its result
    pub fn render(
        &self,
        command: &Command,
        result: &Result<CommandOutcome, CommandError>,
    ) -> Vec<String> {
        match result {
            Ok(outcome) => self.render_outcome(command, outcome),
            Err(error) => vec![format!("{}: {}", failure_prefix(command), error)],
        }
    }

    fn render_outcome(&self, command: &Command, outcome: &CommandOutcome) -> Vec<String> {
        match outcome {
            CommandOutcome::VideoCount(count) => vec![format!("{} videos in the library", count)],
            CommandOutcome::Videos(videos) => {
                let mut lines = vec!["Here's a list of all available videos:".to_string()];
                lines.extend(videos.iter().map(|video| format!("  {}", video)));
                lines
            }
            CommandOutcome::Playback(events) => self.render_events(events),
            CommandOutcome::NowPlaying(now) => vec![render_now_playing(now.as_ref())],
            CommandOutcome::PlaylistCreated(name) => {
                vec![format!("Successfully created new playlist: {}", typed_name(command, name))]
            }
            CommandOutcome::PlaylistDeleted(name) => {
                vec![format!("Deleted playlist: {}", typed_name(command, name))]
            }
            CommandOutcome::Playlists(names) if names.is_empty() => {
                vec!["No playlists exist yet".to_string()]
            }
            CommandOutcome::Playlists(names) => {
                let mut lines = vec!["Showing all playlists:".to_string()];
                lines.extend(names.iter().map(|name| format!("  {}", name)));
                lines
            }
            CommandOutcome::PlaylistContents { name, videos } => {
                let mut lines = vec![format!("Showing playlist: {}", typed_name(command, name))];
                if videos.is_empty() {
                    lines.push("  No videos here yet".to_string());
                }
                lines.extend(videos.iter().map(|video| format!("  {}", video)));
                lines
            }
            CommandOutcome::VideoAdded { playlist, video } => vec![format!(
                "Added video to {}: {}",
                typed_name(command, playlist),
                video.title()
            )],
            CommandOutcome::VideoRemoved { playlist, video } => vec![format!(
                "Removed video from {}: {}",
                typed_name(command, playlist),
                video.title()
            )],
            CommandOutcome::PlaylistCleared(name) => vec![format!(
                "Successfully removed all videos from {}",
                typed_name(command, name)
            )],
            CommandOutcome::Search(results) => render_search(results),
        }
    }

    /// One line per playback event
    pub fn render_events(&self, events: &[PlaybackEvent]) -> Vec<String> {
        events
            .iter()
            .map(|event| {
                let title = self
                    .catalog
                    .get(event.video_id().as_str())
                    .map(|video| video.title())
                    .unwrap_or_else(|| event.video_id().as_str());

                match event {
                    PlaybackEvent::Started(_) => format!("Playing video: {}", title),
                    PlaybackEvent::Stopped(_) => format!("Stopping video: {}", title),
                    PlaybackEvent::Paused(_) => format!("Pausing video: {}", title),
                    PlaybackEvent::AlreadyPaused(_) => format!("Video already paused: {}", title),
                    PlaybackEvent::Resumed(_) => format!("Continuing video: {}", title),
                }
            })
            .collect()
    }
}

/// Playlist name as the user typed it, or the stored name for commands
/// that carry none
fn typed_name<'a>(command: &'a Command, stored: &'a str) -> &'a str {
    match command {
        Command::CreatePlaylist(name)
        | Command::DeletePlaylist(name)
        | Command::ShowPlaylist(name)
        | Command::ClearPlaylist(name)
        | Command::AddToPlaylist { playlist: name, .. }
        | Command::RemoveFromPlaylist { playlist: name, .. } => name.as_str(),
        _ => stored,
    }
}

fn render_now_playing(now: Option<&NowPlaying>) -> String {
    match now {
        None => "No video is currently playing".to_string(),
        Some(NowPlaying { video, paused: false }) => format!("Currently playing: {}", video),
        Some(NowPlaying { video, paused: true }) => {
            format!("Currently playing: {} - PAUSED", video)
        }
    }
}

fn render_search(results: &SearchResults) -> Vec<String> {
    if results.is_empty() {
        return vec![format!("No search results for {}", results.query())];
    }

    let mut lines = vec![format!("Here are the results for {}:", results.query())];
    lines.extend(
        results
            .matches()
            .iter()
            .enumerate()
            .map(|(position, video)| format!("  {}) {}", position + 1, video)),
    );
    lines.push(
        "Would you like to play any of the above? If yes, specify the number of the video."
            .to_string(),
    );
    lines.push("If your answer is not a valid number, we will assume it's a no.".to_string());
    lines
}

/// `Cannot <action>` for a failed command
pub fn failure_prefix(command: &Command) -> String {
    match command {
        Command::Play(_) | Command::PlayRandom => "Cannot play video".to_string(),
        Command::Stop => "Cannot stop video".to_string(),
        Command::Pause => "Cannot pause video".to_string(),
        Command::Resume => "Cannot continue video".to_string(),
        Command::CreatePlaylist(_) => "Cannot create playlist".to_string(),
        Command::AddToPlaylist { playlist, .. } => format!("Cannot add video to {}", playlist),
        Command::RemoveFromPlaylist { playlist, .. } => {
            format!("Cannot remove video from {}", playlist)
        }
        Command::ShowPlaylist(name) => format!("Cannot show playlist {}", name),
        Command::ClearPlaylist(name) => format!("Cannot clear playlist {}", name),
        Command::DeletePlaylist(name) => format!("Cannot delete playlist {}", name),
        _ => "Cannot complete command".to_string(),
    }
}

/// The HELP text
pub fn help_lines() -> Vec<String> {
    let mut lines = vec!["Available commands:".to_string()];
    lines.extend(
        COMMANDS
            .iter()
            .map(|spec| format!("    {} - {}", spec.usage(), spec.summary)),
    );
    lines
}
