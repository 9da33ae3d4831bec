//! Console command parsing
//!
//! A console line is a keyword (any case) followed by whitespace separated
//! arguments, e.g. `ADD_TO_PLAYLIST road_trip amazing_cats_video_id`.

use crate::player::Command;
use crate::utils::error::{Result, VidPlayerError};

/// A parsed console line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Forwarded to the player
    Player(Command),

    /// Print the command list
    Help,

    /// Leave the loop
    Exit,
}

/// Keyword, argument names and summary of one console command
pub struct CommandSpec {
    pub keyword: &'static str,
    pub args: &'static [&'static str],
    pub summary: &'static str,
}

impl CommandSpec {
    const fn new(
        keyword: &'static str,
        args: &'static [&'static str],
        summary: &'static str,
    ) -> Self {
        Self {
            keyword,
            args,
            summary,
        }
    }

    /// `KEYWORD <arg> <arg>`
    pub fn usage(&self) -> String {
        self.args
            .iter()
            .fold(self.keyword.to_string(), |usage, arg| format!("{} <{}>", usage, arg))
    }
}

pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec::new("NUMBER_OF_VIDEOS", &[], "Shows how many videos are in the library."),
    CommandSpec::new("SHOW_ALL_VIDEOS", &[], "Lists all videos from the library."),
    CommandSpec::new("PLAY", &["video_id"], "Plays specified video."),
    CommandSpec::new("PLAY_RANDOM", &[], "Plays a random video from the library."),
    CommandSpec::new("STOP", &[], "Stop the current video."),
    CommandSpec::new("PAUSE", &[], "Pause the current video."),
    CommandSpec::new("CONTINUE", &[], "Resume the current paused video."),
    CommandSpec::new(
        "SHOW_PLAYING",
        &[],
        "Displays the title, video_id and tags of the video currently playing.",
    ),
    CommandSpec::new(
        "CREATE_PLAYLIST",
        &["playlist_name"],
        "Creates a new (empty) playlist with the provided name.",
    ),
    CommandSpec::new(
        "ADD_TO_PLAYLIST",
        &["playlist_name", "video_id"],
        "Adds the requested video to the playlist.",
    ),
    CommandSpec::new(
        "REMOVE_FROM_PLAYLIST",
        &["playlist_name", "video_id"],
        "Removes the specified video from the specified playlist.",
    ),
    CommandSpec::new(
        "CLEAR_PLAYLIST",
        &["playlist_name"],
        "Removes all the videos from the playlist.",
    ),
    CommandSpec::new("DELETE_PLAYLIST", &["playlist_name"], "Deletes the playlist."),
    CommandSpec::new("SHOW_PLAYLIST", &["playlist_name"], "List all the videos in this playlist."),
    CommandSpec::new("SHOW_ALL_PLAYLISTS", &[], "Display all the available playlists."),
    CommandSpec::new(
        "SEARCH_VIDEOS",
        &["search_term"],
        "Display all the videos whose titles contain the search_term.",
    ),
    CommandSpec::new(
        "SEARCH_VIDEOS_WITH_TAG",
        &["tag_name"],
        "Display all videos whose tags contains the provided tag.",
    ),
    CommandSpec::new("HELP", &[], "Displays help."),
    CommandSpec::new("EXIT", &[], "Terminates the program execution."),
];

/// Parse one console line; blank lines yield `None`
pub fn parse(line: &str) -> Result<Option<ConsoleCommand>> {
    let mut tokens = line.split_whitespace();
    let keyword = match tokens.next() {
        Some(keyword) => keyword.to_uppercase(),
        None => return Ok(None),
    };

    let spec = COMMANDS
        .iter()
        .find(|spec| spec.keyword == keyword)
        .ok_or_else(|| {
            VidPlayerError::InvalidInput(
                "Please enter a valid command, type HELP for a list of available commands."
                    .to_string(),
            )
        })?;

    let args: Vec<String> = tokens.map(str::to_string).collect();
    if args.len() != spec.args.len() {
        return Err(VidPlayerError::InvalidInput(format!("Usage: {}", spec.usage())));
    }

    let mut args = args.into_iter();
    let mut arg = || args.next().unwrap_or_default();

    let command = match spec.keyword {
        "NUMBER_OF_VIDEOS" => Command::CountVideos,
        "SHOW_ALL_VIDEOS" => Command::ListVideos,
        "PLAY" => Command::Play(arg()),
        "PLAY_RANDOM" => Command::PlayRandom,
        "STOP" => Command::Stop,
        "PAUSE" => Command::Pause,
        "CONTINUE" => Command::Resume,
        "SHOW_PLAYING" => Command::ShowCurrent,
        "CREATE_PLAYLIST" => Command::CreatePlaylist(arg()),
        "ADD_TO_PLAYLIST" => Command::AddToPlaylist {
            playlist: arg(),
            video_id: arg(),
        },
        "REMOVE_FROM_PLAYLIST" => Command::RemoveFromPlaylist {
            playlist: arg(),
            video_id: arg(),
        },
        "CLEAR_PLAYLIST" => Command::ClearPlaylist(arg()),
        "DELETE_PLAYLIST" => Command::DeletePlaylist(arg()),
        "SHOW_PLAYLIST" => Command::ShowPlaylist(arg()),
        "SHOW_ALL_PLAYLISTS" => Command::ListPlaylists,
        "SEARCH_VIDEOS" => Command::SearchByTitle(arg()),
        "SEARCH_VIDEOS_WITH_TAG" => Command::SearchByTag(arg()),
        "HELP" => return Ok(Some(ConsoleCommand::Help)),
        _ => return Ok(Some(ConsoleCommand::Exit)),
    };

    Ok(Some(ConsoleCommand::Player(command)))
}
