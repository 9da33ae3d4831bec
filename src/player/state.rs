//! Playback cursor for vidplayer
//!
//! The cursor is the single piece of state describing what is playing. Every
//! transition validates first and mutates second; a rejected command leaves
//! the cursor exactly as it was.

use crate::catalog::VideoCatalog;
use crate::player::{PlaybackEvent, PlaybackState};
use crate::utils::CommandError;
use log::debug;

/// Stopped / playing / paused state machine
#[derive(Debug, Clone, Default)]
pub struct PlaybackCursor {
    state: PlaybackState,
}

impl PlaybackCursor {
    /// Create a stopped cursor
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    /// Start playing `video_id`, stopping whatever was under the cursor
    ///
    /// Replaying the current video still reports a stop followed by a start.
    pub fn play(
        &mut self,
        video_id: &str,
        catalog: &VideoCatalog,
    ) -> Result<Vec<PlaybackEvent>, CommandError> {
        let video = catalog.get(video_id).ok_or(CommandError::VideoNotFound)?;

        let mut events = Vec::with_capacity(2);
        if let Some(previous) = self.state.video_id() {
            events.push(PlaybackEvent::Stopped(previous.clone()));
        }
        events.push(PlaybackEvent::Started(video.id().clone()));

        self.transition(PlaybackState::Playing(video.id().clone()));
        Ok(events)
    }

    /// Stop the current video
    pub fn stop(&mut self) -> Result<PlaybackEvent, CommandError> {
        let current = self.state.video_id().cloned().ok_or(CommandError::NothingPlaying)?;

        self.transition(PlaybackState::Stopped);
        Ok(PlaybackEvent::Stopped(current))
    }

    /// Pause the current video
    ///
    /// Pausing an already paused video is reported, not rejected.
    pub fn pause(&mut self) -> Result<PlaybackEvent, CommandError> {
        match &self.state {
            PlaybackState::Stopped => Err(CommandError::NothingPlaying),
            PlaybackState::Paused(id) => Ok(PlaybackEvent::AlreadyPaused(id.clone())),
            PlaybackState::Playing(id) => {
                let id = id.clone();
                self.transition(PlaybackState::Paused(id.clone()));
                Ok(PlaybackEvent::Paused(id))
            }
        }
    }

    /// Continue a paused video
    pub fn resume(&mut self) -> Result<PlaybackEvent, CommandError> {
        match &self.state {
            PlaybackState::Stopped => Err(CommandError::NothingPlaying),
            PlaybackState::Playing(_) => Err(CommandError::NotPaused),
            PlaybackState::Paused(id) => {
                let id = id.clone();
                self.transition(PlaybackState::Playing(id.clone()));
                Ok(PlaybackEvent::Resumed(id))
            }
        }
    }

    fn transition(&mut self, next: PlaybackState) {
        debug!("Playback state {:?} -> {:?}", self.state, next);
        self.state = next;
    }
}
