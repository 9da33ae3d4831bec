//! High-level media player API for vidplayer
//!
//! `MediaPlayer` is a cloneable, thread-safe handle around one
//! `PlayerController`. Each call takes the controller lock exactly once, so a
//! command is applied completely before any other thread can observe the
//! player. Playback events are dispatched to subscribers after the lock is
//! released, which lets a subscriber call back into the player.

use crate::catalog::VideoCatalog;
use crate::player::{
    Command, CommandOutcome, PlaybackEvent, PlaybackEventHandler, PlaybackState, PlayerController,
};
use crate::search::SearchResults;
use crate::utils::error::{CommandError, Result};

use parking_lot::{Mutex, RwLock};
use std::sync::Arc;
use log::info;

type Subscriber = Box<dyn Fn(&PlaybackEvent) + Send + Sync>;

/// Media player builder for customized configuration
pub struct MediaPlayerBuilder {
    catalog: Option<Arc<VideoCatalog>>,
    seed: Option<u64>,
    event_handlers: Vec<Box<dyn PlaybackEventHandler>>,
}

impl Default for MediaPlayerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MediaPlayerBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self {
            catalog: None,
            seed: None,
            event_handlers: Vec::new(),
        }
    }

    /// Use this library instead of the built-in one
    pub fn with_catalog(mut self, catalog: VideoCatalog) -> Self {
        self.catalog = Some(Arc::new(catalog));
        self
    }

    /// Seed random play
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Add an event handler
    pub fn with_event_handler(mut self, handler: Box<dyn PlaybackEventHandler>) -> Self {
        self.event_handlers.push(handler);
        self
    }

    /// Build the media player
    pub fn build(self) -> Result<MediaPlayer> {
        let catalog = match self.catalog {
            Some(catalog) => catalog,
            None => Arc::new(VideoCatalog::builtin()?),
        };

        let controller = match self.seed {
            Some(seed) => PlayerController::with_seed(catalog, seed),
            None => PlayerController::new(catalog),
        };

        let event_dispatcher = Arc::new(EventDispatcher::new());
        for handler in self.event_handlers {
            let handler = Mutex::new(handler);
            event_dispatcher
                .subscribe(move |event| handler.lock().handle_event(event))
                .detach();
        }

        info!("Media player initialised");

        Ok(MediaPlayer {
            controller: Arc::new(Mutex::new(controller)),
            event_dispatcher,
        })
    }
}

/// Thread-safe media player handle
#[derive(Clone)]
pub struct MediaPlayer {
    /// Inner player controller
    controller: Arc<Mutex<PlayerController>>,

    /// Event dispatcher
    event_dispatcher: Arc<EventDispatcher>,
}

impl MediaPlayer {
    /// Create a media player over the built-in library
    pub fn new() -> Result<Self> {
        MediaPlayerBuilder::new().build()
    }

    /// Run one command atomically
    pub fn execute(&self, command: &Command) -> std::result::Result<CommandOutcome, CommandError> {
        let outcome = self.controller.lock().execute(command)?;
        self.event_dispatcher.dispatch_all(outcome.events());
        Ok(outcome)
    }

    /// Apply a search selection atomically
    pub fn select(
        &self,
        results: &SearchResults,
        token: &str,
    ) -> std::result::Result<Option<Vec<PlaybackEvent>>, CommandError> {
        let events = self.controller.lock().select(results, token)?;
        if let Some(events) = &events {
            self.event_dispatcher.dispatch_all(events);
        }
        Ok(events)
    }

    /// Run several controller calls under a single lock
    ///
    /// Events are not dispatched for work done here.
    pub fn with_controller<R>(&self, f: impl FnOnce(&mut PlayerController) -> R) -> R {
        f(&mut self.controller.lock())
    }

    /// Get current playback state
    pub fn get_state(&self) -> PlaybackState {
        self.controller.lock().state().clone()
    }

    /// The library this player was built with
    pub fn catalog(&self) -> Arc<VideoCatalog> {
        Arc::clone(self.controller.lock().catalog())
    }

    /// Subscribe to events
    pub fn subscribe_events<F>(&self, callback: F) -> EventSubscription
    where
        F: Fn(&PlaybackEvent) + Send + Sync + 'static,
    {
        self.event_dispatcher.subscribe(callback)
    }
}

/// Event dispatcher
struct EventDispatcher {
    subscribers: Arc<RwLock<Vec<(usize, Subscriber)>>>,
    next_id: Mutex<usize>,
}

impl EventDispatcher {
    fn new() -> Self {
        Self {
            subscribers: Arc::new(RwLock::new(Vec::new())),
            next_id: Mutex::new(0),
        }
    }

    fn subscribe<F>(&self, callback: F) -> EventSubscription
    where
        F: Fn(&PlaybackEvent) + Send + Sync + 'static,
    {
        let id = {
            let mut next_id = self.next_id.lock();
            *next_id += 1;
            *next_id
        };
        self.subscribers.write().push((id, Box::new(callback)));

        EventSubscription {
            id: Some(id),
            subscribers: Arc::clone(&self.subscribers),
        }
    }

    fn dispatch_all(&self, events: &[PlaybackEvent]) {
        let subs = self.subscribers.read();
        for event in events {
            for (_, callback) in subs.iter() {
                callback(event);
            }
        }
    }
}

/// Event subscription handle
///
/// Dropping the handle unsubscribes; `detach` keeps the callback for the
/// lifetime of the player.
pub struct EventSubscription {
    id: Option<usize>,
    subscribers: Arc<RwLock<Vec<(usize, Subscriber)>>>,
}

impl EventSubscription {
    /// Keep the subscription alive without holding the handle
    pub fn detach(mut self) {
        self.id = None;
    }
}

impl Drop for EventSubscription {
    fn drop(&mut self) {
        if let Some(id) = self.id.take() {
            self.subscribers.write().retain(|(sub_id, _)| *sub_id != id);
        }
    }
}
