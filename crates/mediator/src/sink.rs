//! Output regions.

use std::sync::{Arc, Mutex};

use crate::action::Region;
use crate::display::DisplayResult;

/// Destination for one output region.
///
/// Each call overwrites what the region showed before; when two requests
/// for the same region overlap, whichever resolves last is what remains.
pub trait OutputSink: Send + Sync {
    /// Shows a transient status while a request is in flight.
    fn pending(&self, message: &str);

    /// Shows the final result of an action.
    fn show(&self, result: &DisplayResult);
}

/// One sink per output region.
#[derive(Clone)]
pub struct Outputs {
    pub all_games: Arc<dyn OutputSink>,
    pub game_by_id: Arc<dyn OutputSink>,
    pub upload: Arc<dyn OutputSink>,
    pub delete_all: Arc<dyn OutputSink>,
    pub player_ranking: Arc<dyn OutputSink>,
}

impl Outputs {
    /// Routes every region to the same sink.
    pub fn shared(sink: Arc<dyn OutputSink>) -> Self {
        Self {
            all_games: sink.clone(),
            game_by_id: sink.clone(),
            upload: sink.clone(),
            delete_all: sink.clone(),
            player_ranking: sink,
        }
    }

    pub fn get(&self, region: Region) -> &Arc<dyn OutputSink> {
        match region {
            Region::AllGames => &self.all_games,
            Region::GameById => &self.game_by_id,
            Region::Upload => &self.upload,
            Region::DeleteAll => &self.delete_all,
            Region::PlayerRanking => &self.player_ranking,
        }
    }
}

/// Something a [`MemorySink`] received.
#[derive(Debug, Clone, PartialEq)]
pub enum SinkEvent {
    Pending(String),
    Shown(DisplayResult),
}

/// Sink that keeps everything it was given, in order.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<SinkEvent>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<SinkEvent> {
        self.lock().clone()
    }

    /// The most recent final result, i.e. what the region currently shows.
    pub fn current(&self) -> Option<DisplayResult> {
        self.lock().iter().rev().find_map(|e| match e {
            SinkEvent::Shown(result) => Some(result.clone()),
            SinkEvent::Pending(_) => None,
        })
    }

    pub fn shown_count(&self) -> usize {
        self.lock()
            .iter()
            .filter(|e| matches!(e, SinkEvent::Shown(_)))
            .count()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<SinkEvent>> {
        // A poisoned log is still a valid log.
        self.events.lock().unwrap_or_else(|p| p.into_inner())
    }
}

impl OutputSink for MemorySink {
    fn pending(&self, message: &str) {
        self.lock().push(SinkEvent::Pending(message.to_string()));
    }

    fn show(&self, result: &DisplayResult) {
        self.lock().push(SinkEvent::Shown(result.clone()));
    }
}
