//! Search overlay and message highlight handling.
//!
//! While searching, the rendering layer swaps the ordered dialog list for
//! `results` wholesale; the underlying collection is untouched and the
//! ordering policy does not apply to results. The results themselves are
//! produced by the search backend collaborator and only stored here.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::state::SharedState;
use crate::{Dialog, Participant};

/// How long a selected message stays highlighted before self-clearing.
pub const HIGHLIGHT_DURATION: Duration = Duration::from_millis(1500);

/// A single search hit: either a whole dialog or a not-yet-contacted user
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SearchResult {
    Dialog(Dialog),
    Participant(Participant),
}

/// Ephemeral search state, reset whenever the overlay closes.
#[derive(Serialize, Clone, Debug, Default)]
pub struct SearchOverlay {
    pub is_searching: bool,
    /// Optional participant filter carried when the overlay was opened from
    /// a message header action.
    pub selected_user: Option<Participant>,
    pub results: Vec<SearchResult>,
    pub selected_message_id: Option<String>,
    /// Monotonic counter distinguishing highlight timers: a timer only
    /// clears the selection if no newer selection superseded it.
    #[serde(skip)]
    highlight_generation: u64,
}

impl SearchOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter the Searching state, optionally filtered to one participant
    pub fn open(&mut self, filter: Option<Participant>) {
        self.is_searching = true;
        self.selected_user = filter;
    }

    /// Replace the displayed results (maintained by the search backend)
    pub fn set_results(&mut self, results: Vec<SearchResult>) {
        self.results = results;
    }

    /// Leave the Searching state and drop all ephemeral overlay state
    pub fn close(&mut self) {
        self.is_searching = false;
        self.selected_user = None;
        self.results.clear();
        self.selected_message_id = None;
    }
}

/// Highlight a message in the open thread.
///
/// The selection is a timed pulse, not persistent state: after
/// `highlight` elapses it clears itself. Selecting another message before
/// expiry supersedes the pending clear (last write wins on the timer).
pub async fn select_message_with(state: &SharedState, message_id: String, highlight: Duration) {
    let generation = {
        let mut guard = state.lock().await;
        guard.search.selected_message_id = Some(message_id);
        guard.search.highlight_generation += 1;
        guard.search.highlight_generation
    };

    let state = SharedState::clone(state);
    tokio::spawn(async move {
        tokio::time::sleep(highlight).await;
        let mut guard = state.lock().await;
        // A newer selection owns the highlight now; leave it alone
        if guard.search.highlight_generation == generation {
            guard.search.selected_message_id = None;
        }
    });
}

/// [`select_message_with`] using the standard highlight duration
pub async fn select_message(state: &SharedState, message_id: String) {
    select_message_with(state, message_id, HIGHLIGHT_DURATION).await
}
