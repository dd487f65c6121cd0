//! ClientState struct and methods for managing the client-side model.
//!
//! This module contains the core state management for dialogs, messages and
//! the search overlay.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::ordering;
use crate::search::SearchOverlay;
use crate::{Dialog, Message, Participant};

/// Shared handle to the client state.
///
/// All state transitions run to completion under this single lock before the
/// next event is processed; no finer-grained locking is needed.
pub type SharedState = Arc<Mutex<ClientState>>;

/// Core client state containing the dialog collection and overlay state.
///
/// The `dialogs` vector is unordered storage keyed by unique id; the display
/// order is derived on demand via [`ClientState::display_order`].
#[derive(serde::Serialize, Clone, Debug)]
pub struct ClientState {
    /// Id of the logged-in user, used to classify message authorship.
    pub(crate) my_id: String,
    pub(crate) dialogs: Vec<Dialog>,
    /// The dialog currently open in the thread view, if any.
    pub(crate) active_dialog_id: Option<String>,
    pub search: SearchOverlay,
}

impl ClientState {
    /// Create a new empty ClientState for the given session user
    pub fn new(my_id: String) -> Self {
        Self {
            my_id,
            dialogs: Vec::new(),
            active_dialog_id: None,
            search: SearchOverlay::new(),
        }
    }

    /// Create a shareable handle around a fresh state
    pub fn shared(my_id: String) -> SharedState {
        Arc::new(Mutex::new(Self::new(my_id)))
    }

    pub fn my_id(&self) -> &str {
        &self.my_id
    }

    pub fn dialogs(&self) -> &[Dialog] {
        &self.dialogs
    }

    /// Get a dialog by ID
    pub fn get_dialog(&self, id: &str) -> Option<&Dialog> {
        self.dialogs.iter().find(|d| d.id == id)
    }

    /// Get a mutable dialog by ID
    pub fn get_dialog_mut(&mut self, id: &str) -> Option<&mut Dialog> {
        self.dialogs.iter_mut().find(|d| d.id == id)
    }

    /// Get the mutable participant of the dialog they belong to
    pub fn get_participant_mut(&mut self, user_id: &str) -> Option<&mut Participant> {
        self.dialogs
            .iter_mut()
            .find(|d| d.user.id == user_id)
            .map(|d| &mut d.user)
    }

    /// Create a dialog with a participant, unless one already exists
    pub fn create_dialog(&mut self, id: &str, user: Participant) -> &mut Dialog {
        match self.dialogs.iter().position(|d| d.id == id) {
            Some(position) => &mut self.dialogs[position],
            None => {
                self.dialogs.push(Dialog::new(id.to_string(), user));
                // Just pushed, cannot be empty
                self.dialogs.last_mut().unwrap()
            }
        }
    }

    /// Add a message to a dialog via its ID
    ///
    /// The dialog is created from a participant stub when the message is the
    /// first contact from an unknown sender. The message's `mine` flag is
    /// classified here against the session user.
    pub fn add_message_to_dialog(&mut self, dialog_id: &str, mut message: Message) -> bool {
        message.mine = message.sender_id == self.my_id;

        match self.get_dialog_mut(dialog_id) {
            Some(dialog) => dialog.internal_add_message(message),
            None => {
                // Dialog doesn't exist, create it and add the message.
                // For our own echoed messages the sender is us, so the
                // participant stub falls back to the dialog id.
                let user = if message.mine {
                    Participant::new(dialog_id.to_string())
                } else {
                    Participant::new(message.sender_id.clone())
                };
                let mut dialog = Dialog::new(dialog_id.to_string(), user);
                let was_added = dialog.internal_add_message(message);
                self.dialogs.push(dialog);
                was_added
            }
        }
    }

    /// Find a message by its ID across all dialogs
    pub fn find_message(&self, message_id: &str) -> Option<(&Dialog, &Message)> {
        for dialog in &self.dialogs {
            if let Some(message) = dialog.messages.iter().find(|m| m.id == message_id) {
                return Some((dialog, message));
            }
        }
        None
    }

    /// Remove a dialog from the collection, returning it if it existed
    pub fn remove_dialog(&mut self, id: &str) -> Option<Dialog> {
        let position = self.dialogs.iter().position(|d| d.id == id)?;
        Some(self.dialogs.remove(position))
    }

    /// Mark a dialog as the one open in the thread view
    pub fn set_active_dialog(&mut self, id: Option<String>) {
        self.active_dialog_id = id;
    }

    pub fn active_dialog_id(&self) -> Option<&str> {
        self.active_dialog_id.as_deref()
    }

    /// The dialog list in display order (derived, never stored)
    pub fn display_order(&self) -> Vec<&Dialog> {
        ordering::display_order(&self.dialogs)
    }

    /// Count currently pinned dialogs
    pub fn pinned_count(&self) -> usize {
        ordering::pinned_count(&self.dialogs)
    }

    /// Count unread messages across all dialogs, for the app badge
    ///
    /// Dialogs with notifications disabled are skipped entirely; their
    /// per-dialog [`Dialog::unread_count`] still reflects the truth.
    pub fn notifiable_unread(&self) -> usize {
        self.dialogs
            .iter()
            .filter(|d| d.is_notifications_enabled)
            .map(|d| d.unread_count())
            .sum()
    }
}
