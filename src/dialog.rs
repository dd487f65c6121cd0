use serde::{Deserialize, Serialize};

use crate::{Message, Participant};

/// A conversation thread between the current user and one participant.
///
/// `messages` is append-only and kept in chronological order. The fields the
/// UI renders alongside it (last message, unread count, image gallery) are
/// derivation methods, never stored: recomputing them from `messages` on
/// every read is what keeps them from drifting.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Dialog {
    pub id: String,
    pub label: String,
    pub user: Participant,
    pub messages: Vec<Message>,
    pub is_pinned: bool,
    pub is_sound_enabled: bool,
    pub is_notifications_enabled: bool,
    /// Whether the participant has blocked the current user.
    pub is_me_blocked: bool,
}

impl Dialog {
    pub fn new(id: String, user: Participant) -> Self {
        let label = user.full_name();
        Self {
            id,
            label,
            user,
            messages: Vec::new(),
            is_pinned: false,
            is_sound_enabled: true,
            is_notifications_enabled: true,
            is_me_blocked: false,
        }
    }

    /// The chronologically last message, if any
    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Get the last message timestamp
    pub fn last_message_time(&self) -> Option<u64> {
        self.messages.last().map(|msg| msg.at)
    }

    /// Count of unread messages authored by the other party
    pub fn unread_count(&self) -> usize {
        self.messages
            .iter()
            .filter(|msg| !msg.mine && !msg.is_read)
            .count()
    }

    /// URLs of every file message, in chronological order
    pub fn images(&self) -> Vec<&str> {
        self.messages
            .iter()
            .filter_map(|msg| msg.file_url())
            .collect()
    }

    /// Get a message by ID
    pub fn get_message(&self, id: &str) -> Option<&Message> {
        self.messages.iter().find(|msg| msg.id == id)
    }

    /// Get a mutable message by ID
    pub fn get_message_mut(&mut self, id: &str) -> Option<&mut Message> {
        self.messages.iter_mut().find(|msg| msg.id == id)
    }

    /// Add a Message to this Dialog
    ///
    /// This method internally checks for and avoids duplicate messages, and
    /// keeps the list chronologically sorted when the transport delivers a
    /// message out of arrival order.
    pub fn internal_add_message(&mut self, message: Message) -> bool {
        // Make sure we don't add the same message twice
        if self.messages.iter().any(|m| m.id == message.id) {
            // Message is already known by the state
            return false;
        }

        // Fast path for common cases: newest or oldest messages
        if self.messages.is_empty() {
            // First message
            self.messages.push(message);
        } else if message.at >= self.messages.last().unwrap().at {
            // Common case 1: Latest message (append to end)
            self.messages.push(message);
        } else if message.at <= self.messages.first().unwrap().at {
            // Common case 2: Oldest message (insert at beginning)
            self.messages.insert(0, message);
        } else {
            // Less common case: Message belongs somewhere in the middle
            self.messages.insert(
                self.messages
                    .binary_search_by(|m| m.at.cmp(&message.at))
                    .unwrap_or_else(|idx| idx),
                message,
            );
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_msg(id: &str, at: u64, mine: bool) -> Message {
        let mut msg = Message::new_text(
            id.to_string(),
            "d1".to_string(),
            if mine { "me" } else { "them" }.to_string(),
            format!("msg {id}"),
            at,
        );
        msg.mine = mine;
        msg
    }

    fn file_msg(id: &str, at: u64, url: &str) -> Message {
        Message::new_file(
            id.to_string(),
            "d1".to_string(),
            "them".to_string(),
            url.to_string(),
            at,
        )
    }

    fn dialog() -> Dialog {
        Dialog::new("d1".to_string(), Participant::new("them".to_string()))
    }

    #[test]
    fn test_add_message_rejects_duplicates() {
        let mut dialog = dialog();
        assert!(dialog.internal_add_message(text_msg("m1", 100, false)));
        assert!(!dialog.internal_add_message(text_msg("m1", 100, false)));
        assert_eq!(dialog.messages.len(), 1);
    }

    #[test]
    fn test_add_message_keeps_chronological_order() {
        let mut dialog = dialog();
        dialog.internal_add_message(text_msg("m2", 200, false));
        dialog.internal_add_message(text_msg("m4", 400, false));
        // Late arrivals land in sorted position, not at the end
        dialog.internal_add_message(text_msg("m3", 300, false));
        dialog.internal_add_message(text_msg("m1", 100, false));

        let order: Vec<&str> = dialog.messages.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(order, vec!["m1", "m2", "m3", "m4"]);
        assert_eq!(dialog.last_message().unwrap().id, "m4");
        assert_eq!(dialog.last_message_time(), Some(400));
    }

    #[test]
    fn test_unread_count_ignores_own_messages() {
        let mut dialog = dialog();
        dialog.internal_add_message(text_msg("m1", 100, true));
        dialog.internal_add_message(text_msg("m2", 200, false));
        let mut read = text_msg("m3", 300, false);
        read.is_read = true;
        dialog.internal_add_message(read);

        // Only m2 counts: m1 is mine, m3 is already read
        assert_eq!(dialog.unread_count(), 1);
    }

    #[test]
    fn test_images_derived_from_file_messages() {
        let mut dialog = dialog();
        dialog.internal_add_message(text_msg("m1", 100, false));
        dialog.internal_add_message(file_msg("m2", 200, "https://cdn.parley.chat/a.png"));
        dialog.internal_add_message(file_msg("m3", 300, "https://cdn.parley.chat/b.png"));

        assert_eq!(
            dialog.images(),
            vec!["https://cdn.parley.chat/a.png", "https://cdn.parley.chat/b.png"]
        );
    }

    #[test]
    fn test_empty_dialog_has_no_last_message() {
        let dialog = dialog();
        assert!(dialog.last_message().is_none());
        assert_eq!(dialog.last_message_time(), None);
        assert_eq!(dialog.unread_count(), 0);
    }
}
