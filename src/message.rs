use serde::{Deserialize, Serialize};

/// Body of a Message: exactly one of a text body or an attached file URL.
///
/// Modelled as an enum so "both" and "neither" are unrepresentable rather
/// than runtime-asserted.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum MessageContent {
    Text(String),
    File(String),
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Message {
    pub id: String,
    pub dialog_id: String,
    pub sender_id: String,
    pub content: MessageContent,
    /// The only field mutated after creation, and only by the reconciler.
    pub is_read: bool,
    pub at: u64,
    /// Whether the current user authored this message.
    /// Set at ingest by comparing `sender_id` against the session user.
    #[serde(default)]
    pub mine: bool,
}

impl Message {
    pub fn new_text(id: String, dialog_id: String, sender_id: String, text: String, at: u64) -> Self {
        Self {
            id,
            dialog_id,
            sender_id,
            content: MessageContent::Text(text),
            is_read: false,
            at,
            mine: false,
        }
    }

    pub fn new_file(id: String, dialog_id: String, sender_id: String, url: String, at: u64) -> Self {
        Self {
            id,
            dialog_id,
            sender_id,
            content: MessageContent::File(url),
            is_read: false,
            at,
            mine: false,
        }
    }

    /// Text body, if this is a text message
    pub fn text(&self) -> Option<&str> {
        match &self.content {
            MessageContent::Text(text) => Some(text),
            MessageContent::File(_) => None,
        }
    }

    /// Attached file URL, if this is a file message
    pub fn file_url(&self) -> Option<&str> {
        match &self.content {
            MessageContent::File(url) => Some(url),
            MessageContent::Text(_) => None,
        }
    }

    /// Mark this message as read
    ///
    /// Returns `false` if it was already read, making repeated read events
    /// an observable no-op.
    pub fn mark_read(&mut self) -> bool {
        if self.is_read {
            return false;
        }
        self.is_read = true;
        true
    }
}
