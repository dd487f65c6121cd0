//! Wire-shaped event types exchanged with the transport collaborator.
//!
//! Inbound events arrive already ordered per dialog; the reconciler applies
//! them in the order received and only compensates for chronological
//! anomalies at insertion time. Outbound events are fire-and-forget
//! notifications (read receipts).

use serde::{Deserialize, Serialize};

use crate::Message;

/// Events delivered by the socket collaborator
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", content = "payload")]
pub enum InboundEvent {
    /// A new message for a dialog (the dialog may not exist locally yet)
    #[serde(rename = "message.new")]
    MessageNew { dialog_id: String, message: Message },

    /// The peer read a message, usually one the local user sent
    #[serde(rename = "message.read")]
    MessageRead { dialog_id: String, message_id: String },

    /// Online/last-activity change for a participant
    #[serde(rename = "presence.update")]
    PresenceUpdate {
        user_id: String,
        is_online: Option<bool>,
        last_activity: Option<u64>,
    },

    /// A participant started typing; the indicator expires at `until`
    #[serde(rename = "typing.update")]
    TypingUpdate {
        dialog_id: String,
        user_id: String,
        until: u64,
    },
}

/// Events the core emits towards the socket collaborator
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", content = "payload")]
pub enum OutboundEvent {
    /// The local user has seen a message
    #[serde(rename = "message.read")]
    MessageRead { dialog_id: String, message_id: String },
}
