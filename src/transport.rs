//! Collaborator interfaces for the transport and backend API.
//!
//! Both are consumed, never implemented, by this crate: the socket layer and
//! the request/response backend live in the client shell. Requests are
//! asynchronous and their resolution is processed under the same serialized
//! event discipline as everything else.

use async_trait::async_trait;

use crate::error::Result;
use crate::OutboundEvent;

/// Outbound half of the socket collaborator
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fire an event towards the server
    async fn send(&self, event: OutboundEvent) -> Result<()>;
}

/// Server-confirmed block state for a participant.
///
/// Block/unblock is not a pure client toggle: concurrent state on the server
/// can make the authoritative answer differ from what was requested.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct BlockStatus {
    pub user_id: String,
    pub is_blocked: bool,
}

/// Request/response API for dialog mutations
#[async_trait]
pub trait DialogApi: Send + Sync {
    async fn set_pinned(&self, dialog_id: &str, pinned: bool) -> Result<()>;
    async fn set_sound_enabled(&self, dialog_id: &str, enabled: bool) -> Result<()>;
    async fn set_notifications_enabled(&self, dialog_id: &str, enabled: bool) -> Result<()>;
    async fn set_blocked(&self, user_id: &str, blocked: bool) -> Result<BlockStatus>;
    async fn delete_dialog(&self, dialog_id: &str) -> Result<()>;
}
