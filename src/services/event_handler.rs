//! Read-state reconciler for inbound socket events and visibility signals.
//!
//! This module handles:
//! - New message ingestion (chronological insert, dedup, dialog creation)
//! - Read receipts in both directions
//! - Presence and typing updates
//!
//! Events for a dialog are applied in the order the transport delivers them;
//! a message arriving with an out-of-order timestamp is compensated for at
//! insertion time only. Derived fields (unread counts, last message) are
//! never stored, so every applied event leaves them consistent by
//! construction.

use std::sync::Arc;

use crate::state::SharedState;
use crate::transport::Transport;
use crate::{InboundEvent, OutboundEvent};

pub struct EventReconciler {
    state: SharedState,
    outbound: Arc<dyn Transport>,
}

impl EventReconciler {
    pub fn new(state: SharedState, outbound: Arc<dyn Transport>) -> Self {
        Self { state, outbound }
    }

    /// Apply one inbound event to the client state
    ///
    /// Returns `true` if the state changed. Events referencing ids unknown to
    /// the local state are benign races with teardown or sync gaps and are
    /// dropped without error; replays are idempotent no-ops.
    pub async fn handle_event(&self, event: InboundEvent) -> bool {
        match event {
            InboundEvent::MessageNew { dialog_id, message } => {
                let mut state = self.state.lock().await;
                state.add_message_to_dialog(&dialog_id, message)
            }

            InboundEvent::MessageRead {
                dialog_id,
                message_id,
            } => {
                let mut state = self.state.lock().await;
                let Some(dialog) = state.get_dialog_mut(&dialog_id) else {
                    // Dialog was deleted locally, receipt arrived late
                    log::debug!("Read receipt for unknown dialog {dialog_id}, ignoring");
                    return false;
                };
                match dialog.get_message_mut(&message_id) {
                    Some(message) => message.mark_read(),
                    None => {
                        log::debug!("Read receipt for unknown message {message_id}, ignoring");
                        false
                    }
                }
            }

            InboundEvent::PresenceUpdate {
                user_id,
                is_online,
                last_activity,
            } => {
                let mut state = self.state.lock().await;
                match state.get_participant_mut(&user_id) {
                    Some(user) => user.apply_presence(is_online, last_activity),
                    None => false,
                }
            }

            InboundEvent::TypingUpdate {
                dialog_id,
                user_id,
                until,
            } => {
                let mut state = self.state.lock().await;
                match state.get_dialog_mut(&dialog_id) {
                    Some(dialog) if dialog.user.id == user_id => {
                        dialog.user.typing_until = until;
                        true
                    }
                    _ => false,
                }
            }
        }
    }

    /// A message authored by the other party became visible in the viewport.
    ///
    /// Fires at most once per message per view. The local flag is set first
    /// and the receipt emitted after, without waiting for acknowledgment; a
    /// failed send is logged and the optimistic state kept. A missing dialog
    /// or message means the thread unmounted before the signal arrived and
    /// is silently dropped.
    pub async fn mark_read_on_view(&self, dialog_id: &str, message_id: &str) -> bool {
        let marked = {
            let mut state = self.state.lock().await;
            let Some(dialog) = state.get_dialog_mut(dialog_id) else {
                log::debug!("Viewport signal for unknown dialog {dialog_id}, dropping");
                return false;
            };
            match dialog.get_message_mut(message_id) {
                // Own messages never need a receipt
                Some(message) if !message.mine => message.mark_read(),
                _ => false,
            }
        };

        if marked {
            let receipt = OutboundEvent::MessageRead {
                dialog_id: dialog_id.to_string(),
                message_id: message_id.to_string(),
            };
            if let Err(e) = self.outbound.send(receipt).await {
                log::warn!("Failed to send read receipt for {message_id}: {e}");
            }
        }

        marked
    }
}
