//! Dialog mutation dispatcher.
//!
//! User-initiated mutations follow an optimistic apply, confirm-or-rollback
//! discipline, with the strictness matched to the blast radius of the
//! mutation:
//! - pin and mute toggles are best-effort: applied immediately and left in
//!   place if the backend rejects them (the user can flip them back)
//! - block/unblock reconciles strictly to the server-confirmed truth, since
//!   it is visible to the other user
//! - delete is not optimistic at all: the dialog leaves the collection only
//!   once the backend has confirmed, so a failed delete never ghosts a
//!   conversation

use std::sync::Arc;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::ordering::MAX_PINNED_DIALOGS;
use crate::state::SharedState;
use crate::transport::DialogApi;

/// Resolution of an in-flight mutation.
///
/// Every dispatcher method drives its mutation through the full
/// pending -> confirmed/rejected cycle before returning, so `Pending` is
/// only ever observable mid-flight.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MutationPhase {
    Pending,
    Confirmed,
    /// The backend refused. For best-effort toggles the local state is left
    /// as applied; the caller may surface the rejection as feedback.
    Rejected,
}

pub struct MutationDispatcher {
    state: SharedState,
    api: Arc<dyn DialogApi>,
}

impl MutationDispatcher {
    pub fn new(state: SharedState, api: Arc<dyn DialogApi>) -> Self {
        Self { state, api }
    }

    /// Pin or unpin a dialog.
    ///
    /// Pinning past [`MAX_PINNED_DIALOGS`] is rejected before any state
    /// change (validate-then-apply, not apply-then-rollback) so the caller
    /// can surface it inline.
    pub async fn set_pinned(&self, dialog_id: &str, pinned: bool) -> Result<MutationPhase> {
        {
            let mut state = self.state.lock().await;
            let dialog = state
                .get_dialog(dialog_id)
                .ok_or_else(|| Error::DialogNotFound(dialog_id.to_string()))?;

            if dialog.is_pinned == pinned {
                return Ok(MutationPhase::Confirmed);
            }
            if pinned && state.pinned_count() >= MAX_PINNED_DIALOGS {
                return Err(Error::PinLimitReached(MAX_PINNED_DIALOGS));
            }

            if let Some(dialog) = state.get_dialog_mut(dialog_id) {
                dialog.is_pinned = pinned;
            }
        }

        match self.api.set_pinned(dialog_id, pinned).await {
            Ok(()) => Ok(MutationPhase::Confirmed),
            Err(e) => {
                // Best-effort: keep the optimistic toggle, the user can undo it
                log::warn!("Pin update for {dialog_id} not acknowledged: {e}");
                Ok(MutationPhase::Rejected)
            }
        }
    }

    /// Toggle message sounds for a dialog (best-effort)
    pub async fn set_sound_enabled(&self, dialog_id: &str, enabled: bool) -> Result<MutationPhase> {
        {
            let mut state = self.state.lock().await;
            let dialog = state
                .get_dialog_mut(dialog_id)
                .ok_or_else(|| Error::DialogNotFound(dialog_id.to_string()))?;
            dialog.is_sound_enabled = enabled;
        }

        match self.api.set_sound_enabled(dialog_id, enabled).await {
            Ok(()) => Ok(MutationPhase::Confirmed),
            Err(e) => {
                log::warn!("Sound update for {dialog_id} not acknowledged: {e}");
                Ok(MutationPhase::Rejected)
            }
        }
    }

    /// Toggle notifications for a dialog (best-effort)
    pub async fn set_notifications_enabled(
        &self,
        dialog_id: &str,
        enabled: bool,
    ) -> Result<MutationPhase> {
        {
            let mut state = self.state.lock().await;
            let dialog = state
                .get_dialog_mut(dialog_id)
                .ok_or_else(|| Error::DialogNotFound(dialog_id.to_string()))?;
            dialog.is_notifications_enabled = enabled;
        }

        match self.api.set_notifications_enabled(dialog_id, enabled).await {
            Ok(()) => Ok(MutationPhase::Confirmed),
            Err(e) => {
                log::warn!("Notification update for {dialog_id} not acknowledged: {e}");
                Ok(MutationPhase::Rejected)
            }
        }
    }

    /// Block or unblock a dialog's participant.
    ///
    /// Applied optimistically, then reconciled to the server-confirmed flag,
    /// which may differ from what was requested. On failure the pre-mutation
    /// value is restored and the error propagated.
    pub async fn set_blocked(&self, dialog_id: &str, blocked: bool) -> Result<bool> {
        let (user_id, previous) = {
            let mut state = self.state.lock().await;
            let dialog = state
                .get_dialog_mut(dialog_id)
                .ok_or_else(|| Error::DialogNotFound(dialog_id.to_string()))?;
            let previous = dialog.user.is_blocked;
            dialog.user.is_blocked = blocked;
            (dialog.user.id.clone(), previous)
        };

        match self.api.set_blocked(&user_id, blocked).await {
            Ok(status) => {
                // The server's answer is the truth, even if it contradicts
                // the request
                let mut state = self.state.lock().await;
                if let Some(user) = state.get_participant_mut(&user_id) {
                    user.is_blocked = status.is_blocked;
                }
                Ok(status.is_blocked)
            }
            Err(e) => {
                let mut state = self.state.lock().await;
                if let Some(user) = state.get_participant_mut(&user_id) {
                    user.is_blocked = previous;
                }
                Err(e)
            }
        }
    }

    /// Delete a dialog.
    ///
    /// Not optimistic: the dialog is removed from the collection only after
    /// the backend confirms. A failed delete leaves it fully intact.
    pub async fn delete_dialog(&self, dialog_id: &str) -> Result<()> {
        {
            let state = self.state.lock().await;
            if state.get_dialog(dialog_id).is_none() {
                return Err(Error::DialogNotFound(dialog_id.to_string()));
            }
        }

        self.api.delete_dialog(dialog_id).await?;

        let mut state = self.state.lock().await;
        state.remove_dialog(dialog_id);
        Ok(())
    }
}
