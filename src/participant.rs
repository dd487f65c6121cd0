use serde::{Deserialize, Serialize};

/// The other party of a Dialog.
///
/// Presence fields (`is_online`, `last_activity`) are `None` until the first
/// presence event arrives; the rendering layer shows "unknown" rather than a
/// guessed value.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Participant {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub photo_url: String,
    pub is_online: Option<bool>,
    pub last_activity: Option<u64>,
    pub is_blocked: bool,
    /// Unix timestamp until which this participant counts as typing.
    /// Typing is derived from this expiry rather than stored as a flag,
    /// so a missed "stopped typing" event can never wedge the indicator.
    pub typing_until: u64,
}

impl Participant {
    pub fn new(id: String) -> Self {
        Self {
            id,
            first_name: String::new(),
            last_name: String::new(),
            photo_url: String::new(),
            is_online: None,
            last_activity: None,
            is_blocked: false,
            typing_until: 0,
        }
    }

    /// Full display name, falling back to the id when no name is known
    pub fn full_name(&self) -> String {
        let name = format!("{} {}", self.first_name, self.last_name);
        let trimmed = name.trim();
        if trimmed.is_empty() {
            self.id.clone()
        } else {
            trimmed.to_string()
        }
    }

    /// Whether the participant is typing at the given moment
    pub fn is_typing(&self, now: u64) -> bool {
        self.typing_until > now
    }

    /// Merge a presence update into this participant
    ///
    /// Returns `true` if any field actually changed, `false` otherwise.
    pub fn apply_presence(&mut self, is_online: Option<bool>, last_activity: Option<u64>) -> bool {
        let mut changed = false;

        if let Some(online) = is_online {
            if self.is_online != Some(online) {
                self.is_online = Some(online);
                changed = true;
            }
        }

        if let Some(at) = last_activity {
            if self.last_activity != Some(at) {
                self.last_activity = Some(at);
                changed = true;
            }
        }

        changed
    }
}
