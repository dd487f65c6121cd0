//! User-initiated mutation commands.
//!
//! This module contains:
//! - `dialogs`: the optimistic mutation dispatcher for dialog settings

mod dialogs;

pub use dialogs::{MutationDispatcher, MutationPhase};
