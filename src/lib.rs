//! Core library for Parley - the single source of truth for all Parley
//! messenger clients.
//!
//! The crate owns the client-side model a front-end renders from: the dialog
//! collection with its derived ordering and read state, the search overlay,
//! and the optimistic mutation dispatcher. Transport and backend API are
//! collaborator traits implemented by the client shell; rendering consumes
//! the state handle and feeds user intent back through the reconciler and
//! dispatcher.
//!
//! All state transitions are discrete, serialized events: they run to
//! completion under the shared state lock before the next event is
//! processed, so no cross-dialog locking or transactions exist anywhere in
//! the model.

pub mod commands;
mod dialog;
pub mod error;
mod events;
mod message;
pub mod ordering;
mod participant;
pub mod search;
pub mod services;
mod state;
pub mod transport;

pub use dialog::Dialog;
pub use error::{Error, Result};
pub use events::{InboundEvent, OutboundEvent};
pub use message::{Message, MessageContent};
pub use ordering::MAX_PINNED_DIALOGS;
pub use participant::Participant;
pub use search::{SearchOverlay, SearchResult};
pub use state::{ClientState, SharedState};
