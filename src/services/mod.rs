//! Services that drive the client state.
//!
//! This module contains:
//! - `event_handler`: the read-state reconciler fed by the socket stream
//!   and by local visibility signals

mod event_handler;

pub use event_handler::EventReconciler;
