//! State container for the Parley core.
//!
//! This module contains:
//! - `client_state`: the ClientState struct and its methods
//!
//! The container is injectable: it is created by the client shell and handed
//! to the reconciler, dispatcher and rendering layer as a shared handle,
//! never reached through a global.

mod client_state;

pub use client_state::{ClientState, SharedState};
