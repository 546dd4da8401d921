//! Application core: the facade and everything it orchestrates.
//!
//! The embedding runtime, the channel and the host UI are reached only
//! through **port traits** defined in [`ports`], keeping this layer fully
//! testable without a real embedded app.

pub mod commands;
pub mod events;
pub mod handle;
pub mod handlers;
pub mod ports;
pub mod service;
pub mod state;
