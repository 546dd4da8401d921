//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements | Connects to      |
//! |------------|------------|------------------|
//! | `log_sink` | EventSink  | `log` facade     |
//!
//! Runtime, transport and presenter adapters live in the host
//! application, which owns the embedding engine and the UI.

pub mod log_sink;
