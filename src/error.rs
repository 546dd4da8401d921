//! Unified error types for the bridge.
//!
//! Every fallible facade operation funnels into [`BridgeError`], keeping
//! host-side error handling uniform. Inbound calls from the embedded app
//! never surface errors; they are acknowledged regardless.

use core::fmt;

use crate::app::state::BridgeState;

// ---------------------------------------------------------------------------
// Top-level bridge error
// ---------------------------------------------------------------------------

/// Every fallible facade operation funnels into this type.
#[derive(Debug)]
pub enum BridgeError {
    /// The operation needs a ready bridge; carries the state it found.
    NotReady(BridgeState),
    /// `initialize` was called on a bridge that is initializing or ready.
    AlreadyInitialized,
    /// Another exclusive bridge instance is alive in this process.
    InstanceExists,
    /// The main-context queue is full and the caller is the main context.
    QueueFull,
    /// The embedded runtime failed to start, cache or open its channel.
    Runtime(anyhow::Error),
    /// A payload did not have the shape the protocol expects.
    Coercion(CoercionError),
    /// A payload or config document could not be encoded or parsed.
    Json(serde_json::Error),
    /// The embedded side answered with an error or not-implemented,
    /// collapsed to a single string.
    Remote(String),
    /// Configuration is invalid.
    Config(&'static str),
}

impl fmt::Display for BridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotReady(state) => write!(f, "bridge not ready (state: {state:?})"),
            Self::AlreadyInitialized => write!(f, "bridge already initialized"),
            Self::InstanceExists => write!(f, "an exclusive bridge instance already exists"),
            Self::QueueFull => write!(f, "main-context queue full"),
            Self::Runtime(e) => write!(f, "embedded runtime: {e}"),
            Self::Coercion(e) => write!(f, "payload: {e}"),
            Self::Json(e) => write!(f, "json: {e}"),
            Self::Remote(msg) => write!(f, "remote: {msg}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl std::error::Error for BridgeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Runtime(e) => Some(&**e),
            Self::Coercion(e) => Some(e),
            Self::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<anyhow::Error> for BridgeError {
    fn from(e: anyhow::Error) -> Self {
        Self::Runtime(e)
    }
}

impl From<serde_json::Error> for BridgeError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

// ---------------------------------------------------------------------------
// Payload coercion errors
// ---------------------------------------------------------------------------

/// A channel value could not be coerced to the expected shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoercionError {
    /// Shape the protocol expects (e.g. `"bool"`).
    pub expected: &'static str,
    /// Shape that actually arrived.
    pub found: &'static str,
}

impl fmt::Display for CoercionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected {}, found {}", self.expected, self.found)
    }
}

impl std::error::Error for CoercionError {}

impl From<CoercionError> for BridgeError {
    fn from(e: CoercionError) -> Self {
        Self::Coercion(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Bridge-wide `Result` alias.
pub type Result<T> = core::result::Result<T, BridgeError>;
