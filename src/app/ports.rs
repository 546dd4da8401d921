//! Port traits: the boundary between the bridge and the host platform.
//!
//! ```text
//!   Host adapter ──▶ Port trait ──▶ TixngoBridge
//! ```
//!
//! The host implements these for its embedding runtime, its UI stack and
//! its logging/telemetry. The bridge consumes them via generics or trait
//! objects and never touches platform APIs directly.

use crate::rpc::transport::ChannelTransport;

// ───────────────────────────────────────────────────────────────
// Embedded runtime (driven adapter: bridge → embedding engine)
// ───────────────────────────────────────────────────────────────

/// Lifecycle of the embedded mini-app's runtime.
///
/// One runtime per bridge; it is started once and cached under a single
/// key for the lifetime of the bridge.
pub trait EmbeddedRuntime {
    /// Channel produced by this runtime.
    type Transport: ChannelTransport;
    /// Presentable root view of the embedded app.
    type View;

    /// Run the embedded app's default entrypoint.
    fn start_entrypoint(&mut self) -> anyhow::Result<()>;

    /// Cache the running instance under `key`.
    fn cache(&mut self, key: &str) -> anyhow::Result<()>;

    /// Open the named channel to the running instance.
    fn open_channel(&mut self, name: &str) -> anyhow::Result<Self::Transport>;

    /// Build a presentable view over the instance cached under `key`.
    fn root_view(&self, key: &str) -> anyhow::Result<Self::View>;
}

// ───────────────────────────────────────────────────────────────
// Host presenter (driven adapter: bridge → host UI)
// ───────────────────────────────────────────────────────────────

/// The host UI context that shows the embedded view.
///
/// The bridge keeps the last presenter it used so a close request from
/// the embedded app can dismiss the view again.
pub trait HostPresenter<V> {
    /// Show `view`; the host reports its dismissal with `request_code`.
    fn present(&mut self, view: V, request_code: i32);

    /// Dismiss whatever was presented with `request_code`.
    fn finish(&mut self, request_code: i32);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: bridge → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The bridge emits structured [`BridgeEvent`](super::events::BridgeEvent)s
/// through this port. Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::BridgeEvent);
}
