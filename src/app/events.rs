//! Outbound bridge events.
//!
//! [`TixngoBridge`](super::service::TixngoBridge) emits these through the
//! [`EventSink`](super::ports::EventSink) port. The default sink logs
//! them; hosts may forward them to analytics instead.

use crate::rpc::methods::Page;

/// Structured events emitted by the bridge.
#[derive(Debug, Clone, PartialEq)]
pub enum BridgeEvent {
    /// The embedded app reported it finished starting.
    Initialized { authenticated: bool },

    /// The embedded root view was shown. `None` for the current page.
    PagePresented(Option<Page>),

    /// The host reported the presented view closed.
    Dismissed { result_code: i32 },

    /// The embedded close button was pressed.
    ClosePressed,

    /// Diagnostic message from the embedded app.
    Debug(String),

    /// An inbound call named a method the host does not handle.
    UnhandledInbound { method: String, arguments: String },
}
