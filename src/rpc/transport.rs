//! Channel transport abstraction: any named-method invocation primitive.
//!
//! The bridge never owns the wire. A transport delivers `(method, args)`
//! to the embedded runtime and reports exactly one [`MethodResult`] per
//! invocation. Inbound calls arrive as a [`MethodCall`] plus a
//! [`ResultSink`] that must be answered exactly once.

use serde_json::Value;

/// Fixed string a not-implemented reply collapses to.
pub const NOT_IMPLEMENTED: &str = "Not implemented";

/// Terminal outcome of one invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum MethodResult {
    Success(Value),
    Error {
        code: String,
        message: Option<String>,
        details: Value,
    },
    NotImplemented,
}

impl MethodResult {
    /// Collapse into the single value completions receive.
    ///
    /// Errors become `message + code` (a missing message counts as empty),
    /// not-implemented becomes [`NOT_IMPLEMENTED`]. Structured error data
    /// does not survive.
    pub fn collapse(self) -> Value {
        match self {
            Self::Success(value) => value,
            Self::Error { code, message, .. } => {
                Value::String(format!("{}{}", message.unwrap_or_default(), code))
            }
            Self::NotImplemented => Value::String(NOT_IMPLEMENTED.to_owned()),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

/// Callback receiving the reply to an outbound invocation.
pub type ReplyHandler = Box<dyn FnOnce(MethodResult) + Send>;

/// An inbound invocation from the embedded app.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodCall {
    pub method: String,
    pub arguments: Value,
}

impl MethodCall {
    pub fn new(method: impl Into<String>, arguments: Value) -> Self {
        Self {
            method: method.into(),
            arguments,
        }
    }
}

/// Response side of an inbound invocation.
///
/// Methods consume the sink, so a transport sees at most one answer.
pub trait ResultSink: Send {
    fn success(self: Box<Self>, value: Value);

    fn error(self: Box<Self>, code: &str, message: Option<&str>, details: Value);

    fn not_implemented(self: Box<Self>);
}

/// Outbound half of the channel. Must be driven from the main context.
pub trait ChannelTransport {
    /// Invoke `method` on the embedded side. `reply`, when present, is
    /// called exactly once with the outcome.
    fn invoke(&mut self, method: &str, arguments: Value, reply: Option<ReplyHandler>);
}

/// A transport with nothing on the other end.
/// Every invocation is answered with not-implemented.
pub struct NullTransport;

impl ChannelTransport for NullTransport {
    fn invoke(&mut self, _method: &str, _arguments: Value, reply: Option<ReplyHandler>) {
        if let Some(reply) = reply {
            reply(MethodResult::NotImplemented);
        }
    }
}
