//! Exactly-once answers to inbound invocations.
//!
//! [`Responder`] wraps the transport's [`ResultSink`]. Answering consumes
//! it; dropping it unanswered acknowledges with `null`, so an inbound call
//! is answered once on every path. The answer is always delivered on the
//! main context.
//!
//! [`PendingReply`] is what host callbacks receive when the embedded app
//! asks for data (JWT, device token, retry decision). The host resolves it
//! once, from any thread, whenever its own async work completes.

use std::marker::PhantomData;
use std::sync::Arc;

use log::warn;
use serde_json::Value;

use super::channels::MainQueue;
use super::transport::ResultSink;

/// Answer slot for one inbound invocation.
pub struct Responder {
    method: String,
    sink: Option<Box<dyn ResultSink>>,
    queue: Arc<MainQueue>,
}

impl Responder {
    pub fn new(method: impl Into<String>, sink: Box<dyn ResultSink>, queue: Arc<MainQueue>) -> Self {
        Self {
            method: method.into(),
            sink: Some(sink),
            queue,
        }
    }

    /// Method name of the call being answered.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Empty success.
    pub fn acknowledge(self) {
        self.succeed(Value::Null);
    }

    pub fn succeed(mut self, value: Value) {
        if let Some(sink) = self.sink.take() {
            self.queue.run_on_main(move || sink.success(value));
        }
    }
}

impl Drop for Responder {
    fn drop(&mut self) {
        if let Some(sink) = self.sink.take() {
            warn!("{}: dropped without an answer, acknowledging", self.method);
            self.queue.run_on_main(move || sink.success(Value::Null));
        }
    }
}

/// Value the host owes the embedded app, resolved exactly once.
///
/// `resolve` consumes the handle, so a second resolution does not
/// compile. Dropping it unresolved answers with `T::default()`
/// (`None` for tokens, `false` for the retry flag) and logs a warning.
pub struct PendingReply<T: Into<Value> + Default> {
    responder: Option<Responder>,
    _value: PhantomData<fn(T)>,
}

impl<T: Into<Value> + Default> PendingReply<T> {
    pub fn new(responder: Responder) -> Self {
        Self {
            responder: Some(responder),
            _value: PhantomData,
        }
    }

    /// Method name of the call awaiting this value.
    pub fn method(&self) -> &str {
        self.responder.as_ref().map_or("", Responder::method)
    }

    /// Hand the value to the embedded app. Safe from any thread.
    pub fn resolve(mut self, value: T) {
        if let Some(responder) = self.responder.take() {
            responder.succeed(value.into());
        }
    }
}

impl<T: Into<Value> + Default> Drop for PendingReply<T> {
    fn drop(&mut self) {
        if let Some(responder) = self.responder.take() {
            warn!("{}: pending reply dropped unresolved, answering default", responder.method());
            responder.succeed(T::default().into());
        }
    }
}
