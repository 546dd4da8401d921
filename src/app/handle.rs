//! Thread-safe handle to a bridge.
//!
//! [`BridgeHandle`] exposes the fire-and-forget and completion-based
//! operations from any thread. It never touches the transport itself:
//! every request is posted to the [`MainQueue`] and sent when the owning
//! [`TixngoBridge`](super::service::TixngoBridge) drains it. Completions
//! run on the main context.

use std::collections::BTreeMap;
use std::sync::Arc;

use log::debug;
use serde_json::Value;

use super::commands::BridgeRequest;
use super::state::{BridgeState, StateCell};
use crate::error::{BridgeError, Result};
use crate::model::{Environment, Profile, PushNotification};
use crate::rpc::channels::{BridgeCommand, MainQueue};
use crate::rpc::transport::{MethodCall, MethodResult, ReplyHandler, ResultSink};
use crate::rpc::value;

#[derive(Clone)]
pub struct BridgeHandle {
    queue: Arc<MainQueue>,
    state: Arc<StateCell>,
}

impl BridgeHandle {
    pub(crate) fn new(queue: Arc<MainQueue>, state: Arc<StateCell>) -> Self {
        Self { queue, state }
    }

    pub(crate) fn queue(&self) -> &Arc<MainQueue> {
        &self.queue
    }

    pub(crate) fn state_cell(&self) -> &StateCell {
        &self.state
    }

    pub fn state(&self) -> BridgeState {
        self.state.get()
    }

    // ── Outbound operations ───────────────────────────────────

    /// Sign the embedded app in with `profile`.
    ///
    /// `completion` gets the string the embedded app answered with, the
    /// collapsed error string, or `None` for a non-string answer.
    pub fn sign_in(
        &self,
        profile: &Profile,
        completion: impl FnOnce(Option<String>) + Send + 'static,
    ) -> Result<()> {
        self.send(
            BridgeRequest::SignIn(profile.clone()),
            Some(self.on_main(move |result: MethodResult| {
                completion(result.collapse().as_str().map(str::to_owned));
            })),
        )
    }

    pub fn sign_out(&self) -> Result<()> {
        self.send(BridgeRequest::SignOut, None)
    }

    /// Push an updated profile; `completion` fires once the embedded app
    /// answered, whatever the answer.
    pub fn set_profile(
        &self,
        profile: &Profile,
        completion: impl FnOnce() + Send + 'static,
    ) -> Result<()> {
        self.send(
            BridgeRequest::SetProfile(profile.clone()),
            Some(self.on_main(move |_result: MethodResult| completion())),
        )
    }

    /// Ask whether the embedded app holds a session. The embedded app
    /// answers `false` whenever the host's JWT callback yields `None`; the
    /// boolean is passed through untouched.
    pub fn get_auth_status(
        &self,
        completion: impl FnOnce(Result<bool>) + Send + 'static,
    ) -> Result<()> {
        self.send(
            BridgeRequest::GetAuthStatus,
            Some(self.on_main(move |result: MethodResult| {
                let status = match result {
                    MethodResult::Success(v) => value::expect_bool(&v).map_err(BridgeError::from),
                    other => Err(BridgeError::Remote(
                        other.collapse().as_str().unwrap_or_default().to_owned(),
                    )),
                };
                completion(status);
            })),
        )
    }

    /// Forward a push message received by the host's messaging integration.
    pub fn process_fcm_message_if_need(
        &self,
        title: Option<&str>,
        body: Option<&str>,
        data: Option<BTreeMap<String, String>>,
    ) -> Result<()> {
        let push = PushNotification::from_message(title, body, data);
        self.send(BridgeRequest::ProcessPushMessage(push), None)
    }

    /// Forward a refreshed push device token.
    pub fn process_fcm_token_if_need(&self, token: &str) -> Result<()> {
        self.send(BridgeRequest::ProcessPushDeviceToken(token.to_owned()), None)
    }

    pub fn set_env(&self, env: Environment) -> Result<()> {
        self.send(BridgeRequest::SetEnvironment(env), None)
    }

    // ── Inbound delivery ──────────────────────────────────────

    /// Hand an inbound call from the transport to the main context.
    /// It is dispatched on the next drain.
    pub fn dispatch_inbound(&self, call: MethodCall, sink: Box<dyn ResultSink>) -> Result<()> {
        self.queue.post(BridgeCommand::Inbound { call, sink })
    }

    // ── Internal ──────────────────────────────────────────────

    pub(crate) fn send(&self, request: BridgeRequest, reply: Option<ReplyHandler>) -> Result<()> {
        self.state.require_ready()?;
        let method = request.method();
        let arguments = request.arguments()?;
        debug!("queueing {}", method.name());
        self.queue.post(BridgeCommand::Invoke {
            method,
            arguments,
            reply,
        })
    }

    /// Wrap a completion so it runs on the main context whichever thread
    /// the transport replies on.
    fn on_main(&self, f: impl FnOnce(MethodResult) + Send + 'static) -> ReplyHandler {
        let queue = Arc::clone(&self.queue);
        Box::new(move |result| queue.run_on_main(move || f(result)))
    }
}

impl core::fmt::Debug for BridgeHandle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BridgeHandle")
            .field("state", &self.state.get())
            .field("pending", &self.queue.len())
            .finish()
    }
}
