//! Bridge facade: the hexagonal core.
//!
//! [`TixngoBridge`] owns the embedded runtime, its channel, the inbound
//! dispatcher and the last presenter. All I/O flows through the port
//! traits in [`ports`](super::ports), so the whole facade runs against
//! mock adapters in tests.
//!
//! ```text
//!  EmbeddedRuntime ──▶ ┌────────────────────────┐ ──▶ EventSink
//!                      │      TixngoBridge       │
//!  ChannelTransport ◀─▶│ MainQueue · Dispatcher  │──▶ HostPresenter
//!                      └────────────────────────┘
//!                                 ▲
//!                     BridgeHandle (any thread)
//! ```
//!
//! The facade lives on the main context. Other threads talk to it through
//! a [`BridgeHandle`]; their work is queued and runs on the next
//! [`drain`](TixngoBridge::drain) or [`process_next`](TixngoBridge::process_next).

use std::collections::BTreeMap;
use std::sync::Arc;

use log::{debug, error, info, warn};

use crate::adapters::log_sink::LogEventSink;
use crate::config::BridgeConfig;
use crate::error::{BridgeError, Result};
use crate::model::{Environment, Profile};
use crate::registry::InstanceClaim;
use crate::rpc::channels::{BridgeCommand, MainQueue};
use crate::rpc::engine::InboundDispatcher;
use crate::rpc::methods::{InboundMethod, Page};
use crate::rpc::reply::Responder;
use crate::rpc::transport::{ChannelTransport, MethodCall, MethodResult, ResultSink};

use super::commands::BridgeRequest;
use super::events::BridgeEvent;
use super::handle::BridgeHandle;
use super::handlers::HostHandlers;
use super::ports::{EmbeddedRuntime, EventSink, HostPresenter};
use super::state::{BridgeState, StateCell};

// ───────────────────────────────────────────────────────────────
// TixngoBridge
// ───────────────────────────────────────────────────────────────

/// Host-side facade over the embedded ticketing app.
pub struct TixngoBridge<R: EmbeddedRuntime> {
    config: BridgeConfig,
    runtime: R,
    transport: Option<R::Transport>,
    dispatcher: Option<InboundDispatcher>,
    /// Last presenter used to show the embedded view (last write wins).
    presenter: Option<Box<dyn HostPresenter<R::View>>>,
    sink: Box<dyn EventSink>,
    handle: BridgeHandle,
    _claim: Option<InstanceClaim>,
}

impl<R: EmbeddedRuntime> TixngoBridge<R> {
    /// Build a bridge whose main context is the calling thread.
    ///
    /// Does **not** start the runtime; call [`initialize`](Self::initialize) next.
    pub fn new(config: BridgeConfig, runtime: R) -> Self {
        let handle = BridgeHandle::new(Arc::new(MainQueue::new()), Arc::new(StateCell::new()));
        Self {
            config,
            runtime,
            transport: None,
            dispatcher: None,
            presenter: None,
            sink: Box::new(LogEventSink::new()),
            handle,
            _claim: None,
        }
    }

    /// Like [`new`](Self::new), but fails with [`BridgeError::InstanceExists`]
    /// while another exclusive bridge is alive in this process.
    pub fn exclusive(config: BridgeConfig, runtime: R) -> Result<Self> {
        let claim = InstanceClaim::acquire()?;
        let mut bridge = Self::new(config, runtime);
        bridge._claim = Some(claim);
        Ok(bridge)
    }

    /// Replace the default log-based event sink.
    #[must_use]
    pub fn with_event_sink(mut self, sink: impl EventSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Cloneable handle for other threads.
    pub fn handle(&self) -> BridgeHandle {
        self.handle.clone()
    }

    pub fn state(&self) -> BridgeState {
        self.handle.state()
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    pub fn runtime(&self) -> &R {
        &self.runtime
    }

    /// Mutable access to the embedded runtime, e.g. to repair it before
    /// retrying a failed [`initialize`](Self::initialize).
    pub fn runtime_mut(&mut self) -> &mut R {
        &mut self.runtime
    }

    /// Whether a presented view is currently remembered.
    pub fn is_presenting(&self) -> bool {
        self.presenter.is_some()
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Start the embedded runtime, open the channel and install `handlers`.
    ///
    /// A bridge initializes once; a later call fails with
    /// [`BridgeError::AlreadyInitialized`]. If the runtime fails to start
    /// the bridge returns to `Uninitialized` and may be retried.
    pub fn initialize(&mut self, handlers: HostHandlers) -> Result<()> {
        self.config.validate()?;
        self.handle.state_cell().begin_initialize()?;

        let transport = match self.start_runtime() {
            Ok(transport) => transport,
            Err(e) => {
                error!("embedded runtime failed to start: {:#}", e);
                self.handle.state_cell().reset();
                return Err(BridgeError::Runtime(e));
            }
        };

        self.transport = Some(transport);
        self.dispatcher = Some(InboundDispatcher::new(handlers));
        self.handle.state_cell().mark_ready();
        info!(
            "bridge ready on channel {} (engine key {})",
            self.config.channel_name, self.config.engine_cache_key
        );

        if let Some(env) = self.config.initial_environment {
            self.handle.set_env(env)?;
        }
        Ok(())
    }

    fn start_runtime(&mut self) -> anyhow::Result<R::Transport> {
        self.runtime.start_entrypoint()?;
        self.runtime.cache(&self.config.engine_cache_key)?;
        self.runtime.open_channel(&self.config.channel_name)
    }

    // ── Outbound operations ───────────────────────────────────

    pub fn sign_in(
        &self,
        profile: &Profile,
        completion: impl FnOnce(Option<String>) + Send + 'static,
    ) -> Result<()> {
        self.handle.sign_in(profile, completion)
    }

    pub fn sign_out(&self) -> Result<()> {
        self.handle.sign_out()
    }

    pub fn set_profile(&self, profile: &Profile, completion: impl FnOnce() + Send + 'static) -> Result<()> {
        self.handle.set_profile(profile, completion)
    }

    pub fn get_auth_status(&self, completion: impl FnOnce(Result<bool>) + Send + 'static) -> Result<()> {
        self.handle.get_auth_status(completion)
    }

    pub fn process_fcm_message_if_need(
        &self,
        title: Option<&str>,
        body: Option<&str>,
        data: Option<BTreeMap<String, String>>,
    ) -> Result<()> {
        self.handle.process_fcm_message_if_need(title, body, data)
    }

    pub fn process_fcm_token_if_need(&self, token: &str) -> Result<()> {
        self.handle.process_fcm_token_if_need(token)
    }

    pub fn set_env(&self, env: Environment) -> Result<()> {
        self.handle.set_env(env)
    }

    // ── Presentation ──────────────────────────────────────────

    /// Navigate the embedded app to `page`, then present it.
    pub fn open_page(&mut self, page: Page, presenter: impl HostPresenter<R::View> + 'static) -> Result<()> {
        self.handle.send(BridgeRequest::OpenPage(page), None)?;
        self.present(Some(page), Box::new(presenter))
    }

    pub fn open_home_page(&mut self, presenter: impl HostPresenter<R::View> + 'static) -> Result<()> {
        self.open_page(Page::Home, presenter)
    }

    pub fn open_event_page(&mut self, presenter: impl HostPresenter<R::View> + 'static) -> Result<()> {
        self.open_page(Page::MyEvents, presenter)
    }

    pub fn open_transferred_ticket_page(
        &mut self,
        presenter: impl HostPresenter<R::View> + 'static,
    ) -> Result<()> {
        self.open_page(Page::TransferredTickets, presenter)
    }

    pub fn open_pending_ticket_page(&mut self, presenter: impl HostPresenter<R::View> + 'static) -> Result<()> {
        self.open_page(Page::PendingTickets, presenter)
    }

    /// Present the embedded view on whatever page it is showing.
    pub fn open_current_page(&mut self, presenter: impl HostPresenter<R::View> + 'static) -> Result<()> {
        self.present(None, Box::new(presenter))
    }

    /// The host reports that a view it presented has closed.
    ///
    /// Returns `true` when `request_code` belongs to the bridge.
    pub fn on_presentation_result(&mut self, request_code: i32, result_code: i32) -> bool {
        if request_code != self.config.presentation_request_code {
            return false;
        }
        self.presenter = None;
        self.sink.emit(&BridgeEvent::Dismissed { result_code });
        true
    }

    fn present(&mut self, page: Option<Page>, mut presenter: Box<dyn HostPresenter<R::View>>) -> Result<()> {
        self.handle.state_cell().require_ready()?;
        // Navigation must reach the embedded app before the view shows.
        self.drain();
        let view = self
            .runtime
            .root_view(&self.config.engine_cache_key)
            .map_err(BridgeError::Runtime)?;
        presenter.present(view, self.config.presentation_request_code);
        self.presenter = Some(presenter);
        self.sink.emit(&BridgeEvent::PagePresented(page));
        Ok(())
    }

    // ── Inbound ───────────────────────────────────────────────

    /// Handle an inbound call on the main context. `sink` is answered
    /// exactly once, always with success.
    pub fn on_method_call(&mut self, call: MethodCall, sink: Box<dyn ResultSink>) {
        let responder = Responder::new(call.method.clone(), sink, Arc::clone(self.handle.queue()));

        let Some(dispatcher) = self.dispatcher.as_mut() else {
            warn!("{} arrived before initialization, acknowledging", call.method);
            responder.acknowledge();
            return;
        };

        if InboundMethod::from_name(&call.method) == Some(InboundMethod::CloseButtonPressed) {
            if let Some(mut presenter) = self.presenter.take() {
                presenter.finish(self.config.presentation_request_code);
            }
        }

        dispatcher.dispatch(call, responder, &mut *self.sink);
    }

    // ── Main-context pump ─────────────────────────────────────

    /// Run every queued command. Returns how many ran.
    pub fn drain(&mut self) -> usize {
        let mut ran = 0;
        while let Some(cmd) = self.handle.queue().try_next() {
            self.execute(cmd);
            ran += 1;
        }
        ran
    }

    /// Wait for the next queued command and run it.
    pub async fn process_next(&mut self) {
        let queue = Arc::clone(self.handle.queue());
        let cmd = queue.next().await;
        self.execute(cmd);
    }

    fn execute(&mut self, cmd: BridgeCommand) {
        match cmd {
            BridgeCommand::Invoke {
                method,
                arguments,
                reply,
            } => match self.transport.as_mut() {
                Some(transport) => {
                    debug!("invoking {}", method.name());
                    transport.invoke(method.name(), arguments, reply);
                }
                None => {
                    warn!("{}: no channel open", method.name());
                    if let Some(reply) = reply {
                        reply(MethodResult::NotImplemented);
                    }
                }
            },
            BridgeCommand::Inbound { call, sink } => self.on_method_call(call, sink),
            BridgeCommand::Run(f) => f(),
        }
    }
}

impl<R: EmbeddedRuntime> core::fmt::Debug for TixngoBridge<R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TixngoBridge")
            .field("config", &self.config)
            .field("state", &self.state())
            .field("presenting", &self.presenter.is_some())
            .field("exclusive", &self._claim.is_some())
            .finish_non_exhaustive()
    }
}
