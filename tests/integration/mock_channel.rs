//! Mock embedding runtime, channel and presenter for integration tests.
//!
//! Everything the bridge touches writes into one shared [`Journal`], so
//! tests can assert on the order of runtime, channel and UI calls without
//! a real embedded app.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde_json::Value;
use tixngo_bridge::app::events::BridgeEvent;
use tixngo_bridge::app::ports::{EmbeddedRuntime, EventSink, HostPresenter};
use tixngo_bridge::rpc::transport::{ChannelTransport, MethodResult, ReplyHandler, ResultSink};
use tixngo_bridge::{BridgeConfig, HostHandlers, TixngoBridge};

pub type Shared<T> = Arc<Mutex<Vec<T>>>;
pub type Journal = Shared<String>;

// ── MockTransport ─────────────────────────────────────────────

/// Records every invocation and answers from a scripted reply table.
/// Methods without a scripted reply answer not-implemented.
pub struct MockTransport {
    journal: Journal,
    invocations: Shared<(String, Value)>,
    replies: Arc<Mutex<HashMap<String, MethodResult>>>,
}

impl ChannelTransport for MockTransport {
    fn invoke(&mut self, method: &str, arguments: Value, reply: Option<ReplyHandler>) {
        self.journal.lock().unwrap().push(format!("invoke {method}"));
        self.invocations.lock().unwrap().push((method.to_owned(), arguments));
        if let Some(reply) = reply {
            let result = self
                .replies
                .lock()
                .unwrap()
                .remove(method)
                .unwrap_or(MethodResult::NotImplemented);
            reply(result);
        }
    }
}

// ── MockRuntime ───────────────────────────────────────────────

pub struct MockRuntime {
    journal: Journal,
    invocations: Shared<(String, Value)>,
    replies: Arc<Mutex<HashMap<String, MethodResult>>>,
    pub fail_start: bool,
}

impl MockRuntime {
    /// A runtime whose recordings nobody reads.
    pub fn detached() -> Self {
        Self {
            journal: Journal::default(),
            invocations: Shared::default(),
            replies: Arc::default(),
            fail_start: false,
        }
    }
}

impl EmbeddedRuntime for MockRuntime {
    type Transport = MockTransport;
    type View = String;

    fn start_entrypoint(&mut self) -> anyhow::Result<()> {
        self.journal.lock().unwrap().push("start".into());
        if self.fail_start {
            anyhow::bail!("entrypoint not found");
        }
        Ok(())
    }

    fn cache(&mut self, key: &str) -> anyhow::Result<()> {
        self.journal.lock().unwrap().push(format!("cache {key}"));
        Ok(())
    }

    fn open_channel(&mut self, name: &str) -> anyhow::Result<MockTransport> {
        self.journal.lock().unwrap().push(format!("channel {name}"));
        Ok(MockTransport {
            journal: Arc::clone(&self.journal),
            invocations: Arc::clone(&self.invocations),
            replies: Arc::clone(&self.replies),
        })
    }

    fn root_view(&self, key: &str) -> anyhow::Result<String> {
        Ok(format!("root:{key}"))
    }
}

// ── MockPresenter ─────────────────────────────────────────────

pub struct MockPresenter {
    journal: Journal,
}

impl MockPresenter {
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: Arc::clone(journal),
        }
    }
}

impl HostPresenter<String> for MockPresenter {
    fn present(&mut self, view: String, request_code: i32) {
        self.journal
            .lock()
            .unwrap()
            .push(format!("present {view} {request_code}"));
    }

    fn finish(&mut self, request_code: i32) {
        self.journal.lock().unwrap().push(format!("finish {request_code}"));
    }
}

// ── RecordingSink ─────────────────────────────────────────────

pub struct RecordingSink(pub Shared<BridgeEvent>);

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &BridgeEvent) {
        self.0.lock().unwrap().push(event.clone());
    }
}

// ── CaptureSink ───────────────────────────────────────────────

/// What the bridge answered an inbound call with.
#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    Success(Value),
    Error(String),
    NotImplemented,
}

pub struct CaptureSink(pub Shared<Answer>);

impl ResultSink for CaptureSink {
    fn success(self: Box<Self>, value: Value) {
        self.0.lock().unwrap().push(Answer::Success(value));
    }

    fn error(self: Box<Self>, code: &str, _message: Option<&str>, _details: Value) {
        self.0.lock().unwrap().push(Answer::Error(code.to_owned()));
    }

    fn not_implemented(self: Box<Self>) {
        self.0.lock().unwrap().push(Answer::NotImplemented);
    }
}

// ── Rig ───────────────────────────────────────────────────────

/// A bridge wired to mocks, plus handles on everything they record.
pub struct Rig {
    pub bridge: TixngoBridge<MockRuntime>,
    pub journal: Journal,
    pub invocations: Shared<(String, Value)>,
    pub replies: Arc<Mutex<HashMap<String, MethodResult>>>,
    pub events: Shared<BridgeEvent>,
    pub answers: Shared<Answer>,
}

#[allow(dead_code)]
impl Rig {
    pub fn new() -> Self {
        Self::with_config(BridgeConfig::default(), false)
    }

    pub fn with_config(config: BridgeConfig, fail_start: bool) -> Self {
        let journal = Journal::default();
        let invocations = Shared::default();
        let replies = Arc::new(Mutex::new(HashMap::new()));
        let events = Shared::default();
        let runtime = MockRuntime {
            journal: Arc::clone(&journal),
            invocations: Arc::clone(&invocations),
            replies: Arc::clone(&replies),
            fail_start,
        };
        let bridge = TixngoBridge::new(config, runtime).with_event_sink(RecordingSink(Arc::clone(&events)));
        Self {
            bridge,
            journal,
            invocations,
            replies,
            events,
            answers: Shared::default(),
        }
    }

    /// A rig already initialized with callbacks that do nothing.
    pub fn ready() -> Self {
        Self::ready_with(noop_handlers())
    }

    pub fn ready_with(handlers: HostHandlers) -> Self {
        let mut rig = Self::new();
        rig.bridge.initialize(handlers).unwrap();
        rig
    }

    pub fn script(&self, method: &str, result: MethodResult) {
        self.replies.lock().unwrap().insert(method.to_owned(), result);
    }

    /// A fresh answer slot for one inbound call.
    pub fn sink(&self) -> Box<dyn ResultSink> {
        Box::new(CaptureSink(Arc::clone(&self.answers)))
    }

    pub fn answers(&self) -> Vec<Answer> {
        self.answers.lock().unwrap().clone()
    }

    pub fn events(&self) -> Vec<BridgeEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn journal(&self) -> Vec<String> {
        self.journal.lock().unwrap().clone()
    }

    pub fn invocations(&self) -> Vec<(String, Value)> {
        self.invocations.lock().unwrap().clone()
    }
}

pub fn noop_handlers() -> HostHandlers {
    HostHandlers::new(|_| {}, |_| {}, |_| {}, |_| {}, || {})
}
