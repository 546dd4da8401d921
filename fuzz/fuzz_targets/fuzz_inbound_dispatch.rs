//! Fuzz target: `TixngoBridge::on_method_call`
//!
//! Splits the input into a method name and a JSON payload, feeds the call
//! through a ready bridge and asserts that it is answered with exactly one
//! success, never an error, and never panics on a mistyped argument.
//!
//! cargo fuzz run fuzz_inbound_dispatch

#![no_main]

use std::sync::{Arc, Mutex};

use libfuzzer_sys::fuzz_target;
use serde_json::Value;
use tixngo_bridge::app::ports::EmbeddedRuntime;
use tixngo_bridge::rpc::transport::{MethodCall, NullTransport, ResultSink};
use tixngo_bridge::{BridgeConfig, HostHandlers, TixngoBridge};

struct Headless;

impl EmbeddedRuntime for Headless {
    type Transport = NullTransport;
    type View = ();

    fn start_entrypoint(&mut self) -> anyhow::Result<()> {
        Ok(())
    }

    fn cache(&mut self, _key: &str) -> anyhow::Result<()> {
        Ok(())
    }

    fn open_channel(&mut self, _name: &str) -> anyhow::Result<NullTransport> {
        Ok(NullTransport)
    }

    fn root_view(&self, _key: &str) -> anyhow::Result<()> {
        Ok(())
    }
}

struct Count(Arc<Mutex<u32>>);

impl ResultSink for Count {
    fn success(self: Box<Self>, _value: Value) {
        *self.0.lock().unwrap() += 1;
    }

    fn error(self: Box<Self>, _code: &str, _message: Option<&str>, _details: Value) {
        panic!("inbound calls are never answered with an error");
    }

    fn not_implemented(self: Box<Self>) {
        panic!("inbound calls are never answered not-implemented");
    }
}

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let (method, payload) = text.split_once('\n').unwrap_or((text, "null"));
    let arguments = serde_json::from_str(payload).unwrap_or(Value::String(payload.to_owned()));

    let mut bridge = TixngoBridge::new(BridgeConfig::default(), Headless);
    // Drop every pending reply unresolved, so the default answers.
    let handlers = HostHandlers::new(|_| {}, drop, drop, drop, || {});
    bridge.initialize(handlers).unwrap();

    let answers = Arc::new(Mutex::new(0));
    bridge.on_method_call(MethodCall::new(method, arguments), Box::new(Count(Arc::clone(&answers))));
    bridge.drain();

    assert_eq!(*answers.lock().unwrap(), 1, "exactly one answer per call");
});
