//! Integration tests for the facade → channel pipeline.
//!
//! Outbound operations are queued on the main context and reach the mock
//! transport on `drain()`; completions see the collapsed reply.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use serde_json::{Value, json};
use tixngo_bridge::app::events::BridgeEvent;
use tixngo_bridge::app::state::BridgeState;
use tixngo_bridge::rpc::methods::Page;
use tixngo_bridge::rpc::transport::MethodResult;
use tixngo_bridge::{BridgeConfig, BridgeError, Environment, Gender, Profile, TixngoBridge};

use crate::mock_channel::{MockPresenter, MockRuntime, Rig, noop_handlers};

fn jane() -> Profile {
    Profile::new("Jane", "Doe", Gender::Female)
}

fn slot<T>() -> Arc<Mutex<Option<T>>> {
    Arc::new(Mutex::new(None))
}

fn sign_in_answer(rig: &mut Rig) -> Option<String> {
    let seen = slot();
    let out = Arc::clone(&seen);
    rig.bridge
        .sign_in(&jane(), move |answer| *out.lock().unwrap() = Some(answer))
        .unwrap();
    rig.bridge.drain();
    let answer = seen.lock().unwrap().take();
    answer.expect("completion must have run")
}

// ── Lifecycle ─────────────────────────────────────────────────

#[test]
fn initialize_starts_caches_then_opens_channel() {
    let mut rig = Rig::new();
    assert_eq!(rig.bridge.state(), BridgeState::Uninitialized);

    rig.bridge.initialize(noop_handlers()).unwrap();

    assert_eq!(rig.bridge.state(), BridgeState::Ready);
    assert_eq!(rig.journal(), vec!["start", "cache engine", "channel io.tixngo.sdk"]);
}

#[test]
fn second_initialize_fails_fast() {
    let mut rig = Rig::ready();
    assert!(matches!(
        rig.bridge.initialize(noop_handlers()),
        Err(BridgeError::AlreadyInitialized)
    ));
    assert_eq!(rig.journal().len(), 3, "runtime must not be started twice");
}

#[test]
fn failed_start_can_be_retried() {
    let mut rig = Rig::with_config(BridgeConfig::default(), true);
    assert!(matches!(
        rig.bridge.initialize(noop_handlers()),
        Err(BridgeError::Runtime(_))
    ));
    assert_eq!(rig.bridge.state(), BridgeState::Uninitialized);
    assert_eq!(rig.journal(), vec!["start"]);

    rig.bridge.runtime_mut().fail_start = false;
    rig.bridge.initialize(noop_handlers()).unwrap();
    assert_eq!(rig.bridge.state(), BridgeState::Ready);
    assert_eq!(
        rig.journal(),
        vec!["start", "start", "cache engine", "channel io.tixngo.sdk"]
    );
}

#[test]
fn operations_before_initialize_are_rejected() {
    let mut rig = Rig::new();
    assert!(matches!(
        rig.bridge.sign_out(),
        Err(BridgeError::NotReady(BridgeState::Uninitialized))
    ));
    assert!(matches!(
        rig.bridge.open_home_page(MockPresenter::new(&rig.journal)),
        Err(BridgeError::NotReady(_))
    ));
    assert_eq!(rig.bridge.drain(), 0);
    assert!(rig.invocations().is_empty());
}

#[test]
fn initial_environment_sent_after_initialize() {
    let config = BridgeConfig {
        initial_environment: Some(Environment::Preprod),
        ..BridgeConfig::default()
    };
    let mut rig = Rig::with_config(config, false);
    rig.bridge.initialize(noop_handlers()).unwrap();
    rig.bridge.drain();
    assert_eq!(
        rig.invocations(),
        vec![("sdk.set_environment".to_owned(), json!("PREPROD"))]
    );
}

#[test]
fn exclusive_bridge_blocks_a_second_one() {
    let a = TixngoBridge::exclusive(BridgeConfig::default(), MockRuntime::detached());
    assert!(a.is_ok());
    let b = TixngoBridge::exclusive(BridgeConfig::default(), MockRuntime::detached());
    assert!(matches!(b, Err(BridgeError::InstanceExists)));

    // Plain bridges are unaffected by the claim.
    let mut plain = Rig::new();
    assert!(plain.bridge.initialize(noop_handlers()).is_ok());

    drop(a);
    assert!(TixngoBridge::exclusive(BridgeConfig::default(), MockRuntime::detached()).is_ok());
}

// ── sign_in ───────────────────────────────────────────────────

#[test]
fn sign_in_sends_profile_and_passes_string_through() {
    let mut rig = Rig::ready();
    rig.script("sdk.do_sign_in", MethodResult::Success(json!("ok")));

    assert_eq!(sign_in_answer(&mut rig), Some("ok".to_owned()));
    assert_eq!(
        rig.invocations(),
        vec![(
            "sdk.do_sign_in".to_owned(),
            json!({"firstName": "Jane", "lastName": "Doe", "gender": "female"})
        )]
    );
}

#[test]
fn sign_in_error_collapses_to_message_and_code() {
    let mut rig = Rig::ready();
    rig.script(
        "sdk.do_sign_in",
        MethodResult::Error {
            code: "E1".into(),
            message: Some("bad".into()),
            details: Value::Null,
        },
    );
    assert_eq!(sign_in_answer(&mut rig), Some("badE1".to_owned()));
}

#[test]
fn sign_in_not_implemented_and_non_string_success() {
    let mut rig = Rig::ready();
    assert_eq!(sign_in_answer(&mut rig), Some("Not implemented".to_owned()));

    rig.script("sdk.do_sign_in", MethodResult::Success(json!(true)));
    assert_eq!(sign_in_answer(&mut rig), None);
}

// ── Other outbound operations ─────────────────────────────────

#[test]
fn get_auth_status_passes_boolean_through() {
    let mut rig = Rig::ready();
    for expected in [true, false] {
        rig.script("sdk.get_auth_status", MethodResult::Success(json!(expected)));
        let seen = slot();
        let out = Arc::clone(&seen);
        rig.bridge
            .get_auth_status(move |status| *out.lock().unwrap() = Some(status))
            .unwrap();
        rig.bridge.drain();
        let status = seen.lock().unwrap().take().unwrap();
        assert_eq!(status.unwrap(), expected);
    }
}

#[test]
fn get_auth_status_reports_mistyped_and_failed_replies() {
    let mut rig = Rig::ready();
    let seen = Arc::new(Mutex::new(Vec::new()));

    rig.script("sdk.get_auth_status", MethodResult::Success(json!("yes")));
    let out = Arc::clone(&seen);
    rig.bridge
        .get_auth_status(move |status| out.lock().unwrap().push(status))
        .unwrap();
    rig.bridge.drain();

    rig.script(
        "sdk.get_auth_status",
        MethodResult::Error {
            code: "E9".into(),
            message: None,
            details: Value::Null,
        },
    );
    let out = Arc::clone(&seen);
    rig.bridge
        .get_auth_status(move |status| out.lock().unwrap().push(status))
        .unwrap();
    rig.bridge.drain();

    let seen = seen.lock().unwrap();
    assert!(matches!(seen[0], Err(BridgeError::Coercion(_))));
    assert!(matches!(&seen[1], Err(BridgeError::Remote(s)) if s == "E9"));
}

#[test]
fn set_profile_completes_after_round_trip() {
    let mut rig = Rig::ready();
    rig.script("sdk.set_profile", MethodResult::Success(Value::Null));
    let done = slot();
    let out = Arc::clone(&done);
    rig.bridge
        .set_profile(&jane().with_email("jane@example.com"), move || {
            *out.lock().unwrap() = Some(());
        })
        .unwrap();
    assert!(done.lock().unwrap().is_none(), "nothing sent before the drain");

    rig.bridge.drain();
    assert!(done.lock().unwrap().is_some());
    assert_eq!(rig.invocations()[0].1["email"], json!("jane@example.com"));
}

#[test]
fn push_message_payload_shape() {
    let mut rig = Rig::ready();
    let data = BTreeMap::from([("k".to_owned(), "v".to_owned())]);
    rig.bridge
        .process_fcm_message_if_need(None, Some("hello"), Some(data))
        .unwrap();
    rig.bridge.drain();
    assert_eq!(
        rig.invocations(),
        vec![(
            "sdk.process_push_message".to_owned(),
            json!({"notification": {"body": "hello"}, "data": {"k": "v"}})
        )]
    );
}

#[test]
fn push_message_without_display_fields_sends_empty_notification() {
    let mut rig = Rig::ready();
    rig.bridge.process_fcm_message_if_need(None, None, None).unwrap();
    rig.bridge.drain();
    assert_eq!(
        rig.invocations(),
        vec![("sdk.process_push_message".to_owned(), json!({"notification": {}}))]
    );
}

#[test]
fn fire_and_forget_operations_keep_order() {
    let mut rig = Rig::ready();
    rig.bridge.process_fcm_token_if_need("fcm-token").unwrap();
    rig.bridge.set_env(Environment::Val).unwrap();
    rig.bridge.sign_out().unwrap();
    assert_eq!(rig.bridge.drain(), 3);
    assert_eq!(
        rig.invocations(),
        vec![
            ("sdk.process_push_device_token".to_owned(), json!("fcm-token")),
            ("sdk.set_environment".to_owned(), json!("VAL")),
            ("sdk.do_sign_out".to_owned(), Value::Null),
        ]
    );
}

#[test]
fn handle_on_worker_thread_is_sent_on_drain() {
    let mut rig = Rig::ready();
    let handle = rig.bridge.handle();
    std::thread::spawn(move || handle.sign_out().unwrap())
        .join()
        .unwrap();

    assert!(rig.invocations().is_empty(), "transport only runs on the main context");
    assert_eq!(rig.bridge.drain(), 1);
    assert_eq!(rig.invocations()[0].0, "sdk.do_sign_out");
}

#[test]
fn completion_from_worker_thread_reply_runs_on_drain() {
    let mut rig = Rig::ready();
    rig.script("sdk.get_auth_status", MethodResult::Success(json!(true)));
    let seen = slot();
    let out = Arc::clone(&seen);
    let handle = rig.bridge.handle();
    std::thread::spawn(move || {
        handle
            .get_auth_status(move |status| *out.lock().unwrap() = Some(status.is_ok()))
            .unwrap();
    })
    .join()
    .unwrap();

    rig.bridge.drain();
    assert_eq!(*seen.lock().unwrap(), Some(true));
}

#[test]
fn async_pump_runs_one_command() {
    let mut rig = Rig::ready();
    rig.bridge.sign_out().unwrap();
    futures_lite::future::block_on(rig.bridge.process_next());
    assert_eq!(rig.invocations().len(), 1);
}

// ── Presentation ──────────────────────────────────────────────

#[test]
fn open_page_navigates_before_presenting() {
    let mut rig = Rig::ready();
    rig.bridge.open_home_page(MockPresenter::new(&rig.journal)).unwrap();

    assert_eq!(
        &rig.journal()[3..],
        ["invoke sdk.open_home_page", "present root:engine 1"]
    );
    assert!(rig.bridge.is_presenting());
    assert_eq!(rig.events(), vec![BridgeEvent::PagePresented(Some(Page::Home))]);
}

#[test]
fn each_page_opens_its_method() {
    let mut rig = Rig::ready();
    rig.bridge.open_event_page(MockPresenter::new(&rig.journal)).unwrap();
    rig.bridge.open_transferred_ticket_page(MockPresenter::new(&rig.journal)).unwrap();
    rig.bridge.open_pending_ticket_page(MockPresenter::new(&rig.journal)).unwrap();

    let methods: Vec<String> = rig.invocations().into_iter().map(|(m, _)| m).collect();
    assert_eq!(
        methods,
        [
            "sdk.open_my_event_page",
            "sdk.open_transferred_ticket_page",
            "sdk.open_pending_ticket_page",
        ]
    );
}

#[test]
fn open_current_page_presents_without_navigation() {
    let mut rig = Rig::ready();
    rig.bridge.open_current_page(MockPresenter::new(&rig.journal)).unwrap();
    assert!(rig.invocations().is_empty());
    assert_eq!(rig.events(), vec![BridgeEvent::PagePresented(None)]);
}

#[test]
fn presentation_result_forgets_presenter() {
    let mut rig = Rig::ready();
    rig.bridge.open_home_page(MockPresenter::new(&rig.journal)).unwrap();

    assert!(!rig.bridge.on_presentation_result(7, 0));
    assert!(rig.bridge.is_presenting());

    assert!(rig.bridge.on_presentation_result(1, -1));
    assert!(!rig.bridge.is_presenting());
    assert_eq!(
        rig.events().last(),
        Some(&BridgeEvent::Dismissed { result_code: -1 })
    );
}
