//! Inbound dispatcher: demultiplexes embedded-app calls by method name.
//!
//! Every call ends in exactly one success answer:
//!
//! | Method                  | Host callback          | Answer                 |
//! |-------------------------|------------------------|------------------------|
//! | `initialized`           | `on_initialized(bool)` | empty, immediately     |
//! | `get_jwt_token`         | `on_get_jwt_token`     | resolved token         |
//! | `get_device_token`      | `on_get_device_token`  | resolved token         |
//! | `on_token_expired`      | `on_token_expired`     | resolved retry flag    |
//! | `on_close_button_pressed` | `on_close()`         | empty, immediately     |
//! | `debug`                 | none                   | empty, after logging   |
//! | anything else           | none                   | empty, after logging   |
//!
//! Dismissing the presented view on close is the facade's job; it owns
//! the presenter.

use log::{error, info, warn};

use super::methods::{InboundMethod, OutboundMethod};
use super::reply::{PendingReply, Responder};
use super::transport::MethodCall;
use super::value;
use crate::app::events::BridgeEvent;
use crate::app::handlers::HostHandlers;
use crate::app::ports::EventSink;

/// Routes inbound calls to the host's callbacks.
pub struct InboundDispatcher {
    handlers: HostHandlers,
}

impl InboundDispatcher {
    pub fn new(handlers: HostHandlers) -> Self {
        Self { handlers }
    }

    /// Dispatch one call. `responder` is consumed on every path, either
    /// answered here or moved into a [`PendingReply`] for the host.
    pub fn dispatch(&mut self, call: MethodCall, responder: Responder, sink: &mut dyn EventSink) {
        let Some(method) = InboundMethod::from_name(&call.method) else {
            Self::unhandled(call, responder, sink);
            return;
        };

        match method {
            InboundMethod::Initialized => {
                match value::expect_bool(&call.arguments) {
                    Ok(authenticated) => {
                        (self.handlers.on_initialized)(authenticated);
                        sink.emit(&BridgeEvent::Initialized { authenticated });
                    }
                    Err(e) => error!("{}: bad arguments ({}), callback skipped", call.method, e),
                }
                responder.acknowledge();
            }
            InboundMethod::GetJwtToken => {
                (self.handlers.on_get_jwt_token)(PendingReply::new(responder));
            }
            InboundMethod::GetDeviceToken => {
                (self.handlers.on_get_device_token)(PendingReply::new(responder));
            }
            InboundMethod::TokenExpired => {
                (self.handlers.on_token_expired)(PendingReply::new(responder));
            }
            InboundMethod::CloseButtonPressed => {
                (self.handlers.on_close)();
                sink.emit(&BridgeEvent::ClosePressed);
                responder.acknowledge();
            }
            InboundMethod::Debug => {
                info!("Debug log {}", call.arguments);
                sink.emit(&BridgeEvent::Debug(call.arguments.to_string()));
                responder.acknowledge();
            }
        }
    }

    fn unhandled(call: MethodCall, responder: Responder, sink: &mut dyn EventSink) {
        if OutboundMethod::from_name(&call.method).is_some() {
            warn!("outbound method {} arrived inbound, ignoring", call.method);
        }
        warn!("Method {} - Arguments {}", call.method, call.arguments);
        sink.emit(&BridgeEvent::UnhandledInbound {
            method: call.method,
            arguments: call.arguments.to_string(),
        });
        responder.acknowledge();
    }
}
