//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing each [`BridgeEvent`] as one line
//! through the `log` facade. The host decides where those lines go
//! (logcat, a file, stderr); an analytics adapter would implement the
//! same trait.

use log::{info, warn};

use crate::app::events::BridgeEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`BridgeEvent`].
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &BridgeEvent) {
        match event {
            BridgeEvent::Initialized { authenticated } => {
                info!("INIT | embedded app ready, authenticated={}", authenticated);
            }
            BridgeEvent::PagePresented(Some(page)) => {
                info!("VIEW | presented page={:?}", page);
            }
            BridgeEvent::PagePresented(None) => {
                info!("VIEW | presented current page");
            }
            BridgeEvent::Dismissed { result_code } => {
                info!("VIEW | dismissed, result_code={}", result_code);
            }
            BridgeEvent::ClosePressed => {
                info!("VIEW | close pressed");
            }
            BridgeEvent::Debug(message) => {
                info!("DEBUG | {}", message);
            }
            BridgeEvent::UnhandledInbound { method, arguments } => {
                warn!("UNHANDLED | method={} arguments={}", method, arguments);
            }
        }
    }
}
