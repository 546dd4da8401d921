//! Main-context task queue.
//!
//! The channel transport is main-context-affine: every outbound invocation
//! and every answer to an inbound call must run on the thread that owns
//! the bridge. Any thread may post; only the owner drains.
//!
//! ```text
//! ┌──────────────┐  BridgeCommand  ┌──────────────┐
//! │ any thread   │───────────────▶│  MainQueue   │──▶ drain() on main
//! │ (host async) │                 │ (bounded)    │
//! └──────────────┘                 └──────────────┘
//! ```
//!
//! Uses an `embassy-sync` bounded MPMC channel with a single consumer.
//! `CriticalSectionRawMutex` needs a `critical-section` implementation in
//! the final binary. The default `std-critical-section` feature supplies
//! the `std` one; with default features off the host must provide its own
//! (e.g. via `critical_section::set_impl!`).

use core::fmt;
use std::thread::{self, ThreadId};

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, TrySendError};
use log::{error, warn};
use serde_json::Value;

use super::methods::OutboundMethod;
use super::transport::{MethodCall, ReplyHandler, ResultSink};
use crate::error::{BridgeError, Result};

/// Queue depth. Posting from the main context fails once this many
/// commands are pending; other threads wait for space instead.
pub const QUEUE_DEPTH: usize = 32;

/// Work that must run on the main context.
pub enum BridgeCommand {
    /// Send an outbound invocation through the transport.
    Invoke {
        method: OutboundMethod,
        arguments: Value,
        reply: Option<ReplyHandler>,
    },
    /// Dispatch an inbound invocation handed over from another thread.
    Inbound {
        call: MethodCall,
        sink: Box<dyn ResultSink>,
    },
    /// Run a closure (inbound responses, outbound completions).
    Run(Box<dyn FnOnce() + Send>),
}

impl fmt::Debug for BridgeCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invoke { method, reply, .. } => f
                .debug_struct("Invoke")
                .field("method", &method.name())
                .field("awaits_reply", &reply.is_some())
                .finish(),
            Self::Inbound { call, .. } => f.debug_struct("Inbound").field("method", &call.method).finish(),
            Self::Run(_) => f.write_str("Run"),
        }
    }
}

/// Single-consumer queue bound to the thread that created it.
pub struct MainQueue {
    channel: Channel<CriticalSectionRawMutex, BridgeCommand, QUEUE_DEPTH>,
    main_thread: ThreadId,
}

impl MainQueue {
    /// Create a queue whose main context is the calling thread.
    pub fn new() -> Self {
        Self::bound_to(thread::current().id())
    }

    pub fn bound_to(main_thread: ThreadId) -> Self {
        Self {
            channel: Channel::new(),
            main_thread,
        }
    }

    pub fn is_main_context(&self) -> bool {
        thread::current().id() == self.main_thread
    }

    /// Enqueue a command.
    ///
    /// On a full queue the main context gets [`BridgeError::QueueFull`]
    /// (waiting would deadlock its own drain); any other thread blocks
    /// until the main context frees a slot.
    pub fn post(&self, cmd: BridgeCommand) -> Result<()> {
        match self.channel.try_send(cmd) {
            Ok(()) => Ok(()),
            Err(TrySendError::Full(cmd)) => {
                if self.is_main_context() {
                    warn!("main queue full, rejecting {:?}", cmd);
                    return Err(BridgeError::QueueFull);
                }
                futures_lite::future::block_on(self.channel.send(cmd));
                Ok(())
            }
        }
    }

    /// Run `f` on the main context: inline when already there, queued
    /// otherwise.
    pub fn run_on_main(&self, f: impl FnOnce() + Send + 'static) {
        if self.is_main_context() {
            f();
        } else if let Err(e) = self.post(BridgeCommand::Run(Box::new(f))) {
            error!("failed to marshal work onto main context: {}", e);
        }
    }

    /// Next pending command, if any.
    pub fn try_next(&self) -> Option<BridgeCommand> {
        self.channel.try_receive().ok()
    }

    /// Wait for the next command.
    pub async fn next(&self) -> BridgeCommand {
        self.channel.receive().await
    }

    pub fn len(&self) -> usize {
        self.channel.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channel.is_empty()
    }
}

impl Default for MainQueue {
    fn default() -> Self {
        Self::new()
    }
}
