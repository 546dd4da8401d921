//! Bridge lifecycle state.
//!
//! ```text
//!  Uninitialized ──initialize()──▶ Initializing ──channel open──▶ Ready
//!        ▲                              │
//!        └────── runtime start failed ──┘
//! ```
//!
//! Shared between the facade and every [`BridgeHandle`](super::handle::BridgeHandle)
//! through an atomic cell, so handles on other threads see the same state.

use core::sync::atomic::{AtomicU8, Ordering};

use crate::error::{BridgeError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BridgeState {
    Uninitialized = 0,
    Initializing = 1,
    Ready = 2,
}

impl BridgeState {
    fn from_u8(raw: u8) -> Self {
        match raw {
            0 => Self::Uninitialized,
            1 => Self::Initializing,
            2 => Self::Ready,
            _ => {
                debug_assert!(false, "invalid bridge state: {raw}");
                Self::Uninitialized
            }
        }
    }
}

/// Atomic holder for [`BridgeState`].
#[derive(Debug)]
pub struct StateCell(AtomicU8);

impl StateCell {
    pub const fn new() -> Self {
        Self(AtomicU8::new(BridgeState::Uninitialized as u8))
    }

    pub fn get(&self) -> BridgeState {
        BridgeState::from_u8(self.0.load(Ordering::Acquire))
    }

    /// Claim the one initialization this bridge gets.
    pub fn begin_initialize(&self) -> Result<()> {
        self.0
            .compare_exchange(
                BridgeState::Uninitialized as u8,
                BridgeState::Initializing as u8,
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .map(|_| ())
            .map_err(|_| BridgeError::AlreadyInitialized)
    }

    pub fn mark_ready(&self) {
        self.0.store(BridgeState::Ready as u8, Ordering::Release);
    }

    /// Back to `Uninitialized` after a failed start.
    pub fn reset(&self) {
        self.0.store(BridgeState::Uninitialized as u8, Ordering::Release);
    }

    pub fn require_ready(&self) -> Result<()> {
        match self.get() {
            BridgeState::Ready => Ok(()),
            other => Err(BridgeError::NotReady(other)),
        }
    }
}

impl Default for StateCell {
    fn default() -> Self {
        Self::new()
    }
}
