//! Explicit single-instance registry.
//!
//! The bridge is an ordinary owned value. Hosts that must guarantee one
//! live bridge per process claim the slot through [`InstanceClaim::acquire`]
//! (done by [`TixngoBridge::exclusive`](crate::app::service::TixngoBridge::exclusive));
//! the slot frees itself when the claim is dropped.

use core::sync::atomic::{AtomicBool, Ordering};

use log::info;

use crate::error::{BridgeError, Result};

static CLAIMED: AtomicBool = AtomicBool::new(false);

/// Proof that the caller owns the process-wide bridge slot.
#[derive(Debug)]
pub struct InstanceClaim {
    _private: (),
}

impl InstanceClaim {
    pub fn acquire() -> Result<Self> {
        CLAIMED
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| BridgeError::InstanceExists)?;
        info!("bridge instance slot claimed");
        Ok(Self { _private: () })
    }

    pub fn is_claimed() -> bool {
        CLAIMED.load(Ordering::Acquire)
    }
}

impl Drop for InstanceClaim {
    fn drop(&mut self) {
        CLAIMED.store(false, Ordering::Release);
        info!("bridge instance slot released");
    }
}
