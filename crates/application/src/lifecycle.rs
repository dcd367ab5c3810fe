use std::sync::Arc;

use monitor_gamma_domain::RampTable;
use tracing::{info, warn};

use crate::GammaRampDevice;

/// Pushes the identity ramp to `device`, logging instead of failing.
pub fn restore_neutral(device: &dyn GammaRampDevice) {
    match device.set_ramp(&RampTable::identity()) {
        Ok(()) => info!("display restored to neutral gamma"),
        Err(error) => warn!(%error, "failed to restore neutral gamma"),
    }
}

/// Restores the neutral ramp when dropped, including during unwinding.
pub struct NeutralRestoreGuard {
    device: Arc<dyn GammaRampDevice>,
    armed: bool,
}

impl NeutralRestoreGuard {
    pub fn new(device: Arc<dyn GammaRampDevice>) -> Self {
        Self {
            device,
            armed: true,
        }
    }

    /// Leaves the display as it is when the guard drops.
    pub fn disarm(&mut self) {
        self.armed = false;
    }
}

impl Drop for NeutralRestoreGuard {
    fn drop(&mut self) {
        if self.armed {
            restore_neutral(self.device.as_ref());
        }
    }
}
