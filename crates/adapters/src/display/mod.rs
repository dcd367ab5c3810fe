#[cfg(windows)]
mod gdi;

use std::sync::{Arc, Mutex};

use monitor_gamma_application::{ApplicationError, GammaRampDevice};
use monitor_gamma_domain::RampTable;
use tracing::debug;

#[cfg(windows)]
pub use gdi::GdiGammaRamp;

pub const DEFAULT_DISPLAY_DEVICE: &str = r"\\.\DISPLAY1";

/// Picks the gamma-ramp backend for this platform.
pub fn system_display(device_name: &str) -> Arc<dyn GammaRampDevice> {
    #[cfg(windows)]
    {
        Arc::new(GdiGammaRamp::new(device_name))
    }

    #[cfg(not(windows))]
    {
        tracing::info!(
            device = device_name,
            "no device gamma ramp API on this platform, ramps will not reach the display"
        );
        Arc::new(DetachedDisplay::default())
    }
}

/// Keeps the last ramp in memory instead of sending it to a driver.
#[derive(Debug, Default)]
pub struct DetachedDisplay {
    last: Mutex<Option<RampTable>>,
}

impl DetachedDisplay {
    pub fn last_ramp(&self) -> Option<RampTable> {
        self.last
            .lock()
            .map(|last| last.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }
}

impl GammaRampDevice for DetachedDisplay {
    fn set_ramp(&self, ramp: &RampTable) -> Result<(), ApplicationError> {
        let red = ramp.red();
        debug!(
            first = red[0],
            mid = red[128],
            last = red[255],
            "detached display received ramp"
        );
        let mut last = self
            .last
            .lock()
            .map_err(|_| ApplicationError::Display("detached display lock poisoned".to_string()))?;
        *last = Some(ramp.clone());
        Ok(())
    }
}
