use std::ffi::OsStr;
use std::os::windows::ffi::OsStrExt;
use std::ptr;

use monitor_gamma_application::{ApplicationError, GammaRampDevice};
use monitor_gamma_domain::RampTable;
use tracing::debug;
use windows_sys::Win32::Graphics::Gdi::{CreateDCW, DeleteDC};
use windows_sys::Win32::UI::ColorSystem::SetDeviceGammaRamp;

/// Device gamma ramp through GDI for one named display.
#[derive(Debug, Clone)]
pub struct GdiGammaRamp {
    device_name: String,
    device_name_wide: Vec<u16>,
}

impl GdiGammaRamp {
    pub fn new(device_name: &str) -> Self {
        Self {
            device_name: device_name.to_string(),
            device_name_wide: to_wide(device_name),
        }
    }
}

impl GammaRampDevice for GdiGammaRamp {
    fn set_ramp(&self, ramp: &RampTable) -> Result<(), ApplicationError> {
        let driver = to_wide("DISPLAY");
        // SAFETY: both strings are NUL-terminated UTF-16 buffers that outlive the call.
        let hdc = unsafe {
            CreateDCW(
                driver.as_ptr(),
                self.device_name_wide.as_ptr(),
                ptr::null(),
                ptr::null(),
            )
        };
        if hdc.is_null() {
            debug!(device = %self.device_name, "no device context, skipping gamma ramp");
            return Ok(());
        }

        // SAFETY: `hdc` is a live DC and the table is 3×256 contiguous u16 words.
        let accepted = unsafe { SetDeviceGammaRamp(hdc, ramp.as_words().as_ptr().cast()) };
        // SAFETY: `hdc` came from CreateDCW above and is released exactly once.
        unsafe { DeleteDC(hdc) };

        if accepted == 0 {
            return Err(ApplicationError::Display(format!(
                "driver rejected gamma ramp for {}",
                self.device_name
            )));
        }
        Ok(())
    }
}

fn to_wide(text: &str) -> Vec<u16> {
    OsStr::new(text)
        .encode_wide()
        .chain(std::iter::once(0))
        .collect()
}
