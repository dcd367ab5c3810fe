use std::sync::Arc;

use monitor_gamma_application::{restore_neutral, GammaRampDevice};
use tracing::warn;

/// Restores neutral gamma when the process panics or receives Ctrl-C or a
/// termination signal.
pub fn install_restore_hooks(device: Arc<dyn GammaRampDevice>) {
    let panic_device = Arc::clone(&device);
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_neutral(panic_device.as_ref());
        previous(info);
    }));

    if let Err(error) = ctrlc::set_handler(move || {
        restore_neutral(device.as_ref());
        std::process::exit(130);
    }) {
        warn!(%error, "termination handler not installed");
    }
}
