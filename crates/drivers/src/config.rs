use std::path::PathBuf;

use monitor_gamma_adapters::DEFAULT_DISPLAY_DEVICE;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub config_path: PathBuf,
    pub display_device: String,
    pub default_preset_hotkey: String,
    pub always_on_top: bool,
    pub window_size: [f32; 2],
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from("gamma_config.json"),
            display_device: DEFAULT_DISPLAY_DEVICE.to_string(),
            default_preset_hotkey: "f1".to_string(),
            always_on_top: true,
            window_size: [480.0, 650.0],
        }
    }
}

impl AppConfig {
    pub fn with_overrides(mut self, config_path: Option<PathBuf>, display: Option<String>) -> Self {
        if let Some(path) = config_path {
            self.config_path = path;
        }
        if let Some(device) = display {
            self.display_device = device;
        }
        self
    }
}
