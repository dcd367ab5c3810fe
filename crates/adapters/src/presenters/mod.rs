use monitor_gamma_domain::{GammaParams, Hotkey, Preset, RampTable, RAMP_SIZE};

pub fn present_params(params: &GammaParams) -> String {
    format!(
        "brightness={:.2} contrast={:.2} gamma={:.2}",
        params.brightness, params.contrast, params.gamma
    )
}

pub fn present_preset_row(preset: &Preset) -> String {
    format!(
        "{}\t{}\t{}",
        preset.name,
        present_hotkey(preset.hotkey.as_ref()),
        present_params(&preset.params)
    )
}

pub fn present_reset_hotkey(hotkey: Option<&Hotkey>) -> String {
    format!("reset hotkey: {}", present_hotkey(hotkey))
}

pub fn present_hotkey(hotkey: Option<&Hotkey>) -> String {
    hotkey
        .map(ToString::to_string)
        .unwrap_or_else(|| "-".to_string())
}

pub fn present_ramp(ramp: &RampTable) -> Vec<String> {
    (0..RAMP_SIZE)
        .map(|index| format!("{index}\t{}", ramp.red()[index]))
        .collect()
}
