use std::time::Duration;

use eframe::egui;
use monitor_gamma_adapters::present_hotkey;
use monitor_gamma_application::{
    ApplicationService, ApplyParamsCommand, ApplyPresetCommand, DeletePresetCommand,
    DispatchHotkeysCommand, ListPresetsCommand, ResetDisplayCommand, SavePresetCommand,
    SetResetHotkeyCommand,
};
use monitor_gamma_domain::{GammaParams, BRIGHTNESS_RANGE, CONTRAST_RANGE, GAMMA_RANGE};
use tracing::warn;

use crate::capture::{ensure_registrable, first_pressed_hotkey, CaptureTarget};
use crate::config::AppConfig;

const HOTKEY_POLL_INTERVAL: Duration = Duration::from_millis(50);

struct GammaApp {
    service: ApplicationService,
    params: GammaParams,
    preset_name: String,
    preset_hotkey: String,
    selected: Option<String>,
    capture: Option<CaptureTarget>,
    status: String,
}

impl GammaApp {
    fn new(service: ApplicationService, config: &AppConfig) -> Self {
        Self {
            params: service.current_params(),
            service,
            preset_name: String::new(),
            preset_hotkey: config.default_preset_hotkey.clone(),
            selected: None,
            capture: None,
            status: String::new(),
        }
    }

    fn poll_hotkeys(&mut self) {
        if let Some(params) = self.service.dispatch_hotkeys(DispatchHotkeysCommand) {
            self.params = params;
        }
    }

    fn poll_capture(&mut self, ctx: &egui::Context) {
        let Some(target) = self.capture else {
            return;
        };
        let Some(hotkey) = ctx.input(|input| first_pressed_hotkey(&input.events)) else {
            return;
        };
        if let Err(reason) = ensure_registrable(&hotkey) {
            self.status = reason;
            return;
        }

        self.capture = None;
        match target {
            CaptureTarget::NewPreset => {
                self.preset_hotkey = hotkey.to_string();
                self.status = format!("preset key set to {hotkey}");
            }
            CaptureTarget::Reset => {
                let result = self.service.set_reset_hotkey(SetResetHotkeyCommand {
                    hotkey: hotkey.to_string(),
                });
                self.report(result.map(|()| format!("reset key set to {hotkey}")));
            }
        }
    }

    fn report(&mut self, result: Result<String, impl std::fmt::Display>) {
        self.status = match result {
            Ok(message) => message,
            Err(error) => {
                warn!(%error, "action failed");
                error.to_string()
            }
        };
    }

    fn adjustment_panel(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.strong("Live adjustment");
            let mut changed = false;
            changed |= ui
                .add(
                    egui::Slider::new(&mut self.params.brightness, BRIGHTNESS_RANGE)
                        .text("Brightness")
                        .fixed_decimals(2),
                )
                .changed();
            changed |= ui
                .add(
                    egui::Slider::new(&mut self.params.contrast, CONTRAST_RANGE)
                        .text("Contrast")
                        .fixed_decimals(2),
                )
                .changed();
            changed |= ui
                .add(
                    egui::Slider::new(&mut self.params.gamma, GAMMA_RANGE)
                        .text("Gamma")
                        .fixed_decimals(2),
                )
                .changed();
            if changed {
                self.params = self.service.apply_params(ApplyParamsCommand {
                    params: self.params,
                });
            }
        });
    }

    fn new_preset_panel(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.strong("New preset");
            ui.horizontal(|ui| {
                ui.label("Name:");
                ui.text_edit_singleline(&mut self.preset_name);
                if ui.button("Save preset").clicked() {
                    self.save_preset();
                }
            });
            ui.horizontal(|ui| {
                ui.label("Hotkey:");
                ui.monospace(&self.preset_hotkey);
                self.capture_button(ui, CaptureTarget::NewPreset);
            });
        });
    }

    fn save_preset(&mut self) {
        if self.preset_name.trim().is_empty() {
            return;
        }
        let result = self.service.save_preset(SavePresetCommand {
            name: self.preset_name.clone(),
            params: self.params,
            hotkey: self.preset_hotkey.clone(),
        });
        let saved = result.is_ok();
        self.report(result.map(|preset| format!("saved preset {}", preset.name)));
        if saved {
            self.preset_name.clear();
        }
    }

    fn preset_list_panel(&mut self, ui: &mut egui::Ui) {
        let presets = self.service.list_presets(ListPresetsCommand);
        ui.group(|ui| {
            ui.strong("Saved presets");
            egui::ScrollArea::vertical()
                .max_height(200.0)
                .show(ui, |ui| {
                    egui::Grid::new("presets").striped(true).show(ui, |ui| {
                        ui.label("Name");
                        ui.label("Hotkey");
                        ui.end_row();
                        for preset in &presets {
                            let selected = self.selected.as_deref() == Some(preset.name.as_str());
                            if ui.selectable_label(selected, &preset.name).clicked() {
                                self.selected = Some(preset.name.clone());
                            }
                            ui.monospace(present_hotkey(preset.hotkey.as_ref()));
                            ui.end_row();
                        }
                    });
                });
            ui.horizontal(|ui| {
                let has_selection = self.selected.is_some();
                if ui
                    .add_enabled(has_selection, egui::Button::new("Apply selected"))
                    .clicked()
                {
                    self.apply_selected();
                }
                if ui
                    .add_enabled(has_selection, egui::Button::new("Delete selected"))
                    .clicked()
                {
                    self.delete_selected();
                }
            });
        });
    }

    fn apply_selected(&mut self) {
        let Some(name) = self.selected.clone() else {
            return;
        };
        let result = self.service.apply_preset(ApplyPresetCommand { name: name.clone() });
        if let Ok(params) = &result {
            self.params = *params;
        }
        self.report(result.map(|_| format!("applied preset {name}")));
    }

    fn delete_selected(&mut self) {
        let Some(name) = self.selected.take() else {
            return;
        };
        let result = self.service.delete_preset(DeletePresetCommand { name });
        self.report(result.map(|preset| format!("deleted preset {}", preset.name)));
    }

    fn recovery_panel(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.strong("Recovery");
            ui.horizontal(|ui| {
                ui.label("Reset key:");
                ui.monospace(present_hotkey(self.service.reset_hotkey()));
                self.capture_button(ui, CaptureTarget::Reset);
                if ui.button("Reset now").clicked() {
                    self.params = self.service.reset_display(ResetDisplayCommand);
                    self.status = "display restored".to_string();
                }
            });
        });
    }

    fn capture_button(&mut self, ui: &mut egui::Ui, target: CaptureTarget) {
        let listening = self.capture == Some(target);
        let label = if listening { "Press a key…" } else { "Assign key" };
        if ui
            .add_enabled(self.capture.is_none(), egui::Button::new(label))
            .clicked()
        {
            self.capture = Some(target);
        }
    }
}

impl eframe::App for GammaApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_hotkeys();
        self.poll_capture(ctx);

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(&self.status);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.adjustment_panel(ui);
            ui.add_space(6.0);
            self.new_preset_panel(ui);
            ui.add_space(6.0);
            self.preset_list_panel(ui);
            ui.add_space(6.0);
            self.recovery_panel(ui);
        });

        ctx.request_repaint_after(HOTKEY_POLL_INTERVAL);
    }
}

pub fn launch_window(service: ApplicationService, config: &AppConfig) -> Result<(), String> {
    let mut viewport = egui::ViewportBuilder::default()
        .with_title("Monitor Gamma")
        .with_inner_size(config.window_size);
    if config.always_on_top {
        viewport = viewport.with_window_level(egui::WindowLevel::AlwaysOnTop);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    let app = GammaApp::new(service, config);
    eframe::run_native(
        "monitor-gamma",
        options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )
    .map_err(|error| format!("failed to start UI: {error}"))
}
