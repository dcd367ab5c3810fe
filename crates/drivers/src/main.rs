mod capture;
mod config;
mod logging;
mod recovery;
mod ui;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use config::AppConfig;
use monitor_gamma_adapters::{
    present_preset_row, present_ramp, present_reset_hotkey, system_display, DetachedHotkeys,
    GlobalHotkeyRegistrar, JsonPresetRepository,
};
use monitor_gamma_application::{
    restore_neutral, ApplicationService, BootstrapCommand, GammaRampDevice, HotkeyRegistrar,
    NeutralRestoreGuard, PresetRepository,
};
use monitor_gamma_domain::{compute_ramp, GammaParams, PresetStore};
use tracing::warn;

#[derive(Debug, Parser)]
#[command(
    name = "monitor-gamma",
    about = "Adjust display brightness, contrast and gamma with hotkey presets"
)]
#[command(version)]
struct Cli {
    /// Preset file to read and write
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Display device whose gamma ramp is adjusted
    #[arg(long, global = true)]
    display: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
enum Command {
    /// Open the adjuster window (default)
    Ui,
    /// Print stored presets and the reset hotkey
    List,
    /// Print the ramp computed for the given parameters
    Ramp {
        #[arg(long, default_value_t = 1.0)]
        brightness: f64,
        #[arg(long, default_value_t = 1.0)]
        contrast: f64,
        #[arg(long, default_value_t = 1.0)]
        gamma: f64,
    },
    /// Restore the neutral ramp and exit
    Reset,
}

#[derive(Debug, Clone)]
enum CommandError {
    Usage(String),
    Runtime(String),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);
    let config = AppConfig::default().with_overrides(cli.config.clone(), cli.display.clone());

    match run_command(cli.command.unwrap_or(Command::Ui), &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CommandError::Usage(msg)) => {
            eprintln!("{msg}");
            ExitCode::from(2)
        }
        Err(CommandError::Runtime(msg)) => {
            eprintln!("{msg}");
            ExitCode::from(1)
        }
    }
}

fn run_command(command: Command, config: &AppConfig) -> Result<(), CommandError> {
    match command {
        Command::Ui => run_ui(config),
        Command::List => {
            let store = load_store_or_default(config);
            for preset in store.presets() {
                println!("{}", present_preset_row(preset));
            }
            if store.is_empty() {
                println!("no presets saved");
            }
            println!("{}", present_reset_hotkey(store.reset_hotkey()));
            Ok(())
        }
        Command::Ramp {
            brightness,
            contrast,
            gamma,
        } => {
            let params = ramp_params(brightness, contrast, gamma)?;
            for line in present_ramp(&compute_ramp(params)) {
                println!("{line}");
            }
            Ok(())
        }
        Command::Reset => {
            let display = system_display(&config.display_device);
            restore_neutral(display.as_ref());
            Ok(())
        }
    }
}

fn run_ui(config: &AppConfig) -> Result<(), CommandError> {
    let display = system_display(&config.display_device);
    let _guard = NeutralRestoreGuard::new(Arc::clone(&display));
    recovery::install_restore_hooks(Arc::clone(&display));

    let mut service = build_application_service(config, display);
    service.bootstrap(BootstrapCommand);
    ui::launch_window(service, config).map_err(CommandError::Runtime)
}

fn build_application_service(
    config: &AppConfig,
    display: Arc<dyn GammaRampDevice>,
) -> ApplicationService {
    ApplicationService::new(
        Box::new(JsonPresetRepository::new(config.config_path.clone())),
        display,
        build_hotkey_registrar(),
    )
}

fn build_hotkey_registrar() -> Box<dyn HotkeyRegistrar> {
    match GlobalHotkeyRegistrar::new() {
        Ok(registrar) => Box::new(registrar),
        Err(error) => {
            warn!(%error, "global hotkeys unavailable");
            Box::new(DetachedHotkeys)
        }
    }
}

fn load_store_or_default(config: &AppConfig) -> PresetStore {
    JsonPresetRepository::new(config.config_path.clone())
        .load()
        .unwrap_or_else(|error| {
            warn!(%error, "preset file unreadable, showing an empty store");
            PresetStore::default()
        })
}

fn ramp_params(brightness: f64, contrast: f64, gamma: f64) -> Result<GammaParams, CommandError> {
    let params = GammaParams::new(brightness, contrast, gamma);
    params
        .validate()
        .map_err(|error| CommandError::Usage(error.to_string()))?;
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_opens_the_window() {
        let cli = Cli::try_parse_from(["monitor-gamma"]).expect("parse");
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn parse_ramp_with_params() {
        let cli = Cli::try_parse_from([
            "monitor-gamma",
            "ramp",
            "--brightness",
            "1.5",
            "--gamma",
            "2.2",
        ])
        .expect("parse");
        assert!(matches!(
            cli.command,
            Some(Command::Ramp { brightness, contrast, gamma })
                if brightness == 1.5 && contrast == 1.0 && gamma == 2.2
        ));
    }

    #[test]
    fn global_options_follow_subcommands() {
        let cli = Cli::try_parse_from(["monitor-gamma", "list", "--config", "other.json"])
            .expect("parse");
        assert_eq!(cli.config, Some(PathBuf::from("other.json")));
        assert!(matches!(cli.command, Some(Command::List)));
    }

    #[test]
    fn ramp_rejects_out_of_range_params() {
        assert!(matches!(
            ramp_params(1.0, 1.0, 0.0),
            Err(CommandError::Usage(_))
        ));
        assert!(ramp_params(2.0, 0.5, 3.0).is_ok());
    }

    #[test]
    fn unknown_subcommand_is_a_usage_error() {
        assert!(Cli::try_parse_from(["monitor-gamma", "explode"]).is_err());
    }
}
