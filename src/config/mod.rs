use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::editor::MeasurementState;
use crate::geo::{AngleUnit, DistanceUnit};

/// System set for config loading (other plugins can run after this)
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigLoaded;

/// Application configuration persisted to disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfigData {
    #[serde(default)]
    pub distance_unit: DistanceUnit,

    #[serde(default)]
    pub angle_unit: AngleUnit,

    #[serde(default)]
    pub hover_angle_unit: AngleUnit,

    #[serde(default = "default_grid_visible")]
    pub grid_visible: bool,
}

fn default_grid_visible() -> bool {
    true
}

impl Default for AppConfigData {
    fn default() -> Self {
        Self {
            distance_unit: DistanceUnit::default(),
            angle_unit: AngleUnit::default(),
            hover_angle_unit: AngleUnit::default(),
            grid_visible: true,
        }
    }
}

/// Runtime configuration resource
#[derive(Resource)]
pub struct AppConfig {
    /// The persisted configuration data
    pub data: AppConfigData,
    /// Path to the config file
    pub config_path: PathBuf,
    /// Whether config needs to be saved (dirty flag)
    pub dirty: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data: AppConfigData::default(),
            config_path: crate::paths::config_file(),
            dirty: false,
        }
    }
}

/// Resource to notify user when config was reset to defaults
#[derive(Resource, Default)]
pub struct ConfigResetNotification {
    /// Whether to show the notification dialog
    pub show: bool,
    /// The reason for the reset (parse error, read error, etc.)
    pub reason: Option<String>,
}

/// Message to trigger config save
#[derive(Message)]
pub struct SaveConfigRequest;

/// Result of loading config from disk
struct LoadConfigResult {
    config: AppConfig,
    /// Error message if config was reset to defaults due to an error
    reset_reason: Option<String>,
}

/// Load configuration from disk
fn load_config() -> LoadConfigResult {
    let config_path = crate::paths::config_file();

    let (data, reset_reason) = if config_path.exists() {
        match std::fs::read_to_string(&config_path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(data) => {
                    info!("Loaded config from {:?}", config_path);
                    (data, None)
                }
                Err(e) => {
                    warn!("Failed to parse config file: {}", e);
                    (
                        AppConfigData::default(),
                        Some(format!("Configuration file was corrupted: {}", e)),
                    )
                }
            },
            Err(e) => {
                warn!("Failed to read config file: {}", e);
                (
                    AppConfigData::default(),
                    Some(format!("Could not read configuration file: {}", e)),
                )
            }
        }
    } else {
        info!("No config file found, using defaults");
        (AppConfigData::default(), None)
    };

    LoadConfigResult {
        config: AppConfig {
            data,
            config_path,
            dirty: false,
        },
        reset_reason,
    }
}

/// Save configuration to disk
fn save_config(config: &AppConfig) {
    match serde_json::to_string_pretty(&config.data) {
        Ok(json) => {
            if let Err(e) = std::fs::write(&config.config_path, json) {
                error!("Failed to save config: {}", e);
            } else {
                info!("Config saved to {:?}", config.config_path);
            }
        }
        Err(e) => {
            error!("Failed to serialize config: {}", e);
        }
    }
}

/// Startup system to load config from disk into the existing resource
fn load_config_system(
    mut config: ResMut<AppConfig>,
    mut reset_notification: ResMut<ConfigResetNotification>,
) {
    let result = load_config();
    config.data = result.config.data;
    config.config_path = result.config.config_path;
    config.dirty = result.config.dirty;

    if let Some(reason) = result.reset_reason {
        reset_notification.show = true;
        reset_notification.reason = Some(reason);
    }
}

/// Seed the measurement panel's unit selections from the loaded config
fn apply_config_units(config: Res<AppConfig>, mut measurement: ResMut<MeasurementState>) {
    measurement.distance_unit = config.data.distance_unit;
    measurement.angle_unit = config.data.angle_unit;
    measurement.hover_angle_unit = config.data.hover_angle_unit;
}

/// System to save config when requested
fn save_config_system(mut events: MessageReader<SaveConfigRequest>, mut config: ResMut<AppConfig>) {
    for _ in events.read() {
        if config.dirty {
            save_config(&config);
            config.dirty = false;
        }
    }
}

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AppConfig>()
            .init_resource::<ConfigResetNotification>()
            .add_message::<SaveConfigRequest>()
            .add_systems(
                Startup,
                (load_config_system, apply_config_units)
                    .chain()
                    .in_set(ConfigLoaded),
            )
            .add_systems(
                Update,
                save_config_system.run_if(on_message::<SaveConfigRequest>),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_data_default() {
        let data = AppConfigData::default();
        assert_eq!(data.distance_unit, DistanceUnit::Kilometers);
        assert_eq!(data.angle_unit, AngleUnit::Degrees);
        assert!(data.grid_visible);
    }

    #[test]
    fn test_app_config_data_serialization() {
        let data = AppConfigData {
            distance_unit: DistanceUnit::Miles,
            angle_unit: AngleUnit::Radians,
            hover_angle_unit: AngleUnit::Degrees,
            grid_visible: false,
        };

        let json = serde_json::to_string(&data).unwrap();
        let parsed: AppConfigData = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.distance_unit, data.distance_unit);
        assert_eq!(parsed.angle_unit, data.angle_unit);
        assert!(!parsed.grid_visible);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let parsed: AppConfigData = serde_json::from_str(r#"{"distance_unit":"Miles"}"#).unwrap();
        assert_eq!(parsed.distance_unit, DistanceUnit::Miles);
        assert_eq!(parsed.angle_unit, AngleUnit::Degrees);
        assert!(parsed.grid_visible);
    }
}
