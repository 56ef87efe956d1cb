use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::scales::bmi::ClassIiiBound;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
pub const CURRENT_VERSION: u32 = 1;

/// Scoring policies the ward can choose between.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    #[serde(default)]
    pub bmi: BmiConfig,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            bmi: BmiConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BmiConfig {
    #[serde(default)]
    pub class_iii_bound: ClassIiiBound,
}

/// Load the config at `path`. A missing file yields the defaults.
pub fn load_config(path: &Path) -> Result<ScoringConfig, ConfigError> {
    if !path.exists() {
        tracing::info!(path = %path.display(), "no scoring config, using defaults");
        return Ok(ScoringConfig::default());
    }
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&contents)?;
    tracing::info!(
        path = %path.display(),
        class_iii_bound = ?config.bmi.class_iii_bound,
        "scoring config loaded"
    );
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<ScoringConfig, ConfigError> {
    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(contents)?;
    let raw_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0);
    let on_disk_version =
        u32::try_from(raw_version).map_err(|_| ConfigError::UnsupportedVersion {
            found: raw_version,
            supported: CURRENT_VERSION,
        })?;

    let migrated = migrate(json, on_disk_version)?;
    Ok(serde_json::from_value(migrated)?)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
fn migrate(mut json: serde_json::Value, from_version: u32) -> Result<serde_json::Value, ConfigError> {
    if from_version > CURRENT_VERSION {
        return Err(ConfigError::UnsupportedVersion {
            found: u64::from(from_version),
            supported: CURRENT_VERSION,
        });
    }

    // v0 → v1: flat `bmi_class_iii_open_ended` flag moves under `bmi`.
    // A nested `bmi` already present is kept unless the flat flag is set.
    if from_version < 1 {
        let obj = json.as_object_mut().ok_or(ConfigError::NotAnObject)?;
        match obj.remove("bmi_class_iii_open_ended").and_then(|v| v.as_bool()) {
            Some(open_ended) => {
                let bound = if open_ended {
                    ClassIiiBound::OpenEnded
                } else {
                    ClassIiiBound::CappedAtForty
                };
                obj.insert(
                    "bmi".to_string(),
                    serde_json::json!({ "class_iii_bound": bound }),
                );
            }
            None => {
                obj.entry("bmi")
                    .or_insert(serde_json::json!({ "class_iii_bound": ClassIiiBound::default() }));
            }
        }
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated scoring config v0 → v1 (nested bmi settings)");
    }

    Ok(json)
}

pub fn save_config(path: &Path, config: &ScoringConfig) -> Result<(), ConfigError> {
    let write_err = |source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(write_err)?;
    }

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;
    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes()).map_err(write_err)?;
    std::fs::rename(&tmp_path, path).map_err(write_err)?;

    tracing::info!(path = %path.display(), "scoring config saved");
    Ok(())
}
