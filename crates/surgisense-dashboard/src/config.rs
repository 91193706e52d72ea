use std::path::{Path, PathBuf};

use eyre::{WrapErr, eyre};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use surgisense_client::DEFAULT_API_BASE;
use surgisense_core::models::recovery::RecoveryProfile;
use tracing::info;

const FILE_NAME: &str = "config.json";

/// Environment variable that overrides the configured backend address.
pub const API_BASE_ENV: &str = "SURGISENSE_API_BASE";

/// One upgrade step on the raw JSON object. Step `n` lifts version `n` to `n + 1`.
type Migration = fn(&mut Map<String, Value>);

/// Upgrade steps in order. The file format version is `MIGRATIONS.len()`.
const MIGRATIONS: &[Migration] = &[add_recovery_profile];

const fn current_version() -> u32 {
    MIGRATIONS.len() as u32
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// 0 or absent for files written before versioning.
    #[serde(default)]
    pub config_version: u32,
    pub api_base: String,
    pub created_at: jiff::Timestamp,
    /// Patient header. Since v1.
    #[serde(default)]
    pub recovery: Option<RecoveryProfile>,
}

impl DashboardConfig {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            config_version: current_version(),
            api_base: api_base.into(),
            created_at: jiff::Timestamp::now(),
            recovery: None,
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

fn config_dir() -> eyre::Result<PathBuf> {
    dirs::config_dir()
        .map(|base| base.join("com.surgisense.dashboard"))
        .ok_or_else(|| eyre!("could not locate the user config directory"))
}

pub fn config_path() -> eyre::Result<PathBuf> {
    config_dir().map(|dir| dir.join(FILE_NAME))
}

pub fn has_config() -> bool {
    config_path().is_ok_and(|path| path.is_file())
}

pub fn load_config() -> eyre::Result<DashboardConfig> {
    load_config_from(&config_path()?)
}

/// Load the saved config, or defaults when nothing has been saved yet.
pub fn load_or_default() -> eyre::Result<DashboardConfig> {
    if has_config() {
        load_config()
    } else {
        Ok(DashboardConfig::default())
    }
}

pub fn load_config_from(path: &Path) -> eyre::Result<DashboardConfig> {
    let text = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("reading {}", path.display()))?;
    let raw: Value = serde_json::from_str(&text)
        .wrap_err_with(|| format!("{} is not valid JSON", path.display()))?;

    let upgraded = upgrade(raw)?;
    serde_json::from_value(upgraded).wrap_err_with(|| format!("decoding {}", path.display()))
}

/// Bring a raw config object up to [`current_version`], one step at a time.
fn upgrade(mut raw: Value) -> eyre::Result<Value> {
    let object = raw
        .as_object_mut()
        .ok_or_else(|| eyre!("config file does not hold a JSON object"))?;

    let found = object
        .get("config_version")
        .and_then(Value::as_u64)
        .unwrap_or(0);
    let latest = current_version();
    let found = u32::try_from(found)
        .ok()
        .filter(|v| *v <= latest)
        .ok_or_else(|| {
            eyre!("config_version {found} was written by a newer SurgiSense (this build reads up to {latest})")
        })?;

    for (step, migration) in MIGRATIONS.iter().enumerate().skip(found as usize) {
        migration(object);
        info!(from = step, to = step + 1, "upgraded config");
    }
    object.insert("config_version".to_string(), Value::from(latest));
    Ok(raw)
}

/// v0 to v1: the patient header did not exist yet.
fn add_recovery_profile(object: &mut Map<String, Value>) {
    object.entry("recovery").or_insert(Value::Null);
}

pub fn save_config(config: &DashboardConfig) -> eyre::Result<PathBuf> {
    save_config_to(&config_dir()?, config)
}

/// Write `config.json` into `dir` and return its path.
///
/// The file is written beside the target and renamed over it, so readers
/// never observe a half-written config.
pub fn save_config_to(dir: &Path, config: &DashboardConfig) -> eyre::Result<PathBuf> {
    std::fs::create_dir_all(dir).wrap_err_with(|| format!("creating {}", dir.display()))?;

    let body = serde_json::to_vec_pretty(&DashboardConfig {
        config_version: current_version(),
        ..config.clone()
    })?;

    let target = dir.join(FILE_NAME);
    let staging = target.with_extension("json.tmp");
    std::fs::write(&staging, body)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&staging, std::fs::Permissions::from_mode(0o600))?;
    }
    std::fs::rename(&staging, &target)?;

    info!(path = %target.display(), "saved config");
    Ok(target)
}

pub fn delete_config() -> eyre::Result<()> {
    let path = config_path()?;
    match std::fs::remove_file(&path) {
        Ok(()) => {
            info!(path = %path.display(), "removed config");
            Ok(())
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e).wrap_err_with(|| format!("removing {}", path.display())),
    }
}

/// Backend address for this run, reading [`API_BASE_ENV`] from the process
/// environment.
pub fn resolve_api_base(flag: Option<&str>, config: &DashboardConfig) -> String {
    resolve_api_base_with(flag, std::env::var(API_BASE_ENV).ok().as_deref(), config)
}

/// Flag, then environment, then config file, then the built-in default.
/// Blank values are skipped.
pub fn resolve_api_base_with(
    flag: Option<&str>,
    env: Option<&str>,
    config: &DashboardConfig,
) -> String {
    [flag, env, Some(config.api_base.as_str())]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|value| !value.is_empty())
        .unwrap_or(DEFAULT_API_BASE)
        .to_string()
}
