use crate::error::CoreError;
use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Resolve `<crate_dir>/config`, whether the process runs from the workspace
/// root or from inside the crate directory.
pub fn configuration_directory(base_path: &Path, crate_dir: &str) -> PathBuf {
    if base_path.ends_with(crate_dir) {
        base_path.join("config")
    } else {
        base_path.join(crate_dir).join("config")
    }
}

/// Load `base.yaml` for `crate_dir`, overlaid with `APP_` environment variables.
///
/// Nested keys use a double underscore: `APP_DATABASE__URL` sets `database.url`.
pub fn load_layered<T: DeserializeOwned>(crate_dir: &str) -> Result<T, CoreError> {
    dotenvy::dotenv().ok();

    let base_path = std::env::current_dir()?;
    let configuration_directory = configuration_directory(&base_path, crate_dir);

    load_from_directory(&configuration_directory)
}

/// Load `base.yaml` from an explicit directory, overlaid with `APP_` environment variables.
pub fn load_from_directory<T: DeserializeOwned>(directory: &Path) -> Result<T, CoreError> {
    if !directory.is_dir() {
        return Err(CoreError::ConfigDirectory(directory.display().to_string()));
    }

    let settings = Config::builder()
        .add_source(File::from(directory.join("base.yaml")).required(true))
        .add_source(
            Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    Ok(settings.try_deserialize::<T>()?)
}
