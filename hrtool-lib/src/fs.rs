use std::{fs::create_dir_all, path::PathBuf};

use xdg::BaseDirectories;

use crate::{Error, Result};

/// Returns the path to the HR Tool configuration directory. If it doesn't exist when this
/// function is called, it will be created.
pub fn config_dir() -> Result<PathBuf> {
    let path = xdg_prefix().get_config_home().ok_or(Error::NoHome)?;

    create_dir_all(&path)?;

    Ok(path)
}

/// Returns the default location of the horse records. Nothing is created until the first save.
pub fn data_home() -> Option<PathBuf> {
    xdg_prefix().get_data_home()
}

fn xdg_prefix() -> BaseDirectories {
    xdg::BaseDirectories::with_prefix("hrtool")
}
