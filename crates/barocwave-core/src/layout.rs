//! Output directory layout: `<root>/<resolution>/<case>/<flux type>[_FCT]/`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::combination::Combination;
use crate::error::{GenError, Result};

pub const INIT_FILE_NAME: &str = "init.conf";
pub const RUN_FILE_NAME: &str = "run.conf";

/// Directory a combination is written to, relative to `root`.
pub fn combination_dir(root: &Path, combo: &Combination) -> PathBuf {
    root.join(combo.resolution.tag)
        .join(combo.case.tag())
        .join(format!("{}{}", combo.scheme.flux_type(), combo.fct.dir_suffix()))
}

/// Create `dir` and any missing parents. Returns whether anything was created;
/// an existing directory is not an error.
pub fn ensure_dir(dir: &Path) -> Result<bool> {
    if dir.is_dir() {
        return Ok(false);
    }
    tracing::debug!(dir = %dir.display(), "creating directory");
    fs::create_dir_all(dir).map_err(|source| GenError::CreateDir { path: dir.to_path_buf(), source })?;
    Ok(true)
}
