//! Workbook path resolution

use crate::config::DumpConfig;
use crate::error::{DumpError, Result};
use log::debug;
use std::path::{Path, PathBuf};

/// Install root: the parent of the directory holding the running executable
pub fn repo_root() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    let exe = if exe.is_absolute() {
        exe
    } else {
        std::env::current_dir()?.join(exe)
    };
    root_of(&exe).ok_or_else(|| {
        DumpError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("{} has no parent directory", exe.display()),
        ))
    })
}

fn root_of(exe: &Path) -> Option<PathBuf> {
    exe.parent()?.parent().map(Path::to_path_buf)
}

/// Pick the first candidate under `root` that is an existing file
pub fn resolve_workbook(root: &Path, config: &DumpConfig) -> Result<PathBuf> {
    for candidate in config.candidates(root) {
        if candidate.is_file() {
            debug!("using workbook at {}", candidate.display());
            return Ok(candidate);
        }
        debug!("no workbook at {}", candidate.display());
    }

    Err(DumpError::FileNotFound {
        file_name: config.file_name.clone(),
    })
}
