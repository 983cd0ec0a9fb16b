//! The dump pipeline
//!
//! Runs in a fixed order: reader capability, path resolution, open and
//! extract, then serialize. Nothing is written until the whole preview has
//! been built.

use crate::capability;
use crate::config::DumpConfig;
use crate::error::Result;
use crate::locate;
use crate::preview::DumpResult;
use crate::render;
use std::io::Write;
use std::path::Path;

/// Dump the workbook found relative to the running executable
pub fn run<W: Write>(config: &DumpConfig, out: W) -> Result<()> {
    capability::check()?;
    let root = locate::repo_root()?;
    let result = resolve_and_extract(&root, config)?;
    render::write_pretty(&result, out)
}

/// Dump the workbook found under `root`
pub fn run_from<W: Write>(root: &Path, config: &DumpConfig, out: W) -> Result<()> {
    let result = dump(root, config)?;
    render::write_pretty(&result, out)
}

/// Build the preview without writing it
pub fn dump(root: &Path, config: &DumpConfig) -> Result<DumpResult> {
    capability::check()?;
    resolve_and_extract(root, config)
}

fn resolve_and_extract(root: &Path, config: &DumpConfig) -> Result<DumpResult> {
    let path = locate::resolve_workbook(root, config)?;
    extract(&path, config)
}

#[cfg(feature = "xlsx")]
fn extract(path: &Path, config: &DumpConfig) -> Result<DumpResult> {
    let mut handle = crate::reader::WorkbookHandle::open(path)?;
    handle.preview(config.row_limit)
}

#[cfg(not(feature = "xlsx"))]
fn extract(_path: &Path, _config: &DumpConfig) -> Result<DumpResult> {
    Err(crate::error::DumpError::DependencyMissing)
}
