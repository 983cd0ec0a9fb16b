//! Fixed settings for a dump run

use std::path::{Path, PathBuf};

/// Workbook file looked up next to the install root
pub const WORKBOOK_FILE_NAME: &str = "page_elements_with_defaults.xlsx";

/// Sub-directory searched before the install root itself
pub const WORKBOOK_SUBDIR: &str = "Maanshan3DMap";

/// Rows captured per sheet, header row included
pub const PREVIEW_ROW_LIMIT: usize = 21;

/// Dump configuration
///
/// There is no file-based loader; `DumpConfig::default()` is what the
/// `sheetdump` binary runs with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpConfig {
    pub file_name: String,
    pub subdir: String,
    pub row_limit: usize,
}

impl DumpConfig {
    /// Candidate paths under `root`, in lookup order
    pub fn candidates(&self, root: &Path) -> [PathBuf; 2] {
        [
            root.join(&self.subdir).join(&self.file_name),
            root.join(&self.file_name),
        ]
    }
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self {
            file_name: WORKBOOK_FILE_NAME.to_string(),
            subdir: WORKBOOK_SUBDIR.to_string(),
            row_limit: PREVIEW_ROW_LIMIT,
        }
    }
}
