//! Error types for the dumper

use thiserror::Error;

/// Everything that can stop a dump before output is written
#[derive(Debug, Error)]
pub enum DumpError {
    /// The binary was built without the spreadsheet reader
    #[error("rebuild sheetdump with the \"xlsx\" feature: cargo install sheetdump --features xlsx")]
    DependencyMissing,

    /// None of the candidate locations holds the workbook
    #[error("File not found: {file_name}")]
    FileNotFound { file_name: String },

    /// The file exists but could not be read as a workbook
    #[error("failed to load workbook: {0}")]
    Load(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize preview: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl DumpError {
    /// Failures reported as a bare stderr line with exit status 1
    pub fn is_reported(&self) -> bool {
        matches!(
            self,
            DumpError::DependencyMissing | DumpError::FileNotFound { .. }
        )
    }
}

#[cfg(feature = "xlsx")]
impl From<calamine::XlsxError> for DumpError {
    fn from(err: calamine::XlsxError) -> Self {
        DumpError::Load(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, DumpError>;
