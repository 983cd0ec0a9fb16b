//! Compile-time check for the spreadsheet reader

use crate::error::{DumpError, Result};

/// Whether this build can read `.xlsx` workbooks
pub const fn xlsx_available() -> bool {
    cfg!(feature = "xlsx")
}

/// Fail with [`DumpError::DependencyMissing`] when built without `xlsx`
pub fn check() -> Result<()> {
    if xlsx_available() {
        Ok(())
    } else {
        Err(DumpError::DependencyMissing)
    }
}
