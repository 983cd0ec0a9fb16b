//! sheetdump-core: bounded previews of Excel workbooks
//!
//! Opens a workbook read-only, streams the first rows of every sheet and
//! renders them as pretty-printed JSON.

pub mod capability;
pub mod config;
pub mod dumper;
pub mod error;
pub mod locate;
pub mod preview;
#[cfg(feature = "xlsx")]
pub mod reader;
pub mod render;

pub use config::DumpConfig;
pub use dumper::{dump, run, run_from};
pub use error::{DumpError, Result};
pub use preview::{DumpResult, PreviewBuilder, SheetPreview};
#[cfg(feature = "xlsx")]
pub use reader::WorkbookHandle;
