//! JSON output

use crate::error::Result;
use crate::preview::DumpResult;
use std::io::Write;

/// Pretty-print with two-space indentation; non-ASCII text stays literal
pub fn to_pretty_json(result: &DumpResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Write the document followed by a newline
pub fn write_pretty<W: Write>(result: &DumpResult, mut out: W) -> Result<()> {
    let json = to_pretty_json(result)?;
    writeln!(out, "{json}")?;
    out.flush()?;
    Ok(())
}
