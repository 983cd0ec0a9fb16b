//! Streaming workbook reader using calamine
//!
//! Sheets are read through `Xlsx::worksheet_cells_reader`, which parses the
//! worksheet XML lazily. Reading a sheet stops at the first cell past the
//! row limit, so large sheets are never fully scanned.

use crate::error::Result;
use crate::preview::{DumpResult, PreviewBuilder, SheetPreview};
use calamine::{DataRef, ExcelDateTime, Reader, Xlsx, open_workbook};
use chrono::{NaiveDateTime, Timelike};
use log::{debug, trace};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

const MICROS_PER_SECOND: i64 = 1_000_000;
const SECONDS_PER_DAY: i64 = 86_400;

/// Largest float that still converts to an integer without loss (2^53)
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

/// An open, read-only workbook
///
/// The underlying file is closed when the handle is dropped.
pub struct WorkbookHandle {
    path: PathBuf,
    workbook: Xlsx<BufReader<File>>,
}

impl WorkbookHandle {
    /// Open a workbook for reading
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let workbook: Xlsx<_> = open_workbook(path)?;
        debug!("opened {}", path.display());
        Ok(Self {
            path: path.to_path_buf(),
            workbook,
        })
    }

    /// Sheet names in workbook order
    pub fn sheet_names(&self) -> Vec<String> {
        self.workbook.sheet_names()
    }

    /// Read at most `limit` rows of one sheet
    pub fn preview_sheet(&mut self, name: &str, limit: usize) -> Result<SheetPreview> {
        let mut cells = self.workbook.worksheet_cells_reader(name)?;
        let mut builder = PreviewBuilder::new(limit);

        builder.declare_last_column(cells.dimensions().end.1);

        while let Some(cell) = cells.next_cell()? {
            let (row, col) = cell.get_position();
            if !builder.push(row, col, cell_text(cell.get_value())) {
                trace!("sheet {name}: stopped at row {}", row + 1);
                break;
            }
        }

        let rows = builder.finish();
        debug!("sheet {name}: captured {} rows", rows.len());
        Ok(rows)
    }

    /// Preview every sheet, in workbook order
    pub fn preview(&mut self, limit: usize) -> Result<DumpResult> {
        let mut result = DumpResult::new(self.path.to_string_lossy());
        for name in self.sheet_names() {
            let rows = self.preview_sheet(&name, limit)?;
            result.push_sheet(name, rows);
        }
        Ok(result)
    }
}

/// Render a cell value as text; empty cells become `""`
pub fn cell_text(value: &DataRef<'_>) -> String {
    match value {
        DataRef::Empty => String::new(),
        DataRef::String(s) | DataRef::DateTimeIso(s) | DataRef::DurationIso(s) => s.clone(),
        DataRef::SharedString(s) => (*s).to_string(),
        DataRef::Int(i) => i.to_string(),
        DataRef::Float(f) => float_text(*f),
        DataRef::Bool(b) => bool_text(*b).to_string(),
        DataRef::DateTime(dt) => datetime_text(dt),
        DataRef::Error(e) => e.to_string(),
    }
}

/// Render a number the way the stored text reads back
///
/// Integral values below 2^53 print as integers. Everything else uses the
/// shortest round-trip digits, switching to `d.ddde±NN` when the decimal
/// exponent is below -4 or at least 16.
pub fn float_text(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value.fract() == 0.0 && value.abs() < MAX_EXACT_INT {
        return (value as i64).to_string();
    }

    let scientific = format!("{value:e}");
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if !(-4..16).contains(&exponent) {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exponent.abs())
    } else {
        value.to_string()
    }
}

fn bool_text(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

fn datetime_text(dt: &ExcelDateTime) -> String {
    let serial = dt.as_f64();
    if dt.is_duration() {
        return duration_text(serial);
    }

    match dt.as_datetime() {
        Some(datetime) if serial > 0.0 && serial < 1.0 => time_text(&datetime),
        Some(datetime) => timestamp_text(&datetime),
        None => float_text(serial),
    }
}

fn micros_suffix(datetime: &NaiveDateTime) -> String {
    match datetime.nanosecond() / 1_000 {
        0 => String::new(),
        micros => format!(".{micros:06}"),
    }
}

/// `YYYY-MM-DD HH:MM:SS[.ffffff]`
pub fn timestamp_text(datetime: &NaiveDateTime) -> String {
    format!(
        "{}{}",
        datetime.format("%Y-%m-%d %H:%M:%S"),
        micros_suffix(datetime)
    )
}

/// `HH:MM:SS[.ffffff]`
pub fn time_text(datetime: &NaiveDateTime) -> String {
    format!("{}{}", datetime.format("%H:%M:%S"), micros_suffix(datetime))
}

/// `[N day[s], ]H:MM:SS[.ffffff]` for a span given in days
pub fn duration_text(days: f64) -> String {
    let total_micros = (days * (SECONDS_PER_DAY * MICROS_PER_SECOND) as f64).round() as i64;
    let total_seconds = total_micros.div_euclid(MICROS_PER_SECOND);
    let micros = total_micros.rem_euclid(MICROS_PER_SECOND);

    let whole_days = total_seconds.div_euclid(SECONDS_PER_DAY);
    let seconds = total_seconds.rem_euclid(SECONDS_PER_DAY);

    let mut text = String::new();
    if whole_days != 0 {
        let plural = if whole_days.abs() == 1 { "" } else { "s" };
        text.push_str(&format!("{whole_days} day{plural}, "));
    }
    text.push_str(&format!(
        "{}:{:02}:{:02}",
        seconds / 3600,
        seconds % 3600 / 60,
        seconds % 60
    ));
    if micros != 0 {
        text.push_str(&format!(".{micros:06}"));
    }
    text
}
