// Infrastructure: JSON workbooks on disk
//
// A workbook file is an object of sheets, each `{"columns": [...], "rows": [[...]]}`.
// JSON null is an empty cell, numbers and strings map to number and text cells.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{Table, Workbook};

#[derive(Debug, thiserror::Error)]
pub enum WorkbookError {
    #[error("cannot read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("'{}' is not a valid workbook: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("cannot encode table: {0}")]
    Encode(#[from] serde_json::Error),
}

pub fn read_workbook(path: impl AsRef<Path>) -> Result<Workbook, WorkbookError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| WorkbookError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| WorkbookError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn render_table(table: &Table) -> Result<String, WorkbookError> {
    Ok(serde_json::to_string_pretty(table)?)
}

pub fn write_table(path: impl AsRef<Path>, table: &Table) -> Result<(), WorkbookError> {
    let path = path.as_ref();
    let text = render_table(table)?;
    fs::write(path, text + "\n").map_err(|source| WorkbookError::Write {
        path: path.to_path_buf(),
        source,
    })
}
