// Infrastructure: configuration and table files for the command line front-end

pub mod config;
pub mod workbook_io;

pub use config::{AppConfig, ConfigError};
pub use workbook_io::{read_workbook, render_table, write_table, WorkbookError};
