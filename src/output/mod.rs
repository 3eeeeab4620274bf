//! Output module for exporting scraped records
//!
//! The only export target is a single-sheet xlsx workbook with localized
//! column headers.

mod xlsx;

pub use xlsx::write_workbook;
