//! EMT: Equipment Maintenance Toolkit
//!
//! A command-line toolkit for exploring equipment maintenance records:
//! CSV ingestion, equipment-metadata joins, cascading filters, summary
//! statistics, and export.

pub mod cli;
pub mod core;
