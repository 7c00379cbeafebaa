//! Import job applicants from a spreadsheet into Huntflow
//!
//! The binary wires these modules together; see [`import`] for the per-record
//! pipeline.

pub mod api;
pub mod cli;
pub mod config;
pub mod import;
pub mod report;
pub mod source;
