//! Report domain - the per-cycle summary sent to the recipient

mod report_builder;

pub use report_builder::{Report, ReportLine};
