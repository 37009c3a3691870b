pub mod inspector;
pub mod status_report;
