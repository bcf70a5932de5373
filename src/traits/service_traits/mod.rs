pub mod chart_service;
pub mod report_service;
