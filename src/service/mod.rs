pub mod chart_service_impl;
pub mod report_service_impl;
