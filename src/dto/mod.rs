pub mod panel_series;
