mod chart;
mod chart_config;

pub use chart::FocusChart;
pub use chart_config::FocusChartConfig;
