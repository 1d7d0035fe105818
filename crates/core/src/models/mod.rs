pub mod chart;
pub mod dataset;
pub mod settings;
