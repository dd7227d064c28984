#[macro_use]
extern crate log;
#[macro_use]
extern crate anyhow;

pub mod export_data;
pub mod geo_utils;
pub mod gps_processor;
pub mod import_data;
pub mod logs;
pub mod outlier_filter;
pub mod route_annotator;
pub mod route_cleaner;
pub mod segment_metrics;

pub use outlier_filter::CleaningConfig;
pub use route_cleaner::{clean_route, CleanedRoute, CleaningReport};
