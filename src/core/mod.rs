pub mod api;
pub mod app;
pub mod confidence;
pub mod config;
pub mod format;
pub mod model;
pub mod paths;
pub mod report;
