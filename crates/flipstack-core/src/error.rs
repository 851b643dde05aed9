//! Error types

use thiserror::Error;

/// Rejected stack geometry parameter
///
/// Raised only while building a [`GeometryConfig`](crate::GeometryConfig);
/// transform computation itself never fails.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum InvalidConfiguration {
    #[error("Current page scale not correctly defined ({0}). Be sure to set it to value from (0, 1].")]
    CurrentPageScale(f64),

    #[error(
        "Top stacked page scale not correctly defined ({value}). \
         Be sure to set it to value from (0, current_page_scale = {current_page_scale}]."
    )]
    TopStackedScale { value: f64, current_page_scale: f64 },

    #[error("Overlap factor not correctly defined ({0}). Be sure to set it to value from [0, 1].")]
    OverlapFactor(f64),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] InvalidConfiguration),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
