#![warn(missing_docs)]
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

pub mod config;

mod data;
pub use data::ChartData;

mod font;

mod format;
pub use format::{ChartFormat, ChartFormatError};

mod render;
pub use render::{ChartError, render, save};

mod series;
pub use series::{InvalidSeriesError, Series};
