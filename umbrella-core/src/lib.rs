//! Core library for the `umbrella` CLI.
//!
//! This crate defines:
//! - The forecast pipeline: URL building, fetching, weekday annotation,
//!   humidity aggregation and umbrella day selection
//! - Shared domain models and the error type
//! - Configuration & credentials handling
//!
//! It is used by `umbrella-cli`, but can also be reused by other binaries or services.

pub mod aggregate;
pub mod annotate;
pub mod config;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod select;
pub mod source;
pub mod url;

pub use aggregate::humidity_by_weekday;
pub use annotate::{annotate_weekdays, stamp_from_dt_txt};
pub use config::Config;
pub use error::UmbrellaError;
pub use model::{HumidityByWeekday, Stamp, UmbrellaDays, UmbrellaRequest, WEEKDAY_NAMES};
pub use pipeline::recommend;
pub use select::{next_days, select_umbrella_days};
pub use source::{ForecastSource, HttpForecastSource};
pub use url::{build_url, build_url_with_base};
