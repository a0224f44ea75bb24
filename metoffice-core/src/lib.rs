//! Core library for the `weather` CLI, a Met Office DataPoint client.
//!
//! This crate defines:
//! - Domain records (sites, regions, forecasts)
//! - Parsers that normalise DataPoint's JSON bodies into those records
//! - The weather type code table
//! - HTTP transport and the `DataPoint` service tying it to the parsers
//! - Configuration & credentials handling
//!
//! It is used by `metoffice-cli`, but can also be reused by other binaries or services.

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod parse;
pub mod service;
pub mod weather_code;

pub use client::{ClientConfig, DataPointClient, Resource, Transport};
pub use config::Config;
pub use error::{ParseError, TransportError, WeatherError};
pub use model::{DayPart, Region, RegionForecastEntry, Selection, Site, SiteForecast};
pub use parse::{parse_region_forecast, parse_regions, parse_site_forecast, parse_sites};
pub use service::DataPoint;
pub use weather_code::describe;
