//! Decoding of DataPoint JSON bodies into domain records.
//!
//! DataPoint renders XML as JSON, so attribute names arrive as `@id`/`@name`,
//! element text as `$`, and repeated elements collapse to a bare object when
//! only one is present. Each parser takes the raw body and either returns
//! fully populated records or a [`ParseError`] carrying that body.

use serde::{
    Deserialize, Deserializer,
    de::{self, Unexpected},
};

use crate::error::ParseError;

mod region_forecast;
mod regions;
mod site_forecast;
mod sites;

pub use region_forecast::parse_region_forecast;
pub use regions::parse_regions;
pub use site_forecast::parse_site_forecast;
pub use sites::parse_sites;

/// `{"Locations": {"Location": [...]}}`, shared by both catalogs.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct CatalogResp<T> {
    #[serde(rename = "Locations", default = "Locations::default", deserialize_with = "null_default")]
    locations: Locations<T>,
}

#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct Locations<T> {
    #[serde(rename = "Location", default = "Vec::new", deserialize_with = "null_default")]
    location: Vec<T>,
}

impl<T> Default for Locations<T> {
    fn default() -> Self {
        Self { location: Vec::new() }
    }
}

/// Decode a catalog body, rejecting one that lists no locations.
fn decode_catalog<'a, T>(body: &'a [u8], element: &'static str) -> Result<Vec<T>, ParseError>
where
    T: Deserialize<'a>,
{
    let resp: CatalogResp<T> = decode(body)?;
    let records = resp.locations.location;

    if records.is_empty() {
        return Err(ParseError::empty(body, element));
    }

    Ok(records)
}

fn decode<'a, T>(body: &'a [u8]) -> Result<T, ParseError>
where
    T: Deserialize<'a>,
{
    serde_json::from_slice(body).map_err(|e| ParseError::malformed(body, e))
}

/// Treat an explicit `null` like a missing field.
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Identifiers and names must be present and carry at least one non-blank character.
fn non_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;

    if value.trim().is_empty() {
        return Err(de::Error::invalid_value(
            Unexpected::Str(&value),
            &"a non-empty string",
        ));
    }

    Ok(value)
}
