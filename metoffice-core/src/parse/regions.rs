use serde::Deserialize;

use super::{decode_catalog, non_empty};
use crate::{error::ParseError, model::Region};

#[derive(Debug, Deserialize)]
struct RegionRecord {
    #[serde(rename = "@id", deserialize_with = "non_empty")]
    id: String,
    #[serde(rename = "@name", deserialize_with = "non_empty")]
    name: String,
}

/// Parse the regional forecast `sitelist` body into regions.
pub fn parse_regions(body: &[u8]) -> Result<Vec<Region>, ParseError> {
    let records: Vec<RegionRecord> = decode_catalog(body, "Region")?;

    Ok(records.into_iter().map(|rec| Region { id: rec.id, name: rec.name }).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const REGIONS: &[u8] = include_bytes!("../../testdata/regions.json");

    #[test]
    fn parses_fixture_in_order() {
        let want = vec![
            Region { id: "500".into(), name: "os".into() },
            Region { id: "505".into(), name: "dg".into() },
        ];

        assert_eq!(parse_regions(REGIONS).unwrap(), want);
    }

    #[test]
    fn zero_locations_is_empty_result() {
        let err = parse_regions(br#"{"Locations":{"Location":[]}}"#).unwrap_err();

        assert!(err.is_empty_result());
        assert!(err.to_string().contains("want at least one Region element"));
    }

    #[test]
    fn null_locations_is_empty_result() {
        assert!(parse_regions(br#"{"Locations":null}"#).unwrap_err().is_empty_result());
        assert!(parse_regions(br#"{"Locations":{"Location":null}}"#).unwrap_err().is_empty_result());
    }

    #[test]
    fn empty_inputs_never_panic() {
        assert!(parse_regions(b"").unwrap_err().is_malformed());
        assert!(parse_regions(b"{}").unwrap_err().is_empty_result());
    }

    #[test]
    fn unprefixed_attribute_names_are_malformed() {
        let body = br#"{"Locations":{"Location":[{"id":"500","name":"os"}]}}"#;
        let err = parse_regions(body).unwrap_err();

        assert!(err.is_malformed());
        assert!(err.to_string().contains("missing field `@id`"));
    }
}
