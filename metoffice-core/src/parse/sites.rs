use serde::Deserialize;

use super::{decode_catalog, non_empty, null_default};
use crate::{error::ParseError, model::Site};

#[derive(Debug, Deserialize)]
struct SiteRecord {
    #[serde(alias = "Id", deserialize_with = "non_empty")]
    id: String,
    #[serde(alias = "Name", deserialize_with = "non_empty")]
    name: String,
    #[serde(alias = "Region", default, deserialize_with = "null_default")]
    region: String,
    #[serde(
        rename = "unitaryAuthArea",
        alias = "UnitaryAuthArea",
        default,
        deserialize_with = "null_default"
    )]
    unitary_auth_area: String,
}

/// Parse the `sitelist` body into sites, in the order the API lists them.
pub fn parse_sites(body: &[u8]) -> Result<Vec<Site>, ParseError> {
    let records: Vec<SiteRecord> = decode_catalog(body, "Site")?;

    Ok(records
        .into_iter()
        .map(|rec| Site {
            id: rec.id,
            name: rec.name,
            region: rec.region,
            area: rec.unitary_auth_area,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOCATIONS: &[u8] = include_bytes!("../../testdata/locations.json");

    #[test]
    fn parses_fixture_in_order() {
        let want = vec![
            Site {
                id: "14".into(),
                name: "Carlisle Airport".into(),
                region: "nw".into(),
                area: "Cumbria".into(),
            },
            Site {
                id: "26".into(),
                name: "Liverpool John Lennon Airport".into(),
                region: "nw".into(),
                area: "Merseyside".into(),
            },
        ];

        let got = parse_sites(LOCATIONS).expect("fixture should parse");
        assert_eq!(got, want);
    }

    #[test]
    fn accepts_pascal_case_fields() {
        let body = br#"{"Locations":{"Location":[
            {"Id":"3","Name":"Skye/Lusa","Region":"he","UnitaryAuthArea":"Highland"}
        ]}}"#;

        let got = parse_sites(body).unwrap();
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].area, "Highland");
        assert_eq!(got[0].region, "he");
    }

    #[test]
    fn missing_area_defaults_to_empty() {
        let body = br#"{"Locations":{"Location":[{"id":"99","name":"Offshore Buoy"}]}}"#;

        let got = parse_sites(body).unwrap();
        assert_eq!(got[0].area, "");
        assert_eq!(got[0].region, "");
    }

    #[test]
    fn null_area_defaults_to_empty() {
        let body = br#"{"Locations":{"Location":[
            {"id":"99","name":"Offshore Buoy","region":null,"unitaryAuthArea":null}
        ]}}"#;

        let got = parse_sites(body).unwrap();
        assert_eq!(got[0].area, "");
        assert_eq!(got[0].region, "");
    }

    #[test]
    fn null_locations_is_empty_result() {
        assert!(parse_sites(br#"{"Locations":null}"#).unwrap_err().is_empty_result());
        assert!(parse_sites(br#"{"Locations":{"Location":null}}"#).unwrap_err().is_empty_result());
    }

    #[test]
    fn zero_locations_is_empty_result() {
        let err = parse_sites(br#"{"Locations":{"Location":[]}}"#).unwrap_err();

        assert!(err.is_empty_result());
        assert!(err.to_string().contains("want at least one Site element"));
    }

    #[test]
    fn empty_object_is_empty_result() {
        let err = parse_sites(b"{}").unwrap_err();
        assert!(err.is_empty_result());
    }

    #[test]
    fn invalid_bytes_are_malformed() {
        let bodies: [&[u8]; 4] =
            [b"", b"not json", b"42", br#"{"Locations":{"Location":"x"}}"#];

        for body in bodies {
            let err = parse_sites(body).unwrap_err();
            assert!(err.is_malformed(), "{body:?} should be malformed, got {err}");
            assert_eq!(err.body(), body);
        }
    }

    #[test]
    fn blank_id_is_malformed() {
        let body = br#"{"Locations":{"Location":[{"id":"","name":"Nowhere"}]}}"#;
        assert!(parse_sites(body).unwrap_err().is_malformed());
    }

    #[test]
    fn missing_name_is_malformed() {
        let body = br#"{"Locations":{"Location":[{"id":"1"}]}}"#;
        let err = parse_sites(body).unwrap_err();

        assert!(err.is_malformed());
        assert!(err.to_string().contains("missing field `name`"));
    }

    #[test]
    fn reparsing_is_stable() {
        assert_eq!(parse_sites(LOCATIONS).unwrap(), parse_sites(LOCATIONS).unwrap());
    }
}
