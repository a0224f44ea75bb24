use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::debug;

use super::{decode, null_default};
use crate::{error::ParseError, model::RegionForecastEntry};

#[derive(Debug, Deserialize)]
struct RegionForecastResp {
    #[serde(rename = "RegionalFcst", default, deserialize_with = "null_default")]
    forecast: RegionalFcst,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RegionalFcst {
    #[serde(default, deserialize_with = "null_default")]
    created_on: String,
    #[serde(default, deserialize_with = "null_default")]
    issued_at: String,
    #[serde(default, deserialize_with = "null_default")]
    region_id: String,
    #[serde(rename = "FcstPeriods", default, deserialize_with = "null_default")]
    periods: FcstPeriods,
}

#[derive(Debug, Default, Deserialize)]
struct FcstPeriods {
    #[serde(rename = "Period", default, deserialize_with = "null_default")]
    period: Vec<Period>,
}

#[derive(Debug, Deserialize)]
struct Period {
    #[serde(default, deserialize_with = "null_default")]
    id: String,
    #[serde(rename = "Paragraph", default)]
    paragraph: ParagraphField,
}

/// The `Paragraph` element as it arrives: missing, one object, or a list.
#[derive(Debug, Default)]
enum ParagraphField {
    #[default]
    Absent,
    Single(Value),
    List(Vec<Value>),
    /// A scalar where an element was expected.
    Other(Value),
}

impl<'de> Deserialize<'de> for ParagraphField {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Null => Self::Absent,
            Value::Array(items) => Self::List(items),
            obj @ Value::Object(_) => Self::Single(obj),
            other => Self::Other(other),
        })
    }
}

#[derive(Debug, Deserialize)]
struct Paragraph {
    title: String,
    #[serde(rename = "$")]
    text: String,
}

/// Parse a regional text forecast body into its titled blocks, in payload order.
///
/// Only periods whose `Paragraph` is a list contribute entries; periods with a
/// missing or single-object `Paragraph` are skipped. Inside a list every
/// element must carry string `title` and `$` fields, otherwise the whole
/// forecast is rejected. An empty result is valid.
pub fn parse_region_forecast(body: &[u8]) -> Result<Vec<RegionForecastEntry>, ParseError> {
    let resp: RegionForecastResp = decode(body)?;
    let fcst = resp.forecast;

    debug!(
        region = %fcst.region_id,
        created_on = %fcst.created_on,
        issued_at = %fcst.issued_at,
        periods = fcst.periods.period.len(),
        "decoded regional forecast"
    );

    let mut entries = Vec::new();

    for period in fcst.periods.period {
        let items = match period.paragraph {
            ParagraphField::List(items) => items,
            ParagraphField::Single(obj) => {
                debug!(period = %period.id, title = ?obj.get("title"), "skipping single-paragraph period");
                continue;
            }
            ParagraphField::Absent => {
                debug!(period = %period.id, "skipping period without paragraphs");
                continue;
            }
            ParagraphField::Other(value) => {
                debug!(period = %period.id, %value, "skipping period with scalar paragraph");
                continue;
            }
        };

        for (index, item) in items.into_iter().enumerate() {
            let paragraph: Paragraph =
                serde_json::from_value(item).map_err(|source| ParseError::MalformedParagraph {
                    period: period.id.clone(),
                    index,
                    body: body.to_vec(),
                    source,
                })?;

            entries.push(RegionForecastEntry { title: paragraph.title, content: paragraph.text });
        }
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    const REGION_FORECAST: &[u8] = include_bytes!("../../testdata/regionForecast.json");

    fn entry(title: &str, content: &str) -> RegionForecastEntry {
        RegionForecastEntry { title: title.into(), content: content.into() }
    }

    fn wrap_periods(periods: &str) -> Vec<u8> {
        format!(r#"{{"RegionalFcst":{{"regionId":"nw","FcstPeriods":{{"Period":[{periods}]}}}}}}"#)
            .into_bytes()
    }

    #[test]
    fn parses_fixture_in_order() {
        let want = vec![
            entry("Headline:", "Patchy fog clearing, then dry and bright for most."),
            entry(
                "Today:",
                "Mostly cloudy in Cumbria at first with the odd spot of light rain. Elsewhere, patchy mist and fog clearing to leave a dry day with bright or sunny spells. Turning breezier than of late. Maximum Temperature 9C.",
            ),
            entry(
                "Tonight:",
                "Cloud thickening this evening with a band of patchy rain moving south across the region. Skies clearing overnight, allowing a patchy frost to develop. Winds becoming generally light. Minimum Temperature 1C.",
            ),
            entry(
                "Thursday:",
                "After a frosty start in places, it will be a dry and fine day with sunny periods. Brisk westerly winds, especially in northern areas. Maximum Temperature 8C.",
            ),
        ];

        assert_eq!(parse_region_forecast(REGION_FORECAST).unwrap(), want);
    }

    #[test]
    fn order_spans_periods() {
        let body = wrap_periods(
            r#"{"id":"day1","Paragraph":[{"title":"Headline:","$":"Fog."}]},
               {"id":"day2","Paragraph":[{"title":"Today:","$":"Cloudy."},{"title":"Tonight:","$":"Frost."}]}"#,
        );

        let got = parse_region_forecast(&body).unwrap();
        assert_eq!(
            got,
            vec![entry("Headline:", "Fog."), entry("Today:", "Cloudy."), entry("Tonight:", "Frost.")]
        );
    }

    #[test]
    fn single_object_paragraph_is_skipped() {
        let body = wrap_periods(
            r#"{"id":"day1","Paragraph":{"title":"Outlook:","$":"Mild."}},
               {"id":"day2","Paragraph":[{"title":"Today:","$":"Dry."}]}"#,
        );

        assert_eq!(parse_region_forecast(&body).unwrap(), vec![entry("Today:", "Dry.")]);
    }

    #[test]
    fn missing_null_or_scalar_paragraph_is_skipped() {
        let body = wrap_periods(
            r#"{"id":"a"},{"id":"b","Paragraph":null},{"id":"c","Paragraph":"text"}"#,
        );

        assert!(parse_region_forecast(&body).unwrap().is_empty());
    }

    #[test]
    fn bad_field_inside_list_is_fatal() {
        let body = wrap_periods(
            r#"{"id":"day1","Paragraph":[{"title":"Headline:","$":"Fog."},{"title":7,"$":"x"}]}"#,
        );

        let err = parse_region_forecast(&body).unwrap_err();
        assert!(err.is_malformed());
        match err {
            ParseError::MalformedParagraph { period, index, .. } => {
                assert_eq!(period, "day1");
                assert_eq!(index, 1);
            }
            other => panic!("expected MalformedParagraph, got {other:?}"),
        }
    }

    #[test]
    fn missing_text_inside_list_is_fatal() {
        let body = wrap_periods(r#"{"id":"day1","Paragraph":[{"title":"Headline:"}]}"#);

        let err = parse_region_forecast(&body).unwrap_err();
        assert!(matches!(err, ParseError::MalformedParagraph { .. }));
        assert!(err.to_string().contains("missing field `$`"));
    }

    #[test]
    fn non_object_inside_list_is_fatal() {
        let body = wrap_periods(r#"{"id":"day1","Paragraph":["just text"]}"#);

        assert!(matches!(
            parse_region_forecast(&body).unwrap_err(),
            ParseError::MalformedParagraph { .. }
        ));
    }

    #[test]
    fn no_paragraphs_anywhere_is_empty_ok() {
        assert!(parse_region_forecast(&wrap_periods("")).unwrap().is_empty());
        assert!(parse_region_forecast(b"{}").unwrap().is_empty());
    }

    #[test]
    fn null_envelopes_are_empty_ok() {
        let bodies: [&[u8]; 4] = [
            br#"{"RegionalFcst":null}"#,
            br#"{"RegionalFcst":{"createdOn":null,"issuedAt":null,"regionId":null,"FcstPeriods":null}}"#,
            br#"{"RegionalFcst":{"FcstPeriods":{"Period":null}}}"#,
            br#"{"RegionalFcst":{"FcstPeriods":{"Period":[{"id":null,"Paragraph":null}]}}}"#,
        ];

        for body in bodies {
            assert!(parse_region_forecast(body).unwrap().is_empty(), "{body:?}");
        }
    }

    #[test]
    fn top_level_decode_failure_is_malformed_response() {
        let err = parse_region_forecast(br#"{"RegionalFcst":{"FcstPeriods":{"Period":{}}}}"#)
            .unwrap_err();
        assert!(matches!(err, ParseError::MalformedResponse { .. }));

        assert!(matches!(
            parse_region_forecast(b"").unwrap_err(),
            ParseError::MalformedResponse { .. }
        ));
    }

    #[test]
    fn reparsing_is_stable() {
        assert_eq!(
            parse_region_forecast(REGION_FORECAST).unwrap(),
            parse_region_forecast(REGION_FORECAST).unwrap()
        );
    }
}
