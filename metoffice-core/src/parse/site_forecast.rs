use serde::Deserialize;

use super::{decode, null_default};
use crate::{
    error::ParseError,
    model::{DayPart, SiteForecast},
    weather_code,
};

#[derive(Debug, Default, Deserialize)]
struct ForecastResp {
    #[serde(rename = "SiteRep", default, deserialize_with = "null_default")]
    site_rep: SiteRep,
}

#[derive(Debug, Default, Deserialize)]
struct SiteRep {
    #[serde(rename = "DV", default, deserialize_with = "null_default")]
    dv: DataView,
}

#[derive(Debug, Default, Deserialize)]
struct DataView {
    #[serde(rename = "Location", default, deserialize_with = "null_default")]
    location: ForecastLocation,
}

#[derive(Debug, Default, Deserialize)]
struct ForecastLocation {
    #[serde(rename = "Period", default, deserialize_with = "null_default")]
    periods: Vec<Period>,
}

#[derive(Debug, Default, Deserialize)]
struct Period {
    #[serde(rename = "Rep", default, deserialize_with = "null_default")]
    reps: Vec<Rep>,
}

/// One representative reading. Day reps carry `FDm`, night reps `FNm`.
#[derive(Debug, Default, Deserialize)]
struct Rep {
    #[serde(rename = "FDm", default, deserialize_with = "null_default")]
    day_max: String,
    #[serde(rename = "FNm", default, deserialize_with = "null_default")]
    night_min: String,
    #[serde(rename = "$", default, deserialize_with = "null_default")]
    name: String,
    #[serde(rename = "W", default, deserialize_with = "null_default")]
    weather: String,
}

/// Parse a daily (`res=daily`) site forecast body into today's day/night pair.
///
/// Only the first period is read. A rep named `Day` fills the day part, any
/// other rep fills the night part, and later reps overwrite earlier ones. A
/// period without a `Day` rep leaves the day part empty.
pub fn parse_site_forecast(body: &[u8]) -> Result<SiteForecast, ParseError> {
    let resp: ForecastResp = decode(body)?;

    let today = resp
        .site_rep
        .dv
        .location
        .periods
        .into_iter()
        .next()
        .ok_or_else(|| ParseError::empty(body, "forecast period"))?;

    let mut forecast = SiteForecast::default();

    for rep in today.reps {
        let description = weather_code::describe(&rep.weather).to_string();

        if rep.name == "Day" {
            forecast.day = DayPart { temp: rep.day_max, description };
        } else {
            forecast.night = DayPart { temp: rep.night_min, description };
        }
    }

    Ok(forecast)
}
