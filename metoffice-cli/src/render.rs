//! Plain-text rendering of core records for the terminal.

use metoffice_core::{Region, RegionForecastEntry, Selection, Site, SiteForecast};

pub fn sites(sites: &[Site]) -> String {
    let mut out = String::from("Available sites:\n");
    out.push_str(&site_lines(sites));
    out
}

/// One summary line per site, as matched by `site find`.
pub fn site_lines(sites: &[Site]) -> String {
    sites.iter().map(|s| format!("{}\n", s.summary())).collect()
}

pub fn regions(regions: &[Region]) -> String {
    let mut out = String::from("Available regions:\n");
    out.extend(regions.iter().map(|r| format!("Id: {}, Name: {}\n", r.id, r.name)));
    out
}

pub fn site_forecast(forecast: &SiteForecast) -> String {
    format!(
        "Day {}°C - {} | Night {}°C - {}\n",
        forecast.day.temp,
        forecast.day.description,
        forecast.night.temp,
        forecast.night.description
    )
}

/// The headline stays on one line with its title; other blocks print their
/// text followed by a blank line.
pub fn region_forecast(entries: &[RegionForecastEntry]) -> String {
    entries
        .iter()
        .map(|entry| {
            if entry.is_headline() {
                format!("{} {}\n", entry.title, entry.content)
            } else {
                format!("{}\n\n", entry.content)
            }
        })
        .collect()
}

pub fn selection(selection: &Selection) -> String {
    let site = &selection.site;
    match &selection.region {
        Some(region) => format!(
            "Selected site {} (id {}) in region {} (id {}).\n",
            site.name, site.id, region.name, region.id
        ),
        None => format!(
            "Selected site {} (id {}). No regional forecast is available for region {:?}.\n",
            site.name, site.id, site.region
        ),
    }
}
