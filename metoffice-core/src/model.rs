use serde::{Deserialize, Serialize};

/// A DataPoint observation/forecast site from the site catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    pub id: String,
    pub name: String,
    /// Region short-code, e.g. "nw".
    pub region: String,
    /// Unitary authority area, e.g. "Cumbria".
    pub area: String,
}

/// A forecast region from the region catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub id: String,
    /// Region short-code, matching [`Site::region`].
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPart {
    /// Temperature in degrees Celsius, exactly as the API reports it.
    pub temp: String,
    pub description: String,
}

/// Today's forecast for a single site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteForecast {
    pub day: DayPart,
    pub night: DayPart,
}

/// One titled block of a regional text forecast, e.g. "Headline:" or "Today:".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionForecastEntry {
    pub title: String,
    pub content: String,
}

/// Result of resolving a site name against both catalogs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub site: Site,
    /// `None` when no region in the catalog carries the site's region code.
    pub region: Option<Region>,
}

impl Site {
    /// One-line summary used by `site list` and matched against by `site find`.
    pub fn summary(&self) -> String {
        format!("Name: {}, Region: {}, Area: {}", self.name, self.region, self.area)
    }
}

impl RegionForecastEntry {
    pub fn is_headline(&self) -> bool {
        self.title == "Headline:"
    }
}
