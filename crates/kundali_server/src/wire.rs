//! JSON request and response shapes of `POST /getBirthChart`.

use indexmap::IndexMap;
use kundali_chart::{Chart, Placement};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct BirthChartRequest {
    /// `YYYY-MM-DD`
    pub dob: String,
    /// `HH:MM`, 24-hour, local to the configured offset
    pub time: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetEntry {
    pub sign: String,
    pub degree: f64,
    pub nakshatra: String,
    pub pada: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashaEntry {
    pub mahadasa: String,
    pub antardasha: String,
}

/// Keys keep insertion order: Sun..Ketu and "1".."12".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthChartResponse {
    pub lagna: String,
    pub lagna_degree: f64,
    pub planets: IndexMap<String, PlanetEntry>,
    pub houses: IndexMap<String, String>,
    pub current_dasha: DashaEntry,
    pub yogas: Vec<String>,
}

fn planet_entry(p: &Placement) -> PlanetEntry {
    PlanetEntry {
        sign: p.sign().western_name().to_string(),
        degree: p.display_degree(),
        nakshatra: p.nakshatra().name().to_string(),
        pada: p.pada(),
    }
}

impl From<&Chart> for BirthChartResponse {
    fn from(chart: &Chart) -> Self {
        let planets = chart
            .grahas
            .iter()
            .map(|g| (g.graha.english_name().to_string(), planet_entry(&g.placement)))
            .collect();
        let houses = chart
            .houses
            .iter()
            .map(|(house, sign)| (house.to_string(), sign.western_name().to_string()))
            .collect();
        Self {
            lagna: chart.lagna.sign().western_name().to_string(),
            lagna_degree: chart.lagna.display_degree(),
            planets,
            houses,
            current_dasha: DashaEntry {
                mahadasa: chart.dasha.mahadasha.english_name().to_string(),
                antardasha: chart.dasha.antardasha.english_name().to_string(),
            },
            yogas: chart.yogas.iter().map(|y| y.to_string()).collect(),
        }
    }
}
