//! Birth data and chart settings.

use kundali_ephem::HouseSystem;
use kundali_time::{ClockTime, NaiveDate, UtcOffset, parse_date};

use crate::error::ChartError;

/// Validated birth data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirthInput {
    pub date: NaiveDate,
    pub time: ClockTime,
    /// Degrees, north positive.
    pub latitude: f64,
    /// Degrees, east positive.
    pub longitude: f64,
}

impl BirthInput {
    pub fn new(
        date: NaiveDate,
        time: ClockTime,
        latitude: f64,
        longitude: f64,
    ) -> Result<Self, ChartError> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(ChartError::InvalidInput(format!(
                "latitude {latitude} outside [-90, 90]"
            )));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(ChartError::InvalidInput(format!(
                "longitude {longitude} outside [-180, 180]"
            )));
        }
        Ok(Self {
            date,
            time,
            latitude,
            longitude,
        })
    }

    /// Parse `"YYYY-MM-DD"` and `"HH:MM"` strings plus coordinates.
    pub fn parse(dob: &str, time: &str, latitude: f64, longitude: f64) -> Result<Self, ChartError> {
        let date = parse_date(dob)?;
        let time = ClockTime::parse(time)?;
        Self::new(date, time, latitude, longitude)
    }
}

/// Settings that stay fixed across charts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartConfig {
    /// Offset of the birth-time clock from UT.
    pub utc_offset: UtcOffset,
    /// System named when asking the provider for the ascendant.
    pub house_system: HouseSystem,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            utc_offset: UtcOffset::IST,
            house_system: HouseSystem::WholeSign,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_good_input() {
        let input = BirthInput::parse("2000-01-01", "12:00", 28.6139, 77.2090).unwrap();
        assert_eq!(input.time.hour(), 12);
        assert_eq!(input.date.to_string(), "2000-01-01");
    }

    #[test]
    fn rejects_bad_strings() {
        let cases = [
            ("2000-13-01", "12:00"),
            ("2001-02-29", "12:00"),
            ("01/01/2000", "12:00"),
            ("2000-01-01", "24:00"),
            ("2000-01-01", "12:60"),
            ("2000-01-01", "noon"),
        ];
        for (dob, time) in cases {
            let err = BirthInput::parse(dob, time, 0.0, 0.0).unwrap_err();
            assert_eq!(err.kind(), "InvalidInput", "{dob} {time}");
        }
    }

    #[test]
    fn rejects_bad_coordinates() {
        let cases = [
            (90.5, 0.0),
            (-91.0, 0.0),
            (0.0, 180.1),
            (f64::NAN, 0.0),
            (0.0, f64::INFINITY),
        ];
        for (lat, lon) in cases {
            assert!(BirthInput::parse("2000-01-01", "12:00", lat, lon).is_err());
        }
        assert!(BirthInput::parse("2000-01-01", "12:00", -90.0, 180.0).is_ok());
    }

    #[test]
    fn default_config_is_ist_whole_sign() {
        let cfg = ChartConfig::default();
        assert_eq!(cfg.utc_offset.hours(), 5.5);
        assert_eq!(cfg.house_system, HouseSystem::WholeSign);
    }
}
