//! Whole-pipeline tests with the analytical ephemeris.

use kundali_chart::{BirthInput, ChartConfig, birth_chart};
use kundali_ephem::{AnalyticEphemeris, HouseSystem};
use kundali_time::UtcOffset;
use kundali_vedic::{ALL_GRAHAS, Graha, Nakshatra, Rashi, classify};

fn eph() -> AnalyticEphemeris {
    AnalyticEphemeris::new()
}

#[test]
fn delhi_new_year_2000() {
    let input = BirthInput::parse("2000-01-01", "12:00", 28.6139, 77.2090).unwrap();
    let chart = birth_chart(&eph(), &eph(), &input, &ChartConfig::default()).unwrap();

    assert_eq!(chart.ut.to_string(), "2000-01-01T06:30Z");
    assert!((chart.julian_day - (2_451_545.0 - 5.5 / 24.0)).abs() < 1e-9);
    assert!((chart.ayanamsha_deg - 23.853).abs() < 0.001);

    // Sun near sidereal 256.3, Moon near 196.4.
    let sun = chart.graha(Graha::Surya).placement;
    assert_eq!(sun.sign(), Rashi::Dhanu);
    assert_eq!(sun.nakshatra(), Nakshatra::PurvaAshadha);

    let moon = chart.graha(Graha::Chandra).placement;
    assert_eq!(moon.sign(), Rashi::Tula);
    assert_eq!(moon.nakshatra(), Nakshatra::Swati);

    assert_eq!(chart.houses.lagna(), chart.lagna.sign());
}

#[test]
fn chart_invariants_over_a_month() {
    for day in 1..=31 {
        for time in ["00:00", "05:45", "12:00", "18:30", "23:59"] {
            let dob = format!("1987-03-{day:02}");
            let input = BirthInput::parse(&dob, time, 19.076, 72.8777).unwrap();
            let chart = birth_chart(&eph(), &eph(), &input, &ChartConfig::default()).unwrap();

            let a = chart.lagna.sign().index();
            assert_eq!(chart.houses.sign_of(1).map(Rashi::index), Some(a));
            assert_eq!(chart.houses.sign_of(12).map(Rashi::index), Some((a + 11) % 12));
            for h in 1..12u8 {
                let this = chart.houses.sign_of(h).map(Rashi::index);
                let next = chart.houses.sign_of(h + 1).map(Rashi::index);
                assert_eq!(next, this.map(|i| (i + 1) % 12));
            }

            for (i, g) in chart.grahas.iter().enumerate() {
                assert_eq!(g.graha, ALL_GRAHAS[i]);
                let lon = g.placement.longitude();
                assert!((0.0..360.0).contains(&lon));
                assert_eq!(classify(lon).key(), g.placement.position.key());
            }

            let rahu = chart.graha(Graha::Rahu).placement.longitude();
            let ketu = chart.graha(Graha::Ketu).placement.longitude();
            assert!(((ketu - rahu).rem_euclid(360.0) - 180.0).abs() < 1e-9);
        }
    }
}

#[test]
fn utc_offset_is_configurable() {
    let input = BirthInput::parse("2000-01-01", "06:30", 51.5, 0.0).unwrap();
    let utc = ChartConfig {
        utc_offset: UtcOffset::UTC,
        house_system: HouseSystem::WholeSign,
    };
    let from_utc = birth_chart(&eph(), &eph(), &input, &utc).unwrap();

    let ist_input = BirthInput::parse("2000-01-01", "12:00", 51.5, 0.0).unwrap();
    let from_ist = birth_chart(&eph(), &eph(), &ist_input, &ChartConfig::default()).unwrap();
    assert_eq!(from_utc.julian_day, from_ist.julian_day);
    assert_eq!(from_utc, from_ist);
}

#[test]
fn placidus_above_polar_circle_is_unavailable() {
    let input = BirthInput::parse("2000-06-21", "12:00", 69.65, 18.96).unwrap();
    let cfg = ChartConfig {
        house_system: HouseSystem::Placidus,
        ..ChartConfig::default()
    };
    let err = birth_chart(&eph(), &eph(), &input, &cfg).unwrap_err();
    assert_eq!(err.kind(), "EphemerisUnavailable");

    let whole = birth_chart(&eph(), &eph(), &input, &ChartConfig::default());
    assert!(whole.is_ok());
}

#[test]
fn dates_outside_the_ephemeris_span() {
    let input = BirthInput::parse("1750-05-05", "10:00", 0.0, 0.0).unwrap();
    let err = birth_chart(&eph(), &eph(), &input, &ChartConfig::default()).unwrap_err();
    assert_eq!(err.kind(), "EphemerisUnavailable");
}
