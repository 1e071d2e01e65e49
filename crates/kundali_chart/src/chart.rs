//! Birth chart assembly.
//!
//! One pass, in a fixed order: civil time to UT, UT to Julian Day, the
//! ayanamsha for that day, the ascendant, the houses, then the nine
//! grahas. Every provider query uses the same Julian Day, and every
//! tropical longitude has the same ayanamsha removed. Any failure aborts
//! the whole chart.

use kundali_ephem::error::finite_angle;
use kundali_ephem::{EphemerisProvider, JulianDayProvider};
use kundali_time::to_universal;
use kundali_vedic::{
    ALL_GRAHAS, AyanamshaCorrection, Graha, classify, ketu_from_rahu, whole_sign_houses,
};
use tracing::debug;

use crate::chart_types::{Chart, GrahaPlacement, Placement};
use crate::error::ChartError;
use crate::input::{BirthInput, ChartConfig};
use crate::placeholder::{PLACEHOLDER_DASHA, PLACEHOLDER_YOGAS};

/// Cast a sidereal birth chart.
pub fn birth_chart(
    jd_provider: &dyn JulianDayProvider,
    ephemeris: &dyn EphemerisProvider,
    input: &BirthInput,
    config: &ChartConfig,
) -> Result<Chart, ChartError> {
    let ut = to_universal(input.date, input.time, config.utc_offset)?;
    let julian_day = finite_angle(
        jd_provider.julian_day(ut.year(), ut.month(), ut.day(), ut.hours)?,
        "julian day",
    )?;

    let correction = AyanamshaCorrection::for_epoch(ephemeris, julian_day)?;
    let asc = correction.ascendant_longitude(
        ephemeris,
        input.latitude,
        input.longitude,
        config.house_system,
    )?;
    let lagna = Placement::new(classify(asc));
    let houses = whole_sign_houses(lagna.position.sign_index())?;

    debug!(
        %ut,
        julian_day,
        ayanamsha = correction.offset_deg(),
        lagna = lagna.sign().western_name(),
        house_system = %config.house_system.code(),
        "chart epoch resolved"
    );

    let mut sidereal = [0.0_f64; 9];
    for graha in ALL_GRAHAS {
        sidereal[graha.index() as usize] = match graha.body() {
            Some(body) => correction.body_longitude(ephemeris, body)?,
            // Rahu precedes Ketu, so its slot is already filled.
            None => ketu_from_rahu(sidereal[Graha::Rahu.index() as usize]),
        };
    }

    let grahas = ALL_GRAHAS.map(|graha| GrahaPlacement {
        graha,
        placement: Placement::new(classify(sidereal[graha.index() as usize])),
    });

    Ok(Chart {
        ut,
        julian_day,
        ayanamsha_deg: correction.offset_deg(),
        lagna,
        grahas,
        houses,
        dasha: PLACEHOLDER_DASHA,
        yogas: PLACEHOLDER_YOGAS.to_vec(),
    })
}
