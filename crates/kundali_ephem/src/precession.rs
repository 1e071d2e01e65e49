//! Precession of the equinox and the Lahiri ayanamsha.
//!
//! The general precession p_A is the accumulated westward motion of the
//! vernal equinox along the ecliptic since J2000.0. Adding it to a J2000
//! ecliptic longitude refers that longitude to the mean equinox of date;
//! adding it to a J2000 ayanamsha value gives the ayanamsha of date.
//!
//! Source: Capitaine, Wallace & Chapront 2003 (IAU 2006), Table 1.

/// Lahiri (Chitrapaksha) ayanamsha at J2000.0, degrees.
///
/// Spica at 0 deg Libra sidereal (Calendar Reform Committee, 1957).
pub const LAHIRI_J2000_DEG: f64 = 23.853;

/// IAU 2006 general precession in ecliptic longitude, degrees.
///
/// `t` = Julian centuries since J2000.0. About 1.397 deg per century.
pub fn general_precession_deg(t: f64) -> f64 {
    let arcsec = t * (5028.796195
        + t * (1.1054348 + t * (0.00007964 + t * (-0.000023857 + t * -0.0000000383))));
    arcsec / 3600.0
}

/// Lahiri ayanamsha of date, degrees.
pub fn lahiri_ayanamsha_deg(t: f64) -> f64 {
    LAHIRI_J2000_DEG + general_precession_deg(t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_at_j2000() {
        assert_eq!(general_precession_deg(0.0), 0.0);
        assert_eq!(lahiri_ayanamsha_deg(0.0), LAHIRI_J2000_DEG);
    }

    #[test]
    fn one_century_drift() {
        let p = general_precession_deg(1.0);
        assert!((p - 1.397).abs() < 0.01, "p_A(1) = {p}");
    }

    #[test]
    fn annual_rate_about_fifty_arcsec() {
        let p = general_precession_deg(0.01) * 3600.0;
        assert!((p - 50.29).abs() < 0.1, "p_A(0.01) = {p} arcsec");
    }

    #[test]
    fn lahiri_smaller_in_the_past() {
        assert!(lahiri_ayanamsha_deg(-1.0) < LAHIRI_J2000_DEG);
        // 1900: roughly 22.46 deg
        let aya_1900 = lahiri_ayanamsha_deg(-1.0);
        assert!((aya_1900 - 22.46).abs() < 0.02, "1900 = {aya_1900}");
    }
}
