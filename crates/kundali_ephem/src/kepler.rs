//! Heliocentric planet positions from mean Keplerian elements.
//!
//! Elements and their linear rates are the "Keplerian Elements for
//! Approximate Positions of the Major Planets" (Standish, JPL), Table 1,
//! valid from 1800-01-01 through the end of 2050. Positions are in the
//! J2000 ecliptic frame, in AU. Accuracy is on the order of arcminutes for
//! the inner planets and somewhat worse for Jupiter and Saturn, which is
//! ample for sign, nakshatra and pada classification away from boundaries.

use std::f64::consts::TAU;

use crate::error::EphemerisError;

/// Orbits carried by the element table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orbit {
    Mercury,
    Venus,
    EarthMoonBarycenter,
    Mars,
    Jupiter,
    Saturn,
}

impl Orbit {
    const fn row(self) -> usize {
        match self {
            Self::Mercury => 0,
            Self::Venus => 1,
            Self::EarthMoonBarycenter => 2,
            Self::Mars => 3,
            Self::Jupiter => 4,
            Self::Saturn => 5,
        }
    }
}

// Each row: [a, a_dot, e, e_dot, I, I_dot, L, L_dot, varpi, varpi_dot, Omega, Omega_dot]
// a in AU, angles in degrees, rates per Julian century.
#[rustfmt::skip]
static ELEMENTS: [[f64; 12]; 6] = [
    // Mercury
    [0.38709927,  0.00000037, 0.20563593,  0.00001906,  7.00497902, -0.00594749,
     252.25032350, 149472.67411175,  77.45779628,  0.16047689,  48.33076593, -0.12534081],
    // Venus
    [0.72333566,  0.00000390, 0.00677672, -0.00004107,  3.39467605, -0.00078890,
     181.97909950,  58517.81538729, 131.60246718,  0.00268329,  76.67984255, -0.27769418],
    // Earth-Moon barycenter
    [1.00000261,  0.00000562, 0.01671123, -0.00004392, -0.00001531, -0.01294668,
     100.46457166,  35999.37244981, 102.93768193,  0.32327364,   0.0,          0.0],
    // Mars
    [1.52371034,  0.00001847, 0.09339410,  0.00007882,  1.84969142, -0.00813131,
      -4.55343205,  19140.30268499, -23.94362959,  0.44441088,  49.55953891, -0.29257343],
    // Jupiter
    [5.20288700, -0.00011607, 0.04838624, -0.00013253,  1.30439695, -0.00183714,
      34.39644051,   3034.74612775,  14.72847983,  0.21252668, 100.47390909,  0.20469106],
    // Saturn
    [9.53667594, -0.00125060, 0.05386179, -0.00050991,  2.48599187,  0.00193609,
      49.95424423,   1222.49362201,  92.59887831, -0.41897216, 113.66242448, -0.28867794],
];

const KEPLER_TOLERANCE_RAD: f64 = 1e-12;
const KEPLER_MAX_ITER: usize = 30;

/// Solve Kepler's equation `E - e sin E = M` for the eccentric anomaly.
///
/// Newton iteration; both angles in radians.
pub fn eccentric_anomaly(mean_anomaly: f64, e: f64) -> Result<f64, EphemerisError> {
    let m = mean_anomaly.rem_euclid(TAU);
    let mut ecc = if e < 0.8 { m } else { std::f64::consts::PI };
    for _ in 0..KEPLER_MAX_ITER {
        let delta = (ecc - e * ecc.sin() - m) / (1.0 - e * ecc.cos());
        ecc -= delta;
        if delta.abs() < KEPLER_TOLERANCE_RAD {
            return Ok(ecc);
        }
    }
    Err(EphemerisError::NoConvergence("Kepler equation"))
}

/// Heliocentric J2000 ecliptic position `[x, y, z]` in AU.
///
/// `t` = Julian centuries since J2000.0.
pub fn heliocentric_position(orbit: Orbit, t: f64) -> Result<[f64; 3], EphemerisError> {
    let el = &ELEMENTS[orbit.row()];
    let a = el[0] + el[1] * t;
    let e = el[2] + el[3] * t;
    let incl = (el[4] + el[5] * t).to_radians();
    let mean_lon = el[6] + el[7] * t;
    let varpi = el[8] + el[9] * t;
    let node = el[10] + el[11] * t;

    let arg_peri = (varpi - node).to_radians();
    let node = node.to_radians();
    let ecc = eccentric_anomaly((mean_lon - varpi).to_radians(), e)?;

    // Position in the orbital plane, x' toward perihelion.
    let xp = a * (ecc.cos() - e);
    let yp = a * (1.0 - e * e).sqrt() * ecc.sin();

    let (sw, cw) = arg_peri.sin_cos();
    let (so, co) = node.sin_cos();
    let (si, ci) = incl.sin_cos();

    let x = (cw * co - sw * so * ci) * xp + (-sw * co - cw * so * ci) * yp;
    let y = (cw * so + sw * co * ci) * xp + (-sw * so + cw * co * ci) * yp;
    let z = (sw * si) * xp + (cw * si) * yp;
    Ok([x, y, z])
}

/// Geocentric J2000 ecliptic longitude (degrees, unnormalized) of an orbit.
///
/// The Earth is approximated by the Earth-Moon barycenter; the resulting
/// parallax is below 0.002 deg for the Sun and smaller for the planets.
pub fn geocentric_longitude_j2000_deg(orbit: Orbit, t: f64) -> Result<f64, EphemerisError> {
    let earth = heliocentric_position(Orbit::EarthMoonBarycenter, t)?;
    let target = if orbit == Orbit::EarthMoonBarycenter {
        [0.0; 3]
    } else {
        heliocentric_position(orbit, t)?
    };
    let dx = target[0] - earth[0];
    let dy = target[1] - earth[1];
    Ok(dy.atan2(dx).to_degrees())
}

/// Geocentric J2000 ecliptic longitude of the Sun, degrees.
pub fn sun_longitude_j2000_deg(t: f64) -> Result<f64, EphemerisError> {
    // The Sun is at the heliocentric origin.
    geocentric_longitude_j2000_deg(Orbit::EarthMoonBarycenter, t)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(deg: f64) -> f64 {
        deg.rem_euclid(360.0)
    }

    #[test]
    fn kepler_circular_orbit_is_identity() {
        let m = 1.234;
        assert!((eccentric_anomaly(m, 0.0).unwrap() - m).abs() < 1e-12);
    }

    #[test]
    fn kepler_satisfies_equation() {
        for &e in &[0.0167, 0.2056, 0.5, 0.9] {
            for &m in &[0.1, 1.0, 2.5, 3.1, 5.9] {
                let ecc = eccentric_anomaly(m, e).unwrap();
                let resid = ecc - e * ecc.sin() - m;
                assert!(resid.abs() < 1e-10, "e={e} M={m}: residual {resid}");
            }
        }
    }

    #[test]
    fn earth_distance_about_one_au() {
        let p = heliocentric_position(Orbit::EarthMoonBarycenter, 0.0).unwrap();
        let r = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt();
        assert!((r - 0.983).abs() < 0.01, "r = {r}");
    }

    #[test]
    fn sun_at_j2000() {
        // Geometric solar longitude at 2000-Jan-01 12:00 is about 280.37.
        let lon = norm(sun_longitude_j2000_deg(0.0).unwrap());
        assert!((lon - 280.37).abs() < 0.1, "sun = {lon}");
    }

    #[test]
    fn sun_advances_about_one_degree_per_day() {
        let day = 1.0 / 36525.0;
        let a = sun_longitude_j2000_deg(0.0).unwrap();
        let b = sun_longitude_j2000_deg(day).unwrap();
        let step = norm(b - a);
        assert!((step - 1.019).abs() < 0.02, "daily motion = {step}");
    }

    #[test]
    fn mercury_and_venus_stay_near_the_sun() {
        for &t in &[-1.5, -0.5, 0.0, 0.24, 0.5] {
            let sun = sun_longitude_j2000_deg(t).unwrap();
            for (orbit, max_elong) in [(Orbit::Mercury, 28.5), (Orbit::Venus, 48.0)] {
                let lon = geocentric_longitude_j2000_deg(orbit, t).unwrap();
                let mut d = norm(lon - sun);
                if d > 180.0 {
                    d = 360.0 - d;
                }
                assert!(d <= max_elong, "{orbit:?} t={t}: elongation {d}");
            }
        }
    }
}
