//! Sidereal time and the ecliptic longitude of the Ascendant (Lagna).
//!
//! Sources: Meeus, "Astronomical Algorithms" (2nd ed), Eq. 12.4 (GMST) and
//! Eq. 22.2 (mean obliquity); standard spherical astronomy for the
//! Ascendant: `tan(Asc) = cos(RAMC) / -(sin(RAMC) cos(eps) + tan(phi) sin(eps))`.
//!
//! All Julian Dates here are UT; the difference from UT1 is ignored.

use kundali_time::{J2000_JD, jd_to_centuries};

/// Greenwich Mean Sidereal Time in degrees `[0, 360)`.
pub fn gmst_deg(jd_ut: f64) -> f64 {
    let d = jd_ut - J2000_JD;
    let t = jd_to_centuries(jd_ut);
    let theta = 280.460_618_37 + 360.985_647_366_29 * d + 0.000_387_933 * t * t
        - t * t * t / 38_710_000.0;
    theta.rem_euclid(360.0)
}

/// Local Sidereal Time in degrees `[0, 360)` for an east-positive longitude.
pub fn local_sidereal_time_deg(jd_ut: f64, east_longitude_deg: f64) -> f64 {
    (gmst_deg(jd_ut) + east_longitude_deg).rem_euclid(360.0)
}

/// Mean obliquity of the ecliptic in degrees.
pub fn mean_obliquity_deg(t: f64) -> f64 {
    let arcsec = 84_381.448 + t * (-46.8150 + t * (-0.00059 + t * 0.001813));
    arcsec / 3600.0
}

/// Ascendant longitude in degrees `[0, 360)` from LST, latitude, obliquity.
pub fn ascendant_from_lst_deg(lst_deg: f64, latitude_deg: f64, obliquity_deg: f64) -> f64 {
    let (sin_lst, cos_lst) = lst_deg.to_radians().sin_cos();
    let (sin_eps, cos_eps) = obliquity_deg.to_radians().sin_cos();
    let tan_phi = latitude_deg.to_radians().tan();
    let asc = f64::atan2(cos_lst, -(sin_lst * cos_eps + tan_phi * sin_eps));
    asc.to_degrees().rem_euclid(360.0)
}

/// Tropical Ascendant longitude (mean equinox of date) in degrees `[0, 360)`.
pub fn ascendant_deg(jd_ut: f64, latitude_deg: f64, east_longitude_deg: f64) -> f64 {
    let lst = local_sidereal_time_deg(jd_ut, east_longitude_deg);
    let eps = mean_obliquity_deg(jd_to_centuries(jd_ut));
    ascendant_from_lst_deg(lst, latitude_deg, eps)
}
