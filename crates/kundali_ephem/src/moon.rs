//! Geocentric lunar longitude and the mean lunar node.
//!
//! Longitude: truncated periodic series from Meeus, *Astronomical
//! Algorithms* (2nd ed.), Chapter 47, Table 47.A, with the three additive
//! terms (A1, A2, L' - F). Referred to the mean equinox of date, no
//! nutation. The retained terms keep the error near 0.01 deg.
//!
//! Mean node: the fifth Delaunay argument (Omega) from IERS Conventions
//! 2010, Table 5.2e.

/// Mean lunar arguments in degrees: `(L', D, M, M', F)`.
fn mean_arguments(t: f64) -> (f64, f64, f64, f64, f64) {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let lp = 218.3164477 + 481_267.881_234_21 * t - 0.0015786 * t2 + t3 / 538_841.0
        - t4 / 65_194_000.0;
    let d = 297.8501921 + 445_267.111_403_4 * t - 0.0018819 * t2 + t3 / 545_868.0
        - t4 / 113_065_000.0;
    let m = 357.5291092 + 35_999.050_290_9 * t - 0.0001536 * t2 + t3 / 24_490_000.0;
    let mp = 134.9633964 + 477_198.867_505_5 * t + 0.0087414 * t2 + t3 / 69_699.0
        - t4 / 14_712_000.0;
    let f = 93.2720950 + 483_202.017_523_3 * t - 0.0036539 * t2 - t3 / 3_526_000.0
        + t4 / 863_310_000.0;
    (lp, d, m, mp, f)
}

/// Geocentric ecliptic longitude of the Moon, degrees (unnormalized).
///
/// `t` = Julian centuries since J2000.0.
pub fn moon_longitude_deg(t: f64) -> f64 {
    // Table 47.A: [D, M, M', F, coefficient in 1e-6 deg]
    #[rustfmt::skip]
    static TERMS: [[f64; 5]; 34] = [
        [0.0,  0.0,  1.0,  0.0,  6_288_774.0],
        [2.0,  0.0, -1.0,  0.0,  1_274_027.0],
        [2.0,  0.0,  0.0,  0.0,    658_314.0],
        [0.0,  0.0,  2.0,  0.0,    213_618.0],
        [0.0,  1.0,  0.0,  0.0,   -185_116.0],
        [0.0,  0.0,  0.0,  2.0,   -114_332.0],
        [2.0,  0.0, -2.0,  0.0,     58_793.0],
        [2.0, -1.0, -1.0,  0.0,     57_066.0],
        [2.0,  0.0,  1.0,  0.0,     53_322.0],
        [2.0, -1.0,  0.0,  0.0,     45_758.0],
        [0.0,  1.0, -1.0,  0.0,    -40_923.0],
        [1.0,  0.0,  0.0,  0.0,    -34_720.0],
        [0.0,  1.0,  1.0,  0.0,    -30_383.0],
        [2.0,  0.0,  0.0, -2.0,     15_327.0],
        [0.0,  0.0,  1.0,  2.0,    -12_528.0],
        [0.0,  0.0,  1.0, -2.0,     10_980.0],
        [4.0,  0.0, -1.0,  0.0,     10_675.0],
        [0.0,  0.0,  3.0,  0.0,     10_034.0],
        [4.0,  0.0, -2.0,  0.0,      8_548.0],
        [2.0,  1.0, -1.0,  0.0,     -7_888.0],
        [2.0,  1.0,  0.0,  0.0,     -6_766.0],
        [1.0,  0.0, -1.0,  0.0,     -5_163.0],
        [1.0,  1.0,  0.0,  0.0,      4_987.0],
        [2.0, -1.0,  1.0,  0.0,      4_036.0],
        [2.0,  0.0,  2.0,  0.0,      3_994.0],
        [4.0,  0.0,  0.0,  0.0,      3_861.0],
        [2.0,  0.0, -3.0,  0.0,      3_665.0],
        [0.0,  1.0, -2.0,  0.0,     -2_689.0],
        [2.0,  0.0, -1.0,  2.0,     -2_602.0],
        [2.0, -1.0, -2.0,  0.0,      2_390.0],
        [1.0,  0.0,  1.0,  0.0,     -2_348.0],
        [2.0, -2.0,  0.0,  0.0,      2_236.0],
        [0.0,  1.0,  2.0,  0.0,     -2_120.0],
        [0.0,  2.0,  0.0,  0.0,     -2_069.0],
    ];

    let (lp, d, m, mp, f) = mean_arguments(t);
    // Decreasing eccentricity of the Earth's orbit scales terms containing M.
    let e = 1.0 - 0.002516 * t - 0.0000074 * t * t;

    let (d, m, mp, f) = (d.to_radians(), m.to_radians(), mp.to_radians(), f.to_radians());
    let mut sum = 0.0_f64;
    for term in &TERMS {
        let arg = term[0] * d + term[1] * m + term[2] * mp + term[3] * f;
        let scale = match term[1].abs() as u8 {
            0 => 1.0,
            1 => e,
            _ => e * e,
        };
        sum += term[4] * scale * arg.sin();
    }

    let a1 = (119.75 + 131.849 * t).to_radians();
    let a2 = (53.09 + 479_264.290 * t).to_radians();
    sum += 3958.0 * a1.sin() + 1962.0 * (lp.to_radians() - f).sin() + 318.0 * a2.sin();

    lp + sum / 1_000_000.0
}

/// Mean longitude of the Moon's ascending node (Rahu), degrees (unnormalized).
///
/// `t` = Julian centuries since J2000.0. Regresses about 19.34 deg/year.
pub fn mean_node_deg(t: f64) -> f64 {
    let arcsec = 450_160.398036
        + t * (-6_962_890.5431 + t * (7.4722 + t * (0.007702 + t * -0.00005939)));
    arcsec / 3600.0
}
