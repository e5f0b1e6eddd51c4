//! # Low-precision solar and lunar ephemeris
//!
//! Truncated mean-longitude series for the Sun and the Moon, evaluated in
//! Julian centuries since J2000.0, each corrected by its dominant anomaly
//! terms. The target accuracy is sub-degree, which is what distinguishing
//! 12°-wide Tithi segments and 13°20'-wide Nakshatra segments requires;
//! this is deliberately not an arc-second ephemeris.
//!
//! The coefficients are the standard low-precision values (Meeus,
//! *Astronomical Algorithms*): the solar equation of center with two sine
//! terms, and the two dominant lunar terms (Evection folded into the
//! `2D − M'` argument) plus the Variation term in `2D`.

use crate::constants::{Degree, DAYS_PER_CENTURY, J2000_JD, JulianDay, RADEG};

/// Geocentric ecliptic longitudes of the Sun and the Moon at one instant,
/// both normalized to [0, 360).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarLunarLongitudes {
    pub sun_deg: Degree,
    pub moon_deg: Degree,
}

impl SolarLunarLongitudes {
    /// Moon−Sun elongation in degrees [0, 360), the angle that defines
    /// Tithi and Karana.
    pub fn elongation_deg(&self) -> Degree {
        (self.moon_deg - self.sun_deg).rem_euclid(360.0)
    }

    /// Sum of the two longitudes modulo 360, the angle that defines Yoga.
    pub fn combined_deg(&self) -> Degree {
        (self.sun_deg + self.moon_deg).rem_euclid(360.0)
    }
}

/// Julian centuries elapsed since J2000.0.
fn julian_centuries(jd: JulianDay) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}

/// Geometric solar longitude from the mean longitude and the equation of
/// center, in degrees [0, 360).
fn sun_longitude_deg(t: f64) -> Degree {
    // Mean longitude and mean anomaly of the Sun
    let l0 = 280.46646 + 36000.76983 * t + 0.0003032 * t * t;
    let m = (357.52911 + 35999.05029 * t - 0.0001537 * t * t) * RADEG;

    // Equation of center, first two harmonics of the mean anomaly
    let center = (1.914602 - 0.004817 * t - 0.000014 * t * t) * m.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m).sin()
        + 0.000289 * (3.0 * m).sin();

    (l0 + center).rem_euclid(360.0)
}

/// Lunar longitude from the mean longitude corrected by the three dominant
/// periodic terms, in degrees [0, 360).
fn moon_longitude_deg(t: f64) -> Degree {
    // Mean longitude, mean anomaly, and mean elongation of the Moon
    let l = 218.3164477 + 481267.88123421 * t;
    let m_moon = (134.9633964 + 477198.8675055 * t) * RADEG;
    let d = (297.8501921 + 445267.1114034 * t) * RADEG;

    // Dominant periodic corrections: principal anomaly, Evection, Variation
    let correction = 6.288774 * m_moon.sin()
        + 1.274027 * (2.0 * d - m_moon).sin()
        + 0.658314 * (2.0 * d).sin();

    (l + correction).rem_euclid(360.0)
}

/// Compute the Sun and Moon ecliptic longitudes for a Julian Day.
///
/// Always returns a value: invalid calendar dates are rejected upstream by
/// the [`LocalInstant`](crate::time::LocalInstant) constructor, never here.
///
/// Arguments
/// ---------------
/// * `jd`: the Julian Day (UTC) of the requested instant
///
/// Return
/// ----------
/// * Both longitudes, each in degrees [0, 360).
pub fn longitudes(jd: JulianDay) -> SolarLunarLongitudes {
    let t = julian_centuries(jd);
    SolarLunarLongitudes {
        sun_deg: sun_longitude_deg(t),
        moon_deg: moon_longitude_deg(t),
    }
}

/// Illuminated fraction of the Moon's disk from the Moon−Sun elongation.
///
/// `(1 − cos e) / 2`: 0 at new moon, 1 at full moon.
pub fn phase_fraction(elongation_deg: Degree) -> f64 {
    (1.0 - (elongation_deg * RADEG).cos()) / 2.0
}

/// Common English name of the lunar phase for a given elongation.
///
/// The circle is split into eight 45° sectors centered on the four principal
/// phases.
pub fn phase_name(elongation_deg: Degree) -> &'static str {
    let e = elongation_deg.rem_euclid(360.0);
    if !(22.5..337.5).contains(&e) {
        return "New Moon";
    }
    match ((e - 22.5) / 45.0).floor() as u8 {
        0 => "Waxing Crescent",
        1 => "First Quarter",
        2 => "Waxing Gibbous",
        3 => "Full Moon",
        4 => "Waning Gibbous",
        5 => "Last Quarter",
        _ => "Waning Crescent",
    }
}
