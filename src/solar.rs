//! # Solar Clock
//!
//! Sunrise, sunset, solar noon, and day/night length for a date and
//! coordinate, from the classic declination + hour-angle model:
//!
//! 1. approximate the solar declination with a single sine of the day of
//!    year,
//! 2. combine it with the latitude into the sunrise hour angle
//!    `H = acos(−tan φ · tan δ)`,
//! 3. anchor the result on local solar noon converted to civil time with a
//!    longitude-based mean-time correction (no equation of time — this is a
//!    low-precision clock by design).
//!
//! At high latitudes the hour-angle equation has no real solution; the
//! module returns an explicit polar sentinel instead of a NaN, and that
//! branch is deliberate, not an unchecked domain error.

use serde::Serialize;

use crate::constants::{Degree, DEGREES_PER_HOUR, RADEG};
use crate::time::{GeoCoordinate, LocalInstant};

/// Obliquity amplitude of the single-term declination model.
const DECLINATION_AMPLITUDE_DEG: Degree = 23.44;

/// Day of year of the March equinox used by the declination model.
const EQUINOX_DAY_OF_YEAR: f64 = 81.0;

/// Sentinel for the polar day/night degenerate case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PolarDay {
    /// The Sun never sets on this date (midnight sun).
    PerpetualDay,
    /// The Sun never rises on this date (polar night).
    PerpetualNight,
}

/// The three solar anchors of a normal day plus the derived durations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SunTimes {
    pub sunrise: LocalInstant,
    pub solar_noon: LocalInstant,
    pub sunset: LocalInstant,
    pub day_length_hours: f64,
    pub night_length_hours: f64,
}

/// Result of the solar clock: either a normal day or a polar sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum SolarDay {
    Normal(SunTimes),
    Polar(PolarDay),
}

impl SolarDay {
    /// The sun times, when the day is not degenerate.
    pub fn times(&self) -> Option<&SunTimes> {
        match self {
            SolarDay::Normal(times) => Some(times),
            SolarDay::Polar(_) => None,
        }
    }
}

/// Approximate solar declination for a day of year, single sine term.
pub fn solar_declination_deg(day_of_year: u16) -> Degree {
    DECLINATION_AMPLITUDE_DEG
        * ((360.0 / 365.0) * (day_of_year as f64 - EQUINOX_DAY_OF_YEAR) * RADEG).sin()
}

/// Compute the solar anchors of the civil date carried by `instant`.
///
/// Arguments
/// ---------------
/// * `instant`: the civil date (its time-of-day is ignored) and the UTC
///   offset the anchors are reported in
/// * `coordinate`: the geographic coordinate driving declination geometry and
///   the longitude correction
///
/// Return
/// ----------
/// * [`SolarDay::Normal`] with sunrise < solar noon < sunset, or
///   [`SolarDay::Polar`] when `|tan φ · tan δ| > 1`.
pub fn solar_times(instant: &LocalInstant, coordinate: &GeoCoordinate) -> SolarDay {
    let declination_rad = solar_declination_deg(instant.day_of_year()) * RADEG;
    let latitude_rad = coordinate.latitude_deg * RADEG;

    // Hour-angle equation; out of [-1, 1] means the Sun never crosses the horizon
    let cos_hour_angle = -latitude_rad.tan() * declination_rad.tan();
    if cos_hour_angle > 1.0 {
        return SolarDay::Polar(PolarDay::PerpetualNight);
    }
    if cos_hour_angle < -1.0 {
        return SolarDay::Polar(PolarDay::PerpetualDay);
    }

    let half_day_hours = cos_hour_angle.acos() / RADEG / DEGREES_PER_HOUR;

    // Local solar noon in civil hours: mean-time correction between the
    // timezone meridian and the actual longitude
    let noon_hours = 12.0
        + (instant.utc_offset_hours * DEGREES_PER_HOUR - coordinate.longitude_deg)
            / DEGREES_PER_HOUR;

    let day_length_hours = 2.0 * half_day_hours;
    SolarDay::Normal(SunTimes {
        sunrise: instant.at_local_hour(noon_hours - half_day_hours),
        solar_noon: instant.at_local_hour(noon_hours),
        sunset: instant.at_local_hour(noon_hours + half_day_hours),
        day_length_hours,
        night_length_hours: 24.0 - day_length_hours,
    })
}
