//! # Civil time and geographic input types
//!
//! This module defines the two validated input types of the engine:
//!
//! - [`LocalInstant`] — a civil date and time-of-day together with a UTC offset.
//! - [`GeoCoordinate`] — a latitude/longitude pair, which also drives the
//!   longitude-based UTC offset estimation when no explicit offset is given.
//!
//! Conversions between civil dates and Julian Day numbers go through
//! [hifitime](https://docs.rs/hifitime)'s [`Epoch`], the same time backbone the
//! rest of the crate relies on. Both types are immutable once constructed and
//! reject invalid input at the boundary, so the computation modules never see
//! an out-of-domain date or coordinate.

use hifitime::Epoch;
use serde::Serialize;
use std::fmt;

use crate::constants::{Degree, DEGREES_PER_HOUR, HOURS_PER_DAY, JulianDay};
use crate::elements::tables::Vaar;
use crate::panchanga_errors::PanchangaError;

/// A geographic coordinate in degrees.
///
/// Latitude is restricted to [-90, 90] and longitude to [-180, 180];
/// construction fails outside that domain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoCoordinate {
    pub latitude_deg: Degree,
    pub longitude_deg: Degree,
}

impl GeoCoordinate {
    /// Build a validated coordinate.
    ///
    /// Arguments
    /// ---------------
    /// * `latitude_deg`: geographic latitude in degrees, north positive
    /// * `longitude_deg`: geographic longitude in degrees, east positive
    ///
    /// Return
    /// ----------
    /// * The coordinate, or [`PanchangaError::CoordinateOutOfRange`] if either
    ///   component is outside its valid interval.
    pub fn new(latitude_deg: Degree, longitude_deg: Degree) -> Result<Self, PanchangaError> {
        if !(-90.0..=90.0).contains(&latitude_deg)
            || !(-180.0..=180.0).contains(&longitude_deg)
            || latitude_deg.is_nan()
            || longitude_deg.is_nan()
        {
            return Err(PanchangaError::CoordinateOutOfRange {
                lat: latitude_deg,
                lon: longitude_deg,
            });
        }
        Ok(GeoCoordinate {
            latitude_deg,
            longitude_deg,
        })
    }

    /// Estimate the UTC offset from the longitude alone.
    ///
    /// One time zone spans roughly 15° of longitude, so the offset is
    /// `round(longitude / 15)` hours. This is the fallback used when the
    /// caller supplies no explicit timezone.
    pub fn utc_offset_hours(&self) -> f64 {
        (self.longitude_deg / DEGREES_PER_HOUR).round()
    }
}

/// A civil instant: date, time-of-day, and the UTC offset it is expressed in.
///
/// The sole temporal input of the engine. Immutable; all arithmetic goes
/// through Julian Day conversion and returns a fresh value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LocalInstant {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    /// Offset of this civil time from UTC, in hours (east positive).
    pub utc_offset_hours: f64,
}

/// Number of days in a month of the Gregorian calendar.
fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if (year % 4 == 0 && year % 100 != 0) || year % 400 == 0 {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

impl LocalInstant {
    /// Build a validated civil instant.
    ///
    /// Arguments
    /// ---------------
    /// * `year`, `month`, `day`: Gregorian calendar date
    /// * `hour`, `minute`, `second`: local time-of-day
    /// * `utc_offset_hours`: offset of the local civil time from UTC
    ///
    /// Return
    /// ----------
    /// * The instant, or [`PanchangaError::InvalidDate`] for an impossible
    ///   calendar date or time-of-day.
    #[allow(clippy::too_many_arguments)]
    pub fn from_civil(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        utc_offset_hours: f64,
    ) -> Result<Self, PanchangaError> {
        if !(1..=12).contains(&month) || day == 0 || day > days_in_month(year, month) {
            return Err(PanchangaError::InvalidDate(format!(
                "{year:04}-{month:02}-{day:02}"
            )));
        }
        if hour > 23 || minute > 59 || second > 59 {
            return Err(PanchangaError::InvalidDate(format!(
                "{hour:02}:{minute:02}:{second:02}"
            )));
        }
        Ok(LocalInstant {
            year,
            month,
            day,
            hour,
            minute,
            second,
            utc_offset_hours,
        })
    }

    /// Parse a civil date string into a local instant.
    ///
    /// Accepted formats are `YYYY-MM-DD` and `YYYY-MM-DDTHH:MM:SS`. A
    /// date-only string gets a default time-of-day of local noon, the
    /// conventional reference moment for a daily Panchang.
    ///
    /// Arguments
    /// ---------------
    /// * `date_str`: the civil date string
    /// * `utc_offset_hours`: offset of the local civil time from UTC
    ///
    /// Return
    /// ----------
    /// * The parsed instant, or a format/date error.
    pub fn parse(date_str: &str, utc_offset_hours: f64) -> Result<Self, PanchangaError> {
        let bad_format = || PanchangaError::InvalidDateFormat(date_str.to_string());

        let (date_part, time_part) = match date_str.split_once('T') {
            Some((d, t)) => (d, Some(t)),
            None => (date_str.trim(), None),
        };

        let date_fields: Vec<&str> = date_part.split('-').collect();
        if date_fields.len() != 3 {
            return Err(bad_format());
        }
        let year: i32 = date_fields[0].parse().map_err(|_| bad_format())?;
        let month: u8 = date_fields[1].parse().map_err(|_| bad_format())?;
        let day: u8 = date_fields[2].parse().map_err(|_| bad_format())?;

        let (hour, minute, second) = match time_part {
            Some(t) => {
                let time_fields: Vec<&str> = t.split(':').collect();
                if time_fields.len() != 3 {
                    return Err(bad_format());
                }
                (
                    time_fields[0].parse().map_err(|_| bad_format())?,
                    time_fields[1].parse().map_err(|_| bad_format())?,
                    time_fields[2].parse().map_err(|_| bad_format())?,
                )
            }
            None => (12, 0, 0),
        };

        LocalInstant::from_civil(year, month, day, hour, minute, second, utc_offset_hours)
    }

    /// Convert this civil instant to a Julian Day number (UTC time scale).
    ///
    /// The local wall-clock time is first shifted to UTC by the stored offset,
    /// then converted through [`hifitime::Epoch`].
    pub fn to_jd(&self) -> JulianDay {
        let epoch = Epoch::from_gregorian_utc(
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
            0,
        );
        epoch.to_jde_utc_days() - self.utc_offset_hours / HOURS_PER_DAY
    }

    /// Rebuild a civil instant from a Julian Day number (UTC time scale).
    ///
    /// Arguments
    /// ---------------
    /// * `jd`: the Julian Day in UTC
    /// * `utc_offset_hours`: the offset the resulting wall-clock time should
    ///   be expressed in
    pub fn from_jd(jd: JulianDay, utc_offset_hours: f64) -> Self {
        // Half-second nudge, then truncation: rounds to the nearest civil second
        let local_epoch =
            Epoch::from_jde_utc(jd + utc_offset_hours / HOURS_PER_DAY + 0.5 / 86_400.0);
        let (year, month, day, hour, minute, second, _nanos) = local_epoch.to_gregorian_utc();
        LocalInstant {
            year,
            month,
            day,
            hour,
            minute,
            second,
            utc_offset_hours,
        }
    }

    /// Return the instant shifted by a (possibly fractional) number of days,
    /// keeping the same UTC offset.
    pub fn add_days(&self, days: f64) -> Self {
        LocalInstant::from_jd(self.to_jd() + days, self.utc_offset_hours)
    }

    /// Return the instant at a given fractional local hour of the same civil
    /// date (e.g. `6.25` → 06:15:00), keeping the same UTC offset.
    ///
    /// Hours outside [0, 24) spill into the neighbouring civil day.
    pub fn at_local_hour(&self, hours: f64) -> Self {
        let midnight = LocalInstant {
            hour: 0,
            minute: 0,
            second: 0,
            ..*self
        };
        midnight.add_days(hours / HOURS_PER_DAY)
    }

    /// The weekday (Vaar) of this civil date.
    ///
    /// Derived from the Julian Day of the local date at noon, so the civil
    /// date alone decides the weekday regardless of the time-of-day.
    pub fn weekday(&self) -> Vaar {
        let noon = LocalInstant {
            hour: 12,
            minute: 0,
            second: 0,
            ..*self
        };
        // Local JD, not UTC: the weekday belongs to the wall-clock date
        let jd_local = noon.to_jd() + self.utc_offset_hours / HOURS_PER_DAY;
        // JD 0.0 was a Monday noon; shift so 0 = Sunday
        let index = ((jd_local + 1.5).floor() as i64).rem_euclid(7) as u8;
        Vaar::from_index(index)
    }

    /// Day of year of this civil date (1 = January 1st).
    pub fn day_of_year(&self) -> u16 {
        let mut doy = self.day as u16;
        for m in 1..self.month {
            doy += days_in_month(self.year, m) as u16;
        }
        doy
    }
}

impl fmt::Display for LocalInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.utc_offset_hours < 0.0 { '-' } else { '+' };
        let abs = self.utc_offset_hours.abs();
        let offset_h = abs.trunc() as u8;
        let offset_m = ((abs - abs.trunc()) * 60.0).round() as u8;
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02} UTC{}{:02}:{:02}",
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
            sign,
            offset_h,
            offset_m
        )
    }
}

#[cfg(test)]
mod time_test {
    use super::*;

    #[test]
    fn test_to_jd_j2000() {
        let instant = LocalInstant::from_civil(2000, 1, 1, 12, 0, 0, 0.0).unwrap();
        assert_eq!(instant.to_jd(), 2451545.0);
    }

    #[test]
    fn test_jd_roundtrip_with_offset() {
        let instant = LocalInstant::from_civil(2024, 3, 15, 6, 30, 0, 5.5).unwrap();
        let back = LocalInstant::from_jd(instant.to_jd(), 5.5);
        assert_eq!(back, instant);
    }

    #[test]
    fn test_parse_date_only_defaults_to_noon() {
        let instant = LocalInstant::parse("2024-03-15", 5.5).unwrap();
        assert_eq!((instant.hour, instant.minute, instant.second), (12, 0, 0));
        assert_eq!((instant.year, instant.month, instant.day), (2024, 3, 15));
    }

    #[test]
    fn test_parse_with_time() {
        let instant = LocalInstant::parse("2024-03-15T06:12:44", 5.5).unwrap();
        assert_eq!((instant.hour, instant.minute, instant.second), (6, 12, 44));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(LocalInstant::parse("15/03/2024", 0.0).is_err());
        assert!(LocalInstant::parse("2024-13-01", 0.0).is_err());
        assert!(LocalInstant::parse("2023-02-29", 0.0).is_err());
        assert!(LocalInstant::parse("2024-03-15T25:00:00", 0.0).is_err());
    }

    #[test]
    fn test_leap_day_accepted() {
        assert!(LocalInstant::parse("2024-02-29", 0.0).is_ok());
        assert!(LocalInstant::parse("2000-02-29", 0.0).is_ok());
        assert!(LocalInstant::parse("1900-02-29", 0.0).is_err());
    }

    #[test]
    fn test_weekday() {
        // 2024-03-15 was a Friday
        let instant = LocalInstant::parse("2024-03-15", 5.5).unwrap();
        assert_eq!(instant.weekday(), Vaar::Shukravar);
        // 2000-01-01 was a Saturday
        let instant = LocalInstant::parse("2000-01-01", 0.0).unwrap();
        assert_eq!(instant.weekday(), Vaar::Shanivar);
    }

    #[test]
    fn test_day_of_year() {
        let instant = LocalInstant::parse("2024-03-15", 0.0).unwrap();
        assert_eq!(instant.day_of_year(), 75);
        let instant = LocalInstant::parse("2023-01-01", 0.0).unwrap();
        assert_eq!(instant.day_of_year(), 1);
        let instant = LocalInstant::parse("2024-12-31", 0.0).unwrap();
        assert_eq!(instant.day_of_year(), 366);
    }

    #[test]
    fn test_offset_estimation() {
        let delhi = GeoCoordinate::new(28.6139, 77.2090).unwrap();
        assert_eq!(delhi.utc_offset_hours(), 5.0);
        let greenwich = GeoCoordinate::new(51.4779, 0.0).unwrap();
        assert_eq!(greenwich.utc_offset_hours(), 0.0);
        let nyc = GeoCoordinate::new(40.7128, -74.0060).unwrap();
        assert_eq!(nyc.utc_offset_hours(), -5.0);
    }

    #[test]
    fn test_coordinate_rejects_out_of_range() {
        assert!(GeoCoordinate::new(91.0, 0.0).is_err());
        assert!(GeoCoordinate::new(0.0, 181.0).is_err());
        assert!(GeoCoordinate::new(-90.0, -180.0).is_ok());
    }

    #[test]
    fn test_at_local_hour() {
        let instant = LocalInstant::parse("2024-03-15", 5.5).unwrap();
        let sunrise_ish = instant.at_local_hour(6.5);
        assert_eq!((sunrise_ish.hour, sunrise_ish.minute), (6, 30));
        assert_eq!(sunrise_ish.day, 15);
    }

    #[test]
    fn test_display_format() {
        let instant = LocalInstant::from_civil(2024, 3, 15, 6, 12, 44, 5.5).unwrap();
        assert_eq!(instant.to_string(), "2024-03-15 06:12:44 UTC+05:30");
    }
}
