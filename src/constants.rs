//! # Constants and type definitions for Panchanga
//!
//! This module centralizes the **angular constants**, **mean motion rates**, and
//! **common type definitions** used throughout the `panchanga` library.
//!
//! ## Overview
//!
//! - Epoch and calendar constants (J2000.0, Julian century)
//! - Unit conversions (degrees ↔ radians, days ↔ hours)
//! - Segment widths of the Panchang elements (Tithi, Nakshatra, Yoga, Karana)
//! - Mean angular rates used for boundary back-solving
//!
//! These definitions are used by all main modules, including the ephemeris
//! series, the element resolver, and the muhurat scheduler.

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// An angle expressed in degrees.
pub type Degree = f64;

/// A Julian Day number (days since -4712-01-01 12:00 UT).
pub type JulianDay = f64;

// -------------------------------------------------------------------------------------------------
// Epoch and calendar constants
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Julian Day of the J2000.0 epoch (2000-01-01 12:00)
pub const J2000_JD: JulianDay = 2_451_545.0;

/// Number of days in a Julian century
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Number of hours in a civil day
pub const HOURS_PER_DAY: f64 = 24.0;

/// Degrees of Earth rotation per hour, used for longitude → UTC-offset estimation
pub const DEGREES_PER_HOUR: f64 = 15.0;

// -------------------------------------------------------------------------------------------------
// Panchang element segment widths
// -------------------------------------------------------------------------------------------------

/// Width of one Tithi in Moon−Sun elongation: 360° / 30
pub const TITHI_SEGMENT_DEG: Degree = 12.0;

/// Width of one Nakshatra in lunar longitude: 360° / 27 (13°20')
pub const NAKSHATRA_SEGMENT_DEG: Degree = 360.0 / 27.0;

/// Width of one Yoga in the summed Sun+Moon longitude: 360° / 27
pub const YOGA_SEGMENT_DEG: Degree = 360.0 / 27.0;

/// Width of one Karana (half-Tithi) in elongation: 360° / 60
pub const KARANA_SEGMENT_DEG: Degree = 6.0;

/// Width of one Rashi (zodiacal sign) in lunar longitude: 360° / 12
pub const RASHI_SEGMENT_DEG: Degree = 30.0;

// -------------------------------------------------------------------------------------------------
// Mean angular rates (degrees per day), used for linear end-time back-solving
// -------------------------------------------------------------------------------------------------

/// Mean motion of the Sun along the ecliptic
pub const SUN_RATE_DEG_PER_DAY: f64 = 0.985_647_3;

/// Mean motion of the Moon along the ecliptic
pub const MOON_RATE_DEG_PER_DAY: f64 = 13.176_358;

/// Mean rate of the Moon−Sun elongation (Moon rate − Sun rate)
pub const ELONGATION_RATE_DEG_PER_DAY: f64 = MOON_RATE_DEG_PER_DAY - SUN_RATE_DEG_PER_DAY;

/// Mean rate of the Yoga angle (Sun rate + Moon rate)
pub const YOGA_RATE_DEG_PER_DAY: f64 = MOON_RATE_DEG_PER_DAY + SUN_RATE_DEG_PER_DAY;
