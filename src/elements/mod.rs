//! # Element Resolver
//!
//! Maps the Sun/Moon ecliptic longitudes of an instant to the five Panchang
//! elements (Tithi, Nakshatra, Yoga, Karana, Vara is resolved from the civil
//! date in [`crate::time`]) and the Moon's Rashi, and computes for each
//! element the civil instant at which its current segment ends.
//!
//! ## End-time back-solving
//!
//! Every element is a fixed angular segment of one governing angle: the
//! Moon−Sun elongation (Tithi, Karana), the lunar longitude (Nakshatra,
//! Rashi), or the summed Sun+Moon longitude (Yoga). The resolver computes the
//! longitude of the *next* segment boundary and back-solves the crossing time
//! linearly with the angle's mean rate. The result is a clock time in the
//! caller's civil offset, not just a duration — the invariant is
//! `ends_at >= query instant` for every element.
//!
//! Inputs outside [0, 360) are clamped into the domain rather than rejected;
//! this is a best-effort approximation engine, not a validator.

pub mod tables;

use serde::Serialize;

use crate::constants::{
    Degree, ELONGATION_RATE_DEG_PER_DAY, KARANA_SEGMENT_DEG, MOON_RATE_DEG_PER_DAY,
    NAKSHATRA_SEGMENT_DEG, RASHI_SEGMENT_DEG, TITHI_SEGMENT_DEG, YOGA_RATE_DEG_PER_DAY,
    YOGA_SEGMENT_DEG,
};
use crate::ephemeris::SolarLunarLongitudes;
use crate::time::LocalInstant;
use tables::{
    karana_at_position, tithi_name, Karana, Masa, Nakshatra, Paksha, Rashi, RashiElement, Yoga,
    ALL_NAKSHATRAS, ALL_RASHIS, ALL_YOGAS,
};

/// The active Tithi (lunar day) and its upcoming boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TithiInfo {
    /// Absolute index in the lunar month, 1..=30.
    pub index: u8,
    pub name: &'static str,
    pub paksha: Paksha,
    /// Ordinal within the fortnight, 1..=15.
    pub day_in_paksha: u8,
    /// Civil instant at which the next tithi begins.
    pub ends_at: LocalInstant,
}

/// The Moon's active Nakshatra (lunar mansion) and its upcoming boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NakshatraInfo {
    /// Index 0..=26 (0 = Ashwini).
    pub index: u8,
    pub nakshatra: Nakshatra,
    pub name: &'static str,
    pub lord: &'static str,
    pub deity: &'static str,
    /// Quarter of the nakshatra, 1..=4.
    pub pada: u8,
    pub ends_at: LocalInstant,
}

/// The active Yoga of the summed longitudes and its upcoming boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YogaInfo {
    /// Index 0..=26 (0 = Vishkambha).
    pub index: u8,
    pub yoga: Yoga,
    pub name: &'static str,
    pub meaning: &'static str,
    pub ends_at: LocalInstant,
}

/// The active Karana (half-tithi) and its upcoming boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KaranaInfo {
    /// Index 0..=59 over the lunar month.
    pub index: u8,
    pub karana: Karana,
    pub name: &'static str,
    pub fixed: bool,
    pub ends_at: LocalInstant,
}

/// The Moon's zodiacal sign. Rashi has no end-time in the daily record; the
/// Moon stays in one sign for roughly two and a quarter days.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RashiInfo {
    /// Index 0..=11 (0 = Mesha).
    pub index: u8,
    pub rashi: Rashi,
    pub name: &'static str,
    pub element: RashiElement,
    pub ruling_planet: &'static str,
}

/// The full output of the resolver for one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResolvedElements {
    pub tithi: TithiInfo,
    pub nakshatra: NakshatraInfo,
    pub yoga: YogaInfo,
    pub karana: KaranaInfo,
    pub rashi: RashiInfo,
    /// Lunar month named for the Sun's rashi — an approximation of the
    /// Amanta month, sufficient for festival annotation.
    pub masa: Masa,
}

/// Clamp an angle into the [0, 360) working domain.
fn clamp_degrees(deg: Degree) -> Degree {
    let clamped = deg.rem_euclid(360.0);
    // rem_euclid of a tiny negative rounds up to exactly 360.0
    if clamped.is_nan() || clamped >= 360.0 {
        0.0
    } else {
        clamped
    }
}

/// Back-solve the civil instant at which a governing angle reaches its next
/// segment boundary, assuming the angle's mean rate.
///
/// Arguments
/// ---------------
/// * `current_deg`: the angle at the query instant, in [0, 360)
/// * `boundary_deg`: the next boundary of the active segment
/// * `rate_deg_per_day`: mean rate of the governing angle
/// * `instant`: the query instant the remaining arc is counted from
///
/// Return
/// ----------
/// * The boundary-crossing instant, always ≥ `instant`.
fn boundary_instant(
    current_deg: Degree,
    boundary_deg: Degree,
    rate_deg_per_day: f64,
    instant: &LocalInstant,
) -> LocalInstant {
    let remaining_deg = (boundary_deg - current_deg).rem_euclid(360.0);
    instant.add_days(remaining_deg / rate_deg_per_day)
}

/// Resolve the Tithi from the Moon−Sun elongation.
///
/// Index = `floor(elongation / 12) + 1` in 1..=30; the first fifteen belong
/// to the waxing Shukla Paksha, the rest to the waning Krishna Paksha.
pub fn tithi_from_elongation(elongation_deg: Degree, instant: &LocalInstant) -> TithiInfo {
    let elongation = clamp_degrees(elongation_deg);
    let index = (elongation / TITHI_SEGMENT_DEG) as u8 + 1;
    let (paksha, day_in_paksha) = if index <= 15 {
        (Paksha::Shukla, index)
    } else {
        (Paksha::Krishna, index - 15)
    };
    let boundary = index as f64 * TITHI_SEGMENT_DEG;
    TithiInfo {
        index,
        name: tithi_name(index),
        paksha,
        day_in_paksha,
        ends_at: boundary_instant(elongation, boundary, ELONGATION_RATE_DEG_PER_DAY, instant),
    }
}

/// Resolve the Nakshatra from the Moon's longitude.
pub fn nakshatra_from_longitude(moon_deg: Degree, instant: &LocalInstant) -> NakshatraInfo {
    let moon = clamp_degrees(moon_deg);
    let index = (moon / NAKSHATRA_SEGMENT_DEG) as u8;
    let nakshatra = ALL_NAKSHATRAS[index as usize];
    let within = moon - index as f64 * NAKSHATRA_SEGMENT_DEG;
    let pada = (within / (NAKSHATRA_SEGMENT_DEG / 4.0)) as u8 + 1;
    let boundary = (index as f64 + 1.0) * NAKSHATRA_SEGMENT_DEG;
    NakshatraInfo {
        index,
        nakshatra,
        name: nakshatra.name(),
        lord: nakshatra.lord(),
        deity: nakshatra.deity(),
        pada,
        ends_at: boundary_instant(moon, boundary, MOON_RATE_DEG_PER_DAY, instant),
    }
}

/// Resolve the Yoga from the summed Sun+Moon longitude.
pub fn yoga_from_combined(combined_deg: Degree, instant: &LocalInstant) -> YogaInfo {
    let combined = clamp_degrees(combined_deg);
    let index = (combined / YOGA_SEGMENT_DEG) as u8;
    let yoga = ALL_YOGAS[index as usize];
    let boundary = (index as f64 + 1.0) * YOGA_SEGMENT_DEG;
    YogaInfo {
        index,
        yoga,
        name: yoga.name(),
        meaning: yoga.meaning(),
        ends_at: boundary_instant(combined, boundary, YOGA_RATE_DEG_PER_DAY, instant),
    }
}

/// Resolve the Karana from the Moon−Sun elongation.
///
/// Index = `floor(elongation / 6) mod 60`; the four fixed karanas apply only
/// at the absolute half-tithi positions 1, 58, 59 and 60 of the lunar month.
pub fn karana_from_elongation(elongation_deg: Degree, instant: &LocalInstant) -> KaranaInfo {
    let elongation = clamp_degrees(elongation_deg);
    let index = ((elongation / KARANA_SEGMENT_DEG) as u8) % 60;
    let karana = karana_at_position(index + 1);
    let boundary = (index as f64 + 1.0) * KARANA_SEGMENT_DEG;
    KaranaInfo {
        index,
        karana,
        name: karana.name(),
        fixed: karana.is_fixed(),
        ends_at: boundary_instant(elongation, boundary, ELONGATION_RATE_DEG_PER_DAY, instant),
    }
}

/// Resolve the Moon's Rashi from its longitude.
pub fn rashi_from_longitude(moon_deg: Degree) -> RashiInfo {
    let moon = clamp_degrees(moon_deg);
    let index = (moon / RASHI_SEGMENT_DEG) as u8;
    let rashi = ALL_RASHIS[index as usize];
    RashiInfo {
        index,
        rashi,
        name: rashi.name(),
        element: rashi.element(),
        ruling_planet: rashi.ruling_planet(),
    }
}

/// Resolve all longitude-driven elements for one instant.
///
/// Arguments
/// ---------------
/// * `longitudes`: the Sun/Moon longitudes produced by
///   [`crate::ephemeris::longitudes`]
/// * `instant`: the query instant, carrying the civil offset end-times are
///   reported in
///
/// Return
/// ----------
/// * The five elements plus the Moon's rashi and the approximate masa.
pub fn resolve_elements(
    longitudes: &SolarLunarLongitudes,
    instant: &LocalInstant,
) -> ResolvedElements {
    let elongation = longitudes.elongation_deg();
    let combined = longitudes.combined_deg();
    let sun_rashi_index = (clamp_degrees(longitudes.sun_deg) / RASHI_SEGMENT_DEG) as u8;

    ResolvedElements {
        tithi: tithi_from_elongation(elongation, instant),
        nakshatra: nakshatra_from_longitude(longitudes.moon_deg, instant),
        yoga: yoga_from_combined(combined, instant),
        karana: karana_from_elongation(elongation, instant),
        rashi: rashi_from_longitude(longitudes.moon_deg),
        masa: Masa::from_sun_rashi_index(sun_rashi_index),
    }
}

#[cfg(test)]
mod elements_test {
    use super::*;
    use crate::constants::J2000_JD;
    use crate::ephemeris::longitudes;

    fn query_instant() -> LocalInstant {
        LocalInstant::from_civil(2024, 3, 15, 12, 0, 0, 5.5).unwrap()
    }

    #[test]
    fn test_ekadashi_before_boundary() {
        // Just below 132° of elongation: still the 11th tithi (Ekadashi)
        let instant = query_instant();
        let tithi = tithi_from_elongation(131.9999, &instant);
        assert_eq!(tithi.index, 11);
        assert_eq!(tithi.name, "Ekadashi");
        assert_eq!(tithi.paksha, Paksha::Shukla);
    }

    #[test]
    fn test_dwadashi_after_boundary() {
        // Just past 132°: Dwadashi has begun
        let instant = query_instant();
        let tithi = tithi_from_elongation(132.0001, &instant);
        assert_eq!(tithi.index, 12);
        assert_eq!(tithi.name, "Dwadashi");
    }

    #[test]
    fn test_tithi_end_time_is_linear_backsolve() {
        // At 130° the boundary is 132°, i.e. 2° of elongation away
        let instant = query_instant();
        let tithi = tithi_from_elongation(130.0, &instant);
        let expected_days = 2.0 / ELONGATION_RATE_DEG_PER_DAY;
        let actual_days = tithi.ends_at.to_jd() - instant.to_jd();
        assert!(
            (actual_days - expected_days).abs() < 2.0 / 86_400.0,
            "tithi end offset = {actual_days} days, expected {expected_days}"
        );
    }

    #[test]
    fn test_end_time_never_precedes_query() {
        let instant = query_instant();
        for k in 0..720 {
            let angle = k as f64 * 0.5;
            assert!(tithi_from_elongation(angle, &instant).ends_at.to_jd() >= instant.to_jd());
            assert!(
                nakshatra_from_longitude(angle, &instant).ends_at.to_jd() >= instant.to_jd()
            );
            assert!(yoga_from_combined(angle, &instant).ends_at.to_jd() >= instant.to_jd());
            assert!(
                karana_from_elongation(angle, &instant).ends_at.to_jd() >= instant.to_jd()
            );
        }
    }

    #[test]
    fn test_index_range_invariants() {
        let instant = query_instant();
        for k in 0..365 {
            let lon = longitudes(J2000_JD + k as f64);
            let resolved = resolve_elements(&lon, &instant);
            assert!((1..=30).contains(&resolved.tithi.index));
            assert!((0..=26).contains(&resolved.nakshatra.index));
            assert!((0..=26).contains(&resolved.yoga.index));
            assert!((0..=59).contains(&resolved.karana.index));
            assert!((0..=11).contains(&resolved.rashi.index));
            assert!((1..=4).contains(&resolved.nakshatra.pada));
        }
    }

    #[test]
    fn test_tithi_monotonic_over_lunar_month() {
        // Forward-moving time must never skip or reverse a tithi (mod 30)
        let instant = query_instant();
        let mut prev_index = None;
        let mut step_jd = J2000_JD;
        while step_jd < J2000_JD + 29.5 {
            let lon = longitudes(step_jd);
            let tithi = tithi_from_elongation(lon.elongation_deg(), &instant);
            if let Some(prev) = prev_index {
                let advance = (tithi.index as i16 - prev as i16).rem_euclid(30);
                assert!(
                    advance <= 1,
                    "tithi jumped from {prev} to {} at jd {step_jd}",
                    tithi.index
                );
            }
            prev_index = Some(tithi.index);
            step_jd += 0.25;
        }
    }

    #[test]
    fn test_purnima_and_amavasya_names() {
        let instant = query_instant();
        assert_eq!(tithi_from_elongation(175.0, &instant).name, "Purnima");
        assert_eq!(tithi_from_elongation(355.0, &instant).name, "Amavasya");
        let krishna = tithi_from_elongation(185.0, &instant);
        assert_eq!(krishna.paksha, Paksha::Krishna);
        assert_eq!(krishna.day_in_paksha, 1);
        assert_eq!(krishna.name, "Pratipada");
    }

    #[test]
    fn test_fixed_karana_at_month_edges() {
        let instant = query_instant();
        // First half-tithi of the month (elongation 0..6°)
        assert_eq!(karana_from_elongation(3.0, &instant).name, "Kimstughna");
        // Last three half-tithis (342..360°)
        assert_eq!(karana_from_elongation(343.0, &instant).name, "Shakuni");
        assert_eq!(karana_from_elongation(349.0, &instant).name, "Chatushpada");
        assert_eq!(karana_from_elongation(355.0, &instant).name, "Naga");
        // Movable cycle elsewhere
        assert_eq!(karana_from_elongation(7.0, &instant).name, "Bava");
    }

    #[test]
    fn test_rashi_lookup() {
        let rashi = rashi_from_longitude(95.0);
        assert_eq!(rashi.index, 3);
        assert_eq!(rashi.name, "Karka");
        assert_eq!(rashi.element, RashiElement::Water);
        let rashi = rashi_from_longitude(359.9);
        assert_eq!(rashi.name, "Meena");
    }

    #[test]
    fn test_out_of_domain_input_is_clamped() {
        let instant = query_instant();
        let wrapped = tithi_from_elongation(372.0, &instant);
        let direct = tithi_from_elongation(12.0, &instant);
        assert_eq!(wrapped.index, direct.index);
        let negative = nakshatra_from_longitude(-10.0, &instant);
        assert_eq!(negative.index, (350.0_f64 / NAKSHATRA_SEGMENT_DEG) as u8);
    }
}
