//! # Muhurat Scheduler
//!
//! Partitions the sunrise–sunset interval into eight equal octants and
//! derives the day's named time windows from them:
//!
//! - **Rahu Kaal**, **Yamaganda Kaal**, **Gulika Kaal** — each occupies one
//!   octant of daylight; *which* octant depends on the weekday, because the
//!   three periods follow the planetary-hour sequence of the day rather than
//!   a fixed clock time. The octant tables are fixed 7-entry lookups,
//!   Sunday..Saturday.
//! - **Abhijit Muhurat** — the 48-minute window centered on solar noon.
//! - **Brahma Muhurat** — a 48-minute window ending 1h36m before sunrise.
//! - **Amrit Kaal** — the hour immediately preceding sunrise.
//!
//! All windows are expressed as civil-time instants, not durations. A polar
//! day has no sunrise/sunset to partition, so the scheduler consumes the
//! solar sentinel and yields no windows.

use serde::Serialize;

use crate::elements::tables::Vaar;
use crate::solar::{SolarDay, SunTimes};
use crate::time::LocalInstant;

/// Rahu Kaal octant (1-based) per weekday, Sunday..Saturday.
const RAHU_OCTANT: [u8; 7] = [8, 2, 7, 5, 6, 4, 3];

/// Yamaganda Kaal octant (1-based) per weekday, Sunday..Saturday.
const YAMAGANDA_OCTANT: [u8; 7] = [5, 4, 3, 2, 1, 7, 6];

/// Gulika Kaal octant (1-based) per weekday, Sunday..Saturday.
const GULIKA_OCTANT: [u8; 7] = [7, 6, 5, 4, 3, 2, 1];

/// Half-width of the Abhijit window around solar noon, in hours.
const ABHIJIT_HALF_WIDTH_HOURS: f64 = 0.4;

/// Length of the Brahma Muhurat window, in hours.
const BRAHMA_LENGTH_HOURS: f64 = 0.8;

/// Gap between the end of Brahma Muhurat and sunrise, in hours.
const BRAHMA_GAP_BEFORE_SUNRISE_HOURS: f64 = 1.6;

/// Length of the Amrit Kaal window before sunrise, in hours.
const AMRIT_LENGTH_HOURS: f64 = 1.0;

/// A named auspicious or inauspicious time window within a civil day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MuhuratWindow {
    pub label: &'static str,
    pub start: LocalInstant,
    pub end: LocalInstant,
}

impl MuhuratWindow {
    /// Window duration in hours.
    pub fn duration_hours(&self) -> f64 {
        (self.end.to_jd() - self.start.to_jd()) * 24.0
    }
}

/// One daylight octant as a window, 1-based octant index.
fn octant_window(label: &'static str, times: &SunTimes, octant: u8) -> MuhuratWindow {
    let octant_days = (times.sunset.to_jd() - times.sunrise.to_jd()) / 8.0;
    let start_jd = times.sunrise.to_jd() + (octant as f64 - 1.0) * octant_days;
    let offset = times.sunrise.utc_offset_hours;
    MuhuratWindow {
        label,
        start: LocalInstant::from_jd(start_jd, offset),
        end: LocalInstant::from_jd(start_jd + octant_days, offset),
    }
}

/// A window defined by its start hour offset from an anchor instant.
fn anchored_window(
    label: &'static str,
    anchor: &LocalInstant,
    start_offset_hours: f64,
    length_hours: f64,
) -> MuhuratWindow {
    let offset = anchor.utc_offset_hours;
    let start_jd = anchor.to_jd() + start_offset_hours / 24.0;
    MuhuratWindow {
        label,
        start: LocalInstant::from_jd(start_jd, offset),
        end: LocalInstant::from_jd(start_jd + length_hours / 24.0, offset),
    }
}

/// Compute the day's muhurat windows.
///
/// Arguments
/// ---------------
/// * `solar_day`: the solar clock output for the date
/// * `weekday`: the Vaar selecting the inauspicious octants
///
/// Return
/// ----------
/// * The six windows in a fixed order (Rahu, Yamaganda, Gulika, Abhijit,
///   Brahma, Amrit), or an empty list on a polar day.
pub fn muhurat_windows(solar_day: &SolarDay, weekday: Vaar) -> Vec<MuhuratWindow> {
    let Some(times) = solar_day.times() else {
        return Vec::new();
    };
    let day_index = weekday.index() as usize;

    vec![
        octant_window("Rahu Kaal", times, RAHU_OCTANT[day_index]),
        octant_window("Yamaganda Kaal", times, YAMAGANDA_OCTANT[day_index]),
        octant_window("Gulika Kaal", times, GULIKA_OCTANT[day_index]),
        anchored_window(
            "Abhijit Muhurat",
            &times.solar_noon,
            -ABHIJIT_HALF_WIDTH_HOURS,
            2.0 * ABHIJIT_HALF_WIDTH_HOURS,
        ),
        anchored_window(
            "Brahma Muhurat",
            &times.sunrise,
            -(BRAHMA_GAP_BEFORE_SUNRISE_HOURS + BRAHMA_LENGTH_HOURS),
            BRAHMA_LENGTH_HOURS,
        ),
        anchored_window("Amrit Kaal", &times.sunrise, -AMRIT_LENGTH_HOURS, AMRIT_LENGTH_HOURS),
    ]
}

#[cfg(test)]
mod muhurat_test {
    use super::*;
    use crate::solar::solar_times;
    use crate::time::GeoCoordinate;

    fn delhi_day() -> SolarDay {
        let instant = LocalInstant::parse("2024-03-15", 5.5).unwrap();
        let delhi = GeoCoordinate::new(28.6139, 77.2090).unwrap();
        solar_times(&instant, &delhi)
    }

    fn window<'a>(windows: &'a [MuhuratWindow], label: &str) -> &'a MuhuratWindow {
        windows.iter().find(|w| w.label == label).unwrap()
    }

    #[test]
    fn test_inauspicious_windows_are_one_octant_long() {
        let day = delhi_day();
        let windows = muhurat_windows(&day, Vaar::Somvar);
        let octant_hours = day.times().unwrap().day_length_hours / 8.0;
        for label in ["Rahu Kaal", "Yamaganda Kaal", "Gulika Kaal"] {
            let duration = window(&windows, label).duration_hours();
            assert!(
                (duration - octant_hours).abs() < 2.5 / 3600.0,
                "{label} lasts {duration}h, octant is {octant_hours}h"
            );
        }
    }

    #[test]
    fn test_inauspicious_windows_pairwise_disjoint() {
        let day = delhi_day();
        for vaar in crate::elements::tables::ALL_VAARS {
            let windows = muhurat_windows(&day, vaar);
            let octants: Vec<(f64, f64)> = ["Rahu Kaal", "Yamaganda Kaal", "Gulika Kaal"]
                .iter()
                .map(|l| {
                    let w = window(&windows, l);
                    (w.start.to_jd(), w.end.to_jd())
                })
                .collect();
            for i in 0..octants.len() {
                for j in (i + 1)..octants.len() {
                    let (s1, e1) = octants[i];
                    let (s2, e2) = octants[j];
                    // Allow shared endpoints from second rounding
                    assert!(
                        e1 <= s2 + 2.0 / 86_400.0 || e2 <= s1 + 2.0 / 86_400.0,
                        "windows {i} and {j} overlap on {}",
                        vaar.english()
                    );
                }
            }
        }
    }

    #[test]
    fn test_rahu_kaal_depends_on_weekday() {
        // Same sunrise/sunset, different weekday → different octant
        let day = delhi_day();
        let sunday = window(&muhurat_windows(&day, Vaar::Ravivar), "Rahu Kaal").start;
        let wednesday = window(&muhurat_windows(&day, Vaar::Budhvar), "Rahu Kaal").start;
        assert_ne!(sunday, wednesday);
    }

    #[test]
    fn test_abhijit_centered_on_noon() {
        let day = delhi_day();
        let windows = muhurat_windows(&day, Vaar::Guruvar);
        let abhijit = window(&windows, "Abhijit Muhurat");
        let noon_jd = day.times().unwrap().solar_noon.to_jd();
        let center = (abhijit.start.to_jd() + abhijit.end.to_jd()) / 2.0;
        assert!((center - noon_jd).abs() < 2.0 / 86_400.0);
        assert!((abhijit.duration_hours() - 0.8).abs() < 2.5 / 3600.0);
    }

    #[test]
    fn test_brahma_and_amrit_precede_sunrise() {
        let day = delhi_day();
        let windows = muhurat_windows(&day, Vaar::Shukravar);
        let sunrise_jd = day.times().unwrap().sunrise.to_jd();

        let brahma = window(&windows, "Brahma Muhurat");
        assert!((brahma.duration_hours() - 0.8).abs() < 2.5 / 3600.0);
        // Ends 1h36m before sunrise
        assert!((sunrise_jd - brahma.end.to_jd() - 1.6 / 24.0).abs() < 2.0 / 86_400.0);

        let amrit = window(&windows, "Amrit Kaal");
        assert!((amrit.duration_hours() - 1.0).abs() < 2.5 / 3600.0);
        assert!((sunrise_jd - amrit.end.to_jd()).abs() < 2.0 / 86_400.0);
    }

    #[test]
    fn test_polar_day_yields_no_windows() {
        let instant = LocalInstant::parse("2024-12-21", 2.0).unwrap();
        let arctic = GeoCoordinate::new(85.0, 30.0).unwrap();
        let day = solar_times(&instant, &arctic);
        assert!(muhurat_windows(&day, Vaar::Ravivar).is_empty());
    }
}
