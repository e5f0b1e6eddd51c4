//! # Panchanga: the engine façade
//!
//! This module defines the [`Panchanga`] struct, the central façade that
//! wires together:
//!
//! 1. **Environment state** ([`PanchangaEnv`](crate::env_state::PanchangaEnv)) —
//!    the bounded HTTP client used only by verification.
//! 2. **The pure computation pipeline** — ephemeris → element resolver +
//!    solar clock → muhurat scheduler → occasion annotator.
//! 3. **The verification orchestrator** — the optional best-effort diff
//!    against a secondary scraped source.
//!
//! The façade exposes one logical operation,
//! [`compute_record`](Panchanga::compute_record): civil date string plus
//! coordinate in, one immutable [`PanchangRecord`] out. The only hard
//! failure is invalid input; a polar location or an unreachable secondary
//! source degrades the record's data, never the call.
//!
//! ## Typical usage
//!
//! ```rust
//! use panchanga::panchanga::Panchanga;
//!
//! let engine = Panchanga::new();
//! let record = engine
//!     .compute_record("2024-03-15", 28.6139, 77.2090, Some("New Delhi"))
//!     .unwrap();
//! assert_eq!(record.vaar.english(), "Friday");
//! ```
//!
//! With no explicit timezone, the UTC offset is estimated from the longitude
//! (one hour per 15°). All five computation stages are pure and share no
//! mutable state, so one `Panchanga` may serve concurrent requests freely;
//! only VERIFY performs I/O, under the environment's global timeout.

use std::time::Duration;

use crate::elements::resolve_elements;
use crate::env_state::PanchangaEnv;
use crate::ephemeris::{longitudes, phase_fraction, phase_name};
use crate::muhurat::muhurat_windows;
use crate::occasions::occasions;
use crate::panchanga_errors::PanchangaError;
use crate::record::{MoonPhase, PanchangRecord, Provenance};
use crate::solar::solar_times;
use crate::time::{GeoCoordinate, LocalInstant};
use crate::verify::verify_record;

/// Provenance label of the primary computation path.
const COMPUTATION_METHOD: &str = "low-precision solar/lunar longitude series";

/// Default bound on the secondary source fetch.
const DEFAULT_VERIFY_TIMEOUT: Duration = Duration::from_secs(8);

/// Configuration of the optional VERIFY stage.
#[derive(Debug, Clone)]
pub struct VerifyConfig {
    /// Secondary source URL template with `{date}`, `{lat}`, `{lon}`
    /// placeholders. `None` disables verification entirely.
    pub source_url: Option<String>,
    /// Global timeout of each secondary fetch.
    pub timeout: Duration,
    /// Extra attempts after a failed fetch. At most one.
    pub max_retries: usize,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        VerifyConfig {
            source_url: None,
            timeout: DEFAULT_VERIFY_TIMEOUT,
            max_retries: 1,
        }
    }
}

/// The Panchang computation engine.
#[derive(Debug, Clone)]
pub struct Panchanga {
    env: PanchangaEnv,
    verify: VerifyConfig,
}

impl Default for Panchanga {
    fn default() -> Self {
        Self::new()
    }
}

impl Panchanga {
    /// Construct an engine with verification disabled.
    ///
    /// In this configuration `compute_record` performs no I/O at all and is
    /// a pure function of its inputs.
    pub fn new() -> Self {
        Self::with_config(VerifyConfig::default())
    }

    /// Construct an engine that verifies each record against a secondary
    /// source.
    ///
    /// Arguments
    /// ---------------
    /// * `source_url`: URL template of the secondary rendering, with
    ///   `{date}`, `{lat}`, `{lon}` placeholders
    pub fn with_verification(source_url: impl Into<String>) -> Self {
        Self::with_config(VerifyConfig {
            source_url: Some(source_url.into()),
            ..VerifyConfig::default()
        })
    }

    /// Construct an engine from an explicit verification configuration.
    pub fn with_config(verify: VerifyConfig) -> Self {
        Panchanga {
            env: PanchangaEnv::new(verify.timeout),
            verify,
        }
    }

    /// Compute the full Panchang record for a civil date and coordinate.
    ///
    /// State machine: COMPUTE → (optional) VERIFY → ASSEMBLE. COMPUTE always
    /// runs synchronously and cannot fail after input validation; VERIFY is
    /// attempted only when a secondary source is configured and its failures
    /// are absorbed into `verified = false`.
    ///
    /// Arguments
    /// ---------------
    /// * `date_str`: civil date, `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM:SS`
    ///   (date-only defaults to local noon)
    /// * `latitude_deg`, `longitude_deg`: the coordinate; also supplies the
    ///   UTC offset estimate
    /// * `city_hint`: optional place name copied into the record
    ///
    /// Return
    /// ----------
    /// * The record, or [`PanchangaError`] for an invalid date or coordinate —
    ///   the only failing path.
    pub fn compute_record(
        &self,
        date_str: &str,
        latitude_deg: f64,
        longitude_deg: f64,
        city_hint: Option<&str>,
    ) -> Result<PanchangRecord, PanchangaError> {
        // Input validation: the single hard-failure boundary
        let coordinate = GeoCoordinate::new(latitude_deg, longitude_deg)?;
        let instant = LocalInstant::parse(date_str, coordinate.utc_offset_hours())?;

        // COMPUTE
        let lon_pair = longitudes(instant.to_jd());
        let elements = resolve_elements(&lon_pair, &instant);
        let vaar = instant.weekday();
        let solar = solar_times(&instant, &coordinate);
        let muhurats = muhurat_windows(&solar, vaar);
        let day_occasions = occasions(elements.tithi.name, elements.masa, vaar);
        let elongation = lon_pair.elongation_deg();

        let mut record = PanchangRecord {
            instant,
            coordinate,
            city: city_hint.map(str::to_string),
            vaar,
            elements,
            moon_phase: MoonPhase {
                fraction: phase_fraction(elongation),
                name: phase_name(elongation),
            },
            solar,
            muhurats,
            occasions: day_occasions,
            provenance: Provenance {
                method: COMPUTATION_METHOD,
                verified: false,
                comparison: None,
            },
        };

        // VERIFY + ASSEMBLE
        if let Some(url_template) = &self.verify.source_url {
            if let Some(comparison) =
                verify_record(&self.env, url_template, self.verify.max_retries.min(1), &record)
            {
                record.provenance.verified = comparison.iter().all(|c| c.matched);
                record.provenance.comparison = Some(comparison);
            }
        }

        Ok(record)
    }
}

#[cfg(test)]
mod panchanga_test {
    use super::*;

    #[test]
    fn test_invalid_inputs_rejected_before_compute() {
        let engine = Panchanga::new();
        assert!(engine.compute_record("not-a-date", 28.6, 77.2, None).is_err());
        assert!(engine.compute_record("2024-02-30", 28.6, 77.2, None).is_err());
        assert!(engine.compute_record("2024-03-15", 99.0, 77.2, None).is_err());
        assert!(engine.compute_record("2024-03-15", 28.6, 190.0, None).is_err());
    }

    #[test]
    fn test_unverified_provenance_by_default() {
        let engine = Panchanga::new();
        let record = engine
            .compute_record("2024-03-15", 28.6139, 77.2090, Some("New Delhi"))
            .unwrap();
        assert!(!record.provenance.verified);
        assert!(record.provenance.comparison.is_none());
        assert_eq!(record.provenance.method, COMPUTATION_METHOD);
        assert_eq!(record.city.as_deref(), Some("New Delhi"));
    }

    #[test]
    fn test_unreachable_secondary_degrades_gracefully() {
        // A closed localhost port: the fetch fails fast and VERIFY is skipped
        let engine = Panchanga::with_config(VerifyConfig {
            source_url: Some("http://127.0.0.1:1/panchang?d={date}".to_string()),
            timeout: Duration::from_millis(200),
            max_retries: 1,
        });
        let record = engine
            .compute_record("2024-03-15", 28.6139, 77.2090, None)
            .unwrap();
        assert!(!record.provenance.verified);
        assert!(record.provenance.comparison.is_none());
    }

    #[test]
    fn test_idempotent_serialization() {
        let engine = Panchanga::new();
        let first = engine
            .compute_record("2024-03-15T06:00:00", 28.6139, 77.2090, None)
            .unwrap();
        let second = engine
            .compute_record("2024-03-15T06:00:00", 28.6139, 77.2090, None)
            .unwrap();
        let a = serde_json::to_string(&first).unwrap();
        let b = serde_json::to_string(&second).unwrap();
        assert_eq!(a, b);
    }
}
