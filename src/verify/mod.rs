//! # Verification Orchestrator
//!
//! Best-effort cross-check of a computed record against a secondary scraped
//! rendering of the same date/location. The pipeline is
//! `COMPUTE → (optional) VERIFY → ASSEMBLE`:
//!
//! - COMPUTE (in [`crate::panchanga`]) always runs and always succeeds for
//!   valid input; its record is the fallback of every other stage.
//! - VERIFY, implemented here, issues a single bounded-timeout fetch with at
//!   most one retry, extracts the five element names, and diffs them
//!   field-by-field against the computed values.
//! - Any timeout, transport error, or parse failure makes VERIFY skip
//!   silently: the record stays complete with `verified = false`. Nothing in
//!   this module can fail the overall request.

pub(crate) mod remote;

use crate::env_state::PanchangaEnv;
use crate::record::{FieldComparison, PanchangRecord};
use remote::SecondaryReading;

/// Case-insensitive containment match between a computed name and the
/// observed rendering, which often trails an end-time ("Ekadashi upto 06:14").
fn names_match(computed: &str, observed: &str) -> bool {
    observed.to_lowercase().contains(&computed.to_lowercase())
}

/// Diff the five computed element names against the secondary reading.
fn compare(record: &PanchangRecord, reading: &SecondaryReading) -> Vec<FieldComparison> {
    let pairs: [(&'static str, &str, &str); 5] = [
        ("tithi", record.elements.tithi.name, &reading.tithi),
        ("nakshatra", record.elements.nakshatra.name, &reading.nakshatra),
        ("yoga", record.elements.yoga.name, &reading.yoga),
        ("karana", record.elements.karana.name, &reading.karana),
        ("vaar", record.vaar.name(), &reading.vaar),
    ];
    pairs
        .into_iter()
        .map(|(field, computed, observed)| FieldComparison {
            field,
            matched: names_match(computed, observed)
                // The secondary may render the weekday in English
                || (field == "vaar" && names_match(record.vaar.english(), observed)),
            computed: computed.to_string(),
            observed: observed.to_string(),
        })
        .collect()
}

/// Run the VERIFY stage against a computed record.
///
/// Arguments
/// ---------------
/// * `env`: environment holding the bounded HTTP client
/// * `url_template`: secondary source URL with `{date}`/`{lat}`/`{lon}`
///   placeholders
/// * `max_retries`: extra attempts after the first failed fetch (at most one
///   is ever configured)
/// * `record`: the computed record to diff against
///
/// Return
/// ----------
/// * The field-by-field comparison, or `None` when the secondary source
///   could not be fetched or parsed — never an error.
pub(crate) fn verify_record(
    env: &PanchangaEnv,
    url_template: &str,
    max_retries: usize,
    record: &PanchangRecord,
) -> Option<Vec<FieldComparison>> {
    let date = format!(
        "{:04}-{:02}-{:02}",
        record.instant.year, record.instant.month, record.instant.day
    );
    let url = remote::request_url(
        url_template,
        &date,
        record.coordinate.latitude_deg,
        record.coordinate.longitude_deg,
    );

    let mut body = None;
    for _ in 0..=max_retries {
        match remote::fetch_rendering(env, &url) {
            Ok(text) => {
                body = Some(text);
                break;
            }
            Err(_) => continue,
        }
    }

    let reading = remote::extract_elements(&body?).ok()?;
    Some(compare(record, &reading))
}
