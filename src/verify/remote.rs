//! Fetch and parse of the secondary Panchang rendering.
//!
//! The secondary source is a scraped HTML/text page; only the five element
//! names are of interest, extracted by labelled-field regexes. Any shape of
//! `Tithi: Ekadashi`, `Tithi - Ekadashi upto 06:14`, or a simple
//! `<td>Tithi</td><td>Ekadashi</td>` row is accepted.

use regex::Regex;

use crate::env_state::PanchangaEnv;
use crate::panchanga_errors::PanchangaError;

/// The five element names as rendered by the secondary source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SecondaryReading {
    pub tithi: String,
    pub nakshatra: String,
    pub yoga: String,
    pub karana: String,
    pub vaar: String,
}

/// Build the request URL from the source template.
///
/// The template may contain `{date}`, `{lat}` and `{lon}` placeholders,
/// substituted with the query values.
pub(crate) fn request_url(template: &str, date: &str, lat: f64, lon: f64) -> String {
    template
        .replace("{date}", date)
        .replace("{lat}", &format!("{lat}"))
        .replace("{lon}", &format!("{lon}"))
}

/// Fetch the secondary rendering.
///
/// The environment's agent carries the bounded timeout; a slow or dead
/// source fails here instead of stalling the request.
pub(crate) fn fetch_rendering(
    env: &PanchangaEnv,
    url: &str,
) -> Result<String, PanchangaError> {
    env.get_from_url(url)
}

/// Extract one labelled field from the rendering.
///
/// Matches the label, skips punctuation and at most one intervening HTML tag
/// boundary, then captures the leading run of words.
fn extract_field(body: &str, label: &str) -> Option<String> {
    // Label regexes are built from fixed labels; the pattern cannot fail
    let pattern = format!(
        r"(?i){label}\s*(?:</[a-z]+>\s*<[a-z]+[^>]*>|[:\-])?\s*([A-Za-z][A-Za-z ]*[A-Za-z]|[A-Za-z])"
    );
    let field_regex = Regex::new(&pattern).unwrap();
    let captured = field_regex.captures(body)?.get(1)?.as_str().trim();
    if captured.is_empty() {
        None
    } else {
        Some(captured.to_string())
    }
}

/// Parse the five element names out of the rendering.
///
/// Return
/// ----------
/// * The reading, or [`PanchangaError::SecondaryParseFailed`] if any of the
///   five labels is missing.
pub(crate) fn extract_elements(body: &str) -> Result<SecondaryReading, PanchangaError> {
    let field = |label: &str| {
        extract_field(body, label).ok_or(PanchangaError::SecondaryParseFailed)
    };
    Ok(SecondaryReading {
        tithi: field("Tithi")?,
        nakshatra: field("Nakshatra")?,
        yoga: field("Yoga")?,
        karana: field("Karana")?,
        vaar: field("Vaar")?,
    })
}

#[cfg(test)]
mod remote_test {
    use super::*;

    #[test]
    fn test_request_url_substitution() {
        let url = request_url(
            "https://example.org/panchang?d={date}&lat={lat}&lon={lon}",
            "2024-03-15",
            28.6139,
            77.209,
        );
        assert_eq!(
            url,
            "https://example.org/panchang?d=2024-03-15&lat=28.6139&lon=77.209"
        );
    }

    #[test]
    fn test_extract_plain_text_labels() {
        let body = "Tithi: Ekadashi upto 06:14\nNakshatra: Hasta\nYoga - Vishkambha\n\
                    Karana: Bava\nVaar: Friday";
        let reading = extract_elements(body).unwrap();
        assert_eq!(reading.tithi, "Ekadashi upto");
        assert_eq!(reading.nakshatra, "Hasta");
        assert_eq!(reading.yoga, "Vishkambha");
        assert_eq!(reading.karana, "Bava");
        assert_eq!(reading.vaar, "Friday");
    }

    #[test]
    fn test_extract_html_table_row() {
        let body = "<tr><td>Tithi</td><td>Dwadashi</td></tr>\
                    <tr><td>Nakshatra</td><td>Chitra</td></tr>\
                    <tr><td>Yoga</td><td>Priti</td></tr>\
                    <tr><td>Karana</td><td>Balava</td></tr>\
                    <tr><td>Vaar</td><td>Somvar</td></tr>";
        let reading = extract_elements(body).unwrap();
        assert_eq!(reading.tithi, "Dwadashi");
        assert_eq!(reading.nakshatra, "Chitra");
        assert_eq!(reading.vaar, "Somvar");
    }

    #[test]
    fn test_extract_fails_on_unrelated_page() {
        assert!(extract_elements("<html><body>404 not found</body></html>").is_err());
    }
}
