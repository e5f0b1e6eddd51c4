//! # Occasion Annotator
//!
//! A deterministic rule table mapping the day's Tithi, lunar month, and
//! weekday to festival and vrat labels. Three rule families apply in order:
//!
//! 1. certain tithi names always carry an observance (Ekadashi, Chaturthi,
//!    Purnima, Amavasya),
//! 2. specific (masa, tithi) pairs mark the major calendar festivals,
//! 3. some weekdays carry a weekly vrat.
//!
//! Pure lookup-and-append: no randomness, no external state.

use serde::Serialize;

use crate::elements::tables::{Masa, Vaar};

/// Whether an occasion is a public festival or an observance/fast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OccasionKind {
    Festival,
    Vrat,
}

/// A festival or vrat falling on the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Occasion {
    pub name: &'static str,
    pub kind: OccasionKind,
}

/// Tithi-driven observances, applied in any month.
const TITHI_RULES: [(&str, &str, OccasionKind); 4] = [
    ("Ekadashi", "Ekadashi Vrat", OccasionKind::Vrat),
    ("Chaturthi", "Sankashti Chaturthi Vrat", OccasionKind::Vrat),
    ("Purnima", "Purnima Vrat", OccasionKind::Vrat),
    ("Amavasya", "Amavasya Vrat", OccasionKind::Vrat),
];

/// Major festivals keyed on (masa, tithi name).
const FESTIVAL_RULES: [(Masa, &str, &str); 9] = [
    (Masa::Chaitra, "Pratipada", "Chaitra Navratri Begins"),
    (Masa::Chaitra, "Navami", "Rama Navami"),
    (Masa::Shravana, "Purnima", "Raksha Bandhan"),
    (Masa::Bhadrapada, "Chaturthi", "Ganesh Chaturthi"),
    (Masa::Ashwina, "Pratipada", "Sharad Navratri Begins"),
    (Masa::Ashwina, "Dashami", "Vijayadashami"),
    (Masa::Kartika, "Amavasya", "Diwali"),
    (Masa::Magha, "Panchami", "Vasant Panchami"),
    (Masa::Phalguna, "Purnima", "Holi"),
];

/// Weekly vrats keyed on the weekday.
const WEEKDAY_RULES: [(Vaar, &str); 4] = [
    (Vaar::Somvar, "Somvar Vrat"),
    (Vaar::Mangalvar, "Mangalvar Vrat"),
    (Vaar::Guruvar, "Guruvar Vrat"),
    (Vaar::Shanivar, "Shanivar Vrat"),
];

/// Collect the day's occasions from its tithi name, masa, and weekday.
///
/// Arguments
/// ---------------
/// * `tithi_name`: the day's tithi name as produced by the element resolver
/// * `masa`: the (approximate) lunar month
/// * `weekday`: the Vaar of the civil date
///
/// Return
/// ----------
/// * Zero or more occasions; order is tithi rules, then festivals, then
///   weekly vrats.
pub fn occasions(tithi_name: &str, masa: Masa, weekday: Vaar) -> Vec<Occasion> {
    let mut found = Vec::new();

    for (rule_tithi, name, kind) in TITHI_RULES {
        if rule_tithi == tithi_name {
            found.push(Occasion { name, kind });
        }
    }

    for (rule_masa, rule_tithi, name) in FESTIVAL_RULES {
        if rule_masa == masa && rule_tithi == tithi_name {
            found.push(Occasion {
                name,
                kind: OccasionKind::Festival,
            });
        }
    }

    for (rule_vaar, name) in WEEKDAY_RULES {
        if rule_vaar == weekday {
            found.push(Occasion {
                name,
                kind: OccasionKind::Vrat,
            });
        }
    }

    found
}
