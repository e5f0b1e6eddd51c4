//! # The aggregate Panchang record
//!
//! [`PanchangRecord`] is the one output type of the engine: everything the
//! element resolver, solar clock, muhurat scheduler, and occasion annotator
//! produce for a single (instant, coordinate) pair, plus provenance metadata
//! from the verification orchestrator.
//!
//! Records are created fresh on every request, never mutated afterwards, and
//! are fully `serde`-serializable so a caller can hand them straight to an
//! HTTP layer. The engine itself persists nothing.

use serde::Serialize;

use crate::elements::tables::Vaar;
use crate::elements::ResolvedElements;
use crate::muhurat::MuhuratWindow;
use crate::occasions::Occasion;
use crate::solar::SolarDay;
use crate::time::{GeoCoordinate, LocalInstant};

/// Moon phase summary derived from the elongation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MoonPhase {
    /// Illuminated fraction of the disk, 0 (new) to 1 (full).
    pub fraction: f64,
    pub name: &'static str,
}

/// One field of the computed-vs-observed diff produced by the verifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldComparison {
    pub field: &'static str,
    pub computed: String,
    pub observed: String,
    pub matched: bool,
}

/// Provenance of a record: how it was computed and whether a secondary
/// source confirmed it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Provenance {
    /// Name of the computation method, for display and debugging.
    pub method: &'static str,
    /// True only when the secondary source was reached, parsed, and agreed
    /// on every compared field.
    pub verified: bool,
    /// Field-by-field diff against the secondary source, present only when
    /// the secondary fetch and parse succeeded.
    pub comparison: Option<Vec<FieldComparison>>,
}

/// The full Panchang of one instant at one coordinate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanchangRecord {
    /// The query instant, in the coordinate-derived civil offset.
    pub instant: LocalInstant,
    pub coordinate: GeoCoordinate,
    /// Optional human-readable place name passed through from the caller.
    pub city: Option<String>,
    pub vaar: Vaar,
    pub elements: ResolvedElements,
    pub moon_phase: MoonPhase,
    pub solar: SolarDay,
    pub muhurats: Vec<MuhuratWindow>,
    pub occasions: Vec<Occasion>,
    pub provenance: Provenance,
}
