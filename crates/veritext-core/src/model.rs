//! Shared types for the design/specification reconciliation pipeline.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One text-bearing node lifted out of the design tree.
///
/// Produced by [`crate::flatten::flatten`], consumed by the match engine.
/// `text` is trimmed and never empty; nodes that resolve to whitespace are
/// dropped during flattening.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignTextElement {
    pub id: String,
    pub name: String,
    /// Node type tag from the source tree (always `TEXT` for extracted nodes).
    pub kind: String,
    pub text: String,
    /// Dotted/bracketed traversal path from the tree root. Diagnostics only,
    /// never consulted by matching.
    pub path: String,
    /// Cosmetic properties (fills, strokes, layout, padding) carried through
    /// for display. Opaque to the match engine.
    #[serde(default)]
    pub style_attrs: Map<String, Value>,
}

/// One required-text bundle from the external specification.
///
/// Every field is optional in the source document and defaults to empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpecificationRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub text_content: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub priority: String,
    /// Texts that must each appear somewhere in the design corpus. The
    /// specification document calls this field `design_texts`.
    #[serde(default, rename = "design_texts")]
    pub required_texts: Vec<String>,
}

/// How a required text was satisfied by a corpus entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    /// Case-folded equality.
    Exact,
    /// One-directional case-folded substring containment.
    Partial,
}

/// Per-record outcome bucket derived from the implementation rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Complete,
    Partial,
    Missing,
}

/// A required text paired with the corpus entry that satisfied it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoundText {
    pub required: String,
    pub found: String,
    pub kind: MatchKind,
}

/// Evaluation of one [`SpecificationRecord`] against the full design corpus.
///
/// Invariant: `found.len() + missing.len() == required_texts.len()`; every
/// required text lands in exactly one of the two lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub spec_id: String,
    pub spec_name: String,
    pub required_texts: Vec<String>,
    pub found: Vec<FoundText>,
    pub missing: Vec<String>,
    /// `found.len() / required_texts.len()`, 0 when the record requires
    /// nothing.
    pub implementation_rate: f64,
    pub status: MatchStatus,
}

/// Full comparison output: records partitioned by outcome, both partitions in
/// specification input order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Comparison {
    /// Records with status `complete` or `partial`.
    pub matched: Vec<MatchResult>,
    /// Records with status `missing`.
    pub issues: Vec<MatchResult>,
}

/// Headline counts for a [`Comparison`], as shown in reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total: usize,
    pub complete: usize,
    pub partial: usize,
    pub missing: usize,
}

impl Comparison {
    pub fn summary(&self) -> Summary {
        let complete = self
            .matched
            .iter()
            .filter(|r| r.status == MatchStatus::Complete)
            .count();
        Summary {
            total: self.matched.len() + self.issues.len(),
            complete,
            partial: self.matched.len() - complete,
            missing: self.issues.len(),
        }
    }
}
