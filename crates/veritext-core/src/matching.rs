//! The match engine: checks each specification record's required texts
//! against the flattened design corpus.
//!
//! Matching is case-folded equality or one-directional substring
//! containment, scanning the corpus in document order and taking the first
//! hit. Both-direction substring matching can over-match very short required
//! strings (a single common word will match any longer corpus entry that
//! contains it); that is the specified behaviour, kept as is.

use tracing::info;

use crate::model::{
    Comparison, DesignTextElement, FoundText, MatchKind, MatchResult, MatchStatus,
    SpecificationRecord,
};

/// Compare specification records against the design-text corpus.
///
/// Records are evaluated independently, in input order; both output
/// partitions preserve that order. Pure function over its inputs.
pub fn compare(specs: &[SpecificationRecord], design_texts: &[DesignTextElement]) -> Comparison {
    // Fold the corpus once; matching only ever sees lower-case text.
    let corpus: Vec<(&str, String)> = design_texts
        .iter()
        .map(|e| (e.text.as_str(), e.text.to_lowercase()))
        .collect();

    let mut comparison = Comparison::default();
    for spec in specs {
        let result = evaluate(spec, &corpus);
        match result.status {
            MatchStatus::Complete | MatchStatus::Partial => comparison.matched.push(result),
            MatchStatus::Missing => comparison.issues.push(result),
        }
    }

    info!(
        matched = comparison.matched.len(),
        issues = comparison.issues.len(),
        corpus = corpus.len(),
        "comparison complete"
    );
    comparison
}

/// Evaluate one record. `corpus` pairs original text with its folded form,
/// in document order.
fn evaluate(spec: &SpecificationRecord, corpus: &[(&str, String)]) -> MatchResult {
    let mut found = Vec::new();
    let mut missing = Vec::new();

    for required in &spec.required_texts {
        let folded = required.to_lowercase();
        match scan(&folded, corpus) {
            Some((text, kind)) => found.push(FoundText {
                required: required.clone(),
                found: text.to_string(),
                kind,
            }),
            None => missing.push(required.clone()),
        }
    }

    // Empty required list divides to 0, which lands in the missing bucket.
    // Arguably an empty requirement is trivially complete; the literal rule
    // is kept deliberately.
    let implementation_rate = if spec.required_texts.is_empty() {
        0.0
    } else {
        found.len() as f64 / spec.required_texts.len() as f64
    };
    let status = if implementation_rate == 1.0 {
        MatchStatus::Complete
    } else if implementation_rate > 0.0 {
        MatchStatus::Partial
    } else {
        MatchStatus::Missing
    };

    MatchResult {
        spec_id: spec.id.clone(),
        spec_name: spec.name.clone(),
        required_texts: spec.required_texts.clone(),
        found,
        missing,
        implementation_rate,
        status,
    }
}

/// First corpus entry matching the folded required text wins; no later entry
/// is considered, even if it would match more exactly.
fn scan<'a>(required: &str, corpus: &[(&'a str, String)]) -> Option<(&'a str, MatchKind)> {
    for (original, folded) in corpus {
        if required == folded {
            return Some((original, MatchKind::Exact));
        }
        if folded.contains(required) || required.contains(folded.as_str()) {
            return Some((original, MatchKind::Partial));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(text: &str) -> DesignTextElement {
        DesignTextElement {
            id: String::new(),
            name: String::new(),
            kind: "TEXT".to_string(),
            text: text.to_string(),
            path: String::new(),
            style_attrs: Default::default(),
        }
    }

    fn record(id: &str, required: &[&str]) -> SpecificationRecord {
        SpecificationRecord {
            id: id.to_string(),
            name: format!("record {id}"),
            required_texts: required.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    fn corpus(texts: &[&str]) -> Vec<DesignTextElement> {
        texts.iter().map(|t| element(t)).collect()
    }

    #[test]
    fn complete_when_all_required_texts_match() {
        let comparison = compare(
            &[record("S-1", &["Save", "Cancel"])],
            &corpus(&["Save", "cancel now"]),
        );
        assert_eq!(comparison.matched.len(), 1);
        assert!(comparison.issues.is_empty());

        let result = &comparison.matched[0];
        assert_eq!(result.implementation_rate, 1.0);
        assert_eq!(result.status, MatchStatus::Complete);
        assert_eq!(result.found[0].kind, MatchKind::Exact);
        assert_eq!(result.found[1].kind, MatchKind::Partial);
        assert_eq!(result.found[1].found, "cancel now");
    }

    #[test]
    fn partial_when_some_required_texts_match() {
        let comparison = compare(&[record("S-1", &["Save", "Cancel"])], &corpus(&["Save"]));
        let result = &comparison.matched[0];
        assert_eq!(result.implementation_rate, 0.5);
        assert_eq!(result.status, MatchStatus::Partial);
        assert_eq!(result.missing, vec!["Cancel"]);
    }

    #[test]
    fn missing_when_nothing_matches() {
        let comparison = compare(
            &[record("S-1", &["Save", "Cancel"])],
            &corpus(&["Welcome", "Log out"]),
        );
        assert!(comparison.matched.is_empty());
        let result = &comparison.issues[0];
        assert_eq!(result.implementation_rate, 0.0);
        assert_eq!(result.status, MatchStatus::Missing);
        assert_eq!(result.missing, vec!["Save", "Cancel"]);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let comparison = compare(&[record("S-1", &["SAVE"])], &corpus(&["save"]));
        let result = &comparison.matched[0];
        assert_eq!(result.found[0].kind, MatchKind::Exact);
        assert_eq!(result.found[0].found, "save");
    }

    #[test]
    fn substring_matches_in_both_directions() {
        // Required within corpus entry.
        let comparison = compare(&[record("S-1", &["Save"])], &corpus(&["Save changes"]));
        assert_eq!(comparison.matched[0].found[0].kind, MatchKind::Partial);

        // Corpus entry within required.
        let comparison = compare(&[record("S-2", &["Save changes"])], &corpus(&["Save"]));
        assert_eq!(comparison.matched[0].found[0].kind, MatchKind::Partial);
    }

    #[test]
    fn first_corpus_entry_in_document_order_wins() {
        let comparison = compare(
            &[record("S-1", &["Save"])],
            &corpus(&["Save", "Save Now"]),
        );
        let hit = &comparison.matched[0].found[0];
        assert_eq!(hit.found, "Save");
        assert_eq!(hit.kind, MatchKind::Exact);
    }

    #[test]
    fn earlier_partial_beats_later_exact() {
        // No search for a better match later in the corpus.
        let comparison = compare(
            &[record("S-1", &["Save"])],
            &corpus(&["Save Now", "Save"]),
        );
        let hit = &comparison.matched[0].found[0];
        assert_eq!(hit.found, "Save Now");
        assert_eq!(hit.kind, MatchKind::Partial);
    }

    #[test]
    fn found_plus_missing_covers_every_required_text() {
        let specs = [
            record("S-1", &["Save", "Cancel", "Delete"]),
            record("S-2", &[]),
            record("S-3", &["Welcome"]),
        ];
        let comparison = compare(&specs, &corpus(&["save", "Welcome back"]));
        for result in comparison.matched.iter().chain(&comparison.issues) {
            assert_eq!(
                result.found.len() + result.missing.len(),
                result.required_texts.len()
            );
        }
    }

    #[test]
    fn partitions_preserve_specification_order() {
        let specs = [
            record("S-1", &["Save"]),
            record("S-2", &["Nope"]),
            record("S-3", &["Cancel"]),
            record("S-4", &["Also nope"]),
        ];
        let comparison = compare(&specs, &corpus(&["Save", "Cancel"]));
        let matched_ids: Vec<&str> = comparison.matched.iter().map(|r| r.spec_id.as_str()).collect();
        let issue_ids: Vec<&str> = comparison.issues.iter().map(|r| r.spec_id.as_str()).collect();
        assert_eq!(matched_ids, vec!["S-1", "S-3"]);
        assert_eq!(issue_ids, vec!["S-2", "S-4"]);
    }

    #[test]
    fn empty_required_list_counts_as_missing() {
        // Known ambiguity: a record requiring nothing could be read as
        // trivially complete, but the literal rate rule puts it at 0.
        let comparison = compare(&[record("S-1", &[])], &corpus(&["Save"]));
        assert!(comparison.matched.is_empty());
        let result = &comparison.issues[0];
        assert_eq!(result.implementation_rate, 0.0);
        assert_eq!(result.status, MatchStatus::Missing);
        assert!(result.found.is_empty());
        assert!(result.missing.is_empty());
    }

    #[test]
    fn empty_corpus_yields_all_missing() {
        let comparison = compare(&[record("S-1", &["Save"])], &[]);
        assert_eq!(comparison.issues.len(), 1);
        assert_eq!(comparison.issues[0].missing, vec!["Save"]);
    }

    #[test]
    fn no_specs_yields_empty_comparison() {
        let comparison = compare(&[], &corpus(&["Save"]));
        assert!(comparison.matched.is_empty());
        assert!(comparison.issues.is_empty());
    }

    #[test]
    fn inputs_are_not_mutated() {
        let specs = [record("S-1", &["Save"])];
        let elements = corpus(&["Save"]);
        let _ = compare(&specs, &elements);
        let again = compare(&specs, &elements);
        assert_eq!(again.matched.len(), 1);
    }
}
