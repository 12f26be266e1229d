//! Fuzzy correction suggestions for non-compliant values.
//!
//! Nearest-neighbor search over the allowed set using normalized
//! Levenshtein similarity on case/whitespace-normalized strings. Ties are
//! broken by lexicographic order of the allowed value; the allowed set is
//! a `BTreeSet`, so "first candidate wins" is already deterministic.

use std::collections::BTreeSet;

use rapidfuzz::distance::levenshtein;

use crf_model::Suggestion;

/// Minimum similarity ratio (0-1) for a suggestion to be offered.
pub const SUGGESTION_THRESHOLD: f64 = 0.3;

/// Propose the closest allowed value for an observed one.
///
/// Returns [`Suggestion::NoMatch`] when nothing reaches the threshold,
/// including the empty-allowed-set case. A value that differs from an
/// allowed term only in case or surrounding whitespace scores 1.0.
pub fn best_suggestion(observed: &str, allowed: &BTreeSet<String>) -> Suggestion {
    let needle = normalize(observed);
    if needle.is_empty() {
        return Suggestion::NoMatch;
    }

    let mut best: Option<(f64, &str)> = None;
    for candidate in allowed {
        let similarity =
            levenshtein::normalized_similarity(needle.chars(), normalize(candidate).chars());
        // Strictly greater keeps the lexicographically first candidate on ties
        if best.is_none_or(|(top, _)| similarity > top) {
            best = Some((similarity, candidate));
        }
    }

    match best {
        Some((similarity, value)) if similarity >= SUGGESTION_THRESHOLD => {
            Suggestion::Replacement {
                value: value.to_string(),
                similarity,
            }
        }
        _ => Suggestion::NoMatch,
    }
}

/// Normalize a value for similarity scoring: trim and lowercase.
///
/// Classification stays case-sensitive; normalization applies only here,
/// so a case-mismatched exact term surfaces as a similarity-1.0 suggestion.
pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn allowed(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    #[test]
    fn near_miss_suggests_closest_term() {
        let set = allowed(&["MALE", "FEMALE"]);
        match best_suggestion("Femlae", &set) {
            Suggestion::Replacement { value, similarity } => {
                assert_eq!(value, "FEMALE");
                assert!(similarity >= SUGGESTION_THRESHOLD);
                assert!(similarity < 1.0);
            }
            Suggestion::NoMatch => panic!("expected a replacement"),
        }
    }

    #[test]
    fn case_mismatch_scores_full_similarity() {
        let set = allowed(&["HEADACHE", "NAUSEA", "FATIGUE"]);
        match best_suggestion("Headache", &set) {
            Suggestion::Replacement { value, similarity } => {
                assert_eq!(value, "HEADACHE");
                assert!((similarity - 1.0).abs() < f64::EPSILON);
            }
            Suggestion::NoMatch => panic!("expected a replacement"),
        }
    }

    #[test]
    fn whitespace_mismatch_scores_full_similarity() {
        let set = allowed(&["GLUCOSE"]);
        match best_suggestion("  glucose  ", &set) {
            Suggestion::Replacement { value, similarity } => {
                assert_eq!(value, "GLUCOSE");
                assert!((similarity - 1.0).abs() < f64::EPSILON);
            }
            Suggestion::NoMatch => panic!("expected a replacement"),
        }
    }

    #[test]
    fn empty_allowed_set_yields_no_match() {
        assert_eq!(best_suggestion("HEADACHE", &BTreeSet::new()), Suggestion::NoMatch);
    }

    #[test]
    fn below_threshold_yields_no_match() {
        let set = allowed(&["XYZQW"]);
        assert_eq!(best_suggestion("HEADACHE", &set), Suggestion::NoMatch);
    }

    #[test]
    fn tie_breaks_lexicographically() {
        // AA and AB are equidistant from AC
        let set = allowed(&["AB", "AA"]);
        match best_suggestion("AC", &set) {
            Suggestion::Replacement { value, .. } => assert_eq!(value, "AA"),
            Suggestion::NoMatch => panic!("expected a replacement"),
        }
    }
}
