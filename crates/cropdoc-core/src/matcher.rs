//! The symptom matcher: ranks catalog diseases against a free-text description.
//!
//! Scoring model:
//!
//!   query → normalize → per disease: per symptom phrase → any significant word
//!   in query? → count → percentage → stable sort (descending)
//!
//! A word is significant when it is longer than three characters. Evidence is
//! plain substring containment against the normalized query, so `"spots"` is
//! evidenced by `"sunspots"`. This imprecision is intentional and must be kept
//! for parity with existing clients.

use std::cmp::Ordering;

use tracing::debug;

use cropdoc_contracts::{
    disease::DiseaseRecord,
    error::{CropdocError, CropdocResult},
    matching::MatchResult,
};

/// Words with this many characters or fewer never count as evidence.
pub const SHORT_WORD_MAX_CHARS: usize = 3;

/// Lower-case and trim a raw symptom description.
///
/// Returns `CropdocError::InvalidInput` when nothing is left.
pub fn normalize_query(raw: &str) -> CropdocResult<String> {
    let query = raw.trim().to_lowercase();
    if query.is_empty() {
        return Err(CropdocError::invalid_input("symptoms description required"));
    }
    Ok(query)
}

/// Match `raw_query` against every record in `catalog`.
///
/// Records with no evidenced symptom are omitted. The result is ordered by
/// `match_percentage` descending; records with equal percentages keep their
/// catalog order. An empty result is a valid outcome.
///
/// # Errors
///
/// `CropdocError::InvalidInput` if the query is blank.
pub fn match_symptoms<'a>(
    raw_query: &str,
    catalog: &'a [DiseaseRecord],
) -> CropdocResult<Vec<MatchResult<'a>>> {
    let query = normalize_query(raw_query)?;

    let mut results: Vec<MatchResult<'a>> = catalog
        .iter()
        .filter_map(|disease| score_disease(&query, disease))
        .collect();

    // `sort_by` is stable: ties stay in catalog order.
    results.sort_by(|a, b| b.match_percentage.cmp(&a.match_percentage));

    debug!(
        catalog_size = catalog.len(),
        matched = results.len(),
        "symptom match complete"
    );

    Ok(results)
}

/// Score one disease against an already-normalized query.
///
/// Returns `None` when no symptom phrase is evidenced.
fn score_disease<'a>(query: &str, disease: &'a DiseaseRecord) -> Option<MatchResult<'a>> {
    let matched_symptoms: Vec<&'a str> = disease
        .symptoms
        .iter()
        .map(String::as_str)
        .filter(|phrase| phrase_matches(query, phrase))
        .collect();

    if matched_symptoms.is_empty() {
        return None;
    }

    let match_count = matched_symptoms.len();
    let total_symptoms = disease.symptoms.len();

    Some(MatchResult {
        disease_id: &disease.id,
        disease,
        match_count,
        total_symptoms,
        match_percentage: match_percentage(match_count, total_symptoms),
        matched_symptoms,
    })
}

/// True if any significant word of `phrase` occurs in `query`.
fn phrase_matches(query: &str, phrase: &str) -> bool {
    phrase
        .to_lowercase()
        .split_whitespace()
        .any(|word| word.chars().count() > SHORT_WORD_MAX_CHARS && query.contains(word))
}

/// `matched / total * 100` rounded to the nearest integer, ties to even.
///
/// `total` is never zero here: a record without symptoms cannot match.
fn match_percentage(matched: usize, total: usize) -> u32 {
    let scaled = matched * 100;
    let quotient = scaled / total;
    let remainder = scaled % total;

    let rounded = match (remainder * 2).cmp(&total) {
        Ordering::Less => quotient,
        Ordering::Greater => quotient + 1,
        Ordering::Equal => quotient + quotient % 2,
    };
    rounded as u32
}

// ── Tests ────────────────────────────────────────────────────────────────────
