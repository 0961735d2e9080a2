//! Cross-candidate compromise analysis.
//!
//! After ranking, looks across the returned candidates for attributes that
//! repeatedly come back with partial credit, and recommends which compromise
//! to accept first. The ordering is a fixed domain judgment: oversizing a
//! conductor is cheap, a voltage shortfall is never negotiable.

use serde::{Deserialize, Serialize};

use crate::matching::comparators::AttributeKind;
use crate::matching::CandidateMatch;

/// Fixed risk ordering for accepting a compromise; lower ranks are safer to
/// concede. Voltage sits last and is excluded from recommendations entirely.
fn risk_rank(attribute: AttributeKind) -> u8 {
    match attribute {
        AttributeKind::CrossSection => 0,
        AttributeKind::Temperature => 1,
        AttributeKind::CoreCount => 2,
        AttributeKind::Armour => 3,
        AttributeKind::Insulation => 4,
        AttributeKind::Conductor => 5,
        AttributeKind::Voltage => 6,
    }
}

/// One attribute that shows partial matches across the candidate set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompromiseEntry {
    pub attribute: AttributeKind,
    /// How many of the ranked candidates matched this attribute partially.
    pub partial_count: usize,
    /// Mean attribute score across those partial matches.
    pub mean_partial_score: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompromiseReport {
    /// Attributes with partial matches, safest compromise first.
    pub entries: Vec<CompromiseEntry>,
    /// The compromise to accept first, if any attribute qualifies.
    pub recommended: Option<AttributeKind>,
    pub guidance: String,
}

/// Examine ranked candidates for recurring partial matches.
pub fn analyze(matches: &[CandidateMatch]) -> CompromiseReport {
    let mut entries: Vec<CompromiseEntry> = AttributeKind::ALL
        .iter()
        .filter_map(|&attribute| {
            let partial_scores: Vec<f64> = matches
                .iter()
                .flat_map(|candidate| &candidate.attributes)
                .filter(|result| {
                    result.attribute == attribute && result.score > 0.0 && result.score < 100.0
                })
                .map(|result| result.score)
                .collect();
            if partial_scores.is_empty() {
                return None;
            }
            let mean = partial_scores.iter().sum::<f64>() / partial_scores.len() as f64;
            Some(CompromiseEntry {
                attribute,
                partial_count: partial_scores.len(),
                mean_partial_score: mean,
            })
        })
        .collect();

    entries.sort_by_key(|entry| risk_rank(entry.attribute));

    let recommended = entries
        .iter()
        .map(|entry| entry.attribute)
        .find(|&attribute| attribute != AttributeKind::Voltage);

    let guidance = match recommended {
        Some(attribute) => {
            let mut text = format!(
                "Accept the {} compromise first; it carries the least engineering risk of the deviations seen.",
                attribute.label()
            );
            if entries.iter().any(|entry| entry.attribute == AttributeKind::Voltage) {
                text.push_str(" Voltage deviations must not be compromised under any circumstance.");
            }
            text
        }
        None if entries.is_empty() => {
            "No compromise needed; candidates meet all specified attributes outright or fail them."
                .to_string()
        }
        None => "Only voltage deviations remain; voltage must never be compromised — reject these candidates or revise the requirement."
            .to_string(),
    };

    CompromiseReport { entries, recommended, guidance }
}
