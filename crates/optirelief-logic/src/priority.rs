//! Urgency scoring and priority ranking of affected areas.
//!
//! The urgency score is a weighted composite of severity, population, and
//! response delay, each term capped so no single factor dominates. Ranking
//! recomputes every score and returns a fresh descending ordering — the
//! score on a stored area is derived data, never a source of truth.
//!
//! The sort is a stable merge sort: equal-score areas keep their relative
//! input order, so ranking an already-ranked list changes nothing.

use serde::{Deserialize, Serialize};

/// An area awaiting relief, as snapshotted from storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffectedArea {
    pub id: u32,
    pub name: String,
    /// Damage severity on a 0–10 scale. Assumed pre-bounded by the caller;
    /// out-of-range values produce out-of-range scores, not errors.
    pub severity: u8,
    pub population: u32,
    /// Hours since the area last received aid.
    pub delay_hours: u32,
}

/// Scoring weights and normalization caps for [`urgency_score`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingWeights {
    pub severity_weight: f64,
    pub population_weight: f64,
    pub delay_weight: f64,
    /// Populations at or above this contribute the full population weight.
    pub population_cap: f64,
    /// Delays at or above this contribute the full delay weight.
    pub delay_cap_hours: f64,
}

impl Default for RankingWeights {
    fn default() -> Self {
        Self {
            severity_weight: 40.0,
            population_weight: 30.0,
            delay_weight: 30.0,
            population_cap: 100_000.0,
            delay_cap_hours: 24.0,
        }
    }
}

/// An area annotated with its computed urgency score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedArea {
    pub area: AffectedArea,
    pub urgency_score: f64,
}

/// Weighted composite of severity, population, and delay.
///
/// `severity/10 × w_s + min(population/cap, 1) × w_p + min(delay/cap, 1) × w_d`
pub fn urgency_score(area: &AffectedArea, weights: &RankingWeights) -> f64 {
    let severity = area.severity as f64 / 10.0;
    let population = (area.population as f64 / weights.population_cap).min(1.0);
    let delay = (area.delay_hours as f64 / weights.delay_cap_hours).min(1.0);
    severity * weights.severity_weight
        + population * weights.population_weight
        + delay * weights.delay_weight
}

/// Rank areas by descending urgency score.
///
/// Stable: equal-score areas keep their relative input order. An empty
/// slice ranks to an empty vec.
pub fn rank(areas: &[AffectedArea], weights: &RankingWeights) -> Vec<RankedArea> {
    let scored: Vec<RankedArea> = areas
        .iter()
        .map(|a| RankedArea {
            area: a.clone(),
            urgency_score: urgency_score(a, weights),
        })
        .collect();
    merge_sort(scored)
}

fn merge_sort(mut items: Vec<RankedArea>) -> Vec<RankedArea> {
    if items.len() <= 1 {
        return items;
    }
    let mid = items.len() / 2;
    let left: Vec<RankedArea> = items.drain(..mid).collect();
    merge(merge_sort(left), merge_sort(items))
}

fn merge(left: Vec<RankedArea>, right: Vec<RankedArea>) -> Vec<RankedArea> {
    let mut result = Vec::with_capacity(left.len() + right.len());
    let mut left_iter = left.into_iter();
    let mut right_iter = right.into_iter();
    let mut left_head = left_iter.next();
    let mut right_head = right_iter.next();

    loop {
        match (left_head.take(), right_head.take()) {
            (Some(l), Some(r)) => {
                // `>=` keeps the left element first on ties (stability).
                if l.urgency_score >= r.urgency_score {
                    result.push(l);
                    left_head = left_iter.next();
                    right_head = Some(r);
                } else {
                    result.push(r);
                    right_head = right_iter.next();
                    left_head = Some(l);
                }
            }
            (Some(l), None) => {
                result.push(l);
                result.extend(left_iter);
                break;
            }
            (None, Some(r)) => {
                result.push(r);
                result.extend(right_iter);
                break;
            }
            (None, None) => break,
        }
    }
    result
}
