//! Keyword urgency scanning of free-text relief requests.
//!
//! Each keyword in the dictionary is searched with a Boyer–Moore
//! bad-character scan: compare right-to-left inside each window and skip
//! ahead by the last known position of the mismatching character. Every
//! occurrence contributes to the score, not just keyword presence, and the
//! final score is clamped to 0–100 before mapping to a discrete level.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// Keyword dictionary and scoring for [`triage`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriageConfig {
    /// Scanned in order; matched keywords are reported in this order.
    pub keywords: Vec<String>,
    /// Score added per keyword occurrence, before clamping.
    pub points_per_occurrence: u32,
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            keywords: [
                "urgent",
                "emergency",
                "help",
                "critical",
                "injured",
                "trapped",
                "fire",
                "flood",
                "collapse",
                "medical",
                "rescue",
                "immediate",
                "danger",
                "severe",
                "casualty",
                "ambulance",
                "hospital",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            points_per_occurrence: 10,
        }
    }
}

/// Discrete urgency tier for a clamped 0–100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum UrgencyLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl UrgencyLevel {
    /// Tier boundaries are inclusive on the lower bound: 80 is already
    /// Critical, 60 High, 40 Medium.
    pub fn from_score(score: u32) -> Self {
        match score {
            80.. => UrgencyLevel::Critical,
            60..=79 => UrgencyLevel::High,
            40..=59 => UrgencyLevel::Medium,
            _ => UrgencyLevel::Low,
        }
    }
}

/// Triage result for one message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriageReport {
    /// Matched keywords in dictionary scan order, each listed once.
    pub keywords_found: Vec<String>,
    /// Sum of per-occurrence points, clamped to 0–100.
    pub urgency_score: u32,
    pub urgency_level: UrgencyLevel,
}

/// Case-insensitive occurrence positions of `pattern` in `text`.
///
/// Positions index the lowercased character sequence. Overlapping
/// occurrences are found. An empty pattern matches nothing.
///
/// The shift after a full match is clamped to at least 1: the raw
/// bad-character rule yields a zero shift whenever the character just past
/// the window is also the pattern's final character, which would rescan the
/// same window forever. The clamp changes no occurrence counts.
pub fn find_occurrences(text: &str, pattern: &str) -> Vec<usize> {
    let text: Vec<char> = text.to_lowercase().chars().collect();
    let pattern: Vec<char> = pattern.to_lowercase().chars().collect();
    let n = text.len();
    let m = pattern.len();
    if m == 0 || n < m {
        return Vec::new();
    }

    // Last occurrence of each character within the pattern.
    let mut last: HashMap<char, isize> = HashMap::new();
    for (i, &c) in pattern.iter().enumerate() {
        last.insert(c, i as isize);
    }
    let last_of = |c: char| last.get(&c).copied().unwrap_or(-1);

    let mut matches = Vec::new();
    let mut s = 0usize;
    while s + m <= n {
        let mut j = m as isize - 1;
        while j >= 0 && pattern[j as usize] == text[s + j as usize] {
            j -= 1;
        }
        let shift = if j < 0 {
            matches.push(s);
            if s + m < n {
                (m as isize - last_of(text[s + m]) - 1).max(1)
            } else {
                1
            }
        } else {
            (j - last_of(text[s + j as usize])).max(1)
        };
        s += shift as usize;
    }
    matches
}

/// Scan `text` against the keyword dictionary and derive an urgency report.
///
/// Every occurrence of every keyword adds `points_per_occurrence`; the sum
/// is clamped to 0–100 before the level mapping. An empty dictionary is
/// rejected; an empty message is a valid Low-urgency input.
pub fn triage(text: &str, config: &TriageConfig) -> Result<TriageReport, InputError> {
    if config.keywords.is_empty() {
        return Err(InputError::EmptyKeywordList);
    }

    let mut keywords_found = Vec::new();
    let mut score = 0u32;
    for keyword in &config.keywords {
        let occurrences = find_occurrences(text, keyword);
        if !occurrences.is_empty() {
            keywords_found.push(keyword.clone());
            score = score
                .saturating_add(occurrences.len() as u32 * config.points_per_occurrence);
        }
    }

    let urgency_score = score.min(100);
    Ok(TriageReport {
        keywords_found,
        urgency_score,
        urgency_level: UrgencyLevel::from_score(urgency_score),
    })
}
