//! Volunteer-to-region assignment via backtracking search.
//!
//! The search walks regions in input order; for each region it tries
//! eligible, not-yet-used volunteers in input order, assigns one
//! tentatively, and recurses. A branch is undone only if the recursion
//! cannot process all remaining regions, and every region also has an
//! unconditional leave-unassigned fallthrough. The first branch that walks
//! off the end of the region list wins, so in practice this behaves as a
//! greedy assignment with lookahead rather than a maximum-coverage search —
//! the original behavior, kept on purpose. Worst case is exponential in the
//! region count when many volunteers are eligible everywhere.
//!
//! Two separate scores exist on purpose: [`eligibility_score`] gates
//! whether an assignment is allowed at all, while [`match_score`] is the
//! quality figure reported alongside an accepted assignment.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Availability of a volunteer, as stored by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolunteerStatus {
    Available,
    Assigned,
}

/// A relief volunteer snapshotted from storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Volunteer {
    pub id: u32,
    pub name: String,
    /// Free-form skill labels, matched case-insensitively by substring.
    pub skills: Vec<String>,
    pub location: String,
    pub status: VolunteerStatus,
    pub assigned_to: Option<String>,
}

/// One accepted volunteer-to-region assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub volunteer: Volunteer,
    pub region: String,
    pub match_score: u32,
}

/// Full matching result with coverage statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub assignments: Vec<Assignment>,
    /// Assigned regions as an integer percentage of all regions.
    pub coverage_pct: u32,
    pub unassigned_volunteers: usize,
}

/// Minimum [`eligibility_score`] for an assignment to be allowed.
pub const ELIGIBILITY_THRESHOLD: u32 = 40;

fn has_skill(volunteer: &Volunteer, keyword: &str) -> bool {
    volunteer
        .skills
        .iter()
        .any(|s| s.to_lowercase().contains(keyword))
}

/// Skill/location correlation used to gate assignment.
///
/// Skill keywords score only when the region name echoes them (logistics is
/// the exception — useful anywhere); a location substring match in either
/// direction adds a proximity bonus. Eligible iff the total reaches
/// [`ELIGIBILITY_THRESHOLD`].
pub fn eligibility_score(volunteer: &Volunteer, region: &str) -> u32 {
    let region = region.to_lowercase();
    let location = volunteer.location.to_lowercase();
    let mut score = 0;

    if has_skill(volunteer, "medical") && (region.contains("medical") || region.contains("hospital"))
    {
        score += 30;
    }
    if has_skill(volunteer, "rescue") && (region.contains("rescue") || region.contains("emergency"))
    {
        score += 30;
    }
    if has_skill(volunteer, "engineering")
        && (region.contains("engineering") || region.contains("technical"))
    {
        score += 25;
    }
    if has_skill(volunteer, "logistics") {
        score += 20;
    }
    if region.contains(&location) || location.contains(&region) {
        score += 20;
    }
    score
}

/// Displayed match quality for an accepted assignment, capped at 100.
///
/// Deliberately a different formula from [`eligibility_score`]: a flat base
/// plus smaller per-skill bonuses and a one-way location bonus.
pub fn match_score(volunteer: &Volunteer, region: &str) -> u32 {
    let region = region.to_lowercase();
    let location = volunteer.location.to_lowercase();
    let mut score = 50;

    if has_skill(volunteer, "medical") {
        score += 20;
    }
    if has_skill(volunteer, "rescue") {
        score += 15;
    }
    if has_skill(volunteer, "engineering") {
        score += 10;
    }
    if region.contains(&location) {
        score += 15;
    }
    score.min(100)
}

/// Assign volunteers to regions, maximizing processed regions per the
/// first-completing-branch search described in the module docs.
///
/// Fully deterministic for a fixed input ordering. A result covering fewer
/// regions than requested is a valid outcome, not an error.
pub fn match_volunteers(volunteers: &[Volunteer], regions: &[String]) -> MatchOutcome {
    let mut assignments = Vec::new();
    let mut used = HashSet::new();
    backtrack(volunteers, regions, 0, &mut assignments, &mut used);

    let coverage_pct = if regions.is_empty() {
        0
    } else {
        (assignments.len() * 100 / regions.len()) as u32
    };
    MatchOutcome {
        unassigned_volunteers: volunteers.len() - assignments.len(),
        coverage_pct,
        assignments,
    }
}

fn backtrack(
    volunteers: &[Volunteer],
    regions: &[String],
    region_idx: usize,
    assignments: &mut Vec<Assignment>,
    used: &mut HashSet<u32>,
) -> bool {
    if region_idx >= regions.len() {
        return true;
    }
    let region = &regions[region_idx];

    for volunteer in volunteers {
        if used.contains(&volunteer.id) {
            continue;
        }
        if eligibility_score(volunteer, region) < ELIGIBILITY_THRESHOLD {
            continue;
        }

        assignments.push(Assignment {
            volunteer: volunteer.clone(),
            region: region.clone(),
            match_score: match_score(volunteer, region),
        });
        used.insert(volunteer.id);

        if backtrack(volunteers, regions, region_idx + 1, assignments, used) {
            return true;
        }

        assignments.pop();
        used.remove(&volunteer.id);
    }

    // Leave this region uncovered and move on.
    backtrack(volunteers, regions, region_idx + 1, assignments, used)
}
