use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{ActualSkillLevel, RequiredSkillLevel};

/// Gap between one required skill and what the employee actually holds.
/// `gap` is signed: positive means the employee falls short of the
/// requirement, negative means the requirement is exceeded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillGapDetail {
    pub skill_id: i64,
    pub skill_name: String,
    pub required_skill_level: i32,
    pub actual_skill_level: i32,
    pub gap: i32,
}

/// Outcome of scoring one employee profile against one job's requirements.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchScore {
    /// Mean per-skill coverage as a percentage, clamped to [0, 100].
    pub score: f64,
    /// One entry per required skill, in the requirement order of the job.
    pub gaps: Vec<SkillGapDetail>,
}

/// `skill_id -> level_value` lookup over an actual-skill profile. Later
/// entries overwrite earlier ones, so duplicate `skill_id`s resolve
/// last-write-wins.
fn actual_levels_by_skill(actual_skills: &[ActualSkillLevel]) -> HashMap<i64, i32> {
    let mut levels = HashMap::with_capacity(actual_skills.len());
    for entry in actual_skills {
        levels.insert(entry.skill_id, entry.level_value);
    }
    levels
}

/// Fraction of `required` that `actual` satisfies, capped at 1.0.
/// A requirement of level 0 (or below) is trivially satisfied; a malformed
/// negative actual level degrades to zero coverage instead of going negative.
fn coverage_ratio(actual: i32, required: i32) -> f64 {
    if required <= 0 {
        return 1.0;
    }
    (f64::from(actual.min(required)) / f64::from(required)).clamp(0.0, 1.0)
}

/// Scores one employee profile against one job's requirement set.
///
/// The score is the mean per-skill coverage ratio expressed as a percentage.
/// A job with no requirements scores 100.0 by policy: no requirement means
/// nothing is missing. Excess proficiency caps at full coverage and never
/// grants a bonus, so the score cannot exceed 100. Skills the employee holds
/// outside the requirement set contribute nothing and produce no gap entry.
///
/// Pure and deterministic: identical inputs yield identical output, and the
/// function never fails.
pub fn compute_match(
    required_skills: &[RequiredSkillLevel],
    actual_skills: &[ActualSkillLevel],
) -> MatchScore {
    if required_skills.is_empty() {
        return MatchScore {
            score: 100.0,
            gaps: Vec::new(),
        };
    }

    let levels = actual_levels_by_skill(actual_skills);

    let mut gaps = Vec::with_capacity(required_skills.len());
    let mut coverage_sum = 0.0;

    for required in required_skills {
        let actual = levels.get(&required.skill_id).copied().unwrap_or(0);
        coverage_sum += coverage_ratio(actual, required.level_value);

        gaps.push(SkillGapDetail {
            skill_id: required.skill_id,
            skill_name: required.skill_name.clone(),
            required_skill_level: required.level_value,
            actual_skill_level: actual,
            gap: required.level_value - actual,
        });
    }

    let score = (coverage_sum / required_skills.len() as f64 * 100.0).clamp(0.0, 100.0);

    MatchScore { score, gaps }
}
