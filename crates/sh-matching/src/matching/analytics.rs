use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::ranking::MatchingResult;

/// Aggregate view over one ranking, as served to the matching dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchingAnalytics {
    pub total_candidates: usize,
    pub average_score: f64,
    pub top_score: f64,
    pub skills_analysis: Vec<SkillAnalysis>,
}

/// Per-skill aggregate across every candidate evaluated on that skill.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillAnalysis {
    /// The analytics payload has always carried this one field in
    /// snake_case; consumers depend on it.
    #[serde(rename = "skill_name")]
    pub skill_name: String,
    /// Mean signed gap (required minus actual), so surpluses pull it down.
    pub average_gap: f64,
    /// Candidates holding the skill at any level above zero.
    pub candidates_with_skill: usize,
    /// Candidates evaluated against the skill at all.
    pub total_candidates: usize,
}

struct SkillAccumulator {
    skill_name: String,
    gap_sum: f64,
    with_skill: usize,
    evaluated: usize,
}

/// Rolls a set of matching results up into dashboard analytics. Skills are
/// reported in order of first appearance across the results' gap details,
/// which for a single-job ranking is the job's requirement order.
pub fn compute_analytics(results: &[MatchingResult]) -> MatchingAnalytics {
    if results.is_empty() {
        return MatchingAnalytics::default();
    }

    let total_candidates = results.len();
    let average_score =
        results.iter().map(|r| r.score).sum::<f64>() / total_candidates as f64;
    let top_score = results.iter().map(|r| r.score).fold(0.0, f64::max);

    let mut order: Vec<i64> = Vec::new();
    let mut by_skill: HashMap<i64, SkillAccumulator> = HashMap::new();
    for result in results {
        for detail in &result.skill_gap_details {
            let entry = by_skill.entry(detail.skill_id).or_insert_with(|| {
                order.push(detail.skill_id);
                SkillAccumulator {
                    skill_name: detail.skill_name.clone(),
                    gap_sum: 0.0,
                    with_skill: 0,
                    evaluated: 0,
                }
            });
            entry.gap_sum += f64::from(detail.gap);
            if detail.actual_skill_level > 0 {
                entry.with_skill += 1;
            }
            entry.evaluated += 1;
        }
    }

    let skills_analysis = order
        .into_iter()
        .filter_map(|skill_id| by_skill.remove(&skill_id))
        .map(|acc| SkillAnalysis {
            skill_name: acc.skill_name,
            average_gap: acc.gap_sum / acc.evaluated as f64,
            candidates_with_skill: acc.with_skill,
            total_candidates: acc.evaluated,
        })
        .collect();

    MatchingAnalytics {
        total_candidates,
        average_score,
        top_score,
        skills_analysis,
    }
}
