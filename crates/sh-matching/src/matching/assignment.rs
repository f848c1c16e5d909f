use std::cmp::Ordering;

use tracing::{info, instrument};

use super::ranking::MatchingResult;

/// Knobs for automatic assignment of candidates onto a job description.
///
/// `SH_ASSIGNMENT_MIN_SCORE` and `SH_ASSIGNMENT_MAX` override the defaults,
/// which match the values the HR workflow has always run with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssignmentPolicy {
    /// Candidates scoring below this are never auto-assigned.
    pub min_score: f64,
    /// Upper bound on how many candidates one run may assign.
    pub max_assignments: usize,
}

impl Default for AssignmentPolicy {
    fn default() -> Self {
        Self {
            min_score: 70.0,
            max_assignments: 5,
        }
    }
}

impl AssignmentPolicy {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            min_score: env_f64("SH_ASSIGNMENT_MIN_SCORE").unwrap_or(defaults.min_score),
            max_assignments: env_usize("SH_ASSIGNMENT_MAX").unwrap_or(defaults.max_assignments),
        }
    }
}

fn env_f64(key: &str) -> Option<f64> {
    std::env::var(key).ok().and_then(|raw| raw.trim().parse().ok())
}

fn env_usize(key: &str) -> Option<usize> {
    std::env::var(key).ok().and_then(|raw| raw.trim().parse().ok())
}

/// Picks the candidates eligible for automatic assignment: everyone at or
/// above the policy threshold, best score first, cut off at the policy
/// maximum. Equal scores keep their input order, so reruns over the same
/// ranking select the same people.
#[instrument(skip_all, fields(
    candidates = results.len(),
    min_score = policy.min_score,
    max_assignments = policy.max_assignments,
))]
pub fn select_for_assignment(
    results: &[MatchingResult],
    policy: &AssignmentPolicy,
) -> Vec<MatchingResult> {
    let mut eligible: Vec<_> = results
        .iter()
        .filter(|r| r.score >= policy.min_score)
        .cloned()
        .collect();
    eligible.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    eligible.truncate(policy.max_assignments);

    info!(selected = eligible.len(), "selected candidates for automatic assignment");
    eligible
}

/// One candidate the caller tried to assign but could not.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentFailure {
    pub employee_id: i64,
    pub name: String,
    pub reason: String,
}

/// Outcome roll-up for one auto-assignment run. The engine decides who to
/// assign; actually writing the assignment lives with the caller, which
/// records each attempt here and reports the totals afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssignmentReport {
    pub assigned: Vec<i64>,
    pub failed: Vec<AssignmentFailure>,
}

impl AssignmentReport {
    pub fn record_success(&mut self, employee_id: i64) {
        self.assigned.push(employee_id);
    }

    pub fn record_failure(&mut self, employee_id: i64, name: impl Into<String>, reason: impl Into<String>) {
        self.failed.push(AssignmentFailure {
            employee_id,
            name: name.into(),
            reason: reason.into(),
        });
    }

    pub fn attempted(&self) -> usize {
        self.assigned.len() + self.failed.len()
    }

    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }

    /// Short human-readable line for logs and operator-facing messages.
    pub fn summary(&self) -> String {
        format!(
            "{} assigned, {} failed out of {} attempted",
            self.assigned.len(),
            self.failed.len(),
            self.attempted()
        )
    }
}
