use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use super::scoring::{compute_match, SkillGapDetail};
use crate::{run_id, EmployeeForMatching, JobDescriptionForMatching};

/// One scored (job, employee) pair: candidate identity, the 0-100 score and
/// the per-skill gap breakdown, in the job's requirement order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchingResult {
    pub job_description_id: i64,
    pub employee_id: i64,
    pub name: String,
    pub position: String,
    pub score: f64,
    pub skill_gap_details: Vec<SkillGapDetail>,
}

fn score_pair(job: &JobDescriptionForMatching, employee: &EmployeeForMatching) -> MatchingResult {
    let outcome = compute_match(&job.required_skills_level, &employee.actual_skills_level);

    MatchingResult {
        job_description_id: job.job_description_id,
        employee_id: employee.employee_id,
        name: employee.name.clone(),
        position: employee.position.clone(),
        score: outcome.score,
        skill_gap_details: outcome.gaps,
    }
}

/// Descending by score. The sort is stable, so equal scores keep their
/// input order, which is the tie-break rule callers rely on for
/// reproducible output.
fn sort_by_score_descending(results: &mut [MatchingResult]) {
    results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
}

/// Forward matching: scores every candidate against one job description
/// and returns the full list, best match first.
#[instrument(skip_all, fields(
    job_description_id = job.job_description_id,
    candidates = employees.len(),
    run = run_id::current(),
))]
pub fn rank_employees_for_job(
    job: &JobDescriptionForMatching,
    employees: &[EmployeeForMatching],
) -> Vec<MatchingResult> {
    let mut results: Vec<_> = employees
        .iter()
        .map(|employee| score_pair(job, employee))
        .collect();
    sort_by_score_descending(&mut results);

    if let Some(best) = results.first() {
        debug!(
            top_employee_id = best.employee_id,
            top_score = best.score,
            "ranked candidates for job description"
        );
    }

    results
}

/// Inverse matching: scores one employee against every job description
/// and returns the full list, best fit first.
#[instrument(skip_all, fields(
    employee_id = employee.employee_id,
    jobs = jobs.len(),
    run = run_id::current(),
))]
pub fn rank_jobs_for_employee(
    employee: &EmployeeForMatching,
    jobs: &[JobDescriptionForMatching],
) -> Vec<MatchingResult> {
    let mut results: Vec<_> = jobs.iter().map(|job| score_pair(job, employee)).collect();
    sort_by_score_descending(&mut results);

    if let Some(best) = results.first() {
        debug!(
            top_job_description_id = best.job_description_id,
            top_score = best.score,
            "ranked job descriptions for employee"
        );
    }

    results
}

/// Inverse matching over per-job fetch outcomes. Every successfully fetched
/// job description is scored and ranked; every failure is handed back
/// untouched, so one broken fetch never blocks the remaining scorings.
/// Whether to drop, retry or report the failures is the caller's policy.
pub fn rank_jobs_for_employee_partial<E>(
    employee: &EmployeeForMatching,
    fetched: Vec<Result<JobDescriptionForMatching, E>>,
) -> (Vec<MatchingResult>, Vec<E>) {
    let mut jobs = Vec::with_capacity(fetched.len());
    let mut failures = Vec::new();

    for outcome in fetched {
        match outcome {
            Ok(job) => jobs.push(job),
            Err(err) => failures.push(err),
        }
    }

    if !failures.is_empty() {
        warn!(
            employee_id = employee.employee_id,
            loaded = jobs.len(),
            failed = failures.len(),
            "inverse matching ran on a partial job set"
        );
    }

    (rank_jobs_for_employee(employee, &jobs), failures)
}
