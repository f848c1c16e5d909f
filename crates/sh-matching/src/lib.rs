//! Skill-matching engine for the Smarthire HR platform: scores employees
//! against the skill requirements of a job description ("fiche de poste"),
//! ranks the results and derives auto-assignment recommendations.

pub mod employee;
pub mod job;
pub mod logging;
pub mod matching;
pub mod run_id;
pub mod taxonomy;

use serde::{Deserialize, Serialize};

// Matching view models: the typed records collaborators hand to the engine.
// Field names follow the Smarthire client's JSON wire model.

/// One skill requirement of a job description: the minimum proficiency
/// (`level_value`) demanded for `skill_id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequiredSkillLevel {
    pub skill_id: i64,
    pub skill_name: String,
    /// Taxonomy row the value was resolved from; carried on the wire,
    /// ignored by the scoring algorithm.
    pub level_id: i64,
    pub level_value: i32,
}

/// One entry of an employee's skill profile: the proficiency the employee
/// currently holds for `skill_id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActualSkillLevel {
    pub skill_id: i64,
    pub skill_name: String,
    pub level_id: i64,
    pub level_value: i32,
}

/// Job description projected for matching: identity plus its requirement set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobDescriptionForMatching {
    pub job_description_id: i64,
    pub required_skills_level: Vec<RequiredSkillLevel>,
}

/// Employee projected for matching: identity, display fields and the actual
/// skill profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeForMatching {
    pub employee_id: i64,
    pub name: String,
    pub position: String,
    pub actual_skills_level: Vec<ActualSkillLevel>,
}

/// Request envelope pairing one job description with the candidate pool,
/// as submitted by the calling layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchingRequest {
    pub job_description: JobDescriptionForMatching,
    pub employees: Vec<EmployeeForMatching>,
}

impl MatchingRequest {
    /// Ranks the enclosed candidate pool against the enclosed job
    /// description, best match first.
    pub fn rank(&self) -> Vec<matching::MatchingResult> {
        matching::rank_employees_for_job(&self.job_description, &self.employees)
    }
}
