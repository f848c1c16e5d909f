//! Employee records as the HR backend stores them, and their projection
//! into the flat view the matching engine scores.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::taxonomy::{ProjectionError, SkillCatalog, SkillLevelTable};
use crate::{ActualSkillLevel, EmployeeForMatching};

/// One evaluated (or not yet evaluated) skill held by an employee.
/// `actual_skill_level_id` is absent until the first evaluation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeSkill {
    pub employee_id: i64,
    pub skill_id: i64,
    pub actual_skill_level_id: Option<i64>,
    pub acquired_date: Option<NaiveDate>,
    pub certification: Option<String>,
    pub last_evaluated_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// None until the backend has persisted the record.
    pub id: Option<i64>,
    pub name: String,
    pub position: String,
    pub email: String,
    pub hire_date: Option<NaiveDate>,
    pub job_description_id: Option<i64>,
    #[serde(default)]
    pub skills: Vec<EmployeeSkill>,
}

impl Employee {
    /// Resolves the stored skill rows against the taxonomy and flattens the
    /// record into the view scoring consumes. Skill rows keep their stored
    /// order. A row whose skill or level id is missing from the tables is an
    /// error, never a silent zero; a row that was simply never evaluated
    /// projects to level value 0.
    #[instrument(skip_all, fields(employee_id = self.id))]
    pub fn for_matching(
        &self,
        catalog: &SkillCatalog,
        levels: &SkillLevelTable,
    ) -> Result<EmployeeForMatching, ProjectionError> {
        let employee_id = self.id.ok_or(ProjectionError::Unsaved)?;

        let mut actual_skills_level = Vec::with_capacity(self.skills.len());
        for row in &self.skills {
            let skill = catalog
                .get(row.skill_id)
                .ok_or(ProjectionError::UnknownSkill {
                    skill_id: row.skill_id,
                })?;

            let level_value = match row.actual_skill_level_id {
                Some(level_id) => {
                    levels
                        .value_of(level_id)
                        .ok_or(ProjectionError::UnknownSkillLevel {
                            skill_id: row.skill_id,
                            level_id,
                        })?
                }
                None => 0,
            };

            actual_skills_level.push(ActualSkillLevel {
                skill_id: row.skill_id,
                skill_name: skill.name.clone(),
                level_id: row.actual_skill_level_id.unwrap_or_default(),
                level_value,
            });
        }

        Ok(EmployeeForMatching {
            employee_id,
            name: self.name.clone(),
            position: self.position.clone(),
            actual_skills_level,
        })
    }

    pub fn is_assigned(&self) -> bool {
        self.job_description_id.is_some()
    }

    /// Points the employee at a job description. Persisting the change is
    /// the caller's concern.
    pub fn assign_to(&mut self, job_description_id: i64) {
        self.job_description_id = Some(job_description_id);
    }
}
