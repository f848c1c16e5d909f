//! Job descriptions ("fiches de poste") as stored, and their projection
//! into the requirement view the matching engine scores against.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::taxonomy::{ProjectionError, SkillCatalog, SkillLevelTable};
use crate::{JobDescriptionForMatching, RequiredSkillLevel};

/// Requirement row linking a job description to a skill at a level.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobRequiredSkill {
    pub job_description_id: i64,
    pub skill_id: i64,
    pub required_skill_level_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobDescription {
    /// None until the backend has persisted the record.
    pub id: Option<i64>,
    pub emploi: String,
    pub filiere_activite: String,
    pub famille: String,
    pub finalite: Option<String>,
    pub niveau_exigence: Option<String>,
    pub niveau_exp: Option<String>,
    pub status: Option<String>,
    pub version: Option<String>,
    /// The backend serializes this relation under a camelCase key.
    #[serde(default, rename = "requiredSkills")]
    pub required_skills: Vec<JobRequiredSkill>,
}

impl JobDescription {
    /// Resolves the requirement rows against the taxonomy and flattens the
    /// record into the view scoring consumes. Rows keep their stored order,
    /// which is also the order gap details come back in. Unknown skill or
    /// level ids are errors, never silent zeros.
    #[instrument(skip_all, fields(job_description_id = self.id))]
    pub fn for_matching(
        &self,
        catalog: &SkillCatalog,
        levels: &SkillLevelTable,
    ) -> Result<JobDescriptionForMatching, ProjectionError> {
        let job_description_id = self.id.ok_or(ProjectionError::Unsaved)?;

        let mut required_skills_level = Vec::with_capacity(self.required_skills.len());
        for row in &self.required_skills {
            let skill = catalog
                .get(row.skill_id)
                .ok_or(ProjectionError::UnknownSkill {
                    skill_id: row.skill_id,
                })?;
            let level_value = levels.value_of(row.required_skill_level_id).ok_or(
                ProjectionError::UnknownSkillLevel {
                    skill_id: row.skill_id,
                    level_id: row.required_skill_level_id,
                },
            )?;

            required_skills_level.push(RequiredSkillLevel {
                skill_id: row.skill_id,
                skill_name: skill.name.clone(),
                level_id: row.required_skill_level_id,
                level_value,
            });
        }

        Ok(JobDescriptionForMatching {
            job_description_id,
            required_skills_level,
        })
    }
}
