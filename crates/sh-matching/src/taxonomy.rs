//! Referential skill data: the type/skill/level rows as the HR backend
//! stores them, and the read-only lookup tables projections resolve
//! against.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillType {
    pub id: i64,
    pub type_name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub skill_type_id: Option<i64>,
}

/// One rung of a proficiency scale. `value` is what scoring compares;
/// `level_name` is the label shown to HR ("Notions", "Expert", ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillLevel {
    pub id: i64,
    pub level_name: String,
    pub description: Option<String>,
    pub value: i32,
}

/// Resolving a stored record into its matching view can fail when the
/// record references taxonomy rows that do not exist.
#[derive(Debug, Error, PartialEq)]
pub enum ProjectionError {
    #[error("record has not been saved yet (missing id)")]
    Unsaved,
    #[error("unknown skill {skill_id}")]
    UnknownSkill { skill_id: i64 },
    #[error("unknown skill level {level_id} for skill {skill_id}")]
    UnknownSkillLevel { skill_id: i64, level_id: i64 },
}

/// Immutable skill lookup, built once from the referential rows and shared
/// by every projection. Later rows win when an id repeats.
#[derive(Debug, Clone, Default)]
pub struct SkillCatalog {
    skills: HashMap<i64, Skill>,
    types: HashMap<i64, SkillType>,
}

impl SkillCatalog {
    pub fn new(types: Vec<SkillType>, skills: Vec<Skill>) -> Self {
        Self {
            skills: skills.into_iter().map(|s| (s.id, s)).collect(),
            types: types.into_iter().map(|t| (t.id, t)).collect(),
        }
    }

    pub fn get(&self, skill_id: i64) -> Option<&Skill> {
        self.skills.get(&skill_id)
    }

    pub fn name_of(&self, skill_id: i64) -> Option<&str> {
        self.get(skill_id).map(|s| s.name.as_str())
    }

    /// Name of the skill's type, when the skill is typed at all.
    pub fn type_name_of(&self, skill_id: i64) -> Option<&str> {
        let type_id = self.get(skill_id)?.skill_type_id?;
        self.types.get(&type_id).map(|t| t.type_name.as_str())
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

/// Immutable proficiency-scale lookup. Later rows win when an id repeats.
#[derive(Debug, Clone, Default)]
pub struct SkillLevelTable {
    levels: HashMap<i64, SkillLevel>,
}

impl SkillLevelTable {
    pub fn new(levels: Vec<SkillLevel>) -> Self {
        Self {
            levels: levels.into_iter().map(|l| (l.id, l)).collect(),
        }
    }

    pub fn get(&self, level_id: i64) -> Option<&SkillLevel> {
        self.levels.get(&level_id)
    }

    pub fn value_of(&self, level_id: i64) -> Option<i32> {
        self.get(level_id).map(|l| l.value)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}
