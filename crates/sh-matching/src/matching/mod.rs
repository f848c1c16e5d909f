pub mod analytics;
pub mod assignment;
pub mod ranking;
pub mod scoring;

pub use analytics::{compute_analytics, MatchingAnalytics, SkillAnalysis};
pub use assignment::{select_for_assignment, AssignmentPolicy, AssignmentReport};
pub use ranking::{
    rank_employees_for_job, rank_jobs_for_employee, rank_jobs_for_employee_partial,
    MatchingResult,
};
pub use scoring::{compute_match, MatchScore, SkillGapDetail};
