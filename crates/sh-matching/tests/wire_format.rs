//! Pins the JSON shapes exchanged with the HR backend. Matching payloads
//! are snake_case, analytics are camelCase except `skill_name`, and the
//! job relation travels under `requiredSkills`. Field renames here break
//! real consumers.

use serde_json::{from_value, json, to_value};

use sh_matching::employee::Employee;
use sh_matching::job::JobDescription;
use sh_matching::matching::{compute_analytics, MatchingResult};
use sh_matching::MatchingRequest;

#[test]
fn matching_request_parses_the_backend_payload_and_ranks() {
    let payload = json!({
        "job_description": {
            "job_description_id": 7,
            "required_skills_level": [
                {"skill_id": 10, "skill_name": "Soudure", "level_id": 4, "level_value": 4}
            ]
        },
        "employees": [
            {
                "employee_id": 1,
                "name": "Anne",
                "position": "Technicien",
                "actual_skills_level": [
                    {"skill_id": 10, "skill_name": "Soudure", "level_id": 2, "level_value": 2}
                ]
            },
            {
                "employee_id": 2,
                "name": "Benoit",
                "position": "Technicien",
                "actual_skills_level": [
                    {"skill_id": 10, "skill_name": "Soudure", "level_id": 4, "level_value": 4}
                ]
            }
        ]
    });

    let request: MatchingRequest = from_value(payload).unwrap();
    let ranking = request.rank();

    assert_eq!(ranking.len(), 2);
    assert_eq!(ranking[0].employee_id, 2);
    assert_eq!(ranking[0].score, 100.0);
    assert_eq!(ranking[1].employee_id, 1);
    assert_eq!(ranking[1].score, 50.0);
}

#[test]
fn matching_results_serialize_snake_case() {
    let payload = json!({
        "job_description": {
            "job_description_id": 7,
            "required_skills_level": [
                {"skill_id": 10, "skill_name": "Soudure", "level_id": 4, "level_value": 4}
            ]
        },
        "employees": [
            {
                "employee_id": 1,
                "name": "Anne",
                "position": "Technicien",
                "actual_skills_level": [
                    {"skill_id": 10, "skill_name": "Soudure", "level_id": 3, "level_value": 3}
                ]
            }
        ]
    });

    let request: MatchingRequest = from_value(payload).unwrap();
    let wire = to_value(request.rank()).unwrap();

    assert_eq!(wire[0]["job_description_id"], 7);
    assert_eq!(wire[0]["employee_id"], 1);
    assert_eq!(wire[0]["score"], 75.0);
    let detail = &wire[0]["skill_gap_details"][0];
    assert_eq!(detail["skill_name"], "Soudure");
    assert_eq!(detail["required_skill_level"], 4);
    assert_eq!(detail["actual_skill_level"], 3);
    assert_eq!(detail["gap"], 1);
}

#[test]
fn analytics_serialize_camel_case_with_the_historical_exception() {
    let results: Vec<MatchingResult> = from_value(json!([
        {
            "job_description_id": 7,
            "employee_id": 1,
            "name": "Anne",
            "position": "Technicien",
            "score": 50.0,
            "skill_gap_details": [
                {
                    "skill_id": 10,
                    "skill_name": "Soudure",
                    "required_skill_level": 4,
                    "actual_skill_level": 2,
                    "gap": 2
                }
            ]
        }
    ]))
    .unwrap();

    let wire = to_value(compute_analytics(&results)).unwrap();

    assert_eq!(wire["totalCandidates"], 1);
    assert_eq!(wire["averageScore"], 50.0);
    assert_eq!(wire["topScore"], 50.0);

    let skill = &wire["skillsAnalysis"][0];
    assert_eq!(skill["skill_name"], "Soudure");
    assert_eq!(skill["averageGap"], 2.0);
    assert_eq!(skill["candidatesWithSkill"], 1);
    assert_eq!(skill["totalCandidates"], 1);
    assert!(skill.get("skillName").is_none());
}

#[test]
fn job_description_reads_the_camel_case_relation_key() {
    let job: JobDescription = from_value(json!({
        "id": 7,
        "emploi": "Soudeur qualifie",
        "filiere_activite": "Production",
        "famille": "Fabrication",
        "status": "ACTIVE",
        "requiredSkills": [
            {"job_description_id": 7, "skill_id": 10, "required_skill_level_id": 4}
        ]
    }))
    .unwrap();

    assert_eq!(job.id, Some(7));
    assert_eq!(job.emploi, "Soudeur qualifie");
    assert_eq!(job.status.as_deref(), Some("ACTIVE"));
    assert_eq!(job.required_skills.len(), 1);
    assert_eq!(job.required_skills[0].skill_id, 10);

    let wire = to_value(&job).unwrap();
    assert!(wire.get("requiredSkills").is_some());
    assert!(wire.get("required_skills").is_none());
}

#[test]
fn employee_payloads_tolerate_missing_optional_blocks() {
    let employee: Employee = from_value(json!({
        "id": 5,
        "name": "Anne Martin",
        "position": "Technicien",
        "email": "anne.martin@example.test",
        "hire_date": "2021-03-15"
    }))
    .unwrap();

    assert_eq!(employee.id, Some(5));
    assert!(employee.skills.is_empty());
    assert_eq!(
        employee.hire_date.map(|d| d.to_string()),
        Some("2021-03-15".to_string())
    );
    assert_eq!(employee.job_description_id, None);
}

#[test]
fn employee_skill_rows_carry_evaluation_metadata() {
    let employee: Employee = from_value(json!({
        "id": 5,
        "name": "Anne Martin",
        "position": "Technicien",
        "email": "anne.martin@example.test",
        "skills": [
            {
                "employee_id": 5,
                "skill_id": 10,
                "actual_skill_level_id": 3,
                "acquired_date": "2022-09-01",
                "certification": "Licence soudage 111",
                "last_evaluated_date": "2024-01-12"
            },
            {
                "employee_id": 5,
                "skill_id": 11,
                "actual_skill_level_id": null
            }
        ]
    }))
    .unwrap();

    assert_eq!(employee.skills.len(), 2);
    assert_eq!(employee.skills[0].actual_skill_level_id, Some(3));
    assert_eq!(
        employee.skills[0].certification.as_deref(),
        Some("Licence soudage 111")
    );
    assert_eq!(employee.skills[1].actual_skill_level_id, None);
    assert_eq!(employee.skills[1].acquired_date, None);
}
