//! Catalog record validation.
//!
//! # Purpose and responsibility
//! Enforces the field-level rules every record must satisfy before create or
//! edit persistence: required text fields, a parseable calendar date, the
//! access enumeration, and conditional URL well-formedness on the record and
//! its dependency entries.
//!
//! # Key invariants and assumptions
//! - Every rule is checked independently and all failures accumulate, so a
//!   caller sees the complete problem list in one response.
//! - On success the payload is converted into the typed [`NewModel`] draft;
//!   invalid data never reaches the store.
use crate::api::types::{DependencyPayload, FieldProblem, ModelPayload};
use crate::model::{AccessLevel, Dependency, NewModel};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use url::Url;

/// Validate a mutation payload and build the record draft.
///
/// # Errors
/// The non-empty list of per-field problems, surfaced verbatim to the caller.
pub fn model_from_payload(payload: &ModelPayload) -> Result<NewModel, Vec<FieldProblem>> {
    let mut problems = Vec::new();

    let name = require_text(
        &payload.name,
        "name",
        "Model name must not be empty",
        &mut problems,
    );
    let organization = require_text(
        &payload.organization,
        "organization",
        "Model organization must not be empty",
        &mut problems,
    );
    let modality = require_text(
        &payload.modality,
        "modality",
        "Model modality must not be empty",
        &mut problems,
    );

    let date_created = match payload.date_created.as_deref().and_then(parse_calendar_date) {
        Some(date) => Some(date),
        None => {
            problems.push(problem(
                "date_created",
                "Model date created must be a valid date",
            ));
            None
        }
    };

    let url = optional_url(&payload.url, "url", "Model url", &mut problems);
    let datasheet_url = optional_url(
        &payload.datasheet_url,
        "datasheet_url",
        "Model datasheet url",
        &mut problems,
    );

    let access = match payload.access.as_deref().and_then(AccessLevel::parse) {
        Some(level) => Some(level),
        None => {
            problems.push(problem(
                "access",
                "Model access must be one of: open, closed, limited",
            ));
            None
        }
    };

    let dependencies = convert_dependencies(
        payload.dependencies.as_deref().unwrap_or(&[]),
        &mut problems,
    );

    match (name, organization, modality, date_created, access) {
        (Some(name), Some(organization), Some(modality), Some(date_created), Some(access))
            if problems.is_empty() =>
        {
            Ok(NewModel {
                name,
                organization,
                description: payload.description.clone(),
                date_created,
                url,
                datasheet_url,
                modality,
                model_analysis: payload.model_analysis.clone(),
                dependencies,
                quality_control: payload.quality_control.clone(),
                access,
                size: or_not_known(&payload.size),
                license: or_not_known(&payload.license),
                intended_uses: or_not_known(&payload.intended_uses),
                prohibited_uses: or_not_known(&payload.prohibited_uses),
                monitoring: or_not_known(&payload.monitoring),
                feedback: or_not_known(&payload.feedback),
            })
        }
        _ => Err(problems),
    }
}

/// Accepted `date_created` forms: plain ISO dates, RFC 3339 date-times, and
/// date-times without an offset.
fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let value = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Some(datetime.date_naive());
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Some(datetime.date());
    }
    None
}

fn problem(field: &str, message: &str) -> FieldProblem {
    FieldProblem {
        field: field.to_string(),
        message: message.to_string(),
    }
}

fn require_text(
    value: &Option<String>,
    field: &str,
    message: &str,
    problems: &mut Vec<FieldProblem>,
) -> Option<String> {
    match value.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => Some(text.to_string()),
        _ => {
            problems.push(problem(field, message));
            None
        }
    }
}

/// Optional-URL rule: absent is fine; present must be non-empty; non-empty
/// must parse as an absolute URL.
fn optional_url(
    value: &Option<String>,
    field: &str,
    label: &str,
    problems: &mut Vec<FieldProblem>,
) -> Option<String> {
    let raw = value.as_deref()?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        problems.push(problem(field, &format!("{label} must not be empty if given")));
        return None;
    }
    if Url::parse(trimmed).is_err() {
        problems.push(problem(field, &format!("{label} must be a valid url if given")));
        return None;
    }
    Some(trimmed.to_string())
}

fn convert_dependencies(
    entries: &[DependencyPayload],
    problems: &mut Vec<FieldProblem>,
) -> Vec<Dependency> {
    let mut converted = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let name = match entry.name.as_deref().map(str::trim) {
            Some(text) if !text.is_empty() => text.to_string(),
            _ => {
                problems.push(problem(
                    &format!("dependencies[{index}].name"),
                    "Model dependency names must not be empty",
                ));
                continue;
            }
        };
        let url = optional_url(
            &entry.url,
            &format!("dependencies[{index}].url"),
            "Model dependency urls",
            problems,
        );
        converted.push(Dependency { name, url });
    }
    converted
}

fn or_not_known(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "not known".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_payload() -> ModelPayload {
        ModelPayload {
            name: Some("GPT-X".to_string()),
            organization: Some("Acme".to_string()),
            date_created: Some("2024-01-01".to_string()),
            modality: Some("text".to_string()),
            access: Some("open".to_string()),
            ..ModelPayload::default()
        }
    }

    fn fields(problems: &[FieldProblem]) -> Vec<&str> {
        problems.iter().map(|problem| problem.field.as_str()).collect()
    }

    #[test]
    fn minimal_payload_converts_with_defaults() {
        let draft = model_from_payload(&minimal_payload()).expect("valid");
        assert_eq!(draft.name, "GPT-X");
        assert_eq!(draft.access, AccessLevel::Open);
        assert_eq!(draft.size, "not known");
        assert_eq!(draft.license, "not known");
        assert_eq!(draft.monitoring, "not known");
        assert!(draft.dependencies.is_empty());
        assert!(draft.description.is_none());
    }

    #[test]
    fn required_text_fields_are_trimmed_not_just_present() {
        let mut payload = minimal_payload();
        payload.name = Some("   ".to_string());
        payload.organization = None;
        let problems = model_from_payload(&payload).expect_err("invalid");
        let fields = fields(&problems);
        assert!(fields.contains(&"name"));
        assert!(fields.contains(&"organization"));
    }

    #[test]
    fn failures_accumulate_instead_of_stopping_at_the_first() {
        let payload = ModelPayload::default();
        let problems = model_from_payload(&payload).expect_err("invalid");
        let fields = fields(&problems);
        for expected in ["name", "organization", "modality", "date_created", "access"] {
            assert!(fields.contains(&expected), "missing problem for {expected}");
        }
    }

    #[test]
    fn access_outside_the_enumeration_names_the_access_field() {
        let mut payload = minimal_payload();
        payload.access = Some("weird".to_string());
        let problems = model_from_payload(&payload).expect_err("invalid");
        assert!(
            problems
                .iter()
                .any(|problem| problem.field == "access"
                    && problem.message.contains("open, closed, limited"))
        );

        payload.access = Some("open closed".to_string());
        assert!(model_from_payload(&payload).is_err());
    }

    #[test]
    fn access_is_trimmed_and_case_insensitive() {
        let mut payload = minimal_payload();
        payload.access = Some("  Limited ".to_string());
        let draft = model_from_payload(&payload).expect("valid");
        assert_eq!(draft.access, AccessLevel::Limited);
    }

    #[test]
    fn date_created_accepts_common_iso_forms() {
        for value in ["2024-01-01", "2024-01-01T10:30:00Z", "2024-01-01T10:30:00"] {
            let mut payload = minimal_payload();
            payload.date_created = Some(value.to_string());
            let draft = model_from_payload(&payload).expect("valid date");
            assert_eq!(
                draft.date_created,
                NaiveDate::from_ymd_opt(2024, 1, 1).expect("date")
            );
        }
    }

    #[test]
    fn date_created_rejects_non_dates() {
        for value in [None, Some("yesterday".to_string()), Some("2024-13-40".to_string())] {
            let mut payload = minimal_payload();
            payload.date_created = value;
            let problems = model_from_payload(&payload).expect_err("invalid");
            assert!(fields(&problems).contains(&"date_created"));
        }
    }

    #[test]
    fn urls_are_optional_but_must_be_absolute_when_given() {
        let mut payload = minimal_payload();
        payload.url = Some("https://example.com/model".to_string());
        payload.datasheet_url = Some("".to_string());
        let problems = model_from_payload(&payload).expect_err("invalid");
        assert_eq!(fields(&problems), vec!["datasheet_url"]);

        payload.datasheet_url = Some("not a url".to_string());
        let problems = model_from_payload(&payload).expect_err("invalid");
        assert!(
            problems
                .iter()
                .any(|problem| problem.field == "datasheet_url"
                    && problem.message.contains("valid url"))
        );
    }

    #[test]
    fn dependency_entries_follow_the_name_and_url_rules() {
        let mut payload = minimal_payload();
        payload.dependencies = Some(vec![
            DependencyPayload {
                name: Some("The Pile".to_string()),
                url: Some("https://example.com/pile".to_string()),
            },
            DependencyPayload {
                name: Some("".to_string()),
                url: None,
            },
            DependencyPayload {
                name: Some("BookCorpus".to_string()),
                url: Some("nope".to_string()),
            },
        ]);
        let problems = model_from_payload(&payload).expect_err("invalid");
        let fields = fields(&problems);
        assert!(fields.contains(&"dependencies[1].name"));
        assert!(fields.contains(&"dependencies[2].url"));
    }

    #[test]
    fn dependency_order_is_preserved() {
        let mut payload = minimal_payload();
        payload.dependencies = Some(vec![
            DependencyPayload {
                name: Some("first".to_string()),
                url: None,
            },
            DependencyPayload {
                name: Some("second".to_string()),
                url: None,
            },
        ]);
        let draft = model_from_payload(&payload).expect("valid");
        let names: Vec<_> = draft
            .dependencies
            .iter()
            .map(|dependency| dependency.name.as_str())
            .collect();
        assert_eq!(names, vec!["first", "second"]);
    }
}
