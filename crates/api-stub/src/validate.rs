//! Submission validation.
//!
//! The record service is authoritative for content rules, so the checks
//! live here rather than in the viewer: every field of an incoming entry
//! is inspected on the raw JSON value and rejected with a message naming
//! the offending field. The message travels back verbatim in the `error`
//! body for the viewer to display.

use chrono::NaiveDate;
use pcv_types::{
    Discharge, HealthCheckRating, NewEntry, NewHealthCheckEntry, NewHospitalEntry,
    NewOccupationalHealthEntry, SickLeave,
};
use serde_json::Value;

/// Parses and validates a submitted entry body.
///
/// Returns the typed entry, or the user-facing rejection message.
pub fn parse_new_entry(value: &Value) -> Result<NewEntry, String> {
    let object = value
        .as_object()
        .ok_or_else(|| "Incorrect or missing entry data".to_owned())?;

    let date = parse_date(object.get("date"), "date")?;
    let description = parse_text(object.get("description"), "description")?;
    let specialist = parse_text(object.get("specialist"), "specialist")?;
    let diagnosis_codes = parse_diagnosis_codes(object.get("diagnosisCodes"))?;

    match object.get("type").and_then(Value::as_str) {
        Some("Hospital") => {
            let discharge = parse_discharge(object.get("discharge"))?;
            Ok(NewEntry::Hospital(NewHospitalEntry {
                date,
                description,
                specialist,
                diagnosis_codes,
                discharge,
            }))
        }
        Some("OccupationalHealth") => {
            let employer_name = parse_text(object.get("employerName"), "employerName")?;
            let sick_leave = parse_sick_leave(object.get("sickLeave"))?;
            Ok(NewEntry::OccupationalHealth(NewOccupationalHealthEntry {
                date,
                description,
                specialist,
                diagnosis_codes,
                employer_name,
                sick_leave,
            }))
        }
        Some("HealthCheck") => {
            let health_check_rating = parse_rating(object.get("healthCheckRating"))?;
            Ok(NewEntry::HealthCheck(NewHealthCheckEntry {
                date,
                description,
                specialist,
                diagnosis_codes,
                health_check_rating,
            }))
        }
        _ => Err("Incorrect or missing type".to_owned()),
    }
}

fn parse_text(value: Option<&Value>, field: &str) -> Result<String, String> {
    match value.and_then(Value::as_str) {
        Some(text) if !text.trim().is_empty() => Ok(text.to_owned()),
        _ => Err(format!("Incorrect or missing {field}")),
    }
}

fn parse_date(value: Option<&Value>, field: &str) -> Result<NaiveDate, String> {
    value
        .and_then(Value::as_str)
        .and_then(|raw| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
        .ok_or_else(|| format!("Incorrect or missing {field}"))
}

fn parse_diagnosis_codes(value: Option<&Value>) -> Result<Vec<String>, String> {
    match value {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(str::to_owned)
                    .ok_or_else(|| "Incorrect diagnosisCodes".to_owned())
            })
            .collect(),
        Some(_) => Err("Incorrect diagnosisCodes".to_owned()),
    }
}

fn parse_discharge(value: Option<&Value>) -> Result<Discharge, String> {
    let object = value
        .and_then(Value::as_object)
        .ok_or_else(|| "Incorrect or missing discharge".to_owned())?;
    Ok(Discharge {
        date: parse_date(object.get("date"), "discharge.date")?,
        criteria: parse_text(object.get("criteria"), "discharge.criteria")?,
    })
}

fn parse_sick_leave(value: Option<&Value>) -> Result<Option<SickLeave>, String> {
    let object = match value {
        None | Some(Value::Null) => return Ok(None),
        Some(value) => value
            .as_object()
            .ok_or_else(|| "Incorrect or missing sickLeave".to_owned())?,
    };
    Ok(Some(SickLeave {
        start_date: parse_date(object.get("startDate"), "sickLeave.startDate")?,
        end_date: parse_date(object.get("endDate"), "sickLeave.endDate")?,
    }))
}

fn parse_rating(value: Option<&Value>) -> Result<HealthCheckRating, String> {
    let raw = value
        .and_then(Value::as_u64)
        .ok_or_else(|| incorrect_rating(value))?;
    u8::try_from(raw)
        .ok()
        .and_then(|raw| HealthCheckRating::try_from(raw).ok())
        .ok_or_else(|| incorrect_rating(value))
}

fn incorrect_rating(value: Option<&Value>) -> String {
    match value {
        Some(value) => format!("Value of healthCheckRating incorrect: {value}"),
        None => "Incorrect or missing healthCheckRating".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn health_check_body() -> Value {
        json!({
            "type": "HealthCheck",
            "date": "2024-01-01",
            "description": "Annual checkup",
            "specialist": "Dr. X",
            "healthCheckRating": 2
        })
    }

    #[test]
    fn accepts_a_well_formed_health_check() {
        let entry = parse_new_entry(&health_check_body()).expect("valid body parses");
        match entry {
            NewEntry::HealthCheck(e) => {
                assert_eq!(e.health_check_rating, HealthCheckRating::HighRisk);
                assert!(e.diagnosis_codes.is_empty());
            }
            other => panic!("expected HealthCheck, got {other:?}"),
        }
    }

    #[test]
    fn rejects_out_of_range_rating_with_the_value_named() {
        let mut body = health_check_body();
        body["healthCheckRating"] = json!(4);

        let message = parse_new_entry(&body).expect_err("rating 4 must fail");
        assert_eq!(message, "Value of healthCheckRating incorrect: 4");
    }

    #[test]
    fn rejects_blank_description() {
        let mut body = health_check_body();
        body["description"] = json!("   ");

        let message = parse_new_entry(&body).expect_err("blank description must fail");
        assert_eq!(message, "Incorrect or missing description");
    }

    #[test]
    fn rejects_unknown_type() {
        let mut body = health_check_body();
        body["type"] = json!("Dental");

        let message = parse_new_entry(&body).expect_err("unknown type must fail");
        assert_eq!(message, "Incorrect or missing type");
    }

    #[test]
    fn hospital_needs_a_complete_discharge() {
        let body = json!({
            "type": "Hospital",
            "date": "2015-01-02",
            "description": "Observation",
            "specialist": "MD House",
            "discharge": { "date": "2015-01-16" }
        });

        let message = parse_new_entry(&body).expect_err("criteria missing");
        assert_eq!(message, "Incorrect or missing discharge.criteria");

        let body = json!({
            "type": "Hospital",
            "date": "2015-01-02",
            "description": "Observation",
            "specialist": "MD House"
        });
        let message = parse_new_entry(&body).expect_err("discharge missing");
        assert_eq!(message, "Incorrect or missing discharge");
    }

    #[test]
    fn occupational_health_allows_absent_sick_leave() {
        let body = json!({
            "type": "OccupationalHealth",
            "date": "2019-08-05",
            "description": "Exposure assessment",
            "specialist": "MD House",
            "employerName": "HyPD"
        });

        let entry = parse_new_entry(&body).expect("parses without sick leave");
        match entry {
            NewEntry::OccupationalHealth(e) => assert!(e.sick_leave.is_none()),
            other => panic!("expected OccupationalHealth, got {other:?}"),
        }
    }

    #[test]
    fn half_filled_sick_leave_is_rejected() {
        let body = json!({
            "type": "OccupationalHealth",
            "date": "2019-08-05",
            "description": "Exposure assessment",
            "specialist": "MD House",
            "employerName": "HyPD",
            "sickLeave": { "startDate": "2019-08-05" }
        });

        let message = parse_new_entry(&body).expect_err("end date missing");
        assert_eq!(message, "Incorrect or missing sickLeave.endDate");
    }

    #[test]
    fn diagnosis_codes_must_be_strings() {
        let mut body = health_check_body();
        body["diagnosisCodes"] = json!(["S03", 7]);

        let message = parse_new_entry(&body).expect_err("numeric code must fail");
        assert_eq!(message, "Incorrect diagnosisCodes");
    }
}
