//! Plain-text page rendering.
//!
//! Pure string building over [`PatientPage`] state. Rendering never fails
//! and never performs I/O; unknown diagnosis codes fall back to the
//! registry sentinel rather than breaking the page.

use pcv_types::Entry;

use crate::diagnoses::DiagnosisRegistry;
use crate::form::{EntryForm, FormField};
use crate::page::{FormSlot, PatientPage};

/// Renders the whole page: demographic header, one block per entry, the
/// inline alert when set, and the add-entry control or the open form.
pub fn render_page(page: &PatientPage) -> String {
    let patient = page.patient();
    let mut out = String::new();

    out.push_str(&format!("{} ({})\n", patient.name, patient.gender));
    out.push_str(&format!("born: {}\n", patient.date_of_birth));
    out.push_str(&format!("ssn: {}\n", patient.ssn));
    out.push_str(&format!("occupation: {}\n", patient.occupation));
    out.push('\n');

    if patient.entries.is_empty() {
        out.push_str("no entries yet\n");
    } else {
        out.push_str("entries:\n");
        for entry in &patient.entries {
            render_entry(&mut out, entry, page.registry());
        }
    }

    if let Some(alert) = page.alert() {
        out.push('\n');
        out.push_str(&format!("! {alert}\n"));
    }

    out.push('\n');
    match page.form() {
        FormSlot::Hidden => out.push_str("type 'add' to record a new entry\n"),
        FormSlot::Visible(form) => {
            out.push_str("new entry\n");
            render_form_fields(&mut out, form);
            out.push_str("submit with 'submit', discard with 'cancel'\n");
        }
        FormSlot::Submitting(form) => {
            out.push_str("new entry (submitting)\n");
            render_form_fields(&mut out, form);
        }
    }

    out
}

fn render_entry(out: &mut String, entry: &Entry, registry: &DiagnosisRegistry) {
    out.push_str(&format!("[{}] {}\n", entry.kind(), entry.date()));
    out.push_str(&format!("  {}\n", entry.description()));
    out.push_str(&format!("  specialist: {}\n", entry.specialist()));

    if !entry.diagnosis_codes().is_empty() {
        out.push_str("  diagnoses:\n");
        for code in entry.diagnosis_codes() {
            out.push_str(&format!("    {} {}\n", code, registry.describe(code)));
        }
    }

    match entry {
        Entry::Hospital(e) => {
            out.push_str(&format!(
                "  discharged {}: {}\n",
                e.discharge.date, e.discharge.criteria
            ));
        }
        Entry::OccupationalHealth(e) => {
            out.push_str(&format!("  employer: {}\n", e.employer_name));
            if let Some(leave) = &e.sick_leave {
                out.push_str(&format!(
                    "  sick leave: {} to {}\n",
                    leave.start_date, leave.end_date
                ));
            }
        }
        Entry::HealthCheck(e) => {
            out.push_str(&format!(
                "  rating: {} ({})\n",
                e.health_check_rating,
                u8::from(e.health_check_rating)
            ));
        }
    }
}

fn render_form_fields(out: &mut String, form: &EntryForm) {
    match form.selected_kind() {
        Some(kind) => out.push_str(&format!("  kind: {kind}\n")),
        None => out.push_str("  kind: (none selected)\n"),
    }

    for field in FormField::SHARED {
        out.push_str(&format!("  {}: {}\n", field.label(), form.field(field)));
    }
    if let Some(kind) = form.selected_kind() {
        for &field in FormField::for_kind(kind) {
            out.push_str(&format!("  {}: {}\n", field.label(), form.field(field)));
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pcv_types::{
        Diagnosis, Discharge, EntryKind, Gender, HealthCheckEntry, HealthCheckRating,
        HospitalEntry, OccupationalHealthEntry, Patient, PatientId, SickLeave,
    };

    use super::*;
    use crate::page::PatientPage;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn sample_patient(entries: Vec<Entry>) -> Patient {
        Patient {
            id: PatientId::parse("d2773336-f723-11e9-8f0b-362b9e155667")
                .expect("fixture id is canonical"),
            name: "John McClane".into(),
            date_of_birth: date(1986, 7, 9),
            ssn: "090786-122X".into(),
            gender: Gender::Male,
            occupation: "New york city cop".into(),
            entries,
        }
    }

    fn one_of_each_kind() -> Vec<Entry> {
        vec![
            Entry::Hospital(HospitalEntry {
                id: "e1".into(),
                date: date(2015, 1, 2),
                description: "Healing time appr. 2 weeks.".into(),
                specialist: "MD House".into(),
                diagnosis_codes: vec!["S62.5".into(), "B99".into()],
                discharge: Discharge {
                    date: date(2015, 1, 16),
                    criteria: "Thumb has healed.".into(),
                },
            }),
            Entry::OccupationalHealth(OccupationalHealthEntry {
                id: "e2".into(),
                date: date(2019, 8, 5),
                description: "Exposure assessment.".into(),
                specialist: "MD House".into(),
                diagnosis_codes: vec![],
                employer_name: "HyPD".into(),
                sick_leave: Some(SickLeave {
                    start_date: date(2019, 8, 5),
                    end_date: date(2019, 8, 28),
                }),
            }),
            Entry::HealthCheck(HealthCheckEntry {
                id: "e3".into(),
                date: date(2019, 10, 20),
                description: "Yearly control visit.".into(),
                specialist: "MD House".into(),
                diagnosis_codes: vec![],
                health_check_rating: HealthCheckRating::Healthy,
            }),
        ]
    }

    fn entry_block_count(rendered: &str) -> usize {
        rendered.lines().filter(|line| line.starts_with('[')).count()
    }

    #[test]
    fn empty_patient_renders_zero_entry_blocks_and_the_add_control() {
        let page = PatientPage::new(sample_patient(vec![]), DiagnosisRegistry::empty());
        let rendered = render_page(&page);

        assert!(rendered.contains("John McClane (male)"));
        assert!(rendered.contains("occupation: New york city cop"));
        assert_eq!(entry_block_count(&rendered), 0);
        assert!(rendered.contains("no entries yet"));
        assert!(rendered.contains("type 'add' to record a new entry"));
    }

    #[test]
    fn one_block_per_entry_with_kind_specific_lines() {
        let registry = DiagnosisRegistry::new(vec![Diagnosis {
            code: "S62.5".into(),
            name: "Fracture of metacarpal bone".into(),
            latin: None,
        }]);
        let page = PatientPage::new(sample_patient(one_of_each_kind()), registry);
        let rendered = render_page(&page);

        assert_eq!(entry_block_count(&rendered), 3);
        assert!(rendered.contains("[Hospital] 2015-01-02"));
        assert!(rendered.contains("discharged 2015-01-16: Thumb has healed."));
        assert!(rendered.contains("employer: HyPD"));
        assert!(rendered.contains("sick leave: 2019-08-05 to 2019-08-28"));
        assert!(rendered.contains("rating: healthy (0)"));
    }

    #[test]
    fn diagnosis_codes_resolve_through_the_registry() {
        let registry = DiagnosisRegistry::new(vec![Diagnosis {
            code: "S62.5".into(),
            name: "Fracture of metacarpal bone".into(),
            latin: None,
        }]);
        let page = PatientPage::new(sample_patient(one_of_each_kind()), registry);
        let rendered = render_page(&page);

        assert!(rendered.contains("S62.5 Fracture of metacarpal bone"));
        assert!(rendered.contains("B99 Unknown diagnosis code"));
    }

    #[test]
    fn alert_is_rendered_inline() {
        let mut page = PatientPage::new(sample_patient(vec![]), DiagnosisRegistry::empty());
        page.submit_failed("Incorrect or missing description");
        let rendered = render_page(&page);
        assert!(rendered.contains("! Incorrect or missing description"));
    }

    #[test]
    fn visible_form_shows_only_the_selected_kinds_fields() {
        let mut page = PatientPage::new(sample_patient(vec![]), DiagnosisRegistry::empty());
        page.open_form();
        {
            let form = page.form_mut().expect("form is visible");
            form.select_kind(EntryKind::HealthCheck);
            form.set_field(FormField::Description, "Annual checkup");
            form.set_field(FormField::HealthCheckRating, "2");
        }

        let rendered = render_page(&page);
        assert!(rendered.contains("kind: HealthCheck"));
        assert!(rendered.contains("  description: Annual checkup"));
        assert!(rendered.contains("  rating: 2"));
        assert!(!rendered.contains("employer name:"));
        assert!(!rendered.contains("discharge date:"));
        assert!(rendered.contains("submit with 'submit', discard with 'cancel'"));
    }

    #[test]
    fn submitting_form_is_marked_and_keeps_its_fields() {
        let mut page = PatientPage::new(sample_patient(vec![]), DiagnosisRegistry::empty());
        page.open_form();
        {
            let form = page.form_mut().expect("form is visible");
            form.select_kind(EntryKind::HealthCheck);
            form.set_field(FormField::Description, "Annual checkup");
            form.set_field(FormField::Date, "2024-01-01");
            form.set_field(FormField::HealthCheckRating, "2");
        }
        page.begin_submit().expect("submit assembles");

        let rendered = render_page(&page);
        assert!(rendered.contains("new entry (submitting)"));
        assert!(rendered.contains("  description: Annual checkup"));
        assert!(!rendered.contains("submit with 'submit'"));
    }
}
