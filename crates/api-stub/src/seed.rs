//! Fictional seed data served by the stub.

use chrono::NaiveDate;
use pcv_types::{
    Diagnosis, Discharge, Entry, Gender, HealthCheckEntry, HealthCheckRating, HospitalEntry,
    OccupationalHealthEntry, Patient, PatientId, SickLeave,
};

/// A patient guaranteed to exist with no entries recorded yet.
pub const EMPTY_PATIENT_ID: &str = "d2773336-f723-11e9-8f0b-362b9e155667";

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("seed dates are valid")
}

fn id(raw: &str) -> PatientId {
    PatientId::parse(raw).expect("seed ids are canonical")
}

pub fn patients() -> Vec<Patient> {
    vec![
        Patient {
            id: id(EMPTY_PATIENT_ID),
            name: "John McClane".into(),
            date_of_birth: date(1986, 7, 9),
            ssn: "090786-122X".into(),
            gender: Gender::Male,
            occupation: "New york city cop".into(),
            entries: vec![],
        },
        Patient {
            id: id("d2773598-f723-11e9-8f0b-362b9e155667"),
            name: "Dana Scully".into(),
            date_of_birth: date(1974, 1, 5),
            ssn: "050174-432N".into(),
            gender: Gender::Female,
            occupation: "Forensic Pathologist".into(),
            entries: vec![
                Entry::Hospital(HospitalEntry {
                    id: "d811e46d-70b3-4d90-b090-4535c7cf8fb1".into(),
                    date: date(2015, 1, 2),
                    description: "Healing time appr. 2 weeks. Patient doesn't remember how she got the injury.".into(),
                    specialist: "MD House".into(),
                    diagnosis_codes: vec!["S62.5".into()],
                    discharge: Discharge {
                        date: date(2015, 1, 16),
                        criteria: "Thumb has healed.".into(),
                    },
                }),
                Entry::HealthCheck(HealthCheckEntry {
                    id: "b4f4eca1-2aa7-4b13-9a18-4a5535c3c8da".into(),
                    date: date(2019, 10, 20),
                    description: "Yearly control visit. Cholesterol levels back to normal.".into(),
                    specialist: "MD House".into(),
                    diagnosis_codes: vec![],
                    health_check_rating: HealthCheckRating::Healthy,
                }),
            ],
        },
        Patient {
            id: id("d2773822-f723-11e9-8f0b-362b9e155667"),
            name: "Martin Riggs".into(),
            date_of_birth: date(1979, 1, 30),
            ssn: "300179-777A".into(),
            gender: Gender::Male,
            occupation: "Cop".into(),
            entries: vec![Entry::OccupationalHealth(OccupationalHealthEntry {
                id: "fcd59fa6-e0bb-4ffa-92c3-3d24aeeb5f1a".into(),
                date: date(2019, 8, 5),
                description: "Patient mistakenly found himself in a nuclear plant waste site without protection gear. Very minor radiation poisoning.".into(),
                specialist: "MD House".into(),
                // Z74.3 is deliberately outside the reference set below.
                diagnosis_codes: vec!["Z57.1".into(), "Z74.3".into()],
                employer_name: "HyPD".into(),
                sick_leave: Some(SickLeave {
                    start_date: date(2019, 8, 5),
                    end_date: date(2019, 8, 28),
                }),
            })],
        },
        Patient {
            id: id("d27736ec-f723-11e9-8f0b-362b9e155667"),
            name: "Hans Gruber".into(),
            date_of_birth: date(1970, 1, 1),
            ssn: "010170-555L".into(),
            gender: Gender::Other,
            occupation: "Technician".into(),
            entries: vec![],
        },
        Patient {
            id: id("d2773c6e-f723-11e9-8f0b-362b9e155667"),
            name: "Matti Luukkainen".into(),
            date_of_birth: date(1971, 4, 9),
            ssn: "090471-8890".into(),
            gender: Gender::Male,
            occupation: "Digital evangelist".into(),
            entries: vec![Entry::HealthCheck(HealthCheckEntry {
                id: "54a8746e-34c4-4cf4-bf72-bfecd039be9a".into(),
                date: date(2019, 5, 1),
                description: "Digital overdose, very bytestatic. Otherwise healthy.".into(),
                specialist: "Sandra Salonen".into(),
                diagnosis_codes: vec![],
                health_check_rating: HealthCheckRating::Healthy,
            })],
        },
    ]
}

pub fn diagnoses() -> Vec<Diagnosis> {
    vec![
        Diagnosis {
            code: "M24.2".into(),
            name: "Disorder of ligament".into(),
            latin: Some("Morbositas ligamenti".into()),
        },
        Diagnosis {
            code: "S03.5".into(),
            name: "Sprain of joints and ligaments of other and unspecified parts of head".into(),
            latin: Some("Distorsio non specificata capitis".into()),
        },
        Diagnosis {
            code: "S62.5".into(),
            name: "Fracture of thumb".into(),
            latin: Some("Fractura digiti primi".into()),
        },
        Diagnosis {
            code: "Z57.1".into(),
            name: "Occupational exposure to radiation".into(),
            latin: None,
        },
        Diagnosis {
            code: "J10.1".into(),
            name: "Influenza with other respiratory manifestations".into(),
            latin: Some("Influenza cum aliis manifestationibus respiratoriis".into()),
        },
        Diagnosis {
            code: "F43.2".into(),
            name: "Adjustment disorders".into(),
            latin: Some("Perturbationes adaptationis".into()),
        },
    ]
}
