use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_client::{ClientConfig, RecordsClient};
use pcv_core::{render_page, DiagnosisRegistry, EntryForm, FormField, PatientPage};
use pcv_types::{EntryKind, PatientId};

#[derive(Parser)]
#[command(name = "pcv")]
#[command(about = "PCV patient chart CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check the record service is up
    Ping,
    /// List all patients
    List,
    /// List the diagnosis reference set
    Diagnoses,
    /// Show one patient's chart
    Show {
        /// Patient identifier
        patient_id: String,
    },
    /// Append an entry to a patient's chart
    AddEntry {
        /// Patient identifier
        patient_id: String,
        #[command(subcommand)]
        entry: EntryCommand,
    },
}

#[derive(Subcommand)]
enum EntryCommand {
    /// A hospital stay
    Hospital {
        /// Entry date (YYYY-MM-DD)
        date: String,
        /// What happened
        description: String,
        /// Attending specialist
        specialist: String,
        /// Discharge date (YYYY-MM-DD)
        discharge_date: String,
        /// Discharge criteria
        discharge_criteria: String,
        /// Diagnosis codes (comma-separated)
        #[arg(long)]
        codes: Option<String>,
    },
    /// An occupational-health visit
    OccupationalHealth {
        /// Entry date (YYYY-MM-DD)
        date: String,
        /// What happened
        description: String,
        /// Attending specialist
        specialist: String,
        /// Employer name
        employer: String,
        /// Sick leave start (YYYY-MM-DD)
        #[arg(long)]
        sick_start: Option<String>,
        /// Sick leave end (YYYY-MM-DD)
        #[arg(long)]
        sick_end: Option<String>,
        /// Diagnosis codes (comma-separated)
        #[arg(long)]
        codes: Option<String>,
    },
    /// A routine health check
    HealthCheck {
        /// Entry date (YYYY-MM-DD)
        date: String,
        /// What happened
        description: String,
        /// Attending specialist
        specialist: String,
        /// Rating on the 0-3 scale
        rating: String,
        /// Diagnosis codes (comma-separated)
        #[arg(long)]
        codes: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive("pcv=warn".parse()?))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = ClientConfig::from_env()?;
    let client = RecordsClient::new(&config)?;

    match cli.command {
        Some(Commands::Ping) => {
            println!("{}", client.ping().await?);
        }
        Some(Commands::List) => {
            let patients = client.list_patients().await?;
            if patients.is_empty() {
                println!("No patients found.");
            } else {
                for patient in patients {
                    println!(
                        "{}  {} ({}, born {}), {}",
                        patient.id, patient.name, patient.gender, patient.date_of_birth,
                        patient.occupation
                    );
                }
            }
        }
        Some(Commands::Diagnoses) => {
            for diagnosis in client.get_diagnoses().await? {
                match &diagnosis.latin {
                    Some(latin) => println!("{}  {} ({latin})", diagnosis.code, diagnosis.name),
                    None => println!("{}  {}", diagnosis.code, diagnosis.name),
                }
            }
        }
        Some(Commands::Show { patient_id }) => {
            let patient_id = PatientId::parse(&patient_id)?;
            let patient = client.get_patient(&patient_id).await?;
            let registry = match client.get_diagnoses().await {
                Ok(diagnoses) => DiagnosisRegistry::new(diagnoses),
                Err(e) => {
                    tracing::warn!("diagnosis reference set unavailable: {e}");
                    DiagnosisRegistry::empty()
                }
            };
            print!("{}", render_page(&PatientPage::new(patient, registry)));
        }
        Some(Commands::AddEntry { patient_id, entry }) => {
            let patient_id = PatientId::parse(&patient_id)?;
            let new_entry = build_entry(entry).assemble()?;
            let created = client.add_entry(&patient_id, &new_entry).await?;
            println!("Appended {} entry {}", created.kind(), created.id());
        }
        None => {
            println!("Use 'pcv --help' for commands");
        }
    }

    Ok(())
}

/// Loads the command-line arguments into the same form the interactive
/// viewer uses, so assembly and validation stay in one place.
fn build_entry(entry: EntryCommand) -> EntryForm {
    let mut form = EntryForm::new();
    match entry {
        EntryCommand::Hospital {
            date,
            description,
            specialist,
            discharge_date,
            discharge_criteria,
            codes,
        } => {
            form.select_kind(EntryKind::Hospital);
            form.set_field(FormField::Date, &date);
            form.set_field(FormField::Description, &description);
            form.set_field(FormField::Specialist, &specialist);
            form.set_field(FormField::DischargeDate, &discharge_date);
            form.set_field(FormField::DischargeCriteria, &discharge_criteria);
            if let Some(codes) = codes {
                form.set_field(FormField::DiagnosisCodes, &codes);
            }
        }
        EntryCommand::OccupationalHealth {
            date,
            description,
            specialist,
            employer,
            sick_start,
            sick_end,
            codes,
        } => {
            form.select_kind(EntryKind::OccupationalHealth);
            form.set_field(FormField::Date, &date);
            form.set_field(FormField::Description, &description);
            form.set_field(FormField::Specialist, &specialist);
            form.set_field(FormField::EmployerName, &employer);
            if let Some(start) = sick_start {
                form.set_field(FormField::SickLeaveStart, &start);
            }
            if let Some(end) = sick_end {
                form.set_field(FormField::SickLeaveEnd, &end);
            }
            if let Some(codes) = codes {
                form.set_field(FormField::DiagnosisCodes, &codes);
            }
        }
        EntryCommand::HealthCheck {
            date,
            description,
            specialist,
            rating,
            codes,
        } => {
            form.select_kind(EntryKind::HealthCheck);
            form.set_field(FormField::Date, &date);
            form.set_field(FormField::Description, &description);
            form.set_field(FormField::Specialist, &specialist);
            form.set_field(FormField::HealthCheckRating, &rating);
            if let Some(codes) = codes {
                form.set_field(FormField::DiagnosisCodes, &codes);
            }
        }
    }
    form
}
