//! # Aplicaciones Subcommand
//!
//! Records dose applications. Before submitting, the patient and vaccine
//! lists are fetched concurrently and the chosen ids must appear in them, the
//! same constraint a selection form imposes. If either list cannot be
//! fetched the command fails with the backend error and submits nothing.

use std::io::Write;

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};

use vacunas_client::VacunasClient;
use vacunas_core::{CalendarDate, NewDoseApplication, PatientId, VaccineId};

use crate::render::Table;

/// Arguments for the `vacunas aplicaciones` subcommand.
#[derive(Args, Debug)]
pub struct ApplicationArgs {
    #[command(subcommand)]
    pub command: ApplicationCommand,
}

#[derive(Subcommand, Debug)]
pub enum ApplicationCommand {
    /// Show the patients and vaccines an application can reference.
    Options {
        /// Print the raw snapshot as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Record a vaccine dose given to a patient.
    Register(RegisterApplicationArgs),
}

#[derive(Args, Debug)]
pub struct RegisterApplicationArgs {
    /// Patient id.
    #[arg(long)]
    pub paciente_id: PatientId,

    /// Vaccine id.
    #[arg(long)]
    pub vacuna_id: VaccineId,

    /// Date the dose was given (YYYY-MM-DD).
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub fecha_aplicacion: CalendarDate,

    /// Date the next dose is due (YYYY-MM-DD).
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub proxima_dosis: CalendarDate,

    /// Free-text observations.
    #[arg(long, default_value = "")]
    pub observaciones: String,
}

/// Execute the aplicaciones subcommand.
pub async fn run_applications(
    args: &ApplicationArgs,
    client: &VacunasClient,
    out: &mut dyn Write,
) -> Result<u8> {
    match &args.command {
        ApplicationCommand::Options { json } => {
            let options = client.application_form_options().await;
            if *json {
                crate::write_json(
                    out,
                    &serde_json::json!({
                        "pacientes": options.patients,
                        "vacunas": options.vaccines,
                    }),
                )?;
                return Ok(0);
            }

            let mut patients = Table::new(["ID", "Paciente", "DNI"]);
            for p in &options.patients {
                patients.push_row([p.id.to_string(), p.name.clone(), p.dni.clone()]);
            }
            let mut vaccines = Table::new(["ID", "Vacuna"]);
            for v in &options.vaccines {
                vaccines.push_row([v.id.to_string(), v.name.clone()]);
            }

            writeln!(out, "Pacientes")?;
            patients.write_to(out)?;
            writeln!(out)?;
            writeln!(out, "Vacunas")?;
            vaccines.write_to(out)?;
            Ok(0)
        }
        ApplicationCommand::Register(reg) => {
            let options = client
                .try_application_form_options()
                .await
                .context("cannot load patients and vaccines to check the application")?;

            if options.patient(reg.paciente_id).is_none() {
                bail!(
                    "patient {} is not among the {} registered patients",
                    reg.paciente_id,
                    options.patients.len()
                );
            }
            if options.vaccine(reg.vacuna_id).is_none() {
                bail!(
                    "vaccine {} is not among the {} catalog vaccines",
                    reg.vacuna_id,
                    options.vaccines.len()
                );
            }

            let payload = NewDoseApplication {
                patient_id: reg.paciente_id,
                vaccine_id: reg.vacuna_id,
                applied_on: reg.fecha_aplicacion,
                next_dose: reg.proxima_dosis,
                observations: reg.observaciones.trim().to_string(),
            };

            let ok = client.applications().register(&payload).await;
            crate::report_submission(
                out,
                ok,
                "Aplicación de vacuna registrada exitosamente",
                "Error al registrar aplicación de vacuna",
            )
        }
    }
}
