//! # Pacientes Subcommand
//!
//! Lists registered patients and registers new ones.

use std::io::Write;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use vacunas_client::VacunasClient;
use vacunas_core::{CalendarDate, Gender, NewPatient};

use crate::render::Table;

/// Arguments for the `vacunas pacientes` subcommand.
#[derive(Args, Debug)]
pub struct PatientArgs {
    #[command(subcommand)]
    pub command: PatientCommand,
}

#[derive(Subcommand, Debug)]
pub enum PatientCommand {
    /// List registered patients.
    List {
        /// Print the raw snapshot as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Register a new patient.
    Register(RegisterPatientArgs),
}

#[derive(Args, Debug)]
pub struct RegisterPatientArgs {
    /// Full name.
    #[arg(long)]
    pub nombre: String,

    /// National identity document number.
    #[arg(long)]
    pub dni: String,

    /// Date of birth (YYYY-MM-DD).
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub fecha_nacimiento: CalendarDate,

    /// Gender code: M, F or Otro.
    #[arg(long, default_value = "M")]
    pub genero: Gender,
}

impl RegisterPatientArgs {
    fn to_payload(&self) -> NewPatient {
        NewPatient {
            name: self.nombre.trim().to_string(),
            dni: self.dni.trim().to_string(),
            birth_date: self.fecha_nacimiento,
            gender: self.genero,
        }
    }
}

/// Execute the pacientes subcommand.
pub async fn run_patients(
    args: &PatientArgs,
    client: &VacunasClient,
    out: &mut dyn Write,
) -> Result<u8> {
    match &args.command {
        PatientCommand::List { json } => {
            let patients = client.patients().list().await;
            if *json {
                crate::write_json(out, &patients)?;
                return Ok(0);
            }

            if patients.is_empty() {
                writeln!(out, "No hay pacientes registrados")?;
                return Ok(0);
            }

            let mut table = Table::new(["ID", "Nombre", "DNI", "Fecha Nac.", "Género"]);
            for p in &patients {
                table.push_row([
                    p.id.to_string(),
                    p.name.clone(),
                    p.dni.clone(),
                    p.birth_date.to_display_string(),
                    p.gender.label().to_string(),
                ]);
            }
            writeln!(out, "Pacientes Registrados ({})", patients.len())?;
            table.write_to(out)?;
            Ok(0)
        }
        PatientCommand::Register(reg) => {
            let payload = reg.to_payload();
            payload.validate().context("invalid patient")?;

            let ok = client.patients().register(&payload).await;
            crate::report_submission(
                out,
                ok,
                "Paciente registrado exitosamente",
                "Error al registrar paciente",
            )
        }
    }
}
