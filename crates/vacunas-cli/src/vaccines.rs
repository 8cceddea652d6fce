//! # Vacunas Subcommand
//!
//! Lists the vaccine catalog and registers new vaccines.

use std::io::Write;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use vacunas_client::VacunasClient;
use vacunas_core::NewVaccine;

use crate::render::Table;

/// Arguments for the `vacunas vacunas` subcommand.
#[derive(Args, Debug)]
pub struct VaccineArgs {
    #[command(subcommand)]
    pub command: VaccineCommand,
}

#[derive(Subcommand, Debug)]
pub enum VaccineCommand {
    /// List the vaccine catalog.
    List {
        /// Print the raw snapshot as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Add a vaccine to the catalog.
    Register {
        /// Vaccine name.
        #[arg(long)]
        nombre: String,

        /// Description.
        #[arg(long)]
        descripcion: String,
    },
}

/// Execute the vacunas subcommand.
pub async fn run_vaccines(
    args: &VaccineArgs,
    client: &VacunasClient,
    out: &mut dyn Write,
) -> Result<u8> {
    match &args.command {
        VaccineCommand::List { json } => {
            let vaccines = client.vaccines().list().await;
            if *json {
                crate::write_json(out, &vaccines)?;
                return Ok(0);
            }

            if vaccines.is_empty() {
                writeln!(out, "No hay vacunas registradas")?;
                return Ok(0);
            }

            let mut table = Table::new(["ID", "Nombre", "Descripción"]);
            for v in &vaccines {
                table.push_row([v.id.to_string(), v.name.clone(), v.description.clone()]);
            }
            writeln!(out, "Vacunas Disponibles ({})", vaccines.len())?;
            table.write_to(out)?;
            Ok(0)
        }
        VaccineCommand::Register {
            nombre,
            descripcion,
        } => {
            let payload = NewVaccine {
                name: nombre.trim().to_string(),
                description: descripcion.trim().to_string(),
            };
            payload.validate().context("invalid vaccine")?;

            let ok = client.vaccines().register(&payload).await;
            crate::report_submission(
                out,
                ok,
                "Vacuna registrada exitosamente",
                "Error al registrar vacuna",
            )
        }
    }
}
