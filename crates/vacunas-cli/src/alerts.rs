//! # Alertas Subcommand
//!
//! Fetches pending doses, classifies each one against the reference day and
//! renders the count summary followed by the alert table.
//!
//! Row markers follow [`Highlight`]: `!!` for flagged (overdue) rows, `*` for
//! highlighted (due today) rows.

use std::io::Write;

use anyhow::Result;
use clap::Args;

use vacunas_client::VacunasClient;
use vacunas_core::{Alert, AlertSummary, CalendarDate, Highlight};

use crate::render::Table;

/// Arguments for the `vacunas alertas` subcommand.
#[derive(Args, Debug)]
pub struct AlertArgs {
    /// Classify against this day instead of the current date.
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub as_of: Option<CalendarDate>,

    /// Print the raw snapshot as JSON (no computed status).
    #[arg(long)]
    pub json: bool,
}

/// Execute the alertas subcommand.
pub async fn run_alerts(args: &AlertArgs, client: &VacunasClient, out: &mut dyn Write) -> Result<u8> {
    let alerts = client.alerts().list().await;

    if args.json {
        crate::write_json(out, &alerts)?;
        return Ok(0);
    }

    let today = args.as_of.unwrap_or_else(CalendarDate::today);
    render_board(&alerts, today, out)?;
    Ok(0)
}

/// Render the summary, table and legend for `alerts` as of `today`.
pub fn render_board(alerts: &[Alert], today: CalendarDate, out: &mut dyn Write) -> Result<()> {
    let summary = AlertSummary::as_of(alerts, today);

    writeln!(out, "Alertas de Vacunas ({})", today.to_display_string())?;
    writeln!(out, "  Vacunas Vencidas: {}", summary.overdue)?;
    writeln!(out, "  Para Hoy:         {}", summary.due_today)?;
    writeln!(out, "  Total Alertas:    {}", summary.total)?;
    writeln!(out)?;

    if alerts.is_empty() {
        writeln!(out, "No hay alertas de vacunas pendientes")?;
        writeln!(out, "Todas las vacunas están al día")?;
        return Ok(());
    }

    let mut table = Table::new(["", "Estado", "Paciente", "DNI", "Vacuna", "Próxima Dosis"]);
    for alert in alerts {
        let status = alert.status_as_of(today);
        table.push_row([
            marker(status.highlight()).to_string(),
            status.label().unwrap_or_default().to_string(),
            alert.patient.name.clone(),
            alert.patient.dni.clone(),
            alert.vaccine.name.clone(),
            alert.next_dose.to_display_string(),
        ]);
    }
    table.write_to(out)?;

    writeln!(out)?;
    writeln!(out, "Información sobre las alertas")?;
    writeln!(out, "  - Las filas marcadas con !! indican vacunas vencidas")?;
    writeln!(out, "  - Las filas marcadas con * indican vacunas programadas para hoy")?;
    writeln!(out, "  - Contacte a los pacientes para programar las dosis pendientes")?;
    Ok(())
}

fn marker(highlight: Highlight) -> &'static str {
    match highlight {
        Highlight::Flagged => "!!",
        Highlight::Highlighted => "*",
        Highlight::Plain => "",
    }
}
