//! # Alert Status Classification
//!
//! Each alert falls into exactly one of three categories relative to a
//! reference day:
//!
//! | Status | Rule | Label | Highlight |
//! |--------|------|-------|-----------|
//! | [`AlertStatus::Overdue`] | next dose strictly before today | `Vencida` | flagged |
//! | [`AlertStatus::DueToday`] | next dose is today | `Hoy` | highlighted |
//! | [`AlertStatus::Upcoming`] | next dose strictly after today | none | none |
//!
//! Comparison is by [`CalendarDate`], which has already dropped any time of
//! day. [`classify`] reads the local date on every call; [`classify_as_of`]
//! takes the reference day explicitly.

use std::cmp::Ordering;

use crate::alert::Alert;
use crate::temporal::CalendarDate;

/// Where a next-dose date sits relative to the reference day.
///
/// Derived on demand; intentionally not `Serialize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlertStatus {
    /// The dose date has passed.
    Overdue,
    /// The dose is due on the reference day.
    DueToday,
    /// The dose date is still ahead.
    Upcoming,
}

/// Visual treatment of an alert row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Highlight {
    /// Strongest marking, for overdue doses.
    Flagged,
    /// Distinct marking, for doses due today.
    Highlighted,
    /// No special marking.
    Plain,
}

impl AlertStatus {
    /// Badge text shown next to the alert, if any.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            AlertStatus::Overdue => Some("Vencida"),
            AlertStatus::DueToday => Some("Hoy"),
            AlertStatus::Upcoming => None,
        }
    }

    /// Row treatment for this status.
    pub fn highlight(&self) -> Highlight {
        match self {
            AlertStatus::Overdue => Highlight::Flagged,
            AlertStatus::DueToday => Highlight::Highlighted,
            AlertStatus::Upcoming => Highlight::Plain,
        }
    }
}

/// Classify `next_dose` against an explicit reference day.
pub fn classify_as_of(next_dose: CalendarDate, today: CalendarDate) -> AlertStatus {
    match next_dose.cmp(&today) {
        Ordering::Less => AlertStatus::Overdue,
        Ordering::Equal => AlertStatus::DueToday,
        Ordering::Greater => AlertStatus::Upcoming,
    }
}

/// Classify `next_dose` against the current local date, read fresh.
pub fn classify(next_dose: CalendarDate) -> AlertStatus {
    classify_as_of(next_dose, CalendarDate::today())
}

/// Counts shown above the alert list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlertSummary {
    /// Alerts classified [`AlertStatus::Overdue`].
    pub overdue: usize,
    /// Alerts classified [`AlertStatus::DueToday`].
    pub due_today: usize,
    /// All alerts, regardless of status.
    pub total: usize,
}

impl AlertSummary {
    /// Tally `alerts` against an explicit reference day.
    pub fn as_of(alerts: &[Alert], today: CalendarDate) -> Self {
        alerts
            .iter()
            .map(|a| a.status_as_of(today))
            .fold(Self::default(), |mut acc, status| {
                acc.total += 1;
                match status {
                    AlertStatus::Overdue => acc.overdue += 1,
                    AlertStatus::DueToday => acc.due_today += 1,
                    AlertStatus::Upcoming => {}
                }
                acc
            })
    }

    /// Tally `alerts` against the current local date.
    pub fn now(alerts: &[Alert]) -> Self {
        Self::as_of(alerts, CalendarDate::today())
    }

    /// Alerts that are neither overdue nor due today.
    pub fn upcoming(&self) -> usize {
        self.total - self.overdue - self.due_today
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::alert::{PatientSummary, VaccineSummary};
    use crate::identity::{PatientId, VaccineId};
    use chrono::{Duration, NaiveDate};
    use proptest::prelude::*;

    /// Days from 1900-01-01 to roughly 2100.
    fn any_day() -> impl Strategy<Value = CalendarDate> {
        (0i64..73_000).prop_map(|offset| {
            let epoch = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap();
            CalendarDate::from(epoch + Duration::days(offset))
        })
    }

    fn shift(date: CalendarDate, days: i64) -> CalendarDate {
        CalendarDate::from(*date.as_naive() + Duration::days(days))
    }

    proptest! {
        /// Any date strictly before today is overdue.
        #[test]
        fn earlier_dates_are_overdue(today in any_day(), back in 1i64..5_000) {
            prop_assert_eq!(classify_as_of(shift(today, -back), today), AlertStatus::Overdue);
        }

        /// Any date strictly after today is upcoming.
        #[test]
        fn later_dates_are_upcoming(today in any_day(), ahead in 1i64..5_000) {
            prop_assert_eq!(classify_as_of(shift(today, ahead), today), AlertStatus::Upcoming);
        }

        /// Same year/month/day is due today whatever the time of day on the wire.
        #[test]
        fn same_day_with_any_time_is_due_today(
            today in any_day(),
            h in 0u32..24,
            m in 0u32..60,
            s in 0u32..60,
        ) {
            let raw = format!("{}T{h:02}:{m:02}:{s:02}", today);
            let parsed = CalendarDate::parse(&raw).unwrap();
            prop_assert_eq!(classify_as_of(parsed, today), AlertStatus::DueToday);
        }

        /// Summary counts match per-alert classification and partition the list.
        #[test]
        fn summary_partitions_alerts(
            today in any_day(),
            offsets in prop::collection::vec(-30i64..30, 0..40),
        ) {
            let alerts: Vec<Alert> = offsets
                .iter()
                .enumerate()
                .map(|(i, off)| Alert {
                    id: None,
                    patient: PatientSummary {
                        id: PatientId::new(i as u64),
                        name: String::new(),
                        dni: String::new(),
                    },
                    vaccine: VaccineSummary { id: VaccineId::new(1), name: String::new() },
                    next_dose: shift(today, *off),
                })
                .collect();

            let summary = AlertSummary::as_of(&alerts, today);
            let count = |want: AlertStatus| {
                alerts.iter().filter(|a| a.status_as_of(today) == want).count()
            };

            prop_assert_eq!(summary.overdue, count(AlertStatus::Overdue));
            prop_assert_eq!(summary.due_today, count(AlertStatus::DueToday));
            prop_assert_eq!(summary.upcoming(), count(AlertStatus::Upcoming));
            prop_assert_eq!(summary.total, alerts.len());
            prop_assert_eq!(summary.overdue + summary.due_today + summary.upcoming(), summary.total);
        }
    }
}
