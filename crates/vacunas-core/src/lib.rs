#![deny(missing_docs)]

//! # vacunas-core — Domain Types for the Vaccination Tracker
//!
//! Records exchanged with the vaccination backend and the one piece of
//! client-side logic that matters: classifying alerts by their next-dose
//! date. This crate performs no I/O; the HTTP gateway lives in
//! `vacunas-client`.
//!
//! ## Design Principles
//!
//! 1. **Newtype identifiers.** [`PatientId`], [`VaccineId`], [`ApplicationId`]
//!    and [`AlertId`] are distinct types wrapping the backend's numeric ids.
//!
//! 2. **Calendar dates, not timestamps.** Every date on the wire decodes into a
//!    [`CalendarDate`]. A time-of-day component is dropped at decode time, so
//!    nothing downstream can misclassify a same-day dose.
//!
//! 3. **Status is derived, never stored.** [`AlertStatus`] is computed from an
//!    alert's next-dose date on demand and has no serde representation.

pub mod alert;
pub mod application;
pub mod error;
pub mod identity;
pub mod patient;
pub mod status;
pub mod temporal;
pub mod vaccine;
mod wire;

// Re-export primary types at crate root for ergonomic imports.
pub use alert::{Alert, AlertKey, PatientSummary, VaccineSummary};
pub use application::{DoseApplication, NewDoseApplication};
pub use error::{DateParseError, ValidationError};
pub use identity::{AlertId, ApplicationId, PatientId, VaccineId};
pub use patient::{Gender, NewPatient, Patient};
pub use status::{classify, classify_as_of, AlertStatus, AlertSummary, Highlight};
pub use temporal::CalendarDate;
pub use vaccine::{NewVaccine, Vaccine};
