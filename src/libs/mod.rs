//! Core library modules for dailyrep.
//!
//! ## Layout
//!
//! - **Input**: `calendar` (date range validation), `timeslot` (checkout
//!   time zone handling and slot classification)
//! - **Processing**: `series` (zero-filled daily series and the reservation
//!   fallback), `summary`, `flow`, `report`
//! - **Output**: `view` (console tables), `export` (JSON and PDF files),
//!   `pdf` and `chart` (PDF drawing), `formatter`
//! - **Infrastructure**: `config`, `data_storage`, `error`, `messages`

pub mod calendar;
pub mod chart;
pub mod config;
pub mod data_storage;
pub mod error;
pub mod export;
pub mod flow;
pub mod formatter;
pub mod messages;
pub mod pdf;
pub mod report;
pub mod series;
pub mod summary;
pub mod timeslot;
pub mod view;
