//! # dailyrep - daily GMV, gross revenue and booking count reports
//!
//! Pulls per-day aggregates for one property from the reporting API, lays
//! them onto a contiguous calendar, and renders them to the console, a JSON
//! snapshot and a PDF with charts.
//!
//! ## Features
//!
//! - **Zero-filled series**: every day of the requested range is present
//! - **Detailed mode**: hotel info, reservation list, checkout time slots and
//!   a room type to time slot flow diagram
//! - **Estimation fallback**: when no aggregates exist, series are estimated
//!   from reservations with flat per-booking amounts
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dailyrep::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
