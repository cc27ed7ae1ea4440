//! Text of every [`Message`] variant.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === REPORT MESSAGES ===
            Message::ReportHeader(start, end) => format!("📊 DAILY REPORTS: {} to {}", start, end),
            Message::SummaryHeader => "📈 Summary Statistics".to_string(),
            Message::FlowHeader => "🔀 Checkouts by room type and time slot".to_string(),
            Message::SeriesEstimated => {
                "Figures below are estimated from reservation details (flat per-booking amounts), not reported revenue.".to_string()
            }
            Message::SeriesDerived(count) => format!("No aggregate rows returned; estimated series from {} reservation(s).", count),

            // === API MESSAGES ===
            Message::FetchingMetrics(space_id) => format!("Fetching daily metrics for space {}...", space_id),
            Message::FetchingHotelInfo => "Fetching hotel information...".to_string(),
            Message::FetchingReservations => "Fetching reservation details...".to_string(),
            Message::ApiRequest(url) => format!("GET {}", url),
            Message::ApiCallFailed(endpoint, error) => format!("Request to {} failed, continuing without its data: {}", endpoint, error),
            Message::ApiTokenMissing(var) => format!("No API credential configured. Set {} or run `dailyrep init`.", var),
            Message::NoMetricRows => "The metrics endpoint returned no rows; all days are zero-filled.".to_string(),
            Message::ReservationsFetched(count) => format!("Received {} reservation(s).", count),
            Message::ReservationSkipped(reason) => format!("Skipping reservation: {}", reason),
            Message::ReservationOutOfRange(date) => format!("Skipping reservation checked out on {} (outside the requested range)", date),

            // === EXPORT MESSAGES ===
            Message::JsonSaved(path) => format!("Reports saved to: {}", path),
            Message::PdfGenerated(path) => format!("PDF report generated: {}", path),
            Message::ExportFailed(artifact, error) => format!("Failed to write {}: {}", artifact, error),
            Message::ExportsIncomplete(formats) => format!("Report output incomplete, failed formats: {}", formats),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigModuleApi => "Reporting API settings".to_string(),
            Message::ConfigModuleEstimation => "Reservation-based estimation settings".to_string(),
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptApiUrl => "Enter the reporting API URL".to_string(),
            Message::PromptApiToken => "Enter the API bearer token (leave empty to keep the current one)".to_string(),
            Message::PromptApiTimeout => "Request timeout in seconds".to_string(),
            Message::PromptGmvPerBooking => "Estimated GMV per booking".to_string(),
            Message::PromptGrossPerBooking => "Estimated gross revenue per booking".to_string(),

            // === ERROR MESSAGES ===
            Message::RunFailed(error) => format!("Error: {}", error),
        };
        write!(f, "{}", text)
    }
}
