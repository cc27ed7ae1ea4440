/// Every user-facing message of the application.
///
/// Text lives in the `Display` implementation in `display.rs`; call sites only
/// pick a variant and its parameters.
#[derive(Debug, Clone)]
pub enum Message {
    // === REPORT MESSAGES ===
    ReportHeader(String, String), // start, end
    SummaryHeader,
    FlowHeader,
    SeriesEstimated,
    SeriesDerived(u64), // bookings attributed

    // === API MESSAGES ===
    FetchingMetrics(String), // space id
    FetchingHotelInfo,
    FetchingReservations,
    ApiRequest(String),             // url
    ApiCallFailed(String, String),  // endpoint, error
    ApiTokenMissing(String),        // env var
    NoMetricRows,
    ReservationsFetched(usize),
    ReservationSkipped(String),    // reason
    ReservationOutOfRange(String), // local date

    // === EXPORT MESSAGES ===
    JsonSaved(String), // path
    PdfGenerated(String),
    ExportFailed(String, String), // artifact, error
    ExportsIncomplete(String),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigModuleApi,
    ConfigModuleEstimation,
    PromptSelectModules,
    PromptApiUrl,
    PromptApiToken,
    PromptApiTimeout,
    PromptGmvPerBooking,
    PromptGrossPerBooking,

    // === ERROR MESSAGES ===
    RunFailed(String),
}
