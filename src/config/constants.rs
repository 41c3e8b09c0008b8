// Top Level Constants

/// Half-width of the neutral dead-zone for trend classification, in
/// percentage points. A month-over-month move inside ±5% reads as noise,
/// not a trend.
pub const NOISE_BAND_PCT: f64 = 5.0;

/// Filename the dashboard reads when `--snapshot` is not given. The backend
/// export and `make_demo_snapshot` both write this name.
pub const DEFAULT_SNAPSHOT_FILE: &str = "snapshot.json";

/// Cap for the operations table so a season of data stays readable.
pub const MAX_TRANSACTION_ROWS: usize = 25;
