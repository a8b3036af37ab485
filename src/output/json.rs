//! JSON serialization for sweep results.

use crate::result::SweepResult;

/// Serialize a sweep to a compact JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for
/// `SweepResult`).
pub fn to_json(sweep: &SweepResult) -> Result<String, serde_json::Error> {
    serde_json::to_string(sweep)
}

/// Serialize a sweep to a pretty-printed JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for
/// `SweepResult`).
pub fn to_json_pretty(sweep: &SweepResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(sweep)
}
