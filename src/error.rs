use thiserror::Error;

/// Reasons a feature line can fail to decode
///
/// Every variant is fatal for the scan; the inspector wraps it with the file
/// name and line number before returning it.
#[derive(Debug, Error)]
pub enum InspectError {
    #[error("invalid feature JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("missing field: {0}")]
    MissingField(&'static str),

    #[error("properties.@history must be a JSON-encoded string")]
    HistoryNotString,

    #[error("invalid @history JSON: {0}")]
    InvalidHistory(#[source] serde_json::Error),
}
