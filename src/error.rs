use thiserror::Error;

/// Errors raised for caller contract violations.
///
/// "Nothing to render" is deliberately *not* an error: pipeline entry points
/// return `Ok(None)` for empty input so the consumer can render a placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    /// A date string did not parse as `YYYY-MM-DD`.
    #[error("malformed date `{0}`: expected YYYY-MM-DD")]
    MalformedDate(String),

    /// A value key did not decode as `YYYY-MM-DD:plays`.
    #[error("malformed value key `{0}`: expected YYYY-MM-DD:plays")]
    MalformedValueKey(String),

    /// The supplied configuration is internally inconsistent.
    #[error("inconsistent chart configuration: {0}")]
    Config(String),
}
