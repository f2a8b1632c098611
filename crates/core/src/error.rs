use thiserror::Error;

/// Top-level error type used across the application crates.
#[derive(Debug, Error)]
pub enum LuxError {
    #[error("config error: {0}")]
    Config(String),

    #[error("fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("ui error: {0}")]
    Ui(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T, E = LuxError> = std::result::Result<T, E>;

/// Why a single fetch produced no reading.
///
/// Every variant means "no new reading this tick"; callers log and move on.
/// `Clone` so the outcome can travel inside UI messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Unreachable host, timeout, transport failure or non-success status.
    #[error("network error: {0}")]
    Network(String),

    /// Body was not JSON, or `lux` was missing or not a number.
    #[error("decode error: {0}")]
    Decode(String),

    /// The sampler was built with a URL it cannot request.
    #[error("invalid endpoint URL: {0}")]
    InvalidUrl(String),
}

impl FetchError {
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_error_converts_into_lux_error() {
        let err: LuxError = FetchError::Decode("missing field `lux`".into()).into();
        assert!(matches!(err, LuxError::Fetch(FetchError::Decode(_))));
        assert_eq!(err.to_string(), "fetch error: decode error: missing field `lux`");
    }

    #[test]
    fn ui_error_message() {
        let err = LuxError::Ui("no compatible graphics adapter".into());
        assert_eq!(err.to_string(), "ui error: no compatible graphics adapter");
    }

    #[test]
    fn fetch_error_kind_helpers() {
        assert!(FetchError::Network("refused".into()).is_network());
        assert!(!FetchError::Network("refused".into()).is_decode());
        assert!(FetchError::Decode("eof".into()).is_decode());
    }
}
