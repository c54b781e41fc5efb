use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Champion catalog unavailable: {0}")]
    CatalogUnavailable(String),

    #[error("HTTP {status} from {url}")]
    HttpStatus { status: u16, url: String },

    #[error("HTTP error: {0}")]
    HttpError(String),

    #[error("JSON parsing error: {0}")]
    JsonError(String),

    /// A page came back successfully but the summary node was not in it
    /// (typically the relay serving its own error page).
    #[error("Malformed matchup page: {0}")]
    MalformedPayload(String),

    #[error("Invalid selector: {0}")]
    InvalidSelector(String),

    #[error("Unknown champion: {0}")]
    UnknownChampion(String),

    #[error("Invalid lane '{0}'. Use one of: top, jungle, middle, bottom, support")]
    InvalidLane(String),

    #[error("Invalid tier: {0}")]
    InvalidTier(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Preferences error: {0}")]
    PrefsError(String),
}
