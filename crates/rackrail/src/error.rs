use thiserror::Error;

#[derive(Error, Debug)]
pub enum GridError {
    #[error("Unknown grid profile: {0}")]
    UnknownProfile(String),

    #[error("Configuration I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSS value error: {0}")]
    Css(#[from] rrcss::CssError),

    #[error("Styling sink rejected {layer} styles: {reason}")]
    Sink { layer: &'static str, reason: String },

    #[error("Storage error: {0}")]
    Storage(String),
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, GridError>;
