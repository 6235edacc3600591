use thiserror::Error;

#[derive(Error, Debug)]
pub enum RackRailError {
    #[error("Grid error: {0}")]
    Grid(#[from] rackrail::GridError),

    #[error("Grid configuration is invalid:\n  {}", .0.join("\n  "))]
    InvalidConfig(Vec<String>),

    #[error("Grid generation failed: {0}")]
    GenerationFailed(String),
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, RackRailError>;
