/// All errors that can occur while producing a smoke report.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A statistic was requested over zero values.
    #[error("cannot compute {op} of an empty input")]
    EmptyInput { op: &'static str },

    /// A configuration field holds a value the run cannot use.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// The simulation worker thread panicked.
    #[error("training simulation failed: {0}")]
    Simulation(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
