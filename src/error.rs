use thiserror::Error;

/// Errors reported by the orbit simulator and its io layer.
#[derive(Debug, Error)]
pub enum SimError {
    /// A ship or config value is outside its valid range.
    #[error("invalid parameter `{name}`: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    /// The stability criterion was not met within `max_iterations`.
    #[error("orbit did not stabilise within {iterations} iterations")]
    DidNotConverge { iterations: u64 },

    /// Position or velocity became NaN/Inf.
    #[error("non-finite state at iteration {iteration}")]
    NonFiniteState { iteration: u64 },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid config file: {0}")]
    Config(#[from] toml::de::Error),
}

/// Reject zero, negative and non-finite values.
pub(crate) fn require_positive(name: &'static str, value: f64) -> Result<(), SimError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SimError::InvalidParameter { name, value })
    }
}
