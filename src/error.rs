use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything the simulation core can reject.
///
/// All variants are precondition violations reported by the call that
/// introduced the bad input; the stepper itself never fails on valid state.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid mass {0}: must be finite and > 0")]
    InvalidMass(f64),

    #[error("invalid radius {0}: must be finite and > 0")]
    InvalidRadius(f64),

    /// Position or velocity with a NaN/inf component.
    #[error("{0} must be finite")]
    NonFinite(&'static str),

    #[error("invalid time step {0}: must be finite and >= 0")]
    InvalidTimeStep(f64),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// An id was registered twice. Ids are handed out by the world only,
    /// so this indicates a bug rather than bad input.
    #[error("duplicate particle id {0}")]
    DuplicateId(u64),

    #[error("config parse error: {0}")]
    Config(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_value() {
        let msg = Error::InvalidMass(-2.0).to_string();
        assert!(msg.contains("mass"));
        assert!(msg.contains("-2"));
        assert!(Error::NonFinite("velocity").to_string().contains("velocity"));
    }

    #[test]
    fn serde_errors_convert() {
        let parse: std::result::Result<u32, _> = serde_json::from_str("not json");
        let err: Error = parse.unwrap_err().into();
        assert!(matches!(err, Error::Config(_)));
    }
}
