//! Crate-wide error type.

use thiserror::Error as ThisError;

/// Errors produced while loading cities or searching for the best tour.
///
/// Every variant is fatal to the current optimization run: the search is
/// exhaustive, so there is no partial result to fall back on.
#[derive(Debug, ThisError)]
pub enum Error {
    /// The city set or one of its coordinates is unusable.
    #[error("invalid configuration: {0}")]
    Configuration(String),
    /// A route referenced a leg that the distance table does not hold.
    #[error("no distance recorded for leg {from} -> {to}")]
    MissingLeg {
        /// Name of the leg's starting city.
        from: String,
        /// Name of the leg's destination city.
        to: String,
    },
    /// Minimization was asked to choose from zero routes.
    #[error("no routes to evaluate")]
    EmptyRoutes,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result alias using the crate [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    pub fn missing_leg(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::MissingLeg {
            from: from.into(),
            to: to.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_message() {
        let err = Error::configuration("need at least 2 cities, got 1");
        assert_eq!(
            err.to_string(),
            "invalid configuration: need at least 2 cities, got 1"
        );
    }

    #[test]
    fn test_missing_leg_message() {
        let err = Error::missing_leg("A", "B");
        assert_eq!(err.to_string(), "no distance recorded for leg A -> B");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
