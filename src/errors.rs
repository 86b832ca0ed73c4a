use crate::graph::NumCities;
use thiserror::Error;

/// Everything that can go wrong between reading an instance and writing a
/// result file. Construction-time validation fails fast with one of these;
/// there is no retry or partial recovery.
#[derive(Debug, Error)]
pub enum TspError {
    #[error("the number of cities must be greater than 0")]
    NonPositiveCityCount,

    #[error("malformed city count {0:?}; expected a positive integer")]
    MalformedCityCount(String),

    #[error("malformed coordinate {0:?}; expected the form (x, y) with non-negative integers")]
    MalformedCoordinate(String),

    #[error("declared {declared} cities but the instance contains {found} coordinate lines")]
    CityCountMismatch { declared: NumCities, found: NumCities },

    #[error("the distance matrix must be square")]
    NonSquareMatrix,

    #[error("instances with more than {max} cities exceed this solver's search state, got {got}")]
    TooManyCities { got: NumCities, max: NumCities },

    #[error("no closed tour exists under the positive-weight edge rule")]
    NoClosedTour,

    #[error("malformed tour file: {0}")]
    MalformedTour(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TspError>;
