//! # Errors
//! Errors emitted by skymap_core

/// Define all errors which may be raised by this crate.
use std::{error, fmt, io};

/// skymap specific result.
pub type SkymapResult<T> = Result<T, Error>;

/// Possible Errors which may be raised by this crate.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Numerical method did not converge within the algorithms limits.
    Convergence(String),

    /// Input or variable exceeded expected or allowed bounds, or arrays which must
    /// describe the same points have different lengths.
    ValueError(String),

    /// Error related to IO.
    IOError(String),
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Convergence(s) => {
                write!(f, "{}", s)
            }
            Error::ValueError(s) => {
                write!(f, "{}", s)
            }
            Error::IOError(s) => {
                write!(f, "{}", s)
            }
        }
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Error::IOError(error.to_string())
    }
}

impl From<std::num::ParseIntError> for Error {
    fn from(value: std::num::ParseIntError) -> Self {
        Error::ValueError(value.to_string())
    }
}

/// Fail with a [`Error::ValueError`] if the two coordinate arrays differ in length.
pub(crate) fn check_same_len(lon: &[f64], lat: &[f64]) -> SkymapResult<()> {
    if lon.len() != lat.len() {
        Err(Error::ValueError(format!(
            "Longitude and latitude arrays must have the same length, got {} and {}.",
            lon.len(),
            lat.len()
        )))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_same_len() {
        assert!(check_same_len(&[1.0, 2.0], &[3.0, 4.0]).is_ok());
        let err = check_same_len(&[1.0], &[3.0, 4.0]).unwrap_err();
        assert!(matches!(err, Error::ValueError(_)));
        assert!(err.to_string().contains("1 and 2"));
    }
}
